//! Logger factory: one fixed tracing policy per environment.
//!
//! | env   | format | level |
//! |-------|--------|-------|
//! | local | text   | debug |
//! | dev   | json   | debug |
//! | prod  | json   | info  |
//!
//! Every policy records target, file and line number. The returned
//! [`Logger`] is not installed globally; callers enter it explicitly.

use std::io::{self, IsTerminal};

use tracing::dispatcher::{self, DefaultGuard};
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Environment;

/// Output encoding of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line text.
    Text,
    /// One JSON object per line.
    Json,
}

/// Structured logging handle built for a single environment.
#[derive(Clone)]
pub struct Logger {
    env: Environment,
    format: LogFormat,
    level: Level,
    call_site: bool,
    dispatch: Dispatch,
}

/// Fixed output settings for one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogPolicy {
    format: LogFormat,
    level: Level,
    /// Record target, file and line on every event.
    call_site: bool,
}

/// Build the logger for `env`, writing to standard output.
pub fn build_logger(env: Environment) -> Logger {
    let ansi = io::stdout().is_terminal();
    Logger::assemble(env, io::stdout, ansi)
}

/// Build the logger for an environment tag that the caller has already
/// validated.
///
/// # Panics
///
/// Panics if `tag` is not an accepted environment. Tags coming from
/// configuration are checked during loading, so reaching the panic means a
/// caller skipped validation.
pub fn build_logger_for_tag(tag: &str) -> Logger {
    match tag.parse::<Environment>() {
        Ok(env) => build_logger(env),
        Err(err) => panic!("unsupported environment: {err}"),
    }
}

impl Logger {
    /// Build the logger for `env` against an arbitrary writer. ANSI colours
    /// are disabled.
    pub fn with_writer<W>(env: Environment, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::assemble(env, make_writer, false)
    }

    fn assemble<W>(env: Environment, make_writer: W, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let LogPolicy {
            format,
            level,
            call_site,
        } = policy(env);

        let builder = fmt()
            .with_writer(make_writer)
            .with_max_level(level)
            .with_target(call_site)
            .with_file(call_site)
            .with_line_number(call_site);

        let dispatch = match format {
            LogFormat::Text => Dispatch::new(builder.with_ansi(ansi).finish()),
            LogFormat::Json => Dispatch::new(builder.json().with_ansi(false).finish()),
        };

        Self {
            env,
            format,
            level,
            call_site,
            dispatch,
        }
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Most verbose level that is emitted.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether events carry their source file and line.
    pub fn includes_call_site(&self) -> bool {
        self.call_site
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Make this logger the current thread's default until the guard drops.
    pub fn enter(&self) -> DefaultGuard {
        dispatcher::set_default(&self.dispatch)
    }

    /// Run `f` with this logger as the current default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("env", &self.env)
            .field("format", &self.format)
            .field("level", &self.level)
            .field("call_site", &self.call_site)
            .finish_non_exhaustive()
    }
}

fn policy(env: Environment) -> LogPolicy {
    let (format, level, call_site) = match env {
        Environment::Local => (LogFormat::Text, Level::DEBUG, true),
        Environment::Dev => (LogFormat::Json, Level::DEBUG, true),
        Environment::Prod => (LogFormat::Json, Level::INFO, true),
    };
    LogPolicy {
        format,
        level,
        call_site,
    }
}
