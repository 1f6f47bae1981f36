//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "app-core")]
#[command(version, about = "Load service settings and bootstrap logging", long_about = None)]
pub struct Cli {
    /// Path to the YAML config file (falls back to CONFIG_PATH)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["app-core", "--config", "configs/local.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("configs/local.yaml")));
    }

    #[test]
    fn test_config_flag_with_equals() {
        let cli = Cli::try_parse_from(["app-core", "--config=/etc/app.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/app.yaml")));
    }

    #[test]
    fn test_no_flag() {
        let cli = Cli::try_parse_from(["app-core"]).unwrap();
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["app-core", "--cfg", "x.yaml"]).is_err());
    }
}
