// txguard/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "txguard")]
#[command(about = "Validates banking transaction CSV files against fixed data-quality rules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding txguard.yaml (missing file = defaults)
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔎 Validates a CSV file and prints the report
    Validate {
        /// CSV file to validate
        file: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// 🌐 Serves the validation API (GET /health, POST /validate)
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides config)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// 📋 Lists the rules in evaluation order
    Rules,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_validate_defaults() -> Result<()> {
        let args = Cli::parse_from(["txguard", "validate", "ledger.csv"]);
        assert_eq!(args.config_dir.to_string_lossy(), ".");
        match args.command {
            Commands::Validate { file, format } => {
                assert_eq!(file.to_string_lossy(), "ledger.csv");
                assert_eq!(format, OutputFormat::Json);
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_table() -> Result<()> {
        let args = Cli::parse_from([
            "txguard",
            "validate",
            "ledger.csv",
            "--format",
            "table",
            "--config-dir",
            "/etc/txguard",
        ]);
        assert_eq!(args.config_dir.to_string_lossy(), "/etc/txguard");
        match args.command {
            Commands::Validate { format, .. } => {
                assert_eq!(format, OutputFormat::Table);
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_serve() -> Result<()> {
        let args = Cli::parse_from(["txguard", "serve", "-p", "9000"]);
        match args.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
                Ok(())
            }
            _ => bail!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["txguard", "validate", "a.csv", "--format", "xml"]).is_err());
    }
}
