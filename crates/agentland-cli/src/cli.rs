//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  agentland-docs init
  agentland-docs init --force
  agentland-docs init --no-configure";

/// agentland-docs - Documentation templates for spec-driven development.
#[derive(Debug, Parser)]
#[command(name = "agentland-docs")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Template directory to copy from
    #[arg(long, global = true, env = "AGENTLAND_TEMPLATES")]
    pub templates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Status lines (default)
    Text,
    /// One JSON object per line
    Json,
    /// Written paths only
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy documentation templates to the current directory
    Init(InitArgs),
}

/// Arguments for the init command.
#[derive(Debug, Clone, Copy, Default, Parser)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Skip the interactive configuration step
    #[arg(long)]
    pub no_configure: bool,
}

/// Resolve an argument list (program name first) into a command.
///
/// `help`, `--help`, `-h` and `--version` come back as errors whose
/// `exit_code()` is 0; unknown commands come back as errors with a non-zero
/// code. The caller decides when to exit.
pub fn resolve<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_arguments() {
        let cli = resolve(["agentland-docs"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_init_flags() {
        let cli = resolve(["agentland-docs", "init", "--force", "--no-configure"]).unwrap();
        match cli.command {
            Some(Command::Init(args)) => {
                assert!(args.force);
                assert!(args.no_configure);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_init_defaults() {
        let cli = resolve(["agentland-docs", "init"]).unwrap();
        match cli.command {
            Some(Command::Init(args)) => {
                assert!(!args.force);
                assert!(!args.no_configure);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_help_variants_exit_zero() {
        for args in [
            vec!["agentland-docs", "help"],
            vec!["agentland-docs", "--help"],
            vec!["agentland-docs", "-h"],
        ] {
            let err = resolve(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_unknown_command_fails() {
        let err = resolve(["agentland-docs", "deploy"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
