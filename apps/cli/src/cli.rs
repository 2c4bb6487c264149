use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Export and organize Apple Notes content into folders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all notes to structured files
    Export {
        /// Directory where notes will be exported
        #[arg(long, default_value = "notes-export")]
        output: PathBuf,
        /// Output file format
        #[arg(long, default_value = "markdown", value_parser = ["markdown", "html", "text"])]
        format: String,
        /// Print a preview of one rendered note instead of writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the suggested-folder summary for the whole collection
    Assess,
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_defaults() {
        let cli = Cli::parse_from(["noteport", "export"]);
        match cli.command {
            Commands::Export {
                output,
                format,
                dry_run,
            } => {
                assert_eq!(output, PathBuf::from("notes-export"));
                assert_eq!(format, "markdown");
                assert!(!dry_run);
            }
            other => panic!("expected export command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["noteport", "export", "--format", "pdf"]).is_err());
    }
}
