//! Command-line arguments.

use clap::Parser;

/// Generate mail aliases from a Google Workspace directory.
#[derive(Parser, Debug)]
#[command(name = "gwcontacts", version, about)]
pub struct Cli {
    /// Output file, `-` for standard output
    #[arg(long, value_name = "PATH", default_value = "-")]
    pub output_file: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "info" } else { "error" }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gwcontacts"]).unwrap();
        assert_eq!(cli.output_file, "-");
        assert!(!cli.verbose);
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_flags() {
        let cli =
            Cli::try_parse_from(["gwcontacts", "-v", "--output-file", "/tmp/aliases"]).unwrap();
        assert_eq!(cli.output_file, "/tmp/aliases");
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["gwcontacts", "--page-size", "10"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
