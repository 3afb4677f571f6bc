//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::STATE_DIR_ENV;

/// Version with git hash and build date, e.g. "0.1.0 (abc1234, 2026-10-16)".
pub fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("NOVAOPS_GIT_HASH");
    const BUILD_DATE: &str = env!("NOVAOPS_BUILD_DATE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// NovaOps - AI-powered DevOps command center
#[derive(Parser, Debug)]
#[command(name = "novaops")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to state directory (REPL history)
    #[arg(short, long, env = STATE_DIR_ENV)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the interactive Commander session
    Run,

    /// Run a health check across api, database, cache and queue
    Health,

    /// Show a performance metric for one service
    Metrics {
        /// Service name
        service: String,

        /// Metric type (cpu, memory, latency, throughput)
        #[arg(short, long, default_value = "cpu")]
        metric: String,
    },

    /// Create a new incident
    Incident {
        /// Short incident title
        title: String,

        /// Severity: low, medium, high, critical
        #[arg(default_value = "medium")]
        severity: String,

        /// Detailed description (defaults to a note naming the title)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Search incident history for similar incidents
    Analyze {
        /// Free-text query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Run root cause analysis on a historical incident
    RootCause {
        /// Catalog incident ID (e.g. INC-001)
        id: String,
    },

    /// Generate a pseudo-embedding for text
    Embed {
        /// Text to embed
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show the current dashboard state
    Dashboard,

    /// Broadcast a voice alert
    Voice {
        /// Alert message
        message: String,

        /// Severity: info, warning, critical
        #[arg(default_value = "info")]
        severity: String,
    },

    /// List sub-agents and their tools
    Tools,

    /// Show version information
    Version,
}

impl Cli {
    /// Returns the explicitly requested state directory, if any.
    pub fn state_dir(&self) -> Option<PathBuf> {
        self.state_dir.clone()
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["novaops"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_incident_defaults() {
        let cli = Cli::parse_from(["novaops", "incident", "API gateway timeout"]);
        assert_eq!(
            cli.command,
            Some(Commands::Incident {
                title: "API gateway timeout".to_string(),
                severity: "medium".to_string(),
                description: None,
            })
        );
    }

    #[test]
    fn test_cli_parse_incident_full() {
        let cli = Cli::parse_from([
            "novaops",
            "incident",
            "Disk full",
            "critical",
            "--description",
            "node-3 at 100%",
        ]);
        match cli.command {
            Some(Commands::Incident { severity, description, .. }) => {
                assert_eq!(severity, "critical");
                assert_eq!(description.as_deref(), Some("node-3 at 100%"));
            }
            _ => panic!("Expected Incident command"),
        }
    }

    #[test]
    fn test_cli_parse_analyze_joins_words() {
        let cli = Cli::parse_from(["novaops", "analyze", "database", "replication", "lag"]);
        match cli.command {
            Some(Commands::Analyze { query }) => assert_eq!(query.join(" "), "database replication lag"),
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parse_analyze_requires_query() {
        assert!(Cli::try_parse_from(["novaops", "analyze"]).is_err());
    }

    #[test]
    fn test_cli_parse_metrics() {
        let cli = Cli::parse_from(["novaops", "metrics", "api", "--metric", "latency"]);
        assert_eq!(
            cli.command,
            Some(Commands::Metrics {
                service: "api".to_string(),
                metric: "latency".to_string(),
            })
        );
    }

    #[test]
    fn test_cli_parse_root_cause() {
        let cli = Cli::parse_from(["novaops", "root-cause", "INC-002"]);
        assert_eq!(cli.command, Some(Commands::RootCause { id: "INC-002".to_string() }));
    }

    #[test]
    fn test_cli_parse_voice_default_severity() {
        let cli = Cli::parse_from(["novaops", "voice", "Critical alert on API"]);
        match cli.command {
            Some(Commands::Voice { severity, .. }) => assert_eq!(severity, "info"),
            _ => panic!("Expected Voice command"),
        }
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["novaops", "-vv", "health"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
