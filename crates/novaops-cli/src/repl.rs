//! Interactive REPL (Read-Eval-Print Loop) for the NovaOps Commander.

use std::path::{Path, PathBuf};

use novaops_incidents::IncidentError;
use novaops_tools::Commander;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Result as RlResult};
use tracing::{debug, info};

use crate::commands::{self, format_incident};

/// Help information for a command.
pub struct CommandHelp {
    /// Command name (e.g., "incident").
    pub name: &'static str,
    /// Command aliases.
    pub aliases: &'static [&'static str],
    /// Usage syntax.
    pub usage: &'static str,
    /// Brief one-line description.
    pub brief: &'static str,
}

/// Static help entries for all commands.
static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "incident",
        aliases: &["i"],
        usage: "/incident <severity> <title>",
        brief: "Create an incident (severity: low, medium, high, critical)",
    },
    CommandHelp {
        name: "status",
        aliases: &["s"],
        usage: "/status <id> <status>",
        brief: "Move an incident to open, investigating, mitigated, resolved or closed",
    },
    CommandHelp {
        name: "list",
        aliases: &["ls", "l"],
        usage: "/list",
        brief: "List incidents created this session",
    },
    CommandHelp {
        name: "analyze",
        aliases: &["a"],
        usage: "/analyze <query>",
        brief: "Search incident history for similar incidents",
    },
    CommandHelp {
        name: "rca",
        aliases: &[],
        usage: "/rca <id>",
        brief: "Root cause analysis of a historical incident",
    },
    CommandHelp {
        name: "health",
        aliases: &[],
        usage: "/health",
        brief: "Health check across api, database, cache and queue",
    },
    CommandHelp {
        name: "dashboard",
        aliases: &["d"],
        usage: "/dashboard",
        brief: "Show the dashboard",
    },
    CommandHelp {
        name: "tools",
        aliases: &[],
        usage: "/tools",
        brief: "List sub-agents and their tools",
    },
    CommandHelp {
        name: "help",
        aliases: &["h", "?"],
        usage: "/help",
        brief: "Show this help",
    },
    CommandHelp {
        name: "quit",
        aliases: &["q", "exit"],
        usage: "/quit",
        brief: "Exit the REPL",
    },
];

/// Tab completion for slash commands.
struct CommandCompleter;

impl CommandCompleter {
    const COMMANDS: &'static [&'static str] = &[
        "/analyze", "/dashboard", "/health", "/help", "/incident", "/list", "/quit", "/rca",
        "/status", "/tools",
    ];
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let prefix = &line[..pos];
        let matches: Vec<Pair> = Self::COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Slash commands available in the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Create an incident
    Incident { severity: String, title: String },
    /// Update an incident's status
    Status { id: String, status: String },
    /// List incidents
    List,
    /// Similarity search
    Analyze(String),
    /// Root cause analysis
    Rca(String),
    /// Health sweep
    Health,
    /// Dashboard snapshot
    Dashboard,
    /// Roster and tools
    Tools,
    /// Show help
    Help,
    /// Quit the REPL
    Quit,
    /// Unknown command or bad usage, with a message for the operator
    Unknown(String),
    /// Plain text (not a command)
    Text(String),
}

impl ReplCommand {
    /// Parses input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        let Some(stripped) = input.strip_prefix('/') else {
            return ReplCommand::Text(input.to_string());
        };

        let parts: Vec<&str> = stripped.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let arg = parts
            .get(1)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match cmd.as_str() {
            "incident" | "i" => match arg.as_deref().and_then(split_first_word) {
                Some((severity, title)) => ReplCommand::Incident {
                    severity: severity.to_string(),
                    title: title.to_string(),
                },
                None => usage("incident"),
            },
            "status" | "s" => match arg.as_deref().and_then(split_first_word) {
                Some((id, status)) => ReplCommand::Status {
                    id: id.to_string(),
                    status: status.to_string(),
                },
                None => usage("status"),
            },
            "list" | "ls" | "l" => ReplCommand::List,
            "analyze" | "a" => arg.map(ReplCommand::Analyze).unwrap_or_else(|| usage("analyze")),
            "rca" => arg.map(ReplCommand::Rca).unwrap_or_else(|| usage("rca")),
            "health" => ReplCommand::Health,
            "dashboard" | "d" => ReplCommand::Dashboard,
            "tools" => ReplCommand::Tools,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(format!("Unknown command: /{}. Type /help for commands.", cmd)),
        }
    }
}

/// Splits "first rest..." into two non-empty parts.
fn split_first_word(s: &str) -> Option<(&str, &str)> {
    let (first, rest) = s.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some((first, rest))
}

fn usage(name: &str) -> ReplCommand {
    let usage = find_command_help(name).map(|h| h.usage).unwrap_or("/help");
    ReplCommand::Unknown(format!("Usage: {}", usage))
}

/// Finds help for a command by name or alias.
fn find_command_help(name: &str) -> Option<&'static CommandHelp> {
    let name_lower = name.to_lowercase();
    COMMAND_HELP
        .iter()
        .find(|h| h.name == name_lower || h.aliases.contains(&name_lower.as_str()))
}

fn print_help() {
    println!("NovaOps Commander - DevOps command center");
    println!();
    for help in COMMAND_HELP {
        println!("  {:32} {}", help.usage, help.brief);
    }
    println!();
    println!("Incidents live in memory for the duration of the session.");
}

/// REPL state
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    commander: Commander,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL around `commander`, keeping history in `state_dir`.
    pub fn new(state_dir: &Path, commander: Commander) -> RlResult<Self> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CommandCompleter));

        let history_path = match std::fs::create_dir_all(state_dir) {
            Ok(()) => Some(state_dir.join("repl_history.txt")),
            Err(e) => {
                debug!(error = %e, "History disabled; state directory unavailable");
                None
            }
        };
        if let Some(path) = history_path.as_ref().filter(|p| p.exists()) {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            commander,
            history_path,
        })
    }

    /// Runs the REPL loop.
    pub fn run(&mut self) -> RlResult<()> {
        println!("NovaOps Commander v{}", env!("CARGO_PKG_VERSION"));
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            match self.editor.readline("novaops> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(&line)?;

                    let cmd = ReplCommand::parse(&line);
                    debug!(?cmd, "Parsed command");

                    match handle_command(&self.commander, cmd) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.history_path {
            let _ = self.editor.save_history(path);
        }

        println!("NovaOps Commander shutting down. Goodbye!");
        Ok(())
    }

    /// Get the Commander driving this session.
    pub fn commander(&self) -> &Commander {
        &self.commander
    }
}

/// Handles a REPL command. Returns Ok(true) if should quit.
fn handle_command(commander: &Commander, cmd: ReplCommand) -> commands::Result<bool> {
    match cmd {
        ReplCommand::Incident { severity, title } => {
            let incident = commander.store().create(
                title.as_str(),
                &severity,
                format!("Incident created via REPL: {}", title),
            );
            println!("Created {}", format_incident(&incident));
        }
        ReplCommand::Status { id, status } => {
            match commander.store().update_status(&id, &status) {
                Ok(incident) => {
                    info!(incident_id = %id, status = %incident.status, "Status updated from REPL");
                    println!("Incident {} updated to '{}'.", id, incident.status);
                }
                Err(e @ IncidentError::InvalidStatus { .. }) => println!("{}", e),
                Err(IncidentError::NotFound(_)) => println!("No incident found with ID '{}'.", id),
            }
        }
        ReplCommand::List => {
            let incidents = commander.store().list_all();
            if incidents.is_empty() {
                println!("No incidents.");
            }
            for incident in &incidents {
                println!("  {}", format_incident(incident));
            }
        }
        ReplCommand::Analyze(query) => commands::cmd_analyze(commander, &query)?,
        ReplCommand::Rca(id) => commands::cmd_root_cause(&id)?,
        ReplCommand::Health => commands::cmd_health()?,
        ReplCommand::Dashboard => commands::cmd_dashboard(commander)?,
        ReplCommand::Tools => commands::cmd_tools(commander)?,
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => return Ok(true),
        ReplCommand::Unknown(message) => println!("{}", message),
        ReplCommand::Text(text) => {
            println!(
                "Natural-language requests need the agent model. Try /analyze {}",
                text
            );
        }
    }
    Ok(false)
}
