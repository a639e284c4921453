//! Interactive line-mode board.
//!
//! # Responsibility
//! - Play the view layer over `projectboard_core`: gather input, request
//!   mutations, re-render both lists from every snapshot notification.
//! - Keep all board rules inside the core; this binary only parses lines
//!   and prints state.

use log::warn;
use projectboard_core::{
    default_log_level, init_logging, BoardService, Project, ProjectId, ProjectStatus,
    ProjectStore,
};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "board> ";
const SHORT_ID_LEN: usize = 8;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add {
        title: String,
        description: String,
        people: i64,
    },
    Move {
        target: ProjectStatus,
        id_prefix: String,
    },
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Empty,
    Unknown(String),
    /// `add` needs exactly `title | description | people`.
    MalformedAdd,
    PeopleNotANumber(String),
    MissingId(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`, try `help`"),
            Self::MalformedAdd => {
                write!(f, "usage: add <title> | <description> | <people>")
            }
            Self::PeopleNotANumber(value) => {
                write!(f, "`{value}` is not a number of people")
            }
            Self::MissingId(verb) => write!(f, "usage: {verb} <id-prefix>"),
        }
    }
}

fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "add" => {
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            let [title, description, people] = parts.as_slice() else {
                return Err(ParseError::MalformedAdd);
            };
            let people: i64 = people
                .parse()
                .map_err(|_| ParseError::PeopleNotANumber((*people).to_string()))?;
            Ok(Command::Add {
                title: (*title).to_string(),
                description: (*description).to_string(),
                people,
            })
        }
        "finish" | "activate" => {
            if rest.is_empty() {
                return Err(ParseError::MissingId(if verb == "finish" {
                    "finish"
                } else {
                    "activate"
                }));
            }
            let target = if verb == "finish" {
                ProjectStatus::Finished
            } else {
                ProjectStatus::Active
            };
            Ok(Command::Move {
                target,
                id_prefix: rest.to_string(),
            })
        }
        "list" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Resolves a unique id prefix against the current snapshot.
///
/// Ambiguous and unmatched prefixes both resolve to `None`; the caller
/// treats that like any unknown id, a silent no-op on the board.
fn resolve_id(snapshot: &[Project], prefix: &str) -> Option<ProjectId> {
    let prefix = prefix.to_ascii_lowercase();
    let mut matched = None;
    for project in snapshot {
        if project.id.to_string().starts_with(&prefix) {
            if matched.is_some() {
                return None;
            }
            matched = Some(project.id);
        }
    }
    matched
}

fn format_assignment(people: u32) -> String {
    if people == 1 {
        "1 person assigned".to_string()
    } else {
        format!("{people} people assigned")
    }
}

fn render_list(out: &mut String, header: &str, projects: &[&Project]) {
    out.push_str(header);
    out.push('\n');
    if projects.is_empty() {
        out.push_str("  (empty)\n");
        return;
    }
    for project in projects {
        let id = project.id.to_string();
        out.push_str(&format!(
            "  {}  {} - {}\n      {}\n",
            &id[..SHORT_ID_LEN],
            project.title,
            format_assignment(project.people),
            project.description
        ));
    }
}

/// Renders both lists from one snapshot, active first.
fn render_board(snapshot: &[Project]) -> String {
    let active: Vec<&Project> = snapshot
        .iter()
        .filter(|p| p.is_in(ProjectStatus::Active))
        .collect();
    let finished: Vec<&Project> = snapshot
        .iter()
        .filter(|p| p.is_in(ProjectStatus::Finished))
        .collect();

    let mut out = String::new();
    render_list(&mut out, "ACTIVE PROJECTS", &active);
    render_list(&mut out, "FINISHED PROJECTS", &finished);
    out
}

fn print_help() {
    println!("commands:");
    println!("  add <title> | <description> | <people>   admit a project");
    println!("  finish <id-prefix>                       move to the finished list");
    println!("  activate <id-prefix>                     move back to the active list");
    println!("  list                                     render both lists");
    println!("  quit                                     leave");
}

fn run_command(service: &BoardService, command: Command) -> bool {
    match command {
        Command::Add {
            title,
            description,
            people,
        } => match service.submit(&title, &description, people) {
            Ok(_) => {}
            Err(err) => println!("{err}"),
        },
        Command::Move { target, id_prefix } => {
            let snapshot = match service.snapshot() {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    println!("{err}");
                    return true;
                }
            };
            match resolve_id(&snapshot, &id_prefix) {
                Some(id) => match service.move_to(id, target) {
                    // A committed move already re-rendered via the
                    // subscription; nothing to add here.
                    Ok(_) => {}
                    Err(err) => println!("{err}"),
                },
                None => println!("no single project matches `{id_prefix}`"),
            }
        }
        Command::List => match service.snapshot() {
            Ok(snapshot) => print!("{}", render_board(&snapshot)),
            Err(err) => println!("{err}"),
        },
        Command::Help => print_help(),
        Command::Quit => return false,
    }
    true
}

fn init_logging_from_env() {
    // Logging is opt-in for the CLI; without a directory the core stays
    // silent and the terminal belongs to the board.
    if let Ok(log_dir) = std::env::var("PROJECTBOARD_LOG_DIR") {
        let level = std::env::var("PROJECTBOARD_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(message) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }
}

fn main() {
    init_logging_from_env();

    let service = BoardService::new(ProjectStore::new().into_shared());
    let subscribed = service.subscribe(Box::new(|snapshot| {
        print!("{}", render_board(snapshot));
    }));
    if subscribed.is_err() {
        // Cannot happen on a fresh store, but the board is unusable
        // without its renderer.
        eprintln!("failed to attach renderer");
        return;
    }

    println!(
        "projectboard {} — type `help` for commands",
        projectboard_core::core_version()
    );

    let stdin = io::stdin();
    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match parse_command(&line) {
            Ok(command) => {
                if !run_command(&service, command) {
                    break;
                }
            }
            Err(ParseError::Empty) => {}
            Err(err) => {
                warn!("event=command_rejected reason=parse");
                println!("{err}");
            }
        }
    }
}
