//! Interactive terminal editor over an outline store.
//!
//! Reads one command per line from stdin. Items are addressed by the
//! 1-based dot paths shown by `show` (`2.1` is the first child of the
//! second root item). Paths are resolved to ids when the command runs,
//! so the store only ever sees id-based actions.

use std::io::{self, BufRead, Write};
use std::str::SplitWhitespace;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Action, Item};
use crate::render::render_outline;
use crate::store::Store;

const HELP: &str = "\
Commands:
  add - <name>       append a new item at the top level
  add <path> <name>  append a new item under the item at <path>
  rm <path>          remove the item (and everything under it)
  up <path>          swap the item with its previous sibling
  down <path>        swap the item with its next sibling
  nest <path>        give the item an empty sublist
  flat <path>        remove the item's sublist, children included
  show               print the outline
  json               print the outline as JSON
  help               show this help
  quit               leave the editor";

/// Command parse or resolution failure. Reported to the user; the
/// session continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("missing item path")]
    MissingPath,
    #[error("invalid item path: {0}")]
    InvalidPath(String),
    #[error("no item at path {0}")]
    NoSuchItem(String),
    #[error("item name must not be empty")]
    EmptyName,
}

/// A parsed editor command. Paths are still positional here; they are
/// resolved against the current outline when the command executes.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add {
        parent: Option<Vec<usize>>,
        name: String,
    },
    Remove(Vec<usize>),
    MoveUp(Vec<usize>),
    MoveDown(Vec<usize>),
    Nest(Vec<usize>),
    Flatten(Vec<usize>),
    Show,
    Json,
    Help,
    Quit,
}

/// Run the editor loop until `quit` or end of input.
pub fn run(store: &Store) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Outline editor. Type `help` for commands, `quit` to leave.");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = execute(store, command) {
                    println!("error: {}", e);
                }
            }
            Err(e) => println!("error: {}", e),
        }
    }
    Ok(())
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "add" => {
            let target = words.next().ok_or(CommandError::MissingPath)?;
            let parent = if target == "-" {
                None
            } else {
                Some(parse_path(target)?)
            };
            let name = words.collect::<Vec<_>>().join(" ");
            if name.trim().is_empty() {
                return Err(CommandError::EmptyName);
            }
            Command::Add { parent, name }
        }
        "rm" => Command::Remove(take_path(&mut words)?),
        "up" => Command::MoveUp(take_path(&mut words)?),
        "down" => Command::MoveDown(take_path(&mut words)?),
        "nest" => Command::Nest(take_path(&mut words)?),
        "flat" => Command::Flatten(take_path(&mut words)?),
        "show" | "ls" => Command::Show,
        "json" => Command::Json,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn execute(store: &Store, command: Command) -> Result<(), CommandError> {
    match command {
        Command::Add { parent, name } => {
            let parent_id = match parent {
                None => None,
                Some(path) => Some(resolve(store, &path)?),
            };
            store.dispatch(Action::AddItem { parent_id, name });
            print_outline(store);
        }
        Command::Remove(path) => dispatch_at(store, &path, |id| Action::RemoveItem { id })?,
        Command::MoveUp(path) => dispatch_at(store, &path, |id| Action::MoveUp { id })?,
        Command::MoveDown(path) => dispatch_at(store, &path, |id| Action::MoveDown { id })?,
        Command::Nest(path) => dispatch_at(store, &path, |id| Action::AddSublist { id })?,
        Command::Flatten(path) => dispatch_at(store, &path, |id| Action::RemoveSublist { id })?,
        Command::Show => print_outline(store),
        Command::Json => {
            let json = serde_json::to_string_pretty(&store.snapshot())
                .expect("outline serializes to JSON");
            println!("{}", json);
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
    Ok(())
}

fn dispatch_at(
    store: &Store,
    path: &[usize],
    action: impl FnOnce(Uuid) -> Action,
) -> Result<(), CommandError> {
    let id = resolve(store, path)?;
    store.dispatch(action(id));
    print_outline(store);
    Ok(())
}

fn resolve(store: &Store, path: &[usize]) -> Result<Uuid, CommandError> {
    resolve_path(&store.snapshot(), path).ok_or_else(|| CommandError::NoSuchItem(display_path(path)))
}

/// Resolve a 1-based dot path to the id of the item it names.
fn resolve_path(outline: &[Item], path: &[usize]) -> Option<Uuid> {
    let (first, rest) = path.split_first()?;
    let item = outline.get(first - 1)?;
    if rest.is_empty() {
        Some(item.id())
    } else {
        resolve_path(item.children()?, rest)
    }
}

fn take_path(words: &mut SplitWhitespace) -> Result<Vec<usize>, CommandError> {
    parse_path(words.next().ok_or(CommandError::MissingPath)?)
}

fn parse_path(text: &str) -> Result<Vec<usize>, CommandError> {
    text.split('.')
        .map(|part| {
            part.parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| CommandError::InvalidPath(text.to_string()))
        })
        .collect()
}

fn display_path(path: &[usize]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

fn print_outline(store: &Store) {
    let outline = store.snapshot();
    if outline.is_empty() {
        println!("(empty outline)");
    } else {
        print!("{}", render_outline(&outline));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_add() {
        let command = parse_line("add - Weekly review\n").expect("parses");
        assert_eq!(
            command,
            Some(Command::Add {
                parent: None,
                name: "Weekly review".to_string()
            })
        );
    }

    #[test]
    fn parses_nested_add_with_dot_path() {
        let command = parse_line("add 2.1 Milk").expect("parses");
        assert_eq!(
            command,
            Some(Command::Add {
                parent: Some(vec![2, 1]),
                name: "Milk".to_string()
            })
        );
    }

    #[test]
    fn rejects_empty_names() {
        assert_eq!(parse_line("add -"), Err(CommandError::EmptyName));
        assert_eq!(parse_line("add 1  "), Err(CommandError::EmptyName));
    }

    #[test]
    fn rejects_zero_and_garbage_path_segments() {
        assert_eq!(
            parse_line("rm 1.0"),
            Err(CommandError::InvalidPath("1.0".to_string()))
        );
        assert_eq!(
            parse_line("up one"),
            Err(CommandError::InvalidPath("one".to_string()))
        );
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        assert_eq!(
            parse_line("rename 1 X"),
            Err(CommandError::UnknownCommand("rename".to_string()))
        );
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_line("   \n"), Ok(None));
    }

    #[test]
    fn resolves_paths_against_the_outline() {
        let store = Store::new();
        store.dispatch(Action::AddItem {
            parent_id: None,
            name: "A".to_string(),
        });
        let outline = store.dispatch(Action::AddItem {
            parent_id: None,
            name: "B".to_string(),
        });
        let b = outline[1].id();
        let outline = store.dispatch(Action::AddItem {
            parent_id: Some(b),
            name: "B1".to_string(),
        });
        let b1 = outline[1].children().expect("B has a sublist")[0].id();

        let snapshot = store.snapshot();
        assert_eq!(resolve_path(&snapshot, &[2]), Some(b));
        assert_eq!(resolve_path(&snapshot, &[2, 1]), Some(b1));
        assert_eq!(resolve_path(&snapshot, &[3]), None);
        // Leaf items have no children to descend into.
        assert_eq!(resolve_path(&snapshot, &[1, 1]), None);
    }
}
