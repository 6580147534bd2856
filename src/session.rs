//! The interactive front end: one command per line, translated into tree
//! operations, with the tree redrawn after every change.

use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
    path::PathBuf,
    str::FromStr,
};

use thiserror::Error;
use tracing::{info, warn};

use crate::{DuplicateKey, NotFound, Tree, input};

pub const INSTRUCTIONS: &str = "\
This is a red-black binary search tree.

To insert a number, type 'add <number>'.
To insert every number in a file, type 'read <file>'.
To remove a number, type 'remove <number>'.
To find a number in the tree, type 'search <number>'.
To visualize your tree, type 'print'.
To see these instructions again, type 'help'.
To quit the program, type 'quit'.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(i64),
    Read(PathBuf),
    Remove(i64),
    Search(i64),
    Print,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not recognized.")]
    Unknown(String),
    #[error("'{0}' needs an argument.")]
    MissingArgument(&'static str),
    #[error("'{command}' needs a whole number, not '{value}'.")]
    InvalidNumber { command: &'static str, value: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let number = |command: &'static str| -> Result<i64, CommandError> {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument(command));
            }
            rest.parse().map_err(|_| CommandError::InvalidNumber {
                command,
                value: rest.to_string(),
            })
        };

        match word.to_ascii_lowercase().as_str() {
            "add" | "insert" => number("add").map(Command::Add),
            "remove" => number("remove").map(Command::Remove),
            "search" => number("search").map(Command::Search),
            "read" if rest.is_empty() => Err(CommandError::MissingArgument("read")),
            "read" => Ok(Command::Read(PathBuf::from(rest))),
            "print" => Ok(Command::Print),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

/// A tree and the writer its replies go to.
pub struct Session<W> {
    tree: Tree<i64>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            tree: Tree::new(),
            out,
        }
    }

    pub fn tree(&self) -> &Tree<i64> {
        &self.tree
    }

    pub fn into_parts(self) -> (Tree<i64>, W) {
        (self.tree, self.out)
    }

    /// Runs one command. Only failures to write the reply are errors; tree
    /// and file problems are reported to the user.
    pub fn execute(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Add(key) => {
                self.add(key)?;
                self.print()?;
            }
            Command::Read(path) => {
                self.read(path)?;
                self.print()?;
            }
            Command::Remove(key) => match self.tree.remove(key) {
                Ok(key) => {
                    writeln!(self.out, "Removed {key}.")?;
                    self.print()?;
                }
                Err(NotFound(key)) => writeln!(self.out, "{key} is not in the tree.")?,
            },
            Command::Search(key) => {
                if self.tree.contains(&key) {
                    writeln!(self.out, "{key} is in the tree.")?;
                } else {
                    writeln!(self.out, "{key} is not in the tree.")?;
                }
            }
            Command::Print => self.print()?,
            Command::Help => self.out.write_all(INSTRUCTIONS.as_bytes())?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Reads commands line by line until `quit` or the end of `input`.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> io::Result<()> {
        if prompt {
            self.out.write_all(INSTRUCTIONS.as_bytes())?;
        }
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command)?.is_break() {
                        break;
                    }
                }
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
        self.out.flush()
    }

    fn add(&mut self, key: i64) -> io::Result<()> {
        if let Err(DuplicateKey(key)) = self.tree.insert(key) {
            writeln!(
                self.out,
                "Two nodes of the same value cannot be added: {key} is already in the tree."
            )?;
        }
        Ok(())
    }

    fn read(&mut self, path: PathBuf) -> io::Result<()> {
        let parsed = match input::read_keys(&path) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(%err, "key file not loaded");
                return writeln!(self.out, "{err}");
            }
        };
        for token in &parsed.skipped {
            writeln!(self.out, "Skipping '{token}': not a whole number.")?;
        }
        let mut inserted = 0;
        for key in parsed.keys {
            match self.tree.insert(key) {
                Ok(()) => inserted += 1,
                Err(DuplicateKey(key)) => {
                    writeln!(self.out, "Skipping {key}: already in the tree.")?
                }
            }
        }
        info!(path = %path.display(), inserted, "loaded key file");
        Ok(())
    }

    fn print(&mut self) -> io::Result<()> {
        if self.tree.is_empty() {
            writeln!(self.out, "The tree is empty.")
        } else {
            write!(self.out, "{}", self.tree)
        }
    }
}
