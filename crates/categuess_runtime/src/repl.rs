//! The interactive game loop.

use std::io::{self, Stdout, Write};

use categuess_foundation::{Error, MatchVerdict, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::round::{GuessOutcome, GuessStatus, Round};
use crate::session::Session;

/// Input prompt.
const PROMPT: &str = "guess> ";

/// Commands understood by the REPL, for completion and help.
pub const COMMANDS: &[&str] = &[":new", ":words", ":giveup", ":debug", ":help", ":quit"];

/// A parsed line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Start a new puzzle.
    New,
    /// Show the visible words again.
    Words,
    /// Give up and reveal the answer.
    GiveUp,
    /// Turn match diagnostics on or off; `None` shows the current state.
    Debug(Option<bool>),
    /// Show help.
    Help,
    /// Leave the REPL.
    Quit,
    /// A guess at the category.
    Guess(&'a str),
    /// A `:` command that was not recognized.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parses one trimmed line of input.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        if !line.starts_with(':') {
            return Self::Guess(line);
        }

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or(line);
        match (name, parts.next()) {
            (":new" | ":n", _) => Self::New,
            (":words" | ":reveal" | ":w", _) => Self::Words,
            (":giveup" | ":g", _) => Self::GiveUp,
            (":debug", None) => Self::Debug(None),
            (":debug", Some("on")) => Self::Debug(Some(true)),
            (":debug", Some("off")) => Self::Debug(Some(false)),
            (":help" | ":h" | ":?", _) => Self::Help,
            (":quit" | ":q" | ":exit", _) => Self::Quit,
            _ => Self::Unknown(line),
        }
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where game output goes.
    out: W,

    /// Session state (collection, round).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a new REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new(COMMANDS)?;
        Ok(Self::with_editor(editor, io::stdout(), session))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a new REPL with the given editor and output.
    pub fn with_editor(editor: E, out: W, session: Session) -> Self {
        Self {
            editor,
            out,
            session,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the output writer.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input, writing output, or starting a
    /// puzzle fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        self.session.start_new_round()?;
        self.print_round()?;

        loop {
            let line = match self.editor.read_line(PROMPT)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(trimmed);

            if !self.handle(Command::parse(trimmed))? {
                break;
            }
        }

        writeln!(self.out, "\nGoodbye!").map_err(write_error)
    }

    /// Handles one command. Returns `Ok(false)` to exit.
    fn handle(&mut self, command: Command<'_>) -> Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Help => self.print_help()?,
            Command::New => {
                self.session.start_new_round()?;
                self.print_round()?;
            }
            Command::Words => self.print_round()?,
            Command::GiveUp => {
                self.session.give_up();
                self.print_round()?;
            }
            Command::Debug(Some(enabled)) => {
                self.session.set_debug(enabled);
                self.print_debug_state()?;
            }
            Command::Debug(None) => self.print_debug_state()?,
            Command::Guess(guess) => self.handle_guess(guess)?,
            Command::Unknown(text) => {
                writeln!(self.out, "Unknown command: {text} (try :help)").map_err(write_error)?;
            }
        }
        Ok(true)
    }

    fn handle_guess(&mut self, guess: &str) -> Result<()> {
        match self.session.guess(guess) {
            GuessOutcome::Ignored => {
                if self.session.round().is_some_and(Round::is_over) {
                    writeln!(self.out, "This round is over. Type :new for another puzzle.")
                        .map_err(write_error)?;
                }
                Ok(())
            }
            GuessOutcome::Evaluated {
                verdict,
                status,
                trace,
            } => {
                if let Some(trace) = &trace {
                    self.session.explainer().emit(trace);
                }
                self.print_verdict(verdict, status)?;
                self.print_round()
            }
        }
    }

    fn print_verdict(&mut self, verdict: MatchVerdict, status: GuessStatus) -> Result<()> {
        let message = status.message();
        let color = if verdict.matched { "32" } else { "33" };
        writeln!(
            self.out,
            "\x1b[1;{color}m{}\x1b[0m {}",
            message.title, message.full
        )
        .map_err(write_error)
    }

    fn print_round(&mut self) -> Result<()> {
        let Some(round) = self.session.round() else {
            return Ok(());
        };

        let total = round.puzzle().word_count();
        let mut lines = Vec::with_capacity(total + 2);
        for (index, word) in round.puzzle().words.iter().enumerate() {
            if index < round.revealed_count() {
                lines.push(format!("  {}. {word}", index + 1));
            } else {
                lines.push(format!("  {}. -----", index + 1));
            }
        }
        lines.push(format!(
            "  {} / {total} revealed. {}",
            round.revealed_count(),
            round.status().message().compact
        ));
        if round.is_over() {
            lines.push(format!(
                "  Category: \x1b[1m{}\x1b[0m",
                round.puzzle().category.canonical
            ));
        }

        for line in lines {
            writeln!(self.out, "{line}").map_err(write_error)?;
        }
        Ok(())
    }

    fn print_debug_state(&mut self) -> Result<()> {
        let state = if self.session.explainer().config().enabled {
            "on"
        } else {
            "off"
        };
        writeln!(self.out, "Match diagnostics: {state}").map_err(write_error)
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "\x1b[1;36mCateguess\x1b[0m v{}\n\
             Name the category the words share. Every miss reveals one more word.\n\
             Type :help for commands.\n",
            env!("CARGO_PKG_VERSION")
        )
        .map_err(write_error)
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Commands:\n  \
             :new          Start a new puzzle\n  \
             :words        Show the words again (also :reveal)\n  \
             :giveup       Reveal the category\n  \
             :debug on|off Toggle match diagnostics\n  \
             :help         Show this help\n  \
             :quit         Exit\n\
             Anything else is a guess, e.g. \"Words after bread\"."
        )
        .map_err(write_error)
    }
}

fn write_error(e: io::Error) -> Error {
    Error::io(format!("failed to write output: {e}"))
}
