//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so that the terminal editor can be
//! swapped for a scripted one in tests.

use std::collections::VecDeque;

use categuess_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{
    Completer, Config, Context, Editor, Helper, Highlighter, Hinter, Validator,
};

/// Result of reading a line from the editor.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

fn editor_error(e: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::Editor(e.to_string()))
}

// =============================================================================
// Rustyline
// =============================================================================

/// Helper for rustyline that provides command completion and history hints.
#[derive(Helper, Completer, Hinter, Validator, Highlighter)]
struct GameHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

/// Completes REPL commands (words starting with `:`).
struct CommandCompleter {
    commands: Vec<String>,
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[..pos];
        if !word.starts_with(':') || word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|command| command.starts_with(word))
            .map(|command| Pair {
                display: command.clone(),
                replacement: command.clone(),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<GameHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor that completes `commands`.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(commands: &[&str]) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(editor_error)?
            .build();

        let helper = GameHelper {
            completer: CommandCompleter {
                commands: commands.iter().map(|c| (*c).to_string()).collect(),
            },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(editor_error)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(editor_error(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Editor that replays fixed lines, then reports EOF.
///
/// Used for batch play and tests.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    /// Creates an editor that will return `lines` in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            history: Vec::new(),
        }
    }

    /// Returns the lines added to history.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}
