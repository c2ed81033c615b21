//! The interactive session.
//!
//! [`Session`] owns the read-eval-print loop: it asks for a dictionary name
//! on startup (a fresh name creates a new dictionary, a known name switches
//! to it), then feeds every input line through the command dispatch and
//! renders the outcome on the chosen sink. One command is fully processed
//! before the next line is read; nothing here is concurrent.
//!
//! The loop is generic over [`LineReader`] so tests can drive a whole
//! session from a scripted list of lines. The terminal implementation wraps
//! rustyline with history.

use std::collections::HashMap;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::{error, info, warn};

use crate::command::{self, Outcome, Reply};
use crate::output::{Prompts, Sink};
use crate::store::{Dictionary, KeyHasher};

pub const FAREWELL: &str = "Goodbye!";

// ------------- Line readers -------------
/// One attempt to read a line from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C: the current line is discarded, the session continues.
    Interrupted,
    /// Ctrl-D or end of scripted input: the session winds down.
    Eof,
}

pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome;
    fn add_history(&mut self, _line: &str) {}
}

/// The terminal line reader: rustyline with a persistent history file.
pub struct ReadlineEditor {
    editor: Editor<(), DefaultHistory>,
    history_file: Option<PathBuf>,
}

impl ReadlineEditor {
    pub fn new(history_file: Option<PathBuf>, max_history: usize) -> rustyline::Result<Self> {
        let config = rustyline::Config::builder()
            .max_history_size(max_history)?
            .build();
        let mut editor: Editor<(), DefaultHistory> = Editor::with_config(config)?;
        if let Some(path) = &history_file {
            if path.exists() {
                if let Err(err) = editor.load_history(path) {
                    warn!(error = %err, path = %path.display(), "could not load history");
                }
            }
        }
        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineReader for ReadlineEditor {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self.editor.readline(prompt) {
            Ok(line) => ReadOutcome::Line(line),
            Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
            Err(ReadlineError::Eof) => ReadOutcome::Eof,
            Err(err) => {
                error!(error = %err, "line read failed");
                ReadOutcome::Eof
            }
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!(error = %err, "could not record history");
        }
    }
}

impl Drop for ReadlineEditor {
    fn drop(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(err) = self.editor.save_history(path) {
                warn!(error = %err, path = %path.display(), "could not save history");
            }
        }
    }
}

// ------------- Session -------------
/// Whether the loop keeps running after a dispatched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct Session<R: LineReader> {
    reader: R,
    sink: Box<dyn Sink>,
    prompts: Prompts,
    // named dictionary registry; `active` always names an entry once the
    // startup selection has happened
    dictionaries: HashMap<String, Dictionary, KeyHasher>,
    active: String,
    show_hint: bool,
}

impl<R: LineReader> Session<R> {
    pub fn new(reader: R, sink: Box<dyn Sink>, prompts: Prompts) -> Self {
        Self {
            reader,
            sink,
            prompts,
            dictionaries: HashMap::default(),
            active: String::new(),
            show_hint: true,
        }
    }

    /// Suppress the startup hints (used by scripted runs).
    #[must_use]
    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Run the session to completion: name a dictionary, loop over commands,
    /// say goodbye. EXIT and end-of-input both end the loop; Ctrl-C only
    /// discards the current line.
    pub fn run(&mut self) {
        if !self.select_dictionary_interactively() {
            self.farewell();
            return;
        }
        if self.show_hint {
            println!("{}", self.prompts.command_hint());
        }
        let prompt = self.prompts.prompt();
        loop {
            match self.reader.read_line(&prompt) {
                ReadOutcome::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.reader.add_history(&line);
                    if self.dispatch(&line) == Control::Exit {
                        break;
                    }
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => break,
            }
        }
        self.farewell();
    }

    fn select_dictionary_interactively(&mut self) -> bool {
        if self.show_hint {
            println!("{}", self.prompts.name_hint());
        }
        let prompt = self.prompts.prompt();
        loop {
            match self.reader.read_line(&prompt) {
                ReadOutcome::Line(line) => {
                    let name = line.trim();
                    if name.is_empty() {
                        continue;
                    }
                    self.select_dictionary(name);
                    return true;
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => return false,
            }
        }
    }

    /// Make `name` the active dictionary, creating it if the session has not
    /// seen the name before.
    pub fn select_dictionary(&mut self, name: &str) {
        if self.dictionaries.contains_key(name) {
            self.sink
                .response(&Reply::Text(format!("Using dictionary '{name}'")));
        } else {
            self.dictionaries.insert(name.to_owned(), Dictionary::new());
            info!(name, "dictionary created");
            self.sink
                .response(&Reply::Text(format!("Created dictionary '{name}'")));
        }
        self.active = name.to_owned();
    }

    /// Feed one raw line through the dispatcher and render the outcome.
    /// Errors are rendered and the session continues; only EXIT stops it.
    pub fn dispatch(&mut self, line: &str) -> Control {
        let Some(dictionary) = self.dictionaries.get_mut(&self.active) else {
            error!(name = %self.active, "no active dictionary");
            return Control::Continue;
        };
        match command::dispatch(line, dictionary) {
            None => Control::Continue,
            Some(Ok(Outcome::Reply(reply))) => {
                self.sink.response(&reply);
                Control::Continue
            }
            Some(Ok(Outcome::Exit)) => Control::Exit,
            Some(Err(err)) => {
                self.sink.error(&err.to_string(), err.detail());
                Control::Continue
            }
        }
    }

    fn farewell(&self) {
        self.sink.response(&Reply::Text(FAREWELL.to_owned()));
    }

    /// Look up a dictionary by name (the registry survives for the whole
    /// session, so inactive dictionaries keep their contents).
    pub fn dictionary(&self, name: &str) -> Option<&Dictionary> {
        self.dictionaries.get(name)
    }
}
