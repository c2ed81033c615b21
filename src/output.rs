//! Output sinks — how replies and errors reach the terminal.
//!
//! Two interchangeable strategies implement [`Sink`]: plain text and a
//! colorized variant. The strategy is chosen exactly once at startup from
//! the `EXPERIMENTAL_LOGGING` environment toggle (`"true"` → colorized,
//! anything else → plain); nothing in here is global mutable state.
//!
//! Replies go to stdout, errors to stderr. Both sinks render the same text,
//! the stylized one wraps it in color escapes.

use colored::Colorize;

use crate::command::Reply;

/// Environment toggle selecting the colorized sink.
pub const EXPERIMENTAL_LOGGING: &str = "EXPERIMENTAL_LOGGING";

const EMPTY_SET: &str = "(empty set)";

pub trait Sink {
    fn response(&self, reply: &Reply);
    fn error(&self, message: &str, detail: Option<&str>);
}

// ------------- Rendering -------------
/// A sequence renders as numbered lines (`1) foo`), an empty sequence as
/// the `(empty set)` placeholder, and scalars with a `) ` prefix.
pub fn render(reply: &Reply) -> String {
    match reply {
        Reply::List(entries) => numbered(entries),
        Reply::Flag(value) => format!(") {value}"),
        Reply::Text(text) => format!(") {text}"),
    }
}

/// `ERROR, <message>` with the optional detail appended after a colon.
pub fn render_error(message: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("ERROR, {message}: {detail}"),
        None => format!("ERROR, {message}"),
    }
}

fn numbered(entries: &[String]) -> String {
    if entries.is_empty() {
        return EMPTY_SET.to_owned();
    }
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| format!("{}) {entry}", position + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

// ------------- Strategies -------------
pub struct PlainSink;

impl Sink for PlainSink {
    fn response(&self, reply: &Reply) {
        println!("{}", render(reply));
    }

    fn error(&self, message: &str, detail: Option<&str>) {
        eprintln!("{}", render_error(message, detail));
    }
}

pub struct StylizedSink;

impl Sink for StylizedSink {
    fn response(&self, reply: &Reply) {
        println!("{}", render(reply).cyan());
    }

    fn error(&self, message: &str, detail: Option<&str>) {
        match detail {
            Some(detail) => eprintln!("{}{}", format!("ERROR, {message}: ").red(), detail.yellow()),
            None => eprintln!("{}", format!("ERROR, {message}").red()),
        }
    }
}

/// Whether the environment asks for the colorized strategy.
pub fn stylized_from_environment() -> bool {
    std::env::var(EXPERIMENTAL_LOGGING).is_ok_and(|value| value == "true")
}

pub fn sink(stylized: bool) -> Box<dyn Sink> {
    if stylized {
        Box::new(StylizedSink)
    } else {
        Box::new(PlainSink)
    }
}

// ------------- Prompts -------------
/// The interactive strings shown around the command loop, styled to match
/// the chosen sink.
#[derive(Debug, Clone, Copy)]
pub struct Prompts {
    stylized: bool,
}

impl Prompts {
    pub fn new(stylized: bool) -> Self {
        Self { stylized }
    }

    pub fn prompt(&self) -> String {
        if self.stylized {
            format!("{} ", ">".green())
        } else {
            "> ".to_owned()
        }
    }

    pub fn name_hint(&self) -> String {
        self.styled(
            "Type a name to create a dictionary\n\
             Tip: Entering the name of an existing dictionary switches to it",
        )
    }

    pub fn command_hint(&self) -> String {
        self.styled(
            "Type a command to get started\n\
             Tip: You can use the 'Help' command to see a list of commands available",
        )
    }

    fn styled(&self, text: &str) -> String {
        if self.stylized {
            text.green().to_string()
        } else {
            text.to_owned()
        }
    }
}
