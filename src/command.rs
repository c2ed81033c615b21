//! The command vocabulary and its dispatch.
//!
//! A raw input line is split on whitespace: the first token names the
//! command (matched case-insensitively), the second token is the key, and
//! all remaining tokens are re-joined with single spaces to form the member,
//! so multi-word members work. [`execute`] routes a parsed request into the
//! store and yields a [`Reply`] or a typed error.

use crate::error::{Result, StoreError};
use crate::store::Dictionary;

// ------------- Vocabulary -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Keys,
    Members,
    Add,
    Remove,
    RemoveAll,
    Clear,
    KeyExists,
    MemberExists,
    AllMembers,
    Items,
    Help,
    Import,
    Export,
    Exit,
}

impl Command {
    /// The full vocabulary, in declared order. HELP reports the names in
    /// exactly this order.
    pub const TABLE: [Command; 14] = [
        Command::Keys,
        Command::Members,
        Command::Add,
        Command::Remove,
        Command::RemoveAll,
        Command::Clear,
        Command::KeyExists,
        Command::MemberExists,
        Command::AllMembers,
        Command::Items,
        Command::Help,
        Command::Import,
        Command::Export,
        Command::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Keys => "KEYS",
            Command::Members => "MEMBERS",
            Command::Add => "ADD",
            Command::Remove => "REMOVE",
            Command::RemoveAll => "REMOVEALL",
            Command::Clear => "CLEAR",
            Command::KeyExists => "KEYEXISTS",
            Command::MemberExists => "MEMBEREXISTS",
            Command::AllMembers => "ALLMEMBERS",
            Command::Items => "ITEMS",
            Command::Help => "HELP",
            Command::Import => "IMPORT",
            Command::Export => "EXPORT",
            Command::Exit => "EXIT",
        }
    }

    /// Case-insensitive lookup of a command token.
    pub fn lookup(token: &str) -> Option<Command> {
        let upper = token.to_ascii_uppercase();
        Command::TABLE.into_iter().find(|c| c.name() == upper)
    }

    /// The HELP reply: every command name, space-joined, table order.
    pub fn help_line() -> String {
        Command::TABLE
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ------------- Requests -------------
/// One parsed input line. `command` is `None` when the first token did not
/// match the vocabulary; `key` and `member` are empty when absent.
#[derive(Debug)]
pub struct Request {
    pub command: Option<Command>,
    pub key: String,
    pub member: String,
}

/// Split a raw line into a request. Blank lines yield `None`.
pub fn parse(line: &str) -> Option<Request> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    let key = tokens.next().unwrap_or_default().to_owned();
    let member = tokens.collect::<Vec<_>>().join(" ");
    Some(Request {
        command: Command::lookup(command),
        key,
        member,
    })
}

// ------------- Replies -------------
/// What a successful command hands to the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A scalar line: "Added", the HELP listing, ...
    Text(String),
    /// KEYEXISTS / MEMBEREXISTS verdicts.
    Flag(bool),
    /// A sequence rendered as a numbered list.
    List(Vec<String>),
}

/// Whether the session keeps running after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(Reply),
    Exit,
}

/// Execute one command against the store.
pub fn execute(
    command: Command,
    key: &str,
    member: &str,
    dictionary: &mut Dictionary,
) -> Result<Outcome> {
    let reply = match command {
        Command::Keys => Reply::List(dictionary.keys()),
        Command::Members => Reply::List(dictionary.members(key)?),
        Command::Add => Reply::Text(dictionary.add(key, member)?.to_owned()),
        Command::Remove => Reply::Text(dictionary.remove(key, member)?.to_owned()),
        Command::RemoveAll => Reply::Text(dictionary.remove_all(key)?.to_owned()),
        Command::Clear => Reply::Text(dictionary.clear().to_owned()),
        Command::KeyExists => Reply::Flag(dictionary.key_exists(key)?),
        Command::MemberExists => Reply::Flag(dictionary.member_exists(key, member)?),
        Command::AllMembers => Reply::List(dictionary.all_members()),
        Command::Items => Reply::List(dictionary.items()),
        Command::Help => Reply::Text(Command::help_line()),
        Command::Import => Reply::Text(dictionary.import(key)?.to_owned()),
        Command::Export => Reply::Text(dictionary.export(key)?.to_owned()),
        Command::Exit => return Ok(Outcome::Exit),
    };
    Ok(Outcome::Reply(reply))
}

/// Parse and execute a raw line in one step. Blank lines yield no outcome;
/// an unmatched first token is the dispatcher-level "Unknown command" error.
pub fn dispatch(line: &str, dictionary: &mut Dictionary) -> Option<Result<Outcome>> {
    let request = parse(line)?;
    let Some(command) = request.command else {
        return Some(Err(StoreError::UnknownCommand));
    };
    Some(execute(command, &request.key, &request.member, dictionary))
}
