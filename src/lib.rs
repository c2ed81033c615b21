//! setdict – an interactive dictionary of sets.
//!
//! The store maps named keys to ordered, duplicate-free sequences of string
//! members, driven through a fixed vocabulary of textual commands (ADD,
//! REMOVE, KEYS, MEMBERS, ...) and persisted as whole-snapshot JSON via
//! IMPORT and EXPORT.
//!
//! ## Modules
//! * [`store`] – The [`store::Dictionary`] and all command semantics.
//! * [`command`] – The command vocabulary, line parsing and dispatch.
//! * [`persist`] – JSON snapshot reading and writing.
//! * [`output`] – Plain and colorized output sinks, chosen once at startup.
//! * [`interface`] – The read-eval-print [`interface::Session`].
//! * [`config`] – Settings file for the binary.
//! * [`error`] – The typed [`error::StoreError`] and crate [`error::Result`].
//!
//! ## Quick Start
//! ```
//! use setdict::store::Dictionary;
//! use setdict::command::{self, Outcome, Reply};
//!
//! let mut dictionary = Dictionary::new();
//! let outcome = command::dispatch("ADD colors blue", &mut dictionary)
//!     .expect("not a blank line")
//!     .expect("a valid command");
//! assert_eq!(outcome, Outcome::Reply(Reply::Text("Added".to_owned())));
//! assert_eq!(dictionary.members("colors").unwrap(), vec!["blue"]);
//! ```
//!
//! ## Errors
//! User input errors (missing arguments, unknown keys, duplicate members,
//! bad snapshot paths) are raised from the store as [`error::StoreError`]
//! and rendered by the session; malformed or otherwise unreadable snapshot
//! files are recovered at the store layer (logged and reported, nothing
//! mutated). No condition ends the process except the EXIT command.

pub mod command;
pub mod config;
pub mod error;
pub mod interface;
pub mod output;
pub mod persist;
pub mod store;
