//! # gwcontacts-core
//!
//! Turns a Google Workspace directory into mail aliases.
//!
//! This crate provides:
//! - **Directory client** - one `people.listDirectoryPeople` request
//! - **Contact normalization** - longest name and nickname, every address
//! - **Alias output** - `alias <nick> <name> <<email>>` lines
//! - **Application paths** - where `credentials.json` and `token.json` live

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod alias;
pub mod config;
pub mod contacts;
pub mod directory;
mod error;

pub use alias::{AliasWriter, alias_line, open_output};
pub use config::AppPaths;
pub use contacts::{Contact, normalize_all};
pub use directory::{DirectoryClient, Person};
pub use error::{Error, Result};
