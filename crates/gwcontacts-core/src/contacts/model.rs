//! Contact model for alias generation.

use crate::directory::Person;

/// A directory entry reduced to what an alias line needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// Display name (may be empty).
    pub name: String,
    /// Nickname (may be empty).
    pub nickname: String,
    /// Email addresses in directory order, duplicates kept.
    pub emails: Vec<String>,
}

impl Contact {
    /// Creates a new contact.
    #[must_use]
    pub fn new(name: impl Into<String>, nickname: impl Into<String>, emails: Vec<String>) -> Self {
        Self {
            name: name.into(),
            nickname: nickname.into(),
            emails,
        }
    }

    /// Normalizes a directory entry.
    ///
    /// The longest display name and the longest nickname are kept (the
    /// first one wins a tie); every email address is kept in order.
    #[must_use]
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: longest(person.names.iter().map(|n| n.display_name.as_str())).to_string(),
            nickname: longest(person.nicknames.iter().map(|n| n.value.as_str())).to_string(),
            emails: person
                .email_addresses
                .iter()
                .map(|e| e.value.clone())
                .collect(),
        }
    }

    /// Returns the name to show for `email`.
    ///
    /// Without a stored name, one is derived from the local part of the
    /// address: `john.doe@example.com` becomes `John Doe`.
    #[must_use]
    pub fn display_name(&self, email: &str) -> String {
        if self.name.is_empty() {
            title_case(&local_part(email).replace('.', " "))
        } else {
            self.name.clone()
        }
    }

    /// Returns the nickname to use for `email`, falling back to the raw
    /// local part of the address.
    #[must_use]
    pub fn display_nickname<'a>(&'a self, email: &'a str) -> &'a str {
        if self.nickname.is_empty() {
            local_part(email)
        } else {
            &self.nickname
        }
    }
}

/// Picks the candidate with the most characters, first on a tie.
fn longest<'a>(candidates: impl IntoIterator<Item = &'a str>) -> &'a str {
    candidates.into_iter().fold("", |best, candidate| {
        if candidate.chars().count() > best.chars().count() {
            candidate
        } else {
            best
        }
    })
}

/// Part of an address before the first `@`; the whole string if there is none.
#[must_use]
pub fn local_part(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}

/// Uppercases the first letter of every space-separated word.
///
/// Letters after `-` or `'` are left alone: `mary-jane` becomes `Mary-jane`.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
