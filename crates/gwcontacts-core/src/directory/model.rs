//! People API response types.
//!
//! Only the fields the alias output needs are modelled; everything else in
//! the response is ignored during deserialization.

use serde::Deserialize;

/// Response of `people.listDirectoryPeople`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDirectoryPeopleResponse {
    /// Directory entries in API order.
    #[serde(default)]
    pub people: Vec<Person>,
    /// Token for the next page, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Token for incremental sync.
    #[serde(default)]
    pub next_sync_token: Option<String>,
}

/// One directory entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Resource name, e.g. `people/c123`.
    #[serde(default)]
    pub resource_name: String,
    /// Name entries.
    #[serde(default)]
    pub names: Vec<Name>,
    /// Nickname entries.
    #[serde(default)]
    pub nicknames: Vec<Nickname>,
    /// Email address entries.
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

/// A person's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    /// Formatted display name.
    #[serde(default)]
    pub display_name: String,
}

/// A person's nickname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Nickname {
    /// The nickname.
    #[serde(default)]
    pub value: String,
}

/// A person's email address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmailAddress {
    /// The address.
    #[serde(default)]
    pub value: String,
}

impl Person {
    /// Builds an entry from plain strings.
    #[must_use]
    pub fn new<N, K, E>(names: N, nicknames: K, emails: E) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            resource_name: String::new(),
            names: names
                .into_iter()
                .map(|n| Name {
                    display_name: n.into(),
                })
                .collect(),
            nicknames: nicknames
                .into_iter()
                .map(|n| Nickname { value: n.into() })
                .collect(),
            email_addresses: emails
                .into_iter()
                .map(|e| EmailAddress { value: e.into() })
                .collect(),
        }
    }
}
