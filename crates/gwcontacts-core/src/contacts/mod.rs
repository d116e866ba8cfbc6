//! Contact normalization.

mod model;

pub use model::{Contact, local_part};

use crate::directory::Person;

/// Normalizes every directory entry, keeping API order.
#[must_use]
pub fn normalize_all(people: &[Person]) -> Vec<Contact> {
    people.iter().map(Contact::from_person).collect()
}
