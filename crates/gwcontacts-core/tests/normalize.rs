//! Property tests for contact normalization.

use gwcontacts_core::{Contact, Person};
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-zÀ-ÿ .'-]{0,12}", 0..6)
}

fn emails() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}(\\.[a-z]{1,6})?@[a-z]{1,8}\\.com", 0..5)
}

/// Index of the first candidate with the most characters.
fn first_longest(candidates: &[String]) -> Option<usize> {
    let max = candidates.iter().map(|c| c.chars().count()).max()?;
    candidates.iter().position(|c| c.chars().count() == max)
}

proptest! {
    #[test]
    fn name_is_first_longest(names in names(), nicknames in names(), emails in emails()) {
        let person = Person::new(names.clone(), nicknames.clone(), emails);
        let contact = Contact::from_person(&person);

        match first_longest(&names) {
            Some(i) => {
                prop_assert_eq!(&contact.name, &names[i]);
            }
            None => {
                prop_assert_eq!(contact.name.as_str(), "");
            }
        }
        match first_longest(&nicknames) {
            Some(i) => {
                prop_assert_eq!(&contact.nickname, &nicknames[i]);
            }
            None => {
                prop_assert_eq!(contact.nickname.as_str(), "");
            }
        }
    }

    #[test]
    fn emails_preserved(names in names(), emails in emails()) {
        let person = Person::new(names, Vec::<String>::new(), emails.clone());
        prop_assert_eq!(Contact::from_person(&person).emails, emails);
    }

    #[test]
    fn normalize_is_idempotent(names in names(), nicknames in names(), emails in emails()) {
        let person = Person::new(names, nicknames, emails);
        prop_assert_eq!(Contact::from_person(&person), Contact::from_person(&person));
    }

    #[test]
    fn fallbacks_only_without_stored_values(
        name in "[A-Z][a-z]{0,8}",
        local in "[a-z]{1,6}\\.[a-z]{1,6}",
    ) {
        let email = format!("{local}@example.com");

        let named = Contact::new(name.clone(), "nick", vec![email.clone()]);
        prop_assert_eq!(named.display_name(&email), name);
        prop_assert_eq!(named.display_nickname(&email), "nick");

        let anonymous = Contact::new("", "", vec![email.clone()]);
        prop_assert_eq!(anonymous.display_nickname(&email), local.as_str());
        let derived = anonymous.display_name(&email);
        prop_assert!(!derived.contains('.'));
        prop_assert_eq!(derived.to_lowercase(), local.replace('.', " "));
    }
}
