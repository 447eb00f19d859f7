use super::*;

/// Case-insensitive substring filter over name, email and phone.
///
/// Results keep the order of `contacts`; an empty term returns everything.
pub fn search<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let needle = term.to_lowercase();

    contacts
        .iter()
        .filter(|contact| contact.matches(&needle))
        .collect()
}
