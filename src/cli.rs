pub mod command;
pub mod run;
pub mod shell;

use crate::domain::{
    contact::{Contact, Draft, DraftField},
    store::EditTarget,
};

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Id: {}\n\
        Name: {}\n\
        Email: {}\n\
        Phone: {}",
        contact.id, contact.name, contact.email, contact.phone
    )
}

/// One line per contact, in the given order.
pub fn display_contacts<'a>(contacts: impl Iterator<Item = &'a Contact>) -> String {
    let mut output = String::new();
    for contact in contacts {
        output.push_str(&contact.to_string());
        output.push('\n');
    }
    output
}

pub fn display_draft(target: EditTarget, draft: &Draft) -> String {
    let mut output = match target {
        EditTarget::Create => "New contact\n".to_string(),
        EditTarget::Edit(id) => format!("Editing contact {id}\n"),
    };

    for field in DraftField::ALL {
        output.push_str(&format!("  {:<6} {}\n", field.as_str(), draft.get(field)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_display_lists_every_field() {
        let contact = Contact::new(
            5,
            "Chelsey Dietrich".to_string(),
            "Lucio_Hettinger@annie.ca".to_string(),
            "(254)954-1289".to_string(),
        );

        assert_eq!(
            display_contact(&contact),
            "Id: 5\nName: Chelsey Dietrich\nEmail: Lucio_Hettinger@annie.ca\nPhone: (254)954-1289"
        );
    }

    #[test]
    fn draft_display_names_target() {
        let draft = Draft {
            name: "Kurtis".to_string(),
            ..Draft::default()
        };

        let shown = display_draft(EditTarget::Edit(8), &draft);
        assert!(shown.starts_with("Editing contact 8"));
        assert!(shown.contains("name   Kurtis"));

        assert!(display_draft(EditTarget::Create, &Draft::default()).starts_with("New contact"));
    }
}
