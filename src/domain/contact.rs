use super::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Loose shape of a contact as it arrives from storage or the seed API.
///
/// Every field is optional so a missing value can be reported as
/// [`AppError::MalformedRecord`] instead of a generic decode error. Unknown
/// fields (`username`, `address`, `company`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct ContactRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    pub fn new(id: u64, name: String, email: String, phone: String) -> Self {
        Contact {
            id,
            name,
            email,
            phone,
        }
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.phone.to_lowercase().contains(needle)
    }

    /// Overwrites the editable fields, keeping the id.
    pub fn apply(&mut self, draft: &Draft) {
        self.name = draft.name.clone();
        self.email = draft.email.clone();
        self.phone = draft.phone.clone();
    }
}

impl TryFrom<ContactRecord> for Contact {
    type Error = AppError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .ok_or_else(|| AppError::MalformedRecord("record has no id".to_string()))?;

        let missing =
            |field: &str| AppError::MalformedRecord(format!("contact {id} has no {field}"));

        Ok(Contact {
            id,
            name: record.name.ok_or_else(|| missing("name"))?,
            email: record.email.ok_or_else(|| missing("email"))?,
            phone: record.phone.ok_or_else(|| missing("phone"))?,
        })
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}. {:<24} {:<32} {}",
            self.id, self.name, self.email, self.phone
        )
    }
}

/// Decodes a JSON array of contact records, rejecting any record that lacks
/// one of the searchable fields.
pub fn contacts_from_json(data: &str) -> Result<Vec<Contact>, AppError> {
    let records: Vec<ContactRecord> = serde_json::from_str(data)?;
    records.into_iter().map(Contact::try_from).collect()
}

/// Like [`contacts_from_json`], but a stored `null` decodes to `None` so it
/// reads as "no snapshot".
pub fn snapshot_from_json(data: &str) -> Result<Option<Vec<Contact>>, AppError> {
    let records: Option<Vec<ContactRecord>> = serde_json::from_str(data)?;
    records
        .map(|records| records.into_iter().map(Contact::try_from).collect())
        .transpose()
}

/// Field values of a contact being created or edited.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Draft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
        }
    }
}

impl From<&Contact> for Draft {
    fn from(contact: &Contact) -> Self {
        Draft {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Phone,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Email, DraftField::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
        }
    }
}

impl FromStr for DraftField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DraftField::Name),
            "email" => Ok(DraftField::Email),
            "phone" => Ok(DraftField::Phone),
            _ => Err(AppError::InvalidField(s.to_string())),
        }
    }
}
