//! Contact directory, kept sorted by name at all times.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::DialerError;
use crate::validate::require_all;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Locale-style name ordering.
///
/// Levels, first difference wins: base letters (accents stripped, case
/// folded, `đ` read as `d`), then accented lowercase text, then case with
/// lowercase first at the first differing character, then raw code points.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'Đ' | 'đ' => 'd',
            other => other,
        })
        .flat_map(char::to_lowercase)
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Owns the contact list. The list is sorted by [`compare_names`] after
/// construction and after every insertion.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
}

impl ContactDirectory {
    pub fn new(mut contacts: Vec<Contact>) -> Self {
        contacts.sort_by(|a, b| compare_names(&a.name, &b.name));
        Self { contacts }
    }

    /// All contacts, ascending by name.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Add a contact with a fresh id. Every field must be non-blank.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<Contact, DialerError> {
        if let Err(err) = require_all(&[("name", name), ("phone", phone), ("email", email)]) {
            tracing::warn!(error = %err, "contact rejected");
            return Err(err);
        }
        let contact = Contact {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        };
        self.insert_sorted(contact.clone());
        tracing::debug!(id = %contact.id, "contact added");
        Ok(contact)
    }

    // Equal names keep arrival order: the new contact goes after them.
    fn insert_sorted(&mut self, contact: Contact) {
        let at = self
            .contacts
            .partition_point(|c| compare_names(&c.name, &contact.name) != Ordering::Greater);
        self.contacts.insert(at, contact);
    }

    /// Remove the contact with `id`; returns the removed contact, if any.
    pub fn delete(&mut self, id: &str) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.id == id)?;
        let removed = self.contacts.remove(idx);
        tracing::debug!(id, "contact deleted");
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Result<&Contact, DialerError> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DialerError::NotFound(format!("contact {id}")))
    }
}
