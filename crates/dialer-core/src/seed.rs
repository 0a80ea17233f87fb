//! Static fixtures the phone is seeded with on start.

use crate::call_log::{CallRecord, CallStatus};
use crate::contacts::Contact;
use crate::favorites::FavoriteEntry;

const CALLS: &[(&str, &str, CallStatus)] = &[
    ("1", "0987654321", CallStatus::Incoming),
    ("2", "0123456789", CallStatus::Outgoing),
    ("3", "0345678901", CallStatus::Missed),
    ("4", "0567890123", CallStatus::Incoming),
    ("5", "0789012345", CallStatus::Outgoing),
    ("6", "0901234567", CallStatus::Missed),
    ("7", "0123456789", CallStatus::Incoming),
    ("8", "0234567890", CallStatus::Outgoing),
];

const CONTACTS: &[(&str, &str, &str, &str)] = &[
    ("1", "Nguyen Van A", "0123456789", "a@gmail.com"),
    ("2", "Tran Thi B", "0987654321", "b@gmail.com"),
    ("3", "Le Thi C", "0345678901", "lethi.c@gmail.com"),
    ("4", "Vo Van D", "0456789012", "vovand@gmail.com"),
    ("5", "Hoang Thi E", "0567890123", "hoangthi.e@gmail.com"),
    ("6", "Phan Van F", "0678901234", "phanvan.f@gmail.com"),
];

const FAVORITES: &[(&str, &str)] = &[
    ("0123456789", "HAO"),
    ("0987654321", "GIANG"),
    ("0345678901", "Le Thi C"),
    ("0456789012", "Vo Van D"),
    ("0567890123", "Hoang Thi E"),
    ("0678901234", "Phan Van F"),
];

pub fn calls() -> Vec<CallRecord> {
    CALLS
        .iter()
        .map(|(id, number, status)| CallRecord::new(*id, *number, *status))
        .collect()
}

pub fn contacts() -> Vec<Contact> {
    CONTACTS
        .iter()
        .map(|(id, name, phone, email)| Contact {
            id: (*id).to_string(),
            name: (*name).to_string(),
            phone: (*phone).to_string(),
            email: (*email).to_string(),
        })
        .collect()
}

pub fn favorites() -> Vec<FavoriteEntry> {
    FAVORITES
        .iter()
        .map(|(number, name)| FavoriteEntry::new(*number, *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fixture_sizes() {
        assert_eq!(calls().len(), 8);
        assert_eq!(contacts().len(), 6);
        assert_eq!(favorites().len(), 6);
    }

    #[test]
    fn fixture_keys_are_unique() {
        let call_ids: HashSet<_> = calls().into_iter().map(|c| c.id).collect();
        assert_eq!(call_ids.len(), 8);
        let contact_ids: HashSet<_> = contacts().into_iter().map(|c| c.id).collect();
        assert_eq!(contact_ids.len(), 6);
        let numbers: HashSet<_> = favorites().into_iter().map(|f| f.number).collect();
        assert_eq!(numbers.len(), 6);
    }
}
