//! Tab and screen navigation state.
//!
//! Three tabs; the contacts tab carries a stack so a contact detail screen
//! can be pushed over the list and popped again.

use std::fmt;
use std::str::FromStr;

use crate::contacts::Contact;
use crate::error::DialerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Calls,
    Favorites,
    Contacts,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Self::Calls, Self::Favorites, Self::Contacts];

    pub fn title(self) -> &'static str {
        match self {
            Self::Calls => "Calls",
            Self::Favorites => "Favorites",
            Self::Contacts => "Contacts",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Calls => "calls",
            Self::Favorites => "favorites",
            Self::Contacts => "contacts",
        };
        f.write_str(s)
    }
}

impl FromStr for Tab {
    type Err = DialerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calls" => Ok(Self::Calls),
            "favorites" => Ok(Self::Favorites),
            "contacts" => Ok(Self::Contacts),
            other => Err(DialerError::ValidationFailed(format!("unknown tab: {other}"))),
        }
    }
}

/// What is on screen right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    CallLog,
    Favorites,
    ContactList,
    ContactDetail(&'a Contact),
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: Tab,
    // Detail screens pushed over the contact list, carrying full values.
    contact_stack: Vec<Contact>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch tabs. Each tab keeps its own stack.
    pub fn switch(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn current(&self) -> Screen<'_> {
        match self.active {
            Tab::Calls => Screen::CallLog,
            Tab::Favorites => Screen::Favorites,
            Tab::Contacts => match self.contact_stack.last() {
                Some(contact) => Screen::ContactDetail(contact),
                None => Screen::ContactList,
            },
        }
    }

    /// Navigate to a contact's detail screen, carrying the whole contact.
    pub fn open_contact(&mut self, contact: Contact) {
        self.active = Tab::Contacts;
        self.contact_stack.push(contact);
    }

    /// Pop the top screen of the active tab. Returns false at a tab root.
    pub fn back(&mut self) -> bool {
        match self.active {
            Tab::Contacts => self.contact_stack.pop().is_some(),
            Tab::Calls | Tab::Favorites => false,
        }
    }

    /// Drop detail screens for a contact that no longer exists.
    pub fn forget_contact(&mut self, id: &str) {
        self.contact_stack.retain(|c| c.id != id);
    }

    pub fn depth(&self) -> usize {
        match self.active {
            Tab::Contacts => 1 + self.contact_stack.len(),
            Tab::Calls | Tab::Favorites => 1,
        }
    }
}
