//! The phone session: one of each manager plus navigation.

use std::sync::Arc;

use crate::call_log::CallLog;
use crate::config::Config;
use crate::contacts::{Contact, ContactDirectory};
use crate::dial::Dialer;
use crate::dial_buffer::DialBuffer;
use crate::error::DialerError;
use crate::favorites::FavoritesRegistry;
use crate::nav::Navigator;
use crate::seed;

#[derive(Debug)]
pub struct Phone {
    pub calls: CallLog,
    pub contacts: ContactDirectory,
    pub favorites: FavoritesRegistry,
    pub keypad: DialBuffer,
    pub nav: Navigator,
}

impl Phone {
    /// A phone seeded with the built-in fixtures.
    pub fn seeded(dialer: Arc<dyn Dialer>) -> Self {
        Self {
            calls: CallLog::new(seed::calls(), dialer.clone()),
            contacts: ContactDirectory::new(seed::contacts()),
            favorites: FavoritesRegistry::new(seed::favorites()),
            keypad: DialBuffer::new(dialer),
            nav: Navigator::new(),
        }
    }

    /// A phone with every collection empty.
    pub fn empty(dialer: Arc<dyn Dialer>) -> Self {
        Self {
            calls: CallLog::new(Vec::new(), dialer.clone()),
            contacts: ContactDirectory::default(),
            favorites: FavoritesRegistry::default(),
            keypad: DialBuffer::new(dialer),
            nav: Navigator::new(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let dialer = cfg.build_dialer();
        if cfg.seed.fixtures {
            Self::seeded(dialer)
        } else {
            Self::empty(dialer)
        }
    }

    /// Look up a contact and push its detail screen.
    pub fn open_contact(&mut self, id: &str) -> Result<&Contact, DialerError> {
        let contact = self.contacts.get(id)?.clone();
        self.nav.open_contact(contact);
        self.contacts.get(id)
    }

    /// Delete a contact and drop any detail screen showing it.
    pub fn delete_contact(&mut self, id: &str) -> Option<Contact> {
        let removed = self.contacts.delete(id);
        if removed.is_some() {
            self.nav.forget_contact(id);
        }
        removed
    }
}
