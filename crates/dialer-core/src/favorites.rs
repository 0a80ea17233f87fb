//! Favorites registry: named shortcuts to phone numbers, unique by number.

use serde::{Deserialize, Serialize};

use crate::confirm::{ConfirmPrompt, ConfirmRequest, Decision};
use crate::error::DialerError;
use crate::validate::require_all;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub number: String,
    pub name: String,
}

impl FavoriteEntry {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }
}

/// First phase of a removal: the number awaiting the user's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending removal does nothing until resolved"]
pub struct PendingRemoval {
    number: String,
}

impl PendingRemoval {
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn request(&self) -> ConfirmRequest {
        ConfirmRequest {
            title: "Confirm Delete".to_string(),
            message: "Are you sure you want to delete this favorite?".to_string(),
            cancel_label: "Cancel".to_string(),
            proceed_label: "Delete".to_string(),
        }
    }
}

/// How a removal ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Removed(FavoriteEntry),
    /// Confirmed, but nothing had that number.
    Absent,
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct FavoritesRegistry {
    entries: Vec<FavoriteEntry>,
    delete_mode: bool,
}

impl FavoritesRegistry {
    /// Build a registry from seed entries. Later duplicates of a number are dropped.
    pub fn new(seed: Vec<FavoriteEntry>) -> Self {
        let mut entries: Vec<FavoriteEntry> = Vec::with_capacity(seed.len());
        for entry in seed {
            if entries.iter().any(|e| e.number == entry.number) {
                tracing::warn!(number = %entry.number, "duplicate favorite in seed dropped");
                continue;
            }
            entries.push(entry);
        }
        Self {
            entries,
            delete_mode: false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.entries.iter().any(|e| e.number == number)
    }

    /// Entries whose name contains `query`, ignoring case, in insertion order.
    pub fn list(&self, query: &str) -> Vec<&FavoriteEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn add(&mut self, number: &str, name: &str) -> Result<FavoriteEntry, DialerError> {
        require_all(&[("number", number), ("name", name)])?;
        if self.contains(number) {
            tracing::warn!(number, "favorite rejected: number already listed");
            return Err(DialerError::DuplicateNumber(number.to_string()));
        }
        let entry = FavoriteEntry::new(number, name);
        self.entries.push(entry.clone());
        tracing::debug!(number, "favorite added");
        Ok(entry)
    }

    /// Start removing `number`. Nothing changes until [`Self::resolve`].
    pub fn request_removal(&self, number: &str) -> PendingRemoval {
        PendingRemoval {
            number: number.to_string(),
        }
    }

    /// Finish a removal with the user's decision.
    pub fn resolve(&mut self, pending: PendingRemoval, decision: Decision) -> Removal {
        if decision == Decision::Cancel {
            tracing::debug!(number = %pending.number, "favorite removal cancelled");
            return Removal::Cancelled;
        }
        match self.entries.iter().position(|e| e.number == pending.number) {
            Some(idx) => {
                let removed = self.entries.remove(idx);
                tracing::debug!(number = %pending.number, "favorite removed");
                Removal::Removed(removed)
            }
            None => Removal::Absent,
        }
    }

    /// Ask `prompt` for confirmation, then remove `number` if it agreed.
    pub fn remove(&mut self, number: &str, prompt: &dyn ConfirmPrompt) -> Removal {
        let pending = self.request_removal(number);
        let decision = prompt.confirm(&pending.request());
        self.resolve(pending, decision)
    }

    pub fn delete_mode(&self) -> bool {
        self.delete_mode
    }

    pub fn toggle_delete_mode(&mut self) -> bool {
        self.delete_mode = !self.delete_mode;
        self.delete_mode
    }
}
