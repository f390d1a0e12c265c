//! Favorites, click counters and newsletter list persisted in local storage
//!
//! Every collection is a flat JSON blob under one key. Reads tolerate missing
//! or corrupt data (treated as empty); write failures are returned so the
//! caller can tell the visitor.

use std::collections::BTreeMap;

use super::storage::{KeyValueStore, StorageError, keys, read_json_or_default, write_json};
use super::validation::is_valid_email;

/// Outcome of [`FavoritesStore::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

impl FavoriteToggle {
    /// Toast text for the outcome
    pub fn message(&self) -> &'static str {
        match self {
            FavoriteToggle::Added => "Added to favorites!",
            FavoriteToggle::Removed => "Removed from favorites",
        }
    }
}

/// Ordered list of favorited item names under one storage key
#[derive(Debug)]
pub struct FavoritesStore<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Favorite destinations
    pub fn destinations(store: S) -> Self {
        Self::new(store, keys::FAVORITE_DESTINATIONS)
    }

    /// Favorite promotions
    pub fn promotions(store: S) -> Self {
        Self::new(store, keys::FAVORITE_PROMOTIONS)
    }

    pub fn list(&self) -> Vec<String> {
        read_json_or_default(&self.store, self.key)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|f| f == id)
    }

    /// Add `id` if absent, remove it if present
    pub fn toggle(&self, id: &str) -> Result<FavoriteToggle, StorageError> {
        let mut favorites = self.list();
        let outcome = match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
                FavoriteToggle::Removed
            }
            None => {
                favorites.push(id.to_string());
                FavoriteToggle::Added
            }
        };
        write_json(&self.store, self.key, &favorites)?;
        Ok(outcome)
    }
}

/// Per-name click counts (card interactions, promotion clicks)
#[derive(Debug)]
pub struct ClickCounter<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> ClickCounter<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn card_interactions(store: S) -> Self {
        Self::new(store, keys::CARD_INTERACTIONS)
    }

    pub fn promotion_clicks(store: S) -> Self {
        Self::new(store, keys::PROMOTION_CLICKS)
    }

    /// Increment the count for `name` and return the new count
    pub fn record(&self, name: &str) -> Result<u64, StorageError> {
        let mut counts: BTreeMap<String, u64> = read_json_or_default(&self.store, self.key);
        let count = counts.entry(name.to_string()).or_default();
        *count += 1;
        let count = *count;
        write_json(&self.store, self.key, &counts)?;
        Ok(count)
    }

    pub fn count(&self, name: &str) -> u64 {
        let counts: BTreeMap<String, u64> = read_json_or_default(&self.store, self.key);
        counts.get(name).copied().unwrap_or(0)
    }
}

/// Result of a newsletter signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    Subscribed,
    AlreadySubscribed,
    InvalidEmail,
}

impl Subscription {
    pub fn message(&self) -> &'static str {
        match self {
            Subscription::Subscribed => "Thank you for subscribing! Check your inbox for exclusive deals.",
            Subscription::AlreadySubscribed => "You're already subscribed to our newsletter!",
            Subscription::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// Emails collected by the promotions page newsletter form
#[derive(Debug)]
pub struct NewsletterList<S> {
    store: S,
}

impl<S: KeyValueStore> NewsletterList<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn subscribers(&self) -> Vec<String> {
        read_json_or_default(&self.store, keys::NEWSLETTER_SUBSCRIBERS)
    }

    pub fn subscribe(&self, email: &str) -> Result<Subscription, StorageError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Ok(Subscription::InvalidEmail);
        }

        let mut subscribers = self.subscribers();
        if subscribers.iter().any(|s| s.eq_ignore_ascii_case(email)) {
            return Ok(Subscription::AlreadySubscribed);
        }
        subscribers.push(email.to_string());
        write_json(&self.store, keys::NEWSLETTER_SUBSCRIBERS, &subscribers)?;
        Ok(Subscription::Subscribed)
    }
}
