//! Two-channel deduplicated error registry
//!
//! Failures in this crate never propagate as `Err` out of store
//! operations; they land here as string identifiers that the surrounding
//! UI polls and explicitly dismisses.

use std::sync::{Arc, Mutex};

/// Which audience an error message addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorChannel {
    /// Conditions the end user should be informed of
    User,
    /// Infrastructure failures, kept for diagnostics
    Internal,
}

#[derive(Debug, Default)]
struct Channels {
    user: Vec<String>,
    internal: Vec<String>,
}

impl Channels {
    fn get(&self, channel: ErrorChannel) -> &Vec<String> {
        match channel {
            ErrorChannel::User => &self.user,
            ErrorChannel::Internal => &self.internal,
        }
    }

    fn get_mut(&mut self, channel: ErrorChannel) -> &mut Vec<String> {
        match channel {
            ErrorChannel::User => &mut self.user,
            ErrorChannel::Internal => &mut self.internal,
        }
    }
}

/// Deduplicated, insertion-ordered error collections, one per channel.
///
/// The registry is a cheap-to-clone handle over shared state: the
/// collection store reports through one clone while the session and UI
/// query through another. Entries stay until explicitly removed.
#[derive(Debug, Clone, Default)]
pub struct ErrorRegistry {
    inner: Arc<Mutex<Channels>>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the channel unless it is already present.
    pub fn add(&self, channel: ErrorChannel, message: impl Into<String>) {
        let message = message.into();
        let mut inner = self.inner.lock().expect("error registry poisoned");
        let entries = inner.get_mut(channel);

        if !entries.iter().any(|entry| *entry == message) {
            entries.push(message);
        }
    }

    /// Remove `message` from the channel. No-op if absent.
    pub fn remove(&self, channel: ErrorChannel, message: &str) {
        let mut inner = self.inner.lock().expect("error registry poisoned");
        let entries = inner.get_mut(channel);

        if let Some(index) = entries.iter().position(|entry| entry == message) {
            entries.remove(index);
        }
    }

    /// Clear the named channel; the other channel is untouched.
    pub fn remove_all(&self, channel: ErrorChannel) {
        let mut inner = self.inner.lock().expect("error registry poisoned");
        inner.get_mut(channel).clear();
    }

    /// Whether `message` is currently present in the channel.
    pub fn is_active(&self, channel: ErrorChannel, message: &str) -> bool {
        let inner = self.inner.lock().expect("error registry poisoned");
        inner.get(channel).iter().any(|entry| entry == message)
    }

    /// Snapshot of the user channel, in insertion order.
    pub fn user_errors(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("error registry poisoned");
        inner.user.clone()
    }

    /// Snapshot of the internal channel, in insertion order.
    pub fn internal_errors(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("error registry poisoned");
        inner.internal.clone()
    }
}
