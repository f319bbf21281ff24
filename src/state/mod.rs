//! In-memory store for captured webhook requests
//!
//! The inspector keeps captured requests for the lifetime of the process.
//! Records are append-only and returned in arrival order.

use parking_lot::RwLock;

use crate::types::CapturedWebhook;

/// Process-lifetime store of captured webhooks
#[derive(Debug, Default)]
pub struct WebhookStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    webhooks: Vec<CapturedWebhook>,
    next_id: u64,
}

impl WebhookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a captured webhook, assigning its id. Returns the assigned id.
    pub fn insert(&self, mut webhook: CapturedWebhook) -> u64 {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        webhook.id = inner.next_id;
        let id = webhook.id;
        inner.webhooks.push(webhook);
        id
    }

    /// All captured webhooks in arrival order
    pub fn list(&self) -> Vec<CapturedWebhook> {
        self.inner.read().webhooks.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().webhooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().webhooks.is_empty()
    }
}
