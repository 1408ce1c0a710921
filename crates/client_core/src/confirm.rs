//! Human-in-the-loop gate consulted before destructive actions.

use async_trait::async_trait;
use shared::domain::AddressRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub record: AddressRecord,
    pub prompt: String,
}

impl DeleteConfirmation {
    pub fn new(record: AddressRecord) -> Self {
        let prompt = format!("Delete address {}?", record.summary());
        Self { record, prompt }
    }
}

#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Returns `true` when the user approves the deletion.
    async fn confirm(&self, request: &DeleteConfirmation) -> bool;
}

pub struct AlwaysConfirm;

#[async_trait]
impl ConfirmationGate for AlwaysConfirm {
    async fn confirm(&self, _request: &DeleteConfirmation) -> bool {
        true
    }
}

pub struct NeverConfirm;

#[async_trait]
impl ConfirmationGate for NeverConfirm {
    async fn confirm(&self, _request: &DeleteConfirmation) -> bool {
        false
    }
}
