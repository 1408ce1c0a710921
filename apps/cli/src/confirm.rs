//! Terminal confirmation gate for deletes.

use std::io::{self, Write};

use async_trait::async_trait;
use client_core::{ConfirmationGate, DeleteConfirmation};
use tracing::warn;

use crate::shell::read_line;

pub struct StdinConfirm;

pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}

#[async_trait]
impl ConfirmationGate for StdinConfirm {
    async fn confirm(&self, request: &DeleteConfirmation) -> bool {
        print!("{} [y/N] ", request.prompt);
        let _ = io::stdout().flush();
        match read_line().await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "failed to read confirmation; treating as declined");
                false
            }
        }
    }
}
