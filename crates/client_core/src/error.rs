use shared::domain::{AddressId, PostalCodeError};
use thiserror::Error;

const UNAVAILABLE_MESSAGE: &str = "Could not reach the address store; check the connection and retry.";
const REJECTED_FALLBACK_MESSAGE: &str = "The address store could not complete the request.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("address store unavailable: {0}")]
    Unavailable(String),
    #[error("address store rejected the request with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

impl StoreError {
    /// Text shown to the user; store-provided messages win over the generic one.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Unavailable(_) => UNAVAILABLE_MESSAGE.to_string(),
            StoreError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            StoreError::Rejected { message: None, .. } => REJECTED_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("invalid postal code: {0}")]
    Validation(#[from] PostalCodeError),
    #[error("no address with id {0} in the current list")]
    UnknownAddress(AddressId),
    #[error("no address is being edited")]
    NotEditing,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ControllerError {
    pub fn user_message(&self) -> String {
        match self {
            ControllerError::Validation(err) => {
                let mut message = err.to_string();
                if let Some(first) = message.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                message
            }
            ControllerError::UnknownAddress(id) => format!("Address {id} is not in the list."),
            ControllerError::NotEditing => "No address is being edited.".to_string(),
            ControllerError::Store(err) => err.user_message(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ControllerError::Validation(_))
    }
}
