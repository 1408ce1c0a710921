pub mod confirm;
pub mod controller;
pub mod error;
pub mod store;

pub use confirm::{AlwaysConfirm, ConfirmationGate, DeleteConfirmation, NeverConfirm};
pub use controller::{
    AddressListController, DeleteOutcome, Notice, NoticeLevel, RowMode, RowView, Selection,
    ViewState,
};
pub use error::{ControllerError, StoreError};
pub use store::{AddressStore, HttpAddressStore};

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;
