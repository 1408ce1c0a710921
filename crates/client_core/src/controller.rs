//! List/add/edit/delete workflow over a remote address store.
//!
//! The local list is only ever replaced wholesale by a successful `refresh`;
//! mutations go to the store first and are then re-read.

use shared::{
    domain::{AddressDraft, AddressField, AddressId, AddressRecord, PostalCode},
    protocol::UpdateAddressRequest,
};
use tracing::{info, warn};

use crate::{
    confirm::{ConfirmationGate, DeleteConfirmation},
    error::ControllerError,
    store::AddressStore,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Editing {
        id: AddressId,
        draft: AddressDraft,
    },
}

impl Selection {
    pub fn editing_id(&self) -> Option<AddressId> {
        match self {
            Selection::None => None,
            Selection::Editing { id, .. } => Some(*id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode<'a> {
    Viewing,
    Editing(&'a AddressDraft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub record: &'a AddressRecord,
    pub mode: RowMode<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<'a> {
    pub rows: Vec<RowView<'a>>,
    pub postal_code_input: &'a str,
    pub notice: Option<&'a Notice>,
}

pub struct AddressListController<S: AddressStore, G: ConfirmationGate> {
    store: S,
    gate: G,
    addresses: Vec<AddressRecord>,
    selection: Selection,
    postal_code_input: String,
    notice: Option<Notice>,
}

impl<S: AddressStore, G: ConfirmationGate> AddressListController<S, G> {
    pub fn new(store: S, gate: G) -> Self {
        Self {
            store,
            gate,
            addresses: Vec::new(),
            selection: Selection::None,
            postal_code_input: String::new(),
            notice: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn addresses(&self) -> &[AddressRecord] {
        &self.addresses
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn postal_code_input(&self) -> &str {
        &self.postal_code_input
    }

    pub fn set_postal_code_input(&mut self, value: impl Into<String>) {
        self.postal_code_input = value.into();
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Clears the current notice once the front end has shown it.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn view(&self) -> ViewState<'_> {
        let rows = self
            .addresses
            .iter()
            .map(|record| {
                let mode = match &self.selection {
                    Selection::Editing { id, draft } if *id == record.id => {
                        RowMode::Editing(draft)
                    }
                    _ => RowMode::Viewing,
                };
                RowView { record, mode }
            })
            .collect();
        ViewState {
            rows,
            postal_code_input: &self.postal_code_input,
            notice: self.notice.as_ref(),
        }
    }

    pub async fn refresh(&mut self) -> Result<(), ControllerError> {
        match self.store.list().await {
            Ok(records) => {
                info!(count = records.len(), "addresses: refreshed");
                self.addresses = records;
                self.drop_stale_selection();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "addresses: refresh failed; keeping previous list");
                Err(self.fail(err.into()))
            }
        }
    }

    pub async fn add(&mut self, raw_postal_code: &str) -> Result<(), ControllerError> {
        self.postal_code_input = raw_postal_code.to_string();
        let postal_code =
            PostalCode::parse(raw_postal_code).map_err(|err| self.fail(err.into()))?;

        self.store
            .create(&postal_code)
            .await
            .map_err(|err| self.fail(err.into()))?;

        info!(postal_code = postal_code.as_str(), "addresses: created");
        self.postal_code_input.clear();
        self.report(NoticeLevel::Info, format!("Address {postal_code} added."));
        self.refresh().await
    }

    pub fn begin_edit(&mut self, id: AddressId) -> Result<(), ControllerError> {
        let draft = self
            .addresses
            .iter()
            .find(|record| record.id == id)
            .map(AddressDraft::from_record);
        let Some(draft) = draft else {
            return Err(self.fail(ControllerError::UnknownAddress(id)));
        };

        if let Some(previous) = self.selection.editing_id().filter(|previous| *previous != id) {
            info!(previous = previous.0, "addresses: discarding draft of previous edit");
        }
        self.selection = Selection::Editing { id, draft };
        Ok(())
    }

    /// Returns `false` when no record is in edit mode.
    pub fn update_draft_field(&mut self, field: AddressField, value: impl Into<String>) -> bool {
        match &mut self.selection {
            Selection::Editing { draft, .. } => {
                draft.set(field, value);
                true
            }
            Selection::None => false,
        }
    }

    pub async fn save_edit(&mut self) -> Result<(), ControllerError> {
        let prepared = match &self.selection {
            Selection::None => Err(ControllerError::NotEditing),
            Selection::Editing { id, draft } => PostalCode::parse(&draft.postal_code)
                .map(|code| (*id, UpdateAddressRequest::from_draft(&code, draft)))
                .map_err(ControllerError::from),
        };
        let (id, request) = prepared.map_err(|err| self.fail(err))?;

        self.store
            .update(id, &request)
            .await
            .map_err(|err| self.fail(err.into()))?;

        info!(id = id.0, "addresses: updated");
        self.selection = Selection::None;
        self.report(NoticeLevel::Info, format!("Address {id} updated."));
        self.refresh().await
    }

    pub fn cancel_edit(&mut self) {
        self.selection = Selection::None;
    }

    pub async fn delete(&mut self, id: AddressId) -> Result<DeleteOutcome, ControllerError> {
        let record = self.addresses.iter().find(|record| record.id == id).cloned();
        let Some(record) = record else {
            return Err(self.fail(ControllerError::UnknownAddress(id)));
        };

        let confirmation = DeleteConfirmation::new(record);
        if !self.gate.confirm(&confirmation).await {
            info!(id = id.0, "addresses: delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.store
            .delete(id)
            .await
            .map_err(|err| self.fail(err.into()))?;

        info!(id = id.0, "addresses: deleted");
        if self.selection.editing_id() == Some(id) {
            self.selection = Selection::None;
        }
        self.report(NoticeLevel::Info, format!("Address {id} deleted."));
        self.refresh().await?;
        Ok(DeleteOutcome::Deleted)
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selection.editing_id() {
            if !self.addresses.iter().any(|record| record.id == id) {
                warn!(id = id.0, "addresses: edited record vanished from store; leaving edit mode");
                self.selection = Selection::None;
            }
        }
    }

    fn report(&mut self, level: NoticeLevel, message: String) {
        self.notice = Some(Notice { level, message });
    }

    fn fail(&mut self, err: ControllerError) -> ControllerError {
        self.report(NoticeLevel::Error, err.user_message());
        err
    }
}
