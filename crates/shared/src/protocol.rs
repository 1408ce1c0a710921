use serde::{Deserialize, Serialize};

use crate::domain::{AddressDraft, AddressRecord, PostalCode};

pub const ADDRESSES_PATH: &str = "enderecos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressRequest {
    pub cep: String,
}

impl CreateAddressRequest {
    pub fn new(postal_code: &PostalCode) -> Self {
        Self {
            cep: postal_code.as_str().to_string(),
        }
    }
}

/// Full editable payload sent on update; the postal code is always canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAddressRequest {
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl UpdateAddressRequest {
    pub fn from_draft(postal_code: &PostalCode, draft: &AddressDraft) -> Self {
        Self {
            cep: postal_code.as_str().to_string(),
            logradouro: draft.street.clone(),
            bairro: draft.neighborhood.clone(),
            localidade: draft.city.clone(),
            uf: draft.region.clone(),
        }
    }
}

/// `GET /enderecos` answers either with a bare array or with the array wrapped
/// in an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AddressListResponse {
    Bare(Vec<AddressRecord>),
    Wrapped {
        #[serde(alias = "addresses", alias = "data")]
        enderecos: Vec<AddressRecord>,
    },
}

impl AddressListResponse {
    pub fn into_records(self) -> Vec<AddressRecord> {
        match self {
            AddressListResponse::Bare(records) => records,
            AddressListResponse::Wrapped { enderecos } => enderecos,
        }
    }
}
