use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $(#[$meta])*
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    #[serde(try_from = "RawAddressId")]
    AddressId
);

/// Stores hand out ids either as JSON numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawAddressId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("address id `{0}` is not an integer")]
pub struct InvalidAddressId(pub String);

impl TryFrom<RawAddressId> for AddressId {
    type Error = InvalidAddressId;

    fn try_from(raw: RawAddressId) -> Result<Self, Self::Error> {
        match raw {
            RawAddressId::Number(id) => Ok(AddressId(id)),
            RawAddressId::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(AddressId)
                .map_err(|_| InvalidAddressId(text)),
        }
    }
}

pub const POSTAL_CODE_DIGITS: usize = 8;
const POSTAL_CODE_SEPARATOR_AT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostalCodeError {
    #[error("enter a postal code")]
    Empty,
    #[error("postal code must have exactly 8 digits (got {digits})")]
    WrongLength { digits: usize },
}

/// A Brazilian postal code (CEP) in canonical form: exactly eight ASCII digits.
///
/// `Display` renders the conventional `NNNNN-NNN` form; [`PostalCode::as_str`]
/// is what goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Strips every non-digit character, then requires exactly eight digits.
    pub fn parse(raw: &str) -> Result<Self, PostalCodeError> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        match digits.len() {
            0 => Err(PostalCodeError::Empty),
            POSTAL_CODE_DIGITS => Ok(Self(digits)),
            digits => Err(PostalCodeError::WrongLength { digits }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.0.split_at(POSTAL_CODE_SEPARATOR_AT);
        write!(f, "{head}-{tail}")
    }
}

impl FromStr for PostalCode {
    type Err = PostalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: AddressId,
    #[serde(rename = "cep", alias = "postalCode", default)]
    pub postal_code: String,
    #[serde(rename = "logradouro", alias = "street", default)]
    pub street: String,
    #[serde(rename = "bairro", alias = "neighborhood", default)]
    pub neighborhood: String,
    #[serde(rename = "localidade", alias = "city", default)]
    pub city: String,
    #[serde(rename = "uf", alias = "region", default)]
    pub region: String,
}

impl AddressRecord {
    /// Postal code in `NNNNN-NNN` form when it normalizes, otherwise as stored.
    pub fn display_postal_code(&self) -> String {
        PostalCode::parse(&self.postal_code)
            .map(|code| code.to_string())
            .unwrap_or_else(|_| self.postal_code.clone())
    }

    pub fn summary(&self) -> String {
        format!(
            "{} - {}, {}, {}/{}",
            self.display_postal_code(),
            self.street,
            self.neighborhood,
            self.city,
            self.region
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    PostalCode,
    Street,
    Neighborhood,
    City,
    Region,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::PostalCode,
        AddressField::Street,
        AddressField::Neighborhood,
        AddressField::City,
        AddressField::Region,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AddressField::PostalCode => "postalCode",
            AddressField::Street => "street",
            AddressField::Neighborhood => "neighborhood",
            AddressField::City => "city",
            AddressField::Region => "region",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown address field `{0}`")]
pub struct UnknownFieldError(pub String);

impl FromStr for AddressField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postalcode" | "postal_code" | "cep" => Ok(AddressField::PostalCode),
            "street" | "logradouro" => Ok(AddressField::Street),
            "neighborhood" | "bairro" => Ok(AddressField::Neighborhood),
            "city" | "localidade" => Ok(AddressField::City),
            "region" | "uf" => Ok(AddressField::Region),
            _ => Err(UnknownFieldError(s.to_string())),
        }
    }
}

/// Editable copy of a record's fields while that record is in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub postal_code: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub region: String,
}

impl AddressDraft {
    pub fn from_record(record: &AddressRecord) -> Self {
        Self {
            postal_code: record.postal_code.clone(),
            street: record.street.clone(),
            neighborhood: record.neighborhood.clone(),
            city: record.city.clone(),
            region: record.region.clone(),
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::PostalCode => &self.postal_code,
            AddressField::Street => &self.street,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::City => &self.city,
            AddressField::Region => &self.region,
        }
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::Street => &mut self.street,
            AddressField::Neighborhood => &mut self.neighborhood,
            AddressField::City => &mut self.city,
            AddressField::Region => &mut self.region,
        };
        *slot = value.into();
    }
}
