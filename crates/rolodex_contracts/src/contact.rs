#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::validate_id;
use crate::{ContractViolation, SchemaVersion, Validate};

pub const CONTACT_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

/// Row-kind discriminators as the store publishes them.
pub mod mime {
    pub const NAME: &str = "vnd.android.cursor.item/name";
    pub const PHONE: &str = "vnd.android.cursor.item/phone_v2";
    pub const EMAIL: &str = "vnd.android.cursor.item/email_v2";
    pub const ORGANIZATION: &str = "vnd.android.cursor.item/organization";
    pub const PHOTO: &str = "vnd.android.cursor.item/photo";
    pub const EVENT: &str = "vnd.android.cursor.item/contact_event";
    pub const GROUP_MEMBERSHIP: &str = "vnd.android.cursor.item/group_membership";
    pub const WEBSITE: &str = "vnd.android.cursor.item/website";
    pub const POSTAL: &str = "vnd.android.cursor.item/postal-address_v2";
}

/// Phone sub-type codes fixed by the store contract.
pub mod phone_types {
    pub const CUSTOM: i64 = 0;
    pub const HOME: i64 = 1;
    pub const MOBILE: i64 = 2;
    pub const WORK: i64 = 3;
    pub const FAX_WORK: i64 = 4;
    pub const FAX_HOME: i64 = 5;
    pub const PAGER: i64 = 6;
    pub const OTHER: i64 = 7;
    pub const CALLBACK: i64 = 8;
    pub const CAR: i64 = 9;
    pub const COMPANY_MAIN: i64 = 10;
    pub const ISDN: i64 = 11;
    pub const MAIN: i64 = 12;
    pub const OTHER_FAX: i64 = 13;
    pub const RADIO: i64 = 14;
    pub const TELEX: i64 = 15;
    pub const TTY_TDD: i64 = 16;
    pub const WORK_MOBILE: i64 = 17;
    pub const WORK_PAGER: i64 = 18;
    pub const ASSISTANT: i64 = 19;
    pub const MMS: i64 = 20;
}

/// Email sub-type codes fixed by the store contract.
pub mod email_types {
    pub const CUSTOM: i64 = 0;
    pub const HOME: i64 = 1;
    pub const WORK: i64 = 2;
    pub const OTHER: i64 = 3;
    pub const MOBILE: i64 = 4;
}

/// Event sub-type codes fixed by the store contract.
pub mod event_types {
    pub const CUSTOM: i64 = 0;
    pub const ANNIVERSARY: i64 = 1;
    pub const OTHER: i64 = 2;
    pub const BIRTHDAY: i64 = 3;
}

/// Website sub-type codes fixed by the store contract.
pub mod website_types {
    pub const CUSTOM: i64 = 0;
}

/// Postal sub-type codes fixed by the store contract.
pub mod postal_types {
    pub const CUSTOM: i64 = 0;
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(v: impl Into<String>) -> Result<Self, ContractViolation> {
        let v = Self(v.into());
        v.validate()?;
        Ok(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validate for ContactId {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_id("contact_id", &self.0, 128)
    }
}

/// Column names a projection row may carry. One enum covers both read rows
/// and write-record field sets since both address the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    DisplayName,
    Data,
    SubType,
    Label,
    Role,
    Photo,
    GroupRef,
    Prefix,
    GivenName,
    MiddleName,
    FamilyName,
    Suffix,
    Street,
    Postcode,
    City,
    Region,
    Country,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(String),
    Integer(i64),
    Blob(Vec<u8>),
    Null,
}

/// One raw record from the row store: a kind discriminator, the shared
/// contact identifier, and whatever projection columns the store returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub mime_kind: String,
    pub contact_id: Option<ContactId>,
    pub columns: BTreeMap<Column, ColumnValue>,
}

impl DataRow {
    pub fn new(mime_kind: impl Into<String>, contact_id: Option<ContactId>) -> Self {
        Self {
            mime_kind: mime_kind.into(),
            contact_id,
            columns: BTreeMap::new(),
        }
    }

    pub fn with_text(mut self, column: Column, value: impl Into<String>) -> Self {
        self.columns.insert(column, ColumnValue::Text(value.into()));
        self
    }

    pub fn with_integer(mut self, column: Column, value: i64) -> Self {
        self.columns.insert(column, ColumnValue::Integer(value));
        self
    }

    pub fn with_blob(mut self, column: Column, value: Vec<u8>) -> Self {
        self.columns.insert(column, ColumnValue::Blob(value));
        self
    }

    pub fn with_null(mut self, column: Column) -> Self {
        self.columns.insert(column, ColumnValue::Null);
        self
    }

    /// Text value of a column; `None` for missing, null, or non-text values.
    pub fn text(&self, column: Column) -> Option<&str> {
        match self.columns.get(&column) {
            Some(ColumnValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn integer(&self, column: Column) -> Option<i64> {
        match self.columns.get(&column) {
            Some(ColumnValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn blob(&self, column: Column) -> Option<&[u8]> {
        match self.columns.get(&column) {
            Some(ColumnValue::Blob(v)) => Some(v.as_slice()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneEntry {
    pub label: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailEntry {
    pub label: String,
    pub address: String,
}

/// Denormalized per-contact aggregate. Field names serialize exactly as the
/// application surface expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
    pub contact_id: ContactId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub phone_numbers: Vec<PhoneEntry>,
    pub emails: Vec<EmailEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_thumbnail: Option<String>,
}

impl ContactDocument {
    /// Fresh aggregate for an identifier seen for the first time: empty child
    /// collections, every optional field unset.
    pub fn new_empty(contact_id: ContactId, display_name: Option<String>) -> Self {
        Self {
            contact_id,
            display_name,
            phone_numbers: Vec::new(),
            emails: Vec::new(),
            birthday: None,
            organization_name: None,
            organization_role: None,
            photo_thumbnail: None,
        }
    }
}
