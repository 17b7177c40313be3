#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::contact::{mime, Column, ColumnValue, ContactId};

/// Edit/create payload as the application submits it. Absent scalar fields
/// default to `None`; absent collections to empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveContactRequest {
    pub identifier: Option<String>,
    pub name_prefix: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub family_name: Option<String>,
    pub name_suffix: Option<String>,
    pub organization_name: Option<String>,
    pub job_title: Option<String>,
    pub email_addresses: Vec<EmailAddressInput>,
    pub phone_numbers: Vec<PhoneNumberInput>,
    pub url_addresses: Vec<UrlAddressInput>,
    pub postal_addresses: Vec<PostalAddressInput>,
    pub social_profiles: Vec<SocialProfileInput>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAddressInput {
    pub label: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneNumberInput {
    pub label: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlAddressInput {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddressInput {
    pub label: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialProfileInput {
    pub profile: Option<SocialProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialProfile {
    pub service: Option<String>,
    pub url_string: Option<String>,
}

/// Which contact a record batch is written against. The record list itself
/// is identical in both modes; routing is the store's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteTarget {
    NewContact,
    ExistingContact(ContactId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    StructuredName,
    Organization,
    Email,
    Phone,
    Website,
    StructuredPostal,
    Photo,
}

impl RecordKind {
    /// Store discriminator this record lands under.
    pub fn mime_kind(self) -> &'static str {
        match self {
            Self::StructuredName => mime::NAME,
            Self::Organization => mime::ORGANIZATION,
            Self::Email => mime::EMAIL,
            Self::Phone => mime::PHONE,
            Self::Website => mime::WEBSITE,
            Self::StructuredPostal => mime::POSTAL,
            Self::Photo => mime::PHOTO,
        }
    }
}

/// One tagged field set destined for a single insert/update against the
/// store. An ordered sequence of these is one contact's full field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub kind: RecordKind,
    pub fields: BTreeMap<Column, ColumnValue>,
}

impl WriteRecord {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    pub fn put_text(mut self, column: Column, value: impl Into<String>) -> Self {
        self.fields.insert(column, ColumnValue::Text(value.into()));
        self
    }

    pub fn put_integer(mut self, column: Column, value: i64) -> Self {
        self.fields.insert(column, ColumnValue::Integer(value));
        self
    }

    pub fn put_blob(mut self, column: Column, value: Vec<u8>) -> Self {
        self.fields.insert(column, ColumnValue::Blob(value));
        self
    }

    pub fn text(&self, column: Column) -> Option<&str> {
        match self.fields.get(&column) {
            Some(ColumnValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn integer(&self, column: Column) -> Option<i64> {
        match self.fields.get(&column) {
            Some(ColumnValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }
}
