#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rolodex_contracts::contact::{
    event_types, Column, ContactDocument, ContactId, DataRow, EmailEntry, PhoneEntry,
};
use rolodex_contracts::group::GroupId;

use crate::classify::{classify, RowKind};
use crate::labels::{map_email_label, map_phone_label};

/// Folds an unordered, arbitrarily-interleaved row stream into one aggregate
/// document per distinct contact identifier, in a single forward pass.
///
/// Output order is the first-seen order of identifiers. Rows with no
/// identifier are skipped; rows of unknown kind are dropped; rows missing an
/// expected column leave the corresponding field unset and never abort the
/// pass.
pub fn aggregate(rows: &[DataRow]) -> Vec<ContactDocument> {
    let mut documents: Vec<ContactDocument> = Vec::new();
    let mut index_by_id: BTreeMap<ContactId, usize> = BTreeMap::new();

    for row in rows {
        let Some(contact_id) = row.contact_id.clone() else {
            continue;
        };

        let slot = match index_by_id.get(&contact_id) {
            Some(slot) => *slot,
            None => {
                let display_name = row.text(Column::DisplayName).map(str::to_string);
                documents.push(ContactDocument::new_empty(contact_id.clone(), display_name));
                let slot = documents.len() - 1;
                index_by_id.insert(contact_id, slot);
                slot
            }
        };
        let document = &mut documents[slot];

        match classify(row) {
            RowKind::Phone => {
                if let Some(number) = row.text(Column::Data) {
                    let fallback = row.text(Column::Label).unwrap_or_default();
                    let sub_type = row.integer(Column::SubType).unwrap_or_default();
                    document.phone_numbers.push(PhoneEntry {
                        label: map_phone_label(sub_type, fallback),
                        number: number.to_string(),
                    });
                }
            }
            RowKind::Email => {
                if let Some(address) = row.text(Column::Data) {
                    let fallback = row.text(Column::Label).unwrap_or_default();
                    let sub_type = row.integer(Column::SubType).unwrap_or_default();
                    document.emails.push(EmailEntry {
                        label: map_email_label(sub_type, fallback),
                        address: address.to_string(),
                    });
                }
            }
            RowKind::Event => {
                // Only the birthday sub-type surfaces; other event rows are
                // read and discarded.
                if row.integer(Column::SubType) == Some(event_types::BIRTHDAY) {
                    if let Some(date) = row.text(Column::Data) {
                        document.birthday = Some(date.to_string());
                    }
                }
            }
            RowKind::Organization => {
                if let Some(name) = row.text(Column::Data) {
                    document.organization_name = Some(name.to_string());
                }
                // An absent role must not clobber one seen earlier.
                if let Some(role) = row.text(Column::Role) {
                    document.organization_role = Some(role.to_string());
                }
            }
            RowKind::Photo => {
                if let Some(blob) = row.blob(Column::Photo) {
                    document.photo_thumbnail =
                        Some(format!("data:image/png;base64,{}", BASE64.encode(blob)));
                }
            }
            RowKind::Name | RowKind::GroupMembership | RowKind::Other => {}
        }
    }

    documents
}

/// Group-membership fold: contact identifier to the set of groups it belongs
/// to. Duplicate membership rows collapse under set semantics.
pub fn aggregate_groups(rows: &[DataRow]) -> BTreeMap<ContactId, BTreeSet<GroupId>> {
    let mut memberships: BTreeMap<ContactId, BTreeSet<GroupId>> = BTreeMap::new();
    for row in rows {
        let Some(contact_id) = row.contact_id.clone() else {
            continue;
        };
        let Some(group_ref) = row.text(Column::GroupRef) else {
            continue;
        };
        let Ok(group_id) = GroupId::new(group_ref) else {
            continue;
        };
        memberships.entry(contact_id).or_default().insert(group_id);
    }
    memberships
}
