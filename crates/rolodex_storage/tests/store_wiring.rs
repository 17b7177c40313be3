#![forbid(unsafe_code)]

use rolodex_contracts::contact::{mime, Column, ContactId, DataRow};
use rolodex_contracts::group::{ContactGroup, GroupId};
use rolodex_contracts::save::{
    EmailAddressInput, PhoneNumberInput, SaveContactRequest, WriteTarget,
};
use rolodex_engines::aggregate::{aggregate, aggregate_groups};
use rolodex_engines::encode::encode_save;
use rolodex_storage::{ContactStore, MemoryContactStore};

const AGGREGATION_KINDS: &[&str] = &[
    mime::NAME,
    mime::PHONE,
    mime::EMAIL,
    mime::EVENT,
    mime::ORGANIZATION,
    mime::PHOTO,
];

fn save_request(given: &str, family: &str) -> SaveContactRequest {
    SaveContactRequest {
        given_name: Some(given.to_string()),
        family_name: Some(family.to_string()),
        phone_numbers: vec![PhoneNumberInput {
            label: Some("satellite".to_string()),
            number: Some("555-0100".to_string()),
        }],
        email_addresses: vec![EmailAddressInput {
            label: Some("carrier pigeon".to_string()),
            address: Some("ada@example.org".to_string()),
        }],
        ..SaveContactRequest::default()
    }
}

#[test]
fn at_wiring_01_encoded_write_round_trips_through_store_and_aggregation() {
    let mut store = MemoryContactStore::new();
    let (target, records) = encode_save(&save_request("Ada", "Lovelace"), None);
    assert_eq!(target, WriteTarget::NewContact);
    let id = store.insert_or_update(&target, &records).unwrap();

    let rows = store.query_rows(AGGREGATION_KINDS).unwrap();
    let docs = aggregate(&rows);
    assert_eq!(docs.len(), 1);

    let doc = &docs[0];
    assert_eq!(doc.contact_id, id);
    assert_eq!(doc.display_name.as_deref(), Some("Ada Lovelace"));
    // Custom sub-type on write means the free-text label comes back verbatim.
    assert_eq!(doc.phone_numbers[0].label, "satellite");
    assert_eq!(doc.phone_numbers[0].number, "555-0100");
    assert_eq!(doc.emails[0].label, "carrier pigeon");
    assert_eq!(doc.emails[0].address, "ada@example.org");
}

#[test]
fn at_wiring_02_update_write_targets_the_existing_identifier() {
    let mut store = MemoryContactStore::new();
    let (target, records) = encode_save(&save_request("Ada", "Lovelace"), None);
    let id = store.insert_or_update(&target, &records).unwrap();

    let mut edit = save_request("Ada", "King");
    edit.identifier = Some(id.as_str().to_string());
    let (target, records) = encode_save(&edit, None);
    assert_eq!(target, WriteTarget::ExistingContact(id.clone()));
    let written = store.insert_or_update(&target, &records).unwrap();
    assert_eq!(written, id);

    let docs = aggregate(&store.query_rows(AGGREGATION_KINDS).unwrap());
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].display_name.as_deref(), Some("Ada King"));
}

#[test]
fn at_wiring_03_group_tables_feed_membership_aggregation() {
    let mut store = MemoryContactStore::new();
    store.insert_group(ContactGroup {
        group_id: GroupId::new("g1").unwrap(),
        account_type: "local".to_string(),
        account_name: "device".to_string(),
        title: "Friends".to_string(),
    });
    store.insert_row(
        DataRow::new(mime::GROUP_MEMBERSHIP, ContactId::new("1").ok())
            .with_text(Column::GroupRef, "g1"),
    );
    store.insert_row(
        DataRow::new(mime::GROUP_MEMBERSHIP, ContactId::new("1").ok())
            .with_text(Column::GroupRef, "g1"),
    );

    assert_eq!(store.query_groups().unwrap().len(), 1);
    let memberships = aggregate_groups(&store.query_rows(&[mime::GROUP_MEMBERSHIP]).unwrap());
    assert_eq!(memberships.len(), 1);
    let groups = &memberships[&ContactId::new("1").unwrap()];
    assert_eq!(groups.len(), 1);
}
