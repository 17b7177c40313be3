#![forbid(unsafe_code)]

use rolodex_contracts::contact::{
    email_types, phone_types, postal_types, website_types, Column, ContactId,
};
use rolodex_contracts::save::{RecordKind, SaveContactRequest, WriteRecord, WriteTarget};

/// Inverse transform: turns an edit/create request into the ordered record
/// list the store's insert/update operation expects.
///
/// Emission order is fixed: Name, Organization, Emails, Phones, Websites from
/// url entries, Websites from social profiles, StructuredPostals, optional
/// Photo. Name and Organization are always emitted (empty text supports
/// clearing a field on update). Every list record carries the custom sub-type
/// code with the caller's free-text label.
///
/// `photo` is the already-resolved avatar blob; `None` emits no Photo record.
pub fn encode_save(
    request: &SaveContactRequest,
    photo: Option<Vec<u8>>,
) -> (WriteTarget, Vec<WriteRecord>) {
    let mut records = Vec::new();

    records.push(
        WriteRecord::new(RecordKind::StructuredName)
            .put_text(Column::Prefix, opt(&request.name_prefix))
            .put_text(Column::GivenName, opt(&request.given_name))
            .put_text(Column::MiddleName, opt(&request.middle_name))
            .put_text(Column::FamilyName, opt(&request.family_name))
            .put_text(Column::Suffix, opt(&request.name_suffix)),
    );

    records.push(
        WriteRecord::new(RecordKind::Organization)
            .put_text(Column::Data, opt(&request.organization_name))
            .put_text(Column::Role, opt(&request.job_title)),
    );

    for email in &request.email_addresses {
        records.push(
            WriteRecord::new(RecordKind::Email)
                .put_integer(Column::SubType, email_types::CUSTOM)
                .put_text(Column::Label, opt(&email.label))
                .put_text(Column::Data, opt(&email.address)),
        );
    }

    for phone in &request.phone_numbers {
        records.push(
            WriteRecord::new(RecordKind::Phone)
                .put_integer(Column::SubType, phone_types::CUSTOM)
                .put_text(Column::Label, opt(&phone.label))
                .put_text(Column::Data, opt(&phone.number)),
        );
    }

    for url in &request.url_addresses {
        records.push(
            WriteRecord::new(RecordKind::Website)
                .put_integer(Column::SubType, website_types::CUSTOM)
                .put_text(Column::Label, opt(&url.label))
                .put_text(Column::Data, opt(&url.url)),
        );
    }

    for social in &request.social_profiles {
        // An entry without its nested profile carries nothing to write.
        let Some(profile) = &social.profile else {
            continue;
        };
        records.push(
            WriteRecord::new(RecordKind::Website)
                .put_integer(Column::SubType, website_types::CUSTOM)
                .put_text(Column::Label, opt(&profile.service))
                .put_text(Column::Data, opt(&profile.url_string)),
        );
    }

    for postal in &request.postal_addresses {
        records.push(
            WriteRecord::new(RecordKind::StructuredPostal)
                .put_integer(Column::SubType, postal_types::CUSTOM)
                .put_text(Column::Label, opt(&postal.label))
                .put_text(Column::Street, opt(&postal.street))
                .put_text(Column::Postcode, opt(&postal.postal_code))
                .put_text(Column::City, opt(&postal.city))
                .put_text(Column::Region, opt(&postal.state))
                .put_text(Column::Country, opt(&postal.country)),
        );
    }

    if let Some(blob) = photo {
        records.push(WriteRecord::new(RecordKind::Photo).put_blob(Column::Photo, blob));
    }

    (resolve_target(request), records)
}

/// No usable identifier means "create new contact"; otherwise the write
/// targets the existing contact at that identifier.
fn resolve_target(request: &SaveContactRequest) -> WriteTarget {
    match request.identifier.as_deref().and_then(|v| ContactId::new(v).ok()) {
        Some(id) => WriteTarget::ExistingContact(id),
        None => WriteTarget::NewContact,
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
