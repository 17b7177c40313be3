#![forbid(unsafe_code)]

use rolodex_contracts::contact::{email_types, phone_types};

/// Maps a phone sub-type code to its stable lowercase label. Total over all
/// codes: anything outside the fixed table returns the store-supplied
/// fallback verbatim, which is how user-defined labels survive a round trip.
pub fn map_phone_label(sub_type: i64, fallback: &str) -> String {
    match sub_type {
        phone_types::MOBILE => "mobile".to_string(),
        phone_types::HOME => "home".to_string(),
        phone_types::WORK => "work".to_string(),
        phone_types::FAX_WORK => "fax work".to_string(),
        phone_types::FAX_HOME => "fax home".to_string(),
        phone_types::PAGER => "pager".to_string(),
        phone_types::OTHER => "other".to_string(),
        phone_types::CALLBACK => "callback".to_string(),
        phone_types::CAR => "car".to_string(),
        phone_types::COMPANY_MAIN => "company main".to_string(),
        phone_types::ISDN => "isdn".to_string(),
        phone_types::MAIN => "main".to_string(),
        phone_types::OTHER_FAX => "other fax".to_string(),
        phone_types::RADIO => "radio".to_string(),
        phone_types::TELEX => "telex".to_string(),
        phone_types::TTY_TDD => "tty".to_string(),
        phone_types::WORK_MOBILE => "work mobile".to_string(),
        phone_types::WORK_PAGER => "work pager".to_string(),
        phone_types::ASSISTANT => "assistant".to_string(),
        phone_types::MMS => "mms".to_string(),
        _ => fallback.to_string(),
    }
}

/// Email counterpart of [`map_phone_label`].
pub fn map_email_label(sub_type: i64, fallback: &str) -> String {
    match sub_type {
        email_types::HOME => "home".to_string(),
        email_types::WORK => "work".to_string(),
        email_types::OTHER => "other".to_string(),
        email_types::MOBILE => "mobile".to_string(),
        _ => fallback.to_string(),
    }
}
