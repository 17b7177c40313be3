#![forbid(unsafe_code)]

use rolodex_contracts::contact::{mime, DataRow};

/// What kind of contact fact a raw row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Name,
    Phone,
    Email,
    Organization,
    Photo,
    Event,
    GroupMembership,
    Other,
}

/// Reads the row's kind discriminator. Discriminators this build does not
/// know classify as `Other` so new store kinds never abort aggregation.
pub fn classify(row: &DataRow) -> RowKind {
    match row.mime_kind.as_str() {
        mime::NAME => RowKind::Name,
        mime::PHONE => RowKind::Phone,
        mime::EMAIL => RowKind::Email,
        mime::ORGANIZATION => RowKind::Organization,
        mime::PHOTO => RowKind::Photo,
        mime::EVENT => RowKind::Event,
        mime::GROUP_MEMBERSHIP => RowKind::GroupMembership,
        _ => RowKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_contracts::contact::ContactId;

    fn row(kind: &str) -> DataRow {
        DataRow::new(kind, ContactId::new("1").ok())
    }

    #[test]
    fn at_classify_01_each_known_discriminator_maps_to_its_kind() {
        assert_eq!(classify(&row(mime::NAME)), RowKind::Name);
        assert_eq!(classify(&row(mime::PHONE)), RowKind::Phone);
        assert_eq!(classify(&row(mime::EMAIL)), RowKind::Email);
        assert_eq!(classify(&row(mime::ORGANIZATION)), RowKind::Organization);
        assert_eq!(classify(&row(mime::PHOTO)), RowKind::Photo);
        assert_eq!(classify(&row(mime::EVENT)), RowKind::Event);
        assert_eq!(classify(&row(mime::GROUP_MEMBERSHIP)), RowKind::GroupMembership);
    }

    #[test]
    fn at_classify_02_unrecognized_discriminators_classify_as_other() {
        assert_eq!(classify(&row("vnd.android.cursor.item/sip_address")), RowKind::Other);
        assert_eq!(classify(&row("")), RowKind::Other);
    }
}
