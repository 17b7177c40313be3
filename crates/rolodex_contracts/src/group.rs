#![forbid(unsafe_code)]

use serde::Serialize;

use crate::common::validate_id;
use crate::{ContractViolation, Validate};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(v: impl Into<String>) -> Result<Self, ContractViolation> {
        let v = Self(v.into());
        v.validate()?;
        Ok(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validate for GroupId {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_id("group_id", &self.0, 128)
    }
}

/// Groups are independent entities: one store row is one group, no merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactGroup {
    pub group_id: GroupId,
    pub account_type: String,
    pub account_name: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_group_01_group_id_validates_like_other_identifiers() {
        assert!(GroupId::new("g1").is_ok());
        assert!(GroupId::new("").is_err());
    }
}
