#![forbid(unsafe_code)]

use serde_json::{json, Value};

/// Capabilities required before any privileged store access.
pub const CONTACTS_CAPABILITIES: &[&str] = &["contacts.read", "contacts.write"];

/// Identifies a suspended application call so it can be resumed when the
/// platform callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallId(pub u64);

/// OS-level permission collaborator. Granting is asynchronous and
/// user-mediated; the result arrives through the platform callback.
pub trait CapabilityGate {
    fn has_capability(&self, names: &[&str]) -> bool;
    fn request_capability(&mut self, names: &[&str]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionResolution {
    pub call: CallId,
    pub granted: bool,
}

impl PermissionResolution {
    pub fn payload(&self) -> Value {
        json!({ "granted": self.granted })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionOutcome {
    Resolved(PermissionResolution),
    /// The call is suspended until the platform callback fires. If another
    /// call was already pending it is superseded and resolves denied.
    Pending {
        superseded: Option<PermissionResolution>,
    },
}

/// Single-shot continuation for the permission flow: at most one call is in
/// flight; `resume` produces exactly one resolution per suspended call.
#[derive(Debug, Default, Clone)]
pub struct PermissionBroker {
    pending: Option<CallId>,
}

impl PermissionBroker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Stores `call` as the pending continuation. Returns the denial
    /// resolution for a previously pending call it replaces.
    pub fn suspend(&mut self, call: CallId) -> Option<PermissionResolution> {
        let superseded = self.pending.replace(call);
        superseded.map(|call| PermissionResolution {
            call,
            granted: false,
        })
    }

    /// Resumes the pending call with the platform's verdict. A second resume
    /// without a new suspension yields nothing.
    pub fn resume(&mut self, granted: bool) -> Option<PermissionResolution> {
        self.pending
            .take()
            .map(|call| PermissionResolution { call, granted })
    }
}
