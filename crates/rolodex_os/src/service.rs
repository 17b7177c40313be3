#![forbid(unsafe_code)]

use rolodex_contracts::contact::{mime, ContactId};
use rolodex_contracts::save::SaveContactRequest;
use rolodex_contracts::ContractViolation;
use rolodex_engines::aggregate::{aggregate, aggregate_groups};
use rolodex_engines::avatar::{fetch_avatar, DEFAULT_FETCH_TIMEOUT_MS};
use rolodex_engines::encode::encode_save;
use rolodex_storage::{ContactStore, StorageError};
use serde_json::{json, Value};

use crate::editor::{EditorLauncher, LaunchError};
use crate::permissions::{
    CallId, CapabilityGate, PermissionBroker, PermissionOutcome, PermissionResolution,
    CONTACTS_CAPABILITIES,
};

/// Row kinds one `get_contacts` pass asks the store for.
const AGGREGATION_KINDS: &[&str] = &[
    mime::NAME,
    mime::PHONE,
    mime::EMAIL,
    mime::EVENT,
    mime::ORGANIZATION,
    mime::PHOTO,
];

#[derive(Debug)]
pub enum ServiceError {
    Store(StorageError),
    Launch(LaunchError),
    Contract(ContractViolation),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "contact store failure: {err}"),
            Self::Launch(err) => write!(f, "{err}"),
            Self::Contract(ContractViolation::InvalidValue { field, reason }) => {
                write!(f, "invalid {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Store(value)
    }
}

impl From<LaunchError> for ServiceError {
    fn from(value: LaunchError) -> Self {
        Self::Launch(value)
    }
}

impl From<ContractViolation> for ServiceError {
    fn from(value: ContractViolation) -> Self {
        Self::Contract(value)
    }
}

/// The call surface the application layer consumes. Every operation returns
/// one complete JSON payload in the published shape or fails with a short
/// diagnostic; there are no partial results.
#[derive(Debug)]
pub struct ContactsService<S, G, E> {
    store: S,
    gate: G,
    editor: E,
    broker: PermissionBroker,
    avatar_timeout_ms: u32,
}

impl<S, G, E> ContactsService<S, G, E>
where
    S: ContactStore,
    G: CapabilityGate,
    E: EditorLauncher,
{
    pub fn new(store: S, gate: G, editor: E) -> Self {
        Self {
            store,
            gate,
            editor,
            broker: PermissionBroker::new(),
            avatar_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }

    pub fn with_avatar_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.avatar_timeout_ms = timeout_ms;
        self
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// `{ "contacts": [...] }` — one aggregate document per distinct contact,
    /// in first-seen row order.
    pub fn get_contacts(&self) -> Result<Value, ServiceError> {
        let rows = self.store.query_rows(AGGREGATION_KINDS)?;
        let documents = aggregate(&rows);
        Ok(json!({ "contacts": documents }))
    }

    /// Display-name substring search over the aggregated documents. An empty
    /// search string returns everything.
    pub fn find_contacts(&self, search: &str) -> Result<Value, ServiceError> {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return self.get_contacts();
        }
        let rows = self.store.query_rows(AGGREGATION_KINDS)?;
        let matches: Vec<_> = aggregate(&rows)
            .into_iter()
            .filter(|doc| {
                doc.display_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .collect();
        Ok(json!({ "contacts": matches }))
    }

    /// `{ "groups": [...] }` — one entry per group row, no merging.
    pub fn get_groups(&self) -> Result<Value, ServiceError> {
        let groups = self.store.query_groups()?;
        Ok(json!({ "groups": groups }))
    }

    /// `{ "<contactId>": [groupId, ...], ... }` — only contacts with at least
    /// one membership appear; duplicate membership rows collapse.
    pub fn get_contact_groups(&self) -> Result<Value, ServiceError> {
        let rows = self.store.query_rows(&[mime::GROUP_MEMBERSHIP])?;
        let mut result = serde_json::Map::new();
        for (contact_id, groups) in aggregate_groups(&rows) {
            let ids: Vec<Value> = groups
                .iter()
                .map(|g| Value::String(g.as_str().to_string()))
                .collect();
            result.insert(contact_id.as_str().to_string(), Value::Array(ids));
        }
        Ok(Value::Object(result))
    }

    pub fn delete_contact(&mut self, contact_id: &str) -> Result<Value, ServiceError> {
        let id = ContactId::new(contact_id)?;
        self.store.delete(&id)?;
        Ok(json!({}))
    }

    /// Encodes the request and hands it to the device's contact editor.
    /// Resolving means the editor was launched; the user-mediated save
    /// happens outside this call. A failed avatar fetch omits the photo
    /// record instead of failing the save.
    pub fn save_contact(&mut self, request: &SaveContactRequest) -> Result<Value, ServiceError> {
        let photo = request
            .image
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty())
            .and_then(|reference| fetch_avatar(reference, self.avatar_timeout_ms).ok());
        let (target, records) = encode_save(request, photo);
        self.editor.launch(&target, &records)?;
        Ok(json!({}))
    }

    /// Resolves immediately when the capability is already held; otherwise
    /// suspends the call and asks the platform. Denial is data, not an error.
    pub fn get_permissions(&mut self, call: CallId) -> PermissionOutcome {
        if self.gate.has_capability(CONTACTS_CAPABILITIES) {
            return PermissionOutcome::Resolved(PermissionResolution {
                call,
                granted: true,
            });
        }
        let superseded = self.broker.suspend(call);
        self.gate.request_capability(CONTACTS_CAPABILITIES);
        PermissionOutcome::Pending { superseded }
    }

    /// Platform callback entry point: resumes the suspended call, if any,
    /// with the user's verdict.
    pub fn on_permission_result(&mut self, granted: bool) -> Option<PermissionResolution> {
        self.broker.resume(granted)
    }
}
