use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::client::error::ClientResult;
use crate::client::storage::Storage;

/// Storage key holding the JSON array of applied job ids.
pub const APPLIED_JOBS_KEY: &str = "appliedJobs";

pub type AppliedSet = BTreeSet<String>;

/// The user's "already applied" job ids, written through to storage on every change.
#[derive(Debug)]
pub struct AppliedStore<S: Storage> {
    storage: S,
    applied: AppliedSet,
}

impl<S: Storage> AppliedStore<S> {
    /// Reads the persisted set. Missing or unreadable data gives an empty set.
    pub fn load(storage: S) -> Self {
        let applied = read_applied(&storage);
        debug!(count = applied.len(), "Loaded applied jobs");
        Self { storage, applied }
    }

    pub fn ids(&self) -> &AppliedSet {
        &self.applied
    }

    pub fn contains(&self, id: &str) -> bool {
        self.applied.contains(id)
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Replaces the whole set and persists it.
    pub fn save(&mut self, applied: AppliedSet) -> ClientResult<()> {
        self.write(&applied)?;
        self.applied = applied;
        Ok(())
    }

    /// Marks one job as applied. Returns `false` when it already was.
    pub fn add(&mut self, id: &str) -> ClientResult<bool> {
        if self.applied.contains(id) {
            return Ok(false);
        }
        let mut next = self.applied.clone();
        next.insert(id.to_string());
        self.write(&next)?;
        self.applied = next;
        Ok(true)
    }

    /// Empties the set if `confirm` agrees. Returns whether anything was cleared.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> ClientResult<bool> {
        if !confirm() {
            return Ok(false);
        }
        self.write(&AppliedSet::new())?;
        self.applied.clear();
        Ok(true)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Persists `applied`; callers only adopt it once this succeeds.
    fn write(&mut self, applied: &AppliedSet) -> ClientResult<()> {
        let ids: Vec<&str> = applied.iter().map(String::as_str).collect();
        let encoded = serde_json::to_string(&ids)
            .map_err(crate::client::storage::StorageError::from)?;
        self.storage.set_item(APPLIED_JOBS_KEY, &encoded)?;
        Ok(())
    }
}

fn read_applied<S: Storage>(storage: &S) -> AppliedSet {
    let raw = match storage.get_item(APPLIED_JOBS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppliedSet::new(),
        Err(err) => {
            warn!(error = %err, "Could not read applied jobs, starting empty");
            return AppliedSet::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(err) => {
            warn!(error = %err, "Stored applied jobs are malformed, starting empty");
            AppliedSet::new()
        }
    }
}
