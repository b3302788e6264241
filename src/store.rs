//! Field and metadata suppliers.
//!
//! The engine never loads versions itself; a [`VersionStore`] hands it the field list
//! and metadata for a version id. [`InMemoryStore`] backs tests and the JS bindings.

use ahash::AHashMap;
use tracing::debug;

use crate::core::{compare_with_options, ensure_distinct_versions};
use crate::error::{CompareError, Result};
use crate::types::{CompareOptions, ComparisonResult, FieldRecord, VersionMeta};

pub trait VersionStore {
    /// All extracted fields of a version. `MissingVersionData` if the id is unknown.
    fn fields(&self, version_id: &str) -> Result<Vec<FieldRecord>>;

    fn metadata(&self, version_id: &str) -> Result<VersionMeta>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct VersionData {
    pub meta: VersionMeta,
    pub fields: Vec<FieldRecord>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    versions: AHashMap<String, VersionData>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a version, replacing any previous data under the same id.
    pub fn insert(&mut self, version_id: impl Into<String>, meta: VersionMeta, fields: Vec<FieldRecord>) {
        self.versions
            .insert(version_id.into(), VersionData { meta, fields });
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    fn get(&self, version_id: &str) -> Result<&VersionData> {
        self.versions
            .get(version_id)
            .ok_or_else(|| CompareError::MissingVersionData {
                version_id: version_id.to_string(),
            })
    }
}

impl VersionStore for InMemoryStore {
    fn fields(&self, version_id: &str) -> Result<Vec<FieldRecord>> {
        Ok(self.get(version_id)?.fields.clone())
    }

    fn metadata(&self, version_id: &str) -> Result<VersionMeta> {
        Ok(self.get(version_id)?.meta)
    }
}

/// Load both versions from `store` and compare them.
pub fn compare_versions<S: VersionStore + ?Sized>(
    store: &S,
    source_version_id: &str,
    target_version_id: &str,
    options: &CompareOptions,
) -> Result<ComparisonResult> {
    ensure_distinct_versions(source_version_id, target_version_id)?;

    let source_meta = store.metadata(source_version_id)?;
    let target_meta = store.metadata(target_version_id)?;
    let source_fields = store.fields(source_version_id)?;
    let target_fields = store.fields(target_version_id)?;

    debug!(
        source_version = source_version_id,
        target_version = target_version_id,
        source_fields = source_fields.len(),
        target_fields = target_fields.len(),
        "Loaded versions for comparison"
    );

    compare_with_options(
        source_version_id,
        target_version_id,
        &source_fields,
        &target_fields,
        &source_meta,
        &target_meta,
        options,
    )
}
