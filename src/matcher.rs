use ahash::AHashMap;
use tracing::{debug, warn};

use crate::error::{CompareError, Result};
use crate::types::FieldRecord;

/// One version's field list, labelled with the version it came from.
#[derive(Debug, Clone, Copy)]
pub struct FieldSet<'a> {
    pub version_id: &'a str,
    pub fields: &'a [FieldRecord],
}

impl<'a> FieldSet<'a> {
    pub fn new(version_id: &'a str, fields: &'a [FieldRecord]) -> Self {
        Self { version_id, fields }
    }
}

/// Source and target fields partitioned by `field_id`.
#[derive(Debug, Default)]
pub struct FieldMatch<'a> {
    /// `(source, target)` pairs sharing a `field_id`, in source order.
    pub matched: Vec<(&'a FieldRecord, &'a FieldRecord)>,
    /// Present only in the target version, in target order.
    pub added_only: Vec<&'a FieldRecord>,
    /// Present only in the source version, in source order.
    pub removed_only: Vec<&'a FieldRecord>,
}

impl FieldMatch<'_> {
    /// Number of distinct field ids across both versions.
    pub fn distinct_count(&self) -> usize {
        self.matched.len() + self.added_only.len() + self.removed_only.len()
    }
}

pub fn match_fields<'a>(source: FieldSet<'a>, target: FieldSet<'a>) -> Result<FieldMatch<'a>> {
    let source_map = build_field_map(source)?;
    let target_map = build_field_map(target)?;

    let mut field_match = FieldMatch::default();

    for record in source.fields {
        match target_map.get(record.field_id.as_str()) {
            Some(&target_record) => field_match.matched.push((record, target_record)),
            None => field_match.removed_only.push(record),
        }
    }

    for record in target.fields {
        if !source_map.contains_key(record.field_id.as_str()) {
            field_match.added_only.push(record);
        }
    }

    debug!(
        source_version = source.version_id,
        target_version = target.version_id,
        matched = field_match.matched.len(),
        added = field_match.added_only.len(),
        removed = field_match.removed_only.len(),
        "Matched fields by id"
    );

    Ok(field_match)
}

fn build_field_map<'a>(set: FieldSet<'a>) -> Result<AHashMap<&'a str, &'a FieldRecord>> {
    let mut map: AHashMap<&'a str, &'a FieldRecord> = AHashMap::with_capacity(set.fields.len());
    for record in set.fields {
        validate_record(record, set.version_id)?;
        if map.contains_key(record.field_id.as_str()) {
            warn!(
                field_id = %record.field_id,
                version = set.version_id,
                "Duplicate field_id in version"
            );
            return Err(CompareError::DuplicateFieldId {
                field_id: record.field_id.clone(),
                version_id: set.version_id.to_string(),
            });
        }
        map.insert(record.field_id.as_str(), record);
    }
    Ok(map)
}

fn validate_record(record: &FieldRecord, version_id: &str) -> Result<()> {
    let reason = if record.page_number == 0 {
        Some("page_number must be 1 or greater")
    } else if record.position.as_ref().is_some_and(|p| !p.is_finite()) {
        Some("position coordinates must be finite")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CompareError::InvalidFieldRecord {
            field_id: record.field_id.clone(),
            version_id: version_id.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
