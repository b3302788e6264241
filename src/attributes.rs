//! Per-attribute comparison of a matched field pair.
//!
//! Each comparable attribute yields its own [`DiffStatus`]. A missing attribute on
//! either side is `NOT_APPLICABLE`, never `DIFFERENT`.

use crate::types::{BoundingBox, DiffStatus, FieldRecord, PositionTolerance};
use crate::utils::{normalize_text, within_tolerance};

/// Diff statuses for one matched pair, with the raw values from both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDiffs {
    pub near_text_diff: DiffStatus,
    pub source_near_text: Option<String>,
    pub target_near_text: Option<String>,
    pub value_options_diff: DiffStatus,
    pub source_value_options: Option<Vec<String>>,
    pub target_value_options: Option<Vec<String>>,
    pub position_change: DiffStatus,
    pub source_position: Option<BoundingBox>,
    pub target_position: Option<BoundingBox>,
}

impl AttributeDiffs {
    pub fn any_different(&self) -> bool {
        [
            self.near_text_diff,
            self.value_options_diff,
            self.position_change,
        ]
        .contains(&DiffStatus::Different)
    }
}

pub fn diff_attributes(
    source: &FieldRecord,
    target: &FieldRecord,
    tolerance: PositionTolerance,
) -> AttributeDiffs {
    AttributeDiffs {
        near_text_diff: diff_near_text(source.near_text.as_deref(), target.near_text.as_deref()),
        source_near_text: source.near_text.clone(),
        target_near_text: target.near_text.clone(),
        value_options_diff: diff_value_options(source, target),
        source_value_options: source.value_options.clone(),
        target_value_options: target.value_options.clone(),
        position_change: diff_position(source.position.as_ref(), target.position.as_ref(), tolerance),
        source_position: source.position,
        target_position: target.position,
    }
}

pub fn diff_near_text(source: Option<&str>, target: Option<&str>) -> DiffStatus {
    match (source, target) {
        (Some(s), Some(t)) if normalize_text(s) == normalize_text(t) => DiffStatus::Equal,
        (Some(_), Some(_)) => DiffStatus::Different,
        _ => DiffStatus::NotApplicable,
    }
}

/// Option order is significant: a reordered list is a change.
pub fn diff_value_options(source: &FieldRecord, target: &FieldRecord) -> DiffStatus {
    if !source.field_type.supports_options() && !target.field_type.supports_options() {
        return DiffStatus::NotApplicable;
    }

    match (&source.value_options, &target.value_options) {
        (Some(s), Some(t)) if s == t => DiffStatus::Equal,
        (Some(_), Some(_)) => DiffStatus::Different,
        _ => DiffStatus::NotApplicable,
    }
}

pub fn diff_position(
    source: Option<&BoundingBox>,
    target: Option<&BoundingBox>,
    tolerance: PositionTolerance,
) -> DiffStatus {
    let (Some(s), Some(t)) = (source, target) else {
        return DiffStatus::NotApplicable;
    };

    let all_within = s
        .coordinates()
        .iter()
        .zip(t.coordinates().iter())
        .all(|(a, b)| within_tolerance(*a, *b, tolerance.value()));

    if all_within {
        DiffStatus::Equal
    } else {
        DiffStatus::Different
    }
}
