use tracing::trace;

use crate::attributes::AttributeDiffs;
use crate::matcher::FieldMatch;
use crate::types::{DiffStatus, FieldChange, FieldChangeStatus, FieldRecord};

/// Turn matcher output plus per-pair attribute diffs into one change per field id.
///
/// `diffs` must be aligned with `field_match.matched`. The result is unordered;
/// callers sort by `field_id`.
pub fn classify(field_match: &FieldMatch<'_>, diffs: Vec<AttributeDiffs>) -> Vec<FieldChange> {
    debug_assert_eq!(field_match.matched.len(), diffs.len());

    let mut changes = Vec::with_capacity(field_match.distinct_count());

    for record in &field_match.added_only {
        changes.push(added_change(record));
    }

    for record in &field_match.removed_only {
        changes.push(removed_change(record));
    }

    for (&(source, target), diffs) in field_match.matched.iter().zip(diffs) {
        changes.push(matched_change(source, target, diffs));
    }

    changes
}

fn added_change(record: &FieldRecord) -> FieldChange {
    trace!(field_id = %record.field_id, "Field added");
    FieldChange {
        field_id: record.field_id.clone(),
        status: FieldChangeStatus::Added,
        field_type: record.field_type,
        source_page_number: None,
        target_page_number: Some(record.page_number),
        page_number_changed: false,
        near_text_diff: DiffStatus::NotApplicable,
        source_near_text: None,
        target_near_text: record.near_text.clone(),
        value_options_diff: DiffStatus::NotApplicable,
        source_value_options: None,
        target_value_options: record.value_options.clone(),
        position_change: DiffStatus::NotApplicable,
        source_position: None,
        target_position: record.position,
    }
}

fn removed_change(record: &FieldRecord) -> FieldChange {
    trace!(field_id = %record.field_id, "Field removed");
    FieldChange {
        field_id: record.field_id.clone(),
        status: FieldChangeStatus::Removed,
        field_type: record.field_type,
        source_page_number: Some(record.page_number),
        target_page_number: None,
        page_number_changed: false,
        near_text_diff: DiffStatus::NotApplicable,
        source_near_text: record.near_text.clone(),
        target_near_text: None,
        value_options_diff: DiffStatus::NotApplicable,
        source_value_options: record.value_options.clone(),
        target_value_options: None,
        position_change: DiffStatus::NotApplicable,
        source_position: record.position,
        target_position: None,
    }
}

fn matched_change(source: &FieldRecord, target: &FieldRecord, diffs: AttributeDiffs) -> FieldChange {
    // A field moving to another page is a structural change on its own.
    let page_number_changed = source.page_number != target.page_number;
    let status = if page_number_changed || diffs.any_different() {
        FieldChangeStatus::Modified
    } else {
        FieldChangeStatus::Unchanged
    };

    trace!(field_id = %target.field_id, ?status, "Field classified");

    FieldChange {
        field_id: target.field_id.clone(),
        status,
        field_type: target.field_type,
        source_page_number: Some(source.page_number),
        target_page_number: Some(target.page_number),
        page_number_changed,
        near_text_diff: diffs.near_text_diff,
        source_near_text: diffs.source_near_text,
        target_near_text: diffs.target_near_text,
        value_options_diff: diffs.value_options_diff,
        source_value_options: diffs.source_value_options,
        target_value_options: diffs.target_value_options,
        position_change: diffs.position_change,
        source_position: diffs.source_position,
        target_position: diffs.target_position,
    }
}
