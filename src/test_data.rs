//! Test data module with field sets and expected comparison results
//!
//! Inline test cases with known results covering the comparison engine's
//! scenarios, edge cases and validation errors.

use crate::types::{BoundingBox, FieldRecord, FieldType};

/// Const-constructible description of one field record
pub struct FieldFixture {
    pub id: &'static str,
    pub field_type: FieldType,
    pub page: u32,
    pub near_text: Option<&'static str>,
    pub options: Option<&'static [&'static str]>,
    pub position: Option<[f64; 4]>,
}

impl FieldFixture {
    pub fn to_record(&self) -> FieldRecord {
        FieldRecord {
            field_id: self.id.to_string(),
            field_type: self.field_type,
            page_number: self.page,
            near_text: self.near_text.map(str::to_string),
            value_options: self
                .options
                .map(|opts| opts.iter().map(|o| o.to_string()).collect()),
            position: self
                .position
                .map(|[x0, y0, x1, y1]| BoundingBox::new(x0, y0, x1, y1)),
        }
    }
}

const fn text(id: &'static str, page: u32, near_text: &'static str) -> FieldFixture {
    FieldFixture {
        id,
        field_type: FieldType::Text,
        page,
        near_text: Some(near_text),
        options: None,
        position: None,
    }
}

const fn placed(id: &'static str, near_text: &'static str, position: [f64; 4]) -> FieldFixture {
    FieldFixture {
        id,
        field_type: FieldType::Text,
        page: 1,
        near_text: Some(near_text),
        options: None,
        position: Some(position),
    }
}

const fn choice(id: &'static str, field_type: FieldType, options: &'static [&'static str]) -> FieldFixture {
    FieldFixture {
        id,
        field_type,
        page: 1,
        near_text: None,
        options: Some(options),
        position: None,
    }
}

/// Test case structure containing source/target fields and expected results
pub struct TestCase {
    pub name: &'static str,
    #[allow(dead_code)]
    pub description: &'static str,
    pub source_fields: &'static [FieldFixture],
    pub target_fields: &'static [FieldFixture],
    pub source_version: &'static str,
    pub target_version: &'static str,
    pub tolerance: f64,
    pub expected: ExpectedResult,
}

/// Expected result structure
pub struct ExpectedResult {
    pub added_count: usize,
    pub removed_count: usize,
    pub modified_count: usize,
    pub unchanged_count: usize,
    pub modification_percentage: f64,
    pub should_error: bool,
    pub error_kind: Option<&'static str>,
}

const fn counts(added: usize, removed: usize, modified: usize, unchanged: usize, pct: f64) -> ExpectedResult {
    ExpectedResult {
        added_count: added,
        removed_count: removed,
        modified_count: modified,
        unchanged_count: unchanged,
        modification_percentage: pct,
        should_error: false,
        error_kind: None,
    }
}

const fn error(kind: &'static str) -> ExpectedResult {
    ExpectedResult {
        added_count: 0,
        removed_count: 0,
        modified_count: 0,
        unchanged_count: 0,
        modification_percentage: 0.0,
        should_error: true,
        error_kind: Some(kind),
    }
}

/// Basic scenarios
pub mod basic {
    use super::*;

    /// One field, label changed
    pub const NEAR_TEXT_CHANGED: TestCase = TestCase {
        name: "near_text_changed",
        description: "Single text field whose label changed from Name to Full Name",
        source_fields: &[text("A", 1, "Name")],
        target_fields: &[text("A", 1, "Full Name")],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 1, 0, 100.0),
    };

    pub const ADD_REMOVE: TestCase = TestCase {
        name: "add_remove",
        description: "{A, B} -> {B, C}: A removed, B unchanged, C added",
        source_fields: &[text("A", 1, "First"), text("B", 1, "Second")],
        target_fields: &[text("B", 1, "Second"), text("C", 1, "Third")],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(1, 1, 0, 1, 0.0),
    };

    pub const BOTH_EMPTY: TestCase = TestCase {
        name: "both_empty",
        description: "No fields on either side, no division error",
        source_fields: &[],
        target_fields: &[],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 0, 0, 0.0),
    };

    pub const EMPTY_SOURCE: TestCase = TestCase {
        name: "empty_source",
        description: "Empty source, all target fields are added",
        source_fields: &[],
        target_fields: &[text("A", 1, "Name"), text("B", 2, "Date")],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(2, 0, 0, 0, 0.0),
    };

    pub const EMPTY_TARGET: TestCase = TestCase {
        name: "empty_target",
        description: "Empty target, all source fields are removed",
        source_fields: &[text("A", 1, "Name"), text("B", 2, "Date")],
        target_fields: &[],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 2, 0, 0, 0.0),
    };

    pub const PAGE_MOVE: TestCase = TestCase {
        name: "page_move",
        description: "Field moved to page 2 with identical attributes",
        source_fields: &[text("A", 1, "Name"), text("B", 1, "Date")],
        target_fields: &[text("A", 2, "Name"), text("B", 1, "Date")],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 1, 1, 50.0),
    };
}

/// Value option comparison
pub mod options {
    use super::*;

    pub const REORDERED: TestCase = TestCase {
        name: "options_reordered",
        description: "Reordering radio options counts as a change",
        source_fields: &[choice("plan", FieldType::RadioButton, &["A", "B"])],
        target_fields: &[choice("plan", FieldType::RadioButton, &["B", "A"])],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 1, 0, 100.0),
    };

    pub const SAME_OPTIONS: TestCase = TestCase {
        name: "options_same",
        description: "Identical listbox options are unchanged",
        source_fields: &[choice("state", FieldType::Listbox, &["FL", "GA", "NY"])],
        target_fields: &[choice("state", FieldType::Listbox, &["FL", "GA", "NY"])],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 0, 1, 0.0),
    };

    pub const TEXT_FIELD_OPTIONS_IGNORED: TestCase = TestCase {
        name: "text_field_options_ignored",
        description: "Stray options on text fields are not compared",
        source_fields: &[choice("note", FieldType::Text, &["x"])],
        target_fields: &[choice("note", FieldType::Text, &["y"])],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 0, 1, 0.0),
    };
}

/// Bounding-box tolerance
pub mod position {
    use super::*;

    pub const JITTER_WITHIN_TOLERANCE: TestCase = TestCase {
        name: "jitter_within_tolerance",
        description: "Re-extraction drift of exactly the tolerance is equal",
        source_fields: &[placed("sig", "Signature", [100.0, 50.0, 300.0, 70.0])],
        target_fields: &[placed("sig", "Signature", [102.0, 48.0, 298.0, 72.0])],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 0, 1, 0.0),
    };

    pub const MOVED_BEYOND_TOLERANCE: TestCase = TestCase {
        name: "moved_beyond_tolerance",
        description: "One coordinate past the tolerance is a change",
        source_fields: &[placed("sig", "Signature", [100.0, 50.0, 300.0, 70.0])],
        target_fields: &[placed("sig", "Signature", [100.0, 50.0, 302.5, 70.0])],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: counts(0, 0, 1, 0, 100.0),
    };

    pub const LOOSE_TOLERANCE: TestCase = TestCase {
        name: "loose_tolerance",
        description: "Caller-supplied tolerance absorbs larger drift",
        source_fields: &[placed("sig", "Signature", [100.0, 50.0, 300.0, 70.0])],
        target_fields: &[placed("sig", "Signature", [100.0, 50.0, 302.5, 70.0])],
        source_version: "v1",
        target_version: "v2",
        tolerance: 5.0,
        expected: counts(0, 0, 0, 1, 0.0),
    };
}

/// Validation and error cases
pub mod validation {
    use super::*;

    pub const DUPLICATE_ID_SOURCE: TestCase = TestCase {
        name: "duplicate_id_source",
        description: "Duplicate field ids in source must error",
        source_fields: &[text("A", 1, "Name"), text("A", 2, "Name again")],
        target_fields: &[text("A", 1, "Name")],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: error("duplicate_field_id"),
    };

    pub const DUPLICATE_ID_TARGET: TestCase = TestCase {
        name: "duplicate_id_target",
        description: "Duplicate field ids in target must error",
        source_fields: &[text("A", 1, "Name")],
        target_fields: &[text("B", 1, "Date"), text("B", 1, "Date")],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: error("duplicate_field_id"),
    };

    pub const IDENTICAL_VERSIONS: TestCase = TestCase {
        name: "identical_versions",
        description: "Comparing a version with itself is a usage error",
        source_fields: &[text("A", 1, "Name")],
        target_fields: &[text("A", 1, "Name")],
        source_version: "v1",
        target_version: "v1",
        tolerance: 2.0,
        expected: error("identical_versions"),
    };

    pub const PAGE_ZERO: TestCase = TestCase {
        name: "page_zero",
        description: "Pages are 1-indexed",
        source_fields: &[text("A", 0, "Name")],
        target_fields: &[text("A", 1, "Name")],
        source_version: "v1",
        target_version: "v2",
        tolerance: 2.0,
        expected: error("invalid_field_record"),
    };

    pub const NEGATIVE_TOLERANCE: TestCase = TestCase {
        name: "negative_tolerance",
        description: "Tolerance must be non-negative",
        source_fields: &[],
        target_fields: &[],
        source_version: "v1",
        target_version: "v2",
        tolerance: -1.0,
        expected: error("invalid_tolerance"),
    };
}

/// Every test case, for sweeping checks
pub const ALL_CASES: &[&TestCase] = &[
    &basic::NEAR_TEXT_CHANGED,
    &basic::ADD_REMOVE,
    &basic::BOTH_EMPTY,
    &basic::EMPTY_SOURCE,
    &basic::EMPTY_TARGET,
    &basic::PAGE_MOVE,
    &options::REORDERED,
    &options::SAME_OPTIONS,
    &options::TEXT_FIELD_OPTIONS_IGNORED,
    &position::JITTER_WITHIN_TOLERANCE,
    &position::MOVED_BEYOND_TOLERANCE,
    &position::LOOSE_TOLERANCE,
    &validation::DUPLICATE_ID_SOURCE,
    &validation::DUPLICATE_ID_TARGET,
    &validation::IDENTICAL_VERSIONS,
    &validation::PAGE_ZERO,
    &validation::NEGATIVE_TOLERANCE,
];
