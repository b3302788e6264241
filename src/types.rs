use serde::{Deserialize, Serialize};

use crate::error::{CompareError, Result};

/// Default tolerance, in PDF user-space units, for bounding-box comparison.
pub const DEFAULT_POSITION_TOLERANCE: f64 = 2.0;

/// Kind of form widget as reported by the upstream extractor.
///
/// Serialized in snake_case; deserialized leniently through [`FieldType::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FieldType {
    Text,
    Checkbox,
    RadioButton,
    Select,
    Listbox,
    Textarea,
    Button,
    Signature,
    Unknown,
}

impl FieldType {
    /// Whether fields of this type carry an ordered list of selectable values.
    pub fn supports_options(self) -> bool {
        matches!(
            self,
            FieldType::Checkbox | FieldType::RadioButton | FieldType::Select | FieldType::Listbox
        )
    }

    /// Lenient tag lookup shared by the field export loader and serde.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "text" | "textfield" | "text_field" => FieldType::Text,
            "checkbox" | "check_box" => FieldType::Checkbox,
            "radio" | "radio_button" | "radiobutton" => FieldType::RadioButton,
            "select" | "combobox" | "combo_box" | "dropdown" | "choice" => FieldType::Select,
            "listbox" | "list_box" | "list" => FieldType::Listbox,
            "textarea" | "text_area" | "multiline" => FieldType::Textarea,
            "button" | "pushbutton" | "push_button" => FieldType::Button,
            "signature" | "sig" => FieldType::Signature,
            _ => FieldType::Unknown,
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        FieldType::from_tag(&tag)
    }
}

/// Axis-aligned bounding box of a widget on its page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn coordinates(&self) -> [f64; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    pub fn is_finite(&self) -> bool {
        self.coordinates().iter().all(|c| c.is_finite())
    }
}

/// One extracted field of one template version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub field_id: String,
    pub field_type: FieldType,
    pub page_number: u32,
    #[serde(default)]
    pub near_text: Option<String>,
    #[serde(default)]
    pub value_options: Option<Vec<String>>,
    #[serde(default)]
    pub position: Option<BoundingBox>,
}

impl FieldRecord {
    pub fn new(field_id: impl Into<String>, field_type: FieldType, page_number: u32) -> Self {
        Self {
            field_id: field_id.into(),
            field_type,
            page_number,
            near_text: None,
            value_options: None,
            position: None,
        }
    }

    pub fn with_near_text(mut self, near_text: impl Into<String>) -> Self {
        self.near_text = Some(near_text.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_position(mut self, position: BoundingBox) -> Self {
        self.position = Some(position);
        self
    }
}

/// Per-version metadata supplied alongside the field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionMeta {
    pub page_count: u32,
    pub field_count: u32,
}

impl VersionMeta {
    pub fn new(page_count: u32, field_count: u32) -> Self {
        Self {
            page_count,
            field_count,
        }
    }
}

/// Maximum per-coordinate drift still treated as the same position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PositionTolerance(f64);

impl PositionTolerance {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(CompareError::InvalidTolerance(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PositionTolerance {
    fn default() -> Self {
        Self(DEFAULT_POSITION_TOLERANCE)
    }
}

impl TryFrom<f64> for PositionTolerance {
    type Error = CompareError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PositionTolerance> for f64 {
    fn from(tolerance: PositionTolerance) -> Self {
        tolerance.0
    }
}

/// Caller-tunable knobs for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub tolerance: PositionTolerance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffStatus {
    Equal,
    Different,
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldChangeStatus {
    Added,
    Removed,
    Modified,
    Unchanged,
}

/// Classified outcome for one distinct `field_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field_id: String,
    pub status: FieldChangeStatus,
    pub field_type: FieldType,
    pub source_page_number: Option<u32>,
    pub target_page_number: Option<u32>,
    pub page_number_changed: bool,
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

impl FieldChange {
    /// Names of the attributes that differ between source and target.
    pub fn changed_attributes(&self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.page_number_changed {
            changed.push("page_number");
        }
        if self.near_text_diff == DiffStatus::Different {
            changed.push("near_text");
        }
        if self.value_options_diff == DiffStatus::Different {
            changed.push("value_options");
        }
        if self.position_change == DiffStatus::Different {
            changed.push("position");
        }
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalMetrics {
    pub page_count_changed: bool,
    pub field_count_changed: bool,
    pub fields_added: usize,
    pub fields_removed: usize,
    pub fields_modified: usize,
    pub fields_unchanged: usize,
    pub modification_percentage: f64,
}

impl GlobalMetrics {
    /// Number of distinct field ids across both versions.
    pub fn total_fields(&self) -> usize {
        self.fields_added + self.fields_removed + self.fields_modified + self.fields_unchanged
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub source_version_id: String,
    pub target_version_id: String,
    pub global_metrics: GlobalMetrics,
    pub field_changes: Vec<FieldChange>,
}

impl ComparisonResult {
    pub fn changes_with_status(
        &self,
        status: FieldChangeStatus,
    ) -> impl Iterator<Item = &FieldChange> + '_ {
        self.field_changes.iter().filter(move |c| c.status == status)
    }

    pub fn change_for(&self, field_id: &str) -> Option<&FieldChange> {
        self.field_changes
            .binary_search_by(|c| c.field_id.as_str().cmp(field_id))
            .ok()
            .map(|idx| &self.field_changes[idx])
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CompareError::Serialization(e.to_string()))
    }
}

/// Everything needed to run one comparison, as accepted by the batch and JS entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub source_version_id: String,
    pub target_version_id: String,
    pub source_fields: Vec<FieldRecord>,
    pub target_fields: Vec<FieldRecord>,
    pub source_meta: VersionMeta,
    pub target_meta: VersionMeta,
    #[serde(default)]
    pub options: CompareOptions,
}
