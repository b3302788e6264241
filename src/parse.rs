//! Parsing of field exports produced by the upstream PDF extractor.
//!
//! Expected header (case-insensitive, any column order):
//! `field_id,field_type,page_number,near_text,value_options,x0,y0,x1,y1`
//! Only the first three columns are required.
//!
//! Empty optional cells load as absent. A blank `near_text` cell therefore compares as
//! `NOT_APPLICABLE`, whereas `""` supplied through JSON is a present, empty label.

use ahash::AHashMap;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{CompareError, Result};
use crate::types::{BoundingBox, FieldRecord, FieldType};

const OPTION_SEPARATOR: char = '|';
const REQUIRED_COLUMNS: [&str; 3] = ["field_id", "field_type", "page_number"];
const POSITION_COLUMNS: [&str; 4] = ["x0", "y0", "x1", "y1"];

pub fn parse_field_export(csv_content: &str) -> Result<Vec<FieldRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let header_map: AHashMap<String, usize> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_ascii_lowercase(), i))
        .collect();

    for column in REQUIRED_COLUMNS {
        if !header_map.contains_key(column) {
            return Err(CompareError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(parse_row(&row, &header_map)?);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord, header_map: &AHashMap<String, usize>) -> Result<FieldRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    let value = |name: &str| cell(row, header_map, name);
    let parse_error = |message: String| CompareError::Parse { line, message };

    let field_id = value("field_id")
        .ok_or_else(|| parse_error("field_id is empty".to_string()))?
        .to_string();
    let field_type = FieldType::from_tag(value("field_type").unwrap_or(""));
    let page_number = value("page_number")
        .ok_or_else(|| parse_error(format!("page_number is empty for field \"{}\"", field_id)))?
        .parse::<u32>()
        .map_err(|e| parse_error(format!("invalid page_number for field \"{}\": {}", field_id, e)))?;

    let near_text = value("near_text").map(str::to_string);
    let value_options = value("value_options").map(|v| {
        v.split(OPTION_SEPARATOR)
            .map(|o| o.trim().to_string())
            .collect::<Vec<_>>()
    });

    let mut coords = [0.0f64; 4];
    let mut present = 0;
    for (slot, column) in coords.iter_mut().zip(POSITION_COLUMNS) {
        if let Some(raw) = value(column) {
            *slot = raw.parse::<f64>().map_err(|e| {
                parse_error(format!("invalid {} for field \"{}\": {}", column, field_id, e))
            })?;
            present += 1;
        }
    }
    let position = (present == POSITION_COLUMNS.len())
        .then(|| BoundingBox::new(coords[0], coords[1], coords[2], coords[3]));

    Ok(FieldRecord {
        field_id,
        field_type,
        page_number,
        near_text,
        value_options,
        position,
    })
}

/// Non-empty value of a named column, if the column exists.
fn cell<'r>(row: &'r StringRecord, header_map: &AHashMap<String, usize>, name: &str) -> Option<&'r str> {
    header_map
        .get(name)
        .and_then(|&idx| row.get(idx))
        .filter(|v| !v.is_empty())
}
