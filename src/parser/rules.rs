//! Data-driven key matching for slicer metadata lines.
//!
//! The G-code and 3MF scanners share one key table: a metadata line is split
//! at its first `=` or `:`, the lowercased key is looked up here, and the
//! value is written through a single transform per field. Supporting a new
//! slicer dialect is a new key in the table, not new parsing code.

use crate::format::format_quantity;
use crate::model::PrintInfoPatch;

/// Metadata fields a key/value line can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FilamentType,
    FilamentColor,
    FilamentDensity,
    FilamentDiameter,
    LayerHeight,
    TotalLayers,
}

/// One key rule: any of `keys` (lowercase, exact match) populates `field`.
/// Key order encodes dialect precedence (e.g. `filament_type` before the
/// Cura-style `material`).
pub struct KeyRule {
    pub keys: &'static [&'static str],
    pub field: Field,
}

/// Key table for single-value metadata fields.
pub const KEY_RULES: &[KeyRule] = &[
    KeyRule {
        keys: &["filament_type", "material"],
        field: Field::FilamentType,
    },
    KeyRule {
        keys: &["filament_colour", "material_color"],
        field: Field::FilamentColor,
    },
    KeyRule {
        keys: &["filament_density"],
        field: Field::FilamentDensity,
    },
    KeyRule {
        keys: &["filament_diameter"],
        field: Field::FilamentDiameter,
    },
    KeyRule {
        keys: &["layer_height"],
        field: Field::LayerHeight,
    },
    KeyRule {
        keys: &["total layer number"],
        field: Field::TotalLayers,
    },
];

/// Split a metadata line into (key, value) at the first `=` or `:`.
///
/// Slicer dialects mix both separators (`filament_type = PLA`,
/// `MATERIAL:PLA`), so the splitter accepts either.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let sep = line.find(['=', ':'])?;
    let key = line[..sep].trim();
    let value = line[sep + 1..].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Look up the field for a lowercased key.
pub fn field_for_key(key: &str) -> Option<Field> {
    KEY_RULES
        .iter()
        .find(|rule| rule.keys.iter().any(|k| *k == key))
        .map(|rule| rule.field)
}

/// Write a matched value into the patch, applying the field's transform.
///
/// Numeric fields that fail to parse are skipped, leaving any earlier value
/// in place.
pub fn apply_field(patch: &mut PrintInfoPatch, field: Field, value: &str) {
    match field {
        Field::FilamentType => {
            if !value.is_empty() {
                patch.filament_type = Some(value.to_string());
            }
        }
        Field::FilamentColor => {
            if !value.is_empty() {
                patch.filament_color = Some(value.to_string());
            }
        }
        Field::FilamentDensity => {
            if value.parse::<f64>().is_ok() {
                patch.filament_density = Some(format!("{} g/cm³", value));
            }
        }
        Field::FilamentDiameter => {
            if value.parse::<f64>().is_ok() {
                patch.filament_diameter = Some(format!("{} mm", value));
            }
        }
        Field::LayerHeight => {
            if value.parse::<f64>().is_ok() {
                patch.layer_height = Some(format!("{} mm", value));
            }
        }
        Field::TotalLayers => {
            if let Ok(layers) = value.parse::<u32>() {
                patch.total_layers = Some(layers);
            }
        }
    }
}

/// Parse a filament amount value with a trailing unit, e.g. "3.44m" or
/// "10.26 g". Returns the numeric value and the lowercase unit character.
pub fn parse_unit_amount(value: &str) -> Option<(f64, char)> {
    let value = value.trim();
    let unit = value.chars().last()?.to_ascii_lowercase();
    if unit != 'm' && unit != 'g' {
        return None;
    }
    let number = value[..value.len() - 1].trim();
    number.parse::<f64>().ok().map(|n| (n, unit))
}

/// Format a resolved amount with its display suffix.
pub fn format_amount(value: f64, suffix: &str) -> String {
    format!("{}{}", format_quantity(value), suffix)
}
