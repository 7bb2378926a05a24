//! PrintInfo - consolidated print metadata for one piece.

use serde::{Deserialize, Serialize};

/// Consolidated print metadata extracted from one piece's print files.
///
/// All string fields carry display-ready values with unit suffixes already
/// applied (" m", " g", " mm", " g/cm³"). Optional fields stay `None` when no
/// source provided them; counters stay zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintInfo {
    /// Human-readable print time estimate ("Xh Ym" / "Xm Ys" / "Xs").
    pub time_human: Option<String>,
    /// Number of distinct printable objects detected.
    pub pieces: u32,
    /// Number of color/tool-change events.
    pub color_changes: u32,
    /// Filament material identifier (e.g. "PLA").
    pub filament_type: Option<String>,
    /// Filament density with " g/cm³" suffix.
    pub filament_density: Option<String>,
    /// Filament diameter with " mm" suffix.
    pub filament_diameter: Option<String>,
    /// Raw color token: "#RRGGBB" or a bare name.
    pub filament_color: Option<String>,
    /// Human-readable color name derived in post-processing.
    pub filament_color_name: Option<String>,
    /// Filament length with " m" suffix.
    pub filament_amount_m: Option<String>,
    /// Filament weight with " g" suffix.
    pub filament_amount_g: Option<String>,
    /// Layer height with " mm" suffix.
    pub layer_height: Option<String>,
    /// Total layer count (last value parsed wins).
    pub total_layers: u32,
}

impl PrintInfo {
    /// True when no file contributed any field.
    pub fn is_empty(&self) -> bool {
        *self == PrintInfo::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_empty() {
        let info = PrintInfo::default();
        assert!(info.is_empty());
        assert_eq!(info.pieces, 0);
        assert_eq!(info.color_changes, 0);
        assert_eq!(info.total_layers, 0);
        assert_eq!(info.time_human, None);
    }

    #[test]
    fn test_populated_is_not_empty() {
        let info = PrintInfo {
            filament_type: Some("PLA".to_string()),
            ..Default::default()
        };
        assert!(!info.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let info = PrintInfo {
            time_human: Some("1h 30m".to_string()),
            pieces: 3,
            color_changes: 2,
            filament_type: Some("PETG".to_string()),
            filament_amount_m: Some("3.44 m".to_string()),
            layer_height: Some("0.20 mm".to_string()),
            total_layers: 137,
            ..Default::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: PrintInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
