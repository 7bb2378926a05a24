//! File dispatch and extraction orchestration.

mod gcode;
mod rules;
mod threemf;

pub use gcode::parse_gcode_file;
pub use threemf::parse_3mf_file;

use std::path::Path;

use crate::color::color_name_from_hex;
use crate::format::format_quantity;
use crate::model::{merge, PrintInfo};

/// Supported print-file formats, in processing order: 3MF metadata is
/// authoritative, so those files are merged after all G-code files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum FileKind {
    Gcode,
    ThreeMf,
}

impl FileKind {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "gcode" => Some(FileKind::Gcode),
            "3mf" => Some(FileKind::ThreeMf),
            _ => None,
        }
    }
}

/// Extract a consolidated [`PrintInfo`] from a list of candidate files.
///
/// Files with other extensions are ignored, missing files are skipped, and
/// per-file failures are logged and skipped: extraction is best-effort and
/// never fails. An empty input yields a default record.
pub fn extract_print_info<P: AsRef<Path>>(paths: &[P]) -> PrintInfo {
    let mut files: Vec<(&Path, FileKind)> = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let Some(kind) = FileKind::from_path(path) else {
            continue;
        };
        if !path.exists() {
            tracing::debug!("Skipping missing file: {}", path.display());
            continue;
        }
        files.push((path, kind));
    }

    // Stable: G-code before 3MF, original order within each group.
    files.sort_by_key(|(_, kind)| *kind);

    let mut info = PrintInfo::default();
    for (path, kind) in files {
        let parsed = match kind {
            FileKind::Gcode => parse_gcode_file(path),
            FileKind::ThreeMf => parse_3mf_file(path),
        };
        match parsed {
            Ok(patch) => info = merge(info, patch),
            Err(err) => tracing::warn!("Skipping {}: {}", path.display(), err),
        }
    }

    post_process(&mut info);
    info
}

/// Final pass over the merged record: color-name resolution and layer-height
/// normalization.
fn post_process(info: &mut PrintInfo) {
    if let Some(color) = &info.filament_color {
        if let Some(name) = color_name_from_hex(color) {
            info.filament_color_name = Some(name.to_string());
        } else if !color.is_empty() && !color.starts_with('#') {
            // A bare token ("Galaxy Black") is its own display name.
            info.filament_color_name = Some(color.clone());
        }
    }

    if let Some(height) = &info.layer_height {
        info.layer_height = Some(normalize_layer_height(height));
    }
}

/// Reformat a layer height through the shared trimming rule, with or without
/// an existing " mm" suffix. Malformed numeric content is left untouched.
fn normalize_layer_height(value: &str) -> String {
    let trimmed = value.trim();
    let numeric = trimmed
        .strip_suffix("mm")
        .map(str::trim_end)
        .unwrap_or(trimmed);
    match numeric.trim().parse::<f64>() {
        Ok(height) => format!("{} mm", format_quantity(height)),
        Err(_) => value.to_string(),
    }
}
