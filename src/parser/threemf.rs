//! 3MF container scanner.
//!
//! A 3MF file is a zip archive. Slicers embed project metadata in `.ini`,
//! `.config`, and `Metadata/` entries as key=value text; the mesh part lives
//! at `3D/3dmodel.model`. Only the metadata text and a shallow `<object` tag
//! count are read here; the mesh geometry itself is never parsed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{ExtractError, Result};
use crate::format::normalize_time_token;
use crate::model::{PrintInfoPatch, SetPolicy};

use super::rules::{apply_field, field_for_key, format_amount, parse_unit_amount, split_key_value};

/// Archive entry holding the model XML.
const MODEL_ENTRY: &str = "3D/3dmodel.model";

/// True for archive entries that may carry slicer metadata.
fn is_metadata_entry(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".ini") || lower.contains("metadata") || lower.ends_with(".config")
}

/// Parse one 3MF file into a patch.
///
/// Unreadable entries are skipped; only failure to open the file or the
/// archive surfaces as an error. The patch holds whatever was recovered.
pub fn parse_3mf_file(path: &Path) -> Result<PrintInfoPatch> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|source| ExtractError::CorruptArchive {
        path: path.to_path_buf(),
        source,
    })?;

    let mut patch = PrintInfoPatch::default();

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    for name in &names {
        if !is_metadata_entry(name) {
            continue;
        }
        let mut content = String::new();
        match archive.by_name(name) {
            Ok(mut entry) => {
                // Binary entries under Metadata/ (thumbnails etc.) fail the
                // UTF-8 read and are skipped.
                if entry.read_to_string(&mut content).is_err() {
                    tracing::debug!("Skipping non-text entry {} in {}", name, path.display());
                    continue;
                }
            }
            Err(err) => {
                tracing::debug!("Cannot read entry {} in {}: {}", name, path.display(), err);
                continue;
            }
        }
        for line in content.lines() {
            scan_metadata_line(&mut patch, line);
        }
    }

    // Piece count from the model part: a shallow tag scan is enough to count
    // the declared objects.
    if let Ok(mut entry) = archive.by_name(MODEL_ENTRY) {
        let mut xml = String::new();
        if entry.read_to_string(&mut xml).is_ok() {
            let objects = xml.matches("<object").count() as u32;
            if objects > 0 {
                patch.pieces = patch.pieces.max(objects);
            }
        }
    }

    Ok(patch)
}

/// Scan one metadata line. 3MF values always overwrite: these files are
/// merged after all G-code files and are the authoritative source.
fn scan_metadata_line(patch: &mut PrintInfoPatch, line: &str) {
    let line = line.trim();
    // PrusaSlicer project configs comment their key=value lines.
    let body = line.strip_prefix(';').unwrap_or(line).trim();

    let Some((key, value)) = split_key_value(body) else {
        return;
    };
    let key = key.to_lowercase();

    if key.starts_with("estimated printing time") {
        if let Some(time) = normalize_time_token(value) {
            patch.time_human = Some((time, SetPolicy::Overwrite));
        }
    } else if key.starts_with("filament used") || key.starts_with("filament total") {
        match parse_unit_amount(value) {
            Some((m, 'm')) => patch.filament_amount_m = Some(format_amount(m, " m")),
            Some((g, 'g')) => patch.filament_amount_g = Some(format_amount(g, " g")),
            _ => {}
        }
    } else if let Some(field) = field_for_key(&key) {
        apply_field(patch, field, value);
    }
}
