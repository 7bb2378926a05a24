//! G-code comment scanner.
//!
//! Reads a sliced G-code file line by line and recovers print metadata from
//! the comment headers of three slicer families (PrusaSlicer/Orca key=value
//! comments, Cura `;KEY:value` headers, generic `;TIME:`/`;TIME_ELAPSED:`
//! forms) plus the raw `T<n>` / `M600` motion commands.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::format::{format_duration, normalize_time_token, time_from_filename};
use crate::model::{PrintInfoPatch, SetPolicy};

use super::rules::{apply_field, field_for_key, format_amount, parse_unit_amount, split_key_value};

/// Scan state for a single G-code file.
///
/// Filament amounts are collected into per-dialect slots and resolved once
/// the whole file has been read; see [`GcodeScan::finish`] for the
/// documented priority order.
#[derive(Default)]
struct GcodeScan {
    patch: PrintInfoPatch,
    /// "filament used [mm] = N" slot.
    used_mm: Option<f64>,
    /// "filament used [g] = N" slot.
    used_g: Option<f64>,
    /// Cura "Filament used: Nm" slot.
    cura_m: Option<f64>,
    /// Generic "filament used=Ng" slot.
    inline_g: Option<f64>,
    /// Distinct object names declared so far in this file.
    objects: HashSet<String>,
    /// Active tool index, once a T command established the baseline.
    last_tool: Option<u32>,
}

impl GcodeScan {
    fn scan_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        match line.strip_prefix(';') {
            Some(comment) => self.scan_comment(comment.trim()),
            None => self.scan_command(line),
        }
    }

    /// Handle a raw machine command (anything outside a comment).
    fn scan_command(&mut self, line: &str) {
        // Strip a trailing comment before matching the command itself.
        let code = line.split(';').next().unwrap_or("").trim();

        if code.eq_ignore_ascii_case("M600") {
            self.patch.color_changes += 1;
            return;
        }

        // T<digits>: a tool selection. The first one is the baseline; each
        // switch to a different index counts as a color change.
        if let Some(digits) = code.strip_prefix(['T', 't']) {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(tool) = digits.parse::<u32>() {
                    if self.last_tool.is_some() && self.last_tool != Some(tool) {
                        self.patch.color_changes += 1;
                    }
                    self.last_tool = Some(tool);
                }
            }
        }
    }

    /// Handle the body of a comment line (leading `;` already stripped).
    fn scan_comment(&mut self, body: &str) {
        if starts_with_ignore_case(body, "COLOR_CHANGE") {
            self.patch.color_changes += 1;
            return;
        }

        let Some((key, value)) = split_key_value(body) else {
            return;
        };
        let key = key.to_lowercase();

        match key.as_str() {
            "time" => {
                if let Ok(secs) = value.parse::<f64>() {
                    self.patch.time_human =
                        Some((format_duration(secs as u64), SetPolicy::Overwrite));
                }
            }
            "time_elapsed" => {
                // Never displaces a time that is already known.
                if self.patch.time_human.is_none() {
                    if let Ok(secs) = value.parse::<f64>() {
                        self.patch.time_human =
                            Some((format_duration(secs as u64), SetPolicy::IfUnset));
                    }
                }
            }
            "object" | "mesh" => {
                if !value.is_empty() && !value.eq_ignore_ascii_case("NONMESH") {
                    self.objects.insert(value.to_string());
                    self.patch.pieces = self.patch.pieces.max(self.objects.len() as u32);
                }
            }
            "filament used [mm]" => {
                if let Ok(mm) = value.parse::<f64>() {
                    self.used_mm = Some(mm);
                }
            }
            "filament used [g]" => {
                if let Ok(g) = value.parse::<f64>() {
                    self.used_g = Some(g);
                }
            }
            "filament used" => match parse_unit_amount(value) {
                Some((m, 'm')) => self.cura_m = Some(m),
                Some((g, 'g')) => self.inline_g = Some(g),
                _ => {}
            },
            _ => {
                if key.starts_with("estimated printing time") {
                    if let Some(time) = normalize_time_token(value) {
                        self.patch.time_human = Some((time, SetPolicy::Overwrite));
                    }
                } else if let Some(field) = field_for_key(&key) {
                    apply_field(&mut self.patch, field, value);
                }
            }
        }
    }

    /// Resolve the per-dialect slots and the filename fallback.
    fn finish(self, path: &Path) -> PrintInfoPatch {
        let mut patch = self.patch;

        // Length: the [mm] slot wins over Cura metres.
        if let Some(mm) = self.used_mm {
            patch.filament_amount_m = Some(format_amount(mm / 1000.0, " m"));
        } else if let Some(m) = self.cura_m {
            patch.filament_amount_m = Some(format_amount(m, " m"));
        }

        // Weight: the [g] slot wins over the inline =Ng form.
        if let Some(g) = self.used_g {
            patch.filament_amount_g = Some(format_amount(g, " g"));
        } else if let Some(g) = self.inline_g {
            patch.filament_amount_g = Some(format_amount(g, " g"));
        }

        // No time in the content: fall back to an h/m marker in the file
        // name, applied only if no earlier file set a time either.
        if patch.time_human.is_none() {
            if let Some(time) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(time_from_filename)
            {
                patch.time_human = Some((time, SetPolicy::IfUnset));
            }
        }

        patch
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Parse one G-code file into a patch.
///
/// A read error mid-file ends the scan but keeps whatever was already
/// recovered; only failure to open the file surfaces as an error.
pub fn parse_gcode_file(path: &Path) -> Result<PrintInfoPatch> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut scan = GcodeScan::default();
    for line in reader.lines() {
        match line {
            Ok(line) => scan.scan_line(&line),
            Err(err) => {
                tracing::debug!(
                    "Read error in {} ({}), keeping partial data",
                    path.display(),
                    err
                );
                break;
            }
        }
    }

    Ok(scan.finish(path))
}
