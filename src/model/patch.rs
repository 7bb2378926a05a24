//! Per-file extraction patches and the merge fold.
//!
//! Each file parser produces a [`PrintInfoPatch`] rather than mutating shared
//! state; [`merge`] folds patches into the running [`PrintInfo`] in file
//! order, making the precedence rules a single auditable function.

use super::PrintInfo;

/// Write policy for a patched field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPolicy {
    /// Replace whatever the accumulated record holds.
    Overwrite,
    /// Apply only when the accumulated record has no value yet.
    IfUnset,
}

/// Partial extraction result from a single file.
///
/// String fields follow last-writer-wins semantics across files (3MF files
/// are merged last, so their metadata is authoritative). Only the time field
/// carries an explicit policy: `TIME_ELAPSED` headers and filename fallbacks
/// must never displace a time set by an earlier source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrintInfoPatch {
    /// Human-readable time with its write policy.
    pub time_human: Option<(String, SetPolicy)>,
    pub filament_type: Option<String>,
    pub filament_density: Option<String>,
    pub filament_diameter: Option<String>,
    pub filament_color: Option<String>,
    pub filament_amount_m: Option<String>,
    pub filament_amount_g: Option<String>,
    pub layer_height: Option<String>,
    pub total_layers: Option<u32>,
    /// Distinct-object count seen in this file; merged as a running maximum.
    pub pieces: u32,
    /// Color/tool-change events counted in this file; merged additively.
    pub color_changes: u32,
}

/// Fold one file's patch into the accumulated record.
pub fn merge(mut info: PrintInfo, patch: PrintInfoPatch) -> PrintInfo {
    if let Some((value, policy)) = patch.time_human {
        match policy {
            SetPolicy::Overwrite => info.time_human = Some(value),
            SetPolicy::IfUnset => {
                if info.time_human.is_none() {
                    info.time_human = Some(value);
                }
            }
        }
    }
    if patch.filament_type.is_some() {
        info.filament_type = patch.filament_type;
    }
    if patch.filament_density.is_some() {
        info.filament_density = patch.filament_density;
    }
    if patch.filament_diameter.is_some() {
        info.filament_diameter = patch.filament_diameter;
    }
    if patch.filament_color.is_some() {
        info.filament_color = patch.filament_color;
    }
    if patch.filament_amount_m.is_some() {
        info.filament_amount_m = patch.filament_amount_m;
    }
    if patch.filament_amount_g.is_some() {
        info.filament_amount_g = patch.filament_amount_g;
    }
    if patch.layer_height.is_some() {
        info.layer_height = patch.layer_height;
    }
    if let Some(layers) = patch.total_layers {
        info.total_layers = layers;
    }
    info.pieces = info.pieces.max(patch.pieces);
    info.color_changes += patch.color_changes;
    info
}
