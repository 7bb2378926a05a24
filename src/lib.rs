//! printinfo - print metadata extraction from G-code and 3MF files.
//!
//! This library recovers print parameters (time estimate, filament
//! length/weight, material type and color, layer stats, piece count,
//! color-change count) from the files a slicer produces, across the
//! PrusaSlicer/Orca, Cura, and generic comment dialects. Extraction is
//! best-effort: missing files, corrupt archives, and malformed values are
//! skipped, never surfaced, and the caller always receives a record holding
//! whatever could be recovered.
//!
//! # Example
//!
//! ```no_run
//! use printinfo::extract_print_info;
//!
//! let info = extract_print_info(&["benchy.gcode", "benchy.3mf"]);
//! if let Some(time) = &info.time_human {
//!     println!("estimated print time: {}", time);
//! }
//! println!("{} piece(s), {} color change(s)", info.pieces, info.color_changes);
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;

// Re-exports for convenience
pub use color::color_name_from_hex;
pub use error::{ExtractError, Result};
pub use model::{merge, PrintInfo, PrintInfoPatch, SetPolicy};
pub use parser::{extract_print_info, parse_3mf_file, parse_gcode_file};
