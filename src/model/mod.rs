//! Data model for extracted print metadata.

mod patch;
mod print_info;

pub use patch::{merge, PrintInfoPatch, SetPolicy};
pub use print_info::PrintInfo;
