//! Numeric and duration formatting helpers shared by the parsing stages.

/// Tolerance for treating a captured value as a whole number.
pub const INT_EPS: f64 = 1e-6;

/// Format a captured quantity for display.
///
/// Values within [`INT_EPS`] of an integer are shown without decimals;
/// everything else is rounded half-up to two decimal places.
pub fn format_quantity(value: f64) -> String {
    if (value - value.round()).abs() < INT_EPS {
        format!("{}", value.round() as i64)
    } else {
        // Half-up on the decimal value; the epsilon keeps binary artifacts
        // like 12.345 -> 12.344999... from rounding down.
        let cents = (value * 100.0 + INT_EPS).round() as i64;
        format!("{}.{:02}", cents / 100, cents % 100)
    }
}

/// Convert a duration in seconds to the human form used throughout the
/// record: "Hh Mm" at one hour or more, "Mm Ss" at one minute or more,
/// "Ss" otherwise.
pub fn format_duration(total_secs: u64) -> String {
    if total_secs >= 3600 {
        format!("{}h {}m", total_secs / 3600, (total_secs % 3600) / 60)
    } else if total_secs >= 60 {
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    } else {
        format!("{}s", total_secs)
    }
}

/// Normalize an embedded time token to "Xh Ym".
///
/// Accepts the compact slicer forms "XhYm" / "Xh Ym" (trailing seconds are
/// dropped) and the clock form "H:MM[:SS]". Returns `None` when the text
/// carries neither.
pub fn normalize_time_token(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let Ok(hours) = text[start..i].parse::<u64>() else {
            continue;
        };

        if i < bytes.len() && (bytes[i] | 0x20) == b'h' {
            // "XhYm" with optional whitespace between components.
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b' ' {
                j += 1;
            }
            let mstart = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > mstart && j < bytes.len() && (bytes[j] | 0x20) == b'm' {
                if let Ok(minutes) = text[mstart..j].parse::<u64>() {
                    return Some(format!("{}h {}m", hours, minutes));
                }
            }
        } else if i < bytes.len() && bytes[i] == b':' {
            // "H:MM" or "H:MM:SS".
            let mstart = i + 1;
            let mut j = mstart;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > mstart {
                if let Ok(minutes) = text[mstart..j].parse::<u64>() {
                    return Some(format!("{}h {}m", hours, minutes));
                }
            }
        }
    }
    None
}

/// Derive a print time from an "`<N>h<NN>m`" substring in a file name,
/// e.g. "benchy_1h59m.gcode" yields "1h 59m".
pub fn time_from_filename(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i < bytes.len() && (bytes[i] | 0x20) == b'h' {
            let mstart = i + 1;
            let mut j = mstart;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > mstart && j < bytes.len() && (bytes[j] | 0x20) == b'm' {
                if let (Ok(h), Ok(m)) = (
                    name[start..i].parse::<u64>(),
                    name[mstart..j].parse::<u64>(),
                ) {
                    return Some(format!("{}h {}m", h, m));
                }
            }
        }
    }
    None
}
