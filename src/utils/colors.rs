//! ANSI color helpers for report and status output.

use crate::models::report::DayClass;
use ansi_term::Colour;

/// Balance color: surplus green, deficit red, zero left alone.
pub fn colorize_balance(value: Option<i64>, text: &str) -> String {
    match value {
        Some(v) if v > 0 => Colour::Green.paint(text).to_string(),
        Some(v) if v < 0 => Colour::Red.paint(text).to_string(),
        Some(_) => text.to_string(),
        None => Colour::Yellow.paint(text).to_string(), // em andamento
    }
}

/// Marker color for a day classification.
pub fn colorize_class(class: &DayClass, text: &str) -> String {
    match class {
        DayClass::Holiday(_) => Colour::Purple.paint(text).to_string(),
        DayClass::Recess(_) => Colour::Cyan.paint(text).to_string(),
        DayClass::Absence => Colour::Red.bold().paint(text).to_string(),
        DayClass::InProgress => Colour::Yellow.paint(text).to_string(),
        DayClass::DayOff => Colour::Fixed(8).paint(text).to_string(),
        DayClass::Worked => text.to_string(),
    }
}
