//! Terminal colouring of figures and placeholders.

use ansi_term::Colour;

const GREY: Colour = Colour::Fixed(244);

fn is_placeholder(value: &str) -> bool {
    matches!(value.trim(), "" | "N/A" | "00:00:00" | "In progress")
}

/// Placeholders ("N/A", "In progress", zero durations) in grey, anything
/// else unchanged.
pub fn dim_placeholder(value: &str) -> String {
    if is_placeholder(value) {
        GREY.paint(value).to_string()
    } else {
        value.to_string()
    }
}

/// Red once the daily limit is exceeded, green before.
pub fn paint_remaining(ms: i64, text: &str) -> String {
    let colour = if ms < 0 { Colour::Red } else { Colour::Green };
    colour.paint(text).to_string()
}

/// Yellow when there is overtime.
pub fn paint_overtime(ms: i64, text: &str) -> String {
    if ms > 0 {
        Colour::Yellow.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Clock-in cells green, clock-out cells red.
pub fn paint_in_out(value: &str, is_in: bool) -> String {
    if is_placeholder(value) {
        return GREY.paint(value).to_string();
    }
    let colour = if is_in { Colour::Green } else { Colour::Red };
    colour.paint(value).to_string()
}
