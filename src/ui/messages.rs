//! One-line status messages. Errors go to stderr, everything else to stdout.

use ansi_term::{Colour, Style};
use std::fmt::Display;

fn tagged(style: Style, icon: &str, msg: impl Display) -> String {
    format!("{} {msg}", style.paint(icon))
}

pub fn info(msg: impl Display) {
    println!("{}", tagged(Colour::Blue.bold(), "ℹ️", msg));
}

pub fn success(msg: impl Display) {
    println!("{}", tagged(Colour::Green.bold(), "✅", msg));
}

pub fn warning(msg: impl Display) {
    println!("{}", tagged(Colour::Yellow.bold(), "⚠️", msg));
}

pub fn error(msg: impl Display) {
    eprintln!("{}", tagged(Colour::Red.bold(), "❌", msg));
}

/// Section title, e.g. `── Daily Summary · September 1, 2025 ──`
pub fn header(msg: impl Display) {
    println!("\n{}", Colour::Blue.bold().paint(format!("── {msg} ──")));
}
