//! One-line status messages with an icon, shared by every command.

use ansi_term::Colour;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn ANSI colouring of status lines on or off for the whole process.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    if color_enabled() {
        format!("{} {}", colour.bold().paint(icon), msg)
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}

/// Indented follow-up line under a warning or error.
pub fn hint<T: fmt::Display>(msg: T) {
    println!("   ↳ {msg}");
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    let text = format!("=== {msg} ===");
    if color_enabled() {
        println!("{}", Colour::Blue.bold().paint(text));
    } else {
        println!("{text}");
    }
}
