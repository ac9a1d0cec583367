//! Colour helpers for terminal output, keyed by efficiency tier.

use crate::models::Tier;
use ansi_term::{Colour, Style};

pub fn tier_colour(tier: Tier) -> Colour {
    match tier {
        Tier::High => Colour::Green,
        Tier::Medium => Colour::Yellow,
        Tier::Low => Colour::Red,
    }
}

/// Paint `text` in the tier colour, or return it unchanged when colours are off.
pub fn paint_tier(text: &str, tier: Tier, enabled: bool) -> String {
    if enabled {
        tier_colour(tier).bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, enabled: bool) -> String {
    if enabled {
        Style::new().bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn dimmed(text: &str, enabled: bool) -> String {
    if enabled {
        Colour::Fixed(244).paint(text).to_string()
    } else {
        text.to_string()
    }
}
