use crate::models::Tier;

/// Lower bound (inclusive) of the medium tier.
pub const MEDIUM_THRESHOLD: f64 = 60.0;
/// Lower bound (inclusive) of the high tier.
pub const HIGH_THRESHOLD: f64 = 80.0;

/// Classify an efficiency percentage:
/// `e < 60` → Low, `60 <= e < 80` → Medium, `e >= 80` → High.
pub fn classify(efficiency: f64) -> Tier {
    if efficiency >= HIGH_THRESHOLD {
        Tier::High
    } else if efficiency >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}
