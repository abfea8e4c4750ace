//! Maps a coefficient to a strength category and direction.

use corr_model::{Direction, Relationship, Strength};

/// Lower bound of |r| for a strong relationship.
pub const STRONG_THRESHOLD: f64 = 0.7;

/// Lower bound of |r| for a moderate relationship.
pub const MODERATE_THRESHOLD: f64 = 0.3;

/// Strength category for a defined coefficient.
pub fn strength_of(r: f64) -> Strength {
    let magnitude = r.abs();
    if magnitude >= STRONG_THRESHOLD {
        Strength::Strong
    } else if magnitude >= MODERATE_THRESHOLD {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}

/// Direction for a defined coefficient.
pub fn direction_of(r: f64) -> Direction {
    if r > 0.0 {
        Direction::Positive
    } else if r < 0.0 {
        Direction::Negative
    } else {
        Direction::None
    }
}

/// Classifies a coefficient; undefined (or non-finite) input is indeterminate.
pub fn classify(r: Option<f64>) -> Relationship {
    match r.filter(|value| value.is_finite()) {
        Some(value) => Relationship {
            strength: strength_of(value),
            direction: direction_of(value),
        },
        None => Relationship::INDETERMINATE,
    }
}
