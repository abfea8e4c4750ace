//! Plain-language text for findings and the summary.
//!
//! Every sentence is a fixed template keyed by strength and direction; no
//! statistics are computed here.

use corr_model::{CorrelationResult, Direction, Strength, StrengthCounts};

/// Formats a coefficient to four decimals, never printing `-0.0000`.
pub fn format_r(r: f64) -> String {
    let text = format!("{r:.4}");
    if text == "-0.0000" {
        "0.0000".to_string()
    } else {
        text
    }
}

/// Formats r² as a percentage with one decimal.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// "Relationship between X and Y".
pub fn heading(result: &CorrelationResult) -> String {
    format!(
        "Relationship between {} and {}",
        result.candidate, result.target
    )
}

/// Interpretation paragraph for one result.
pub fn interpret(result: &CorrelationResult) -> String {
    let x = &result.candidate;
    let y = &result.target;
    let (Some(r), Some(r_squared)) = (result.r, result.r_squared) else {
        return format!(
            "The relationship between {x} and {y} is indeterminate: with {n} complete \
             observation(s) and no usable variation, no correlation coefficient can be computed.",
            n = result.n
        );
    };

    let strength = match result.strength {
        Strength::Strong => "a strong",
        Strength::Moderate => "a moderate",
        Strength::Weak | Strength::Indeterminate => "a weak or negligible",
    };
    let (direction, direction_phrase) = match result.direction {
        Direction::Positive => (
            "positive (increasing)",
            format!("This means that as {x} increases, {y} also tends to increase."),
        ),
        Direction::Negative => (
            "negative (decreasing)",
            format!("This means that as {x} increases, {y} tends to decrease."),
        ),
        Direction::None => (
            "non-directional",
            "There is no clear linear tendency in the data.".to_string(),
        ),
    };
    let explained = format_percent(r_squared);
    let linearity = match result.strength {
        Strength::Strong => format!(
            "This relationship is highly linear, with {x} explaining {explained} (R²) of the \
             variance in {y}."
        ),
        Strength::Moderate => format!(
            "This relationship shows moderate linearity, accounting for {explained} (R²) of the \
             variance in {y}. Other non-linear or external factors likely play a significant role."
        ),
        Strength::Weak | Strength::Indeterminate => format!(
            "The fit is poor, explaining only {explained} of the variance. The data suggests a \
             non-linear relationship, no significant relationship, or that the feature is a poor \
             predictor."
        ),
    };

    format!(
        "The analysis revealed {strength} {direction} linear relationship (r = {r}) between {x} \
         and {y}. {direction_phrase} {linearity}",
        r = format_r(r)
    )
}

/// Figure caption for the finding at 1-based `number`.
pub fn caption(number: usize, result: &CorrelationResult) -> String {
    let tail = match result.r {
        Some(r) => format!(
            "The data points confirm the calculated correlation of r = {}.",
            format_r(r)
        ),
        None => "The correlation is indeterminate for these data.".to_string(),
    };
    format!(
        "Figure 1.{number}: Scatter plot illustrating the relationship between {} and {}. {tail}",
        result.candidate, result.target
    )
}

/// Narrative paragraph for the summary section.
pub fn overview(
    target: &str,
    rows: usize,
    counts: StrengthCounts,
    strongest: Option<&CorrelationResult>,
    excluded: usize,
) -> String {
    let mut text = format!(
        "{} candidate variable(s) were compared against {target} over {rows} row(s); \
         {excluded} column(s) were excluded. Found {} strong, {} moderate and {} weak \
         relationship(s)",
        counts.total(),
        counts.strong,
        counts.moderate,
        counts.weak,
    );
    if counts.indeterminate > 0 {
        text.push_str(&format!(
            ", plus {} indeterminate result(s)",
            counts.indeterminate
        ));
    }
    text.push('.');
    match strongest.and_then(|result| result.r.map(|r| (result, r))) {
        Some((result, r)) => text.push_str(&format!(
            " The strongest relationship is with {} (r = {}, {}).",
            result.candidate,
            format_r(r),
            result.strength
        )),
        None => text.push_str(" No candidate produced a defined correlation."),
    }
    text
}
