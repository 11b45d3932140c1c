//! Grade-point aggregation.
//!
//! All averages are credit-weighted: Σ quality points / Σ credits,
//! and 0 when no credits were taken.

use crate::{
    config::GeneratorConfig,
    transcript::TermSummary,
    types::Term,
};
use serde::{Deserialize, Serialize};

/// Fraction digits that print any f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Above this, hundredths no longer fit exactly in an f64.
const ROUND2_LIMIT: f64 = 1e13;

/// Round to two decimal places.
///
/// Rounds the value's exact decimal expansion, ties away from zero,
/// without scaling by 100 first: the double nearest 54.6 / 24 sits
/// just below 2.275 and rounds to 2.27. Cached transcripts depend on
/// this matching the portal's rounding digit for digit.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUND2_LIMIT {
        return value;
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let Ok(whole) = whole.parse::<u64>() else {
        return value;
    };
    let digits = fraction.as_bytes();
    let mut hundredths = whole * 100 + u64::from(digits[0] - b'0') * 10 + u64::from(digits[1] - b'0');
    if digits[2] >= b'5' {
        hundredths += 1;
    }
    (hundredths as f64 / 100.0).copysign(value)
}

/// Credit-weighted average; 0 when `credits` is 0.
pub fn weighted_average(quality_points: f64, credits: u32) -> f64 {
    if credits == 0 {
        0.0
    } else {
        quality_points / f64::from(credits)
    }
}

/// Cumulative GPA over every term. Identifiers with a forced
/// cumulative GPA in the override table get that value verbatim.
pub fn cumulative_gpa(config: &GeneratorConfig, terms: &[TermSummary], identifier: Option<&str>) -> f64 {
    let forced = identifier
        .and_then(|id| config.identity_override(id))
        .and_then(|o| o.forced_cumulative_gpa);
    if let Some(gpa) = forced {
        return gpa;
    }
    let (quality, credits) = totals(terms);
    weighted_average(quality, credits)
}

/// (Σ total quality points, Σ credits) across terms.
pub fn totals(terms: &[TermSummary]) -> (f64, u32) {
    terms.iter().fold((0.0, 0), |(q, c), t| {
        (q + t.total_quality_points, c + t.total_credits)
    })
}

/// One bar of the per-term GPA chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStat {
    pub term: Term,
    pub gpa: f64,
    pub credits: u32,
}

/// Per-term stats. A cached summary without a stored GPA falls back
/// to its quality points over credits; a stored GPA, even 0, is kept.
pub fn term_stats(terms: &[TermSummary]) -> Vec<TermStat> {
    terms
        .iter()
        .map(|t| {
            let gpa = t
                .gpa
                .unwrap_or_else(|| weighted_average(t.total_quality_points, t.total_credits));
            TermStat { term: t.term, gpa, credits: t.total_credits }
        })
        .collect()
}

/// Two-decimal display, "-" when unknown.
pub fn format_gpa(gpa: Option<f64>) -> String {
    match gpa {
        Some(g) => format!("{g:.2}"),
        None => "-".to_string(),
    }
}
