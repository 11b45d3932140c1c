//! Transcript generation.
//!
//! A transcript is one line per course for a term, graded either
//! perfectly or from the identifier's seeded stream. All five terms
//! of a student share ONE stream, consumed in term order, so a term's
//! grades depend on how many draws the earlier terms used.
//!
//! Serialized field names match the blobs the portal has always cached
//! (`semester`, `ip`, `sks`, `totalNilaiMutu`, ...). Never rename them.

use crate::{
    config::GeneratorConfig,
    gpa::{round2, weighted_average},
    rng::{derive_seed_opt, SeedStream},
    types::{GradeBucket, Term, TranscriptMode, TERM_COUNT},
};
use serde::{Deserialize, Serialize};

/// Added to every stream draw before it is mapped onto the grade table.
pub const GRADE_OFFSET: f64 = 0.2;

/// Upper clamp for the offset draw, keeping the bucket index in range.
pub const GRADE_DRAW_MAX: f64 = 0.9999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    #[serde(rename = "no")]
    pub index: u32,
    #[serde(rename = "mataKuliah")]
    pub course_title: String,
    #[serde(rename = "kodeMK")]
    pub course_code: String,
    #[serde(rename = "hurufMutu")]
    pub letter_grade: String,
    #[serde(rename = "angkaMutu")]
    pub grade_point: f64,
    #[serde(rename = "sks")]
    pub credits: u32,
    #[serde(rename = "nilaiMutu")]
    pub quality_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSummary {
    #[serde(rename = "semester")]
    pub term: Term,
    /// None only for cached blobs written without an `ip`.
    #[serde(rename = "ip", default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(rename = "sks")]
    pub total_credits: u32,
    #[serde(rename = "totalNilaiMutu", default)]
    pub total_quality_points: f64,
    #[serde(rename = "transcript", default)]
    pub lines: Vec<TranscriptLine>,
}

/// Lines for one term.
///
/// `Perfect` gives every course the top bucket and never touches the
/// stream. `Randomized` consumes one draw per course: the draw plus
/// GRADE_OFFSET, clamped to [0, GRADE_DRAW_MAX], scaled onto the bucket
/// table. The bucket table runs from the top grade down, so the offset
/// pushes draws toward the lower end of the table.
pub fn generate_transcript(
    config: &GeneratorConfig,
    term: Term,
    program: Option<&str>,
    mode: TranscriptMode,
    stream: &mut SeedStream,
) -> Vec<TranscriptLine> {
    let buckets = &config.grade_buckets;
    config
        .courses_for(term, program)
        .iter()
        .enumerate()
        .filter_map(|(idx, course)| {
            let bucket = match mode {
                TranscriptMode::Perfect => buckets.first()?,
                TranscriptMode::Randomized => draw_bucket(buckets, stream)?,
            };
            Some(TranscriptLine {
                index: idx as u32 + 1,
                course_title: course.title.clone(),
                course_code: course.code.clone(),
                letter_grade: bucket.letter.clone(),
                grade_point: bucket.point,
                credits: course.credits,
                quality_points: round2(bucket.point * f64::from(course.credits)),
            })
        })
        .collect()
}

fn draw_bucket<'a>(buckets: &'a [GradeBucket], stream: &mut SeedStream) -> Option<&'a GradeBucket> {
    if buckets.is_empty() {
        return None;
    }
    let r = (stream.next_f64() + GRADE_OFFSET).clamp(0.0, GRADE_DRAW_MAX);
    let idx = ((r * buckets.len() as f64).floor() as usize).min(buckets.len() - 1);
    buckets.get(idx)
}

/// Aggregate a term. Quality points are summed before rounding; the
/// GPA is the rounded quotient, or 0 without credits.
pub fn summarize_term(term: Term, lines: Vec<TranscriptLine>) -> TermSummary {
    let total_credits: u32 = lines.iter().map(|l| l.credits).sum();
    let quality: f64 = lines.iter().map(|l| l.quality_points).sum();
    TermSummary {
        term,
        gpa: Some(round2(weighted_average(quality, total_credits))),
        total_credits,
        total_quality_points: round2(quality),
        lines,
    }
}

/// Every term (1..=TERM_COUNT) for an identifier.
///
/// Identifiers with a forced transcript mode use it; everyone else is
/// randomized from a single stream seeded by the identifier.
pub fn generate_all_terms(
    config: &GeneratorConfig,
    identifier: Option<&str>,
    program: Option<&str>,
) -> Vec<TermSummary> {
    let mode = identifier
        .and_then(|id| config.identity_override(id))
        .and_then(|o| o.forced_transcript_mode)
        .unwrap_or(TranscriptMode::Randomized);
    let mut stream = SeedStream::new(derive_seed_opt(identifier));

    (1..=TERM_COUNT)
        .map(|term| {
            let lines = generate_transcript(config, term, program, mode, &mut stream);
            summarize_term(term, lines)
        })
        .collect()
}
