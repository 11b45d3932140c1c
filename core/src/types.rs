//! Shared primitive types and records used across the generator.

use serde::{Deserialize, Serialize};

/// A student registration number. Only ever used as a seed source.
pub type Identifier = String;

/// An academic term (semester) number.
pub type Term = u32;

/// Terms are generated 1..=TERM_COUNT.
pub const TERM_COUNT: Term = 5;

/// The fixed advisory categories a student is assigned advisors for.
///
/// The serialized form is the short storage code the portal has always
/// used. NEVER change a code: its length is also the per-activity seed
/// offset, so renaming one reshuffles every student's advisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "ppl")]
    Internship,
    #[serde(rename = "pal")]
    AlgorithmLab,
    #[serde(rename = "pkl")]
    Fieldwork,
    #[serde(rename = "kkn")]
    CommunityService,
    #[serde(rename = "skripsi")]
    Thesis,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        Self::Internship,
        Self::AlgorithmLab,
        Self::Fieldwork,
        Self::CommunityService,
        Self::Thesis,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Internship       => "ppl",
            Self::AlgorithmLab     => "pal",
            Self::Fieldwork        => "pkl",
            Self::CommunityService => "kkn",
            Self::Thesis           => "skripsi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Internship       => "Internship",
            Self::AlgorithmLab     => "Algorithm Lab",
            Self::Fieldwork        => "Fieldwork",
            Self::CommunityService => "Community Service",
            Self::Thesis           => "Thesis",
        }
    }

    /// Maximum number of advisors assigned for this activity.
    pub fn quota(&self) -> usize {
        match self {
            Self::Internship       => 1,
            Self::AlgorithmLab     => 1,
            Self::Fieldwork        => 2,
            Self::CommunityService => 2,
            Self::Thesis           => 3,
        }
    }

    /// Added to the identifier seed when sampling this activity's pool.
    pub fn seed_offset(&self) -> u64 {
        self.code().len() as u64
    }
}

/// How grades are produced for a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptMode {
    /// Every course receives the top grade bucket.
    Perfect,
    /// Grades are drawn from the identifier's seeded stream.
    Randomized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisor {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "bidang")]
    pub field: String,
}

impl Advisor {
    pub fn new(name: &str, field: &str) -> Self {
        Self { name: name.to_string(), field: field.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub code: String,
    pub credits: u32,
}

impl Course {
    pub fn new(title: &str, code: &str, credits: u32) -> Self {
        Self { title: title.to_string(), code: code.to_string(), credits }
    }
}

/// One row of the grade table: a letter and its grade point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBucket {
    pub letter: String,
    pub point: f64,
}
