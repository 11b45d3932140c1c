//! RecordGenerator: one entry point over a GeneratorConfig.
//!
//! Every method is a pure function of (identifier, program) and the
//! immutable config, so a single generator can be shared freely
//! between threads.

use crate::{
    advisor::{assign_advisors, AdvisorAssignment},
    config::GeneratorConfig,
    error::KhsResult,
    gpa::{self, TermStat},
    program::lookup_program_head,
    transcript::{generate_all_terms, TermSummary},
    types::{Identifier, Term},
};
use serde::{Deserialize, Serialize};

/// Everything the dashboard and transcript screens show for a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub identifier: Identifier,
    pub program: Option<String>,
    pub program_head: String,
    pub advisors: AdvisorAssignment,
    pub terms: Vec<TermSummary>,
    pub term_stats: Vec<TermStat>,
    pub cumulative_gpa: f64,
    pub total_credits: u32,
    pub total_quality_points: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RecordGenerator {
    config: GeneratorConfig,
}

impl RecordGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn builtin() -> Self {
        Self::new(GeneratorConfig::builtin())
    }

    /// Generator over catalogs loaded from a data/ directory.
    pub fn from_data_dir(data_dir: &str) -> KhsResult<Self> {
        Ok(Self::new(GeneratorConfig::load(data_dir)?))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn advisors(&self, identifier: Option<&str>, program: Option<&str>) -> AdvisorAssignment {
        assign_advisors(&self.config, identifier, program)
    }

    pub fn program_head(&self, program: Option<&str>) -> String {
        lookup_program_head(&self.config, program)
    }

    pub fn transcript(&self, identifier: Option<&str>, program: Option<&str>) -> Vec<TermSummary> {
        generate_all_terms(&self.config, identifier, program)
    }

    /// A single term, as it appears in the full transcript.
    pub fn term(&self, identifier: Option<&str>, program: Option<&str>, term: Term) -> Option<TermSummary> {
        self.transcript(identifier, program)
            .into_iter()
            .find(|t| t.term == term)
    }

    pub fn cumulative_gpa(&self, terms: &[TermSummary], identifier: Option<&str>) -> f64 {
        gpa::cumulative_gpa(&self.config, terms, identifier)
    }

    /// True when this identifier's transcript must never be served from cache.
    pub fn always_regenerate(&self, identifier: &str) -> bool {
        self.config
            .identity_override(identifier)
            .is_some_and(|o| o.forced_transcript_mode.is_some())
    }

    pub fn academic_record(&self, identifier: &str, program: Option<&str>) -> AcademicRecord {
        let terms = self.transcript(Some(identifier), program);
        self.record_from_terms(identifier, program, terms)
    }

    /// Assemble a record around terms that came from elsewhere, such as
    /// the transcript cache.
    pub fn record_from_terms(
        &self,
        identifier: &str,
        program: Option<&str>,
        terms: Vec<TermSummary>,
    ) -> AcademicRecord {
        let (quality, credits) = gpa::totals(&terms);
        AcademicRecord {
            identifier: identifier.to_string(),
            program: program.map(str::to_string),
            program_head: self.program_head(program),
            advisors: self.advisors(Some(identifier), program),
            term_stats: gpa::term_stats(&terms),
            cumulative_gpa: self.cumulative_gpa(&terms, Some(identifier)),
            total_credits: credits,
            total_quality_points: gpa::round2(quality),
            terms,
        }
    }
}
