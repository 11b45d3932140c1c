//! Deterministic academic-record generation for the KHS student portal.
//!
//! Given a student identifier (and optionally a program), the generator
//! reproduces the same advisors, transcript and GPA on every call with
//! no shared state. The transcript cache in `store` keeps generated
//! transcripts the way the portal's local storage does.

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod gpa;
pub mod program;
pub mod rng;
pub mod store;
pub mod transcript;
pub mod types;

pub use advisor::{assign_advisors, AdvisorAssignment};
pub use config::GeneratorConfig;
pub use error::{KhsError, KhsResult};
pub use generator::{AcademicRecord, RecordGenerator};
pub use rng::{derive_seed, pick_deterministic, SeedStream};
pub use store::TranscriptStore;
pub use transcript::{TermSummary, TranscriptLine};
pub use types::{ActivityKind, Advisor, Course, TranscriptMode};
