//! Generator configuration.
//!
//! Every catalog the generator reads lives in one immutable
//! GeneratorConfig: built from the static tables in catalog.rs, or
//! loaded from the JSON files in a data/ directory. Identity overrides
//! are data here, never branches in generation code.

use crate::{
    catalog,
    types::{ActivityKind, Advisor, Course, GradeBucket, Term, TranscriptMode, TERM_COUNT},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Advisor pools keyed by activity.
pub type AdvisorPools = BTreeMap<ActivityKind, Vec<Advisor>>;

// ── Programs ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramHead {
    pub program: String,
    pub head: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyActivity {
    pub activity: ActivityKind,
    pub seed_offset: u64,
}

/// Programs whose name contains any of `matches` only get advisors
/// for the listed activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramFamily {
    pub matches: Vec<String>,
    pub activities: Vec<FamilyActivity>,
}

impl ProgramFamily {
    pub fn matches_program(&self, program: &str) -> bool {
        self.matches.iter().any(|m| program.contains(m.as_str()))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ProgramsFile {
    heads: Vec<ProgramHead>,
    families: Vec<ProgramFamily>,
}

// ── Advisors ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct AdvisorsFile {
    default: AdvisorPools,
    #[serde(default)]
    exact: HashMap<String, AdvisorPools>,
    #[serde(default)]
    prefix: HashMap<String, AdvisorPools>,
}

// ── Courses and grades ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramTermCourses {
    pub program: String,
    pub term: Term,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCatalog {
    /// One list per term, starting at term 1.
    pub common: Vec<Vec<Course>>,
    #[serde(default)]
    pub program_overrides: Vec<ProgramTermCourses>,
}

#[derive(Debug, Clone, Deserialize)]
struct CoursesFile {
    common: Vec<Vec<Course>>,
    #[serde(default)]
    program_overrides: Vec<ProgramTermCourses>,
    grade_buckets: Vec<GradeBucket>,
}

// ── Identity overrides ─────────────────────────────────────────────

/// Fixed outcomes for a specific identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityOverride {
    #[serde(default)]
    pub forced_transcript_mode: Option<TranscriptMode>,
    #[serde(default)]
    pub forced_cumulative_gpa: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct OverridesFile {
    identities: HashMap<String, IdentityOverride>,
}

// ── Top-level config ───────────────────────────────────────────────

/// Everything the generator reads. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub advisors: AdvisorPools,
    pub exact_advisor_overrides: HashMap<String, AdvisorPools>,
    pub prefix_advisor_overrides: HashMap<String, AdvisorPools>,
    pub program_families: Vec<ProgramFamily>,
    pub program_heads: Vec<ProgramHead>,
    pub courses: CourseCatalog,
    pub grade_buckets: Vec<GradeBucket>,
    pub identity_overrides: HashMap<String, IdentityOverride>,
}

impl GeneratorConfig {
    /// Load from a data/ directory.
    /// Without one, use GeneratorConfig::builtin().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let advisors: AdvisorsFile = read_json(&format!("{data_dir}/advisors.json"))?;
        let programs: ProgramsFile = read_json(&format!("{data_dir}/programs.json"))?;
        let courses: CoursesFile = read_json(&format!("{data_dir}/courses.json"))?;
        let overrides: OverridesFile = read_json(&format!("{data_dir}/overrides.json"))?;

        if courses.common.len() != TERM_COUNT as usize {
            anyhow::bail!(
                "{data_dir}/courses.json: expected {TERM_COUNT} common terms, found {}",
                courses.common.len()
            );
        }
        if courses.grade_buckets.is_empty() {
            anyhow::bail!("{data_dir}/courses.json: grade_buckets must not be empty");
        }

        let config = Self {
            advisors: advisors.default,
            exact_advisor_overrides: advisors.exact,
            prefix_advisor_overrides: advisors.prefix,
            program_families: programs.families,
            program_heads: programs.heads,
            courses: CourseCatalog {
                common: courses.common,
                program_overrides: courses.program_overrides,
            },
            grade_buckets: courses.grade_buckets,
            identity_overrides: overrides.identities,
        };
        log::debug!(
            "Loaded generator config from {data_dir}: {} program heads, {} identity overrides",
            config.program_heads.len(),
            config.identity_overrides.len()
        );
        Ok(config)
    }

    /// The catalogs compiled into the crate.
    pub fn builtin() -> Self {
        let advisors = ActivityKind::ALL
            .iter()
            .map(|kind| (*kind, advisor_rows(catalog::default_advisors(*kind))))
            .collect();

        let exact_advisor_overrides = catalog::exact_advisor_overrides()
            .iter()
            .map(|(id, rows)| (id.to_string(), advisor_pools(rows)))
            .collect();
        let prefix_advisor_overrides = catalog::prefix_advisor_overrides()
            .iter()
            .map(|(prefix, rows)| (prefix.to_string(), advisor_pools(rows)))
            .collect();

        let program_families = catalog::program_families()
            .iter()
            .map(|(matches, activities)| ProgramFamily {
                matches: matches.iter().map(|m| m.to_string()).collect(),
                activities: activities
                    .iter()
                    .map(|(activity, seed_offset)| FamilyActivity {
                        activity: *activity,
                        seed_offset: *seed_offset,
                    })
                    .collect(),
            })
            .collect();

        let program_heads = catalog::program_heads()
            .iter()
            .map(|(program, head)| ProgramHead {
                program: program.to_string(),
                head: head.to_string(),
            })
            .collect();

        let courses = CourseCatalog {
            common: catalog::common_courses().iter().map(|rows| course_rows(rows)).collect(),
            program_overrides: catalog::program_course_overrides()
                .iter()
                .map(|(program, term, rows)| ProgramTermCourses {
                    program: program.to_string(),
                    term: *term,
                    courses: course_rows(rows),
                })
                .collect(),
        };

        let grade_buckets = catalog::grade_buckets()
            .iter()
            .map(|(letter, point)| GradeBucket { letter: letter.to_string(), point: *point })
            .collect();

        let identity_overrides = catalog::identity_overrides()
            .iter()
            .map(|(id, mode, gpa)| {
                (id.to_string(), IdentityOverride {
                    forced_transcript_mode: *mode,
                    forced_cumulative_gpa: *gpa,
                })
            })
            .collect();

        Self {
            advisors,
            exact_advisor_overrides,
            prefix_advisor_overrides,
            program_families,
            program_heads,
            courses,
            grade_buckets,
            identity_overrides,
        }
    }

    /// Default pool for an activity (empty if the catalog omits it).
    pub fn advisor_pool(&self, kind: ActivityKind) -> &[Advisor] {
        self.advisors.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn identity_override(&self, identifier: &str) -> Option<&IdentityOverride> {
        self.identity_overrides.get(identifier)
    }

    /// Course list for a term. A program-specific list wins when the
    /// program name matches exactly; terms outside the catalog clamp to
    /// the last common term.
    pub fn courses_for(&self, term: Term, program: Option<&str>) -> &[Course] {
        if let Some(program) = program {
            let specific = self
                .courses
                .program_overrides
                .iter()
                .find(|o| o.term == term && o.program == program);
            if let Some(o) = specific {
                return &o.courses;
            }
        }
        let common = &self.courses.common;
        let idx = (term as usize).checked_sub(1).filter(|i| *i < common.len());
        match idx.or_else(|| common.len().checked_sub(1)) {
            Some(i) => common[i].as_slice(),
            None => &[],
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
    serde_json::from_str(&content).map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))
}

fn advisor_rows(rows: &[catalog::AdvisorRow]) -> Vec<Advisor> {
    rows.iter().map(|(name, field)| Advisor::new(name, field)).collect()
}

fn advisor_pools(rows: &[(ActivityKind, &[catalog::AdvisorRow])]) -> AdvisorPools {
    rows.iter().map(|(kind, list)| (*kind, advisor_rows(list))).collect()
}

fn course_rows(rows: &[catalog::CourseRow]) -> Vec<Course> {
    rows.iter().map(|(title, code, credits)| Course::new(title, code, *credits)).collect()
}
