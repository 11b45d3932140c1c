//! Deterministic advisor assignment.
//!
//! Resolution order (first match wins):
//!   1. Exact-identifier override table
//!   2. Identifier prefix table, tried at 4, 3, then 2 characters
//!   3. Program family heuristic
//!   4. Every activity sampled from the default catalog
//!
//! Tiers 1 and 2 only populate the activities their entry names.
//! Every pool is sampled with pick_deterministic() and capped at the
//! activity's quota.

use crate::{
    config::{AdvisorPools, GeneratorConfig},
    rng::{derive_seed, pick_deterministic},
    types::{ActivityKind, Advisor},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PREFIX_LENGTHS: [usize; 3] = [4, 3, 2];

/// Advisors per activity. Activities may be absent; callers display
/// the default catalog for those (see `or_default_catalog`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisorAssignment(BTreeMap<ActivityKind, Vec<Advisor>>);

impl AdvisorAssignment {
    pub fn get(&self, kind: ActivityKind) -> Option<&[Advisor]> {
        self.0.get(&kind).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn activities(&self) -> impl Iterator<Item = ActivityKind> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActivityKind, &[Advisor])> {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// The assigned advisors, or the full default pool when this
    /// activity was not assigned.
    pub fn or_default_catalog<'a>(&'a self, kind: ActivityKind, config: &'a GeneratorConfig) -> &'a [Advisor] {
        self.get(kind).unwrap_or_else(|| config.advisor_pool(kind))
    }
}

/// Assign advisors for an identifier. An absent or empty identifier
/// yields an empty assignment.
pub fn assign_advisors(
    config: &GeneratorConfig,
    identifier: Option<&str>,
    program: Option<&str>,
) -> AdvisorAssignment {
    let identifier = match identifier {
        Some(id) if !id.is_empty() => id,
        _ => return AdvisorAssignment::default(),
    };
    let seed = derive_seed(identifier);

    if let Some(base) = config.exact_advisor_overrides.get(identifier) {
        log::debug!("advisors for {identifier}: exact override");
        return sample_override(base, seed);
    }

    for len in PREFIX_LENGTHS {
        let Some(prefix) = char_prefix(identifier, len) else {
            continue;
        };
        if let Some(base) = config.prefix_advisor_overrides.get(prefix) {
            log::debug!("advisors for {identifier}: prefix override '{prefix}'");
            return sample_override(base, seed);
        }
    }

    if let Some(program) = program {
        if let Some(family) = config.program_families.iter().find(|f| f.matches_program(program)) {
            log::debug!("advisors for {identifier}: program family of '{program}'");
            let picks = family
                .activities
                .iter()
                .map(|a| {
                    let pool = config.advisor_pool(a.activity);
                    (a.activity, pick_deterministic(pool, a.activity.quota(), seed + a.seed_offset))
                })
                .collect();
            return AdvisorAssignment(picks);
        }
    }

    log::debug!("advisors for {identifier}: default catalog");
    let picks = config
        .advisors
        .iter()
        .map(|(kind, pool)| (*kind, pick_deterministic(pool, kind.quota(), seed + kind.seed_offset())))
        .collect();
    AdvisorAssignment(picks)
}

/// Samples only the activities the entry lists. An activity listed
/// with no advisors stays empty; it does not fall back to the default pool.
fn sample_override(base: &AdvisorPools, seed: u64) -> AdvisorAssignment {
    let picks = base
        .iter()
        .map(|(kind, list)| (*kind, pick_deterministic(list, kind.quota(), seed + kind.seed_offset())))
        .collect();
    AdvisorAssignment(picks)
}

/// The first `len` characters, if the identifier has that many.
fn char_prefix(s: &str, len: usize) -> Option<&str> {
    match s.char_indices().nth(len) {
        Some((end, _)) => Some(&s[..end]),
        None if s.chars().count() == len => Some(s),
        None => None,
    }
}
