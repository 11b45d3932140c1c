//! Program head (kaprodi) lookup.

use crate::config::GeneratorConfig;

/// Shown when no program head is known.
pub const UNKNOWN_PROGRAM_HEAD: &str = "-";

/// Head of a study program.
///
/// Exact program names match first. Otherwise the first table entry
/// whose name contains the program, or is contained in it, wins.
pub fn lookup_program_head(config: &GeneratorConfig, program: Option<&str>) -> String {
    let program = match program {
        Some(p) if !p.is_empty() && p != UNKNOWN_PROGRAM_HEAD => p,
        _ => return UNKNOWN_PROGRAM_HEAD.to_string(),
    };

    let heads = &config.program_heads;
    let found = heads
        .iter()
        .find(|h| h.program == program)
        .or_else(|| {
            heads
                .iter()
                .find(|h| h.program.contains(program) || program.contains(h.program.as_str()))
        });

    match found {
        Some(h) => h.head.clone(),
        None => {
            log::debug!("no program head for '{program}'");
            UNKNOWN_PROGRAM_HEAD.to_string()
        }
    }
}
