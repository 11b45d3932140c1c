//! SQLite-backed transcript cache.
//!
//! RULE: Only store.rs talks to the database.
//! Generated transcripts are cached as JSON under
//! `transcript_data_<identifier>`, the same key layout the portal's
//! local storage has always used. Last writer wins; regeneration is
//! idempotent, so there is no stronger consistency to keep.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use crate::{
    error::{KhsError, KhsResult},
    generator::RecordGenerator,
    transcript::TermSummary,
};

pub const TRANSCRIPT_STORAGE_KEY: &str = "transcript_data";

pub fn cache_key(identifier: &str) -> String {
    format!("{TRANSCRIPT_STORAGE_KEY}_{identifier}")
}

pub struct TranscriptStore {
    conn: Connection,
}

impl TranscriptStore {
    /// Open (or create) the cache database at `path`.
    pub fn open(path: &str) -> KhsResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> KhsResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> KhsResult<()> {
        self.conn.execute_batch(include_str!("../../migrations/001_transcript_cache.sql"))?;
        Ok(())
    }

    // ── Raw key-value ──────────────────────────────────────────

    pub fn put_raw(&self, key: &str, value: &str) -> KhsResult<()> {
        self.conn.execute(
            "INSERT INTO kv_cache (key, value, stored_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, stored_at = excluded.stored_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn get_raw(&self, key: &str) -> KhsResult<Option<String>> {
        let value = self.conn
            .query_row("SELECT value FROM kv_cache WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    // ── Transcripts ────────────────────────────────────────────

    pub fn put_terms(&self, identifier: &str, terms: &[TermSummary]) -> KhsResult<()> {
        require_identifier(identifier)?;
        let json = serde_json::to_string(terms)?;
        self.put_raw(&cache_key(identifier), &json)?;
        log::info!("Cached {} terms for {identifier}", terms.len());
        Ok(())
    }

    /// Cached terms for an identifier. A blob that no longer parses is
    /// treated as a miss.
    pub fn get_terms(&self, identifier: &str) -> KhsResult<Option<Vec<TermSummary>>> {
        let Some(json) = self.get_raw(&cache_key(identifier))? else {
            return Ok(None);
        };
        match serde_json::from_str::<Vec<TermSummary>>(&json) {
            Ok(terms) => Ok(Some(terms)),
            Err(e) => {
                log::warn!("Discarding unreadable cached transcript for {identifier}: {e}");
                Ok(None)
            }
        }
    }

    pub fn stored_at(&self, identifier: &str) -> KhsResult<Option<DateTime<Utc>>> {
        let key = cache_key(identifier);
        let raw: Option<String> = self.conn
            .query_row("SELECT stored_at FROM kv_cache WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        raw.map(|value| {
            DateTime::parse_from_rfc3339(&value)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| KhsError::CorruptTimestamp { key: key.clone(), value })
        })
        .transpose()
    }

    /// Returns true if an entry was removed.
    pub fn remove(&self, identifier: &str) -> KhsResult<bool> {
        let n = self.conn.execute(
            "DELETE FROM kv_cache WHERE key = ?1",
            params![cache_key(identifier)],
        )?;
        Ok(n > 0)
    }

    /// Read-if-present, else generate-and-write.
    ///
    /// Identifiers with a forced transcript mode are always regenerated
    /// and rewritten, so a stale randomized blob can never mask them.
    pub fn load_or_generate(
        &self,
        generator: &RecordGenerator,
        identifier: &str,
        program: Option<&str>,
    ) -> KhsResult<Vec<TermSummary>> {
        require_identifier(identifier)?;

        if !generator.always_regenerate(identifier) {
            if let Some(terms) = self.get_terms(identifier)?.filter(|t| !t.is_empty()) {
                log::debug!("Transcript cache hit for {identifier}");
                return Ok(terms);
            }
        }

        log::debug!("Generating transcript for {identifier}");
        let terms = generator.transcript(Some(identifier), program);
        self.put_terms(identifier, &terms)?;
        Ok(terms)
    }

    /// Cumulative GPA from the cached transcript, or None when nothing
    /// usable is cached.
    pub fn cumulative_from_cache(
        &self,
        generator: &RecordGenerator,
        identifier: &str,
    ) -> KhsResult<Option<f64>> {
        let terms = match self.get_terms(identifier)? {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(None),
        };
        Ok(Some(generator.cumulative_gpa(&terms, Some(identifier))))
    }
}

fn require_identifier(identifier: &str) -> KhsResult<()> {
    if identifier.is_empty() || identifier == "-" {
        return Err(KhsError::EmptyIdentifier);
    }
    Ok(())
}
