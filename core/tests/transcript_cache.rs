//! Transcript cache: key layout, read-through generation, overrides.

use khs_core::{
    store::{cache_key, TranscriptStore},
    KhsError, RecordGenerator,
};

const DEMO: &str = "232505059";

fn store() -> TranscriptStore {
    let store = TranscriptStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

#[test]
fn cache_keys_are_namespaced_by_identifier() {
    assert_eq!(cache_key("240101001"), "transcript_data_240101001");
}

#[test]
fn first_load_generates_and_writes() {
    let store = store();
    let generator = RecordGenerator::builtin();

    assert!(store.get_terms("240101001").unwrap().is_none());
    let terms = store.load_or_generate(&generator, "240101001", None).unwrap();

    assert_eq!(terms, generator.transcript(Some("240101001"), None));
    assert_eq!(store.get_terms("240101001").unwrap(), Some(terms));
    assert!(store.stored_at("240101001").unwrap().is_some());
}

#[test]
fn cached_transcript_is_served_as_is() {
    let store = store();
    let generator = RecordGenerator::builtin();

    // A transcript cached under a different program stays authoritative.
    let cached = generator.transcript(Some("240101001"), Some("S1 - Bisnis Digital"));
    store.put_terms("240101001", &cached).unwrap();

    let loaded = store.load_or_generate(&generator, "240101001", None).unwrap();
    assert_eq!(loaded, cached);
}

#[test]
fn regeneration_is_idempotent() {
    let store = store();
    let generator = RecordGenerator::builtin();

    let first = store.load_or_generate(&generator, "240101001", None).unwrap();
    store.remove("240101001").unwrap();
    let second = store.load_or_generate(&generator, "240101001", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn forced_identifiers_always_regenerate() {
    let store = store();
    let generator = RecordGenerator::builtin();

    let stale = generator.transcript(Some("240101001"), None);
    store.put_terms(DEMO, &stale).unwrap();

    let terms = store.load_or_generate(&generator, DEMO, None).unwrap();
    assert!(terms.iter().all(|t| t.gpa == Some(4.0)));
    assert_eq!(store.get_terms(DEMO).unwrap(), Some(terms));
}

#[test]
fn cumulative_from_cache_honors_override() {
    let store = store();
    let generator = RecordGenerator::builtin();

    assert_eq!(store.cumulative_from_cache(&generator, DEMO).unwrap(), None);
    store.load_or_generate(&generator, DEMO, None).unwrap();
    assert_eq!(store.cumulative_from_cache(&generator, DEMO).unwrap(), Some(3.99));

    let terms = store.load_or_generate(&generator, "240101001", None).unwrap();
    let expected = generator.cumulative_gpa(&terms, Some("240101001"));
    assert_eq!(store.cumulative_from_cache(&generator, "240101001").unwrap(), Some(expected));
}

#[test]
fn portal_blobs_are_readable() {
    let store = store();
    // Written by the portal: no `ip`, older field order.
    let blob = r#"[{"semester":1,"sks":3,"totalNilaiMutu":11.1,"transcript":[
        {"no":1,"mataKuliah":"Basis Data","kodeMK":"DB201","hurufMutu":"A-","angkaMutu":3.7,"sks":3,"nilaiMutu":11.1}
    ]}]"#;
    store.put_raw(&cache_key("240101001"), blob).unwrap();

    let terms = store.get_terms("240101001").unwrap().expect("blob parses");
    assert_eq!(terms[0].lines[0].course_code, "DB201");
    assert_eq!(terms[0].gpa, None);

    let stats = khs_core::gpa::term_stats(&terms);
    assert!((stats[0].gpa - 3.7).abs() < 1e-9);
}

#[test]
fn unreadable_blobs_are_a_miss() {
    let store = store();
    let generator = RecordGenerator::builtin();
    store.put_raw(&cache_key("240101001"), "{not json").unwrap();

    assert!(store.get_terms("240101001").unwrap().is_none());
    let terms = store.load_or_generate(&generator, "240101001", None).unwrap();
    assert_eq!(terms.len(), 5);
}

#[test]
fn empty_identifiers_are_rejected() {
    let store = store();
    let generator = RecordGenerator::builtin();
    assert!(matches!(
        store.load_or_generate(&generator, "", None),
        Err(KhsError::EmptyIdentifier)
    ));
    assert!(matches!(store.put_terms("-", &[]), Err(KhsError::EmptyIdentifier)));
}

#[test]
fn last_writer_wins() {
    let store = store();
    let generator = RecordGenerator::builtin();
    let a = generator.transcript(Some("240101001"), None);
    let b = generator.transcript(Some("240101001"), Some("S1 - Bisnis Digital"));

    store.put_terms("240101001", &a).unwrap();
    store.put_terms("240101001", &b).unwrap();
    assert_eq!(store.get_terms("240101001").unwrap(), Some(b));
    assert!(store.remove("240101001").unwrap());
    assert!(!store.remove("240101001").unwrap());
}
