//! Same identifier, same record. Every time, on every thread.
//!
//! Cached transcripts are only trustworthy if regeneration reproduces
//! them exactly. Any divergence here is a blocker.

use khs_core::{derive_seed, RecordGenerator, SeedStream};
use std::sync::Arc;

const IDENTIFIER: &str = "240101001";
const PROGRAM: Option<&str> = Some("S1 - Teknik Informatika");

#[test]
fn same_identifier_produces_identical_records() {
    let a = RecordGenerator::builtin().academic_record(IDENTIFIER, PROGRAM);
    let b = RecordGenerator::builtin().academic_record(IDENTIFIER, PROGRAM);

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("serialize a"),
        serde_json::to_string(&b).expect("serialize b"),
        "serialized records diverged"
    );
}

#[test]
fn seed_derivation_is_stable() {
    for id in ["", "abc", "232505059", "000123456789", "NIM-00-17"] {
        assert_eq!(derive_seed(id), derive_seed(id), "seed for {id:?} changed between calls");
        assert!(derive_seed(id) > 0);
    }
}

#[test]
fn fresh_streams_replay_the_same_sequence() {
    let first: Vec<u64> = {
        let mut s = SeedStream::new(42);
        (0..5).map(|_| s.next_f64().to_bits()).collect()
    };
    for _ in 0..3 {
        let mut s = SeedStream::new(42);
        let again: Vec<u64> = (0..5).map(|_| s.next_f64().to_bits()).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn different_identifiers_produce_different_transcripts() {
    let generator = RecordGenerator::builtin();
    let a = generator.transcript(Some("240101001"), PROGRAM);
    let b = generator.transcript(Some("240101002"), PROGRAM);
    assert_ne!(a, b, "different seeds produced identical transcripts");
}

#[test]
fn concurrent_generation_agrees() {
    let generator = Arc::new(RecordGenerator::builtin());
    let expected = generator.academic_record(IDENTIFIER, PROGRAM);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            std::thread::spawn(move || generator.academic_record(IDENTIFIER, PROGRAM))
        })
        .collect();

    for handle in handles {
        let record = handle.join().expect("generator thread panicked");
        assert_eq!(record, expected);
    }
}
