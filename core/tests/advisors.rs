//! Advisor assignment: priority tiers, quotas and sampling.

use khs_core::{
    config::AdvisorPools,
    ActivityKind, Advisor, GeneratorConfig, RecordGenerator,
};

const PROGRAMS: [Option<&str>; 5] = [
    None,
    Some("S1 - Sistem Informasi"),
    Some("S1 - Bisnis Digital"),
    Some("D3 - Komputerisasi Akuntansi"),
    Some("S1 - Teknik Informatika"),
];

fn names(list: &[Advisor]) -> Vec<&str> {
    list.iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn empty_identifier_gets_no_advisors() {
    let generator = RecordGenerator::builtin();
    assert!(generator.advisors(None, Some("S1 - Sistem Informasi")).is_empty());
    assert!(generator.advisors(Some(""), None).is_empty());
}

#[test]
fn quotas_hold_for_every_identifier_and_program() {
    let generator = RecordGenerator::builtin();
    let config = generator.config();

    for n in 0..300u32 {
        let id = format!("{}", 100_000_000 + n * 7_919);
        for program in PROGRAMS {
            let assignment = generator.advisors(Some(id.as_str()), program);
            assert!(!assignment.is_empty(), "{id} {program:?} got no advisors");
            for (kind, list) in assignment.iter() {
                let expected = kind.quota().min(config.advisor_pool(kind).len());
                assert!(list.len() <= kind.quota(), "{kind:?} over quota for {id}");
                assert_eq!(list.len(), expected, "{kind:?} for {id} {program:?}");

                let mut unique = names(list);
                unique.sort_unstable();
                unique.dedup();
                assert_eq!(unique.len(), list.len(), "duplicate advisor for {id}");
            }
        }
    }
}

#[test]
fn default_tier_fills_every_activity() {
    let generator = RecordGenerator::builtin();
    let assignment = generator.advisors(Some("12345678"), None);

    assert_eq!(assignment.len(), 5);
    assert_eq!(names(assignment.get(ActivityKind::Internship).unwrap()), ["Dr. Ahmad Susanto, M.Kom."]);
    assert_eq!(
        names(assignment.get(ActivityKind::AlgorithmLab).unwrap()),
        ["Prof. Dr. Bambang Sutrisno, M.Sc."]
    );
    // Quota covers the whole pool: returned in catalog order.
    assert_eq!(
        names(assignment.get(ActivityKind::Thesis).unwrap()),
        [
            "Prof. Dr. Indra Gunawan, M.T.",
            "Dr. Lisa Andriani, M.Kom.",
            "Drs. Farid Rahman, M.Sc.",
        ]
    );
}

#[test]
fn prefix_tier_beats_program_heuristic() {
    let generator = RecordGenerator::builtin();
    let assignment = generator.advisors(Some("232505059"), Some("D3 - Komputerisasi Akuntansi"));

    let kinds: Vec<_> = assignment.activities().collect();
    assert_eq!(kinds, [ActivityKind::Internship, ActivityKind::Thesis]);
    assert_eq!(names(assignment.get(ActivityKind::Internship).unwrap()), ["Dr. Ahmad Susanto, M.Kom."]);
    assert_eq!(names(assignment.get(ActivityKind::Thesis).unwrap()), ["Dr. Lisa Andriani, M.Kom."]);

    let other = generator.advisors(Some("250505050"), None);
    assert_eq!(other.activities().collect::<Vec<_>>(), [ActivityKind::Internship]);
    assert_eq!(names(other.get(ActivityKind::Internship).unwrap()), ["Dra. Siti Aminah, M.T."]);
}

#[test]
fn program_family_populates_only_its_activities() {
    let generator = RecordGenerator::builtin();

    let si = generator.advisors(Some("12345678"), Some("S1 - Sistem Informasi"));
    assert_eq!(si.activities().collect::<Vec<_>>(), [ActivityKind::Internship, ActivityKind::Thesis]);

    let ka = generator.advisors(Some("12345678"), Some("D3 - Komputerisasi Akuntansi"));
    assert_eq!(
        ka.activities().collect::<Vec<_>>(),
        [ActivityKind::Fieldwork, ActivityKind::CommunityService]
    );
    assert!(ka.get(ActivityKind::Thesis).is_none());

    let config = generator.config();
    assert_eq!(
        ka.or_default_catalog(ActivityKind::Thesis, config),
        config.advisor_pool(ActivityKind::Thesis)
    );
}

#[test]
fn exact_override_wins_and_empty_lists_stay_empty() {
    let mut config = GeneratorConfig::builtin();
    let mut entry = AdvisorPools::new();
    entry.insert(ActivityKind::Thesis, vec![
        Advisor::new("Dr. Rina Kartika, M.T.", "Rekayasa Perangkat Lunak"),
        Advisor::new("Dr. Yusuf Hakim, M.Kom.", "Basis Data"),
    ]);
    entry.insert(ActivityKind::AlgorithmLab, Vec::new());
    config.exact_advisor_overrides.insert("232505059".into(), entry);

    let generator = RecordGenerator::new(config);
    let assignment = generator.advisors(Some("232505059"), None);

    assert_eq!(assignment.len(), 2);
    assert_eq!(
        names(assignment.get(ActivityKind::Thesis).unwrap()),
        ["Dr. Rina Kartika, M.T.", "Dr. Yusuf Hakim, M.Kom."]
    );
    let lab = assignment.get(ActivityKind::AlgorithmLab).expect("listed activity is present");
    assert!(lab.is_empty(), "empty override list was filled: {lab:?}");
    assert!(assignment.get(ActivityKind::Internship).is_none());
}

#[test]
fn assignment_serializes_with_storage_codes() {
    let generator = RecordGenerator::builtin();
    let json = serde_json::to_value(generator.advisors(Some("232505059"), None)).unwrap();
    assert_eq!(json["ppl"][0]["nama"], "Dr. Ahmad Susanto, M.Kom.");
    assert_eq!(json["skripsi"][0]["bidang"], "Sistem Informasi");
}
