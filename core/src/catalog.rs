//! Built-in reference catalogs.
//!
//! These tables are the data the portal ships with. They are plain
//! immutable slices; GeneratorConfig::builtin() copies them once into
//! owned configuration, and data/*.json mirrors them for deployments
//! that load catalogs from disk.

use crate::types::{ActivityKind, TranscriptMode};

/// (name, field)
pub type AdvisorRow = (&'static str, &'static str);

/// (title, code, credits)
pub type CourseRow = (&'static str, &'static str, u32);

/// Default advisor pool for each activity.
pub fn default_advisors(kind: ActivityKind) -> &'static [AdvisorRow] {
    match kind {
        ActivityKind::Internship => &[
            ("Dr. Ahmad Susanto, M.Kom.", "Pemrograman"),
            ("Dra. Siti Aminah, M.T.", "Analisis Sistem"),
        ],
        ActivityKind::AlgorithmLab => &[
            ("Prof. Dr. Bambang Sutrisno, M.Sc.", "Algoritma"),
            ("Drs. Hendra Wijaya, M.Kom.", "Struktur Data"),
        ],
        ActivityKind::Fieldwork => &[
            ("Ir. Diana Maulida, M.T.", "Manajemen Proyek"),
            ("Dr. Rudi Hermawan, M.Kom.", "Database"),
        ],
        ActivityKind::CommunityService => &[
            ("Dr. Maya Sari, M.Si.", "Sosial Masyarakat"),
            ("Drs. Joko Prasetyo, M.Pd.", "Pengabdian"),
        ],
        ActivityKind::Thesis => &[
            ("Prof. Dr. Indra Gunawan, M.T.", "Kecerdasan Buatan"),
            ("Dr. Lisa Andriani, M.Kom.", "Sistem Informasi"),
            ("Drs. Farid Rahman, M.Sc.", "Jaringan Komputer"),
        ],
    }
}

/// Curated exceptions for individual identifiers. Empty by default.
pub fn exact_advisor_overrides() -> &'static [(&'static str, &'static [(ActivityKind, &'static [AdvisorRow])])] {
    &[]
}

/// Cohorts sharing an identifier prefix share advisors.
pub fn prefix_advisor_overrides() -> &'static [(&'static str, &'static [(ActivityKind, &'static [AdvisorRow])])] {
    &[
        ("2325", &[
            (ActivityKind::Internship, &[("Dr. Ahmad Susanto, M.Kom.", "Pemrograman")]),
            (ActivityKind::Thesis, &[("Dr. Lisa Andriani, M.Kom.", "Sistem Informasi")]),
        ]),
        ("2505", &[
            (ActivityKind::Internship, &[("Dra. Siti Aminah, M.T.", "Analisis Sistem")]),
        ]),
    ]
}

/// Program families: (program substrings, [(activity, seed offset)]).
/// A matching program only gets advisors for the listed activities.
pub fn program_families() -> &'static [(&'static [&'static str], &'static [(ActivityKind, u64)])] {
    &[
        (
            &["Sistem Informasi", "Bisnis Digital"],
            &[(ActivityKind::Internship, 1), (ActivityKind::Thesis, 2)],
        ),
        (
            &["Komputerisasi Akuntansi"],
            &[(ActivityKind::Fieldwork, 3), (ActivityKind::CommunityService, 4)],
        ),
    ]
}

/// Program → program head. Order matters for substring fallback.
pub fn program_heads() -> &'static [(&'static str, &'static str)] {
    &[
        ("S1 - Sistem Informasi", "M. Fahmi Nugraha, M.Kom."),
        ("S1 - Bisnis Digital", "Dr. Ahmad Susanto, M.Kom."),
        ("S1 - Ilmu Komputer", "Prof. Dr. Bambang Sutrisno, M.Sc."),
        ("S1 - Data Science", "Dra. Siti Aminah, M.T."),
        ("S1 - Teknik Informatika", "Dr. Rudi Hermawan, M.Kom."),
        ("S1 - Akuntansi", "Dr. Maya Sari, M.Si."),
        ("D3 - Komputerisasi Akuntansi", "Drs. Joko Prasetyo, M.Pd."),
        ("D3 - Manajemen Informatika", "Ir. Diana Maulida, M.T."),
        ("D3 - Teknik Industri", "Drs. Farid Rahman, M.Sc."),
    ]
}

/// Courses shared by every program, one slice per term (1..=5).
pub fn common_courses() -> &'static [&'static [CourseRow]] {
    &[
        &[
            ("Matematika Dasar I", "MATH101", 4),
            ("Fisika Dasar I", "PHYS101", 3),
            ("Kimia Dasar", "CHEM101", 3),
            ("Pengantar Teknologi Informasi", "IT101", 3),
            ("Bahasa Indonesia", "IND101", 2),
            ("Pendidikan Pancasila", "PPKN101", 2),
            ("Bahasa Inggris I", "ENG101", 2),
            ("Algoritma dan Pemrograman I", "ALG101", 3),
            ("Logika Matematika", "LOG101", 2),
        ],
        &[
            ("Matematika Dasar II", "MATH102", 4),
            ("Fisika Dasar II", "PHYS102", 3),
            ("Algoritma dan Pemrograman II", "ALG102", 3),
            ("Struktur Data", "STR102", 3),
            ("Arsitektur Komputer", "ARS102", 3),
            ("Sistem Digital", "DIG102", 3),
            ("Bahasa Inggris II", "ENG102", 2),
            ("Kewarganegaraan", "CIV102", 2),
            ("Pendidikan Agama", "REL102", 2),
        ],
        &[
            ("Matematika Diskrit", "DIS201", 3),
            ("Basis Data", "DB201", 3),
            ("Pemrograman Berorientasi Objek", "OOP201", 3),
            ("Sistem Operasi", "OS201", 3),
            ("Jaringan Komputer", "NET201", 3),
            ("Statistika dan Probabilitas", "STAT201", 3),
            ("Interaksi Manusia Komputer", "HCI201", 2),
            ("Analisis Sistem Informasi", "ASI201", 3),
            ("Kewirausahaan", "ENT201", 2),
        ],
        &[
            ("Rekayasa Perangkat Lunak", "SE202", 3),
            ("Pemrograman Web", "WEB202", 3),
            ("Pemrograman Mobile", "MOB202", 3),
            ("Data Mining", "DM202", 3),
            ("Keamanan Informasi", "SEC202", 3),
            ("Manajemen Proyek TI", "PM202", 3),
            ("Grafika Komputer", "CG202", 3),
            ("Kecerdasan Buatan", "AI202", 3),
            ("Etika Profesi", "ETH202", 2),
        ],
        &[
            ("Praktek Adaptasi Lapangan", "MK205019", 3),
            ("Kontrol dan Audit Sistem Informasi", "MK205007", 3),
            ("Statistik Komputasi", "DK200019", 3),
            ("Pemrograman Mobile 2", "MK205014", 4),
            ("Rekayasa Sistem Informasi", "DK200015", 3),
            ("Testing & Implementasi Sistem Informasi", "MK205026", 3),
            ("Manajemen Resiko TI", "MP205001", 2),
            ("Leadership & Comunication Skill", "MK205009", 2),
            ("Bahasa Inggris III (Conversation)", "DK205004", 1),
        ],
    ]
}

/// Program-specific course lists: (program, term, courses).
/// Matched on exact program name.
pub fn program_course_overrides() -> &'static [(&'static str, u32, &'static [CourseRow])] {
    &[
        ("S1 - Bisnis Digital", 5, &[
            ("E-Commerce Strategy", "BD205001", 3),
            ("Digital Marketing Analytics", "BD205002", 3),
            ("Business Intelligence", "BD205003", 4),
            ("Fintech and Payment Systems", "BD205004", 3),
            ("User Experience Design", "BD205005", 3),
            ("Digital Transformation", "BD205006", 2),
            ("Data Analytics for Business", "BD205007", 3),
            ("Strategic Management", "BD205008", 3),
            ("Business Project", "BD205009", 2),
        ]),
        ("D3 - Komputerisasi Akuntansi", 5, &[
            ("Akuntansi Keuangan Menengah", "KA205001", 3),
            ("Sistem Informasi Akuntansi", "KA205002", 3),
            ("Perpajakan Digital", "KA205003", 4),
            ("Auditing Sistem Informasi", "KA205004", 3),
            ("Software Akuntansi", "KA205005", 3),
            ("Manajemen Database Akuntansi", "KA205006", 2),
            ("Akuntansi Biaya", "KA205007", 3),
            ("Akuntansi Manajemen", "KA205008", 3),
            ("Laporan Keuangan", "KA205009", 2),
        ]),
    ]
}

/// Letter grades ordered from the top grade point down.
pub fn grade_buckets() -> &'static [(&'static str, f64)] {
    &[
        ("A", 4.0),
        ("A-", 3.7),
        ("B+", 3.5),
        ("B", 3.0),
        ("B-", 2.7),
        ("C+", 2.3),
        ("C", 2.0),
        ("D", 1.0),
        ("E", 0.0),
    ]
}

/// Identifiers with fixed outcomes: (identifier, transcript mode, cumulative GPA).
/// The single entry is the portal's demo account.
pub fn identity_overrides() -> &'static [(&'static str, Option<TranscriptMode>, Option<f64>)] {
    &[("232505059", Some(TranscriptMode::Perfect), Some(3.99))]
}
