//! # French Rule Engine: End-to-End Scenarios
//!
//! Resolves the French calculator through the bootstrapped registry and
//! checks the reference scenarios, plus the idempotence and boundary
//! properties every calculator must satisfy.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use pdcalc_core::{Author, AuthorKind, PdError, Work};
use pdcalc_rules::jurisdiction::fr::{assumption, rule};
use pdcalc_rules::{Calculator, Registry};
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn french() -> Arc<dyn Calculator> {
    Registry::with_defaults()
        .expect("bootstrap should succeed")
        .lookup("fr")
        .expect("fr is registered at bootstrap")
}

fn collected_papers() -> Work {
    Work::new(
        "Collected Papers on the Public Domain (ed)",
        "photograph",
        date(2003, 1, 1),
    )
    .published(date(2003, 1, 1))
    .with_author(
        Author::person("Boyle, James")
            .born(date(1959, 1, 1))
            .died(date(1989, 2, 5))
            .from_country("uk"),
    )
    .with_author(
        Author::person("Schumann, Robert")
            .born(date(1859, 1, 1))
            .died(date(1999, 2, 5))
            .from_country("uk"),
    )
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_photograph_shortly_after_publication_is_protected() {
    let det = french().status(&collected_papers(), date(2003, 6, 1)).unwrap();
    assert!(!det.public_domain);
    assert_eq!(det.rule, rule::LIFE_PLUS_70);
    assert!(det.assumptions.contains(assumption::NOT_MORT_POUR_LA_FRANCE));
}

#[test]
fn test_photograph_is_still_protected_today() {
    assert!(!french().status_now(&collected_papers()).unwrap().public_domain);
}

#[test]
fn test_old_recording_is_public_domain() {
    let work = Work::new("I love flowers", "recording", date(1945, 1, 1))
        .published(date(1945, 1, 1))
        .with_author(
            Author::person("Schumann, Robert")
                .born(date(1859, 1, 1))
                .died(date(1899, 2, 5))
                .from_country("uk"),
        );
    let det = french().status(&work, date(2100, 1, 1)).unwrap();
    assert!(det.public_domain);
    assert_eq!(det.rule, rule::RECORDING_PUBLICATION_50);
    assert!(det.assumptions.contains(assumption::COMMUNICATED_ON_PUBLICATION));
}

#[test]
fn test_unrecognized_work_type_fails() {
    let work = Work::new("Le Penseur", "sculpture", date(1904, 1, 1))
        .with_author(Author::person("Rodin, Auguste").died(date(1917, 11, 17)));
    let err = french().status(&work, date(2020, 1, 1)).unwrap_err();
    assert_eq!(err, PdError::InvalidWorkType("sculpture".into()));
}

#[test]
fn test_database_without_eea_connection_is_protected() {
    let work = Work::new("Gazetteer", "database", date(1980, 1, 1))
        .published(date(1980, 1, 1))
        .with_author(Author::person("Survey Inc.").from_country("us"));
    let det = french().status(&work, date(2020, 1, 1)).unwrap();
    assert!(!det.public_domain);
    assert!(det.assumptions.contains(assumption::RIGHT_HOLDER));
}

#[test]
fn test_artistic_work_without_authors_is_orphan() {
    let work = Work::new("Untitled", "artistic", date(1700, 1, 1)).published(date(1700, 1, 1));
    let det = french().status(&work, date(2020, 1, 1)).unwrap();
    assert!(!det.public_domain);
    assert!(det.assumptions.contains(assumption::ORPHAN_WORK));
}

#[test]
fn test_unknown_jurisdiction() {
    let registry = Registry::with_defaults().unwrap();
    assert_eq!(
        registry.lookup("de").unwrap_err(),
        PdError::UnknownJurisdiction("de".into())
    );
}

// ---------------------------------------------------------------------------
// Assumption log isolation
// ---------------------------------------------------------------------------

#[test]
fn test_assumptions_do_not_accumulate_across_calls() {
    let calc = french();
    let db = Work::new("db", "database", date(2000, 1, 1)).with_eea(true);
    let film = Work::new("f", "film", date(2000, 1, 1));

    let first = calc.status(&db, date(2010, 1, 1)).unwrap();
    assert_eq!(first.assumptions.len(), 2);

    let second = calc.status(&film, date(2010, 1, 1)).unwrap();
    assert!(second.assumptions.is_empty());

    let third = calc.status(&db, date(2010, 1, 1)).unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let calc = french();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calc = Arc::clone(&calc);
            std::thread::spawn(move || calc.status(&collected_papers(), date(2003, 6, 1)).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn work_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "database",
        "literary",
        "artistic",
        "dramatic",
        "photograph",
        "composition",
        "collective",
        "film",
        "recording",
        "performance",
        "broadcast",
    ])
}

fn author_kind() -> impl Strategy<Value = AuthorKind> {
    prop_oneof![
        Just(AuthorKind::Person),
        Just(AuthorKind::Anonymous),
        Just(AuthorKind::Pseudonym),
    ]
}

prop_compose! {
    fn arb_work()(
        kind in work_type(),
        created in 0i64..60_000,
        published_after in proptest::option::of(0i64..40_000),
        changed_after in proptest::option::of(0i64..10_000),
        eea in proptest::option::of(any::<bool>()),
        treaty in proptest::option::of(10u32..100),
        authors in proptest::collection::vec(
            (author_kind(), proptest::option::of(0i64..50_000), prop::sample::select(vec!["fr", "us", "de", "jp"])),
            0..3,
        ),
    ) -> Work {
        let base = date(1850, 1, 1);
        let creation = base + Duration::days(created);
        let mut work = Work::new("generated", kind, creation);
        if let Some(days) = published_after {
            work = work.published(creation + Duration::days(days));
        }
        if let Some(days) = changed_after {
            work = work.changed_on(creation + Duration::days(days));
        }
        work.eea = eea;
        work.treaty_term = treaty;
        for (i, (kind, died, country)) in authors.into_iter().enumerate() {
            let mut author = Author::person(format!("author-{i}"))
                .with_kind(kind)
                .from_country(country);
            if let Some(days) = died {
                author = author.died(base + Duration::days(days));
            }
            work = work.with_author(author);
        }
        work
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical inputs give identical outcomes and logs.
    #[test]
    fn property_status_is_idempotent(work in arb_work(), offset in 0i64..80_000) {
        let calc = french();
        let as_of = date(1900, 1, 1) + Duration::days(offset);
        let first = calc.status(&work, as_of);
        let second = calc.status(&work, as_of);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: a film is never public domain on the day its 50-year
    /// term is reached exactly, and always is once the span exceeds it.
    #[test]
    fn property_threshold_is_strict(created in 0i64..40_000) {
        let calc = french();
        let fixation = date(1850, 1, 1) + Duration::days(created);
        let work = Work::new("f", "film", fixation);
        // 50 * 365.25 = 18262.5 days.
        let at_threshold = calc.status(&work, fixation + Duration::days(18_262)).unwrap();
        let past_threshold = calc.status(&work, fixation + Duration::days(18_263)).unwrap();
        prop_assert!(!at_threshold.public_domain);
        prop_assert!(past_threshold.public_domain);
    }

    /// PROPERTY: once a life-plus-70 work enters the public domain it
    /// stays there for every later reference date.
    #[test]
    fn property_public_domain_is_permanent(died in 0i64..40_000, later in 0i64..20_000) {
        let calc = french();
        let death = date(1850, 1, 1) + Duration::days(died);
        let work = Work::new("w", "literary", death)
            .published(death)
            .with_author(Author::person("a").died(death).from_country("fr"));
        let entry = death + Duration::days(25_568);
        prop_assert!(calc.status(&work, entry).unwrap().public_domain);
        prop_assert!(calc.status(&work, entry + Duration::days(later)).unwrap().public_domain);
    }
}
