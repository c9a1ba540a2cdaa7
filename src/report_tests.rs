//! Unit tests for report building and ordering

use super::*;
use crate::models::AlbumRecord;
use std::collections::HashSet;

fn card(id: &str, boosters: u32, mastery_level: u32) -> CardRecord {
    CardRecord {
        boosters,
        mastery_level,
        ..CardRecord::new(id)
    }
}

fn card_with_variants(id: &str, variants: &[&str]) -> CardRecord {
    CardRecord {
        variants: variants.iter().map(|v| v.to_string()).collect(),
        ..CardRecord::new(id)
    }
}

fn card_map(cards: Vec<CardRecord>) -> CardMap {
    cards.into_iter().map(|c| (c.id.clone(), c)).collect()
}

fn album(id: &str, total: u32, filled: u32) -> AlbumRecord {
    AlbumRecord {
        id: id.to_string(),
        name: format!("{id} Name"),
        variants: Vec::new(),
        total,
        filled,
    }
}

fn card_ids(report: &Report) -> Vec<String> {
    match &report.rows {
        ReportRows::Cards(rows) => rows.iter().map(|r| r.card_id.clone()).collect(),
        ReportRows::Variants(rows) => rows.iter().map(|r| r.card_id.clone()).collect(),
        ReportRows::Albums(rows) => rows.iter().map(|r| r.album_id.clone()).collect(),
    }
}

fn mastery_levels(report: &Report) -> Vec<u32> {
    match &report.rows {
        ReportRows::Cards(rows) => rows.iter().map(|r| r.mastery_level).collect(),
        _ => panic!("not a card report"),
    }
}

/// A mixed collection with ties, max-mastery cards and unbalanced sources
fn sample_cards() -> CardMap {
    card_map(vec![
        card("Abomination", 10, 30),
        card("Blade", 5, 20),
        card("Cable", 5, 20),
        card("Deadpool", 50, 30),
        card("Elektra", 0, 0),
        card("Falcon", 12, 5),
        card("Gamora", 12, 25),
    ])
}

const CARD_KINDS: [ReportKind; 6] = [
    ReportKind::BoostersThenMastery,
    ReportKind::BoostersThenMasteryMaxBottom,
    ReportKind::MasteryThenBoosters,
    ReportKind::MasteryPlusBoosters,
    ReportKind::MasteryPlusBoostersMaxBottom,
    ReportKind::VariantsPerCard,
];

// ==================== Worked examples ====================

#[test]
fn test_boosters_then_mastery_example() {
    let cards = card_map(vec![card("A", 10, 30), card("B", 5, 20)]);
    let report = build_report(&cards, &AlbumMap::new(), ReportKind::BoostersThenMastery);
    assert_eq!(card_ids(&report), vec!["A", "B"]);
}

#[test]
fn test_boosters_max_bottom_example() {
    let cards = card_map(vec![card("A", 10, 30), card("B", 5, 20)]);
    let report = build_report(
        &cards,
        &AlbumMap::new(),
        ReportKind::BoostersThenMasteryMaxBottom,
    );
    assert_eq!(card_ids(&report), vec!["B", "A"]);
}

// ==================== Ordering per kind ====================

#[test]
fn test_boosters_then_mastery_full_order() {
    let report = build_report(&sample_cards(), &AlbumMap::new(), ReportKind::BoostersThenMastery);
    // Gamora/Falcon tie on boosters, mastery decides; Blade/Cable tie on both, id decides
    assert_eq!(
        card_ids(&report),
        vec!["Deadpool", "Gamora", "Falcon", "Abomination", "Blade", "Cable", "Elektra"]
    );
}

#[test]
fn test_boosters_max_bottom_full_order() {
    let report = build_report(
        &sample_cards(),
        &AlbumMap::new(),
        ReportKind::BoostersThenMasteryMaxBottom,
    );
    assert_eq!(
        card_ids(&report),
        vec!["Gamora", "Falcon", "Blade", "Cable", "Elektra", "Deadpool", "Abomination"]
    );
}

#[test]
fn test_mastery_then_boosters_full_order() {
    let report = build_report(&sample_cards(), &AlbumMap::new(), ReportKind::MasteryThenBoosters);
    assert_eq!(
        card_ids(&report),
        vec!["Deadpool", "Abomination", "Gamora", "Blade", "Cable", "Falcon", "Elektra"]
    );
}

#[test]
fn test_mastery_plus_boosters_matches_mastery_then_boosters() {
    let cards = sample_cards();
    let then = build_report(&cards, &AlbumMap::new(), ReportKind::MasteryThenBoosters);
    let plus = build_report(&cards, &AlbumMap::new(), ReportKind::MasteryPlusBoosters);
    assert_eq!(then.rows, plus.rows);
    assert_ne!(then.kind.label(), plus.kind.label());
}

#[test]
fn test_mastery_plus_boosters_max_bottom_full_order() {
    let report = build_report(
        &sample_cards(),
        &AlbumMap::new(),
        ReportKind::MasteryPlusBoostersMaxBottom,
    );
    assert_eq!(
        card_ids(&report),
        vec!["Gamora", "Blade", "Cable", "Falcon", "Elektra", "Deadpool", "Abomination"]
    );
}

#[test]
fn test_variants_per_card_order() {
    let cards = card_map(vec![
        card_with_variants("Iron Man", &["IM_01"]),
        card_with_variants("Hulk", &["H_01", "H_02", "H_03"]),
        card_with_variants("Groot", &[]),
        card_with_variants("Hawkeye", &["HE_01"]),
    ]);

    let report = build_report(&cards, &AlbumMap::new(), ReportKind::VariantsPerCard);
    assert_eq!(card_ids(&report), vec!["Hulk", "Hawkeye", "Iron Man", "Groot"]);

    let ReportRows::Variants(rows) = &report.rows else {
        panic!("expected variant rows");
    };
    assert_eq!(rows[0].variant_count, 3);
    assert_eq!(rows[0].variant_ids, "H_01|H_02|H_03");
    assert_eq!(rows[3].variant_ids, "");
}

#[test]
fn test_albums_by_completion_order_and_values() {
    let albums: AlbumMap = vec![
        album("Zeta", 4, 2),
        album("Alpha", 2, 1),
        album("Beta", 3, 3),
        album("Gamma", 3, 1),
    ]
    .into_iter()
    .map(|a| (a.id.clone(), a))
    .collect();

    let report = build_report(&CardMap::new(), &albums, ReportKind::AlbumsByCompletion);
    // Alpha and Zeta tie at 50%, id ascending breaks it
    assert_eq!(card_ids(&report), vec!["Beta", "Alpha", "Zeta", "Gamma"]);

    let ReportRows::Albums(rows) = &report.rows else {
        panic!("expected album rows");
    };
    assert_eq!(rows[0].completion_pct, 100.0);
    assert_eq!(rows[3].completion_pct, 33.33);
    assert_eq!(rows[3].needed, 2);
    assert_eq!(rows[3].name, "Gamma Name");
}

#[test]
fn test_album_with_zero_total_is_zero_percent() {
    let albums: AlbumMap = vec![album("Empty", 0, 0), album("Half", 2, 1)]
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect();

    let report = build_report(&CardMap::new(), &albums, ReportKind::AlbumsByCompletion);
    let ReportRows::Albums(rows) = &report.rows else {
        panic!("expected album rows");
    };
    assert_eq!(rows[1].album_id, "Empty");
    assert_eq!(rows[1].completion_pct, 0.0);
}

// ==================== Properties ====================

#[test]
fn test_every_card_appears_exactly_once_in_every_card_report() {
    let cards = sample_cards();
    for kind in CARD_KINDS {
        let report = build_report(&cards, &AlbumMap::new(), kind);
        let ids = card_ids(&report);
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(ids.len(), cards.len(), "{kind:?}");
        assert_eq!(unique.len(), cards.len(), "{kind:?}");
        assert!(cards.keys().all(|id| unique.contains(id)), "{kind:?}");
    }
}

#[test]
fn test_max_bottom_kinds_put_max_mastery_last() {
    let cards = sample_cards();
    for kind in [
        ReportKind::BoostersThenMasteryMaxBottom,
        ReportKind::MasteryPlusBoostersMaxBottom,
    ] {
        let levels = mastery_levels(&build_report(&cards, &AlbumMap::new(), kind));
        let first_max = levels.iter().position(|&l| l == 30).unwrap();
        assert!(levels[first_max..].iter().all(|&l| l == 30), "{kind:?}");
        assert!(levels[..first_max].iter().all(|&l| l < 30), "{kind:?}");
    }
}

#[test]
fn test_only_exact_max_is_partitioned() {
    let cards = card_map(vec![card("Over", 1, 31), card("Max", 100, 30), card("Low", 2, 29)]);
    let report = build_report(
        &cards,
        &AlbumMap::new(),
        ReportKind::BoostersThenMasteryMaxBottom,
    );
    assert_eq!(card_ids(&report), vec!["Low", "Over", "Max"]);
}

#[test]
fn test_reports_are_deterministic() {
    let cards = sample_cards();
    for &kind in ReportKind::all() {
        let first = build_report(&cards, &AlbumMap::new(), kind);
        let second = build_report(&cards, &AlbumMap::new(), kind);
        assert_eq!(first, second, "{kind:?}");
    }
}

#[test]
fn test_build_report_leaves_inputs_untouched() {
    let cards = sample_cards();
    let snapshot = cards.clone();
    let _ = build_report(&cards, &AlbumMap::new(), ReportKind::MasteryPlusBoostersMaxBottom);
    assert_eq!(cards, snapshot);
}

#[test]
fn test_empty_collection_gives_empty_reports() {
    let collection = Collection::default();
    for &kind in ReportKind::all() {
        assert!(collection.report(kind).is_empty(), "{kind:?}");
    }
}

// ==================== ReportKind metadata ====================

#[test]
fn test_sort_spec_only_missing_for_albums() {
    for &kind in ReportKind::all() {
        assert_eq!(
            kind.sort_spec().is_none(),
            kind == ReportKind::AlbumsByCompletion,
            "{kind:?}"
        );
    }
}

#[test]
fn test_file_names_are_unique_csv() {
    let names: HashSet<&str> = ReportKind::all()
        .iter()
        .map(|k| k.default_file_name())
        .collect();
    assert_eq!(names.len(), ReportKind::all().len());
    assert!(names.iter().all(|n| n.ends_with(".csv")));
}

#[test]
fn test_display_rows_respect_limit_and_columns() {
    let report = build_report(&sample_cards(), &AlbumMap::new(), ReportKind::BoostersThenMastery);
    let rows = report.display_rows(3);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.len() == report.headers().len()));
    assert_eq!(rows[0], vec!["Deadpool", "50", "30", "0"]);
}

#[test]
fn test_album_display_uses_two_decimals() {
    let albums: AlbumMap = vec![album("Half", 2, 1)]
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect();
    let report = build_report(&CardMap::new(), &albums, ReportKind::AlbumsByCompletion);
    assert_eq!(report.display_rows(10)[0][5], "50.00");
}
