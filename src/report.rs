//! Report building
//!
//! Turns a loaded [`Collection`] into an ordered list of rows for one of the
//! fixed [`ReportKind`]s. Every card report shares the same comparator,
//! parameterized by a [`SortSpec`]; final ties always fall back to the card
//! identifier so the output is identical for identical input.

use crate::models::{AlbumMap, AlbumRecord, CardMap, CardRecord, Collection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The available reports, in selector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ReportKind {
    BoostersThenMastery,
    BoostersThenMasteryMaxBottom,
    MasteryThenBoosters,
    MasteryPlusBoosters,
    MasteryPlusBoostersMaxBottom,
    VariantsPerCard,
    AlbumsByCompletion,
}

impl ReportKind {
    pub fn all() -> &'static [ReportKind] {
        &[
            ReportKind::BoostersThenMastery,
            ReportKind::BoostersThenMasteryMaxBottom,
            ReportKind::MasteryThenBoosters,
            ReportKind::MasteryPlusBoosters,
            ReportKind::MasteryPlusBoostersMaxBottom,
            ReportKind::VariantsPerCard,
            ReportKind::AlbumsByCompletion,
        ]
    }

    /// Label shown in the report selector
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::BoostersThenMastery => "Cards: Boosters (DESC) then Mastery (DESC)",
            ReportKind::BoostersThenMasteryMaxBottom => {
                "Cards: Boosters (DESC), Max Mastery (30) at Bottom"
            }
            ReportKind::MasteryThenBoosters => "Cards: Mastery (DESC) then Boosters (DESC)",
            ReportKind::MasteryPlusBoosters => "Cards: Mastery + Boosters (DESC/DESC)",
            ReportKind::MasteryPlusBoostersMaxBottom => {
                "Cards: Mastery + Boosters (DESC/DESC), Max Mastery (30) at Bottom"
            }
            ReportKind::VariantsPerCard => "Variants: Per Card (Most → Least)",
            ReportKind::AlbumsByCompletion => "Albums: Completion (Most → Least)",
        }
    }

    /// Suggested file name for a CSV export
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ReportKind::BoostersThenMastery => "cards_by_boosters_then_mastery.csv",
            ReportKind::BoostersThenMasteryMaxBottom => "cards_by_boosters_max_mastery_bottom.csv",
            ReportKind::MasteryThenBoosters => "cards_by_mastery_then_boosters.csv",
            ReportKind::MasteryPlusBoosters => "cards_by_mastery_plus_boosters.csv",
            ReportKind::MasteryPlusBoostersMaxBottom => {
                "cards_by_mastery_plus_boosters_max_mastery_bottom.csv"
            }
            ReportKind::VariantsPerCard => "variants_by_card_most_to_least.csv",
            ReportKind::AlbumsByCompletion => "albums_by_completion_most_to_least.csv",
        }
    }

    /// Column headers, matching the CSV header row
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ReportKind::VariantsPerCard => &["CardDefId", "VariantCount", "OwnedVariantIds"],
            ReportKind::AlbumsByCompletion => &[
                "AlbumDefId",
                "AlbumName",
                "TotalVariants",
                "OwnedVariants",
                "NeededForCompletion",
                "CompletionPct",
            ],
            _ => &["CardDefId", "Boosters", "MasteryLevel", "MasteryXP"],
        }
    }

    /// Ordering for card-based reports; `None` for the album report
    pub fn sort_spec(&self) -> Option<SortSpec> {
        use SortKey::*;
        let spec = match self {
            ReportKind::BoostersThenMastery => SortSpec::new(Boosters, Some(MasteryLevel), false),
            ReportKind::BoostersThenMasteryMaxBottom => {
                SortSpec::new(Boosters, Some(MasteryLevel), true)
            }
            // Same ordering, different label
            ReportKind::MasteryThenBoosters | ReportKind::MasteryPlusBoosters => {
                SortSpec::new(MasteryLevel, Some(Boosters), false)
            }
            ReportKind::MasteryPlusBoostersMaxBottom => {
                SortSpec::new(MasteryLevel, Some(Boosters), true)
            }
            ReportKind::VariantsPerCard => SortSpec::new(VariantCount, None, false),
            ReportKind::AlbumsByCompletion => return None,
        };
        Some(spec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Boosters,
    MasteryLevel,
    VariantCount,
}

impl SortKey {
    fn value(self, card: &CardRecord) -> u64 {
        match self {
            SortKey::Boosters => u64::from(card.boosters),
            SortKey::MasteryLevel => u64::from(card.mastery_level),
            SortKey::VariantCount => card.variant_count() as u64,
        }
    }
}

/// Descending primary key, optional descending secondary key, then card id ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub primary: SortKey,
    pub secondary: Option<SortKey>,
    /// Move cards at exactly max mastery below every other card
    pub max_mastery_last: bool,
}

impl SortSpec {
    pub fn new(primary: SortKey, secondary: Option<SortKey>, max_mastery_last: bool) -> Self {
        Self {
            primary,
            secondary,
            max_mastery_last,
        }
    }

    pub fn compare(&self, a: &CardRecord, b: &CardRecord) -> Ordering {
        let partition = if self.max_mastery_last {
            a.is_max_mastery().cmp(&b.is_max_mastery())
        } else {
            Ordering::Equal
        };

        partition
            .then_with(|| self.primary.value(b).cmp(&self.primary.value(a)))
            .then_with(|| match self.secondary {
                Some(key) => key.value(b).cmp(&key.value(a)),
                None => Ordering::Equal,
            })
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Row of the five card reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    #[serde(rename = "CardDefId")]
    pub card_id: String,
    #[serde(rename = "Boosters")]
    pub boosters: u32,
    #[serde(rename = "MasteryLevel")]
    pub mastery_level: u32,
    #[serde(rename = "MasteryXP")]
    pub mastery_xp: u64,
}

impl From<&CardRecord> for CardRow {
    fn from(card: &CardRecord) -> Self {
        Self {
            card_id: card.id.clone(),
            boosters: card.boosters,
            mastery_level: card.mastery_level,
            mastery_xp: card.mastery_xp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRow {
    #[serde(rename = "CardDefId")]
    pub card_id: String,
    #[serde(rename = "VariantCount")]
    pub variant_count: usize,
    /// Owned variant ids joined with `|`
    #[serde(rename = "OwnedVariantIds")]
    pub variant_ids: String,
}

impl From<&CardRecord> for VariantRow {
    fn from(card: &CardRecord) -> Self {
        Self {
            card_id: card.id.clone(),
            variant_count: card.variant_count(),
            variant_ids: card.variants.join("|"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRow {
    #[serde(rename = "AlbumDefId")]
    pub album_id: String,
    #[serde(rename = "AlbumName")]
    pub name: String,
    #[serde(rename = "TotalVariants")]
    pub total: u32,
    #[serde(rename = "OwnedVariants")]
    pub owned: u32,
    #[serde(rename = "NeededForCompletion")]
    pub needed: u32,
    /// Rounded to two decimals
    #[serde(rename = "CompletionPct")]
    pub completion_pct: f64,
}

impl From<&AlbumRecord> for AlbumRow {
    fn from(album: &AlbumRecord) -> Self {
        Self {
            album_id: album.id.clone(),
            name: album.name.clone(),
            total: album.total,
            owned: album.filled,
            needed: album.needed(),
            completion_pct: (album.completion_pct() * 100.0).round() / 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportRows {
    Cards(Vec<CardRow>),
    Variants(Vec<VariantRow>),
    Albums(Vec<AlbumRow>),
}

/// An ordered report, rebuilt from scratch on every generation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: ReportKind,
    pub rows: ReportRows,
}

impl Report {
    pub fn len(&self) -> usize {
        match &self.rows {
            ReportRows::Cards(rows) => rows.len(),
            ReportRows::Variants(rows) => rows.len(),
            ReportRows::Albums(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.kind.columns()
    }

    /// First `limit` rows as display strings, one `Vec` per row
    pub fn display_rows(&self, limit: usize) -> Vec<Vec<String>> {
        match &self.rows {
            ReportRows::Cards(rows) => rows
                .iter()
                .take(limit)
                .map(|r| {
                    vec![
                        r.card_id.clone(),
                        r.boosters.to_string(),
                        r.mastery_level.to_string(),
                        r.mastery_xp.to_string(),
                    ]
                })
                .collect(),
            ReportRows::Variants(rows) => rows
                .iter()
                .take(limit)
                .map(|r| {
                    vec![
                        r.card_id.clone(),
                        r.variant_count.to_string(),
                        r.variant_ids.clone(),
                    ]
                })
                .collect(),
            ReportRows::Albums(rows) => rows
                .iter()
                .take(limit)
                .map(|r| {
                    vec![
                        r.album_id.clone(),
                        r.name.clone(),
                        r.total.to_string(),
                        r.owned.to_string(),
                        r.needed.to_string(),
                        format!("{:.2}", r.completion_pct),
                    ]
                })
                .collect(),
        }
    }
}

/// Build one report. The input maps are only read.
pub fn build_report(cards: &CardMap, albums: &AlbumMap, kind: ReportKind) -> Report {
    let rows = match kind.sort_spec() {
        Some(spec) => {
            let sorted = sorted_cards(cards, spec);
            if kind == ReportKind::VariantsPerCard {
                ReportRows::Variants(sorted.into_iter().map(VariantRow::from).collect())
            } else {
                ReportRows::Cards(sorted.into_iter().map(CardRow::from).collect())
            }
        }
        None => ReportRows::Albums(sorted_albums(albums).into_iter().map(AlbumRow::from).collect()),
    };

    log::debug!("Built {:?} report", kind);
    Report { kind, rows }
}

fn sorted_cards(cards: &CardMap, spec: SortSpec) -> Vec<&CardRecord> {
    let mut sorted: Vec<&CardRecord> = cards.values().collect();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}

fn sorted_albums(albums: &AlbumMap) -> Vec<&AlbumRecord> {
    let mut sorted: Vec<&AlbumRecord> = albums.values().collect();
    sorted.sort_by(|a, b| {
        b.completion_pct()
            .total_cmp(&a.completion_pct())
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

impl Collection {
    pub fn report(&self, kind: ReportKind) -> Report {
        build_report(self.cards(), self.albums(), kind)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
