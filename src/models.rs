use std::collections::BTreeMap;

/// Highest mastery level a card can reach
pub const MAX_MASTERY_LEVEL: u32 = 30;

/// Card identifier -> joined card data
pub type CardMap = BTreeMap<String, CardRecord>;

/// Album identifier -> album progress
pub type AlbumMap = BTreeMap<String, AlbumRecord>;

/// One card joined from the collection and mastery documents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardRecord {
    pub id: String,
    pub boosters: u32,
    pub mastery_level: u32,
    pub mastery_xp: u64,
    /// Owned art variants, de-duplicated and sorted
    pub variants: Vec<String>,
    /// First album that lists one of the owned variants
    pub album_id: Option<String>,
}

impl CardRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Returns true only for cards sitting exactly at the mastery cap
    pub fn is_max_mastery(&self) -> bool {
        self.mastery_level == MAX_MASTERY_LEVEL
    }
}

/// A themed album and how many of its variants are owned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRecord {
    pub id: String,
    pub name: String,
    pub variants: Vec<String>,
    pub total: u32,
    pub filled: u32,
}

impl AlbumRecord {
    pub fn needed(&self) -> u32 {
        self.total.saturating_sub(self.filled)
    }

    /// Percentage of owned variants. An empty album counts as 0%.
    pub fn completion_pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.filled) / f64::from(self.total) * 100.0
    }
}

/// Everything extracted from one pair of save files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    cards: CardMap,
    albums: AlbumMap,
}

impl Collection {
    pub fn new(cards: CardMap, albums: AlbumMap) -> Self {
        Self { cards, albums }
    }

    pub fn cards(&self) -> &CardMap {
        &self.cards
    }

    pub fn albums(&self) -> &AlbumMap {
        &self.albums
    }

    pub fn card(&self, id: &str) -> Option<&CardRecord> {
        self.cards.get(id)
    }
}
