//! Save document loading
//!
//! Reads `CollectionState.json` and `CharacterMasteryState.json` and joins
//! them into a [`Collection`]. Only the sections needed for the reports are
//! deserialized; everything else in the documents is ignored.

use crate::config::SavePaths;
use crate::error::LoadError;
use crate::models::{AlbumRecord, CardMap, CardRecord, Collection, MAX_MASTERY_LEVEL};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Keys that may hold an album variant identifier, in lookup order
const ALBUM_VARIANT_KEYS: [&str; 4] = ["Id", "ArtVariantDefId", "AlbumVariantDefId", "Value"];

#[derive(Debug, Deserialize)]
pub struct CollectionDocument {
    #[serde(rename = "ServerState")]
    server_state: CollectionState,
}

#[derive(Debug, Deserialize)]
struct CollectionState {
    #[serde(rename = "CardDefStats")]
    card_def_stats: CardDefStats,
    #[serde(rename = "Cards", default)]
    cards: Option<Vec<Value>>,
    #[serde(rename = "AllAlbumData", default)]
    albums: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct CardDefStats {
    #[serde(rename = "Stats")]
    stats: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct MasteryDocument {
    #[serde(rename = "ServerState")]
    server_state: MasteryState,
}

#[derive(Debug, Deserialize)]
struct MasteryState {
    #[serde(rename = "CharacterMasteryProgress")]
    progress: MasteryProgress,
}

#[derive(Debug, Deserialize)]
struct MasteryProgress {
    #[serde(rename = "CharacterProgressData")]
    characters: Map<String, Value>,
}

/// Load and join both save documents
pub fn load(paths: &SavePaths) -> Result<Collection, LoadError> {
    let collection: CollectionDocument = read_document(&paths.collection)?;
    let mastery: MasteryDocument = read_document(&paths.mastery)?;

    let loaded = Collection::from_documents(collection, mastery);
    info!(
        "Loaded {} cards and {} albums",
        loaded.cards().len(),
        loaded.albums().len()
    );
    Ok(loaded)
}

/// Read one JSON document, skipping a leading byte-order mark
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    debug!("Reading {}", path.display());
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let value: Value = serde_json::from_slice(body).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_value(value).map_err(|source| LoadError::Structure {
        path: path.to_path_buf(),
        source,
    })
}

impl Collection {
    /// Join the two documents by card identifier.
    ///
    /// A card found in only one document keeps zero for the fields the
    /// other document would have supplied.
    pub fn from_documents(collection: CollectionDocument, mastery: MasteryDocument) -> Self {
        let state = collection.server_state;
        let mut cards = CardMap::new();

        for (id, stat) in entries(&state.card_def_stats.stats) {
            let card = cards.entry(id.to_string()).or_insert_with(|| CardRecord::new(id));
            card.boosters = u32_field(stat, "Boosters", id).unwrap_or(0);
        }

        for (id, progress) in entries(&mastery.server_state.progress.characters) {
            let card = cards.entry(id.to_string()).or_insert_with(|| CardRecord::new(id));
            card.mastery_level = u32_field(progress, "LastClaimedLevel", id).unwrap_or(0);
            card.mastery_xp = count_field(progress, "Experience").unwrap_or(0);
            if card.mastery_level > MAX_MASTERY_LEVEL {
                warn!(
                    "{id} has mastery level {} above the cap of {MAX_MASTERY_LEVEL}",
                    card.mastery_level
                );
            }
        }

        let owned = owned_variants(state.cards.as_deref().unwrap_or_default());
        for (id, variants) in &owned {
            let card = cards.entry(id.clone()).or_insert_with(|| CardRecord::new(id.as_str()));
            card.variants = variants.iter().cloned().collect();
        }

        let owned_ids: HashSet<&str> = owned.values().flatten().map(String::as_str).collect();
        let albums = parse_albums(state.albums.as_deref().unwrap_or_default(), &owned_ids);
        assign_albums(&mut cards, &albums);

        Self::new(cards, albums.into_iter().map(|a| (a.id.clone(), a)).collect())
    }
}

/// Card entries of a keyed section, skipping `$type`-style metadata and non-objects
fn entries(section: &Map<String, Value>) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
    section.iter().filter_map(|(key, value)| {
        if key.starts_with('$') {
            return None;
        }
        value.as_object().map(|obj| (key.as_str(), obj))
    })
}

fn count_field(obj: &Map<String, Value>, field: &str) -> Option<u64> {
    obj.get(field).and_then(as_count)
}

/// A count that must fit in `u32`. Out-of-range values count as absent.
fn u32_field(obj: &Map<String, Value>, field: &str, card_id: &str) -> Option<u32> {
    let value = count_field(obj, field)?;
    u32::try_from(value)
        .map_err(|_| warn!("{card_id}: {field} value {value} is out of range, using 0"))
        .ok()
}

/// Lenient non-negative integer: JSON numbers or numeric strings
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_empty_str<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    obj.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// CardDefId -> owned art variants, from the `Cards` list
fn owned_variants(cards: &[Value]) -> BTreeMap<String, BTreeSet<String>> {
    let mut owned: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in cards.iter().filter_map(Value::as_object) {
        let Some(card_id) = non_empty_str(entry, "CardDefId") else {
            continue;
        };
        let variants = owned.entry(card_id.to_string()).or_default();
        if let Some(variant) = non_empty_str(entry, "ArtVariantDefId") {
            variants.insert(variant.to_string());
        }
    }

    owned
}

fn album_variant_id(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => ALBUM_VARIANT_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str)),
        _ => None,
    }
}

/// Albums in document order. Albums without variants or without any identifier are dropped.
fn parse_albums(entries: &[Value], owned: &HashSet<&str>) -> Vec<AlbumRecord> {
    let mut albums: Vec<AlbumRecord> = Vec::new();

    for entry in entries.iter().filter_map(Value::as_object) {
        let Some(def) = entry.get("AlbumDef").and_then(Value::as_object) else {
            continue;
        };

        let name = non_empty_str(def, "Name");
        let Some(id) = non_empty_str(def, "AlbumDefId").or(name) else {
            debug!("Skipping album without id or name");
            continue;
        };

        let variants: Vec<String> = def
            .get("AlbumVariants")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(album_variant_id).map(str::to_string).collect())
            .unwrap_or_default();

        if variants.is_empty() {
            debug!("Skipping album {id} with no variants");
            continue;
        }

        if albums.iter().any(|a| a.id == id) {
            warn!("Duplicate album {id}, keeping the first entry");
            continue;
        }

        let filled = variants.iter().filter(|v| owned.contains(v.as_str())).count();
        albums.push(AlbumRecord {
            id: id.to_string(),
            name: name.unwrap_or(id).to_string(),
            total: variants.len() as u32,
            filled: filled as u32,
            variants,
        });
    }

    albums
}

fn assign_albums(cards: &mut CardMap, albums: &[AlbumRecord]) {
    let mut album_of: HashMap<&str, &str> = HashMap::new();
    for album in albums {
        for variant in &album.variants {
            album_of.entry(variant.as_str()).or_insert(album.id.as_str());
        }
    }

    for card in cards.values_mut() {
        // Document order decides between albums, not variant order
        card.album_id = card
            .variants
            .iter()
            .filter_map(|v| album_of.get(v.as_str()))
            .min_by_key(|album_id| albums.iter().position(|a| a.id == **album_id))
            .map(|id| id.to_string());
    }
}
