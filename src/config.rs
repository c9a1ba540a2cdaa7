use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const COLLECTION_FILE_NAME: &str = "CollectionState.json";
pub const MASTERY_FILE_NAME: &str = "CharacterMasteryState.json";

/// Overrides the save folder when set
pub const STATES_DIR_ENV: &str = "SNAP_STATES_DIR";

/// Save folder relative to the Windows user profile
const STATES_DIR_SEGMENTS: [&str; 7] = [
    "AppData",
    "LocalLow",
    "Second Dinner",
    "SNAP",
    "Standalone",
    "States",
    "nvprod",
];

/// Locations of the two save documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePaths {
    pub collection: PathBuf,
    pub mastery: PathBuf,
}

impl SavePaths {
    pub fn new(collection: impl Into<PathBuf>, mastery: impl Into<PathBuf>) -> Self {
        Self {
            collection: collection.into(),
            mastery: mastery.into(),
        }
    }

    /// Both files under a single states directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(COLLECTION_FILE_NAME), dir.join(MASTERY_FILE_NAME))
    }

    pub fn exists(&self) -> bool {
        self.collection.is_file() && self.mastery.is_file()
    }

    /// The game's save folder: `SNAP_STATES_DIR`, then `%USERPROFILE%`, then the home directory
    pub fn default_states_dir() -> Option<PathBuf> {
        states_dir_from(
            std::env::var_os(STATES_DIR_ENV),
            std::env::var_os("USERPROFILE").map(PathBuf::from),
            dirs::home_dir(),
        )
    }

    /// Default save paths, only when both files are actually present
    pub fn discover() -> Option<Self> {
        let dir = Self::default_states_dir()?;
        let paths = Self::in_dir(&dir);
        if paths.exists() {
            log::info!("Found SNAP save files in {}", dir.display());
            Some(paths)
        } else {
            log::info!("No SNAP save files in {}", dir.display());
            None
        }
    }

    /// Combine explicit paths with a states directory (or the default one).
    ///
    /// Explicit paths always win; anything left unspecified is taken from
    /// `states_dir`, falling back to [`SavePaths::default_states_dir`].
    pub fn resolve(
        collection: Option<PathBuf>,
        mastery: Option<PathBuf>,
        states_dir: Option<PathBuf>,
    ) -> Option<Self> {
        if let (Some(collection), Some(mastery)) = (&collection, &mastery) {
            return Some(Self::new(collection, mastery));
        }

        let dir = states_dir.or_else(Self::default_states_dir)?;
        let defaults = Self::in_dir(&dir);
        Some(Self {
            collection: collection.unwrap_or(defaults.collection),
            mastery: mastery.unwrap_or(defaults.mastery),
        })
    }
}

fn states_dir_from(
    env_override: Option<OsString>,
    user_profile: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    let profile = user_profile.filter(|p| !p.as_os_str().is_empty()).or(home)?;
    Some(
        STATES_DIR_SEGMENTS
            .iter()
            .fold(profile, |path, segment| path.join(segment)),
    )
}
