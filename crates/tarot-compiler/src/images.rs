//! Card-name to image-file matching.
//!
//! Image files live in one directory per arcana/suit under an image root.
//! Filenames follow loose conventions (`the_duck_debugger.png`,
//! `7_of_docker.jpg`, ...) so matching is heuristic: the first file in
//! listing order that fits wins, and no match is a valid outcome.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{CompileError, CompileResult};
use crate::rank::Rank;

/// Path prefix of every resolved image, relative to the web root.
pub const IMAGE_URL_PREFIX: &str = "card_images";

/// Image directory holding the major arcana.
pub const MAJOR_IMAGE_DIR: &str = "Major";

/// Image directories scanned by default, major first.
pub const IMAGE_DIRS: [&str; 5] = [
    MAJOR_IMAGE_DIR,
    "Linux",
    "Docker",
    "CloudDevelopers",
    "FreeSWITCHDevs",
];

/// Major-arcana name fragment to filename fragment, checked in order.
///
/// `caffine_overflow` is how the asset is actually named on disk.
pub const MAJOR_ALIASES: &[(&str, &str)] = &[
    ("the n00b", "the_noob"),
    ("the noob", "the_noob"),
    ("caffeine overflow", "caffine_overflow"),
    ("the infinite loop", "the_infinite_loop"),
    ("the compiler oracle", "the_compiler_oracle"),
    ("lord of legacy code", "lord_of_legacy_code"),
    ("the duck debugger", "the_duck_debugger"),
    ("merge conflict", "merge_conflict"),
    ("the market conqueror", "the_market_conqueror"),
    ("the lone wolf programmer", "the_lone_wolf"),
    ("the spinning wheel of death", "spinning_wheel_of_death"),
    ("order of operations", "order_of_operations"),
    ("the debugger", "the_debugger"),
    ("thread deadlock", "thread_deadlock"),
    ("segmentation fault", "segmentation_fault"),
    ("the negotiator", "the_negotiator"),
    ("feature creep", "feature_creep"),
    ("the tower of tech debt", "the_tower_of_tech_debt"),
    ("the rock star coder", "the_rock_star_coder"),
    ("mysterious bug", "mysterious_bug"),
    ("the enlightened algorithm", "the_enlightened_algorithm"),
    ("code review", "code_review"),
    ("the global recruiter", "the_global_recruiter"),
];

/// Suit text (lower-case) to the image directory holding that suit.
pub const SUIT_IMAGE_DIRS: &[(&str, &str)] = &[
    ("linux", "Linux"),
    ("docker", "Docker"),
    ("cloud developers", "CloudDevelopers"),
    ("freeswitch developers", "FreeSWITCHDevs"),
];

/// Listing of the image tree: directory name to filenames in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageIndex {
    dirs: BTreeMap<String, Vec<String>>,
}

impl ImageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory listing. Filename order is kept as given.
    pub fn with_dir<I, S>(mut self, dir: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs
            .insert(dir.into(), files.into_iter().map(Into::into).collect());
        self
    }

    /// Filenames of one directory, empty if the directory is unknown.
    pub fn files(&self, dir: &str) -> &[String] {
        self.dirs.get(dir).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of files across all directories.
    pub fn file_count(&self) -> usize {
        self.dirs.values().map(Vec::len).sum()
    }

    /// List the given subdirectories of `root`.
    ///
    /// Missing directories are skipped. Filenames are sorted so the listing
    /// order, and with it every match decision, does not depend on the
    /// filesystem.
    pub fn scan(root: &Path, dirs: &[String]) -> CompileResult<Self> {
        let mut index = Self::new();
        for dir in dirs {
            let path = root.join(dir);
            if !path.is_dir() {
                debug!(dir = %path.display(), "image directory not found, skipping");
                continue;
            }
            let entries = std::fs::read_dir(&path).map_err(|source| CompileError::Io {
                path: path.clone(),
                source,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|source| CompileError::Io {
                    path: path.clone(),
                    source,
                })?;
                if !entry.path().is_file() {
                    continue;
                }
                match entry.file_name().into_string() {
                    Ok(name) => files.push(name),
                    Err(raw) => warn!(file = ?raw, "skipping image with non UTF-8 name"),
                }
            }
            files.sort();
            debug!(dir = %dir, files = files.len(), "indexed image directory");
            index.dirs.insert(dir.clone(), files);
        }
        Ok(index)
    }
}

/// Find the image for a card name, or `None` if nothing matches.
pub fn map_card_to_image(name: &str, index: &ImageIndex) -> Option<String> {
    let lower = name.to_lowercase();
    match Rank::split_name(&lower) {
        Some((rank, suit_text)) => map_minor(rank, suit_text, index),
        None => map_major(&lower, index),
    }
}

fn map_major(lower: &str, index: &ImageIndex) -> Option<String> {
    MAJOR_ALIASES
        .iter()
        .filter(|(alias, _)| lower.contains(*alias))
        .find_map(|(_, fragment)| find_file(index, MAJOR_IMAGE_DIR, |f| f.contains(*fragment)))
}

fn map_minor(rank: Rank, suit_text: &str, index: &ImageIndex) -> Option<String> {
    let (_, dir) = SUIT_IMAGE_DIRS
        .iter()
        .find(|(suit, _)| suit_text.contains(*suit))?;
    let prefix = format!("{}_", rank.image_token());
    find_file(index, dir, |f| f.starts_with(&prefix))
}

fn find_file(index: &ImageIndex, dir: &str, matches: impl Fn(&str) -> bool) -> Option<String> {
    index
        .files(dir)
        .iter()
        .find(|file| matches(&file.to_lowercase()))
        .map(|file| format!("{IMAGE_URL_PREFIX}/{dir}/{file}"))
}
