//! Configuration for a compilation run.

use std::path::PathBuf;

use crate::images::IMAGE_DIRS;

/// Where the compiler reads its inputs and writes the deck document.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// The card description text file.
    pub description_path: PathBuf,
    /// Root of the image tree.
    pub image_root: PathBuf,
    /// Image subdirectories to index, relative to `image_root`.
    pub image_dirs: Vec<String>,
    /// Where to write the deck document. `None` compiles without writing.
    pub output_path: Option<PathBuf>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            description_path: PathBuf::from("desc"),
            image_root: PathBuf::from("card_images"),
            image_dirs: IMAGE_DIRS.iter().map(|d| d.to_string()).collect(),
            output_path: Some(PathBuf::from("tarot_deck.json")),
        }
    }
}

impl CompilerConfig {
    /// Set the description file.
    pub fn with_description(mut self, path: impl Into<PathBuf>) -> Self {
        self.description_path = path.into();
        self
    }

    /// Set the image root.
    pub fn with_image_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_root = path.into();
        self
    }

    /// Set the output file, or `None` for a dry run.
    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }
}
