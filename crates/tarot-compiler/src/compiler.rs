use std::path::Path;

use tarot_core::{CardDefinition, DeckBuilder, DeckDocument, Suit};
use tracing::{debug, info, warn};

use crate::classify::{Classification, classify_card};
use crate::config::CompilerConfig;
use crate::error::{CompileError, CompileResult};
use crate::images::{ImageIndex, map_card_to_image};
use crate::parser::parse;

/// Counts and names gathered while compiling, so operators can spot
/// cards that went missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// Records read from the description text.
    pub records: usize,
    /// Cards placed in the major arcana.
    pub major: usize,
    /// Cards placed in each suit, canonical order.
    pub suits: Vec<(Suit, usize)>,
    /// Names with a minor rank phrase but no recognisable suit.
    pub unclassifiable: Vec<String>,
    /// Names that repeated an earlier card and were dropped.
    pub duplicates: Vec<String>,
    /// Names kept without an image.
    pub unmapped_images: Vec<String>,
    /// Names kept with one or more empty description fields.
    pub incomplete: Vec<String>,
}

impl CompileReport {
    /// Number of cards that made it into the deck.
    pub fn compiled(&self) -> usize {
        self.major + self.suits.iter().map(|(_, n)| n).sum::<usize>()
    }

    /// Number of records that did not make it into the deck.
    pub fn dropped(&self) -> usize {
        self.unclassifiable.len() + self.duplicates.len()
    }

    /// Returns `true` if anything was dropped, unmapped, or incomplete.
    pub fn has_warnings(&self) -> bool {
        self.dropped() > 0 || !self.unmapped_images.is_empty() || !self.incomplete.is_empty()
    }
}

impl std::fmt::Display for CompileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} cards from {} records", self.compiled(), self.records)?;
        writeln!(f, "Major Arcana: {} cards", self.major)?;
        for (suit, count) in &self.suits {
            writeln!(f, "{suit}: {count} cards")?;
        }
        if !self.unclassifiable.is_empty() {
            writeln!(f, "Dropped, no suit: {}", self.unclassifiable.join(", "))?;
        }
        if !self.duplicates.is_empty() {
            writeln!(f, "Dropped, duplicate: {}", self.duplicates.join(", "))?;
        }
        if !self.unmapped_images.is_empty() {
            writeln!(f, "No image: {}", self.unmapped_images.len())?;
        }
        if !self.incomplete.is_empty() {
            writeln!(f, "Incomplete descriptions: {}", self.incomplete.len())?;
        }
        Ok(())
    }
}

/// A compiled deck and the report describing how it was built.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The compiled deck document.
    pub deck: DeckDocument,
    /// What happened to each record.
    pub report: CompileReport,
}

/// Compile description text against an image listing.
///
/// Pure: the same text and listing always give the same deck.
pub fn compile(text: &str, images: &ImageIndex) -> CompileOutput {
    let records = parse(text);
    let mut report = CompileReport {
        records: records.len(),
        ..CompileReport::default()
    };
    let mut builder = DeckBuilder::new();

    for record in &records {
        let suit = match classify_card(&record.name) {
            Classification::Major => None,
            Classification::Minor(suit) => Some(suit),
            Classification::Unclassifiable => {
                warn!(card = %record.name, "minor arcana card has no recognisable suit, dropping");
                report.unclassifiable.push(record.name.clone());
                continue;
            }
        };

        let image = map_card_to_image(&record.name, images);
        let unmapped = image.is_none();
        let card = CardDefinition::new(&record.name, record.description()).with_image(image);

        let pushed = match suit {
            Some(suit) => builder.push_minor(suit, card),
            None => builder.push_major(card),
        };
        if let Err(err) = pushed {
            warn!(%err, "dropping duplicate card");
            report.duplicates.push(record.name.clone());
            continue;
        }
        if unmapped {
            debug!(card = %record.name, "no image found");
            report.unmapped_images.push(record.name.clone());
        }
        let missing = record.missing_fields();
        if !missing.is_empty() {
            warn!(card = %record.name, missing = ?missing, "incomplete card description");
            report.incomplete.push(record.name.clone());
        }
    }

    let deck = builder.build();
    report.major = deck.major().len();
    report.suits = deck.suit_counts();
    CompileOutput { deck, report }
}

/// Read the inputs named by `config`, compile, and write the deck document
/// if an output path is set.
pub fn compile_files(config: &CompilerConfig) -> CompileResult<CompileOutput> {
    let text = read_text(&config.description_path)?;
    let images = ImageIndex::scan(&config.image_root, &config.image_dirs)?;
    debug!(files = images.file_count(), "image tree indexed");

    let output = compile(&text, &images);

    if let Some(path) = &config.output_path {
        let json = output.deck.to_json()?;
        std::fs::write(path, json).map_err(|source| CompileError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote deck document");
    }

    let report = &output.report;
    info!(
        cards = report.compiled(),
        records = report.records,
        major = report.major,
        dropped = report.dropped(),
        unmapped = report.unmapped_images.len(),
        "compiled tarot deck"
    );
    Ok(output)
}

fn read_text(path: &Path) -> CompileResult<String> {
    std::fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
