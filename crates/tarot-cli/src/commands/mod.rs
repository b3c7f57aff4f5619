pub mod check;
pub mod compile;
pub mod deck;
pub mod draw;
pub mod show;

use std::path::Path;

use tarot_compiler::CompileReport;
use tarot_reading::{DeckRepository, DeckSource, LoadedDeck, RepositoryConfig};

/// Load the deck from an explicit file, or search the default locations.
///
/// An explicit file must exist; the default search degrades to an empty deck.
fn load_deck(deck: Option<&Path>) -> Result<LoadedDeck, String> {
    let config = match deck {
        Some(path) => {
            if !path.is_file() {
                return Err(format!("deck file not found: {}", path.display()));
            }
            RepositoryConfig::default().with_candidates(vec![path.to_path_buf()])
        }
        None => RepositoryConfig::from_env(),
    };
    let repository = DeckRepository::new(config);
    tracing::debug!(candidates = ?repository.candidates(), "searching for deck");
    let loaded = repository.load().map_err(|e| e.to_string())?;
    if let DeckSource::File(path) = loaded.source() {
        tracing::debug!(path = %path.display(), "using deck");
    }
    Ok(loaded)
}

/// Print the compile report, indented.
fn print_report(report: &CompileReport) {
    for line in report.to_string().lines() {
        println!("  {line}");
    }
}
