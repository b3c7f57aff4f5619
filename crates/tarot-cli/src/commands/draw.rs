use std::path::Path;

use tarot_reading::{ReadingEngine, TarotReader, event_payload, narration, user_event};

use crate::DrawFormat;

pub fn run(deck: Option<&Path>, format: DrawFormat) -> Result<(), String> {
    let loaded = super::load_deck(deck)?;
    let engine = ReadingEngine::from_loaded(&loaded);
    tracing::debug!(cards = engine.universe_size(), "drawing from deck");
    let reading = engine.draw_reading().map_err(|e| e.to_string())?;

    let out = match format {
        DrawFormat::Text => narration(&reading),
        DrawFormat::Json => json(serde_json::to_string_pretty(&event_payload(&reading)))?,
        DrawFormat::Event => json(serde_json::to_string_pretty(&user_event(&reading)))?,
    };
    print!("{out}");

    Ok(())
}

fn json(result: serde_json::Result<String>) -> Result<String, String> {
    result
        .map(|json| json + "\n")
        .map_err(|e| format!("JSON serialization error: {e}"))
}
