use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tarot_core::Suit;

pub fn run(deck: Option<&Path>, suit: Option<&str>) -> Result<(), String> {
    let loaded = super::load_deck(deck)?;
    let suit = suit
        .map(|s| s.parse::<Suit>())
        .transpose()
        .map_err(|e| e.to_string())?;

    let cards: Vec<_> = loaded
        .universe()
        .into_iter()
        .filter(|c| suit.is_none() || c.suit == suit)
        .collect();

    if cards.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Arcana", "Suit", "Image"]);

    for card in &cards {
        let suit = card.suit.map_or("—".to_string(), |s| s.to_string());
        let image = card.card.image.clone().unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            card.card.name.clone(),
            card.arcana.to_string(),
            suit,
            image,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}
