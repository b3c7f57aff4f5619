use std::path::Path;

use colored::Colorize;

pub fn run(deck: Option<&Path>, name: &str) -> Result<(), String> {
    let loaded = super::load_deck(deck)?;

    let Some(card) = loaded.lookup(name) else {
        let suggestions = loaded.suggest(name, 3);
        return Err(if suggestions.is_empty() {
            format!("card not found: \"{name}\"")
        } else {
            format!(
                "card not found: \"{name}\". Did you mean: {}?",
                suggestions.join(", ")
            )
        });
    };

    let kind = match card.suit {
        Some(suit) => format!("{} arcana, {suit}", card.arcana),
        None => format!("{} arcana", card.arcana),
    };
    println!("  {} [{}]", card.card.name.bold(), kind.dimmed());
    println!();

    let description = &card.card.description;
    println!("  upright:    {}", description.upright);
    println!("  reversed:   {}", description.reversed);
    println!("  yes or no:  {}", description.yes_or_no);
    if let Some(image) = &card.card.image {
        println!("  image:      {image}");
    }

    Ok(())
}
