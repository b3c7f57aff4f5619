use std::path::Path;

use colored::Colorize;
use tarot_compiler::{CompilerConfig, compile_files};

pub fn run(desc: &Path, images: &Path) -> Result<(), String> {
    let config = CompilerConfig::default()
        .with_description(desc)
        .with_image_root(images)
        .with_output(None);
    let report = compile_files(&config).map_err(|e| e.to_string())?.report;

    super::print_report(&report);
    println!();
    if report.has_warnings() {
        println!("  {}", "Deck compiles with warnings.".yellow());
        for name in &report.unmapped_images {
            println!("    no image: {name}");
        }
        for name in &report.incomplete {
            println!("    incomplete: {name}");
        }
    } else {
        println!("  {}", "All checks passed.".green());
    }

    Ok(())
}
