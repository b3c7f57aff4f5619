use std::path::Path;

use tarot_compiler::{CompilerConfig, compile_files};

pub fn run(desc: &Path, images: &Path, output: &Path) -> Result<(), String> {
    let config = CompilerConfig::default()
        .with_description(desc)
        .with_image_root(images)
        .with_output(Some(output.to_path_buf()));
    let out = compile_files(&config).map_err(|e| e.to_string())?;

    println!("  Created {}", output.display());
    println!();
    super::print_report(&out.report);

    Ok(())
}
