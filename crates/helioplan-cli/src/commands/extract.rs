use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), helioplan_core::error::HelioplanError> {
    let bytes = std::fs::read(&input_file)?;
    let source = super::source_for(&input_file);
    let extraction = helioplan_core::extract_document(&bytes, source.as_ref())?;

    let output_str = match output_format {
        "json" => serde_json::to_string_pretty(&extraction)?,
        _ => output::table::format_extraction(&extraction),
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&extraction)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} component(s) and {} loss line(s), written to {}",
                extraction.components.len(),
                extraction.losses.len(),
                path.display()
            );
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
