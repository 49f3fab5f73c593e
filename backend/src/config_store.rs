//! Generator config file on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use shared::GeneratorConfig;

pub const CONFIG_FILE_PATH: &str = ".shadow_generator.toml";

/// Reads the config at `path`, repairing invalid values.
///
/// A missing file is created with the defaults. A repaired config is written
/// back so the file matches what the page shows.
pub fn load_or_create(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            log::info!("No config at {}, creating defaults", path.display());
            let config = GeneratorConfig::default();
            save(path, &config).context("Failed to create default config")?;
            return Ok(config);
        }
        Err(error) => {
            return Err(error).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let mut config = GeneratorConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let warnings = config.validate_and_fix();
    if !warnings.is_empty() {
        for warning in &warnings {
            log::warn!("{warning}");
        }
        if let Err(error) = save(path, &config) {
            log::warn!("Repaired config could not be saved: {error:#}");
        }
    }

    Ok(config)
}

pub fn save(path: &Path, config: &GeneratorConfig) -> anyhow::Result<()> {
    let toml_content = config.to_toml()?;
    let content_with_header = format!(
        "# Box Shadow Generator configuration\n\
         # Slider ranges and the values the page starts with\n\
         \n\
         {toml_content}"
    );
    fs::write(path, content_with_header)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
