use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use vec64::Settings;

/// Load settings from the standard locations, then from `--config` if given.
///
/// Unlike the standard locations, an explicit config file must exist and parse.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides()?;

    if let Some(path) = &global.config {
        let path = expand_path(path);
        let overrides = Settings::load_from_file(&path)
            .map_err(|e| format!("Cannot load config '{}': {}", path.display(), e))?;
        tracing::debug!(?path, "loaded explicit config");
        settings.merge(overrides);
    }

    Ok(settings)
}

fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Read input from a file or stdin, honouring `--max-size` and `--force`.
///
/// A single trailing newline (`\n` or `\r\n`) is removed.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut data = if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, global.max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                global.max_size
            )
            .into());
        }

        buffer
    };

    if data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }

    Ok(data)
}
