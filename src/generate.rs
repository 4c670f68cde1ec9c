use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::EncoderConfig;
use crate::header;
use crate::identifier::Symbol;

/// Embed the file at `input_path` into a header written to `output_path`.
///
/// The input is opened first, so a missing input never creates or truncates
/// the output. Both files are closed when this returns, on success or error.
/// A failed run can leave a partial header behind; discarding it is up to
/// the caller.
pub fn generate(input_path: &Path, output_path: &Path, config: &EncoderConfig) -> Result<u64> {
    let symbol = Symbol::from_bytes(input_path.as_os_str().as_encoded_bytes());
    log::debug!(
        "Embedding {} as `{}` (guard _{})",
        input_path.display(),
        symbol.ident,
        symbol.guard
    );

    let input = File::open(input_path)
        .with_context(|| format!("Failed to open input {}", input_path.display()))?;
    let output = File::create(output_path)
        .with_context(|| format!("Failed to create output {}", output_path.display()))?;

    let length = header::write_header(input, BufWriter::new(output), &symbol, config).with_context(|| {
        format!(
            "Failed to embed {} into {}",
            input_path.display(),
            output_path.display()
        )
    })?;

    log::info!(
        "Embedded {} bytes from {} into {}",
        length,
        input_path.display(),
        output_path.display()
    );
    Ok(length)
}
