use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// CSV persistence
// ---------------------------------------------------------------------------

impl Dataset {
    /// Write `rows` to `path` as standard quoted CSV (UTF-8, comma
    /// delimited). The stored labels are emitted as a header line when
    /// non-empty, otherwise no header is written.
    ///
    /// Fields containing the delimiter, quotes or line breaks are quoted
    /// with internal quotes doubled. Note the asymmetry with ingestion,
    /// which splits naively and honours no quoting.
    ///
    /// I/O failures are reported through the log channel and swallowed;
    /// persistence never propagates a fault to the caller.
    pub fn save_csv(&self, rows: &[Record], path: impl AsRef<Path>) {
        let path = path.as_ref();
        match write_csv(&self.labels, rows, path) {
            Ok(()) => log::info!("Wrote {} records to {}", rows.len(), path.display()),
            Err(err) => log::error!("Failed to write {}: {err:#}", path.display()),
        }
    }
}

fn write_csv(labels: &[String], rows: &[Record], path: &Path) -> Result<()> {
    // Field counts are not enforced anywhere in the container, so the
    // writer must not enforce them either.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("creating CSV file")?;

    if !labels.is_empty() {
        writer.write_record(labels).context("writing header")?;
    }
    for (row_no, row) in rows.iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("writing row {row_no}"))?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
