use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Read options
// ---------------------------------------------------------------------------

/// Text encoding applied to the input bytes.
///
/// Only UTF-8 variants are supported: strict decoding fails the read on
/// invalid byte sequences, lossy decoding substitutes U+FFFD and never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf8Lossy,
}

impl Encoding {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        match self {
            Encoding::Utf8 => Ok(Cow::Borrowed(
                std::str::from_utf8(bytes).context("invalid UTF-8")?,
            )),
            Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(bytes)),
        }
    }
}

/// How a delimited file is interpreted on ingestion.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Whether the first line holds column labels.
    pub header: bool,
    /// Field delimiter. Input is split naively on this character; quoting
    /// is *not* honoured on read, unlike the output path.
    pub delimiter: char,
    /// Decision-class field index stored on the dataset; negative counts
    /// from the end of each row.
    pub class_index: isize,
    /// Input text encoding.
    pub encoding: Encoding,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            header: true,
            delimiter: ',',
            class_index: -1,
            encoding: Encoding::Utf8,
        }
    }
}

// ---------------------------------------------------------------------------
// Ingestion
// ---------------------------------------------------------------------------

impl Dataset {
    /// Read a delimited text file into the dataset.
    ///
    /// The first line becomes `labels` (whitespace-trimmed) when
    /// `options.header` is set; every other line is split on the delimiter
    /// and appended to `records`. Repeated calls keep appending; ingestion
    /// never resets existing state.
    ///
    /// I/O and decode failures are reported through the log channel and the
    /// dataset keeps whatever was read before the failure. The caller
    /// decides whether a partially (or un-) populated dataset is usable.
    pub fn read_delimited(&mut self, path: impl AsRef<Path>, options: &ReadOptions) {
        let path = path.as_ref();
        self.class_index = options.class_index;
        if let Err(err) = read_lines(self, path, options) {
            log::error!("Failed to read {}: {err:#}", path.display());
        }
    }
}

fn read_lines(dataset: &mut Dataset, path: &Path, options: &ReadOptions) -> Result<()> {
    let file = File::open(path).context("opening file")?;
    let mut reader = BufReader::new(file);

    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("reading line {line_no}"))?;
        if n == 0 {
            break;
        }

        let text = options
            .encoding
            .decode(&buf)
            .with_context(|| format!("decoding line {line_no}"))?;
        let line = text.strip_suffix('\n').unwrap_or(&text);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let fields: Vec<String> = line.split(options.delimiter).map(str::to_string).collect();
        if line_no == 0 && options.header {
            dataset.labels = fields.iter().map(|label| label.trim().to_string()).collect();
        } else {
            dataset.records.push(fields);
        }
        line_no += 1;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
