use std::fmt;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::{debug, info, warn};

use super::error::LoadError;
use super::model::{Mean, SampleSet};
use crate::config::{AveragerConfig, ErrorPolicy};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Outcome of averaging one directory.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryReport {
    /// No file in the directory matched the pattern; nothing was computed.
    NoFiles,
    /// Mean over every accepted row of every matched file.
    Average {
        mean: f64,
        files: usize,
        rows: usize,
        skipped: usize,
    },
}

impl fmt::Display for DirectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryReport::NoFiles => write!(f, "No CSV files found in the directory."),
            DirectoryReport::Average { mean, rows, .. } => {
                write!(
                    f,
                    "The average of the third column is: {}",
                    Mean::new(*mean, *rows)
                )
            }
        }
    }
}

/// Average the configured column across all matching files in the directory.
///
/// Rows from every file land in one sample set, so the mean spans file
/// boundaries. The first file-level failure aborts; row-level failures
/// follow `config.on_error`.
pub fn average_directory(config: &AveragerConfig) -> Result<DirectoryReport, LoadError> {
    let files = discover_files(config)?;
    if files.is_empty() {
        info!("no files matching {} in {}", config.pattern, config.directory.display());
        return Ok(DirectoryReport::NoFiles);
    }

    let mut samples = SampleSet::new();
    let mut skipped = 0;
    for path in &files {
        let stats = read_column(path, config, &mut samples)?;
        debug!(
            "{}: {} rows accepted, {} skipped",
            path.display(),
            stats.accepted,
            stats.skipped
        );
        skipped += stats.skipped;
    }

    info!(
        "averaged {} rows from {} files ({} skipped)",
        samples.len(),
        files.len(),
        skipped
    );

    Ok(DirectoryReport::Average {
        mean: samples.mean(),
        files: files.len(),
        rows: samples.len(),
        skipped,
    })
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// List regular files in `config.directory` whose names match
/// `config.pattern`, sorted. Subdirectories are not searched and hidden
/// files are only matched by a pattern that starts with a dot.
pub fn discover_files(config: &AveragerConfig) -> Result<Vec<PathBuf>, LoadError> {
    let root = Pattern::escape(&config.directory.to_string_lossy());
    let full_pattern = Path::new(&root).join(&config.pattern);

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files: Vec<PathBuf> = glob::glob_with(&full_pattern.to_string_lossy(), options)?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            _ => None,
        })
        .collect();
    files.sort();

    debug!("found {} files matching {}", files.len(), full_pattern.display());
    Ok(files)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Per-file row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub accepted: usize,
    pub skipped: usize,
}

/// Read `config.column` from every record of one headerless CSV file and
/// push the parsed values into `samples`.
///
/// Records may have any width. A blank line is a row with no fields.
/// Row numbers in errors are 1-based physical line numbers.
pub fn read_column(
    path: &Path,
    config: &AveragerConfig,
    samples: &mut SampleSet,
) -> Result<FileStats, LoadError> {
    let data = std::fs::read(path).map_err(|err| LoadError::Open {
        path: path.to_path_buf(),
        source: err.into(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter)
        .from_reader(data.as_slice());

    let mut stats = FileStats::default();
    let mut record = csv::StringRecord::new();
    let blank = csv::StringRecord::new();
    let mut line = 1;

    loop {
        let start = reader.position().byte() as usize;
        let more = reader.read_record(&mut record).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            row: line,
            source,
        })?;
        let end = reader.position().byte() as usize;

        // The reader drops empty lines; recover them from the bytes it consumed.
        let content_start = if more {
            start + leading_line_breaks(&data[start..end])
        } else {
            end
        };
        for _ in 0..line_breaks(&data, start, content_start) {
            let result = parse_field(&blank, path, line, config.column);
            settle(result, config, samples, &mut stats)?;
            line += 1;
        }

        if !more {
            break;
        }

        let result = parse_field(&record, path, line, config.column);
        settle(result, config, samples, &mut stats)?;
        line += line_breaks(&data, content_start, end);
    }

    Ok(stats)
}

/// Apply the error policy to one parsed row.
fn settle(
    result: Result<f64, LoadError>,
    config: &AveragerConfig,
    samples: &mut SampleSet,
    stats: &mut FileStats,
) -> Result<(), LoadError> {
    match result {
        Ok(value) => {
            samples.push(value);
            stats.accepted += 1;
            Ok(())
        }
        Err(err) if config.on_error == ErrorPolicy::Skip && err.is_row_level() => {
            warn!("skipping {err}");
            stats.skipped += 1;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Count line breaks in `data[from..to]`. `\r\n` is one break, including
/// when its `\r` lies just before `from`.
fn line_breaks(data: &[u8], from: usize, to: usize) -> usize {
    (from..to)
        .filter(|&i| match data[i] {
            b'\r' => true,
            b'\n' => i == 0 || data[i - 1] != b'\r',
            _ => false,
        })
        .count()
}

fn leading_line_breaks(span: &[u8]) -> usize {
    span.iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .count()
}

fn parse_field(
    record: &csv::StringRecord,
    path: &Path,
    row: usize,
    field: usize,
) -> Result<f64, LoadError> {
    let raw = record.get(field).ok_or_else(|| LoadError::MissingField {
        path: path.to_path_buf(),
        row,
        field,
        found: record.len(),
    })?;

    raw.trim()
        .parse::<f64>()
        .map_err(|source| LoadError::NotNumeric {
            path: path.to_path_buf(),
            row,
            field,
            value: raw.to_string(),
            source,
        })
}
