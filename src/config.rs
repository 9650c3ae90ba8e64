use std::path::PathBuf;

/// Directory scanned when nothing else is configured.
pub const DEFAULT_DIRECTORY: &str = "astm_output/8_astm";

/// File-name pattern matched inside the directory.
pub const DEFAULT_PATTERN: &str = "*.csv";

/// Zero-indexed field averaged from every record (the third column).
pub const DEFAULT_COLUMN: usize = 2;

// ---------------------------------------------------------------------------
// Error policy
// ---------------------------------------------------------------------------

/// What to do when a single row cannot be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first bad row and report it.
    #[default]
    Abort,
    /// Log the bad row, count it and keep going.
    Skip,
}

// ---------------------------------------------------------------------------
// Directory averager configuration
// ---------------------------------------------------------------------------

/// Settings for one directory averaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AveragerConfig {
    /// Directory searched (non-recursive).
    pub directory: PathBuf,

    /// Glob applied to file names inside `directory`.
    pub pattern: String,

    /// Field index read from each record.
    pub column: usize,

    /// Field separator.
    pub delimiter: u8,

    /// Row-level failure handling. File-level failures always abort.
    pub on_error: ErrorPolicy,
}

impl Default for AveragerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            pattern: DEFAULT_PATTERN.to_string(),
            column: DEFAULT_COLUMN,
            delimiter: b',',
            on_error: ErrorPolicy::Abort,
        }
    }
}

impl AveragerConfig {
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_third_column_of_csv_files() {
        let cfg = AveragerConfig::default();
        assert_eq!(cfg.directory, PathBuf::from("astm_output/8_astm"));
        assert_eq!(cfg.pattern, "*.csv");
        assert_eq!(cfg.column, 2);
        assert_eq!(cfg.delimiter, b',');
        assert_eq!(cfg.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn builders_override_single_fields() {
        let cfg = AveragerConfig::default()
            .with_directory("data")
            .with_column(0)
            .with_error_policy(ErrorPolicy::Skip);
        assert_eq!(cfg.directory, PathBuf::from("data"));
        assert_eq!(cfg.column, 0);
        assert_eq!(cfg.on_error, ErrorPolicy::Skip);
        assert_eq!(cfg.pattern, DEFAULT_PATTERN);
    }
}
