//! Output format selection

use clap::ValueEnum;

/// Output format for noted commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_values() {
        assert_eq!(
            OutputFormat::from_str("json", false),
            Ok(OutputFormat::Json)
        );
        assert_eq!(
            OutputFormat::from_str("JSON", true),
            Ok(OutputFormat::Json)
        );
        assert!(OutputFormat::from_str("records", false).is_err());
    }
}
