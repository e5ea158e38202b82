//! Common constants used throughout substitute.

/// Suffix stripped from template file names to form output file names
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".tmpl";

/// Opening delimiter of a placeholder token, including its padding space
pub const PLACEHOLDER_OPEN: &str = "{{ ";

/// Closing delimiter of a placeholder token, including its padding space
pub const PLACEHOLDER_CLOSE: &str = " }}";
