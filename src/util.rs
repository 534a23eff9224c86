use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Compile a pattern-table entry, labeling failures with the table it came
/// from.
pub(crate) fn compile_regex(pattern: &str, case_sensitive: bool, label: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .with_context(|| format!("invalid regex for {label}"))
}
