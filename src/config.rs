//! Simplifier configuration.
//!
//! A flat option set with documented defaults. Config files are JSON;
//! unrecognized keys are ignored rather than rejected, so callers can carry
//! options meant for other tools.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options recognized by the simplification pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplifyConfig {
    /// Reserved: substep handling is accepted but not yet wired into
    /// extraction.
    pub preserve_substeps: bool,
    /// Insert Start/End terminators around the final sequence.
    pub auto_terminators: bool,
    /// Reserved: multi-line step merging is accepted but not yet wired into
    /// extraction.
    pub merge_multiline: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            preserve_substeps: true,
            auto_terminators: true,
            merge_multiline: true,
        }
    }
}

/// Load simplifier options from a JSON config file.
pub fn load_config(path: &Path) -> Result<SimplifyConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: SimplifyConfig =
        serde_json::from_slice(&bytes).context("parse simplifier config JSON")?;
    Ok(config)
}
