//! flowprep - workflow text simplifier
//!
//! Converts messy, unstructured workflow descriptions into clean, numbered
//! step lists with explicit decision branches, ready for a downstream
//! flowchart renderer.
//!
//! The pipeline has four stages run in fixed order:
//!
//! - [`extract`]: turn raw text into untyped step records, using the first
//!   extraction strategy (ordered list, table, bullets, narrative fallback)
//!   that matches anything
//! - [`decision`]: classify each step as a plain step or a decision point
//!   and attach branch alternatives
//! - [`normalize`]: renumber steps sequentially, discarding source numbering
//! - [`simplify`]: orchestrate the stages, synthesize Start/End terminators,
//!   and format the result
//!
//! # Example
//!
//! ```
//! use flowprep::{Simplifier, SimplifyConfig};
//!
//! let simplifier = Simplifier::new(SimplifyConfig::default()).expect("compile patterns");
//! let clean = simplifier.simplify("1. Load data\n2. Check if data is valid");
//! assert!(clean.starts_with("1. Start\n2. Load data"));
//! ```

pub mod cli;
pub mod config;
pub mod decision;
pub mod extract;
pub mod normalize;
pub mod simplify;
pub mod step;
mod util;

pub use config::{load_config, SimplifyConfig};
pub use simplify::Simplifier;
pub use step::{NumberedStep, RawStep, SourceFormat, StepKind, StructuredStep};
