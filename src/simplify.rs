//! End-to-end workflow simplification.
//!
//! The [`Simplifier`] owns the validated configuration and the compiled
//! pipeline stages, and runs them in fixed order: extract, structure
//! decisions, normalize numbering, synthesize terminators, format. It holds
//! no mutable state after construction, so one instance can serve any number
//! of independent calls.
use crate::config::SimplifyConfig;
use crate::decision::DecisionStructurer;
use crate::extract::StepExtractor;
use crate::normalize::{normalize, renumber};
use crate::step::{NumberedStep, StepKind};
use anyhow::Result;

/// Converts messy workflow text into a clean, numbered step list.
pub struct Simplifier {
    config: SimplifyConfig,
    extractor: StepExtractor,
    structurer: DecisionStructurer,
}

impl Simplifier {
    /// Compile all pattern tables once. An invalid table entry surfaces here
    /// as a contextual error; the pipeline itself is total over all inputs.
    pub fn new(config: SimplifyConfig) -> Result<Self> {
        Ok(Simplifier {
            extractor: StepExtractor::new()?,
            structurer: DecisionStructurer::new()?,
            config,
        })
    }

    /// Full pipeline: messy text in, formatted step list out.
    pub fn simplify(&self, messy_text: &str) -> String {
        format_output(&self.run_pipeline(messy_text))
    }

    /// Same pipeline, structured records instead of formatted text. Useful
    /// for analysis and introspection tooling.
    pub fn simplify_to_dict(&self, messy_text: &str) -> Vec<NumberedStep> {
        self.run_pipeline(messy_text)
    }

    fn run_pipeline(&self, messy_text: &str) -> Vec<NumberedStep> {
        let raw_steps = self.extractor.extract(messy_text);
        let structured = self.structurer.structure(raw_steps);
        let mut steps = normalize(structured);
        if self.config.auto_terminators {
            ensure_terminators(&mut steps);
        }
        tracing::debug!(steps = steps.len(), "pipeline complete");
        steps
    }
}

/// Insert Start/End records when absent and renumber the whole sequence.
/// Idempotent: an already-terminated sequence gains nothing. An empty
/// sequence becomes just Start then End.
pub fn ensure_terminators(steps: &mut Vec<NumberedStep>) {
    let has_start = steps
        .first()
        .is_some_and(|step| matches!(step.kind, StepKind::Start));
    if !has_start {
        steps.insert(
            0,
            NumberedStep {
                number: 1,
                text: "Start".to_string(),
                kind: StepKind::Start,
            },
        );
    }

    let has_end = steps
        .last()
        .is_some_and(|step| matches!(step.kind, StepKind::End));
    if !has_end {
        steps.push(NumberedStep {
            number: steps.len() + 1,
            text: "End".to_string(),
            kind: StepKind::End,
        });
    }

    renumber(steps);
}

/// Render numbered steps to the output text format: one `<number>. <text>`
/// line per record, decision branches indented underneath.
pub fn format_output(steps: &[NumberedStep]) -> String {
    let mut lines = Vec::new();
    for step in steps {
        lines.push(format!("{}. {}", step.number, step.text));
        if let StepKind::Decision { branches } = &step.kind {
            for branch in branches {
                lines.push(format!("   - {branch}"));
            }
        }
    }
    lines.join("\n")
}
