//! Step-record data model threaded through the pipeline.
//!
//! Records change shape as they move through the stages: the extractor emits
//! [`RawStep`], the decision structurer produces [`StructuredStep`], and the
//! normalizer replaces those with [`NumberedStep`]. Branches live inside
//! [`StepKind::Decision`], so a record carries branches exactly when it is a
//! decision.
use serde::Serialize;
use std::fmt;

/// Extraction strategy that produced a record.
///
/// Diagnostic only; nothing downstream branches on it, and the normalizer
/// drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Numbered,
    StepPrefix,
    Table,
    Bullet,
    Paragraph,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Numbered => "numbered",
            SourceFormat::StepPrefix => "step_prefix",
            SourceFormat::Table => "table",
            SourceFormat::Bullet => "bullet",
            SourceFormat::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step classification assigned by the decision structurer, or synthesized
/// for workflow terminators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    Step,
    Decision { branches: Vec<String> },
    Start,
    End,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Step => "step",
            StepKind::Decision { .. } => "decision",
            StepKind::Start => "start",
            StepKind::End => "end",
        }
    }

    pub fn is_decision(&self) -> bool {
        matches!(self, StepKind::Decision { .. })
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped record fresh out of extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStep {
    /// Ordinal from the source notation, when it carried one. Informational
    /// only; never used for final ordering.
    pub raw_number: Option<u64>,
    pub text: String,
    pub format: SourceFormat,
}

/// Record after decision structuring. Decision texts are rewritten into
/// question form at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredStep {
    pub raw_number: Option<u64>,
    pub text: String,
    pub format: SourceFormat,
    pub kind: StepKind,
}

/// Final record: sequentially numbered, raw ordinal and source format gone.
///
/// Serializes to the flat mapping exposed by `simplify_to_dict`: `number`,
/// `text`, `type`, and `branches` (decisions only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedStep {
    pub number: usize,
    pub text: String,
    #[serde(flatten)]
    pub kind: StepKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_step_serializes_flat() {
        let step = NumberedStep {
            number: 1,
            text: "Start".to_string(),
            kind: StepKind::Start,
        };
        let value = serde_json::to_value(&step).expect("serialize step");
        assert_eq!(value["number"], 1);
        assert_eq!(value["text"], "Start");
        assert_eq!(value["type"], "start");
        assert!(value.get("branches").is_none());
    }

    #[test]
    fn decision_serializes_with_branches() {
        let step = NumberedStep {
            number: 2,
            text: "Check if data is valid?".to_string(),
            kind: StepKind::Decision {
                branches: vec!["If yes: Continue".to_string()],
            },
        };
        let value = serde_json::to_value(&step).expect("serialize step");
        assert_eq!(value["type"], "decision");
        assert_eq!(value["branches"][0], "If yes: Continue");
    }
}
