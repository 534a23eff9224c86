//! Sequential renumbering of structured steps.
use crate::step::{NumberedStep, StructuredStep};

/// Renumber steps 1..=len in input order, discarding raw ordinals and the
/// source-format tag. Empty input returns an empty sequence.
pub fn normalize(steps: Vec<StructuredStep>) -> Vec<NumberedStep> {
    steps
        .into_iter()
        .enumerate()
        .map(|(idx, step)| NumberedStep {
            number: idx + 1,
            text: step.text,
            kind: step.kind,
        })
        .collect()
}

/// Rewrite `number` fields to 1..=len in place, after insertions changed the
/// sequence length.
pub fn renumber(steps: &mut [NumberedStep]) {
    for (idx, step) in steps.iter_mut().enumerate() {
        step.number = idx + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{SourceFormat, StepKind};

    fn structured(raw_number: Option<u64>, text: &str, kind: StepKind) -> StructuredStep {
        StructuredStep {
            raw_number,
            text: text.to_string(),
            format: SourceFormat::Numbered,
            kind,
        }
    }

    #[test]
    fn renumbers_sequentially_ignoring_raw_ordinals() {
        let steps = vec![
            structured(Some(7), "Load data", StepKind::Step),
            structured(Some(2), "Process data", StepKind::Step),
            structured(None, "Save results", StepKind::Step),
        ];

        let normalized = normalize(steps);
        let numbers: Vec<usize> = normalized.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(normalized[0].text, "Load data");
    }

    #[test]
    fn decision_branches_survive_normalization() {
        let steps = vec![structured(
            Some(1),
            "Check if data is valid?",
            StepKind::Decision {
                branches: vec!["If yes: Continue".to_string()],
            },
        )];

        let normalized = normalize(steps);
        assert!(normalized[0].kind.is_decision());
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn renumber_closes_gaps() {
        let mut steps = normalize(vec![
            structured(None, "a", StepKind::Step),
            structured(None, "b", StepKind::Step),
        ]);
        steps[0].number = 9;
        steps[1].number = 42;

        renumber(&mut steps);
        assert_eq!(steps[0].number, 1);
        assert_eq!(steps[1].number, 2);
    }
}
