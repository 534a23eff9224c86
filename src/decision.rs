//! Decision-point detection and branch structuring.
//!
//! Classification is pattern-based: any single cue hit marks a step as a
//! decision. Branch extraction runs independently of which cue matched, and
//! is additive — co-matching patterns stack their branches without dedup.
use crate::step::{RawStep, StepKind, StructuredStep};
use crate::util::compile_regex;
use anyhow::Result;
use regex::Regex;

/// Phrasings that mark a step as a decision point.
const DECISION_CUES: &[&str] = &[
    r"\bif\b",
    r"\bcheck\s+if\b",
    r"\bcheck\s+whether\b",
    r"\bverify\s+if\b",
    r"\bverify\s+whether\b",
    r"\bdetermine\s+if\b",
    r"\bdetermine\s+whether\b",
    r"\?$",
];

/// Explicit branch shapes. The yes/no pair captures a clause up to the next
/// `;` or `.`; the then/otherwise pair captures both outcomes at once.
const BRANCH_YES: &str = r"if\s+yes[,:]?\s+([^;.]+)";
const BRANCH_NO: &str = r"if\s+no[,:]?\s+([^;.]+)";
const BRANCH_THEN_OTHERWISE: &str = r"then\s+([^,]+)[,.]?\s+otherwise\s+([^.]+)";

/// Trailing branch clauses removed from the decision display text.
const STRIP_CLAUSES: &[&str] = &[
    r",?\s+then\s+.+",
    r",?\s+otherwise\s+.+",
    r",?\s+if\s+yes.+",
    r",?\s+if\s+no.+",
];

const REWRITE_VERIFY: &str = r"^verify\s+(whether|if)\s+";
const REWRITE_DETERMINE: &str = r"^determine\s+(whether|if)\s+";

/// Classifies steps as decisions and attaches branch alternatives.
pub struct DecisionStructurer {
    cues: Vec<Regex>,
    branch_yes: Regex,
    branch_no: Regex,
    branch_then_otherwise: Regex,
    strip_clauses: Vec<Regex>,
    rewrite_verify: Regex,
    rewrite_determine: Regex,
}

impl DecisionStructurer {
    /// Compile the cue, branch, and cleanup pattern tables.
    pub fn new() -> Result<Self> {
        let cues = DECISION_CUES
            .iter()
            .map(|pattern| compile_regex(pattern, false, "decision_cues"))
            .collect::<Result<Vec<_>>>()?;
        let strip_clauses = STRIP_CLAUSES
            .iter()
            .map(|pattern| compile_regex(pattern, false, "strip_clauses"))
            .collect::<Result<Vec<_>>>()?;
        Ok(DecisionStructurer {
            cues,
            branch_yes: compile_regex(BRANCH_YES, false, "branch_yes")?,
            branch_no: compile_regex(BRANCH_NO, false, "branch_no")?,
            branch_then_otherwise: compile_regex(
                BRANCH_THEN_OTHERWISE,
                false,
                "branch_then_otherwise",
            )?,
            strip_clauses,
            rewrite_verify: compile_regex(REWRITE_VERIFY, false, "rewrite_verify")?,
            rewrite_determine: compile_regex(REWRITE_DETERMINE, false, "rewrite_determine")?,
        })
    }

    /// Classify every step, returning a sequence of the same length.
    pub fn structure(&self, steps: Vec<RawStep>) -> Vec<StructuredStep> {
        steps
            .into_iter()
            .map(|step| self.structure_step(step))
            .collect()
    }

    fn structure_step(&self, step: RawStep) -> StructuredStep {
        if !self.is_decision(&step.text) {
            return StructuredStep {
                raw_number: step.raw_number,
                text: step.text,
                format: step.format,
                kind: StepKind::Step,
            };
        }

        // Branches are pulled from the text before cleanup truncates it.
        let branches = self.extract_branches(&step.text);
        let text = self.clean_decision_text(&step.text);
        StructuredStep {
            raw_number: step.raw_number,
            text,
            format: step.format,
            kind: StepKind::Decision { branches },
        }
    }

    fn is_decision(&self, text: &str) -> bool {
        self.cues.iter().any(|cue| cue.is_match(text))
    }

    /// Pull explicit branch options out of the text, or synthesize the
    /// generic pair when none are phrased.
    fn extract_branches(&self, text: &str) -> Vec<String> {
        let mut branches = Vec::new();

        if let Some(caps) = self.branch_yes.captures(text) {
            branches.push(format!("If yes: {}", caps[1].trim()));
        }
        if let Some(caps) = self.branch_no.captures(text) {
            branches.push(format!("If no: {}", caps[1].trim()));
        }
        if let Some(caps) = self.branch_then_otherwise.captures(text) {
            branches.push(format!("If yes: {}", caps[1].trim()));
            branches.push(format!("If no: {}", caps[2].trim()));
        }

        if branches.is_empty() {
            branches.push("If yes: Continue".to_string());
            branches.push("If no: [Specify action]".to_string());
        }
        branches
    }

    /// Rewrite the decision text into a clear question: drop branch clauses,
    /// normalize verify/determine phrasings to `Check if`, and end `check if`
    /// texts with a question mark.
    fn clean_decision_text(&self, text: &str) -> String {
        let mut text = text.to_string();
        for clause in &self.strip_clauses {
            text = clause.replace_all(&text, "").into_owned();
        }
        text = self.rewrite_verify.replace(&text, "Check if ").into_owned();
        text = self
            .rewrite_determine
            .replace(&text, "Check if ")
            .into_owned();

        if text.to_lowercase().contains("check if") && !text.ends_with('?') {
            text.push('?');
        }
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::SourceFormat;

    fn structurer() -> DecisionStructurer {
        DecisionStructurer::new().expect("compile decision patterns")
    }

    fn raw(text: &str) -> RawStep {
        RawStep {
            raw_number: Some(1),
            text: text.to_string(),
            format: SourceFormat::Numbered,
        }
    }

    fn structure_one(text: &str) -> StructuredStep {
        let mut steps = structurer().structure(vec![raw(text)]);
        steps.pop().expect("one step in, one step out")
    }

    #[test]
    fn plain_steps_stay_steps() {
        let step = structure_one("Save results");
        assert_eq!(step.kind, StepKind::Step);
        assert_eq!(step.text, "Save results");
    }

    #[test]
    fn if_phrasing_classifies_as_decision() {
        let step = structure_one("If user is authenticated, load dashboard");
        assert!(step.kind.is_decision());
        assert_eq!(step.text, "If user is authenticated, load dashboard");
    }

    #[test]
    fn embedded_if_does_not_misfire_on_words() {
        // "if" inside a word is not a cue.
        let step = structure_one("Notify the administrator");
        assert_eq!(step.kind, StepKind::Step);
    }

    #[test]
    fn check_if_gains_question_mark_and_generic_branches() {
        let step = structure_one("Check if data is valid");
        assert_eq!(step.text, "Check if data is valid?");
        assert_eq!(
            step.kind,
            StepKind::Decision {
                branches: vec![
                    "If yes: Continue".to_string(),
                    "If no: [Specify action]".to_string(),
                ],
            }
        );
    }

    #[test]
    fn verify_and_determine_rewrite_to_check_if() {
        let step = structure_one("Verify whether user is authenticated");
        assert_eq!(step.text, "Check if user is authenticated?");

        let step = structure_one("Determine if inquiry is valid");
        assert_eq!(step.text, "Check if inquiry is valid?");
    }

    #[test]
    fn question_mark_classifies_without_duplicating() {
        let step = structure_one("Is the cache warm?");
        assert!(step.kind.is_decision());
        assert_eq!(step.text, "Is the cache warm?");
    }

    #[test]
    fn then_otherwise_extracts_both_branches() {
        let step = structure_one("If the test passes, then deploy the build, otherwise roll back");
        assert_eq!(step.text, "If the test passes");
        assert_eq!(
            step.kind,
            StepKind::Decision {
                branches: vec![
                    "If yes: deploy the build".to_string(),
                    "If no: roll back".to_string(),
                ],
            }
        );
    }

    #[test]
    fn explicit_yes_no_clauses_become_branches() {
        let step = structure_one("Check if the drive is detected, if yes mount it; if no reboot");
        assert_eq!(step.text, "Check if the drive is detected?");
        assert_eq!(
            step.kind,
            StepKind::Decision {
                branches: vec!["If yes: mount it".to_string(), "If no: reboot".to_string()],
            }
        );
    }

    #[test]
    fn co_matching_branch_patterns_stack() {
        let step = structure_one("If valid, then save, otherwise discard. If yes continue. If no stop.");
        match step.kind {
            StepKind::Decision { branches } => {
                assert_eq!(
                    branches,
                    vec![
                        "If yes: continue".to_string(),
                        "If no: stop".to_string(),
                        "If yes: save".to_string(),
                        "If no: discard".to_string(),
                    ]
                );
            }
            other => panic!("expected decision, got {other:?}"),
        }
    }

    #[test]
    fn implicit_negative_clause_is_trimmed_from_text() {
        let step = structure_one("If successful, continue; if not, show error");
        assert!(step.kind.is_decision());
        match &step.kind {
            StepKind::Decision { branches } => {
                assert!(branches.len() >= 2);
                assert!(branches.iter().any(|b| b.to_lowercase().contains("yes")));
            }
            other => panic!("expected decision, got {other:?}"),
        }
        assert_eq!(step.text, "If successful, continue;");
    }

    #[test]
    fn decision_keeps_raw_number_and_format() {
        let step = structure_one("Check if data is valid");
        assert_eq!(step.raw_number, Some(1));
        assert_eq!(step.format, SourceFormat::Numbered);
    }
}
