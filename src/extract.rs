//! Step extraction from messy workflow text.
//!
//! Extraction strategies are tried in priority order and the first one that
//! yields any records wins; the rest never run. Each strategy is a pure
//! function over the input text, so mixed notations never merge across
//! strategies. The narrative-paragraph fallback only runs when no structured
//! notation matched anything.
use crate::step::{RawStep, SourceFormat};
use crate::util::compile_regex;
use anyhow::Result;
use regex::{Captures, Regex};

/// Leading integer followed by `.`, `)`, or `:`, then the step text.
const NUMBERED_LINE: &str = r"^\s*(\d+)[.):]\s+(.+)$";

/// `Step N` prefix with an optional colon.
const STEP_PREFIX_LINE: &str = r"^\s*step\s+(\d+):?\s+(.+)$";

/// Markdown-style table row `| <integer> | <text> |`. Header and separator
/// rows fail the leading-integer group and fall through.
const TABLE_ROW: &str = r"^\s*\|\s*(\d+)\s*\|\s*(.+?)\s*\|";

/// Bullet list line. No ordinal is captured.
const BULLET_LINE: &str = r"^\s*[-*\u{2022}]\s+(.+)$";

/// Sequential-transition cues that mark a narrative sentence as a step.
/// The trailing `,?\s*` is consumed when the cue is stripped from the
/// retained text.
const SEQUENCE_CUES: &[&str] = &[
    r"\bfirst\b,?\s*",
    r"\bthen\b,?\s*",
    r"\bnext\b,?\s*",
    r"\bafter\s+that\b,?\s*",
    r"\bfinally\b,?\s*",
    r"\blastly\b,?\s*",
    r"\bsubsequently\b,?\s*",
];

/// Imperative verbs that mark a sentence as an action step when anchored at
/// the sentence start.
const ACTION_VERBS: &[&str] = &[
    "open",
    "close",
    "click",
    "select",
    "choose",
    "enter",
    "type",
    "press",
    "load",
    "save",
    "delete",
    "create",
    "install",
    "configure",
    "verify",
    "check",
    "connect",
    "disconnect",
    "run",
    "execute",
    "start",
    "stop",
];

type StrategyFn = fn(&StepExtractor, &str) -> Vec<RawStep>;

/// Structured-notation strategies in priority order. The paragraph fallback
/// is not listed; it runs only when every strategy here comes up empty.
const STRATEGIES: &[(&str, StrategyFn)] = &[
    ("ordered", StepExtractor::extract_ordered),
    ("table", StepExtractor::extract_table),
    ("bullet", StepExtractor::extract_bullets),
];

/// Turns raw text into an ordered sequence of untyped step records.
pub struct StepExtractor {
    numbered: Regex,
    step_prefix: Regex,
    table_row: Regex,
    bullet: Regex,
    sequence_cues: Vec<Regex>,
    action_verbs: Regex,
}

impl StepExtractor {
    /// Compile the pattern tables. Fails with a contextual error if an entry
    /// does not compile.
    pub fn new() -> Result<Self> {
        let sequence_cues = SEQUENCE_CUES
            .iter()
            .map(|pattern| compile_regex(pattern, false, "sequence_cues"))
            .collect::<Result<Vec<_>>>()?;
        let verb_alternation = format!(r"^\s*(?:{})\b", ACTION_VERBS.join("|"));
        Ok(StepExtractor {
            numbered: compile_regex(NUMBERED_LINE, true, "numbered_line")?,
            step_prefix: compile_regex(STEP_PREFIX_LINE, false, "step_prefix_line")?,
            table_row: compile_regex(TABLE_ROW, true, "table_row")?,
            bullet: compile_regex(BULLET_LINE, true, "bullet_line")?,
            sequence_cues,
            action_verbs: compile_regex(&verb_alternation, false, "action_verbs")?,
        })
    }

    /// Extract steps from text using the first strategy that matches.
    pub fn extract(&self, text: &str) -> Vec<RawStep> {
        for &(name, strategy) in STRATEGIES {
            let steps = strategy(self, text);
            if !steps.is_empty() {
                tracing::debug!(strategy = name, steps = steps.len(), "extraction strategy won");
                return steps;
            }
        }
        let steps = self.extract_paragraphs(text);
        tracing::debug!(steps = steps.len(), "paragraph fallback");
        steps
    }

    /// Ordered lists: numbered lines and `Step N` prefixes, scanned per line.
    /// Non-matching lines are skipped, never merged into neighbors.
    fn extract_ordered(&self, text: &str) -> Vec<RawStep> {
        text.lines()
            .filter_map(|line| self.ordered_step(line))
            .collect()
    }

    fn ordered_step(&self, line: &str) -> Option<RawStep> {
        if let Some(caps) = self.numbered.captures(line) {
            return ordinal_step(&caps, SourceFormat::Numbered);
        }
        let caps = self.step_prefix.captures(line)?;
        ordinal_step(&caps, SourceFormat::StepPrefix)
    }

    fn extract_table(&self, text: &str) -> Vec<RawStep> {
        text.lines()
            .filter_map(|line| {
                let caps = self.table_row.captures(line)?;
                ordinal_step(&caps, SourceFormat::Table)
            })
            .collect()
    }

    fn extract_bullets(&self, text: &str) -> Vec<RawStep> {
        text.lines()
            .filter_map(|line| {
                let caps = self.bullet.captures(line)?;
                Some(RawStep {
                    raw_number: None,
                    text: caps[1].trim().to_string(),
                    format: SourceFormat::Bullet,
                })
            })
            .collect()
    }

    /// Narrative fallback: split on sentence terminators and keep sentences
    /// carrying a sequential cue or starting with an action verb. Everything
    /// else is connective tissue and is dropped.
    fn extract_paragraphs(&self, text: &str) -> Vec<RawStep> {
        let mut steps = Vec::new();
        for sentence in text.split(|c: char| matches!(c, '.' | '!' | '?')) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            let has_cue = self.sequence_cues.iter().any(|cue| cue.is_match(sentence));
            let is_action = self.action_verbs.is_match(sentence);
            if !has_cue && !is_action {
                continue;
            }

            let mut kept = sentence.to_string();
            for cue in &self.sequence_cues {
                kept = cue.replace_all(&kept, "").into_owned();
            }
            steps.push(RawStep {
                raw_number: None,
                text: kept.trim().to_string(),
                format: SourceFormat::Paragraph,
            });
        }
        steps
    }
}

fn ordinal_step(caps: &Captures<'_>, format: SourceFormat) -> Option<RawStep> {
    // Ordinals too large for u64 make the line non-matching rather than
    // erroring; extraction stays total over all inputs.
    let raw_number = caps[1].parse::<u64>().ok()?;
    Some(RawStep {
        raw_number: Some(raw_number),
        text: caps[2].trim().to_string(),
        format,
    })
}
