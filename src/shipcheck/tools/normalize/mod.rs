//! Machinery-label canonicalization.
//!
//! Two independently-authored exports rarely spell the same machinery item
//! the same way ("Mooring WinchP1" vs "Mooring WinchPort1"). The normalizer
//! maps those spellings onto one canonical key so records for the same
//! physical item collide during comparison.
//!
//! The pipeline is a pure function: cleanup, then an ordered specific-rule
//! pass, then an ordered generic-suffix pass, first match wins. It is total
//! and idempotent — every rule output is a fixed point of the pipeline.

mod rules;

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::shipcheck::tools::error::Result;

struct SpecificRule {
    pattern: Regex,
    replacement: &'static str,
}

struct SuffixRule {
    pattern: Regex,
    code: &'static str,
}

/// Compiled canonicalization rule set. Construct once per run and reuse; the
/// tables are immutable after construction.
pub struct Normalizer {
    specific: Vec<SpecificRule>,
    suffix: Vec<SuffixRule>,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            specific: compile_specific(rules::SPECIFIC_RULES)?,
            suffix: compile_suffix(rules::SUFFIX_RULES)?,
        })
    }

    /// Maps a raw machinery label to its canonical key.
    ///
    /// Whitespace-only input canonicalizes to an empty string; filtering such
    /// keys out is the aggregation layer's responsibility.
    pub fn canonicalize(&self, raw: &str) -> String {
        let cleaned = clean_label(raw);

        for rule in &self.specific {
            if rule.pattern.is_match(&cleaned) {
                return rule.replacement.to_string();
            }
        }

        for rule in &self.suffix {
            if let Some(captures) = rule.pattern.captures(&cleaned) {
                let stem = &captures["stem"];
                return format!("{stem}{}", rule.code).trim().to_string();
            }
        }

        cleaned
    }
}

/// Trims, collapses internal whitespace runs to one space, and maps en/em
/// dashes to an ASCII hyphen.
fn clean_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(['\u{2013}', '\u{2014}'], "-")
}

/// Compiles the specific table, keeping the first authored occurrence per
/// unique pattern. Duplicate entries are a data-quality issue in the authored
/// set: identical duplicates are dropped, contradictory ones are flagged.
fn compile_specific(table: &'static [(&str, &str)]) -> Result<Vec<SpecificRule>> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let mut compiled = Vec::with_capacity(table.len());

    for &(pattern, replacement) in table {
        if let Some(&first) = seen.get(pattern) {
            if first != replacement {
                warn!(
                    pattern,
                    kept = first,
                    ignored = replacement,
                    "contradictory duplicate rule entry, keeping first occurrence"
                );
            }
            continue;
        }
        seen.insert(pattern, replacement);

        let anchored = format!("^(?:{pattern})$");
        compiled.push(SpecificRule {
            pattern: RegexBuilder::new(&anchored).case_insensitive(true).build()?,
            replacement,
        });
    }

    Ok(compiled)
}

fn compile_suffix(table: &'static [(&str, &str)]) -> Result<Vec<SuffixRule>> {
    table
        .iter()
        .map(|&(suffix, code)| {
            let anchored = format!("^(?P<stem>.*){}$", regex::escape(suffix));
            Ok(SuffixRule {
                pattern: RegexBuilder::new(&anchored).case_insensitive(true).build()?,
                code,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new().expect("rule tables compile")
    }

    #[test]
    fn cleanup_collapses_whitespace_and_dashes() {
        let n = normalizer();
        assert_eq!(n.canonicalize("  Steering   Gear  "), "Steering Gear");
        assert_eq!(n.canonicalize("Crane \u{2013} Hose"), "Crane - Hose");
        assert_eq!(n.canonicalize("Crane \u{2014} Hose"), "Crane - Hose");
        assert_eq!(n.canonicalize("   "), "");
    }

    #[test]
    fn specific_rules_merge_side_spellings() {
        let n = normalizer();
        assert_eq!(n.canonicalize("Mooring WinchP1"), "Mooring Winch P1");
        assert_eq!(n.canonicalize("Mooring WinchPort1"), "Mooring Winch P1");
        assert_eq!(n.canonicalize("Provision CraneAft-Port"), "Provision Crane A-P");
        assert_eq!(n.canonicalize("Provision CraneAP"), "Provision Crane A-P");
        assert_eq!(n.canonicalize("Hatch CoverForward5"), "Hatch Cover F5");
        assert_eq!(n.canonicalize("SARTStarboard1"), "SART S1");
    }

    #[test]
    fn specific_rules_match_case_insensitively() {
        let n = normalizer();
        assert_eq!(n.canonicalize("mooring winchport1"), "Mooring Winch P1");
        assert_eq!(n.canonicalize("ANCHORS1"), "Anchor S1");
    }

    #[test]
    fn specific_rules_outrank_generic_suffix_handling() {
        // "Liferaft 15Port1" names raft 15 on the port side; the generic
        // Port-suffix rule would fold it into a different key.
        let n = normalizer();
        assert_eq!(n.canonicalize("Liferaft 15Port1"), "Liferaft 15P1");
        assert_eq!(n.canonicalize("Liferaft 15PPort2"), "Liferaft 15PP2");
        assert_eq!(n.canonicalize("Liferaft 6PFwd-Port1"), "Liferaft 6PF-P1");
    }

    #[test]
    fn generic_suffixes_become_position_codes() {
        let n = normalizer();
        assert_eq!(n.canonicalize("Steering GearAft"), "Steering GearA");
        assert_eq!(n.canonicalize("Deck CraneForward"), "Deck CraneF");
        assert_eq!(n.canonicalize("Deck CraneFwd"), "Deck CraneF");
        assert_eq!(n.canonicalize("Ballast PumpPort"), "Ballast PumpP");
        assert_eq!(n.canonicalize("Ballast PumpStarboard"), "Ballast PumpS");
        assert_eq!(n.canonicalize("Hose Crane-P"), "Hose CraneP");
        assert_eq!(n.canonicalize("Hose Crane-Stbd"), "Hose CraneS");
    }

    #[test]
    fn unmatched_labels_pass_through_cleaned() {
        let n = normalizer();
        assert_eq!(n.canonicalize("Main Engine"), "Main Engine");
        assert_eq!(n.canonicalize("Incinerator  No. 2"), "Incinerator No. 2");
    }

    #[test]
    fn canonicalize_is_idempotent_over_label_corpus() {
        let n = normalizer();
        let corpus = [
            "Mooring WinchP1",
            "Mooring WinchPort1",
            "Mooring WinchAft-Stbd2",
            "Provision CraneFwd-Port",
            "Provision CraneA-P",
            "Liferaft 15Port2",
            "Liferaft 6PFwd-Port1",
            "LiferaftFwd-P",
            "LiferaftFwdS",
            "Hatch CoverAft7",
            "Hatch CoverCentre2",
            "Liferaft Embarkation LadderFwd-Stbd1",
            "Steering GearAft",
            "Ballast PumpPort",
            "Ballast Pump-Port",
            "Ballast Pump-Starboard",
            "Hose Crane-S",
            "Main Engine",
            "Liferaft",
            "  Emergency   Towing SystemForward2 ",
            "",
        ];
        for label in corpus {
            let once = n.canonicalize(label);
            let twice = n.canonicalize(&once);
            assert_eq!(once, twice, "not a fixed point for {label:?}");
        }
    }

    #[test]
    fn dash_coded_suffixes_resolve_in_one_pass() {
        let n = normalizer();
        assert_eq!(n.canonicalize("Ballast Pump-Port"), "Ballast PumpP");
        assert_eq!(n.canonicalize("Ballast Pump-Starboard"), "Ballast PumpS");
    }

    #[test]
    fn independent_exports_collide_on_one_key() {
        let n = normalizer();
        let a = n.canonicalize("Mooring WinchP1");
        let b = n.canonicalize("Mooring WinchPort1");
        assert_eq!(a, "Mooring Winch P1");
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_patterns_keep_first_occurrence() {
        let table: &'static [(&str, &str)] = &[
            ("PumpP1", "Pump P1"),
            ("PumpP1", "Pump Port One"),
            ("PumpS1", "Pump S1"),
            ("PumpS1", "Pump S1"),
        ];
        let compiled = compile_specific(table).expect("compiles");
        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].replacement, "Pump P1");
        assert_eq!(compiled[1].replacement, "Pump S1");
    }
}
