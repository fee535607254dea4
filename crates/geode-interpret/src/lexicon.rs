//! The built-in English lexicon for the nine-potential taxonomy.
//!
//! Stems are matched by lowercase substring. The lists stay short on
//! purpose: a rule-based interpreter should under-extract rather than
//! hallucinate evidence — an unmatched answer is a valid no-evidence
//! turn.

use geode_core::taxonomy::{IndicatorId, PotentialId};

use crate::keyword::{AversionRule, IndicatorRule, KeywordInterpreter, KeywordRule};

fn rule(potential: &str, keywords: &[&str]) -> KeywordRule {
    KeywordRule {
        potential: PotentialId::new(potential),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    }
}

fn aversion(potential: &str, phrases: &[&str]) -> AversionRule {
    AversionRule {
        potential: PotentialId::new(potential),
        phrases: phrases.iter().map(|s| s.to_string()).collect(),
    }
}

fn indicator(id: &str, phrases: &[&str]) -> IndicatorRule {
    IndicatorRule {
        indicator: IndicatorId::new(id),
        phrases: phrases.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build the built-in interpreter instance.
pub fn builtin() -> KeywordInterpreter {
    let rules = vec![
        rule("amber", &["order", "system", "routine", "checklist", "structur", "process"]),
        rule("shungite", &["body", "sport", "movement", "physical", "training", "endurance"]),
        rule("citrine", &["money", "result", "profit", "deal", "income", "fast"]),
        rule("emerald", &["beauty", "cozy", "aesthetic", "design", "atmosphere", "style"]),
        rule("ruby", &["stage", "drive", "perform", "impression", "spotlight", "audience"]),
        rule("garnet", &["people", "friend", "support", "relationship", "connect", "team"]),
        rule("sapphire", &["meaning", "idea", "why", "depth", "concept", "philosoph"]),
        rule("heliodor", &["learn", "study", "course", "knowledge", "teach", "read"]),
        rule("amethyst", &["goal", "strategy", "plan", "direction", "lead", "vision"]),
    ];

    let aversions = vec![
        aversion("amber", &["hate routine", "checklists kill", "paperwork drains", "rules suffocate"]),
        aversion("shungite", &["hate exercise", "avoid the gym", "sport bores"]),
        aversion("ruby", &["hate the spotlight", "avoid attention", "dread presenting"]),
        aversion("garnet", &["people drain me", "avoid people", "small talk exhausts"]),
        aversion("heliodor", &["hate studying", "pointless study", "courses bore"]),
    ];

    let indicators = vec![
        indicator(
            "obligation_language",
            &["have to", "i must", "supposed to", "obliged", "it is my duty"],
        ),
        indicator(
            "pride_without_energy",
            &["proud but", "proud, but", "proud of it, though"],
        ),
        indicator(
            "exhaustion_after_success",
            &["exhausted after", "drained after", "empty after", "tired once it works"],
        ),
        indicator(
            "pleasure_rejection",
            &["can't relax", "rest feels wasted", "no time for pleasure", "don't deserve rest"],
        ),
        indicator(
            "moral_justification_of_suffering",
            &["suffering builds", "pain makes you", "has to hurt", "must earn"],
        ),
    ];

    KeywordInterpreter::new(rules, aversions, indicators)
}
