//! # geode-interpret
//!
//! A deterministic, rule-based implementation of the
//! [`AnswerInterpreter`](geode_core::traits::AnswerInterpreter)
//! capability: keyword matching for supporting evidence, aversion
//! phrases for negations, and phrase lists for shift indicators.
//!
//! Production deployments typically put an external reasoning service
//! behind the same trait; this implementation keeps the engine fully
//! testable offline and doubles as the fallback when no service is
//! configured.

pub mod keyword;
pub mod lexicon;

pub use keyword::{AversionRule, IndicatorRule, KeywordInterpreter, KeywordRule};
