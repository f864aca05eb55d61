//! RuleML rule evaluations.
//!
//! Rule sets stored as RuleML attach rule characteristics to each rule as
//! `<evaluation measure="..." value="..."/>` elements. This module maps
//! those elements to and from [`RuleCharacteristics`]; the rest of the
//! RuleML document is handled by consumers.
//!
//! Only measures that are set are written. When reading, the legacy names
//! `InconsistencyMeasure` (ε) and `EpsilonPrimMeasure` (ε′) are accepted
//! alongside the current ones.
//!
//! [`RuleCharacteristics`]: crate::rules::RuleCharacteristics

mod evaluation;

pub use evaluation::{read_evaluations, write_evaluations};
