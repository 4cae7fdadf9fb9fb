//! Roll domain for the Randroll launcher plugin.
//!
//! Interprets short roll queries (`""`, `"20"`, `"5 10"`,
//! `"apple banana cherry"`) against resolved settings and produces
//! title/subtitle outcomes, one uniform draw each. Everything here is pure
//! and synchronous; transport framing and settings persistence belong to
//! the surrounding crates.

pub mod generate;
pub mod outcome;
pub mod query;
pub mod settings;

pub use generate::{MAX_RANGE_SPAN, handle_query, roll_labels, roll_range, roll_yes_no};
pub use outcome::{OutcomeAction, RollOutcome};
pub use query::RollRequest;
pub use settings::{RollMode, RollSettings, RollType};
