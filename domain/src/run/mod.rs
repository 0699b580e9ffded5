//! Run domain - the three-stage pipeline state machine
//!
//! A [`Run`](entities::Run) tracks one query through the council pipeline:
//!
//! ```text
//! Idle -> Stage1 -> Stage2 -> Stage3 -> Completed
//!           |         |         |
//!           +---------+---------+--> Failed
//! ```
//!
//! The stage only ever advances in that order or jumps to `Failed`.

pub mod entities;
pub mod timings;
pub mod value_objects;

pub use entities::{Run, Stage};
pub use timings::{RunTimings, format_elapsed};
pub use value_objects::{Answer, CouncilOutcome, Review, Synthesis};
