//! Bring-up phase state machine
//!
//! Tracks how far a single bring-up call has progressed. The machine is
//! linear and acyclic: no phase is ever revisited, and the only branch is
//! the abort edge into [`BringupPhase::Failed`].

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{BringupPhase, CriticalStep};
