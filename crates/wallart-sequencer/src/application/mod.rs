//! Application layer: async orchestration of the demo narrative.

pub mod confirmation;
pub mod sequencer;
