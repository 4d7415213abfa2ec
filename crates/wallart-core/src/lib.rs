//! Wallart Core — shared domain abstractions.
//!
//! This crate defines the flow state, scene handle types, and capability
//! traits that the sequencer and host-engine integrations depend on. It
//! contains no engine code.

pub mod error;
pub mod flow;
pub mod handles;
pub mod rng;
pub mod scene;
pub mod transform;
