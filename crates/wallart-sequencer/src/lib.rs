//! Wallart — Narrative Sequencing bounded context.
//!
//! Drives the scripted four-phase doodle demo: greeting and confirmation,
//! projectile flight, wall-art swap, and celebration, with word-by-word
//! prompt reveals in between. Scene effects go through the capability
//! traits in `wallart-core`; this crate owns only the sequencing.

pub mod application;
pub mod domain;
