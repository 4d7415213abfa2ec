//! Domain layer: the demo script as data.

pub mod script;
