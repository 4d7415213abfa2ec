//! Domain error types.
//!
//! Only one-time scene setup is fallible. Once the demo is running, a
//! missing handle is a soft gap: the dependent step is skipped with a logged
//! warning, never an error.

use thiserror::Error;

/// Errors raised while loading and binding the demo scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A named required asset could not be resolved.
    #[error("required scene asset not found: {0}")]
    AssetMissing(String),

    /// A named sub-entity was not present in a loaded asset.
    #[error("entity not found in loaded scene: {0}")]
    EntityMissing(String),

    /// The host rendering engine reported a failure.
    #[error("scene engine error: {0}")]
    Engine(String),
}
