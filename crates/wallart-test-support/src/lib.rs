//! Shared test doubles for the Wallart narrative demo.

mod rng;
mod scene;

pub use rng::{MockRng, SequenceRng};
pub use scene::{
    FailingSceneLoader, NullSceneDirector, RecordingSceneDirector, SceneCommand, StubSceneLoader,
    full_scene_handles,
};
