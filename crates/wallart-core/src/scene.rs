//! Scene capability traits.
//!
//! The sequencer never talks to the rendering engine directly; it issues
//! commands through `SceneDirector` and receives resolved handles from a
//! `SceneLoader`. Host integrations (and test doubles) implement both.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::SceneError;
use crate::handles::{ActorHandle, ClipHandle, ParticleHandle, SceneHandles};
use crate::transform::{Easing, Transform};

/// Command surface of the host rendering engine.
///
/// All commands are one-shot and infallible from the sequencer's point of
/// view: the engine owns the objects and applies the effect as best it can.
/// `move_actor` is the only command with a completion signal — its future
/// resolves when the timed move has finished.
#[async_trait]
pub trait SceneDirector: Send + Sync {
    /// Turns a particle emitter on or off.
    async fn set_emitting(&self, emitter: ParticleHandle, emitting: bool);

    /// Teleports an actor to a position (no animation).
    async fn set_actor_position(&self, actor: ActorHandle, position: [f32; 3]);

    /// Moves an actor to `destination` over `duration`. Resolves when the
    /// move completes.
    async fn move_actor(
        &self,
        actor: ActorHandle,
        destination: Transform,
        duration: Duration,
        easing: Easing,
    );

    /// Plays an animation clip on an actor, `repeat_count` times.
    async fn play_animation(&self, actor: ActorHandle, clip: ClipHandle, repeat_count: u32);

    /// Swaps the material of an actor to the image named by `image_id`.
    async fn set_material(&self, actor: ActorHandle, image_id: &str);

    /// Marks an actor as eligible for its terminal burst effect.
    async fn mark_burst_eligible(&self, actor: ActorHandle);

    /// Opens a secondary 2D surface (e.g. the doodle canvas window).
    async fn open_surface(&self, surface_id: &str);

    /// Closes a previously opened secondary surface.
    async fn close_surface(&self, surface_id: &str);
}

/// One-time scene setup.
#[async_trait]
pub trait SceneLoader: Send + Sync {
    /// Loads the named scene asset and binds the demo's handles.
    ///
    /// # Errors
    ///
    /// Returns a `SceneError` if the asset or a required sub-entity cannot
    /// be resolved. Setup failures are fatal: the application aborts with a
    /// diagnostic rather than starting a broken narrative.
    async fn load_scene(&self, asset_id: &str) -> Result<SceneHandles, SceneError>;
}
