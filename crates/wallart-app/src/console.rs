//! Console scene integration — stands in for the host rendering engine.
//!
//! Every scene command is logged instead of rendered, and the move command
//! simply waits out its duration.

use std::time::Duration;

use async_trait::async_trait;
use wallart_core::error::SceneError;
use wallart_core::handles::{
    ActorHandle, ClipHandle, ParticleHandle, ProjectileHandles, SceneHandles,
};
use wallart_core::scene::{SceneDirector, SceneLoader};
use wallart_core::transform::{Easing, Transform};

/// The one scene asset this demo knows how to "load".
pub const SCENE_ASSET: &str = "immersive";

/// A scene director that narrates commands to the log.
#[derive(Debug, Default)]
pub struct ConsoleSceneDirector;

#[async_trait]
impl SceneDirector for ConsoleSceneDirector {
    async fn set_emitting(&self, emitter: ParticleHandle, emitting: bool) {
        tracing::info!(?emitter, emitting, "set emitter");
    }

    async fn set_actor_position(&self, actor: ActorHandle, position: [f32; 3]) {
        tracing::info!(?actor, ?position, "set actor position");
    }

    async fn move_actor(
        &self,
        actor: ActorHandle,
        destination: Transform,
        duration: Duration,
        easing: Easing,
    ) {
        tracing::info!(?actor, ?destination, ?duration, ?easing, "move actor");
        tokio::time::sleep(duration).await;
        tracing::info!(?actor, "move complete");
    }

    async fn play_animation(&self, actor: ActorHandle, clip: ClipHandle, repeat_count: u32) {
        tracing::info!(?actor, ?clip, repeat_count, "play animation");
    }

    async fn set_material(&self, actor: ActorHandle, image_id: &str) {
        tracing::info!(?actor, image_id, "set material");
    }

    async fn mark_burst_eligible(&self, actor: ActorHandle) {
        tracing::info!(?actor, "mark burst eligible");
    }

    async fn open_surface(&self, surface_id: &str) {
        tracing::info!(surface_id, "open surface");
    }

    async fn close_surface(&self, surface_id: &str) {
        tracing::info!(surface_id, "close surface");
    }
}

/// A scene loader that fabricates a fully populated set of handles for the
/// known demo asset and fails for anything else.
#[derive(Debug, Default)]
pub struct ConsoleSceneLoader;

#[async_trait]
impl SceneLoader for ConsoleSceneLoader {
    async fn load_scene(&self, asset_id: &str) -> Result<SceneHandles, SceneError> {
        if asset_id != SCENE_ASSET {
            return Err(SceneError::AssetMissing(asset_id.to_owned()));
        }
        Ok(SceneHandles {
            assistant: Some(ActorHandle::fresh()),
            projectile: Some(ProjectileHandles {
                root: ActorHandle::fresh(),
                trail_emitters: [ParticleHandle::fresh(), ParticleHandle::fresh()],
            }),
            wall_canvas: Some(ActorHandle::fresh()),
            wave_clip: Some(ClipHandle::fresh()),
            jump_clip: Some(ClipHandle::fresh()),
        })
    }
}
