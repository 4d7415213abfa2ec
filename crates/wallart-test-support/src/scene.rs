//! Test scene doubles — mock `SceneDirector` and `SceneLoader`
//! implementations for tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use wallart_core::error::SceneError;
use wallart_core::handles::{
    ActorHandle, ClipHandle, ParticleHandle, ProjectileHandles, SceneHandles,
};
use wallart_core::scene::{SceneDirector, SceneLoader};
use wallart_core::transform::{Easing, Transform};

/// One recorded scene command, in the order the sequencer issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// `set_emitting` call.
    SetEmitting {
        /// The emitter that was toggled.
        emitter: ParticleHandle,
        /// The requested emitting state.
        emitting: bool,
    },
    /// `set_actor_position` call.
    SetActorPosition {
        /// The teleported actor.
        actor: ActorHandle,
        /// The requested position.
        position: [f32; 3],
    },
    /// `move_actor` call.
    MoveActor {
        /// The moved actor.
        actor: ActorHandle,
        /// The requested destination.
        destination: Transform,
        /// The requested move duration.
        duration: Duration,
        /// The requested timing function.
        easing: Easing,
    },
    /// `play_animation` call.
    PlayAnimation {
        /// The animated actor.
        actor: ActorHandle,
        /// The clip that was played.
        clip: ClipHandle,
        /// The requested repeat count.
        repeat_count: u32,
    },
    /// `set_material` call.
    SetMaterial {
        /// The re-textured actor.
        actor: ActorHandle,
        /// The requested image.
        image_id: String,
    },
    /// `mark_burst_eligible` call.
    MarkBurstEligible {
        /// The marked actor.
        actor: ActorHandle,
    },
    /// `open_surface` call.
    OpenSurface {
        /// The opened surface.
        surface_id: String,
    },
    /// `close_surface` call.
    CloseSurface {
        /// The closed surface.
        surface_id: String,
    },
}

/// A scene director that records every command it receives.
///
/// `move_actor` sleeps for the requested duration before returning, so tests
/// running under paused tokio time observe the full flight window.
#[derive(Debug, Default)]
pub struct RecordingSceneDirector {
    commands: Mutex<Vec<SceneCommand>>,
}

impl RecordingSceneDirector {
    /// Create a new recording director with no commands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all commands recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn commands(&self) -> Vec<SceneCommand> {
        self.commands.lock().unwrap().clone()
    }

    fn record(&self, command: SceneCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

#[async_trait]
impl SceneDirector for RecordingSceneDirector {
    async fn set_emitting(&self, emitter: ParticleHandle, emitting: bool) {
        self.record(SceneCommand::SetEmitting { emitter, emitting });
    }

    async fn set_actor_position(&self, actor: ActorHandle, position: [f32; 3]) {
        self.record(SceneCommand::SetActorPosition { actor, position });
    }

    async fn move_actor(
        &self,
        actor: ActorHandle,
        destination: Transform,
        duration: Duration,
        easing: Easing,
    ) {
        self.record(SceneCommand::MoveActor {
            actor,
            destination,
            duration,
            easing,
        });
        tokio::time::sleep(duration).await;
    }

    async fn play_animation(&self, actor: ActorHandle, clip: ClipHandle, repeat_count: u32) {
        self.record(SceneCommand::PlayAnimation {
            actor,
            clip,
            repeat_count,
        });
    }

    async fn set_material(&self, actor: ActorHandle, image_id: &str) {
        self.record(SceneCommand::SetMaterial {
            actor,
            image_id: image_id.to_owned(),
        });
    }

    async fn mark_burst_eligible(&self, actor: ActorHandle) {
        self.record(SceneCommand::MarkBurstEligible { actor });
    }

    async fn open_surface(&self, surface_id: &str) {
        self.record(SceneCommand::OpenSurface {
            surface_id: surface_id.to_owned(),
        });
    }

    async fn close_surface(&self, surface_id: &str) {
        self.record(SceneCommand::CloseSurface {
            surface_id: surface_id.to_owned(),
        });
    }
}

/// A scene director that ignores every command. Useful when a test only
/// cares about flow state or prompt output.
#[derive(Debug, Default)]
pub struct NullSceneDirector;

#[async_trait]
impl SceneDirector for NullSceneDirector {
    async fn set_emitting(&self, _emitter: ParticleHandle, _emitting: bool) {}

    async fn set_actor_position(&self, _actor: ActorHandle, _position: [f32; 3]) {}

    async fn move_actor(
        &self,
        _actor: ActorHandle,
        _destination: Transform,
        duration: Duration,
        _easing: Easing,
    ) {
        tokio::time::sleep(duration).await;
    }

    async fn play_animation(&self, _actor: ActorHandle, _clip: ClipHandle, _repeat_count: u32) {}

    async fn set_material(&self, _actor: ActorHandle, _image_id: &str) {}

    async fn mark_burst_eligible(&self, _actor: ActorHandle) {}

    async fn open_surface(&self, _surface_id: &str) {}

    async fn close_surface(&self, _surface_id: &str) {}
}

/// A scene loader that returns a preconfigured set of handles.
#[derive(Debug)]
pub struct StubSceneLoader {
    handles: SceneHandles,
}

impl StubSceneLoader {
    /// Create a loader that always returns `handles`.
    #[must_use]
    pub fn new(handles: SceneHandles) -> Self {
        Self { handles }
    }
}

#[async_trait]
impl SceneLoader for StubSceneLoader {
    async fn load_scene(&self, _asset_id: &str) -> Result<SceneHandles, SceneError> {
        Ok(self.handles)
    }
}

/// A scene loader that always fails. Useful for testing fatal startup paths.
#[derive(Debug, Default)]
pub struct FailingSceneLoader;

#[async_trait]
impl SceneLoader for FailingSceneLoader {
    async fn load_scene(&self, asset_id: &str) -> Result<SceneHandles, SceneError> {
        Err(SceneError::AssetMissing(asset_id.to_owned()))
    }
}

/// A fully populated set of scene handles, every optional entry present.
#[must_use]
pub fn full_scene_handles() -> SceneHandles {
    SceneHandles {
        assistant: Some(ActorHandle::fresh()),
        projectile: Some(ProjectileHandles {
            root: ActorHandle::fresh(),
            trail_emitters: [ParticleHandle::fresh(), ParticleHandle::fresh()],
        }),
        wall_canvas: Some(ActorHandle::fresh()),
        wave_clip: Some(ClipHandle::fresh()),
        jump_clip: Some(ClipHandle::fresh()),
    }
}
