//! Opaque, non-owning references to scene objects.
//!
//! Handles are resolved once during scene setup and used by the sequencer to
//! address actors, particle emitters, and animation clips owned by the host
//! rendering engine. The sequencer never owns the underlying objects.

use uuid::Uuid;

/// Handle to an actor (an entity with a transform) in the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorHandle(Uuid);

impl ActorHandle {
    /// Mints a fresh handle. Called by scene loaders when binding an actor.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Handle to a particle emitter attached to an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleHandle(Uuid);

impl ParticleHandle {
    /// Mints a fresh handle. Called by scene loaders when binding an emitter.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Handle to a named, pre-composed animation clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(Uuid);

impl ClipHandle {
    /// Mints a fresh handle. Called by scene loaders when binding a clip.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

/// The projectile actor together with its two trail emitters.
///
/// The demo scene gives the projectile exactly two child emitters; both are
/// toggled together around the flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHandles {
    /// The root actor that is moved toward the wall.
    pub root: ActorHandle,
    /// Trail emitters toggled on for the flight and off on arrival.
    pub trail_emitters: [ParticleHandle; 2],
}

/// Everything the sequencer needs from the loaded scene.
///
/// Every entry is optional: the loader binds what it found, and phase
/// handlers skip (with a logged warning) any step whose handle is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneHandles {
    /// The assistant character.
    pub assistant: Option<ActorHandle>,
    /// The doodle projectile and its trail emitters.
    pub projectile: Option<ProjectileHandles>,
    /// The wall-mounted canvas whose material is swapped.
    pub wall_canvas: Option<ActorHandle>,
    /// Greeting animation (wave, then settle back to idle).
    pub wave_clip: Option<ClipHandle>,
    /// Celebration animation (jump up, float, land, settle to idle).
    pub jump_clip: Option<ClipHandle>,
}
