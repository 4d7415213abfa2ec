//! The Narrative Sequencer.
//!
//! Owns the demo's flow state and prompt buffer, reacts to flow transitions
//! by running phase handlers, and bridges the UI's confirm button into the
//! suspended intro phase.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use wallart_core::flow::FlowState;
use wallart_core::handles::SceneHandles;
use wallart_core::rng::DeterministicRng;
use wallart_core::scene::SceneDirector;
use wallart_core::transform::{Easing, Transform};

use super::confirmation::ConfirmationGate;
use crate::domain::script::Script;

/// Where the projectile starts, relative to the character anchor.
const LAUNCH_POSITION: [f32; 3] = [0.0, 0.1, 0.0];

/// Flight target, relative to the character anchor. The wall anchor's real
/// transform is not readable from here, so the target is a fixed point that
/// lands the projectile on the canvas in the stock scene.
const FLIGHT_DESTINATION: [f32; 3] = [-1.4, 0.3, -1.0];

/// Base word-reveal delay; each word waits one or two of these.
const WORD_DELAY_MS: u64 = 100;

struct SequencerInner {
    script: Script,
    handles: SceneHandles,
    director: Arc<dyn SceneDirector>,
    rng: Mutex<Box<dyn DeterministicRng>>,
    flow_tx: watch::Sender<FlowState>,
    prompt_tx: watch::Sender<String>,
    choices_tx: watch::Sender<bool>,
    confirmation: ConfirmationGate,
}

/// Drives the scripted four-phase demo narrative.
///
/// Cheap to clone; all clones share one sequencer. Flow state, prompt text,
/// and choice-control visibility are published through `watch` channels;
/// presentation code subscribes and renders. Every scene side effect goes
/// through the injected [`SceneDirector`].
///
/// A tap always forces the flow back to [`FlowState::Intro`] and spawns a
/// fresh intro task, even if a previous intro is still running; overlapping
/// intros then interleave their reveals on the shared prompt buffer. This
/// mirrors the demo's gesture handling, which re-fires the intro on every
/// tap.
#[derive(Clone)]
pub struct NarrativeSequencer {
    inner: Arc<SequencerInner>,
}

impl NarrativeSequencer {
    /// Creates a sequencer in the `Idle` state.
    #[must_use]
    pub fn new(
        script: Script,
        handles: SceneHandles,
        director: Arc<dyn SceneDirector>,
        rng: Box<dyn DeterministicRng>,
    ) -> Self {
        Self {
            inner: Arc::new(SequencerInner {
                script,
                handles,
                director,
                rng: Mutex::new(rng),
                flow_tx: watch::Sender::new(FlowState::Idle),
                prompt_tx: watch::Sender::new(String::new()),
                choices_tx: watch::Sender::new(false),
                confirmation: ConfirmationGate::new(),
            }),
        }
    }

    /// Subscribes to flow state changes.
    #[must_use]
    pub fn subscribe_flow(&self) -> watch::Receiver<FlowState> {
        self.inner.flow_tx.subscribe()
    }

    /// Subscribes to prompt buffer changes.
    #[must_use]
    pub fn subscribe_prompt(&self) -> watch::Receiver<String> {
        self.inner.prompt_tx.subscribe()
    }

    /// Subscribes to choice-control visibility changes.
    #[must_use]
    pub fn subscribe_choices(&self) -> watch::Receiver<bool> {
        self.inner.choices_tx.subscribe()
    }

    /// The current flow state.
    #[must_use]
    pub fn current_flow(&self) -> FlowState {
        *self.inner.flow_tx.borrow()
    }

    /// Tap-anywhere gesture: force the flow back to the intro.
    pub fn handle_tap(&self) {
        self.transition(FlowState::Intro);
    }

    /// Doodle submitted: start the projectile flight.
    pub fn begin_projection(&self) {
        self.transition(FlowState::Projecting);
    }

    /// Doodle finished on the drawing surface: close the surface, then
    /// start the projectile flight.
    pub async fn finish_doodle(&self) {
        self.inner
            .director
            .close_surface(&self.inner.script.drawing_surface)
            .await;
        self.begin_projection();
    }

    /// Confirm button pressed. Resolves the pending intro wait, if any;
    /// dropped otherwise.
    pub fn signal_confirmation(&self) {
        self.inner.confirmation.confirm();
    }

    fn transition(&self, next: FlowState) {
        let previous = self.inner.flow_tx.send_replace(next);
        self.on_flow_state_changed(previous, next);
    }

    fn on_flow_state_changed(&self, previous: FlowState, current: FlowState) {
        // Anything off the playthrough order is an external trigger, e.g. a
        // tap restarting the intro.
        let in_order = previous.playthrough_successor() == Some(current);
        tracing::info!(%previous, %current, in_order, "flow state changed");
        match current {
            FlowState::Idle => {}
            FlowState::Intro => {
                let sequencer = self.clone();
                tokio::spawn(async move { sequencer.run_intro_phase().await });
            }
            FlowState::Projecting => {
                let sequencer = self.clone();
                tokio::spawn(async move { sequencer.run_projecting_phase().await });
            }
            FlowState::WallUpdated => {
                let sequencer = self.clone();
                tokio::spawn(async move { sequencer.run_wall_update_phase().await });
            }
        }
    }

    /// Greets the user, waits for confirmation, then opens the drawing
    /// surface while the follow-up line reveals concurrently.
    async fn run_intro_phase(&self) {
        let inner = &self.inner;
        if let (Some(assistant), Some(wave)) = (inner.handles.assistant, inner.handles.wave_clip) {
            inner.director.play_animation(assistant, wave, 1).await;
        } else {
            tracing::warn!("assistant or wave clip not loaded; skipping greeting animation");
        }

        self.reveal_text(&inner.script.intro_greeting).await;

        inner.choices_tx.send_replace(true);
        inner.confirmation.wait().await;
        inner.choices_tx.send_replace(false);

        // The follow-up reveal and the surface open are deliberately not
        // ordered against each other: the reveal runs detached while the
        // surface opens.
        let sequencer = self.clone();
        tokio::spawn(async move {
            sequencer
                .reveal_text(&sequencer.inner.script.intro_followup)
                .await;
        });

        inner
            .director
            .open_surface(&inner.script.drawing_surface)
            .await;
    }

    /// Flies the doodle projectile to the wall, then advances the flow.
    ///
    /// With no projectile loaded this logs and returns, leaving the flow at
    /// `Projecting`. Nothing retries or times out; the narrative stalls
    /// there until the next tap restarts it.
    async fn run_projecting_phase(&self) {
        let inner = &self.inner;
        let Some(projectile) = inner.handles.projectile else {
            tracing::warn!("projectile not loaded; skipping flight, flow stays at projecting");
            return;
        };

        let destination = Transform::from_translation(FLIGHT_DESTINATION);
        let duration = inner.script.flight_duration();

        inner
            .director
            .set_actor_position(projectile.root, LAUNCH_POSITION)
            .await;
        for emitter in projectile.trail_emitters {
            inner.director.set_emitting(emitter, true).await;
        }

        inner
            .director
            .move_actor(projectile.root, destination, duration, Easing::EaseInOut)
            .await;

        for emitter in projectile.trail_emitters {
            inner.director.set_emitting(emitter, false).await;
        }

        self.transition(FlowState::WallUpdated);
    }

    /// Swaps the wall art and plays the celebration.
    async fn run_wall_update_phase(&self) {
        let inner = &self.inner;
        if let Some(projectile) = inner.handles.projectile {
            inner.director.mark_burst_eligible(projectile.root).await;
        } else {
            tracing::warn!("projectile not loaded; skipping burst mark");
        }

        if let Some(wall) = inner.handles.wall_canvas {
            inner
                .director
                .set_material(wall, &inner.script.wall_image)
                .await;
        } else {
            tracing::warn!("wall canvas not loaded; skipping material swap");
        }

        let (Some(assistant), Some(jump)) = (inner.handles.assistant, inner.handles.jump_clip)
        else {
            tracing::warn!("assistant or jump clip not loaded; skipping celebration");
            return;
        };

        let delay = inner.script.celebration_delay();
        tokio::time::sleep(delay).await;
        inner.director.play_animation(assistant, jump, 1).await;
        self.reveal_text(&inner.script.congratulation).await;
        tokio::time::sleep(delay).await;
        self.reveal_text(&inner.script.closing_prompt).await;
    }

    /// Reveals `text` word by word on the prompt buffer.
    ///
    /// The buffer is cleared, then each whitespace-delimited word is
    /// appended with a trailing space and published, followed by a 100 ms or
    /// 200 ms pause chosen per word. Runs to completion once started.
    pub async fn reveal_text(&self, text: &str) {
        self.inner.prompt_tx.send_replace(String::new());
        for word in text.split_whitespace() {
            self.inner.prompt_tx.send_modify(|buffer| {
                buffer.push_str(word);
                buffer.push(' ');
            });
            tokio::time::sleep(self.next_word_delay()).await;
        }
    }

    fn next_word_delay(&self) -> Duration {
        let mut rng = self
            .inner
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let multiplier = 1 + rng.next_u32_range(0, 1);
        Duration::from_millis(u64::from(multiplier) * WORD_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use wallart_core::rng::SystemRng;
    use wallart_test_support::{
        MockRng, RecordingSceneDirector, SceneCommand, SequenceRng, full_scene_handles,
    };

    use super::*;

    fn build_sequencer(
        handles: SceneHandles,
        rng: Box<dyn DeterministicRng>,
    ) -> (NarrativeSequencer, Arc<RecordingSceneDirector>) {
        let director = Arc::new(RecordingSceneDirector::new());
        let sequencer =
            NarrativeSequencer::new(Script::default(), handles, director.clone(), rng);
        (sequencer, director)
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_publishes_cumulative_word_states() {
        // Arrange
        let (sequencer, _director) = build_sequencer(SceneHandles::default(), Box::new(MockRng));
        let mut prompt_rx = sequencer.subscribe_prompt();

        // Act
        let reveal = tokio::spawn({
            let sequencer = sequencer.clone();
            async move { sequencer.reveal_text("alpha beta gamma").await }
        });

        let mut seen = Vec::new();
        for _ in 0..3 {
            prompt_rx.changed().await.unwrap();
            seen.push(prompt_rx.borrow_and_update().clone());
        }
        reveal.await.unwrap();

        // Assert — one state per word, each a prefix of the full text.
        assert_eq!(seen, ["alpha ", "alpha beta ", "alpha beta gamma "]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_duration_is_the_sum_of_scripted_word_delays() {
        // Arrange — delays of 100, 200, 100 ms.
        let rng = SequenceRng::new(vec![0, 1, 0]);
        let (sequencer, _director) = build_sequencer(SceneHandles::default(), Box::new(rng));

        // Act
        let start = tokio::time::Instant::now();
        sequencer.reveal_text("one two three").await;

        // Assert
        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_duration_stays_within_pacing_bounds() {
        // Arrange
        let (sequencer, _director) = build_sequencer(SceneHandles::default(), Box::new(SystemRng));

        // Act — three words, each 100 or 200 ms.
        let start = tokio::time::Instant::now();
        sequencer.reveal_text("Go go go").await;
        let elapsed = start.elapsed();

        // Assert
        assert!(elapsed >= Duration::from_millis(300), "elapsed {elapsed:?}");
        assert!(elapsed <= Duration::from_millis(600), "elapsed {elapsed:?}");
        assert_eq!(*sequencer.subscribe_prompt().borrow(), "Go go go ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_projecting_without_projectile_skips_and_stays_stuck() {
        // Arrange — no handles at all.
        let (sequencer, director) = build_sequencer(SceneHandles::default(), Box::new(MockRng));

        // Act
        sequencer.begin_projection();
        tokio::time::sleep(Duration::from_secs(10)).await;

        // Assert — no commands, and the flow never advances.
        assert_eq!(sequencer.current_flow(), FlowState::Projecting);
        assert!(director.commands().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_projecting_with_projectile_runs_the_flight_and_advances() {
        // Arrange
        let handles = full_scene_handles();
        let projectile = handles.projectile.unwrap();
        let (sequencer, director) = build_sequencer(handles, Box::new(MockRng));
        let mut flow_rx = sequencer.subscribe_flow();

        // Act
        let start = tokio::time::Instant::now();
        sequencer.begin_projection();
        flow_rx
            .wait_for(|state| *state == FlowState::WallUpdated)
            .await
            .unwrap();

        // Assert — the transition waits out the full flight.
        assert!(start.elapsed() >= Duration::from_secs(3));
        let commands = director.commands();
        assert_eq!(
            commands[..6],
            [
                SceneCommand::SetActorPosition {
                    actor: projectile.root,
                    position: LAUNCH_POSITION,
                },
                SceneCommand::SetEmitting {
                    emitter: projectile.trail_emitters[0],
                    emitting: true,
                },
                SceneCommand::SetEmitting {
                    emitter: projectile.trail_emitters[1],
                    emitting: true,
                },
                SceneCommand::MoveActor {
                    actor: projectile.root,
                    destination: Transform::from_translation(FLIGHT_DESTINATION),
                    duration: Duration::from_secs(3),
                    easing: Easing::EaseInOut,
                },
                SceneCommand::SetEmitting {
                    emitter: projectile.trail_emitters[0],
                    emitting: false,
                },
                SceneCommand::SetEmitting {
                    emitter: projectile.trail_emitters[1],
                    emitting: false,
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_intro_shows_choices_only_after_the_greeting_reveal() {
        // Arrange
        let handles = full_scene_handles();
        let (sequencer, director) = build_sequencer(handles, Box::new(MockRng));
        let mut choices_rx = sequencer.subscribe_choices();

        // Act
        let start = tokio::time::Instant::now();
        sequencer.handle_tap();
        choices_rx.wait_for(|visible| *visible).await.unwrap();

        // Assert — the full greeting is on the buffer before the controls
        // appear, and the reveal took at least 100 ms per word.
        let greeting_words = Script::default().intro_greeting.split_whitespace().count();
        let min_reveal = Duration::from_millis(100 * u64::try_from(greeting_words).unwrap());
        assert!(start.elapsed() >= min_reveal);

        let prompt = sequencer.subscribe_prompt().borrow().clone();
        assert_eq!(prompt.split_whitespace().count(), greeting_words);

        // Confirm hides the controls and eventually opens the surface.
        sequencer.signal_confirmation();
        choices_rx.wait_for(|visible| !visible).await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(director.commands().contains(&SceneCommand::OpenSurface {
            surface_id: "doodle_canvas".to_owned(),
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_tap_starts_a_second_intro_task() {
        // Arrange
        let handles = full_scene_handles();
        let assistant = handles.assistant.unwrap();
        let wave = handles.wave_clip.unwrap();
        let (sequencer, director) = build_sequencer(handles, Box::new(MockRng));

        // Act — two taps before the first intro can finish.
        sequencer.handle_tap();
        sequencer.handle_tap();
        tokio::time::sleep(Duration::from_millis(1)).await;

        // Assert — both intro tasks issued the greeting animation.
        let waves = director
            .commands()
            .iter()
            .filter(|command| {
                **command
                    == SceneCommand::PlayAnimation {
                        actor: assistant,
                        clip: wave,
                        repeat_count: 1,
                    }
            })
            .count();
        assert_eq!(waves, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_update_without_assistant_skips_the_celebration() {
        // Arrange — projectile and wall present, assistant and clips absent.
        let mut handles = full_scene_handles();
        handles.assistant = None;
        handles.jump_clip = None;
        let wall = handles.wall_canvas.unwrap();
        let projectile = handles.projectile.unwrap();
        let (sequencer, director) = build_sequencer(handles, Box::new(MockRng));
        let mut flow_rx = sequencer.subscribe_flow();

        // Act
        sequencer.begin_projection();
        flow_rx
            .wait_for(|state| *state == FlowState::WallUpdated)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;

        // Assert — the wall swap happened but no animation or reveal.
        let commands = director.commands();
        assert!(commands.contains(&SceneCommand::MarkBurstEligible {
            actor: projectile.root,
        }));
        assert!(commands.contains(&SceneCommand::SetMaterial {
            actor: wall,
            image_id: "sketch".to_owned(),
        }));
        assert!(
            !commands
                .iter()
                .any(|command| matches!(command, SceneCommand::PlayAnimation { .. }))
        );
        assert_eq!(*sequencer.subscribe_prompt().borrow(), "");
    }
}
