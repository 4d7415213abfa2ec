//! Shared fixtures for sequencer integration tests.

use std::sync::Arc;

use wallart_core::handles::SceneHandles;
use wallart_core::rng::DeterministicRng;
use wallart_sequencer::application::sequencer::NarrativeSequencer;
use wallart_sequencer::domain::script::Script;
use wallart_test_support::RecordingSceneDirector;

/// A short script so tests spell out every expected buffer state.
pub fn short_script() -> Script {
    Script {
        intro_greeting: "Hello there".to_owned(),
        intro_followup: "Draw something".to_owned(),
        congratulation: "Awesome!".to_owned(),
        closing_prompt: "What next".to_owned(),
        ..Script::default()
    }
}

/// Builds a sequencer over a recording director.
pub fn build_sequencer(
    script: Script,
    handles: SceneHandles,
    rng: Box<dyn DeterministicRng>,
) -> (NarrativeSequencer, Arc<RecordingSceneDirector>) {
    let director = Arc::new(RecordingSceneDirector::new());
    let sequencer = NarrativeSequencer::new(script, handles, director.clone(), rng);
    (sequencer, director)
}
