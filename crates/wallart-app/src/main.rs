//! Wallart demo entry point.
//!
//! Runs the narrative sequencer against a console scene director. Stdin
//! lines stand in for the device's gestures and buttons:
//! `tap` (tap anywhere), `yes` (confirm button), `done` (doodle finished),
//! `quit`.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use wallart_core::rng::SystemRng;
use wallart_core::scene::{SceneDirector, SceneLoader};
use wallart_sequencer::application::sequencer::NarrativeSequencer;
use wallart_sequencer::domain::script::Script;

mod console;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Wallart demo");

    // Read configuration from environment.
    let script = match std::env::var("WALLART_SCRIPT") {
        Ok(path) => Script::load(Path::new(&path))?,
        Err(_) => Script::default(),
    };
    // One-time scene setup; a missing asset is fatal here.
    let loader = console::ConsoleSceneLoader;
    let handles = loader.load_scene(console::SCENE_ASSET).await?;

    let director: Arc<dyn SceneDirector> = Arc::new(console::ConsoleSceneDirector);
    let sequencer = NarrativeSequencer::new(script, handles, director, Box::new(SystemRng));

    // Print each prompt reveal as it lands on the buffer.
    let mut prompt_rx = sequencer.subscribe_prompt();
    tokio::spawn(async move {
        while prompt_rx.changed().await.is_ok() {
            let text = prompt_rx.borrow_and_update().clone();
            if !text.is_empty() {
                println!("assistant: {text}");
            }
        }
    });

    // Surface the choice controls as a stdin hint.
    let mut choices_rx = sequencer.subscribe_choices();
    tokio::spawn(async move {
        while choices_rx.changed().await.is_ok() {
            if *choices_rx.borrow_and_update() {
                println!("[type \"yes\" to continue]");
            }
        }
    });

    println!("commands: tap | yes | done | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "tap" => sequencer.handle_tap(),
            "yes" => sequencer.signal_confirmation(),
            "done" => sequencer.finish_doodle().await,
            "quit" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    tracing::info!("Wallart demo finished");
    Ok(())
}
