use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cabin::outputs::voice::ConsoleVoice;
use cabin::{Assistant, AssistantConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    tracing::info!("Waking up... calibrating language modules.");

    // 2. Build the assistant (corpus + classifier are fitted here)
    let config = AssistantConfig::from_env()?;
    let mut voice = ConsoleVoice::new(&config.assistant_name);
    let mut assistant = Assistant::new(config)?;

    // 3. Typed lines stand in for the speech-to-text collaborator
    let (tx_input, rx_input) = mpsc::channel::<String>(16);
    tokio::spawn(async move {
        let reader = BufReader::new(tokio::io::stdin());
        let mut lines = reader.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            tracing::debug!("Console input dispatched");
            if tx_input.send(line).await.is_err() {
                break;
            }
        }
    });

    // 4. Run the conversation
    assistant.run(rx_input, &mut voice).await?;

    let snapshot = assistant.telemetry_snapshot();
    tracing::info!(
        "Session {} closed: {} handled, {} unrecognized, {} clarifications",
        assistant.telemetry.session_id(),
        snapshot.turn_stats.handled,
        snapshot.turn_stats.unrecognized,
        snapshot.turn_stats.clarifications
    );

    Ok(())
}
