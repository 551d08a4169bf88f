//! Write-beat command handler.

use crate::cli::BeatArgs;
use fabula::{FabulaDriver, FabulaResult, OpenAICompatibleClient, run_write_beat_job};
use tracing::info;

/// Generates the beat with the story's configured model and reports where it
/// was written.
pub async fn write_beat(args: &BeatArgs) -> FabulaResult<()> {
    let client = OpenAICompatibleClient::from_story_root(&args.story_root)?;
    info!(
        provider = client.provider_name(),
        model = client.model_name(),
        "Writing beat"
    );

    let result = run_write_beat_job(&args.story_root, &args.ids(), &client).await?;

    println!("Beat written to: {}", result.beat_path().display());
    if let Some(usage) = result.tokens_used() {
        println!("Tokens used: {}", usage);
    }
    Ok(())
}
