//! The write-beat job: spec, blocks, prompts, model call, manuscript write.

use fabula_beat::{
    ACTION_WRITE_BEAT, BeatSpec, PromptBlocks, RenderedPrompts, build_beat_spec, build_blocks,
    build_messages_from_prompts, render_prompts_for_action,
};
use fabula_core::{BeatIds, GenerateRequest, StoryLayout, TokenUsageData};
use fabula_error::{BuilderError, BuilderErrorKind, FabulaResult, StorageError, StorageErrorKind};
use fabula_interface::FabulaDriver;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Outcome of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// The beat was generated and written
    #[display("ok")]
    Ok,
}

/// Result of writing one beat.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct WriteBeatResult {
    /// File the beat was written to
    beat_path: PathBuf,
    /// Token usage, when the model reported it
    tokens_used: Option<TokenUsageData>,
    /// Job status
    status: JobStatus,
}

/// Everything the write-beat job sends to the model, before sending it.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct PreparedBeat {
    /// Assembled beat spec
    spec: BeatSpec,
    /// Rendered blocks
    blocks: PromptBlocks,
    /// Rendered `ACTIONS_WRITE_BEAT` prompts
    prompts: RenderedPrompts,
    /// Request for the driver
    request: GenerateRequest,
}

/// Builds the spec, blocks, prompts and model request for a beat without
/// calling the model.
///
/// # Errors
///
/// Configuration and template errors, or a write-beat action lacking the
/// `system` or `user` slot.
#[instrument(skip(story_root), fields(root = %story_root.as_ref().display()))]
pub fn prepare_write_beat(story_root: impl AsRef<Path>, ids: &BeatIds) -> FabulaResult<PreparedBeat> {
    let story_root = story_root.as_ref();
    let spec = build_beat_spec(story_root, ids.chapter_num, ids.scene_num, ids.beat_num)?;
    let blocks = build_blocks(&spec);
    let prompts = render_prompts_for_action(story_root, ACTION_WRITE_BEAT, &blocks)?;

    let messages = build_messages_from_prompts(
        prompts.require("system")?,
        prompts.require("user")?,
        prompts.get("user2"),
    );

    let params = spec.generator_config().prompt_parameters();
    let request = GenerateRequest::builder()
        .messages(messages)
        .temperature(*params.temperature())
        .max_tokens(*params.max_tokens())
        .build()
        .map_err(|e| {
            BuilderError::new(BuilderErrorKind::Incomplete {
                target: "GenerateRequest".to_string(),
                reason: e.to_string(),
            })
        })?;

    debug!(messages = request.messages().len(), "Prepared write-beat request");
    Ok(PreparedBeat {
        spec,
        blocks,
        prompts,
        request,
    })
}

/// Generates one beat with `driver` and writes it to
/// `manuscript/chapters/chXX/beats/scYY_bZZ.md`, creating directories as
/// needed and replacing any existing file.
///
/// # Errors
///
/// Anything [`prepare_write_beat`] reports, model failures (unmodified, no
/// retry) and manuscript write failures.
#[instrument(skip(story_root, driver), fields(root = %story_root.as_ref().display(), model = %driver.model_name()))]
pub async fn run_write_beat_job<D>(
    story_root: impl AsRef<Path>,
    ids: &BeatIds,
    driver: &D,
) -> FabulaResult<WriteBeatResult>
where
    D: FabulaDriver + ?Sized,
{
    let story_root = story_root.as_ref();
    let prepared = prepare_write_beat(story_root, ids)?;
    let response = driver.generate(prepared.request()).await?;

    let beat_path = StoryLayout::new(story_root).beat_file(ids.chapter_num, ids.scene_num, ids.beat_num);
    if let Some(dir) = beat_path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;
    }
    std::fs::write(&beat_path, response.text()).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            beat_path.display(),
            e
        )))
    })?;

    info!(path = %beat_path.display(), chars = response.text().len(), "Beat written");
    Ok(WriteBeatResult {
        beat_path,
        tokens_used: *response.usage(),
        status: JobStatus::Ok,
    })
}
