//! End-to-end jobs.

mod write_beat;

pub use write_beat::{
    JobStatus, PreparedBeat, WriteBeatResult, prepare_write_beat, run_write_beat_job,
};
