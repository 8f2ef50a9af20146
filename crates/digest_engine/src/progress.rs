use digest_logging::{digest_debug, digest_info};

use crate::PipelineEvent;

/// Receives pipeline events as the run advances.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Forwards pipeline events to the logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::StageStarted(stage) => digest_debug!("Stage {:?}", stage),
            PipelineEvent::PageFetched {
                page,
                posts,
                total_posts,
                bytes,
            } => {
                digest_info!(
                    "Fetched page {} ({} posts, {} bytes, {} total)",
                    page,
                    posts,
                    bytes,
                    total_posts
                );
            }
            PipelineEvent::FileWritten { stage, path } => {
                digest_info!("{:?}: wrote {:?}", stage, path);
            }
        }
    }
}
