use std::path::PathBuf;
use std::sync::Arc;

use digest_core::{
    analyze, AnalysisReport, LexiconPosTagger, LexiconSentimentScorer, PosTagger, SentimentScorer,
};
use digest_logging::{digest_info, digest_warn};

use crate::fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
use crate::links::{rewrite_files, RewriteSummary};
use crate::normalize::normalize_posts;
use crate::pages::{fetch_posts, ApiConfig};
use crate::partition::{write_markdown_files, PartitionOptions};
use crate::progress::{LogProgressSink, ProgressSink};
use crate::{PipelineError, PipelineEvent, Stage};

/// One end-to-end run: fetch, partition, rewrite links, optionally analyze.
#[derive(Debug, Clone)]
pub struct DigestJob {
    pub api: ApiConfig,
    pub partition: PartitionOptions,
    /// Where the rewritten copies of this run's Markdown files go.
    pub rewritten_dir: PathBuf,
    pub analyze: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DigestReport {
    pub post_count: usize,
    pub markdown_files: Vec<PathBuf>,
    pub rewrite: RewriteSummary,
    pub analysis: Option<AnalysisReport>,
}

pub struct DigestEngine {
    fetcher: Arc<dyn PageFetcher>,
    sink: Arc<dyn ProgressSink>,
    tagger: Box<dyn PosTagger>,
    scorer: Box<dyn SentimentScorer>,
}

impl DigestEngine {
    pub fn new(settings: FetchSettings) -> Result<Self, PipelineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Ok(Self::with_fetcher(Arc::new(fetcher)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            sink: Arc::new(LogProgressSink),
            tagger: Box::new(LexiconPosTagger),
            scorer: Box::new(LexiconSentimentScorer),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Runs the job step by step. Files written before a failure stay on disk.
    pub async fn run(&self, job: &DigestJob) -> Result<DigestReport, PipelineError> {
        let sink = self.sink.as_ref();

        sink.emit(PipelineEvent::StageStarted(Stage::Fetching));
        let posts = fetch_posts(self.fetcher.as_ref(), &job.api, sink).await?;
        if posts.is_empty() {
            digest_warn!("Content API returned no posts");
        }
        let content: Vec<String> = posts.into_iter().map(|post| post.content).collect();

        sink.emit(PipelineEvent::StageStarted(Stage::Partitioning));
        let markdown_files = write_markdown_files(&content, &job.partition, sink)?;
        sink.emit(PipelineEvent::StageStarted(Stage::Rewriting));
        let rewrite = rewrite_files(&markdown_files, &job.rewritten_dir, sink)?;

        let analysis = if job.analyze {
            sink.emit(PipelineEvent::StageStarted(Stage::Analyzing));
            let text = normalize_posts(&content);
            Some(analyze(&text, self.tagger.as_ref(), self.scorer.as_ref()))
        } else {
            None
        };

        sink.emit(PipelineEvent::StageStarted(Stage::Done));
        digest_info!(
            "Digest finished: {} posts, {} files, {} links rewritten",
            content.len(),
            markdown_files.len(),
            rewrite.links_rewritten
        );

        Ok(DigestReport {
            post_count: content.len(),
            markdown_files,
            rewrite,
            analysis,
        })
    }

    /// Blocking wrapper for callers without an async runtime.
    pub fn run_blocking(&self, job: &DigestJob) -> Result<DigestReport, PipelineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(PipelineError::Runtime)?;
        runtime.block_on(self.run(job))
    }
}
