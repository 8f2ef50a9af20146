//! Digest engine: content API fetch, normalization, Markdown output and link repair.
mod decode;
mod engine;
mod fetch;
mod links;
mod normalize;
mod pages;
mod partition;
mod persist;
mod progress;
mod types;

pub use decode::{decode_body, DecodeError, DecodedBody};
pub use engine::{DigestEngine, DigestJob, DigestReport};
pub use fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
pub use links::{
    find_links, rewrite_directory, rewrite_files, rewrite_links, LinkCategory, LinkMatch, RewriteError,
    RewriteOutcome, RewriteSummary,
};
pub use normalize::{html_to_text, normalize_joined, normalize_posts};
pub use pages::{
    extract_content, extract_content_text_only, fetch_posts, page_url, ApiConfig,
    PAGE_TOKEN_PARAM,
};
pub use partition::{
    parse_segment_file_name, segment_file_name, write_markdown_files, PartitionOptions, FILE_STEM,
};
pub use persist::{ensure_output_dir, OutputDir, PersistError};
pub use progress::{LogProgressSink, ProgressSink};
pub use types::{
    FailureKind, FetchError, FetchOutput, ParseError, PipelineError, PipelineEvent, Post, Stage,
};
