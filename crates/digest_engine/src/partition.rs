use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use digest_core::{plan_segments, separator};
use digest_logging::{digest_debug, digest_info};

use crate::persist::{OutputDir, PersistError};
use crate::progress::ProgressSink;
use crate::{PipelineEvent, Stage};

/// Stem shared by generated and rewritten Markdown files.
pub const FILE_STEM: &str = "blog_posts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOptions {
    /// Requested file count; 0 is treated as 1.
    pub num_files: usize,
    /// Number of `<br/>` inserted between consecutive posts.
    pub space_between: usize,
    pub output_dir: PathBuf,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            num_files: 1,
            space_between: 1,
            output_dir: PathBuf::from("./markdown_files"),
        }
    }
}

/// `blog_posts{index}.md`
pub fn segment_file_name(index: usize) -> String {
    format!("{FILE_STEM}{index}.md")
}

/// Parses the index back out of a generated file name.
pub fn parse_segment_file_name(name: &str) -> Option<usize> {
    name.strip_prefix(FILE_STEM)?
        .strip_suffix(".md")?
        .parse()
        .ok()
}

/// Generated files directly inside `dir`, in ascending index order.
pub(crate) fn list_segment_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut indexed = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let index = entry.file_name().to_str().and_then(parse_segment_file_name);
        if let Some(index) = index {
            indexed.push((index, entry.path()));
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, path)| path).collect())
}

/// Deletes generated files left in `dir` by an earlier run. Other files are
/// not touched.
pub(crate) fn clear_segment_files(dir: &Path) -> Result<usize, PersistError> {
    let stale = list_segment_files(dir)?;
    for path in &stale {
        fs::remove_file(path)?;
    }
    if !stale.is_empty() {
        digest_debug!("Removed {} stale files from {:?}", stale.len(), dir);
    }
    Ok(stale.len())
}

/// Writes the posts into roughly equal Markdown files, one per segment.
///
/// Each file is named after the index of its first post. Generated files from
/// earlier runs are removed first, so the directory ends up holding exactly
/// the returned paths, in segment order.
pub fn write_markdown_files<S: AsRef<str>>(
    posts: &[S],
    options: &PartitionOptions,
    sink: &dyn ProgressSink,
) -> Result<Vec<PathBuf>, PersistError> {
    let output = OutputDir::create(&options.output_dir)?;
    clear_segment_files(output.path())?;
    let separator = separator(options.space_between);
    let segments = plan_segments(posts.len(), options.num_files);

    let mut written = Vec::with_capacity(segments.len());
    for segment in segments {
        debug_assert!(segment.end <= posts.len(), "segment {segment:?} out of bounds");
        // In bounds: `plan_segments` covers exactly `0..posts.len()`.
        let body = posts[segment.range()]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(&separator);
        let path = output.write(&segment_file_name(segment.start), body.trim())?;
        sink.emit(PipelineEvent::FileWritten {
            stage: Stage::Partitioning,
            path: path.clone(),
        });
        written.push(path);
    }

    digest_info!(
        "Partitioned {} posts into {} files in {:?}",
        posts.len(),
        written.len(),
        output.path()
    );
    Ok(written)
}
