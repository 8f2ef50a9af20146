//! Replaces review-site anchors in generated Markdown with their visible text.
//!
//! Anchor spans are located textually so that everything around them is kept
//! byte for byte; each span is then parsed as HTML to read `href` and the
//! inner text, and classified by URL rather than by pattern.

use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use digest_logging::{digest_debug, digest_info};
use scraper::{Html, Selector};
use url::Url;

use crate::partition::{clear_segment_files, list_segment_files, segment_file_name};
use crate::persist::{OutputDir, PersistError};
use crate::progress::ProgressSink;
use crate::{PipelineEvent, Stage};

const LINK_HOSTS: &[&str] = &["www.goodreads.com", "goodreads.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    Book,
    Author,
    Review,
}

impl LinkCategory {
    /// Rewrite order.
    pub const ALL: [LinkCategory; 3] = [
        LinkCategory::Book,
        LinkCategory::Author,
        LinkCategory::Review,
    ];

    pub fn path_prefix(self) -> &'static str {
        match self {
            LinkCategory::Book => "/book/show",
            LinkCategory::Author => "/author/show",
            LinkCategory::Review => "/review/show",
        }
    }

    fn from_href(href: &str) -> Option<Self> {
        let url = Url::parse(href.trim()).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        let host = url.host_str()?;
        if !LINK_HOSTS.iter().any(|h| h.eq_ignore_ascii_case(host)) {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|category| url.path().starts_with(category.path_prefix()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    pub category: LinkCategory,
    pub visible_text: String,
    /// Full anchor markup exactly as it appears in the source text.
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub text: String,
    pub matches: Vec<LinkMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteSummary {
    pub files: Vec<PathBuf>,
    pub links_rewritten: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("input directory {0:?} does not exist")]
    MissingInputDir(PathBuf),
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Finds every anchor of a known category, in document order.
pub fn find_links(text: &str) -> Vec<LinkMatch> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    anchor_spans(text)
        .into_iter()
        .filter_map(|span| classify_anchor(&text[span], &selector))
        .collect()
}

/// Replaces each matched anchor with its visible text.
///
/// Markup is substituted literally, never interpreted as a pattern. Text with
/// no matching anchors is returned unchanged.
pub fn rewrite_links(text: &str) -> RewriteOutcome {
    let matches = find_links(text);
    let mut rewritten = text.to_string();
    for category in LinkCategory::ALL {
        for link in matches.iter().filter(|m| m.category == category) {
            rewritten = rewritten.replace(&link.markup, &link.visible_text);
        }
    }
    RewriteOutcome {
        text: rewritten,
        matches,
    }
}

/// Rewrites every generated file in `input_dir` into `output_dir`.
///
/// Inputs are taken in ascending start-index order; see [`rewrite_files`].
pub fn rewrite_directory(
    input_dir: &Path,
    output_dir: &Path,
    sink: &dyn ProgressSink,
) -> Result<RewriteSummary, RewriteError> {
    if !input_dir.is_dir() {
        return Err(RewriteError::MissingInputDir(input_dir.to_path_buf()));
    }
    let sources = list_segment_files(input_dir).map_err(|source| RewriteError::Read {
        path: input_dir.to_path_buf(),
        source,
    })?;
    rewrite_files(&sources, output_dir, sink)
}

/// Rewrites `sources`, in the given order, into `output_dir` as
/// `blog_posts1.md`, `blog_posts2.md`, ...
///
/// All sources are read before anything is written, so they may live in
/// `output_dir`. Generated files already in `output_dir` are then removed,
/// leaving exactly one rewritten file per source.
pub fn rewrite_files(
    sources: &[PathBuf],
    output_dir: &Path,
    sink: &dyn ProgressSink,
) -> Result<RewriteSummary, RewriteError> {
    let mut contents = Vec::with_capacity(sources.len());
    for path in sources {
        let text = fs::read_to_string(path).map_err(|source| RewriteError::Read {
            path: path.clone(),
            source,
        })?;
        contents.push(text);
    }

    let output = OutputDir::create(output_dir)?;
    clear_segment_files(output.path())?;

    let mut summary = RewriteSummary::default();
    for (n, (source, text)) in sources.iter().zip(&contents).enumerate() {
        let outcome = rewrite_links(text);
        digest_debug!("{:?}: {} links rewritten", source, outcome.matches.len());
        let path = output.write(&segment_file_name(n + 1), &outcome.text)?;
        sink.emit(PipelineEvent::FileWritten {
            stage: Stage::Rewriting,
            path: path.clone(),
        });
        summary.links_rewritten += outcome.matches.len();
        summary.files.push(path);
    }

    digest_info!(
        "Rewrote {} links across {} files into {:?}",
        summary.links_rewritten,
        summary.files.len(),
        output.path()
    );
    Ok(summary)
}

/// Byte ranges of `<a ...>...</a>` spans. Anchors do not nest.
fn anchor_spans(text: &str) -> Vec<Range<usize>> {
    // ASCII lowercasing keeps byte offsets identical.
    let lower = text.to_ascii_lowercase();
    let mut spans = Vec::new();
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find("<a") {
        let start = cursor + found;
        let after_name = start + 2;
        let opens_anchor = lower[after_name..]
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace() || c == '>');
        if !opens_anchor {
            cursor = after_name;
            continue;
        }
        match lower[after_name..].find("</a>") {
            Some(found_end) => {
                let end = after_name + found_end + "</a>".len();
                spans.push(start..end);
                cursor = end;
            }
            None => break,
        }
    }
    spans
}

fn classify_anchor(markup: &str, selector: &Selector) -> Option<LinkMatch> {
    let fragment = Html::parse_fragment(markup);
    let anchor = fragment.select(selector).next()?;
    let category = LinkCategory::from_href(anchor.value().attr("href")?)?;
    let visible_text: String = anchor.text().collect();
    if visible_text.is_empty() || !visible_text.chars().all(is_permitted_char) {
        return None;
    }
    Some(LinkMatch {
        category,
        visible_text,
        markup: markup.to_string(),
    })
}

/// Characters allowed in titles, author names and ratings.
fn is_permitted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '!' | '-' | ':' | ',' | '&' | '\'' | ' ')
}
