//! Walks the paged `posts` list endpoint until no continuation token remains.

use chrono::{DateTime, FixedOffset};
use digest_logging::{digest_info, digest_warn};
use serde::Deserialize;
use url::Url;

use crate::decode::decode_body;
use crate::fetch::PageFetcher;
use crate::progress::ProgressSink;
use crate::normalize::normalize_posts;
use crate::{FailureKind, FetchError, ParseError, PipelineError, PipelineEvent, Post};

/// Query parameter carrying the continuation token.
pub const PAGE_TOKEN_PARAM: &str = "pageToken";

/// Request URL for the content API, resolved once by the caller.
///
/// Credentials (API key, blog id) are part of the URL and are never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub url: String,
}

impl ApiConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig").field("url", &"<redacted>").finish()
    }
}

#[derive(Debug, Deserialize)]
struct PostsPage {
    items: Option<Vec<PostItem>>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostItem {
    content: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    published: Option<DateTime<FixedOffset>>,
}

impl From<PostItem> for Post {
    fn from(item: PostItem) -> Self {
        Post {
            content: item.content.replace('\n', ""),
            title: item.title,
            published: item.published,
        }
    }
}

/// Builds the URL for a page: the base URL, plus the token when continuing.
pub fn page_url(base: &str, token: Option<&str>) -> Result<String, FetchError> {
    let mut url =
        Url::parse(base).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if let Some(token) = token {
        url.query_pairs_mut().append_pair(PAGE_TOKEN_PARAM, token);
    }
    Ok(url.into())
}

/// Fetches every page in order. The first failure aborts the whole walk.
pub async fn fetch_posts(
    fetcher: &dyn PageFetcher,
    config: &ApiConfig,
    sink: &dyn ProgressSink,
) -> Result<Vec<Post>, PipelineError> {
    let mut posts = Vec::new();
    let mut token: Option<String> = None;
    let mut page = 0;

    loop {
        let url = page_url(&config.url, token.as_deref())?;
        let output = fetcher.fetch(&url).await?;
        let decoded = decode_body(&output.body, output.content_type.as_deref())
            .map_err(|source| ParseError::Decode { page, source })?;
        let parsed: PostsPage = serde_json::from_str(&decoded.text)
            .map_err(|source| ParseError::Json { page, source })?;
        let items = parsed.items.ok_or(ParseError::MissingItems { page })?;

        let count = items.len();
        posts.extend(items.into_iter().map(Post::from));
        sink.emit(PipelineEvent::PageFetched {
            page,
            posts: count,
            total_posts: posts.len(),
            bytes: output.body.len(),
        });

        // An empty token ends the walk like a missing one.
        token = parsed.next_page_token.filter(|t| !t.is_empty());
        if token.is_none() {
            break;
        }
        if count == 0 {
            digest_warn!("Page {} was empty but carried a continuation token", page);
        }
        page += 1;
    }

    digest_info!("Fetched {} posts over {} pages", posts.len(), page + 1);
    Ok(posts)
}

/// Raw HTML content of every post, in API order.
pub async fn extract_content(
    fetcher: &dyn PageFetcher,
    config: &ApiConfig,
    sink: &dyn ProgressSink,
) -> Result<Vec<String>, PipelineError> {
    let posts = fetch_posts(fetcher, config, sink).await?;
    Ok(posts.into_iter().map(|post| post.content).collect())
}

/// Plain text of every post, in API order.
pub async fn extract_content_text_only(
    fetcher: &dyn PageFetcher,
    config: &ApiConfig,
    sink: &dyn ProgressSink,
) -> Result<Vec<String>, PipelineError> {
    let content = extract_content(fetcher, config, sink).await?;
    Ok(normalize_posts(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_appends_token_to_existing_query() {
        let url = page_url("https://api.example.com/posts?key=k", Some("abc")).unwrap();
        assert_eq!(url, "https://api.example.com/posts?key=k&pageToken=abc");
    }

    #[test]
    fn page_url_without_token_is_unchanged() {
        let url = page_url("https://api.example.com/posts?key=k", None).unwrap();
        assert_eq!(url, "https://api.example.com/posts?key=k");
    }

    #[test]
    fn page_url_rejects_garbage() {
        let err = page_url("not a url", None).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }

    #[test]
    fn item_newlines_are_removed() {
        let item: PostItem =
            serde_json::from_str(r#"{"content":"<p>a</p>\n<p>b</p>","title":"T"}"#).unwrap();
        let post = Post::from(item);
        assert_eq!(post.content, "<p>a</p><p>b</p>");
        assert_eq!(post.published, None);
    }
}
