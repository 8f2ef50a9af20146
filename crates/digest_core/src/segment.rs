use std::ops::Range;

/// Markup inserted between consecutive posts inside one Markdown file.
pub const LINE_BREAK: &str = "<br/>";

/// Closed-open index range `[start, end)` over a batch of posts, written as one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSegment {
    pub start: usize,
    pub end: usize,
}

impl FileSegment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Number of files actually produced for `num_posts` posts.
///
/// A request below 1 counts as 1. A request above the post count is clamped so
/// that no file is empty.
pub fn effective_file_count(num_posts: usize, requested_files: usize) -> usize {
    requested_files.max(1).min(num_posts.max(1))
}

/// Splits `num_posts` into contiguous segments of `num_posts / num_files` posts.
///
/// The last segment absorbs the remainder. An empty batch yields no segments.
///
/// The result always tiles `0..num_posts`: segments are non-empty, the first
/// starts at 0, each starts where the previous ended and the last ends at
/// `num_posts`. Callers may index a slice of `num_posts` items with
/// [`FileSegment::range`] without bounds checks failing.
pub fn plan_segments(num_posts: usize, requested_files: usize) -> Vec<FileSegment> {
    if num_posts == 0 {
        return Vec::new();
    }
    let num_files = effective_file_count(num_posts, requested_files);
    let increment = num_posts / num_files;

    (0..num_files)
        .map(|k| {
            let start = k * increment;
            let end = if k + 1 == num_files {
                num_posts
            } else {
                start + increment
            };
            FileSegment { start, end }
        })
        .collect()
}

/// `LINE_BREAK` repeated `space_between` times.
pub fn separator(space_between: usize) -> String {
    LINE_BREAK.repeat(space_between)
}
