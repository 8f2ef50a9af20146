use digest_core::{effective_file_count, plan_segments, FileSegment};
use pretty_assertions::assert_eq;

fn covered_indices(segments: &[FileSegment]) -> Vec<usize> {
    segments.iter().flat_map(|segment| segment.range()).collect()
}

#[test]
fn even_split_gives_equal_segments() {
    let segments = plan_segments(12, 4);
    assert_eq!(segments.len(), 4);
    assert!(segments.iter().all(|segment| segment.len() == 3));
    assert_eq!(segments[3], FileSegment { start: 9, end: 12 });
}

#[test]
fn every_post_is_covered_once_in_order() {
    for num_posts in 1..=23 {
        for num_files in 1..=num_posts {
            let segments = plan_segments(num_posts, num_files);
            assert_eq!(segments.len(), num_files, "n={num_posts} k={num_files}");
            assert_eq!(
                covered_indices(&segments),
                (0..num_posts).collect::<Vec<_>>(),
                "n={num_posts} k={num_files}"
            );
            assert!(segments.iter().all(|segment| !segment.is_empty()));
        }
    }
}

#[test]
fn last_segment_absorbs_remainder() {
    let segments = plan_segments(10, 3);
    assert_eq!(
        segments,
        vec![
            FileSegment { start: 0, end: 3 },
            FileSegment { start: 3, end: 6 },
            FileSegment { start: 6, end: 10 },
        ]
    );
}

#[test]
fn zero_files_is_treated_as_one() {
    assert_eq!(effective_file_count(4, 0), 1);
    assert_eq!(plan_segments(4, 0), vec![FileSegment { start: 0, end: 4 }]);
}

#[test]
fn more_files_than_posts_gives_one_post_per_file() {
    let segments = plan_segments(3, 8);
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|segment| segment.len() == 1));
}

#[test]
fn empty_batch_has_no_segments() {
    assert!(plan_segments(0, 3).is_empty());
}

#[test]
fn segments_stay_within_the_post_count_for_any_request() {
    for num_posts in 0..=17 {
        for requested in 0..=40 {
            let segments = plan_segments(num_posts, requested);
            if let Some(last) = segments.last() {
                assert_eq!(last.end, num_posts, "n={num_posts} k={requested}");
            }
            assert!(segments.windows(2).all(|pair| pair[0].end == pair[1].start));
            assert_eq!(segments.first().map_or(0, |first| first.start), 0);
        }
    }
}
