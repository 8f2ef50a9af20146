use std::fs;

use digest_engine::{
    find_links, rewrite_directory, rewrite_files, rewrite_links, LinkCategory, LinkMatch,
    LogProgressSink, RewriteError,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn book_anchor_becomes_its_title() {
    let text = r#"<a href="http://www.goodreads.com/book/show/123">Dune</a>"#;
    let outcome = rewrite_links(text);
    assert_eq!(outcome.text, "Dune");
    assert_eq!(
        outcome.matches,
        vec![LinkMatch {
            category: LinkCategory::Book,
            visible_text: "Dune".to_string(),
            markup: text.to_string(),
        }]
    );
}

#[test]
fn all_three_categories_and_both_schemes_are_rewritten() {
    let text = concat!(
        r#"<p><a href="https://www.goodreads.com/book/show/44767458-dune">Dune</a> by "#,
        r#"<a href="http://www.goodreads.com/author/show/58.Frank_Herbert">Frank Herbert</a>"#,
        r#"<br/><a href="https://www.goodreads.com/review/show/2674839">5 of 5 stars</a></p>"#,
    );
    let outcome = rewrite_links(text);
    assert_eq!(
        outcome.text,
        "<p>Dune by Frank Herbert<br/>5 of 5 stars</p>"
    );
    let categories: Vec<_> = outcome.matches.iter().map(|m| m.category).collect();
    assert_eq!(
        categories,
        vec![LinkCategory::Book, LinkCategory::Author, LinkCategory::Review]
    );
}

#[test]
fn text_without_category_anchors_is_unchanged() {
    let text = r#"<p>See <a href="https://example.com/book/show/1">elsewhere</a> and <a href="https://www.goodreads.com/user/show/9">my profile</a>.</p>"#;
    let outcome = rewrite_links(text);
    assert_eq!(outcome.text, text);
    assert!(outcome.matches.is_empty());
}

#[test]
fn repeated_anchor_is_replaced_everywhere() {
    let anchor = r#"<a href="https://www.goodreads.com/book/show/1">It</a>"#;
    let text = format!("{anchor} and again {anchor}");
    let outcome = rewrite_links(&text);
    assert_eq!(outcome.text, "It and again It");
}

#[test]
fn punctuation_in_titles_is_kept_literally() {
    let text = r#"<a href="https://www.goodreads.com/book/show/7">Tom &amp; Jerry: Vol. 2 (Part 1)</a> <a href="https://www.goodreads.com/book/show/8">Don't Panic!</a>"#;
    let links = find_links(text);
    // Parentheses are outside the permitted title characters.
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].visible_text, "Don't Panic!");
    let outcome = rewrite_links(text);
    assert!(outcome.text.ends_with(" Don't Panic!"));
    assert!(outcome.text.starts_with("<a href="));
}

#[test]
fn entity_encoded_text_is_decoded() {
    let text = r#"<a href="https://www.goodreads.com/book/show/7">Tom &amp; Jerry</a>"#;
    assert_eq!(rewrite_links(text).text, "Tom & Jerry");
}

#[test]
fn attribute_order_and_case_do_not_matter() {
    let text = r#"<A title="x" HREF="https://www.goodreads.com/book/show/3">Emma</A>"#;
    assert_eq!(rewrite_links(text).text, "Emma");
}

#[test]
fn directory_is_rewritten_into_sequential_files() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("markdown_files");
    let output = temp.path().join("rewritten");
    fs::create_dir_all(&input).unwrap();
    fs::write(
        input.join("blog_posts10.md"),
        r#"<a href="https://www.goodreads.com/book/show/2">Second</a>"#,
    )
    .unwrap();
    fs::write(
        input.join("blog_posts0.md"),
        r#"<a href="https://www.goodreads.com/book/show/1">First</a>"#,
    )
    .unwrap();
    fs::write(input.join("notes.txt"), "ignored").unwrap();

    let summary = rewrite_directory(&input, &output, &LogProgressSink).unwrap();

    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.links_rewritten, 2);
    assert_eq!(
        fs::read_to_string(output.join("blog_posts1.md")).unwrap(),
        "First"
    );
    assert_eq!(
        fs::read_to_string(output.join("blog_posts2.md")).unwrap(),
        "Second"
    );
}

#[test]
fn rewriting_in_place_reads_everything_first() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("blog_posts0.md"), "zero").unwrap();
    fs::write(dir.join("blog_posts1.md"), "one").unwrap();

    rewrite_directory(dir, dir, &LogProgressSink).unwrap();

    assert_eq!(fs::read_to_string(dir.join("blog_posts1.md")).unwrap(), "zero");
    assert_eq!(fs::read_to_string(dir.join("blog_posts2.md")).unwrap(), "one");
    assert!(!dir.join("blog_posts0.md").exists());
}

#[test]
fn only_the_given_sources_are_rewritten() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("markdown_files");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("blog_posts0.md"), "kept").unwrap();
    fs::write(input.join("blog_posts5.md"), "left over").unwrap();

    let output = temp.path().join("rewritten");
    let sources = [input.join("blog_posts0.md")];
    let summary = rewrite_files(&sources, &output, &LogProgressSink).unwrap();

    assert_eq!(summary.files, vec![output.join("blog_posts1.md")]);
    assert_eq!(fs::read_to_string(&summary.files[0]).unwrap(), "kept");
}

#[test]
fn stale_rewritten_files_are_removed() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("rewritten");
    fs::create_dir_all(&output).unwrap();
    for n in 1..=3 {
        fs::write(output.join(format!("blog_posts{n}.md")), "stale").unwrap();
    }
    fs::write(output.join("README.txt"), "mine").unwrap();
    let source = temp.path().join("blog_posts0.md");
    fs::write(&source, "fresh").unwrap();

    rewrite_files(&[source], &output, &LogProgressSink).unwrap();

    assert_eq!(fs::read_to_string(output.join("blog_posts1.md")).unwrap(), "fresh");
    assert!(!output.join("blog_posts2.md").exists());
    assert!(!output.join("blog_posts3.md").exists());
    assert_eq!(fs::read_to_string(output.join("README.txt")).unwrap(), "mine");
}

#[test]
fn missing_input_dir_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = rewrite_directory(
        &temp.path().join("nope"),
        &temp.path().join("out"),
        &LogProgressSink,
    )
    .unwrap_err();
    assert!(matches!(err, RewriteError::MissingInputDir(_)));
}
