use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Elements whose text is never human-readable content.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Strips all markup and keeps text nodes in document order.
///
/// Anchor text is kept. Malformed markup is handled best-effort by the HTML5
/// parser; this never fails.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::with_capacity(html.len());
    collect_text(fragment.tree.root(), &mut text);
    text
}

/// Per-post mode.
pub fn normalize_posts<S: AsRef<str>>(posts: &[S]) -> Vec<String> {
    posts.iter().map(|post| html_to_text(post.as_ref())).collect()
}

/// Single-string mode: posts joined by one space.
pub fn normalize_joined<S: AsRef<str>>(posts: &[S]) -> String {
    normalize_posts(posts).join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) if SKIPPED_ELEMENTS.contains(&element.name()) => {}
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}
