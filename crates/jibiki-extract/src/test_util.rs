use kuchiki::NodeRef;
use kuchiki::traits::*;

pub(crate) fn parse(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html.to_string())
}

/// Parse a fixture and return its head/body node pair.
pub(crate) fn head_body(html: &str) -> (NodeRef, NodeRef) {
    let doc = parse(html);
    let head = doc
        .select_first("div.NetDicHead")
        .expect("fixture has a NetDicHead")
        .as_node()
        .clone();
    let body = doc
        .select_first("div.NetDicBody")
        .expect("fixture has a NetDicBody")
        .as_node()
        .clone();
    (head, body)
}
