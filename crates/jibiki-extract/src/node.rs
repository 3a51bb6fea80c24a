use kuchiki::NodeRef;

/// First descendant of `scope` matching `selector`, in document order.
///
/// The scope node itself is never returned, even when it matches, so a
/// recursive decomposition over nodes that match their own selector still
/// terminates.
pub(crate) fn find_descendant(scope: &NodeRef, selector: &str) -> Option<NodeRef> {
    let hits = scope.select(selector).ok()?;
    hits.map(|hit| hit.as_node().clone())
        .find(|node| node != scope)
}

pub(crate) fn has_descendant(scope: &NodeRef, selector: &str) -> bool {
    find_descendant(scope, selector).is_some()
}

/// Text content with surrounding whitespace removed.
pub(crate) fn trimmed_text(node: &NodeRef) -> String {
    node.text_contents().trim().to_string()
}
