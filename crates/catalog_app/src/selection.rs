//! Demo selection for a catalog node

use crate::node::DemoNode;

/// Leaf examples under `node`, primary demos first
///
/// Both groups keep the order the children were registered in.
pub fn select_demos(node: &DemoNode) -> Vec<&DemoNode> {
    let (mut primary, rest): (Vec<_>, Vec<_>) = node
        .children()
        .iter()
        .filter(|child| child.is_example())
        .partition(|child| child.is_primary_demo());
    primary.extend(rest);
    primary
}

/// Description shown for a node: the first selected demo's, or empty
pub fn component_description(node: &DemoNode) -> String {
    select_demos(node)
        .first()
        .and_then(|demo| demo.example_description())
        .unwrap_or_default()
        .to_string()
}
