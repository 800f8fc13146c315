//! Tidy tree layout for the organization chart.
//!
//! This module contains pure recursive functions over [`OrgNode`] trees:
//! - Measuring subtree widths bottom-up
//! - Assigning absolute positions top-down
//! - Deriving the bounding box and orthogonal connector geometry
//!
//! These functions are extracted from the rendering code to enable
//! independent testing and clearer separation of domain logic.

use crate::org::OrgNode;

/// Width of a node box in logical canvas units.
pub const NODE_WIDTH: f32 = 220.0;
/// Height of a node box in logical canvas units.
pub const NODE_HEIGHT: f32 = 56.0;
/// Horizontal gap between sibling subtrees.
pub const H_GAP: f32 = 80.0;
/// Vertical gap between tree rows.
pub const V_GAP: f32 = 100.0;

/// Logical canvas width the chart is designed against.
pub const CANVAS_WIDTH: f32 = 1600.0;
/// Logical canvas height the chart is designed against.
pub const CANVAS_HEIGHT: f32 = 900.0;

/// Computes subtree widths bottom-up and stores them on each node.
///
/// A leaf is `NODE_WIDTH` wide; an internal node spans the sum of its
/// children's widths plus one `H_GAP` per gap, floored at `NODE_WIDTH`.
///
/// # Returns
/// The width of `node`'s subtree.
pub fn measure(node: &mut OrgNode) -> f32 {
    if node.children.is_empty() {
        node.width = NODE_WIDTH;
        return node.width;
    }

    let mut width = 0.0;
    for (i, child) in node.children.iter_mut().enumerate() {
        if i > 0 {
            width += H_GAP;
        }
        width += measure(child);
    }
    node.width = width.max(NODE_WIDTH);
    node.width
}

/// Assigns absolute positions top-down.
///
/// The node box is horizontally centered over its own subtree width at
/// `(x, y)`; children are placed left to right starting at the subtree's
/// left edge, each advancing by its own measured width plus `H_GAP`.
/// Single pass, no backtracking. `measure` must have run first.
pub fn layout(node: &mut OrgNode, x: f32, y: f32) {
    node.x = x + node.width / 2.0 - NODE_WIDTH / 2.0;
    node.y = y;

    let mut child_x = x;
    let next_y = y + NODE_HEIGHT + V_GAP;
    for child in &mut node.children {
        layout(child, child_x, next_y);
        child_x += child.width + H_GAP;
    }
}

/// Runs the full layout pass (measure then position from the origin).
pub fn run_layout(root: &mut OrgNode) {
    measure(root);
    layout(root, 0.0, 0.0);
}

/// Bounding box of all laid-out node boxes, in layout space.
pub fn bounding_box(root: &OrgNode) -> egui::Rect {
    let mut bbox = egui::Rect::NOTHING;
    root.visit(&mut |node| {
        let rect = egui::Rect::from_min_size(
            egui::pos2(node.x, node.y),
            egui::vec2(NODE_WIDTH, NODE_HEIGHT),
        );
        bbox = bbox.union(rect);
    });
    bbox
}

/// An orthogonal parent-to-child connector.
///
/// Drawn as vertical-horizontal-vertical: down from the parent's
/// bottom-center to the elbow row, across to the child's column, down to
/// the child's top-center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Parent bottom-center
    pub from: egui::Pos2,
    /// Child top-center
    pub to: egui::Pos2,
    /// Y of the horizontal elbow segment
    pub elbow_y: f32,
}

/// Collects connectors for every parent/child pair, parents first.
pub fn connectors(root: &OrgNode) -> Vec<Connector> {
    let mut out = Vec::new();
    collect_connectors(root, &mut out);
    out
}

fn collect_connectors(node: &OrgNode, out: &mut Vec<Connector>) {
    let from = egui::pos2(node.x + NODE_WIDTH / 2.0, node.y + NODE_HEIGHT);
    for child in &node.children {
        out.push(Connector {
            from,
            to: egui::pos2(child.x + NODE_WIDTH / 2.0, child.y),
            elbow_y: from.y + V_GAP / 2.0,
        });
        collect_connectors(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::company_org_chart;

    fn two_level_tree() -> OrgNode {
        OrgNode::branch("root", "Root", vec![
            OrgNode::leaf("a", "A"),
            OrgNode::leaf("b", "B"),
        ])
    }

    #[test]
    fn measure_two_level_tree() {
        let mut root = two_level_tree();
        assert_eq!(measure(&mut root), NODE_WIDTH * 2.0 + H_GAP); // 520
        assert_eq!(root.children[0].width, NODE_WIDTH);
        assert_eq!(root.children[1].width, NODE_WIDTH);
    }

    #[test]
    fn layout_two_level_tree() {
        let mut root = two_level_tree();
        run_layout(&mut root);

        // Children at x=0 and x=300, root centered over them at x=150
        assert_eq!(root.children[0].x, 0.0);
        assert_eq!(root.children[1].x, NODE_WIDTH + H_GAP);
        assert_eq!(root.x, 150.0);
        assert_eq!(root.y, 0.0);
        assert_eq!(root.children[0].y, NODE_HEIGHT + V_GAP);
    }

    #[test]
    fn single_child_stacks_in_column() {
        let mut root = OrgNode::branch("r", "R", vec![OrgNode::leaf("c", "C")]);
        run_layout(&mut root);
        assert_eq!(root.width, NODE_WIDTH);
        assert_eq!(root.x, root.children[0].x);
    }

    #[test]
    fn every_subtree_at_least_node_width() {
        let mut root = company_org_chart();
        measure(&mut root);
        root.visit(&mut |node| assert!(node.width >= NODE_WIDTH, "{} too narrow", node.id));
    }

    #[test]
    fn parent_width_is_sum_of_children_plus_gaps() {
        let mut root = company_org_chart();
        measure(&mut root);
        root.visit(&mut |node| {
            if node.children.is_empty() {
                assert_eq!(node.width, NODE_WIDTH);
            } else {
                let sum: f32 = node.children.iter().map(|c| c.width).sum::<f32>()
                    + H_GAP * (node.children.len() - 1) as f32;
                assert_eq!(node.width, sum.max(NODE_WIDTH));
            }
        });
    }

    #[test]
    fn siblings_never_overlap() {
        let mut root = company_org_chart();
        run_layout(&mut root);
        root.visit(&mut |node| {
            for pair in node.children.windows(2) {
                let left_end = pair[0].x + NODE_WIDTH;
                assert!(
                    left_end <= pair[1].x,
                    "{} overlaps {}",
                    pair[0].id,
                    pair[1].id
                );
            }
        });
    }

    #[test]
    fn connector_endpoints_and_elbow() {
        let mut root = two_level_tree();
        run_layout(&mut root);
        let edges = connectors(&root);
        assert_eq!(edges.len(), 2);

        let first = edges[0];
        assert_eq!(first.from, egui::pos2(150.0 + NODE_WIDTH / 2.0, NODE_HEIGHT));
        assert_eq!(first.to, egui::pos2(NODE_WIDTH / 2.0, NODE_HEIGHT + V_GAP));
        assert_eq!(first.elbow_y, NODE_HEIGHT + V_GAP / 2.0);
    }

    #[test]
    fn bounding_box_spans_whole_chart() {
        let mut root = company_org_chart();
        run_layout(&mut root);
        let bbox = bounding_box(&root);
        assert_eq!(bbox.min.x, 0.0);
        assert_eq!(bbox.min.y, 0.0);
        assert_eq!(bbox.width(), root.width);
        // Deepest chain: BoD → … → Project Engineers is 8 rows
        assert_eq!(bbox.height(), 7.0 * (NODE_HEIGHT + V_GAP) + NODE_HEIGHT);
    }
}
