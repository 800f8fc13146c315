//! Organization chart model.
//!
//! The org chart is a plain recursive tree: every node has a stable id, a
//! display label, and an ordered list of owned children. The tree is defined
//! once at startup and never restructured; the layout pass fills in the
//! `width`/`x`/`y` fields afterwards.

/// A single box in the organization chart.
///
/// `width`, `x` and `y` are layout outputs in logical canvas coordinates
/// (see [`crate::layout`]); they are zero until a layout pass has run.
#[derive(Debug, Clone)]
pub struct OrgNode {
    /// Stable identifier, unique across the tree
    pub id: String,
    /// Text shown inside the node box
    pub label: String,
    /// Direct reports, in display order (left to right)
    pub children: Vec<OrgNode>,
    /// Computed subtree width (≥ the node box width)
    pub width: f32,
    /// Computed top-left X in layout space
    pub x: f32,
    /// Computed top-left Y in layout space
    pub y: f32,
}

impl OrgNode {
    /// Creates a leaf node.
    pub fn leaf(id: &str, label: &str) -> Self {
        Self::branch(id, label, Vec::new())
    }

    /// Creates a node with children.
    pub fn branch(id: &str, label: &str, children: Vec<OrgNode>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            children,
            width: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Returns true if this node has no reports.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree (including self).
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OrgNode::count).sum::<usize>()
    }

    /// Pre-order traversal over the subtree.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a OrgNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

/// Builds the company organization chart.
///
/// Returned by value so the caller can run the layout pass over it; the
/// structure itself is fixed.
pub fn company_org_chart() -> OrgNode {
    OrgNode::branch("BoD", "Board of Directors", vec![
        OrgNode::branch("Chairman", "Chairman", vec![
            OrgNode::branch("ExecVice", "Executive Vice", vec![
                OrgNode::branch("MD", "Managing Director", vec![
                    OrgNode::branch("DMD", "Deputy MD", vec![
                        OrgNode::branch("ConstrMgr", "Construction Manager", vec![
                            OrgNode::branch("ProjMgrs", "Project Managers", vec![
                                OrgNode::leaf("ProjEng", "Project Engineers"),
                            ]),
                        ]),
                        OrgNode::branch("SafetyMgr", "Safety Manager", vec![
                            OrgNode::branch("SeniorSafety", "Senior Safety", vec![
                                OrgNode::leaf("SafetyOff", "Safety Officers"),
                            ]),
                        ]),
                    ]),
                    OrgNode::branch("CD", "Contracts Director", vec![
                        OrgNode::leaf("CntrMgr", "Contract Manager"),
                        OrgNode::leaf("BizDev", "Business Devp."),
                        OrgNode::branch("QC", "Q.C. Manager", vec![
                            OrgNode::leaf("CostControl", "Cost Control"),
                        ]),
                        OrgNode::leaf("DesignEng", "Design Engineer"),
                        OrgNode::leaf("TenderEng", "Tendering Engineer"),
                    ]),
                    OrgNode::branch("PD", "Plant Director", vec![
                        OrgNode::branch("PlantMgr", "Plant Manager", vec![
                            OrgNode::branch("AsstPlantMgr", "Ass. Plant Manager", vec![
                                OrgNode::leaf("PlantEng", "Plant Engineers"),
                            ]),
                        ]),
                    ]),
                    OrgNode::branch("DFA", "Director Fin. & Admin.", vec![
                        OrgNode::branch("ProcMgr", "Procurement Manager", vec![
                            OrgNode::branch("Overseas", "Overseas Procurement", vec![
                                OrgNode::leaf("LocalProc", "Local Procurement"),
                            ]),
                        ]),
                        OrgNode::leaf("AuditMgr", "Audit Manager"),
                        OrgNode::leaf("FinMgr", "Finance Manager"),
                        OrgNode::leaf("AdminMgr", "Admin. Manager"),
                    ]),
                    OrgNode::branch("DC", "Director Corp.", vec![
                        OrgNode::branch("PRMgr", "P.R. Manager", vec![
                            OrgNode::branch("PROff", "P.R. Officer", vec![
                                OrgNode::leaf("LegalOff", "Legal Officer"),
                            ]),
                        ]),
                    ]),
                ]),
            ]),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_chart_shape() {
        let root = company_org_chart();
        assert_eq!(root.id, "BoD");
        assert_eq!(root.count(), 27);

        // Ids are unique across the tree
        let mut ids = Vec::new();
        root.visit(&mut |n| ids.push(n.id.clone()));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn visit_is_preorder() {
        let root = OrgNode::branch("r", "Root", vec![
            OrgNode::leaf("a", "A"),
            OrgNode::branch("b", "B", vec![OrgNode::leaf("c", "C")]),
        ]);
        let mut order = Vec::new();
        root.visit(&mut |n| order.push(n.id.as_str()));
        assert_eq!(order, ["r", "a", "b", "c"]);
    }
}
