use super::spot::Spot;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::Direction;

/// a lightweight handle into the search tree: an index plus a reference to
/// the underlying graph. cheap to Copy, navigation only; mutation goes
/// through the Tree.
#[derive(Clone, Copy)]
pub struct Node<'tree> {
    index: NodeIndex,
    graph: &'tree DiGraph<Spot, ()>,
}

impl<'tree> Node<'tree> {
    pub fn from(index: NodeIndex, graph: &'tree DiGraph<Spot, ()>) -> Self {
        Self { index, graph }
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn spot(&self) -> &'tree Spot {
        self.graph
            .node_weight(self.index)
            .expect("valid node index")
    }
    /// a handle at a different index in the same tree
    pub fn at(&self, index: NodeIndex) -> Node<'tree> {
        Self::from(index, self.graph)
    }
    pub fn parent(&self) -> Option<Node<'tree>> {
        self.graph
            .neighbors_directed(self.index, Direction::Incoming)
            .next()
            .map(|index| self.at(index))
    }
    /// direct children in spawn order
    pub fn children(&self) -> Vec<Node<'tree>> {
        let mut children = self
            .graph
            .neighbors_directed(self.index, Direction::Outgoing)
            .map(|index| self.at(index))
            .collect::<Vec<_>>();
        // neighbors iterate newest-first; restore insertion order
        children.reverse();
        children
    }
    pub fn is_leaf(&self) -> bool {
        self.graph
            .neighbors_directed(self.index, Direction::Outgoing)
            .next()
            .is_none()
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "N{} {}", self.index.index(), self.spot())
    }
}
