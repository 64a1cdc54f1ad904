use super::node::Node;
use super::policy::Policy;
use super::rollout::Rollout;
use super::spot::Spot;
use crate::play::action::Action;
use crate::play::seat::Seat;
use crate::play::state::State;
use crate::Utility;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::Direction;
use rand::rngs::SmallRng;
use rand::Rng;

/// the partial game tree the search grows, rooted at the live position.
///
/// selection descends by signed UCT: a child's q + u counts for the seat to
/// move at the root when the child's actor is its ally, against it
/// otherwise. descent stops at terminal states and at any node with an
/// unvisited child. expansion asks the policy for legal actions; rollouts
/// play out to terminal; backup refreshes n, q, and u along the leaf-to-root
/// path.
///
/// committing a real move advances the root: the matching child (synthesized
/// if the search never spawned it) becomes the new root, every sibling
/// subtree is dropped, and a shallow copy of the old root is kept as the new
/// root's parent so the policy can still read the preceding move.
pub struct Tree {
    graph: DiGraph<Spot, ()>,
    root: NodeIndex,
}

impl Tree {
    /// root the tree at a position, attributing it to the seat whose action
    /// produced it: the first expansion belongs to `actor.next()`
    pub fn new(state: State, actor: Seat) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(Spot::new(
            state,
            Action::new(actor, crate::rules::combo::Combo::pass(), 0.0),
            0,
        ));
        Self { graph, root }
    }

    pub fn root(&self) -> Node {
        Node::from(self.root, &self.graph)
    }
    pub fn at(&self, index: NodeIndex) -> Node {
        Node::from(index, &self.graph)
    }
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    fn spot(&self, index: NodeIndex) -> &Spot {
        self.graph.node_weight(index).expect("valid node index")
    }
    fn spot_mut(&mut self, index: NodeIndex) -> &mut Spot {
        self.graph.node_weight_mut(index).expect("valid node index")
    }
    fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(index, Direction::Incoming)
            .next()
    }
    pub(crate) fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .collect::<Vec<_>>();
        // neighbors iterate newest-first; restore insertion order
        children.reverse();
        children
    }

    /// append one child reached by applying the action to the parent's state
    pub(crate) fn spawn(&mut self, parent: NodeIndex, action: Action) -> NodeIndex {
        let spot = Spot::new(
            action.apply(self.spot(parent).state()),
            action,
            self.spot(parent).depth() + 1,
        );
        let child = self.graph.add_node(spot);
        self.graph.add_edge(parent, child, ());
        child
    }

    /// run the full select → expand → simulate → backup loop and return the
    /// most-visited root child (jittered tie-break), or None if the root
    /// never grew one
    pub fn search(
        &mut self,
        policy: &dyn Policy,
        rollout: Option<&dyn Rollout>,
        alpha: f64,
        c: f64,
        iters: usize,
        rng: &mut SmallRng,
    ) -> Option<NodeIndex> {
        for _ in 0..iters {
            let root = self.root;
            let leaf = self.traverse();
            let (leaf, shallow) = self.expand(leaf, policy, rng);
            let deep = match rollout {
                Some(rollout) => rollout.simulate(self, root, leaf, rng),
                None => 0.0,
            };
            let value = alpha * deep + (1.0 - alpha) * shallow;
            self.backup(leaf, value, c);
        }
        log::debug!("searched {} nodes", self.size());
        let mut best: Option<(NodeIndex, f64)> = None;
        for child in self.children(self.root) {
            let jittered = self.spot(child).n() + rng.gen::<f64>();
            if best.map(|(_, n)| jittered > n).unwrap_or(true) {
                best = Some((child, jittered));
            }
        }
        best.map(|(index, _)| index)
    }

    /// commit a real move, making its child the new root. siblings and their
    /// subtrees are dropped; the old root survives as a shallow parent copy.
    pub fn advance(&mut self, action: Action) {
        let chosen = self
            .children(self.root)
            .into_iter()
            .find(|&child| self.spot(child).action() == action);
        let mut graph = DiGraph::new();
        let previous = graph.add_node(*self.spot(self.root));
        let root = match chosen {
            Some(child) => self.transplant(child, previous, &mut graph),
            None => {
                let spot = Spot::new(
                    action.apply(self.spot(self.root).state()),
                    action,
                    self.spot(self.root).depth() + 1,
                );
                let node = graph.add_node(spot);
                graph.add_edge(previous, node, ());
                node
            }
        };
        self.graph = graph;
        self.root = root;
    }

    /// copy the subtree under `from` into the new graph below `onto`
    fn transplant(
        &self,
        from: NodeIndex,
        onto: NodeIndex,
        graph: &mut DiGraph<Spot, ()>,
    ) -> NodeIndex {
        let to = graph.add_node(*self.spot(from));
        graph.add_edge(onto, to, ());
        for child in self.children(from) {
            self.transplant(child, to, graph);
        }
        to
    }

    /// descend by signed q + u until a terminal state, a childless node, or
    /// a node with an unvisited child
    fn traverse(&self) -> NodeIndex {
        let mover = self.spot(self.root).action().seat().next();
        let mut curr = self.root;
        loop {
            if self.spot(curr).state().gameover() {
                break;
            }
            let children = self.children(curr);
            if children.is_empty() {
                break;
            }
            match self.select(curr, &children, mover) {
                Some(next) => curr = next,
                None => break,
            }
        }
        curr
    }

    /// the child maximizing q + u signed by alliance with the root mover, or
    /// None when any child is still unvisited
    fn select(&self, parent: NodeIndex, children: &[NodeIndex], mover: Seat) -> Option<NodeIndex> {
        let landlord = self.spot(parent).state().landlord();
        let actor = self.spot(parent).action().seat().next();
        let sign = if actor.allied(landlord, mover) {
            1.0
        } else {
            -1.0
        };
        let mut best: Option<(NodeIndex, f64)> = None;
        for &child in children {
            let spot = self.spot(child);
            if spot.n() < 1.0 {
                return None;
            }
            let score = sign * (spot.q() + spot.u());
            if best.map(|(_, b)| score > b).unwrap_or(true) {
                best = Some((child, score));
            }
        }
        best.map(|(index, _)| index)
    }

    /// grow a leaf: spawn one child per policy action and step into one at
    /// random. a terminal leaf (no actions) is returned as-is with the
    /// policy's value. revisited leaves prefer an unvisited child.
    fn expand(
        &mut self,
        leaf: NodeIndex,
        policy: &dyn Policy,
        rng: &mut SmallRng,
    ) -> (NodeIndex, Utility) {
        let children = self.children(leaf);
        if children.is_empty() {
            let (actions, value, _) = policy.evaluate(self, leaf, rng);
            if actions.is_empty() {
                return (leaf, value);
            }
            let spawned = actions
                .into_iter()
                .map(|action| self.spawn(leaf, action))
                .collect::<Vec<_>>();
            (spawned[rng.gen_range(0..spawned.len())], value)
        } else {
            let unvisited = children
                .iter()
                .copied()
                .filter(|&child| self.spot(child).n() < 1.0)
                .collect::<Vec<_>>();
            match unvisited.len() {
                0 => (children[rng.gen_range(0..children.len())], 0.0),
                n => (unvisited[rng.gen_range(0..n)], 0.0),
            }
        }
    }

    /// propagate one observed value from the leaf up to (and including) the
    /// root. the root's exploration bonus is left alone.
    fn backup(&mut self, leaf: NodeIndex, value: Utility, c: f64) {
        let mut curr = leaf;
        while curr != self.root {
            let parent = self.parent(curr).expect("non-root nodes have parents");
            let parent_n = self.spot(parent).n();
            let spot = self.spot_mut(curr);
            spot.visit(value);
            spot.explore(c, parent_n);
            curr = parent;
        }
        self.spot_mut(self.root).visit(value);
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "tree of {} rooted at {}",
            self.size(),
            self.spot(self.root)
        )
    }
}
