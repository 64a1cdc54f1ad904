use super::policy::Policy;
use super::policy::UniformPolicy;
use super::tree::Tree;
use crate::rules::rules::Rules;
use crate::Utility;
use petgraph::graph::NodeIndex;
use rand::rngs::SmallRng;
use rand::Rng;

/// how a playout estimates a leaf: simulate to the end of the game and score
/// the result from the perspective of the seat to move at the root.
pub trait Rollout {
    fn simulate(
        &self,
        tree: &mut Tree,
        root: NodeIndex,
        leaf: NodeIndex,
        rng: &mut SmallRng,
    ) -> Utility;
}

/// expand-one-step-at-random playout. children are created lazily as the
/// walk descends, preferring unvisited ones; the terminal value is the stake
/// multiplier (doubled on a spring), signed by whether the winner is allied
/// with the root mover.
pub struct RandomRollout {
    policy: UniformPolicy,
}

impl RandomRollout {
    pub fn new(rules: Rules) -> Self {
        Self {
            policy: UniformPolicy::new(rules),
        }
    }
}

impl Default for RandomRollout {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Rollout for RandomRollout {
    fn simulate(
        &self,
        tree: &mut Tree,
        root: NodeIndex,
        leaf: NodeIndex,
        rng: &mut SmallRng,
    ) -> Utility {
        let landlord = tree.at(leaf).spot().state().landlord();
        let mover = tree.at(root).spot().action().seat().next();
        let mut curr = leaf;
        while !tree.at(curr).spot().state().gameover() {
            let children = tree.children(curr);
            if children.is_empty() {
                let (actions, _, hint) = self.policy.evaluate(tree, curr, rng);
                let spawned = actions
                    .into_iter()
                    .map(|action| tree.spawn(curr, action))
                    .collect::<Vec<_>>();
                curr = match hint {
                    Some(index) if index < spawned.len() => spawned[index],
                    _ => spawned[rng.gen_range(0..spawned.len())],
                };
            } else {
                let unvisited = children
                    .iter()
                    .copied()
                    .filter(|&child| tree.at(child).spot().n() < 1.0)
                    .collect::<Vec<_>>();
                curr = match unvisited.len() {
                    0 => children[rng.gen_range(0..children.len())],
                    n => unvisited[rng.gen_range(0..n)],
                };
            }
        }
        let state = *tree.at(curr).spot().state();
        let winner = state.winner().expect("terminal state has a winner");
        let mut value = state.multi() as Utility;
        if state.is_spring(winner) {
            value *= 2.0;
        }
        if winner.allied(landlord, mover) {
            value
        } else {
            -value
        }
    }
}
