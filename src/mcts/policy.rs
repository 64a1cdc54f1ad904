use super::tree::Tree;
use crate::play::action::Action;
use crate::rules::combo::Combo;
use crate::rules::matcher::Matcher;
use crate::rules::rules::Rules;
use crate::Utility;
use petgraph::graph::NodeIndex;
use rand::rngs::SmallRng;
use rand::Rng;

/// how a leaf grows children: produce the legal actions with priors summing
/// to one, a position evaluation, and a suggested index for playouts to step
/// into first. terminal leaves produce no actions.
pub trait Policy {
    fn evaluate(
        &self,
        tree: &Tree,
        node: NodeIndex,
        rng: &mut SmallRng,
    ) -> (Vec<Action>, Utility, Option<usize>);
}

/// enumerates every legal response and spreads priors by combo weight; when
/// every weight is zero (the default enumeration) the priors are uniform.
pub struct UniformPolicy {
    rules: Rules,
    limit: usize,
}

impl UniformPolicy {
    /// candidate cap per evaluation
    const LIMIT: usize = 256;

    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            limit: Self::LIMIT,
        }
    }
}

impl Default for UniformPolicy {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Policy for UniformPolicy {
    fn evaluate(
        &self,
        tree: &Tree,
        node: NodeIndex,
        rng: &mut SmallRng,
    ) -> (Vec<Action>, Utility, Option<usize>) {
        let here = tree.at(node);
        let state = here.spot().state();
        if state.gameover() {
            return (Vec::new(), 0.0, None);
        }
        let seat = here.spot().action().seat().next();
        let prev2 = here.spot().action().combo();
        let prev1 = here
            .parent()
            .map(|parent| parent.spot().action().combo())
            .unwrap_or_else(Combo::pass);
        let combos = Matcher::new(state.hand(seat), &self.rules).matches(&prev1, &prev2, self.limit);
        let total = combos.iter().map(|combo| combo.weight() as f64).sum::<f64>();
        let added = if total == 0.0 { 1.0 } else { 0.0 };
        let denom = total + added * combos.len() as f64;
        let actions = combos
            .into_iter()
            .map(|combo| {
                let prior = (combo.weight() as f64 + added) / denom;
                Action::new(seat, combo, prior)
            })
            .collect::<Vec<_>>();
        let hint = match actions.len() {
            0 => None,
            n => Some(rng.gen_range(0..n)),
        };
        (actions, 0.0, hint)
    }
}
