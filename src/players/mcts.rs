use super::advisor::Advisor;
use crate::cards::hand::Hand;
use crate::mcts::policy::UniformPolicy;
use crate::mcts::rollout::RandomRollout;
use crate::mcts::rollout::Rollout;
use crate::mcts::tree::Tree;
use crate::play::action::Action;
use crate::play::seat::Seat;
use crate::play::state::State;
use crate::rules::combo::Combo;
use crate::rules::rules::Rules;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// exploration constant in the signed UCT score
const C_PARAM: f64 = 30.0;
/// rollout share of the leaf value mix; 1 is rollout-only
const ALPHA: f64 = 1.0;

/// search budget scaled to the cards still on the table
fn budget(remaining: usize) -> usize {
    remaining * remaining * 2 + 100
}

/// an advisor that grows a UCT search tree over the live game. the tree
/// advances as real moves come in; recommendations run the search and
/// concretize the winning child's combo against the advisor's live mirror
/// of each seat's suited cards.
///
/// bidding and doubling are random placeholders drawn from the advisor's
/// own seedable generator.
pub struct MctsAdvisor {
    landlord: Seat,
    hero: Seat,
    bottom: Hand,
    scores: [u8; Seat::N],
    doubles: [u8; Seat::N],
    hands: [Hand; Seat::N],
    tree: Option<Tree>,
    policy: UniformPolicy,
    rollout: RandomRollout,
    rng: SmallRng,
}

impl MctsAdvisor {
    pub fn new(rules: Rules) -> Self {
        Self::with_rng(rules, SmallRng::from_entropy())
    }
    /// reproducible advisor for tests and replays
    pub fn seeded(rules: Rules, seed: u64) -> Self {
        Self::with_rng(rules, SmallRng::seed_from_u64(seed))
    }
    fn with_rng(rules: Rules, rng: SmallRng) -> Self {
        Self {
            landlord: Seat::default(),
            hero: Seat::default(),
            bottom: Hand::empty(),
            scores: [0; Seat::N],
            doubles: [0; Seat::N],
            hands: [Hand::empty(); Seat::N],
            tree: None,
            policy: UniformPolicy::new(rules.clone()),
            rollout: RandomRollout::new(rules),
            rng,
        }
    }

    pub fn hero(&self) -> Seat {
        self.hero
    }
    /// the advisor's live mirror of a seat's suited cards
    pub fn hand(&self, seat: Seat) -> Hand {
        self.hands[seat.index()]
    }
}

impl Default for MctsAdvisor {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Advisor for MctsAdvisor {
    fn set_landlord(&mut self, seat: Seat) {
        self.landlord = seat;
    }
    fn set_self(&mut self, seat: Seat) {
        self.hero = seat;
    }
    fn set_bottom(&mut self, hand: Hand) {
        self.bottom = hand;
    }

    fn rob(&mut self, seat: Seat, score: u8) {
        self.scores[seat.index()] = score;
    }
    fn double(&mut self, seat: Seat, multi: u8) {
        self.doubles[seat.index()] = multi;
    }
    fn recommend_rob(&mut self) -> u8 {
        self.rng.gen_range(0..4)
    }
    fn recommend_double(&mut self) -> u8 {
        self.rng.gen_range(0..2) * 2
    }

    fn start(&mut self, hands: [Hand; Seat::N]) {
        self.hands = hands;
        // attribute the root to the seat before the declarer so that the
        // first expansion is the declarer's lead
        self.tree = Some(Tree::new(
            State::new(hands, self.landlord),
            self.landlord.prev(),
        ));
        log::info!("{} starts as {}", self.hero, self.hero.role(self.landlord));
    }
    fn stop(&mut self) {
        self.tree = None;
    }

    fn play(&mut self, tag: &str, seat: Seat, combo: Combo) {
        log::debug!("[{}] {} plays {}", tag, seat, combo);
        let tree = self.tree.as_mut().expect("start before play");
        let expected = tree.root().spot().action().seat().next();
        assert!(
            seat == expected,
            "expected {} to act, got {}",
            expected,
            seat
        );
        tree.advance(Action::new(seat, combo, 0.0));
        assert!(
            self.hands[seat.index()].remove(combo.cards()),
            "{} does not hold {}",
            seat,
            combo
        );
    }

    fn recommend_play(&mut self, tag: &str) -> Combo {
        let tree = self.tree.as_mut().expect("start before recommending");
        let iters = budget(tree.root().spot().state().remaining());
        if iters == 0 {
            return Combo::pass();
        }
        let choice = tree
            .search(
                &self.policy,
                Some(&self.rollout as &dyn Rollout),
                ALPHA,
                C_PARAM,
                iters,
                &mut self.rng,
            )
            .expect("search grows a child for a live position");
        let action = tree.at(choice).spot().action();
        log::debug!(
            "[{}] recommending {} after {} iterations",
            tag,
            action,
            iters
        );
        // the tree works on normalized cards; pick real suits back out of
        // the live hand
        let mut live = self.hands[action.seat().index()];
        let body = live.find(action.combo().body());
        live.remove(body);
        let kicker = live.find(action.combo().kicker());
        action.combo().realize(body, kicker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt() -> MctsAdvisor {
        let mut advisor = MctsAdvisor::seeded(Rules::default(), 42);
        advisor.set_landlord(Seat::from(0));
        advisor.set_self(Seat::from(0));
        advisor.start([
            Hand::try_from("3s").unwrap(),
            Hand::try_from("4s 4h").unwrap(),
            Hand::try_from("5s 6h").unwrap(),
        ]);
        advisor
    }

    #[test]
    fn recommendation_is_held_and_suited() {
        let mut advisor = dealt();
        let combo = advisor.recommend_play("L");
        assert!(advisor.hand(Seat::from(0)).contains(combo.cards()));
        assert_eq!(combo.cards().size(), combo.size());
    }

    #[test]
    fn forced_endgame_recommendation() {
        let mut advisor = dealt();
        let combo = advisor.recommend_play("L");
        assert_eq!(combo.cards(), Hand::try_from("3s").unwrap());
    }

    #[test]
    fn playing_updates_the_mirror() {
        let mut advisor = dealt();
        let combo = advisor.recommend_play("L");
        advisor.play("L", Seat::from(0), combo);
        assert!(advisor.hand(Seat::from(0)).is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_turn_play_panics() {
        let mut advisor = dealt();
        let combo = Combo::shaped(crate::rules::category::Category::Single.shape())
            .realize(Hand::try_from("4s").unwrap(), Hand::empty());
        advisor.play("N", Seat::from(1), combo);
    }

    #[test]
    #[should_panic]
    fn unheld_cards_panic() {
        let mut advisor = dealt();
        let combo = Combo::shaped(crate::rules::category::Category::Single.shape())
            .realize(Hand::try_from("9s").unwrap(), Hand::empty());
        advisor.play("L", Seat::from(0), combo);
    }

    #[test]
    fn bid_and_double_are_in_range() {
        let mut advisor = dealt();
        for _ in 0..64 {
            assert!(advisor.recommend_rob() <= 3);
            assert!(matches!(advisor.recommend_double(), 0 | 2));
        }
        advisor.rob(Seat::from(1), 3);
        advisor.double(Seat::from(2), 2);
        assert_eq!(advisor.scores[1], 3);
        assert_eq!(advisor.doubles[2], 2);
    }

    #[test]
    fn stop_releases_the_tree() {
        let mut advisor = dealt();
        advisor.stop();
        assert!(advisor.tree.is_none());
    }
}
