use super::seat::Seat;
use super::state::State;
use crate::rules::combo::Combo;
use crate::Probability;

/// a seat playing (or passing) a combo, annotated with the prior the policy
/// assigned it. equality ignores the prior.
#[derive(Debug, Default, Clone, Copy)]
pub struct Action {
    seat: Seat,
    combo: Combo,
    prior: Probability,
}

impl Action {
    pub fn new(seat: Seat, combo: Combo, prior: Probability) -> Self {
        Self { seat, combo, prior }
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn combo(&self) -> Combo {
        self.combo
    }
    pub fn prior(&self) -> Probability {
        self.prior
    }

    /// the state after this action: cards shed in normalized form, the
    /// actor's side counter bumped (passes count), the stake doubled on a
    /// bomb or rocket. the seat cursor advances even on a pass.
    pub fn apply(&self, from: &State) -> State {
        let mut to = *from;
        let shed = self.combo.cards().normalize();
        let explosive = self.combo.is_bomb() || self.combo.is_rocket();
        to.play(self.seat, shed, explosive);
        to
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.seat == other.seat && self.combo == other.combo
    }
}
impl Eq for Action {}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {:.4}", self.seat, self.combo, self.prior)
    }
}
