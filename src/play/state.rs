use super::seat::Seat;
use crate::cards::hand::Hand;

/// full-information game state: every seat's remaining cards in normalized
/// form, the declarer seat, the running stake multiplier, and how many times
/// each side has acted. the winner is whichever seat empties first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    hands: [Hand; Seat::N],
    landlord: Seat,
    multi: u16,
    landlord_plays: u8,
    farmer_plays: u8,
}

impl State {
    pub fn new(hands: [Hand; Seat::N], landlord: Seat) -> Self {
        Self {
            hands: hands.map(|hand| hand.normalize()),
            landlord,
            multi: 1,
            landlord_plays: 0,
            farmer_plays: 0,
        }
    }

    pub fn hand(&self, seat: Seat) -> Hand {
        self.hands[seat.index()]
    }
    pub fn landlord(&self) -> Seat {
        self.landlord
    }
    pub fn multi(&self) -> u16 {
        self.multi
    }
    /// total cards still on the table
    pub fn remaining(&self) -> usize {
        self.hands.iter().map(Hand::size).sum()
    }

    pub fn winner(&self) -> Option<Seat> {
        Seat::all().find(|seat| self.hand(*seat).is_empty())
    }
    pub fn gameover(&self) -> bool {
        self.winner().is_some()
    }
    /// a sweep: the landlord wins before any farmer acted, or the farmers
    /// win with the landlord having led at most once. doubles the payout.
    pub fn is_spring(&self, winner: Seat) -> bool {
        if winner == self.landlord {
            self.farmer_plays == 0
        } else {
            self.landlord_plays <= 1
        }
    }

    /// record one act: shed the cards, bump the actor's side counter, and
    /// double the stake when the move explodes
    pub(crate) fn play(&mut self, seat: Seat, cards: Hand, explosive: bool) {
        self.hands[seat.index()].remove(cards);
        self.hands[seat.index()] = self.hands[seat.index()].normalize();
        if seat == self.landlord {
            self.landlord_plays += 1;
        } else {
            self.farmer_plays += 1;
        }
        if explosive {
            self.multi <<= 1;
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for seat in Seat::all() {
            if seat.index() > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", seat, self.hand(seat).unsuited())?;
        }
        Ok(())
    }
}
