use crate::cards::hand::Hand;
use crate::play::seat::Seat;
use crate::rules::combo::Combo;

/// the capability set a game host drives. the host installs the table
/// configuration, relays every seat's decisions as they happen, and asks for
/// recommendations when it is this advisor's turn to decide.
///
/// `tag` is an opaque seat-role string ("L", "N", "P") carried through for
/// logging only.
pub trait Advisor {
    /// install the declarer seat
    fn set_landlord(&mut self, seat: Seat);
    /// install the seat this advisor decides for
    fn set_self(&mut self, seat: Seat);
    /// install the face-down bottom cards the declarer picked up
    fn set_bottom(&mut self, hand: Hand);

    /// record a seat's bid
    fn rob(&mut self, seat: Seat, score: u8);
    /// record a seat's doubling decision
    fn double(&mut self, seat: Seat, multi: u8);
    /// suggest a bid score, 0..=3 where 0 declines
    fn recommend_rob(&mut self) -> u8;
    /// suggest a doubling decision, 0 or 2
    fn recommend_double(&mut self) -> u8;

    /// begin the play phase with every seat's dealt cards
    fn start(&mut self, hands: [Hand; Seat::N]);
    /// release the game and its search state
    fn stop(&mut self);

    /// record a committed move. panics when the seat is out of turn or does
    /// not hold the cards: that is a host desync, caught early.
    fn play(&mut self, tag: &str, seat: Seat, combo: Combo);
    /// recommend a move for the seat whose turn it is
    fn recommend_play(&mut self, tag: &str) -> Combo;
}
