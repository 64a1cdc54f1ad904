use super::block::Block;
use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// Hand represents an unordered set of Cards packed into a u64. each of the
/// 15 ranks owns a 4-bit block holding its four suit bits; joker blocks only
/// ever use their low bit; the top 4 bits are reserved. cheap to Copy, no
/// heap allocation, and all the set algebra is word arithmetic.
///
/// [♠3, ♥3, #]
/// xxx 0..01 0..0 0011
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// bits a Hand may store
    pub const fn mask() -> u64 {
        0x0FFF_FFFF_FFFF_FFFF
    }
    /// the full 54-card deck
    pub const fn deck() -> Self {
        Self(0x011F_FFFF_FFFF_FFFF)
    }
    /// all four cards of one suited rank
    pub fn bomb(rank: Rank) -> Self {
        Self(0xF << (u8::from(rank) << 2))
    }
    /// both jokers
    pub const fn rocket() -> Self {
        Self(1 << 52 | 1 << 56)
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, other: Hand) -> bool {
        self.0 & other.0 == other.0
    }
    pub fn has(&self, card: Card) -> bool {
        self.contains(Hand::from(card))
    }
    pub fn count(&self, rank: Rank) -> usize {
        self.block(rank).count()
    }
    pub fn block(&self, rank: Rank) -> Block {
        Block::from((self.0 >> (u8::from(rank) << 2)) as u8)
    }
    pub fn min_rank(&self) -> Option<Rank> {
        match self.size() {
            0 => None,
            _ => Some(Rank::from((self.0.trailing_zeros() >> 2) as u8)),
        }
    }

    pub fn add(&mut self, other: Hand) {
        self.0 |= other.0;
    }
    /// set difference. refuses (and leaves self untouched) unless sub ⊆ self
    pub fn remove(&mut self, sub: Hand) -> bool {
        if self.0 & sub.0 != sub.0 {
            return false;
        }
        self.0 &= !sub.0;
        true
    }
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// move up to n cards of the given rank out of `from` into self, skipping
    /// cards already held. returns exactly what was added, or empty (and no
    /// mutation) when fewer than n were available.
    pub fn draw_rank(&mut self, from: Hand, rank: Rank, n: usize) -> Hand {
        let base = (u8::from(rank) as u64) << 2;
        let mut need = n;
        let mut added = 0u64;
        for suit in 0..4 {
            if need == 0 {
                break;
            }
            let bit = 1u64 << (base + suit);
            if from.0 & bit != 0 && self.0 & bit == 0 {
                added |= bit;
                need -= 1;
            }
        }
        if need > 0 {
            return Self::empty();
        }
        self.0 |= added;
        Self(added)
    }

    /// realise a rank-count pattern against this hand, drawing whatever suits
    /// are actually held. used to turn a normalized selection back into
    /// concrete cards.
    pub fn find(&self, target: Hand) -> Hand {
        let mut result = Hand::empty();
        let mut avail = *self;
        for (rank, block) in self::blocks(target) {
            let n = block.count();
            if n > 0 {
                let added = result.draw_rank(avail, rank, n);
                avail.remove(added);
            }
        }
        result
    }

    /// collapse each rank block to its low-justified form, erasing suit
    /// identity while preserving counts. idempotent; two hands with the same
    /// rank multiset normalize identically.
    pub fn normalize(&self) -> Hand {
        let mut out = 0u64;
        for i in 0..Rank::N {
            let count = ((self.0 >> (i << 2)) & 0xF).count_ones();
            out |= ((1u64 << count) - 1) << (i << 2);
        }
        Self(out)
    }

    pub fn is_rocket(&self) -> bool {
        *self == Self::rocket()
    }
    pub fn is_bomb(&self) -> bool {
        match self.min_rank() {
            Some(rank) => *self == Self::bomb(rank),
            None => false,
        }
    }

    /// per-rank card counts, low rank first
    pub fn counts(&self) -> [u8; Rank::N] {
        let mut out = [0u8; Rank::N];
        for (rank, block) in self::blocks(*self) {
            out[u8::from(rank) as usize] = block.count() as u8;
        }
        out
    }
    /// one rank per card held, low to high
    pub fn ranks(&self) -> Vec<Rank> {
        self.into_iter().map(|card| card.rank()).collect()
    }
    /// host wire codes, one per card
    pub fn codes(&self) -> Vec<u8> {
        self.into_iter().map(u8::from).collect()
    }

    /// rank-only rendering for normalized sets
    pub fn unsuited(&self) -> String {
        let mut out = String::from("[");
        for (i, rank) in self.ranks().into_iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&rank.to_string());
        }
        out.push(']');
        out
    }

    /// box-drawn strip of the ranks held, for playout logs
    pub fn banner(&self) -> String {
        let mut head = String::from("┏");
        let mut body = String::from("┃");
        let mut foot = String::from("┗");
        for (i, rank) in self.ranks().into_iter().enumerate() {
            if i > 0 {
                head.push('┳');
                body.push('┃');
                foot.push('┻');
            }
            head.push('━');
            body.push_str(&rank.to_string());
            foot.push('━');
        }
        head.push('┓');
        body.push('┃');
        foot.push('┛');
        format!("{}\n{}\n{}", head, body, foot)
    }
}

/// iterate the 15 (Rank, Block) slices of a hand, low rank first
pub fn blocks(hand: Hand) -> impl Iterator<Item = (Rank, Block)> {
    (0..Rank::N).map(move |i| (Rank::from(i as u8), hand.block(Rank::from(i as u8))))
}

/// we can empty a hand from low to high by
/// removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.size() {
            0 => None,
            _ => {
                let bit = self.0.trailing_zeros() as u64;
                let rank = Rank::from((bit >> 2) as u8);
                let suit = Suit::from((bit & 0x3) as u8);
                self.0 &= !(1u64 << bit);
                Some(Card::from((rank, suit)))
            }
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// one-way conversion from Card
impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        let bit = ((u8::from(card.rank()) as u64) << 2) + u8::from(card.suit()) as u64;
        Self(1u64 << bit)
    }
}

/// Vec<Card> isomorphism (up to permutation; this always comes out sorted
/// in bit order: rank-major, spade first within a rank)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards
            .into_iter()
            .map(Hand::from)
            .fold(Hand::empty(), |a, b| Hand(a.0 | b.0))
    }
}

/// str isomorphism, whitespace-separated cards ("3s 3h # $")
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?
            .into())
    }
}

impl std::ops::Add<Self> for Hand {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.into_iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self(rand::random::<u64>() & Self::deck().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout() {
        assert_eq!(u64::from(Hand::try_from("3s").unwrap()), 0x1);
        assert_eq!(u64::from(Hand::try_from("#").unwrap()), 0x10000000000000);
        assert_eq!(u64::from(Hand::try_from("$").unwrap()), 0x100000000000000);
        assert_eq!(u64::from(Hand::bomb(Rank::Three)), 0xF);
        assert_eq!(u64::from(Hand::bomb(Rank::Two)), 0xF000000000000);
    }

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn walk_cardinality() {
        let hand = Hand::try_from("3s 2s 2h").unwrap();
        assert_eq!(hand.size(), 3);
        assert_eq!(hand.into_iter().count(), 3);
        let total: usize = blocks(hand).map(|(_, b)| b.count()).sum();
        assert_eq!(total, hand.size());
        assert_eq!(blocks(hand).count(), Rank::N);
        assert_eq!(Hand::count(&hand, Rank::Three), 1);
        assert_eq!(Hand::count(&hand, Rank::Two), 2);
        assert_eq!(Hand::count(&hand, Rank::Four), 0);
        assert_eq!(Hand::count(&hand, Rank::Ace), 0);
    }

    #[test]
    fn subset_removal() {
        let mut hand = Hand::try_from("3s 2s 2h").unwrap();
        assert!(!hand.remove(Hand::try_from("4s").unwrap()));
        assert_eq!(hand.size(), 3);
        assert!(hand.remove(Hand::try_from("2h").unwrap()));
        assert_eq!(hand.size(), 2);
        assert_eq!(Hand::count(&hand, Rank::Two), 1);
        assert!(hand.contains(Hand::try_from("3s 2s").unwrap()));
        assert!(!hand.contains(Hand::try_from("2h").unwrap()));
    }

    #[test]
    fn draw_rank_exactness() {
        let mut held = Hand::try_from("3s 2s").unwrap();
        let from = Hand::try_from("2h 2c").unwrap();
        let added = held.draw_rank(from, Rank::Two, 1);
        assert_eq!(added.size(), 1);
        assert_eq!(Hand::count(&held, Rank::Two), 2);
        let mut held = Hand::try_from("3s 2s").unwrap();
        let added = held.draw_rank(from, Rank::Two, 3);
        assert!(added.is_empty());
        assert_eq!(held, Hand::try_from("3s 2s").unwrap());
    }

    #[test]
    fn drawing_skips_duplicates() {
        let mut held = Hand::try_from("2s").unwrap();
        let from = Hand::try_from("2s 2h").unwrap();
        let added = held.draw_rank(from, Rank::Two, 1);
        assert_eq!(added, Hand::try_from("2h").unwrap());
    }

    #[test]
    fn bombs_recognized() {
        for rank in Rank::suited() {
            assert!(Hand::bomb(rank).is_bomb());
        }
        assert!(!Hand::try_from("3s 3h 3c").unwrap().is_bomb());
        assert!(!Hand::rocket().is_bomb());
        assert!(Hand::rocket().is_rocket());
        assert!(!Hand::bomb(Rank::Two).is_rocket());
    }

    #[test]
    fn normalize_idempotent() {
        let hand = Hand::try_from("3h 2s 2d").unwrap();
        assert_eq!(hand.normalize(), hand.normalize().normalize());
        assert_eq!(hand.normalize(), Hand::try_from("3s 2s 2h").unwrap());
    }

    #[test]
    fn normalize_depends_only_on_multiset() {
        let one = Hand::try_from("5h 5d 9c # ").unwrap();
        let two = Hand::try_from("5s 5c 9h #").unwrap();
        assert_eq!(one.normalize(), two.normalize());
        assert!(Hand::bomb(Rank::Five).normalize().is_bomb());
        assert!(Hand::rocket().normalize().is_rocket());
    }

    #[test]
    fn min_rank_scans_low() {
        let hand = Hand::try_from("4h 2s 2d").unwrap();
        assert_eq!(hand.min_rank(), Some(Rank::Four));
        assert_eq!(Hand::empty().min_rank(), None);
    }

    #[test]
    fn finding_concrete_suits() {
        let live = Hand::try_from("3h 3c 4d 4h 7s").unwrap();
        let target = Hand::try_from("3s 3h 4s").unwrap().normalize();
        let found = live.find(target);
        assert_eq!(found.size(), 3);
        assert!(live.contains(found));
        assert_eq!(Hand::count(&found, Rank::Three), 2);
        assert_eq!(Hand::count(&found, Rank::Four), 1);
    }

    #[test]
    fn deck_holds_everything() {
        assert_eq!(Hand::deck().size(), 54);
        assert!(Hand::deck().contains(Hand::rocket()));
        for rank in Rank::suited() {
            assert!(Hand::deck().contains(Hand::bomb(rank)));
        }
    }
}
