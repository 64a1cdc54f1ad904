use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// Card represents a playing card in host wire form:
/// the top three bits carry the suit, the low five carry the wire rank.
/// jokers carry Spade by convention.
///
/// ♥3
/// 0b001_00011
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from((self.0 & 0x1F) - 3)
    }
    pub fn suit(&self) -> Suit {
        Suit::from((self.0 >> 5) & 0x3)
    }
    pub fn is_joker(&self) -> bool {
        self.rank().is_joker()
    }
    pub fn draw() -> Card {
        use rand::Rng;
        let ref mut rng = rand::thread_rng();
        match rng.gen_range(0..54) {
            52 => Card::from((Rank::Joker1, Suit::Spade)),
            53 => Card::from((Rank::Joker2, Suit::Spade)),
            n => Card::from((Rank::from((n / 4) as u8), Suit::from((n % 4) as u8))),
        }
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) << 5 | r.wire())
    }
}

/// u8 isomorphism (the wire code)
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

/// cards sort by rank first, then spade over heart over club over diamond
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank()
            .cmp(&other.rank())
            .then(u8::from(other.suit()).cmp(&u8::from(self.suit())))
    }
}
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// str isomorphism, rank then suit ("3s", "Xh"), bare "#" and "$" for jokers
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s {
            "#" => Ok(Card::from((Rank::Joker1, Suit::Spade))),
            "$" => Ok(Card::from((Rank::Joker2, Suit::Spade))),
            _ => {
                let rank = Rank::try_from(&s[0..1])?;
                let suit = s[1..]
                    .chars()
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing suit in card str: {}", s))?;
                let suit = Suit::try_from(suit)?;
                anyhow::ensure!(!rank.is_joker(), "jokers carry no suit: {}", s);
                Ok(Card::from((rank, suit)))
            }
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_joker() {
            write!(f, "{}", self.rank())
        } else {
            write!(f, "{}{}", self.suit(), self.rank())
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::draw();
        let rank = card.rank();
        let suit = card.suit();
        assert_eq!(card, Card::from((rank, suit)));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::draw();
        assert_eq!(card, Card::from(u8::from(card)));
    }

    #[test]
    fn wire_layout() {
        assert_eq!(u8::from(Card::from((Rank::Three, Suit::Spade))), 0x03);
        assert_eq!(u8::from(Card::from((Rank::Three, Suit::Diamond))), 0x63);
        assert_eq!(u8::from(Card::from((Rank::Joker2, Suit::Spade))), 0x11);
    }

    #[test]
    fn ordering() {
        let low = Card::try_from("3d").unwrap();
        let mid = Card::try_from("3s").unwrap();
        let high = Card::try_from("4d").unwrap();
        assert!(low < mid);
        assert!(mid < high);
    }

    #[test]
    fn parsing() {
        assert_eq!(
            Card::try_from("Xh").unwrap(),
            Card::from((Rank::Ten, Suit::Heart))
        );
        assert_eq!(
            Card::try_from("#").unwrap(),
            Card::from((Rank::Joker1, Suit::Spade))
        );
        assert!(Card::try_from("5z").is_err());
    }
}
