/// the 15 ranks of a landlord deck in playing order: 3 is the floor, 2 beats
/// every suited rank, and the two jokers sit above everything.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
    Joker1 = 13,
    Joker2 = 14,
}

impl Rank {
    pub const N: usize = 15;

    pub fn is_joker(&self) -> bool {
        matches!(self, Rank::Joker1 | Rank::Joker2)
    }
    /// the 13 ranks that come in four suits
    pub fn suited() -> impl Iterator<Item = Rank> {
        (0u8..13).map(Rank::from)
    }
    pub fn every() -> impl Iterator<Item = Rank> {
        (0u8..Self::N as u8).map(Rank::from)
    }
    /// host-facing numbering, offset so that Three reads as 3
    pub fn wire(&self) -> u8 {
        u8::from(*self) + 3
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Three,
            1 => Rank::Four,
            2 => Rank::Five,
            3 => Rank::Six,
            4 => Rank::Seven,
            5 => Rank::Eight,
            6 => Rank::Nine,
            7 => Rank::Ten,
            8 => Rank::Jack,
            9 => Rank::Queen,
            10 => Rank::King,
            11 => Rank::Ace,
            12 => Rank::Two,
            13 => Rank::Joker1,
            14 => Rank::Joker2,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "X" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "#" => Ok(Rank::Joker1),
            "$" => Ok(Rank::Joker2),
            _ => Err(anyhow::anyhow!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Rank::Three => write!(f, "3"),
            Rank::Four => write!(f, "4"),
            Rank::Five => write!(f, "5"),
            Rank::Six => write!(f, "6"),
            Rank::Seven => write!(f, "7"),
            Rank::Eight => write!(f, "8"),
            Rank::Nine => write!(f, "9"),
            Rank::Ten => write!(f, "X"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            Rank::Two => write!(f, "2"),
            Rank::Joker1 => write!(f, "#"),
            Rank::Joker2 => write!(f, "$"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::every() {
            assert_eq!(rank, Rank::from(u8::from(rank)));
        }
    }

    #[test]
    fn bijective_str() {
        for rank in Rank::every() {
            assert_eq!(rank, Rank::try_from(rank.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn playing_order() {
        assert!(Rank::Three < Rank::Ten);
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Two < Rank::Joker1);
        assert!(Rank::Joker1 < Rank::Joker2);
    }

    #[test]
    fn wire_offset() {
        assert_eq!(Rank::Three.wire(), 3);
        assert_eq!(Rank::Two.wire(), 15);
        assert_eq!(Rank::Joker2.wire(), 17);
    }
}
