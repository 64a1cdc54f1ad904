use crate::Arbitrary;

/// one of the three chairs at the table, in deal order
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Seat(u8);

impl Seat {
    pub const N: usize = 3;

    pub fn next(&self) -> Seat {
        Seat((self.0 + 1) % Self::N as u8)
    }
    pub fn prev(&self) -> Seat {
        Seat((self.0 + Self::N as u8 - 1) % Self::N as u8)
    }
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    /// role tag relative to the declarer: L landlord, N next, P previous
    pub fn role(&self, landlord: Seat) -> &'static str {
        if *self == landlord {
            "L"
        } else if *self == landlord.next() {
            "N"
        } else {
            "P"
        }
    }
    /// true when both seats sit on the same side of the landlord/farmer split
    pub fn allied(&self, landlord: Seat, other: Seat) -> bool {
        *self == other || (*self != landlord && other != landlord)
    }
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..Self::N as u8).map(Seat)
    }
}

impl From<u8> for Seat {
    fn from(n: u8) -> Seat {
        match n {
            0..=2 => Seat(n),
            _ => panic!("invalid seat u8: {}", n),
        }
    }
}
impl From<Seat> for u8 {
    fn from(s: Seat) -> u8 {
        s.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl Arbitrary for Seat {
    fn random() -> Self {
        use rand::Rng;
        Seat(rand::thread_rng().gen_range(0..Self::N as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation() {
        let seat = Seat::from(2);
        assert_eq!(seat.next(), Seat::from(0));
        assert_eq!(seat.prev(), Seat::from(1));
        assert_eq!(seat.next().prev(), seat);
    }

    #[test]
    fn roles() {
        let landlord = Seat::from(1);
        assert_eq!(landlord.role(landlord), "L");
        assert_eq!(Seat::from(2).role(landlord), "N");
        assert_eq!(Seat::from(0).role(landlord), "P");
    }

    #[test]
    fn alliances() {
        let landlord = Seat::from(0);
        let farmers = (Seat::from(1), Seat::from(2));
        assert!(landlord.allied(landlord, landlord));
        assert!(farmers.0.allied(landlord, farmers.1));
        assert!(!landlord.allied(landlord, farmers.0));
        assert!(!farmers.1.allied(landlord, landlord));
    }
}
