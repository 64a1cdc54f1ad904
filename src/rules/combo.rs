use super::category::Category;
use super::shape::Shape;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use colored::Colorize;

/// a playable move: a Shape, the lowest body rank (the ordering key), and the
/// concrete suited cards realising body and kicker. the all-zero combo is a
/// pass. `weight` is an optional prior hint consumed by search policies.
///
/// two combos are equal when their shapes agree and their cards agree up to
/// suit identity.
#[derive(Debug, Default, Clone, Copy)]
pub struct Combo {
    shape: Shape,
    floor: Option<Rank>,
    body: Hand,
    kicker: Hand,
    weight: u32,
}

impl Combo {
    pub fn pass() -> Self {
        Self::default()
    }
    /// an abstract request: geometry with no cards attached
    pub fn shaped(shape: Shape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }
    /// an abstract request that must be beaten: geometry plus ordering key
    pub fn floored(shape: Shape, floor: Rank) -> Self {
        Self {
            shape,
            floor: Some(floor),
            ..Self::default()
        }
    }
    /// attach concrete cards, keeping the geometry and weight
    pub fn realize(&self, body: Hand, kicker: Hand) -> Self {
        Self {
            shape: self.shape,
            floor: body.min_rank(),
            body,
            kicker,
            weight: self.weight,
        }
    }
    pub fn weighted(self, weight: u32) -> Self {
        Self { weight, ..self }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn floor(&self) -> Option<Rank> {
        self.floor
    }
    pub fn body(&self) -> Hand {
        self.body
    }
    pub fn kicker(&self) -> Hand {
        self.kicker
    }
    pub fn weight(&self) -> u32 {
        self.weight
    }
    pub fn cards(&self) -> Hand {
        self.body + self.kicker
    }
    pub fn size(&self) -> usize {
        self.shape.size()
    }
    pub fn is_pass(&self) -> bool {
        self.shape.is_pass()
    }
    pub fn is_bomb(&self) -> bool {
        self.shape.is_bomb()
    }
    pub fn is_rocket(&self) -> bool {
        self.shape.is_rocket()
    }
    pub fn category(&self) -> Option<Category> {
        Category::try_from(self.shape).ok()
    }
    /// host wire form: body codes then kicker codes
    pub fn codes(&self) -> Vec<u8> {
        let mut out = self.body.codes();
        out.extend(self.kicker.codes());
        out
    }
}

impl PartialEq for Combo {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.cards().normalize() == other.cards().normalize()
    }
}
impl Eq for Combo {}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_pass() {
            write!(f, "{{}}")
        } else if self.body.is_empty() {
            write!(f, "{{{} >{:?}}}", self.shape, self.floor)
        } else if self.is_rocket() {
            write!(f, "{{{}}}", self.body.to_string().magenta())
        } else if self.is_bomb() {
            write!(f, "{{{}}}", self.body.to_string().red())
        } else if self.kicker.is_empty() {
            write!(f, "{{{}}}", self.body)
        } else {
            write!(f, "{{{} + {}}}", self.body, self.kicker)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_of_threes() -> Combo {
        Combo::shaped(Category::Pair.shape())
            .realize(Hand::try_from("3s 3h").unwrap(), Hand::empty())
    }

    #[test]
    fn pass_is_empty() {
        let pass = Combo::pass();
        assert!(pass.is_pass());
        assert_eq!(pass.size(), 0);
        assert!(pass.cards().is_empty());
    }

    #[test]
    fn equality_ignores_suits() {
        let one = pair_of_threes();
        let two = Combo::shaped(Category::Pair.shape())
            .realize(Hand::try_from("3c 3d").unwrap(), Hand::empty());
        assert_eq!(one, two);
    }

    #[test]
    fn equality_requires_shape() {
        let trio = Combo::shaped(Category::Trio(1).shape())
            .realize(Hand::try_from("3s 3h 3c").unwrap(), Hand::empty());
        let trio_single = Combo::shaped(Category::TrioSingle(1).shape()).realize(
            Hand::try_from("3s 3h 3c").unwrap(),
            Hand::empty(),
        );
        assert_ne!(trio, trio_single);
    }

    #[test]
    fn realizing_sets_floor() {
        let combo = pair_of_threes();
        assert_eq!(combo.floor(), Some(Rank::Three));
        assert_eq!(combo.category(), Some(Category::Pair));
    }

    #[test]
    fn wire_codes_cover_all_cards() {
        let combo = Combo::shaped(Category::TrioSingle(1).shape()).realize(
            Hand::try_from("5s 5h 5c").unwrap(),
            Hand::try_from("9d").unwrap(),
        );
        assert_eq!(combo.codes().len(), 4);
        assert_eq!(combo.size(), 4);
    }
}
