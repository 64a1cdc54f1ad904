use super::shape::Shape;

/// every named family of playable moves, i.e. the shape table. the parameter
/// on the chained families is the body width in ranks.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Category {
    Pass,
    /// one card
    Single,
    /// 5..=12 consecutive singles
    Chain(u8),
    /// two of a rank
    Pair,
    /// 3..=10 consecutive pairs
    PairChain(u8),
    /// 1..=6 consecutive bare triples
    Trio(u8),
    /// 1..=5 consecutive triples, one single kicker each
    TrioSingle(u8),
    /// 1..=4 consecutive triples, one pair kicker each
    TrioPair(u8),
    /// four of a rank with two single kickers
    QuadSingles,
    /// four of a rank with two pair kickers
    QuadPairs,
    /// four of a rank, bare
    Bomb,
    /// both jokers
    Rocket,
}

impl Category {
    pub fn shape(&self) -> Shape {
        match self {
            Category::Pass => Shape::new(0, 0, 0, 0),
            Category::Single => Shape::new(1, 1, 0, 0),
            Category::Chain(n) => Shape::new(*n as i8, 1, 0, 0),
            Category::Pair => Shape::new(1, 2, 0, 0),
            Category::PairChain(n) => Shape::new(*n as i8, 2, 0, 0),
            Category::Trio(n) => Shape::new(*n as i8, 3, 0, 0),
            Category::TrioSingle(n) => Shape::new(*n as i8, 3, *n as i8, 1),
            Category::TrioPair(n) => Shape::new(*n as i8, 3, *n as i8, 2),
            Category::QuadSingles => Shape::new(1, 4, 2, 1),
            Category::QuadPairs => Shape::new(1, 4, 2, 2),
            Category::Bomb => Shape::new(1, 4, 0, 0),
            Category::Rocket => Shape::new(2, 1, 0, 0),
        }
    }

    /// the playable table in lead-enumeration order (pass excluded)
    pub fn all() -> Vec<Category> {
        let mut out = Vec::with_capacity(39);
        out.push(Category::Single);
        out.extend((5..=12).map(Category::Chain));
        out.push(Category::Pair);
        out.extend((3..=10).map(Category::PairChain));
        out.extend((1..=6).map(Category::Trio));
        out.extend((1..=5).map(Category::TrioSingle));
        out.extend((1..=4).map(Category::TrioPair));
        out.push(Category::QuadSingles);
        out.push(Category::QuadPairs);
        out.push(Category::Bomb);
        out.push(Category::Rocket);
        out
    }
}

/// reverse lookup from geometry; only shapes in the table resolve
impl TryFrom<Shape> for Category {
    type Error = anyhow::Error;
    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        let Shape {
            width: w,
            height: h,
            kicker_width: kw,
            kicker_height: kh,
        } = shape;
        match (w, h, kw, kh) {
            (0, 0, 0, 0) => Ok(Category::Pass),
            (1, 1, 0, 0) => Ok(Category::Single),
            (5..=12, 1, 0, 0) => Ok(Category::Chain(w as u8)),
            (1, 2, 0, 0) => Ok(Category::Pair),
            (3..=10, 2, 0, 0) => Ok(Category::PairChain(w as u8)),
            (1..=6, 3, 0, 0) => Ok(Category::Trio(w as u8)),
            (1..=5, 3, _, 1) if kw == w => Ok(Category::TrioSingle(w as u8)),
            (1..=4, 3, _, 2) if kw == w => Ok(Category::TrioPair(w as u8)),
            (1, 4, 2, 1) => Ok(Category::QuadSingles),
            (1, 4, 2, 2) => Ok(Category::QuadPairs),
            (1, 4, 0, 0) => Ok(Category::Bomb),
            (2, 1, 0, 0) => Ok(Category::Rocket),
            _ => Err(anyhow::anyhow!("no category for shape {}", shape)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::Pass => write!(f, "pass"),
            Category::Single => write!(f, "single"),
            Category::Chain(n) => write!(f, "chain:{}", n),
            Category::Pair => write!(f, "pair"),
            Category::PairChain(n) => write!(f, "pair-chain:{}", n),
            Category::Trio(n) => write!(f, "trio:{}", n),
            Category::TrioSingle(n) => write!(f, "trio+single:{}", n),
            Category::TrioPair(n) => write!(f, "trio+pair:{}", n),
            Category::QuadSingles => write!(f, "four+singles"),
            Category::QuadPairs => write!(f, "four+pairs"),
            Category::Bomb => write!(f, "bomb"),
            Category::Rocket => write!(f, "rocket"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_shape() {
        for category in Category::all() {
            assert_eq!(category, Category::try_from(category.shape()).unwrap());
        }
    }

    #[test]
    fn table_is_distinct() {
        let all = Category::all();
        let shapes: std::collections::HashSet<u32> =
            all.iter().map(|c| u32::from(c.shape())).collect();
        assert_eq!(shapes.len(), all.len());
    }

    #[test]
    fn table_excludes_pass() {
        assert!(Category::all().iter().all(|c| c.shape().size() > 0));
    }

    #[test]
    fn unlisted_shapes_resolve_to_nothing() {
        assert!(Category::try_from(Shape::new(2, 2, 0, 0)).is_err());
        assert!(Category::try_from(Shape::new(13, 1, 0, 0)).is_err());
        assert!(Category::try_from(Shape::new(1, 4, 1, 1)).is_err());
    }
}
