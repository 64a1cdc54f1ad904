use super::category::Category;
use super::combo::Combo;
use super::picks::picks;
use super::rules::Rules;
use super::shape::Shape;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;

/// enumerates every legal response a hand can make under a rule set.
///
/// bodies slide a `width`-rank window of `height`-deep stacks up the hand;
/// kickers are chosen from the leftovers by multiset combination. when
/// responding to a live move the same shape must be beaten strictly by
/// floor, and bombs plus the rocket are surfaced on top; when leading, the
/// whole shape table is enumerated strictly. pass is appended by `matches`,
/// never by the shape-level passes.
pub struct Matcher<'a> {
    hand: Hand,
    rules: &'a Rules,
}

impl<'a> Matcher<'a> {
    pub fn new(hand: Hand, rules: &'a Rules) -> Self {
        Self { hand, rules }
    }

    /// all legal responses given the last move and the one before it. the
    /// last non-pass move is the one to beat; two passes (or game start)
    /// mean a free lead.
    pub fn matches(&self, prev1: &Combo, prev2: &Combo, limit: usize) -> Vec<Combo> {
        let target = if prev2.size() == 0 { prev1 } else { prev2 };
        if target.size() == 0 {
            let mut out = Vec::with_capacity(self.hand.size() * 2);
            for category in Category::all() {
                self.accumulate(&Combo::shaped(category.shape()), true, limit, &mut out);
                if out.len() >= limit {
                    break;
                }
            }
            out
        } else {
            let mut out = Vec::with_capacity(8);
            self.accumulate(target, false, limit, &mut out);
            out.push(Combo::pass());
            out
        }
    }

    /// emit every realization of the target's shape above its floor; in
    /// non-strict mode also emit quads as bombs and the rocket.
    fn accumulate(&self, target: &Combo, strict: bool, limit: usize, out: &mut Vec<Combo>) {
        let shape = target.shape();
        for body in self.bodies(shape, target.floor()) {
            if shape.has_kicker() {
                let (groups, sizes) = self.kickers(body, shape.kicker_height as usize);
                let selections = picks(&sizes, shape.kicker_width as usize);
                if selections.is_empty() {
                    continue;
                }
                for selection in selections {
                    let mut kicker = Hand::empty();
                    for (group, take) in groups.iter().zip(selection) {
                        for chosen in group.iter().take(take) {
                            kicker.add(*chosen);
                        }
                    }
                    out.push(target.realize(body, kicker));
                }
            } else {
                out.push(target.realize(body, Hand::empty()));
            }
            if out.len() >= limit {
                return;
            }
        }
        if !strict {
            if !shape.is_bomb() && !shape.is_rocket() {
                for rank in Rank::suited() {
                    let mut body = Hand::empty();
                    if body.draw_rank(self.hand, rank, 4).size() == 4 {
                        out.push(Combo::shaped(Category::Bomb.shape()).realize(body, Hand::empty()));
                        if out.len() >= limit {
                            return;
                        }
                    }
                }
            }
            if !shape.is_rocket() && self.hand.contains(Hand::rocket()) {
                out.push(
                    Combo::shaped(Category::Rocket.shape()).realize(Hand::rocket(), Hand::empty()),
                );
            }
        }
    }

    /// slide the body window up the ranks. chains stop below Two; quads stop
    /// at Two unless four-with-kickers is allowed; the rocket shape starts at
    /// Joker1 or not at all.
    fn bodies(&self, shape: Shape, floor: Option<Rank>) -> Vec<Hand> {
        let height = shape.height as usize;
        let mut begin = floor.map(|rank| rank as i8 + 1).unwrap_or(0);
        if shape.is_rocket() {
            if begin > Rank::Joker1 as i8 {
                return Vec::new();
            }
            begin = Rank::Joker1 as i8;
        }
        let mut out = Vec::new();
        let mut start = -1i8;
        let mut cur = Hand::empty();
        for i in begin..Rank::N as i8 {
            let rank = Rank::from(i as u8);
            if !shape.is_rocket() {
                if shape.width > 1 && rank >= Rank::Two {
                    break;
                }
                if shape.height == 4
                    && (rank > Rank::Two
                        || (rank == Rank::Two && !self.rules.can_four_two_with_kickers))
                {
                    break;
                }
            }
            if !cur.draw_rank(self.hand, rank, height).is_empty() {
                if start < 0 {
                    start = i;
                }
                if i - start + 1 == shape.width {
                    out.push(cur);
                    // drop the lowest rank of the window and slide
                    let offset = ((start + 1) as u64) << 2;
                    cur = Hand::from((u64::from(cur) >> offset) << offset);
                    start += 1;
                }
            } else {
                cur = Hand::empty();
                start = -1;
            }
        }
        out
    }

    /// kicker candidates from what the body leaves over, grouped by rank:
    /// groups[i] holds same-rank tuples of `height` cards, sizes[i] counts
    /// them. repeated groups per rank only exist under can_repeat_kicker.
    fn kickers(&self, body: Hand, height: usize) -> (Vec<Vec<Hand>>, Vec<usize>) {
        let mut groups: Vec<Vec<Hand>> = Vec::new();
        let mut sizes: Vec<usize> = Vec::new();
        let mut remain = self.hand;
        remain.remove(body);
        let mut last: Option<Rank> = None;
        let mut i = 0u8;
        while (i as usize) < Rank::N {
            let rank = Rank::from(i);
            if !self.rules.can_joker_as_kicker && rank.is_joker() {
                break;
            }
            if !self.rules.can_kicker_in_body && Hand::count(&body, rank) > 0 {
                i += 1;
                continue;
            }
            let mut scratch = Hand::empty();
            let added = scratch.draw_rank(remain, rank, height);
            if !added.is_empty() {
                if last == Some(rank) {
                    groups.last_mut().expect("seen this rank").push(added);
                    *sizes.last_mut().expect("seen this rank") += 1;
                } else {
                    last = Some(rank);
                    groups.push(vec![added]);
                    sizes.push(1);
                }
                remain.remove(added);
            }
            if added.is_empty() || !self.rules.can_repeat_kicker || Hand::count(&remain, rank) < height {
                i += 1;
            }
        }
        (groups, sizes)
    }
}
