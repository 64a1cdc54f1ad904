use serde::Deserialize;
use serde::Serialize;

/// table rule toggles. hosts configure these as JSON; the defaults are the
/// classic chinese ruleset. a few knobs (space shuttle, chain minimums,
/// multipliers) are carried for host configuration but not consumed by the
/// enumerator, whose run lengths come from the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub can_trio_with_pair: bool,
    pub can_four_two_with_kickers: bool,
    pub can_kicker_in_body: bool,
    pub can_trio_without_kicker: bool,
    pub can_space_shuttle: bool,
    pub can_repeat_kicker: bool,
    pub can_joker_as_kicker: bool,
    pub multiple_of_bomb: u8,
    pub multiple_of_rocket: u8,
    pub min_length_of_chain: u8,
    pub min_length_of_pair_chain: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            can_trio_with_pair: true,
            can_four_two_with_kickers: true,
            can_kicker_in_body: true,
            can_trio_without_kicker: true,
            can_space_shuttle: false,
            can_repeat_kicker: true,
            can_joker_as_kicker: false,
            multiple_of_bomb: 2,
            multiple_of_rocket: 2,
            min_length_of_chain: 5,
            min_length_of_pair_chain: 3,
        }
    }
}
