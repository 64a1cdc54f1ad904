use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use robolord::cards::card::Card;
use robolord::cards::hand::Hand;
use robolord::cards::rank::Rank;
use robolord::cards::suit::Suit;
use robolord::play::seat::Seat;
use robolord::players::advisor::Advisor;
use robolord::players::mcts::MctsAdvisor;
use robolord::rules::rules::Rules;

/// deal a pocket game: ranks 3 through 5 in four suits plus both jokers,
/// four cards per seat, the leftovers to the landlord.
fn deal(rng: &mut SmallRng) -> ([Hand; Seat::N], Seat) {
    let mut cards = Vec::new();
    for rank in [Rank::Three, Rank::Four, Rank::Five] {
        for suit in 0u8..4 {
            cards.push(Card::from((rank, Suit::from(suit))));
        }
    }
    cards.push(Card::from((Rank::Joker1, Suit::Spade)));
    cards.push(Card::from((Rank::Joker2, Suit::Spade)));
    cards.shuffle(rng);

    let landlord = Seat::from(rng.gen_range(0..Seat::N as u8));
    let mut hands = [Hand::empty(); Seat::N];
    for seat in Seat::all() {
        for _ in 0..4 {
            hands[seat.index()].add(Hand::from(cards.pop().expect("deck runs deep enough")));
        }
    }
    for card in cards {
        hands[landlord.index()].add(Hand::from(card));
    }
    (hands, landlord)
}

#[test]
fn pocket_playout_terminates() {
    robolord::logs();
    let mut rng = SmallRng::seed_from_u64(42);
    let (hands, landlord) = deal(&mut rng);

    let mut players = Vec::new();
    for seat in Seat::all() {
        let mut player = MctsAdvisor::seeded(Rules::default(), 7 + seat.index() as u64);
        player.set_self(seat);
        player.set_landlord(landlord);
        player.start(hands);
        players.push(player);
    }
    for seat in Seat::all() {
        println!("{}\n{}", seat, hands[seat.index()].banner());
    }

    let mut mirror = hands;
    let mut seat = landlord.prev();
    let mut turns = 0;
    let winner = loop {
        seat = seat.next();
        let tag = seat.role(landlord);
        let combo = players[seat.index()].recommend_play(tag);

        // the recommendation is suited out of the live hand
        assert!(mirror[seat.index()].contains(combo.cards()));
        assert_eq!(combo.cards().size(), combo.size());
        assert!(mirror[seat.index()].remove(combo.cards()));

        for player in players.iter_mut() {
            player.play(tag, seat, combo);
        }
        println!("{} [{}] sheds {}", seat, tag, combo);

        if mirror[seat.index()].is_empty() {
            break seat;
        }
        turns += 1;
        assert!(turns < 200, "the pocket game should end quickly");
    };

    // every advisor agrees on the final hands
    for player in players.iter() {
        for seat in Seat::all() {
            assert_eq!(player.hand(seat), mirror[seat.index()]);
        }
    }
    assert!(mirror[winner.index()].is_empty());

    for player in players.iter_mut() {
        player.stop();
    }
}

#[test]
fn bidding_round_stays_in_range() {
    let mut advisor = MctsAdvisor::seeded(Rules::default(), 4242);
    for _ in 0..32 {
        assert!(advisor.recommend_rob() <= 3);
        assert!(matches!(advisor.recommend_double(), 0 | 2));
    }
}
