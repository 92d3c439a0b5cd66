//! Bomb validation and ranking tests.

use guandan_rank::{
    Bomb, BombError, Card, CompKind, Combination, JokerBomb, Level, NaiveBomb, Rank, RuleOptions,
    Suit,
};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn five() -> Level {
    Level::new(Rank::Five).unwrap()
}

fn cards(texts: &[&str], level: Level) -> Vec<Card> {
    texts
        .iter()
        .map(|text| Card::parse(text, level).unwrap())
        .collect()
}

/// Stand-in for a combination detected outside this crate.
struct Opponent {
    kind: CompKind,
    cards: Vec<Card>,
}

impl Opponent {
    fn new(kind: CompKind, texts: &[&str]) -> Self {
        Self {
            kind,
            cards: cards(texts, five()),
        }
    }
}

impl Combination for Opponent {
    fn kind(&self) -> CompKind {
        self.kind
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn greater_than(&self, _other: &dyn Combination) -> bool {
        false
    }
}

/// Builds a shuffled bomb of `len` cards of `rank` with `wildcards` Heart level cards.
fn random_bomb(
    rng: &mut ChaCha8Rng,
    level: Level,
    rank: Rank,
    len: usize,
    wildcards: usize,
) -> Vec<Card> {
    let mut hand = Vec::with_capacity(len);
    for _ in 0..len - wildcards {
        let mut suit = *Suit::REGULAR.choose(rng).unwrap();
        if rank == level.rank() && suit == Suit::Heart {
            suit = Suit::Spade;
        }
        hand.push(Card::new(rank, suit, level).unwrap());
    }
    for _ in 0..wildcards {
        hand.push(Card::new(level.rank(), Suit::Heart, level).unwrap());
    }
    hand.shuffle(rng);
    hand
}

#[test]
fn four_aces_without_wildcards() {
    let bomb = NaiveBomb::new(&cards(&["AS", "AC", "AD", "AH"], five()));
    assert!(bomb.is_valid());
    assert_eq!(bomb.len(), 4);
    assert_eq!(bomb.wildcard_count(), 0);
    assert_eq!(bomb.anchor().unwrap().rank(), Rank::Ace);
    assert!(bomb.is_bomb());
    assert_eq!(bomb.kind(), CompKind::NaiveBomb);
}

#[test]
fn six_card_bomb_beats_five_card_bomb_with_wildcards() {
    let threes = NaiveBomb::new(&cards(&["3S", "3S", "3C", "3D", "3D", "3H"], five()));
    let aces = NaiveBomb::new(&cards(&["AS", "5H", "AC", "AD", "5H"], five()));

    assert!(threes.is_valid());
    assert_eq!(threes.len(), 6);
    assert_eq!(threes.anchor().unwrap().rank(), Rank::Three);

    assert!(aces.is_valid());
    assert_eq!(aces.len(), 5);
    assert_eq!(aces.wildcard_count(), 2);
    assert_eq!(aces.anchor().unwrap().rank(), Rank::Ace);
    assert!(aces.cards()[3].is_wildcard() && aces.cards()[4].is_wildcard());

    assert!(threes.greater_than(&aces));
    assert!(!aces.greater_than(&threes));
}

#[test]
fn two_ranks_never_form_a_bomb() {
    let bomb = NaiveBomb::new(&cards(&["2S", "2C", "3D", "3H"], five()));
    assert!(!bomb.is_valid());
    assert_eq!(bomb.rejection(), Some(BombError::MixedRanks));
    assert_eq!(bomb.validate(), Err(BombError::MixedRanks));

    let (valid, sorted) = NaiveBomb::satisfy(
        &cards(&["3H", "2S", "3D", "2C"], five()),
        &RuleOptions::default(),
    );
    assert!(!valid);
    assert_eq!(sorted, cards(&["2S", "2C", "3D", "3H"], five()));
}

#[test]
fn joker_bomb_beats_every_naive_bomb() {
    let stub = Opponent::new(CompKind::JokerBomb, &["RJ", "RJ", "BJ", "BJ"]);
    let real = JokerBomb::new(&cards(&["BJ", "RJ", "BJ", "RJ"], five()));
    assert!(real.is_valid());

    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..50 {
        let rank = *Rank::REGULAR.choose(&mut rng).unwrap();
        let len = rng.random_range(4..=10);
        let wildcards = rng.random_range(0..=2);
        let bomb = NaiveBomb::new(&random_bomb(&mut rng, five(), rank, len, wildcards));
        assert!(bomb.is_valid());

        assert!(!bomb.greater_than(&stub));
        assert!(!bomb.greater_than(&real));
        assert!(real.greater_than(&bomb));
    }
    assert!(!real.greater_than(&real.clone()));
}

#[test]
fn longer_bomb_wins_regardless_of_anchor() {
    let aces = NaiveBomb::new(&cards(&["AS", "5H", "AC", "AD", "5H"], five()));
    let threes = NaiveBomb::new(&cards(
        &["3S", "3S", "3C", "3D", "3D", "3H", "5H", "5H"],
        five(),
    ));
    assert!(aces.is_valid());
    assert!(threes.is_valid());
    assert_eq!(threes.wildcard_count(), 2);

    let aces_wins = aces.greater_than(&threes);
    let threes_wins = threes.greater_than(&aces);
    assert!(threes_wins);
    assert!(!aces_wins);
    assert!(!(aces_wins && threes_wins), "both bombs report greater");
}

#[test]
fn straight_flush_sits_between_five_and_six_card_bombs() {
    let straight_flush = Opponent::new(CompKind::StraightFlush, &["8S", "9S", "10S", "JS", "QS"]);
    let four = NaiveBomb::new(&cards(&["KS", "KC", "KD", "KH"], five()));
    let fives = NaiveBomb::new(&cards(&["2S", "2C", "2D", "2H", "2S"], five()));
    let six = NaiveBomb::new(&cards(&["3S", "3C", "3D", "3H", "3S", "3C"], five()));

    assert!(!four.greater_than(&straight_flush));
    assert!(!fives.greater_than(&straight_flush));
    assert!(six.greater_than(&straight_flush));

    let strict = RuleOptions::default().with_straight_flush_threshold(7);
    let six_strict = NaiveBomb::with_options(six.cards(), strict);
    assert!(!six_strict.greater_than(&straight_flush));
}

#[test]
fn bombs_beat_non_bombs() {
    let pair = Opponent::new(CompKind::NonBomb, &["BJ", "BJ"]);
    let bomb = NaiveBomb::new(&cards(&["2S", "2C", "2D", "2H"], five()));
    assert!(!pair.is_bomb());
    assert!(bomb.greater_than(&pair));
}

#[test]
fn level_rank_bomb_outranks_aces() {
    let level_bomb = NaiveBomb::new(&cards(&["5H", "5S", "5C", "5D"], five()));
    let aces = NaiveBomb::new(&cards(&["AS", "AC", "AD", "AH"], five()));

    assert!(level_bomb.is_valid());
    assert_eq!(level_bomb.wildcard_count(), 1);
    assert_eq!(level_bomb.cards().last().unwrap().suit(), Suit::Heart);
    assert!(level_bomb.greater_than(&aces));
    assert!(!aces.greater_than(&level_bomb));
}

#[test]
fn equal_anchors_tie() {
    let a = NaiveBomb::new(&cards(&["9S", "9C", "9D", "9H"], five()));
    let b = NaiveBomb::new(&cards(&["9S", "9C", "9D", "5H"], five()));
    assert!(a.is_valid() && b.is_valid());
    assert!(!a.greater_than(&b));
    assert!(!b.greater_than(&a));
}

#[test]
fn rejection_reasons() {
    let short = NaiveBomb::new(&cards(&["9S", "9C", "5H"], five()));
    assert_eq!(
        short.rejection(),
        Some(BombError::TooFewCards {
            found: 3,
            required: 4
        })
    );

    let wild = NaiveBomb::new(&cards(&["7S", "7C", "5H", "5H", "5H"], five()));
    assert_eq!(
        wild.rejection(),
        Some(BombError::TooManyWildcards { found: 3, max: 2 })
    );

    let jokers_with_wildcard = cards(&["RJ", "RJ", "BJ", "5H"], five());
    assert!(!NaiveBomb::new(&jokers_with_wildcard).is_valid());
    assert_eq!(
        JokerBomb::new(&jokers_with_wildcard).validate(),
        Err(BombError::NotAllJokers)
    );

    let mut mixed = cards(&["9S", "9C", "9D"], five());
    mixed.push(Card::parse("9H", Level::new(Rank::Six).unwrap()).unwrap());
    assert_eq!(
        NaiveBomb::new(&mixed).rejection(),
        Some(BombError::MixedLevels)
    );

    let tight = RuleOptions::default().with_max_bomb_wildcards(1);
    let two_wild = cards(&["7S", "7C", "5H", "5H"], five());
    assert!(NaiveBomb::new(&two_wild).is_valid());
    assert!(!NaiveBomb::with_options(&two_wild, tight).is_valid());

    let level_cards_with_joker = NaiveBomb::new(&cards(&["5S", "5C", "5H", "RJ"], five()));
    assert_eq!(
        level_cards_with_joker.rejection(),
        Some(BombError::MixedRanks)
    );

    let level_cards_with_jokers =
        NaiveBomb::new(&cards(&["5S", "5C", "5H", "5H", "RJ", "BJ"], five()));
    assert_eq!(
        level_cards_with_jokers.rejection(),
        Some(BombError::MixedRanks)
    );
    assert!(Bomb::detect(level_cards_with_jokers.cards(), RuleOptions::default()).is_none());
}

#[test]
fn fewer_than_four_cards_never_form_a_bomb() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..50 {
        let rank = *Rank::REGULAR.choose(&mut rng).unwrap();
        let len = rng.random_range(0..4);
        let wildcards = rng.random_range(0..=len.min(2));
        let bomb = NaiveBomb::new(&random_bomb(&mut rng, five(), rank, len, wildcards));
        assert!(!bomb.is_valid());
    }
}

#[test]
fn two_foreign_ranks_are_never_covered_by_wildcards() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    for _ in 0..50 {
        let len = rng.random_range(4..=10);
        let wildcards = rng.random_range(0..=2);
        let mut hand = random_bomb(&mut rng, five(), Rank::Nine, len, wildcards);
        let position = hand.iter().position(|card| !card.is_wildcard()).unwrap();
        hand[position] = Card::new(Rank::Jack, Suit::Club, five()).unwrap();
        if hand.iter().filter(|card| card.rank() == Rank::Nine).count() == 0 {
            continue;
        }
        assert!(!NaiveBomb::new(&hand).is_valid());
    }
}

#[test]
fn ranking_is_deterministic_and_length_monotonic() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    for _ in 0..200 {
        let (rank_a, rank_b) = (
            *Rank::REGULAR.choose(&mut rng).unwrap(),
            *Rank::REGULAR.choose(&mut rng).unwrap(),
        );
        let (len_a, len_b) = (rng.random_range(4..=10), rng.random_range(4..=10));
        let (wild_a, wild_b) = (rng.random_range(0..=2), rng.random_range(0..=2));
        let a_cards = random_bomb(&mut rng, five(), rank_a, len_a, wild_a);
        let b_cards = random_bomb(&mut rng, five(), rank_b, len_b, wild_b);

        let a = NaiveBomb::new(&a_cards);
        let b = NaiveBomb::new(&b_cards);
        assert!(a.is_valid() && b.is_valid());
        assert_eq!(a, NaiveBomb::new(&a_cards));
        assert_eq!(a.greater_than(&b), a.greater_than(&b));

        if len_a > len_b {
            assert!(a.greater_than(&b));
            assert!(!b.greater_than(&a));
        } else if len_a == len_b && rank_a != rank_b {
            assert!(a.greater_than(&b) ^ b.greater_than(&a));
        }
    }
}

#[test]
fn detect_prefers_joker_bomb() {
    let jokers = cards(&["RJ", "BJ", "RJ", "BJ"], five());
    let detected = Bomb::detect(&jokers, RuleOptions::default()).unwrap();
    assert_eq!(detected.kind(), CompKind::JokerBomb);

    let eights = cards(&["8S", "8C", "8D", "8H", "8S"], five());
    let detected = Bomb::detect(&eights, RuleOptions::default()).unwrap();
    assert_eq!(detected.kind(), CompKind::NaiveBomb);
    assert!(Bomb::detect(&jokers, RuleOptions::default())
        .unwrap()
        .greater_than(&detected));

    assert!(Bomb::detect(&cards(&["8S", "9S"], five()), RuleOptions::default()).is_none());
}

#[test]
fn display_lists_kind_and_cards() {
    let bomb = NaiveBomb::new(&cards(&["5H", "AS", "AC", "AD"], five()));
    assert_eq!(
        bomb.to_string(),
        "NaiveBomb: [A of Spade, A of Club, A of Diamond, 5 of Heart]"
    );
    let jokers = JokerBomb::new(&cards(&["BJ", "RJ", "BJ", "RJ"], five()));
    assert_eq!(
        jokers.to_string(),
        "JokerBomb: [Red Joker, Red Joker, Black Joker, Black Joker]"
    );
}

#[test]
#[should_panic(expected = "invalid")]
fn ranking_an_invalid_bomb_panics() {
    let invalid = NaiveBomb::new(&cards(&["2S", "2C", "3D", "3H"], five()));
    let valid = NaiveBomb::new(&cards(&["4S", "4C", "4D", "4H"], five()));
    let _ = invalid.greater_than(&valid);
}

#[test]
#[should_panic(expected = "different levels")]
fn ranking_bombs_of_different_levels_panics() {
    let under_five = NaiveBomb::new(&cards(&["4S", "4C", "4D", "4H", "4S"], five()));
    let under_six = NaiveBomb::new(&cards(
        &["9S", "9C", "9D", "9H"],
        Level::new(Rank::Six).unwrap(),
    ));
    let _ = under_five.greater_than(&under_six);
}
