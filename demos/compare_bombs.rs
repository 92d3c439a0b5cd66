//! Deals a round and reports every bomb each seat holds, strongest first.

#![allow(clippy::missing_docs_in_private_items)]

use core::cmp::Ordering;
use std::env;

use guandan_rank::{Bomb, Card, Combination, Level, Rank, RuleOptions, Shoe};

fn main() {
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);
    let level = match Level::new(Rank::Two) {
        Ok(level) => level,
        Err(err) => {
            println!("Level error: {err}");
            return;
        }
    };
    let options = RuleOptions::default();

    let mut shoe = match Shoe::new(level, &options, seed) {
        Ok(shoe) => shoe,
        Err(err) => {
            println!("Shoe error: {err}");
            return;
        }
    };
    let hands = match shoe.deal(4, 27) {
        Ok(hands) => hands,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    println!("Level {} (seed {seed})", level.rank().name());
    for (seat, hand) in hands.iter().enumerate() {
        let mut bombs = bombs_in(hand, options);
        bombs.sort_by(|a, b| {
            if a.greater_than(b) {
                Ordering::Less
            } else if b.greater_than(a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        println!("Seat {seat}:");
        if bombs.is_empty() {
            println!("  no bombs");
        }
        for bomb in &bombs {
            println!("  {bomb}");
        }
    }
}

/// Groups a hand by rank and lends each group the seat's wildcards.
fn bombs_in(hand: &[Card], options: RuleOptions) -> Vec<Bomb> {
    let wildcards: Vec<Card> = hand.iter().filter(|c| c.is_wildcard()).copied().collect();
    let mut bombs = Vec::new();

    for rank in Rank::REGULAR {
        let mut group: Vec<Card> = hand
            .iter()
            .filter(|c| c.rank() == rank && !c.is_wildcard())
            .copied()
            .collect();
        if group.is_empty() {
            continue;
        }
        group.extend(wildcards.iter().take(options.max_bomb_wildcards));
        if let Some(bomb) = Bomb::detect(&group, options) {
            bombs.push(bomb);
        }
    }

    let jokers: Vec<Card> = hand.iter().filter(|c| c.rank().is_joker()).copied().collect();
    if let Some(bomb) = Bomb::detect(&jokers, options) {
        bombs.push(bomb);
    }
    bombs
}
