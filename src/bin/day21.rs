use std::collections::HashMap;
use std::io;
use std::io::prelude::*;

use regex::Regex;

use aoc2021::cartesian_product;

fn next_pos(current: u32, rolled: u32) -> u32 {
    (current + rolled - 1) % 10 + 1
}

mod part1 {
    use super::next_pos;

    struct DeterministicDie {
        next_roll: u32,
        total_rolls: u32,
    }

    impl DeterministicDie {
        fn new() -> DeterministicDie {
            DeterministicDie {
                next_roll: 1,
                total_rolls: 0,
            }
        }

        fn roll3(&mut self) -> u32 {
            (0..3).map(|_| self.roll1()).sum()
        }

        fn roll1(&mut self) -> u32 {
            let result = self.next_roll;
            self.next_roll = self.next_roll % 100 + 1;
            self.total_rolls += 1;
            result
        }
    }

    pub fn play(starting_positions: (u32, u32)) -> u32 {
        let mut die = DeterministicDie::new();
        let mut positions = [starting_positions.0, starting_positions.1];
        let mut scores = [0u32; 2];
        let mut turn = 0;
        while scores.iter().all(|&score| score < 1000) {
            positions[turn] = next_pos(positions[turn], die.roll3());
            scores[turn] += positions[turn];
            turn = (turn + 1) % 2;
        }
        let losing_score = scores.iter().min().expect("two players");
        losing_score * die.total_rolls
    }

    #[test]
    fn test_play() {
        assert_eq!(play((4, 8)), 739785);
    }
}

mod part2 {
    use std::collections::HashMap;

    use super::{dirac_roll_frequencies, next_pos};

    const SCORE_TARGET: u32 = 21;

    #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
    struct PlayerState {
        pos: u32,
        score: u32,
    }

    #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
    struct GameState {
        /// The player about to roll, then the other one.
        current: PlayerState,
        other: PlayerState,
    }

    #[derive(Debug, Clone, Copy)]
    struct Outcome {
        win: u64,
        lose: u64,
    }

    /// Universes in which the player to move wins and loses, memoized on
    /// the full game state.
    fn outcomes(state: GameState, cache: &mut HashMap<GameState, Outcome>) -> Outcome {
        if state.other.score >= SCORE_TARGET {
            return Outcome { win: 0, lose: 1 };
        }
        if let Some(&cached) = cache.get(&state) {
            return cached;
        }
        let mut result = Outcome { win: 0, lose: 0 };
        for (roll, universes) in dirac_roll_frequencies() {
            let pos = next_pos(state.current.pos, roll);
            let next = GameState {
                current: state.other,
                other: PlayerState {
                    pos,
                    score: state.current.score + pos,
                },
            };
            let tail = outcomes(next, cache);
            result.win += universes * tail.lose;
            result.lose += universes * tail.win;
        }
        cache.insert(state, result);
        result
    }

    pub fn play(starting_positions: (u32, u32)) -> u64 {
        let start = GameState {
            current: PlayerState {
                pos: starting_positions.0,
                score: 0,
            },
            other: PlayerState {
                pos: starting_positions.1,
                score: 0,
            },
        };
        let mut cache = HashMap::new();
        let outcome = outcomes(start, &mut cache);
        outcome.win.max(outcome.lose)
    }

    #[test]
    fn test_play() {
        assert_eq!(play((4, 8)), 444356092776315);
    }
}

/// How many of the 27 three-roll universes produce each total.
fn dirac_roll_frequencies() -> Vec<(u32, u64)> {
    let faces = [1u32, 2, 3];
    let mut frequencies: HashMap<u32, u64> = HashMap::new();
    for ((first, second), third) in cartesian_product(&cartesian_product(&faces, &faces), &faces) {
        *frequencies.entry(first + second + third).or_insert(0) += 1;
    }
    let mut result: Vec<(u32, u64)> = frequencies.into_iter().collect();
    result.sort_unstable();
    result
}

#[test]
fn test_dirac_roll_frequencies() {
    let frequencies = dirac_roll_frequencies();
    assert_eq!(
        frequencies,
        vec![(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)]
    );
    assert_eq!(frequencies.iter().map(|(_, n)| n).sum::<u64>(), 27);
}

#[test]
fn test_next_pos() {
    assert_eq!(next_pos(4, 3), 7);
    assert_eq!(next_pos(4, 6), 10);
    assert_eq!(next_pos(4, 7), 1);
}

fn parse_input(lines: &[String]) -> Result<(u32, u32), String> {
    let pattern = Regex::new(r"^Player \d+ starting position: (\d+)$").expect("valid regex");
    let positions: Vec<u32> = lines
        .iter()
        .map(|line| {
            pattern
                .captures(line)
                .ok_or_else(|| format!("unexpected line: '{}'", line))
                .and_then(|groups| {
                    groups[1]
                        .parse()
                        .map_err(|_| format!("bad position: '{}'", line))
                })
        })
        .collect::<Result<Vec<u32>, String>>()?;
    match positions.as_slice() {
        [first, second] => Ok((*first, *second)),
        _ => Err(format!("expected two players, got {}", positions.len())),
    }
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let starting_positions = parse_input(&lines).expect("valid starting positions");
    println!("Day 21 part 1: {}", part1::play(starting_positions));
    println!("Day 21 part 2: {}", part2::play(starting_positions));
}
