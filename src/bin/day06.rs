use std::io;
use std::io::prelude::*;

/// One day of naive simulation: every timer ticks down, every expired
/// timer resets to 6 and spawns an 8.
fn generation(fish: &[u32]) -> Vec<u32> {
    let births = fish.iter().filter(|&&timer| timer == 0).count();
    let mut next: Vec<u32> = fish
        .iter()
        .map(|&timer| if timer == 0 { 6 } else { timer - 1 })
        .collect();
    next.resize(next.len() + births, 8);
    next
}

fn part1(fish: &[u32], days: usize) -> usize {
    let mut population = fish.to_vec();
    for _ in 0..days {
        population = generation(&population);
    }
    population.len()
}

/// The population only matters per timer value, so 256 days is a walk
/// over nine buckets.
fn part2(fish: &[u32], days: usize) -> u64 {
    let mut buckets = [0u64; 9];
    for &timer in fish {
        buckets[timer as usize] += 1;
    }
    for _ in 0..days {
        let expired = buckets[0];
        buckets.rotate_left(1);
        buckets[6] += expired;
    }
    buckets.iter().sum()
}

#[cfg(test)]
const EXAMPLE: [u32; 5] = [3, 4, 3, 1, 2];

#[test]
fn test_generation() {
    assert_eq!(generation(&EXAMPLE), vec![2, 3, 2, 0, 1]);
    assert_eq!(generation(&[2, 3, 2, 0, 1]), vec![1, 2, 1, 6, 0, 8]);
}

#[test]
fn test_part1() {
    assert_eq!(part1(&EXAMPLE, 18), 26);
    assert_eq!(part1(&EXAMPLE, 80), 5934);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&EXAMPLE, 80), 5934);
    assert_eq!(part2(&EXAMPLE, 256), 26984457539);
}

fn main() {
    let first_line = io::BufReader::new(io::stdin())
        .lines()
        .next()
        .map(|thing| thing.unwrap())
        .expect("non-empty input");
    let fish: Vec<u32> = first_line
        .split(',')
        .map(|s| s.parse().expect("valid timer"))
        .collect();
    println!("Day 06 part 1: {}", part1(&fish, 80));
    println!("Day 06 part 2: {}", part2(&fish, 256));
}
