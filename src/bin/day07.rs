use std::io;
use std::io::prelude::*;

/// Try every candidate meeting position and keep the cheapest total.
fn cheapest_formation<F: Fn(i32, i32) -> i32>(positions: &[i32], fuel_cost: F) -> i32 {
    let min_pos = *positions.iter().min().expect("at least one crab");
    let max_pos = *positions.iter().max().expect("at least one crab");
    (min_pos..=max_pos)
        .map(|destination| {
            positions
                .iter()
                .map(|&pos| fuel_cost(pos, destination))
                .sum()
        })
        .min()
        .expect("at least one candidate position")
}

fn part1(positions: &[i32]) -> i32 {
    cheapest_formation(positions, |pos, destination| (pos - destination).abs())
}

fn part2(positions: &[i32]) -> i32 {
    cheapest_formation(positions, |pos, destination| {
        let distance = (pos - destination).abs();
        distance * (distance + 1) / 2
    })
}

#[cfg(test)]
const EXAMPLE: [i32; 10] = [16, 1, 2, 0, 4, 2, 7, 1, 2, 14];

#[test]
fn test_part1() {
    assert_eq!(part1(&EXAMPLE), 37);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&EXAMPLE), 168);
}

fn main() {
    let first_line = io::BufReader::new(io::stdin())
        .lines()
        .next()
        .map(|thing| thing.unwrap())
        .expect("non-empty input");
    let positions: Vec<i32> = first_line
        .split(',')
        .map(|s| s.parse().expect("valid position"))
        .collect();
    println!("Day 07 part 1: {}", part1(&positions));
    println!("Day 07 part 2: {}", part2(&positions));
}
