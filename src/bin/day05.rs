use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::io::prelude::*;
use std::num::ParseIntError;

use aoc2021::{cartesian_product, Point};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Tunnel {
    from: Point,
    to: Point,
}

fn str_to_i32(s: &str) -> Result<i32, String> {
    s.parse().map_err(|e: ParseIntError| e.to_string())
}

fn parse_point(s: &str) -> Result<Point, String> {
    match s.split(',').collect::<Vec<_>>().as_slice() {
        [x, y] => Ok(Point::new(str_to_i32(y)?, str_to_i32(x)?)),
        _ => Err(format!("expected x,y: '{}'", s)),
    }
}

impl TryFrom<&str> for Tunnel {
    type Error = String;
    fn try_from(s: &str) -> Result<Tunnel, String> {
        match s.split(" -> ").collect::<Vec<_>>().as_slice() {
            [from, to] => Ok(Tunnel {
                from: parse_point(from)?,
                to: parse_point(to)?,
            }),
            _ => Err(format!("expected from -> to: '{}'", s)),
        }
    }
}

impl Display for Tunnel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Inclusive walk from one coordinate to the other, in either direction.
fn toward(from: i32, to: i32) -> Vec<i32> {
    if from <= to {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    }
}

impl Tunnel {
    fn diagonal(&self) -> bool {
        self.from.x != self.to.x && self.from.y != self.to.y
    }

    fn cells(&self) -> Vec<Point> {
        let xs = toward(self.from.x, self.to.x);
        let ys = toward(self.from.y, self.to.y);
        if self.diagonal() {
            xs.iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Point::new(y, x))
                .collect()
        } else {
            cartesian_product(&xs, &ys)
                .into_iter()
                .map(|(x, y)| Point::new(y, x))
                .collect()
        }
    }
}

fn count_overlaps<'a>(tunnels: impl Iterator<Item = &'a Tunnel>) -> usize {
    let mut covered: HashMap<Point, usize> = HashMap::new();
    for tunnel in tunnels {
        for cell in tunnel.cells() {
            *covered.entry(cell).or_insert(0) += 1;
        }
    }
    covered.values().filter(|count| **count >= 2).count()
}

fn part1(tunnels: &[Tunnel]) -> usize {
    count_overlaps(tunnels.iter().filter(|t| !t.diagonal()))
}

fn part2(tunnels: &[Tunnel]) -> usize {
    count_overlaps(tunnels.iter())
}

#[cfg(test)]
fn example_tunnels() -> Vec<Tunnel> {
    [
        "0,9 -> 5,9",
        "8,0 -> 0,8",
        "9,4 -> 3,4",
        "2,2 -> 2,1",
        "7,0 -> 7,4",
        "6,4 -> 2,0",
        "0,9 -> 2,9",
        "3,4 -> 1,4",
        "0,0 -> 8,8",
        "5,5 -> 8,2",
    ]
    .iter()
    .map(|line| Tunnel::try_from(*line).expect("valid example"))
    .collect()
}

#[test]
fn test_diagonal_cells() {
    let tunnel = Tunnel::try_from("9,7 -> 7,9").expect("valid tunnel");
    assert!(tunnel.diagonal());
    assert_eq!(
        tunnel.cells(),
        vec![Point::new(7, 9), Point::new(8, 8), Point::new(9, 7)]
    );
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_tunnels()), 5);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_tunnels()), 12);
}

fn main() {
    let tunnels: Vec<Tunnel> = io::BufReader::new(io::stdin())
        .lines()
        .map(|line| Tunnel::try_from(line.unwrap().as_str()).expect("valid vent line"))
        .collect();
    println!("Day 05 part 1: {}", part1(&tunnels));
    println!("Day 05 part 2: {}", part2(&tunnels));
}
