use std::io;
use std::io::prelude::*;

use ndarray::prelude::*;
use pathfinding::directed::dijkstra::dijkstra;

use aoc2021::{neighbours, Point, ORTHOGONAL};

#[derive(Debug)]
struct RiskMap {
    risk: Array2<u32>,
}

impl TryFrom<&[String]> for RiskMap {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<RiskMap, String> {
        if lines.is_empty() {
            return Err("no data".to_string());
        }
        let height = lines.len();
        let width = lines[0].len();
        let cells: Vec<Vec<u32>> = lines
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| {
                        ch.to_digit(10)
                            .ok_or_else(|| format!("invalid risk level '{}'", ch))
                    })
                    .collect()
            })
            .collect::<Result<Vec<Vec<u32>>, String>>()?;
        Ok(RiskMap {
            risk: Array::from_shape_fn((height, width), |(y, x)| cells[y][x]),
        })
    }
}

impl RiskMap {
    fn height(&self) -> i32 {
        self.risk.nrows() as i32
    }

    fn width(&self) -> i32 {
        self.risk.ncols() as i32
    }

    /// Risk at a point of the virtually tiled map: each tile repeats the
    /// base grid with risk bumped by its tile distance, wrapped into 1..9.
    fn tiled_risk(&self, p: &Point) -> u32 {
        let base = self.risk[((p.y % self.height()) as usize, (p.x % self.width()) as usize)];
        (base + (p.y / self.height() + p.x / self.width()) as u32 - 1) % 9 + 1
    }

    fn lowest_total_risk(&self, repetition: i32) -> u32 {
        let height = self.height() * repetition;
        let width = self.width() * repetition;
        let goal = Point::new(height - 1, width - 1);
        let successors = |p: &Point| -> Vec<(Point, u32)> {
            neighbours(p.y, p.x, height, width, &ORTHOGONAL)
                .into_iter()
                .map(|n| {
                    let risk = self.tiled_risk(&n);
                    (n, risk)
                })
                .collect()
        };
        match dijkstra(&Point::ZERO, successors, |p| *p == goal) {
            Some((_path, cost)) => cost,
            None => panic!("no route to {}", goal),
        }
    }
}

fn part1(map: &RiskMap) -> u32 {
    map.lowest_total_risk(1)
}

fn part2(map: &RiskMap) -> u32 {
    map.lowest_total_risk(5)
}

#[cfg(test)]
fn map_from(lines: &[&str]) -> RiskMap {
    let owned: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    RiskMap::try_from(owned.as_slice()).expect("valid example")
}

#[cfg(test)]
fn example_map() -> RiskMap {
    map_from(&[
        "1163751742",
        "1381373672",
        "2136511328",
        "3694931569",
        "7463417111",
        "1319128137",
        "1359912421",
        "3125421639",
        "1293138521",
        "2311944581",
    ])
}

#[test]
fn test_tiled_risk() {
    let single = map_from(&["8"]);
    let tiled: Vec<Vec<u32>> = (0..5)
        .map(|y| (0..5).map(|x| single.tiled_risk(&Point::new(y, x))).collect())
        .collect();
    assert_eq!(
        tiled,
        vec![
            vec![8, 9, 1, 2, 3],
            vec![9, 1, 2, 3, 4],
            vec![1, 2, 3, 4, 5],
            vec![2, 3, 4, 5, 6],
            vec![3, 4, 5, 6, 7],
        ]
    );
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_map()), 40);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_map()), 315);
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let map = RiskMap::try_from(lines.as_slice()).expect("valid risk map");
    println!("Day 15 part 1: {}", part1(&map));
    println!("Day 15 part 2: {}", part2(&map));
}
