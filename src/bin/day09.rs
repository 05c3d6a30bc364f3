use std::collections::HashSet;
use std::collections::VecDeque;
use std::io;
use std::io::prelude::*;

use ndarray::prelude::*;

use aoc2021::{neighbours, Point, ORTHOGONAL};

#[derive(Debug)]
struct HeightMap {
    heights: Array2<u32>,
}

impl TryFrom<&[String]> for HeightMap {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<HeightMap, String> {
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
                            .ok_or_else(|| format!("invalid cell '{}'", ch))
                    })
                    .collect()
            })
            .collect::<Result<Vec<Vec<u32>>, String>>()?;
        for row in &cells {
            if row.len() != width {
                return Err("ragged rows".to_string());
            }
        }
        let heights = Array::from_shape_fn((height, width), |(y, x)| cells[y][x]);
        Ok(HeightMap { heights })
    }
}

impl HeightMap {
    fn height(&self) -> i32 {
        self.heights.nrows() as i32
    }

    fn width(&self) -> i32 {
        self.heights.ncols() as i32
    }

    fn get(&self, p: &Point) -> u32 {
        self.heights[(p.y as usize, p.x as usize)]
    }

    fn neighbours(&self, p: &Point) -> Vec<Point> {
        neighbours(p.y, p.x, self.height(), self.width(), &ORTHOGONAL)
    }

    fn low_points(&self) -> Vec<Point> {
        let mut result = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let here = Point::new(y, x);
                if self
                    .neighbours(&here)
                    .iter()
                    .all(|n| self.get(n) > self.get(&here))
                {
                    result.push(here);
                }
            }
        }
        result
    }

    /// Flood outward from a low point; height-9 cells bound every basin.
    fn basin(&self, start: Point) -> HashSet<Point> {
        let mut visited: HashSet<Point> = HashSet::new();
        let mut queue: VecDeque<Point> = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            for n in self.neighbours(&current) {
                if self.get(&n) != 9 {
                    queue.push_back(n);
                }
            }
        }
        visited
    }
}

fn part1(map: &HeightMap) -> u32 {
    map.low_points().iter().map(|p| map.get(p) + 1).sum()
}

fn part2(map: &HeightMap) -> usize {
    let mut sizes: Vec<usize> = map
        .low_points()
        .into_iter()
        .map(|low| map.basin(low).len())
        .collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).product()
}

#[cfg(test)]
fn example_map() -> HeightMap {
    let lines: Vec<String> = [
        "2199943210",
        "3987894921",
        "9856789892",
        "8767896789",
        "9899965678",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect();
    HeightMap::try_from(lines.as_slice()).expect("valid example")
}

#[test]
fn test_low_points() {
    let map = example_map();
    let lows = map.low_points();
    assert_eq!(lows.len(), 4);
    assert!(lows.contains(&Point::new(0, 1)));
    assert!(lows.contains(&Point::new(0, 9)));
    assert!(lows.contains(&Point::new(2, 2)));
    assert!(lows.contains(&Point::new(4, 6)));
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_map()), 15);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_map()), 1134);
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let map = HeightMap::try_from(lines.as_slice()).expect("valid height map");
    println!("Day 09 part 1: {}", part1(&map));
    println!("Day 09 part 2: {}", part2(&map));
}
