use std::io;
use std::io::prelude::*;

use ndarray::prelude::*;

use aoc2021::{neighbours, ADJACENT_8};

const FLASH_LEVEL: u32 = 10;
/// Sentinel for a cell that already flashed this step.
const FLASHED: u32 = 11;

#[derive(Debug, Clone)]
struct Grid {
    energy: Array2<u32>,
    steps: usize,
    total_flashes: usize,
}

impl TryFrom<&[String]> for Grid {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<Grid, String> {
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
                            .ok_or_else(|| format!("invalid energy level '{}'", ch))
                    })
                    .collect()
            })
            .collect::<Result<Vec<Vec<u32>>, String>>()?;
        Ok(Grid {
            energy: Array::from_shape_fn((height, width), |(y, x)| cells[y][x]),
            steps: 0,
            total_flashes: 0,
        })
    }
}

impl Grid {
    fn octopuses(&self) -> usize {
        self.energy.len()
    }

    fn height(&self) -> i32 {
        self.energy.nrows() as i32
    }

    fn width(&self) -> i32 {
        self.energy.ncols() as i32
    }

    fn cascade(&mut self, y: i32, x: i32) {
        if self.energy[(y as usize, x as usize)] != FLASH_LEVEL {
            return;
        }
        self.energy[(y as usize, x as usize)] = FLASHED;
        for n in neighbours(y, x, self.height(), self.width(), &ADJACENT_8) {
            let cell = (n.y as usize, n.x as usize);
            if self.energy[cell] < FLASH_LEVEL {
                self.energy[cell] += 1;
                self.cascade(n.y, n.x);
            }
        }
    }

    fn step(&mut self) -> usize {
        for cell in self.energy.iter_mut() {
            *cell += 1;
        }
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.cascade(y, x);
            }
        }
        let mut flashed_in_step = 0;
        for cell in self.energy.iter_mut() {
            if *cell == FLASHED {
                flashed_in_step += 1;
                *cell = 0;
            }
        }
        self.steps += 1;
        self.total_flashes += flashed_in_step;
        flashed_in_step
    }
}

fn part1(mut grid: Grid, steps: usize) -> usize {
    for _ in 0..steps {
        grid.step();
    }
    grid.total_flashes
}

fn part2(mut grid: Grid) -> usize {
    while grid.step() != grid.octopuses() {}
    grid.steps
}

#[cfg(test)]
fn grid_from(lines: &[&str]) -> Grid {
    let owned: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    Grid::try_from(owned.as_slice()).expect("valid example")
}

#[cfg(test)]
fn example_grid() -> Grid {
    grid_from(&[
        "5483143223",
        "2745854711",
        "5264556173",
        "6141336146",
        "6357385478",
        "4167524645",
        "2176841721",
        "6882881134",
        "4846848554",
        "5283751526",
    ])
}

#[test]
fn test_small_cascade() {
    let grid = grid_from(&["11111", "19991", "19191", "19991", "11111"]);
    assert_eq!(part1(grid, 2), 9);
}

#[test]
fn test_part1() {
    assert_eq!(part1(example_grid(), 10), 204);
    assert_eq!(part1(example_grid(), 100), 1656);
}

#[test]
fn test_part2() {
    assert_eq!(part2(example_grid()), 195);
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let grid = Grid::try_from(lines.as_slice()).expect("valid energy grid");
    println!("Day 11 part 1: {}", part1(grid.clone(), 100));
    println!("Day 11 part 2: {}", part2(grid));
}
