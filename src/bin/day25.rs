use std::io;
use std::io::prelude::*;

use ndarray::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    East,
    South,
}

impl TryFrom<char> for Cell {
    type Error = String;
    fn try_from(ch: char) -> Result<Cell, String> {
        match ch {
            '.' => Ok(Cell::Empty),
            '>' => Ok(Cell::East),
            'v' => Ok(Cell::South),
            _ => Err(format!("unknown sea floor cell '{}'", ch)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SeaFloor {
    cells: Array2<Cell>,
}

impl TryFrom<&[String]> for SeaFloor {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<SeaFloor, String> {
        if lines.is_empty() {
            return Err("no data".to_string());
        }
        let height = lines.len();
        let width = lines[0].len();
        let rows: Vec<Vec<Cell>> = lines
            .iter()
            .map(|line| line.chars().map(Cell::try_from).collect())
            .collect::<Result<Vec<Vec<Cell>>, String>>()?;
        Ok(SeaFloor {
            cells: Array::from_shape_fn((height, width), |(y, x)| rows[y][x]),
        })
    }
}

impl SeaFloor {
    fn height(&self) -> usize {
        self.cells.nrows()
    }

    fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Move every cucumber of one herd a single cell, wrapping at the
    /// edges; the whole herd inspects the old grid and moves at once.
    fn herd_step<F>(&self, herd: Cell, destination: F) -> (SeaFloor, bool)
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let mut next = Array::from_elem(self.cells.raw_dim(), Cell::Empty);
        let mut moved = false;
        for ((y, x), &cell) in self.cells.indexed_iter() {
            if cell == Cell::Empty {
                continue;
            }
            if cell == herd {
                let (ny, nx) = destination(y, x);
                if self.cells[(ny, nx)] == Cell::Empty {
                    next[(ny, nx)] = cell;
                    moved = true;
                    continue;
                }
            }
            next[(y, x)] = cell;
        }
        (SeaFloor { cells: next }, moved)
    }

    fn step(&self) -> (SeaFloor, bool) {
        let width = self.width();
        let height = self.height();
        let (after_east, east_moved) = self.herd_step(Cell::East, |y, x| (y, (x + 1) % width));
        let (after_south, south_moved) =
            after_east.herd_step(Cell::South, |y, x| ((y + 1) % height, x));
        (after_south, east_moved || south_moved)
    }
}

fn part1(floor: &SeaFloor) -> usize {
    let mut state = floor.clone();
    let mut steps = 0;
    loop {
        let (next, moved) = state.step();
        steps += 1;
        state = next;
        if !moved {
            return steps;
        }
    }
}

#[cfg(test)]
fn floor_from(lines: &[&str]) -> SeaFloor {
    let owned: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    SeaFloor::try_from(owned.as_slice()).expect("valid example")
}

#[test]
fn test_east_wraps() {
    let (after, moved) = floor_from(&["...>"]).step();
    assert!(moved);
    assert_eq!(after, floor_from(&[">..."]));
}

#[test]
fn test_south_blocks_east() {
    // The east mover is blocked, the south mover wraps.
    let (after, moved) = floor_from(&[">v", ".."]).step();
    assert!(moved);
    assert_eq!(after, floor_from(&[">.", ".v"]));
}

#[test]
fn test_part1() {
    let floor = floor_from(&[
        "v...>>.vv>",
        ".vv>>.vv..",
        ">>.>v>...v",
        ">>v>>.>.v.",
        "v>v.vv.v..",
        ">.>>..v...",
        ".vv..>.>v.",
        "v.v..>>v.v",
        "....v..v.>",
    ]);
    assert_eq!(part1(&floor), 58);
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let floor = SeaFloor::try_from(lines.as_slice()).expect("valid sea floor");
    println!("Day 25 part 1: {}", part1(&floor));
}
