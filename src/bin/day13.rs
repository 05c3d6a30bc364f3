use std::cmp::max;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::io::prelude::*;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fold {
    line: i32,
    /// true folds along a horizontal line (y = line), false along a
    /// vertical one (x = line).
    horizontal: bool,
}

#[derive(Debug, Clone)]
struct TransparentPaper {
    /// Dots as (y, x).
    dots: HashSet<(i32, i32)>,
    width: i32,
    height: i32,
    folds: VecDeque<Fold>,
}

impl TransparentPaper {
    fn keep_folding(&self) -> bool {
        !self.folds.is_empty()
    }

    fn fold_once(&mut self) {
        let fold = self.folds.pop_front().expect("a fold left to apply");
        let folded = self
            .dots
            .iter()
            .filter_map(|&(y, x)| {
                if fold.horizontal {
                    if y == fold.line {
                        // The crease itself carries no dots.
                        None
                    } else {
                        Some((fold.line - (y - fold.line).abs(), x))
                    }
                } else if x == fold.line {
                    None
                } else {
                    Some((y, fold.line - (x - fold.line).abs()))
                }
            })
            .collect();
        self.dots = folded;
        if fold.horizontal {
            self.height = max(self.height - fold.line - 1, fold.line);
        } else {
            self.width = max(self.width - fold.line - 1, fold.line);
        }
    }

    fn count(&self) -> usize {
        self.dots.len()
    }
}

impl Display for TransparentPaper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                f.write_str(if self.dots.contains(&(y, x)) {
                    "#"
                } else {
                    "."
                })?;
            }
        }
        Ok(())
    }
}

fn parse_input(lines: &[String]) -> Result<TransparentPaper, String> {
    let dot_pattern = Regex::new(r"^(\d+),(\d+)$").expect("valid regex");
    let fold_pattern = Regex::new(r"^fold along ([xy])=(\d+)$").expect("valid regex");
    let mut dots: HashSet<(i32, i32)> = HashSet::new();
    let mut folds: VecDeque<Fold> = VecDeque::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some(groups) = dot_pattern.captures(line) {
            let x: i32 = groups[1].parse().map_err(|_| format!("bad dot: {}", line))?;
            let y: i32 = groups[2].parse().map_err(|_| format!("bad dot: {}", line))?;
            dots.insert((y, x));
        } else if let Some(groups) = fold_pattern.captures(line) {
            folds.push_back(Fold {
                line: groups[2]
                    .parse()
                    .map_err(|_| format!("bad fold: {}", line))?,
                horizontal: &groups[1] == "y",
            });
        } else {
            return Err(format!("invalid row: \"{}\"", line));
        }
    }
    let height = dots.iter().map(|&(y, _)| y).max().unwrap_or(0) + 1;
    let width = dots.iter().map(|&(_, x)| x).max().unwrap_or(0) + 1;
    Ok(TransparentPaper {
        dots,
        width,
        height,
        folds,
    })
}

fn part1(mut paper: TransparentPaper) -> usize {
    paper.fold_once();
    paper.count()
}

fn part2(mut paper: TransparentPaper) -> String {
    while paper.keep_folding() {
        paper.fold_once();
    }
    paper.to_string()
}

#[cfg(test)]
const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5";

#[cfg(test)]
fn example_paper() -> TransparentPaper {
    let lines: Vec<String> = EXAMPLE.lines().map(|line| line.to_string()).collect();
    parse_input(&lines).expect("valid example")
}

#[test]
fn test_part1() {
    assert_eq!(part1(example_paper()), 17);
}

#[test]
fn test_part2() {
    let expected = "\
#####
#...#
#...#
#...#
#####
.....
.....";
    assert_eq!(part2(example_paper()), expected);
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let paper = parse_input(&lines).expect("valid instructions");
    println!("Day 13 part 1: {}", part1(paper.clone()));
    println!("Day 13 part 2:\n{}", part2(paper));
}
