use std::io;
use std::io::prelude::*;
use std::ops::RangeInclusive;

use regex::Regex;

#[derive(Debug, PartialEq, Eq)]
struct Area {
    x: RangeInclusive<i32>,
    y: RangeInclusive<i32>,
}

impl Area {
    fn contains(&self, x: i32, y: i32) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }
}

impl TryFrom<&str> for Area {
    type Error = String;
    fn try_from(s: &str) -> Result<Area, String> {
        let pattern = Regex::new(r"^target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)$")
            .expect("valid regex");
        let groups = pattern
            .captures(s)
            .ok_or_else(|| format!("unexpected target line: '{}'", s))?;
        let number = |i: usize| -> Result<i32, String> {
            groups[i].parse().map_err(|_| format!("bad number in '{}'", s))
        };
        Ok(Area {
            x: number(1)?..=number(2)?,
            y: number(3)?..=number(4)?,
        })
    }
}

/// Fly the probe until it drops below the target; the apex is reported
/// only for trajectories that pass through the area.
fn simulate(mut xv: i32, mut yv: i32, area: &Area) -> Option<i32> {
    let (mut x, mut y) = (0, 0);
    let mut apex = 0;
    while y >= *area.y.start() {
        x += xv;
        y += yv;
        apex = apex.max(y);
        if xv > 0 {
            xv -= 1; // drag
        }
        yv -= 1; // gravity
        if area.contains(x, y) {
            return Some(apex);
        }
    }
    None
}

fn part1(area: &Area) -> Option<i32> {
    // Horizontal velocities outside this band either stall short of the
    // target or overshoot it on the first step.
    let min_xv = ((2.0 * *area.x.start() as f64).sqrt().floor() as i32) - 1;
    let max_xv = ((2.0 * *area.x.start() as f64).sqrt().ceil() as i32) + 1;
    let mut best = None;
    for xv in min_xv..=max_xv {
        for yv in 0..=2000 {
            if let Some(apex) = simulate(xv, yv, area) {
                best = Some(best.map_or(apex, |b: i32| b.max(apex)));
            }
        }
    }
    best
}

fn part2(area: &Area) -> usize {
    let mut hits = 0;
    for xv in 0..=*area.x.end() {
        for yv in *area.y.start()..=2000 {
            if simulate(xv, yv, area).is_some() {
                hits += 1;
            }
        }
    }
    hits
}

#[cfg(test)]
fn example_area() -> Area {
    Area::try_from("target area: x=20..30, y=-10..-5").expect("valid example")
}

#[test]
fn test_parse_target() {
    assert_eq!(
        example_area(),
        Area {
            x: 20..=30,
            y: -10..=-5,
        }
    );
    assert!(Area::try_from("target area: x=20..30").is_err());
}

#[test]
fn test_simulate() {
    let area = example_area();
    assert!(simulate(7, 2, &area).is_some());
    assert_eq!(simulate(6, 9, &area), Some(45));
    assert_eq!(simulate(-7, 2, &area), None);
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_area()), Some(45));
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_area()), 112);
}

fn main() {
    let first_line = io::BufReader::new(io::stdin())
        .lines()
        .next()
        .map(|thing| thing.unwrap())
        .expect("non-empty input");
    let area = Area::try_from(first_line.as_str()).expect("valid target area");
    match part1(&area) {
        Some(apex) => println!("Day 17 part 1: {}", apex),
        None => println!("Day 17 part 1: no hit found"),
    }
    println!("Day 17 part 2: {}", part2(&area));
}
