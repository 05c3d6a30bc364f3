use std::io;
use std::io::prelude::*;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{map, map_res, value},
    sequence::separated_pair,
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Down,
    Up,
}

#[derive(Debug, PartialEq, Eq)]
struct Command {
    direction: Direction,
    units: i64,
}

fn parse_direction(input: &str) -> IResult<&str, Direction> {
    alt((
        value(Direction::Forward, tag("forward")),
        value(Direction::Down, tag("down")),
        value(Direction::Up, tag("up")),
    ))(input)
}

fn parse_command(input: &str) -> IResult<&str, Command> {
    map(
        separated_pair(
            parse_direction,
            tag(" "),
            map_res(digit1, FromStr::from_str),
        ),
        |(direction, units)| Command { direction, units },
    )(input)
}

impl TryFrom<&str> for Command {
    type Error = String;
    fn try_from(s: &str) -> Result<Command, String> {
        match parse_command(s) {
            Ok(("", command)) => Ok(command),
            Ok((tail, _)) => Err(format!("trailing junk: '{}'", tail)),
            Err(e) => Err(format!("failed to parse '{}': {}", s, e)),
        }
    }
}

fn part1(commands: &[Command]) -> i64 {
    let mut horizontal = 0;
    let mut depth = 0;
    for command in commands {
        match command.direction {
            Direction::Forward => horizontal += command.units,
            Direction::Down => depth += command.units,
            Direction::Up => depth -= command.units,
        }
    }
    horizontal * depth
}

fn part2(commands: &[Command]) -> i64 {
    let mut horizontal = 0;
    let mut depth = 0;
    let mut aim = 0;
    for command in commands {
        match command.direction {
            Direction::Forward => {
                horizontal += command.units;
                depth += aim * command.units;
            }
            Direction::Down => aim += command.units,
            Direction::Up => aim -= command.units,
        }
    }
    horizontal * depth
}

#[cfg(test)]
fn example_commands() -> Vec<Command> {
    [
        "forward 5",
        "down 5",
        "forward 8",
        "up 3",
        "down 8",
        "forward 2",
    ]
    .iter()
    .map(|line| Command::try_from(*line).expect("valid example"))
    .collect()
}

#[test]
fn test_parse_command() {
    assert_eq!(
        Command::try_from("forward 8"),
        Ok(Command {
            direction: Direction::Forward,
            units: 8,
        })
    );
    assert!(Command::try_from("sideways 3").is_err());
    assert!(Command::try_from("up").is_err());
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_commands()), 150);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_commands()), 900);
}

fn main() {
    let commands: Vec<Command> = io::BufReader::new(io::stdin())
        .lines()
        .map(|line| Command::try_from(line.unwrap().as_str()).expect("valid course command"))
        .collect();
    println!("Day 02 part 1: {}", part1(&commands));
    println!("Day 02 part 2: {}", part2(&commands));
}
