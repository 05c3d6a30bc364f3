use std::io;
use std::io::prelude::*;

fn ones_at(numbers: &[&str], pos: usize) -> usize {
    numbers
        .iter()
        .filter(|number| number.as_bytes()[pos] == b'1')
        .count()
}

fn part1(numbers: &[&str]) -> u32 {
    let bits = numbers[0].len();
    let mut gamma = 0;
    let mut epsilon = 0;
    for pos in 0..bits {
        gamma <<= 1;
        epsilon <<= 1;
        if 2 * ones_at(numbers, pos) > numbers.len() {
            gamma |= 1;
        } else {
            epsilon |= 1;
        }
    }
    gamma * epsilon
}

/// Repeatedly discard numbers whose bit at the current position is not
/// the most (or least) common among the survivors; ties keep '1' for the
/// oxygen rating and '0' for the CO2 rating.
fn rating(numbers: &[&str], keep_most_common: bool) -> Result<u32, String> {
    let bits = numbers[0].len();
    let mut remaining: Vec<&str> = numbers.to_vec();
    for pos in 0..bits {
        if remaining.len() == 1 {
            break;
        }
        let ones = ones_at(&remaining, pos);
        let zeros = remaining.len() - ones;
        let keep = match (keep_most_common, ones >= zeros) {
            (true, true) | (false, false) => b'1',
            _ => b'0',
        };
        remaining.retain(|number| number.as_bytes()[pos] == keep);
    }
    match remaining.as_slice() {
        [survivor] => u32::from_str_radix(survivor, 2).map_err(|e| e.to_string()),
        _ => Err(format!(
            "expected exactly one number left, got {}",
            remaining.len()
        )),
    }
}

fn part2(numbers: &[&str]) -> Result<u32, String> {
    let oxygen_generator = rating(numbers, true)?;
    let co2_scrubber = rating(numbers, false)?;
    Ok(oxygen_generator * co2_scrubber)
}

#[cfg(test)]
const EXAMPLE: [&str; 12] = [
    "00100", "11110", "10110", "10111", "10101", "01111", "00111", "11100", "10000", "11001",
    "00010", "01010",
];

#[test]
fn test_part1() {
    assert_eq!(part1(&EXAMPLE), 198);
}

#[test]
fn test_ratings() {
    assert_eq!(rating(&EXAMPLE, true), Ok(23));
    assert_eq!(rating(&EXAMPLE, false), Ok(10));
    assert_eq!(part2(&EXAMPLE), Ok(230));
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let numbers: Vec<&str> = lines.iter().map(|line| line.as_str()).collect();
    println!("Day 03 part 1: {}", part1(&numbers));
    println!(
        "Day 03 part 2: {}",
        part2(&numbers).expect("diagnostic report should yield both ratings")
    );
}
