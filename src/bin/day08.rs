use std::collections::HashSet;
use std::io;
use std::io::prelude::*;

type Pattern = HashSet<char>;

#[derive(Debug)]
struct Entry {
    patterns: Vec<Pattern>,
    output: Vec<Pattern>,
}

impl TryFrom<&str> for Entry {
    type Error = String;
    fn try_from(s: &str) -> Result<Entry, String> {
        match s.split(" | ").collect::<Vec<_>>().as_slice() {
            [patterns, output] => Ok(Entry {
                patterns: patterns.split(' ').map(|w| w.chars().collect()).collect(),
                output: output.split(' ').map(|w| w.chars().collect()).collect(),
            }),
            _ => Err(format!("expected patterns | output: '{}'", s)),
        }
    }
}

fn overlap(a: &Pattern, b: &Pattern) -> usize {
    a.intersection(b).count()
}

impl Entry {
    fn single<F: Fn(&Pattern) -> bool>(&self, digit: u32, predicate: F) -> &Pattern {
        let mut matches = self.patterns.iter().filter(|p| predicate(p));
        match (matches.next(), matches.next()) {
            (Some(pattern), None) => pattern,
            _ => panic!("entry has no unique pattern for digit {}", digit),
        }
    }

    /// Pin down each digit's scrambled pattern from segment counts and
    /// intersection sizes with the easy digits, then read the output.
    fn decode(&self) -> usize {
        let one = self.single(1, |p| p.len() == 2);
        let four = self.single(4, |p| p.len() == 4);
        let seven = self.single(7, |p| p.len() == 3);
        let eight = self.single(8, |p| p.len() == 7);
        let nine = self.single(9, |p| p.len() == 6 && overlap(p, four) == 4);
        let six = self.single(6, |p| p.len() == 6 && overlap(p, seven) == 2);
        let two = self.single(2, |p| p.len() == 5 && overlap(p, nine) == 4);
        let five = self.single(5, |p| p.len() == 5 && overlap(p, six) == 5);
        let three = self.single(3, |p| p.len() == 5 && overlap(p, seven) == 3);
        let nine_and_six: Pattern = nine.intersection(six).copied().collect();
        let zero = self.single(0, |p| p.len() == 6 && !nine_and_six.is_subset(p));
        let digits = [zero, one, two, three, four, five, six, seven, eight, nine];
        self.output
            .iter()
            .map(|rendered| {
                digits
                    .iter()
                    .position(|digit| *digit == rendered)
                    .expect("output should match a decoded digit")
            })
            .fold(0, |acc, digit| acc * 10 + digit)
    }
}

fn part1(entries: &[Entry]) -> usize {
    let unique_segment_counts = [2, 3, 4, 7];
    entries
        .iter()
        .flat_map(|entry| entry.output.iter())
        .filter(|rendered| unique_segment_counts.contains(&rendered.len()))
        .count()
}

fn part2(entries: &[Entry]) -> usize {
    entries.iter().map(Entry::decode).sum()
}

#[cfg(test)]
const EXAMPLE: [&str; 10] = [
    "be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe",
    "edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc",
    "fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg",
    "fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb",
    "aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea",
    "fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb",
    "dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe",
    "bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef",
    "egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb",
    "gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce",
];

#[cfg(test)]
fn example_entries() -> Vec<Entry> {
    EXAMPLE
        .iter()
        .map(|line| Entry::try_from(*line).expect("valid example"))
        .collect()
}

#[test]
fn test_decode_single_entry() {
    let entry = Entry::try_from(
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cacfedb gcbeafd | cdfeb fcadb cdfeb cdbaef",
    )
    .expect("valid entry");
    assert_eq!(entry.decode(), 5353);
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_entries()), 26);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_entries()), 61229);
}

fn main() {
    let entries: Vec<Entry> = io::BufReader::new(io::stdin())
        .lines()
        .map(|line| Entry::try_from(line.unwrap().as_str()).expect("valid entry"))
        .collect();
    println!("Day 08 part 1: {}", part1(&entries));
    println!("Day 08 part 2: {}", part2(&entries));
}
