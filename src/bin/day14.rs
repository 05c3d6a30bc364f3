use std::collections::HashMap;
use std::io;
use std::io::prelude::*;

type Pair = (char, char);
type Rules = HashMap<Pair, char>;

/// The polymer as adjacent-pair counts; the string itself becomes
/// astronomically long, its pair histogram does not.
fn pair_counts(template: &str) -> HashMap<Pair, u64> {
    let chars: Vec<char> = template.chars().collect();
    let mut counts = HashMap::new();
    for window in chars.windows(2) {
        *counts.entry((window[0], window[1])).or_insert(0) += 1;
    }
    counts
}

fn apply_rules_once(pairs: &HashMap<Pair, u64>, rules: &Rules) -> HashMap<Pair, u64> {
    let mut next: HashMap<Pair, u64> = HashMap::new();
    for (&(left, right), &count) in pairs {
        match rules.get(&(left, right)) {
            Some(&inserted) => {
                *next.entry((left, inserted)).or_insert(0) += count;
                *next.entry((inserted, right)).or_insert(0) += count;
            }
            None => {
                *next.entry((left, right)).or_insert(0) += count;
            }
        }
    }
    next
}

/// Element histogram after `steps` insertions: the left element of every
/// pair, plus the template's last element, which no insertion moves.
fn element_counts(template: &str, steps: usize, rules: &Rules) -> HashMap<char, u64> {
    let mut pairs = pair_counts(template);
    for _ in 0..steps {
        pairs = apply_rules_once(&pairs, rules);
    }
    let mut histogram: HashMap<char, u64> = HashMap::new();
    for (&(left, _), &count) in &pairs {
        *histogram.entry(left).or_insert(0) += count;
    }
    if let Some(last) = template.chars().last() {
        *histogram.entry(last).or_insert(0) += 1;
    }
    histogram
}

fn solve(template: &str, rules: &Rules, steps: usize) -> u64 {
    let histogram = element_counts(template, steps, rules);
    let most = histogram.values().max().expect("non-empty template");
    let least = histogram.values().min().expect("non-empty template");
    most - least
}

fn parse_rule(line: &str) -> Result<(Pair, char), String> {
    if let Some((pair, inserted)) = line.split_once(" -> ") {
        let pair: Vec<char> = pair.chars().collect();
        let inserted: Vec<char> = inserted.chars().collect();
        if let (&[left, right], &[inserted]) = (pair.as_slice(), inserted.as_slice()) {
            return Ok(((left, right), inserted));
        }
    }
    Err(format!("unexpected rule: {}", line))
}

fn parse_input(input: &str) -> Result<(String, Rules), String> {
    match input.split_once("\n\n") {
        Some((template, tail)) => {
            let rules = tail
                .split_terminator('\n')
                .map(parse_rule)
                .collect::<Result<Rules, String>>()?;
            Ok((template.to_string(), rules))
        }
        None => Err("missing blank line".to_string()),
    }
}

fn part1(template: &str, rules: &Rules) -> u64 {
    solve(template, rules, 10)
}

fn part2(template: &str, rules: &Rules) -> u64 {
    solve(template, rules, 40)
}

#[cfg(test)]
const EXAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C";

#[cfg(test)]
fn example() -> (String, Rules) {
    parse_input(EXAMPLE).expect("valid example")
}

#[test]
fn test_parse_rule() {
    assert_eq!(parse_rule("AB -> C"), Ok((('A', 'B'), 'C')));
    assert!(parse_rule("AB ->C").is_err());
    assert!(parse_rule("AB -> ").is_err());
}

#[test]
fn test_single_step() {
    let (template, rules) = example();
    // NNCB -> NCNBCHB
    assert_eq!(
        apply_rules_once(&pair_counts(&template), &rules),
        pair_counts("NCNBCHB")
    );
    assert_eq!(
        apply_rules_once(&pair_counts("NCNBCHB"), &rules),
        pair_counts("NBCCNBBBCBHCB")
    );
}

#[test]
fn test_part1() {
    let (template, rules) = example();
    assert_eq!(part1(&template, &rules), 1588);
}

#[test]
fn test_part2() {
    let (template, rules) = example();
    assert_eq!(part2(&template, &rules), 2188189693529);
}

fn main() {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("readable input");
    let (template, rules) = parse_input(&input).expect("valid polymer input");
    println!("Day 14 part 1: {}", part1(&template, &rules));
    println!("Day 14 part 2: {}", part2(&template, &rules));
}
