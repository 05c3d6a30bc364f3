use std::io;
use std::io::prelude::*;

#[derive(Debug, PartialEq, Eq)]
enum LineScore {
    /// First illegal closing bracket, scored.
    Corrupt(u64),
    /// Completion score for the unclosed brackets, innermost first.
    Incomplete(u64),
}

fn closing(bracket: char) -> Option<char> {
    match bracket {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn corruption_score(bracket: char) -> u64 {
    match bracket {
        ')' => 3,
        ']' => 57,
        '}' => 1197,
        '>' => 25137,
        _ => panic!("no corruption score for '{}'", bracket),
    }
}

fn completion_score(bracket: char) -> u64 {
    match bracket {
        ')' => 1,
        ']' => 2,
        '}' => 3,
        '>' => 4,
        _ => panic!("no completion score for '{}'", bracket),
    }
}

fn score_line(line: &str) -> LineScore {
    let mut stack: Vec<char> = Vec::new();
    for bracket in line.chars() {
        if let Some(close) = closing(bracket) {
            stack.push(close);
        } else {
            match stack.pop() {
                Some(expected) if expected == bracket => (),
                _ => return LineScore::Corrupt(corruption_score(bracket)),
            }
        }
    }
    let score = stack
        .iter()
        .rev()
        .fold(0, |acc, &close| acc * 5 + completion_score(close));
    LineScore::Incomplete(score)
}

fn part1(lines: &[String]) -> u64 {
    lines
        .iter()
        .filter_map(|line| match score_line(line) {
            LineScore::Corrupt(score) => Some(score),
            LineScore::Incomplete(_) => None,
        })
        .sum()
}

fn part2(lines: &[String]) -> u64 {
    let mut scores: Vec<u64> = lines
        .iter()
        .filter_map(|line| match score_line(line) {
            LineScore::Incomplete(score) => Some(score),
            LineScore::Corrupt(_) => None,
        })
        .collect();
    scores.sort_unstable();
    scores[scores.len() / 2]
}

#[cfg(test)]
fn example_lines() -> Vec<String> {
    [
        "[({(<(())[]>[[{[]{<()<>>",
        "[(()[<>])]({[<{<<[]>>(",
        "{([(<{}[<>[]}>{[]{[(<()>",
        "(((({<>}<{<{<>}{[]{[]{}",
        "[[<[([]))<([[{}[[()]]]",
        "[{[{({}]{}}([{[{{{}}([]",
        "{<[[]]>}<{[{[{[]{()[[[]",
        "[<(<(<(<{}))><([]([]()",
        "<{([([[(<>()){}]>(<<{{",
        "<{([{{}}[<[[[<>{}]]]>[]]",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[test]
fn test_score_line() {
    assert_eq!(
        score_line("{([(<{}[<>[]}>{[]{[(<()>"),
        LineScore::Corrupt(1197)
    );
    assert_eq!(
        score_line("<{([([[(<>()){}]>(<<{{"),
        LineScore::Corrupt(25137)
    );
    assert_eq!(
        score_line("<{([{{}}[<[[[<>{}]]]>[]]"),
        LineScore::Incomplete(294)
    );
    assert_eq!(
        score_line("[({(<(())[]>[[{[]{<()<>>"),
        LineScore::Incomplete(288957)
    );
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_lines()), 26397);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_lines()), 288957);
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    println!("Day 10 part 1: {}", part1(&lines));
    println!("Day 10 part 2: {}", part2(&lines));
}
