use std::io;
use std::io::prelude::*;

const SIDE: usize = 5;

#[derive(Debug, Clone)]
struct Board {
    numbers: [[u32; SIDE]; SIDE],
    marked: [[bool; SIDE]; SIDE],
}

impl TryFrom<&[String]> for Board {
    type Error = String;
    fn try_from(rows: &[String]) -> Result<Board, String> {
        if rows.len() != SIDE {
            return Err(format!("expected {} rows, got {}", SIDE, rows.len()));
        }
        let mut numbers = [[0; SIDE]; SIDE];
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.split_whitespace().collect();
            if cells.len() != SIDE {
                return Err(format!("expected {} numbers in row '{}'", SIDE, row));
            }
            for (x, cell) in cells.iter().enumerate() {
                numbers[y][x] = cell.parse().map_err(|e| format!("bad cell '{}': {}", cell, e))?;
            }
        }
        Ok(Board {
            numbers,
            marked: [[false; SIDE]; SIDE],
        })
    }
}

impl Board {
    fn mark(&mut self, number: u32) {
        for y in 0..SIDE {
            for x in 0..SIDE {
                if self.numbers[y][x] == number {
                    self.marked[y][x] = true;
                }
            }
        }
    }

    fn is_winning(&self) -> bool {
        let full_row = self.marked.iter().any(|row| row.iter().all(|m| *m));
        let full_column = (0..SIDE).any(|x| self.marked.iter().all(|row| row[x]));
        full_row || full_column
    }

    fn score(&self, call: u32) -> u32 {
        let unmarked_sum: u32 = (0..SIDE)
            .flat_map(|y| (0..SIDE).map(move |x| (y, x)))
            .filter(|&(y, x)| !self.marked[y][x])
            .map(|(y, x)| self.numbers[y][x])
            .sum();
        unmarked_sum * call
    }
}

fn parse_input(lines: &[String]) -> Result<(Vec<u32>, Vec<Board>), String> {
    let calls: Vec<u32> = lines
        .first()
        .ok_or("empty input")?
        .split(',')
        .map(|s| s.parse().map_err(|e| format!("bad call '{}': {}", s, e)))
        .collect::<Result<Vec<u32>, String>>()?;
    let mut boards = Vec::new();
    let mut start = 2;
    while start + SIDE <= lines.len() {
        boards.push(Board::try_from(&lines[start..start + SIDE])?);
        start += SIDE + 1;
    }
    Ok((calls, boards))
}

/// Scores of every board, in the order they win.
fn play(calls: &[u32], mut boards: Vec<Board>) -> Vec<u32> {
    let mut scores = Vec::new();
    for &call in calls {
        for board in boards.iter_mut() {
            board.mark(call);
        }
        scores.extend(
            boards
                .iter()
                .filter(|board| board.is_winning())
                .map(|board| board.score(call)),
        );
        boards.retain(|board| !board.is_winning());
    }
    scores
}

#[cfg(test)]
const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

#[cfg(test)]
fn example_game() -> (Vec<u32>, Vec<Board>) {
    let lines: Vec<String> = EXAMPLE.lines().map(|line| line.to_string()).collect();
    parse_input(&lines).expect("valid example")
}

#[test]
fn test_parse_input() {
    let (calls, boards) = example_game();
    assert_eq!(calls.len(), 27);
    assert_eq!(boards.len(), 3);
    assert_eq!(boards[2].numbers[0], [14, 21, 17, 24, 4]);
}

#[test]
fn test_first_and_last_winner() {
    let (calls, boards) = example_game();
    let scores = play(&calls, boards);
    assert_eq!(scores.first(), Some(&4512));
    assert_eq!(scores.last(), Some(&1924));
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let (calls, boards) = parse_input(&lines).expect("valid bingo input");
    let scores = play(&calls, boards);
    match (scores.first(), scores.last()) {
        (Some(first), Some(last)) => {
            println!("Day 04 part 1: {}", first);
            println!("Day 04 part 2: {}", last);
        }
        _ => {
            eprintln!("no board ever wins");
            std::process::exit(1);
        }
    }
}
