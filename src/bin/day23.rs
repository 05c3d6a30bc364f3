use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::io::prelude::*;

use tracing::{event, Level};
use tracing_subscriber::prelude::*;

//            1
//  01234567890
// #############
// #...........#  hallway, y = 0
// ###B#C#B#D###  room slot 0
//   #A#D#C#A#    room slot 1 (part 2 adds two more)
//   #########

const HALLWAY_LEN: usize = 11;
/// Hallway cells where stopping is allowed (not over a room entrance).
const HALLWAY_STOPS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
enum Amphipod {
    A,
    B,
    C,
    D,
}

impl Amphipod {
    fn step_cost(&self) -> u64 {
        match self {
            Amphipod::A => 1,
            Amphipod::B => 10,
            Amphipod::C => 100,
            Amphipod::D => 1000,
        }
    }

    fn home(&self) -> usize {
        match self {
            Amphipod::A => 0,
            Amphipod::B => 1,
            Amphipod::C => 2,
            Amphipod::D => 3,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Amphipod::A => 'A',
            Amphipod::B => 'B',
            Amphipod::C => 'C',
            Amphipod::D => 'D',
        }
    }
}

impl TryFrom<char> for Amphipod {
    type Error = String;
    fn try_from(ch: char) -> Result<Amphipod, String> {
        match ch {
            'A' => Ok(Amphipod::A),
            'B' => Ok(Amphipod::B),
            'C' => Ok(Amphipod::C),
            'D' => Ok(Amphipod::D),
            _ => Err(format!("unknown amphipod '{}'", ch)),
        }
    }
}

/// Hallway x coordinate of a room's entrance.
fn room_x(room: usize) -> usize {
    2 + 2 * room
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
struct Burrow {
    hallway: [Option<Amphipod>; HALLWAY_LEN],
    /// Four rooms, slot 0 nearest the hallway.  Occupants sink to the
    /// deepest free slot, so the filled slots are always a suffix.
    rooms: [Vec<Option<Amphipod>>; 4],
}

impl Burrow {
    fn depth(&self) -> usize {
        self.rooms[0].len()
    }

    fn organized(&self) -> bool {
        self.hallway.iter().all(Option::is_none)
            && self.rooms.iter().enumerate().all(|(room, slots)| {
                slots
                    .iter()
                    .all(|slot| slot.map(|a| a.home() == room).unwrap_or(false))
            })
    }

    /// A room accepts arrivals while nobody foreign lives there.
    fn accepts_arrivals(&self, room: usize) -> bool {
        self.rooms[room]
            .iter()
            .flatten()
            .all(|occupant| occupant.home() == room)
    }

    /// The hallway span between a room entrance and a hallway cell,
    /// excluding the cell itself, is free of amphipods.
    fn hallway_clear(&self, from_x: usize, to_x: usize) -> bool {
        let span = if from_x < to_x {
            from_x + 1..to_x
        } else {
            to_x + 1..from_x
        };
        self.hallway[span].iter().all(Option::is_none)
    }

    /// Legal single moves: the top occupant of an unsettled room out to
    /// any reachable hallway stop, or a parked amphipod into its own
    /// room.  Restricting to these two shapes loses no optimal plan.
    fn moves(&self) -> Vec<(u64, Burrow)> {
        let mut result = Vec::new();
        for room in 0..4 {
            if self.accepts_arrivals(room) {
                // Everyone here is home already; nobody should leave.
                continue;
            }
            let slot = match self.rooms[room].iter().position(|s| s.is_some()) {
                Some(slot) => slot,
                None => continue,
            };
            let amphipod = self.rooms[room][slot].expect("slot is occupied");
            for &stop in &HALLWAY_STOPS {
                if self.hallway[stop].is_some() || !self.hallway_clear(room_x(room), stop) {
                    continue;
                }
                let steps = slot + 1 + room_x(room).abs_diff(stop);
                let mut next = self.clone();
                next.rooms[room][slot] = None;
                next.hallway[stop] = Some(amphipod);
                result.push((steps as u64 * amphipod.step_cost(), next));
            }
        }
        for &stop in &HALLWAY_STOPS {
            let amphipod = match self.hallway[stop] {
                Some(amphipod) => amphipod,
                None => continue,
            };
            let room = amphipod.home();
            if !self.accepts_arrivals(room) || !self.hallway_clear(room_x(room), stop) {
                continue;
            }
            let slot = match self.rooms[room].iter().rposition(|s| s.is_none()) {
                Some(slot) => slot,
                None => continue,
            };
            let steps = room_x(room).abs_diff(stop) + slot + 1;
            let mut next = self.clone();
            next.hallway[stop] = None;
            next.rooms[room][slot] = Some(amphipod);
            result.push((steps as u64 * amphipod.step_cost(), next));
        }
        result
    }
}

impl Display for Burrow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cell = |slot: &Option<Amphipod>| slot.map(|a| a.symbol()).unwrap_or('.');
        writeln!(f, "#############")?;
        write!(f, "#")?;
        for slot in &self.hallway {
            write!(f, "{}", cell(slot))?;
        }
        writeln!(f, "#")?;
        for depth in 0..self.depth() {
            let walls = if depth == 0 { "###" } else { "  #" };
            write!(f, "{}", walls)?;
            for room in 0..4 {
                write!(f, "{}#", cell(&self.rooms[room][depth]))?;
            }
            writeln!(f, "{}", if depth == 0 { "##" } else { "" })?;
        }
        write!(f, "  #########")
    }
}

impl TryFrom<&[String]> for Burrow {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<Burrow, String> {
        if lines.len() < 5 {
            return Err(format!("expected at least 5 rows, got {}", lines.len()));
        }
        let mut hallway = [None; HALLWAY_LEN];
        for (x, ch) in lines[1].chars().skip(1).take(HALLWAY_LEN).enumerate() {
            if ch != '.' {
                hallway[x] = Some(Amphipod::try_from(ch)?);
            }
        }
        let depth = lines.len() - 3;
        let mut rooms: [Vec<Option<Amphipod>>; 4] = Default::default();
        for slot in 0..depth {
            let row: Vec<char> = lines[2 + slot].chars().collect();
            for (room, slots) in rooms.iter_mut().enumerate() {
                let ch = *row
                    .get(3 + 2 * room)
                    .ok_or_else(|| format!("row too short: '{}'", lines[2 + slot]))?;
                slots.push(if ch == '.' {
                    None
                } else {
                    Some(Amphipod::try_from(ch)?)
                });
            }
        }
        Ok(Burrow { hallway, rooms })
    }
}

/// Least energy to organize the burrow from `state`, or None if no move
/// sequence finishes the job.  Memoized over full states; the move rules
/// admit no cycles, so the recursion terminates.
fn least_cost(state: &Burrow, cache: &mut HashMap<Burrow, Option<u64>>) -> Option<u64> {
    if state.organized() {
        return Some(0);
    }
    if let Some(&cached) = cache.get(state) {
        return cached;
    }
    let mut best: Option<u64> = None;
    for (cost, next) in state.moves() {
        if let Some(tail) = least_cost(&next, cache) {
            let total = cost + tail;
            best = Some(best.map_or(total, |b| b.min(total)));
        }
    }
    cache.insert(state.clone(), best);
    best
}

fn organize(burrow: &Burrow) -> Option<u64> {
    let mut cache = HashMap::new();
    let result = least_cost(burrow, &mut cache);
    event!(Level::DEBUG, "explored {} states", cache.len());
    result
}

/// The folded-paper rows revealed in part 2, inserted below the top room
/// slots.
fn unfold(lines: &[String]) -> Vec<String> {
    let mut unfolded: Vec<String> = lines[..3].to_vec();
    unfolded.push("  #D#C#B#A#".to_string());
    unfolded.push("  #D#B#A#C#".to_string());
    unfolded.extend_from_slice(&lines[3..]);
    unfolded
}

fn part1(lines: &[String]) -> Option<u64> {
    let burrow = Burrow::try_from(lines).expect("valid burrow diagram");
    event!(Level::DEBUG, "initial state:\n{}", burrow);
    organize(&burrow)
}

fn part2(lines: &[String]) -> Option<u64> {
    let unfolded = unfold(lines);
    let burrow = Burrow::try_from(unfolded.as_slice()).expect("valid unfolded diagram");
    event!(Level::DEBUG, "initial state:\n{}", burrow);
    organize(&burrow)
}

#[cfg(test)]
fn example_lines() -> Vec<String> {
    [
        "#############",
        "#...........#",
        "###B#C#B#D###",
        "  #A#D#C#A#",
        "  #########",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[test]
fn test_parse_and_display() {
    let burrow = Burrow::try_from(example_lines().as_slice()).expect("valid example");
    assert_eq!(burrow.depth(), 2);
    assert_eq!(burrow.rooms[0], vec![Some(Amphipod::B), Some(Amphipod::A)]);
    assert_eq!(burrow.rooms[3], vec![Some(Amphipod::D), Some(Amphipod::A)]);
    assert_eq!(burrow.to_string(), example_lines().join("\n"));
}

#[test]
fn test_already_organized() {
    let lines: Vec<String> = [
        "#############",
        "#...........#",
        "###A#B#C#D###",
        "  #A#B#C#D#",
        "  #########",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect();
    let burrow = Burrow::try_from(lines.as_slice()).expect("valid diagram");
    assert!(burrow.organized());
    assert_eq!(organize(&burrow), Some(0));
}

#[test]
fn test_single_move_finish() {
    // One A parked in the hallway, two steps from home.
    let lines: Vec<String> = [
        "#############",
        "#A..........#",
        "###.#B#C#D###",
        "  #A#B#C#D#",
        "  #########",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect();
    let burrow = Burrow::try_from(lines.as_slice()).expect("valid diagram");
    assert_eq!(organize(&burrow), Some(3));
}

#[test]
fn test_part1() {
    assert_eq!(part1(&example_lines()), Some(12521));
}

#[test]
fn test_part2() {
    assert_eq!(part2(&example_lines()), Some(44169));
}

fn main() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    match (part1(&lines), part2(&lines)) {
        (Some(first), Some(second)) => {
            println!("Day 23 part 1: {}", first);
            println!("Day 23 part 2: {}", second);
        }
        _ => {
            eprintln!("burrow cannot be organized");
            std::process::exit(1);
        }
    }
}
