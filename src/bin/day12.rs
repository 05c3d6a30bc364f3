use std::collections::HashMap;
use std::io;
use std::io::prelude::*;

#[derive(Debug, Default)]
struct CaveSystem {
    adjacency: HashMap<String, Vec<String>>,
}

fn is_small(cave: &str) -> bool {
    cave.chars().next().map(char::is_lowercase).unwrap_or(false)
}

impl CaveSystem {
    fn add_edge(&mut self, from: &str, to: &str) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        self.adjacency
            .entry(to.to_string())
            .or_default()
            .push(from.to_string());
    }

    fn edges(&self, cave: &str) -> &[String] {
        match self.adjacency.get(cave) {
            Some(edges) => edges,
            None => panic!("cave \"{}\" not found in graph", cave),
        }
    }

    /// Count distinct walks from `current` to "end".  Big caves repeat
    /// freely; a small cave may repeat only while the single second visit
    /// is still unspent, and "start" never repeats.
    fn walks(
        &self,
        current: &str,
        visited: &mut HashMap<String, u32>,
        mut second_visit_spent: bool,
    ) -> usize {
        if current == "end" {
            return 1;
        }
        if is_small(current) && visited.get(current).copied().unwrap_or(0) > 0 {
            if second_visit_spent || current == "start" {
                return 0;
            }
            second_visit_spent = true;
        }
        *visited.entry(current.to_string()).or_insert(0) += 1;
        let mut paths = 0;
        for next in self.edges(current) {
            paths += self.walks(next, visited, second_visit_spent);
        }
        match visited.get_mut(current) {
            Some(count) => *count -= 1,
            None => panic!("cave \"{}\" expected to be already visited", current),
        }
        paths
    }

    fn count_paths(&self, allow_one_second_visit: bool) -> usize {
        let mut visited = HashMap::new();
        self.walks("start", &mut visited, !allow_one_second_visit)
    }
}

impl TryFrom<&[String]> for CaveSystem {
    type Error = String;
    fn try_from(lines: &[String]) -> Result<CaveSystem, String> {
        let mut graph = CaveSystem::default();
        for line in lines {
            match line.split('-').collect::<Vec<_>>().as_slice() {
                [from, to] => graph.add_edge(from, to),
                _ => return Err(format!("expected from-to: '{}'", line)),
            }
        }
        Ok(graph)
    }
}

fn part1(graph: &CaveSystem) -> usize {
    graph.count_paths(false)
}

fn part2(graph: &CaveSystem) -> usize {
    graph.count_paths(true)
}

#[cfg(test)]
fn graph_from(lines: &[&str]) -> CaveSystem {
    let owned: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    CaveSystem::try_from(owned.as_slice()).expect("valid example")
}

#[cfg(test)]
fn small_example() -> CaveSystem {
    graph_from(&["start-A", "start-b", "A-c", "A-b", "b-d", "A-end", "b-end"])
}

#[test]
fn test_part1() {
    assert_eq!(part1(&small_example()), 10);
    let larger = graph_from(&[
        "dc-end", "HN-start", "start-kj", "dc-start", "dc-HN", "LN-dc", "HN-end", "kj-sa",
        "kj-HN", "kj-dc",
    ]);
    assert_eq!(part1(&larger), 19);
}

#[test]
fn test_part2() {
    assert_eq!(part2(&small_example()), 36);
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let graph = CaveSystem::try_from(lines.as_slice()).expect("valid cave connections");
    println!("Day 12 part 1: {}", part1(&graph));
    println!("Day 12 part 2: {}", part2(&graph));
}
