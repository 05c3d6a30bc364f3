use std::collections::HashSet;
use std::io;
use std::io::prelude::*;
use std::ops::{Add, Sub};

use regex::Regex;
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Point3d {
    x: i32,
    y: i32,
    z: i32,
}

impl Point3d {
    const ZERO: Point3d = Point3d { x: 0, y: 0, z: 0 };

    fn new(x: i32, y: i32, z: i32) -> Point3d {
        Point3d { x, y, z }
    }

    fn manhattan_distance(&self, other: &Point3d) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

impl Add for Point3d {
    type Output = Point3d;
    fn add(self, other: Point3d) -> Point3d {
        Point3d::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3d {
    type Output = Point3d;
    fn sub(self, other: Point3d) -> Point3d {
        Point3d::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// Quarter turns; sin/cos stay integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    fn sin(&self) -> i32 {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg270 => -1,
        }
    }

    fn cos(&self) -> i32 {
        match self {
            Rotation::Deg0 => 1,
            Rotation::Deg90 | Rotation::Deg270 => 0,
            Rotation::Deg180 => -1,
        }
    }
}

/// A rotation around each axis in turn, applied x, then y, then z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Orientation {
    x: Rotation,
    y: Rotation,
    z: Rotation,
}

impl Orientation {
    const IDENTITY: Orientation = Orientation {
        x: Rotation::Deg0,
        y: Rotation::Deg0,
        z: Rotation::Deg0,
    };

    /// The 24 distinct axis-aligned orientations.  The 64 rotation
    /// triples collapse onto them; keep one representative of each.
    fn all() -> Vec<Orientation> {
        let mut seen: HashSet<Point3d> = HashSet::new();
        let mut result = Vec::with_capacity(24);
        let probe = Point3d::new(1, 2, 3);
        for x in Rotation::ALL {
            for y in Rotation::ALL {
                for z in Rotation::ALL {
                    let candidate = Orientation { x, y, z };
                    if seen.insert(candidate.apply(&probe)) {
                        result.push(candidate);
                    }
                }
            }
        }
        result
    }

    fn apply(&self, p: &Point3d) -> Point3d {
        let p = Point3d::new(
            p.x,
            self.x.cos() * p.y - self.x.sin() * p.z,
            self.x.sin() * p.y + self.x.cos() * p.z,
        );
        let p = Point3d::new(
            self.y.cos() * p.x + self.y.sin() * p.z,
            p.y,
            -self.y.sin() * p.x + self.y.cos() * p.z,
        );
        Point3d::new(
            self.z.cos() * p.x - self.z.sin() * p.y,
            self.z.sin() * p.x + self.z.cos() * p.y,
            p.z,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScannerReport {
    id: usize,
    points: Vec<Point3d>,
}

/// A scanner whose position and orientation have been pinned down; its
/// beacons are stored in absolute coordinates.
#[derive(Debug, Clone)]
struct PlacedScanner {
    id: usize,
    position: Point3d,
    beacons: Vec<Point3d>,
}

impl PlacedScanner {
    fn from_report(report: &ScannerReport, position: Point3d, orientation: Orientation) -> Self {
        PlacedScanner {
            id: report.id,
            position,
            beacons: report
                .points
                .iter()
                .map(|p| position + orientation.apply(p))
                .collect(),
        }
    }
}

/// Try to pin `candidate` against an already placed scanner: some
/// orientation and offset must make at least `required_overlap` beacons
/// coincide.
fn try_align(
    placed: &PlacedScanner,
    candidate: &ScannerReport,
    required_overlap: usize,
) -> Option<PlacedScanner> {
    let placed_set: HashSet<Point3d> = placed.beacons.iter().copied().collect();
    for orientation in Orientation::all() {
        let rotated: Vec<Point3d> = candidate
            .points
            .iter()
            .map(|p| orientation.apply(p))
            .collect();
        // If the overlap exists, one of its beacons survives skipping
        // the first required_overlap - 1 entries of either list.
        for &anchor in placed.beacons.iter().skip(required_overlap - 1) {
            for &candidate_anchor in rotated.iter().skip(required_overlap - 1) {
                let offset = anchor - candidate_anchor;
                let overlap = rotated
                    .iter()
                    .filter(|&&p| placed_set.contains(&(p + offset)))
                    .count();
                if overlap >= required_overlap {
                    return Some(PlacedScanner::from_report(candidate, offset, orientation));
                }
            }
        }
    }
    None
}

fn place_scanners(reports: &[ScannerReport], required_overlap: usize) -> Vec<PlacedScanner> {
    let mut placed = vec![PlacedScanner::from_report(
        &reports[0],
        Point3d::ZERO,
        Orientation::IDENTITY,
    )];
    let mut pending: Vec<&ScannerReport> = reports.iter().skip(1).collect();
    while !pending.is_empty() {
        let mut aligned = None;
        'search: for (index, candidate) in pending.iter().enumerate() {
            for anchor in &placed {
                if let Some(next) = try_align(anchor, candidate, required_overlap) {
                    event!(
                        Level::INFO,
                        "matched scanner {} against {} ({}/{} placed)",
                        next.id,
                        anchor.id,
                        placed.len() + 1,
                        reports.len(),
                    );
                    aligned = Some((index, next));
                    break 'search;
                }
            }
        }
        match aligned {
            Some((index, next)) => {
                pending.remove(index);
                placed.push(next);
            }
            None => panic!("no scanner could be oriented against the placed set"),
        }
    }
    placed
}

fn parse_input(lines: &[String]) -> Result<Vec<ScannerReport>, String> {
    let header = Regex::new(r"^--- scanner (\d+) ---$").expect("valid regex");
    let mut reports: Vec<ScannerReport> = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some(groups) = header.captures(line) {
            let id = groups[1]
                .parse()
                .map_err(|_| format!("bad header: {}", line))?;
            reports.push(ScannerReport {
                id,
                points: Vec::new(),
            });
            continue;
        }
        let coordinates: Vec<i32> = line
            .split(',')
            .map(|s| s.parse().map_err(|_| format!("bad coordinate: {}", line)))
            .collect::<Result<Vec<i32>, String>>()?;
        match coordinates.as_slice() {
            [x, y, z] => match reports.last_mut() {
                Some(report) => report.points.push(Point3d::new(*x, *y, *z)),
                None => return Err(format!("beacon before any scanner header: {}", line)),
            },
            _ => return Err(format!("expected x,y,z: {}", line)),
        }
    }
    Ok(reports)
}

fn part1(placed: &[PlacedScanner]) -> usize {
    let beacons: HashSet<Point3d> = placed
        .iter()
        .flat_map(|scanner| scanner.beacons.iter().copied())
        .collect();
    beacons.len()
}

fn part2(placed: &[PlacedScanner]) -> i32 {
    let mut max_distance = 0;
    for a in placed {
        for b in placed {
            if a.id != b.id {
                max_distance = max_distance.max(a.position.manhattan_distance(&b.position));
            }
        }
    }
    max_distance
}

#[test]
fn test_rotations() {
    let p = Point3d::new(5, 4, 2);
    let rot_x = |r| Orientation {
        x: r,
        ..Orientation::IDENTITY
    };
    assert_eq!(rot_x(Rotation::Deg90).apply(&p), Point3d::new(5, -2, 4));
    assert_eq!(rot_x(Rotation::Deg180).apply(&p), Point3d::new(5, -4, -2));
    assert_eq!(rot_x(Rotation::Deg0).apply(&p), p);
}

#[test]
fn test_all_orientations_are_distinct() {
    assert_eq!(Orientation::all().len(), 24);
}

#[test]
fn test_manhattan_distance() {
    assert_eq!(
        Point3d::new(1105, -1205, 1229).manhattan_distance(&Point3d::new(-92, -2380, -20)),
        3621
    );
}

#[test]
fn test_align_flat_example() {
    let reports = [
        ScannerReport {
            id: 0,
            points: vec![
                Point3d::new(0, 2, 0),
                Point3d::new(4, 1, 0),
                Point3d::new(3, 3, 0),
            ],
        },
        ScannerReport {
            id: 1,
            points: vec![
                Point3d::new(-1, -1, 0),
                Point3d::new(-5, 0, 0),
                Point3d::new(-2, 1, 0),
            ],
        },
    ];
    let placed = place_scanners(&reports, 3);
    assert_eq!(placed[1].position, Point3d::new(5, 2, 0));
    assert_eq!(part1(&placed), 3);
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
    let reports = parse_input(&lines).expect("valid scanner reports");
    let placed = place_scanners(&reports, 12);
    println!("Day 19 part 1: {}", part1(&placed));
    println!("Day 19 part 2: {}", part2(&placed));
}
