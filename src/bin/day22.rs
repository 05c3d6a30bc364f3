use std::io;
use std::io::prelude::*;

mod base {
    use std::cmp::{max, min};
    use std::str::FromStr;

    use nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{char, digit1},
        combinator::{map, map_res, opt, recognize, value},
        sequence::{delimited, preceded, separated_pair, tuple},
        IResult,
    };

    /// Inclusive integer range along one axis.  Invariant: lo <= hi.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Interval {
        pub lo: i32,
        pub hi: i32,
    }

    #[derive(Debug)]
    enum PointRangeRelation {
        Before,
        Within,
        Beyond,
    }

    impl Interval {
        pub fn new(lo: i32, hi: i32) -> Interval {
            assert!(lo <= hi, "inverted interval {}..{}", lo, hi);
            Interval { lo, hi }
        }

        /// Number of integer cells covered.
        pub fn len(&self) -> u64 {
            (self.hi - self.lo + 1) as u64
        }

        pub fn contains(&self, inner: &Interval) -> bool {
            self.lo <= inner.lo && inner.hi <= self.hi
        }

        pub fn overlaps(&self, other: &Interval) -> bool {
            self.lo <= other.hi && other.lo <= self.hi
        }

        pub fn overlap_len(&self, other: &Interval) -> u64 {
            if self.overlaps(other) {
                Interval::new(max(self.lo, other.lo), min(self.hi, other.hi)).len()
            } else {
                0
            }
        }

        pub fn union(&self, other: &Interval) -> Interval {
            Interval::new(min(self.lo, other.lo), max(self.hi, other.hi))
        }

        fn relation_of(&self, boundary: i32) -> PointRangeRelation {
            if boundary < self.lo {
                PointRangeRelation::Before
            } else if boundary > self.hi {
                PointRangeRelation::Beyond
            } else {
                PointRangeRelation::Within
            }
        }

        /// Cut into the cells at-or-below `boundary` and the cells above
        /// it.  The boundary cell always lands in the lower piece.
        pub fn split(&self, boundary: i32) -> (Option<Interval>, Option<Interval>) {
            match self.relation_of(boundary) {
                PointRangeRelation::Before => (None, Some(*self)),
                PointRangeRelation::Beyond => (Some(*self), None),
                PointRangeRelation::Within => {
                    if boundary == self.hi {
                        (Some(*self), None)
                    } else {
                        (
                            Some(Interval::new(self.lo, boundary)),
                            Some(Interval::new(boundary + 1, self.hi)),
                        )
                    }
                }
            }
        }

        pub fn crop(&self, limit: &Interval) -> Option<Interval> {
            let lo = max(self.lo, limit.lo);
            let hi = min(self.hi, limit.hi);
            if lo <= hi {
                Some(Interval::new(lo, hi))
            } else {
                None
            }
        }
    }

    #[test]
    fn test_interval_split() {
        let iv = Interval::new(5, 10);
        assert_eq!(iv.split(-100), (None, Some(iv)));
        assert_eq!(iv.split(100), (Some(iv), None));
        assert_eq!(iv.split(10), (Some(iv), None));
        assert_eq!(
            iv.split(7),
            (Some(Interval::new(5, 7)), Some(Interval::new(8, 10)))
        );
        assert_eq!(
            iv.split(5),
            (Some(Interval::new(5, 5)), Some(Interval::new(6, 10)))
        );
    }

    #[test]
    fn test_interval_overlap() {
        let iv = Interval::new(0, 9);
        assert!(iv.overlaps(&Interval::new(9, 20)));
        assert!(!iv.overlaps(&Interval::new(10, 20)));
        assert_eq!(iv.overlap_len(&Interval::new(5, 20)), 5);
        assert_eq!(iv.overlap_len(&Interval::new(30, 40)), 0);
        assert!(iv.contains(&Interval::new(0, 9)));
        assert!(!iv.contains(&Interval::new(0, 10)));
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Axis {
        X,
        Y,
        Z,
    }

    /// An axis plus the coordinate of the last cell below the cut.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SplitPlane {
        pub axis: Axis,
        pub coord: i32,
    }

    /// Axis-aligned box of integer lattice cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cuboid {
        pub x: Interval,
        pub y: Interval,
        pub z: Interval,
    }

    impl Cuboid {
        pub fn interval(&self, axis: Axis) -> &Interval {
            match axis {
                Axis::X => &self.x,
                Axis::Y => &self.y,
                Axis::Z => &self.z,
            }
        }

        pub fn volume(&self) -> u64 {
            self.x.len() * self.y.len() * self.z.len()
        }

        pub fn contains(&self, inner: &Cuboid) -> bool {
            self.x.contains(&inner.x) && self.y.contains(&inner.y) && self.z.contains(&inner.z)
        }

        pub fn union(&self, other: &Cuboid) -> Cuboid {
            Cuboid {
                x: self.x.union(&other.x),
                y: self.y.union(&other.y),
                z: self.z.union(&other.z),
            }
        }

        /// Cut with a plane orthogonal to the plane's axis; pieces cover
        /// the original exactly, boundary cells in the lower piece.
        pub fn split(&self, plane: &SplitPlane) -> (Option<Cuboid>, Option<Cuboid>) {
            let with_component = |iv: Interval| -> Cuboid {
                match plane.axis {
                    Axis::X => Cuboid { x: iv, ..*self },
                    Axis::Y => Cuboid { y: iv, ..*self },
                    Axis::Z => Cuboid { z: iv, ..*self },
                }
            };
            let (below, above) = self.interval(plane.axis).split(plane.coord);
            (
                below.map(|iv| with_component(iv)),
                above.map(|iv| with_component(iv)),
            )
        }

        /// The six planes just outside each face: candidates for a cut
        /// that brushes this box without entering it.
        pub fn boundary_planes(&self) -> Vec<SplitPlane> {
            let mut planes = Vec::with_capacity(6);
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let iv = self.interval(axis);
                planes.push(SplitPlane {
                    axis,
                    coord: iv.lo - 1,
                });
                planes.push(SplitPlane { axis, coord: iv.hi });
            }
            planes
        }

        pub fn crop(&self, limit: &Interval) -> Option<Cuboid> {
            match (self.x.crop(limit), self.y.crop(limit), self.z.crop(limit)) {
                (Some(x), Some(y), Some(z)) => Some(Cuboid { x, y, z }),
                _ => None,
            }
        }
    }

    #[test]
    fn test_cuboid_split_is_exact() {
        let c = Cuboid {
            x: Interval::new(0, 9),
            y: Interval::new(-4, 4),
            z: Interval::new(2, 3),
        };
        for coord in [-1, 0, 3, 9, 12] {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let plane = SplitPlane { axis, coord };
                let (below, above) = c.split(&plane);
                let total: u64 = below.iter().chain(above.iter()).map(Cuboid::volume).sum();
                assert_eq!(total, c.volume(), "split {:?} lost cells", plane);
                if let (Some(b), Some(a)) = (below, above) {
                    assert!(!b.interval(axis).overlaps(a.interval(axis)));
                    assert_eq!(b.union(&a), c);
                }
            }
        }
    }

    /// One reboot step: set every cell of `target` to `state`.
    #[derive(Debug, PartialEq, Eq)]
    pub struct Instruction {
        pub state: bool,
        pub target: Cuboid,
    }

    fn i32_parser(input: &str) -> IResult<&str, i32> {
        map_res(
            recognize(tuple((opt(char('-')), digit1))),
            FromStr::from_str,
        )(input)
    }

    fn make_interval(pair: (i32, i32)) -> Result<Interval, String> {
        if pair.0 <= pair.1 {
            Ok(Interval::new(pair.0, pair.1))
        } else {
            Err(format!("inverted range {:?}", pair))
        }
    }

    fn parse_interval(input: &str) -> IResult<&str, Interval> {
        map_res(
            separated_pair(i32_parser, tag(".."), i32_parser),
            make_interval,
        )(input)
    }

    fn parse_cuboid(input: &str) -> IResult<&str, Cuboid> {
        map(
            tuple((
                delimited(tag("x="), parse_interval, tag(",")),
                delimited(tag("y="), parse_interval, tag(",")),
                preceded(tag("z="), parse_interval),
            )),
            |(x, y, z)| Cuboid { x, y, z },
        )(input)
    }

    fn parse_instruction(input: &str) -> IResult<&str, Instruction> {
        map(
            separated_pair(
                alt((value(true, tag("on")), value(false, tag("off")))),
                tag(" "),
                parse_cuboid,
            ),
            |(state, target)| Instruction { state, target },
        )(input)
    }

    impl TryFrom<&str> for Instruction {
        type Error = String;
        fn try_from(s: &str) -> Result<Instruction, String> {
            match parse_instruction(s) {
                Ok(("", instruction)) => Ok(instruction),
                Ok((tail, _)) => Err(format!("trailing junk: '{}'", tail)),
                Err(e) => Err(format!("failed to parse '{}': {}", s, e)),
            }
        }
    }

    #[test]
    fn test_parse_instruction() {
        assert_eq!(
            Instruction::try_from("on x=-54112..-39298,y=-85059..-49293,z=-27449..7877"),
            Ok(Instruction {
                state: true,
                target: Cuboid {
                    x: Interval::new(-54112, -39298),
                    y: Interval::new(-85059, -49293),
                    z: Interval::new(-27449, 7877),
                },
            })
        );
        assert!(Instruction::try_from("off x=9..3,y=0..1,z=0..1").is_err());
        assert!(Instruction::try_from("on x=1..2,y=0..1,z=0..1 extra").is_err());
    }
}

/// Direct cell marking, feasible only inside the small initialization
/// region.
mod bounded {
    use std::collections::HashSet;

    use super::base::{Instruction, Interval};

    const REGION: Interval = Interval { lo: -50, hi: 50 };

    pub fn count_lit(instructions: &[Instruction]) -> u64 {
        let mut lit: HashSet<(i32, i32, i32)> = HashSet::new();
        for instruction in instructions {
            let cropped = match instruction.target.crop(&REGION) {
                Some(c) => c,
                None => continue,
            };
            for x in cropped.x.lo..=cropped.x.hi {
                for y in cropped.y.lo..=cropped.y.hi {
                    for z in cropped.z.lo..=cropped.z.hi {
                        if instruction.state {
                            lit.insert((x, y, z));
                        } else {
                            lit.remove(&(x, y, z));
                        }
                    }
                }
            }
        }
        lit.len() as u64
    }
}

/// The unrestricted engine: a binary space partition tree over the whole
/// instruction extent.  Later instructions override earlier ones wherever
/// they overlap, so a node holding an older claim resolves a conflicting
/// new one by cutting its region in two and pushing both claims down.
mod tree {
    use super::base::{Cuboid, Instruction, SplitPlane};

    enum Contents {
        /// At most one pending assignment; unclaimed space is off.
        Leaf(Option<(Cuboid, bool)>),
        Split {
            plane: SplitPlane,
            below: Box<PartitionNode>,
            above: Box<PartitionNode>,
        },
    }

    pub struct PartitionNode {
        bounds: Cuboid,
        contents: Contents,
    }

    impl PartitionNode {
        pub fn new(bounds: Cuboid) -> PartitionNode {
            PartitionNode {
                bounds,
                contents: Contents::Leaf(None),
            }
        }

        /// Record that every cell of `target` now has `state`.  The caller
        /// must keep `target` inside this node's bounds; the root's bounds
        /// are the union of all instruction cuboids, and splits are exact,
        /// so this holds throughout the recursion.
        pub fn insert(&mut self, target: Cuboid, state: bool) {
            debug_assert!(self.bounds.contains(&target));
            match &mut self.contents {
                Contents::Split {
                    plane,
                    below,
                    above,
                } => {
                    let (lower, upper) = target.split(plane);
                    if let Some(fragment) = lower {
                        below.insert(fragment, state);
                    }
                    if let Some(fragment) = upper {
                        above.insert(fragment, state);
                    }
                    return;
                }
                Contents::Leaf(slot) => match slot {
                    None => {
                        *slot = Some((target, state));
                        return;
                    }
                    Some((occupant, occupant_state)) => {
                        if *occupant == target {
                            // The new instruction supersedes the old one
                            // for exactly this region.
                            *occupant_state = state;
                            return;
                        }
                    }
                },
            }
            // Conflicting leaf: copy the occupant out and rebuild this
            // node around a separating plane.
            let (occupant, occupant_state) = match &self.contents {
                Contents::Leaf(Some(assignment)) => *assignment,
                _ => unreachable!(),
            };
            self.split_around(occupant, occupant_state, target, state);
        }

        /// Convert a conflicted leaf into an internal node and re-insert
        /// both claims into the fresh children.
        fn split_around(
            &mut self,
            occupant: Cuboid,
            occupant_state: bool,
            target: Cuboid,
            state: bool,
        ) {
            let plane = separating_plane(&occupant, &target);
            let (below_bounds, above_bounds) = match self.bounds.split(&plane) {
                (Some(b), Some(a)) => (b, a),
                _ => unreachable!("separating plane lies outside the node bounds"),
            };
            self.contents = Contents::Split {
                plane,
                below: Box::new(PartitionNode::new(below_bounds)),
                above: Box::new(PartitionNode::new(above_bounds)),
            };
            self.insert(occupant, occupant_state);
            self.insert(target, state);
        }

        /// Total volume of cells currently on; visits every node once.
        pub fn total_on_volume(&self) -> u64 {
            match &self.contents {
                Contents::Leaf(None) => 0,
                Contents::Leaf(Some((cuboid, state))) => {
                    if *state {
                        cuboid.volume()
                    } else {
                        0
                    }
                }
                Contents::Split { below, above, .. } => {
                    below.total_on_volume() + above.total_on_volume()
                }
            }
        }
    }

    /// A plane that tells `a` and `b` apart: any boundary plane of either
    /// box that does not lie on the boundary of their combined extent.
    /// Non-empty whenever the boxes differ.  Which candidate wins does not
    /// matter for correctness, only for tree shape.
    fn separating_plane(a: &Cuboid, b: &Cuboid) -> SplitPlane {
        let outer = a.union(b);
        a.boundary_planes()
            .into_iter()
            .chain(b.boundary_planes())
            .find(|plane| {
                let outer_iv = outer.interval(plane.axis);
                plane.coord != outer_iv.lo - 1 && plane.coord != outer_iv.hi
            })
            .unwrap_or_else(|| panic!("no plane separates {:?} and {:?}", a, b))
    }

    pub fn count_lit(instructions: &[Instruction]) -> u64 {
        let bounds = match instructions
            .iter()
            .map(|i| i.target)
            .reduce(|acc, c| acc.union(&c))
        {
            Some(bounds) => bounds,
            None => return 0,
        };
        let mut root = PartitionNode::new(bounds);
        for instruction in instructions {
            root.insert(instruction.target, instruction.state);
        }
        root.total_on_volume()
    }

    #[cfg(test)]
    mod tests {
        use super::super::base::{Cuboid, Instruction, Interval};
        use super::super::bounded;
        use super::count_lit;

        fn cube(lo: i32, hi: i32) -> Cuboid {
            Cuboid {
                x: Interval::new(lo, hi),
                y: Interval::new(lo, hi),
                z: Interval::new(lo, hi),
            }
        }

        fn on(target: Cuboid) -> Instruction {
            Instruction {
                state: true,
                target,
            }
        }

        fn off(target: Cuboid) -> Instruction {
            Instruction {
                state: false,
                target,
            }
        }

        #[test]
        fn test_single_cuboid() {
            assert_eq!(count_lit(&[on(cube(10, 12))]), 27);
        }

        #[test]
        fn test_insert_twice_is_idempotent() {
            let once = count_lit(&[on(cube(0, 5))]);
            let twice = count_lit(&[on(cube(0, 5)), on(cube(0, 5))]);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_off_after_on_same_cuboid() {
            assert_eq!(count_lit(&[on(cube(0, 5)), off(cube(0, 5))]), 0);
        }

        #[test]
        fn test_order_matters_for_overlapping_opposites() {
            let a = cube(0, 2);
            let b = cube(1, 3);
            let on_then_off = count_lit(&[on(a), off(b)]);
            let off_then_on = count_lit(&[off(b), on(a)]);
            assert_eq!(on_then_off, 27 - 8);
            assert_eq!(off_then_on, 27);
            assert_ne!(on_then_off, off_then_on);
        }

        #[test]
        fn test_small_reboot_sequence() {
            // The worked example: 27 lit, then 19 more, then 8 turned
            // back off, then the last single cell lit again.
            let instructions = [
                on(cube(10, 12)),
                on(cube(11, 13)),
                off(cube(9, 11)),
                on(cube(10, 10)),
            ];
            assert_eq!(count_lit(&instructions), 39);
            // Toggling that last cell off and on again lands in the same
            // place.
            let instructions = [
                on(cube(10, 12)),
                on(cube(11, 13)),
                off(cube(9, 11)),
                off(cube(10, 10)),
                on(cube(10, 10)),
            ];
            assert_eq!(count_lit(&instructions), 39);
        }

        // The tree and the cell-marking path must agree wherever both are
        // feasible.
        #[test]
        fn test_tree_agrees_with_cell_marking() {
            let instructions: Vec<Instruction> = [
                "on x=-20..15,y=-10..12,z=-5..18",
                "on x=-5..19,y=-18..4,z=-11..7",
                "off x=-12..0,y=-7..16,z=-19..2",
                "on x=3..17,y=-2..2,z=-8..14",
                "off x=-20..20,y=0..0,z=0..0",
                "on x=-1..1,y=-1..1,z=-1..1",
            ]
            .iter()
            .map(|line| Instruction::try_from(*line).expect("valid test instruction"))
            .collect();
            assert_eq!(count_lit(&instructions), bounded::count_lit(&instructions));
        }
    }
}

use base::Instruction;

fn part1(instructions: &[Instruction]) {
    println!("Day 22 part 1: {}", bounded::count_lit(instructions));
}

fn part2(instructions: &[Instruction]) {
    println!("Day 22 part 2: {}", tree::count_lit(instructions));
}

fn parse_input(lines: &[String]) -> Result<Vec<Instruction>, String> {
    lines
        .iter()
        .map(|line| Instruction::try_from(line.as_str()))
        .collect()
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let instructions = parse_input(&lines).expect("valid reboot steps");
    part1(&instructions);
    part2(&instructions);
}

#[cfg(test)]
mod fixture_tests {
    use super::base::Instruction;
    use super::{bounded, parse_input, tree};

    fn parse_fixture(text: &str) -> Vec<Instruction> {
        let lines: Vec<String> = text.lines().map(|line| line.to_string()).collect();
        parse_input(&lines).expect("valid fixture")
    }

    const INITIALIZATION_EXAMPLE: &str = "\
on x=-20..26,y=-36..17,z=-47..7
on x=-20..33,y=-21..23,z=-26..28
on x=-22..28,y=-29..23,z=-38..16
on x=-46..7,y=-6..46,z=-50..-1
on x=-49..1,y=-3..46,z=-24..28
on x=2..47,y=-22..22,z=-23..27
on x=-27..23,y=-28..26,z=-21..29
on x=-39..5,y=-6..47,z=-3..44
on x=-30..21,y=-8..43,z=-13..34
on x=-22..26,y=-27..20,z=-29..19
off x=-48..-32,y=26..41,z=-47..-37
on x=-12..35,y=6..50,z=-50..-2
off x=-48..-32,y=-32..-16,z=-15..-5
on x=-18..26,y=-33..15,z=-7..46
off x=-40..-22,y=-38..-28,z=23..41
on x=-16..35,y=-41..10,z=-47..6
off x=-32..-23,y=11..30,z=-14..3
on x=-49..-5,y=-3..45,z=-29..18
off x=18..30,y=-20..-8,z=-3..13
on x=-41..9,y=-7..43,z=-33..15
on x=-66158..-47384,y=-57902..-37304,z=-38915..-21855
on x=967..23432,y=45373..81175,z=27513..53682";

    #[test]
    fn test_initialization_example() {
        let instructions = parse_fixture(INITIALIZATION_EXAMPLE);
        assert_eq!(instructions.len(), 22);
        assert_eq!(bounded::count_lit(&instructions), 590784);
    }

    const REBOOT_EXAMPLE: &str = "\
on x=-5..47,y=-31..22,z=-19..33
on x=-44..5,y=-27..21,z=-14..35
on x=-49..-1,y=-11..42,z=-10..38
on x=-20..34,y=-40..6,z=-44..1
off x=26..39,y=40..50,z=-2..11
on x=-41..5,y=-41..6,z=-36..8
off x=-43..-33,y=-45..-28,z=7..25
on x=-33..15,y=-32..19,z=-34..11
off x=35..47,y=-46..-34,z=-11..5
on x=-14..36,y=-6..44,z=-16..29
on x=-57795..-6158,y=29564..72030,z=20435..90618
on x=36731..105352,y=-21140..28532,z=16094..90401
on x=30999..107136,y=-53464..15513,z=8553..71215
on x=13528..83982,y=-99403..-27377,z=-24141..23996
on x=-72682..-12347,y=18159..111354,z=7391..80950
on x=-1060..80757,y=-65301..-20884,z=-103788..-16709
on x=-83015..-9461,y=-72160..-8347,z=-81239..-26856
on x=-52752..22273,y=-49450..9096,z=54442..119054
on x=-29982..40483,y=-108474..-28371,z=-24328..38471
on x=-4958..62750,y=40422..118853,z=-7672..65583
on x=55694..108686,y=-43367..46958,z=-26781..48729
on x=-98497..-18186,y=-63569..3412,z=1232..88485
on x=-726..56291,y=-62629..13224,z=18033..85226
on x=-110886..-34664,y=-81338..-8658,z=8914..63723
on x=-55829..24974,y=-16897..54165,z=-121762..-28058
on x=-65152..-11147,y=22489..91432,z=-58782..1780
on x=-120100..-32970,y=-46592..27473,z=-11695..61039
on x=-18631..37533,y=-124565..-50804,z=-35667..28308
on x=-57817..18248,y=49321..117703,z=5745..55881
on x=14781..98692,y=-1341..70827,z=15753..70151
on x=-34419..55919,y=-19626..40991,z=39015..114138
on x=-60785..11593,y=-56135..2999,z=-95368..-26915
on x=-32178..58085,y=17647..101866,z=-91405..-8878
on x=-53655..12091,y=50097..105568,z=-75335..-4862
on x=-111166..-40997,y=-71714..2688,z=5609..50954
on x=-16602..70118,y=-98693..-44401,z=5197..76897
on x=16383..101554,y=4615..83635,z=-44907..18747
off x=-95822..-15171,y=-19987..48940,z=10804..104439
on x=-89813..-14614,y=16069..88491,z=-3297..45228
on x=41075..99376,y=-20427..49978,z=-52012..13762
on x=-21330..50085,y=-17944..62733,z=-112280..-30197
on x=-16478..35915,y=36008..118594,z=-7885..47086
off x=-98156..-27851,y=-49952..43171,z=-99005..-8456
off x=2032..69770,y=-71013..4824,z=7471..94418
on x=43670..120875,y=-42068..12382,z=-24787..38892
off x=37514..111226,y=-45862..25743,z=-16714..54663
off x=25699..97951,y=-30668..59918,z=-15349..69697
off x=-44271..17935,y=-9516..60759,z=49131..112598
on x=-61695..-5813,y=40978..94975,z=8655..80240
off x=-101086..-9439,y=-7088..67543,z=33935..83858
off x=18020..114017,y=-48931..32606,z=21474..89843
off x=-77139..10506,y=-89994..-18797,z=-80..59318
off x=8476..79288,y=-75520..11602,z=-96624..-24783
on x=-47488..-1262,y=24338..100707,z=16292..72967
off x=-84341..13987,y=2429..92914,z=-90671..-1318
off x=-37810..49457,y=-71013..-7894,z=-105357..-13188
off x=-27365..46395,y=31009..98017,z=15428..76570
off x=-70369..-16548,y=22648..78696,z=-1892..86821
on x=-53470..21291,y=-120233..-33476,z=-44150..38147
off x=-93533..-4276,y=-16170..68771,z=-104985..-24507";

    #[test]
    fn test_full_reboot_example() {
        let instructions = parse_fixture(REBOOT_EXAMPLE);
        assert_eq!(instructions.len(), 60);
        assert_eq!(bounded::count_lit(&instructions), 474140);
        assert_eq!(tree::count_lit(&instructions), 2758514936282235);
    }
}
