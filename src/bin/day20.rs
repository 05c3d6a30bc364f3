use std::collections::HashSet;
use std::io;
use std::io::prelude::*;

use aoc2021::cartesian_product;

const WINDOW: [i32; 3] = [-1, 0, 1];

/// The lit pixels of an infinite image.  Everything outside `area` is
/// uniformly `outer`, which flips between rounds when the enhancement
/// table maps all-dark windows to lit.
#[derive(Debug, Clone)]
struct InfiniteImage {
    /// Lit pixels as (y, x), inside the tracked area only.
    content: HashSet<(i32, i32)>,
    y_range: (i32, i32),
    x_range: (i32, i32),
    outer: bool,
}

fn bounding(points: &HashSet<(i32, i32)>) -> ((i32, i32), (i32, i32)) {
    let ys: Vec<i32> = points.iter().map(|&(y, _)| y).collect();
    let xs: Vec<i32> = points.iter().map(|&(_, x)| x).collect();
    (
        (
            ys.iter().min().copied().unwrap_or(0),
            ys.iter().max().copied().unwrap_or(0),
        ),
        (
            xs.iter().min().copied().unwrap_or(0),
            xs.iter().max().copied().unwrap_or(0),
        ),
    )
}

impl InfiniteImage {
    fn new(content: HashSet<(i32, i32)>, outer: bool) -> InfiniteImage {
        let (y_range, x_range) = bounding(&content);
        InfiniteImage {
            content,
            y_range,
            x_range,
            outer,
        }
    }

    fn bit(&self, y: i32, x: i32) -> bool {
        if y < self.y_range.0 || y > self.y_range.1 || x < self.x_range.0 || x > self.x_range.1 {
            self.outer
        } else {
            self.content.contains(&(y, x))
        }
    }

    fn window_index(&self, y: i32, x: i32) -> usize {
        let mut index = 0;
        for (dy, dx) in cartesian_product(&WINDOW, &WINDOW) {
            index = (index << 1) | usize::from(self.bit(y + dy, x + dx));
        }
        index
    }

    fn enhance(&self, algorithm: &[bool]) -> InfiniteImage {
        let mut output = HashSet::new();
        for y in self.y_range.0 - 3..=self.y_range.1 + 3 {
            for x in self.x_range.0 - 3..=self.x_range.1 + 3 {
                if algorithm[self.window_index(y, x)] {
                    output.insert((y, x));
                }
            }
        }
        let outer = algorithm[if self.outer { 511 } else { 0 }];
        InfiniteImage::new(output, outer)
    }

    fn lit_pixels(&self) -> usize {
        assert!(!self.outer, "infinitely many pixels are lit");
        self.content.len()
    }
}

struct ScannerResponse {
    algorithm: Vec<bool>,
    image: InfiniteImage,
}

fn parse_input(lines: &[String]) -> Result<ScannerResponse, String> {
    let algorithm: Vec<bool> = lines
        .first()
        .ok_or("empty input")?
        .chars()
        .map(|ch| ch == '#')
        .collect();
    if algorithm.len() != 512 {
        return Err(format!(
            "expected a 512-entry enhancement table, got {}",
            algorithm.len()
        ));
    }
    let mut content = HashSet::new();
    for (y, row) in lines.iter().skip(2).enumerate() {
        for (x, cell) in row.chars().enumerate() {
            if cell == '#' {
                content.insert((y as i32, x as i32));
            }
        }
    }
    Ok(ScannerResponse {
        algorithm,
        image: InfiniteImage::new(content, false),
    })
}

fn simulate(input: &ScannerResponse, rounds: usize) -> usize {
    let mut image = input.image.clone();
    for _ in 0..rounds {
        image = image.enhance(&input.algorithm);
    }
    image.lit_pixels()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Enhancement table that keeps every pixel exactly as it was: the
    // output depends only on the window's center bit.
    fn identity_algorithm() -> Vec<bool> {
        (0..512).map(|index| index & (1 << 4) != 0).collect()
    }

    // Table that turns dark windows lit and lit-centered windows dark,
    // so the infinite outer region blinks.
    fn blinking_algorithm() -> Vec<bool> {
        (0..512).map(|index| index == 0).collect()
    }

    fn single_pixel() -> InfiniteImage {
        InfiniteImage::new([(0, 0)].into_iter().collect(), false)
    }

    #[test]
    fn test_window_index() {
        let image = single_pixel();
        assert_eq!(image.window_index(0, 0), 1 << 4);
        assert_eq!(image.window_index(1, 1), 1 << 8);
        assert_eq!(image.window_index(-1, -1), 1);
        assert_eq!(image.window_index(5, 5), 0);
    }

    #[test]
    fn test_identity_enhancement() {
        let response = ScannerResponse {
            algorithm: identity_algorithm(),
            image: single_pixel(),
        };
        assert_eq!(simulate(&response, 1), 1);
        assert_eq!(simulate(&response, 2), 1);
        let enhanced = response.image.enhance(&response.algorithm);
        assert!(enhanced.bit(0, 0));
        assert!(!enhanced.outer);
    }

    #[test]
    fn test_outer_region_blinks() {
        let image = single_pixel();
        let once = image.enhance(&blinking_algorithm());
        // Every all-dark window lights up, including the far outside.
        assert!(once.outer);
        assert!(!once.bit(0, 0));
        let twice = once.enhance(&blinking_algorithm());
        assert!(!twice.outer);
    }

    #[test]
    #[should_panic(expected = "infinitely many")]
    fn test_counting_blinked_image_panics() {
        let image = single_pixel().enhance(&blinking_algorithm());
        image.lit_pixels();
    }
}

fn main() {
    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .map(|thing| thing.unwrap())
        .collect();
    let input = parse_input(&lines).expect("valid scanner response");
    println!("Day 20 part 1: {}", simulate(&input, 2));
    println!("Day 20 part 2: {}", simulate(&input, 50));
}
