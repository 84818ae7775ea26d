//! Fully determined patterns: parsed from RLE and simulated forward.

use crate::error::SearchError;
use crate::geometry::{Bounds, Point};
use crate::pattern::sub_pattern::SubPattern;
use crate::sat::clause::ClauseList;
use rayon::prelude::*;
use std::collections::HashSet;

/// A pattern whose every cell is determined.
///
/// Construction parses generation 0 from an RLE string (origin at the top
/// left) and forward-simulates the remaining generations, so the live-cell
/// set covers all of `t = 0..=max_gen`. Translation is O(1): the cell set
/// stays anchored at the origin and a shift vector is applied on lookup.
///
/// As a [`SubPattern`] it contributes no variables and no clauses; it only
/// supplies known values to the neighborhoods of other patterns.
#[derive(Debug, Clone, Default)]
pub struct KnownPattern {
    on_cells: HashSet<Point>,
    bounds: Bounds,
    shift: Point,
}

impl KnownPattern {
    pub fn new() -> Self {
        Self {
            on_cells: HashSet::new(),
            bounds: Bounds::EMPTY,
            shift: Point::ORIGIN,
        }
    }

    /// Parse generation 0 from `rle` and simulate through `max_gen`.
    ///
    /// Recognized tokens: a decimal run count, `b` (dead run), `o` (alive
    /// run), `$` (next row), `!` (end). Header and comment lines (starting
    /// with `x` or `#`) are skipped; unrecognized bytes are ignored,
    /// discarding any pending run count.
    pub fn from_rle(rle: &str, max_gen: i32) -> Self {
        let bytes = rle.as_bytes();
        let mut on_cells = HashSet::new();
        let mut x = 0;
        let mut y = 0;
        let mut max_x = 0;
        let mut count = 0;
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[i];
            if c == b'x' || c == b'#' {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            } else if c.is_ascii_digit() {
                count = count * 10 + i32::from(c - b'0');
            } else {
                let run = if count == 0 { 1 } else { count };
                match c {
                    b'b' => x += run,
                    b'o' => {
                        for _ in 0..run {
                            on_cells.insert(Point::new(x, y, 0));
                            max_x = max_x.max(x);
                            x += 1;
                        }
                    }
                    b'$' => {
                        y += run;
                        x = 0;
                    }
                    b'!' => break,
                    _ => {}
                }
                count = 0;
            }
            i += 1;
        }

        let mut pattern = Self {
            on_cells,
            bounds: Bounds::new((0, max_x), (0, y), (0, max_gen)),
            shift: Point::ORIGIN,
        };
        for gen in 1..=max_gen {
            pattern.add_next_generation(gen);
        }
        pattern
    }

    /// Simulate one generation from `gen - 1` over the bounding rectangle
    /// expanded by one cell in each direction.
    fn add_next_generation(&mut self, gen: i32) {
        let (x_lo, x_hi) = self.bounds.x;
        let (y_lo, y_hi) = self.bounds.y;
        let on_cells = &self.on_cells;

        let born: Vec<Point> = (x_lo - 1..=x_hi + 1)
            .into_par_iter()
            .flat_map_iter(move |x| {
                (y_lo - 1..=y_hi + 1).filter_map(move |y| {
                    let mut live_neighbors = 0;
                    for dy in -1..=1 {
                        for dx in -1..=1 {
                            if dx == 0 && dy == 0 {
                                continue;
                            }
                            if on_cells.contains(&Point::new(x + dx, y + dy, gen - 1)) {
                                live_neighbors += 1;
                            }
                        }
                    }
                    let alive = on_cells.contains(&Point::new(x, y, gen - 1));
                    if live_neighbors == 3 || (alive && live_neighbors == 2) {
                        Some(Point::new(x, y, gen))
                    } else {
                        None
                    }
                })
            })
            .collect();

        self.bounds.t = (0, gen);
        for p in born {
            self.bounds.expand_to(p);
            self.on_cells.insert(p);
        }
    }

    pub fn shift_by(&mut self, rel_shift: Point) {
        self.shift = self.shift + rel_shift;
    }

    /// State at an absolute position (shift applied).
    pub fn state_at(&self, p: Point) -> bool {
        self.on_cells.contains(&(p - self.shift))
    }

    pub fn living_count(&self, gen: i32) -> usize {
        self.on_cells.iter().filter(|p| p.t == gen).count()
    }

    /// Render one generation as rows of `o`/`.` over the current bounds.
    pub fn render_generation(&self, gen: i32) -> String {
        let bounds = self.bounds();
        let mut out = String::new();
        for y in bounds.y.0..=bounds.y.1 {
            for x in bounds.x.0..=bounds.x.1 {
                out.push(if self.state_at(Point::new(x, y, gen)) { 'o' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl SubPattern for KnownPattern {
    fn bounds(&self) -> Bounds {
        self.bounds.translate(self.shift)
    }

    fn build(&mut self) -> Result<(), SearchError> {
        Ok(())
    }

    fn num_variables(&self) -> i32 {
        0
    }

    fn cell_value(&self, p: Point) -> i32 {
        i32::from(self.state_at(p))
    }

    fn is_known(&self, _p: Point) -> bool {
        true
    }

    fn state(&self, p: Point) -> bool {
        self.state_at(p)
    }

    fn follows_rules(&self, _p: Point) -> bool {
        true
    }

    fn clauses(&self, _base_var: i32) -> Result<ClauseList, SearchError> {
        Ok(ClauseList::new())
    }
}
