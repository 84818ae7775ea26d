//! Composition of sub-patterns into one SAT problem.

use crate::error::SearchError;
use crate::geometry::{Bounds, Point};
use crate::pattern::SubPattern;
use crate::sat::clause::{BigClause, ClauseList};
use crate::sat::logic::append_transition_clauses;
use crate::utils::UnionFind;
use rayon::prelude::*;
use std::collections::HashMap;

/// A sub-pattern together with the mask selecting which composite positions
/// it provides values for.
struct PatternEntry {
    pattern: Box<dyn SubPattern + Send + Sync>,
    mask: Box<dyn Fn(Point) -> bool + Send + Sync>,
}

/// Composes masked sub-patterns over a shared spacetime region and produces
/// the global CNF.
///
/// Entries are consulted in insertion order and the first accepting mask owns
/// a point, so later entries can be layered under earlier overriding regions.
/// `build` unifies the entries' variable namespaces, then merges output
/// variables of transitions with identical neighborhoods: by determinism of
/// the rule, two outputs fed by the same (center, neighbor multiset) must be
/// equal, and for symmetric compositions this collapses the variable count by
/// the orbit size.
pub struct SearchProblem {
    bounds: Bounds,
    entries: Vec<PatternEntry>,

    built: bool,
    entry_bases: Vec<i32>,
    raw_variable_count: i32,
    variable_count: i32,
    var_remap: Vec<i32>,
    raw_values: Vec<i32>,
    remapped_values: Vec<i32>,
    follows: Vec<bool>,
}

impl SearchProblem {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            entries: Vec::new(),
            built: false,
            entry_bases: Vec::new(),
            raw_variable_count: 0,
            variable_count: 0,
            var_remap: Vec::new(),
            raw_values: Vec::new(),
            remapped_values: Vec::new(),
            follows: Vec::new(),
        }
    }

    /// A `width` x `height` problem over generations `0..=max_gen`.
    pub fn grid(width: i32, height: i32, max_gen: i32) -> Self {
        Self::new(Bounds::grid(width, height, max_gen))
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Append a pattern entry; masks of earlier entries take precedence.
    pub fn add_entry<P, M>(&mut self, pattern: P, mask: M)
    where
        P: SubPattern + Send + Sync + 'static,
        M: Fn(Point) -> bool + Send + Sync + 'static,
    {
        self.entries.push(PatternEntry {
            pattern: Box::new(pattern),
            mask: Box::new(mask),
        });
        self.built = false;
    }

    /// Index of the entry owning `p`, if any.
    pub fn find_entry(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        self.entries.iter().position(|entry| (entry.mask)(p))
    }

    fn flat_index(&self, p: Point) -> usize {
        let sz_x = self.bounds.size_x() as usize;
        let sz_y = self.bounds.size_y() as usize;
        let lx = (p.x - self.bounds.x.0) as usize;
        let ly = (p.y - self.bounds.y.0) as usize;
        let lt = (p.t - self.bounds.t.0) as usize;
        lt * sz_y * sz_x + ly * sz_x + lx
    }

    fn point_at(&self, flat: usize) -> Point {
        let sz_x = self.bounds.size_x() as usize;
        let sz_y = self.bounds.size_y() as usize;
        Point::new(
            self.bounds.x.0 + (flat % sz_x) as i32,
            self.bounds.y.0 + ((flat / sz_x) % sz_y) as i32,
            self.bounds.t.0 + (flat / (sz_x * sz_y)) as i32,
        )
    }

    fn raw_value_at(&self, p: Point) -> i32 {
        if self.bounds.contains(p) {
            self.raw_values[self.flat_index(p)]
        } else {
            0
        }
    }

    fn remapped_value_at(&self, p: Point) -> i32 {
        if self.bounds.contains(p) {
            self.remapped_values[self.flat_index(p)]
        } else {
            0
        }
    }

    fn follows_at(&self, p: Point) -> bool {
        if self.bounds.contains(p) {
            self.follows[self.flat_index(p)]
        } else {
            false
        }
    }

    /// Build every sub-pattern, allocate the global variable namespace and
    /// deduplicate transition outputs.
    pub fn build(&mut self) -> Result<(), SearchError> {
        let total_cells = self.bounds.cell_count();

        // Every in-bounds point must be claimed by exactly one entry (the
        // first whose mask accepts it).
        let mut entry_map = vec![0usize; total_cells];
        for (flat, slot) in entry_map.iter_mut().enumerate() {
            let p = self.point_at(flat);
            match self.find_entry(p) {
                Some(idx) => *slot = idx,
                None => return Err(SearchError::UncoveredPoint(p)),
            }
        }

        for entry in &mut self.entries {
            entry.pattern.build()?;
        }

        // Contiguous global id slices, starting at 2.
        self.entry_bases.clear();
        let mut next_var = 2;
        for entry in &self.entries {
            self.entry_bases.push(next_var);
            next_var += entry.pattern.num_variables();
        }
        self.raw_variable_count = next_var - 2;

        self.raw_values = vec![0; total_cells];
        self.follows = vec![false; total_cells];
        for flat in 0..total_cells {
            let p = self.point_at(flat);
            let entry_idx = entry_map[flat];
            let entry = &self.entries[entry_idx];
            let local = entry.pattern.cell_value(p);
            self.raw_values[flat] = if local < 2 {
                local
            } else {
                self.entry_bases[entry_idx] + (local - 2)
            };
            self.follows[flat] = entry.pattern.follows_rules(p);
        }

        self.built = true;

        let var_remap = self.deduplicate_transitions()?;
        self.var_remap = var_remap;

        self.remapped_values = self
            .raw_values
            .iter()
            .map(|&raw| if raw < 2 { raw } else { self.var_remap[(raw - 2) as usize] })
            .collect();

        Ok(())
    }

    /// Merge output variables of transitions with identical neighborhoods.
    ///
    /// The signature is the center id plus the sorted 8-neighbor ids, all in
    /// raw (pre-remap) numbering. Returns the remap table for ids >= 2 and
    /// records the deduplicated variable count.
    fn deduplicate_transitions(&mut self) -> Result<Vec<i32>, SearchError> {
        let mut uf: UnionFind<i32> = UnionFind::new();
        uf.reserve(self.raw_variable_count as usize + 2);

        let mut sig_to_output: HashMap<(i32, [i32; 8]), i32> = HashMap::new();

        for t in self.bounds.t.0..self.bounds.t.1 {
            for y in self.bounds.y.0..=self.bounds.y.1 {
                for x in self.bounds.x.0..=self.bounds.x.1 {
                    let output_pos = Point::new(x, y, t + 1);
                    if !self.follows_at(output_pos) {
                        continue;
                    }
                    let output = self.raw_value_at(output_pos);

                    let center = self.raw_value_at(Point::new(x, y, t));
                    let mut neighbors = [0i32; 8];
                    let mut idx = 0;
                    for dy in -1..=1 {
                        for dx in -1..=1 {
                            if dx == 0 && dy == 0 {
                                continue;
                            }
                            neighbors[idx] = self.raw_value_at(Point::new(x + dx, y + dy, t));
                            idx += 1;
                        }
                    }
                    neighbors.sort_unstable();

                    match sig_to_output.entry((center, neighbors)) {
                        std::collections::hash_map::Entry::Vacant(slot) => {
                            slot.insert(output);
                        }
                        std::collections::hash_map::Entry::Occupied(slot) => {
                            let recorded = *slot.get();
                            if output >= 2 {
                                uf.unite(output, recorded);
                            } else if recorded >= 2 {
                                uf.unite(recorded, output);
                            } else if recorded != output {
                                return Err(SearchError::ConflictingTransition {
                                    position: Point::new(x, y, t),
                                    center,
                                    neighbors,
                                    first: recorded,
                                    second: output,
                                });
                            }
                        }
                    }
                }
            }
        }

        // A variable chained to both constants means the composition is
        // unsatisfiable by construction.
        if uf.same(0, 1) {
            return Err(SearchError::Contradiction);
        }

        let mut root_to_new: HashMap<i32, i32> = HashMap::new();
        let mut next_new = 2;
        let mut var_remap = vec![0; self.raw_variable_count as usize];
        for v in 2..2 + self.raw_variable_count {
            let root = uf.find(v);
            var_remap[(v - 2) as usize] = if root < 2 {
                root
            } else {
                *root_to_new.entry(root).or_insert_with(|| {
                    let fresh = next_new;
                    next_new += 1;
                    fresh
                })
            };
        }
        self.variable_count = next_new - 2;
        Ok(var_remap)
    }

    /// Cell value at `p` after deduplication: 0 = dead, 1 = alive, >= 2 =
    /// global variable id. Out-of-bounds points read as dead.
    pub fn cell_value(&self, p: Point) -> i32 {
        assert!(self.built, "search problem not built");
        self.remapped_value_at(p)
    }

    /// Cell value before output deduplication.
    pub fn raw_cell_value(&self, p: Point) -> i32 {
        assert!(self.built, "search problem not built");
        self.raw_value_at(p)
    }

    pub fn num_variables(&self) -> i32 {
        assert!(self.built, "search problem not built");
        self.variable_count
    }

    /// All transition clauses of the composite problem, in deduplicated
    /// global numbering. Time slices are independent after build, so they
    /// are emitted in parallel and concatenated in order.
    pub fn clauses(&self) -> Result<ClauseList, SearchError> {
        assert!(self.built, "search problem not built");
        let slices: Vec<ClauseList> = (self.bounds.t.0..self.bounds.t.1)
            .into_par_iter()
            .map(|t| self.clauses_for_step(t))
            .collect::<Result<_, _>>()?;
        Ok(slices.into_iter().flatten().collect())
    }

    /// Clauses constraining the transition from generation `t` to `t + 1`.
    fn clauses_for_step(&self, t: i32) -> Result<ClauseList, SearchError> {
        let mut clauses = ClauseList::new();
        let mut cells = [0i32; 10];
        for y in self.bounds.y.0..=self.bounds.y.1 {
            for x in self.bounds.x.0..=self.bounds.x.1 {
                let output_pos = Point::new(x, y, t + 1);
                if !self.follows_at(output_pos) {
                    continue;
                }
                let mut i = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        cells[i] = self.remapped_value_at(Point::new(x + dx, y + dy, t));
                        i += 1;
                    }
                }
                cells[9] = self.remapped_value_at(output_pos);
                append_transition_clauses(&cells, &mut clauses)?;
            }
        }
        Ok(clauses)
    }

    /// One "at least one cell alive" clause per generation, for searches
    /// where the empty field is a trivial solution. Generations that already
    /// contain a known-alive cell need no clause; generations with neither
    /// known-alive cells nor variables are skipped (nothing to constrain).
    pub fn liveness_clauses(&self) -> Vec<BigClause> {
        assert!(self.built, "search problem not built");
        let mut result = Vec::new();
        for t in self.bounds.t.0..=self.bounds.t.1 {
            let mut literals = Vec::new();
            let mut seen = std::collections::HashSet::new();
            let mut has_known_alive = false;
            for y in self.bounds.y.0..=self.bounds.y.1 {
                for x in self.bounds.x.0..=self.bounds.x.1 {
                    let id = self.remapped_value_at(Point::new(x, y, t));
                    if id == 1 {
                        has_known_alive = true;
                    } else if id >= 2 && seen.insert(id) {
                        literals.push(id - 1);
                    }
                }
            }
            if !has_known_alive && !literals.is_empty() {
                result.push(literals);
            }
        }
        result
    }

    /// Encoding size summary for diagnostics.
    pub fn statistics(&self) -> EncodingStatistics {
        assert!(self.built, "search problem not built");
        EncodingStatistics {
            cells: self.bounds.cell_count(),
            entries: self.entries.len(),
            raw_variables: self.raw_variable_count,
            variables: self.variable_count,
        }
    }
}

/// Size summary of a built encoding.
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub cells: usize,
    pub entries: usize,
    pub raw_variables: i32,
    pub variables: i32,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Encoding statistics:")?;
        writeln!(f, "  Cells: {}", self.cells)?;
        writeln!(f, "  Pattern entries: {}", self.entries)?;
        writeln!(f, "  Variables before deduplication: {}", self.raw_variables)?;
        writeln!(f, "  Variables after deduplication: {}", self.variables)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::AffineTransform;
    use crate::pattern::{CellGroup, KnownPattern, VariablePattern};
    use crate::sat::logic::transition_valid;

    /// Truth assignment for clause evaluation: maps a problem's variable ids
    /// to states via a per-point expectation.
    fn assignment_from<F: Fn(Point) -> bool>(
        problem: &SearchProblem,
        expected: F,
    ) -> std::collections::HashMap<i32, bool> {
        let bounds = problem.bounds();
        let mut assignment = std::collections::HashMap::new();
        for t in bounds.t.0..=bounds.t.1 {
            for y in bounds.y.0..=bounds.y.1 {
                for x in bounds.x.0..=bounds.x.1 {
                    let p = Point::new(x, y, t);
                    let id = problem.cell_value(p);
                    if id >= 2 {
                        assignment.insert(id - 1, expected(p));
                    }
                }
            }
        }
        assignment
    }

    fn all_satisfied(clauses: &ClauseList, assignment: &std::collections::HashMap<i32, bool>) -> bool {
        clauses
            .iter()
            .all(|c| c.satisfied_by(|var| assignment.get(&var).copied().unwrap_or(false)))
    }

    #[test]
    fn test_coverage_gap_is_reported() {
        let mut problem = SearchProblem::grid(2, 2, 0);
        problem.add_entry(VariablePattern::grid(2, 2, 0), |p: Point| p.x == 0);
        let err = problem.build().unwrap_err();
        assert_eq!(err, SearchError::UncoveredPoint(Point::new(1, 0, 0)));
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let mut problem = SearchProblem::grid(2, 1, 0);
        let mut left = VariablePattern::grid(2, 1, 0);
        left.set_alive(Point::new(0, 0, 0));
        left.set_alive(Point::new(1, 0, 0));
        let mut right = VariablePattern::grid(2, 1, 0);
        right.set_dead(Point::new(0, 0, 0));
        right.set_dead(Point::new(1, 0, 0));
        problem.add_entry(left, |p: Point| p.x == 0);
        problem.add_entry(right, |_| true);
        problem.build().unwrap();
        assert_eq!(problem.find_entry(Point::new(0, 0, 0)), Some(0));
        assert_eq!(problem.find_entry(Point::new(1, 0, 0)), Some(1));
        assert_eq!(problem.cell_value(Point::new(0, 0, 0)), 1);
        assert_eq!(problem.cell_value(Point::new(1, 0, 0)), 0);
    }

    #[test]
    fn test_global_ids_are_contiguous_across_entries() {
        let mut problem = SearchProblem::grid(4, 1, 0);
        problem.add_entry(VariablePattern::grid(4, 1, 0), |p: Point| p.x < 2);
        problem.add_entry(VariablePattern::grid(4, 1, 0), |_| true);
        problem.build().unwrap();
        let mut ids: Vec<i32> = (0..4)
            .map(|x| problem.cell_value(Point::new(x, 0, 0)))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(ids.iter().all(|&id| id >= 2));
        assert_eq!(problem.num_variables(), 8); // each 4-cell entry owns 4 ids
    }

    #[test]
    fn test_boat_still_life_clauses() {
        // Generation 0 fixed to a boat, generation 1 free: the clause set
        // must accept exactly "generation 1 equals the boat" on its interior.
        let boat = [(0, 0), (1, 0), (0, 1), (2, 1), (1, 2)];
        let mut pattern = VariablePattern::grid(3, 3, 1);
        for y in 0..3 {
            for x in 0..3 {
                pattern.set_known(Point::new(x, y, 0), boat.contains(&(x, y)));
            }
        }
        let mut problem = SearchProblem::grid(3, 3, 1);
        problem.add_entry(pattern, |_| true);
        problem.build().unwrap();
        let clauses = problem.clauses().unwrap();
        assert!(!clauses.is_empty());

        let good = assignment_from(&problem, |p| boat.contains(&(p.x, p.y)));
        assert!(all_satisfied(&clauses, &good));

        // The boat's hole has five live neighbors; filling it must violate a
        // clause. (The hole's output shares its neighborhood with no other
        // cell, so the flip survives output deduplication.)
        let bad = assignment_from(&problem, |p| {
            boat.contains(&(p.x, p.y)) || (p.x, p.y) == (1, 1)
        });
        assert!(!all_satisfied(&clauses, &bad));
    }

    #[test]
    fn test_blinker_transition_clauses() {
        // Vertical blinker fixed at generation 0; generation 1 free. The
        // valid assignment is the horizontal blinker.
        let vertical = [(1, 0), (1, 1), (1, 2)];
        let horizontal = [(0, 1), (1, 1), (2, 1)];
        let mut pattern = VariablePattern::grid(3, 3, 1);
        for y in 0..3 {
            for x in 0..3 {
                pattern.set_known(Point::new(x, y, 0), vertical.contains(&(x, y)));
            }
        }
        let mut problem = SearchProblem::grid(3, 3, 1);
        problem.add_entry(pattern, |_| true);
        problem.build().unwrap();
        let clauses = problem.clauses().unwrap();

        let good = assignment_from(&problem, |p| horizontal.contains(&(p.x, p.y)));
        assert!(all_satisfied(&clauses, &good));

        let stuck_vertical = assignment_from(&problem, |p| vertical.contains(&(p.x, p.y)));
        assert!(!all_satisfied(&clauses, &stuck_vertical));
    }

    #[test]
    fn test_free_patch_matches_rule_on_all_1024_assignments() {
        // 3x3 patch, one constrained output (the center of generation 1),
        // everything else free: the emitted clauses accept exactly the valid
        // (neighborhood, output) pairs.
        let mut pattern = VariablePattern::grid(3, 3, 1);
        pattern.set_follows_rules_where(false, |c| {
            c.position.t == 1 && c.position != Point::new(1, 1, 1)
        });
        let mut problem = SearchProblem::grid(3, 3, 1);
        problem.add_entry(pattern, |_| true);
        problem.build().unwrap();
        let clauses = problem.clauses().unwrap();

        // Variable ids of the nine generation-0 cells in row-major order,
        // then the output cell.
        let mut vars = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                vars.push(problem.cell_value(Point::new(x, y, 0)) - 1);
            }
        }
        vars.push(problem.cell_value(Point::new(1, 1, 1)) - 1);

        for word in 0..1024usize {
            let assignment: std::collections::HashMap<i32, bool> = vars
                .iter()
                .enumerate()
                .map(|(bit, &var)| (var, word & (1 << bit) != 0))
                .collect();
            let satisfied = clauses
                .iter()
                .all(|c| c.satisfied_by(|var| assignment.get(&var).copied().unwrap_or(false)));
            assert_eq!(satisfied, transition_valid(word), "word {word:#012b}");
        }
    }

    #[test]
    fn test_known_cell_reduction_matches_rule() {
        // Fix each of the 512 neighborhood configurations at generation 0 and
        // leave the output free: the clauses must force the output to the
        // rule's verdict.
        for word in 0..512usize {
            let mut pattern = VariablePattern::grid(3, 3, 1);
            for y in 0..3 {
                for x in 0..3 {
                    let bit = (y * 3 + x) as usize;
                    pattern.set_known(Point::new(x, y, 0), word & (1 << bit) != 0);
                }
            }
            pattern.set_follows_rules_where(false, |c| {
                c.position.t == 1 && c.position != Point::new(1, 1, 1)
            });
            let mut problem = SearchProblem::grid(3, 3, 1);
            problem.add_entry(pattern, |_| true);
            problem.build().unwrap();
            let clauses = problem.clauses().unwrap();

            let output = problem.cell_value(Point::new(1, 1, 1));
            assert!(output >= 2);
            let var = output - 1;
            let expected = transition_valid(word | (1 << 9)); // alive output valid?

            let alive_ok = clauses.iter().all(|c| c.satisfied_by(|v| v == var));
            let dead_ok = clauses.iter().all(|c| c.satisfied_by(|_| false));
            assert_eq!(alive_ok, expected, "word {word:#011b}");
            assert_eq!(dead_ok, !expected, "word {word:#011b}");
        }
    }

    #[test]
    fn test_transition_deduplication_merges_equal_neighborhoods() {
        // Generation 0 collapsed to a single variable by translation
        // symmetry; generation 1 left free. All interior outputs see the
        // same neighborhood, likewise all edges and all corners, so 16 free
        // outputs deduplicate to 3 classes.
        let mut pattern = VariablePattern::grid(4, 4, 1);
        let group = pattern.add_cell_group(CellGroup {
            spatial_transforms: vec![
                AffineTransform::translation(1, 0, 0),
                AffineTransform::translation(0, 1, 0),
            ],
            time_transform: AffineTransform::IDENTITY,
        });
        pattern.set_cell_group_where(group, |c| c.position.t == 0);
        let mut problem = SearchProblem::grid(4, 4, 1);
        problem.add_entry(pattern, |_| true);
        problem.build().unwrap();

        let stats = problem.statistics();
        assert_eq!(stats.raw_variables, 17); // 1 shared input + 16 outputs
        assert_eq!(stats.variables, 4); // input + interior/edge/corner outputs

        assert_eq!(
            problem.cell_value(Point::new(1, 1, 1)),
            problem.cell_value(Point::new(2, 2, 1))
        );
        assert_eq!(
            problem.cell_value(Point::new(0, 0, 1)),
            problem.cell_value(Point::new(3, 3, 1))
        );
        assert_ne!(
            problem.cell_value(Point::new(0, 0, 1)),
            problem.cell_value(Point::new(1, 1, 1))
        );
    }

    #[test]
    fn test_dedup_unites_variable_output_with_known_output() {
        // A known block supplies one generation-1 cell; a free region with
        // the same generation 0 supplies the rest. All four block cells see
        // identical neighborhoods at generation 0, so the three free outputs
        // collapse onto the block's known-alive output.
        let block = KnownPattern::from_rle("2o$2o!", 1);
        let mut free = VariablePattern::grid(4, 4, 1);
        for y in 0..4 {
            for x in 0..4 {
                free.set_known(Point::new(x, y, 0), (0..2).contains(&x) && (0..2).contains(&y));
            }
        }
        let mut problem = SearchProblem::grid(4, 4, 1);
        problem.add_entry(block, |p: Point| p == Point::new(0, 0, 1));
        problem.add_entry(free, |_| true);
        problem.build().unwrap();

        assert_eq!(problem.cell_value(Point::new(0, 0, 1)), 1);
        assert_eq!(problem.cell_value(Point::new(1, 0, 1)), 1);
        assert_eq!(problem.cell_value(Point::new(0, 1, 1)), 1);
        assert_eq!(problem.cell_value(Point::new(1, 1, 1)), 1);
    }

    #[test]
    fn test_conflicting_known_outputs_error() {
        // Two known patterns disagree on the successor of identical dead
        // neighborhoods: one claims a lone cell stays alive.
        let mut liar = VariablePattern::grid(3, 1, 1);
        for x in 0..3 {
            liar.set_dead(Point::new(x, 0, 0));
        }
        liar.set_alive(Point::new(0, 0, 1));
        liar.set_dead(Point::new(1, 0, 1));
        liar.set_dead(Point::new(2, 0, 1));
        let mut problem = SearchProblem::grid(3, 1, 1);
        problem.add_entry(liar, |_| true);
        let err = problem.build().unwrap_err();
        match err {
            SearchError::ConflictingTransition { first, second, .. } => {
                assert_ne!(first, second);
            }
            other => panic!("expected ConflictingTransition, got {other:?}"),
        }
    }

    #[test]
    fn test_clauses_deterministic_across_builds() {
        let make = || {
            let mut pattern = VariablePattern::grid(4, 3, 1);
            pattern.set_dead(Point::new(0, 0, 0));
            let mut problem = SearchProblem::grid(4, 3, 1);
            problem.add_entry(pattern, |_| true);
            problem.build().unwrap();
            problem.clauses().unwrap()
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn test_liveness_clauses() {
        // Still-life search over a 3x3 interior: one clause per generation
        // over the shared variables.
        let mut pattern = VariablePattern::grid(3, 3, 1);
        let group = pattern.add_time_symmetry(AffineTransform::translation(0, 0, 1));
        pattern.set_cell_group_where(group, |_| true);
        let mut problem = SearchProblem::grid(3, 3, 1);
        problem.add_entry(pattern, |_| true);
        problem.build().unwrap();

        let liveness = problem.liveness_clauses();
        assert_eq!(liveness.len(), 2);
        // Both generations share the same variables, hence the same clause.
        assert_eq!(liveness[0], liveness[1]);
        assert!(!liveness[0].is_empty());

        // With a known-alive cell the generation needs no clause.
        let mut seeded = VariablePattern::grid(3, 3, 0);
        seeded.set_alive(Point::new(1, 1, 0));
        let mut problem = SearchProblem::grid(3, 3, 0);
        problem.add_entry(seeded, |_| true);
        problem.build().unwrap();
        assert!(problem.liveness_clauses().is_empty());
    }
}
