//! Patterns with unknown cells and symmetry constraints.

use crate::error::SearchError;
use crate::geometry::{find_all_images, AffineTransform, Bounds, Point};
use crate::pattern::cell::{Cell, CellGroup};
use crate::pattern::sub_pattern::SubPattern;
use crate::sat::clause::ClauseList;
use crate::sat::logic::append_transition_clauses;
use crate::utils::UnionFind;
use std::collections::HashMap;

/// Union-find key: the two constant classes plus real cell positions. The
/// variant order makes the constants compare lowest, so they stay the roots
/// of their classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CellKey {
    Live,
    Dead,
    At(Point),
}

#[derive(Debug, Clone)]
struct BuiltState {
    cell_to_var: HashMap<Point, i32>,
    variable_count: i32,
}

/// A rectangular spacetime region of cells, each possibly known, possibly
/// symmetry-constrained through a cell group.
///
/// `build` resolves all symmetry identifications with union-find and assigns
/// variable ids: cells known dead get 0, known alive get 1, and each
/// remaining equivalence class gets a fresh id from 2 up. Setters invalidate
/// the built state.
#[derive(Debug, Clone)]
pub struct VariablePattern {
    bounds: Bounds,
    cells: Vec<Cell>,
    groups: Vec<CellGroup>,
    built: Option<BuiltState>,
}

impl VariablePattern {
    /// All cells unknown, ungrouped, following rules.
    pub fn new(bounds: Bounds) -> Self {
        let mut cells = Vec::with_capacity(bounds.cell_count());
        for t in bounds.t.0..=bounds.t.1 {
            for y in bounds.y.0..=bounds.y.1 {
                for x in bounds.x.0..=bounds.x.1 {
                    cells.push(Cell::unknown(Point::new(x, y, t)));
                }
            }
        }
        Self { bounds, cells, groups: Vec::new(), built: None }
    }

    /// A `width` x `height` grid over generations `0..=max_gen`.
    pub fn grid(width: i32, height: i32, max_gen: i32) -> Self {
        Self::new(Bounds::grid(width, height, max_gen))
    }

    /// Flat index of `p` in the t-major cell list.
    fn cell_index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let lx = (p.x - self.bounds.x.0) as usize;
        let ly = (p.y - self.bounds.y.0) as usize;
        let lt = (p.t - self.bounds.t.0) as usize;
        let sz_x = self.bounds.size_x() as usize;
        let sz_y = self.bounds.size_y() as usize;
        Some(lt * sz_y * sz_x + ly * sz_x + lx)
    }

    /// The cell at `p`, or a default unknown cell for out-of-bounds points.
    pub fn cell(&self, p: Point) -> Cell {
        match self.cell_index(p) {
            Some(idx) => self.cells[idx],
            None => Cell::unknown(p),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn groups(&self) -> &[CellGroup] {
        &self.groups
    }

    /// Translate the pattern (bounds and every cell) by `rel_shift`.
    pub fn shift_by(&mut self, rel_shift: Point) {
        self.bounds = self.bounds.translate(rel_shift);
        for cell in &mut self.cells {
            cell.position = cell.position + rel_shift;
        }
        self.built = None;
    }

    /// Register a cell group; returns its index. Later-added groups take
    /// priority when symmetries link cells of different groups.
    pub fn add_cell_group(&mut self, group: CellGroup) -> usize {
        self.groups.push(group);
        self.built = None;
        self.groups.len() - 1
    }

    /// Register a group whose only identification is `time_transform`.
    pub fn add_time_symmetry(&mut self, time_transform: AffineTransform) -> usize {
        self.add_cell_group(CellGroup::with_time_transform(time_transform))
    }

    pub fn set_cell_group(&mut self, p: Point, group: usize) {
        if let Some(idx) = self.cell_index(p) {
            self.cells[idx].group = Some(group);
            self.built = None;
        }
    }

    pub fn set_cell_group_where<F: Fn(&Cell) -> bool>(&mut self, group: usize, predicate: F) {
        for cell in &mut self.cells {
            if predicate(cell) {
                cell.group = Some(group);
            }
        }
        self.built = None;
    }

    pub fn set_known(&mut self, p: Point, state: bool) {
        if let Some(idx) = self.cell_index(p) {
            self.cells[idx].known = true;
            self.cells[idx].state = state;
            self.built = None;
        }
    }

    pub fn set_alive(&mut self, p: Point) {
        self.set_known(p, true);
    }

    pub fn set_dead(&mut self, p: Point) {
        self.set_known(p, false);
    }

    pub fn set_known_where<F: Fn(&Cell) -> bool>(&mut self, state: bool, predicate: F) {
        for cell in &mut self.cells {
            if predicate(cell) {
                cell.known = true;
                cell.state = state;
            }
        }
        self.built = None;
    }

    /// Control whether the cell at `p` is constrained by the transition rule.
    pub fn set_follows_rules(&mut self, p: Point, follows: bool) {
        if let Some(idx) = self.cell_index(p) {
            self.cells[idx].follows_rules = follows;
            self.built = None;
        }
    }

    pub fn set_follows_rules_where<F: Fn(&Cell) -> bool>(&mut self, follows: bool, predicate: F) {
        for cell in &mut self.cells {
            if predicate(cell) {
                cell.follows_rules = follows;
            }
        }
        self.built = None;
    }

    pub fn is_boundary(&self, p: Point) -> bool {
        self.bounds.on_spatial_edge(p)
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }
}

impl SubPattern for VariablePattern {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn build(&mut self) -> Result<(), SearchError> {
        let mut uf = UnionFind::new();
        uf.reserve(self.cells.len() + 2);
        uf.make_set(CellKey::Live);
        uf.make_set(CellKey::Dead);

        for cell in &self.cells {
            uf.make_set(CellKey::At(cell.position));
            if cell.is_live() {
                uf.unite(CellKey::At(cell.position), CellKey::Live);
            } else if cell.is_dead() {
                uf.unite(CellKey::At(cell.position), CellKey::Dead);
            }
        }

        // Symmetry identifications. Cells only link to images whose group
        // priority is at most their own, so a later-added group (say a
        // perturbation region) is never absorbed into an earlier background
        // group, and ungrouped cells are never linked at all.
        for cell in &self.cells {
            let Some(group_idx) = cell.group else { continue };
            let group = &self.groups[group_idx];

            for img in find_all_images(cell.position, &group.spatial_transforms, self.bounds) {
                if let Some(target_group) = self.cell(img).group {
                    if target_group <= group_idx {
                        uf.unite(CellKey::At(cell.position), CellKey::At(img));
                    }
                }
            }

            // The time transform is applied once, not iterated to closure;
            // longer temporal chains come from composition at the problem
            // level or from the transform landing in bounds at each frame.
            let time_img = group.time_transform.apply(cell.position);
            if time_img != cell.position && self.bounds.contains(time_img) {
                if let Some(target_group) = self.cell(time_img).group {
                    if target_group <= group_idx {
                        uf.unite(CellKey::At(cell.position), CellKey::At(time_img));
                    }
                }
            }
        }

        if uf.same(CellKey::Live, CellKey::Dead) {
            self.built = None;
            return Err(SearchError::Contradiction);
        }

        let mut cell_to_var = HashMap::with_capacity(self.cells.len());
        let mut root_to_var = HashMap::with_capacity(self.cells.len());
        root_to_var.insert(uf.find(CellKey::Dead), 0);
        root_to_var.insert(uf.find(CellKey::Live), 1);
        let mut next_var = 2;

        for cell in &self.cells {
            let root = uf.find(CellKey::At(cell.position));
            let var = *root_to_var.entry(root).or_insert_with(|| {
                let var = next_var;
                next_var += 1;
                var
            });
            cell_to_var.insert(cell.position, var);
        }

        self.built = Some(BuiltState {
            cell_to_var,
            variable_count: next_var - 2,
        });
        Ok(())
    }

    fn num_variables(&self) -> i32 {
        self.built.as_ref().expect("pattern not built").variable_count
    }

    fn cell_value(&self, p: Point) -> i32 {
        let built = self.built.as_ref().expect("pattern not built");
        built.cell_to_var.get(&p).copied().unwrap_or(0)
    }

    fn is_known(&self, p: Point) -> bool {
        self.cell(p).known
    }

    fn state(&self, p: Point) -> bool {
        self.cell(p).state
    }

    fn follows_rules(&self, p: Point) -> bool {
        self.cell(p).follows_rules
    }

    fn clauses(&self, base_var: i32) -> Result<ClauseList, SearchError> {
        assert!(self.is_built(), "pattern not built");

        let to_global = |local: i32| if local < 2 { local } else { base_var + (local - 2) };

        let mut clauses = ClauseList::new();
        let mut cells = [0i32; 10];
        for t in self.bounds.t.0..self.bounds.t.1 {
            for y in self.bounds.y.0..=self.bounds.y.1 {
                for x in self.bounds.x.0..=self.bounds.x.1 {
                    let output = Point::new(x, y, t + 1);
                    if !self.follows_rules(output) {
                        continue;
                    }

                    let mut i = 0;
                    for dy in -1..=1 {
                        for dx in -1..=1 {
                            cells[i] = to_global(self.cell_value(Point::new(x + dx, y + dy, t)));
                            i += 1;
                        }
                    }
                    cells[9] = to_global(self.cell_value(output));

                    append_transition_clauses(&cells, &mut clauses)?;
                }
            }
        }
        Ok(clauses)
    }
}
