//! Spacetime geometry primitives: points, affine transforms, bounds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::{Add, Sub};

/// A location in (x, y, t) spacetime, or a displacement vector in the same space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub t: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32, t: i32) -> Self {
        Self { x, y, t }
    }

    pub const ORIGIN: Point = Point::new(0, 0, 0);
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.t + rhs.t)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.t - rhs.t)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.t)
    }
}

/// An affine map on spacetime: `(x, y, t) -> (a1*x + a2*y + bx, a3*x + a4*y + by, t + bt)`.
///
/// The spatial part is an arbitrary 2x2 integer matrix; time only translates.
/// Whether the matrix is actually a symmetry of the square lattice is up to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a1: i32,
    pub a2: i32,
    pub a3: i32,
    pub a4: i32,
    pub bx: i32,
    pub by: i32,
    pub bt: i32,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform::new(1, 0, 0, 1, 0, 0, 0);

    pub const fn new(a1: i32, a2: i32, a3: i32, a4: i32, bx: i32, by: i32, bt: i32) -> Self {
        Self { a1, a2, a3, a4, bx, by, bt }
    }

    /// A pure translation by `(dx, dy, dt)`.
    pub const fn translation(dx: i32, dy: i32, dt: i32) -> Self {
        Self::new(1, 0, 0, 1, dx, dy, dt)
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a1 * p.x + self.a2 * p.y + self.bx,
            self.a3 * p.x + self.a4 * p.y + self.by,
            p.t + self.bt,
        )
    }

    /// True when the transform does not move points in time.
    pub fn is_spatial_only(&self) -> bool {
        self.bt == 0
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Closed rectangular bounds in spacetime. Each axis is an inclusive `(lo, hi)`
/// interval; `hi < lo` means the axis (and therefore the bounds) is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: (i32, i32),
    pub y: (i32, i32),
    pub t: (i32, i32),
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        x: (0, -1),
        y: (0, -1),
        t: (0, -1),
    };

    pub const fn new(x: (i32, i32), y: (i32, i32), t: (i32, i32)) -> Self {
        Self { x, y, t }
    }

    /// A `width` x `height` grid anchored at the origin, covering generations
    /// `0..=max_gen`.
    pub const fn grid(width: i32, height: i32, max_gen: i32) -> Self {
        Self::new((0, width - 1), (0, height - 1), (0, max_gen))
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x.0
            && p.x <= self.x.1
            && p.y >= self.y.0
            && p.y <= self.y.1
            && p.t >= self.t.0
            && p.t <= self.t.1
    }

    /// True when `p` sits on the spatial (x or y) edge of the bounds.
    pub fn on_spatial_edge(&self, p: Point) -> bool {
        p.x == self.x.0 || p.x == self.x.1 || p.y == self.y.0 || p.y == self.y.1
    }

    pub fn translate(&self, d: Point) -> Bounds {
        Bounds::new(
            (self.x.0 + d.x, self.x.1 + d.x),
            (self.y.0 + d.y, self.y.1 + d.y),
            (self.t.0 + d.t, self.t.1 + d.t),
        )
    }

    pub fn size_x(&self) -> i32 {
        (self.x.1 - self.x.0 + 1).max(0)
    }

    pub fn size_y(&self) -> i32 {
        (self.y.1 - self.y.0 + 1).max(0)
    }

    pub fn size_t(&self) -> i32 {
        (self.t.1 - self.t.0 + 1).max(0)
    }

    pub fn cell_count(&self) -> usize {
        self.size_x() as usize * self.size_y() as usize * self.size_t() as usize
    }

    /// Grow each limit outward to cover `p`.
    pub fn expand_to(&mut self, p: Point) {
        self.x.0 = self.x.0.min(p.x);
        self.x.1 = self.x.1.max(p.x);
        self.y.0 = self.y.0.min(p.y);
        self.y.1 = self.y.1.max(p.y);
        self.t.0 = self.t.0.min(p.t);
        self.t.1 = self.t.1.max(p.t);
    }
}

/// Orbit of `p` under the monoid generated by `transforms`, restricted to
/// `bounds`. Expands breadth-first until no new in-bounds image appears; the
/// orbit always includes `p` itself.
pub fn find_all_images(
    p: Point,
    transforms: &[AffineTransform],
    bounds: Bounds,
) -> BTreeSet<Point> {
    let mut images = BTreeSet::new();
    images.insert(p);
    let mut frontier = vec![p];
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &q in &frontier {
            for transform in transforms {
                let img = transform.apply(q);
                if bounds.contains(img) && images.insert(img) {
                    next.push(img);
                }
            }
        }
        frontier = next;
    }
    images
}
