//! Line Interpolation
//!
//! Pixels along a line are produced with
//!   [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//!   using only integer arithmetic.

use crate::geom::Point;

use std::convert::TryFrom;

/// Integer line interpolator
///
/// Steps along the major axis one pixel at a time, moving along the
///   minor axis when the accumulated error becomes positive. Lines are
///   always walked in the increasing direction of the major axis, so
///   swapping the end points yields the same pixels.
///
///     use scanfill::{LineInterpolator,Point};
///
///     let px : Vec<_> = LineInterpolator::new(Point::new(0,0), Point::new(4,2)).collect();
///     assert_eq!(px, vec![(0,0), (1,0), (2,1), (3,1), (4,2)]);
///
#[derive(Debug,Clone)]
pub struct LineInterpolator {
    /// Current position along the major axis
    x: i128,
    /// Last position along the major axis
    x_end: i128,
    /// Current position along the minor axis
    y: i128,
    /// Minor axis step, +1 or -1
    inc: i128,
    /// Error accumulator
    d: i128,
    dx: i128,
    dy: i128,
    /// Major axis is vertical
    ver: bool,
}

impl LineInterpolator {
    /// Create a new interpolator from `p0` to `p1`, inclusive
    ///
    /// Any pair of `i64` end points is accepted; stepping is done in
    ///   `i128` so differences between extreme coordinates do not overflow
    pub fn new(p0: Point, p1: Point) -> Self {
        let ver = p1.y.abs_diff(p0.y) > p1.x.abs_diff(p0.x);
        let (mut x0, mut y0, mut x1, mut y1) =
            (p0.x as i128, p0.y as i128, p1.x as i128, p1.y as i128);
        if ver {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x1 < x0 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }
        let dx = x1 - x0;
        let (inc, dy) = if y1 < y0 { (-1, y0 - y1) } else { (1, y1 - y0) };
        let d = 2 * dy - dx;
        Self { x: x0, x_end: x1, y: y0, inc, d, dx, dy, ver }
    }
    /// Major axis is vertical
    pub fn vertical(&self) -> bool {
        self.ver
    }
}

impl Iterator for LineInterpolator {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.x_end {
            return None;
        }
        // Both stay between the end points, inside i64
        let (x, y) = (self.x as i64, self.y as i64);
        let out = if self.ver { (y, x) } else { (x, y) };
        if self.d > 0 {
            self.y += self.inc;
            self.d -= 2 * self.dx;
        }
        self.d += 2 * self.dy;
        self.x += 1;
        Some(out)
    }
    /// Saturates at `usize::MAX` for lines longer than that
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.x > self.x_end { 0 } else { self.x_end - self.x + 1 };
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineInterpolator {}
