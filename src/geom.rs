//! Points, Segments and Intersections

use std::cmp::Ordering;

/// Tolerance below which a determinant is treated as zero
pub const EPSILON: f64 = 1e-8;

/// Check if a value is zero within [EPSILON]
///
/// [EPSILON]: constant.EPSILON.html
pub fn is_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

/// Integer Point
///
/// Points are ordered along the sweep direction, first by `y` and then by `x`
///
///     use scanfill::Point;
///
///     assert!(Point::new(5, 0) < Point::new(0, 1));
///     assert!(Point::new(0, 1) < Point::new(1, 1));
///
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point {
    /// Horizontal position
    pub x: i64,
    /// Vertical position, increasing downwards
    pub y: i64,
}

impl Point {
    /// Create a new Point
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64,i64)> for Point {
    fn from((x,y): (i64,i64)) -> Self {
        Point { x, y }
    }
}

/// Line Segment in sweep order
///
/// The first point `a` always precedes `b` and the segment is never
///   horizontal, `a.y < b.y`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Segment {
    /// Upper end point
    pub a: Point,
    /// Lower end point
    pub b: Point,
    /// Change in x per unit change in y
    pub inv_slope: f64,
}

impl Segment {
    /// Create a new Segment from two end points
    ///
    /// End points are swapped into sweep order. Horizontal and zero-length
    ///   segments return `None`
    ///
    ///     use scanfill::{Point,Segment};
    ///
    ///     let s = Segment::new(Point::new(4,8), Point::new(0,0)).unwrap();
    ///     assert_eq!(s.a, Point::new(0,0));
    ///     assert_eq!(s.inv_slope, 0.5);
    ///
    ///     assert!(Segment::new(Point::new(0,3), Point::new(9,3)).is_none());
    ///
    pub fn new(p0: Point, p1: Point) -> Option<Self> {
        let (a, b) = if p0 <= p1 { (p0, p1) } else { (p1, p0) };
        if a.y == b.y {
            return None;
        }
        // Differences of extreme coordinates overflow i64
        let inv_slope = (b.x as f64 - a.x as f64) / (b.y as f64 - a.y as f64);
        Some(Segment { a, b, inv_slope })
    }
    /// Check if `y` lies within the vertical extent of the segment
    pub fn spans(&self, y: f64) -> bool {
        self.a.y as f64 <= y && y <= self.b.y as f64
    }
    /// Horizontal position of the segment at `y`
    ///
    /// Returns `None` when `y` lies outside the segment
    ///
    ///     use scanfill::{Point,Segment};
    ///
    ///     let s = Segment::new(Point::new(0,0), Point::new(10,10)).unwrap();
    ///     assert_eq!(s.x_at_y(2.5), Some(2.5));
    ///     assert_eq!(s.x_at_y(10.5), None);
    ///
    pub fn x_at_y(&self, y: f64) -> Option<f64> {
        if ! self.spans(y) {
            return None;
        }
        if self.a.x == self.b.x {
            return Some(self.a.x as f64);
        }
        Some(self.a.x as f64 + (y - self.a.y as f64) * self.inv_slope)
    }
    /// End points as floating point pairs
    pub fn to_f64(&self) -> ((f64,f64),(f64,f64)) {
        ((self.a.x as f64, self.a.y as f64),
         (self.b.x as f64, self.b.y as f64))
    }
}

/// Intersection of two line segments (`p1`,`p2`) and (`p3`,`p4`)
///
/// Returns `None` for parallel or nearly parallel segments and when the
///   crossing lies beyond either segment
///
///     use scanfill::intersects;
///
///     let p = intersects((0.,0.), (10.,10.), (0.,10.), (10.,0.));
///     assert_eq!(p, Some((5.,5.)));
///
///     assert_eq!(intersects((0.,0.), (10.,0.), (0.,1.), (10.,1.)), None);
///
pub fn intersects(p1: (f64,f64), p2: (f64,f64),
                  p3: (f64,f64), p4: (f64,f64)) -> Option<(f64,f64)> {
    let (ax, ay) = (p2.0 - p1.0, p2.1 - p1.1);
    let (bx, by) = (p3.0 - p4.0, p3.1 - p4.1);
    let (cx, cy) = (p1.0 - p3.0, p1.1 - p3.1);

    let denom = ay * bx - ax * by;
    if is_zero(denom) {
        return None;
    }
    let outside = |v: f64| if denom > 0.0 {
        v < 0.0 || v > denom
    } else {
        v > 0.0 || v < denom
    };
    // Position along first segment
    let alpha = by * cx - bx * cy;
    if outside(alpha) {
        return None;
    }
    // Position along second segment
    let beta = ax * cy - ay * cx;
    if outside(beta) {
        return None;
    }
    let t = alpha / denom;
    Some((p1.0 + t * ax, p1.1 + t * ay))
}

/// Intersection of two Segments
pub fn segment_intersection(s1: &Segment, s2: &Segment) -> Option<(f64,f64)> {
    let (p1, p2) = s1.to_f64();
    let (p3, p4) = s2.to_f64();
    intersects(p1, p2, p3, p4)
}

/// Axis aligned bounding box
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Bound {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Default for Bound {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bound {
    /// Create an empty bound, containing nothing
    pub fn empty() -> Self {
        Bound { xmin: std::f64::MAX, ymin: std::f64::MAX,
                xmax: std::f64::MIN, ymax: std::f64::MIN }
    }
    /// Check if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }
    /// Grow to include the point (`x`,`y`)
    pub fn add(&mut self, x: f64, y: f64) {
        self.xmin = self.xmin.min(x);
        self.xmax = self.xmax.max(x);
        self.ymin = self.ymin.min(y);
        self.ymax = self.ymax.max(y);
    }
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
    pub fn midpoint(&self) -> (f64, f64) {
        ((self.xmin + self.xmax) / 2.0, (self.ymin + self.ymax) / 2.0)
    }
}
