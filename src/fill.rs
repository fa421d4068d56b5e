//! Polygon Filling
//!
//! Segments are collected with [PolyFill::add_segment] and filled with
//!   [PolyFill::fill], which sweeps downward through the sorted event
//!   queue keeping an active edge list. Between two distinct event rows
//!   the active edge list is constant, so each interval of rows is filled
//!   in one pass by [fill_rows].
//!
//! [PolyFill::fill_slow] fills the same segments by testing every segment
//!   on every row. It is slow and exists to check the sweep.
//!
//! [PolyFill::add_segment]: struct.PolyFill.html#method.add_segment
//! [PolyFill::fill]: struct.PolyFill.html#method.fill
//! [PolyFill::fill_slow]: struct.PolyFill.html#method.fill_slow
//! [fill_rows]: ../scan/fn.fill_rows.html

use crate::event::build_events;
use crate::event::Event;
use crate::event::EventKind;
use crate::geom::Bound;
use crate::geom::Point;
use crate::geom::Segment;
use crate::scan::crossings;
use crate::scan::fill_rows;
use crate::scan::pair_spans;
use crate::scan::Span;
use crate::Surface;

/// Segment collection and scanline filler
#[derive(Debug,Default)]
pub struct PolyFill {
    segments: Vec<Segment>,
    bound: Bound,
    /// Crossing scratch space, reused between fills
    xs: Vec<f64>,
}

/// State of the sweep line between events
#[derive(Debug)]
pub struct SweepState {
    /// Indices of segments crossing the sweep line
    pub active: Vec<usize>,
    /// First row not yet filled
    pub y: i64,
}

impl SweepState {
    pub fn new(y: i64) -> Self {
        Self { active: vec![], y }
    }
    fn insert(&mut self, index: usize) {
        debug_assert!(! self.active.contains(&index));
        self.active.push(index);
    }
    fn remove(&mut self, index: usize) {
        let pos = self.active.iter().position(|&i| i == index);
        match pos {
            Some(pos) => { self.active.swap_remove(pos); },
            None => panic!("segment {} removed from active edges without being added", index),
        }
    }
}

impl PolyFill {
    /// Create an empty filler
    pub fn new() -> Self {
        Self { segments: vec![], bound: Bound::empty(), xs: vec![] }
    }
    /// Remove all segments
    pub fn reset(&mut self) {
        self.segments.clear();
        self.bound = Bound::empty();
    }
    /// Add a segment from (`x0`,`y0`) to (`x1`,`y1`)
    ///
    /// Horizontal and zero-length segments do not affect the fill and are
    ///   ignored
    ///
    ///     use scanfill::PolyFill;
    ///
    ///     let mut pf = PolyFill::new();
    ///     pf.add_segment(0, 0, 10, 10);
    ///     pf.add_segment(0, 5, 10, 5); // Horizontal
    ///     pf.add_segment(3, 3, 3, 3);  // Zero length
    ///     assert_eq!(pf.segments().len(), 1);
    ///
    pub fn add_segment(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        self.add_line(Point::new(x0, y0), Point::new(x1, y1));
    }
    /// Add a segment between two Points
    pub fn add_line(&mut self, p0: Point, p1: Point) {
        if let Some(s) = Segment::new(p0, p1) {
            self.bound.add(s.a.x as f64, s.a.y as f64);
            self.bound.add(s.b.x as f64, s.b.y as f64);
            self.segments.push(s);
        }
    }
    /// Add a closed polygon, connecting the last point back to the first
    pub fn add_polygon(&mut self, pts: &[Point]) {
        if pts.len() < 2 {
            return;
        }
        let mut last = pts[pts.len() - 1];
        for &p in pts {
            self.add_line(last, p);
            last = p;
        }
    }
    /// Collected segments, in the order added
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    /// Bounding box of the collected segments
    pub fn bound(&self) -> Bound {
        self.bound
    }
    /// Sorted event queue of the collected segments
    pub fn events(&self) -> Vec<Event> {
        build_events(&self.segments)
    }
    /// Fill the region enclosed by the segments with `value`
    ///
    /// Regions are determined by the even-odd rule
    ///
    ///     use scanfill::{PolyFill,RenderingBase};
    ///
    ///     let mut ren = RenderingBase::new(20, 20);
    ///     let mut pf = PolyFill::new();
    ///     pf.add_polygon(&[(2,2).into(), (12,2).into(), (12,8).into(), (2,8).into()]);
    ///     pf.fill(&mut ren, 255);
    ///     assert_eq!(ren.pixel(2,2), 255);
    ///     assert_eq!(ren.pixel(11,7), 255);
    ///     assert_eq!(ren.pixel(12,7), 0);
    ///     assert_eq!(ren.pixel(11,8), 0);
    ///
    pub fn fill<S: Surface>(&mut self, ren: &mut S, value: u8) {
        let events = build_events(&self.segments);
        let first = match events.first() {
            Some(e) => e.y,
            None => return,
        };
        let mut state = SweepState::new(first);
        for e in &events {
            self.handle_event(&mut state, e, ren, value);
        }
        debug_assert!(state.active.is_empty());
    }
    fn handle_event<S: Surface>(&mut self, state: &mut SweepState, e: &Event, ren: &mut S, value: u8) {
        match e.kind {
            EventKind::Enter => state.insert(e.index),
            EventKind::Exit => {
                if e.y != state.y {
                    log::trace!("SWEEP: rows {} .. {} active {}", state.y, e.y, state.active.len());
                    let segments = &self.segments;
                    let edges = state.active.iter().map(|&i| &segments[i]);
                    fill_rows(state.y .. e.y, edges, &mut self.xs, ren, value);
                    state.y = e.y;
                }
                state.remove(e.index);
            }
        }
    }
    /// Fill the region enclosed by the segments, testing every segment on
    ///   every row
    ///
    /// Produces the same pixels as [fill](#method.fill)
    pub fn fill_slow<S: Surface>(&mut self, ren: &mut S, value: u8) {
        if self.bound.is_empty() {
            return;
        }
        let y0 = self.bound.ymin as i64;
        let y1 = self.bound.ymax as i64;
        fill_rows(y0 .. y1, self.segments.iter(), &mut self.xs, ren, value);
    }
    /// Spans covering row `y`
    pub fn spans_at(&self, y: i64) -> Vec<Span> {
        let mut xs = vec![];
        crossings(&mut xs, y, self.segments.iter());
        pair_spans(&xs, y).collect()
    }
}
