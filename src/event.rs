//! Sweep Events

use crate::geom::Segment;

use std::cmp::Ordering;

/// Kind of sweep event
///
/// `Enter` sorts before `Exit` so that edges starting on a row are
///   active before edges ending on the same row are removed
#[derive(Debug,Copy,Clone,PartialEq,Eq,PartialOrd,Ord)]
pub enum EventKind {
    Enter,
    Exit,
}

/// Segment entering or leaving the sweep line
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Event {
    /// Row of the event
    pub y: i64,
    /// Index of the segment
    pub index: usize,
    pub kind: EventKind,
}

impl Event {
    pub fn is_enter(&self) -> bool {
        self.kind == EventKind::Enter
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y)
            .then(self.kind.cmp(&other.kind))
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the sorted event queue for a set of segments
///
/// Each segment produces one `Enter` event at its upper end and one
///   `Exit` event at its lower end
///
///     use scanfill::{Point,Segment,EventKind,build_events};
///
///     let s = Segment::new(Point::new(0,4), Point::new(2,1)).unwrap();
///     let ev = build_events(&[s]);
///     assert_eq!(ev.len(), 2);
///     assert_eq!((ev[0].y, ev[0].kind), (1, EventKind::Enter));
///     assert_eq!((ev[1].y, ev[1].kind), (4, EventKind::Exit));
///
pub fn build_events(segments: &[Segment]) -> Vec<Event> {
    let mut events = Vec::with_capacity(segments.len() * 2);
    for (index, s) in segments.iter().enumerate() {
        events.push(Event { y: s.a.y, index, kind: EventKind::Enter });
        events.push(Event { y: s.b.y, index, kind: EventKind::Exit });
    }
    events.sort_unstable();
    log::trace!("BUILD EVENTS: {} segments {} events", segments.len(), events.len());
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn seg(x0: i64, y0: i64, x1: i64, y1: i64) -> Segment {
        Segment::new(Point::new(x0,y0), Point::new(x1,y1)).unwrap()
    }

    #[test]
    fn two_events_per_segment() {
        let segs = vec![seg(0,0,10,10), seg(10,10,0,20), seg(0,20,0,0)];
        let ev = build_events(&segs);
        assert_eq!(ev.len(), 6);
        for i in 0 .. segs.len() {
            let n_enter = ev.iter().filter(|e| e.index == i && e.is_enter()).count();
            let n_exit = ev.iter().filter(|e| e.index == i && ! e.is_enter()).count();
            assert_eq!((n_enter, n_exit), (1,1));
        }
    }

    #[test]
    fn sorted_by_y() {
        let segs = vec![seg(0,5,3,9), seg(1,-2,4,3), seg(0,0,0,7)];
        let ev = build_events(&segs);
        let ys : Vec<_> = ev.iter().map(|e| e.y).collect();
        assert_eq!(ys, vec![-2, 0, 3, 5, 7, 9]);
    }

    #[test]
    fn enter_before_exit_at_same_row() {
        // Second segment ends where the first begins, and is added later
        let segs = vec![seg(0,10,5,20), seg(5,0,0,10), seg(9,0,9,10)];
        let ev = build_events(&segs);
        let at_10 : Vec<_> = ev.iter().filter(|e| e.y == 10)
            .map(|e| (e.kind, e.index)).collect();
        assert_eq!(at_10, vec![(EventKind::Enter, 0),
                               (EventKind::Exit, 1),
                               (EventKind::Exit, 2)]);
    }
}
