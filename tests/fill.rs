extern crate scanfill;

use scanfill::{EventKind, Point, PolyFill, RenderingBase, Span, Surface};

/// Surface recording the spans drawn onto it
struct SpanRecorder {
    spans: Vec<Span>,
}

impl SpanRecorder {
    fn new() -> Self {
        Self { spans: vec![] }
    }
}

impl Surface for SpanRecorder {
    fn width(&self) -> usize { 1000 }
    fn height(&self) -> usize { 1000 }
    fn clear(&mut self, _value: u8) { self.spans.clear(); }
    fn draw_hline(&mut self, x1: i64, x2: i64, y: i64, _value: u8) {
        self.spans.push(Span { x1, x2, y });
    }
    fn draw_line(&mut self, _p0: Point, _p1: Point, _value: u8) { }
    fn begin(&mut self) { }
    fn end(&mut self) { }
}

fn poly(pts: &[(i64,i64)]) -> Vec<Point> {
    pts.iter().map(|&p| p.into()).collect()
}

fn square() -> PolyFill {
    let mut pf = PolyFill::new();
    pf.add_segment(0, 0, 10, 0);
    pf.add_segment(10, 0, 10, 10);
    pf.add_segment(10, 10, 0, 10);
    pf.add_segment(0, 10, 0, 0);
    pf
}

#[test]
fn fill_square() {
    let mut ren = RenderingBase::new(20, 20);
    let mut pf = square();
    pf.fill(&mut ren, 255);
    for y in 0 .. 20 {
        for x in 0 .. 20 {
            let expect = if x < 10 && y < 10 { 255 } else { 0 };
            assert_eq!(ren.pixel(x, y), expect, "pixel {} {}", x, y);
        }
    }
}

#[test]
fn fill_square_rows_once() {
    let mut rec = SpanRecorder::new();
    let mut pf = square();
    pf.fill(&mut rec, 1);
    let expect : Vec<_> = (0 .. 10).map(|y| Span { x1: 0, x2: 10, y }).collect();
    assert_eq!(rec.spans, expect);
}

#[test]
fn fill_disjoint_triangles() {
    let mut ren = RenderingBase::new(40, 12);
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(0,0), (8,0), (0,8)]));
    pf.add_polygon(&poly(&[(20,0), (28,0), (28,8)]));
    pf.fill(&mut ren, 200);
    for y in 0 .. 8 {
        let row = ren.rbuf.row(y);
        assert!(row[8 .. 20].iter().all(|&v| v == 0), "gap filled on row {}", y);
        if y < 7 {
            assert_eq!(row[0], 200);
        }
        assert_eq!(row[27], 200);
    }
    for y in 8 .. 12 {
        assert!(ren.rbuf.row(y).iter().all(|&v| v == 0));
    }

    let mut rec = SpanRecorder::new();
    pf.fill(&mut rec, 1);
    for y in 0 .. 8 {
        let row : Vec<_> = rec.spans.iter().filter(|s| s.y == y).collect();
        assert_eq!(row.len(), 2);
        assert!(row[0].x2 <= 8);
        assert!(row[1].x1 >= 20);
    }
}

#[test]
fn fill_with_hole() {
    let mut ren = RenderingBase::new(30, 30);
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(0,0), (20,0), (20,20), (0,20)]));
    pf.add_polygon(&poly(&[(5,5), (15,5), (15,15), (5,15)]));
    pf.fill(&mut ren, 9);
    assert_eq!(ren.pixel(2, 2), 9);
    assert_eq!(ren.pixel(10, 10), 0);
    assert_eq!(ren.pixel(4, 10), 9);
    assert_eq!(ren.pixel(15, 10), 9);
    assert_eq!(ren.pixel(10, 4), 9);
    assert_eq!(ren.pixel(10, 15), 9);
}

#[test]
fn horizontal_edges_have_no_events() {
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(0,5), (10,5), (10,15), (0,15)]));
    assert_eq!(pf.segments().len(), 2);
    assert!(pf.segments().iter().all(|s| s.a.y != s.b.y));
    let events = pf.events();
    assert_eq!(events.len(), 4);
    let enters : Vec<_> = events.iter().filter(|e| e.kind == EventKind::Enter).map(|e| e.y).collect();
    let exits : Vec<_> = events.iter().filter(|e| e.kind == EventKind::Exit).map(|e| e.y).collect();
    assert_eq!(enters, vec![5, 5]);
    assert_eq!(exits, vec![15, 15]);
}

#[test]
fn shared_vertices() {
    // Diamond, every vertex shared by two edges
    let mut rec = SpanRecorder::new();
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(10,0), (20,10), (10,20), (0,10)]));
    pf.fill(&mut rec, 1);
    let rows : Vec<_> = rec.spans.iter().map(|s| s.y).collect();
    assert_eq!(rows, (0 .. 20).collect::<Vec<_>>());
    assert_eq!(rec.spans[0], Span { x1: 9, x2: 10, y: 0 });
    assert_eq!(rec.spans[9], Span { x1: 0, x2: 19, y: 9 });
    assert_eq!(rec.spans[10], Span { x1: 0, x2: 19, y: 10 });
}

#[test]
fn odd_crossings_are_truncated() {
    // Open path: three edges cross every row
    let mut ren = RenderingBase::new(40, 12);
    let mut pf = PolyFill::new();
    pf.add_segment(0, 0, 10, 10);
    pf.add_segment(20, 0, 20, 10);
    pf.add_segment(30, 0, 30, 10);
    assert_eq!(pf.spans_at(4), vec![Span { x1: 4, x2: 20, y: 4 }]);
    pf.fill(&mut ren, 7);
    for y in 0 .. 10 {
        let row = ren.rbuf.row(y);
        assert!(row[20 ..].iter().all(|&v| v == 0), "trailing span on row {}", y);
        assert_eq!(row[19], 7);
    }
}

#[test]
fn figure_eight_matches_brute_force() {
    let mut ren = RenderingBase::new(20, 20);
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(0,0), (10,10), (10,0), (0,10)]));
    assert_eq!(pf.spans_at(2), vec![Span { x1: 0, x2: 2, y: 2 },
                                     Span { x1: 7, x2: 10, y: 2 }]);
    pf.fill(&mut ren, 1);
    let mut slow = RenderingBase::new(20, 20);
    pf.fill_slow(&mut slow, 1);
    assert_eq!(ren.pixeldata(), slow.pixeldata());
    assert_eq!(ren.pixel(5, 2), 0);
}

#[test]
fn figure_eight_with_open_edge() {
    // Extra open edge gives five crossings on every row
    let mut ren = RenderingBase::new(20, 20);
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(0,0), (10,10), (10,0), (0,10)]));
    pf.add_segment(15, 0, 15, 10);
    assert_eq!(pf.spans_at(2), vec![Span { x1: 0, x2: 2, y: 2 },
                                     Span { x1: 7, x2: 10, y: 2 }]);
    pf.fill(&mut ren, 1);
    for y in 0 .. 10 {
        let row = ren.rbuf.row(y);
        assert!(row[10 ..].iter().all(|&v| v == 0), "trailing span on row {}", y);
        assert_eq!(row[9], 1);
    }
    let mut slow = RenderingBase::new(20, 20);
    pf.fill_slow(&mut slow, 1);
    assert_eq!(ren.pixeldata(), slow.pixeldata());
}

#[test]
fn fill_extreme_coordinates() {
    let mut rec = SpanRecorder::new();
    let mut pf = PolyFill::new();
    pf.add_segment(i64::MIN, 0, i64::MAX, 1);
    pf.add_segment(5, 0, 5, 1);
    pf.fill(&mut rec, 1);
    assert_eq!(rec.spans, vec![Span { x1: 0, x2: 5, y: 0 }]);

    let mut ren = RenderingBase::new(8, 8);
    let mut pf = PolyFill::new();
    pf.add_segment(0, i64::MIN, 0, i64::MAX);
    pf.add_segment(4, i64::MAX, 4, i64::MIN);
    pf.add_segment(i64::MAX, 0, i64::MAX, 3);
    pf.fill(&mut ren, 2);
    for y in 0 .. 8 {
        assert_eq!(ren.rbuf.row(y), &[2,2,2,2,0,0,0,0]);
    }
    let mut slow = RenderingBase::new(8, 8);
    pf.fill_slow(&mut slow, 2);
    assert_eq!(ren.pixeldata(), slow.pixeldata());
}

#[test]
fn fill_idempotent() {
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(3,1), (25,7), (14,29), (2,18)]));
    let mut once = RenderingBase::new(32, 32);
    pf.fill(&mut once, 128);
    let mut twice = RenderingBase::new(32, 32);
    pf.fill(&mut twice, 128);
    pf.fill(&mut twice, 128);
    assert_eq!(once.pixeldata(), twice.pixeldata());
}

#[test]
fn fill_clipped() {
    let mut ren = RenderingBase::new(10, 10);
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(-50,-50), (50,-50), (50,50), (-50,50)]));
    pf.fill(&mut ren, 3);
    assert!(ren.pixeldata().iter().all(|&v| v == 3));

    let mut rec = SpanRecorder::new();
    let mut pf = PolyFill::new();
    pf.add_polygon(&poly(&[(0,-30), (5,-30), (5,2), (0,2)]));
    pf.fill(&mut rec, 1);
    assert_eq!(rec.spans, vec![Span { x1: 0, x2: 5, y: 0 }, Span { x1: 0, x2: 5, y: 1 }]);
}

#[test]
fn fill_empty() {
    let mut ren = RenderingBase::new(4, 4);
    let mut pf = PolyFill::new();
    pf.fill(&mut ren, 1);
    pf.fill_slow(&mut ren, 1);
    pf.add_segment(0, 2, 3, 2);
    pf.fill(&mut ren, 1);
    assert!(ren.pixeldata().iter().all(|&v| v == 0));
}

#[test]
fn reset_between_fills() {
    let mut ren = RenderingBase::new(20, 20);
    let mut pf = square();
    pf.reset();
    pf.add_polygon(&poly(&[(12,12), (18,12), (18,18), (12,18)]));
    pf.fill(&mut ren, 1);
    assert_eq!(ren.pixel(5, 5), 0);
    assert_eq!(ren.pixel(12, 12), 1);
}
