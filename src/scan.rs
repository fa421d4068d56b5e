//! Scanline Spans
//!
//! Rows are sampled half way between integer coordinates, at `y + 0.5`,
//!   so a scan never passes exactly through a vertex. Crossings are
//!   sorted and paired from the left using the even-odd rule.

use crate::geom::Segment;
use crate::Surface;

use std::cmp::max;
use std::cmp::min;
use std::ops::Range;

/// Horizontal run of pixels on row `y`, covering `x1 .. x2`
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x1: i64,
    pub x2: i64,
    pub y: i64,
}

impl Span {
    /// Number of pixels covered
    pub fn len(&self) -> i64 {
        max(self.x2 - self.x1, 0)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vertical sample position of row `y`
pub fn scan_y(y: i64) -> f64 {
    y as f64 + 0.5
}

/// Collect and sort the crossings of `edges` with row `y` into `xs`
///
/// `xs` is cleared first; edges not spanning the row are skipped
pub fn crossings<'a, I>(xs: &mut Vec<f64>, y: i64, edges: I)
    where I: Iterator<Item = &'a Segment>
{
    xs.clear();
    let ys = scan_y(y);
    xs.extend(edges.filter_map(|s| s.x_at_y(ys)));
    xs.sort_unstable_by(|a, b| a.total_cmp(b));
}

/// Pair sorted crossings into spans
///
/// An unpaired final crossing is dropped
///
///     use scanfill::{Span,pair_spans};
///
///     let spans : Vec<_> = pair_spans(&[1.5, 4.0, 6.2, 9.9, 12.0], 3).collect();
///     assert_eq!(spans, vec![Span { x1: 1, x2: 4, y: 3 },
///                            Span { x1: 6, x2: 9, y: 3 }]);
///
pub fn pair_spans(xs: &[f64], y: i64) -> impl Iterator<Item = Span> + '_ {
    if xs.len() % 2 == 1 {
        log::debug!("SCAN: odd crossings {} on row {}, dropping x {:?}",
                    xs.len(), y, xs.last());
    }
    xs.chunks_exact(2)
        .map(move |p| Span { x1: p[0] as i64, x2: p[1] as i64, y })
}

/// Fill each row in `rows` from the crossings of `edges`
///
/// Rows outside of the surface are skipped. `xs` is scratch space,
///   cleared for every row
pub fn fill_rows<'a, S, I>(rows: Range<i64>,
                           edges: I,
                           xs: &mut Vec<f64>,
                           ren: &mut S,
                           value: u8)
    where S: Surface,
          I: Iterator<Item = &'a Segment> + Clone
{
    let y0 = max(rows.start, 0);
    let y1 = min(rows.end, ren.height() as i64);
    log::trace!("FILL ROWS: {} .. {} (clipped {} .. {})", rows.start, rows.end, y0, y1);
    for y in y0 .. y1 {
        crossings(xs, y, edges.clone());
        for span in pair_spans(xs, y) {
            ren.draw_hline(span.x1, span.x2, span.y, value);
        }
    }
}
