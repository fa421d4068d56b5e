//! Drawings and Polygon Files
//!
//! Polygon files start with the number of polygons. Each polygon follows
//!   with its number of nodes and then one node per line as two real
//!   numbers separated by whitespace
//!
//! ```text
//! 2
//! 3
//! 0 0
//! 10 0
//! 5 8
//! ...
//! ```
//!
//! Segment files list one segment per line as four integers
//!   `x0 y0 x1 y1`
//!
//! Blank lines are skipped in both formats.

use crate::geom::Bound;
use crate::geom::Point;
use crate::transform::Transform;

use std::io::BufRead;

use thiserror::Error;

/// Errors reading a polygon or segment file
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Line {line}: Expected {expected}, got {src:?}.")]
    Number { src: String, expected: &'static str, line: usize },
    #[error("Line {line}: Expected {expected} values, got {found}.")]
    Count { expected: usize, found: usize, line: usize },
    #[error("Unexpected end of input, expected {expected}.")]
    Eof { expected: &'static str },
    #[error("Read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Closed polygon of real valued points
pub type Polygon = Vec<(f64,f64)>;

/// Collection of closed polygons
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Drawing {
    pub polys: Vec<Polygon>,
}

impl Drawing {
    pub fn new() -> Self {
        Self { polys: vec![] }
    }
    /// Add a polygon
    pub fn push(&mut self, poly: Polygon) {
        self.polys.push(poly);
    }
    /// Remove and return the last polygon
    pub fn pop(&mut self) -> Option<Polygon> {
        self.polys.pop()
    }
    pub fn len(&self) -> usize {
        self.polys.len()
    }
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }
    /// Bounding box of all points after transforming by `t`
    pub fn bound(&self, t: &Transform) -> Bound {
        let mut b = Bound::empty();
        for &(x,y) in self.polys.iter().flatten() {
            let (x,y) = t.transform(x,y);
            b.add(x,y);
        }
        b
    }
    /// Edges of every polygon after transforming by `t`, rounded to
    ///   integer Points
    ///
    /// Each polygon is closed, its last point joined to its first
    ///
    ///     use scanfill::{Drawing,Point,Transform};
    ///
    ///     let mut dwg = Drawing::new();
    ///     dwg.push(vec![(0.0,0.0), (2.0,0.0), (1.0,1.6)]);
    ///     let lines = dwg.lines(&Transform::new_scale(10.0, 10.0));
    ///     assert_eq!(lines.len(), 3);
    ///     assert_eq!(lines[0], (Point::new(10,16), Point::new(0,0)));
    ///
    pub fn lines(&self, t: &Transform) -> Vec<(Point, Point)> {
        let mut out = vec![];
        for poly in &self.polys {
            if poly.len() < 2 {
                continue;
            }
            let pts : Vec<_> = poly.iter()
                .map(|&(x,y)| t.transform(x,y))
                .map(|(x,y)| Point::new(x.round() as i64, y.round() as i64))
                .collect();
            let mut last = pts[pts.len() - 1];
            for &p in &pts {
                out.push((last, p));
                last = p;
            }
        }
        out
    }
}

/// Lines of a file with their 1-based line number, skipping blank lines
struct Lines<R> {
    src: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(src: R) -> Self {
        Self { src: src.lines(), line: 0 }
    }
    fn next_line(&mut self) -> Result<Option<(usize,String)>, ParseError> {
        for text in &mut self.src {
            let text = text?;
            self.line += 1;
            if ! text.trim().is_empty() {
                return Ok(Some((self.line, text)));
            }
        }
        Ok(None)
    }
    fn expect_line(&mut self, expected: &'static str) -> Result<(usize,String), ParseError> {
        self.next_line()?.ok_or(ParseError::Eof { expected })
    }
}

fn parse_count(text: &str, line: usize) -> Result<usize, ParseError> {
    text.trim().parse().map_err(|_| ParseError::Number {
        src: text.trim().to_string(), expected: "count", line
    })
}

fn parse_values<T: std::str::FromStr>(text: &str, n: usize, expected: &'static str, line: usize)
                                      -> Result<Vec<T>, ParseError> {
    let words : Vec<_> = text.split_whitespace().collect();
    if words.len() != n {
        return Err(ParseError::Count { expected: n, found: words.len(), line });
    }
    words.iter()
        .map(|w| w.parse().map_err(|_| ParseError::Number {
            src: w.to_string(), expected, line
        }))
        .collect()
}

/// Read a polygon file into a Drawing
///
///     use scanfill::read_polygons;
///
///     let src = "1\n3\n0 0\n10 0\n5 8.5\n";
///     let dwg = read_polygons(src.as_bytes()).unwrap();
///     assert_eq!(dwg.polys, vec![vec![(0.,0.), (10.,0.), (5.,8.5)]]);
///
pub fn read_polygons<R: BufRead>(src: R) -> Result<Drawing, ParseError> {
    let mut lines = Lines::new(src);
    let (line, text) = lines.expect_line("polygon count")?;
    let npolys = parse_count(&text, line)?;
    let mut dwg = Drawing::new();
    for _ in 0 .. npolys {
        let (line, text) = lines.expect_line("node count")?;
        let nodes = parse_count(&text, line)?;
        let mut poly = Vec::with_capacity(nodes);
        for _ in 0 .. nodes {
            let (line, text) = lines.expect_line("node")?;
            let v : Vec<f64> = parse_values(&text, 2, "real number", line)?;
            poly.push((v[0], v[1]));
        }
        dwg.push(poly);
    }
    log::debug!("READ POLYGONS: {} polygons {} nodes",
                dwg.len(), dwg.polys.iter().map(|p| p.len()).sum::<usize>());
    Ok(dwg)
}

/// Read a segment file
pub fn read_segments<R: BufRead>(src: R) -> Result<Vec<(Point,Point)>, ParseError> {
    let mut lines = Lines::new(src);
    let mut out = vec![];
    while let Some((line, text)) = lines.next_line()? {
        let v : Vec<i64> = parse_values(&text, 4, "integer", line)?;
        out.push((Point::new(v[0], v[1]), Point::new(v[2], v[3])));
    }
    log::debug!("READ SEGMENTS: {}", out.len());
    Ok(out)
}
