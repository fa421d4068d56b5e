//! Rendering Base
//!
//! Drawing onto a [RenderingBuffer] with clipping, dirty region tracking
//!   and frame presentation
//!
//! [RenderingBuffer]: ../buffer/struct.RenderingBuffer.html

use crate::buffer::RenderingBuffer;
use crate::geom::Point;
use crate::line_interp::LineInterpolator;
use crate::ppm;
use crate::Surface;

use std::cmp::max;
use std::cmp::min;
use std::ops::Deref;
use std::ops::DerefMut;
use std::path::Path;

/// Rectangle of pixels, inclusive of both corners
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Rect {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Rect {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Rect { x1, y1, x2, y2 }
    }
    /// Smallest rectangle containing `self` and `other`
    pub fn union(&self, other: &Rect) -> Rect {
        Rect { x1: min(self.x1, other.x1), y1: min(self.y1, other.y1),
               x2: max(self.x2, other.x2), y2: max(self.y2, other.y2) }
    }
    pub fn width(&self) -> i64 {
        self.x2 - self.x1 + 1
    }
    pub fn height(&self) -> i64 {
        self.y2 - self.y1 + 1
    }
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Gray raster surface
///
/// Writes outside of the surface are ignored. Pixels written inside a
///   frame are collected into a dirty rectangle, which is reported when
///   the outermost frame ends
#[derive(Debug,Default)]
pub struct RenderingBase {
    pub rbuf: RenderingBuffer,
    lock: usize,
    dirty: Option<Rect>,
    presented: Option<Rect>,
    frames: usize,
}

impl RenderingBase {
    /// Create a new surface of `width` by `height` pixels, set to 0
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_buffer(RenderingBuffer::new(width, height))
    }
    /// Create a surface around an existing buffer
    pub fn with_buffer(rbuf: RenderingBuffer) -> Self {
        RenderingBase { rbuf, lock: 0, dirty: None, presented: None, frames: 0 }
    }
    /// Inclusive pixel limits (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.rbuf.width as i64;
        let h = self.rbuf.height as i64;
        (0, w-1, 0, h-1)
    }
    /// Value of pixel at (`x`,`y`)
    ///
    /// Panics when outside of the surface
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.rbuf[(x,y)]
    }
    /// Pixel data
    pub fn pixeldata(&self) -> &[u8] {
        &self.rbuf.data
    }
    /// Frame is in progress
    pub fn is_locked(&self) -> bool {
        self.lock > 0
    }
    /// Number of frames presented
    pub fn frames(&self) -> usize {
        self.frames
    }
    /// Region written during the last presented frame
    pub fn presented(&self) -> Option<Rect> {
        self.presented
    }
    /// Region written so far in the current frame
    pub fn dirty(&self) -> Option<Rect> {
        self.dirty
    }
    fn mark(&mut self, r: Rect) {
        self.dirty = Some(match self.dirty {
            Some(d) => d.union(&r),
            None => r,
        });
    }
    /// Set pixel (`x`,`y`) to `value`
    ///
    /// Locations outside of the region are ignored
    pub fn copy_pixel(&mut self, x: i64, y: i64, value: u8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if x < xmin || x > xmax || y < ymin || y > ymax {
            return;
        }
        self.rbuf[(x as usize, y as usize)] = value;
        self.mark(Rect::new(x, y, x, y));
    }
    /// Set pixels `x1 .. x2` on row `y` to `value`
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use scanfill::RenderingBase;
    ///
    ///     let mut ren = RenderingBase::new(10,2);
    ///     ren.copy_hline(-5, 3, 1, 7);
    ///     assert_eq!(ren.rbuf.row(1), &[7,7,7,0,0,0,0,0,0,0]);
    ///
    ///     ren.copy_hline(8, 20, 0, 1);
    ///     assert_eq!(ren.rbuf.row(0), &[0,0,0,0,0,0,0,0,1,1]);
    ///
    pub fn copy_hline(&mut self, x1: i64, x2: i64, y: i64, value: u8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if y < ymin || y > ymax || x2 <= xmin || x1 > xmax || x2 <= x1 {
            return;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax + 1);
        let row = self.rbuf.row_mut(y as usize);
        row[x1 as usize .. x2 as usize].iter_mut().for_each(|v| *v = value);
        self.mark(Rect::new(x1, y, x2 - 1, y));
    }
    /// Draw a line `thickness` pixels wide
    ///
    /// Composed of single pixel lines offset along the minor axis
    pub fn draw_thick_line(&mut self, p0: Point, p1: Point, thickness: u32, value: u8) {
        let t = max(thickness, 1) as i64;
        let ver = p1.y.abs_diff(p0.y) > p1.x.abs_diff(p0.x);
        for k in -(t/2) .. t - t/2 {
            let (dx, dy) = if ver { (k, 0) } else { (0, k) };
            let a = Point::new(p0.x.saturating_add(dx), p0.y.saturating_add(dy));
            let b = Point::new(p1.x.saturating_add(dx), p1.y.saturating_add(dy));
            self.draw_line(a, b, value);
        }
    }
    /// Write the surface to an image file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), std::io::Error> {
        ppm::write_file(&self.rbuf.data, self.rbuf.width, self.rbuf.height, filename)
    }
}

impl Surface for RenderingBase {
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn clear(&mut self, value: u8) {
        self.rbuf.fill(value);
        let (xmin,xmax,ymin,ymax) = self.limits();
        if xmax >= xmin && ymax >= ymin {
            self.mark(Rect::new(xmin, ymin, xmax, ymax));
        }
    }
    fn draw_hline(&mut self, x1: i64, x2: i64, y: i64, value: u8) {
        self.copy_hline(x1, x2, y, value);
    }
    fn draw_line(&mut self, p0: Point, p1: Point, value: u8) {
        for (x, y) in LineInterpolator::new(p0, p1) {
            self.copy_pixel(x, y, value);
        }
    }
    fn begin(&mut self) {
        if self.lock == 0 {
            // Writes outside of a frame are not part of it
            self.dirty = None;
        }
        self.lock += 1;
        log::trace!("BEGIN FRAME: depth {}", self.lock);
    }
    fn end(&mut self) {
        assert!(self.lock > 0, "end() without matching begin()");
        self.lock -= 1;
        if self.lock == 0 {
            self.presented = self.dirty.take();
            self.frames += 1;
            log::debug!("PRESENT FRAME {}: dirty {:?}", self.frames, self.presented);
        }
    }
}

/// Scoped drawing on a surface
///
/// Calls [begin] when created and [end] when dropped, including when
///   leaving early or unwinding
///
///     use scanfill::{frame,RenderingBase,Surface};
///
///     let mut ren = RenderingBase::new(8,8);
///     {
///         let mut f = frame(&mut ren);
///         f.draw_hline(0, 4, 2, 255);
///     }
///     assert_eq!(ren.frames(), 1);
///     assert!(! ren.is_locked());
///
/// [begin]: ../trait.Surface.html#tymethod.begin
/// [end]: ../trait.Surface.html#tymethod.end
pub struct Frame<'a, S: Surface> {
    ren: &'a mut S,
}

impl<'a, S: Surface> Frame<'a, S> {
    pub fn new(ren: &'a mut S) -> Self {
        ren.begin();
        Frame { ren }
    }
}

impl<'a, S: Surface> Deref for Frame<'a, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.ren
    }
}

impl<'a, S: Surface> DerefMut for Frame<'a, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.ren
    }
}

impl<'a, S: Surface> Drop for Frame<'a, S> {
    fn drop(&mut self) {
        self.ren.end();
    }
}

/// Begin a frame on `ren`, ended when the returned guard is dropped
pub fn frame<S: Surface>(ren: &mut S) -> Frame<'_, S> {
    Frame::new(ren)
}
