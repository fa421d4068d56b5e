//! Scanline polygon filling and line drawing on gray raster surfaces

// How does this work
//    ren = RenderingBase( RenderingBuffer( data ) )
//    pf  = PolyFill()
//  Collect Segments
//    add_segment, add_line, add_polygon
//      Segment::new()  -- sweep order, horizontal edges dropped
//  Fill
//   pf.fill(ren, value)
//     build_events()   -- 'BUILD EVENTS'
//       Enter at top, Exit at bottom of each Segment
//     Enter: push onto active edge list
//     Exit:  fill_rows(y .. exit_y, active) -- 'SWEEP'
//              crossings()  -- x_at_y() for every active edge
//              pair_spans() -- even-odd pairs
//                draw_hline (Surface)
//            remove from active edge list
//  Lines
//   ren.draw_line(p0, p1, value)
//     LineInterpolator -- integer Bresenham steps
//       copy_pixel
//  Frames
//   frame(ren) -- begin() ... end() on drop, 'PRESENT FRAME'

pub mod geom;
pub mod event;
pub mod scan;
pub mod fill;
pub mod line_interp;
pub mod buffer;
pub mod base;
pub mod ppm;
pub mod transform;
pub mod drawing;

pub use geom::*;
pub use event::*;
pub use scan::*;
pub use fill::*;
pub use line_interp::*;
pub use buffer::*;
pub use base::*;
pub use transform::*;
pub use drawing::*;

/// Raster surface drawn onto by the filler and line rasterizer
///
/// Drawing is bracketed by [begin](#tymethod.begin) and
///   [end](#tymethod.end); see [Frame](base/struct.Frame.html)
///   for a guard that always ends the frame
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Set every pixel to `value`
    fn clear(&mut self, value: u8);
    /// Set pixels `x1 .. x2` on row `y` to `value`, excluding `x2`
    fn draw_hline(&mut self, x1: i64, x2: i64, y: i64, value: u8);
    /// Set the pixels along the line from `p0` to `p1`, inclusive
    fn draw_line(&mut self, p0: Point, p1: Point, value: u8);
    /// Start a frame
    fn begin(&mut self);
    /// Finish a frame, presenting it when no other frame is open
    fn end(&mut self);
}
