//! Transformations

use crate::geom::Bound;

use std::ops::Mul;

/// Affine Transformation
///
/// ```text
/// x' = x * sx  + y * shx + tx
/// y' = x * shy + y * sy  + ty
/// ```
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        Self { tx, ty, ..Self::new() }
    }
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Self { sx, sy, ..Self::new() }
    }
    /// Rotation by `angle` radians, clockwise on screen where y points down
    pub fn new_rotate(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sx: cos, shx: -sin, shy: sin, sy: cos, tx: 0.0, ty: 0.0 }
    }
    /// Map the point (`x`,`y`)
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Transform applying `self` first and then `next`
    pub fn then(&self, next: &Transform) -> Self {
        let (tx, ty) = next.transform(self.tx, self.ty);
        Self {
            sx:  next.sx  * self.sx  + next.shx * self.shy,
            shx: next.sx  * self.shx + next.shx * self.sy,
            shy: next.shy * self.sx  + next.sy  * self.shy,
            sy:  next.shy * self.shx + next.sy  * self.sy,
            tx, ty,
        }
    }
    /// Transform centering `bound` within a `width` by `height` view
    ///
    /// The bound is scaled uniformly to fit inside the view, leaving
    ///   `margin` pixels on the tighter side
    ///
    ///     use scanfill::{Bound,Transform};
    ///
    ///     let mut b = Bound::empty();
    ///     b.add(0.0, 0.0);
    ///     b.add(10.0, 5.0);
    ///     let t = Transform::fit_view(&b, 120, 100, 10);
    ///     assert_eq!(t.transform(0.0, 0.0), (10.0, 25.0));
    ///     assert_eq!(t.transform(10.0, 5.0), (110.0, 75.0));
    ///
    pub fn fit_view(bound: &Bound, width: usize, height: usize, margin: usize) -> Transform {
        let (w, h) = (width as f64, height as f64);
        let m = margin as f64;
        let xscale = (w - m * 2.0) / bound.width();
        let yscale = (h - m * 2.0) / bound.height();
        let scale = match (xscale.is_finite(), yscale.is_finite()) {
            (true, true) => xscale.min(yscale),
            (true, false) => xscale,
            (false, true) => yscale,
            (false, false) => 1.0,
        };
        let (mx, my) = bound.midpoint();
        Transform::new_translate(-mx, -my)
            * Transform::new_scale(scale, scale)
            * Transform::new_translate(w / 2.0, h / 2.0)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.then(&rhs)
    }
}
