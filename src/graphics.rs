//! Rasterising symbols with `embedded-graphics`.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Dimensions, Point, Size},
    pixelcolor::PixelColor,
    primitives::Rectangle,
    Drawable,
};

use crate::{
    canvas::{self, Canvas},
    geometry::{Layout, Rect},
    Barcode, Error,
};

/// Rounds a non-negative length in pixels.
#[inline]
fn px(v: f64) -> i32 {
    (v + 0.5) as i32
}

/// A symbol laid out for a pixel grid. `scale` is pixels per point; the
/// caption is not rendered.
///
/// embedded-graphics puts the origin at the top-left corner with `y`
/// growing downward; the symbol's lower-left origin is flipped while
/// drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic<C> {
    layout: Layout,
    size: Size,
    scale: f64,
    color: C,
    top_left: Point,
}

impl<C: PixelColor> Graphic<C> {
    pub fn new<B: Barcode>(barcode: &B, scale: f64, color: C) -> Result<Self, Error> {
        let layout = barcode.layout()?;
        let (width, height) = (layout.size.width, layout.size.height);
        Ok(Self {
            layout,
            size: Size::new(px(width * scale) as u32, px(height * scale) as u32),
            scale,
            color,
            top_left: Point::zero(),
        })
    }

    /// Moves the symbol's top-left corner to `top_left`.
    pub fn at(mut self, top_left: Point) -> Self {
        self.top_left = top_left;
        self
    }
}

impl<C: PixelColor> Dimensions for Graphic<C> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(self.top_left, self.size)
    }
}

impl<C: PixelColor> Drawable for Graphic<C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        canvas::render(&self.layout, None, &mut Flipped { graphic: self, target })
    }
}

struct Flipped<'a, C, D> {
    graphic: &'a Graphic<C>,
    target: &'a mut D,
}

impl<C: PixelColor, D: DrawTarget<Color = C>> Canvas for Flipped<'_, C, D> {
    type Error = D::Error;

    fn rect(&mut self, rect: Rect) -> Result<(), Self::Error> {
        let g = self.graphic;
        let top = g.layout.size.height - rect.top();
        let area = Rectangle::new(
            g.top_left + Point::new(px(rect.x * g.scale), px(top * g.scale)),
            Size::new(px(rect.width * g.scale).max(1) as u32, px(rect.height * g.scale).max(1) as u32),
        );
        self.target.fill_solid(&area, g.color)
    }
}
