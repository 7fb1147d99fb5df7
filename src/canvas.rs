//! The drawing surface and the driver feeding it.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;

use crate::geometry::{Layout, Rect};

/// Helvetica ascent, as a fraction of the font size.
const CAPTION_ASCENT: f64 = 0.718;
/// Gap factor between the bars and the caption baseline.
const CAPTION_DROP: f64 = 1.07;

/// Something that can receive filled rectangles in symbol-local
/// coordinates (origin at the lower-left corner of the symbol, `y` up).
/// Fill is always black; there is no stroke.
///
/// Canvases with another coordinate convention are expected to be wrapped
/// rather than handled by the geometry.
pub trait Canvas {
    type Error;

    fn rect(&mut self, rect: Rect) -> Result<(), Self::Error>;

    /// Places the human-readable text. Typography is left to the canvas; the
    /// default ignores the caption.
    fn caption(&mut self, caption: &Caption) -> Result<(), Self::Error> {
        let _ = caption;
        Ok(())
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    type Error = C::Error;

    fn rect(&mut self, rect: Rect) -> Result<(), Self::Error> {
        (**self).rect(rect)
    }

    fn caption(&mut self, caption: &Caption) -> Result<(), Self::Error> {
        (**self).caption(caption)
    }
}

/// Records the rectangles in drawing order.
impl Canvas for Vec<Rect> {
    type Error = Infallible;

    fn rect(&mut self, rect: Rect) -> Result<(), Self::Error> {
        self.push(rect);
        Ok(())
    }
}

/// Human-readable text of a symbol and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    /// Horizontal centre of the text.
    pub x: f64,
    /// Baseline, below the bars (negative).
    pub baseline: f64,
    pub font_size: f64,
}

impl Caption {
    /// Centres `text` under the bar region `[left, right]`.
    pub fn below(text: String, left: f64, right: f64, font_size: f64) -> Self {
        Self {
            text,
            x: (left + right) / 2.0,
            baseline: -(CAPTION_DROP * CAPTION_ASCENT * font_size),
            font_size,
        }
    }
}

/// Emits `layout` then `caption` to `canvas`. This is the only place a
/// canvas is written to.
pub fn render<C>(layout: &Layout, caption: Option<&Caption>, canvas: &mut C) -> Result<(), C::Error>
where
    C: Canvas + ?Sized,
{
    for &rect in &layout.rects {
        canvas.rect(rect)?;
    }
    if let Some(caption) = caption {
        canvas.caption(caption)?;
    }

    tracing::trace!(rects = layout.rects.len(), captioned = caption.is_some(), "symbol drawn");
    Ok(())
}
