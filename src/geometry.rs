//! Symbol size and bar placement.
//!
//! Coordinates are symbol-local with the origin at the lower-left corner of
//! the bounding box and `y` growing upward. Every primitive sits on a
//! uniform pitch; bars share the `y = 0` baseline.

use alloc::vec::Vec;

use crate::Options;

/// One element of a decomposed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Full height bar, `|`.
    Tall,
    /// POSTNET half bar, `.`.
    Short,
    /// Empty slot, ` `.
    Space,
}

impl Primitive {
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            '|' => Some(Self::Tall),
            '.' => Some(Self::Short),
            ' ' => Some(Self::Space),
            _ => None,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Tall => '|',
            Self::Short => '.',
            Self::Space => ' ',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A filled rectangle, `(x, y)` being its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

/// Resolved placement parameters for one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Distance between the left edges of consecutive primitives.
    pub pitch: f64,
    pub bar_width: f64,
    pub tall_bar_height: f64,
    pub short_bar_height: f64,
    pub lquiet: f64,
    pub rquiet: f64,
}

impl Geometry {
    /// Geometry where each slot is a bar followed by a space (POSTNET).
    pub fn slotted(options: &Options) -> Self {
        Self::with_pitch(options, options.bar_width + options.space_width)
    }

    /// Geometry where slots are spaced by the space width alone and only
    /// bars are drawn (FIM).
    pub fn spaced(options: &Options) -> Self {
        Self::with_pitch(options, options.space_width)
    }

    fn with_pitch(options: &Options, pitch: f64) -> Self {
        let (lquiet, rquiet) = options.quiet_zones();
        Self {
            pitch,
            bar_width: options.bar_width,
            tall_bar_height: options.tall_bar_height,
            short_bar_height: options.short_bar_height,
            lquiet,
            rquiet,
        }
    }

    /// Left edge of the primitive at `index`.
    #[inline]
    pub fn left(&self, index: usize) -> f64 {
        self.lquiet + index as f64 * self.pitch
    }

    /// Bounding box of `count` primitives, quiet zones included.
    pub fn size(&self, count: usize) -> Size {
        let bars = match count {
            0 => 0.0,
            n => (n - 1) as f64 * self.pitch + self.bar_width,
        };
        Size { width: self.lquiet + bars + self.rquiet, height: self.tall_bar_height }
    }

    /// Rectangle drawn for `primitive` at `index`, if any.
    pub fn rect(&self, index: usize, primitive: Primitive) -> Option<Rect> {
        let height = match primitive {
            Primitive::Tall => self.tall_bar_height,
            Primitive::Short => self.short_bar_height,
            Primitive::Space => return None,
        };
        Some(Rect::new(self.left(index), 0.0, self.bar_width, height))
    }

    /// Places a decomposed sequence.
    pub fn layout<I>(&self, primitives: I) -> Layout
    where
        I: IntoIterator<Item = Primitive>,
    {
        let mut count = 0;
        let rects = primitives
            .into_iter()
            .inspect(|_| count += 1)
            .enumerate()
            .filter_map(|(i, p)| self.rect(i, p))
            .collect();

        Layout { size: self.size(count), rects }
    }
}

/// Output of the geometry stage: the bounding box and the bars, left to
/// right.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub size: Size,
    pub rects: Vec<Rect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: Options = Options::POSTNET.bar_width(1.0).space_width(2.0).tall_bar_height(8.0).short_bar_height(3.0);

    #[test]
    fn test_slotted_layout() {
        let g = Geometry::slotted(&OPTS);
        let layout = g.layout([Primitive::Tall, Primitive::Short, Primitive::Tall]);

        assert_eq!(layout.size, Size { width: 3.0 * 1.0 + 2.0 * 2.0, height: 8.0 });
        assert_eq!(layout.rects, [
            Rect::new(0.0, 0.0, 1.0, 8.0),
            Rect::new(3.0, 0.0, 1.0, 3.0),
            Rect::new(6.0, 0.0, 1.0, 8.0),
        ]);
    }

    #[test]
    fn test_spaced_layout_skips_spaces() {
        let g = Geometry::spaced(&OPTS);
        let layout = g.layout([Primitive::Tall, Primitive::Space, Primitive::Tall]);

        assert_eq!(layout.size.width, 2.0 * 2.0 + 1.0);
        assert_eq!(layout.rects, [Rect::new(0.0, 0.0, 1.0, 8.0), Rect::new(4.0, 0.0, 1.0, 8.0)]);
    }

    #[test]
    fn test_quiet_zone_offsets() {
        let g = Geometry::spaced(&OPTS.quiet(true).lquiet(5.0).rquiet(7.0));
        let layout = g.layout([Primitive::Tall]);

        assert_eq!(layout.size.width, 5.0 + 1.0 + 7.0);
        assert_eq!(layout.rects[0].x, 5.0);
    }

    #[test]
    fn test_glyph_mapping() {
        for c in ['|', '.', ' '] {
            assert_eq!(Primitive::from_glyph(c).map(Primitive::glyph), Some(c));
        }
        assert_eq!(Primitive::from_glyph('S'), None);
    }
}
