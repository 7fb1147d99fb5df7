//! What every USPS symbol shares: a cleaned value, its encoded and
//! decomposed forms, and the drawing contract built on top of them.

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{
    canvas::{self, Canvas, Caption},
    geometry::{Geometry, Layout, Primitive, Size},
    DrawError, Error, Fim, Options, Postnet,
};

/// The supported symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    Postnet,
    Fim,
}

impl Symbology {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Postnet => "POSTNET",
            Self::Fim => "FIM",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown symbology name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symbology {0:?}")]
pub struct UnknownSymbology(pub String);

impl FromStr for Symbology {
    type Err = UnknownSymbology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("POSTNET") {
            Ok(Self::Postnet)
        } else if s.eq_ignore_ascii_case("FIM") {
            Ok(Self::Fim)
        } else {
            Err(UnknownSymbology(s.into()))
        }
    }
}

/// The successive forms of a validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Accepted characters only.
    pub cleaned: String,
    /// Cleaned value with framing and check characters.
    pub encoded: String,
    /// One glyph per primitive (`|`, `.`, ` `).
    pub decomposed: String,
}

impl Symbol {
    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        // decomposers only emit primitive glyphs
        self.decomposed.chars().filter_map(Primitive::from_glyph)
    }
}

/// Drawing contract shared by the symbologies.
///
/// Implementors provide the validated [Symbol] (or the reason there is
/// none), their options and their placement geometry; everything else is
/// derived.
pub trait Barcode {
    const SYMBOLOGY: Symbology;

    /// The validated symbol or the error that prevents drawing.
    fn symbol(&self) -> Result<&Symbol, &Error>;

    fn options(&self) -> &Options;

    fn geometry(&self) -> Geometry;

    /// Whether the value was accepted.
    fn is_valid(&self) -> bool {
        self.symbol().is_ok()
    }

    fn error(&self) -> Option<&Error> {
        self.symbol().err()
    }

    /// Cleaned input, the caption text.
    fn cleaned(&self) -> Result<&str, Error> {
        self.symbol().map(|s| s.cleaned.as_str()).map_err(Clone::clone)
    }

    fn encoded(&self) -> Result<&str, Error> {
        self.symbol().map(|s| s.encoded.as_str()).map_err(Clone::clone)
    }

    fn decomposed(&self) -> Result<&str, Error> {
        self.symbol().map(|s| s.decomposed.as_str()).map_err(Clone::clone)
    }

    fn size(&self) -> Result<Size, Error> {
        let symbol = self.symbol().map_err(Clone::clone)?;
        Ok(self.geometry().size(symbol.decomposed.chars().count()))
    }

    fn width(&self) -> Result<f64, Error> {
        self.size().map(|s| s.width)
    }

    fn height(&self) -> Result<f64, Error> {
        self.size().map(|s| s.height)
    }

    fn layout(&self) -> Result<Layout, Error> {
        let symbol = self.symbol().map_err(Clone::clone)?;
        Ok(self.geometry().layout(symbol.primitives()))
    }

    /// The human-readable caption, when enabled.
    fn caption(&self) -> Result<Option<Caption>, Error> {
        let symbol = self.symbol().map_err(Clone::clone)?;
        let options = self.options();
        if !options.human_readable {
            return Ok(None);
        }

        let geometry = self.geometry();
        let size = self.size()?;
        let (left, right) = (geometry.lquiet, size.width - geometry.rquiet);
        Ok(Some(Caption::below(symbol.cleaned.clone(), left, right, options.font_size)))
    }

    /// Draws the symbol. An invalid symbol is reported without touching
    /// `canvas`.
    fn draw<C>(&self, canvas: &mut C) -> Result<(), DrawError<C::Error>>
    where
        C: Canvas + ?Sized,
    {
        let layout = self.layout()?;
        let caption = self.caption()?;
        canvas::render(&layout, caption.as_ref(), canvas).map_err(DrawError::Canvas)
    }
}

/// Either symbology behind one type, selected at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum UspsBarcode {
    Postnet(Postnet),
    Fim(Fim),
}

impl UspsBarcode {
    pub fn new(symbology: Symbology, value: impl fmt::Display) -> Self {
        Self::with_options(symbology, value, Options::for_symbology(symbology))
    }

    pub fn with_options(symbology: Symbology, value: impl fmt::Display, options: Options) -> Self {
        match symbology {
            Symbology::Postnet => Self::Postnet(Postnet::with_options(value, options)),
            Symbology::Fim => Self::Fim(Fim::with_options(value, options)),
        }
    }

    pub const fn symbology(&self) -> Symbology {
        match self {
            Self::Postnet(_) => Postnet::SYMBOLOGY,
            Self::Fim(_) => Fim::SYMBOLOGY,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Postnet(b) => b.is_valid(),
            Self::Fim(b) => b.is_valid(),
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Postnet(b) => b.error(),
            Self::Fim(b) => b.error(),
        }
    }

    pub fn cleaned(&self) -> Result<&str, Error> {
        match self {
            Self::Postnet(b) => b.cleaned(),
            Self::Fim(b) => b.cleaned(),
        }
    }

    pub fn size(&self) -> Result<Size, Error> {
        match self {
            Self::Postnet(b) => b.size(),
            Self::Fim(b) => b.size(),
        }
    }

    pub fn width(&self) -> Result<f64, Error> {
        self.size().map(|s| s.width)
    }

    pub fn height(&self) -> Result<f64, Error> {
        self.size().map(|s| s.height)
    }

    pub fn layout(&self) -> Result<Layout, Error> {
        match self {
            Self::Postnet(b) => b.layout(),
            Self::Fim(b) => b.layout(),
        }
    }

    pub fn caption(&self) -> Result<Option<Caption>, Error> {
        match self {
            Self::Postnet(b) => b.caption(),
            Self::Fim(b) => b.caption(),
        }
    }

    pub fn draw<C>(&self, canvas: &mut C) -> Result<(), DrawError<C::Error>>
    where
        C: Canvas + ?Sized,
    {
        match self {
            Self::Postnet(b) => b.draw(canvas),
            Self::Fim(b) => b.draw(canvas),
        }
    }
}

impl From<Postnet> for UspsBarcode {
    fn from(b: Postnet) -> Self {
        Self::Postnet(b)
    }
}

impl From<Fim> for UspsBarcode {
    fn from(b: Fim) -> Self {
        Self::Fim(b)
    }
}
