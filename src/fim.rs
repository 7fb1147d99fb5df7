//! FIM (Facing Identification Mark): one letter, `A` to `D`, drawn as nine
//! bar or space slots.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{
    barcode::{Barcode, Symbol, Symbology},
    geometry::Geometry,
    tables, Error, Options,
};

const SYMBOLOGY: Symbology = Symbology::Fim;

/// Upper-cases the single letter in `value`, ignoring ASCII whitespace.
pub fn validate(value: &str) -> Result<String, Error> {
    let mut cleaned = String::with_capacity(1);
    for c in value.chars().filter(|c| !c.is_ascii_whitespace()) {
        let letter = c.to_ascii_uppercase();
        if tables::fim_letter(letter).is_none() {
            return Err(Error::InvalidCharacter { symbology: SYMBOLOGY, character: c });
        }
        cleaned.push(letter);
    }

    if cleaned.len() != 1 {
        return Err(Error::InvalidLength { symbology: SYMBOLOGY, length: cleaned.len() });
    }
    Ok(cleaned)
}

/// A FIM is its own encoding.
pub fn encode(cleaned: &str) -> String {
    cleaned.into()
}

/// Expands each letter into `|` (bar) and ` ` (space) slots.
pub fn decompose(encoded: &str) -> String {
    encoded
        .chars()
        .flat_map(|c| match tables::fim_letter(c) {
            Some(pattern) => pattern.glyphs('|', ' '),
            None => unreachable!("{c:?} is not a FIM letter"),
        })
        .collect()
}

/// A FIM symbol.
///
/// ```
/// use usps::{Barcode, Fim};
///
/// let fim = Fim::new("a");
/// assert_eq!(fim.decomposed().unwrap(), "||  |  ||");
/// assert!(!Fim::new("E").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fim {
    options: Options,
    symbol: Result<Symbol, Error>,
}

impl Fim {
    pub fn new(value: impl fmt::Display) -> Self {
        Self::with_options(value, Options::FIM)
    }

    pub fn with_options(value: impl fmt::Display, options: Options) -> Self {
        let value = value.to_string();
        let symbol = options.validate(SYMBOLOGY).and_then(|()| {
            let cleaned = validate(&value)?;
            let encoded = encode(&cleaned);
            let decomposed = decompose(&encoded);
            Ok(Symbol { cleaned, encoded, decomposed })
        });

        if let Err(e) = &symbol {
            tracing::debug!(symbology = %SYMBOLOGY, value = %value, error = %e, "rejected symbol");
        }
        Self { options, symbol }
    }

    /// Like [Fim::with_options], failing on invalid input.
    pub fn try_new(value: impl fmt::Display, options: Options) -> Result<Self, Error> {
        let fim = Self::with_options(value, options);
        if let Err(e) = &fim.symbol {
            return Err(e.clone());
        }
        Ok(fim)
    }
}

impl Barcode for Fim {
    const SYMBOLOGY: Symbology = SYMBOLOGY;

    fn symbol(&self) -> Result<&Symbol, &Error> {
        self.symbol.as_ref()
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn geometry(&self) -> Geometry {
        Geometry::spaced(&self.options)
    }
}
