//! POSTNET: 5, 9 or 11 digits plus a mod-10 check digit, drawn as tall and
//! short bars between two framing bars.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{
    barcode::{Barcode, Symbol, Symbology},
    geometry::Geometry,
    tables::{self, POSTNET_DIGIT_LEN, POSTNET_FRAME},
    Error, Options,
};

/// Framing bar character of an encoded sequence.
pub const FRAME: char = 'S';
/// Accepted digit counts.
pub const LENGTHS: [usize; 3] = [5, 9, 11];

const SYMBOLOGY: Symbology = Symbology::Postnet;

/// Keeps the digits of `value`, skipping ASCII whitespace and dashes.
pub fn validate(value: &str) -> Result<String, Error> {
    let mut cleaned = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '0'..='9' => cleaned.push(c),
            '-' => (),
            c if c.is_ascii_whitespace() => (),
            character => return Err(Error::InvalidCharacter { symbology: SYMBOLOGY, character }),
        }
    }

    if !LENGTHS.contains(&cleaned.len()) {
        return Err(Error::InvalidLength { symbology: SYMBOLOGY, length: cleaned.len() });
    }
    Ok(cleaned)
}

/// Digit that brings the sum of `digits` to a multiple of 10.
pub fn check_digit(digits: &str) -> u32 {
    let sum: u32 = digits.chars().filter_map(|c| c.to_digit(10)).sum();
    (10 - sum % 10) % 10
}

/// `S`, the digits, the check digit, `S`.
pub fn encode(cleaned: &str) -> String {
    let mut encoded = String::with_capacity(cleaned.len() + 3);
    encoded.push(FRAME);
    encoded.push_str(cleaned);
    encoded.push(char::from_digit(check_digit(cleaned), 10).unwrap_or('0'));
    encoded.push(FRAME);
    encoded
}

/// Expands each encoded character into `|` (tall) and `.` (short) bars.
pub fn decompose(encoded: &str) -> String {
    let mut decomposed = String::with_capacity(encoded.len() * POSTNET_DIGIT_LEN);
    for c in encoded.chars() {
        let pattern = if c == FRAME { POSTNET_FRAME } else { tables::postnet_digit(c) };
        decomposed.extend(pattern.glyphs('|', '.'));
    }
    decomposed
}

/// A POSTNET symbol.
///
/// ```
/// use usps::{Barcode, Postnet, Rect};
///
/// let zip = Postnet::new("78247-1043");
/// assert_eq!(zip.encoded().unwrap(), "S7824710434S");
///
/// let mut bars: Vec<Rect> = Vec::new();
/// zip.draw(&mut bars).unwrap();
/// assert_eq!(bars.len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Postnet {
    options: Options,
    symbol: Result<Symbol, Error>,
}

impl Postnet {
    /// Builds the symbol with the default options. Integers are accepted
    /// through their decimal form.
    pub fn new(value: impl fmt::Display) -> Self {
        Self::with_options(value, Options::POSTNET)
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

    /// Like [Postnet::with_options], failing on invalid input.
    pub fn try_new(value: impl fmt::Display, options: Options) -> Result<Self, Error> {
        let postnet = Self::with_options(value, options);
        if let Err(e) = &postnet.symbol {
            return Err(e.clone());
        }
        Ok(postnet)
    }
}

impl Barcode for Postnet {
    const SYMBOLOGY: Symbology = SYMBOLOGY;

    fn symbol(&self) -> Result<&Symbol, &Error> {
        self.symbol.as_ref()
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn geometry(&self) -> Geometry {
        Geometry::slotted(&self.options)
    }
}
