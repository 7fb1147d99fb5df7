use crate::barcode::Symbology;

/// Reasons a symbol cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character outside the symbology's alphabet that is not an ignored
    /// separator.
    #[error("{symbology}: invalid character {character:?}")]
    InvalidCharacter { symbology: Symbology, character: char },

    /// Wrong number of accepted characters after cleaning.
    #[error("{symbology}: {}", length_message(.symbology, .length))]
    InvalidLength { symbology: Symbology, length: usize },

    /// A dimension option is out of range: a non-positive or non-finite
    /// length, a negative quiet zone, POSTNET short bars taller than tall
    /// bars, or FIM bars wider than the space pitch (adjacent bars would
    /// overlap).
    #[error("{symbology}: invalid configuration: {reason}")]
    InvalidConfiguration { symbology: Symbology, reason: &'static str },
}

impl Error {
    pub const fn symbology(&self) -> Symbology {
        match self {
            Self::InvalidCharacter { symbology, .. }
            | Self::InvalidLength { symbology, .. }
            | Self::InvalidConfiguration { symbology, .. } => *symbology,
        }
    }
}

fn length_message(symbology: &Symbology, length: &usize) -> &'static str {
    match (symbology, length) {
        (Symbology::Fim, _) => "input must be exactly one character",
        (Symbology::Postnet, 0) => "input contains no digits",
        (Symbology::Postnet, _) => "input must have 5, 9 or 11 digits",
    }
}

/// Failure of [`Barcode::draw`](crate::Barcode::draw).
#[derive(Debug, thiserror::Error)]
pub enum DrawError<E> {
    /// The symbol is invalid; the canvas was not touched.
    #[error(transparent)]
    Symbol(#[from] Error),
    /// The canvas refused a rectangle or caption.
    #[error("canvas error: {0:?}")]
    Canvas(E),
}
