//! Bar patterns of the POSTNET and FIM symbologies.

use crate::pattern::Pattern;

/// Bars per POSTNET digit.
pub const POSTNET_DIGIT_LEN: usize = 5;
/// Slots per FIM letter.
pub const FIM_LEN: usize = 9;

/// POSTNET 2-of-5 digit patterns indexed by digit value (weights 7, 4, 2, 1,
/// 0; `0` is the 7 + 4 pattern). A set slot is a tall bar.
pub const POSTNET_DIGITS: [Pattern; 10] = [
    Pattern::new(0b11000, 5), // 0
    Pattern::new(0b00011, 5), // 1
    Pattern::new(0b00101, 5), // 2
    Pattern::new(0b00110, 5), // 3
    Pattern::new(0b01001, 5), // 4
    Pattern::new(0b01010, 5), // 5
    Pattern::new(0b01100, 5), // 6
    Pattern::new(0b10001, 5), // 7
    Pattern::new(0b10010, 5), // 8
    Pattern::new(0b10100, 5), // 9
];

/// Framing bar written at both ends of a POSTNET symbol.
pub const POSTNET_FRAME: Pattern = Pattern::new(0b1, 1);

/// FIM letter patterns, `A` to `D`. A set slot is a bar, a clear one a space.
pub const FIM_LETTERS: [(char, Pattern); 4] = [
    ('A', Pattern::new(0b110010011, 9)),
    ('B', Pattern::new(0b101101101, 9)),
    ('C', Pattern::new(0b110101011, 9)),
    ('D', Pattern::new(0b111010111, 9)),
];

const fn check_postnet() -> bool {
    let mut i = 0;
    while i < POSTNET_DIGITS.len() {
        let p = POSTNET_DIGITS[i];
        if p.len() != POSTNET_DIGIT_LEN || p.ones() != 2 {
            return false;
        }
        let mut j = 0;
        while j < i {
            if POSTNET_DIGITS[j].bits() == p.bits() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn check_fim() -> bool {
    let mut i = 0;
    while i < FIM_LETTERS.len() {
        let p = FIM_LETTERS[i].1;
        // every FIM begins and ends with a bar
        if p.len() != FIM_LEN || p.bits() & 1 == 0 || p.bits() >> (FIM_LEN - 1) == 0 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(check_postnet(), "malformed POSTNET table");
const _: () = assert!(check_fim(), "malformed FIM table");

/// Pattern of a POSTNET digit. Panics on a non-digit: callers only pass
/// validated input.
pub fn postnet_digit(c: char) -> Pattern {
    match c.to_digit(10) {
        Some(d) => POSTNET_DIGITS[d as usize],
        None => unreachable!("{c:?} is not a POSTNET digit"),
    }
}

/// Pattern of a FIM letter, if it is one.
pub fn fim_letter(c: char) -> Option<Pattern> {
    FIM_LETTERS.iter().find(|(l, _)| *l == c).map(|&(_, p)| p)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn glyphs(p: Pattern, off: char) -> String {
        p.glyphs('|', off).collect()
    }

    #[test]
    fn test_postnet_table() {
        let expected = ["||...", "...||", "..|.|", "..||.", ".|..|", ".|.|.", ".||..", "|...|", "|..|.", "|.|.."];
        for (d, pat) in expected.iter().enumerate() {
            assert_eq!(&glyphs(POSTNET_DIGITS[d], '.'), pat, "digit {d}");
        }
    }

    #[test]
    fn test_postnet_weights() {
        // each pattern's bar weights add up to the digit (7 + 4 reads as 0)
        const WEIGHTS: [u32; 5] = [7, 4, 2, 1, 0];
        for (d, pat) in POSTNET_DIGITS.iter().enumerate() {
            let sum: u32 = pat.into_iter().zip(WEIGHTS).filter(|(b, _)| *b).map(|(_, w)| w).sum();
            assert_eq!(sum % 11, d as u32);
        }
    }

    #[test]
    fn test_fim_table() {
        assert_eq!(glyphs(fim_letter('A').unwrap(), ' '), "||  |  ||");
        assert_eq!(glyphs(fim_letter('B').unwrap(), ' '), "| || || |");
        assert_eq!(glyphs(fim_letter('C').unwrap(), ' '), "|| | | ||");
        assert_eq!(glyphs(fim_letter('D').unwrap(), ' '), "||| | |||");
        assert_eq!(fim_letter('E'), None);
    }

    #[test]
    fn test_frame() {
        assert_eq!(glyphs(POSTNET_FRAME, '.'), "|");
    }
}
