use core::iter;

/// A fixed-length run of bar slots packed into an integer. The most
/// significant of the `count` low bits is the leftmost slot; a set bit is a
/// bar (tall for POSTNET), a clear bit is a short bar or a space depending on
/// the symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(u16);

impl Pattern {
    pub const fn new(bits: u16, count: u8) -> Self {
        assert!(count > 0 && count <= 12, "count must be between 1 and 12");
        assert!(bits >> count == 0, "bits do not fit in count slots");

        Self((bits << 4) | count as u16)
    }

    /// Number of slots in the pattern.
    #[inline]
    pub const fn len(&self) -> usize {
        (self.0 & 0xF) as usize
    }

    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0 >> 4
    }

    /// Number of set slots (bars).
    #[inline]
    pub const fn ones(&self) -> u32 {
        self.bits().count_ones()
    }

    /// Expands the pattern into glyphs, `on` for set slots and `off` for
    /// clear ones.
    pub fn glyphs(self, on: char, off: char) -> impl Iterator<Item = char> {
        self.into_iter().map(move |bit| if bit { on } else { off })
    }
}

impl iter::IntoIterator for Pattern {
    type Item = bool;
    type IntoIter = Slots;

    fn into_iter(self) -> Self::IntoIter {
        Slots { value: self.bits(), count: self.len() as u8 }
    }
}

#[derive(Debug, Clone)]
pub struct Slots {
    value: u16,
    count: u8,
}

impl iter::Iterator for Slots {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            self.count -= 1;
            Some((self.value >> self.count) & 1 != 0)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::ExactSizeIterator for Slots {}
impl iter::FusedIterator for Slots {}
