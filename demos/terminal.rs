use usps::*;

const PAPER: &str = "\x1B[97m█";
const INK: &str = "\x1B[30m█";
const RESET: &str = "\x1B[0m";
/// Blank cells around the symbol.
const MARGIN: usize = 4;

/// Pixels per point.
const SCALE: f64 = 0.5;

/// Rasterises rectangles into rows of cells, top row first.
struct Cells {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Cells {
    fn new(size: Size) -> Self {
        let width = (size.width * SCALE).ceil() as usize;
        let height = (size.height * SCALE).ceil() as usize;
        Self { width, height, bits: vec![false; width * height] }
    }
}

impl Canvas for Cells {
    type Error = std::convert::Infallible;

    fn rect(&mut self, rect: Rect) -> Result<(), Self::Error> {
        let x0 = (rect.x * SCALE).round() as usize;
        let x1 = ((rect.right() * SCALE).round() as usize).max(x0 + 1).min(self.width);
        let rows = ((rect.height * SCALE).round() as usize).max(1).min(self.height);
        for row in self.height - rows..self.height {
            self.bits[row * self.width + x0..row * self.width + x1].fill(true);
        }
        Ok(())
    }

    fn caption(&mut self, caption: &Caption) -> Result<(), Self::Error> {
        let indent = MARGIN + ((caption.x * SCALE) as usize).saturating_sub(caption.text.len() / 2);
        println!("{}{}", " ".repeat(indent), caption.text);
        Ok(())
    }
}

impl std::fmt::Display for Cells {
    /// One line per row, framed by `MARGIN` blank cells on every side.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let blank_row = PAPER.repeat(self.width + MARGIN * 2);
        let margin = PAPER.repeat(MARGIN);
        for _ in 0..MARGIN / 2 {
            writeln!(f, "{blank_row}")?;
        }
        for row in self.bits.chunks(self.width) {
            let cells: String = row.iter().map(|&bar| if bar { INK } else { PAPER }).collect();
            writeln!(f, "{margin}{cells}{margin}")?;
        }
        for _ in 0..MARGIN / 2 {
            writeln!(f, "{blank_row}")?;
        }
        write!(f, "{RESET}")
    }
}

fn show(barcode: UspsBarcode) {
    let size = match barcode.size() {
        Ok(size) => size,
        Err(e) => return println!("{e}\n"),
    };

    let mut cells = Cells::new(size);
    // rows are printed after rasterising, so the caption follows them
    let layout = barcode.layout().unwrap();
    render(&layout, None, &mut cells).unwrap();
    print!("{cells}");
    if let Some(caption) = barcode.caption().unwrap() {
        cells.caption(&caption).unwrap();
    }
    println!();
}

fn main() {
    let postnet = Options::POSTNET
        .bar_width(2.0)
        .space_width(2.0)
        .tall_bar_height(12.0)
        .short_bar_height(6.0)
        .human_readable(true);
    show(UspsBarcode::with_options(Symbology::Postnet, "78247-1043", postnet));

    let fim = Options::FIM.bar_width(2.0).space_width(4.0).tall_bar_height(20.0).human_readable(true);
    for letter in ["A", "B", "C", "D", "E"] {
        show(UspsBarcode::with_options(Symbology::Fim, letter, fim));
    }
}
