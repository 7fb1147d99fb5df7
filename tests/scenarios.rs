use usps::*;

fn bars<B: Barcode>(barcode: &B) -> Vec<Rect> {
    let mut rects: Vec<Rect> = Vec::new();
    barcode.draw(&mut rects).unwrap();
    rects
}

#[test]
fn test_zip_plus_four() {
    let b = Postnet::new("78247-1043");
    assert!(b.is_valid());
    assert_eq!(b.cleaned().unwrap(), "782471043");
    assert_eq!(b.encoded().unwrap(), "S7824710434S");
    assert_eq!(b.decomposed().unwrap().len(), 52);
}

#[test]
fn test_zip_five() {
    let b = Postnet::new("12345");
    assert_eq!(b.encoded().unwrap(), "S123455S");
    assert_eq!(b.decomposed().unwrap().len(), 32);
}

#[test]
fn test_zero_sum_check_digit() {
    let b = Postnet::new("00000");
    assert_eq!(b.encoded().unwrap(), "S000000S");

    let decomposed = b.decomposed().unwrap();
    let digits = &decomposed[1..decomposed.len() - 1];
    for chunk in digits.as_bytes().chunks(5) {
        assert_eq!(chunk, b"||...");
    }
}

#[test]
fn test_eleven_digits() {
    let b = Postnet::new("12345 6789 01");
    assert_eq!(b.cleaned().unwrap(), "12345678901");
    assert_eq!(b.decomposed().unwrap().len(), 5 * 12 + 2);
}

#[test]
fn test_four_digits_not_drawn() {
    let b = Postnet::new("1234");
    assert!(!b.is_valid());
    assert_eq!(b.error(), Some(&Error::InvalidLength { symbology: Symbology::Postnet, length: 4 }));
    assert!(b.width().is_err());

    let mut rects: Vec<Rect> = Vec::new();
    assert!(matches!(b.draw(&mut rects), Err(DrawError::Symbol(_))));
    assert!(rects.is_empty());
}

#[test]
fn test_boundary_inputs() {
    assert!(!Postnet::new("").is_valid());
    assert!(!Fim::new("").is_valid());
    assert!(!Postnet::new("  - -  ").is_valid());
    assert!(!Postnet::new("1234x").is_valid());
    assert!(!Fim::new("AB").is_valid());
    assert!(!Fim::new("E").is_valid());
}

#[test]
fn test_fim_a() {
    let b = Fim::new("a");
    assert_eq!(b.cleaned().unwrap(), "A");
    assert_eq!(b.decomposed().unwrap(), "||  |  ||");

    let options = Options::FIM;
    let rects = bars(&b);
    assert_eq!(rects.len(), 5);
    for (rect, slot) in rects.iter().zip([0.0, 1.0, 4.0, 7.0, 8.0]) {
        assert_eq!(*rect, Rect::new(slot * options.space_width, 0.0, options.bar_width, options.tall_bar_height));
    }
}

#[test]
fn test_fim_a_quiet() {
    let options = Options::FIM.quiet(true);
    let b = Fim::with_options("A", options);
    let rects = bars(&b);
    assert_eq!(rects[0].x, options.quiet_zones().0);
    assert_eq!(b.width().unwrap(), 8.0 * options.space_width + options.bar_width + INCH * 15.0 / 32.0 + INCH / 4.0);
}

#[test]
fn test_fim_bar_counts() {
    for (letter, count) in [("A", 5), ("B", 6), ("C", 6), ("D", 7)] {
        assert_eq!(bars(&Fim::new(letter)).len(), count, "FIM {letter}");
    }
}

#[test]
fn test_custom_dimensions() {
    let options = Options::POSTNET.bar_width(1.0).space_width(1.5).tall_bar_height(9.0).short_bar_height(4.0);
    let b = Postnet::with_options("12345", options);
    assert_eq!(b.size().unwrap(), Size { width: 32.0 + 31.0 * 1.5, height: 9.0 });

    let rects = bars(&b);
    assert_eq!(rects[2], Rect::new(5.0, 0.0, 1.0, 4.0));
    assert_eq!(rects.last().unwrap().x, 31.0 * 2.5);
}

#[test]
fn test_postnet_quiet_zone() {
    let options = Options::POSTNET.quiet(true);
    let plain = Postnet::new("12345");
    let quiet = Postnet::with_options("12345", options);

    assert!((quiet.width().unwrap() - plain.width().unwrap() - 36.0).abs() < 1e-9);
    assert_eq!(bars(&quiet)[0].x, 18.0);
}

#[test]
fn test_caption_below_bars() {
    let b = Fim::with_options("d", Options::FIM.human_readable(true).quiet(true));
    let caption = b.caption().unwrap().unwrap();
    let (left, right) = Options::FIM.quiet(true).quiet_zones();

    assert_eq!(caption.text, "D");
    assert!(caption.baseline < 0.0);
    assert!((caption.x - (left + (b.width().unwrap() - left - right) / 2.0)).abs() < 1e-9);
}

#[test]
fn test_invalid_configuration() {
    let b = Postnet::with_options("12345", Options::POSTNET.short_bar_height(1.0).tall_bar_height(0.5));
    assert!(matches!(b.error(), Some(Error::InvalidConfiguration { symbology: Symbology::Postnet, .. })));
}

#[test]
fn test_registry_by_name() {
    for (name, value, rects) in [("POSTNET", "12345", 32), ("fim", "b", 6)] {
        let symbology: Symbology = name.parse().unwrap();
        let b = UspsBarcode::new(symbology, value);
        let mut out: Vec<Rect> = Vec::new();
        b.draw(&mut out).unwrap();
        assert_eq!(out.len(), rects, "{name}");
    }
    assert!("EAN13".parse::<Symbology>().is_err());
}
