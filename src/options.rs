//! Symbol configuration.

use crate::{barcode::Symbology, Error, INCH};

/// Lower bound of an implicit quiet zone.
const MIN_QUIET: f64 = INCH * 0.25;

/// Dimensions and switches of a symbol, in points. Values are fixed once the
/// symbol is built; use the builder setters on one of the defaults
/// ([Options::POSTNET], [Options::FIM]) to derive a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Options {
    pub bar_width: f64,
    pub space_width: f64,
    #[cfg_attr(feature = "serde", serde(rename = "barHeight"))]
    pub tall_bar_height: f64,
    #[cfg_attr(feature = "serde", serde(rename = "shortHeight"))]
    pub short_bar_height: f64,
    pub quiet: bool,
    /// Left quiet zone. `None` derives it from the bar width.
    pub lquiet: Option<f64>,
    /// Right quiet zone. `None` derives it from the bar width.
    pub rquiet: Option<f64>,
    pub human_readable: bool,
    pub font_size: f64,
}

impl Options {
    /// POSTNET defaults: 0.018 in bars on a 0.0455 in pitch, 0.125 in tall
    /// and 0.050 in short bars, no quiet zone.
    pub const POSTNET: Self = Self {
        bar_width: INCH * 0.018,
        space_width: INCH * 0.0275,
        tall_bar_height: INCH * 0.125,
        short_bar_height: INCH * 0.050,
        quiet: false,
        lquiet: None,
        rquiet: None,
        human_readable: false,
        font_size: 10.0,
    };

    /// FIM defaults: 1/32 in bars on a 1/16 in pitch, 5/8 in tall. The quiet
    /// zones (15/32 in left, 1/4 in right) apply once `quiet` is turned on.
    pub const FIM: Self = Self {
        bar_width: INCH / 32.0,
        space_width: INCH / 16.0,
        tall_bar_height: INCH * 5.0 / 8.0,
        short_bar_height: INCH * 5.0 / 8.0,
        quiet: false,
        lquiet: Some(INCH * 15.0 / 32.0),
        rquiet: Some(INCH / 4.0),
        human_readable: false,
        font_size: 10.0,
    };

    /// Returns the defaults of `symbology`.
    pub const fn for_symbology(symbology: Symbology) -> Self {
        match symbology {
            Symbology::Postnet => Self::POSTNET,
            Symbology::Fim => Self::FIM,
        }
    }

    pub const fn bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    pub const fn space_width(mut self, width: f64) -> Self {
        self.space_width = width;
        self
    }

    /// Height of full bars (`barHeight`).
    pub const fn tall_bar_height(mut self, height: f64) -> Self {
        self.tall_bar_height = height;
        self
    }

    /// Height of POSTNET half bars (`shortHeight`). Ignored by FIM.
    pub const fn short_bar_height(mut self, height: f64) -> Self {
        self.short_bar_height = height;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub const fn lquiet(mut self, width: f64) -> Self {
        self.lquiet = Some(width);
        self
    }

    pub const fn rquiet(mut self, width: f64) -> Self {
        self.rquiet = Some(width);
        self
    }

    /// Emit the caption below the bars.
    pub const fn human_readable(mut self, on: bool) -> Self {
        self.human_readable = on;
        self
    }

    pub const fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Effective `(left, right)` quiet zones; zero unless `quiet` is set.
    pub fn quiet_zones(&self) -> (f64, f64) {
        if !self.quiet {
            return (0.0, 0.0);
        }
        let implicit = MIN_QUIET.max(self.bar_width * 10.0);
        (self.lquiet.unwrap_or(implicit), self.rquiet.unwrap_or(implicit))
    }

    /// Replaces the fields set in `overrides`.
    pub fn with_overrides(self, o: &Overrides) -> Self {
        Self {
            bar_width: o.bar_width.unwrap_or(self.bar_width),
            space_width: o.space_width.unwrap_or(self.space_width),
            tall_bar_height: o.tall_bar_height.unwrap_or(self.tall_bar_height),
            short_bar_height: o.short_bar_height.unwrap_or(self.short_bar_height),
            quiet: o.quiet.unwrap_or(self.quiet),
            lquiet: o.lquiet.or(self.lquiet),
            rquiet: o.rquiet.or(self.rquiet),
            human_readable: o.human_readable.unwrap_or(self.human_readable),
            font_size: o.font_size.unwrap_or(self.font_size),
        }
    }

    /// Checks the dimensions for `symbology`.
    pub fn validate(&self, symbology: Symbology) -> Result<(), Error> {
        let fail = |reason| Err(Error::InvalidConfiguration { symbology, reason });

        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.bar_width) {
            return fail("bar width must be positive");
        }
        if !positive(self.space_width) {
            return fail("space width must be positive");
        }
        if !positive(self.tall_bar_height) {
            return fail("bar height must be positive");
        }
        match symbology {
            Symbology::Postnet => {
                if !positive(self.short_bar_height) {
                    return fail("short bar height must be positive");
                }
                if self.short_bar_height > self.tall_bar_height {
                    return fail("short bar height exceeds bar height");
                }
            }
            // bars sit on the space pitch
            Symbology::Fim => {
                if self.bar_width > self.space_width {
                    return fail("bar width exceeds space width");
                }
            }
        }
        if !positive(self.font_size) {
            return fail("font size must be positive");
        }
        let (left, right) = self.quiet_zones();
        if !(left.is_finite() && left >= 0.0 && right.is_finite() && right >= 0.0) {
            return fail("quiet zones must not be negative");
        }

        Ok(())
    }
}

/// A partial [Options], as read from a configuration file. Unset fields keep
/// the value of the options they are applied to
/// ([Options::with_overrides]).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Overrides {
    pub bar_width: Option<f64>,
    pub space_width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "barHeight"))]
    pub tall_bar_height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "shortHeight"))]
    pub short_bar_height: Option<f64>,
    pub quiet: Option<bool>,
    pub lquiet: Option<f64>,
    pub rquiet: Option<f64>,
    pub human_readable: Option<bool>,
    pub font_size: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Options::POSTNET.validate(Symbology::Postnet), Ok(()));
        assert_eq!(Options::FIM.validate(Symbology::Fim), Ok(()));
    }

    #[test]
    fn test_quiet_zones() {
        assert_eq!(Options::FIM.quiet_zones(), (0.0, 0.0));
        assert_eq!(Options::FIM.quiet(true).quiet_zones(), (INCH * 15.0 / 32.0, INCH / 4.0));

        // 10 bar widths is below a quarter inch for POSTNET
        assert_eq!(Options::POSTNET.quiet(true).quiet_zones(), (18.0, 18.0));
        let wide = Options::POSTNET.quiet(true).bar_width(3.0);
        assert_eq!(wide.quiet_zones(), (30.0, 30.0));
        assert_eq!(wide.lquiet(5.0).quiet_zones(), (5.0, 30.0));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let short_over_tall = Options::POSTNET.short_bar_height(20.0);
        assert_eq!(
            short_over_tall.validate(Symbology::Postnet),
            Err(Error::InvalidConfiguration {
                symbology: Symbology::Postnet,
                reason: "short bar height exceeds bar height",
            })
        );
        assert!(Options::FIM.bar_width(0.0).validate(Symbology::Fim).is_err());
        assert!(Options::FIM.space_width(-1.0).validate(Symbology::Fim).is_err());
        assert_eq!(
            Options::FIM.bar_width(5.0).validate(Symbology::Fim),
            Err(Error::InvalidConfiguration { symbology: Symbology::Fim, reason: "bar width exceeds space width" })
        );
        assert!(Options::POSTNET.bar_width(5.0).validate(Symbology::Postnet).is_ok());
        assert!(Options::FIM.tall_bar_height(f64::NAN).validate(Symbology::Fim).is_err());
        assert!(Options::FIM.quiet(true).rquiet(-2.0).validate(Symbology::Fim).is_err());
        // FIM has no short bars
        assert!(Options::FIM.tall_bar_height(20.0).validate(Symbology::Fim).is_ok());
        // negative quiet zone does not matter while quiet is off
        assert!(Options::FIM.rquiet(-2.0).validate(Symbology::Fim).is_ok());
    }

    #[test]
    fn test_overrides_keep_defaults() {
        let overrides = Overrides { bar_width: Some(2.0), quiet: Some(true), ..Overrides::default() };
        let fim = Options::FIM.with_overrides(&overrides);
        assert_eq!(fim, Options::FIM.bar_width(2.0).quiet(true));
        assert_eq!(fim.quiet_zones(), (INCH * 15.0 / 32.0, INCH / 4.0));

        assert_eq!(Options::POSTNET.with_overrides(&Overrides::default()), Options::POSTNET);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config() {
        let overrides: Overrides = serde_json::from_str(r#"{"barWidth": 2.0, "shortHeight": 3.0}"#).unwrap();
        assert_eq!(overrides, Overrides { bar_width: Some(2.0), short_bar_height: Some(3.0), ..Overrides::default() });

        let postnet = Options::for_symbology(Symbology::Postnet).with_overrides(&overrides);
        assert_eq!(postnet, Options::POSTNET.bar_width(2.0).short_bar_height(3.0));

        let empty: Overrides = serde_json::from_str("{}").unwrap();
        assert_eq!(Options::FIM.with_overrides(&empty), Options::FIM);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_classic_option_names() {
        let json = r#"{
            "barWidth": 1.5, "spaceWidth": 2.0, "barHeight": 9.0, "shortHeight": 4.0,
            "quiet": true, "lquiet": 3.0, "rquiet": null, "humanReadable": false, "fontSize": 8.0
        }"#;
        let options: Options = serde_json::from_str(json).unwrap();
        assert_eq!(options, Options::POSTNET.bar_width(1.5).space_width(2.0).tall_bar_height(9.0)
            .short_bar_height(4.0).quiet(true).lquiet(3.0).font_size(8.0));
    }
}
