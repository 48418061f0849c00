//! The length attribute type, and the context needed to resolve it to user units
use svgdom_parse::{error::Error, Parse, Parser};
use svgdom_serialize::{error::PrinterError, Printer, ToValue};

macro_rules! define_units {
    ($($unit:ident: $code:literal => $suffix:literal,)+) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        /// The unit of a length, numbered by its SVG DOM unit type.
        ///
        /// [MDN | SVGLength](https://developer.mozilla.org/en-US/docs/Web/API/SVGLength#constants)
        pub enum LengthUnit {
            #[default]
            $(
                #[doc=concat!("`SVG_LENGTHTYPE_", stringify!($unit), "` suffixed by `", $suffix, "`")]
                $unit,
            )+
        }

        impl LengthUnit {
            /// Returns the unit for an SVG DOM unit type, where `0` (unknown) has no unit
            pub fn from_type_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$unit),)+
                    _ => None,
                }
            }

            /// Returns the SVG DOM unit type of the unit
            pub fn type_code(self) -> u16 {
                match self {
                    $(Self::$unit => $code,)+
                }
            }

            /// Returns the text following the number of a length in this unit
            pub fn suffix(self) -> &'static str {
                match self {
                    $(Self::$unit => $suffix,)+
                }
            }
        }
    };
}

define_units! {
    Number: 1 => "",
    Percentage: 2 => "%",
    Ems: 3 => "em",
    Exs: 4 => "ex",
    Px: 5 => "px",
    Cm: 6 => "cm",
    Mm: 7 => "mm",
    In: 8 => "in",
    Pt: 9 => "pt",
    Pc: 10 => "pc",
}

impl LengthUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        [
            Self::Ems,
            Self::Exs,
            Self::Px,
            Self::Cm,
            Self::Mm,
            Self::In,
            Self::Pt,
            Self::Pc,
        ]
        .into_iter()
        .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
/// The axis a length is measured along, which decides what percentages resolve against.
pub enum LengthDirection {
    /// Resolved against the viewport width, e.g. `x`, `width`, `cx`
    Horizontal,
    /// Resolved against the viewport height, e.g. `y`, `height`, `cy`
    Vertical,
    /// Resolved against the normalised viewport diagonal, e.g. `r`
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// The size of the viewport percentages are resolved against
pub struct Viewport {
    /// The viewport width in user units
    pub width: f32,
    /// The viewport height in user units
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// Values used to convert relative lengths to user units
pub struct LengthContext {
    /// The font size in user units; `em` resolves to this and `ex` to half of it
    pub font_size: f32,
    /// The viewport used for percentages, which can't be resolved without one
    pub viewport: Option<Viewport>,
}

impl Default for LengthContext {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            viewport: None,
        }
    }
}

impl LengthContext {
    /// Returns how many user units make up one of `unit` along `direction`
    pub fn user_units_per(&self, unit: LengthUnit, direction: LengthDirection) -> Option<f32> {
        Some(match unit {
            LengthUnit::Number | LengthUnit::Px => 1.0,
            LengthUnit::Cm => 96.0 / 2.54,
            LengthUnit::Mm => 96.0 / 25.4,
            LengthUnit::In => 96.0,
            LengthUnit::Pt => 4.0 / 3.0,
            LengthUnit::Pc => 16.0,
            LengthUnit::Ems => self.font_size,
            LengthUnit::Exs => self.font_size / 2.0,
            LengthUnit::Percentage => {
                let Viewport { width, height } = self.viewport?;
                let reference = match direction {
                    LengthDirection::Horizontal => width,
                    LengthDirection::Vertical => height,
                    LengthDirection::Other => ((width * width + height * height) / 2.0).sqrt(),
                };
                reference / 100.0
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A number followed by an optional unit
///
/// [w3 | SVG 2](https://svgwg.org/svg2-draft/types.html#InterfaceSVGLength)
pub struct Length {
    /// The number in the specified unit
    pub number: f32,
    /// The unit the number is specified in
    pub unit: LengthUnit,
}

impl Length {
    /// Creates a length from a number and unit
    pub fn new(number: f32, unit: LengthUnit) -> Self {
        Self { number, unit }
    }

    /// Returns the length in user units
    ///
    /// Percentages return `None` when the context has no viewport.
    pub fn to_user_units(&self, direction: LengthDirection, context: &LengthContext) -> Option<f32> {
        Some(self.number * context.user_units_per(self.unit, direction)?)
    }

    /// Creates a length in `unit` equal to the given number of user units
    pub fn from_user_units(
        user_units: f32,
        unit: LengthUnit,
        direction: LengthDirection,
        context: &LengthContext,
    ) -> Option<Self> {
        let per_unit = context.user_units_per(unit, direction)?;
        if per_unit == 0.0 {
            return None;
        }
        Some(Self::new(user_units / per_unit, unit))
    }
}

impl<'input> Parse<'input> for Length {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        let number = f32::parse(input)?;
        if let Ok('%') = input.current() {
            input.advance();
            return Ok(Self::new(number, LengthUnit::Percentage));
        }
        let suffix = input.take_matches(|char| char.is_ascii_alphabetic());
        if suffix.is_empty() {
            return Ok(Self::new(number, LengthUnit::Number));
        }
        match LengthUnit::from_suffix(suffix) {
            Some(unit) => Ok(Self::new(number, unit)),
            None => Err(Error::UnknownUnit(suffix)),
        }
    }
}

impl ToValue for Length {
    fn write_value<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
    where
        W: std::fmt::Write,
    {
        self.number.write_value(dest)?;
        dest.write_str(self.unit.suffix())
    }
}

#[test]
fn length() {
    assert_eq!(
        Length::parse_string("20.235"),
        Ok(Length::new(20.235, LengthUnit::Number))
    );
    assert_eq!(
        Length::parse_string("20px"),
        Ok(Length::new(20.0, LengthUnit::Px))
    );
    assert_eq!(
        Length::parse_string(" 0.5em "),
        Ok(Length::new(0.5, LengthUnit::Ems))
    );
    assert_eq!(
        Length::parse_string("1E1PX"),
        Ok(Length::new(10.0, LengthUnit::Px))
    );
    assert_eq!(
        Length::parse_string("-10%"),
        Ok(Length::new(-10.0, LengthUnit::Percentage))
    );

    assert_eq!(Length::parse_string("20 20"), Err(Error::ExpectedDone));
    assert_eq!(Length::parse_string("20vw"), Err(Error::UnknownUnit("vw")));
    assert_eq!(Length::parse_string("px"), Err(Error::InvalidNumber));
}

#[test]
fn length_to_value() {
    let options = svgdom_serialize::PrinterOptions::default();
    insta::assert_snapshot!(Length::new(2.5, LengthUnit::Cm).to_value_string(options).unwrap(), @"2.5cm");
    insta::assert_snapshot!(Length::new(50.0, LengthUnit::Percentage).to_value_string(options).unwrap(), @"50%");
    insta::assert_snapshot!(Length::new(3.0, LengthUnit::Number).to_value_string(options).unwrap(), @"3");
}

#[test]
fn user_units() {
    let context = LengthContext::default();
    let horizontal = LengthDirection::Horizontal;

    assert_eq!(
        Length::new(1.0, LengthUnit::In).to_user_units(horizontal, &context),
        Some(96.0)
    );
    assert_eq!(
        Length::new(2.0, LengthUnit::Ems).to_user_units(horizontal, &context),
        Some(32.0)
    );
    assert_eq!(
        Length::new(2.0, LengthUnit::Exs).to_user_units(horizontal, &context),
        Some(16.0)
    );
    assert_eq!(
        Length::new(50.0, LengthUnit::Percentage).to_user_units(horizontal, &context),
        None
    );

    let context = LengthContext {
        viewport: Some(Viewport {
            width: 200.0,
            height: 100.0,
        }),
        ..LengthContext::default()
    };
    assert_eq!(
        Length::new(50.0, LengthUnit::Percentage).to_user_units(horizontal, &context),
        Some(100.0)
    );
    assert_eq!(
        Length::new(50.0, LengthUnit::Percentage)
            .to_user_units(LengthDirection::Vertical, &context),
        Some(50.0)
    );
    assert_eq!(
        Length::from_user_units(48.0, LengthUnit::Pc, horizontal, &context),
        Some(Length::new(3.0, LengthUnit::Pc))
    );
}
