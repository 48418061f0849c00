//! Primitives for serializing reflected attribute values back into strings

use error::PrinterError;

pub mod error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
/// Options that control how attribute values are serialized
pub struct PrinterOptions {
    /// Drop redundant characters, such as the leading zero of `0.5`
    pub minify: bool,
    /// The number of decimal places to round numbers to, if any
    pub precision: Option<u8>,
}

/// The destination of serialized attribute values
pub struct Printer<'a, W> {
    dest: &'a mut W,
    options: PrinterOptions,
}

impl<'a, W: std::fmt::Write> Printer<'a, W> {
    /// Creates a printer writing to `dest`
    pub fn new(dest: &'a mut W, options: PrinterOptions) -> Self {
        Self { dest, options }
    }

    /// The options the printer was created with
    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Writes a raw string
    ///
    /// # Errors
    /// If the destination fails
    pub fn write_str(&mut self, s: &str) -> Result<(), PrinterError> {
        self.dest.write_str(s)?;
        Ok(())
    }

    /// Writes a raw character
    ///
    /// # Errors
    /// If the destination fails
    pub fn write_char(&mut self, c: char) -> Result<(), PrinterError> {
        self.dest.write_char(c)?;
        Ok(())
    }

    /// Writes a number in its shortest form, respecting the precision and minify options
    ///
    /// # Errors
    /// If the number isn't finite, or the destination fails
    pub fn write_number(&mut self, number: f64) -> Result<(), PrinterError> {
        if !number.is_finite() {
            return Err(PrinterError);
        }
        let number = match self.options.precision {
            Some(precision) => {
                let pow = 10_f64.powi(i32::from(precision));
                (number * pow).round() / pow
            }
            None => number,
        };
        // Avoids printing `-0`
        let number = if number == 0.0 { 0.0 } else { number };
        let string = number.to_string();
        if !self.options.minify {
            return self.write_str(&string);
        }
        match string.strip_prefix("0.") {
            Some(fraction) => {
                self.write_char('.')?;
                self.write_str(fraction)
            }
            None => match string.strip_prefix("-0.") {
                Some(fraction) => {
                    self.write_str("-.")?;
                    self.write_str(fraction)
                }
                None => self.write_str(&string),
            },
        }
    }
}

/// Trait for values that can be serialized into attribute values
pub trait ToValue {
    /// Serialize `self` as an attribute value, writing to `dest`
    ///
    /// # Errors
    /// If printer fails
    fn write_value<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
    where
        W: std::fmt::Write;

    /// Serialize `self` as an attribute value and return a string
    ///
    /// # Errors
    /// If writing string fails
    fn to_value_string(&self, options: PrinterOptions) -> Result<String, PrinterError> {
        let mut s = String::new();
        let mut printer = Printer::new(&mut s, options);
        self.write_value(&mut printer)?;
        Ok(s)
    }
}

impl ToValue for f64 {
    fn write_value<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
    where
        W: std::fmt::Write,
    {
        dest.write_number(*self)
    }
}

impl ToValue for f32 {
    fn write_value<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
    where
        W: std::fmt::Write,
    {
        // Widening through the shortest string keeps `0.1_f32` as `0.1`
        let widened = self.to_string().parse().unwrap_or(f64::from(*self));
        dest.write_number(widened)
    }
}

impl ToValue for str {
    fn write_value<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
    where
        W: std::fmt::Write,
    {
        dest.write_str(self)
    }
}

#[test]
fn numbers() {
    let print = |n: f64, options| n.to_value_string(options).unwrap();
    let minify = PrinterOptions {
        minify: true,
        precision: None,
    };
    let rounded = PrinterOptions {
        minify: false,
        precision: Some(2),
    };

    assert_eq!(print(10.0, PrinterOptions::default()), "10");
    assert_eq!(print(-0.0, PrinterOptions::default()), "0");
    assert_eq!(print(0.5, PrinterOptions::default()), "0.5");
    assert_eq!(print(0.5, minify), ".5");
    assert_eq!(print(-0.25, minify), "-.25");
    assert_eq!(print(1.23456, rounded), "1.23");
    assert_eq!(
        f64::NAN.to_value_string(PrinterOptions::default()),
        Err(PrinterError)
    );
    assert_eq!(f32::INFINITY.to_value_string(minify), Err(PrinterError));
    insta::assert_snapshot!(0.1_f32.to_value_string(PrinterOptions::default()).unwrap(), @"0.1");
}
