//! Parsing for number values
use crate::{error::Error, Parse, Parser};

impl<'input> Parse<'input> for f64 {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        let cursor = input.cursor();
        if let Ok('-' | '+') = input.current() {
            input.advance();
        }
        let integer = input.take_matches(|char| char.is_ascii_digit());
        let mut fraction = "";
        if let Ok('.') = input.current() {
            input.advance();
            fraction = input.take_matches(|char| char.is_ascii_digit());
        }
        if integer.is_empty() && fraction.is_empty() {
            input.rewind(input.cursor() - cursor);
            return Err(Error::InvalidNumber);
        }

        if let Ok('e' | 'E') = input.current() {
            let exponent = input.cursor();
            input.advance();
            if let Ok('-' | '+') = input.current() {
                input.advance();
            }
            if input.take_matches(|char| char.is_ascii_digit()).is_empty() {
                // Not an exponent, likely the start of an `em` or `ex` unit
                input.rewind(input.cursor() - exponent);
            }
        }

        let number: f64 = input
            .slice_from(cursor)
            .parse()
            .map_err(|_| Error::InvalidNumber)?;
        if number.is_finite() {
            Ok(number)
        } else {
            Err(Error::InvalidNumber)
        }
    }
}

impl<'input> Parse<'input> for f32 {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        let number = f64::parse(input)?;
        if number.abs() > f64::from(f32::MAX) {
            return Err(Error::InvalidNumber);
        }
        Ok(number as f32)
    }
}

#[test]
fn float() {
    assert_eq!(f64::parse_string("0"), Ok(0.0));
    assert_eq!(f64::parse_string("-1"), Ok(-1.0));
    assert_eq!(f64::parse_string("  1  "), Ok(1.0));
    assert_eq!(f64::parse_string(".4"), Ok(0.4));
    assert_eq!(f64::parse_string("-.4"), Ok(-0.4));
    assert_eq!(f64::parse_string("+10"), Ok(10.0));
    assert_eq!(f64::parse_string("1e2"), Ok(100.0));
    assert_eq!(f64::parse_string("1E+2"), Ok(100.0));
    assert_eq!(f64::parse_string("1e-2"), Ok(0.01));
    assert_eq!(f64::parse_string("0."), Ok(0.0));

    assert_eq!(f64::parse_string("1em"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("1ex"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string("-.01 4"), Err(Error::ExpectedDone));
    assert_eq!(f64::parse_string(""), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string("-"), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string("."), Err(Error::InvalidNumber));
    assert_eq!(f64::parse_string("q"), Err(Error::InvalidNumber));
    assert_eq!(
        f64::parse_string("99999999e99999999"),
        Err(Error::InvalidNumber)
    );
}

#[test]
fn number_stops_before_unit() {
    let mut parser = Parser::new("12.5em");
    assert_eq!(f32::parse(&mut parser), Ok(12.5));
    assert_eq!(parser.slice(), "em");

    let mut parser = Parser::new("3e1px");
    assert_eq!(f32::parse(&mut parser), Ok(30.0));
    assert_eq!(parser.slice(), "px");
}
