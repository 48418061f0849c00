use svgdom_collections::attribute::{Length, LengthDirection, LengthUnit};
use svgdom_parse::Parse as _;
use svgdom_serialize::ToValue as _;

use super::{read_parsed, write_value};
use crate::{element::AttributeBinding, error::DomError, property::Reflect};

#[derive(Debug)]
/// A reflected length attribute, such as `width`
///
/// [MDN | SVGAnimatedLength](https://developer.mozilla.org/en-US/docs/Web/API/SVGAnimatedLength)
pub struct AnimatedLength {
    binding: AttributeBinding,
    direction: LengthDirection,
}

impl Reflect for AnimatedLength {
    type Options = LengthDirection;

    fn reflect(binding: AttributeBinding, direction: LengthDirection) -> Self {
        Self { binding, direction }
    }
}

impl AnimatedLength {
    /// Returns a live, writable view of the attribute's length
    pub fn base_val(&self) -> SvgLength {
        SvgLength {
            binding: self.binding.clone(),
            direction: self.direction,
            read_only: false,
        }
    }

    /// Returns a live, read-only view of the attribute's length
    pub fn anim_val(&self) -> SvgLength {
        SvgLength {
            read_only: true,
            ..self.base_val()
        }
    }
}

#[derive(Debug, Clone)]
/// A view of a length attribute. Every read parses the attribute and every write replaces it.
///
/// A missing or invalid attribute reads as the number `0`.
///
/// [MDN | SVGLength](https://developer.mozilla.org/en-US/docs/Web/API/SVGLength)
pub struct SvgLength {
    binding: AttributeBinding,
    direction: LengthDirection,
    read_only: bool,
}

impl SvgLength {
    /// Returns the parsed length of the attribute
    pub fn length(&self) -> Length {
        read_parsed(&self.binding).unwrap_or_default()
    }

    /// Whether writes to this view are rejected
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the SVG DOM unit type of the length, e.g. `SVG_LENGTHTYPE_PX` (`5`)
    pub fn unit_type(&self) -> u16 {
        self.length().unit.type_code()
    }

    /// Returns the length in user units
    ///
    /// # Errors
    /// If the length is a percentage and the document has no viewport
    pub fn value(&self) -> Result<f32, DomError> {
        let context = self.binding.element().options().length_context();
        self.length()
            .to_user_units(self.direction, &context)
            .ok_or_else(|| self.unresolvable(self.length().unit))
    }

    /// Sets the length in user units, keeping the current unit
    ///
    /// # Errors
    /// If the view is read-only, the value isn't finite, or the current unit can't be resolved
    pub fn set_value(&self, value: f32) -> Result<(), DomError> {
        self.check_writable()?;
        let context = self.binding.element().options().length_context();
        let unit = self.length().unit;
        let length = Length::from_user_units(value, unit, self.direction, &context)
            .ok_or_else(|| self.unresolvable(unit))?;
        self.write(&length)
    }

    /// Returns the number of the length, in it's specified unit
    pub fn value_in_specified_units(&self) -> f32 {
        self.length().number
    }

    /// Sets the number of the length, keeping the current unit
    ///
    /// # Errors
    /// If the view is read-only, or the value isn't finite
    pub fn set_value_in_specified_units(&self, value: f32) -> Result<(), DomError> {
        self.check_writable()?;
        self.write(&Length::new(value, self.length().unit))
    }

    /// Returns the length as it would be written to the attribute
    pub fn value_as_string(&self) -> String {
        let options = self.binding.element().options().printer_options();
        self.length().to_value_string(options).unwrap_or_default()
    }

    /// Parses the string as a length and writes it to the attribute
    ///
    /// # Errors
    /// If the view is read-only, or the string isn't a valid length
    pub fn set_value_as_string(&self, value: &str) -> Result<(), DomError> {
        self.check_writable()?;
        let length = Length::parse_string(value).map_err(|error| DomError::Syntax {
            value: value.to_string(),
            reason: error.to_string(),
        })?;
        self.write(&length)
    }

    /// Replaces the length with a number in the unit of the given unit type
    ///
    /// # Errors
    /// If the view is read-only, the value isn't finite, or the unit type is unknown
    pub fn new_value_specified_units(&self, unit_type: u16, value: f32) -> Result<(), DomError> {
        self.check_writable()?;
        let unit = Self::unit_of(unit_type)?;
        self.write(&Length::new(value, unit))
    }

    /// Converts the length to the unit of the given unit type, keeping it's value in user units
    ///
    /// # Errors
    /// If the view is read-only, the unit type is unknown, or either unit can't be resolved
    pub fn convert_to_specified_units(&self, unit_type: u16) -> Result<(), DomError> {
        self.check_writable()?;
        let unit = Self::unit_of(unit_type)?;
        let value = self.value()?;
        let context = self.binding.element().options().length_context();
        let length = Length::from_user_units(value, unit, self.direction, &context)
            .ok_or_else(|| self.unresolvable(unit))?;
        self.write(&length)
    }

    fn write(&self, length: &Length) -> Result<(), DomError> {
        if !length.number.is_finite() {
            return Err(DomError::Type(format!(
                "the value provided for `{}` is not a finite number",
                self.binding.name()
            )));
        }
        write_value(&self.binding, length)
    }

    fn check_writable(&self) -> Result<(), DomError> {
        if self.read_only {
            Err(DomError::NoModificationAllowed(self.binding.name()))
        } else {
            Ok(())
        }
    }

    fn unit_of(unit_type: u16) -> Result<LengthUnit, DomError> {
        LengthUnit::from_type_code(unit_type)
            .ok_or_else(|| DomError::NotSupported(format!("unknown length unit type {unit_type}")))
    }

    fn unresolvable(&self, unit: LengthUnit) -> DomError {
        DomError::NotSupported(format!(
            "cannot resolve `{}` of `{}` without a viewport",
            unit.suffix(),
            self.binding.name()
        ))
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use svgdom_collections::attribute::Viewport;

    use super::*;
    use crate::{DocumentOptions, Element};

    fn width(element: &Element) -> AnimatedLength {
        AnimatedLength::reflect(element.bind("width"), LengthDirection::Horizontal)
    }

    #[test]
    fn missing() {
        let element = Element::new("mask");
        let length = width(&element).base_val();
        assert_eq!(length.unit_type(), 1);
        assert_eq!(length.value(), Ok(0.0));
        assert_eq!(length.value_as_string(), "0");
        assert!(!element.has_attribute("width"));
    }

    #[test]
    fn read() {
        let element = Element::new("mask");
        let length = width(&element).base_val();

        element.set_attribute("width", "2in");
        assert_eq!(length.unit_type(), 8);
        assert_eq!(length.value_in_specified_units(), 2.0);
        assert_eq!(length.value(), Ok(192.0));

        element.set_attribute("width", "  3em ");
        assert_eq!(length.value(), Ok(48.0));
        assert_eq!(length.value_as_string(), "3em");

        element.set_attribute("width", "wide");
        assert_eq!(length.length(), Length::default());

        element.set_attribute("width", "50%");
        assert!(matches!(length.value(), Err(DomError::NotSupported(_))));
    }

    #[test]
    fn write() {
        let element = Element::new("mask");
        let length = width(&element).base_val();

        length.set_value_as_string("10px").unwrap();
        assert_eq!(element.get_attribute("width").as_deref(), Some("10px"));

        length.set_value(20.0).unwrap();
        assert_eq!(element.get_attribute("width").as_deref(), Some("20px"));

        length.set_value_in_specified_units(1.5).unwrap();
        assert_eq!(element.get_attribute("width").as_deref(), Some("1.5px"));

        length.new_value_specified_units(3, 2.0).unwrap();
        assert_eq!(element.get_attribute("width").as_deref(), Some("2em"));

        length.convert_to_specified_units(5).unwrap();
        assert_eq!(element.get_attribute("width").as_deref(), Some("32px"));

        assert!(matches!(
            length.new_value_specified_units(0, 1.0),
            Err(DomError::NotSupported(_))
        ));
        assert!(matches!(
            length.set_value_as_string("ten"),
            Err(DomError::Syntax { .. })
        ));
        assert!(matches!(
            length.set_value_as_string(""),
            Err(DomError::Syntax { .. })
        ));
        assert_eq!(element.get_attribute("width").as_deref(), Some("32px"));
    }

    #[test]
    fn rejects_non_finite() {
        let element = Element::new("mask");
        let length = width(&element).base_val();
        length.set_value_as_string("5mm").unwrap();

        assert!(matches!(
            length.set_value(f32::INFINITY),
            Err(DomError::Type(_))
        ));
        assert!(matches!(
            length.set_value_in_specified_units(f32::NAN),
            Err(DomError::Type(_))
        ));
        assert!(matches!(
            length.new_value_specified_units(5, f32::NEG_INFINITY),
            Err(DomError::Type(_))
        ));
        assert!(matches!(
            length.set_value_as_string("1e999"),
            Err(DomError::Syntax { .. })
        ));
        assert_eq!(element.get_attribute("width").as_deref(), Some("5mm"));
        assert_eq!(length.value_in_specified_units(), 5.0);
    }

    #[test]
    fn anim_val_is_read_only() {
        let element = Element::new("mask");
        let length = width(&element);
        let anim_val = length.anim_val();
        assert!(anim_val.is_read_only());
        assert_eq!(
            anim_val.set_value(1.0),
            Err(DomError::NoModificationAllowed("width"))
        );

        length.base_val().set_value(4.0).unwrap();
        assert_eq!(anim_val.value(), Ok(4.0));
    }

    #[test]
    fn percentages_with_viewport() {
        let options = DocumentOptions {
            viewport: Some(Viewport {
                width: 400.0,
                height: 100.0,
            }),
            precision: Some(2),
            ..DocumentOptions::default()
        };
        let element = Element::new_with_options("mask", Rc::new(options));
        let length = width(&element).base_val();

        element.set_attribute("width", "25%");
        assert_eq!(length.value(), Ok(100.0));

        length.set_value(300.0).unwrap();
        assert_eq!(element.get_attribute("width").as_deref(), Some("75%"));

        length.new_value_specified_units(6, 1.0).unwrap();
        length.convert_to_specified_units(2).unwrap();
        assert_eq!(element.get_attribute("width").as_deref(), Some("9.45%"));
    }
}
