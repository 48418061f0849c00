use crate::{element::AttributeBinding, error::DomError, property::Reflect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The closed set of keywords an enumeration may reflect, and the keyword used when the
/// attribute is missing or invalid
pub struct EnumerationDef {
    /// The legal keywords, where the keyword at index `i` has the value `i + 1`
    pub values: &'static [&'static str],
    /// The keyword to fall back to
    pub default: Option<&'static str>,
}

impl EnumerationDef {
    /// Creates a definition from the legal keywords and an optional default
    pub const fn new(values: &'static [&'static str], default: Option<&'static str>) -> Self {
        Self { values, default }
    }

    fn value_of(&self, keyword: &str) -> Option<u16> {
        let index = self.values.iter().position(|value| *value == keyword)?;
        u16::try_from(index + 1).ok()
    }
}

#[derive(Debug)]
/// A reflected keyword attribute, such as `maskUnits`
///
/// Values are numbered from `1` in the order of [`EnumerationDef::values`], with `0` meaning
/// unknown.
///
/// [MDN | SVGAnimatedEnumeration](https://developer.mozilla.org/en-US/docs/Web/API/SVGAnimatedEnumeration)
pub struct AnimatedEnumeration {
    binding: AttributeBinding,
    def: EnumerationDef,
}

impl Reflect for AnimatedEnumeration {
    type Options = EnumerationDef;

    fn reflect(binding: AttributeBinding, def: EnumerationDef) -> Self {
        Self { binding, def }
    }
}

impl AnimatedEnumeration {
    /// The legal keywords and default of the enumeration
    pub fn def(&self) -> &EnumerationDef {
        &self.def
    }

    /// Returns the value of the attribute's keyword, falling back to the default keyword
    pub fn base_val(&self) -> u16 {
        self.binding
            .get()
            .and_then(|keyword| self.def.value_of(&keyword))
            .or_else(|| self.def.default.and_then(|keyword| self.def.value_of(keyword)))
            .unwrap_or(0)
    }

    /// Sets the attribute to the keyword of the given value
    ///
    /// # Errors
    /// If the value is `0` or larger than the number of legal keywords
    pub fn set_base_val(&self, value: u16) -> Result<(), DomError> {
        let keyword = usize::from(value)
            .checked_sub(1)
            .and_then(|index| self.def.values.get(index))
            .ok_or_else(|| {
                DomError::Type(format!(
                    "the enumeration value provided ({value}) is not between 1 and {} for `{}`",
                    self.def.values.len(),
                    self.binding.name(),
                ))
            })?;
        self.binding.set(Some(*keyword));
        Ok(())
    }

    /// Returns the keyword of [`AnimatedEnumeration::base_val`], if it's known
    pub fn base_val_keyword(&self) -> Option<&'static str> {
        let index = usize::from(self.base_val()).checked_sub(1)?;
        self.def.values.get(index).copied()
    }

    /// Sets the attribute to the given keyword
    ///
    /// # Errors
    /// If the keyword isn't one of the legal keywords
    pub fn set_base_val_keyword(&self, keyword: &str) -> Result<(), DomError> {
        if self.def.value_of(keyword).is_none() {
            return Err(DomError::Type(format!(
                "`{keyword}` is not a legal value of `{}`",
                self.binding.name()
            )));
        }
        self.binding.set(Some(keyword));
        Ok(())
    }

    /// Returns the current animated value, which is always the base value
    pub fn anim_val(&self) -> u16 {
        self.base_val()
    }
}

#[cfg(test)]
mod test {
    use svgdom_collections::attribute::Units;

    use super::*;
    use crate::Element;

    const UNITS: EnumerationDef = EnumerationDef::new(Units::VALUES, Some("objectBoundingBox"));

    #[test]
    fn defaults() {
        let element = Element::new("pattern");
        let units = AnimatedEnumeration::reflect(element.bind("patternUnits"), UNITS);
        assert_eq!(units.base_val(), 2);
        assert_eq!(units.base_val_keyword(), Some("objectBoundingBox"));

        element.set_attribute("patternUnits", "userSpaceOnUse");
        assert_eq!(units.base_val(), 1);
        assert_eq!(units.anim_val(), 1);

        element.set_attribute("patternUnits", "nonsense");
        assert_eq!(units.base_val(), 2);

        let no_default = AnimatedEnumeration::reflect(
            element.bind("patternUnits"),
            EnumerationDef::new(Units::VALUES, None),
        );
        assert_eq!(no_default.base_val(), 0);
        assert_eq!(no_default.base_val_keyword(), None);
    }

    #[test]
    fn set() {
        let element = Element::new("pattern");
        let units = AnimatedEnumeration::reflect(element.bind("patternUnits"), UNITS);

        units.set_base_val(1).unwrap();
        assert_eq!(
            element.get_attribute("patternUnits").as_deref(),
            Some("userSpaceOnUse")
        );

        assert!(matches!(units.set_base_val(0), Err(DomError::Type(_))));
        assert!(matches!(units.set_base_val(3), Err(DomError::Type(_))));
        assert_eq!(
            element.get_attribute("patternUnits").as_deref(),
            Some("userSpaceOnUse")
        );

        units.set_base_val_keyword("objectBoundingBox").unwrap();
        assert_eq!(units.base_val(), 2);
        assert!(units.set_base_val_keyword("").is_err());
        assert!(element.has_attribute("patternUnits"));
    }
}
