//! Typed SVG elements and their reflected properties
use svgdom_collections::attribute::{LengthDirection, SpreadMethod, Units};

use crate::{
    animated::{
        AnimatedEnumeration, AnimatedLength, AnimatedString, AnimatedTransformList,
        EnumerationDef,
    },
    element::Element,
    property::{LazyProperty, PropertyDef, Reflect},
};

/// An element, or a typed view of one.
pub trait SvgElement: Sized {
    /// Wraps an element, without checking its name
    fn from_element(element: Element) -> Self;

    /// Returns the untyped element
    fn as_element(&self) -> &Element;
}

impl SvgElement for Element {
    fn from_element(element: Element) -> Self {
        element
    }

    fn as_element(&self) -> &Element {
        self
    }
}

macro_rules! options_or_unit {
    () => {
        ()
    };
    ($options:expr) => {
        $options
    };
}

/// Defines a typed element that extends `$base`, with a lazily reflected wrapper for each
/// property.
///
/// Each property is declared as `name: Wrapper = "attributeName"`, optionally followed by the
/// wrapper's options. Wrappers without options, such as strings, take `()`.
macro_rules! define_element {
    (
        $(#[$outer:meta])*
        $element:ident$(: $tag:literal)? extends $base:ty {
            $(
                $(#[$meta:meta])*
                $property:ident: $wrapper:ty = $attr:literal $(, $options:expr)?;
            )*
        }
    ) => {
        #[derive(derive_more::Debug, derive_more::Deref)]
        $(#[$outer])*
        pub struct $element {
            #[deref]
            base: $base,
            $(
                #[debug(skip)]
                $property: LazyProperty<$wrapper>,
            )*
        }

        $(
            impl $element {
                /// The local name of the element
                pub const TAG_NAME: &'static str = $tag;

                /// Creates a detached element with default document options
                pub fn create() -> Self {
                    Self::from_element(Element::new($tag))
                }
            }
        )?

        impl $element {
            $(
                $(#[$meta])*
                pub fn $property(&self) -> &$wrapper {
                    const DEF: PropertyDef<<$wrapper as Reflect>::Options> = PropertyDef {
                        name: $attr,
                        options: options_or_unit!($($options)?),
                    };
                    self.$property.get(self.as_element(), &DEF)
                }
            )*
        }

        impl SvgElement for $element {
            fn from_element(element: Element) -> Self {
                Self {
                    base: <$base>::from_element(element),
                    $($property: LazyProperty::new(),)*
                }
            }

            fn as_element(&self) -> &Element {
                self.base.as_element()
            }
        }
    };
}

const USER_SPACE_ON_USE: EnumerationDef =
    EnumerationDef::new(Units::VALUES, Some(Units::UserSpaceOnUse.as_str()));
const OBJECT_BOUNDING_BOX: EnumerationDef =
    EnumerationDef::new(Units::VALUES, Some(Units::ObjectBoundingBox.as_str()));
const PAD: EnumerationDef =
    EnumerationDef::new(SpreadMethod::VALUES, Some(SpreadMethod::Pad.as_str()));

define_element!(
    /// Defines an alpha mask for compositing the current object into the background.
    ///
    /// [MDN | SVGMaskElement](https://developer.mozilla.org/en-US/docs/Web/API/SVGMaskElement)
    SvgMaskElement: "mask" extends Element {
        /// The coordinate system of `x`, `y`, `width` and `height`
        mask_units: AnimatedEnumeration = "maskUnits", USER_SPACE_ON_USE;
        /// The coordinate system of the mask's contents
        mask_content_units: AnimatedEnumeration = "maskContentUnits", USER_SPACE_ON_USE;
        /// The x coordinate of the top left corner of the masking area
        x: AnimatedLength = "x", LengthDirection::Horizontal;
        /// The y coordinate of the top left corner of the masking area
        y: AnimatedLength = "y", LengthDirection::Vertical;
        /// The width of the masking area
        width: AnimatedLength = "width", LengthDirection::Horizontal;
        /// The height of the masking area
        height: AnimatedLength = "height", LengthDirection::Vertical;
    }
);

define_element!(
    /// Defines a graphics object which can be redrawn at repeated x- and y-coordinate
    /// intervals ("tiled") to cover an area.
    ///
    /// [MDN | SVGPatternElement](https://developer.mozilla.org/en-US/docs/Web/API/SVGPatternElement)
    SvgPatternElement: "pattern" extends Element {
        /// A reference to a template pattern
        href: AnimatedString = "href";
        /// The coordinate system of `x`, `y`, `width` and `height`
        pattern_units: AnimatedEnumeration = "patternUnits", OBJECT_BOUNDING_BOX;
        /// The coordinate system of the pattern's contents
        pattern_content_units: AnimatedEnumeration = "patternContentUnits", USER_SPACE_ON_USE;
        /// Additional transforms from the pattern's coordinate system to the referencing
        /// element's
        pattern_transform: AnimatedTransformList = "patternTransform";
        /// The x coordinate of the pattern tile
        x: AnimatedLength = "x", LengthDirection::Horizontal;
        /// The y coordinate of the pattern tile
        y: AnimatedLength = "y", LengthDirection::Vertical;
        /// The width of the pattern tile
        width: AnimatedLength = "width", LengthDirection::Horizontal;
        /// The height of the pattern tile
        height: AnimatedLength = "height", LengthDirection::Vertical;
    }
);

define_element!(
    /// The properties shared by linear and radial gradients.
    ///
    /// [MDN | SVGGradientElement](https://developer.mozilla.org/en-US/docs/Web/API/SVGGradientElement)
    SvgGradientElement extends Element {
        /// A reference to a template gradient
        href: AnimatedString = "href";
        /// The coordinate system of the gradient's geometry
        gradient_units: AnimatedEnumeration = "gradientUnits", OBJECT_BOUNDING_BOX;
        /// Additional transforms from the gradient's coordinate system to the target's
        gradient_transform: AnimatedTransformList = "gradientTransform";
        /// How the gradient fills the area outside of its bounds
        spread_method: AnimatedEnumeration = "spreadMethod", PAD;
    }
);

define_element!(
    /// Defines a radial gradient, from a focal point to an outer circle.
    ///
    /// [MDN | SVGRadialGradientElement](https://developer.mozilla.org/en-US/docs/Web/API/SVGRadialGradientElement)
    SvgRadialGradientElement: "radialGradient" extends SvgGradientElement {
        /// The x coordinate of the end circle
        cx: AnimatedLength = "cx", LengthDirection::Horizontal;
        /// The y coordinate of the end circle
        cy: AnimatedLength = "cy", LengthDirection::Vertical;
        /// The radius of the end circle
        r: AnimatedLength = "r", LengthDirection::Other;
        /// The x coordinate of the start circle
        fx: AnimatedLength = "fx", LengthDirection::Horizontal;
        /// The y coordinate of the start circle
        fy: AnimatedLength = "fy", LengthDirection::Vertical;
    }
);

define_element!(
    /// Defines a linear gradient, along a vector.
    ///
    /// [MDN | SVGLinearGradientElement](https://developer.mozilla.org/en-US/docs/Web/API/SVGLinearGradientElement)
    SvgLinearGradientElement: "linearGradient" extends SvgGradientElement {
        /// The x coordinate of the start of the gradient vector
        x1: AnimatedLength = "x1", LengthDirection::Horizontal;
        /// The y coordinate of the start of the gradient vector
        y1: AnimatedLength = "y1", LengthDirection::Vertical;
        /// The x coordinate of the end of the gradient vector
        x2: AnimatedLength = "x2", LengthDirection::Horizontal;
        /// The y coordinate of the end of the gradient vector
        y2: AnimatedLength = "y2", LengthDirection::Vertical;
    }
);

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use svgdom_collections::attribute::Transform;

    use super::*;

    #[test]
    fn cached() {
        let mask = SvgMaskElement::create();
        assert!(std::ptr::eq(mask.mask_units(), mask.mask_units()));
        assert!(std::ptr::eq(
            mask.mask_content_units(),
            mask.mask_content_units()
        ));
        assert!(std::ptr::eq(mask.x(), mask.x()));
        assert!(std::ptr::eq(mask.y(), mask.y()));
        assert!(std::ptr::eq(mask.width(), mask.width()));
        assert!(std::ptr::eq(mask.height(), mask.height()));
        assert!(!std::ptr::eq(mask.x(), mask.y()));

        let pattern = SvgPatternElement::create();
        assert!(std::ptr::eq(pattern.href(), pattern.href()));
        assert!(std::ptr::eq(pattern.pattern_units(), pattern.pattern_units()));
        assert!(std::ptr::eq(
            pattern.pattern_content_units(),
            pattern.pattern_content_units()
        ));
        assert!(std::ptr::eq(
            pattern.pattern_transform(),
            pattern.pattern_transform()
        ));

        let gradient = SvgRadialGradientElement::create();
        assert!(std::ptr::eq(gradient.href(), gradient.href()));
        assert!(std::ptr::eq(
            gradient.gradient_transform(),
            gradient.gradient_transform()
        ));
        let lengths: [fn(&SvgRadialGradientElement) -> &AnimatedLength; 5] = [
            SvgRadialGradientElement::cx,
            SvgRadialGradientElement::cy,
            SvgRadialGradientElement::r,
            SvgRadialGradientElement::fx,
            SvgRadialGradientElement::fy,
        ];
        for length in lengths {
            assert!(std::ptr::eq(length(&gradient), length(&gradient)));
        }
    }

    #[test]
    fn cached_wrappers_stay_live() {
        let mask = SvgMaskElement::create();
        let units = mask.mask_units();
        let width = mask.width().base_val();

        mask.set_attribute("maskUnits", "objectBoundingBox");
        mask.set_attribute("width", "3px");
        assert_eq!(units.base_val(), 2);
        assert_eq!(width.value(), Ok(3.0));

        mask.remove_attribute("maskUnits");
        mask.remove_attribute("width");
        assert_eq!(units.base_val(), 1);
        assert_eq!(width.value(), Ok(0.0));
    }

    #[test]
    fn mask() {
        let mask = SvgMaskElement::create();
        assert_eq!(mask.tag_name(), SvgMaskElement::TAG_NAME);
        assert_eq!(mask.mask_units().base_val(), 1);
        assert_eq!(mask.mask_content_units().base_val(), 1);

        mask.set_attribute("maskContentUnits", "objectBoundingBox");
        assert_eq!(mask.mask_content_units().base_val(), 2);
        mask.remove_attribute("maskContentUnits");
        assert_eq!(mask.mask_content_units().base_val(), 1);

        mask.height().base_val().set_value(120.0).unwrap();
        mask.y().base_val().set_value_as_string("-10%").unwrap();
        assert_eq!(
            mask.get_attribute_names(),
            vec![String::from("height"), String::from("y")]
        );
    }

    #[test]
    fn pattern() {
        let pattern = SvgPatternElement::create();
        assert_eq!(
            pattern.pattern_units().base_val_keyword(),
            Some("objectBoundingBox")
        );
        assert_eq!(
            pattern.pattern_content_units().base_val_keyword(),
            Some("userSpaceOnUse")
        );
        assert_eq!(pattern.href().base_val(), "");

        pattern.href().set_base_val("#dots");
        pattern
            .pattern_transform()
            .base_val()
            .append_item(Transform::rotate(45.0, 0.0, 0.0))
            .unwrap();
        pattern.x().base_val().set_value_in_specified_units(4.0).unwrap();
        assert_eq!(pattern.get_attribute("href").as_deref(), Some("#dots"));
        assert_eq!(
            pattern.get_attribute("patternTransform").as_deref(),
            Some("rotate(45)")
        );
        assert_eq!(pattern.get_attribute("x").as_deref(), Some("4"));

        pattern.href().set_base_val("");
        assert!(!pattern.has_attribute("href"));
    }

    #[test]
    fn gradients() {
        let radial = SvgRadialGradientElement::create();
        assert_eq!(radial.gradient_units().base_val_keyword(), Some("objectBoundingBox"));
        assert_eq!(radial.spread_method().base_val_keyword(), Some("pad"));

        radial.spread_method().set_base_val(3).unwrap();
        assert_eq!(radial.get_attribute("spreadMethod").as_deref(), Some("repeat"));

        radial.set_attribute("fx", "0.25");
        assert_eq!(radial.fx().base_val().value(), Ok(0.25));
        radial.fy().base_val().set_value(0.5).unwrap();
        assert_eq!(radial.get_attribute("fy").as_deref(), Some("0.5"));

        let linear = SvgLinearGradientElement::create();
        assert_eq!(linear.tag_name(), "linearGradient");
        linear.x2().base_val().new_value_specified_units(2, 100.0).unwrap();
        assert_eq!(linear.get_attribute("x2").as_deref(), Some("100%"));
        assert_eq!(linear.x1().base_val().value_as_string(), "0");
    }

    #[test]
    fn from_element() {
        let element = Element::new("pattern");
        element.set_attribute("patternUnits", "userSpaceOnUse");
        let pattern = SvgPatternElement::from_element(element.clone());
        assert!(pattern.as_element().ptr_eq(&element));
        assert_eq!(pattern.pattern_units().base_val(), 1);

        pattern.pattern_units().set_base_val(2).unwrap();
        assert_eq!(
            element.get_attribute("patternUnits").as_deref(),
            Some("objectBoundingBox")
        );
    }

    #[test]
    fn round_trip() {
        let pattern = SvgPatternElement::create();

        for (value, keyword) in [(1, "userSpaceOnUse"), (2, "objectBoundingBox")] {
            pattern.set_attribute("patternContentUnits", keyword);
            assert_eq!(pattern.pattern_content_units().base_val(), value);

            pattern.pattern_units().set_base_val(value).unwrap();
            assert_eq!(
                pattern.get_attribute("patternUnits").as_deref(),
                Some(keyword)
            );
        }

        pattern.remove_attribute("patternContentUnits");
        assert_eq!(pattern.pattern_content_units().base_val(), 1);

        pattern.set_attribute("patternTransform", "scale(2)");
        let transforms = pattern.pattern_transform().base_val();
        assert_eq!(transforms.number_of_items(), 1);
        transforms.clear().unwrap();
        assert!(!pattern.has_attribute("patternTransform"));
    }

    #[test]
    fn non_finite_writes_keep_attributes() {
        let mask = SvgMaskElement::create();
        mask.width().base_val().set_value(10.0).unwrap();
        assert!(mask.width().base_val().set_value(f32::INFINITY).is_err());
        assert!(mask
            .width()
            .base_val()
            .set_value_in_specified_units(f32::NAN)
            .is_err());
        assert_eq!(mask.get_attribute("width").as_deref(), Some("10"));
        assert_eq!(mask.width().base_val().value(), Ok(10.0));

        let pattern = SvgPatternElement::create();
        let transforms = pattern.pattern_transform().base_val();
        transforms.append_item(Transform::translate(4.0, 0.0)).unwrap();
        assert!(transforms
            .append_item(Transform::scale(f32::NAN, 1.0))
            .is_err());
        assert_eq!(transforms.number_of_items(), 1);
        assert_eq!(
            pattern.get_attribute("patternTransform").as_deref(),
            Some("translate(4)")
        );
    }

    #[test]
    fn trailing_argument_comma_is_invalid() {
        let pattern = SvgPatternElement::create();
        let transforms = pattern.pattern_transform().base_val();
        pattern.set_attribute("patternTransform", "scale(2,)");
        assert_eq!(transforms.number_of_items(), 0);
        pattern.set_attribute("patternTransform", "translate(1 2,)");
        assert_eq!(transforms.number_of_items(), 0);
        pattern.set_attribute("patternTransform", "translate(1, 2)");
        assert_eq!(transforms.number_of_items(), 1);
    }

    #[test]
    fn typed_views_share_attributes() {
        let element = Element::new("mask");
        let first = SvgMaskElement::from_element(element.clone());
        let second = SvgMaskElement::from_element(element);

        first.x().base_val().set_value_as_string("1in").unwrap();
        assert_eq!(second.x().base_val().value(), Ok(96.0));
        assert!(!std::ptr::eq(first.x(), second.x()));
        insta::assert_debug_snapshot!(second.as_element().get_attribute_names(), @r#"
        [
            "x",
        ]
        "#);
    }
}
