//! The factory of typed elements
use std::rc::Rc;

use crate::{
    element::Element,
    elements::{
        SvgElement, SvgLinearGradientElement, SvgMaskElement, SvgPatternElement,
        SvgRadialGradientElement,
    },
    options::DocumentOptions,
};

#[derive(Debug)]
/// An element created by a [`Document`], typed by its name
pub enum AnySvgElement {
    /// A `<mask>` element
    Mask(SvgMaskElement),
    /// A `<pattern>` element
    Pattern(SvgPatternElement),
    /// A `<radialGradient>` element
    RadialGradient(SvgRadialGradientElement),
    /// A `<linearGradient>` element
    LinearGradient(SvgLinearGradientElement),
    /// Any other element, which has no reflected properties
    Unknown(Element),
}

impl AnySvgElement {
    /// Returns the untyped element
    pub fn as_element(&self) -> &Element {
        match self {
            Self::Mask(element) => element.as_element(),
            Self::Pattern(element) => element.as_element(),
            Self::RadialGradient(element) => element.as_element(),
            Self::LinearGradient(element) => element.as_element(),
            Self::Unknown(element) => element,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Creates elements that share the same options.
///
/// [MDN | Document](https://developer.mozilla.org/en-US/docs/Web/API/Document)
pub struct Document {
    options: Rc<DocumentOptions>,
}

impl Document {
    /// Creates a document with the given options
    pub fn new(options: DocumentOptions) -> Self {
        Self {
            options: Rc::new(options),
        }
    }

    /// The options shared by the document's elements
    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Creates an element, typed by the local part of its qualified name.
    ///
    /// [MDN | createElementNS](https://developer.mozilla.org/en-US/docs/Web/API/Document/createElementNS)
    pub fn create_element(&self, qualified_name: &str) -> AnySvgElement {
        let element = Element::new_with_options(qualified_name, Rc::clone(&self.options));
        let local_name = element.local_name().clone();
        let element = match &*local_name {
            SvgMaskElement::TAG_NAME => AnySvgElement::Mask(SvgMaskElement::from_element(element)),
            SvgPatternElement::TAG_NAME => {
                AnySvgElement::Pattern(SvgPatternElement::from_element(element))
            }
            SvgRadialGradientElement::TAG_NAME => {
                AnySvgElement::RadialGradient(SvgRadialGradientElement::from_element(element))
            }
            SvgLinearGradientElement::TAG_NAME => {
                AnySvgElement::LinearGradient(SvgLinearGradientElement::from_element(element))
            }
            _ => AnySvgElement::Unknown(element),
        };
        log::debug!("created {:?}", element.as_element().tag_name());
        element
    }
}
