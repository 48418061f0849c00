/*!
Reflected attributes for SVG DOM elements.

Typed elements, such as [`SvgMaskElement`], expose each of their attributes as an "animated"
value wrapper. A wrapper is created the first time its property is read, cached on the
element, and then reads from and writes to the element's attributes on every use.

# Example

```
use svgdom::{AnySvgElement, Document, DocumentOptions};

let document = Document::new(DocumentOptions::default());
let AnySvgElement::Mask(mask) = document.create_element("mask") else {
    unreachable!();
};

// Defaults are returned while the attribute is missing
assert_eq!(mask.mask_units().base_val_keyword(), Some("userSpaceOnUse"));

mask.mask_units().set_base_val(2).unwrap();
assert_eq!(
    mask.get_attribute("maskUnits").as_deref(),
    Some("objectBoundingBox")
);

mask.width().base_val().set_value_as_string("50%").unwrap();
assert_eq!(mask.get_attribute("width").as_deref(), Some("50%"));
```
*/

pub mod animated;
pub mod attribute;
pub mod document;
pub mod element;
pub mod elements;
pub mod error;
pub mod options;
pub mod property;

pub use animated::{
    AnimatedEnumeration, AnimatedLength, AnimatedString, AnimatedTransformList, EnumerationDef,
    SvgLength, SvgTransformList,
};
pub use document::{AnySvgElement, Document};
pub use element::{AttributeBinding, Element};
pub use elements::{
    SvgElement, SvgGradientElement, SvgLinearGradientElement, SvgMaskElement, SvgPatternElement,
    SvgRadialGradientElement,
};
pub use error::DomError;
pub use options::DocumentOptions;
pub use property::{LazyProperty, PropertyDef, Reflect};

/// The string type used for attribute names and values
pub type Atom = string_cache::DefaultAtom;

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
