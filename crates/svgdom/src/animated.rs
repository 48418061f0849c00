//! Value wrappers of reflected attributes.
//!
//! Each wrapper has a `base_val`, which reads and writes the attribute, and an `anim_val`,
//! which is a read-only view of the same value since animations aren't run.

mod enumeration;
mod length;
mod string;
mod transform_list;

pub use enumeration::{AnimatedEnumeration, EnumerationDef};
pub use length::{AnimatedLength, SvgLength};
pub use string::AnimatedString;
pub use transform_list::{AnimatedTransformList, SvgTransformList};

use svgdom_parse::Parse;
use svgdom_serialize::ToValue;

use crate::{element::AttributeBinding, error::DomError};

/// Parses the bound attribute, returning `None` if it's missing or invalid
fn read_parsed<T>(binding: &AttributeBinding) -> Option<T>
where
    T: for<'input> Parse<'input>,
{
    let value = binding.get()?;
    match T::parse_string(&value) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            log::debug!("ignoring invalid `{}=\"{value}\"`: {error}", binding.name());
            None
        }
    }
}

/// Serializes the value into the bound attribute, using the document's printer options
fn write_value<T: ToValue>(binding: &AttributeBinding, value: &T) -> Result<(), DomError> {
    let options = binding.element().options().printer_options();
    let string = value.to_value_string(options)?;
    binding.set(Some(&string));
    Ok(())
}
