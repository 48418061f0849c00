//! The lazily created, per-element cache of reflected attribute wrappers
use std::cell::OnceCell;

use crate::element::{AttributeBinding, Element};

/// A value wrapper that can be bound to an attribute of an element.
pub trait Reflect: Sized {
    /// Extra parameters of the wrapper, such as the legal values of an enumeration
    type Options: Copy;

    /// Creates the wrapper around the attribute's binding
    fn reflect(binding: AttributeBinding, options: Self::Options) -> Self;
}

#[derive(Debug, Clone, Copy)]
/// Declares which attribute a property reflects, and how.
pub struct PropertyDef<O> {
    /// The qualified name of the reflected attribute
    pub name: &'static str,
    /// The options passed to the wrapper when it's created
    pub options: O,
}

#[derive(Debug)]
/// A slot on an element holding the wrapper of one property.
///
/// The wrapper is created on first access and the same instance is returned for as long as the
/// slot lives.
pub struct LazyProperty<T> {
    cell: OnceCell<T>,
}

impl<T> Default for LazyProperty<T> {
    fn default() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }
}

impl<T: Reflect> LazyProperty<T> {
    /// Creates an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached wrapper, binding a new one to `element` if it's the first access
    pub fn get(&self, element: &Element, def: &PropertyDef<T::Options>) -> &T {
        self.cell.get_or_init(|| {
            log::trace!("reflecting `{}` of <{}>", def.name, element.tag_name());
            T::reflect(element.bind(def.name), def.options)
        })
    }

    /// Whether the wrapper has been created yet
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug)]
    struct Raw(AttributeBinding, u8);

    impl Reflect for Raw {
        type Options = u8;

        fn reflect(binding: AttributeBinding, options: Self::Options) -> Self {
            Self(binding, options)
        }
    }

    #[test]
    fn created_once() {
        let element = Element::new("mask");
        let property = LazyProperty::<Raw>::new();
        let def = PropertyDef {
            name: "x",
            options: 1,
        };
        assert!(!property.is_initialized());

        let first = property.get(&element, &def);
        assert!(property.is_initialized());
        assert_eq!(first.0.name(), "x");
        assert_eq!(first.1, 1);

        let other_def = PropertyDef {
            name: "y",
            options: 2,
        };
        let second = property.get(&element, &other_def);
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.0.name(), "x");
    }
}
