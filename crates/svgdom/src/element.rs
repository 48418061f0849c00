//! The generic element, and bindings to its attributes
use std::{fmt::Debug, rc::Rc};

use crate::{
    attribute::{Attributes, QualName},
    options::DocumentOptions,
    Atom,
};

struct ElementData {
    name: QualName,
    attributes: Attributes,
    options: Rc<DocumentOptions>,
}

#[derive(Clone)]
/// A handle to an element. Clones share the same name and attributes.
///
/// [MDN | Element](https://developer.mozilla.org/en-US/docs/Web/API/Element)
pub struct Element {
    data: Rc<ElementData>,
}

impl Element {
    /// Creates a detached element with default document options
    pub fn new(qualified_name: &str) -> Self {
        Self::new_with_options(qualified_name, Rc::new(DocumentOptions::default()))
    }

    pub(crate) fn new_with_options(qualified_name: &str, options: Rc<DocumentOptions>) -> Self {
        Self {
            data: Rc::new(ElementData {
                name: QualName::parse(qualified_name),
                attributes: Attributes::default(),
                options,
            }),
        }
    }

    /// Returns the local part of the element's qualified name.
    ///
    /// [MDN | localName](https://developer.mozilla.org/en-US/docs/Web/API/Element/localName)
    pub fn local_name(&self) -> &Atom {
        &self.data.name.local
    }

    /// Returns the namespace prefix of the element's qualified name.
    ///
    /// [MDN | prefix](https://developer.mozilla.org/en-US/docs/Web/API/Element/prefix)
    pub fn prefix(&self) -> Option<&Atom> {
        self.data.name.prefix.as_ref()
    }

    /// Returns the element's qualified name. SVG tag names keep their case.
    ///
    /// [MDN | tagName](https://developer.mozilla.org/en-US/docs/Web/API/Element/tagName)
    pub fn tag_name(&self) -> String {
        self.data.name.to_string()
    }

    /// Returns the collection of the attributes assigned to the element.
    ///
    /// [MDN | attributes](https://developer.mozilla.org/en-US/docs/Web/API/Element/attributes)
    pub fn attributes(&self) -> &Attributes {
        &self.data.attributes
    }

    /// The options of the document the element was created by
    pub fn options(&self) -> &DocumentOptions {
        &self.data.options
    }

    /// Returns the value of an attribute of the element specified by it's qualified name.
    ///
    /// [MDN | getAttribute](https://developer.mozilla.org/en-US/docs/Web/API/Element/getAttribute)
    pub fn get_attribute(&self, qualified_name: &str) -> Option<Atom> {
        self.data.attributes.get_named_item(qualified_name)
    }

    /// Sets the value of the specified attribute on the element.
    ///
    /// [MDN | setAttribute](https://developer.mozilla.org/en-US/docs/Web/API/Element/setAttribute)
    pub fn set_attribute(&self, qualified_name: &str, value: impl Into<Atom>) {
        self.data
            .attributes
            .set_named_item(qualified_name, value.into());
    }

    /// Removes the attribute with the specified name from the element.
    ///
    /// [MDN | removeAttribute](https://developer.mozilla.org/en-US/docs/Web/API/Element/removeAttribute)
    pub fn remove_attribute(&self, qualified_name: &str) {
        self.data.attributes.remove_named_item(qualified_name);
    }

    /// Returns whether the element has the specified attribute or not.
    ///
    /// [MDN | hasAttribute](https://developer.mozilla.org/en-US/docs/Web/API/Element/hasAttribute)
    pub fn has_attribute(&self, qualified_name: &str) -> bool {
        self.get_attribute(qualified_name).is_some()
    }

    /// Returns the qualified names of the element's attributes.
    ///
    /// [MDN | getAttributeNames](https://developer.mozilla.org/en-US/docs/Web/API/Element/getAttributeNames)
    pub fn get_attribute_names(&self) -> Vec<String> {
        self.data.attributes.names()
    }

    /// Whether both handles refer to the same element
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Creates a binding that reads and writes the named attribute of this element
    pub fn bind(&self, name: &'static str) -> AttributeBinding {
        AttributeBinding {
            element: self.clone(),
            name,
        }
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.tag_name())
            .field("attributes", &self.data.attributes)
            .finish()
    }
}

#[derive(Clone, Debug)]
/// The getter and setter pair of a single attribute of an element.
///
/// Missing attributes read as `None`, and writing an empty value removes the attribute.
pub struct AttributeBinding {
    element: Element,
    name: &'static str,
}

impl AttributeBinding {
    /// The qualified name of the bound attribute
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The element owning the bound attribute
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Reads the attribute's value
    pub fn get(&self) -> Option<Atom> {
        self.element.get_attribute(self.name)
    }

    /// Sets the attribute's value, or removes the attribute when the value is missing or empty
    pub fn set(&self, value: Option<&str>) {
        match value {
            Some(value) if !value.is_empty() => {
                log::debug!("setting `{}` to `{value}`", self.name);
                self.element.set_attribute(self.name, value);
            }
            _ => {
                log::debug!("removing `{}`", self.name);
                self.element.remove_attribute(self.name);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn attributes() {
        let element = Element::new("svg:mask");
        assert_eq!(&**element.local_name(), "mask");
        assert_eq!(element.prefix().map(|p| &**p), Some("svg"));
        assert_eq!(element.tag_name(), "svg:mask");

        element.set_attribute("x", "10");
        assert!(element.has_attribute("x"));
        assert_eq!(element.get_attribute("x").as_deref(), Some("10"));
        element.remove_attribute("x");
        assert!(!element.has_attribute("x"));
        element.remove_attribute("x");
        assert!(element.get_attribute_names().is_empty());
    }

    #[test]
    fn handles_share_attributes() {
        let element = Element::new("pattern");
        let handle = element.clone();
        handle.set_attribute("href", "#tile");
        assert!(element.ptr_eq(&handle));
        assert_eq!(element.get_attribute("href").as_deref(), Some("#tile"));
        assert!(!element.ptr_eq(&Element::new("pattern")));
    }

    #[test]
    fn binding() {
        let element = Element::new("mask");
        let binding = element.bind("width");
        assert_eq!(binding.name(), "width");
        assert_eq!(binding.get(), None);

        binding.set(Some("5"));
        assert_eq!(element.get_attribute("width").as_deref(), Some("5"));
        assert!(binding.element().ptr_eq(&element));

        binding.set(Some(""));
        assert!(!element.has_attribute("width"));

        element.set_attribute("width", "7");
        binding.set(None);
        assert!(!element.has_attribute("width"));
    }
}
