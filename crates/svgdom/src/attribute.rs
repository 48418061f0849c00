//! Storage for the attributes of an element
use std::{
    cell::{self, RefCell},
    fmt::{Debug, Display},
    rc::Rc,
};

use crate::Atom;

#[derive(PartialEq, Eq, Clone, Debug, Hash)]
/// A qualified name used for the names of tags and attributes.
pub struct QualName {
    /// The prefix (e.g. `xlink` of `xlink:href`) of a qualified name.
    pub prefix: Option<Atom>,
    /// The local name (e.g. `href` of `xlink:href`) of a qualified name.
    pub local: Atom,
}

impl QualName {
    /// Splits a qualified name, such as `xlink:href`, into its prefix and local name
    pub fn parse(qualified_name: &str) -> Self {
        match qualified_name.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.into()),
                local: local.into(),
            },
            None => Self {
                prefix: None,
                local: qualified_name.into(),
            },
        }
    }

    /// Whether this matches a qualified name, such as `xlink:href`, exactly
    pub fn matches(&self, qualified_name: &str) -> bool {
        match (&self.prefix, qualified_name.split_once(':')) {
            (Some(prefix), Some((other_prefix, local))) => {
                &**prefix == other_prefix && &*self.local == local
            }
            (None, None) => &*self.local == qualified_name,
            _ => false,
        }
    }
}

impl Display for QualName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
/// One of an element's attributes.
///
/// [MDN | Attr](https://developer.mozilla.org/en-US/docs/Web/API/Attr)
pub struct Attr {
    /// The name of an attribute (e.g. `foo` of `foo="bar"`)
    pub name: QualName,
    /// The value of an attribute (e.g. `"bar"` of `foo="bar"`)
    pub value: Atom,
}

#[derive(Clone, Default)]
/// The list of attributes of an element, shared by every handle to that element.
///
/// [MDN | NamedNodeMap](https://developer.mozilla.org/en-US/docs/Web/API/NamedNodeMap)
pub struct Attributes(Rc<RefCell<Vec<Attr>>>);

impl Attributes {
    /// The number of attributes stored in the collection.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether there are no attributes stored in the collection
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the attribute at the given index
    ///
    /// [MDN | item](https://developer.mozilla.org/en-US/docs/Web/API/NamedNodeMap/item)
    pub fn item(&self, index: usize) -> Option<cell::Ref<'_, Attr>> {
        cell::Ref::filter_map(self.0.borrow(), |v| v.get(index)).ok()
    }

    /// Returns the value of the attribute matching the qualified name
    ///
    /// [MDN | getNamedItem](https://developer.mozilla.org/en-US/docs/Web/API/NamedNodeMap/getNamedItem)
    pub fn get_named_item(&self, qualified_name: &str) -> Option<Atom> {
        self.0
            .borrow()
            .iter()
            .find(|attr| attr.name.matches(qualified_name))
            .map(|attr| attr.value.clone())
    }

    /// Sets the value of the attribute matching the qualified name, appending it if it's new.
    ///
    /// Returns the replaced value, if any.
    ///
    /// [MDN | setNamedItem](https://developer.mozilla.org/en-US/docs/Web/API/NamedNodeMap/setNamedItem)
    pub fn set_named_item(&self, qualified_name: &str, value: Atom) -> Option<Atom> {
        let mut attrs = self.0.borrow_mut();
        if let Some(attr) = attrs
            .iter_mut()
            .find(|attr| attr.name.matches(qualified_name))
        {
            return Some(std::mem::replace(&mut attr.value, value));
        }
        attrs.push(Attr {
            name: QualName::parse(qualified_name),
            value,
        });
        None
    }

    /// Removes the attribute matching the qualified name.
    ///
    /// [MDN | removeNamedItem](https://developer.mozilla.org/en-US/docs/Web/API/NamedNodeMap/removeNamedItem)
    pub fn remove_named_item(&self, qualified_name: &str) -> Option<Attr> {
        let mut attrs = self.0.borrow_mut();
        let index = attrs
            .iter()
            .position(|attr| attr.name.matches(qualified_name))?;
        Some(attrs.remove(index))
    }

    /// Returns the qualified names of each attribute, in insertion order
    pub fn names(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .map(|attr| attr.name.to_string())
            .collect()
    }
}

impl Debug for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Attributes { ")?;
        self.0
            .borrow()
            .iter()
            .try_for_each(|a| write!(f, r#"{}="{}" "#, a.name, a.value))?;
        f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn named_items() {
        let attributes = Attributes::default();
        assert!(attributes.is_empty());

        assert_eq!(attributes.set_named_item("x", "1".into()), None);
        assert_eq!(attributes.set_named_item("xlink:href", "#a".into()), None);
        assert_eq!(
            attributes.set_named_item("x", "2".into()),
            Some(Atom::from("1"))
        );
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get_named_item("x"), Some(Atom::from("2")));
        assert_eq!(attributes.get_named_item("href"), None);
        assert_eq!(
            attributes.get_named_item("xlink:href"),
            Some(Atom::from("#a"))
        );
        assert_eq!(attributes.names(), vec!["x", "xlink:href"]);

        let removed = attributes.remove_named_item("x").unwrap();
        assert_eq!(&*removed.value, "2");
        assert_eq!(attributes.remove_named_item("x"), None);
        assert_eq!(attributes.item(0).unwrap().name.to_string(), "xlink:href");
    }

    #[test]
    fn names_are_case_sensitive() {
        let attributes = Attributes::default();
        attributes.set_named_item("maskUnits", "objectBoundingBox".into());
        assert_eq!(attributes.get_named_item("maskunits"), None);
        insta::assert_snapshot!(format!("{attributes:?}"), @r#"Attributes { maskUnits="objectBoundingBox" }"#);
    }
}
