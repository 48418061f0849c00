use svgdom_collections::attribute::{Matrix, Transform, TransformList};

use super::{read_parsed, write_value};
use crate::{element::AttributeBinding, error::DomError, property::Reflect};

#[derive(Debug)]
/// A reflected transform list attribute, such as `patternTransform`
///
/// [MDN | SVGAnimatedTransformList](https://developer.mozilla.org/en-US/docs/Web/API/SVGAnimatedTransformList)
pub struct AnimatedTransformList {
    binding: AttributeBinding,
}

impl Reflect for AnimatedTransformList {
    type Options = ();

    fn reflect(binding: AttributeBinding, (): ()) -> Self {
        Self { binding }
    }
}

impl AnimatedTransformList {
    /// Returns a live, writable view of the attribute's transforms
    pub fn base_val(&self) -> SvgTransformList {
        SvgTransformList {
            binding: self.binding.clone(),
            read_only: false,
        }
    }

    /// Returns a live, read-only view of the attribute's transforms
    pub fn anim_val(&self) -> SvgTransformList {
        SvgTransformList {
            binding: self.binding.clone(),
            read_only: true,
        }
    }
}

#[derive(Debug, Clone)]
/// A view of a transform list attribute.
///
/// Items are returned by value; changes to the list are made through its methods, each of
/// which writes the whole list back to the attribute. A missing or invalid attribute reads as
/// an empty list, and emptying the list removes the attribute.
///
/// [MDN | SVGTransformList](https://developer.mozilla.org/en-US/docs/Web/API/SVGTransformList)
pub struct SvgTransformList {
    binding: AttributeBinding,
    read_only: bool,
}

impl SvgTransformList {
    /// Returns the parsed transforms of the attribute
    pub fn items(&self) -> TransformList {
        read_parsed(&self.binding).unwrap_or_default()
    }

    /// Whether writes to this view are rejected
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the number of transforms in the list
    pub fn number_of_items(&self) -> usize {
        self.items().0.len()
    }

    /// Alias of [`SvgTransformList::number_of_items`]
    pub fn length(&self) -> usize {
        self.number_of_items()
    }

    /// Removes every transform, and so the attribute
    ///
    /// # Errors
    /// If the view is read-only
    pub fn clear(&self) -> Result<(), DomError> {
        self.check_writable()?;
        self.binding.set(None);
        Ok(())
    }

    /// Replaces the list with a single transform
    ///
    /// # Errors
    /// If the view is read-only, or the transform has a non-finite argument
    pub fn initialize(&self, item: Transform) -> Result<Transform, DomError> {
        self.check_writable()?;
        self.check_finite(&item)?;
        self.write(&TransformList(vec![item]))?;
        Ok(item)
    }

    /// Returns the transform at `index`
    ///
    /// # Errors
    /// If the index is out of range
    pub fn get_item(&self, index: usize) -> Result<Transform, DomError> {
        let TransformList(items) = self.items();
        items.get(index).copied().ok_or(DomError::IndexSize {
            index,
            length: items.len(),
        })
    }

    /// Inserts a transform before the one at `index`, or at the end when `index` is past it
    ///
    /// # Errors
    /// If the view is read-only, or the transform has a non-finite argument
    pub fn insert_item_before(&self, item: Transform, index: usize) -> Result<Transform, DomError> {
        self.check_writable()?;
        self.check_finite(&item)?;
        let mut list = self.items();
        let index = index.min(list.0.len());
        list.0.insert(index, item);
        self.write(&list)?;
        Ok(item)
    }

    /// Replaces the transform at `index`
    ///
    /// # Errors
    /// If the view is read-only, the transform has a non-finite argument, or the index is out
    /// of range
    pub fn replace_item(&self, item: Transform, index: usize) -> Result<Transform, DomError> {
        self.check_writable()?;
        self.check_finite(&item)?;
        let mut list = self.items();
        let length = list.0.len();
        let slot = list
            .0
            .get_mut(index)
            .ok_or(DomError::IndexSize { index, length })?;
        *slot = item;
        self.write(&list)?;
        Ok(item)
    }

    /// Removes and returns the transform at `index`
    ///
    /// # Errors
    /// If the view is read-only, or the index is out of range
    pub fn remove_item(&self, index: usize) -> Result<Transform, DomError> {
        self.check_writable()?;
        let mut list = self.items();
        let length = list.0.len();
        if index >= length {
            return Err(DomError::IndexSize { index, length });
        }
        let item = list.0.remove(index);
        self.write(&list)?;
        Ok(item)
    }

    /// Adds a transform to the end of the list
    ///
    /// # Errors
    /// If the view is read-only, or the transform has a non-finite argument
    pub fn append_item(&self, item: Transform) -> Result<Transform, DomError> {
        self.check_writable()?;
        self.check_finite(&item)?;
        let mut list = self.items();
        list.0.push(item);
        self.write(&list)?;
        Ok(item)
    }

    /// Replaces the list with a single matrix equivalent to all of its transforms, returning
    /// that matrix, or `None` if the list is empty
    ///
    /// # Errors
    /// If the view is read-only
    pub fn consolidate(&self) -> Result<Option<Transform>, DomError> {
        self.check_writable()?;
        let list = self.items();
        if list.0.is_empty() {
            return Ok(None);
        }
        let item = Transform::matrix_of(list.to_matrix());
        self.write(&TransformList(vec![item]))?;
        Ok(Some(item))
    }

    /// Creates a matrix transform, without adding it to the list
    pub fn create_svg_transform_from_matrix(&self, matrix: Matrix) -> Transform {
        Transform::matrix_of(matrix)
    }

    fn check_writable(&self) -> Result<(), DomError> {
        if self.read_only {
            Err(DomError::NoModificationAllowed(self.binding.name()))
        } else {
            Ok(())
        }
    }

    fn check_finite(&self, item: &Transform) -> Result<(), DomError> {
        if item.is_finite() {
            Ok(())
        } else {
            Err(DomError::Type(format!(
                "the transform provided for `{}` has a non-finite argument",
                self.binding.name()
            )))
        }
    }

    fn write(&self, list: &TransformList) -> Result<(), DomError> {
        if list.0.is_empty() {
            self.binding.set(None);
            Ok(())
        } else {
            write_value(&self.binding, list)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Element;

    fn pattern_transform(element: &Element) -> AnimatedTransformList {
        AnimatedTransformList::reflect(element.bind("patternTransform"), ())
    }

    #[test]
    fn read() {
        let element = Element::new("pattern");
        let list = pattern_transform(&element).base_val();
        assert_eq!(list.number_of_items(), 0);

        element.set_attribute("patternTransform", "translate(5 5) rotate(30)");
        assert_eq!(list.length(), 2);
        assert_eq!(list.get_item(1), Ok(Transform::rotate(30.0, 0.0, 0.0)));
        assert_eq!(
            list.get_item(2),
            Err(DomError::IndexSize {
                index: 2,
                length: 2
            })
        );

        element.set_attribute("patternTransform", "translate(5 5) wobble(1)");
        assert_eq!(list.number_of_items(), 0);
    }

    #[test]
    fn edit() {
        let element = Element::new("pattern");
        let list = pattern_transform(&element).base_val();
        let value = || element.get_attribute("patternTransform").map(|v| v.to_string());

        list.append_item(Transform::scale(2.0, 2.0)).unwrap();
        insta::assert_snapshot!(value().unwrap(), @"scale(2)");

        list.insert_item_before(Transform::translate(10.0, 0.0), 0)
            .unwrap();
        list.insert_item_before(Transform::skew_x(15.0), 99).unwrap();
        insta::assert_snapshot!(value().unwrap(), @"translate(10) scale(2) skewX(15)");

        list.replace_item(Transform::skew_y(5.0), 2).unwrap();
        assert!(matches!(
            list.replace_item(Transform::skew_y(5.0), 3),
            Err(DomError::IndexSize { .. })
        ));
        assert_eq!(list.remove_item(0), Ok(Transform::translate(10.0, 0.0)));
        insta::assert_snapshot!(value().unwrap(), @"scale(2) skewY(5)");

        list.initialize(Transform::rotate(90.0, 1.0, 2.0)).unwrap();
        insta::assert_snapshot!(value().unwrap(), @"rotate(90 1 2)");

        list.remove_item(0).unwrap();
        assert_eq!(value(), None);

        list.append_item(Transform::scale(1.0, 3.0)).unwrap();
        list.clear().unwrap();
        assert_eq!(value(), None);
    }

    #[test]
    fn consolidate() {
        let element = Element::new("pattern");
        let list = pattern_transform(&element).base_val();
        assert_eq!(list.consolidate(), Ok(None));
        assert!(!element.has_attribute("patternTransform"));

        element.set_attribute("patternTransform", "translate(10 20) scale(2)");
        let consolidated = list.consolidate().unwrap();
        let matrix = Matrix {
            a: 2.0,
            d: 2.0,
            e: 10.0,
            f: 20.0,
            ..Matrix::IDENTITY
        };
        assert_eq!(consolidated, Some(Transform::matrix_of(matrix)));
        insta::assert_snapshot!(
            element.get_attribute("patternTransform").unwrap().to_string(),
            @"matrix(2 0 0 2 10 20)"
        );
        assert_eq!(
            list.create_svg_transform_from_matrix(Matrix::IDENTITY).type_code(),
            1
        );
        assert_eq!(list.number_of_items(), 1);
    }

    #[test]
    fn rejects_non_finite() {
        let element = Element::new("pattern");
        let list = pattern_transform(&element).base_val();
        element.set_attribute("patternTransform", "translate(1 2) scale(3)");

        let nan = Transform::scale(f32::NAN, 1.0);
        assert!(matches!(list.append_item(nan), Err(DomError::Type(_))));
        assert!(matches!(list.insert_item_before(nan, 0), Err(DomError::Type(_))));
        assert!(matches!(
            list.replace_item(Transform::skew_x(f32::INFINITY), 1),
            Err(DomError::Type(_))
        ));
        assert!(matches!(
            list.initialize(Transform::rotate(0.0, f32::NEG_INFINITY, 0.0)),
            Err(DomError::Type(_))
        ));

        assert_eq!(list.number_of_items(), 2);
        assert_eq!(
            element.get_attribute("patternTransform").as_deref(),
            Some("translate(1 2) scale(3)")
        );
    }

    #[test]
    fn anim_val_is_read_only() {
        let element = Element::new("pattern");
        let transform = pattern_transform(&element);
        let anim_val = transform.anim_val();
        assert!(anim_val.is_read_only());
        assert_eq!(
            anim_val.append_item(Transform::default()),
            Err(DomError::NoModificationAllowed("patternTransform"))
        );
        assert!(anim_val.clear().is_err());

        transform
            .base_val()
            .append_item(Transform::translate(1.0, 2.0))
            .unwrap();
        assert_eq!(anim_val.get_item(0), Ok(Transform::translate(1.0, 2.0)));
    }
}
