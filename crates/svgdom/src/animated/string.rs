use crate::{element::AttributeBinding, property::Reflect};

#[derive(Debug)]
/// A reflected string attribute, such as `href`
///
/// [MDN | SVGAnimatedString](https://developer.mozilla.org/en-US/docs/Web/API/SVGAnimatedString)
pub struct AnimatedString {
    binding: AttributeBinding,
}

impl Reflect for AnimatedString {
    type Options = ();

    fn reflect(binding: AttributeBinding, (): ()) -> Self {
        Self { binding }
    }
}

impl AnimatedString {
    /// Returns the attribute's value, or an empty string when missing
    pub fn base_val(&self) -> String {
        self.binding
            .get()
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    /// Sets the attribute's value, removing the attribute when empty
    pub fn set_base_val(&self, value: &str) {
        self.binding.set(Some(value));
    }

    /// Returns the current animated value, which is always the base value
    pub fn anim_val(&self) -> String {
        self.base_val()
    }
}

#[test]
fn string() {
    let element = crate::Element::new("pattern");
    let href = AnimatedString::reflect(element.bind("href"), ());
    assert_eq!(href.base_val(), "");

    href.set_base_val("#checkers");
    assert_eq!(element.get_attribute("href").as_deref(), Some("#checkers"));
    assert_eq!(href.anim_val(), "#checkers");

    element.set_attribute("href", "#stripes");
    assert_eq!(href.base_val(), "#stripes");

    href.set_base_val("");
    assert!(!element.has_attribute("href"));
}
