//! Keyword attribute types

enum_attr!(
    /// Defines the coordinate system for an element's geometry or content.
    ///
    /// [w3](https://drafts.fxtf.org/css-masking/#element-attrdef-mask-maskunits)
    #[derive(Default)]
    Units {
        /// Values are absolute values relative to a reference box (i.e. the user coordinate system)
        #[default]
        UserSpaceOnUse: "userSpaceOnUse",
        /// Values are relative units relative to the element's bounding box
        ObjectBoundingBox: "objectBoundingBox",
    }
);

enum_attr!(
    /// Indicates what happens if the gradient starts or ends inside the bounds of the target rectangle.
    ///
    /// [w3](https://svgwg.org/svg2-draft/pservers.html#LinearGradientElementSpreadMethodAttribute)
    #[derive(Default)]
    SpreadMethod {
        /// Use the terminal colors of the gradient to fill the remainder of the target region.
        #[default]
        Pad: "pad",
        /// Reflect the gradient pattern continuously until the target rectangle is filled.
        Reflect: "reflect",
        /// Repeat the gradient pattern continuously until the target region is filled.
        Repeat: "repeat",
    }
);

#[test]
fn units() {
    use svgdom_parse::Parse as _;
    use svgdom_serialize::ToValue as _;

    assert_eq!(
        Units::parse_string("objectBoundingBox"),
        Ok(Units::ObjectBoundingBox)
    );
    assert!(Units::parse_string("objectboundingbox").is_err());
    assert_eq!(Units::VALUES, &["userSpaceOnUse", "objectBoundingBox"]);
    assert_eq!(
        Units::default()
            .to_value_string(svgdom_serialize::PrinterOptions::default())
            .unwrap(),
        "userSpaceOnUse"
    );
}

#[test]
fn spread_method() {
    use svgdom_parse::Parse as _;

    assert_eq!(SpreadMethod::parse_string(" reflect "), Ok(SpreadMethod::Reflect));
    assert_eq!(SpreadMethod::VALUES, &["pad", "reflect", "repeat"]);
    assert_eq!(SpreadMethod::default().as_str(), "pad");
}
