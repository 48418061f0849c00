//! Value types for the SVG attributes reflected by `svgdom`

pub mod attribute;
