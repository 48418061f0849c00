//! Configuration shared by the elements of a document
use svgdom_collections::attribute::{LengthContext, Viewport};
use svgdom_serialize::PrinterOptions;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// Options that control how reflected values are resolved and written
pub struct DocumentOptions {
    /// The font size in user units used to resolve `em` and `ex` lengths
    pub font_size: f32,
    /// The viewport used to resolve percentage lengths
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub viewport: Option<Viewport>,
    /// The number of decimal places numbers are rounded to when written to an attribute
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub precision: Option<u8>,
    /// Whether numbers written to an attribute drop redundant characters, such as the leading
    /// zero of `0.5`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub minify: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        let LengthContext {
            font_size,
            viewport,
        } = LengthContext::default();
        Self {
            font_size,
            viewport,
            precision: None,
            minify: false,
        }
    }
}

impl DocumentOptions {
    /// Parses options from a JSON object, e.g. `{ "fontSize": 12 }`
    ///
    /// # Errors
    /// If the JSON is invalid or doesn't describe the options
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The context used to convert lengths between units
    pub fn length_context(&self) -> LengthContext {
        LengthContext {
            font_size: self.font_size,
            viewport: self.viewport,
        }
    }

    /// The options used to serialize values written to attributes
    pub fn printer_options(&self) -> PrinterOptions {
        PrinterOptions {
            minify: self.minify,
            precision: self.precision,
        }
    }
}
