//! Types for the values of reflected attributes
//!
//! Each type can be read from an attribute's value with [`svgdom_parse::Parse`] and written
//! back with [`svgdom_serialize::ToValue`].

pub use svgdom_parse::Parse;

/// Defines a keyword attribute, as an enum of its legal values.
///
/// Besides parsing and serializing, the enum exposes its legal values in declaration order
/// through `VALUES`, which is what enumeration wrappers index into.
macro_rules! enum_attr {
    (
        $(#[$outer:meta])*
        $attr:ident { $(
            $(#[$meta:meta])*
            $name:ident: $value:literal$(,)?
        )+}
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $(#[$outer])*
        pub enum $attr {
            $(
                $(#[$meta])*
                #[cfg_attr(feature = "serde", serde(rename = $value))]
                $name,
            )+
        }

        impl $attr {
            /// The legal values of the attribute, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the attribute value of the keyword
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => $value,)+
                }
            }
        }

        impl std::fmt::Display for $attr {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'input> svgdom_parse::Parse<'input> for $attr {
            fn parse(
                input: &mut svgdom_parse::Parser<'input>,
            ) -> Result<Self, svgdom_parse::error::Error<'input>> {
                let str = input.expect_ident()?;
                match str {
                    $($value => Ok($attr::$name),)+
                    received => Err(svgdom_parse::error::Error::ExpectedIdent {
                        expected: concat!("one of", $(" `", $value, "`"),+),
                        received,
                    })
                }
            }
        }

        impl svgdom_serialize::ToValue for $attr {
            fn write_value<W>(
                &self,
                dest: &mut svgdom_serialize::Printer<W>,
            ) -> Result<(), svgdom_serialize::error::PrinterError>
            where
                W: std::fmt::Write,
            {
                dest.write_str(self.as_str())
            }
        }
    };
}

pub mod length;
pub mod transform;
pub mod uncategorised;

pub use length::{Length, LengthContext, LengthDirection, LengthUnit, Viewport};
pub use transform::{Matrix, Transform, TransformList};
pub use uncategorised::{SpreadMethod, Units};
