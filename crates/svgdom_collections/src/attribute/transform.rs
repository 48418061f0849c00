//! The transform list attribute type
use itertools::Itertools as _;
use smallvec::SmallVec;
use svgdom_parse::{error::Error, Parse, Parser};
use svgdom_serialize::{error::PrinterError, Printer, ToValue};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A 2D affine matrix of the form `[a c e; b d f; 0 0 1]`
///
/// [MDN | DOMMatrix](https://developer.mozilla.org/en-US/docs/Web/API/DOMMatrix)
#[allow(missing_docs)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// The matrix which doesn't transform anything
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Returns `self × other`, i.e. `other` is applied first
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Whether the matrix is the identity matrix
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A single transform function of a transform list
///
/// [w3 | SVG 2](https://svgwg.org/svg2-draft/coords.html#InterfaceSVGTransform)
pub enum Transform {
    /// A transformation as the matrix of six values
    Matrix(Matrix),
    /// A positional transformation in an `x` and/or `y` direction
    Translate(f32, f32),
    /// A size transformation in an `x` and/or `y` direction
    Scale(f32, f32),
    /// A rotational transform by `a` degrees around an `x` and `y` origin
    Rotate(f32, f32, f32),
    /// A skew transform in the `x` direction, in degrees
    SkewX(f32),
    /// A skew transform in the `y` direction, in degrees
    SkewY(f32),
}

impl Default for Transform {
    fn default() -> Self {
        Self::Matrix(Matrix::IDENTITY)
    }
}

impl Transform {
    /// Creates a transform from a matrix
    pub fn matrix_of(matrix: Matrix) -> Self {
        Self::Matrix(matrix)
    }

    /// Creates a translation by `tx` and `ty`
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::Translate(tx, ty)
    }

    /// Creates a scale by `sx` and `sy`
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::Scale(sx, sy)
    }

    /// Creates a rotation by `angle` degrees around `cx` and `cy`
    pub fn rotate(angle: f32, cx: f32, cy: f32) -> Self {
        Self::Rotate(angle, cx, cy)
    }

    /// Creates a skew along the x-axis by `angle` degrees
    pub fn skew_x(angle: f32) -> Self {
        Self::SkewX(angle)
    }

    /// Creates a skew along the y-axis by `angle` degrees
    pub fn skew_y(angle: f32) -> Self {
        Self::SkewY(angle)
    }

    /// Returns the SVG DOM transform type, e.g. `SVG_TRANSFORM_ROTATE` (`4`)
    pub fn type_code(&self) -> u16 {
        match self {
            Self::Matrix(_) => 1,
            Self::Translate(..) => 2,
            Self::Scale(..) => 3,
            Self::Rotate(..) => 4,
            Self::SkewX(_) => 5,
            Self::SkewY(_) => 6,
        }
    }

    /// Whether every argument of the transform is a finite number
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::Matrix(Matrix { a, b, c, d, e, f }) => {
                [a, b, c, d, e, f].iter().all(|n| n.is_finite())
            }
            Self::Translate(x, y) | Self::Scale(x, y) => x.is_finite() && y.is_finite(),
            Self::Rotate(angle, x, y) => angle.is_finite() && x.is_finite() && y.is_finite(),
            Self::SkewX(angle) | Self::SkewY(angle) => angle.is_finite(),
        }
    }

    /// Returns the angle of rotations and skews, or `0` for other transforms
    pub fn angle(&self) -> f32 {
        match self {
            Self::Rotate(angle, ..) | Self::SkewX(angle) | Self::SkewY(angle) => *angle,
            _ => 0.0,
        }
    }

    /// Returns the matrix equivalent of the transform
    pub fn matrix(&self) -> Matrix {
        match *self {
            Self::Matrix(matrix) => matrix,
            Self::Translate(e, f) => Matrix {
                e,
                f,
                ..Matrix::IDENTITY
            },
            Self::Scale(a, d) => Matrix {
                a,
                d,
                ..Matrix::IDENTITY
            },
            Self::Rotate(angle, cx, cy) => {
                let (sin, cos) = angle.to_radians().sin_cos();
                Matrix {
                    a: cos,
                    b: sin,
                    c: -sin,
                    d: cos,
                    e: (1.0 - cos) * cx + sin * cy,
                    f: (1.0 - cos) * cy - sin * cx,
                }
            }
            Self::SkewX(angle) => Matrix {
                c: angle.to_radians().tan(),
                ..Matrix::IDENTITY
            },
            Self::SkewY(angle) => Matrix {
                b: angle.to_radians().tan(),
                ..Matrix::IDENTITY
            },
        }
    }
}

fn parse_args<'input>(input: &mut Parser<'input>) -> Result<SmallVec<[f32; 6]>, Error<'input>> {
    let mut args = SmallVec::new();
    input.skip_whitespace();
    input.expect_char('(')?;
    input.skip_whitespace();
    let mut trailing_comma = false;
    while let Ok(arg) = input.try_parse(f32::parse) {
        args.push(arg);
        input.skip_whitespace();
        trailing_comma = matches!(input.current(), Ok(','));
        input.skip_comma_whitespace();
    }
    if trailing_comma {
        return Err(Error::InvalidNumber);
    }
    input.expect_char(')')?;
    Ok(args)
}

impl<'input> Parse<'input> for Transform {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        let function = input.expect_ident()?;
        let args = parse_args(input)?;
        Ok(match (function, args.as_slice()) {
            ("matrix", &[a, b, c, d, e, f]) => Self::Matrix(Matrix { a, b, c, d, e, f }),
            ("translate", &[x]) => Self::Translate(x, 0.0),
            ("translate", &[x, y]) => Self::Translate(x, y),
            ("scale", &[x]) => Self::Scale(x, x),
            ("scale", &[x, y]) => Self::Scale(x, y),
            ("rotate", &[angle]) => Self::Rotate(angle, 0.0, 0.0),
            ("rotate", &[angle, x, y]) => Self::Rotate(angle, x, y),
            ("skewX", &[angle]) => Self::SkewX(angle),
            ("skewY", &[angle]) => Self::SkewY(angle),
            ("matrix" | "translate" | "scale" | "rotate" | "skewX" | "skewY", _) => {
                log::debug!("wrong number of arguments for `{function}`: {args:?}");
                return Err(Error::InvalidNumber);
            }
            (function, _) => return Err(Error::UnknownFunction(function)),
        })
    }
}

impl ToValue for Transform {
    fn write_value<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
    where
        W: std::fmt::Write,
    {
        fn write_args<W: std::fmt::Write>(
            dest: &mut Printer<W>,
            name: &str,
            args: &[f32],
        ) -> Result<(), PrinterError> {
            dest.write_str(name)?;
            dest.write_char('(')?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    dest.write_char(' ')?;
                }
                arg.write_value(dest)?;
            }
            dest.write_char(')')
        }

        match *self {
            Self::Matrix(Matrix { a, b, c, d, e, f }) => {
                write_args(dest, "matrix", &[a, b, c, d, e, f])
            }
            Self::Translate(x, y) if y == 0.0 => write_args(dest, "translate", &[x]),
            Self::Translate(x, y) => write_args(dest, "translate", &[x, y]),
            Self::Scale(x, y) if x == y => write_args(dest, "scale", &[x]),
            Self::Scale(x, y) => write_args(dest, "scale", &[x, y]),
            Self::Rotate(angle, x, y) if x == 0.0 && y == 0.0 => {
                write_args(dest, "rotate", &[angle])
            }
            Self::Rotate(angle, x, y) => write_args(dest, "rotate", &[angle, x, y]),
            Self::SkewX(angle) => write_args(dest, "skewX", &[angle]),
            Self::SkewY(angle) => write_args(dest, "skewY", &[angle]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A list of transform definitions applied to an element and it's children.
///
/// [MDN | transform](https://developer.mozilla.org/en-US/docs/Web/SVG/Reference/Attribute/transform)
pub struct TransformList(pub Vec<Transform>);

impl TransformList {
    /// Returns the single matrix equivalent to applying every transform in order
    pub fn to_matrix(&self) -> Matrix {
        self.0
            .iter()
            .fold(Matrix::IDENTITY, |matrix, transform| {
                matrix.multiply(&transform.matrix())
            })
    }
}

impl<'input> Parse<'input> for TransformList {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        let mut result = Vec::new();
        input.skip_whitespace();
        while !input.is_empty() {
            result.push(Transform::parse(input)?);
            input.skip_comma_whitespace();
        }
        Ok(Self(result))
    }
}

impl ToValue for TransformList {
    fn write_value<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
    where
        W: std::fmt::Write,
    {
        let separator = if dest.options().minify { "" } else { " " };
        let items: Vec<String> = self
            .0
            .iter()
            .map(|item| item.to_value_string(*dest.options()))
            .collect::<Result<_, _>>()?;
        dest.write_str(&items.iter().join(separator))
    }
}

#[test]
fn transform_list() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        TransformList::parse_string("translate(10) scale(2, 3)"),
        Ok(TransformList(vec![
            Transform::Translate(10.0, 0.0),
            Transform::Scale(2.0, 3.0),
        ]))
    );
    assert_eq!(
        TransformList::parse_string("rotate (45 1 1),skewX(10)"),
        Ok(TransformList(vec![
            Transform::Rotate(45.0, 1.0, 1.0),
            Transform::SkewX(10.0),
        ]))
    );
    assert_eq!(
        TransformList::parse_string("matrix(1 0 0 1 5 6)"),
        Ok(TransformList(vec![Transform::Matrix(Matrix {
            e: 5.0,
            f: 6.0,
            ..Matrix::IDENTITY
        })]))
    );
    assert_eq!(TransformList::parse_string("  "), Ok(TransformList(vec![])));

    assert_eq!(
        TransformList::parse_string("spin(1)"),
        Err(Error::UnknownFunction("spin"))
    );
    assert_eq!(
        TransformList::parse_string("rotate(1 2)"),
        Err(Error::InvalidNumber)
    );
    assert!(TransformList::parse_string("scale(1").is_err());
    assert_eq!(
        TransformList::parse_string("scale(2,)"),
        Err(Error::InvalidNumber)
    );
    assert_eq!(
        TransformList::parse_string("translate(1 2,)"),
        Err(Error::InvalidNumber)
    );
    assert_eq!(
        TransformList::parse_string("translate(1 , 2)"),
        Ok(TransformList(vec![Transform::Translate(1.0, 2.0)]))
    );
}

#[test]
fn transform_list_to_value() {
    let list = TransformList(vec![
        Transform::Translate(10.0, 20.0),
        Transform::Scale(2.0, 2.0),
        Transform::Rotate(45.0, 0.0, 0.0),
    ]);
    insta::assert_snapshot!(
        list.to_value_string(svgdom_serialize::PrinterOptions::default()).unwrap(),
        @"translate(10 20) scale(2) rotate(45)"
    );
    insta::assert_snapshot!(
        list.to_value_string(svgdom_serialize::PrinterOptions { minify: true, precision: None }).unwrap(),
        @"translate(10 20)scale(2)rotate(45)"
    );
}

#[test]
fn matrix() {
    let list = TransformList(vec![
        Transform::Translate(10.0, 0.0),
        Transform::Scale(2.0, 2.0),
    ]);
    assert_eq!(
        list.to_matrix(),
        Matrix {
            a: 2.0,
            d: 2.0,
            e: 10.0,
            ..Matrix::IDENTITY
        }
    );
    assert_eq!(Transform::SkewX(0.0).matrix(), Matrix::IDENTITY);
    assert_eq!(Transform::Rotate(90.0, 0.0, 0.0).angle(), 90.0);
    assert_eq!(Transform::Scale(1.0, 1.0).type_code(), 3);
    assert!(Transform::Rotate(1.0, 2.0, 3.0).is_finite());
    assert!(!Transform::Scale(f32::NAN, 1.0).is_finite());
    assert!(!Transform::Rotate(0.0, 0.0, f32::INFINITY).is_finite());
}
