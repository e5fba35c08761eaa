//! Human-readable form of types, as quoted verbatim in diagnostics.
//!
//! ```text
//! any  null  number  bool  string
//! object                     open object with no known props
//! {}                         strict object with no known props
//! {string => number}         mapped object
//! {a: number; b: string}     keyed object
//! array<string>
//! ```

use std::fmt;

use crate::expr_type::ExprType;
use crate::object::ObjectType;

/// Configuration for rendering types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Order object props by name instead of insertion order.
    pub(crate) sort_fields: bool,
}

impl FormatConfig {
    /// Create a new FormatConfig with default values.
    pub const fn new() -> Self {
        Self { sort_fields: false }
    }

    /// Set whether object props are ordered by name.
    pub fn sort_fields(mut self, value: bool) -> Self {
        self.sort_fields = value;
        self
    }
}

static DEFAULT_CONFIG: FormatConfig = FormatConfig::new();

/// A type paired with the configuration used to display it.
pub struct Rendered<'a> {
    ty: &'a ExprType,
    config: &'a FormatConfig,
}

impl ExprType {
    /// Display this type using `config` instead of the defaults.
    pub fn display_with<'a>(&'a self, config: &'a FormatConfig) -> Rendered<'a> {
        Rendered { ty: self, config }
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&DEFAULT_CONFIG), f)
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            ExprType::Any => f.write_str("any"),
            ExprType::Null => f.write_str("null"),
            ExprType::Number => f.write_str("number"),
            ExprType::Bool => f.write_str("bool"),
            ExprType::String => f.write_str("string"),
            ExprType::Object(obj) => self.fmt_object(obj, f),
            ExprType::Array(arr) => write!(f, "array<{}>", self.nested(arr.elem())),
        }
    }
}

impl<'a> Rendered<'a> {
    fn nested(&self, ty: &'a ExprType) -> Rendered<'a> {
        Rendered {
            ty,
            config: self.config,
        }
    }

    fn fmt_object(&self, obj: &'a ObjectType, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = obj.mapped_type() {
            return write!(f, "{{string => {}}}", self.nested(value));
        }
        if obj.is_empty() && obj.is_open() {
            return f.write_str("object");
        }

        let mut props: Vec<_> = obj.props().into_iter().flatten().collect();
        if self.config.sort_fields {
            props.sort_by(|(a, _), (b, _)| a.cmp(b));
        }

        f.write_str("{")?;
        for (i, (name, ty)) in props.into_iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", name, self.nested(ty))?;
        }
        f.write_str("}")
    }
}
