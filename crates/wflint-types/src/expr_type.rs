//! The expression type lattice and its three operations.
//!
//! Every value in an expression has one of the `ExprType` shapes below. The
//! scalar coercion tables live here as explicit match blocks; object and array
//! payloads delegate to [`ObjectType`] and [`ArrayType`].
//!
//! # Operations
//!
//! - `equals`: structural identity, with `any` equal to everything.
//! - `assignable`: whether a value of the argument's type may be used where the
//!   receiver's type is expected. Asymmetric and looser than `equals`: `bool`
//!   accepts anything and `string` accepts numbers.
//! - `fuse`: join of two observed types. Number and bool widen to string;
//!   mismatched shapes become `any`.

use crate::array::ArrayType;
use crate::object::ObjectType;

/// Type of a value that can appear in a workflow expression.
///
/// Derived `PartialEq` is exact structural identity and is what tests compare
/// with. The lattice notion of equality, where `any` matches everything, is
/// [`ExprType::equals`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExprType {
    /// Value whose type cannot be known statically. Top type.
    Any,
    /// `null` literal.
    Null,
    /// Integer or float.
    Number,
    /// Boolean.
    Bool,
    /// String.
    String,
    /// Object with named properties, or a map with one value type.
    Object(ObjectType),
    /// Homogeneous array.
    Array(ArrayType),
}

/// Which comparison an object or array forwards to its children.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Relation {
    Equal,
    Assignable,
}

impl Relation {
    pub(crate) fn holds(self, expected: &ExprType, actual: &ExprType) -> bool {
        match self {
            Self::Equal => expected.equals(actual),
            Self::Assignable => expected.assignable(actual),
        }
    }
}

impl ExprType {
    /// Object that tolerates unknown properties (`object`).
    pub fn open_object() -> Self {
        Self::Object(ObjectType::open())
    }

    /// Object with no properties yet that rejects unknown ones.
    pub fn strict_object() -> Self {
        Self::Object(ObjectType::strict())
    }

    /// Map-like object whose every property has type `value`.
    ///
    /// Collapses to [`ExprType::open_object`] when `value` is `any`.
    pub fn mapped_object(value: ExprType) -> Self {
        Self::Object(ObjectType::mapped(value))
    }

    pub fn array(elem: ExprType) -> Self {
        Self::Array(ArrayType::new(elem))
    }

    /// Array produced by a `.*` property projection over an array of objects.
    pub fn array_deref(elem: ExprType) -> Self {
        Self::Array(ArrayType::new_deref(elem))
    }

    /// Array with nothing known about its elements (`array<any>`).
    pub fn empty_array() -> Self {
        Self::Array(ArrayType::empty())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Short name of the shape, without payload.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Null => "null",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
        }
    }

    /// Structural type identity. `any` on either side always matches.
    pub fn equals(&self, other: &ExprType) -> bool {
        if other.is_any() {
            return true;
        }
        match self {
            Self::Any => true,
            Self::Null => matches!(other, Self::Null),
            Self::Number => matches!(other, Self::Number),
            Self::Bool => matches!(other, Self::Bool),
            Self::String => matches!(other, Self::String),
            Self::Object(obj) => match other {
                Self::Object(other) => obj.relate(other, Relation::Equal),
                _ => false,
            },
            Self::Array(arr) => match other {
                Self::Array(other) => arr.relate(other, Relation::Equal),
                _ => false,
            },
        }
    }

    /// Whether a value of type `other` may be used where `self` is expected.
    pub fn assignable(&self, other: &ExprType) -> bool {
        if other.is_any() {
            return true;
        }
        match self {
            Self::Any => true,
            Self::Null => matches!(other, Self::Null),
            Self::Number => matches!(other, Self::Number),
            // Any value is truthy or falsy, e.g. `if: ${{ steps.foo }}`.
            Self::Bool => true,
            // bool and null are rejected even though they coerce at runtime.
            Self::String => matches!(other, Self::String | Self::Number),
            Self::Object(obj) => match other {
                Self::Object(other) => obj.relate(other, Relation::Assignable),
                _ => false,
            },
            Self::Array(arr) => match other {
                Self::Array(other) => arr.relate(other, Relation::Assignable),
                _ => false,
            },
        }
    }

    /// Merge the type observed on another path into this one.
    ///
    /// Irreconcilable operands fall back to `any`. Operands may be returned as-is,
    /// which is a move and never aliases.
    pub fn fuse(self, other: ExprType) -> ExprType {
        match (self, other) {
            (Self::Any, _) => Self::Any,
            (Self::Null, Self::Null) => Self::Null,
            (Self::Number, Self::Number) => Self::Number,
            (Self::Bool, Self::Bool) => Self::Bool,
            (Self::Number | Self::Bool, Self::String) => Self::String,
            (Self::String, Self::String | Self::Number | Self::Bool) => Self::String,
            (Self::Object(lhs), Self::Object(rhs)) => Self::Object(lhs.fuse(rhs)),
            (Self::Array(lhs), Self::Array(rhs)) => Self::Array(lhs.fuse(rhs)),
            (_, Self::Any) => Self::Any,
            (lhs, rhs) => {
                tracing::trace!(%lhs, %rhs, "fused irreconcilable types into any");
                Self::Any
            }
        }
    }
}

impl From<ObjectType> for ExprType {
    fn from(obj: ObjectType) -> Self {
        Self::Object(obj)
    }
}

impl From<ArrayType> for ExprType {
    fn from(arr: ArrayType) -> Self {
        Self::Array(arr)
    }
}
