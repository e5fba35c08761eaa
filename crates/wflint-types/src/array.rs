//! Homogeneous array types, covariant over their element type.

use crate::expr_type::{ExprType, Relation};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ArrayType {
    elem: Box<ExprType>,
    /// Produced by a `.*` property projection such as `matrix.*.os`.
    deref: bool,
}

impl ArrayType {
    pub fn new(elem: ExprType) -> Self {
        Self {
            elem: Box::new(elem),
            deref: false,
        }
    }

    /// Array resulting from projecting a property out of an array of objects.
    pub fn new_deref(elem: ExprType) -> Self {
        Self {
            elem: Box::new(elem),
            deref: true,
        }
    }

    /// Array whose elements are unknown, e.g. the `[]` literal.
    pub fn empty() -> Self {
        Self::new(ExprType::Any)
    }

    pub fn elem(&self) -> &ExprType {
        &self.elem
    }

    pub fn is_deref(&self) -> bool {
        self.deref
    }

    pub(crate) fn relate(&self, actual: &ArrayType, relation: Relation) -> bool {
        relation.holds(&self.elem, &actual.elem)
    }

    pub(crate) fn fuse(self, other: ArrayType) -> ArrayType {
        if self.elem.is_any() {
            return self;
        }
        if other.elem.is_any() {
            return other;
        }
        // A fused array is never a projection.
        Self::new((*self.elem).fuse(*other.elem))
    }
}
