//! Object types: keyed records and mapped (dictionary-like) objects.
//!
//! # Shapes
//!
//! - **Keyed**: known properties by name. When `strict`, properties outside the
//!   known set are errors; otherwise unknown properties are typed `any`.
//! - **Mapped**: every property, whatever its name, has one value type (e.g. `env`
//!   maps to strings). A map of `any` is just an open object, so [`ObjectType::mapped`]
//!   collapses it.
//!
//! # Comparison cases
//!
//! `equals` and `assignable` share one case analysis (`expected` is the receiver):
//!
//! | expected       | actual         | result                                        |
//! |----------------|----------------|-----------------------------------------------|
//! | mapped `T`     | mapped `U`     | `T` vs `U`                                    |
//! | mapped `T`     | strict keyed   | every actual prop vs `T`                      |
//! | mapped `T`     | open keyed     | true                                          |
//! | open keyed     | anything       | true                                          |
//! | strict keyed   | mapped `U`     | every expected prop vs `U`                    |
//! | strict keyed   | open keyed     | true                                          |
//! | strict keyed   | strict keyed   | shared props compared; equality also requires |
//! |                |                | every expected prop to be present             |

use indexmap::IndexMap;

use crate::expr_type::{ExprType, Relation};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ObjectType {
    shape: Shape,
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum Shape {
    Keyed {
        props: IndexMap<String, ExprType>,
        strict: bool,
    },
    Mapped(Box<ExprType>),
}

impl ObjectType {
    /// Object that allows unknown properties; they are typed `any` on access.
    pub fn open() -> Self {
        Self::keyed(false)
    }

    /// Object that rejects properties outside the ones added to it.
    pub fn strict() -> Self {
        Self::keyed(true)
    }

    /// Object whose every property has type `value`.
    pub fn mapped(value: ExprType) -> Self {
        if value.is_any() {
            // {string => any} carries no more information than `object`
            return Self::open();
        }
        Self {
            shape: Shape::Mapped(Box::new(value)),
        }
    }

    fn keyed(strict: bool) -> Self {
        Self {
            shape: Shape::Keyed {
                props: IndexMap::new(),
                strict,
            },
        }
    }

    /// Add a property while building the object.
    ///
    /// A mapped object has no named properties; adding one instead widens its
    /// value type with the new property's type.
    pub fn insert(&mut self, name: impl Into<String>, ty: ExprType) {
        match &mut self.shape {
            Shape::Keyed { props, .. } => {
                props.insert(name.into(), ty);
            }
            Shape::Mapped(value) => {
                let current = std::mem::replace(value.as_mut(), ExprType::Any);
                *self = Self::mapped(current.fuse(ty));
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_field(mut self, name: impl Into<String>, ty: ExprType) -> Self {
        self.insert(name, ty);
        self
    }

    pub fn is_strict(&self) -> bool {
        matches!(self.shape, Shape::Keyed { strict: true, .. })
    }

    /// Keyed and tolerant of unknown properties.
    pub fn is_open(&self) -> bool {
        matches!(self.shape, Shape::Keyed { strict: false, .. })
    }

    /// Value type of a mapped object.
    pub fn mapped_type(&self) -> Option<&ExprType> {
        match &self.shape {
            Shape::Mapped(value) => Some(value),
            Shape::Keyed { .. } => None,
        }
    }

    /// Declared type of a known property. Always `None` for mapped objects.
    pub fn field(&self, name: &str) -> Option<&ExprType> {
        self.props().and_then(|props| props.get(name))
    }

    /// Number of known properties.
    pub fn len(&self) -> usize {
        self.props().map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn props(&self) -> Option<&IndexMap<String, ExprType>> {
        match &self.shape {
            Shape::Keyed { props, .. } => Some(props),
            Shape::Mapped(_) => None,
        }
    }

    pub(crate) fn relate(&self, actual: &ObjectType, relation: Relation) -> bool {
        match (&self.shape, &actual.shape) {
            (Shape::Mapped(expected), Shape::Mapped(actual)) => relation.holds(expected, actual),
            (Shape::Mapped(expected), Shape::Keyed { props, strict }) => {
                !*strict || props.values().all(|p| relation.holds(expected, p))
            }
            (Shape::Keyed { strict: false, .. }, _) => true,
            (Shape::Keyed { props, .. }, Shape::Mapped(actual)) => {
                props.values().all(|p| relation.holds(p, actual))
            }
            (Shape::Keyed { .. }, Shape::Keyed { strict: false, .. }) => true,
            (Shape::Keyed { props: expected, .. }, Shape::Keyed { props: actual, .. }) => {
                expected.iter().all(|(name, lhs)| match actual.get(name) {
                    Some(rhs) => relation.holds(lhs, rhs),
                    // Missing props only matter for identity.
                    None => relation == Relation::Assignable,
                })
            }
        }
    }

    pub(crate) fn fuse(self, other: ObjectType) -> ObjectType {
        match (self.shape, other.shape) {
            (Shape::Mapped(lhs), Shape::Mapped(rhs)) => Self::mapped((*lhs).fuse(*rhs)),
            (Shape::Mapped(lhs), Shape::Keyed { props, .. }) => {
                let value = props.into_values().fold(*lhs, ExprType::fuse);
                Self::mapped(value)
            }
            (Shape::Keyed { props, .. }, Shape::Mapped(rhs)) => {
                let value = props.into_values().fold(*rhs, |acc, p| p.fuse(acc));
                Self::mapped(value)
            }
            (
                Shape::Keyed {
                    props: lhs,
                    strict: lhs_strict,
                },
                Shape::Keyed {
                    props: rhs,
                    strict: rhs_strict,
                },
            ) => Self::fuse_keyed((lhs, lhs_strict), (rhs, rhs_strict)),
        }
    }

    fn fuse_keyed(
        (mut props, lhs_strict): (IndexMap<String, ExprType>, bool),
        (rhs, rhs_strict): (IndexMap<String, ExprType>, bool),
    ) -> ObjectType {
        // An empty shell, open or strict, contributes nothing.
        if props.is_empty() {
            return Self {
                shape: Shape::Keyed {
                    props: rhs,
                    strict: rhs_strict,
                },
            };
        }
        if rhs.is_empty() {
            return Self {
                shape: Shape::Keyed {
                    props,
                    strict: lhs_strict,
                },
            };
        }

        for (name, ty) in rhs {
            match props.get_mut(&name) {
                Some(slot) => {
                    let lhs = std::mem::replace(slot, ExprType::Any);
                    *slot = lhs.fuse(ty);
                }
                None => {
                    props.insert(name, ty);
                }
            }
        }

        Self {
            shape: Shape::Keyed {
                props,
                strict: lhs_strict && rhs_strict,
            },
        }
    }
}
