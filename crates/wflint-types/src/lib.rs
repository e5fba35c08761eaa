#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Structural types for values flowing through workflow `${{ ... }}` expressions.
//!
//! An expression evaluator builds [`ExprType`] values bottom-up while walking an
//! expression: literals yield scalars, context and property access yield objects or
//! arrays, and branches (ternaries, filters, matrix rows) are summarized with
//! [`ExprType::fuse`]. Lint rules then gate their diagnostics on
//! [`ExprType::assignable`] and [`ExprType::equals`].
//!
//! The lattice fails open: whatever cannot be reconciled becomes [`ExprType::Any`],
//! which is compatible with everything and so silences downstream checks.
//!
//! # Example
//!
//! ```
//! use wflint_types::{ExprType, ObjectType};
//!
//! let lhs = ObjectType::open().with_field("x", ExprType::Number);
//! let rhs = ObjectType::open()
//!     .with_field("x", ExprType::String)
//!     .with_field("y", ExprType::Bool);
//!
//! let fused = ExprType::Object(lhs).fuse(ExprType::Object(rhs));
//! assert_eq!(fused.to_string(), "{x: string; y: bool}");
//!
//! let declared: ExprType = "array<string>".parse().unwrap();
//! assert!(!declared.assignable(&ExprType::array(ExprType::Null)));
//! ```

mod array;
mod expr_type;
pub mod notation;
mod object;
mod render;
mod serialize;

#[cfg(test)]
mod properties_tests;
#[cfg(test)]
mod render_tests;
#[cfg(test)]
mod serialize_tests;

pub use array::ArrayType;
pub use expr_type::ExprType;
pub use notation::NotationError;
pub use object::ObjectType;
pub use render::{FormatConfig, Rendered};
