//! Property tests over randomly generated types.
//!
//! Properties that must hold for any input, not just hand-picked examples:
//!
//! 1. `any` absorbs every operation from either side
//! 2. `equals` and `assignable` are reflexive
//! 3. `bool` accepts every type
//! 4. Fusing a type with itself loses nothing
//! 5. Identity implies assignability
//! 6. Notation round-trips through `Display`

use proptest::prelude::*;

use crate::notation::parse;
use crate::{ExprType, ObjectType};

const PROP_POOL: &[&str] = &["a", "b", "c", "os", "ref", "string", "run-id"];

fn arb_scalar() -> impl Strategy<Value = ExprType> {
    prop_oneof![
        Just(ExprType::Any),
        Just(ExprType::Null),
        Just(ExprType::Number),
        Just(ExprType::Bool),
        Just(ExprType::String),
    ]
}

fn build_object(props: Vec<(&'static str, ExprType)>, strict: bool) -> ExprType {
    let mut obj = if strict {
        ObjectType::strict()
    } else {
        ObjectType::open()
    };
    for (name, ty) in props {
        obj.insert(name, ty);
    }
    ExprType::Object(obj)
}

fn arb_type() -> impl Strategy<Value = ExprType> {
    arb_scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), any::<bool>()).prop_map(|(elem, deref)| if deref {
                ExprType::array_deref(elem)
            } else {
                ExprType::array(elem)
            }),
            inner.clone().prop_map(ExprType::mapped_object),
            (
                prop::collection::vec((prop::sample::select(PROP_POOL), inner), 0..4),
                any::<bool>(),
            )
                .prop_map(|(props, strict)| build_object(props, strict)),
        ]
    })
}

/// Types that have a notation: no deref arrays, no open objects with props.
fn arb_notation_type() -> impl Strategy<Value = ExprType> {
    arb_scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(ExprType::array),
            inner.clone().prop_map(ExprType::mapped_object),
            Just(ExprType::open_object()),
            prop::collection::vec((prop::sample::select(PROP_POOL), inner), 0..4)
                .prop_map(|props| build_object(props, true)),
        ]
    })
}

proptest! {
    #[test]
    fn any_absorbs(ty in arb_type()) {
        prop_assert!(ExprType::Any.equals(&ty));
        prop_assert!(ty.equals(&ExprType::Any));
        prop_assert!(ExprType::Any.assignable(&ty));
        prop_assert!(ty.assignable(&ExprType::Any));
        prop_assert_eq!(ExprType::Any.fuse(ty.clone()), ExprType::Any);
        prop_assert_eq!(ty.fuse(ExprType::Any), ExprType::Any);
    }

    #[test]
    fn reflexive(ty in arb_type()) {
        prop_assert!(ty.equals(&ty), "{} == itself", ty);
        prop_assert!(ty.assignable(&ty), "{} <- itself", ty);
    }

    #[test]
    fn bool_accepts_everything(ty in arb_type()) {
        prop_assert!(ExprType::Bool.assignable(&ty));
    }

    #[test]
    fn self_fuse_preserves_type(ty in arb_type()) {
        let fused = ty.clone().fuse(ty.clone());
        prop_assert!(fused.equals(&ty), "{} fused into {}", ty, fused);
        prop_assert!(ty.equals(&fused), "{} fused into {}", ty, fused);
    }

    #[test]
    fn equals_implies_assignable(lhs in arb_type(), rhs in arb_type()) {
        if lhs.equals(&rhs) {
            prop_assert!(lhs.assignable(&rhs), "{} == {} but not assignable", lhs, rhs);
        }
    }

    #[test]
    fn fuse_is_total(lhs in arb_type(), rhs in arb_type()) {
        let fused = lhs.fuse(rhs);
        prop_assert!(!fused.to_string().is_empty());
    }

    #[test]
    fn notation_round_trip(ty in arb_notation_type()) {
        prop_assert_eq!(parse(&ty.to_string()), Ok(ty));
    }
}
