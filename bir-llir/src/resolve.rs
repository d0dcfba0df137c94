//! Element type resolution
//! 
//! Walks an aggregate type one index per level and returns the type found
//! at the end of the path. Pointers are stepped through like arrays, so a
//! path may address through a pointer-to-aggregate.

use log::trace;
use crate::error::IrError;
use crate::types::Type;

/// Resolve the type at `path` inside `root`.
///
/// Array lengths are not checked: the index only selects a level. Struct
/// indices must name an existing field.
pub fn resolve_element_type<'t>(root: &'t Type, path: &[u64]) -> Result<&'t Type, IrError> {
    let Some((&index, rest)) = path.split_first() else {
        return Ok(root);
    };
    trace!("resolve index {index} into {root}");

    match root {
        Type::Array { elem, .. } | Type::Pointer(elem) => resolve_element_type(elem, rest),
        Type::Struct { fields, .. } => {
            let field = usize::try_from(index)
                .ok()
                .and_then(|i| fields.get(i))
                .ok_or_else(|| IrError::FieldIndexOutOfRange {
                    index,
                    len: fields.len(),
                    ty: root.clone(),
                })?;
            resolve_element_type(field, rest)
        }
        _ => Err(IrError::UnsupportedAggregate { ty: root.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::Instruction;
    use crate::values::{Param, Value};
    use proptest::prelude::*;
    use std::rc::Rc;

    fn sample() -> Type {
        Type::struct_of(vec![Type::array(4, Type::I32), Type::pointer(Type::DOUBLE)])
    }

    #[test]
    fn test_resolve_sample_paths() {
        let ty = sample();
        assert_eq!(resolve_element_type(&ty, &[0]), Ok(&Type::array(4, Type::I32)));
        assert_eq!(resolve_element_type(&ty, &[1]), Ok(&Type::pointer(Type::DOUBLE)));
        assert_eq!(resolve_element_type(&ty, &[1, 0]), Ok(&Type::DOUBLE));
        assert_eq!(resolve_element_type(&ty, &[0, 2]), Ok(&Type::I32));
        assert_eq!(resolve_element_type(&ty, &[]), Ok(&ty));
    }

    #[test]
    fn test_struct_index_out_of_range() {
        let ty = sample();
        assert_eq!(
            resolve_element_type(&ty, &[2]),
            Err(IrError::FieldIndexOutOfRange { index: 2, len: 2, ty: ty.clone() })
        );
        // Huge indices never wrap around
        assert!(matches!(
            resolve_element_type(&ty, &[u64::MAX]),
            Err(IrError::FieldIndexOutOfRange { index: u64::MAX, .. })
        ));
    }

    #[test]
    fn test_array_length_not_checked() {
        let ty = Type::array(2, Type::I8);
        assert_eq!(resolve_element_type(&ty, &[17]), Ok(&Type::I8));
    }

    #[test]
    fn test_unsupported_aggregate() {
        let ty = sample();
        // [0, 1, 0] drills into i32 with one index left
        assert_eq!(
            resolve_element_type(&ty, &[0, 1, 0]),
            Err(IrError::UnsupportedAggregate { ty: Type::I32 })
        );
        let vec = Type::vector(4, Type::FLOAT);
        assert_eq!(
            resolve_element_type(&vec, &[0]),
            Err(IrError::UnsupportedAggregate { ty: vec.clone() })
        );
    }

    fn arb_type() -> impl Strategy<Value = Type> {
        let leaf = prop_oneof![
            Just(Type::I1),
            Just(Type::I32),
            Just(Type::I64),
            Just(Type::FLOAT),
            Just(Type::DOUBLE),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                (0u64..8, inner.clone()).prop_map(|(len, elem)| Type::array(len, elem)),
                (1u64..8, inner.clone()).prop_map(|(len, elem)| Type::vector(len, elem)),
                inner.clone().prop_map(Type::pointer),
                prop::collection::vec(inner, 0..4).prop_map(Type::struct_of),
            ]
        })
    }

    fn arb_path() -> impl Strategy<Value = Vec<u64>> {
        prop::collection::vec(0u64..4, 0..4)
    }

    proptest! {
        #[test]
        fn empty_path_is_identity(ty in arb_type()) {
            prop_assert_eq!(resolve_element_type(&ty, &[]), Ok(&ty));
        }

        #[test]
        fn array_consumes_one_index(elem in arb_type(), len in 0u64..16, index in any::<u64>(), rest in arb_path()) {
            let array = Type::array(len, elem.clone());
            let mut path = vec![index];
            path.extend(&rest);
            prop_assert_eq!(resolve_element_type(&array, &path), resolve_element_type(&elem, &rest));
        }

        #[test]
        fn pointer_consumes_one_index(elem in arb_type(), index in any::<u64>(), rest in arb_path()) {
            let ptr = Type::pointer(elem.clone());
            let mut path = vec![index];
            path.extend(&rest);
            prop_assert_eq!(resolve_element_type(&ptr, &path), resolve_element_type(&elem, &rest));
        }

        #[test]
        fn struct_selects_field(fields in prop::collection::vec(arb_type(), 1..5), pick in any::<prop::sample::Index>(), rest in arb_path()) {
            let i = pick.index(fields.len());
            let ty = Type::struct_of(fields.clone());
            let mut path = vec![i as u64];
            path.extend(&rest);
            prop_assert_eq!(resolve_element_type(&ty, &path), resolve_element_type(&fields[i], &rest));

            let past_end = vec![fields.len() as u64];
            let is_out_of_range = matches!(
                resolve_element_type(&ty, &past_end),
                Err(IrError::FieldIndexOutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
        }

        #[test]
        fn paths_compose(ty in arb_type(), p1 in arb_path(), p2 in arb_path()) {
            let joined: Vec<u64> = p1.iter().chain(&p2).copied().collect();
            let direct = resolve_element_type(&ty, &joined);
            let stepped = resolve_element_type(&ty, &p1).and_then(|mid| resolve_element_type(mid, &p2));
            prop_assert_eq!(direct, stepped);
        }

        #[test]
        fn insert_value_fails_iff_element_type_differs(
            ty in arb_type(),
            path in arb_path(),
            other in arb_type(),
            use_resolved in any::<bool>(),
        ) {
            let expected = resolve_element_type(&ty, &path);
            let elem_ty = match &expected {
                Ok(found) if use_resolved => (*found).clone(),
                _ => other,
            };
            let fits = expected == Ok(&elem_ty);

            let x: Value = Rc::new(Param::new("x", ty.clone())).into();
            let elem: Value = Rc::new(Param::new("e", elem_ty.clone())).into();
            let built = Instruction::new_insert_value(&x, &elem, &path);

            prop_assert_eq!(built.is_ok(), fits);
            if let Ok(inst) = built {
                prop_assert_eq!(inst.ty(), Ok(&ty));
            }
        }
    }
}
