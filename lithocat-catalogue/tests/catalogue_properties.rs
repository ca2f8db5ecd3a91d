//! Property-based tests for the resolution engine and mutation API.
//!
//! - Uniqueness: no sequence of duplications puts an id in its id space twice
//! - Round trip: an entity is found by its id and by its unambiguous name
//! - Id generation never returns a pre-seeded id

mod common;

use common::*;
use lithocat_catalogue::generate_id_with;
use lithocat_types::{CurveId, LithologyId};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    DuplicateLithology(usize),
    DuplicateCurve(usize),
    CreateGroup,
    DeleteLithology(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..16).prop_map(Op::DuplicateLithology),
        (0usize..16).prop_map(Op::DuplicateCurve),
        Just(Op::CreateGroup),
        (0usize..16).prop_map(Op::DeleteLithology),
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn mutations_keep_id_spaces_unique(ops in prop::collection::vec(op_strategy(), 1..24)) {
        let mut session = session();
        for (step, op) in ops.iter().enumerate() {
            let name = format!("generated {step}");
            match op {
                Op::DuplicateLithology(pick) => {
                    let ids: Vec<LithologyId> = session.lithology_ids().into_iter().collect();
                    if let Some(source) = ids.get(pick % ids.len().max(1)) {
                        session.duplicate_lithology(source, &name, None, true).unwrap();
                    }
                }
                Op::DuplicateCurve(pick) => {
                    let ids: Vec<CurveId> = session.curve_ids().into_iter().collect();
                    let source = &ids[pick % ids.len()];
                    session.duplicate_curve(source, &name, None).unwrap();
                }
                Op::CreateGroup => {
                    session.create_lithology_group(SHALE_GROUP_ID, &name, None).unwrap();
                }
                Op::DeleteLithology(pick) => {
                    let ids: Vec<LithologyId> = session.lithology_ids().into_iter().collect();
                    if let Some(target) = ids.get(pick % ids.len().max(1)) {
                        session.delete_lithology(target).unwrap();
                    }
                }
            }
        }

        let catalogue = session.catalogue();
        prop_assert_eq!(session.lithology_ids().len(), catalogue.lithology_count());
        prop_assert_eq!(session.curve_ids().len(), catalogue.curve_count());
        let group_count: usize = catalogue
            .main_lithology_groups
            .iter()
            .map(|m| m.groups.len())
            .sum::<usize>()
            + 1; // "Sandy" is nested
        prop_assert_eq!(session.lithology_group_ids().len(), group_count);
    }

    #[test]
    fn duplicated_lithology_resolves_by_id_and_name(name in name_strategy()) {
        let mut session = session();
        prop_assume!(session.find_lithologies(name.as_str()).is_empty());

        let id = session
            .duplicate_lithology("Sandstone", &name, None, true)
            .unwrap()
            .id
            .clone();

        let by_id = session.find_lithologies(&id);
        prop_assert_eq!(by_id.len(), 1);
        prop_assert_eq!(&by_id[0].lithology.name, &name);

        let by_name = session.find_lithologies(name.as_str());
        prop_assert_eq!(by_name.len(), 1);
        prop_assert_eq!(&by_name[0].lithology.id, &id);
    }

    #[test]
    fn duplicated_curve_resolves_by_id_and_name(name in name_strategy()) {
        let mut session = session();
        prop_assume!(session.find_curves(name.as_str()).is_empty());

        let id = session.duplicate_curve(TC2_ID, &name, None).unwrap().id.clone();

        let by_name = session.curve(name.as_str()).unwrap();
        prop_assert_eq!(&by_name.curve.id, &id);
        prop_assert_eq!(by_name.curve.points.len(), 3);
        prop_assert!(session.curve(&id).is_ok());
    }

    #[test]
    fn generated_id_is_never_pre_seeded(
        seeded in prop::collection::btree_set(0u32..64, 0..32),
        order in prop::collection::vec(0u32..64, 0..64),
    ) {
        let render = |n: u32| CurveId::new(format!("cccccccc-0000-0000-0000-{n:012x}"));
        let taken: BTreeSet<CurveId> = seeded.iter().copied().map(render).collect();

        // Replay the seeded ids (and random picks) before falling back to fresh ones.
        let mut draws = order.into_iter().map(render).chain(taken.clone());
        let id = generate_id_with(
            |id| taken.contains(id),
            200,
            || draws.next().unwrap_or_else(CurveId::generate),
        )
        .unwrap();
        prop_assert!(!taken.contains(&id));
    }
}
