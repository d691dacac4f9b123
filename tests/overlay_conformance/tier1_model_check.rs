//! Tier 1: Model check
//!
//! Random save/delete sequences against a plain Vec model of the overlay.
//! Under SeedWins the merged view must always equal seed ++ model.

use crate::test_utils::*;
use pilgrimdesk::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    /// Save seed record `template` under id slot `slot`
    Save { slot: u8, template: u8 },
    /// Delete id slot `slot`
    Delete { slot: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8, 0u8..20).prop_map(|(slot, template)| Op::Save { slot, template }),
        (0u8..8).prop_map(|slot| Op::Delete { slot }),
    ]
}

/// Slots 0..4 are seed ids, 4..8 are user ids
fn id_for(slot: u8) -> String {
    if slot < 4 {
        format!("incident-{}", slot + 1)
    } else {
        format!("incident-user-{}", slot)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn seed_wins_matches_model(ops in proptest::collection::vec(op_strategy(), 0..30)) {
        let (_storage, desk) = memory_desk(MergePolicy::SeedWins);
        let store = desk.store::<OtherIncident>();
        let seed = store.seed().to_vec();
        let mut model: Vec<OtherIncident> = Vec::new();

        for op in ops {
            match op {
                Op::Save { slot, template } => {
                    let record = seed[template as usize].with_id(&id_for(slot));
                    store.save(record.clone()).unwrap();
                    if !store.is_seed_id(&record.id) {
                        match model.iter_mut().find(|r| r.id == record.id) {
                            Some(existing) => *existing = record,
                            None => model.push(record),
                        }
                    }
                }
                Op::Delete { slot } => {
                    let id = id_for(slot);
                    let expected = model.iter().any(|r| r.id == id);
                    model.retain(|r| r.id != id);
                    let removed = store.delete(&id).unwrap();
                    prop_assert_eq!(removed, expected);
                }
            }

            let mut expected = seed.clone();
            expected.extend(model.iter().cloned());
            prop_assert_eq!(store.get(), expected);
        }
    }
}
