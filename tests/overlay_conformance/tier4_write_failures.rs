//! Tier 4: Write failures
//!
//! A full backend either surfaces `QuotaExceeded` (Propagate, default) or
//! logs and reports success (LogAndContinue). Reads never fail.

use crate::test_utils::*;
use pilgrimdesk::*;
use std::sync::Arc;

fn quota_desk(policy: WriteFailurePolicy, quota: usize) -> Desk {
    init_tracing();
    let config = DeskConfig {
        write_failure: policy,
        memory_quota_bytes: Some(quota),
        ..config(MergePolicy::SeedWins)
    };
    Desk::open(&config).unwrap()
}

#[test]
fn propagate_surfaces_quota_error() {
    let desk = quota_desk(WriteFailurePolicy::Propagate, 64);
    let draft = desk.store::<HospitalizedCase>().seed()[0].clone();

    let err = desk.submit(draft).unwrap_err();
    assert!(matches!(err, Error::QuotaExceeded { .. }));
    assert_eq!(desk.get::<HospitalizedCase>().len(), 15);
}

#[test]
fn log_and_continue_reports_success_without_persisting() {
    let desk = quota_desk(WriteFailurePolicy::LogAndContinue, 64);
    let draft = desk.store::<HospitalizedCase>().seed()[0].clone();

    let saved = desk.submit(draft).unwrap();
    assert!(desk.find::<HospitalizedCase>(&saved.id).is_none());
    assert_eq!(desk.get::<HospitalizedCase>().len(), 15);
}

#[test]
fn validation_errors_are_never_swallowed() {
    let desk = quota_desk(WriteFailurePolicy::LogAndContinue, 1 << 20);
    let mut draft = desk.store::<HospitalizedCase>().seed()[0].clone();
    draft.hospital.clear();

    assert!(matches!(
        desk.submit(draft),
        Err(Error::MissingField { field: "hospital", .. })
    ));
}

#[test]
fn earlier_overlay_kept_when_later_write_fails() {
    let storage = Arc::new(MemoryStorage::with_quota(2_000));
    let desk = Desk::with_storage(storage.clone(), &config(MergePolicy::SeedWins));
    let store = desk.store::<OtherIncident>();

    store.save(store.seed()[0].with_id("incident-user-1")).unwrap();
    let before = storage.read_slot(OtherIncident::COLLECTION).unwrap();

    // Keep adding until the quota bites
    let mut failed = false;
    for n in 2..100 {
        if store.save(store.seed()[0].with_id(&format!("incident-user-{}", n))).is_err() {
            failed = true;
            break;
        }
    }
    assert!(failed);
    assert!(before.is_some());
    let kept = store.overlay();
    assert!(kept.iter().any(|r| r.id == "incident-user-1"));
    assert_eq!(store.get().len(), 20 + kept.len());
}
