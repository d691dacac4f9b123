//! Tier 4: File backend
//!
//! Overlay records survive reopening a desk on the same directory; seed
//! lists are regenerated on every open.

use crate::test_utils::*;
use pilgrimdesk::*;
use tempfile::TempDir;

fn open_in(dir: &TempDir) -> Desk {
    init_tracing();
    let mut config = DeskConfig::load_from_dir(dir.path()).unwrap();
    config.rng_seed = Some(RNG_SEED);
    Desk::open(&config).unwrap()
}

#[test]
fn overlay_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let saved = {
        let desk = open_in(&dir);
        let draft = desk.store::<PreArrivalGroup>().seed()[0].clone();
        desk.submit(draft).unwrap()
    };

    let desk = open_in(&dir);
    assert_eq!(desk.find::<PreArrivalGroup>(&saved.id), Some(saved));
    assert_eq!(desk.get::<PreArrivalGroup>().len(), 13);
    assert!(dir.path().join("reception_pre_arrival.json").is_file());
}

#[test]
fn config_file_in_directory_is_honored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "merge_policy = \"overlay_wins\"\n[seed_counts]\nport_entries = 3\n",
    )
    .unwrap();

    let desk = open_in(&dir);
    assert_eq!(desk.get::<PortEntry>().len(), 3);
    assert_eq!(desk.store::<PortEntry>().merge_policy(), MergePolicy::OverlayWins);

    desk.set_port_entry_status("port-1", "confirmed").unwrap();
    let desk = open_in(&dir);
    assert_eq!(desk.find::<PortEntry>("port-1").unwrap().status, "confirmed");
}

#[test]
fn corrupt_file_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("reception_port_entry.json"), "{{{").unwrap();

    let desk = open_in(&dir);
    assert_eq!(desk.get::<PortEntry>().len(), 10);
}

#[test]
fn slots_listed_after_writes() {
    let dir = TempDir::new().unwrap();
    let desk = open_in(&dir);
    let store = desk.store::<DepartureRecord>();
    store.save(store.seed()[0].with_id("departure-user-1")).unwrap();
    let incidents = desk.store::<OtherIncident>();
    incidents.save(incidents.seed()[0].with_id("incident-user-1")).unwrap();

    assert_eq!(
        desk.storage().slot_keys().unwrap(),
        vec!["public_affairs_other_incidents", "reception_departure"]
    );
}
