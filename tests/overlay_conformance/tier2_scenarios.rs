//! Tier 2: Dashboard scenarios

use crate::test_utils::*;
use chrono::{TimeZone, Utc};
use pilgrimdesk::*;

fn incident_9001() -> OtherIncident {
    OtherIncident {
        id: "incident-9001".into(),
        name: "Pilgrim 9001".into(),
        passport_number: "X00000001".into(),
        nationality: "egyptian".into(),
        incident_type: "missing".into(),
        organizer_number: "ORG-777".into(),
        nusuk_case_number: "NUS-2024-I-901".into(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
        description: None,
        completed: false,
        completed_at: None,
        resolved: None,
    }
}

#[test]
fn new_incident_roundtrip() {
    let (_storage, desk) = memory_desk(MergePolicy::SeedWins);
    let store = desk.store::<OtherIncident>();
    let seeded: Vec<String> = (1..=20).map(|i| format!("incident-{}", i)).collect();

    store.save(incident_9001()).unwrap();
    let all = store.get();
    assert!(all.contains(&incident_9001()));
    assert_eq!(all.len(), 21);

    store.delete("incident-9001").unwrap();
    let all = store.get();
    assert!(all.iter().all(|r| r.id != "incident-9001"));
    assert_eq!(ids(&all), seeded);
}

#[test]
fn stored_slot_uses_dashboard_field_names() {
    let (storage, desk) = memory_desk(MergePolicy::SeedWins);
    desk.store::<OtherIncident>().save(incident_9001()).unwrap();

    let raw = storage
        .read_slot("public_affairs_other_incidents")
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let stored = &value.as_array().unwrap()[0];
    assert_eq!(stored["passportNumber"], "X00000001");
    assert_eq!(stored["nusukCaseNumber"], "NUS-2024-I-901");
    assert_eq!(stored["createdAt"], "2024-06-01T10:00:00Z");
    assert_eq!(stored["completed"], false);
}

#[test]
fn slot_written_by_dashboard_is_merged() {
    let (storage, desk) = memory_desk(MergePolicy::SeedWins);
    storage
        .write_slot(
            "reception_departure",
            r#"[{"id":"departure-1717000000000","organizerNumber":"ORG-1","campaignNumber":"C-1",
                "departurePoint":"Makkah","arrivalDestination":"Madinah","pilgrimsCount":33,
                "accommodations":["Hotel Al Safwa"],"arrivalAccommodations":[]}]"#,
        )
        .unwrap();

    let departures = desk.get::<DepartureRecord>();
    assert_eq!(departures.len(), 11);
    let last = departures.last().unwrap();
    assert_eq!(last.id, "departure-1717000000000");
    assert_eq!(last.pilgrims_count, 33);
}

#[test]
fn submitted_death_case_lifecycle() {
    let (_storage, desk) = memory_desk(MergePolicy::SeedWins);
    let mut draft = desk.store::<DeathCase>().seed()[0].clone();
    draft.name = "New Pilgrim".into();

    // Create
    let created = desk.submit(draft).unwrap();
    assert!(created.id.starts_with("death-"));
    assert_ne!(created.id, "death-1");

    // Complete: overlay-origin records keep the edit
    let completed = desk.complete::<DeathCase>(&created.id).unwrap();
    assert_eq!(completed.burial_completed, Some(true));
    let stored = desk.find::<DeathCase>(&created.id).unwrap();
    assert!(stored.completed);
    assert!(stored.completed_at.is_some());
    assert_eq!(stored.burial_completed, Some(true));
    assert_eq!(desk.case_summary(CaseKind::Death).completed, 1);

    // Delete
    assert!(desk.delete::<DeathCase>(&created.id).unwrap());
    assert!(desk.find::<DeathCase>(&created.id).is_none());
    assert_eq!(desk.get::<DeathCase>().len(), 15);
}

#[test]
fn deleted_id_can_be_reused() {
    let (_storage, desk) = memory_desk(MergePolicy::SeedWins);
    let store = desk.store::<OtherIncident>();
    store.save(incident_9001()).unwrap();
    store.delete("incident-9001").unwrap();

    let mut again = incident_9001();
    again.name = "Someone Else".into();
    store.save(again.clone()).unwrap();
    assert_eq!(store.find("incident-9001"), Some(again));
}

#[test]
fn uuid_scheme_ids() {
    let storage = std::sync::Arc::new(MemoryStorage::new());
    let config = DeskConfig {
        id_scheme: IdScheme::Uuid,
        ..config(MergePolicy::SeedWins)
    };
    let desk = Desk::with_storage(storage, &config);
    let mut draft = incident_9001();
    draft.id.clear();
    let saved = desk.submit(draft).unwrap();
    assert!(saved.id.starts_with("incident-"));
    assert_eq!(saved.id.len(), "incident-".len() + 36);
}

#[test]
fn custom_id_generator() {
    struct Fixed;
    impl IdGenerator for Fixed {
        fn next_id(&self, prefix: &str) -> String {
            format!("{}-fixed", prefix)
        }
    }

    let (_storage, desk) = memory_desk(MergePolicy::SeedWins);
    let desk = desk.with_id_generator(std::sync::Arc::new(Fixed));
    let saved = desk.submit(incident_9001()).unwrap();
    assert_eq!(saved.id, "incident-fixed");
    assert!(desk.find::<OtherIncident>("incident-fixed").is_some());
}

#[test]
fn mistyped_record_does_not_erase_other_user_records() {
    let (storage, desk) = memory_desk(MergePolicy::SeedWins);
    // A count entered as text by an older form build
    storage
        .write_slot(
            "reception_departure",
            r#"[{"id":"departure-1","organizerNumber":"ORG-1","campaignNumber":"C-1",
                "departurePoint":"Makkah","arrivalDestination":"Madinah","pilgrimsCount":12},
               {"id":"departure-1717000000000","organizerNumber":"ORG-2","campaignNumber":"C-2",
                "departurePoint":"Makkah","arrivalDestination":"Madinah","pilgrimsCount":33},
               {"id":"departure-1717000000001","organizerNumber":"ORG-3","campaignNumber":"C-3",
                "departurePoint":"Mina","arrivalDestination":"Makkah","pilgrimsCount":"40"}]"#,
        )
        .unwrap();

    let store = desk.store::<DepartureRecord>();
    let fresh = store.seed()[0].with_id("departure-new");
    store.save(fresh).unwrap();

    assert_eq!(
        ids(&store.overlay()),
        vec!["departure-1717000000000", "departure-new"]
    );
    let raw = storage.read_slot("reception_departure").unwrap().unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    let mistyped = stored
        .iter()
        .find(|v| v["id"] == "departure-1717000000001")
        .unwrap();
    assert_eq!(mistyped["pilgrimsCount"], "40");
    assert_eq!(desk.get::<DepartureRecord>().len(), 12);
}
