//! Seed data generators
//!
//! Each generator returns `count` records with ids `<prefix>-1..=count` and
//! field values drawn from `rng`. Shapes and ids are deterministic; values
//! are not unless the caller passes a seeded RNG. Dates fall within the 30
//! days before `now`.
//!
//! Public affairs seed cases are generated open (`completed: false`);
//! closing a case is always a user action.

use crate::options::*;
use crate::public_affairs::{DeathCase, HospitalizedCase, OtherIncident};
use crate::reception::{DepartureRecord, PortEntry, PreArrivalGroup};
use chrono::Duration;
use pilgrimdesk_core::{seed_id, Record, Timestamp};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const LOOKBACK_DAYS: i64 = 30;

/// Number of seed records per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedCounts {
    pub death_cases: usize,
    pub hospitalized_cases: usize,
    pub incidents: usize,
    pub pre_arrival: usize,
    pub port_entries: usize,
    pub departures: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            death_cases: 15,
            hospitalized_cases: 15,
            incidents: 20,
            pre_arrival: 12,
            port_entries: 10,
            departures: 10,
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn pick_many<R: Rng + ?Sized>(rng: &mut R, options: &[&str], max: usize) -> Vec<String> {
    let n = rng.gen_range(1..=max.min(options.len()).max(1));
    options
        .choose_multiple(rng, n)
        .map(|s| s.to_string())
        .collect()
}

fn recent<R: Rng + ?Sized>(rng: &mut R, now: Timestamp) -> Timestamp {
    let minutes = rng.gen_range(0..LOOKBACK_DAYS * 24 * 60);
    now - Duration::minutes(minutes)
}

fn passport<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letter = (b'A' + rng.gen_range(0..26u8)) as char;
    format!("{}{:08}", letter, rng.gen_range(0..100_000_000u32))
}

fn clock<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:02}:{:02}", rng.gen_range(0..24u8), rng.gen_range(0..60u8))
}

fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("05{:08}", rng.gen_range(0..100_000_000u32))
}

/// Seed death cases (`death-1..`)
pub fn death_cases<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, count: usize) -> Vec<DeathCase> {
    (1..=count)
        .map(|i| {
            let died = recent(rng, now);
            DeathCase {
                id: seed_id(DeathCase::ID_PREFIX, i),
                name: format!("Pilgrim {}", i),
                passport_number: passport(rng),
                nationality: pick(rng, NATIONALITIES),
                cause_of_death: pick(rng, CAUSES_OF_DEATH),
                cause_of_death_type: pick(rng, CAUSE_OF_DEATH_TYPES),
                place_of_death: pick(rng, PLACES_OF_DEATH),
                date_of_death: died.format("%Y-%m-%d").to_string(),
                time_of_death: died.format("%H:%M").to_string(),
                nusuk_case_number: format!("NUS-{}-D-{:03}", died.format("%Y"), i),
                created_at: died,
                completed: false,
                completed_at: None,
                burial_completed: None,
            }
        })
        .collect()
}

/// Seed hospitalized cases (`hospitalized-1..`)
pub fn hospitalized_cases<R: Rng + ?Sized>(
    rng: &mut R,
    now: Timestamp,
    count: usize,
) -> Vec<HospitalizedCase> {
    (1..=count)
        .map(|i| {
            let admitted = recent(rng, now);
            let status_type = pick(rng, HOSPITAL_STATUS_TYPES);
            HospitalizedCase {
                id: seed_id(HospitalizedCase::ID_PREFIX, i),
                name: format!("Pilgrim {}", 100 + i),
                passport_number: passport(rng),
                nationality: pick(rng, NATIONALITIES),
                hospital: pick(rng, HOSPITALS),
                status: status_type.replace('_', " "),
                status_type,
                contact_delegate: phone(rng),
                detailed_report: String::new(),
                nusuk_case_number: format!("NUS-{}-H-{:03}", admitted.format("%Y"), i),
                created_at: admitted,
                updated_at: None,
                completed: false,
                completed_at: None,
                discharged: None,
            }
        })
        .collect()
}

/// Seed other incidents (`incident-1..`)
pub fn incidents<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, count: usize) -> Vec<OtherIncident> {
    (1..=count)
        .map(|i| {
            let reported = recent(rng, now);
            OtherIncident {
                id: seed_id(OtherIncident::ID_PREFIX, i),
                name: format!("Pilgrim {}", 200 + i),
                passport_number: passport(rng),
                nationality: pick(rng, NATIONALITIES),
                incident_type: pick(rng, INCIDENT_TYPES),
                organizer_number: format!("ORG-{}", rng.gen_range(100..1000u32)),
                nusuk_case_number: format!("NUS-{}-I-{:03}", reported.format("%Y"), i),
                created_at: reported,
                description: None,
                completed: false,
                completed_at: None,
                resolved: None,
            }
        })
        .collect()
}

/// Seed pre-arrival groups (`pre-arrival-1..`)
pub fn pre_arrival_groups<R: Rng + ?Sized>(
    rng: &mut R,
    now: Timestamp,
    count: usize,
) -> Vec<PreArrivalGroup> {
    (1..=count)
        .map(|i| PreArrivalGroup {
            id: seed_id(PreArrivalGroup::ID_PREFIX, i),
            group_number: format!("G-{:03}", i),
            group_name: format!("Group {}", i),
            arrival_date: recent(rng, now).format("%Y-%m-%d").to_string(),
            arrival_time: clock(rng),
            pilgrims_count: rng.gen_range(20..=120),
            destination: pick(rng, DESTINATIONS),
            organizer: format!("ORG-{}", rng.gen_range(100..1000u32)),
            accommodations: pick_many(rng, ACCOMMODATIONS, 3),
            status: pick(rng, RECEPTION_STATUSES),
        })
        .collect()
}

/// Seed port entries (`port-1..`)
pub fn port_entries<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, count: usize) -> Vec<PortEntry> {
    (1..=count)
        .map(|i| {
            let created = recent(rng, now);
            PortEntry {
                id: seed_id(PortEntry::ID_PREFIX, i),
                port_type: pick(rng, PORT_TYPES),
                carrier_name: pick(rng, CARRIERS),
                bus_number: format!("B-{}", rng.gen_range(1..500u32)),
                driver_phone: phone(rng),
                passengers_per_bus: rng.gen_range(30..=50),
                status: pick(rng, RECEPTION_STATUSES),
                created_at: created,
                updated_at: created,
            }
        })
        .collect()
}

/// Seed departure records (`departure-1..`)
pub fn departures<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DepartureRecord> {
    (1..=count)
        .map(|i| DepartureRecord {
            id: seed_id(DepartureRecord::ID_PREFIX, i),
            organizer_number: format!("ORG-{}", rng.gen_range(100..1000u32)),
            campaign_number: format!("C-{}", rng.gen_range(1000..10000u32)),
            departure_point: pick(rng, DEPARTURE_POINTS),
            arrival_destination: pick(rng, DESTINATIONS),
            pilgrims_count: rng.gen_range(20..=120),
            accommodations: pick_many(rng, ACCOMMODATIONS, 2),
            arrival_accommodations: pick_many(rng, ACCOMMODATIONS, 2),
        })
        .collect()
}
