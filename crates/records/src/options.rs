//! Option lists offered by the dashboard's select inputs
//!
//! Stored records carry these values as plain strings. The lists drive seed
//! generation and give callers the canonical spellings.

/// Nationality codes
pub const NATIONALITIES: &[&str] = &[
    "egyptian",
    "pakistani",
    "indonesian",
    "indian",
    "bangladeshi",
    "nigerian",
    "turkish",
    "iranian",
    "algerian",
    "moroccan",
    "sudanese",
    "malaysian",
];

/// Cause-of-death categories
pub const CAUSE_OF_DEATH_TYPES: &[&str] = &["natural", "accident", "heat_stroke", "disease", "other"];

/// Free-text causes used for seed data
pub const CAUSES_OF_DEATH: &[&str] = &[
    "Cardiac arrest",
    "Heat exhaustion",
    "Traffic accident",
    "Respiratory failure",
    "Stroke",
    "Kidney failure",
];

/// Places of death used for seed data
pub const PLACES_OF_DEATH: &[&str] = &["Makkah", "Madinah", "Mina", "Arafat", "Muzdalifah", "Jeddah"];

/// Hospital status categories
pub const HOSPITAL_STATUS_TYPES: &[&str] = &["stable", "critical", "intensive_care", "under_observation"];

/// Hospitals used for seed data
pub const HOSPITALS: &[&str] = &[
    "King Abdulaziz Hospital",
    "Al Noor Specialist Hospital",
    "King Faisal Hospital",
    "Hera General Hospital",
    "Mina Emergency Hospital",
];

/// Incident categories
pub const INCIDENT_TYPES: &[&str] = &["missing", "theft", "injury", "lost_documents", "dispute", "other"];

/// Port-of-entry kinds
pub const PORT_TYPES: &[&str] = &["airport", "land"];

/// Reception workflow statuses shared by pre-arrival groups and port entries
pub const RECEPTION_STATUSES: &[&str] = &["pending", "confirmed", "arrived", "cancelled"];

/// Destinations used for seed data
pub const DESTINATIONS: &[&str] = &["Makkah", "Madinah"];

/// Accommodation sites used for seed data
pub const ACCOMMODATIONS: &[&str] = &[
    "Hotel Al Safwa",
    "Hotel Dar Al Tawhid",
    "Hotel Al Marwa",
    "Hotel Anwar Al Madinah",
    "Mina Camp 12",
    "Arafat Camp 7",
];

/// Departure points used for seed data
pub const DEPARTURE_POINTS: &[&str] = &["Jeddah Airport", "Madinah Airport", "Makkah", "Madinah"];

/// Bus carriers used for seed data
pub const CARRIERS: &[&str] = &["SAPTCO", "Al Rajhi Transport", "Dallah Transport", "Rawahel"];
