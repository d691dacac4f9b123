//! Public affairs records: deaths, hospitalizations, other incidents
//!
//! Field names follow the stored JSON (camelCase). User-entered dates and
//! times are kept as the strings the form produced; system stamps
//! (`createdAt`, `updatedAt`, `completedAt`) are UTC instants.

use crate::completion::Completable;
use crate::form::{require_text, Submittable, Validate};
use pilgrimdesk_core::{Record, Result, Timestamp};
use serde::{Deserialize, Serialize};

/// A pilgrim death under follow-up until burial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathCase {
    pub id: String,
    pub name: String,
    pub passport_number: String,
    pub nationality: String,
    pub cause_of_death: String,
    pub cause_of_death_type: String,
    pub place_of_death: String,
    pub date_of_death: String,
    pub time_of_death: String,
    pub nusuk_case_number: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burial_completed: Option<bool>,
}

impl Record for DeathCase {
    const COLLECTION: &'static str = "public_affairs_death_cases";
    const ID_PREFIX: &'static str = "death";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Completable for DeathCase {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    fn mark_completed(&mut self, at: Timestamp) {
        self.completed = true;
        self.completed_at = Some(at);
        self.burial_completed = Some(true);
    }
}

impl Validate for DeathCase {
    fn validate(&self) -> Result<()> {
        require_text::<Self>("name", &self.name)?;
        require_text::<Self>("passportNumber", &self.passport_number)?;
        require_text::<Self>("nationality", &self.nationality)?;
        require_text::<Self>("causeOfDeath", &self.cause_of_death)?;
        require_text::<Self>("causeOfDeathType", &self.cause_of_death_type)?;
        require_text::<Self>("placeOfDeath", &self.place_of_death)?;
        require_text::<Self>("dateOfDeath", &self.date_of_death)?;
        require_text::<Self>("timeOfDeath", &self.time_of_death)?;
        require_text::<Self>("nusukCaseNumber", &self.nusuk_case_number)
    }
}

impl Submittable for DeathCase {
    fn stamp(&mut self, id: String, at: Timestamp) {
        self.id = id;
        self.created_at = at;
    }
}

/// A pilgrim admitted to hospital, open until discharge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalizedCase {
    pub id: String,
    pub name: String,
    pub passport_number: String,
    pub nationality: String,
    pub hospital: String,
    pub status: String,
    pub status_type: String,
    pub contact_delegate: String,
    pub detailed_report: String,
    pub nusuk_case_number: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharged: Option<bool>,
}

impl Record for HospitalizedCase {
    const COLLECTION: &'static str = "public_affairs_hospitalized_cases";
    const ID_PREFIX: &'static str = "hospitalized";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Completable for HospitalizedCase {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    fn mark_completed(&mut self, at: Timestamp) {
        self.completed = true;
        self.completed_at = Some(at);
        self.discharged = Some(true);
        self.updated_at = Some(at);
    }
}

impl Validate for HospitalizedCase {
    fn validate(&self) -> Result<()> {
        require_text::<Self>("name", &self.name)?;
        require_text::<Self>("passportNumber", &self.passport_number)?;
        require_text::<Self>("nationality", &self.nationality)?;
        require_text::<Self>("hospital", &self.hospital)?;
        require_text::<Self>("status", &self.status)?;
        require_text::<Self>("statusType", &self.status_type)?;
        require_text::<Self>("contactDelegate", &self.contact_delegate)?;
        require_text::<Self>("nusukCaseNumber", &self.nusuk_case_number)
    }
}

impl Submittable for HospitalizedCase {
    fn stamp(&mut self, id: String, at: Timestamp) {
        self.id = id;
        self.created_at = at;
    }
}

/// Any other incident involving a pilgrim (missing person, theft, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherIncident {
    pub id: String,
    pub name: String,
    pub passport_number: String,
    pub nationality: String,
    pub incident_type: String,
    pub organizer_number: String,
    pub nusuk_case_number: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

impl Record for OtherIncident {
    const COLLECTION: &'static str = "public_affairs_other_incidents";
    const ID_PREFIX: &'static str = "incident";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Completable for OtherIncident {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    fn mark_completed(&mut self, at: Timestamp) {
        self.completed = true;
        self.completed_at = Some(at);
        self.resolved = Some(true);
    }
}

impl Validate for OtherIncident {
    fn validate(&self) -> Result<()> {
        require_text::<Self>("name", &self.name)?;
        require_text::<Self>("passportNumber", &self.passport_number)?;
        require_text::<Self>("nationality", &self.nationality)?;
        require_text::<Self>("incidentType", &self.incident_type)?;
        require_text::<Self>("organizerNumber", &self.organizer_number)?;
        require_text::<Self>("nusukCaseNumber", &self.nusuk_case_number)
    }
}

impl Submittable for OtherIncident {
    fn stamp(&mut self, id: String, at: Timestamp) {
        self.id = id;
        self.created_at = at;
    }
}
