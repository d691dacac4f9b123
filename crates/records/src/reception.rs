//! Reception records: pre-arrival groups, port entries, departures

use crate::form::{require_count, require_list, require_text, Submittable, Validate};
use pilgrimdesk_core::{Record, Result, Timestamp};
use serde::{Deserialize, Serialize};

/// A pilgrim group registered ahead of arrival
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreArrivalGroup {
    pub id: String,
    pub group_number: String,
    pub group_name: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub pilgrims_count: u32,
    pub destination: String,
    pub organizer: String,
    #[serde(default)]
    pub accommodations: Vec<String>,
    pub status: String,
}

impl Record for PreArrivalGroup {
    const COLLECTION: &'static str = "reception_pre_arrival";
    const ID_PREFIX: &'static str = "pre-arrival";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Validate for PreArrivalGroup {
    fn validate(&self) -> Result<()> {
        require_text::<Self>("groupNumber", &self.group_number)?;
        require_text::<Self>("groupName", &self.group_name)?;
        require_text::<Self>("arrivalDate", &self.arrival_date)?;
        require_text::<Self>("arrivalTime", &self.arrival_time)?;
        require_count::<Self>("pilgrimsCount", self.pilgrims_count)?;
        require_text::<Self>("destination", &self.destination)?;
        require_text::<Self>("organizer", &self.organizer)?;
        require_list::<Self>("accommodations", &self.accommodations)
    }
}

impl Submittable for PreArrivalGroup {
    fn stamp(&mut self, id: String, _at: Timestamp) {
        self.id = id;
    }
}

/// A bus confirmed at an airport or land port of entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortEntry {
    pub id: String,
    pub port_type: String,
    pub carrier_name: String,
    pub bus_number: String,
    pub driver_phone: String,
    pub passengers_per_bus: u32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for PortEntry {
    const COLLECTION: &'static str = "reception_port_entry";
    const ID_PREFIX: &'static str = "port";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Validate for PortEntry {
    fn validate(&self) -> Result<()> {
        require_text::<Self>("portType", &self.port_type)?;
        require_text::<Self>("carrierName", &self.carrier_name)?;
        require_text::<Self>("busNumber", &self.bus_number)?;
        require_text::<Self>("driverPhone", &self.driver_phone)?;
        require_count::<Self>("passengersPerBus", self.passengers_per_bus)
    }
}

impl Submittable for PortEntry {
    fn stamp(&mut self, id: String, at: Timestamp) {
        self.id = id;
        self.created_at = at;
        self.updated_at = at;
    }
}

impl PortEntry {
    /// Move the entry to a new status, touching `updatedAt`
    pub fn set_status(&mut self, status: impl Into<String>, at: Timestamp) {
        self.status = status.into();
        self.updated_at = at;
    }
}

/// A group leaving one site for another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureRecord {
    pub id: String,
    pub organizer_number: String,
    pub campaign_number: String,
    pub departure_point: String,
    pub arrival_destination: String,
    pub pilgrims_count: u32,
    #[serde(default)]
    pub accommodations: Vec<String>,
    #[serde(default)]
    pub arrival_accommodations: Vec<String>,
}

impl Record for DepartureRecord {
    const COLLECTION: &'static str = "reception_departure";
    const ID_PREFIX: &'static str = "departure";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Validate for DepartureRecord {
    fn validate(&self) -> Result<()> {
        require_text::<Self>("organizerNumber", &self.organizer_number)?;
        require_text::<Self>("campaignNumber", &self.campaign_number)?;
        require_text::<Self>("departurePoint", &self.departure_point)?;
        require_text::<Self>("arrivalDestination", &self.arrival_destination)?;
        require_count::<Self>("pilgrimsCount", self.pilgrims_count)
    }
}

impl Submittable for DepartureRecord {
    fn stamp(&mut self, id: String, _at: Timestamp) {
        self.id = id;
    }
}
