use soroban_sdk::{contracttype, Address, String};

/// Access policy for operations that may be opened up to any facility operator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerPolicy {
    /// When set, only authorizers may register seed varieties.
    pub restrict_variety_registration: bool,
    /// When set, only authorizers may add or remove facility inventory.
    pub restrict_inventory_updates: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisasterEvent {
    pub event_id: u64,
    pub name: String,
    pub description: String,
    pub affected_region: String,
    pub severity: u32,
    pub start_date: u64,
    pub end_date: Option<u64>,
    pub declared_by: Address,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variety {
    pub variety_id: u64,
    pub name: String,
    pub species: String,
    pub origin: String,
    pub registered_by: Address,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryRecord {
    pub facility_id: String,
    pub variety_id: u64,
    pub quantity: u64,
    pub expiration_date: u64,
    pub last_updated: u64,
    pub last_updated_by: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionRequest {
    pub request_id: u64,
    pub event_id: u64,
    pub requester: Address,
    pub facility_id: String,
    pub variety_id: u64,
    pub quantity_requested: u64,
    pub purpose: String,
    pub request_date: u64,
    pub status: RequestStatus,
    pub approved_by: Option<Address>,
    pub approval_date: Option<u64>,
    pub notes: String,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    Policy,                         // LedgerPolicy, also the initialization marker
    Authorizers,                    // Vec<Address>
    Event(u64),                     // event_id
    Variety(u64),                   // variety_id
    Inventory(String, u64),         // (facility_id, variety_id)
    FacilityVarieties(String),      // facility_id -> Vec<variety_id>
    Request(u64),                   // request_id
    EventRequestCount(u64),         // event_id -> number of requests filed
    EventRequest(u64, u32),         // (event_id, index) -> request_id
    EventCounter,
    VarietyCounter,
    RequestCounter,
}
