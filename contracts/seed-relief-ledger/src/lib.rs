#![no_std]

mod authorization;
mod disaster;
mod distribution;
mod error;
mod events;
mod inventory;
mod storage;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use types::*;

#[contract]
pub struct SeedReliefLedger;

#[contractimpl]
impl SeedReliefLedger {
    /// Initialize the ledger; the deployer becomes the first authorizer
    pub fn initialize(env: Env, deployer: Address, policy: LedgerPolicy) -> Result<(), ContractError> {
        deployer.require_auth();
        authorization::initialize(&env, &deployer, policy)
    }

    /// Replace the access policy for variety registration and inventory updates
    pub fn update_policy(env: Env, caller: Address, policy: LedgerPolicy) -> Result<bool, ContractError> {
        caller.require_auth();
        authorization::update_policy(&env, &caller, policy)?;
        Ok(true)
    }

    pub fn get_policy(env: Env) -> Result<LedgerPolicy, ContractError> {
        authorization::require_initialized(&env)
    }

    // Authorization registry

    pub fn add_authorizer(env: Env, caller: Address, address: Address) -> Result<bool, ContractError> {
        caller.require_auth();
        authorization::add_authorizer(&env, &caller, &address)?;
        Ok(true)
    }

    pub fn remove_authorizer(env: Env, caller: Address, address: Address) -> Result<bool, ContractError> {
        caller.require_auth();
        authorization::remove_authorizer(&env, &caller, &address)?;
        Ok(true)
    }

    pub fn is_authorizer(env: Env, address: Address) -> bool {
        authorization::is_authorizer(&env, &address)
    }

    pub fn get_authorizers(env: Env) -> Vec<Address> {
        authorization::get_authorizers(&env)
    }

    // Disaster events

    /// Declare a disaster event, returning its sequential id
    pub fn declare_disaster_event(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        affected_region: String,
        severity: u32,
        start_date: u64,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        disaster::declare_disaster_event(
            &env,
            &caller,
            name,
            description,
            affected_region,
            severity,
            start_date,
        )
    }

    /// End an active disaster event
    pub fn end_disaster_event(
        env: Env,
        caller: Address,
        event_id: u64,
        end_date: u64,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        disaster::end_disaster_event(&env, &caller, event_id, end_date)?;
        Ok(true)
    }

    pub fn get_disaster_event(env: Env, event_id: u64) -> Result<DisasterEvent, ContractError> {
        disaster::get_disaster_event(&env, event_id)
    }

    pub fn get_event_count(env: Env) -> u64 {
        storage::get_event_count(&env)
    }

    // Inventory

    /// Register a seed variety, returning its sequential id
    pub fn register_variety(
        env: Env,
        caller: Address,
        name: String,
        species: String,
        origin: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        inventory::register_variety(&env, &caller, name, species, origin)
    }

    /// Stock a variety at a facility
    pub fn add_inventory(
        env: Env,
        caller: Address,
        facility_id: String,
        variety_id: u64,
        quantity: u64,
        expiration_date: u64,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        inventory::add_inventory(&env, &caller, facility_id, variety_id, quantity, expiration_date)?;
        Ok(true)
    }

    /// Withdraw stock of a variety from a facility
    pub fn remove_inventory(
        env: Env,
        caller: Address,
        facility_id: String,
        variety_id: u64,
        quantity: u64,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        inventory::remove_inventory(&env, &caller, facility_id, variety_id, quantity)?;
        Ok(true)
    }

    pub fn get_variety(env: Env, variety_id: u64) -> Result<Variety, ContractError> {
        inventory::get_variety(&env, variety_id)
    }

    pub fn get_variety_count(env: Env) -> u64 {
        storage::get_variety_count(&env)
    }

    pub fn get_inventory(
        env: Env,
        facility_id: String,
        variety_id: u64,
    ) -> Result<InventoryRecord, ContractError> {
        inventory::get_inventory(&env, facility_id, variety_id)
    }

    /// Varieties ever stocked at a facility
    pub fn get_facility_varieties(env: Env, facility_id: String) -> Vec<u64> {
        inventory::get_facility_varieties(&env, facility_id)
    }

    // Distribution requests

    /// Request seeds for an active disaster event
    pub fn request_seed_distribution(
        env: Env,
        requester: Address,
        event_id: u64,
        facility_id: String,
        variety_id: u64,
        quantity: u64,
        purpose: String,
    ) -> Result<u64, ContractError> {
        requester.require_auth();
        distribution::request_seed_distribution(
            &env,
            &requester,
            event_id,
            facility_id,
            variety_id,
            quantity,
            purpose,
        )
    }

    /// Approve a pending request and release the seeds from facility stock
    pub fn approve_distribution_request(
        env: Env,
        caller: Address,
        request_id: u64,
        notes: String,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        distribution::approve_distribution_request(&env, &caller, request_id, notes)?;
        Ok(true)
    }

    pub fn reject_distribution_request(
        env: Env,
        caller: Address,
        request_id: u64,
        notes: String,
    ) -> Result<bool, ContractError> {
        caller.require_auth();
        distribution::reject_distribution_request(&env, &caller, request_id, notes)?;
        Ok(true)
    }

    pub fn get_distribution_request(
        env: Env,
        request_id: u64,
    ) -> Result<DistributionRequest, ContractError> {
        distribution::get_distribution_request(&env, request_id)
    }

    pub fn get_request_count(env: Env) -> u64 {
        storage::get_request_count(&env)
    }

    /// Request ids filed against an event, paginated
    pub fn get_event_requests(env: Env, event_id: u64, offset: u32, limit: u32) -> Vec<u64> {
        distribution::get_event_requests(&env, event_id, offset, limit)
    }
}
