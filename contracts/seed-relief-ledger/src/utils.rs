use crate::error::ContractError;
use core::ops::Range;
use soroban_sdk::{Env, String};

pub const MIN_SEVERITY: u32 = 1;
pub const MAX_SEVERITY: u32 = 5;
pub const MAX_NAME_LEN: u32 = 64;
pub const MAX_TEXT_LEN: u32 = 256;

// Block height of the ledger closing this transaction
pub fn current_height(env: &Env) -> u64 {
    env.ledger().sequence() as u64
}

pub fn is_valid_severity(severity: u32) -> bool {
    (MIN_SEVERITY..=MAX_SEVERITY).contains(&severity)
}

// Names and identifiers must be present
pub fn is_valid_name(name: &String) -> bool {
    name.len() > 0 && name.len() <= MAX_NAME_LEN
}

// Free text may be empty
pub fn is_valid_text(text: &String) -> bool {
    text.len() <= MAX_TEXT_LEN
}

pub fn require_valid_name(name: &String) -> Result<(), ContractError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ContractError::InvalidInput)
    }
}

pub fn require_valid_text(text: &String) -> Result<(), ContractError> {
    if is_valid_text(text) {
        Ok(())
    } else {
        Err(ContractError::InvalidInput)
    }
}

pub fn require_positive(quantity: u64) -> Result<(), ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// The `[offset, offset + limit)` window over `total` items, clamped to `total`.
pub fn page_range(offset: u32, limit: u32, total: u32) -> Range<u32> {
    let end = offset.saturating_add(limit).min(total);
    offset.min(end)..end
}
