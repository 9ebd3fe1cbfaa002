use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Authorization errors
    NotAuthorized = 100,

    // Lookup errors
    NotFound = 101,

    // Initialization errors
    AlreadyInitialized = 102,
    NotInitialized = 103,

    // Authorizer registry errors
    AlreadyAuthorized = 104,
    NotAuthorizedMember = 105,

    // Lifecycle errors
    InvalidState = 106,
    InsufficientInventory = 107,

    // Validation errors
    InvalidInput = 108,
    InvalidDate = 109,
    LastAuthorizer = 110,
    QuantityOverflow = 111,
    CounterOverflow = 112,
}
