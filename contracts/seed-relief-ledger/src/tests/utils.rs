use crate::{LedgerPolicy, SeedReliefLedger, SeedReliefLedgerClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

pub const FACILITY: &str = "FAC-1";
pub const START_HEIGHT: u32 = 12345;

const FILLER: [u8; 512] = [b'x'; 512];

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: SeedReliefLedgerClient<'static>,
    pub deployer: Address,
}

impl TestContext {
    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    /// A string of exactly `len` bytes
    pub fn text_of_len(&self, len: usize) -> String {
        String::from_bytes(&self.env, &FILLER[..len])
    }

    pub fn facility(&self) -> String {
        self.text(FACILITY)
    }

    pub fn new_address(&self) -> Address {
        Address::generate(&self.env)
    }

    /// Adds a fresh authorizer through the deployer
    pub fn new_authorizer(&self) -> Address {
        let authorizer = self.new_address();
        self.client.add_authorizer(&self.deployer, &authorizer);
        authorizer
    }

    pub fn advance_blocks(&self, blocks: u32) {
        let current = self.env.ledger().sequence();
        self.env.ledger().set_sequence_number(current + blocks);
    }

    /// Declares "Hurricane Alpha" (severity 4, start 12345) as the deployer
    pub fn declare_hurricane(&self) -> u64 {
        self.client.declare_disaster_event(
            &self.deployer,
            &self.text("Hurricane Alpha"),
            &self.text("Category 4 hurricane affecting coastal regions"),
            &self.text("Eastern Seaboard"),
            &4u32,
            &12345u64,
        )
    }

    pub fn register_tomato(&self) -> u64 {
        self.client.register_variety(
            &self.deployer,
            &self.text("Heritage Tomato"),
            &self.text("Solanum lycopersicum"),
            &self.text("Andean region"),
        )
    }

    pub fn stock(&self, variety_id: u64, quantity: u64) {
        self.client.add_inventory(
            &self.deployer,
            &self.facility(),
            &variety_id,
            &quantity,
            &24600u64,
        );
    }

    pub fn request(&self, requester: &Address, event_id: u64, variety_id: u64, quantity: u64) -> u64 {
        self.client.request_seed_distribution(
            requester,
            &event_id,
            &self.facility(),
            &variety_id,
            &quantity,
            &self.text("Community garden restoration after hurricane"),
        )
    }
}

pub fn open_policy() -> LedgerPolicy {
    LedgerPolicy {
        restrict_variety_registration: false,
        restrict_inventory_updates: false,
    }
}

pub fn restricted_policy() -> LedgerPolicy {
    LedgerPolicy {
        restrict_variety_registration: true,
        restrict_inventory_updates: true,
    }
}

/// Registers the contract without initializing it
pub fn setup_uninitialized() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(START_HEIGHT);

    let contract_id = env.register(SeedReliefLedger {}, ());
    let client = SeedReliefLedgerClient::new(&env, &contract_id);
    let deployer = Address::generate(&env);

    TestContext {
        env,
        contract_id,
        client,
        deployer,
    }
}

pub fn setup_with_policy(policy: LedgerPolicy) -> TestContext {
    let ctx = setup_uninitialized();
    ctx.client.initialize(&ctx.deployer, &policy);
    ctx
}

pub fn setup() -> TestContext {
    setup_with_policy(open_policy())
}
