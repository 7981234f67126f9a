use soroban_sdk::{contracterror, contracttype, symbol_short, Address, BytesN, String, Symbol};

// =============================================================================
// Constants
// =============================================================================

/// Provider id registered by the constructor. Callers from the single-provider
/// deployments address this id.
pub const DEFAULT_PROVIDER: u64 = 0;

pub const IPFSMGR: Symbol = symbol_short!("IPFSMGR");

// =============================================================================
// Storage Keys
// =============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Admin,
    AdminList,
    Provider(u64),
    ProviderCount,
    Pin(u64, BytesN<32>),
    Credit(u64, Address),
}

// =============================================================================
// Data Structs
// =============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerConfig {
    pub symbol: Symbol,
    pub pay_token: Address,
    pub start_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Provider {
    pub id: u64,
    pub owner: Address,
    pub price_per_block: i128,
    pub api_url: String,
    pub name: String,
    pub revenue: i128,
    pub added_at: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PinRecord {
    pub end_block: u32,
    pub updated_at: u32,
    pub donor: Address,
}

// =============================================================================
// Error Enum
// =============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Authorization
    Unauthorized = 1,
    NotAdmin = 2,
    AdminExists = 3,
    AdminNotFound = 4,
    CannotRemoveInitialAdmin = 5,

    // Not found
    ProviderNotFound = 10,

    // Validation
    InvalidPrice = 20,
    ZeroBlocks = 21,
    InvalidCid = 22,
    InvalidAmount = 23,
    AmountOverflow = 24,

    // Payment
    InsufficientPayment = 30,
    NoRevenue = 31,
}

// =============================================================================
// Event Structs
// =============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddProviderEvent {
    pub owner: Address,
    pub provider_id: u64,
    pub price_per_block: i128,
    pub api_url: String,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateValidBlockEvent {
    pub donor: Address,
    pub end_block: u32,
    pub provider_id: u64,
    pub cid: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderPriceEvent {
    pub provider_id: u64,
    pub price_per_block: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderApiUrlEvent {
    pub provider_id: u64,
    pub api_url: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderOwnerEvent {
    pub provider_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderNameEvent {
    pub provider_id: u64,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawRevenueEvent {
    pub provider_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminEvent {
    pub admin: Address,
}
