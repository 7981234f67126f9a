use soroban_sdk::{Address, BytesN, Env};

use crate::types::{DataKey, ManagerConfig, PinRecord, Provider};

pub fn config(env: &Env) -> ManagerConfig {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("config not initialized")
}

pub fn set_config(env: &Env, config: &ManagerConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
}

pub fn provider(env: &Env, provider_id: u64) -> Option<Provider> {
    env.storage().persistent().get(&DataKey::Provider(provider_id))
}

pub fn set_provider(env: &Env, provider: &Provider) {
    env.storage()
        .persistent()
        .set(&DataKey::Provider(provider.id), provider);
}

pub fn provider_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ProviderCount)
        .unwrap_or(0)
}

pub fn set_provider_count(env: &Env, count: u64) {
    env.storage().persistent().set(&DataKey::ProviderCount, &count);
}

pub fn pin(env: &Env, provider_id: u64, cid_hash: &BytesN<32>) -> Option<PinRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Pin(provider_id, cid_hash.clone()))
}

pub fn set_pin(env: &Env, provider_id: u64, cid_hash: &BytesN<32>, record: &PinRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Pin(provider_id, cid_hash.clone()), record);
}

pub fn credit(env: &Env, provider_id: u64, payer: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Credit(provider_id, payer.clone()))
        .unwrap_or(0)
}

pub fn set_credit(env: &Env, provider_id: u64, payer: &Address, amount: i128) {
    let key = DataKey::Credit(provider_id, payer.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}
