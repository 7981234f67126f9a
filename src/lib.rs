#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod types;
mod storage;
mod admin;
mod providers;
mod pins;

use types::{Error, ManagerConfig, Provider, DEFAULT_PROVIDER, IPFSMGR};

#[cfg(test)]
mod rent_tests;

#[contract]
pub struct IpfsManagerContract;

#[contractimpl]
impl IpfsManagerContract {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Stores the config and admin list and registers provider 0, owned by the
    /// admin, at the initial price. Provider 0 serves callers from the old
    /// single-provider deployments.
    pub fn __constructor(
        e: Env,
        admin_addr: Address,
        price_per_block: i128,
        pay_token: Address,
        api_url: String,
        name: String,
    ) {
        if price_per_block <= 0 {
            panic!("price_per_block must be > 0");
        }

        let config = ManagerConfig {
            symbol: IPFSMGR,
            pay_token,
            start_ledger: e.ledger().sequence(),
        };

        let mut admin_list = Vec::new(&e);
        admin_list.push_back(admin_addr.clone());

        e.storage()
            .persistent()
            .set(&types::DataKey::Admin, &admin_addr);
        e.storage()
            .persistent()
            .set(&types::DataKey::AdminList, &admin_list);
        storage::set_config(&e, &config);

        let default_provider = Provider {
            id: DEFAULT_PROVIDER,
            owner: admin_addr,
            price_per_block,
            api_url,
            name,
            revenue: 0,
            added_at: e.ledger().sequence(),
        };
        storage::set_provider(&e, &default_provider);
        storage::set_provider_count(&e, 1);
    }

    // =========================================================================
    // Provider Registry
    // =========================================================================

    pub fn register_provider(
        e: Env,
        caller: Address,
        price_per_block: i128,
        api_url: String,
        name: String,
    ) -> Result<u64, Error> {
        providers::register_provider(&e, &caller, price_per_block, api_url, name)
    }

    pub fn get_provider(e: Env, provider_id: u64) -> Result<Provider, Error> {
        providers::get_provider(&e, provider_id)
    }

    pub fn get_provider_count(e: Env) -> u64 {
        storage::provider_count(&e)
    }

    pub fn get_per_block_price(e: Env, provider_id: u64) -> Result<i128, Error> {
        Ok(providers::get_provider(&e, provider_id)?.price_per_block)
    }

    // =========================================================================
    // Price Table
    // =========================================================================

    pub fn update_per_block_price(
        e: Env,
        caller: Address,
        provider_id: u64,
        new_price: i128,
    ) -> Result<(), Error> {
        providers::update_per_block_price(&e, &caller, provider_id, new_price)
    }

    pub fn update_provider_api_url(
        e: Env,
        caller: Address,
        provider_id: u64,
        api_url: String,
    ) -> Result<(), Error> {
        providers::update_provider_api_url(&e, &caller, provider_id, api_url)
    }

    pub fn update_provider_name(
        e: Env,
        caller: Address,
        provider_id: u64,
        name: String,
    ) -> Result<(), Error> {
        providers::update_provider_name(&e, &caller, provider_id, name)
    }

    pub fn update_provider_owner(
        e: Env,
        caller: Address,
        provider_id: u64,
        new_owner: Address,
    ) -> Result<(), Error> {
        providers::update_provider_owner(&e, &caller, provider_id, new_owner)
    }

    // =========================================================================
    // Quote Calculator
    // =========================================================================

    /// Returns the exact total for `num_blocks` at the provider's current
    /// price, and the caller's carried credit with that provider.
    pub fn get_total_price_for_blocks(
        e: Env,
        caller: Address,
        num_blocks: u32,
        provider_id: u64,
    ) -> Result<(i128, i128), Error> {
        pins::quote(&e, &caller, num_blocks, provider_id)
    }

    pub fn get_num_of_valid_blocks(
        e: Env,
        payment: i128,
        provider_id: u64,
    ) -> Result<u32, Error> {
        let provider = providers::get_provider(&e, provider_id)?;
        pins::valid_blocks_for(payment, provider.price_per_block)
    }

    // =========================================================================
    // Block Extension Engine
    // =========================================================================

    pub fn add_new_valid_block(
        e: Env,
        caller: Address,
        cid: String,
        num_blocks: u32,
        provider_id: u64,
        payment: i128,
    ) -> Result<u32, Error> {
        pins::extend_valid_block(&e, &caller, &cid, num_blocks, provider_id, payment)
    }

    pub fn add_valid_blocks_for_payment(
        e: Env,
        caller: Address,
        cid: String,
        provider_id: u64,
        payment: i128,
    ) -> Result<u32, Error> {
        pins::extend_for_payment(&e, &caller, &cid, provider_id, payment)
    }

    pub fn get_valid_block(e: Env, cid: String, provider_id: u64) -> u32 {
        pins::get_valid_block(&e, &cid, provider_id)
    }

    pub fn get_credit(e: Env, payer: Address, provider_id: u64) -> i128 {
        storage::credit(&e, provider_id, &payer)
    }

    // =========================================================================
    // Revenue
    // =========================================================================

    pub fn withdraw_provider_revenue(
        e: Env,
        caller: Address,
        provider_id: u64,
        recipient: Address,
    ) -> Result<i128, Error> {
        providers::withdraw_revenue(&e, &caller, provider_id, &recipient)
    }

    // =========================================================================
    // Admin Methods
    // =========================================================================

    pub fn add_admin(e: Env, caller: Address, new_admin: Address) -> Result<bool, Error> {
        admin::add_admin(&e, &caller, &new_admin)
    }

    pub fn remove_admin(
        e: Env,
        caller: Address,
        admin_to_remove: Address,
    ) -> Result<bool, Error> {
        admin::remove_admin(&e, &caller, &admin_to_remove)
    }

    pub fn is_admin(e: Env, address: Address) -> bool {
        admin::is_admin(&e, &address)
    }

    pub fn get_admin_list(e: Env) -> Vec<Address> {
        admin::get_admin_list(&e)
    }

    // =========================================================================
    // View Methods
    // =========================================================================

    pub fn symbol(e: Env) -> Symbol {
        storage::config(&e).symbol
    }

    pub fn pay_token(e: Env) -> Address {
        storage::config(&e).pay_token
    }

    pub fn default_provider(_e: Env) -> u64 {
        DEFAULT_PROVIDER
    }
}
