use soroban_sdk::{symbol_short, token, Address, Env, String};

use crate::admin::is_admin;
use crate::storage;
use crate::types::{
    AddProviderEvent, Error, Provider, ProviderApiUrlEvent, ProviderNameEvent,
    ProviderOwnerEvent, ProviderPriceEvent, WithdrawRevenueEvent,
};

pub fn register_provider(
    env: &Env,
    caller: &Address,
    price_per_block: i128,
    api_url: String,
    name: String,
) -> Result<u64, Error> {
    caller.require_auth();

    if price_per_block <= 0 {
        return Err(Error::InvalidPrice);
    }

    let provider_id = storage::provider_count(env);
    let provider = Provider {
        id: provider_id,
        owner: caller.clone(),
        price_per_block,
        api_url: api_url.clone(),
        name: name.clone(),
        revenue: 0,
        added_at: env.ledger().sequence(),
    };

    storage::set_provider(env, &provider);
    storage::set_provider_count(env, provider_id + 1);

    let event = AddProviderEvent {
        owner: caller.clone(),
        provider_id,
        price_per_block,
        api_url,
        name,
    };
    env.events()
        .publish((symbol_short!("PROVIDER"), symbol_short!("add")), event);

    Ok(provider_id)
}

pub fn get_provider(env: &Env, provider_id: u64) -> Result<Provider, Error> {
    storage::provider(env, provider_id).ok_or(Error::ProviderNotFound)
}

/// Price and metadata updates are open to the provider's owner and to the
/// contract admins, which preserves the single-admin behavior of the original
/// one-provider deployments.
pub fn require_owner_auth(env: &Env, caller: &Address, provider: &Provider) -> Result<(), Error> {
    if *caller != provider.owner && !is_admin(env, caller) {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn update_per_block_price(
    env: &Env,
    caller: &Address,
    provider_id: u64,
    new_price: i128,
) -> Result<(), Error> {
    let mut provider = get_provider(env, provider_id)?;
    require_owner_auth(env, caller, &provider)?;

    if new_price <= 0 {
        return Err(Error::InvalidPrice);
    }

    provider.price_per_block = new_price;
    storage::set_provider(env, &provider);

    let event = ProviderPriceEvent {
        provider_id,
        price_per_block: new_price,
    };
    env.events()
        .publish((symbol_short!("PROVIDER"), symbol_short!("price")), event);

    Ok(())
}

pub fn update_provider_api_url(
    env: &Env,
    caller: &Address,
    provider_id: u64,
    api_url: String,
) -> Result<(), Error> {
    let mut provider = get_provider(env, provider_id)?;
    require_owner_auth(env, caller, &provider)?;

    provider.api_url = api_url.clone();
    storage::set_provider(env, &provider);

    let event = ProviderApiUrlEvent {
        provider_id,
        api_url,
    };
    env.events()
        .publish((symbol_short!("PROVIDER"), symbol_short!("api")), event);

    Ok(())
}

pub fn update_provider_name(
    env: &Env,
    caller: &Address,
    provider_id: u64,
    name: String,
) -> Result<(), Error> {
    let mut provider = get_provider(env, provider_id)?;
    require_owner_auth(env, caller, &provider)?;

    provider.name = name.clone();
    storage::set_provider(env, &provider);

    let event = ProviderNameEvent { provider_id, name };
    env.events()
        .publish((symbol_short!("PROVIDER"), symbol_short!("name")), event);

    Ok(())
}

pub fn update_provider_owner(
    env: &Env,
    caller: &Address,
    provider_id: u64,
    new_owner: Address,
) -> Result<(), Error> {
    let mut provider = get_provider(env, provider_id)?;
    require_owner_auth(env, caller, &provider)?;

    provider.owner = new_owner.clone();
    storage::set_provider(env, &provider);

    let event = ProviderOwnerEvent {
        provider_id,
        owner: new_owner,
    };
    env.events()
        .publish((symbol_short!("PROVIDER"), symbol_short!("owner")), event);

    Ok(())
}

pub fn withdraw_revenue(
    env: &Env,
    caller: &Address,
    provider_id: u64,
    recipient: &Address,
) -> Result<i128, Error> {
    let mut provider = get_provider(env, provider_id)?;
    require_owner_auth(env, caller, &provider)?;

    let amount = provider.revenue;
    if amount <= 0 {
        return Err(Error::NoRevenue);
    }

    let config = storage::config(env);
    let token_client = token::Client::new(env, &config.pay_token);
    token_client.transfer(&env.current_contract_address(), recipient, &amount);

    provider.revenue = 0;
    storage::set_provider(env, &provider);

    let event = WithdrawRevenueEvent {
        provider_id,
        recipient: recipient.clone(),
        amount,
    };
    env.events()
        .publish((symbol_short!("REVENUE"), symbol_short!("withdraw")), event);

    Ok(amount)
}
