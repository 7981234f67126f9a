use soroban_sdk::{symbol_short, token, Address, Bytes, BytesN, Env, String};

use crate::storage;
use crate::types::{Error, PinRecord, UpdateValidBlockEvent};

const MAX_CID_LEN: u32 = 256;

pub fn cid_hash(env: &Env, cid: &String) -> Result<BytesN<32>, Error> {
    if cid.len() == 0 || cid.len() > MAX_CID_LEN {
        return Err(Error::InvalidCid);
    }
    let len = cid.len() as usize;
    let mut buf = [0u8; MAX_CID_LEN as usize];
    let slice = &mut buf[0..len];
    cid.copy_into_slice(slice);
    let mut b = Bytes::new(env);
    b.copy_from_slice(0, slice);
    Ok(env.crypto().sha256(&b).into())
}

fn total_price(price_per_block: i128, num_blocks: u32) -> Result<i128, Error> {
    price_per_block
        .checked_mul(num_blocks as i128)
        .ok_or(Error::AmountOverflow)
}

/// Quote for buying `num_blocks` from a provider: the exact total at the
/// current price, plus the caller's carried credit with that provider. The
/// credit is applied against the total on the next purchase, so the amount
/// actually due is `total - min(credit, total)`.
pub fn quote(
    env: &Env,
    caller: &Address,
    num_blocks: u32,
    provider_id: u64,
) -> Result<(i128, i128), Error> {
    let provider = storage::provider(env, provider_id).ok_or(Error::ProviderNotFound)?;
    if num_blocks == 0 {
        return Err(Error::ZeroBlocks);
    }
    let total = total_price(provider.price_per_block, num_blocks)?;
    let credit = storage::credit(env, provider_id, caller);
    Ok((total, credit))
}

/// Whole blocks a payment covers at a provider's current price, truncating.
pub fn valid_blocks_for(payment: i128, price_per_block: i128) -> Result<u32, Error> {
    if price_per_block <= 0 {
        return Err(Error::InvalidPrice);
    }
    if payment < 0 {
        return Err(Error::InvalidAmount);
    }
    u32::try_from(payment / price_per_block).map_err(|_| Error::AmountOverflow)
}

/// Extends the expiration of `cid` at a provider by `num_blocks`, collecting
/// `payment` through the pay token. An expired pin restarts from the current
/// ledger sequence; a live pin extends from its current end. All checks and
/// arithmetic happen before the transfer, so a rejected call moves no money
/// and writes nothing.
pub fn extend_valid_block(
    env: &Env,
    caller: &Address,
    cid: &String,
    num_blocks: u32,
    provider_id: u64,
    payment: i128,
) -> Result<u32, Error> {
    caller.require_auth();

    if payment < 0 {
        return Err(Error::InvalidAmount);
    }

    let mut provider = storage::provider(env, provider_id).ok_or(Error::ProviderNotFound)?;
    if num_blocks == 0 {
        return Err(Error::ZeroBlocks);
    }
    let hash = cid_hash(env, cid)?;

    let total = total_price(provider.price_per_block, num_blocks)?;
    let credit = storage::credit(env, provider_id, caller);
    let applied = credit.min(total);
    let due = total - applied;

    if payment < due {
        return Err(Error::InsufficientPayment);
    }

    let new_revenue = provider
        .revenue
        .checked_add(total)
        .ok_or(Error::AmountOverflow)?;
    let new_credit = (credit - applied)
        .checked_add(payment - due)
        .ok_or(Error::AmountOverflow)?;

    let now = env.ledger().sequence();
    let current_end = storage::pin(env, provider_id, &hash)
        .map(|r| r.end_block)
        .unwrap_or(0);
    let end_block = current_end
        .max(now)
        .checked_add(num_blocks)
        .ok_or(Error::AmountOverflow)?;

    if payment > 0 {
        let config = storage::config(env);
        let token_client = token::Client::new(env, &config.pay_token);
        token_client.transfer(caller, &env.current_contract_address(), &payment);
    }

    provider.revenue = new_revenue;
    storage::set_provider(env, &provider);
    storage::set_credit(env, provider_id, caller, new_credit);

    let record = PinRecord {
        end_block,
        updated_at: now,
        donor: caller.clone(),
    };
    storage::set_pin(env, provider_id, &hash, &record);

    let event = UpdateValidBlockEvent {
        donor: caller.clone(),
        end_block,
        provider_id,
        cid: cid.clone(),
    };
    env.events()
        .publish((symbol_short!("PIN"), symbol_short!("extend")), event);

    Ok(end_block)
}

/// Legacy purchase path: buy however many whole blocks the payment (plus any
/// carried credit) covers at the provider's current price.
pub fn extend_for_payment(
    env: &Env,
    caller: &Address,
    cid: &String,
    provider_id: u64,
    payment: i128,
) -> Result<u32, Error> {
    if payment < 0 {
        return Err(Error::InvalidAmount);
    }

    let provider = storage::provider(env, provider_id).ok_or(Error::ProviderNotFound)?;
    let credit = storage::credit(env, provider_id, caller);
    let funds = payment.checked_add(credit).ok_or(Error::AmountOverflow)?;

    let num_blocks = valid_blocks_for(funds, provider.price_per_block)?;
    if num_blocks == 0 {
        return Err(Error::InsufficientPayment);
    }

    extend_valid_block(env, caller, cid, num_blocks, provider_id, payment)
}

pub fn get_valid_block(env: &Env, cid: &String, provider_id: u64) -> u32 {
    match cid_hash(env, cid) {
        Ok(hash) => storage::pin(env, provider_id, &hash)
            .map(|r| r.end_block)
            .unwrap_or(0),
        Err(_) => 0,
    }
}
