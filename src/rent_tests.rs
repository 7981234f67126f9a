#![cfg(test)]

extern crate std;

use crate::types::DEFAULT_PROVIDER;
use crate::{IpfsManagerContract, IpfsManagerContractClient};
use soroban_sdk::{
    token,
    testutils::Address as _,
    Address, Env, FromVal, String,
};
use std::println;
use std::vec::Vec;

const STROOPS_PER_CPU_10K: u64 = 25;
const STROOPS_PER_WRITE_KB: u64 = 11_800;

const INITIAL_PRICE: i128 = 100;

#[derive(Debug, Clone)]
pub struct ResourceUsage {
    pub operation: std::string::String,
    pub cpu_instructions: u64,
    pub memory_bytes: u64,
    pub estimated_stroops: u64,
}

impl ResourceUsage {
    fn estimate_stroops(cpu: u64, mem: u64) -> u64 {
        (cpu / 10_000) * STROOPS_PER_CPU_10K + (mem / 1024) * STROOPS_PER_WRITE_KB
    }
}

fn create_token_contract<'a>(e: &Env, admin: &Address) -> (token::Client<'a>, Address) {
    let token_address = e.register_stellar_asset_contract_v2(admin.clone()).address();
    let token = token::Client::new(e, &token_address);
    let admin_client = token::StellarAssetClient::new(e, &token_address);
    admin_client.mint(admin, &1_000_000_000_000_000_000);
    (token, token_address)
}

fn mint_tokens(token_client: &token::Client, _from: &Address, to: &Address, amount: &i128) {
    let admin_client = token::StellarAssetClient::new(&token_client.env, &token_client.address);
    admin_client.mint(to, amount);
}

fn measure_operation<F, R>(env: &Env, operation_name: &str, f: F) -> (R, ResourceUsage)
where
    F: FnOnce() -> R,
{
    env.cost_estimate().budget().reset_default();
    let result = f();
    let cpu = env.cost_estimate().budget().cpu_instruction_cost();
    let mem = env.cost_estimate().budget().memory_bytes_cost();

    let usage = ResourceUsage {
        operation: std::string::String::from(operation_name),
        cpu_instructions: cpu,
        memory_bytes: mem,
        estimated_stroops: ResourceUsage::estimate_stroops(cpu, mem),
    };

    (result, usage)
}

fn print_usage_report(usages: &[ResourceUsage]) {
    println!("\n{}", "=".repeat(80));
    println!("RENT ESTIMATION REPORT - IPFS MANAGER");
    println!("{}", "=".repeat(80));
    println!("{:<30} {:>15} {:>15} {:>15}", "Operation", "CPU Instr.", "Memory (B)", "Est. Stroops");
    println!("{}", "-".repeat(80));

    for usage in usages {
        println!(
            "{:<30} {:>15} {:>15} {:>15}",
            usage.operation,
            usage.cpu_instructions,
            usage.memory_bytes,
            usage.estimated_stroops
        );
    }
    println!("{}", "=".repeat(80));
}

fn setup_rent_env<'a>() -> (
    Env,
    IpfsManagerContractClient<'a>,
    Address,
    token::Client<'a>,
    Address,
) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let (pay_token_client, pay_token_addr) = create_token_contract(&env, &admin);

    let api_url = String::from_val(&env, &"https://ipfs.default.test/api");
    let name = String::from_val(&env, &"default");
    let client = IpfsManagerContractClient::new(
        &env,
        &env.register(
            IpfsManagerContract,
            (&admin, INITIAL_PRICE, &pay_token_addr, api_url, name),
        ),
    );

    (env, client, admin, pay_token_client, pay_token_addr)
}

#[test]
fn test_rent_estimation_provider_operations() {
    let (env, client, admin, _, _) = setup_rent_env();

    let owner = Address::generate(&env);
    let mut usages: Vec<ResourceUsage> = Vec::new();

    let api_url = String::from_val(&env, &"https://ipfs.provider.test/api");
    let name = String::from_val(&env, &"provider");

    let (provider_id, usage) = measure_operation(&env, "register_provider", || {
        client.register_provider(&owner, &9_i128, &api_url, &name)
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "get_provider", || {
        client.get_provider(&provider_id);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "get_per_block_price", || {
        client.get_per_block_price(&provider_id);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "update_per_block_price", || {
        client.update_per_block_price(&owner, &provider_id, &12);
    });
    usages.push(usage);

    let new_name = String::from_val(&env, &"renamed");
    let (_, usage) = measure_operation(&env, "update_provider_name", || {
        client.update_provider_name(&owner, &provider_id, &new_name);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "update_price_admin_path", || {
        client.update_per_block_price(&admin, &provider_id, &9);
    });
    usages.push(usage);

    print_usage_report(&usages);
}

#[test]
fn test_rent_estimation_pin_operations() {
    let (env, client, admin, pay_token_client, _) = setup_rent_env();

    client.update_per_block_price(&admin, &DEFAULT_PROVIDER, &9);
    let payer = Address::generate(&env);
    mint_tokens(&pay_token_client, &admin, &payer, &1_000_000);
    let cid = String::from_val(&env, &"QmRentTest");

    let mut usages: Vec<ResourceUsage> = Vec::new();

    let (_, usage) = measure_operation(&env, "get_total_price_for_blocks", || {
        client.get_total_price_for_blocks(&payer, &10, &DEFAULT_PROVIDER);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "get_num_of_valid_blocks", || {
        client.get_num_of_valid_blocks(&90, &DEFAULT_PROVIDER);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "add_new_valid_block", || {
        client.add_new_valid_block(&payer, &cid, &10, &DEFAULT_PROVIDER, &90);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "add_blocks_for_payment", || {
        client.add_valid_blocks_for_payment(&payer, &cid, &DEFAULT_PROVIDER, &90);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "get_valid_block", || {
        client.get_valid_block(&cid, &DEFAULT_PROVIDER);
    });
    usages.push(usage);

    let (_, usage) = measure_operation(&env, "get_credit", || {
        client.get_credit(&payer, &DEFAULT_PROVIDER);
    });
    usages.push(usage);

    let recipient = Address::generate(&env);
    let (_, usage) = measure_operation(&env, "withdraw_provider_revenue", || {
        client.withdraw_provider_revenue(&admin, &DEFAULT_PROVIDER, &recipient);
    });
    usages.push(usage);

    print_usage_report(&usages);
}

#[test]
fn test_storage_footprint_estimation() {
    println!("\n{}", "=".repeat(80));
    println!("STORAGE FOOTPRINT ESTIMATES - IPFS MANAGER");
    println!("{}", "=".repeat(80));

    println!("\nManagerConfig struct:");
    println!("  - Symbol: ~10 bytes");
    println!("  - Address (pay_token): ~32 bytes");
    println!("  - u32 (start_ledger): 4 bytes");
    println!("  - Total: ~50 bytes");

    println!("\nProvider struct (per registered provider):");
    println!("  - u64 (id): 8 bytes");
    println!("  - Address (owner): ~32 bytes");
    println!("  - i128 (price_per_block): 16 bytes");
    println!("  - String (api_url): ~60 bytes");
    println!("  - String (name): ~30 bytes");
    println!("  - i128 (revenue): 16 bytes");
    println!("  - u32 (added_at): 4 bytes");
    println!("  - Total per provider: ~170 bytes");

    println!("\nPinRecord (per pinned cid per provider):");
    println!("  - key BytesN<32> + u64: 40 bytes");
    println!("  - u32 (end_block) + u32 (updated_at): 8 bytes");
    println!("  - Address (donor): ~32 bytes");
    println!("  - Total per pin: ~80 bytes");

    println!("\n--- TOTAL ESTIMATES ---");
    println!("Typical (5 providers, 200 pins, 50 credit entries):");
    println!("  Config + AdminList: ~150 bytes");
    println!("  Providers: 5 * 170 = 850 bytes");
    println!("  Pins: 200 * 80 = 16,000 bytes");
    println!("  Credits: 50 * 60 = 3,000 bytes");
    println!("  Total: ~20,000 bytes");
    println!("  Monthly rent: ~8,500 stroops (~0.00085 XLM)");
}
