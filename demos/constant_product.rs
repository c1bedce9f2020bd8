//! Walkthrough of a constant-product pool's life.
//!
//! Loads a ledger configuration, seeds a pool, trades against it in both
//! directions, adds and removes liquidity, and prints the pool after each
//! step. Run with `RUST_LOG=debug` to see every quote the service prices.

use pairpool::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
owner = "0x0101010101010101010101010101010101010101"
supported_assets = [
    "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
]
"#;

fn print_pool<S: PoolStore, C: AssetCustody, R: AssetRegistry>(
    label: &str,
    service: &PoolService<S, C, R>,
    usdc: AssetId,
    weth: AssetId,
) {
    let (r_usdc, r_weth) = service.get_reserves(usdc, weth);
    let shares = service
        .pool(usdc, weth)
        .map_or(Shares::ZERO, Pool::total_shares);
    println!("{label:<28} USDC {r_usdc:>8}  WETH {r_weth:>8}  shares {shares:>6}");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = LedgerConfig::from_toml_str(CONFIG)?;
    let usdc: AssetId = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".parse()?;
    let weth: AssetId = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".parse()?;
    let alice = Actor::from_bytes([0xA1; 20]);
    let bob = Actor::from_bytes([0xB0; 20]);

    let mut custody = MemoryCustody::new();
    for actor in [alice, bob] {
        for asset in [usdc, weth] {
            custody.mint(asset, actor, Amount::new(100_000))?;
        }
    }

    let mut service = PoolService::new(PoolLedger::new(), custody, config.build_registry());
    println!("{} supported assets", service.registry().len());

    let seeded = service.create_pool(usdc, weth, Amount::new(1_000), Amount::new(4_000), alice)?;
    println!("pool {}", seeded.pool_key());
    print_pool("seeded by alice", &service, usdc, weth);

    let quote = service.quote_swap(usdc, weth, Amount::new(100))?;
    let sold = service.swap(usdc, weth, Amount::new(100), quote, bob)?;
    println!("{sold}");
    print_pool("after bob sells USDC", &service, usdc, weth);

    match service.swap(usdc, weth, Amount::new(100), Amount::new(400), bob) {
        Err(err) => println!("rejected: {err}"),
        Ok(receipt) => println!("unexpected fill: {receipt}"),
    }

    let bought = service.swap_exact_out(weth, usdc, Amount::new(50), Amount::new(250), bob)?;
    println!("{bought}");
    print_pool("after bob buys USDC", &service, usdc, weth);

    let (r_usdc, r_weth) = service.get_reserves(usdc, weth);
    let added = service.add_liquidity(usdc, weth, r_usdc, r_weth, bob)?;
    println!("{added}");
    print_pool("after bob doubles the pool", &service, usdc, weth);

    for lp in [alice, bob] {
        let held = service.get_share_balance(usdc, weth, lp);
        let removed = service.remove_liquidity(usdc, weth, held, lp)?;
        println!("{removed}");
    }
    print_pool("drained", &service, usdc, weth);
    println!("{} pool entries kept", service.store().len());

    let custody = service.custody();
    for (name, lp) in [("alice", alice), ("bob", bob)] {
        println!(
            "{name:<6} USDC {:>8}  WETH {:>8}",
            custody.balance_of(usdc, lp),
            custody.balance_of(weth, lp)
        );
    }
    Ok(())
}
