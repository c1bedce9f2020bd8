//! Property-based tests for service-level conservation.
//!
//! Random sequences of swaps, mints and burns by several participants must
//! leave, after every step, successful or not:
//!
//! 1. **Share conservation**: participant balances sum to `total_shares`.
//! 2. **Custody agreement**: the vault holds exactly the pool reserves.
//! 3. **Pool consistency**: reserves and supply are all zero or all positive.

use proptest::prelude::*;

use super::PoolService;
use crate::custody::MemoryCustody;
use crate::domain::{Actor, Amount, AssetId, Shares};
use crate::ledger::PoolLedger;
use crate::registry::AssetWhitelist;

const OWNER: Actor = Actor::from_bytes([0x01; 20]);
const TKA: AssetId = AssetId::from_bytes([0x0A; 20]);
const TKB: AssetId = AssetId::from_bytes([0x0B; 20]);
const ACTORS: [Actor; 3] = [
    Actor::from_bytes([0x11; 20]),
    Actor::from_bytes([0x22; 20]),
    Actor::from_bytes([0x33; 20]),
];

#[derive(Debug, Clone)]
enum Op {
    Swap { who: usize, a_to_b: bool, amount: u128 },
    Add { who: usize, amount_a: u128, amount_b: u128 },
    Remove { who: usize, per_mille: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let who = 0usize..ACTORS.len();
    prop_oneof![
        (who.clone(), any::<bool>(), 1u128..=50_000u128)
            .prop_map(|(who, a_to_b, amount)| Op::Swap { who, a_to_b, amount }),
        (who.clone(), 1u128..=50_000u128, 1u128..=50_000u128)
            .prop_map(|(who, amount_a, amount_b)| Op::Add { who, amount_a, amount_b }),
        (who, 1u128..=1_000u128).prop_map(|(who, per_mille)| Op::Remove { who, per_mille }),
    ]
}

type Service = PoolService<PoolLedger, MemoryCustody, AssetWhitelist>;

fn funded_service() -> Result<Service, TestCaseError> {
    let mut custody = MemoryCustody::new();
    for actor in ACTORS {
        for asset in [TKA, TKB] {
            custody
                .mint(asset, actor, Amount::new(10_000_000))
                .map_err(|_| TestCaseError::fail("mint"))?;
        }
    }
    let registry = AssetWhitelist::with_assets(OWNER, [TKA, TKB]);
    Ok(PoolService::new(PoolLedger::new(), custody, registry))
}

fn check(svc: &Service) -> Result<(), TestCaseError> {
    let (ra, rb) = svc.get_reserves(TKA, TKB);
    prop_assert_eq!(svc.custody().vault_balance(TKA), ra);
    prop_assert_eq!(svc.custody().vault_balance(TKB), rb);

    let Some(pool) = svc.pool(TKA, TKB) else {
        return Err(TestCaseError::fail("pool entry must exist"));
    };
    prop_assert_eq!(pool.check_invariants(), Ok(()));
    let sum = ACTORS
        .iter()
        .map(|actor| svc.get_share_balance(TKA, TKB, *actor).get())
        .sum::<u128>();
    prop_assert_eq!(sum, pool.total_shares().get());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn operation_sequences_conserve_shares_and_custody(
        seed_a in 1_000u128..=1_000_000u128,
        seed_b in 1_000u128..=1_000_000u128,
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut svc = funded_service()?;
        let created = svc.create_pool(TKA, TKB, Amount::new(seed_a), Amount::new(seed_b), ACTORS[0]);
        prop_assert!(created.is_ok());
        check(&svc)?;

        for op in ops {
            // Failures are allowed; partial effects are not.
            match op {
                Op::Swap { who, a_to_b, amount } => {
                    let (asset_in, asset_out) = if a_to_b { (TKA, TKB) } else { (TKB, TKA) };
                    let _ = svc.swap(asset_in, asset_out, Amount::new(amount), Amount::ZERO, ACTORS[who]);
                }
                Op::Add { who, amount_a, amount_b } => {
                    let _ = svc.add_liquidity(
                        TKA,
                        TKB,
                        Amount::new(amount_a),
                        Amount::new(amount_b),
                        ACTORS[who],
                    );
                }
                Op::Remove { who, per_mille } => {
                    let held = svc.get_share_balance(TKA, TKB, ACTORS[who]).get();
                    let burn = held * per_mille / 1_000;
                    let _ = svc.remove_liquidity(TKA, TKB, Shares::new(burn), ACTORS[who]);
                }
            }
            check(&svc)?;
        }
    }

    #[test]
    fn mint_then_burn_never_profits(
        deposit_a in 1u128..=1_000_000u128,
        deposit_b in 1u128..=1_000_000u128,
    ) {
        let mut svc = funded_service()?;
        let seeded = svc.create_pool(TKA, TKB, Amount::new(3_000), Amount::new(7_000), ACTORS[0]);
        prop_assert!(seeded.is_ok());

        let lp = ACTORS[1];
        let Ok(minted) = svc.add_liquidity(TKA, TKB, Amount::new(deposit_a), Amount::new(deposit_b), lp) else {
            return Ok(());
        };
        let Ok(burned) = svc.remove_liquidity(TKA, TKB, minted.shares(), lp) else {
            return Err(TestCaseError::fail("burning freshly minted shares must succeed"));
        };
        prop_assert!(burned.amount_a() <= minted.amount_a());
        prop_assert!(burned.amount_b() <= minted.amount_b());
        check(&svc)?;
    }
}
