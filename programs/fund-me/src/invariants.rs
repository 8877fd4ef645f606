// ============================================================================
// LEDGER INVARIANTS & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib invariants
//
// This module implements:
// 1. Ledger invariants checked after every step of generated fund/withdraw
//    sequences
// 2. Security properties (owner guard, rollback)
// 3. Deterministic fuzzing of the price conversion
// ============================================================================

#[cfg(test)]
mod invariant_tests {
    use crate::constants::*;
    use crate::errors::ErrorCode;
    use crate::helpers::math::convert_to_usd;
    use crate::helpers::oracle::{PriceData, PriceOracle, PriceSource};
    use crate::state::FundMe;
    use anchor_lang::prelude::*;

    const ONE_SOL: u64 = 1_000_000_000;

    /// Small deterministic generator so every run sees the same sequences
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            self.0 >> 33
        }

        fn below(&mut self, bound: u64) -> u64 {
            self.next() % bound
        }
    }

    struct FixedPrice(PriceData);

    impl PriceSource for FixedPrice {
        fn latest_price(&self, _now: i64) -> Result<PriceData> {
            Ok(self.0)
        }
    }

    /// 2000.00000000 USD per SOL
    fn mock_price() -> FixedPrice {
        FixedPrice(PriceData {
            answer: MOCK_FEED_INITIAL_ANSWER as u64,
            decimals: MOCK_FEED_DECIMALS,
        })
    }

    /// Checks every structural invariant of the ledger against a simulated vault
    fn check_ledger(ledger: &FundMe, vault: u64) {
        let sum: u64 = ledger.contributions.iter().map(|entry| entry.amount).sum();
        assert_eq!(sum, ledger.total_funded, "contributions do not sum to total");
        assert_eq!(ledger.held_balance(), vault, "ledger total differs from vault");

        assert_eq!(ledger.funders.len(), ledger.contributions.len());
        assert!(ledger.funders.len() <= MAX_FUNDERS);
        for funder in &ledger.funders {
            assert!(ledger.contribution_of(funder) > 0, "listed funder with no contribution");
            let listed = ledger.funders.iter().filter(|f| *f == funder).count();
            assert_eq!(listed, 1, "funder listed more than once");
        }
        for pair in ledger.contributions.windows(2) {
            assert!(pair[0].funder < pair[1].funder, "contributions not sorted");
        }
    }

    // ========================================================================
    // SECTION 1: CORE INVARIANTS
    // ========================================================================

    mod invariants {
        use super::*;

        /// INV-1: Conservation of Value
        /// sum(contributions) == total_funded == vault, across random sequences
        #[test]
        fn inv1_conservation_of_value() {
            for seed in 1..=20u64 {
                let mut rng = Lcg(seed);
                let owner = Pubkey::new_unique();
                let mut ledger = FundMe::new(owner, Pubkey::new_unique(), DEFAULT_MINIMUM_USD, 255, 255);
                let price = mock_price();
                let oracle = PriceOracle::new(&price, 0);
                let pool: Vec<Pubkey> = (0..8).map(|_| Pubkey::new_unique()).collect();
                let mut vault: u64 = 0;
                let mut delivered: u64 = 0;
                let mut accepted_total: u64 = 0;
                let mut accepted_since_reset: u64 = 0;

                for _ in 0..200 {
                    if rng.below(25) == 0 {
                        let moved = ledger.withdraw(&owner, |_| Ok(vault)).unwrap().amount;
                        assert_eq!(moved, accepted_since_reset);
                        delivered += moved;
                        vault = 0;
                        accepted_since_reset = 0;
                    } else {
                        let funder = pool[rng.below(pool.len() as u64) as usize];
                        // Roughly a third of these fall under the 25_000_000 floor
                        let amount = 15_000_000 + rng.below(30_000_000);
                        if ledger.fund(funder, amount, &oracle).is_ok() {
                            vault += amount;
                            accepted_total += amount;
                            accepted_since_reset += amount;
                        }
                    }
                    check_ledger(&ledger, vault);
                }

                assert_eq!(delivered + vault, accepted_total);
            }
        }

        /// INV-2: Funder List Correspondence
        /// funders holds each contributor once, in first-contribution order
        #[test]
        fn inv2_funder_order_is_first_contribution_order() {
            let mut rng = Lcg(42);
            let mut ledger = FundMe::new(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                DEFAULT_MINIMUM_USD,
                255,
                255,
            );
            let price = mock_price();
            let oracle = PriceOracle::new(&price, 0);
            let pool: Vec<Pubkey> = (0..16).map(|_| Pubkey::new_unique()).collect();
            let mut first_seen: Vec<Pubkey> = Vec::new();

            for _ in 0..300 {
                let funder = pool[rng.below(pool.len() as u64) as usize];
                ledger.fund(funder, ONE_SOL, &oracle).unwrap();
                if !first_seen.contains(&funder) {
                    first_seen.push(funder);
                }
            }

            assert_eq!(ledger.funders, first_seen);
            for (index, funder) in first_seen.iter().enumerate() {
                assert_eq!(ledger.funder_at(index as u32).unwrap(), *funder);
            }
        }

        /// INV-3: Immutable Configuration
        /// owner, price_feed and minimum_usd never change
        #[test]
        fn inv3_configuration_is_immutable() {
            let owner = Pubkey::new_unique();
            let price_feed = Pubkey::new_unique();
            let mut ledger = FundMe::new(owner, price_feed, DEFAULT_MINIMUM_USD, 255, 255);
            let price = mock_price();
            let oracle = PriceOracle::new(&price, 0);

            for round in 0..5u64 {
                for _ in 0..10 {
                    let _ = ledger.fund(Pubkey::new_unique(), 10_000_000 * (round + 1), &oracle);
                }
                let held = ledger.held_balance();
                ledger.withdraw(&owner, |_| Ok(held)).unwrap();

                assert_eq!(ledger.owner, owner);
                assert_eq!(ledger.price_feed, price_feed);
                assert_eq!(ledger.minimum_usd, DEFAULT_MINIMUM_USD);
            }
        }
    }

    // ========================================================================
    // SECTION 2: SECURITY PROPERTIES
    // ========================================================================

    mod security {
        use super::*;

        /// SEC-1: Owner Guard
        /// No identity other than the owner can ever withdraw
        #[test]
        fn sec1_only_owner_withdraws() {
            let owner = Pubkey::new_unique();
            let mut ledger = FundMe::new(owner, Pubkey::new_unique(), DEFAULT_MINIMUM_USD, 255, 255);
            let price = mock_price();
            let oracle = PriceOracle::new(&price, 0);
            let funders: Vec<Pubkey> = (0..10).map(|_| Pubkey::new_unique()).collect();
            for funder in &funders {
                ledger.fund(*funder, ONE_SOL, &oracle).unwrap();
            }

            let outsiders: Vec<Pubkey> = funders
                .iter()
                .copied()
                .chain([ledger.price_feed, Pubkey::new_unique()])
                .collect();

            let before = ledger.clone();
            for caller in &outsiders {
                let result = ledger.withdraw(caller, |_| panic!("delivery must not run"));
                assert_eq!(
                    result.unwrap_err(),
                    anchor_lang::error::Error::from(ErrorCode::NotOwner)
                );
                assert_eq!(ledger, before);
            }
        }

        /// SEC-2: Atomic Withdrawal
        /// A failed delivery at any round size restores the exact prior state
        #[test]
        fn sec2_failed_delivery_is_atomic() {
            let owner = Pubkey::new_unique();
            let price = mock_price();
            let oracle = PriceOracle::new(&price, 0);

            for size in [0usize, 1, 2, 17, MAX_FUNDERS] {
                let mut ledger = FundMe::new(owner, Pubkey::new_unique(), DEFAULT_MINIMUM_USD, 255, 255);
                for _ in 0..size {
                    ledger.fund(Pubkey::new_unique(), ONE_SOL, &oracle).unwrap();
                }

                let before = ledger.clone();
                let result = ledger.withdraw(&owner, |_| Err(ProgramError::Custom(7).into()));
                assert_eq!(
                    result.unwrap_err(),
                    anchor_lang::error::Error::from(ErrorCode::TransferFailed)
                );
                assert_eq!(ledger, before);
                check_ledger(&ledger, size as u64 * ONE_SOL);
            }
        }

        /// SEC-3: Rejected Contributions Leave No Trace
        #[test]
        fn sec3_rejections_do_not_mutate() {
            let mut rng = Lcg(7);
            let mut ledger = FundMe::new(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                DEFAULT_MINIMUM_USD,
                255,
                255,
            );
            let price = mock_price();
            let oracle = PriceOracle::new(&price, 0);
            ledger.fund(Pubkey::new_unique(), ONE_SOL, &oracle).unwrap();

            for _ in 0..100 {
                let before = ledger.clone();
                let amount = rng.below(25_000_000);
                let result = ledger.fund(Pubkey::new_unique(), amount, &oracle);
                assert!(result.is_err());
                assert_eq!(ledger, before);
            }
        }
    }

    // ========================================================================
    // SECTION 3: FUZZING TARGETS (Property-Based)
    // ========================================================================

    mod fuzzing {
        use super::*;

        /// FUZZ-1: convert_to_usd is monotonic and never rounds up
        #[test]
        fn fuzz1_conversion_properties() {
            let mut rng = Lcg(2024);
            let test_vectors: Vec<(u64, u8, u8)> = (0..500)
                .map(|_| {
                    let price = 1 + rng.below(1_000_000_000_000);
                    let price_decimals = rng.below(19) as u8;
                    let base_decimals = rng.below(19) as u8;
                    (price, price_decimals, base_decimals)
                })
                .collect();

            for (price, price_decimals, base_decimals) in test_vectors {
                let amount = rng.below(1_000_000);
                let usd = convert_to_usd(amount, price, price_decimals, base_decimals).unwrap();
                let next = convert_to_usd(amount + 1, price, price_decimals, base_decimals).unwrap();

                // Property: monotonic in amount
                assert!(next >= usd);

                // Property: floor, usd * 10^k <= amount * price when scaling down
                let source_scale = base_decimals as u32 + price_decimals as u32;
                let product = amount as u128 * price as u128;
                if source_scale >= USD_DECIMALS as u32 {
                    let divisor = 10u128.pow(source_scale - USD_DECIMALS as u32);
                    assert!(usd * divisor <= product);
                    assert!(product - usd * divisor < divisor);
                } else {
                    let factor = 10u128.pow(USD_DECIMALS as u32 - source_scale);
                    assert_eq!(usd, product * factor);
                }
            }
        }

        /// FUZZ-2: Minimum boundary
        /// the smallest accepted amount converts to >= minimum and one less does not
        #[test]
        fn fuzz2_minimum_boundary() {
            let mut rng = Lcg(99);
            for _ in 0..200 {
                // 1.00 to 100_000.00 USD per SOL, 8 decimals
                let answer = 100_000_000 + rng.below(10_000_000_000_000);
                let price = FixedPrice(PriceData { answer, decimals: 8 });
                let oracle = PriceOracle::new(&price, 0);

                // usd = amount * answer * 10, so the floor is ceil(min / (answer * 10))
                let per_lamport = answer as u128 * 10;
                let boundary = ((DEFAULT_MINIMUM_USD + per_lamport - 1) / per_lamport) as u64;

                assert!(oracle.convert_to_usd(boundary).unwrap() >= DEFAULT_MINIMUM_USD);
                assert!(oracle.convert_to_usd(boundary - 1).unwrap() < DEFAULT_MINIMUM_USD);

                let mut ledger = FundMe::new(
                    Pubkey::new_unique(),
                    Pubkey::new_unique(),
                    DEFAULT_MINIMUM_USD,
                    255,
                    255,
                );
                assert!(ledger.fund(Pubkey::new_unique(), boundary - 1, &oracle).is_err());
                assert!(ledger.fund(Pubkey::new_unique(), boundary, &oracle).is_ok());
            }
        }
    }
}
