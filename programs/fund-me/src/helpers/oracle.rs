use anchor_lang::prelude::*;
use crate::constants::*;
use crate::helpers::math;

/// A price answer and its decimal scale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceData {
    /// USD per whole base unit, scaled by 10^decimals
    pub answer: u64,
    pub decimals: u8,
}

/// Read-only source of the base currency's USD price
///
/// Implementations fail with `OracleUnavailable` rather than returning a
/// default price when the answer cannot be trusted.
pub trait PriceSource {
    fn latest_price(&self, now: i64) -> Result<PriceData>;
}

/// Converts base-currency amounts to USD through a bound price source
pub struct PriceOracle<'a, S: PriceSource> {
    source: &'a S,
    now: i64,
    base_decimals: u8,
}

impl<'a, S: PriceSource> PriceOracle<'a, S> {
    /// Oracle over lamport amounts, reading the source at `now`
    pub fn new(source: &'a S, now: i64) -> Self {
        Self {
            source,
            now,
            base_decimals: LAMPORT_DECIMALS,
        }
    }

    /// Override the base currency's smallest-unit decimals (e.g. 18 for wei)
    pub fn with_base_decimals(mut self, base_decimals: u8) -> Self {
        self.base_decimals = base_decimals;
        self
    }

    pub fn base_decimals(&self) -> u8 {
        self.base_decimals
    }

    pub fn get_price(&self) -> Result<PriceData> {
        self.source.latest_price(self.now)
    }

    /// USD value (USD_DECIMALS fixed-point) of `amount`, floored
    pub fn convert_to_usd(&self, amount: u64) -> Result<u128> {
        let price = self.get_price()?;
        math::convert_to_usd(amount, price.answer, price.decimals, self.base_decimals)
    }
}
