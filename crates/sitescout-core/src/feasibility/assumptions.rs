use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SiteScoutError;
use crate::types::{Currency, Money, Percent};
use crate::SiteScoutResult;

/// Monthly staff cost used when the caller does not supply one.
pub const DEFAULT_MONTHLY_STAFF_COST: Money = dec!(150000);

/// COGS as a percentage of revenue used when the caller does not supply one.
pub const DEFAULT_COGS_PCT: Percent = dec!(30);

/// Accepted range for an input-surface option (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRange {
    pub field: &'static str,
    pub min: Decimal,
    pub max: Decimal,
}

impl InputRange {
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, value: Decimal) -> SiteScoutResult<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(SiteScoutError::InvalidInput {
                field: self.field.to_string(),
                reason: format!(
                    "{} is outside the accepted range [{}, {}]",
                    value, self.min, self.max
                ),
            })
        }
    }
}

pub const AREA_SQFT_RANGE: InputRange = InputRange {
    field: "area_sqft",
    min: dec!(100),
    max: dec!(10000),
};

pub const RENT_PER_SQFT_RANGE: InputRange = InputRange {
    field: "rent_per_sqft",
    min: dec!(10),
    max: dec!(5000),
};

pub const CAPITAL_INVESTED_RANGE: InputRange = InputRange {
    field: "capital_invested",
    min: dec!(500000),
    max: dec!(500000000),
};

pub const AVG_TICKET_PRICE_RANGE: InputRange = InputRange {
    field: "avg_ticket_price",
    min: dec!(50),
    max: dec!(50000),
};

pub const DAILY_ORDERS_RANGE: InputRange = InputRange {
    field: "daily_orders",
    min: dec!(10),
    max: dec!(5000),
};

fn default_staff_cost() -> Money {
    DEFAULT_MONTHLY_STAFF_COST
}

fn default_cogs_pct() -> Percent {
    DEFAULT_COGS_PCT
}

/// Business assumptions for one analysis run.
///
/// All monetary fields share `currency`; the engine never mixes units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessAssumptions {
    /// Leased floor area in square feet
    pub area_sqft: Decimal,
    /// Monthly rent per square foot
    pub rent_per_sqft: Money,
    /// Total upfront capital (CAPEX)
    pub capital_invested: Money,
    /// Average revenue per order
    pub avg_ticket_price: Money,
    /// Orders served per day
    pub daily_orders: u32,
    /// Fixed monthly payroll
    #[serde(default = "default_staff_cost")]
    pub monthly_staff_cost: Money,
    /// Cost of goods sold as a percentage of revenue, in [0, 100]
    #[serde(default = "default_cogs_pct")]
    pub cogs_pct: Percent,
    #[serde(default)]
    pub currency: Currency,
}

impl Default for BusinessAssumptions {
    /// A 1,200 sqft premium cafe at 150/sqft with 2.5M invested.
    fn default() -> Self {
        Self {
            area_sqft: dec!(1200),
            rent_per_sqft: dec!(150),
            capital_invested: dec!(2500000),
            avg_ticket_price: dec!(450),
            daily_orders: 85,
            monthly_staff_cost: DEFAULT_MONTHLY_STAFF_COST,
            cogs_pct: DEFAULT_COGS_PCT,
            currency: Currency::default(),
        }
    }
}

impl BusinessAssumptions {
    /// Check every input-surface option against its accepted range.
    ///
    /// The engine itself accepts any value; this is for callers that take
    /// assumptions from a user.
    pub fn validate_ranges(&self) -> SiteScoutResult<()> {
        AREA_SQFT_RANGE.check(self.area_sqft)?;
        RENT_PER_SQFT_RANGE.check(self.rent_per_sqft)?;
        CAPITAL_INVESTED_RANGE.check(self.capital_invested)?;
        AVG_TICKET_PRICE_RANGE.check(self.avg_ticket_price)?;
        DAILY_ORDERS_RANGE.check(Decimal::from(self.daily_orders))?;

        if self.monthly_staff_cost < Decimal::ZERO {
            return Err(SiteScoutError::InvalidInput {
                field: "monthly_staff_cost".into(),
                reason: "Staff cost cannot be negative".into(),
            });
        }
        if self.cogs_pct < Decimal::ZERO || self.cogs_pct > Decimal::ONE_HUNDRED {
            return Err(SiteScoutError::InvalidInput {
                field: "cogs_pct".into(),
                reason: "COGS percentage must be between 0 and 100".into(),
            });
        }
        Ok(())
    }

    /// Projected orders over a 30-day month.
    pub fn monthly_orders(&self) -> u64 {
        u64::from(self.daily_orders) * 30
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_assumptions_are_in_range() {
        assert!(BusinessAssumptions::default().validate_ranges().is_ok());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut a = BusinessAssumptions::default();
        a.area_sqft = dec!(100);
        a.daily_orders = 5000;
        a.capital_invested = dec!(500000000);
        assert!(a.validate_ranges().is_ok());
    }

    #[test]
    fn test_out_of_range_names_field() {
        let mut a = BusinessAssumptions::default();
        a.rent_per_sqft = dec!(9.99);
        match a.validate_ranges() {
            Err(SiteScoutError::InvalidInput { field, .. }) => assert_eq!(field, "rent_per_sqft"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_daily_orders_below_minimum_rejected() {
        let mut a = BusinessAssumptions::default();
        a.daily_orders = 0;
        match a.validate_ranges() {
            Err(SiteScoutError::InvalidInput { field, .. }) => assert_eq!(field, "daily_orders"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_cogs_pct_above_hundred_rejected() {
        let mut a = BusinessAssumptions::default();
        a.cogs_pct = dec!(101);
        assert!(a.validate_ranges().is_err());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "area_sqft": "800",
            "rent_per_sqft": "120",
            "capital_invested": "1500000",
            "avg_ticket_price": "300",
            "daily_orders": 60
        }"#;
        let a: BusinessAssumptions = serde_json::from_str(json).unwrap();
        assert_eq!(a.monthly_staff_cost, dec!(150000));
        assert_eq!(a.cogs_pct, dec!(30));
        assert_eq!(a.currency, Currency::INR);
    }

    #[test]
    fn test_monthly_orders() {
        assert_eq!(BusinessAssumptions::default().monthly_orders(), 2550);
    }
}
