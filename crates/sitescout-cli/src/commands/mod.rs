pub mod analyze;
pub mod geocode;
pub mod market;
pub mod model;
pub mod report;

use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sitescout_core::feasibility::BusinessAssumptions;

use crate::input;
use crate::settings::Settings;

/// Business assumptions shared by every modelling command
#[derive(Args, Debug, Default)]
pub struct AssumptionArgs {
    /// Leased floor area in square feet [100–10000]
    #[arg(long)]
    pub area_sqft: Option<Decimal>,

    /// Monthly rent per square foot [10–5000]
    #[arg(long, alias = "rent")]
    pub rent_per_sqft: Option<Decimal>,

    /// Total capital invested [500000–500000000]
    #[arg(long, alias = "capex")]
    pub capital: Option<Decimal>,

    /// Average ticket price per order [50–50000]
    #[arg(long, alias = "ticket")]
    pub avg_ticket: Option<Decimal>,

    /// Orders per day [10–5000]
    #[arg(long, alias = "orders")]
    pub daily_orders: Option<u32>,

    /// Monthly staff cost (defaults to the configured value)
    #[arg(long)]
    pub staff_cost: Option<Decimal>,

    /// COGS as a percentage of revenue (defaults to the configured value)
    #[arg(long)]
    pub cogs_pct: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Build assumptions from `--input`, piped stdin, or flags over configured
/// defaults, then check them against the accepted input ranges.
pub fn resolve_assumptions(
    args: &AssumptionArgs,
    settings: &Settings,
) -> Result<BusinessAssumptions, Box<dyn std::error::Error>> {
    let assumptions = if let Some(ref path) = args.input {
        from_json(input::file::read_json(path)?, settings)?
    } else if let Some(parsed) = input::stdin::read_stdin()? {
        from_json(parsed, settings)?
    } else {
        from_flags(args, settings)
    };

    assumptions.validate_ranges()?;
    Ok(assumptions)
}

/// JSON input that omits staff cost, COGS or currency takes the configured
/// values, the same as flag input does.
fn from_json(
    mut value: Value,
    settings: &Settings,
) -> Result<BusinessAssumptions, Box<dyn std::error::Error>> {
    if let Value::Object(ref mut fields) = value {
        let defaults = [
            ("monthly_staff_cost", serde_json::to_value(settings.model.monthly_staff_cost)?),
            ("cogs_pct", serde_json::to_value(settings.model.cogs_pct)?),
            ("currency", serde_json::to_value(settings.currency())?),
        ];
        for (key, default) in defaults {
            fields.entry(key).or_insert(default);
        }
    }
    Ok(serde_json::from_value(value)?)
}

fn from_flags(args: &AssumptionArgs, settings: &Settings) -> BusinessAssumptions {
    let base = BusinessAssumptions::default();
    BusinessAssumptions {
        area_sqft: args.area_sqft.unwrap_or(base.area_sqft),
        rent_per_sqft: args.rent_per_sqft.unwrap_or(base.rent_per_sqft),
        capital_invested: args.capital.unwrap_or(base.capital_invested),
        avg_ticket_price: args.avg_ticket.unwrap_or(base.avg_ticket_price),
        daily_orders: args.daily_orders.unwrap_or(base.daily_orders),
        monthly_staff_cost: args.staff_cost.unwrap_or(settings.model.monthly_staff_cost),
        cogs_pct: args.cogs_pct.unwrap_or(settings.model.cogs_pct),
        currency: settings.currency(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flags_override_defaults() {
        let settings = Settings::load(None).unwrap();
        let args = AssumptionArgs {
            area_sqft: Some(dec!(800)),
            daily_orders: Some(120),
            ..AssumptionArgs::default()
        };
        let a = from_flags(&args, &settings);
        assert_eq!(a.area_sqft, dec!(800));
        assert_eq!(a.daily_orders, 120);
        assert_eq!(a.rent_per_sqft, dec!(150));
        assert_eq!(a.monthly_staff_cost, settings.model.monthly_staff_cost);
    }

    #[test]
    fn test_json_input_takes_configured_model_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitescout.toml");
        std::fs::write(
            &path,
            "[model]\nmonthly_staff_cost = \"200000\"\ncogs_pct = \"35\"\ncurrency = \"usd\"\n",
        )
        .unwrap();
        let settings = Settings::load(path.to_str()).unwrap();

        let input = serde_json::json!({
            "area_sqft": "1200",
            "rent_per_sqft": "150",
            "capital_invested": "2500000",
            "avg_ticket_price": "450",
            "daily_orders": 85
        });
        let a = from_json(input, &settings).unwrap();
        assert_eq!(a.monthly_staff_cost, dec!(200000));
        assert_eq!(a.cogs_pct, dec!(35));
        assert_eq!(a.currency, sitescout_core::Currency::USD);
        assert_eq!(a, from_flags(&AssumptionArgs::default(), &settings));
    }

    #[test]
    fn test_json_input_keeps_explicit_model_fields() {
        let settings = Settings::load(None).unwrap();
        let input = serde_json::json!({
            "area_sqft": "1200",
            "rent_per_sqft": "150",
            "capital_invested": "2500000",
            "avg_ticket_price": "450",
            "daily_orders": 85,
            "cogs_pct": "25"
        });
        let a = from_json(input, &settings).unwrap();
        assert_eq!(a.cogs_pct, dec!(25));
        assert_eq!(a.monthly_staff_cost, settings.model.monthly_staff_cost);
    }

    #[test]
    fn test_no_flags_is_reference_cafe() {
        let settings = Settings::load(None).unwrap();
        let a = from_flags(&AssumptionArgs::default(), &settings);
        assert_eq!(a.capital_invested, dec!(2500000));
        assert_eq!(a.avg_ticket_price, dec!(450));
        assert_eq!(a.daily_orders, 85);
    }
}
