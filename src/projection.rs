//! Financial Projection
//!
//! Compounds a yearly price growth rate over a fixed horizon. Yield and
//! production cost stay flat; only the farm-gate price moves.

use serde::{Deserialize, Serialize};

use crate::catalog::EconomicProfile;
use crate::error::{ensure_finite, ensure_non_negative, PlannerError, Result};

/// Figures for one projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// 1-based year number
    pub year_index: u32,
    /// Price per ton after `year_index` compounding steps
    pub price: f64,
    /// Per hectare
    pub revenue: f64,
    /// Per hectare (revenue - cost)
    pub profit: f64,
}

/// Revenue and profit at catalog prices, before any growth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseYearSummary {
    pub revenue: f64,
    pub profit: f64,
}

/// Check that a profile holds finite, non-negative values
pub fn validate_profile(profile: &EconomicProfile) -> Result<()> {
    ensure_non_negative("yield_tons_per_ha", profile.yield_tons_per_ha)?;
    ensure_non_negative("cost_per_ha", profile.cost_per_ha)?;
    ensure_non_negative("price_per_ton", profile.price_per_ton)?;
    Ok(())
}

/// Year-by-year price, revenue and profit
///
/// Year 1 already includes one growth step:
/// `price_n = price_{n-1} * (1 + growth/100)`, `revenue_n = yield * price_n`,
/// `profit_n = revenue_n - cost`. Negative growth rates are allowed.
///
/// # Examples
/// ```
/// use farmops_planner::projection::project;
///
/// let years = project(30.0, 4500.0, 300.0, 5.0, 3).unwrap();
/// assert_eq!(years.len(), 3);
/// assert!((years[0].price - 315.0).abs() < 1e-9);
/// assert!((years[2].profit - 5918.625).abs() < 1e-6);
/// ```
pub fn project(
    yield_t_ha: f64,
    cost_per_ha: f64,
    price_per_ton: f64,
    annual_growth_rate_pct: f64,
    years: u32,
) -> Result<Vec<YearProjection>> {
    let profile = EconomicProfile::new(yield_t_ha, cost_per_ha, price_per_ton);
    project_profile(&profile, annual_growth_rate_pct, years)
}

/// [`project`] over an [`EconomicProfile`]
pub fn project_profile(
    profile: &EconomicProfile,
    annual_growth_rate_pct: f64,
    years: u32,
) -> Result<Vec<YearProjection>> {
    validate_profile(profile)?;
    let growth = ensure_finite("annual_growth_rate_pct", annual_growth_rate_pct)?;
    if years == 0 {
        return Err(PlannerError::EmptyHorizon);
    }

    let factor = 1.0 + growth / 100.0;
    let mut price = profile.price_per_ton;

    let projections = (1..=years)
        .map(|year_index| {
            price *= factor;
            let revenue = profile.yield_tons_per_ha * price;
            YearProjection {
                year_index,
                price,
                revenue,
                profit: revenue - profile.cost_per_ha,
            }
        })
        .collect();

    Ok(projections)
}

/// Revenue and profit with no growth applied
pub fn base_year_summary(profile: &EconomicProfile) -> Result<BaseYearSummary> {
    validate_profile(profile)?;
    let revenue = profile.yield_tons_per_ha * profile.price_per_ton;
    Ok(BaseYearSummary {
        revenue,
        profit: revenue - profile.cost_per_ha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_three_year_projection() {
        let years = project(30.0, 4500.0, 300.0, 5.0, 3).unwrap();

        let expected = [
            (315.0, 9450.0, 4950.0),
            (330.75, 9922.5, 5422.5),
            (347.2875, 10418.625, 5918.625),
        ];
        for (year, (price, revenue, profit)) in years.iter().zip(expected) {
            assert_abs_diff_eq!(year.price, price, epsilon = 1e-6);
            assert_abs_diff_eq!(year.revenue, revenue, epsilon = 1e-6);
            assert_abs_diff_eq!(year.profit, profit, epsilon = 1e-6);
        }
        assert_eq!(
            years.iter().map(|y| y.year_index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_negative_growth_shrinks_price() {
        let years = project(10.0, 1000.0, 200.0, -10.0, 2).unwrap();
        assert_abs_diff_eq!(years[0].price, 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(years[1].price, 162.0, epsilon = 1e-9);
        assert_abs_diff_eq!(years[1].profit, 620.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_growth_is_flat() {
        let years = project(20.0, 3000.0, 300.0, 0.0, 5).unwrap();
        assert!(years.iter().all(|y| y.price == 300.0 && y.profit == 3000.0));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(project(30.0, 4500.0, 300.0, 5.0, 0), Err(PlannerError::EmptyHorizon)));
        assert!(matches!(
            project(f64::NAN, 4500.0, 300.0, 5.0, 3),
            Err(PlannerError::NonFinite { .. })
        ));
        assert!(matches!(
            project(30.0, 4500.0, 300.0, f64::INFINITY, 3),
            Err(PlannerError::NonFinite { field: "annual_growth_rate_pct", .. })
        ));
        assert!(matches!(
            project(30.0, -1.0, 300.0, 5.0, 3),
            Err(PlannerError::Negative { field: "cost_per_ha", .. })
        ));
    }

    #[test]
    fn test_base_year_summary() {
        let summary = base_year_summary(&EconomicProfile::DEFAULT).unwrap();
        assert_abs_diff_eq!(summary.revenue, 6000.0);
        assert_abs_diff_eq!(summary.profit, 3000.0);
    }
}
