//! Side-by-side comparison of two bonds.

use cmax_core::{BondId, PriceOracle, StaticPriceOracle};
use serde::{Deserialize, Serialize};

use crate::error::{check_principal, check_rate, check_years, AnalyticsError, AnalyticsResult};
use crate::projection::{annualized_return, compound_growth};

/// A bond entering a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondLeg {
    /// Bond identifier.
    pub bond_id: BondId,
    /// Display name.
    pub name: String,
    /// Coupon rate in percent.
    pub rate: f64,
}

impl BondLeg {
    /// Creates a leg.
    #[must_use]
    pub fn new(bond_id: BondId, name: impl Into<String>, rate: f64) -> Self {
        Self {
            bond_id,
            name: name.into(),
            rate,
        }
    }

    /// Resolves name and coupon rate from the oracle.
    ///
    /// Unknown bonds take the oracle's synthesized name and fallback rate.
    #[must_use]
    pub fn from_oracle(bond_id: BondId, oracle: &StaticPriceOracle) -> Self {
        let name = oracle.name(&bond_id);
        let rate = oracle.coupon_rate(&bond_id);
        Self::new(bond_id, name, rate)
    }
}

/// Projected result of one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegResult {
    /// The bond.
    pub leg: BondLeg,
    /// Compounded final value.
    pub final_value: f64,
    /// `final_value - principal`.
    pub gain: f64,
    /// Annualized return in percent.
    pub annualized_return_pct: f64,
}

/// Which leg comes out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Left leg has the higher annualized return.
    LeftBetter,
    /// Right leg has the higher annualized return.
    RightBetter,
    /// Equal annualized returns.
    Similar,
}

/// Result of a two-bond comparison. Differences are left minus right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondComparison {
    /// Invested amount in each leg.
    pub principal: f64,
    /// Horizon in years.
    pub years: f64,
    /// Left leg.
    pub left: LegResult,
    /// Right leg.
    pub right: LegResult,
    /// Coupon rate difference.
    pub rate_diff: f64,
    /// Final value difference.
    pub final_diff: f64,
    /// Gain difference.
    pub gain_diff: f64,
    /// Annualized return difference.
    pub return_diff: f64,
    /// Winner.
    pub verdict: Verdict,
}

impl BondComparison {
    /// The winning leg, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&LegResult> {
        match self.verdict {
            Verdict::LeftBetter => Some(&self.left),
            Verdict::RightBetter => Some(&self.right),
            Verdict::Similar => None,
        }
    }
}

fn project_leg(leg: &BondLeg, principal: f64, years: f64) -> AnalyticsResult<LegResult> {
    check_rate(leg.rate)?;
    let final_value = compound_growth(principal, leg.rate, years);
    Ok(LegResult {
        leg: leg.clone(),
        final_value,
        gain: final_value - principal,
        annualized_return_pct: annualized_return(principal, final_value, years)?,
    })
}

/// Compares two bonds held with reinvested coupons over the same horizon.
///
/// # Errors
///
/// `IdenticalBonds` when both legs name the same bond, otherwise
/// `InvalidPrincipal`, `InvalidYears` or `InvalidRate`.
pub fn compare_bonds(
    left: &BondLeg,
    right: &BondLeg,
    principal: f64,
    years: f64,
) -> AnalyticsResult<BondComparison> {
    if left.bond_id == right.bond_id {
        return Err(AnalyticsError::IdenticalBonds {
            bond: left.bond_id.to_string(),
        });
    }
    check_principal(principal)?;
    check_years(years)?;

    let l = project_leg(left, principal, years)?;
    let r = project_leg(right, principal, years)?;

    let verdict = if l.annualized_return_pct > r.annualized_return_pct {
        Verdict::LeftBetter
    } else if r.annualized_return_pct > l.annualized_return_pct {
        Verdict::RightBetter
    } else {
        Verdict::Similar
    };

    Ok(BondComparison {
        principal,
        years,
        rate_diff: left.rate - right.rate,
        final_diff: l.final_value - r.final_value,
        gain_diff: l.gain - r.gain,
        return_diff: l.annualized_return_pct - r.annualized_return_pct,
        verdict,
        left: l,
        right: r,
    })
}
