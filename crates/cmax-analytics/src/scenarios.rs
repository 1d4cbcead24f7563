//! Fixed-weight scenario simulation.
//!
//! A [`ScenarioSet`] holds named growth scenarios with probabilities. The
//! simulation compounds the principal under each scenario, weights the
//! final values by probability and annotates the result with a risk tier.
//! There is no sampling; the result is fully determined by the inputs.

use cmax_config::{DashboardConfig, RiskConfig};
use serde::{Deserialize, Serialize};

use crate::error::{check_principal, check_rate, check_years, AnalyticsError, AnalyticsResult};
use crate::projection::{annualized_return, compound_growth, expected_value};
use crate::risk::{classify, risk_spread, RiskNote, RiskTier};

/// Slack for float error when summing probabilities.
const PROBABILITY_EPSILON: f64 = 1e-9;

/// Role of a scenario within a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Favorable outcome.
    Optimistic,
    /// Most likely outcome.
    Base,
    /// Unfavorable outcome.
    Pessimistic,
    /// Any other user-defined scenario.
    #[default]
    Custom,
}

/// A named growth scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,

    /// Role used for risk notes.
    #[serde(default)]
    pub kind: ScenarioKind,

    /// Annual growth rate in percent.
    pub rate: f64,

    /// Probability in [0, 1].
    pub probability: f64,
}

impl Scenario {
    /// Creates a custom scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: f64, probability: f64) -> Self {
        Self {
            name: name.into(),
            kind: ScenarioKind::Custom,
            rate,
            probability,
        }
    }

    /// Creates the optimistic scenario.
    #[must_use]
    pub fn optimistic(rate: f64, probability: f64) -> Self {
        Self::new("Optimistic", rate, probability).with_kind(ScenarioKind::Optimistic)
    }

    /// Creates the base scenario.
    #[must_use]
    pub fn base(rate: f64, probability: f64) -> Self {
        Self::new("Base", rate, probability).with_kind(ScenarioKind::Base)
    }

    /// Creates the pessimistic scenario.
    #[must_use]
    pub fn pessimistic(rate: f64, probability: f64) -> Self {
        Self::new("Pessimistic", rate, probability).with_kind(ScenarioKind::Pessimistic)
    }

    /// Sets the scenario role.
    #[must_use]
    pub fn with_kind(mut self, kind: ScenarioKind) -> Self {
        self.kind = kind;
        self
    }
}

/// An ordered set of scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl Default for ScenarioSet {
    /// Optimistic 5.5% at 30%, base 4.5% at 50%, pessimistic 3.5% at 20%.
    fn default() -> Self {
        Self::three_way((5.5, 0.3), (4.5, 0.5), (3.5, 0.2))
    }
}

impl ScenarioSet {
    /// Creates a set from scenarios.
    #[must_use]
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Creates the optimistic/base/pessimistic set from `(rate, probability)`
    /// pairs.
    #[must_use]
    pub fn three_way(optimistic: (f64, f64), base: (f64, f64), pessimistic: (f64, f64)) -> Self {
        Self::new(vec![
            Scenario::optimistic(optimistic.0, optimistic.1),
            Scenario::base(base.0, base.1),
            Scenario::pessimistic(pessimistic.0, pessimistic.1),
        ])
    }

    /// Creates the optimistic/base/pessimistic set from rates and
    /// whole-percent weights (30 means 0.30).
    #[must_use]
    pub fn from_percentages(rates: [f64; 3], weights_pct: [u32; 3]) -> Self {
        let p = weights_pct.map(|w| f64::from(w) / 100.0);
        Self::three_way((rates[0], p[0]), (rates[1], p[1]), (rates[2], p[2]))
    }

    /// Appends a scenario.
    #[must_use]
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Scenarios in insertion order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns true if the set has no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Sum of the probabilities.
    #[must_use]
    pub fn total_probability(&self) -> f64 {
        self.scenarios.iter().map(|s| s.probability).sum()
    }

    /// First scenario of the given kind.
    #[must_use]
    pub fn find(&self, kind: ScenarioKind) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.kind == kind)
    }

    /// Validates the set.
    ///
    /// Probabilities are never normalized; a total off 1 by more than
    /// `tolerance` is an error.
    ///
    /// # Errors
    ///
    /// `EmptyScenarioSet`, `InvalidRate`, `InvalidProbability` for a weight
    /// outside [0, 1], or `InvalidProbabilityTotal`.
    pub fn validate(&self, tolerance: f64) -> AnalyticsResult<()> {
        if self.scenarios.is_empty() {
            return Err(AnalyticsError::EmptyScenarioSet);
        }

        for scenario in &self.scenarios {
            check_rate(scenario.rate)?;
            if !(0.0..=1.0).contains(&scenario.probability) {
                return Err(AnalyticsError::InvalidProbability {
                    scenario: scenario.name.clone(),
                    value: scenario.probability,
                });
            }
        }

        // Weights like 0.3 + 0.5 + 0.19 miss 0.99 by a rounding error;
        // a total exactly `tolerance` away is still accepted.
        let total = self.total_probability();
        if (total - 1.0).abs() > tolerance + PROBABILITY_EPSILON {
            return Err(AnalyticsError::InvalidProbabilityTotal { total, tolerance });
        }

        Ok(())
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Scenario role.
    pub kind: ScenarioKind,
    /// Annual rate in percent.
    pub rate: f64,
    /// Probability in [0, 1].
    pub probability: f64,
    /// Compounded final value.
    pub final_value: f64,
    /// Annualized return in percent.
    pub annualized_return_pct: f64,
}

/// Result of a scenario simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Simulated principal.
    pub principal: f64,
    /// Horizon in years.
    pub years: f64,
    /// Per-scenario outcomes, in set order.
    pub outcomes: Vec<ScenarioOutcome>,
    /// Probability-weighted final value.
    pub expected_value: f64,
    /// Highest final value.
    pub best_final: f64,
    /// Lowest final value.
    pub worst_final: f64,
    /// `best_final - worst_final`.
    pub spread: f64,
    /// Tier of the spread.
    pub risk_tier: RiskTier,
    /// Risk annotations.
    pub notes: Vec<RiskNote>,
}

impl SimulationResult {
    /// Outcome with the highest final value.
    #[must_use]
    pub fn best_case(&self) -> Option<&ScenarioOutcome> {
        self.outcomes
            .iter()
            .max_by(|a, b| a.final_value.total_cmp(&b.final_value))
    }

    /// Outcome with the lowest final value.
    #[must_use]
    pub fn worst_case(&self) -> Option<&ScenarioOutcome> {
        self.outcomes
            .iter()
            .min_by(|a, b| a.final_value.total_cmp(&b.final_value))
    }

    /// Returns true if the note is present.
    #[must_use]
    pub fn has_note(&self, note: RiskNote) -> bool {
        self.notes.contains(&note)
    }
}

/// Runs a scenario simulation.
///
/// The set is validated against the configured probability tolerance
/// before anything is computed. Tier and notes use `config.risk`.
///
/// # Errors
///
/// Any validation error of the set, `InvalidPrincipal` or `InvalidYears`.
pub fn simulate(
    set: &ScenarioSet,
    principal: f64,
    years: f64,
    config: &DashboardConfig,
) -> AnalyticsResult<SimulationResult> {
    set.validate(config.probability_tolerance)?;
    check_principal(principal)?;
    check_years(years)?;

    let outcomes = set
        .scenarios()
        .iter()
        .map(|s| {
            let final_value = compound_growth(principal, s.rate, years);
            Ok(ScenarioOutcome {
                name: s.name.clone(),
                kind: s.kind,
                rate: s.rate,
                probability: s.probability,
                final_value,
                annualized_return_pct: annualized_return(principal, final_value, years)?,
            })
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    let best_final = outcomes
        .iter()
        .map(|o| o.final_value)
        .fold(f64::NEG_INFINITY, f64::max);
    let worst_final = outcomes
        .iter()
        .map(|o| o.final_value)
        .fold(f64::INFINITY, f64::min);
    let spread = risk_spread(best_final, worst_final);

    let notes = risk_notes(set, &outcomes, spread, &config.risk);

    Ok(SimulationResult {
        principal,
        years,
        expected_value: expected_value(set.scenarios(), principal, years),
        best_final,
        worst_final,
        spread,
        risk_tier: classify(spread, &config.risk),
        notes,
        outcomes,
    })
}

fn risk_notes(
    set: &ScenarioSet,
    outcomes: &[ScenarioOutcome],
    spread: f64,
    config: &RiskConfig,
) -> Vec<RiskNote> {
    let mut notes = Vec::new();

    if set
        .find(ScenarioKind::Pessimistic)
        .is_some_and(|s| s.probability > config.pessimistic_alert_probability)
    {
        notes.push(RiskNote::HighPessimisticProbability);
    }

    if outcomes
        .iter()
        .find(|o| o.kind == ScenarioKind::Base)
        .is_some_and(|o| o.annualized_return_pct > config.attractive_base_return_pct)
    {
        notes.push(RiskNote::AttractiveBaseReturn);
    }

    notes.push(if spread > config.diversify_spread {
        RiskNote::Diversify
    } else {
        RiskNote::Stable
    });

    notes
}
