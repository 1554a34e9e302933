use serde::Serialize;

use crate::format::{format_usd_whole, leading_float};
use crate::rank::{GrowthPopulation, RankResult};

pub const DAYS_PER_MONTH: f64 = 365.25 / 12.0;

/// Dollars raised per day for `amount_millions` raised over `months`.
/// `None` unless both inputs are positive.
pub fn velocity_per_day(amount_millions: f64, months: f64) -> Option<f64> {
    let positive = |value: f64| value > 0.0;
    if !positive(amount_millions) || !positive(months) {
        return None;
    }
    Some(amount_millions * 1e6 / (months * DAYS_PER_MONTH))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorResult {
    pub velocity_per_day: f64,
    pub rank: Option<RankResult>,
}

impl CalculatorResult {
    pub fn velocity_label(&self) -> String {
        format!("{} / day", format_usd_whole(self.velocity_per_day))
    }
}

/// Runs the calculator on raw field text. Invalid input hides the result
/// rather than reporting an error.
pub fn calculate(
    amount_text: &str,
    months_text: &str,
    population: &GrowthPopulation,
) -> Option<CalculatorResult> {
    let amount = leading_float(amount_text)?;
    let months = leading_float(months_text)?;
    let velocity = velocity_per_day(amount, months)?;
    Some(CalculatorResult {
        velocity_per_day: velocity,
        rank: population.rank(velocity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_million_over_twelve_months() -> Result<(), String> {
        let velocity = velocity_per_day(1.0, 12.0).ok_or("rejected valid input")?;
        assert!((velocity - 1e6 / 365.25).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn invalid_input_hides_the_result() {
        let population = GrowthPopulation::from_values([100.0]);
        for (amount, months) in [("", "3"), ("5", ""), ("0", "3"), ("5", "-1"), ("abc", "3")] {
            assert_eq!(calculate(amount, months, &population), None, "{amount}/{months}");
        }
    }

    #[test]
    fn result_is_ranked_against_population() -> Result<(), String> {
        let population = GrowthPopulation::from_values([1_000.0, 10_000.0, 100_000.0]);
        let result = calculate("2", "6", &population).ok_or("rejected valid input")?;

        assert_eq!(result.velocity_label(), "$10,951 / day");
        let rank = result.rank.ok_or("missing rank")?;
        assert_eq!(rank.precise_rank, 2);
        assert_eq!(rank.top_label(), "Top 33.3%");
        Ok(())
    }

    #[test]
    fn empty_population_still_reports_velocity() -> Result<(), String> {
        let result = calculate("1", "1", &GrowthPopulation::default()).ok_or("rejected")?;
        assert_eq!(result.rank, None);
        Ok(())
    }
}
