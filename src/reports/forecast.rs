//! Balance forecast
//!
//! Projects the end-of-period balance from the average daily spend so far:
//!
//! ```text
//! current_balance   = starting_balance - total_spent
//! daily_rate        = total_spent / elapsed_days
//! projected_balance = round(current_balance - daily_rate * remaining_days)
//! ```

use serde::Serialize;

use crate::config::PeriodSettings;
use crate::models::Money;

/// The value carried by a trend point: either observed or projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointValue {
    Actual(Money),
    Predicted(Money),
}

/// One checkpoint on the balance trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastPoint {
    pub label: String,
    pub value: PointValue,
}

impl ForecastPoint {
    pub fn actual(&self) -> Option<Money> {
        match self.value {
            PointValue::Actual(m) => Some(m),
            PointValue::Predicted(_) => None,
        }
    }

    pub fn predicted(&self) -> Option<Money> {
        match self.value {
            PointValue::Predicted(m) => Some(m),
            PointValue::Actual(_) => None,
        }
    }
}

/// Projected balance for the observed period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub current_balance: Money,
    pub daily_rate: f64,
    pub projected_balance: Money,
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Project the period's end balance given the spend so far
    pub fn project(total_spent: Money, period: &PeriodSettings) -> Self {
        let current_balance = period.starting_balance - total_spent;
        let daily_rate = if period.elapsed_days == 0 {
            0.0
        } else {
            total_spent.as_f64() / f64::from(period.elapsed_days)
        };

        let projected_balance = balance_after(current_balance, daily_rate, period.remaining_days);

        let mut points: Vec<ForecastPoint> = period
            .history
            .iter()
            .map(|checkpoint| ForecastPoint {
                label: checkpoint.label.clone(),
                value: PointValue::Actual(checkpoint.balance),
            })
            .collect();

        points.push(ForecastPoint {
            label: period.today_label.clone(),
            value: PointValue::Actual(current_balance),
        });

        points.extend(period.projections.iter().map(|checkpoint| ForecastPoint {
            label: checkpoint.label.clone(),
            value: PointValue::Predicted(balance_after(
                current_balance,
                daily_rate,
                checkpoint.resolve(period.remaining_days),
            )),
        }));

        Self {
            current_balance,
            daily_rate,
            projected_balance,
            points,
        }
    }

    /// Difference between the projected and current balance
    pub fn change(&self) -> Money {
        self.projected_balance - self.current_balance
    }
}

fn balance_after(current: Money, daily_rate: f64, days: u32) -> Money {
    Money::from_rounded(current.as_f64() - daily_rate * f64::from(days)).unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProjectionCheckpoint, TrendCheckpoint};

    #[test]
    fn test_seed_period_projection() {
        let forecast = Forecast::project(Money::from_units(43_350), &PeriodSettings::default());

        assert_eq!(forecast.current_balance, Money::from_units(276_650));
        assert!((forecast.daily_rate - 2408.333).abs() < 0.001);
        assert_eq!(forecast.projected_balance, Money::from_units(247_750));
        assert_eq!(forecast.change(), Money::from_units(-28_900));
    }

    #[test]
    fn test_current_balance_is_exact() {
        let period = PeriodSettings::default();
        for spent in [0, 1, 12_345, 400_000] {
            let forecast = Forecast::project(Money::from_units(spent), &period);
            assert_eq!(
                forecast.current_balance,
                period.starting_balance - Money::from_units(spent)
            );
        }
    }

    #[test]
    fn test_seed_trend_points() {
        let forecast = Forecast::project(Money::from_units(43_350), &PeriodSettings::default());
        let labels: Vec<&str> = forecast.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["11/1", "11/5", "11/10", "11/15", "11/20", "11/25", "11/30"]
        );

        assert_eq!(forecast.points[0].actual(), Some(Money::from_units(320_000)));
        assert_eq!(forecast.points[3].actual(), Some(Money::from_units(276_650)));
        assert_eq!(forecast.points[4].predicted(), Some(Money::from_units(264_608)));
        assert_eq!(forecast.points[5].predicted(), Some(Money::from_units(252_567)));
        assert_eq!(
            forecast.points[6].predicted(),
            Some(forecast.projected_balance)
        );
    }

    #[test]
    fn test_points_carry_exactly_one_value() {
        let forecast = Forecast::project(Money::from_units(43_350), &PeriodSettings::default());
        for point in &forecast.points {
            assert!(point.actual().is_some() != point.predicted().is_some());
        }
    }

    #[test]
    fn test_today_is_the_last_actual_point() {
        let forecast = Forecast::project(Money::from_units(10_000), &PeriodSettings::default());
        let last_actual = forecast
            .points
            .iter()
            .rposition(|p| p.actual().is_some())
            .unwrap();
        assert_eq!(forecast.points[last_actual].label, "11/15");
        assert_eq!(
            forecast.points[last_actual].actual(),
            Some(forecast.current_balance)
        );
    }

    #[test]
    fn test_custom_period() {
        let period = PeriodSettings {
            starting_balance: Money::from_units(100_000),
            elapsed_days: 10,
            remaining_days: 20,
            history: vec![TrendCheckpoint::new("start", 100_000)],
            today_label: "today".into(),
            projections: vec![ProjectionCheckpoint::new("end", 20)],
        };

        let forecast = Forecast::project(Money::from_units(30_000), &period);
        assert_eq!(forecast.current_balance, Money::from_units(70_000));
        assert_eq!(forecast.projected_balance, Money::from_units(10_000));
        assert_eq!(forecast.points.len(), 3);
    }

    #[test]
    fn test_trend_ends_on_projected_balance() {
        let period = PeriodSettings {
            remaining_days: 7,
            ..PeriodSettings::default()
        };
        let forecast = Forecast::project(Money::from_units(43_350), &period);

        assert_eq!(forecast.projected_balance, Money::from_units(259_792));
        let last = forecast.points.last().unwrap();
        assert_eq!(last.label, "11/30");
        assert_eq!(last.predicted(), Some(forecast.projected_balance));

        // 11/25 is ten days out, past a seven-day period
        assert_eq!(forecast.points[5].predicted(), Some(forecast.projected_balance));
    }

    #[test]
    fn test_zero_elapsed_days_has_no_rate() {
        let period = PeriodSettings {
            elapsed_days: 0,
            ..PeriodSettings::default()
        };
        let forecast = Forecast::project(Money::from_units(5_000), &period);
        assert_eq!(forecast.daily_rate, 0.0);
        assert_eq!(forecast.projected_balance, forecast.current_balance);
    }

    #[test]
    fn test_point_serialization() {
        let point = ForecastPoint {
            label: "11/20".into(),
            value: PointValue::Predicted(Money::from_units(264_608)),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["value"]["predicted"], 264_608);
        assert!(json["value"].get("actual").is_none());
    }
}
