//! Tabular depreciation schedules with accumulated depreciation and book value

use std::fmt;
use std::io;

use log::debug;
use serde::{Deserialize, Serialize};

use super::methods::{declining_balance, straight_line, sum_of_years_digits};
use crate::error::FinanceResult;

/// Depreciation method used to build a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationMethod {
    /// Equal expense every period
    StraightLine,

    /// Sum-of-the-years'-digits, front-loaded
    SumOfYearsDigits,

    /// Declining balance at `rate` times the straight-line rate
    /// (2.0 = double declining)
    DecliningBalance { rate: f64 },
}

impl Default for DepreciationMethod {
    fn default() -> Self {
        DepreciationMethod::StraightLine
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepreciationMethod::StraightLine => write!(f, "straight-line"),
            DepreciationMethod::SumOfYearsDigits => write!(f, "sum-of-years-digits"),
            DepreciationMethod::DecliningBalance { rate } => {
                // Rounded to six decimals so 1.1 reads as 110, not 110.00000000000001
                let percent = (rate * 100.0 * 1e6).round() / 1e6;
                write!(f, "{percent}% declining balance")
            }
        }
    }
}

/// A single period of a depreciation schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Period number, 1-based
    pub period: u32,
    /// Depreciation expense for the period
    pub expense: f64,
    /// Accumulated depreciation at the end of the period
    pub accumulated: f64,
    /// Cost less accumulated depreciation at the end of the period
    pub book_value: f64,
}

/// Full depreciation schedule for one asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    pub method: DepreciationMethod,
    pub cost: f64,
    pub salvage: f64,
    pub life: u32,
    pub rows: Vec<ScheduleRow>,
}

impl DepreciationSchedule {
    /// Build the schedule for `method`
    ///
    /// Fails with the same errors as the underlying method function.
    pub fn build(
        cost: f64,
        salvage: f64,
        life: u32,
        method: DepreciationMethod,
    ) -> FinanceResult<Self> {
        let expenses = match method {
            DepreciationMethod::StraightLine => {
                vec![straight_line(cost, salvage, life)?; life as usize]
            }
            DepreciationMethod::SumOfYearsDigits => sum_of_years_digits(cost, salvage, life)?,
            DepreciationMethod::DecliningBalance { rate } => {
                declining_balance(cost, salvage, rate, life)?
            }
        };

        let mut accumulated = 0.0;
        let rows = expenses
            .into_iter()
            .zip(1..)
            .map(|(expense, period)| {
                accumulated += expense;
                ScheduleRow {
                    period,
                    expense,
                    accumulated,
                    book_value: cost - accumulated,
                }
            })
            .collect();

        debug!("Built {method} schedule over {life} periods");
        Ok(Self {
            method,
            cost,
            salvage,
            life,
            rows,
        })
    }

    /// Per-period expenses in chronological order
    pub fn expenses(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.expense).collect()
    }

    /// Total depreciation over the whole life
    pub fn total_depreciation(&self) -> f64 {
        self.rows.last().map(|row| row.accumulated).unwrap_or(0.0)
    }

    /// Book value at the end of the last period
    pub fn final_book_value(&self) -> f64 {
        self.rows.last().map(|row| row.book_value).unwrap_or(self.cost)
    }

    /// Write the rows as CSV with a header line
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_line_schedule() {
        let method = DepreciationMethod::StraightLine;
        let schedule = DepreciationSchedule::build(1000.0, 350.0, 10, method).unwrap();

        assert_eq!(schedule.rows.len(), 10);
        assert!(schedule.expenses().iter().all(|&e| e == 65.0));
        assert_relative_eq!(schedule.total_depreciation(), 650.0, epsilon = 1e-9);
        assert_relative_eq!(schedule.final_book_value(), 350.0, epsilon = 1e-9);
    }

    #[test]
    fn test_double_declining_schedule_rows() {
        let method = DepreciationMethod::DecliningBalance { rate: 2.0 };
        let schedule = DepreciationSchedule::build(1000.0, 100.0, 5, method).unwrap();

        let first = &schedule.rows[0];
        assert_eq!(first.period, 1);
        assert_eq!(first.expense, 400.0);
        assert_eq!(first.accumulated, 400.0);
        assert_eq!(first.book_value, 600.0);

        assert_eq!(schedule.rows[4].period, 5);
        assert_relative_eq!(schedule.final_book_value(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_schedule_propagates_errors() {
        let method = DepreciationMethod::SumOfYearsDigits;
        let err = DepreciationSchedule::build(1000.0, 100.0, 0, method).unwrap_err();
        assert!(matches!(err, FinanceError::Domain { formula: "sum_of_years_digits", .. }));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(DepreciationMethod::StraightLine.to_string(), "straight-line");
        assert_eq!(
            DepreciationMethod::DecliningBalance { rate: 1.5 }.to_string(),
            "150% declining balance"
        );
        assert_eq!(
            DepreciationMethod::DecliningBalance { rate: 1.1 }.to_string(),
            "110% declining balance"
        );
        assert_eq!(
            DepreciationMethod::DecliningBalance { rate: 1.125 }.to_string(),
            "112.5% declining balance"
        );
    }

    #[test]
    fn test_write_csv() {
        let method = DepreciationMethod::SumOfYearsDigits;
        let schedule = DepreciationSchedule::build(1000.0, 100.0, 5, method).unwrap();

        let mut buffer = Vec::new();
        schedule.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("period,expense,accumulated,book_value"));
        assert_eq!(lines.next(), Some("1,300.0,300.0,700.0"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_schedule_json_shape() {
        let method = DepreciationMethod::DecliningBalance { rate: 2.0 };
        let schedule = DepreciationSchedule::build(1000.0, 100.0, 5, method).unwrap();

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["method"]["declining_balance"]["rate"], 2.0);
        assert_eq!(json["rows"].as_array().unwrap().len(), 5);
    }
}
