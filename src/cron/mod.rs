//! Cron-expression field splitting
//!
//! Splits a six-field cron string (second-resolution variant) into its
//! named fields and renders the time-of-day part for schedule logging.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolkitError};

/// The six fields of a second-resolution cron expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronFields {
    pub second: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl CronFields {
    /// Split a cron expression into its fields
    ///
    /// Expressions with fewer than six whitespace-separated fields are
    /// rejected with [`ToolkitError::MalformedCron`]; extra fields are
    /// ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trade_toolkit::cron::CronFields;
    ///
    /// let fields = CronFields::parse("0 45 13 * * 1-5").unwrap();
    /// assert_eq!(fields.hour, "13");
    /// assert_eq!(fields.day_of_week, "1-5");
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        if parts.len() < 6 {
            return Err(ToolkitError::MalformedCron(expression.to_string()));
        }

        Ok(Self {
            second: parts[0].to_string(),
            minute: parts[1].to_string(),
            hour: parts[2].to_string(),
            day_of_month: parts[3].to_string(),
            month: parts[4].to_string(),
            day_of_week: parts[5].to_string(),
        })
    }

    /// Render the time-of-day part as `HH:MM:SS`
    ///
    /// Single-character fields are zero-padded; range or wildcard fields
    /// pass through as written.
    pub fn time_of_day(&self) -> String {
        format!(
            "{}:{}:{}",
            pad(&self.hour),
            pad(&self.minute),
            pad(&self.second)
        )
    }
}

fn pad(field: &str) -> String {
    if field.len() == 1 && field != "*" {
        format!("0{}", field)
    } else {
        field.to_string()
    }
}
