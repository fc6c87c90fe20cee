//! JSON inputs in the widget's attribute format.
//!
//! - domain: `{"inf": 0, "sup": 100}`
//! - interval: `{"d1": 40, "d2": 60, "dt1": 5, "dt2": 5}`; unknown keys such as
//!   the widget's `h` are ignored.

use anyhow::{Context, Result};
use gauge::api::{Domain, FuzzyInterval};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOMAIN: &str = r#"{"inf": 0, "sup": 100}"#;
pub const DEFAULT_NORM: &str = r#"{"d1": 40, "d2": 60, "dt1": 5, "dt2": 5}"#;
pub const DEFAULT_VALUE: &str = r#"{"d1": 50, "d2": 50, "dt1": 2, "dt2": 2}"#;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct DomainSpec {
    pub inf: f64,
    pub sup: f64,
}

impl DomainSpec {
    pub fn to_domain(self) -> Result<Domain> {
        Domain::new(self.inf, self.sup).context("domain")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct IntervalSpec {
    pub d1: f64,
    pub d2: f64,
    pub dt1: f64,
    pub dt2: f64,
}

impl IntervalSpec {
    /// Unvalidated; `evaluate` checks it together with the other inputs.
    pub fn to_interval(self) -> FuzzyInterval {
        FuzzyInterval {
            kernel_left: self.d1,
            kernel_right: self.d2,
            tolerance_left: self.dt1,
            tolerance_right: self.dt2,
        }
    }
}

/// Parse a JSON argument, naming it in the error.
pub fn parse_json<T: DeserializeOwned>(what: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("parsing --{what} as JSON: {raw}"))
}
