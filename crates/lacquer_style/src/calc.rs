//! calc()/unit helpers
//!
//! Style definitions mix raw numeric tokens with `var(...)` references,
//! so arithmetic has to happen in CSS. [`CssCalc`] builds a `calc(...)`
//! expression chain; bare numbers are tagged while the chain grows and
//! only get their `px` (or nothing) at render time.

use std::fmt::Write as _;

use lacquer_theme::TokenValue;

/// Placeholder appended to bare numbers until the final render decides
/// whether they carry a unit.
const CALC_UNIT: &str = "{CALC_UNIT}";

/// One operand of a calc chain.
#[derive(Clone, Debug)]
pub enum CalcOperand {
    Num(f64),
    Raw(String),
    Calc(CssCalc),
}

impl From<f64> for CalcOperand {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for CalcOperand {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for CalcOperand {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<CssCalc> for CalcOperand {
    fn from(value: CssCalc) -> Self {
        Self::Calc(value)
    }
}

/// A chainable CSS calc expression builder.
#[derive(Clone, Debug)]
pub struct CssCalc {
    expr: String,
    low_precedence: bool,
}

impl CssCalc {
    pub fn new(value: impl Into<CalcOperand>) -> Self {
        let expr = match value.into() {
            CalcOperand::Num(n) => format!("{n}{CALC_UNIT}"),
            CalcOperand::Raw(s) => s,
            CalcOperand::Calc(c) => format!("({})", c.expr),
        };
        Self {
            expr,
            low_precedence: false,
        }
    }

    fn append(mut self, op: &str, value: impl Into<CalcOperand>, scalar: bool) -> Self {
        match value.into() {
            // multiplication/division factors are scalars and never
            // carry a unit
            CalcOperand::Num(n) if scalar => {
                let _ = write!(self.expr, " {op} {n}");
            }
            CalcOperand::Num(n) => {
                let _ = write!(self.expr, " {op} {n}{CALC_UNIT}");
            }
            CalcOperand::Raw(s) => {
                let _ = write!(self.expr, " {op} {s}");
            }
            CalcOperand::Calc(c) => {
                let _ = write!(self.expr, " {op} ({})", c.expr);
            }
        }
        self
    }

    pub fn add(self, value: impl Into<CalcOperand>) -> Self {
        let mut next = self.append("+", value, false);
        next.low_precedence = true;
        next
    }

    pub fn sub(self, value: impl Into<CalcOperand>) -> Self {
        let mut next = self.append("-", value, false);
        next.low_precedence = true;
        next
    }

    pub fn mul(mut self, value: impl Into<CalcOperand>) -> Self {
        // a pending +/- chain binds looser than *, so parenthesize it
        if self.low_precedence {
            self.expr = format!("({})", self.expr);
        }
        let mut next = self.append("*", value, true);
        next.low_precedence = false;
        next
    }

    pub fn div(mut self, value: impl Into<CalcOperand>) -> Self {
        if self.low_precedence {
            self.expr = format!("({})", self.expr);
        }
        let mut next = self.append("/", value, true);
        next.low_precedence = false;
        next
    }

    /// Render as `calc(...)` with `px` on bare numbers.
    pub fn equal(&self) -> String {
        format!("calc({})", self.expr.replace(CALC_UNIT, "px"))
    }

    /// Render as `calc(...)` leaving bare numbers unitless.
    pub fn equal_unitless(&self) -> String {
        format!("calc({})", self.expr.replace(CALC_UNIT, ""))
    }
}

/// Start a calc chain; shorthand for [`CssCalc::new`].
pub fn calc(value: impl Into<CalcOperand>) -> CssCalc {
    CssCalc::new(value)
}

/// Append `px` to numeric values; strings pass through untouched.
pub fn unit(value: &TokenValue) -> String {
    match value {
        TokenValue::Num(n) => format!("{n}px"),
        other => other.render(),
    }
}

/// `max(a, b, …)` over already-formatted values.
pub fn css_max<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    join_fn("max", values)
}

/// `min(a, b, …)` over already-formatted values.
pub fn css_min<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    join_fn("min", values)
}

fn join_fn<I>(name: &str, values: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    let joined: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("{name}({})", joined.join(","))
}
