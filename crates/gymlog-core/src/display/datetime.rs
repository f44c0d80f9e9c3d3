//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around `Date` that formats it as `DD/MM/YYYY`.
///
/// Day and month are zero-padded, e.g. `05/03/2025`.
pub struct DayMonthYear<'a>(pub &'a Date);

impl<'a> fmt::Display for DayMonthYear<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d/%m/%Y"))
    }
}
