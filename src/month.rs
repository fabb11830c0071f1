//! The `YYYY-MM` month key used for filtering and grouping transactions.

use std::{fmt::Display, str::FromStr};

use time::{Date, Month};

use crate::Error;

/// A calendar month, e.g. September 2024.
///
/// Displays and parses as `YYYY-MM`, which is also the first seven characters
/// of an ISO date in that month. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    /// The month that `date` falls in.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// The year of the month.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The month of the year, 1 to 12.
    pub fn month(self) -> u8 {
        self.month
    }

    /// A short label for chart axes, e.g. "Sep 2024".
    pub fn label(self) -> String {
        let name = match Month::try_from(self.month) {
            Ok(Month::January) => "Jan",
            Ok(Month::February) => "Feb",
            Ok(Month::March) => "Mar",
            Ok(Month::April) => "Apr",
            Ok(Month::May) => "May",
            Ok(Month::June) => "Jun",
            Ok(Month::July) => "Jul",
            Ok(Month::August) => "Aug",
            Ok(Month::September) => "Sep",
            Ok(Month::October) => "Oct",
            Ok(Month::November) => "Nov",
            Ok(Month::December) => "Dec",
            // Unreachable, the constructors only produce months 1 to 12.
            Err(_) => "???",
        };

        format!("{name} {}", self.year)
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(text.to_owned());

        let (year, month) = text.split_once('-').ok_or_else(invalid)?;

        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Month::try_from(month).map_err(|_| invalid())?;

        Ok(Self { year, month })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, month::MonthKey};

    #[test]
    fn parses_and_displays_iso_month() {
        let month: MonthKey = "2024-09".parse().unwrap();

        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 9);
        assert_eq!(month.to_string(), "2024-09");
    }

    #[test]
    fn rejects_malformed_months() {
        for text in ["", "2024", "2024-9", "2024-13", "2024-00", "24-09", "2024/09", "abcd-ef"] {
            assert_eq!(
                text.parse::<MonthKey>(),
                Err(Error::InvalidMonth(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn month_of_date_matches_date_prefix() {
        let date = date!(2024 - 01 - 31);

        let month = MonthKey::of(date);

        assert_eq!(month.to_string(), date.to_string()[..7]);
    }

    #[test]
    fn orders_chronologically() {
        let mut months: Vec<MonthKey> = ["2024-10", "2023-12", "2024-02"]
            .into_iter()
            .map(|text| text.parse().unwrap())
            .collect();

        months.sort();

        let got: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(got, vec!["2023-12", "2024-02", "2024-10"]);
    }

    #[test]
    fn label_uses_short_month_name() {
        let month: MonthKey = "2024-09".parse().unwrap();

        assert_eq!(month.label(), "Sep 2024");
    }
}
