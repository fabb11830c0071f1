//! Conversions from canonical timezone names to the local date.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::{Error, month::MonthKey};

/// The current UTC offset of `canonical_timezone`, e.g. "Pacific/Auckland".
///
/// Returns `None` if the timezone name is not known.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in `canonical_timezone`.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the timezone name is not known.
pub fn local_today(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        Error::InvalidTimezoneError(canonical_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

/// The month of today's date in `canonical_timezone`.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the timezone name is not known.
pub fn current_month(canonical_timezone: &str) -> Result<MonthKey, Error> {
    local_today(canonical_timezone).map(MonthKey::of)
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        timezone::{current_month, get_local_offset, local_today},
    };

    #[test]
    fn utc_has_zero_offset() {
        let offset = get_local_offset("Etc/UTC").unwrap();

        assert!(offset.is_utc());
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            local_today("Not/A_Timezone"),
            Err(Error::InvalidTimezoneError("Not/A_Timezone".to_owned()))
        );
    }

    #[test]
    fn current_month_contains_today() {
        let today = local_today("Etc/UTC").unwrap();
        let month = current_month("Etc/UTC").unwrap();

        assert_eq!(month.year(), today.year());
        assert_eq!(month.month(), u8::from(today.month()));
    }
}
