mod status;
mod tier;

pub use status::{BirthdayStatus, ProfileBirthday};
pub use tier::{BirthdayTier, TierMessages, message_for_days_until};

use cronoz_models::{
    chrono::{DateTime, Datelike, NaiveDate, TimeZone},
    recurring_date::{DateError, RecurringDate},
};

/// Whole days from `today` until the next observance of `recurring`.
///
/// The occurrence day itself yields `0`. Once it has passed the count rolls
/// over to next year, so the result never exceeds 365. Fails with
/// [`DateError::OutOfRange`] when that rollover would leave chrono's last
/// supported year.
pub fn days_until_next(recurring: &RecurringDate, today: NaiveDate) -> Result<u32, DateError> {
    next_occurrence(recurring, today).map(|(_, days)| days)
}

/// Same as [`days_until_next`], with "today" taken as the calendar date of
/// `now` in its own timezone.
pub fn days_until_next_at<Tz: TimeZone>(
    recurring: &RecurringDate,
    now: &DateTime<Tz>,
) -> Result<u32, DateError> {
    days_until_next(recurring, now.date_naive())
}

pub(crate) fn next_occurrence(
    recurring: &RecurringDate,
    today: NaiveDate,
) -> Result<(NaiveDate, u32), DateError> {
    let out_of_range = || DateError::OutOfRange { after: today };

    let this_year = recurring
        .occurrence_in(today.year())
        .ok_or_else(out_of_range)?;

    let target = if this_year < today {
        let next_year = today
            .year()
            .checked_add(1)
            .and_then(|year| recurring.occurrence_in(year))
            .ok_or_else(out_of_range)?;

        log::debug!("{recurring} already passed on {this_year}, rolling over to {next_year}");
        next_year
    } else {
        this_year
    };

    let days = (target - today).num_days();
    let days = u32::try_from(days).map_err(|_| out_of_range())?;

    Ok((target, days))
}

#[cfg(test)]
mod tests;
