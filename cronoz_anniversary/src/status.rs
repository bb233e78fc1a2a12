use cronoz_models::{
    chrono::NaiveDate,
    recurring_date::{DateError, RecurringDate},
    settings::BirthdayMessages,
};

use crate::{BirthdayTier, TierMessages, next_occurrence};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayStatus {
    pub days_until: u32,
    pub tier: BirthdayTier,
    pub message: String,
    pub next_occurrence: NaiveDate,
    /// Age reached on `next_occurrence`, when the origin year is known.
    pub turning: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBirthday {
    Unconfigured { prompt: String },
    Configured(BirthdayStatus),
}

impl BirthdayStatus {
    pub fn project(
        recurring: &RecurringDate,
        today: NaiveDate,
        messages: &BirthdayMessages,
    ) -> Result<Self, DateError> {
        let (next_occurrence, days_until) = next_occurrence(recurring, today)?;
        let tier = BirthdayTier::for_days_until(days_until);

        Ok(Self {
            days_until,
            tier,
            message: messages.tier_message(tier).to_string(),
            next_occurrence,
            turning: recurring.age_on(next_occurrence),
        })
    }

    pub fn for_profile(
        recurring: Option<&RecurringDate>,
        today: NaiveDate,
        messages: &BirthdayMessages,
    ) -> Result<ProfileBirthday, DateError> {
        match recurring {
            Some(recurring) => {
                Self::project(recurring, today, messages).map(ProfileBirthday::Configured)
            }
            None => Ok(ProfileBirthday::Unconfigured {
                prompt: messages.message_for(None).to_string(),
            }),
        }
    }
}
