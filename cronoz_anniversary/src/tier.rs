use cronoz_models::settings::BirthdayMessages;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BirthdayTier {
    Today,
    VerySoon,
    ThisMonth,
    FewMonths,
    Halfway,
    PastHalfway,
    PlentyOfTime,
}

/// Inclusive upper bounds, evaluated in order. Anything past the last bound
/// belongs to the last tier.
pub(crate) const TIERS: [(u32, BirthdayTier); 7] = [
    (0, BirthdayTier::Today),
    (7, BirthdayTier::VerySoon),
    (30, BirthdayTier::ThisMonth),
    (90, BirthdayTier::FewMonths),
    (180, BirthdayTier::Halfway),
    (270, BirthdayTier::PastHalfway),
    (365, BirthdayTier::PlentyOfTime),
];

impl BirthdayTier {
    pub fn for_days_until(days_until: u32) -> Self {
        TIERS
            .iter()
            .find(|(upper, _)| days_until <= *upper)
            .map(|(_, tier)| *tier)
            .unwrap_or(BirthdayTier::PlentyOfTime)
    }

    pub fn default_message(self) -> &'static str {
        match self {
            BirthdayTier::Today => BirthdayMessages::TODAY,
            BirthdayTier::VerySoon => BirthdayMessages::VERY_SOON,
            BirthdayTier::ThisMonth => BirthdayMessages::THIS_MONTH,
            BirthdayTier::FewMonths => BirthdayMessages::FEW_MONTHS,
            BirthdayTier::Halfway => BirthdayMessages::HALFWAY,
            BirthdayTier::PastHalfway => BirthdayMessages::PAST_HALFWAY,
            BirthdayTier::PlentyOfTime => BirthdayMessages::PLENTY_OF_TIME,
        }
    }
}

/// Built-in countdown text. `None` means no date is configured.
pub fn message_for_days_until(days_until: Option<u32>) -> &'static str {
    match days_until {
        Some(days) => BirthdayTier::for_days_until(days).default_message(),
        None => BirthdayMessages::UNCONFIGURED,
    }
}

pub trait TierMessages {
    fn unconfigured_message(&self) -> &str;

    fn tier_message(&self, tier: BirthdayTier) -> &str;

    fn message_for(&self, days_until: Option<u32>) -> &str {
        match days_until {
            Some(days) => self.tier_message(BirthdayTier::for_days_until(days)),
            None => self.unconfigured_message(),
        }
    }
}

impl TierMessages for BirthdayMessages {
    fn unconfigured_message(&self) -> &str {
        &self.unconfigured
    }

    fn tier_message(&self, tier: BirthdayTier) -> &str {
        match tier {
            BirthdayTier::Today => &self.today,
            BirthdayTier::VerySoon => &self.very_soon,
            BirthdayTier::ThisMonth => &self.this_month,
            BirthdayTier::FewMonths => &self.few_months,
            BirthdayTier::Halfway => &self.halfway,
            BirthdayTier::PastHalfway => &self.past_halfway,
            BirthdayTier::PlentyOfTime => &self.plenty_of_time,
        }
    }
}
