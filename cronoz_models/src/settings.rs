use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProfileSettings {
    /// Birth date as stored in the profile, `YYYY-MM-DD`. Empty means unset.
    #[serde(default)]
    pub birth_date: Option<String>,

    /// Zone in which "today" is evaluated.
    #[serde(default)]
    pub timezone: chrono_tz::Tz,
}

/// Texts shown for each countdown tier. Any field left out of the
/// configuration keeps its built-in value.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BirthdayMessages {
    pub unconfigured: String,
    pub today: String,
    pub very_soon: String,
    pub this_month: String,
    pub few_months: String,
    pub halfway: String,
    pub past_halfway: String,
    pub plenty_of_time: String,
}

impl BirthdayMessages {
    pub const UNCONFIGURED: &'static str =
        "Set your birth date in your profile to see your birthday countdown.";
    pub const TODAY: &'static str = "Happy birthday! Today is your day! 🎉";
    pub const VERY_SOON: &'static str = "Your birthday is very soon, less than a week to go!";
    pub const THIS_MONTH: &'static str = "Your birthday is coming up this month.";
    pub const FEW_MONTHS: &'static str = "Your birthday is a few months away.";
    pub const HALFWAY: &'static str = "You are about halfway to your next birthday.";
    pub const PAST_HALFWAY: &'static str = "Past the halfway point, time flies!";
    pub const PLENTY_OF_TIME: &'static str = "Your birthday just passed, plenty of time left.";
}

impl Default for BirthdayMessages {
    fn default() -> Self {
        Self {
            unconfigured: Self::UNCONFIGURED.to_string(),
            today: Self::TODAY.to_string(),
            very_soon: Self::VERY_SOON.to_string(),
            this_month: Self::THIS_MONTH.to_string(),
            few_months: Self::FEW_MONTHS.to_string(),
            halfway: Self::HALFWAY.to_string(),
            past_halfway: Self::PAST_HALFWAY.to_string(),
            plenty_of_time: Self::PLENTY_OF_TIME.to_string(),
        }
    }
}
