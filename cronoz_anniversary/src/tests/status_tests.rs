use crate::*;

use cronoz_models::{chrono::NaiveDate, settings::BirthdayMessages};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
pub fn status_reports_next_occurrence_and_age() {
    let birthday: RecurringDate = "1990-03-15".parse().unwrap();

    let status =
        BirthdayStatus::project(&birthday, date(2024, 3, 20), &BirthdayMessages::default())
            .unwrap();

    assert_eq!(
        status,
        BirthdayStatus {
            days_until: 360,
            tier: BirthdayTier::PlentyOfTime,
            message: BirthdayMessages::PLENTY_OF_TIME.to_string(),
            next_occurrence: date(2025, 3, 15),
            turning: Some(35),
        }
    );
}

#[test]
pub fn status_on_the_day_reports_todays_age() {
    let birthday: RecurringDate = "1990-03-15".parse().unwrap();

    let status =
        BirthdayStatus::project(&birthday, date(2024, 3, 15), &BirthdayMessages::default())
            .unwrap();

    assert_eq!(status.days_until, 0);
    assert_eq!(status.tier, BirthdayTier::Today);
    assert_eq!(status.turning, Some(34));
}

#[test]
pub fn status_without_origin_year_has_no_age() {
    let birthday = RecurringDate::new(12, 25, None).unwrap();

    let status =
        BirthdayStatus::project(&birthday, date(2024, 12, 20), &BirthdayMessages::default())
            .unwrap();

    assert_eq!(status.days_until, 5);
    assert_eq!(status.message, BirthdayMessages::VERY_SOON);
    assert_eq!(status.turning, None);
}

#[test]
pub fn unconfigured_profile_gets_a_prompt() {
    let birthday = RecurringDate::parse_profile(Some("")).unwrap();

    let status = BirthdayStatus::for_profile(
        birthday.as_ref(),
        date(2024, 1, 1),
        &BirthdayMessages::default(),
    )
    .unwrap();

    assert_eq!(
        status,
        ProfileBirthday::Unconfigured {
            prompt: BirthdayMessages::UNCONFIGURED.to_string()
        }
    );
}

#[test]
pub fn configured_profile_uses_custom_messages() {
    let birthday = RecurringDate::parse_profile(Some("1985-01-10")).unwrap();
    let messages = BirthdayMessages {
        this_month: "Falta pouco!".to_string(),
        ..Default::default()
    };

    let status =
        BirthdayStatus::for_profile(birthday.as_ref(), date(2024, 1, 1), &messages).unwrap();

    let ProfileBirthday::Configured(status) = status else {
        panic!("Expected a configured birthday, got {status:?}");
    };
    assert_eq!(status.days_until, 9);
    assert_eq!(status.tier, BirthdayTier::ThisMonth);
    assert_eq!(status.message, "Falta pouco!");
    assert_eq!(status.turning, Some(39));
}
