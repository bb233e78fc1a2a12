mod appsettings;

use anyhow::Context;
use appsettings::AppSettings;
use clap::{Parser, Subcommand};
use cronoz_anniversary::{BirthdayStatus, ProfileBirthday};
use cronoz_models::{chrono::Utc, recurring_date::RecurringDate};

/// Birthday countdown and message body obfuscation.
///
/// Without a subcommand, prints the birthday status of the configured profile.
#[derive(Parser, Debug)]
#[command(name = "cronoz", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Obfuscate a message body the way it is stored
    Encode { text: String },

    /// Reveal a stored message body, printing it unchanged if it was never encoded
    Decode { text: String },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        None => print_birthday_status(),
        Some(Command::Encode { text }) => {
            println!("{}", cronoz_obfuscation::encode(&text));
            Ok(())
        }
        Some(Command::Decode { text }) => {
            println!("{}", cronoz_obfuscation::decode(&text));
            Ok(())
        }
    }
}

fn print_birthday_status() -> anyhow::Result<()> {
    let settings = AppSettings::load().context("Unable to load appsettings")?;
    let profile = &settings.profile;

    let birthday = RecurringDate::parse_profile(profile.birth_date.as_deref())
        .context("Profile birth date is invalid")?;

    let today = Utc::now().with_timezone(&profile.timezone).date_naive();
    log::info!("Evaluating birthday for {today} in {}", profile.timezone);

    match BirthdayStatus::for_profile(birthday.as_ref(), today, &settings.birthday_messages)? {
        ProfileBirthday::Unconfigured { prompt } => println!("{prompt}"),
        ProfileBirthday::Configured(status) => {
            println!("{}", status.message);
            match status.turning {
                Some(age) => println!(
                    "{} days until {} (turning {age})",
                    status.days_until, status.next_occurrence
                ),
                None => println!("{} days until {}", status.days_until, status.next_occurrence),
            }
        }
    }

    Ok(())
}
