pub mod recurring_date;
pub mod settings;

pub use chrono;
pub use chrono_tz;
