//! Weekday identity and locale labels.
//!
//! The weekly template is keyed by [`Weekday`], a closed set of seven days
//! starting from Sunday. Display labels are locale-specific; parsing
//! accepts the labels of every supported locale.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Reference weekday; first entry of the template.
    Sunday,
    /// Second day.
    Monday,
    /// Third day.
    Tuesday,
    /// Fourth day.
    Wednesday,
    /// Fifth day.
    Thursday,
    /// Sixth day.
    Friday,
    /// Seventh day.
    Saturday,
}

impl Weekday {
    /// All seven weekdays in template order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday a calendar date falls on.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }

    /// Position in template order (Sunday = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label in the given locale.
    #[must_use]
    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                Self::Sunday => "Sunday",
                Self::Monday => "Monday",
                Self::Tuesday => "Tuesday",
                Self::Wednesday => "Wednesday",
                Self::Thursday => "Thursday",
                Self::Friday => "Friday",
                Self::Saturday => "Saturday",
            },
            Locale::Arabic => match self {
                Self::Sunday => "الأحد",
                Self::Monday => "الإثنين",
                Self::Tuesday => "الثلاثاء",
                Self::Wednesday => "الأربعاء",
                Self::Thursday => "الخميس",
                Self::Friday => "الجمعة",
                Self::Saturday => "السبت",
            },
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::English))
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Parses a full label in any locale, or a three-letter English abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                Locale::ALL.iter().any(|locale| day.label(*locale).to_lowercase() == wanted)
                    || day.label(Locale::English)[..3].eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| format!("unknown weekday: {s}"))
    }
}

/// Language used for weekday labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English day names.
    #[default]
    English,
    /// Arabic day names.
    Arabic,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::English, Self::Arabic];
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            other => Err(format!("unsupported locale: {other} (expected en or ar)")),
        }
    }
}
