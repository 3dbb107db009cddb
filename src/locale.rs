//! Locales the crate ships month names and weekday symbols for.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, consts::MAX_MONTH};

/// How wide a weekday symbol should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolWidth {
    /// Abbreviations such as `Mon` or `月`
    #[default]
    Short,
    /// Single-letter symbols such as `M`, for compact month views
    Narrow,
}

/// A supported display locale.
///
/// Only label text depends on the locale, never grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// Japanese (`ja_JP`)
    JaJp,
    /// English, United States (`en_US`)
    EnUs,
    /// German, Germany (`de_DE`)
    DeDe,
    /// French, France (`fr_FR`)
    FrFr,
}

struct Tables {
    months:          [&'static str; MAX_MONTH as usize],
    weekdays_short:  [&'static str; 7],
    weekdays_narrow: [&'static str; 7],
}

// Weekday tables are Sunday first.
const JA_JP: Tables = Tables {
    months:          ["1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月"],
    weekdays_short:  ["日", "月", "火", "水", "木", "金", "土"],
    weekdays_narrow: ["日", "月", "火", "水", "木", "金", "土"],
};

const EN_US: Tables = Tables {
    months:          [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    weekdays_short:  ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    weekdays_narrow: ["S", "M", "T", "W", "T", "F", "S"],
};

const DE_DE: Tables = Tables {
    months:          [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    weekdays_short:  ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    weekdays_narrow: ["S", "M", "D", "M", "D", "F", "S"],
};

const FR_FR: Tables = Tables {
    months:          [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    weekdays_short:  ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    weekdays_narrow: ["D", "L", "M", "M", "J", "V", "S"],
};

impl Locale {
    /// Every supported locale
    pub const ALL: [Self; 4] = [Self::JaJp, Self::EnUs, Self::DeDe, Self::FrFr];

    /// Canonical identifier, e.g. `ja_JP`
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::JaJp => "ja_JP",
            Self::EnUs => "en_US",
            Self::DeDe => "de_DE",
            Self::FrFr => "fr_FR",
        }
    }

    const fn tables(self) -> &'static Tables {
        match self {
            Self::JaJp => &JA_JP,
            Self::EnUs => &EN_US,
            Self::DeDe => &DE_DE,
            Self::FrFr => &FR_FR,
        }
    }

    /// Standalone month name for a 1-based month, `None` outside `1..=12`
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.tables().months.get(index).copied()
    }

    /// Weekday symbol in the requested width
    pub fn weekday_symbol(self, weekday: Weekday, width: SymbolWidth) -> &'static str {
        let tables = self.tables();
        let symbols = match width {
            SymbolWidth::Short => &tables.weekdays_short,
            SymbolWidth::Narrow => &tables.weekdays_narrow,
        };
        symbols[weekday.num_days_from_sunday() as usize]
    }

    /// Year + month label, e.g. `2025年5月` or `May 2025`
    pub fn year_month_label(self, year: i32, month: u32) -> String {
        match (self, self.month_name(month)) {
            (Self::JaJp, _) => format!("{year}年{month}月"),
            (_, Some(name)) => format!("{name} {year}"),
            (_, None) => format!("{year:04}-{month:02}"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    /// Accepts a bare language (`en`) or a language plus the region the crate
    /// ships tables for (`en_US`, `en-us`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyLocale);
        }

        let normalized = trimmed.replace('-', "_");
        let (language, region) = match normalized.split_once('_') {
            Some((language, region)) => (language, Some(region)),
            None => (normalized.as_str(), None),
        };

        Self::ALL
            .into_iter()
            .find(|locale| {
                let (lang, reg) = locale
                    .identifier()
                    .split_once('_')
                    .unwrap_or((locale.identifier(), ""));
                language.eq_ignore_ascii_case(lang)
                    && region.is_none_or(|region| region.eq_ignore_ascii_case(reg))
            })
            .ok_or_else(|| ConfigError::UnsupportedLocale(trimmed.to_owned()))
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.identifier().to_owned()
    }
}
