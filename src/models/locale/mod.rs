//! Locale model for the calendar display.
//!
//! Provides the fixed table of locales offered by the locale control, each
//! with its conventional first day of week and the day/month names used
//! when rendering the calendar.

use chrono::Weekday;
use thiserror::Error;

/// Day and month names for one language. Day arrays start at Monday.
#[derive(Debug)]
pub struct LocaleNames {
    pub narrow_days: [&'static str; 7],
    pub short_days: [&'static str; 7],
    pub months: [&'static str; 12],
}

/// One entry of the locale table.
#[derive(Debug)]
pub struct LocaleInfo {
    /// POSIX style code, e.g. "en_US"
    pub code: &'static str,
    pub language: &'static str,
    pub territory: &'static str,
    /// Conventional first day of week in this locale
    pub first_day_of_week: Weekday,
    pub names: &'static LocaleNames,
}

static ENGLISH: LocaleNames = LocaleNames {
    narrow_days: ["M", "T", "W", "T", "F", "S", "S"],
    short_days: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
};

static RUSSIAN: LocaleNames = LocaleNames {
    narrow_days: ["П", "В", "С", "Ч", "П", "С", "В"],
    short_days: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
    months: [
        "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август",
        "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
    ],
};

static UKRAINIAN: LocaleNames = LocaleNames {
    narrow_days: ["П", "В", "С", "Ч", "П", "С", "Н"],
    short_days: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Нд"],
    months: [
        "Січень", "Лютий", "Березень", "Квітень", "Травень", "Червень", "Липень",
        "Серпень", "Вересень", "Жовтень", "Листопад", "Грудень",
    ],
};

static GERMAN: LocaleNames = LocaleNames {
    narrow_days: ["M", "D", "M", "D", "F", "S", "S"],
    short_days: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
        "September", "Oktober", "November", "Dezember",
    ],
};

static FRENCH: LocaleNames = LocaleNames {
    narrow_days: ["L", "M", "M", "J", "V", "S", "D"],
    short_days: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
        "septembre", "octobre", "novembre", "décembre",
    ],
};

static SPANISH: LocaleNames = LocaleNames {
    narrow_days: ["L", "M", "X", "J", "V", "S", "D"],
    short_days: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ],
};

const fn entry(
    code: &'static str,
    language: &'static str,
    territory: &'static str,
    first_day_of_week: Weekday,
    names: &'static LocaleNames,
) -> LocaleInfo {
    LocaleInfo {
        code,
        language,
        territory,
        first_day_of_week,
        names,
    }
}

/// Supported locales: "C" first, then ordered by language and territory.
static LOCALES: [LocaleInfo; 24] = [
    entry("C", "C", "Default", Weekday::Mon, &ENGLISH),
    entry("ar_EG", "Arabic", "Egypt", Weekday::Sat, &ENGLISH),
    entry("ar_SA", "Arabic", "Saudi Arabia", Weekday::Sun, &ENGLISH),
    entry("zh_CN", "Chinese", "China", Weekday::Mon, &ENGLISH),
    entry("en_CA", "English", "Canada", Weekday::Sun, &ENGLISH),
    entry("en_IN", "English", "India", Weekday::Sun, &ENGLISH),
    entry("en_GB", "English", "United Kingdom", Weekday::Mon, &ENGLISH),
    entry("en_US", "English", "United States", Weekday::Sun, &ENGLISH),
    entry("fr_CA", "French", "Canada", Weekday::Sun, &FRENCH),
    entry("fr_FR", "French", "France", Weekday::Mon, &FRENCH),
    entry("de_AT", "German", "Austria", Weekday::Mon, &GERMAN),
    entry("de_DE", "German", "Germany", Weekday::Mon, &GERMAN),
    entry("de_CH", "German", "Switzerland", Weekday::Mon, &GERMAN),
    entry("he_IL", "Hebrew", "Israel", Weekday::Sun, &ENGLISH),
    entry("it_IT", "Italian", "Italy", Weekday::Mon, &ENGLISH),
    entry("ja_JP", "Japanese", "Japan", Weekday::Sun, &ENGLISH),
    entry("fa_IR", "Persian", "Iran", Weekday::Sat, &ENGLISH),
    entry("pl_PL", "Polish", "Poland", Weekday::Mon, &ENGLISH),
    entry("pt_BR", "Portuguese", "Brazil", Weekday::Sun, &ENGLISH),
    entry("ru_RU", "Russian", "Russia", Weekday::Mon, &RUSSIAN),
    entry("es_MX", "Spanish", "Mexico", Weekday::Sun, &SPANISH),
    entry("es_ES", "Spanish", "Spain", Weekday::Mon, &SPANISH),
    entry("sv_SE", "Swedish", "Sweden", Weekday::Mon, &ENGLISH),
    entry("uk_UA", "Ukrainian", "Ukraine", Weekday::Mon, &UKRAINIAN),
];

/// Errors produced when resolving a locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale code is empty")]
    Empty,
    #[error("unknown locale '{0}'")]
    Unknown(String),
}

/// A locale from the supported table.
#[derive(Debug, Clone, Copy)]
pub struct DisplayLocale {
    info: &'static LocaleInfo,
}

impl PartialEq for DisplayLocale {
    fn eq(&self, other: &Self) -> bool {
        self.info.code == other.info.code
    }
}

impl Eq for DisplayLocale {}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self { info: &LOCALES[0] }
    }
}

impl DisplayLocale {
    /// Every supported locale, in table order.
    pub fn all() -> impl Iterator<Item = DisplayLocale> {
        LOCALES.iter().map(|info| DisplayLocale { info })
    }

    /// Parse a POSIX ("ru_RU.UTF-8") or BCP-47 ("ru-RU") code.
    ///
    /// A code naming only a language, or a territory the table lacks,
    /// resolves to the first entry for that language.
    pub fn from_code(code: &str) -> Result<Self, LocaleError> {
        let trimmed = code.trim();
        let base = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");
        if base.is_empty() {
            return Err(LocaleError::Empty);
        }
        if base == "C" || base.eq_ignore_ascii_case("POSIX") {
            return Ok(Self::default());
        }

        let mut parts = base.splitn(2, '_');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let territory = parts.next().map(|t| t.to_ascii_uppercase());

        if let Some(territory) = territory {
            let suffix = format!("_{}", territory);
            if let Some(found) =
                Self::for_language(&language).find(|locale| locale.code().ends_with(&suffix))
            {
                return Ok(found);
            }
        }

        let found = Self::for_language(&language).next();
        found.ok_or_else(|| LocaleError::Unknown(trimmed.to_string()))
    }

    fn for_language(language: &str) -> impl Iterator<Item = DisplayLocale> + '_ {
        Self::all().filter(move |locale| {
            locale
                .code()
                .split('_')
                .next()
                .is_some_and(|lang| lang == language)
        })
    }

    /// Resolve the locale the operating system reports for the user.
    pub fn from_system() -> Option<Self> {
        Self::from_reported(sys_locale::get_locale())
    }

    /// Map a platform locale identifier onto the table, if one was reported.
    fn from_reported(reported: Option<String>) -> Option<Self> {
        let code = reported?;
        match Self::from_code(&code) {
            Ok(locale) => Some(locale),
            Err(err) => {
                log::debug!("Ignoring system locale {:?}: {}", code, err);
                None
            }
        }
    }

    pub fn code(&self) -> &'static str {
        self.info.code
    }

    pub fn language(&self) -> &'static str {
        self.info.language
    }

    pub fn territory(&self) -> &'static str {
        self.info.territory
    }

    /// Label shown in the locale control, e.g. "English/United States".
    pub fn label(&self) -> String {
        format!("{}/{}", self.info.language, self.info.territory)
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.info.first_day_of_week
    }

    pub fn narrow_day_name(&self, day: Weekday) -> &'static str {
        self.info.names.narrow_days[day.num_days_from_monday() as usize]
    }

    pub fn short_day_name(&self, day: Weekday) -> &'static str {
        self.info.names.short_days[day.num_days_from_monday() as usize]
    }

    /// Standalone month name for a 1-based month.
    pub fn month_name(&self, month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        self.info.names.months[index]
    }
}
