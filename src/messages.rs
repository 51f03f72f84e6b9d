//! Built-in message catalogs and name lists.
//!
//! The core reports failures as a message key plus a placeholder map; turning
//! that into a human-readable string is the job of the host application's
//! translation layer. This module ships a default English and Persian catalog
//! so the crate is usable stand-alone, plus the canonical Persian week-day and
//! month name lists used by the day/month rules.
//!
//! Message keys are stable identifiers and must be preserved verbatim.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

/// The full set of message keys emitted by the validator catalog.
pub mod keys {
    pub const PERSIAN_ALPHA: &str = "persian_alpha";
    pub const PERSIAN_ALPHA_NUM: &str = "persian_alpha_num";
    pub const PERSIAN_ALPHA_ENG_NUM: &str = "persian_alpha_eng_num";
    pub const PERSIAN_NUM: &str = "persian_num";
    pub const PERSIAN_NOT_ACCEPT: &str = "persian_not_accept";
    pub const PERSIAN_DATE: &str = "persian_date";
    pub const PERSIAN_DATE_BETWEEN: &str = "persian_date_between";
    pub const PERSIAN_DATE_BETWEEN_OR_EQUAL: &str = "persian_date_between_or_equal";
    pub const PERSIAN_DATE_BETWEEN_YEAR: &str = "persian_date_between_year";
    pub const PERSIAN_DATE_BETWEEN_OR_EQUAL_YEAR: &str = "persian_date_between_or_equal_year";
    pub const PERSIAN_DAY: &str = "persian_day";
    pub const PERSIAN_MONTH: &str = "persian_month";
    pub const IR_MOBILE: &str = "ir_mobile";
    pub const IR_MOBILE_WITH_COUNTRY_CODE: &str = "ir_mobile_with_country_code";
    pub const IR_PHONE: &str = "ir_phone";
    pub const IR_PHONE_WITH_AREA_CODE: &str = "ir_phone_with_area_code";
    pub const IR_PHONE_WITH_COUNTRY_CODE: &str = "ir_phone_with_country_code";
    pub const IR_PHONE_AREA_CODE: &str = "ir_phone_area_code";
    pub const IR_POSTAL_CODE: &str = "ir_postal_code";
    pub const IR_POSTAL_CODE_WITH_SEPARATOR: &str = "ir_postal_code_with_separator";
    pub const IR_BANK_CARD_NUMBER: &str = "ir_bank_card_number";
    pub const IR_BANK_CARD_NUMBER_WITH_SEPARATOR: &str = "ir_bank_card_number_with_separator";
    pub const IR_IBAN: &str = "ir_iban";
    pub const IR_IBAN_WITH_SEPARATOR: &str = "ir_iban_with_separator";
    pub const IR_NATIONAL_ID: &str = "ir_national_id";
    pub const IR_COMPANY_ID: &str = "ir_company_id";
}

/// Persian week-day names, Saturday first.
pub const PERSIAN_WEEK_DAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
];

/// Persian month names, Farvardin first.
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Provides the week-day and month name lists a day/month rule validates
/// against. The built-in implementation carries the canonical Persian lists;
/// hosts with their own translation source can inject a different one.
pub trait NameSource {
    fn week_days(&self) -> Vec<String>;
    fn months(&self) -> Vec<String>;
}

/// The hardcoded Persian name lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNames;

impl NameSource for BuiltinNames {
    fn week_days(&self) -> Vec<String> {
        PERSIAN_WEEK_DAYS.iter().map(|s| s.to_string()).collect()
    }

    fn months(&self) -> Vec<String> {
        PERSIAN_MONTHS.iter().map(|s| s.to_string()).collect()
    }
}

/// A message catalog for one locale: key → template, plus the locale's
/// transliterated name lists and the display word for the space separator.
#[derive(Debug)]
pub struct MessageCatalog {
    templates: BTreeMap<&'static str, &'static str>,
    pub week_days: [&'static str; 7],
    pub months: [&'static str; 12],
    pub space_word: &'static str,
}

impl MessageCatalog {
    /// Looks up the template for a message key.
    pub fn template(&self, key: &str) -> Option<&'static str> {
        self.templates.get(key).copied()
    }

    /// Renders a message for `key`, substituting `:name` placeholders from
    /// the map. Unknown keys render as the key itself so a missing
    /// translation never turns into a panic.
    pub fn render(&self, key: &str, placeholders: &BTreeMap<&'static str, String>) -> String {
        match self.template(key) {
            Some(template) => format_message(template, placeholders),
            None => key.to_string(),
        }
    }
}

impl NameSource for MessageCatalog {
    fn week_days(&self) -> Vec<String> {
        self.week_days.iter().map(|s| s.to_string()).collect()
    }

    fn months(&self) -> Vec<String> {
        self.months.iter().map(|s| s.to_string()).collect()
    }
}

/// Substitutes `:name` placeholders in a template. Longer names are replaced
/// first so a placeholder can never clobber another one it prefixes.
pub fn format_message(template: &str, placeholders: &BTreeMap<&'static str, String>) -> String {
    let mut names: Vec<&&str> = placeholders.keys().collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));

    let mut out = template.to_string();
    for name in names {
        out = out.replace(&format!(":{name}"), &placeholders[*name]);
    }
    out
}

/// Returns the built-in catalog for a locale; anything whose language subtag
/// is not `fa` falls back to English.
pub fn catalog_for(locale: &LanguageIdentifier) -> &'static MessageCatalog {
    if locale.language.as_str() == "fa" {
        &FA_CATALOG
    } else {
        &EN_CATALOG
    }
}

/// Helper for string locale codes (accepts underscores, falls back to
/// English for unparsable input).
pub fn catalog_for_str(locale: &str) -> &'static MessageCatalog {
    locale
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .map(|lang| catalog_for(&lang))
        .unwrap_or(&EN_CATALOG)
}

lazy_static! {
    static ref EN_CATALOG: MessageCatalog = MessageCatalog {
        templates: BTreeMap::from([
            (keys::PERSIAN_ALPHA, "The :attribute can only contain Persian letters."),
            (keys::PERSIAN_ALPHA_NUM, "The :attribute can only contain Persian letters and numbers."),
            (keys::PERSIAN_ALPHA_ENG_NUM, "The :attribute can only contain Persian letters, numbers, and English numbers."),
            (keys::PERSIAN_NUM, "The :attribute can only contain Persian numbers."),
            (keys::PERSIAN_NOT_ACCEPT, "The :attribute can't contain Persian letters and numbers."),
            (keys::PERSIAN_DATE, "The :attribute must be a valid persian date. Example: :example"),
            (keys::PERSIAN_DATE_BETWEEN, "The :attribute must be a persian date between :startDate and :endDate."),
            (keys::PERSIAN_DATE_BETWEEN_OR_EQUAL, "The :attribute must be a persian date between :startDate and :endDate or equal to them."),
            (keys::PERSIAN_DATE_BETWEEN_YEAR, "The :attribute must be between persian years :startYear and :endYear."),
            (keys::PERSIAN_DATE_BETWEEN_OR_EQUAL_YEAR, "The :attribute must be between persian years :startYear and :endYear or equal to them."),
            (keys::PERSIAN_DAY, "The :attribute must be one of the persian days of the week (:days)."),
            (keys::PERSIAN_MONTH, "The :attribute must be one of the persian months of the year (:months)."),
            (keys::IR_MOBILE, "The :attribute must be a valid Iranian mobile number. Example: :example"),
            (keys::IR_MOBILE_WITH_COUNTRY_CODE, "The :attribute must be a valid Iranian mobile number, including the country code. Example: :example"),
            (keys::IR_PHONE, "The :attribute must be a valid Iranian phone number. Example: :example"),
            (keys::IR_PHONE_WITH_AREA_CODE, "The :attribute must be a valid Iranian phone number, including the area code. Example: :example"),
            (keys::IR_PHONE_WITH_COUNTRY_CODE, "The :attribute must be a valid Iranian phone number, including the country code. Example: :example"),
            (keys::IR_PHONE_AREA_CODE, "The :attribute must be one of the Iranian province phone codes. Example: :example"),
            (keys::IR_POSTAL_CODE, "The :attribute must be a valid Iranian postal code."),
            (keys::IR_POSTAL_CODE_WITH_SEPARATOR, "The :attribute must be a valid Iranian postal code, including the separator \":separator\"."),
            (keys::IR_BANK_CARD_NUMBER, "The :attribute must be a valid Iranian bank card number."),
            (keys::IR_BANK_CARD_NUMBER_WITH_SEPARATOR, "The :attribute must be a valid Iranian bank card number, including the separator \":separator\"."),
            (keys::IR_IBAN, "The :attribute must be a valid Iranian IBAN number."),
            (keys::IR_IBAN_WITH_SEPARATOR, "The :attribute must be a valid Iranian IBAN number, including the separator \":separator\"."),
            (keys::IR_NATIONAL_ID, "The :attribute must be a valid Iranian national ID."),
            (keys::IR_COMPANY_ID, "The :attribute must be a valid Iranian company ID."),
        ]),
        week_days: [
            "Shanbe", "YekShanbe", "DoShanbe", "SeShanbe", "ChaharShanbe", "PanjShanbe", "Jome",
        ],
        months: [
            "Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar",
            "Mehr", "Aban", "Azar", "De", "Bahman", "Esfand",
        ],
        space_word: "space",
    };

    static ref FA_CATALOG: MessageCatalog = MessageCatalog {
        templates: BTreeMap::from([
            (keys::PERSIAN_ALPHA, ":attribute فقط می‌تواند شامل حروف فارسی باشد."),
            (keys::PERSIAN_ALPHA_NUM, ":attribute فقط می‌تواند شامل حروف و اعداد فارسی باشد."),
            (keys::PERSIAN_ALPHA_ENG_NUM, ":attribute فقط می‌تواند شامل حروف فارسی و اعداد فارسی یا لاتین باشد."),
            (keys::PERSIAN_NUM, ":attribute فقط می‌تواند شامل اعداد فارسی باشد."),
            (keys::PERSIAN_NOT_ACCEPT, ":attribute فقط می‌تواند شامل حروف یا اعداد لاتین باشد."),
            (keys::PERSIAN_DATE, ":attribute باید یک تاریخ شمسی معتبر باشد. مثال: :example"),
            (keys::PERSIAN_DATE_BETWEEN, ":attribute باید یک تاریخ شمسی بین :startDate و :endDate باشد."),
            (keys::PERSIAN_DATE_BETWEEN_OR_EQUAL, ":attribute باید یک تاریخ شمسی بین :startDate و :endDate یا برابر با آن‌ها باشد."),
            (keys::PERSIAN_DATE_BETWEEN_YEAR, ":attribute باید بین سال‌های شمسی :startYear و :endYear باشد."),
            (keys::PERSIAN_DATE_BETWEEN_OR_EQUAL_YEAR, ":attribute باید بین سال‌های شمسی :startYear و :endYear یا برابر با آن‌ها باشد."),
            (keys::PERSIAN_DAY, ":attribute باید یکی از روزهای هفته شمسی باشد (:days)."),
            (keys::PERSIAN_MONTH, ":attribute باید یکی از ماه‌های سال شمسی باشد (:months)."),
            (keys::IR_MOBILE, ":attribute باید یک شماره موبایل معتبر ایرانی باشد. مثال: :example"),
            (keys::IR_MOBILE_WITH_COUNTRY_CODE, ":attribute باید یک شماره موبایل معتبر ایرانی به‌همراه کد کشور باشد. مثال: :example"),
            (keys::IR_PHONE, ":attribute باید یک شماره تلفن معتبر ایرانی باشد. مثال: :example"),
            (keys::IR_PHONE_WITH_AREA_CODE, ":attribute باید یک شماره تلفن معتبر ایرانی به‌همراه کد استان باشد. مثال: :example"),
            (keys::IR_PHONE_WITH_COUNTRY_CODE, ":attribute باید یک شماره تلفن معتبر ایرانی به‌همراه کد کشور باشد. مثال: :example"),
            (keys::IR_PHONE_AREA_CODE, ":attribute باید یکی از کدهای استانی تلفن ایران باشد. مثال: :example"),
            (keys::IR_POSTAL_CODE, ":attribute باید یک کد پستی معتبر ایرانی باشد."),
            (keys::IR_POSTAL_CODE_WITH_SEPARATOR, ":attribute باید یک کد پستی معتبر ایرانی به‌همراه جداکننده «:separator» باشد."),
            (keys::IR_BANK_CARD_NUMBER, ":attribute باید یک شماره کارت بانکی معتبر ایرانی باشد."),
            (keys::IR_BANK_CARD_NUMBER_WITH_SEPARATOR, ":attribute باید یک شماره کارت بانکی معتبر ایرانی به‌همراه جداکننده «:separator» باشد."),
            (keys::IR_IBAN, ":attribute باید یک شماره شبای معتبر ایرانی باشد."),
            (keys::IR_IBAN_WITH_SEPARATOR, ":attribute باید یک شماره شبای معتبر ایرانی به‌همراه جداکننده «:separator» باشد."),
            (keys::IR_NATIONAL_ID, ":attribute باید یک کد ملی معتبر باشد."),
            (keys::IR_COMPANY_ID, ":attribute باید یک شناسه ملی شرکت معتبر باشد."),
        ]),
        week_days: PERSIAN_WEEK_DAYS,
        months: PERSIAN_MONTHS,
        space_word: "فاصله",
    };
}
