//! The validator catalog: one stateless rule per identifier format.
//!
//! Every rule follows the same shape: numeral normalization (when enabled),
//! then a structural pattern match, then an algorithmic check where the
//! format has one, reporting through [`crate::outcome::Outcome`]. Rules are cheap to
//! construct, immutable, and safe to share across threads.

pub mod alpha;
pub mod bank_card;
pub mod company_id;
pub mod date;
pub mod day_month;
pub mod iban;
pub mod mobile;
pub mod national_id;
pub mod phone;
pub mod postal_code;

pub use alpha::{PersianAlpha, PersianAlphaEngNum, PersianAlphaNum, PersianNotAccept, PersianNumber};
pub use bank_card::IranianBankCardNumber;
pub use company_id::IranianCompanyId;
pub use date::{PersianDate, PersianDateBetween, PersianDateBetweenYear};
pub use day_month::{PersianDay, PersianMonth};
pub use iban::IranianIban;
pub use mobile::{IranianMobile, MobileFormat};
pub use national_id::IranianNationalId;
pub use phone::{AREA_CODES, CountryCodeFormat, IranianPhone, IranianPhoneAreaCode};
pub use postal_code::IranianPostalCode;
