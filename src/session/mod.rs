//! Trading-session time windows and serial numbers
//!
//! Session predicates operate on HHMM integers (851 is 08:51, 1324 is
//! 13:24). Passing `None` means "now" on the local clock. Serial numbers
//! combine a full timestamp with random letters so that backtests producing
//! many trades in the same second still get unique identifiers.

use chrono::{Datelike, Local, Timelike};
use rand::Rng;

/// Day session opens at 05:00
pub const DAY_BEGIN: u32 = 500;
/// Day session closes at 13:45
pub const DAY_END: u32 = 1345;
/// Day trading window opens at 08:45
pub const TRADE_DAY_BEGIN: u32 = 845;
/// Night trading window opens at 15:00
pub const NIGHT_BEGIN: u32 = 1500;
/// Night trading window closes at 05:00 the next morning
pub const NIGHT_END: u32 = 500;

/// Current local time as an HHMM integer
pub fn current_hhmm() -> u32 {
    let now = Local::now();
    now.hour() * 100 + now.minute()
}

/// Current local timestamp as a YYYYMMDDHHMMSS integer
pub fn full_timestamp() -> i64 {
    let now = Local::now();
    let date = i64::from(now.year()) * 10_000 + i64::from(now.month()) * 100 + i64::from(now.day());
    let time =
        i64::from(now.hour()) * 10_000 + i64::from(now.minute()) * 100 + i64::from(now.second());
    date * 1_000_000 + time
}

/// Whether a time falls in the day session (05:00–13:45, inclusive)
///
/// # Example
///
/// ```rust
/// use trade_toolkit::session::is_day;
///
/// assert!(is_day(Some(851)));
/// assert!(!is_day(Some(1400)));
/// ```
pub fn is_day(hhmm: Option<u32>) -> bool {
    let time = hhmm.unwrap_or_else(current_hhmm);
    (DAY_BEGIN..=DAY_END).contains(&time)
}

/// Whether a time falls in a trading window
///
/// Day window 08:45–13:45; night window 15:00 through 05:00 the next
/// morning (the wrap across midnight means both "late" and "early" times
/// qualify).
pub fn is_trade_time(hhmm: Option<u32>) -> bool {
    let time = hhmm.unwrap_or_else(current_hhmm);
    (TRADE_DAY_BEGIN..=DAY_END).contains(&time) || time <= NIGHT_END || time >= NIGHT_BEGIN
}

/// Extract the HHMM part of a YYYYMMDDHHMM timestamp
///
/// Timestamps that are not exactly 12 digits have no defined HHMM part and
/// yield `None`.
pub fn hhmm_from_timestamp(yyyymmddhhmm: i64) -> Option<u32> {
    if yyyymmddhhmm.to_string().len() != 12 {
        return None;
    }
    Some((yyyymmddhhmm % 10_000) as u32)
}

/// Split a YYYYMMDD date into its (month, day) pair
pub fn month_day_from_date(yyyymmdd: u32) -> Option<(u32, u32)> {
    if yyyymmdd.to_string().len() != 8 {
        return None;
    }
    Some(((yyyymmdd / 100) % 100, yyyymmdd % 100))
}

/// Generate a time-based serial number
///
/// The prefix is followed by the full local timestamp and three random
/// ASCII letters, e.g. `pattern20240314153000ABc`. The random suffix keeps
/// serials unique when many are generated within the same second.
pub fn time_serial(name: &str) -> String {
    format!(
        "{}{}{}{}{}",
        name,
        full_timestamp(),
        random_letter(),
        random_letter(),
        random_letter()
    )
}

/// Generate a commodity-scoped unique serial number
///
/// # Example
///
/// ```rust
/// use trade_toolkit::session::unique_serial;
///
/// let serial = unique_serial("TXF", "pattern");
/// assert!(serial.starts_with("txf_pattern"));
/// ```
pub fn unique_serial(commodity: &str, name: &str) -> String {
    format!("{}_{}", commodity.to_lowercase(), time_serial(name))
}

fn random_letter() -> char {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let index = rand::thread_rng().gen_range(0..LETTERS.len());
    LETTERS[index] as char
}
