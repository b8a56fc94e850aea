//! Spanish display helpers shared by the public flow and the staff tools.

use crate::types::Timestamp;

const MONTHS_LONG: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Uppercase the first character and lowercase the rest. Whole-string, not
/// per word; greetings show `"MARÍA ELENA"` as `"María elena"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Long Spanish date, e.g. `10 de marzo de 2025, 15:00`.
pub fn format_date_long(ts: &Timestamp) -> String {
    use chrono::{Datelike, Timelike};
    format!(
        "{} de {} de {}, {:02}:{:02}",
        ts.day(),
        MONTHS_LONG[ts.month0() as usize],
        ts.year(),
        ts.hour(),
        ts.minute()
    )
}

/// Short Spanish date, e.g. `10 mar 2025, 15:00`.
pub fn format_date_short(ts: &Timestamp) -> String {
    use chrono::{Datelike, Timelike};
    format!(
        "{} {} {}, {:02}:{:02}",
        ts.day(),
        MONTHS_SHORT[ts.month0() as usize],
        ts.year(),
        ts.hour(),
        ts.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    // -- capitalize --

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("maría"), "María");
        assert_eq!(capitalize("MARÍA ELENA"), "María elena");
        assert_eq!(capitalize(""), "");
    }

    // -- date formatting --

    #[test]
    fn long_format_uses_spanish_months() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 31, 9, 5, 0).unwrap();
        assert_eq!(format_date_long(&ts), "31 de agosto de 2025, 09:05");
    }

    #[test]
    fn short_format_abbreviates_months() {
        let ts = Utc.with_ymd_and_hms(2025, 12, 1, 18, 30, 0).unwrap();
        assert_eq!(format_date_short(&ts), "1 dic 2025, 18:30");
    }
}
