//! Registration code and seat number generation
//!
//! Every enrollment stage issues a human-readable identifier: a fixed
//! alphabetic prefix plus a random base-36 suffix for codes, and a
//! year-prefixed numeric string for seat numbers. Collision handling is the
//! caller's job (the enrollment service re-draws against storage).

use rand::Rng;
use uuid::Uuid;

pub const SCHOOL_PREFIX: &str = "SCH";
pub const MENTOR_PREFIX: &str = "MEN";
pub const CANDIDATE_PREFIX: &str = "CAN";

/// Length of the random suffix on SCH/MEN/CAN codes.
pub const CODE_SUFFIX_LEN: usize = 6;

/// Digits in the random part of a seat number.
pub const SEAT_DIGITS: usize = 5;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a new UUID v4, the opaque internal id for every record.
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a registration code: `prefix` + `CODE_SUFFIX_LEN` chars of A-Z0-9.
pub fn registration_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..CODE_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect();
    format!("{prefix}{suffix}")
}

/// Generate a seat number: the 4-digit exam year followed by
/// `SEAT_DIGITS` random decimal digits.
pub fn seat_number(exam_year: u16) -> String {
    let mut rng = rand::thread_rng();
    let serial: u32 = rng.gen_range(0..100_000);
    format!("{exam_year}{serial:05}")
}

/// Check that `code` is `prefix` followed by exactly `CODE_SUFFIX_LEN`
/// characters of A-Z0-9, i.e. the shape this service issues.
pub fn has_code_shape(code: &str, prefix: &str) -> bool {
    code.len() == prefix.len() + CODE_SUFFIX_LEN
        && code.starts_with(prefix)
        && code[prefix.len()..]
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
