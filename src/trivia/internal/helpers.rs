use std::fmt::Display;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, TimeZone};
use sha2::{Digest, Sha256};

pub const TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y";

const QUESTION_ID_LEN: usize = 16;

pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Stable identifier for a question: the leading characters of the URL-safe
/// base64 SHA-256 of its text.
pub fn make_question_id(question: &str) -> String {
    let mut sha256 = Sha256::new();
    sha256.update(question.as_bytes());
    let result = sha256.finalize();

    let mut id = URL_SAFE_NO_PAD.encode(result);
    id.truncate(QUESTION_ID_LEN);
    id
}
