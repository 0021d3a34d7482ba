use std::fmt;

use serde::{Deserialize, Serialize};

/// Readiness of the remote datastore server, as reported by its status endpoint.
///
/// Carried as a plain integer on the wire. `Unavailable` uses the largest
/// representable value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum StatusCode {
    /// Not probed yet, or the status body carried no usable value.
    #[default]
    NotStarted,
    /// Server is up and accepting messages.
    Running,
    InvalidServerName,
    /// The status request itself never completed.
    RequestError,
    ResponseError,
    /// Server never responded or refused the connection.
    Unavailable,
}

impl StatusCode {
    pub const fn code(self) -> i64 {
        match self {
            Self::NotStarted => 0,
            Self::Running => 1,
            Self::InvalidServerName => 2,
            Self::RequestError => 3,
            Self::ResponseError => 4,
            Self::Unavailable => i64::MAX,
        }
    }

    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::NotStarted),
            1 => Some(Self::Running),
            2 => Some(Self::InvalidServerName),
            3 => Some(Self::RequestError),
            4 => Some(Self::ResponseError),
            i64::MAX => Some(Self::Unavailable),
            _ => None,
        }
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

impl TryFrom<i64> for StatusCode {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown datastore status code {}", code))
    }
}

impl From<StatusCode> for i64 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::InvalidServerName => "invalid server name",
            Self::RequestError => "request error",
            Self::ResponseError => "response error",
            Self::Unavailable => "unavailable",
        };
        write!(f, "{}", label)
    }
}

/// A question as handed to `DataStore::insert`; the identifier travels separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataStoreTable {
    pub question: String,
    pub category: String,
    pub answer: String,
}

impl DataStoreTable {
    pub fn new(question: impl Into<String>, category: impl Into<String>, answer: impl Into<String>) -> Self {
        DataStoreTable {
            question: question.into(),
            category: category.into(),
            answer: answer.into(),
        }
    }
}

/// Caller-facing view of a stored question. The server timestamp is returned
/// alongside it rather than inside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionAndAnswer {
    pub question: String,
    pub category: String,
    pub answer: String,
    pub message: String,
    pub warning: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::StatusCode;

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(StatusCode::NotStarted.code(), 0);
        assert_eq!(StatusCode::Running.code(), 1);
        assert_eq!(StatusCode::ResponseError.code(), 4);
        assert_eq!(StatusCode::Unavailable.code(), i64::MAX);
    }

    #[test]
    fn converts_from_code() {
        assert_eq!(StatusCode::from_code(3), Some(StatusCode::RequestError));
        assert_eq!(StatusCode::from_code(i64::MAX), Some(StatusCode::Unavailable));
        assert_eq!(StatusCode::from_code(99), None);
    }

    #[test]
    fn starts_not_started() {
        assert_eq!(StatusCode::default(), StatusCode::NotStarted);
        assert!(!StatusCode::default().is_running());
        assert!(StatusCode::Running.is_running());
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&StatusCode::Running).unwrap(), "1");
        let status: StatusCode = serde_json::from_str("2").unwrap();
        assert_eq!(status, StatusCode::InvalidServerName);
        assert!(serde_json::from_str::<StatusCode>("42").is_err());
    }
}
