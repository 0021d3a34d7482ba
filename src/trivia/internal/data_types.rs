use serde::{Deserialize, Serialize};

use crate::trivia::datastore_types::{DataStoreTable, QuestionAndAnswer, StatusCode};

// Every response type is `#[serde(default)]` so a partial body still decodes,
// and `Default` doubles as the empty value used when a body cannot be decoded.

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct StatusResponse {
    pub timestamp: String,
    pub status: StatusCode,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub warning: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AddQuestionRequest {
    #[serde(rename = "questionid")]
    pub question_id: String,
    pub question: String,
    pub category: String,
    pub answer: String,
}

impl AddQuestionRequest {
    pub fn new(question_id: &str, table: &DataStoreTable) -> Self {
        AddQuestionRequest {
            question_id: question_id.to_string(),
            question: table.question.clone(),
            category: table.category.clone(),
            answer: table.answer.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AddQuestionResponse {
    #[serde(rename = "questionid")]
    pub question_id: String,
    pub question: String,
    pub category: String,
    pub answer: String,
    pub timestamp: String,
    pub action: String,
    #[serde(rename = "recordsaffected")]
    pub records_affected: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub warning: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CheckAnswerRequest {
    #[serde(rename = "questionid")]
    pub question_id: String,
}

impl CheckAnswerRequest {
    pub fn new(question_id: &str) -> Self {
        CheckAnswerRequest { question_id: question_id.to_string() }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CheckAnswerResponse {
    pub question: String,
    pub category: String,
    pub answer: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub warning: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl CheckAnswerResponse {
    /// Splits the response into its timestamp and the caller-facing record.
    pub fn into_parts(self) -> (String, QuestionAndAnswer) {
        let qa = QuestionAndAnswer {
            question: self.question,
            category: self.category,
            answer: self.answer,
            message: self.message,
            warning: self.warning,
            error: self.error,
        };
        (self.timestamp, qa)
    }
}
