use serde::{Deserialize, Serialize};

use super::datastore_types::QuestionAndAnswer;
use super::trivia_api::TriviaRecord;
use super::trivia_config::ResponseMessages;

/// Question payload sent to players.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionResponse {
    #[serde(rename = "questionid")]
    pub question_id: String,
    pub question: String,
    pub category: String,
    pub choices: Vec<String>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub warning: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl QuestionResponse {
    /// Builds the payload for a fetched question. `choices` comes from the
    /// caller; the record's answer is never copied into it.
    pub fn from_trivia(question_id: &str, record: &TriviaRecord, choices: Vec<String>, timestamp: &str) -> Self {
        QuestionResponse {
            question_id: question_id.to_string(),
            question: record.question.clone(),
            category: record.category.clone(),
            choices,
            timestamp: timestamp.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerRequest {
    #[serde(rename = "questionid")]
    pub question_id: String,
    pub response: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerResponse {
    pub question: String,
    pub timestamp: String,
    pub category: String,
    pub response: String,
    pub answer: String,
    pub correct: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub warning: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl AnswerResponse {
    /// Grades a player's answer against the stored record. Warning and error
    /// strings from the datastore are passed through untouched.
    pub fn from_question_and_answer(
        request: &AnswerRequest,
        timestamp: String,
        qa: QuestionAndAnswer,
        messages: &ResponseMessages,
    ) -> Self {
        let correct = answers_match(&request.response, &qa.answer);
        let message = if correct { &messages.congrats } else { &messages.try_again };

        AnswerResponse {
            question: qa.question,
            timestamp,
            category: qa.category,
            response: request.response.clone(),
            answer: qa.answer,
            correct,
            message: message.clone(),
            warning: qa.warning,
            error: qa.error,
        }
    }
}

fn answers_match(response: &str, answer: &str) -> bool {
    let answer = answer.trim();
    !answer.is_empty() && response.trim().to_lowercase() == answer.to_lowercase()
}
