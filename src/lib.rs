mod trivia;

// re-export public objects to top level
pub use trivia::datastore::{DataStore, QuestionStore};
pub use trivia::datastore_types::{DataStoreTable, QuestionAndAnswer, StatusCode};
pub use trivia::internal::helpers::make_question_id;
pub use trivia::messages::{AnswerRequest, AnswerResponse, QuestionResponse};
pub use trivia::trivia_api::{TriviaApi, TriviaRecord, RAPID_API_HOST_KEY, RAPID_API_KEY, TRIVIA_API_HOST_VALUE};
pub use trivia::trivia_config::{ResponseMessages, TriviaConfig, CONFIG_FILE_NAME, PRODUCTION, USE_CONFIG_FILE};
pub use trivia::trivia_error::{Result, TriviaError};
