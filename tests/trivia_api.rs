use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use trivia_service::{
    QuestionResponse, TriviaApi, TriviaConfig, TriviaError, TriviaRecord, RAPID_API_HOST_KEY,
    RAPID_API_KEY, TRIVIA_API_HOST_VALUE,
};

#[derive(Clone, Default)]
struct SeenRequest {
    query: HashMap<String, String>,
    host_header: String,
    key_header: String,
}

#[derive(Clone)]
struct MockTrivia {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    reply: Arc<String>,
}

async fn trivia_handler(
    State(mock): State<MockTrivia>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> String {
    let header = |name: &str| {
        headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or_default().to_string()
    };
    mock.seen.lock().unwrap().push(SeenRequest {
        query,
        host_header: header(RAPID_API_HOST_KEY),
        key_header: header(RAPID_API_KEY),
    });
    mock.reply.to_string()
}

async fn spawn_trivia(reply: &str) -> (SocketAddr, MockTrivia) {
    let mock = MockTrivia { seen: Arc::new(Mutex::new(vec![])), reply: Arc::new(reply.to_string()) };
    let app = Router::new()
        .route("/v1/trivia", get(trivia_handler))
        .with_state(mock.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, mock)
}

fn api_for(addr: SocketAddr) -> TriviaApi {
    TriviaApi::new(Arc::new(TriviaConfig {
        trivia_url: format!("http://{}/v1/trivia", addr),
        trivia_api_key: "test-key".to_string(),
        ..TriviaConfig::default()
    }))
}

#[tokio::test]
async fn fetches_questions_with_category_and_default_limit() {
    let (addr, mock) = spawn_trivia(
        r#"[{"category":"math","question":"2+2?","answer":"4"},{"category":"math","question":"3+3?","answer":"6"}]"#,
    )
    .await;

    let (timestamp, records) = api_for(addr).fetch("math", "").await.unwrap();

    assert!(!timestamp.is_empty());
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        TriviaRecord { category: "math".to_string(), question: "2+2?".to_string(), answer: "4".to_string() }
    );

    let seen = mock.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].query.get("category").map(String::as_str), Some("math"));
    assert_eq!(seen[0].query.get("limit").map(String::as_str), Some("5"));
    assert_eq!(seen[0].host_header, TRIVIA_API_HOST_VALUE);
    assert_eq!(seen[0].key_header, "test-key");
}

#[tokio::test]
async fn empty_category_is_left_off_the_query() {
    let (addr, mock) = spawn_trivia("[]").await;

    let (_, records) = api_for(addr).fetch("", "2").await.unwrap();

    assert!(records.is_empty());
    let seen = mock.seen.lock().unwrap();
    assert!(!seen[0].query.contains_key("category"));
    assert_eq!(seen[0].query.get("limit").map(String::as_str), Some("2"));
}

#[tokio::test]
async fn undecodable_body_is_an_error() {
    let (addr, _mock) = spawn_trivia(r#"{"error":"quota exceeded"}"#).await;

    let err = api_for(addr).fetch("", "").await.unwrap_err();

    assert!(matches!(err, TriviaError::Decode(_)));
}

#[tokio::test]
async fn network_failure_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = api_for(addr).fetch("", "").await.unwrap_err();

    assert!(matches!(err, TriviaError::Transport(_)));
}

#[tokio::test]
async fn fetched_record_becomes_question_payload() {
    let (addr, _mock) = spawn_trivia(r#"[{"category":"science","question":"H2O?","answer":"water"}]"#).await;

    let (timestamp, records) = api_for(addr).fetch("science", "1").await.unwrap();
    let choices = vec!["water".to_string(), "salt".to_string()];
    let question = QuestionResponse::from_trivia("Q9", &records[0], choices.clone(), &timestamp);

    assert_eq!(question.question_id, "Q9");
    assert_eq!(question.category, "science");
    assert_eq!(question.choices, choices);
    assert_eq!(question.timestamp, timestamp);
}
