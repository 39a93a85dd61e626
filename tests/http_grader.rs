use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    routing::post,
};
use dredd::{Config, Grader, HttpGrader, Outcome};
use serde_json::json;
use uuid::Uuid;

/// What the mock grader saw for one request.
#[derive(Debug, Clone)]
struct Received {
    route: String,
    body:  String,
}

#[derive(Clone)]
struct MockGrader {
    seen:     Arc<Mutex<Vec<Received>>>,
    response: String,
}

async fn record(
    State(mock): State<MockGrader>,
    Path((slug, course, assignment)): Path<(String, String, String)>,
    body: Bytes,
) -> impl IntoResponse {
    mock.seen.lock().unwrap().push(Received {
        route: format!("{slug}/{course}/{assignment}"),
        body:  String::from_utf8_lossy(&body).into_owned(),
    });
    ([(CONTENT_TYPE, "application/json")], mock.response.clone())
}

/// Starts a grader on a background runtime that answers every request with
/// `response`, returning its base URL and the requests it receives.
fn spawn_grader(response: &str) -> (String, Arc<Mutex<Vec<Received>>>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock grader");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().expect("local addr");

    let seen = Arc::new(Mutex::new(Vec::new()));
    let mock = MockGrader {
        seen:     seen.clone(),
        response: response.to_string(),
    };

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("mock runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            let app = Router::new()
                .route("/{slug}/{course}/{assignment}", post(record))
                .with_state(mock);
            axum::serve(listener, app).await.expect("serve mock grader");
        });
    });

    (format!("http://{addr}"), seen)
}

fn grader_for(base: &str) -> HttpGrader {
    let config = Config::builder().host(base).course("cse-test").build();
    HttpGrader::new(config).expect("client")
}

fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("dredd-http-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

#[test]
fn solution_is_uploaded_as_source_part() {
    let (base, seen) = spawn_grader(r#"{"status": 0, "score": 5, "value": 5}"#);
    let root = temp_root();
    let source = root.join("solution.py");
    fs::write(&source, "print('graded')\n").unwrap();

    let result = grader_for(&base)
        .submit_code("exercise3", &source)
        .expect("submit");

    assert_eq!(result.outcome(), Outcome::Success);
    assert_eq!(result.score, 5.0);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].route, "code/cse-test/exercise3");
    assert!(seen[0].body.contains(r#"name="source""#), "{}", seen[0].body);
    assert!(seen[0].body.contains(r#"filename="solution.py""#));
    assert!(seen[0].body.contains("print('graded')"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn debug_flag_switches_endpoint() {
    let (base, seen) = spawn_grader(r#"{"status": 1, "score": 0, "value": 5}"#);
    let root = temp_root();
    let source = root.join("solution.c");
    fs::write(&source, "int main(void) { return 0; }\n").unwrap();

    let config = Config::builder()
        .host(base.as_str())
        .course("cse-test")
        .debug(true)
        .build();
    let result = HttpGrader::new(config)
        .unwrap()
        .submit_code("exercise9", &source)
        .unwrap();

    assert_eq!(result.outcome(), Outcome::Failure);
    assert_eq!(seen.lock().unwrap()[0].route, "debug/cse-test/exercise9");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn quiz_answers_are_posted_as_json() {
    let (base, seen) = spawn_grader(
        r#"{"status": 0, "score": 2, "value": 2, "points": {"q1": 1, "q2": 1}, "q1": 1, "q2": 1}"#,
    );
    let answers = json!({"q1": "a", "q2": ["b", "c"]});

    let result = grader_for(&base)
        .submit_quiz("exercise2", &answers)
        .unwrap();

    assert_eq!(result.points.as_ref().map(|p| p.len()), Some(2));
    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].route, "quiz/cse-test/exercise2");
    let sent: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(sent, answers);
}

#[test]
fn malformed_response_is_an_error() {
    let (base, _) = spawn_grader("<html>502 Bad Gateway</html>");

    let err = grader_for(&base)
        .submit_quiz("exercise2", &json!({}))
        .unwrap_err();

    assert!(format!("{err:#}").contains("Unexpected response"), "{err:#}");
}

#[test]
fn unreachable_grader_is_an_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = grader_for(&format!("http://127.0.0.1:{port}"))
        .submit_quiz("exercise2", &json!({}))
        .unwrap_err();

    assert!(format!("{err:#}").contains("Cannot reach"), "{err:#}");
}
