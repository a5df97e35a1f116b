//! Test doubles shared by the flow tests.

use crate::clipboard::{Clipboard, ClipboardError};
use crate::entities::PendingRequest;
use crate::flow::ForwardToIntake;
use axum::{Json, Router, http::StatusCode, routing::post};
use kanau::processor::Processor;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use topup_sdk::client::ClientError;
use url::Url;

/// Intake double answering from a script: `Ok(())` or `Err(status)`.
#[derive(Clone, Default)]
pub struct FakeIntake {
    answers: Arc<Mutex<VecDeque<Result<(), u16>>>>,
    calls: Arc<Mutex<Vec<PendingRequest>>>,
}

impl FakeIntake {
    pub fn answering(answers: impl IntoIterator<Item = Result<(), u16>>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<PendingRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Processor<ForwardToIntake> for FakeIntake {
    type Output = ();
    type Error = ClientError;
    async fn process(&self, query: ForwardToIntake) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(query.request);
        let answer = self.answers.lock().unwrap().pop_front().unwrap_or(Ok(()));
        answer.map_err(|status| ClientError::Api {
            status: reqwest::StatusCode::from_u16(status).unwrap(),
            body: String::new(),
        })
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    contents: Mutex<Vec<String>>,
    broken: bool,
}

impl RecordingClipboard {
    pub fn broken() -> Self {
        Self {
            contents: Mutex::default(),
            broken: true,
        }
    }

    pub fn contents(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Unavailable("no terminal".into()));
        }
        self.contents.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

pub type SeenBodies = Arc<Mutex<Vec<serde_json::Value>>>;

/// Serve `POST /intake` on a loopback port, answering every call with `status`.
pub async fn spawn_intake(status: StatusCode) -> (Url, SeenBodies) {
    let seen: SeenBodies = Arc::default();
    let sink = seen.clone();
    let app = Router::new().route(
        "/intake",
        post(move |Json(body): Json<serde_json::Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                status
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (Url::parse(&format!("http://{addr}/intake")).unwrap(), seen)
}
