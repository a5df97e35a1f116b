//! Scripted sessions for the screen and command tests.

use crate::config::LoadedConfig;
use crate::state::AppState;
use crate::terminal::Terminal;
use axum::{Json, Router, http::StatusCode, routing::post};
use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use topup_core::clipboard::{Clipboard, ClipboardError};
use topup_core::events::{Notifier, notice_channel};
use topup_core::flow::FlowTimings;
use topup_core::utils::amount::AmountParsing;
use topup_sdk::config::{IntakeConfig, PaymentDetails};
use url::Url;

/// Output sink whose contents stay readable after the terminal owns it.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingClipboard(Mutex<Vec<String>>);

impl RecordingClipboard {
    pub fn contents(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.0.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

pub struct Session {
    pub state: AppState,
    pub term: Terminal,
    pub out: Captured,
    pub clipboard: Arc<RecordingClipboard>,
}

/// An in-memory session talking to `endpoint` and reading `input` as the
/// player's keystrokes.
pub fn session(endpoint: Url, input: &str) -> Session {
    let config = LoadedConfig {
        intake: IntakeConfig::new(endpoint),
        payment: PaymentDetails::default(),
        store_dir: PathBuf::from(".topup"),
        timings: FlowTimings::IMMEDIATE,
        amount_parsing: AmountParsing::Lenient,
    };
    let (tx, rx) = notice_channel();
    let mut state = AppState::new(config, Notifier::new(tx), true);
    let clipboard = Arc::new(RecordingClipboard::default());
    state.clipboard = Arc::clone(&clipboard) as Arc<dyn Clipboard>;

    let out = Captured::default();
    let term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), out.clone(), rx);
    Session {
        state,
        term,
        out,
        clipboard,
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
