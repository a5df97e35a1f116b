//! Interactive two-screen session.

use crate::state::AppState;
use crate::terminal::Terminal;
use std::io::Write;
use topup_core::entities::PendingRequest;
use topup_core::flow::{FlowError, Screen, SubmitError};
use topup_sdk::config::PaymentDetails;
use tracing::{debug, error};

/// What to do after a screen returns.
enum Step {
    Go(Screen),
    Quit,
}

/// Run screens until the player quits or input ends.
pub async fn run_interactive(state: &AppState, term: &mut Terminal) -> anyhow::Result<()> {
    let mut screen = Screen::RequestBuilder;
    loop {
        debug!(route = %screen, "Showing screen");
        let step = match screen {
            Screen::RequestBuilder => request_screen(state, term).await?,
            Screen::PaymentInstructions => payment_screen(state, term).await?,
        };
        match step {
            Step::Go(next) => screen = next,
            Step::Quit => return Ok(()),
        }
    }
}

async fn request_screen(state: &AppState, term: &mut Terminal) -> anyhow::Result<Step> {
    writeln!(term)?;
    writeln!(term, "== Top up your game balance ==")?;
    writeln!(
        term,
        "Enter your nickname and the amount to top up (end of input closes the session)."
    )?;
    if let Some(hint) = &state.details.amount_hint {
        writeln!(term, "{hint}")?;
    }

    let Some(nickname) = term.prompt("Nickname: ").await? else {
        return Ok(Step::Quit);
    };
    let Some(amount) = term.prompt("Amount: ").await? else {
        return Ok(Step::Quit);
    };

    let builder = state.builder();
    let busy = builder.busy();
    match term.drive(builder.submit(&nickname, &amount), Some(busy)).await {
        Ok(handoff) => Ok(Step::Go(handoff.next)),
        Err(SubmitError::Invalid(_)) => Ok(Step::Go(Screen::RequestBuilder)),
        Err(SubmitError::Store(e)) => {
            error!(error = %e, "Pending request not stored");
            Ok(Step::Go(Screen::RequestBuilder))
        }
    }
}

async fn payment_screen(state: &AppState, term: &mut Terminal) -> anyhow::Result<Step> {
    let mut flow = state.payment_flow();

    let entered = term.drive(flow.enter(), None).await.map(|_| ());
    if let Err(e) = entered {
        debug!(error = %e, "Payment screen aborted");
        return Ok(Step::Go(flow.screen()));
    }
    if let Some(request) = flow.request() {
        writeln!(term)?;
        write!(term, "{}", render_payment(request, flow.details()))?;
    }

    loop {
        writeln!(term, "[c] copy card number  [p] I have paid  [b] back  [q] quit")?;
        let Some(line) = term.prompt("> ").await? else {
            return Ok(Step::Quit);
        };
        match line.trim() {
            "c" => {
                flow.copy_card_number();
                term.flush_notices();
            }
            "p" => {
                writeln!(term, "Sending confirmation...")?;
                match term.drive(flow.confirm_payment(), None).await {
                    Ok(()) => return Ok(Step::Go(flow.screen())),
                    Err(e) if e.is_retryable() => debug!(error = %e, "Confirmation failed"),
                    Err(FlowError::NotAwaitingConfirmation(_)) => {}
                    Err(e) => return Err(e.into()),
                }
            }
            "b" => return Ok(Step::Go(flow.back())),
            "q" => return Ok(Step::Quit),
            "" => {}
            other => writeln!(term, "Unknown command: {other}")?,
        }
    }
}

/// Payment instructions for one request.
pub fn render_payment(request: &PendingRequest, details: &PaymentDetails) -> String {
    let mut out = String::new();
    out.push_str("== Payment ==\n");
    out.push_str(&format!("Nickname:    {}\n", request.nickname));
    out.push_str(&format!(
        "Amount:      {}\n",
        details.format_amount(request.amount.get())
    ));
    out.push_str(&format!("Request ID:  {}\n", request.request_id()));
    out.push('\n');
    out.push_str("Transfer the amount using these details:\n");
    out.push_str(&format!("Card number: {}\n", details.display_card_number()));
    if let Some(holder) = &details.holder {
        out.push_str(&format!("Holder:      {holder}\n"));
    }
    if let Some(bank) = &details.bank {
        out.push_str(&format!("Bank:        {bank}\n"));
    }
    out.push('\n');
    out.push_str(&format!(
        "Payment verification takes {}.\n",
        details.review_window
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{session, spawn_intake};
    use axum::http::StatusCode;
    use kanau::processor::Processor;
    use topup_core::entities::{Amount, LoadPendingRequest, Nickname};
    use url::Url;

    fn unused_endpoint() -> Url {
        Url::parse("http://127.0.0.1:9/intake").unwrap()
    }

    #[tokio::test]
    async fn test_blank_form_reports_missing_field() {
        let mut s = session(unused_endpoint(), "\n\n");

        run_interactive(&s.state, &mut s.term).await.unwrap();

        let out = s.out.text();
        assert!(out.contains("✖ Fill in all fields"), "{out}");
        assert_eq!(out.matches("Nickname: ").count(), 2);
        let stored = s.state.store_processor().process(LoadPendingRequest).await.unwrap();
        assert_eq!(stored, None);
    }

    #[tokio::test]
    async fn test_interactive_request_copy_and_confirm() {
        let (endpoint, seen) = spawn_intake(StatusCode::OK).await;
        let mut s = session(endpoint, "Player1\n500\nc\np\n");

        run_interactive(&s.state, &mut s.term).await.unwrap();

        let out = s.out.text();
        assert!(out.contains("✔ Request created! Proceeding to payment..."), "{out}");
        assert!(out.contains("1234 5678 9012 3456"));
        assert!(out.contains("✔ Copied to clipboard"));
        assert!(out.contains("✔ Request sent to the administrator for review"));
        assert_eq!(s.clipboard.contents(), vec!["1234567890123456".to_string()]);

        let bodies = seen.lock().unwrap().clone();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["action"], "create_request");
        assert_eq!(bodies[0]["nickname"], "Player1");
        assert_eq!(bodies[0]["amount"], 500);

        let stored = s.state.store_processor().process(LoadPendingRequest).await.unwrap();
        assert_eq!(stored, None);
    }

    #[tokio::test]
    async fn test_back_returns_to_form_and_keeps_request() {
        let mut s = session(unused_endpoint(), "Player1\n500\nb\n");

        run_interactive(&s.state, &mut s.term).await.unwrap();

        assert_eq!(s.out.text().matches("Nickname: ").count(), 2);
        let stored = s.state.store_processor().process(LoadPendingRequest).await.unwrap();
        assert_eq!(stored.unwrap().amount.get(), 500);
    }

    #[test]
    fn test_render_payment_shows_request_and_destination() {
        let request = PendingRequest::new(
            Nickname::parse("Player1").unwrap(),
            Amount::new(500).unwrap(),
            1_700_000_000_000,
        );
        let rendered = render_payment(&request, &PaymentDetails::default());

        assert!(rendered.contains("Player1"));
        assert!(rendered.contains("500 ₽"));
        assert!(rendered.contains("1234 5678 9012 3456"));
        assert!(rendered.contains("Player1_500_1700000000000"));
        assert!(!rendered.contains("Holder"));
    }

    #[test]
    fn test_render_payment_includes_optional_fields() {
        let request = PendingRequest::new(
            Nickname::parse("X").unwrap(),
            Amount::new(1).unwrap(),
            1,
        );
        let details = PaymentDetails {
            holder: Some("I. Ivanov".into()),
            bank: Some("Example Bank".into()),
            ..PaymentDetails::default()
        };
        let rendered = render_payment(&request, &details);

        assert!(rendered.contains("Holder:      I. Ivanov"));
        assert!(rendered.contains("Bank:        Example Bank"));
    }
}
