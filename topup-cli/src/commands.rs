//! One-shot subcommands for scripting the flow.

use crate::app::{render_payment, run_interactive};
use crate::state::AppState;
use crate::terminal::Terminal;
use clap::Subcommand;
use kanau::processor::Processor;
use std::io::Write;
use topup_core::entities::{ClearPendingRequest, LoadPendingRequest};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Walk through both screens interactively (default)
    Interactive,
    /// Create a pending request
    Request {
        /// In-game nickname
        #[arg(short, long)]
        nickname: String,
        /// Amount of currency to top up
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Show payment instructions for the pending request
    Pay {
        /// Also tell the intake service the payment has been made
        #[arg(long)]
        confirm: bool,
        /// Copy the card number to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Print the pending request as JSON
    Show,
    /// Discard the pending request
    Clear,
}

pub async fn run(command: Command, state: &AppState, term: &mut Terminal) -> anyhow::Result<()> {
    match command {
        Command::Interactive => run_interactive(state, term).await,
        Command::Request { nickname, amount } => {
            let builder = state.builder();
            let handoff = term.drive(builder.submit(&nickname, &amount), None).await?;
            writeln!(term, "{}", serde_json::to_string_pretty(&handoff.request)?)?;
            Ok(())
        }
        Command::Pay { confirm, copy } => {
            let mut flow = state.payment_flow();
            term.drive(flow.enter(), None).await.map(|_| ())?;
            if let Some(request) = flow.request() {
                write!(term, "{}", render_payment(request, flow.details()))?;
            }
            if copy {
                flow.copy_card_number();
                term.flush_notices();
            }
            if confirm {
                term.drive(flow.confirm_payment(), None).await?;
            }
            Ok(())
        }
        Command::Show => {
            match state.store_processor().process(LoadPendingRequest).await? {
                Some(request) => writeln!(term, "{}", serde_json::to_string_pretty(&request)?)?,
                None => writeln!(term, "No pending request")?,
            }
            Ok(())
        }
        Command::Clear => {
            state.store_processor().process(ClearPendingRequest).await?;
            tracing::info!("Pending request cleared");
            Ok(())
        }
    }
}
