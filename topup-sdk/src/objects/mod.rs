pub mod intake;

pub use intake::{CreateRequestPayload, IntakeAction, IntakeReceipt, request_id};
