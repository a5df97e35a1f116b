#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod clipboard;
pub mod entities;
pub mod events;
pub mod flow;
pub mod framework;
pub mod store;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;
