//! A container-image Lambda function that answers every invocation with the same greeting.
//!
//! The library half holds the handler so it can be exercised by tests without the Lambda Runtime API.
//! `main.rs` wires it into `lambda_runtime`.

pub mod handler;
pub mod response;

pub use handler::{function_handler, handle};
pub use response::{Greeting, Response};
