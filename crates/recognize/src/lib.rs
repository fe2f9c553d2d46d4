//! Recognize - Client for the Xpress AI Recognize OCR Service
//!
//! This crate talks to the hosted Recognize endpoint, which extracts text -
//! including LaTeX-formatted math - from images and can optionally return a
//! rendered HTML view of the result.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use recognize::{RecognizeClient, RecognizeOptions};
//!
//! # async fn example() -> recognize::Result<()> {
//! let client = RecognizeClient::new()?;
//! let result = client
//!     .recognize_file("equation.png", &RecognizeOptions::default())
//!     .await?;
//! println!("Recognized: {}", result.text);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Client** (`client`): one HTTP POST per invocation, JSON in and out
//! - **Types** (`types`): request options and recognition results
//! - **Config** (`config`): endpoint/timeout/defaults, loadable from TOML or JSON
//! - **Errors** (`error`): I/O, validation, transport, remote, and response-format failures
//!
//! There is deliberately no retry policy, caching, or batching: each call is a
//! single synchronous exchange, and all failures surface to the caller.

#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod io;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, RecognizeClient};
pub use config::RecognizeConfig;
pub use error::{RecognizeError, Result};
pub use types::{RecognizeOptions, RecognizeResult};
