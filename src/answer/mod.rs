//! Turning raw agent text into an HTTP-ready answer.
//!
//! Two explicit stages:
//! 1. [`normalize`] cleans the text and extracts an `{"answer": ...}` object if present.
//! 2. [`resolve`] re-reads whatever is left and decides between a 200 body
//!    and an agent-declared error.

pub mod normalizer;
pub mod outcome;

pub use normalizer::{clean, normalize, Normalized};
pub use outcome::{reparse, resolve, ErrorDeclaration, Resolution};

#[cfg(test)]
mod normalizer_tests;
