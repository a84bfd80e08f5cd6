//! Tests.
//!
//! - Tests of the statics as a whole go in `scenario`.
//! - Tests of one typing rule go in `value` or `computation`.

#![cfg(test)]

mod check;
mod config;
mod scenario;
mod value;
