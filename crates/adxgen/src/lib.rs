//! Synthetic Ad Exchange report fixtures.
//!
//! This crate produces large CSV files of simulated ad-exchange metrics for
//! use as test fixture data. It is deliberately small and flat:
//!
//! - `schema`: the fixed 18-column `Row` record, the verbatim header labels,
//!   and the categorical vocabularies.
//! - `generator`: `RowSampler`, which draws one independent `Row` at a time
//!   with every range clamped at draw time.
//! - `io`: CSV emission — header record, then one record per sampled row,
//!   with a progress notice every 100k rows.
//!
//! There is no cross-row state: rows are independent uniform draws, and the
//! only side effect of a run is the one output file.
//!
//! We intentionally avoid broad re-exports so callers use stable paths like
//! `adxgen::io::generate_report`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

/// Fixed report schema: `Row`, header labels, vocabularies.
pub mod schema;
/// Per-row sampling over any `rand::Rng`.
pub mod generator;
/// CSV writing and the generate-to-path operation.
pub mod io;
