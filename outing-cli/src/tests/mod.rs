//! Shared test harness modules for the outing CLI.
#![expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "tests should fail fast when setup or a JSON lookup breaks"
)]

mod check_unit;
mod helpers;
