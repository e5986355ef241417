//! Shared utilities.

pub mod time_utils;
