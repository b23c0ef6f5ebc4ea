//! Shift Summary Engine
//!
//! This crate records work shifts, totals the days and hours worked, prices
//! them with an hourly rate plus a per-day transport fee, and forwards the
//! result as a pre-filled message through a messaging deep link.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod notification;
pub mod session;
pub mod store;
