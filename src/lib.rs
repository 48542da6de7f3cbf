//! Shift Allocation Engine
//!
//! This crate distributes full-day shifts across a roster of employees over
//! a scheduling period. Each employee is owed hours in proportion to their
//! monthly target; every workday the employees furthest behind, and
//! available, are assigned up to the daily cap.
//!
//! The pure allocator lives in [`allocation`]. Around it sit in-memory
//! [`store`]s, the [`service`] layer, webhook delivery, a periodic
//! [`trigger`] and an HTTP [`api`].

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod trigger;
pub mod webhook;
