//! Core business logic for Tourdesk.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, aggregation rules, and the repository interface live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing
//! - `catalog` - Tour packages, dates and bookings, plus the `TourCatalog` repository trait
//! - `dashboard` - Agency dashboard statistics and recent-activity feed

pub mod auth;
pub mod catalog;
pub mod dashboard;
