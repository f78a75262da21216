//! # parkit-domain
//!
//! Pure domain model for the parkit parking facility.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Parking types** (car, bike) and the menu selection mapping
//! - Define **Parking spots** (numbered places with a type and availability)
//! - Define **Tickets** (one per visit, open until the vehicle exits)
//! - Compute **Fares** (grace period, hourly rates, recurring-user discount)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod fare;
pub mod parking_spot;
pub mod parking_type;
pub mod ticket;
