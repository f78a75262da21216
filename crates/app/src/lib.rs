//! # parkit-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ParkingSpotRepository` — the facility's spot pool
//!   - `TicketRepository` — persisted tickets, one per visit
//!   - `InputReader` — the attendant's answers to prompts
//!   - `Notifier` — user-visible prompts and receipts
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ParkingService` — process incoming and exiting vehicles
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `parkit-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
