//! Domain model for the Parkside tenant portal client.
//!
//! Every type here mirrors a server-owned REST resource. The client never
//! computes an entity's lifecycle (status transitions, id assignment); it
//! parses what the backend returns and validates what it is about to send.

pub mod amenity;
pub mod community;
pub mod dashboard;
pub mod document;
pub mod error;
pub mod lease;
pub mod maintenance;
pub mod message;
pub mod notification;
pub mod payment;
pub mod types;
pub mod user;
