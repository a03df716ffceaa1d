//! Resource accessors: one async function per backend REST operation.
//!
//! Accessors are a direct, typed mapping to a single endpoint each -- no
//! retry, no caching, no business logic, and no client-side validation
//! beyond what serializing the request body requires. Validation of user
//! input belongs to the payload types in `parkside-core`; caching and
//! invalidation belong to `parkside-sync`.

pub mod amenities;
pub mod auth;
pub mod community;
pub mod dashboard;
pub mod documents;
pub mod maintenance;
pub mod messages;
pub mod notifications;
pub mod payments;
pub mod profile;
