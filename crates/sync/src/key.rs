//! Cache keys: a resource kind plus an optional scoping parameter.

use std::fmt;

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// Server-owned resource collections the client caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Dashboard,
    Leases,
    Payments,
    Maintenance,
    Documents,
    Community,
    Amenities,
    AmenityBookings,
    Notifications,
    Messages,
    Profile,
}

impl Resource {
    /// Stable name used in cache keys and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Leases => "leases",
            Self::Payments => "payments",
            Self::Maintenance => "maintenance",
            Self::Documents => "documents",
            Self::Community => "community",
            Self::Amenities => "amenities",
            Self::AmenityBookings => "amenity_bookings",
            Self::Notifications => "notifications",
            Self::Messages => "messages",
            Self::Profile => "profile",
        }
    }

    /// Resources whose cached value aggregates this one, and so must be
    /// invalidated together with it.
    ///
    /// The dashboard summary counts open maintenance requests and unread
    /// notifications and shows the next payment, so writes to those
    /// resources (and to bookings, which feed its upcoming list) stale it.
    pub fn dependents(&self) -> &'static [Resource] {
        match self {
            Self::Maintenance | Self::Payments | Self::AmenityBookings | Self::Notifications => {
                &[Self::Dashboard]
            }
            _ => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// QueryKey
// ---------------------------------------------------------------------------

/// Identity of one cached query: resource kind plus an optional scope
/// (typically the tenant id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: Resource,
    pub scope: Option<String>,
}

impl QueryKey {
    /// Unscoped key for a resource.
    pub fn of(resource: Resource) -> Self {
        Self {
            resource,
            scope: None,
        }
    }

    /// Key scoped by a parameter such as the tenant id.
    pub fn scoped(resource: Resource, scope: impl Into<String>) -> Self {
        Self {
            resource,
            scope: Some(scope.into()),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}:{scope}", self.resource.as_str()),
            None => f.write_str(self.resource.as_str()),
        }
    }
}
