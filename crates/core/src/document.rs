//! Tenant document models. Documents are read-only; the portal lists them
//! and filters client-side by type.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::{EntityId, Timestamp};

/// Lease agreements and addenda.
pub const DOCUMENT_TYPE_LEASE: &str = "LEASE";
/// Building or management notices.
pub const DOCUMENT_TYPE_NOTICE: &str = "NOTICE";
/// Rent or utility invoices.
pub const DOCUMENT_TYPE_INVOICE: &str = "INVOICE";
/// Anything else.
pub const DOCUMENT_TYPE_OTHER: &str = "OTHER";

/// All document types the backend emits.
pub const VALID_DOCUMENT_TYPES: &[&str] = &[
    DOCUMENT_TYPE_LEASE,
    DOCUMENT_TYPE_NOTICE,
    DOCUMENT_TYPE_INVOICE,
    DOCUMENT_TYPE_OTHER,
];

/// Category of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Lease,
    Notice,
    Invoice,
    Other,
}

impl DocumentType {
    /// Return the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lease => DOCUMENT_TYPE_LEASE,
            Self::Notice => DOCUMENT_TYPE_NOTICE,
            Self::Invoice => DOCUMENT_TYPE_INVOICE,
            Self::Other => DOCUMENT_TYPE_OTHER,
        }
    }

    /// Parse from a wire string, rejecting unknown types.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            DOCUMENT_TYPE_LEASE => Ok(Self::Lease),
            DOCUMENT_TYPE_NOTICE => Ok(Self::Notice),
            DOCUMENT_TYPE_INVOICE => Ok(Self::Invoice),
            DOCUMENT_TYPE_OTHER => Ok(Self::Other),
            other => Err(DomainError::Validation(format!(
                "Unknown document type: '{other}'. Valid types: {}",
                VALID_DOCUMENT_TYPES.join(", ")
            ))),
        }
    }
}

/// A document available to the tenant, listed by `GET /tenant/documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    pub title: String,
    /// Download URL served by the backend.
    pub url: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub created_at: Timestamp,
}

/// Filter a document list by type.
///
/// `None` returns every document; `Some(t)` returns only documents of that type.
pub fn filter_by_type(documents: &[Document], doc_type: Option<DocumentType>) -> Vec<&Document> {
    documents
        .iter()
        .filter(|d| doc_type.is_none_or(|t| d.document_type == t))
        .collect()
}
