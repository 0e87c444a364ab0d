use serde::{Deserialize, Serialize};

use ledgerguard_core::record_id;

record_id!(
    /// Customer/supplier invoice identifier.
    InvoiceId
);

record_id!(
    /// Bank statement identifier.
    StatementId
);

/// Back-reference from a journal line to the document that generated it.
///
/// A line is only ever generated by one document, so the reference is an enum
/// rather than a pair of nullable fields. The document's display name is
/// carried along so guard errors can point the user at the right place
/// without a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DocumentOrigin {
    Invoice { id: InvoiceId, name: String },
    Statement { id: StatementId, name: String },
}

impl DocumentOrigin {
    /// Human-readable "kind name (id)" form used in guard errors.
    pub fn describe(&self) -> String {
        match self {
            DocumentOrigin::Invoice { id, name } => format!("invoice {name} ({id})"),
            DocumentOrigin::Statement { id, name } => format!("bank statement {name} ({id})"),
        }
    }
}
