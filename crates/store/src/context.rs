//! Per-call options for store operations.

/// Call context passed explicitly to every guarded store operation.
///
/// The default context is an ordinary caller. Document lifecycle operations
/// (invoice cancel, bank statement cancel/entry creation) construct the
/// parent-document context so they can mutate the lines they generated; the
/// flag is an explicit parameter travelling down the call chain, never
/// ambient state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    from_parent_document: bool,
}

impl Context {
    /// Ordinary caller: the origin guard applies.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document's own lifecycle operation: the origin guard is skipped for
    /// this call only.
    pub fn from_parent_document() -> Self {
        Self {
            from_parent_document: true,
        }
    }

    pub fn is_from_parent_document(&self) -> bool {
        self.from_parent_document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_not_from_parent_document() {
        assert!(!Context::new().is_from_parent_document());
        assert!(Context::from_parent_document().is_from_parent_document());
    }
}
