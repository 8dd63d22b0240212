use service::{storage::memory::SharedTables, Catalog};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Catalog,
}

impl ServerState {
    pub fn new(catalog: Catalog) -> Self { Self { catalog } }

    /// State backed by the in-memory repositories; used by router tests.
    pub fn in_memory(tables: SharedTables) -> Self {
        Self::new(Catalog::in_memory(tables))
    }
}
