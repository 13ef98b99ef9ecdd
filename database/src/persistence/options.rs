#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageEngineKind {
    /// tokio-postgres connection string, e.g. `host=localhost user=postgres`
    Postgres(String),
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub storage_engine: StorageEngineKind,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    pub fn set_storage_engine(mut self, storage_engine: StorageEngineKind) -> Self {
        self.storage_engine = storage_engine;
        self
    }

    /// Uses postgres when a connection string is given, otherwise keeps the current engine
    pub fn set_postgres_config(self, config: Option<String>) -> Self {
        match config {
            Some(config) => self.set_storage_engine(StorageEngineKind::Postgres(config)),
            None => self,
        }
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            storage_engine: StorageEngineKind::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_memory() {
        assert_eq!(
            DatabaseOptions::default().storage_engine,
            StorageEngineKind::Memory
        );
    }

    #[test]
    fn postgres_config_selects_postgres() {
        let options = DatabaseOptions::default().set_postgres_config(Some("host=db".to_string()));

        assert_eq!(
            options.storage_engine,
            StorageEngineKind::Postgres("host=db".to_string())
        );
    }

    #[test]
    fn missing_postgres_config_keeps_engine() {
        let options = DatabaseOptions::default().set_postgres_config(None);

        assert_eq!(options.storage_engine, StorageEngineKind::Memory);
    }
}
