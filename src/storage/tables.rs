/// Tables (named keyspaces) in the raw database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    /// Chain configuration: `CONFIG_PREFIX || genesis_hash` -> JSON-encoded `ChainConfig`
    ChainConfig,
}

/// All table variants.
pub const ALL_TABLES: [Table; 1] = [Table::ChainConfig];

impl Table {
    /// The on-disk name of the table.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ChainConfig => "ChainConfig",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
