use anyhow::Result;

// Dependency to persist configuration changes
pub trait ConfigStore {
    /// Store the organization to use for subsequent commands.
    fn save_organization(&self, organization: &str) -> Result<()>;
}
