//! Store and display configuration.

/// Storage keys and URL parameter names used by [`crate::ListStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage key holding the JSON-serialized list
    pub list_key: String,
    /// Storage key holding the "install banner dismissed" flag
    pub dismissed_key: String,
    /// Query parameter carrying a shared list
    pub share_param: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            list_key: "groceryList".to_string(),
            dismissed_key: "installPromptDismissed".to_string(),
            share_param: "list".to_string(),
        }
    }
}

/// Formatting options for [`crate::ViewRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "฿".to_string(),
        }
    }
}
