//! Details of the event being confirmed. Loaded from the environment so a
//! deployment can rebrand without touching code.

/// Copy describing the event across the wizard screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub name: String,
    /// Spoken-style date ("domingo 31 de agosto"); views capitalize it.
    pub date: String,
    pub city: String,
    pub address: String,
    pub time: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            name: "Inauguración de la Caja de Ahorros Tupak Rantina".to_string(),
            date: "domingo 31 de agosto".to_string(),
            city: "Machachi".to_string(),
            address: "Avenida Amazonas".to_string(),
            time: "9:00 de la mañana".to_string(),
        }
    }
}

impl EventDetails {
    /// Load event details from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                          |
    /// |--------------------------|--------------------------------------------------|
    /// | `CONFIRMA_EVENT_NAME`    | `Inauguración de la Caja de Ahorros Tupak Rantina` |
    /// | `CONFIRMA_EVENT_DATE`    | `domingo 31 de agosto`                           |
    /// | `CONFIRMA_EVENT_CITY`    | `Machachi`                                       |
    /// | `CONFIRMA_EVENT_ADDRESS` | `Avenida Amazonas`                               |
    /// | `CONFIRMA_EVENT_TIME`    | `9:00 de la mañana`                              |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env_or("CONFIRMA_EVENT_NAME", defaults.name),
            date: env_or("CONFIRMA_EVENT_DATE", defaults.date),
            city: env_or("CONFIRMA_EVENT_CITY", defaults.city),
            address: env_or("CONFIRMA_EVENT_ADDRESS", defaults.address),
            time: env_or("CONFIRMA_EVENT_TIME", defaults.time),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}
