//! Admin-screen state for the scraping-agent inventory.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use crate::net::types::AgentConfig;

/// Agent list plus activity flags for the admin screen.
#[derive(Clone, Debug, Default)]
pub struct AgentAdminState {
    pub agents: Vec<AgentConfig>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    /// Name of the record loaded into the form; `None` means create mode.
    pub editing: Option<String>,
}

impl AgentAdminState {
    /// The record currently loaded into the form, if any.
    pub fn selected(&self) -> Option<&AgentConfig> {
        let name = self.editing.as_deref()?;
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Fold a saved record back into the list: replace the pre-edit entry on
    /// update, append on create.
    pub fn upsert(&mut self, saved: AgentConfig, original_name: Option<&str>) {
        let existing = original_name.and_then(|name| self.agents.iter().position(|a| a.name == name));
        match existing {
            Some(index) => self.agents[index] = saved,
            None => self.agents.push(saved),
        }
    }
}
