//! Directory of named agents.
//!
//! The orchestrator performs no routing by content: the calling shell picks a
//! target agent (by name or a `switch:` directive) and invokes it. Anything
//! smarter belongs in a coordinator agent's own reasoning.

use crate::agent::Agent;
use crate::error::Error;

/// Summary of a registered agent, for presentation to the routing
/// decision-maker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSummary {
    pub name: String,
    pub role: String,
}

/// A name-keyed directory of agents.
///
/// Names are unique; registration of a duplicate name fails rather than
/// silently replacing a configured agent. Listing order is insertion order.
#[derive(Debug, Default)]
pub struct Orchestrator {
    agents: Vec<Agent>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent. Fails with [`Error::DuplicateAgent`] if the name is
    /// taken.
    pub fn add_agent(&mut self, agent: Agent) -> Result<(), Error> {
        if self.agents.iter().any(|a| a.name() == agent.name()) {
            return Err(Error::DuplicateAgent(agent.name().to_string()));
        }
        self.agents.push(agent);
        Ok(())
    }

    /// Look up an agent by name. Lookup is a query, not an assertion: a
    /// missing name returns `None`, never an error.
    pub fn get(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name() == name)
    }

    /// Mutable lookup, needed to drive `Agent::process`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.name() == name)
    }

    /// Whether an agent with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Summaries of all agents, in insertion order.
    pub fn agents(&self) -> Vec<AgentSummary> {
        self.agents
            .iter()
            .map(|a| AgentSummary {
                name: a.name().to_string(),
                role: a.role().to_string(),
            })
            .collect()
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
