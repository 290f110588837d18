//! JSON menu description → `MenuGraph`.
//!
//! The description names menus by external ids; node indices follow the order
//! of the `menus` array.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::LoadError;
use crate::graph::{MenuGraph, MenuNode, NodeId};

/// External menu identifier. Files use either strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of the `menus` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: MenuId,
    #[serde(default)]
    pub start: bool,
    #[serde(default)]
    pub end: bool,
    pub label: String,
    pub next: Vec<MenuId>,
}

/// Top-level menu description file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDescription {
    pub menus: Vec<MenuEntry>,
}

impl MenuDescription {
    /// Resolve ids to indices and build the graph.
    pub fn into_graph(self) -> Result<MenuGraph, LoadError> {
        let mut id_to_index: HashMap<&MenuId, NodeId> = HashMap::with_capacity(self.menus.len());
        for (idx, entry) in self.menus.iter().enumerate() {
            if let Some(&first) = id_to_index.get(&entry.id) {
                return Err(LoadError::DuplicateId {
                    id: entry.id.to_string(),
                    first,
                    second: idx,
                });
            }
            id_to_index.insert(&entry.id, idx);
        }

        let mut nodes = Vec::with_capacity(self.menus.len());
        for entry in &self.menus {
            let next = entry
                .next
                .iter()
                .map(|id| {
                    id_to_index
                        .get(id)
                        .copied()
                        .ok_or_else(|| LoadError::UnknownReference {
                            from: entry.id.to_string(),
                            id: id.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            nodes.push(MenuNode {
                is_start: entry.start,
                is_end: entry.end,
                label: entry.label.clone(),
                next,
            });
        }

        let graph = MenuGraph::new(nodes)?;
        tracing::debug!(
            menus = graph.node_count(),
            options = graph.edge_count(),
            start = graph.start_index(),
            "menu graph loaded"
        );
        Ok(graph)
    }
}

/// Parse a JSON menu description and build the graph.
pub fn load_from_str(json: &str) -> Result<MenuGraph, LoadError> {
    let description: MenuDescription = serde_json::from_str(json)?;
    description.into_graph()
}

/// Read a JSON menu description file and build the graph.
pub fn load_from_path(path: &Path) -> Result<MenuGraph, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&content)
}
