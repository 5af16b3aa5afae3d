//! Dialogue file import and export.
//!
//! The on-disk document is JSON with camelCase keys. Consequences are not
//! stored inline on answers: export lifts them into a top-level array keyed
//! by answer id, and import joins them back. Files written by older tools
//! without a `consequences` array still load.

use crate::editor::DialogueEditor;
use crate::graph::GraphResult;
use crate::notifications::Toast;
use crate::types::{AnswerId, Connection, Consequences, DialogueNode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::error;

/// Consequence set for one answer, lifted out of the node tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsequenceRecord {
    pub answer_id: AnswerId,
    #[serde(flatten)]
    pub consequences: Consequences,
}

/// Root of the dialogue document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueFile {
    #[serde(default)]
    pub nodes: Vec<DialogueNode>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consequences: Vec<ConsequenceRecord>,
}

impl DialogueFile {
    /// Build the document from graph data, lifting answer consequences into
    /// the top-level array.
    pub fn from_graph(nodes: &[DialogueNode], connections: &[Connection]) -> Self {
        let mut lifted = Vec::new();
        let mut nodes = nodes.to_vec();
        for node in &mut nodes {
            for answer in &mut node.data.answers {
                if let Some(consequences) = answer.consequences.take() {
                    if !consequences.is_empty() {
                        lifted.push(ConsequenceRecord {
                            answer_id: answer.id.clone(),
                            consequences,
                        });
                    }
                }
            }
        }
        Self {
            nodes,
            connections: connections.to_vec(),
            consequences: lifted,
        }
    }

    /// Consume the document, joining lifted consequences back onto their
    /// answers. Records whose answer id matches nothing are dropped.
    pub fn into_graph_data(mut self) -> (Vec<DialogueNode>, Vec<Connection>) {
        for record in self.consequences {
            for node in &mut self.nodes {
                if let Some(answer) = node.data.answers.iter_mut().find(|a| a.id == record.answer_id)
                {
                    answer.consequences = Some(record.consequences);
                    break;
                }
            }
        }
        (self.nodes, self.connections)
    }
}

impl DialogueEditor {
    /// Serialize the graph to a pretty-printed dialogue document. Fails when
    /// export validation does; the graph is never modified.
    pub fn export_json(&mut self) -> GraphResult<String> {
        if let Err(err) = self.graph.validate_for_export() {
            error!(%err, "export rejected");
            self.notify(Toast::error(err.to_string()));
            return Err(err);
        }
        let file = DialogueFile::from_graph(self.graph.nodes(), self.graph.connections());
        let json = serde_json::to_string_pretty(&file)?;
        self.notify(Toast::success("Dialogue exported successfully"));
        Ok(json)
    }

    pub fn export_to_file(&mut self, path: &Path) -> GraphResult<()> {
        let json = self.export_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Replace the whole model from a dialogue document. A parse failure
    /// leaves the current graph, selection, and viewport untouched.
    pub fn import_json(&mut self, text: &str) -> GraphResult<()> {
        let file: DialogueFile = match serde_json::from_str(text) {
            Ok(file) => file,
            Err(err) => {
                error!(%err, "import rejected");
                self.notify(Toast::error(format!("Invalid dialogue file: {err}")));
                return Err(err.into());
            }
        };

        let (nodes, connections) = file.into_graph_data();
        let first_position = nodes.first().map(|n| n.position);
        self.load_graph(nodes, connections);
        if let Some(position) = first_position {
            self.viewport.center_on(position);
        }

        self.log_loaded();
        self.notify(Toast::success("Dialogue imported successfully"));
        Ok(())
    }

    pub fn import_from_file(&mut self, path: &Path) -> GraphResult<()> {
        let text = fs::read_to_string(path)?;
        self.import_json(&text)
    }
}
