//! In-memory page model.
//!
//! The original page keys every insertion off string-derived element ids
//! looked up in the live page. Here the skeleton is modeled explicitly: a
//! flat arena of container nodes in sibling order, an id index, and a typed
//! registry mapping section keys to their container handles, populated when
//! the skeleton is built. Renderers hold [`NodeId`] handles instead of
//! re-deriving selector strings at each step.
//!
//! Mutation mirrors what the renderer is allowed to do to the page:
//! append a fragment into a container, insert a new container before or
//! after an existing one, replace a container's contents, and remove a
//! container outright (the loading indicator).

use std::collections::HashMap;

use critview_core::normalize;
use critview_core::{Error, Result};

/// Stable handle to a container node. Handles stay valid across removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    id: String,
    children: Vec<String>,
    removed: bool,
}

/// A page skeleton plus everything rendered into it.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
    order: Vec<usize>,
    index: HashMap<String, usize>,
    sections: HashMap<String, NodeId>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the portal skeleton the criteria renderer consumes: the
    /// loading/summary container and details-table container for the
    /// feature, and a section container plus criteria row per section key.
    pub fn portal_skeleton(feature_id: &str, section_keys: &[&str]) -> Self {
        let mut document = Self::new();
        document.register(normalize::loading_container_id(feature_id));
        document.register(normalize::table_container_id(feature_id));
        for key in section_keys {
            document.register_section(key);
            document.register(normalize::criteria_row_id(key));
        }
        document
    }

    /// Register a container with the given element id.
    pub fn register(&mut self, id: impl Into<String>) -> NodeId {
        let id = id.into();
        let idx = self.nodes.len();
        self.nodes.push(Node {
            id: id.clone(),
            children: Vec::new(),
            removed: false,
        });
        self.order.push(idx);
        self.index.insert(id, idx);
        NodeId(idx)
    }

    /// Register a section container. The container's element id is the
    /// section key itself, and the handle is recorded in the section
    /// registry.
    pub fn register_section(&mut self, key: &str) -> NodeId {
        let node = self.register(key);
        self.sections.insert(key.to_string(), node);
        node
    }

    /// Section container handle for a key.
    pub fn section(&self, key: &str) -> Result<NodeId> {
        self.sections
            .get(key)
            .copied()
            .ok_or_else(|| Error::MissingContainer(format!("section {}", key)))
    }

    /// Container handle for an element id.
    pub fn get(&self, id: &str) -> Result<NodeId> {
        self.index
            .get(id)
            .copied()
            .filter(|idx| !self.nodes[*idx].removed)
            .map(NodeId)
            .ok_or_else(|| Error::MissingContainer(id.to_string()))
    }

    /// Whether a container with this id is present (and not removed).
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }

    /// Append a fragment to a container's contents.
    pub fn append_html(&mut self, node: NodeId, fragment: impl Into<String>) {
        self.nodes[node.0].children.push(fragment.into());
    }

    /// Replace a container's contents with a single fragment.
    pub fn replace_children(&mut self, node: NodeId, fragment: impl Into<String>) {
        self.nodes[node.0].children = vec![fragment.into()];
    }

    /// Insert a new container immediately after an existing one. If the id
    /// is already present the existing container's contents are replaced
    /// instead, so re-rendering a section swaps its details container
    /// rather than duplicating it.
    pub fn insert_after(
        &mut self,
        anchor: NodeId,
        id: impl Into<String>,
        fragment: impl Into<String>,
    ) -> NodeId {
        self.insert_at(anchor, id, fragment, 1)
    }

    /// Insert a new container immediately before an existing one. Same
    /// replace-on-duplicate behavior as [`Document::insert_after`].
    pub fn insert_before(
        &mut self,
        anchor: NodeId,
        id: impl Into<String>,
        fragment: impl Into<String>,
    ) -> NodeId {
        self.insert_at(anchor, id, fragment, 0)
    }

    fn insert_at(
        &mut self,
        anchor: NodeId,
        id: impl Into<String>,
        fragment: impl Into<String>,
        offset: usize,
    ) -> NodeId {
        let id = id.into();
        if let Ok(existing) = self.get(&id) {
            self.replace_children(existing, fragment);
            return existing;
        }

        let idx = self.nodes.len();
        self.nodes.push(Node {
            id: id.clone(),
            children: vec![fragment.into()],
            removed: false,
        });
        let position = self
            .order
            .iter()
            .position(|i| *i == anchor.0)
            .map(|p| p + offset)
            .unwrap_or(self.order.len());
        self.order.insert(position, idx);
        self.index.insert(id, idx);
        NodeId(idx)
    }

    /// Remove a container by element id. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.index.remove(id) {
            Some(idx) => {
                self.nodes[idx].removed = true;
                self.order.retain(|i| *i != idx);
                true
            }
            None => false,
        }
    }

    /// A container's contents, joined in append order.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        let idx = *self.index.get(id)?;
        let node = &self.nodes[idx];
        if node.removed {
            return None;
        }
        Some(node.children.concat())
    }

    /// Element ids in sibling order.
    pub fn element_ids(&self) -> Vec<&str> {
        self.order
            .iter()
            .map(|idx| self.nodes[*idx].id.as_str())
            .collect()
    }

    /// Render the whole page as markup, one div per container.
    pub fn page_html(&self) -> String {
        self.order
            .iter()
            .map(|idx| {
                let node = &self.nodes[*idx];
                format!("<div id=\"{}\">{}</div>", node.id, node.children.concat())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_registers_contract_containers() {
        let document = Document::portal_skeleton("1.2", &["gene", "marker"]);
        assert!(document.contains("criteria-1_2"));
        assert!(document.contains("table-criteria-1_2"));
        assert!(document.contains("gene"));
        assert!(document.contains("criteria_row_gene"));
        assert!(document.contains("marker"));
        assert!(document.section("gene").is_ok());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let document = Document::portal_skeleton("x", &["gene"]);
        assert!(matches!(
            document.section("region"),
            Err(Error::MissingContainer(_))
        ));
    }

    #[test]
    fn test_append_and_inner_html() {
        let mut document = Document::new();
        let node = document.register("gene");
        document.append_html(node, "<a>one</a>");
        document.append_html(node, "<a>two</a>");
        assert_eq!(
            document.inner_html("gene").unwrap(),
            "<a>one</a><a>two</a>"
        );
    }

    #[test]
    fn test_replace_children() {
        let mut document = Document::new();
        let node = document.register("criteria-x");
        document.append_html(node, "spinner");
        document.replace_children(node, "<p>No results found</p>");
        assert_eq!(
            document.inner_html("criteria-x").unwrap(),
            "<p>No results found</p>"
        );
    }

    #[test]
    fn test_insert_after_places_sibling() {
        let mut document = Document::new();
        document.register("a");
        let row = document.register("criteria_row_gene");
        document.register("b");
        document.insert_after(row, "criteria_details_gene", "<table></table>");
        assert_eq!(
            document.element_ids(),
            vec!["a", "criteria_row_gene", "criteria_details_gene", "b"]
        );
    }

    #[test]
    fn test_insert_before_places_sibling() {
        let mut document = Document::new();
        let table = document.register("table-criteria-x");
        document.insert_before(table, "criteria-spinner-x", "spin");
        assert_eq!(
            document.element_ids(),
            vec!["criteria-spinner-x", "table-criteria-x"]
        );
    }

    #[test]
    fn test_insert_after_existing_id_replaces() {
        let mut document = Document::new();
        let row = document.register("criteria_row_gene");
        document.insert_after(row, "criteria_details_gene", "first");
        document.insert_after(row, "criteria_details_gene", "second");
        assert_eq!(
            document.inner_html("criteria_details_gene").unwrap(),
            "second"
        );
        assert_eq!(document.element_ids().len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut document = Document::new();
        document.register("criteria-spinner-x");
        assert!(document.remove("criteria-spinner-x"));
        assert!(!document.contains("criteria-spinner-x"));
        assert!(!document.remove("criteria-spinner-x"));
    }

    #[test]
    fn test_page_html_orders_siblings() {
        let mut document = Document::new();
        let a = document.register("a");
        document.append_html(a, "x");
        document.register("b");
        assert_eq!(
            document.page_html(),
            "<div id=\"a\">x</div>\n<div id=\"b\"></div>"
        );
    }
}
