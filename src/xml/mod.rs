//! Arena-backed XML document tree and serializer.
//!
//! Every XML artifact in a cartridge (manifest, course settings, module
//! metadata) is built as an [`XmlDocument`] and serialized with the same
//! pretty-printer. Nodes live in a flat arena and are addressed by
//! [`NodeId`] handles, so builders can keep insertion points (the
//! `organizations` and `resources` subtrees) without re-traversing the tree
//! or aliasing mutable references.

/// Unique identifier for a node in the document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

/// An element node: tag, ordered attributes, optional text, child ids.
#[derive(Debug, Clone)]
struct XmlNode {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

impl XmlNode {
    fn new(tag: String) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }
}

/// An XML document backed by a node arena.
///
/// The arena is append-only: ids are only minted by this document and never
/// invalidated, so lookups index directly.
#[derive(Debug, Clone)]
pub(crate) struct XmlDocument {
    nodes: Vec<XmlNode>,
    root: NodeId,
}

impl XmlDocument {
    /// Create a document with a root element of the given tag.
    pub(crate) fn new(root_tag: impl Into<String>) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.alloc(XmlNode::new(root_tag.into()));
        doc
    }

    fn alloc(&mut self, node: XmlNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// The root element id.
    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new child element and return its id.
    pub(crate) fn append_element(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let child = self.alloc(XmlNode::new(tag.into()));
        self.nodes[parent.0 as usize].children.push(child);
        child
    }

    /// Append a new child element carrying only text.
    pub(crate) fn append_text_element(
        &mut self,
        parent: NodeId,
        tag: impl Into<String>,
        text: impl Into<String>,
    ) -> NodeId {
        let child = self.append_element(parent, tag);
        self.set_text(child, text);
        child
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub(crate) fn set_attr(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        let name = name.into();
        let value = value.into();
        let attrs = &mut self.nodes[node.0 as usize].attrs;
        if let Some(existing) = attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            attrs.push((name, value));
        }
    }

    /// Set the text content of a node.
    pub(crate) fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0 as usize].text = Some(text.into());
    }

    /// Get the tag of a node.
    #[allow(dead_code)] // read accessors are only exercised by tests
    pub(crate) fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0 as usize].tag
    }

    /// Get an attribute value.
    #[allow(dead_code)]
    pub(crate) fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0 as usize]
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get the text content of a node.
    #[allow(dead_code)]
    pub(crate) fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0 as usize].text.as_deref()
    }

    /// Child ids of a node, in insertion order.
    #[allow(dead_code)]
    pub(crate) fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0 as usize].children
    }

    /// Serialize to pretty-printed XML with a declaration.
    ///
    /// Two-space indentation; childless elements without text self-close,
    /// text-only elements render inline.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write_node(self.root, 0, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = &self.nodes[id.0 as usize];
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(&node.tag);
        for (name, value) in &node.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_xml(value));
            out.push('"');
        }

        // Empty text renders the same as no text
        let text = node.text.as_deref().filter(|t| !t.is_empty());

        match (text, node.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</");
                out.push_str(&node.tag);
                out.push_str(">\n");
            }
            (text, false) => {
                out.push_str(">\n");
                if let Some(text) = text {
                    for _ in 0..=depth {
                        out.push_str("  ");
                    }
                    out.push_str(&escape_xml(text));
                    out.push('\n');
                }
                for &child in &node.children {
                    self.write_node(child, depth + 1, out);
                }
                for _ in 0..depth {
                    out.push_str("  ");
                }
                out.push_str("</");
                out.push_str(&node.tag);
                out.push_str(">\n");
            }
        }
    }
}

/// Escape XML special characters in text and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
