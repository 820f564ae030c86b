// src/reader/io.rs

//! Reads the I/O modules of a hardware configuration (TIC file).
//!
//! TIC files nest elements arbitrarily deep, so this reader walks the whole
//! tree twice over: an outer descent looks for `IO:Frame` elements, and for
//! each frame an inner descent collects the `IO:Port` elements below it,
//! carrying the frame's transfer direction.

use crate::error::ConfigError;
use crate::extractor::{ElementList, extract_elements};
use crate::types::{Node, Port};
use log::warn;
use std::collections::HashMap;
use std::path::Path;

/// The key namespace of Axioline I/O modules.
const AXIOLINE_PREFIX: &str = "Arp.Io.FbIo.AxlC/";

/// Frames tagged `1:IN` carry data read from the physical module, which the
/// signal graph sees as node outputs. `1:OUT` is the inverse.
const FRAME_IN: &str = "1:IN";
const FRAME_OUT: &str = "1:OUT";

/// Reads a TIC file and returns one [`Node`] per distinct hardware node,
/// ports in encounter order.
pub fn load_io_modules(path: impl AsRef<Path>) -> Result<Vec<Node>, ConfigError> {
    let document: ElementList = super::load_document(path.as_ref())?;
    Ok(collect_io_modules(&document))
}

/// Parses TIC content and returns the I/O module nodes, as
/// [`load_io_modules`] but from a string.
pub fn io_modules_from_str(xml_content: &str) -> Result<Vec<Node>, ConfigError> {
    let document: ElementList = quick_xml::de::from_str(xml_content)?;
    Ok(collect_io_modules(&document))
}

fn collect_io_modules(document: &ElementList) -> Vec<Node> {
    let mut modules = NodeSet::default();
    collect_frames(document, &mut modules);
    modules.into_nodes()
}

/// Walks the element tree looking for `IO:Frame` elements.
fn collect_frames(list: &ElementList, modules: &mut NodeSet) {
    for element in extract_elements(list) {
        if element.name == "IO:Frame" {
            let frame_id = element.attribute("FrameId").unwrap_or("");
            if let Some(children) = element.children {
                collect_ports(children, frame_id, modules);
            }
        }

        // Frames can sit at any depth, also below other frames.
        if let Some(children) = element.children {
            collect_frames(children, modules);
        }
    }
}

/// Walks a frame's subtree looking for `IO:Port` elements, assigning each
/// port to its node under the enclosing frame's direction.
fn collect_ports(list: &ElementList, frame_id: &str, modules: &mut NodeSet) {
    for element in extract_elements(list) {
        if element.name == "IO:Port" {
            let node_id = element.attribute("NodeId").unwrap_or("");
            let name = element.attribute("Name").unwrap_or("");
            let data_type = element.attribute("DataType").unwrap_or("");

            let key = format!("{}{}", AXIOLINE_PREFIX, node_id);
            let node = modules.entry(key, format!("AxlC/{}", node_id));

            match frame_id {
                FRAME_IN => node.right.push(Port::new(name, data_type)),
                FRAME_OUT => node.left.push(Port::new(name, data_type)),
                other => warn!("dropping port {} under unknown frame direction {:?}", name, other),
            }
        }

        if let Some(children) = element.children {
            collect_ports(children, frame_id, modules);
        }
    }
}

/// Insertion-ordered node collection with find-or-create by key.
#[derive(Default)]
struct NodeSet {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeSet {
    fn entry(&mut self, key: String, name: String) -> &mut Node {
        if let Some(&position) = self.index.get(&key) {
            return &mut self.nodes[position];
        }
        let position = self.nodes.len();
        self.index.insert(key.clone(), position);
        self.nodes.push(Node::new(key, name));
        &mut self.nodes[position]
    }

    fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::io_modules_from_str;

    /// A minimal TIC tree: one node with one port per frame direction, the
    /// ports nested one level below the frame.
    const TWO_FRAME_TIC: &str = r#"
        <TIC>
          <E n="IO:Frame">
            <AL><A n="FrameId"><V>1:IN</V></A></AL>
            <EL>
              <E n="Group">
                <EL>
                  <E n="IO:Port">
                    <AL>
                      <A n="NodeId"><V>16</V></A>
                      <A n="Name"><V>DI8</V></A>
                      <A n="DataType"><V>uint8</V></A>
                    </AL>
                  </E>
                </EL>
              </E>
            </EL>
          </E>
          <E n="IO:Frame">
            <AL><A n="FrameId"><V>1:OUT</V></A></AL>
            <EL>
              <E n="IO:Port">
                <AL>
                  <A n="NodeId"><V>16</V></A>
                  <A n="Name"><V>DO8</V></A>
                  <A n="DataType"><V>uint8</V></A>
                </AL>
              </E>
            </EL>
          </E>
        </TIC>"#;

    #[test]
    fn ports_of_one_node_collapse_into_one_entry() {
        let modules = io_modules_from_str(TWO_FRAME_TIC).unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].key, "Arp.Io.FbIo.AxlC/16");
        assert_eq!(modules[0].name, "AxlC/16");
    }

    #[test]
    fn frame_direction_is_inverted() {
        let modules = io_modules_from_str(TWO_FRAME_TIC).unwrap();
        // The IN frame's port is an output of the logical node.
        assert_eq!(modules[0].right.len(), 1);
        assert_eq!(modules[0].right[0].port_id, "DI8");
        assert_eq!(modules[0].left.len(), 1);
        assert_eq!(modules[0].left[0].port_id, "DO8");
    }

    #[test]
    fn unknown_frame_direction_drops_ports() {
        let xml = r#"
            <TIC>
              <E n="IO:Frame">
                <AL><A n="FrameId"><V>2:DIAG</V></A></AL>
                <EL>
                  <E n="IO:Port">
                    <AL>
                      <A n="NodeId"><V>16</V></A>
                      <A n="Name"><V>STATUS</V></A>
                      <A n="DataType"><V>uint16</V></A>
                    </AL>
                  </E>
                </EL>
              </E>
            </TIC>"#;
        let modules = io_modules_from_str(xml).unwrap();
        // The node is created but the port lands nowhere.
        assert_eq!(modules.len(), 1);
        assert!(modules[0].left.is_empty());
        assert!(modules[0].right.is_empty());
    }
}
