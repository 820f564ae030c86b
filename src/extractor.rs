// src/extractor.rs

//! The TIC element-list schema and the generic element extractor.
//!
//! TIC files nest `<E>` elements arbitrarily deep: each element carries its
//! name in an `n` attribute, an optional `<AL>` attribute list of `<A>`
//! entries (each holding its value in a `<V>` child), and an optional `<EL>`
//! child element list. The extractor normalizes one level of that shape into
//! a flat list of named elements with their attributes; walking deeper is the
//! caller's job.

use serde::Deserialize;

/// An element list, as found at the root of a TIC document and inside
/// every `<EL>` wrapper.
#[derive(Debug, Deserialize, Default)]
pub struct ElementList {
    #[serde(rename = "E", default)]
    pub elements: Vec<TicElement>,
}

/// A raw `<E>` element.
#[derive(Debug, Deserialize)]
pub struct TicElement {
    #[serde(rename = "@n")]
    pub name: String,

    #[serde(rename = "AL", default)]
    pub attribute_lists: Vec<AttributeList>,

    #[serde(rename = "EL", default)]
    pub element_lists: Vec<ElementList>,
}

/// A raw `<AL>` attribute list.
#[derive(Debug, Deserialize, Default)]
pub struct AttributeList {
    #[serde(rename = "A", default)]
    pub attributes: Vec<TicAttribute>,
}

/// A raw `<A>` attribute with its `<V>` value entries.
#[derive(Debug, Deserialize)]
pub struct TicAttribute {
    #[serde(rename = "@n")]
    pub name: String,

    #[serde(rename = "V", default)]
    pub values: Vec<String>,
}

/// One extracted element: its name, its attributes in source order, and its
/// child element list (passed through unexpanded).
#[derive(Debug)]
pub struct Element<'a> {
    pub name: &'a str,
    pub attributes: Vec<Attribute<'a>>,
    pub children: Option<&'a ElementList>,
}

impl Element<'_> {
    /// Returns the value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value)
    }
}

/// One extracted `{name, value}` attribute pair.
#[derive(Debug, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Extracts the elements of one element list level.
///
/// A list without elements yields an empty vector, never an error. Each
/// attribute contributes its first `<V>` entry as the value (an `<A>` with no
/// value entries degrades to the empty string). Child element lists are
/// returned by reference and not expanded; recursion is up to the caller.
pub fn extract_elements(list: &ElementList) -> Vec<Element<'_>> {
    let mut elements = Vec::with_capacity(list.elements.len());

    for element in &list.elements {
        let mut attributes = Vec::new();
        if let Some(attribute_list) = element.attribute_lists.first() {
            for attribute in &attribute_list.attributes {
                attributes.push(Attribute {
                    name: &attribute.name,
                    value: attribute.values.first().map(String::as_str).unwrap_or(""),
                });
            }
        }

        elements.push(Element {
            name: &element.name,
            attributes,
            children: element.element_lists.first(),
        });
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::{ElementList, extract_elements};

    fn parse(xml: &str) -> ElementList {
        quick_xml::de::from_str(xml).expect("test XML must parse")
    }

    #[test]
    fn list_without_elements_is_empty() {
        let list = parse("<TIC></TIC>");
        assert!(extract_elements(&list).is_empty());
    }

    #[test]
    fn attributes_are_complete_and_in_source_order() {
        let list = parse(
            r#"<TIC>
                 <E n="IO:Port">
                   <AL>
                     <A n="NodeId"><V>16</V></A>
                     <A n="Name"><V>DI8</V></A>
                     <A n="DataType"><V>uint8</V></A>
                   </AL>
                 </E>
               </TIC>"#,
        );
        let elements = extract_elements(&list);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "IO:Port");

        let names: Vec<&str> = elements[0].attributes.iter().map(|a| a.name).collect();
        assert_eq!(names, ["NodeId", "Name", "DataType"]);
        assert_eq!(elements[0].attribute("Name"), Some("DI8"));
    }

    #[test]
    fn attribute_without_value_degrades_to_empty_string() {
        let list = parse(r#"<TIC><E n="X"><AL><A n="Empty"></A></AL></E></TIC>"#);
        let elements = extract_elements(&list);
        assert_eq!(elements[0].attribute("Empty"), Some(""));
    }

    #[test]
    fn empty_attribute_list_degrades_to_no_attributes() {
        let list = parse(r#"<TIC><E n="X"><AL></AL></E></TIC>"#);
        let elements = extract_elements(&list);
        assert!(elements[0].attributes.is_empty());
    }

    #[test]
    fn child_element_list_is_passed_through_unexpanded() {
        let list = parse(r#"<TIC><E n="Outer"><EL><E n="Inner"/></EL></E></TIC>"#);
        let elements = extract_elements(&list);
        let children = elements[0].children.expect("child list must be present");
        let inner = extract_elements(children);
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].name, "Inner");
        assert!(inner[0].children.is_none());
    }
}
