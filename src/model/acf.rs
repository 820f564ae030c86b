// src/model/acf.rs

//! Model structs for `AcfConfigurationDocument` files, which declare the
//! component instances running on the controller and their library/type.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AcfConfigurationDocument {
    #[serde(rename = "Components", default)]
    pub components: Vec<Components>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Components {
    #[serde(rename = "Component", default)]
    pub component: Vec<ComponentDecl>,
}

#[derive(Debug, Deserialize)]
pub struct ComponentDecl {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@library")]
    pub library: String,

    #[serde(rename = "@type")]
    pub type_name: String,
}
