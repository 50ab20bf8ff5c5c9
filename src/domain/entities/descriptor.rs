//! Raw menu service payloads
//!
//! These mirror the backend's wire shape (PascalCase keys) and are kept
//! unprocessed so collaborators that need the original form can read them.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the menu descriptor array, as delivered by the backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuDescriptor {
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "Route", default, deserialize_with = "null_as_default")]
    pub route: String,

    /// SVG markup, possibly with escaped quotes
    #[serde(rename = "Icon", default, deserialize_with = "null_as_default")]
    pub icon: String,

    #[serde(rename = "Permission", default, deserialize_with = "null_as_default")]
    pub permission: Vec<String>,

    #[serde(rename = "SubMenus", default, deserialize_with = "null_as_default")]
    pub sub_menus: Vec<MenuDescriptor>,

    #[serde(
        rename = "EmbeddedMenu",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub embedded_menu: bool,

    #[serde(rename = "Url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MenuDescriptor {
    pub fn new(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_menus(mut self, sub_menus: Vec<MenuDescriptor>) -> Self {
        self.sub_menus = sub_menus;
        self
    }

    /// Total number of entries in this subtree, including self
    pub fn entry_count(&self) -> usize {
        1 + self
            .sub_menus
            .iter()
            .map(MenuDescriptor::entry_count)
            .sum::<usize>()
    }
}

/// One entry of the package resolution response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageEntry {
    #[serde(rename = "PackageName", default, deserialize_with = "null_as_default")]
    pub package_name: String,

    #[serde(rename = "PackageTitle", default, deserialize_with = "null_as_default")]
    pub package_title: String,
}

impl PackageEntry {
    pub fn new(package_name: impl Into<String>, package_title: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            package_title: package_title.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.package_name.trim().is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_false(value: &bool) -> bool {
    !*value
}
