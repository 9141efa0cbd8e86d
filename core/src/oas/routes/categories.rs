#![deny(missing_docs)]

//! # Category Registry
//!
//! First-seen-wins `name -> Category` registry, built once per transformation
//! and consumed into the final ordered list.

use crate::oas::models::{Category, Endpoint};
use std::collections::HashMap;

/// Category used for operations without tags.
pub const DEFAULT_CATEGORY: &str = "Default";

/// Generic icon for categories without a dedicated one.
pub const DEFAULT_ICON: &str = "fa-tag";

/// Icon of the placeholder category emitted for empty documents.
const EMPTY_DOCUMENT_ICON: &str = "fa-globe";

/// Known category icons.
const ICONS: &[(&str, &str)] = &[
    ("AI LLMs", "fa-robot"),
    ("AI Persona", "fa-user-circle"),
    ("AI Images", "fa-image"),
    ("AI Img2Img", "fa-images"),
    ("AI Tools", "fa-tools"),
    ("C.AI", "fa-comment-alt"),
    ("Downloader", "fa-download"),
    ("Maker", "fa-magic"),
    ("Tools", "fa-gear"),
    ("Temp Mail", "fa-envelope"),
    ("Stalker", "fa-eye"),
    ("Lyrics", "fa-music"),
    ("YouTube", "fab fa-youtube"),
    ("YouTube Music", "fa-headphones"),
    ("Spotify", "fab fa-spotify"),
    ("Deezer", "fa-music"),
    ("Qobuz", "fa-compact-disc"),
    ("Tidal", "fa-water"),
    ("Jiosaavn", "fa-play-circle"),
    ("Amazon Music", "fab fa-amazon"),
    ("Apple Music", "fab fa-apple"),
    ("SoundCloud", "fab fa-soundcloud"),
    ("Task", "fa-tasks"),
];

/// Looks up the icon for a category name.
pub fn icon_for(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Ordered registry of categories keyed by name.
#[derive(Debug, Default)]
pub(crate) struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Declares a document-level tag. Later declarations of the same name are ignored.
    pub(crate) fn declare(&mut self, name: &str, description: &str) {
        self.get_or_insert(name, || description.to_string());
    }

    /// Appends an endpoint, creating its category lazily.
    pub(crate) fn push(&mut self, name: &str, endpoint: Endpoint) {
        let idx = self.get_or_insert(name, || format!("Endpoints related to {}", name));
        self.categories[idx].endpoints.push(endpoint);
    }

    fn get_or_insert(&mut self, name: &str, description: impl FnOnce() -> String) -> usize {
        if let Some(idx) = self.index.get(name) {
            return *idx;
        }
        let idx = self.categories.len();
        self.categories.push(Category {
            name: name.to_string(),
            description: description(),
            icon: icon_for(name).to_string(),
            endpoints: Vec::new(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Finishes the registry. The result is never empty.
    pub(crate) fn into_categories(mut self) -> Vec<Category> {
        if self.categories.is_empty() {
            self.categories.push(Category {
                name: DEFAULT_CATEGORY.to_string(),
                description: "API Endpoints".to_string(),
                icon: EMPTY_DOCUMENT_ICON.to_string(),
                endpoints: Vec::new(),
            });
        }
        self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::models::{HttpMethod, SourceVersion};

    fn endpoint(path: &str) -> Endpoint {
        Endpoint {
            path: path.into(),
            method: HttpMethod::Get,
            summary: String::new(),
            description: String::new(),
            parameters: Vec::new(),
            responses: Vec::new(),
            body_schema: None,
            source_version: SourceVersion::OpenApi3,
        }
    }

    #[test]
    fn test_first_declaration_wins() {
        let mut registry = CategoryRegistry::default();
        registry.declare("Users", "People");
        registry.declare("Users", "Duplicate");
        registry.push("Users", endpoint("/users"));

        let categories = registry.into_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].description, "People");
        assert_eq!(categories[0].endpoints.len(), 1);
    }

    #[test]
    fn test_lazy_category_creation() {
        let mut registry = CategoryRegistry::default();
        registry.declare("Users", "");
        registry.push("Orders", endpoint("/orders"));
        registry.push("Users", endpoint("/users"));
        registry.push("Orders", endpoint("/orders/{id}"));

        let categories = registry.into_categories();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Users", "Orders"]);
        assert_eq!(categories[1].description, "Endpoints related to Orders");
        assert_eq!(categories[1].endpoints.len(), 2);
    }

    #[test]
    fn test_empty_registry_yields_default() {
        let categories = CategoryRegistry::default().into_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, DEFAULT_CATEGORY);
        assert_eq!(categories[0].icon, "fa-globe");
        assert!(categories[0].endpoints.is_empty());
    }

    #[test]
    fn test_icons() {
        assert_eq!(icon_for("Spotify"), "fab fa-spotify");
        assert_eq!(icon_for("Tools"), "fa-gear");
        assert_eq!(icon_for("Whatever"), DEFAULT_ICON);
    }
}
