//! Shared value types and normalization helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Activation state shared by categories, customers, products and variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityStatus {
    #[default]
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "ACTIVE",
            EntityStatus::Inactive => "INACTIVE",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EntityStatus::Active => EntityStatus::Inactive,
            EntityStatus::Inactive => EntityStatus::Active,
        }
    }
}

impl From<&str> for EntityStatus {
    fn from(value: &str) -> Self {
        match value {
            "INACTIVE" => EntityStatus::Inactive,
            _ => EntityStatus::Active,
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a media row attached to a product variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "DRAWING")]
    Drawing,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "IMAGE",
            MediaKind::Drawing => "DRAWING",
        }
    }
}

impl From<&str> for MediaKind {
    fn from(value: &str) -> Self {
        match value {
            "DRAWING" => MediaKind::Drawing,
            _ => MediaKind::Image,
        }
    }
}

/// Lowercase a slug candidate and reduce it to `[a-z0-9-]` with single
/// hyphens between words.
pub fn normalize_slug(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

/// Uppercase SKU fragment derived from an arbitrary name.
pub fn slug_to_sku(value: &str) -> String {
    let mut part = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !part.is_empty() {
                part.push('-');
            }
            pending_hyphen = false;
            part.push(ch.to_ascii_uppercase());
        } else {
            pending_hyphen = true;
        }
    }

    part
}

/// Base SKU suggested for a variant when the form leaves it empty.
pub fn build_base_sku(product_name: &str, variant_name: &str) -> String {
    format!("{}-{}", slug_to_sku(product_name), slug_to_sku(variant_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_slug_strips_and_collapses() {
        assert_eq!(normalize_slug("  Flameproof  Junction Box! "), "flameproof-junction-box");
        assert_eq!(normalize_slug("a--b"), "a-b");
        assert_eq!(normalize_slug("Ex-d IIB+H2"), "ex-d-iibh2");
    }

    #[test]
    fn build_base_sku_joins_uppercased_parts() {
        assert_eq!(build_base_sku("Well Glass 100W", "Ø150 clear"), "WELL-GLASS-100W-150-CLEAR");
    }

    #[test]
    fn status_parses_permissively_and_toggles() {
        assert_eq!(EntityStatus::from("INACTIVE"), EntityStatus::Inactive);
        assert_eq!(EntityStatus::from("garbage"), EntityStatus::Active);
        assert_eq!(EntityStatus::Active.toggled(), EntityStatus::Inactive);
    }
}
