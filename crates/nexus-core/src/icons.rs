//! Category icon identifiers
//!
//! Catalog records name their icon symbolically (`"Code"`, `"Image"`, ...).
//! Names are resolved once against this closed set; anything unrecognized
//! becomes [`CategoryIcon::None`] and the shell simply draws no icon.

use serde::{Deserialize, Serialize};

/// Known category icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryIcon {
    LayoutGrid,
    MessageSquare,
    PenTool,
    Image,
    Video,
    Music,
    Code,
    Zap,
    Search,
    /// Unknown or missing icon name
    None,
}

impl CategoryIcon {
    /// Resolve a symbolic icon name
    pub fn resolve(name: &str) -> Self {
        match name {
            "LayoutGrid" => CategoryIcon::LayoutGrid,
            "MessageSquare" => CategoryIcon::MessageSquare,
            "PenTool" => CategoryIcon::PenTool,
            "Image" => CategoryIcon::Image,
            "Video" => CategoryIcon::Video,
            "Music" => CategoryIcon::Music,
            "Code" => CategoryIcon::Code,
            "Zap" => CategoryIcon::Zap,
            "Search" => CategoryIcon::Search,
            _ => CategoryIcon::None,
        }
    }

    /// Symbolic name understood by the shell's icon set, if any
    pub fn name(&self) -> Option<&'static str> {
        match self {
            CategoryIcon::LayoutGrid => Some("LayoutGrid"),
            CategoryIcon::MessageSquare => Some("MessageSquare"),
            CategoryIcon::PenTool => Some("PenTool"),
            CategoryIcon::Image => Some("Image"),
            CategoryIcon::Video => Some("Video"),
            CategoryIcon::Music => Some("Music"),
            CategoryIcon::Code => Some("Code"),
            CategoryIcon::Zap => Some("Zap"),
            CategoryIcon::Search => Some("Search"),
            CategoryIcon::None => None,
        }
    }

    /// Plain-text glyph for hosts without an icon set
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            CategoryIcon::LayoutGrid => Some("▦"),
            CategoryIcon::MessageSquare => Some("💬"),
            CategoryIcon::PenTool => Some("✒"),
            CategoryIcon::Image => Some("🖼"),
            CategoryIcon::Video => Some("🎬"),
            CategoryIcon::Music => Some("♪"),
            CategoryIcon::Code => Some("</>"),
            CategoryIcon::Zap => Some("⚡"),
            CategoryIcon::Search => Some("🔍"),
            CategoryIcon::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, CategoryIcon::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_round_trip() {
        for name in ["LayoutGrid", "MessageSquare", "PenTool", "Image", "Video", "Music", "Code", "Zap", "Search"] {
            let icon = CategoryIcon::resolve(name);
            assert!(!icon.is_none(), "{} should resolve", name);
            assert_eq!(icon.name(), Some(name));
            assert!(icon.glyph().is_some());
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        let icon = CategoryIcon::resolve("Sparkles");
        assert!(icon.is_none());
        assert_eq!(icon.name(), None);
        assert_eq!(icon.glyph(), None);

        // Case matters
        assert!(CategoryIcon::resolve("code").is_none());
        assert!(CategoryIcon::resolve("").is_none());
    }
}
