//! Tool cards

use serde::Serialize;

use crate::i18n::Translations;
use crate::route::Route;
use crate::types::{BadgeTone, PricingTier, Tool};

/// Two-stop logo placeholder gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub from_hue: u16,
    pub to_hue: u16,
}

impl Gradient {
    /// Deterministic gradient for a tool id
    ///
    /// Uses the 31-multiplier string hash over UTF-16 code units with the
    /// shift wrapped to 32 bits, so hues match what a browser computes for
    /// the same id.
    pub fn for_id(id: &str) -> Self {
        let mut hash: i64 = 0;
        for unit in id.encode_utf16() {
            let shifted = (hash as i32).wrapping_shl(5) as i64;
            hash = unit as i64 + (shifted - hash);
        }
        let from_hue = (hash % 360).unsigned_abs() as u16;
        Self {
            from_hue,
            to_hue: (from_hue + 40) % 360,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "linear-gradient(135deg, hsl({}, 70%, 60%), hsl({}, 70%, 50%))",
            self.from_hue, self.to_hue
        )
    }
}

/// First two characters of a name, upper-cased
pub fn monogram(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// A tool as shown in the directory grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCard {
    pub id: String,
    pub name: String,
    pub monogram: String,
    pub short_description: String,
    pub pricing: PricingTier,
    pub pricing_label: String,
    pub badge_tone: BadgeTone,
    /// Only the first tag is shown on a card
    pub primary_tag: Option<String>,
    pub gradient: Gradient,
    /// Detail page address
    pub path: String,
}

impl ToolCard {
    pub fn build(tool: &Tool, t: &Translations) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            monogram: monogram(&tool.name),
            short_description: tool.short_description.clone(),
            pricing: tool.pricing,
            pricing_label: t.pricing_label(tool.pricing).to_string(),
            badge_tone: tool.pricing.tone(),
            primary_tag: tool.primary_tag().map(str::to_string),
            gradient: Gradient::for_id(&tool.id),
            path: Route::tool(tool.id.as_str()).path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations;
    use crate::types::Language;

    #[test]
    fn test_gradient_hash() {
        assert_eq!(Gradient::for_id(""), Gradient { from_hue: 0, to_hue: 40 });
        assert_eq!(Gradient::for_id("a"), Gradient { from_hue: 97, to_hue: 137 });
        // 98 + (97 << 5) - 97 = 3105, 3105 % 360 = 225
        assert_eq!(Gradient::for_id("ab"), Gradient { from_hue: 225, to_hue: 265 });
    }

    #[test]
    fn test_gradient_stable_and_in_range() {
        for id in ["chatgpt", "stable-diffusion", "a-very-long-identifier-that-overflows-int32"] {
            let g = Gradient::for_id(id);
            assert_eq!(g, Gradient::for_id(id));
            assert!(g.from_hue < 360 && g.to_hue < 360);
            assert_eq!(g.to_hue, (g.from_hue + 40) % 360);
        }
    }

    #[test]
    fn test_gradient_css() {
        assert_eq!(
            Gradient { from_hue: 10, to_hue: 50 }.css(),
            "linear-gradient(135deg, hsl(10, 70%, 60%), hsl(50, 70%, 50%))"
        );
    }

    #[test]
    fn test_monogram() {
        assert_eq!(monogram("ChatGPT"), "CH");
        assert_eq!(monogram("x"), "X");
        assert_eq!(monogram(""), "");
        assert_eq!(monogram("élan"), "ÉL");
    }

    #[test]
    fn test_build_card() {
        let tool = Tool::new("scribe", "scribe", "writing", PricingTier::OpenSource)
            .with_short_description("Drafts")
            .with_tags(["text", "ai"]);
        let card = ToolCard::build(&tool, translations(Language::Es));

        assert_eq!(card.monogram, "SC");
        assert_eq!(card.pricing_label, "Código abierto");
        assert_eq!(card.badge_tone, BadgeTone::Purple);
        assert_eq!(card.primary_tag.as_deref(), Some("text"));
        assert_eq!(card.path, "/tool/scribe");
    }
}
