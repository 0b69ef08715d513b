//! Translation table types and lookup

use crate::catalog::Catalog;
use crate::query::ALL_CATEGORIES;
use crate::types::{Language, PricingTier};
use super::locales;

/// Localized labels for each pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingLabels {
    pub free: &'static str,
    pub freemium: &'static str,
    pub paid: &'static str,
    pub waitlist: &'static str,
    pub open_source: &'static str,
}

impl PricingLabels {
    pub fn label(&self, tier: PricingTier) -> &'static str {
        match tier {
            PricingTier::Free => self.free,
            PricingTier::Freemium => self.freemium,
            PricingTier::Paid => self.paid,
            PricingTier::Waitlist => self.waitlist,
            PricingTier::OpenSource => self.open_source,
        }
    }
}

/// All UI strings for one language
///
/// Templates use `{{key}}` placeholders, filled by [`format_template`]:
/// `showing_results` takes `count`, `is_free` and `best_for` take `name`,
/// `answer_best_for` takes `category` and `topic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub search_placeholder: &'static str,
    pub categories: &'static str,
    pub all_tools: &'static str,
    pub showing_results: &'static str,
    pub no_tools_found: &'static str,
    pub no_tools_desc: &'static str,
    pub back_to_directory: &'static str,
    pub visit_website: &'static str,
    pub share: &'static str,
    pub key_features: &'static str,
    pub faq: &'static str,
    pub is_free: &'static str,
    pub best_for: &'static str,
    pub answer_free: &'static str,
    pub answer_paid: &'static str,
    pub answer_freemium: &'static str,
    pub answer_best_for: &'static str,
    pub tags: &'static str,
    pub alternatives: &'static str,
    pub pricing: PricingLabels,
    /// Category label overrides as `(category id, label)`
    pub cat: &'static [(&'static str, &'static str)],
}

impl Translations {
    /// Translated label for a category id, if this language overrides it
    pub fn category(&self, id: &str) -> Option<&'static str> {
        self.cat
            .iter()
            .find(|(cat_id, _)| *cat_id == id)
            .map(|(_, label)| *label)
    }

    /// Display name for a category id
    ///
    /// `"all"` is the "All Tools" label; otherwise the translated override,
    /// then the catalog's default name, then the raw id.
    pub fn category_name(&self, catalog: &Catalog, id: &str) -> String {
        if id == ALL_CATEGORIES {
            return self.all_tools.to_string();
        }
        self.category(id)
            .map(str::to_string)
            .or_else(|| catalog.category(id).map(|c| c.name.clone()))
            .unwrap_or_else(|| id.to_string())
    }

    pub fn pricing_label(&self, tier: PricingTier) -> &'static str {
        self.pricing.label(tier)
    }

    /// FAQ answer to "is it free?" for a tier
    pub fn pricing_answer(&self, tier: PricingTier) -> &'static str {
        match tier {
            PricingTier::Free => self.answer_free,
            PricingTier::Paid => self.answer_paid,
            PricingTier::Freemium | PricingTier::Waitlist | PricingTier::OpenSource => self.answer_freemium,
        }
    }

    /// "Showing N tools" line
    pub fn results_summary(&self, count: usize) -> String {
        format_template(self.showing_results, &[("count", count.to_string().as_str())])
    }
}

/// The string table for a language
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &locales::EN,
        Language::Vi => &locales::VI,
        Language::Zh => &locales::ZH,
        Language::Ru => &locales::RU,
        Language::Th => &locales::TH,
        Language::Ja => &locales::JA,
        Language::Ko => &locales::KO,
        Language::Fr => &locales::FR,
        Language::De => &locales::DE,
        Language::Es => &locales::ES,
    }
}

/// Replace every `{{key}}` placeholder; unknown placeholders are left as-is
pub fn format_template(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };
        let key = &after[..close];
        match args.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}
