//! Tool detail page

use serde::Serialize;

use crate::catalog::{Catalog, CatalogResult};
use crate::detail::{resolve_detail, ToolDetail};
use crate::i18n::{format_template, Translations};
use crate::types::BadgeTone;
use super::card::{monogram, ToolCard};

/// One question and answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Everything the detail page shows for a resolved tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPage {
    pub id: String,
    pub name: String,
    pub monogram: String,
    pub full_description: String,
    pub category_label: String,
    pub pricing_label: String,
    pub badge_tone: BadgeTone,
    pub website_url: String,
    pub back_label: String,
    pub visit_label: String,
    pub share_label: String,
    pub features_heading: String,
    pub features: Vec<String>,
    pub faq_heading: String,
    pub faq: Vec<FaqEntry>,
    pub tags_heading: String,
    pub tags: Vec<String>,
    pub alternatives_heading: String,
    /// Resolvable alternatives only; empty hides the section
    pub alternatives: Vec<ToolCard>,
}

/// Detail page state for a requested id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DetailView {
    Found(Box<ToolPage>),
    #[serde(rename_all = "camelCase")]
    NotFound { title: String, back_label: String },
}

impl DetailView {
    /// Resolve `id` and build its page, or the not-found placeholder
    pub fn build(catalog: &Catalog, id: &str, t: &Translations) -> Self {
        Self::from_result(catalog, resolve_detail(catalog, id), t)
    }

    pub fn from_result(catalog: &Catalog, detail: CatalogResult<ToolDetail<'_>>, t: &Translations) -> Self {
        match detail {
            Ok(detail) => DetailView::Found(Box::new(ToolPage::build(catalog, &detail, t))),
            Err(_) => DetailView::NotFound {
                title: t.no_tools_found.to_string(),
                back_label: t.back_to_directory.to_string(),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailView::Found(_))
    }

    pub fn page(&self) -> Option<&ToolPage> {
        match self {
            DetailView::Found(page) => Some(page),
            DetailView::NotFound { .. } => None,
        }
    }
}

impl ToolPage {
    pub fn build(catalog: &Catalog, detail: &ToolDetail<'_>, t: &Translations) -> Self {
        let tool = detail.tool;
        let category_label = t.category_name(catalog, &tool.category);
        let topic = category_label.to_lowercase();

        let faq = vec![
            FaqEntry {
                question: format_template(t.is_free, &[("name", tool.name.as_str())]),
                answer: t.pricing_answer(tool.pricing).to_string(),
            },
            FaqEntry {
                question: format_template(t.best_for, &[("name", tool.name.as_str())]),
                answer: format_template(
                    t.answer_best_for,
                    &[("category", category_label.as_str()), ("topic", topic.as_str())],
                ),
            },
        ];

        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            monogram: monogram(&tool.name),
            full_description: tool.full_description.clone(),
            category_label,
            pricing_label: t.pricing_label(tool.pricing).to_string(),
            badge_tone: tool.pricing.tone(),
            website_url: tool.website_url.clone(),
            back_label: t.back_to_directory.to_string(),
            visit_label: t.visit_website.to_string(),
            share_label: t.share.to_string(),
            features_heading: t.key_features.to_string(),
            features: tool.features.clone(),
            faq_heading: t.faq.to_string(),
            faq,
            tags_heading: t.tags.to_string(),
            tags: tool.tags.clone(),
            alternatives_heading: t.alternatives.to_string(),
            alternatives: detail.alternatives.iter().map(|alt| ToolCard::build(alt, t)).collect(),
        }
    }
}
