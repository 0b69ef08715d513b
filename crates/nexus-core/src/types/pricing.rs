//! Pricing tier enumeration

use serde::{Deserialize, Serialize};

/// Cost model of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingTier {
    Free,
    Freemium,
    Paid,
    Waitlist,
    #[serde(rename = "Open Source")]
    OpenSource,
}

impl PricingTier {
    /// All tiers, in display order
    pub const ALL: [PricingTier; 5] = [
        PricingTier::Free,
        PricingTier::Freemium,
        PricingTier::Paid,
        PricingTier::Waitlist,
        PricingTier::OpenSource,
    ];

    /// Canonical (untranslated) label, also the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingTier::Free => "Free",
            PricingTier::Freemium => "Freemium",
            PricingTier::Paid => "Paid",
            PricingTier::Waitlist => "Waitlist",
            PricingTier::OpenSource => "Open Source",
        }
    }

    /// Badge color family used by the shell
    pub fn tone(&self) -> BadgeTone {
        match self {
            PricingTier::Free => BadgeTone::Green,
            PricingTier::Freemium => BadgeTone::Blue,
            PricingTier::Paid => BadgeTone::Red,
            PricingTier::Waitlist => BadgeTone::Yellow,
            PricingTier::OpenSource => BadgeTone::Purple,
        }
    }
}

impl std::fmt::Display for PricingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color family for a pricing badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Green => "green",
            BadgeTone::Blue => "blue",
            BadgeTone::Red => "red",
            BadgeTone::Yellow => "yellow",
            BadgeTone::Purple => "purple",
        }
    }
}
