//! Typed site copy.
//!
//! Everything the home page shows lives in `content/site.json`, embedded at
//! compile time and validated once before the first render.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no navigation sections defined")]
    NoSections,
    #[error("first section must be the hero, found {0}")]
    HeroNotFirst(SectionKind),
    #[error("section {0} is listed more than once")]
    DuplicateSection(SectionKind),
    #[error("{0} is blank")]
    Blank(String),
    #[error("plan {0} has no price")]
    FreePlan(String),
    #[error("more than one plan is marked popular")]
    SeveralPopularPlans,
    #[error("update log {0} appears more than once")]
    DuplicateVersion(String),
    #[error("performance chart has no samples")]
    NoSamples,
}

/// Every page section, in the order the site lays them out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Hero,
    Modules,
    Nve,
    LibertyCity,
    Terrain,
    Performance,
    Physics,
    Roleplay,
    RdePev,
    Police,
    Updates,
    Modifiers,
    Pricing,
    Payment,
}

impl SectionKind {
    /// DOM id and navigation identifier.
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Modules => "modules",
            SectionKind::Nve => "nve",
            SectionKind::LibertyCity => "libertyCity",
            SectionKind::Terrain => "terrain",
            SectionKind::Performance => "performance",
            SectionKind::Physics => "physics",
            SectionKind::Roleplay => "roleplay",
            SectionKind::RdePev => "rdePev",
            SectionKind::Police => "police",
            SectionKind::Updates => "updates",
            SectionKind::Modifiers => "modifiers",
            SectionKind::Pricing => "pricing",
            SectionKind::Payment => "payment",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Amber,
    Purple,
    Blue,
    Red,
    Green,
}

impl Accent {
    pub fn text(self) -> &'static str {
        match self {
            Accent::Amber => "text-amber-500",
            Accent::Purple => "text-purple-500",
            Accent::Blue => "text-blue-500",
            Accent::Red => "text-red-500",
            Accent::Green => "text-green-500",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Accent::Amber => "bg-amber-500/20 text-amber-500",
            Accent::Purple => "bg-purple-500/20 text-purple-500",
            Accent::Blue => "bg-blue-500/20 text-blue-500",
            Accent::Red => "bg-red-500/20 text-red-500",
            Accent::Green => "bg-green-500/20 text-green-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub brand: Brand,
    pub sections: Vec<NavSection>,
    pub hero: Hero,
    pub modules: Modules,
    pub nve: VisualSystem,
    pub liberty_city: LibertyCity,
    pub terrain: Terrain,
    pub performance: Performance,
    pub physics: Physics,
    pub roleplay: Roleplay,
    pub rde_pev: RdePev,
    pub police: PoliceMod,
    pub updates: Updates,
    pub modifiers: Modifiers,
    pub pricing: Pricing,
    pub payment: Payment,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub hero_logo: String,
    pub footer_logo: String,
    pub footer_name: String,
    pub site_title: String,
    pub copyright: String,
    pub video_url: String,
    pub video_label: String,
    pub whitepaper_url: String,
    pub whitepaper_label: String,
    pub buy_label: String,
    pub learn_more_label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavSection {
    pub kind: SectionKind,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Section heading with an optional lead paragraph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Intro {
    pub heading: String,
    #[serde(default)]
    pub lead: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub description: String,
    pub checks: Vec<String>,
    pub main_image: Image,
    pub inset_images: Vec<Image>,
    pub scroll_hint: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModuleCard {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Modules {
    pub intro: Intro,
    pub cards: Vec<ModuleCard>,
    pub comparison: Comparison,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub heading: String,
    pub category_label: String,
    pub common_label: String,
    pub elite_label: String,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComparisonRow {
    pub category: String,
    pub common: String,
    pub elite: String,
}

/// An image with a caption block and bullet points.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Showcase {
    pub title: String,
    pub description: String,
    pub image: Image,
    pub points: Vec<String>,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LabeledPoint {
    #[serde(default)]
    pub label: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pillar {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub description: String,
    pub points: Vec<LabeledPoint>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSystem {
    pub intro: Intro,
    pub showcases: Vec<Showcase>,
    pub pillars: Vec<Pillar>,
    pub highlights_heading: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LibertyCity {
    pub intro: Intro,
    pub showcases: Vec<Showcase>,
    pub pillars: Vec<Pillar>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Terrain {
    pub intro: Intro,
    pub systems: Vec<Showcase>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PerformanceSample {
    pub scene: String,
    pub standard: u32,
    pub enhanced: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub intro: Intro,
    pub chart_title: String,
    pub y_axis_label: String,
    pub standard_label: String,
    pub enhanced_label: String,
    pub samples: Vec<PerformanceSample>,
    pub edition_title: String,
    pub edition_subtitle: String,
    pub notes: Vec<LabeledPoint>,
    pub results_heading: String,
    pub results: Vec<LabeledPoint>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PointGroup {
    pub subtitle: String,
    pub points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PhysicsSystem {
    pub title: String,
    pub description: String,
    pub groups: Vec<PointGroup>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Physics {
    pub intro: Intro,
    pub systems: Vec<PhysicsSystem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roleplay {
    pub intro: Intro,
    pub systems: Vec<ModuleCard>,
    pub social_heading: String,
    pub social: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdePev {
    pub intro: Intro,
    pub columns: Vec<Pillar>,
    pub highlights_heading: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NamedText {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceMod {
    pub title: String,
    pub version: String,
    pub description: String,
    pub image: Image,
    pub controls_heading: String,
    pub controls: Vec<KeyBinding>,
    pub features_heading: String,
    pub features: Vec<NamedText>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpdateLog {
    pub version: String,
    pub date: String,
    pub highlights: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Updates {
    pub intro: Intro,
    pub latest_badge: String,
    pub logs: Vec<UpdateLog>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Modifier {
    pub name: String,
    #[serde(default)]
    pub hotkey: Option<String>,
    pub notes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Modifiers {
    pub intro: Intro,
    pub tools: Vec<Modifier>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub title: String,
    pub price: u32,
    pub term: String,
    pub description: String,
    pub features: Vec<String>,
    pub button_text: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Guarantee {
    pub title: String,
    pub text: String,
    pub groups: Vec<PointGroup>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub intro: Intro,
    pub popular_badge: String,
    pub currency: String,
    pub plans: Vec<PricingPlan>,
    pub guarantee: Guarantee,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaymentChannel {
    pub title: String,
    pub image: Image,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Clause {
    pub heading: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Agreement {
    pub title: String,
    pub clauses: Vec<Clause>,
    pub confirmation: Clause,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub heading: String,
    pub channels: Vec<PaymentChannel>,
    pub marketplace_heading: String,
    pub marketplace: String,
    pub instructions: String,
    pub agreement: Agreement,
}

fn require(value: &str, what: impl FnOnce() -> String) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Blank(what()));
    }
    Ok(())
}

impl SiteContent {
    /// Parses and validates the embedded site copy.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let first = self.sections.first().ok_or(ContentError::NoSections)?;
        if first.kind != SectionKind::Hero {
            return Err(ContentError::HeroNotFirst(first.kind));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.kind) {
                return Err(ContentError::DuplicateSection(section.kind));
            }
            require(&section.title, || format!("title of section {}", section.kind))?;
        }

        require(&self.brand.name, || "brand name".to_string())?;
        require(&self.hero.headline, || "hero headline".to_string())?;
        for card in &self.modules.cards {
            require(&card.title, || "module card title".to_string())?;
        }

        let mut popular = 0;
        for plan in &self.pricing.plans {
            require(&plan.title, || "plan title".to_string())?;
            if plan.price == 0 {
                return Err(ContentError::FreePlan(plan.title.clone()));
            }
            if plan.popular {
                popular += 1;
            }
        }
        if popular > 1 {
            return Err(ContentError::SeveralPopularPlans);
        }

        let mut versions = HashSet::new();
        for log in &self.updates.logs {
            require(&log.version, || "update log version".to_string())?;
            if !versions.insert(log.version.as_str()) {
                return Err(ContentError::DuplicateVersion(log.version.clone()));
            }
        }

        if self.performance.samples.is_empty() {
            return Err(ContentError::NoSamples);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteContent {
        SiteContent::load().expect("embedded content should validate")
    }

    fn rejects(content: SiteContent) -> ContentError {
        content.validate().expect_err("content should be rejected")
    }

    #[test]
    fn embedded_content_is_valid() {
        let content = site();
        assert_eq!(content.sections.len(), 14);
        assert_eq!(content.sections[0].kind, SectionKind::Hero);
        let payment = content.sections.iter().find(|s| s.kind == SectionKind::Payment);
        assert_eq!(payment.map(|s| s.title.as_str()), Some("支付与协议"));
        assert_eq!(content.performance.samples.len(), 4);
        assert_eq!(content.pricing.plans.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn section_ids_are_camel_case() {
        let kinds: SectionKind = serde_json::from_str("\"libertyCity\"").unwrap();
        assert_eq!(kinds, SectionKind::LibertyCity);
        assert_eq!(SectionKind::RdePev.id(), "rdePev");
        assert_eq!(SectionKind::Hero.to_string(), "hero");
    }

    #[test]
    fn optional_fields_default() {
        let content = site();
        assert_eq!(content.rde_pev.intro.lead, "");
        assert_eq!(content.terrain.systems[0].accent, Accent::Amber);
        assert!(content.modifiers.tools[1].hotkey.is_none());
        assert_eq!(content.liberty_city.pillars[1].points[0].label, "");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{\"brand\": 1}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn hero_must_come_first() {
        let mut content = site();
        content.sections.swap(0, 1);
        assert!(matches!(
            rejects(content),
            ContentError::HeroNotFirst(SectionKind::Modules)
        ));
    }

    #[test]
    fn empty_navigation_is_rejected() {
        let mut content = site();
        content.sections.clear();
        assert!(matches!(rejects(content), ContentError::NoSections));
    }

    #[test]
    fn duplicate_sections_are_rejected() {
        let mut content = site();
        let pricing = content.sections[12].clone();
        content.sections.push(pricing);
        assert!(matches!(
            rejects(content),
            ContentError::DuplicateSection(SectionKind::Pricing)
        ));
    }

    #[test]
    fn blank_titles_are_rejected() {
        let mut content = site();
        content.sections[3].title = "  ".to_string();
        match rejects(content) {
            ContentError::Blank(what) => assert!(what.contains("libertyCity")),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn plans_need_a_price() {
        let mut content = site();
        content.pricing.plans[0].price = 0;
        assert!(matches!(rejects(content), ContentError::FreePlan(title) if title == "买断版"));
    }

    #[test]
    fn only_one_plan_may_be_popular() {
        let mut content = site();
        for plan in &mut content.pricing.plans {
            plan.popular = true;
        }
        assert!(matches!(rejects(content), ContentError::SeveralPopularPlans));
    }

    #[test]
    fn update_versions_are_unique() {
        let mut content = site();
        let again = content.updates.logs[0].clone();
        content.updates.logs.push(again);
        assert!(matches!(rejects(content), ContentError::DuplicateVersion(v) if v == "v1.0.7"));
    }

    #[test]
    fn chart_needs_samples() {
        let mut content = site();
        content.performance.samples.clear();
        assert!(matches!(rejects(content), ContentError::NoSamples));
    }
}
