//! Content catalog data structures and validation
//!
//! The catalog is the immutable, bilingual teaching content behind the
//! three views: firewall type cards, security level profiles, and error
//! scenarios. It is constructed once at startup from the builtin data in
//! [`crate::core::content`], validated, and only ever read after that.
//!
//! # Lookups
//!
//! Security levels are found by equality on their declared `level` field,
//! never by array position, so the data could be reordered or sparse
//! without corrupting the mapping. Error scenarios are found by string id.
//! Both lookups surface "not found" as `None`; the renderer omits the
//! detail panel rather than failing.

use serde::Serialize;

use crate::core::error::{Error, Result};
use crate::core::i18n::{Locale, LocalizedList, LocalizedText};

/// Lowest selectable security level
pub const MIN_LEVEL: u8 = 1;
/// Highest selectable security level
pub const MAX_LEVEL: u8 = 5;

/// How badly a misconfiguration can hurt
///
/// Locale-independent; the badge label is rendered per-locale by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Uppercase badge text for UI rendering
    pub const fn badge(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// One firewall type card in the Explainer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FirewallType {
    pub id: &'static str,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Emoji shown above the card title
    pub glyph: &'static str,
    pub pros: LocalizedList,
    pub cons: LocalizedList,
}

/// One security level profile for the Slider
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SecurityLevel {
    /// Declared level, matched by equality against the selector state
    pub level: u8,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub allowed_traffic: LocalizedList,
    pub blocked_traffic: LocalizedList,
    pub performance: LocalizedText,
    pub protection: LocalizedText,
}

/// One misconfiguration entry in the error simulator
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorScenario {
    pub id: &'static str,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub severity: Severity,
    pub category: LocalizedText,
    pub symptoms: LocalizedList,
    pub consequences: LocalizedList,
    pub solutions: LocalizedList,
    /// Literal iptables snippet shown behind the show/hide toggle
    pub code_example: &'static str,
}

/// A resolved catalog entry handed to the renderer
///
/// Tagged so lookup and rendering code handles each shape exhaustively
/// instead of duck-typing on shared field names.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogEntry<'a> {
    FirewallType(&'a FirewallType),
    SecurityLevel(&'a SecurityLevel),
    ErrorScenario(&'a ErrorScenario),
}

/// A field that lacks a Japanese translation
///
/// The builtin data has a handful of these (a data-completeness gap in the
/// source material, surfaced by `fwlearn check`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTranslation {
    pub entry_id: String,
    pub field: &'static str,
}

/// The full immutable teaching catalog
///
/// Entry order is insertion order and is significant: it drives cyclic
/// pagination in the Explainer and the card grid in the error simulator.
#[derive(Debug, Clone, Serialize)]
pub struct ContentCatalog {
    firewall_types: Vec<FirewallType>,
    security_levels: Vec<SecurityLevel>,
    error_scenarios: Vec<ErrorScenario>,
    #[serde(skip)]
    default_scenario_id: &'static str,
}

impl ContentCatalog {
    pub fn new(
        firewall_types: Vec<FirewallType>,
        security_levels: Vec<SecurityLevel>,
        error_scenarios: Vec<ErrorScenario>,
        default_scenario_id: &'static str,
    ) -> Self {
        Self {
            firewall_types,
            security_levels,
            error_scenarios,
            default_scenario_id,
        }
    }

    pub fn firewall_types(&self) -> &[FirewallType] {
        &self.firewall_types
    }

    pub fn security_levels(&self) -> &[SecurityLevel] {
        &self.security_levels
    }

    pub fn error_scenarios(&self) -> &[ErrorScenario] {
        &self.error_scenarios
    }

    /// Initial selection for the error simulator
    pub fn default_scenario_id(&self) -> &'static str {
        self.default_scenario_id
    }

    /// Every entry as a tagged union, in catalog order
    ///
    /// Serializing this is the export format of `fwlearn export`.
    pub fn entries(&self) -> Vec<CatalogEntry<'_>> {
        self.firewall_types
            .iter()
            .map(CatalogEntry::FirewallType)
            .chain(self.security_levels.iter().map(CatalogEntry::SecurityLevel))
            .chain(self.error_scenarios.iter().map(CatalogEntry::ErrorScenario))
            .collect()
    }

    /// Firewall type at a paginator index
    pub fn firewall_type(&self, index: usize) -> Option<&FirewallType> {
        self.firewall_types.get(index)
    }

    /// Equality search on the declared `level` field
    pub fn security_level(&self, level: u8) -> Option<&SecurityLevel> {
        self.security_levels.iter().find(|sl| sl.level == level)
    }

    /// Scenario lookup by id; unknown ids resolve to `None`
    pub fn error_scenario(&self, id: &str) -> Option<&ErrorScenario> {
        self.error_scenarios.iter().find(|es| es.id == id)
    }

    /// Checks the catalog invariants: unique ids, a gapless 1-5 level
    /// ladder, and a resolvable default scenario.
    ///
    /// Returns the first violation found. The builtin catalog is expected
    /// to always pass; `fwlearn check` runs this against the shipped data.
    pub fn validate(&self) -> Result<()> {
        let mut seen_type_ids: Vec<&str> = Vec::new();
        for ft in &self.firewall_types {
            if seen_type_ids.contains(&ft.id) {
                return Err(Error::DuplicateId {
                    catalog: "firewall_types",
                    id: ft.id.to_string(),
                });
            }
            seen_type_ids.push(ft.id);
        }

        let mut seen_levels: Vec<u8> = Vec::new();
        for sl in &self.security_levels {
            if sl.level < MIN_LEVEL || sl.level > MAX_LEVEL {
                return Err(Error::LevelOutOfRange(sl.level));
            }
            if seen_levels.contains(&sl.level) {
                return Err(Error::DuplicateLevel(sl.level));
            }
            seen_levels.push(sl.level);
        }
        for level in MIN_LEVEL..=MAX_LEVEL {
            if !seen_levels.contains(&level) {
                return Err(Error::LevelGap(level));
            }
        }

        let mut seen_scenario_ids: Vec<&str> = Vec::new();
        for es in &self.error_scenarios {
            if seen_scenario_ids.contains(&es.id) {
                return Err(Error::DuplicateId {
                    catalog: "error_scenarios",
                    id: es.id.to_string(),
                });
            }
            seen_scenario_ids.push(es.id);
        }

        if self.error_scenario(self.default_scenario_id).is_none() {
            return Err(Error::UnknownDefaultScenario(
                self.default_scenario_id.to_string(),
            ));
        }

        Ok(())
    }

    /// Reports every localized field that falls back to English
    ///
    /// These are warnings, not validation failures: resolution handles the
    /// fallback, but the gap is worth flagging to content authors.
    pub fn missing_translations(&self) -> Vec<MissingTranslation> {
        let mut gaps = Vec::new();

        let mut check_text = |id: &str, field: &'static str, text: &LocalizedText| {
            if !text.has(Locale::Ja) {
                gaps.push(MissingTranslation {
                    entry_id: id.to_string(),
                    field,
                });
            }
        };

        for ft in &self.firewall_types {
            check_text(ft.id, "name", &ft.name);
            check_text(ft.id, "description", &ft.description);
        }
        for sl in &self.security_levels {
            let id = format!("level-{}", sl.level);
            check_text(&id, "name", &sl.name);
            check_text(&id, "description", &sl.description);
        }
        for es in &self.error_scenarios {
            check_text(es.id, "title", &es.title);
            check_text(es.id, "description", &es.description);
            check_text(es.id, "category", &es.category);
        }

        let mut check_list = |id: &str, field: &'static str, list: &LocalizedList| {
            if !list.has(Locale::Ja) {
                gaps.push(MissingTranslation {
                    entry_id: id.to_string(),
                    field,
                });
            }
        };

        for ft in &self.firewall_types {
            check_list(ft.id, "pros", &ft.pros);
            check_list(ft.id, "cons", &ft.cons);
        }
        for sl in &self.security_levels {
            let id = format!("level-{}", sl.level);
            check_list(&id, "allowed_traffic", &sl.allowed_traffic);
            check_list(&id, "blocked_traffic", &sl.blocked_traffic);
        }
        for es in &self.error_scenarios {
            check_list(es.id, "symptoms", &es.symptoms);
            check_list(es.id, "consequences", &es.consequences);
            check_list(es.id, "solutions", &es.solutions);
        }

        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = content::builtin();
        catalog.validate().expect("builtin catalog must be valid");
    }

    #[test]
    fn test_level_lookup_is_by_field_not_position() {
        let catalog = content::builtin();
        let mut shuffled = catalog.security_levels().to_vec();
        shuffled.reverse();
        let reordered = ContentCatalog::new(
            catalog.firewall_types().to_vec(),
            shuffled,
            catalog.error_scenarios().to_vec(),
            catalog.default_scenario_id(),
        );
        for level in MIN_LEVEL..=MAX_LEVEL {
            assert_eq!(reordered.security_level(level).map(|sl| sl.level), Some(level));
        }
    }

    #[test]
    fn test_unknown_scenario_resolves_to_none() {
        let catalog = content::builtin();
        assert!(catalog.error_scenario("nonexistent-id").is_none());
    }

    #[test]
    fn test_duplicate_level_rejected() {
        let catalog = content::builtin();
        let mut levels = catalog.security_levels().to_vec();
        levels[1].level = 1;
        let broken = ContentCatalog::new(
            catalog.firewall_types().to_vec(),
            levels,
            catalog.error_scenarios().to_vec(),
            catalog.default_scenario_id(),
        );
        assert!(matches!(broken.validate(), Err(Error::DuplicateLevel(1))));
    }

    #[test]
    fn test_level_gap_rejected() {
        let catalog = content::builtin();
        let mut levels = catalog.security_levels().to_vec();
        levels.retain(|sl| sl.level != 4);
        let broken = ContentCatalog::new(
            catalog.firewall_types().to_vec(),
            levels,
            catalog.error_scenarios().to_vec(),
            catalog.default_scenario_id(),
        );
        assert!(matches!(broken.validate(), Err(Error::LevelGap(4))));
    }

    #[test]
    fn test_unknown_default_scenario_rejected() {
        let catalog = content::builtin();
        let broken = ContentCatalog::new(
            catalog.firewall_types().to_vec(),
            catalog.security_levels().to_vec(),
            catalog.error_scenarios().to_vec(),
            "no-such-scenario",
        );
        assert!(matches!(
            broken.validate(),
            Err(Error::UnknownDefaultScenario(_))
        ));
    }

    #[test]
    fn test_missing_translations_flag_english_only_scenarios() {
        let catalog = content::builtin();
        let gaps = catalog.missing_translations();
        // Three scenarios in the source data were never translated.
        for id in ["logging-disabled", "outdated-rules", "no-backup"] {
            assert!(
                gaps.iter().any(|g| g.entry_id == id && g.field == "title"),
                "expected missing title translation for {id}"
            );
        }
        // Fully translated entries must not be flagged.
        assert!(!gaps.iter().any(|g| g.entry_id == "default-deny"));
        assert!(!gaps.iter().any(|g| g.entry_id == "packet-filtering"));
    }
}
