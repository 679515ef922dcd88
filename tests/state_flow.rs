//! Integration tests for the content catalog and presentation state
//!
//! These drive the public library API the way the GUI does: build the
//! builtin catalog, mutate a `PageState`, and resolve selections back
//! against the catalog.

use fwlearn::core::catalog::{CatalogEntry, ContentCatalog};
use fwlearn::core::content;
use fwlearn::core::i18n::Locale;
use fwlearn::core::state::{PageState, Section};

fn catalog_and_state() -> (ContentCatalog, PageState) {
    let catalog = content::builtin();
    let state = PageState::new(&catalog);
    (catalog, state)
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = content::builtin();
    catalog.validate().unwrap();
    assert_eq!(catalog.firewall_types().len(), 4);
    assert_eq!(catalog.security_levels().len(), 5);
    assert_eq!(catalog.error_scenarios().len(), 6);
}

#[test]
fn initial_state_resolves_first_firewall_type() {
    let (catalog, state) = catalog_and_state();
    assert_eq!(state.section, Section::Explainer);
    match state.resolved_entry(&catalog) {
        Some(CatalogEntry::FirewallType(ft)) => {
            assert_eq!(ft.id, catalog.firewall_types()[0].id);
        }
        other => panic!("expected a firewall type, got {other:?}"),
    }
}

#[test]
fn pagination_wraps_in_both_directions() {
    let (catalog, mut state) = catalog_and_state();
    let count = catalog.firewall_types().len();

    // previous from the first entry lands on the last
    state.explainer.previous();
    assert_eq!(state.explainer.index(), count - 1);

    // next from the last wraps back to the first
    state.explainer.next();
    assert_eq!(state.explainer.index(), 0);

    // a full forward cycle returns to the start
    for _ in 0..count {
        state.explainer.next();
    }
    assert_eq!(state.explainer.index(), 0);
}

#[test]
fn level_lookup_uses_declared_level_not_position() {
    let (catalog, mut state) = catalog_and_state();
    state.section = Section::Slider;

    for wanted in 1..=5u8 {
        state.slider.set_level(wanted);
        match state.resolved_entry(&catalog) {
            Some(CatalogEntry::SecurityLevel(sl)) => assert_eq!(sl.level, wanted),
            other => panic!("expected a security level, got {other:?}"),
        }
    }
}

#[test]
fn out_of_range_level_is_ignored() {
    let (_, mut state) = catalog_and_state();
    assert_eq!(state.slider.level(), 3);
    state.slider.set_level(0);
    assert_eq!(state.slider.level(), 3);
    state.slider.set_level(6);
    assert_eq!(state.slider.level(), 3);
}

#[test]
fn unknown_scenario_selection_resolves_to_none() {
    let (catalog, mut state) = catalog_and_state();
    state.section = Section::Errors;

    state.errors.select("no-such-scenario");
    assert!(state.resolved_entry(&catalog).is_none());

    // selecting a known id recovers
    state.errors.select("default-deny");
    match state.resolved_entry(&catalog) {
        Some(CatalogEntry::ErrorScenario(es)) => assert_eq!(es.id, "default-deny"),
        other => panic!("expected an error scenario, got {other:?}"),
    }
}

#[test]
fn default_scenario_is_selected_at_startup() {
    let (catalog, state) = catalog_and_state();
    assert_eq!(state.errors.selected_id(), catalog.default_scenario_id());
    assert!(catalog.error_scenario(state.errors.selected_id()).is_some());
}

#[test]
fn locale_toggle_changes_resolved_strings() {
    let catalog = content::builtin();
    let first = &catalog.firewall_types()[0];

    let en = first.name.resolve(Locale::En);
    let ja = first.name.resolve(Locale::Ja);
    assert_ne!(en, ja);
    assert_eq!(Locale::En.toggled(), Locale::Ja);
    assert_eq!(Locale::Ja.toggled(), Locale::En);
}

#[test]
fn untranslated_fields_fall_back_to_english() {
    let catalog = content::builtin();
    let scenario = catalog
        .error_scenario("logging-disabled")
        .unwrap();
    assert_eq!(
        scenario.title.resolve(Locale::Ja),
        scenario.title.resolve(Locale::En)
    );
}

#[test]
fn missing_translations_are_reported() {
    let catalog = content::builtin();
    let gaps = catalog.missing_translations();
    assert!(!gaps.is_empty());

    let gap_ids: Vec<&str> = gaps.iter().map(|g| g.entry_id.as_str()).collect();
    assert!(gap_ids.contains(&"logging-disabled"));
    assert!(gap_ids.contains(&"outdated-rules"));
    assert!(gap_ids.contains(&"no-backup"));
    // the fully translated scenarios never appear
    assert!(!gap_ids.contains(&"misconfigured-rules"));
}

#[test]
fn export_entries_carry_kind_tags() {
    let catalog = content::builtin();
    let json = serde_json::to_value(catalog.entries()).unwrap();
    let entries = json.as_array().unwrap();

    assert_eq!(
        entries.len(),
        catalog.firewall_types().len()
            + catalog.security_levels().len()
            + catalog.error_scenarios().len()
    );
    assert_eq!(entries[0]["kind"], "firewallType");
    let kinds: Vec<&str> = entries
        .iter()
        .map(|e| e["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"securityLevel"));
    assert!(kinds.contains(&"errorScenario"));
}

#[test]
fn outline_resolves_for_requested_locale() {
    let catalog = content::builtin();

    let en = content::outline(&catalog, Locale::En);
    assert!(en.contains("Firewall types:"));
    assert!(en.contains("Packet Filtering Firewall"));
    assert!(en.contains("Minimal Security"));

    let ja = content::outline(&catalog, Locale::Ja);
    assert!(ja.contains("ファイアウォールの種類:"));
    assert!(ja.contains("パケットフィルタリングファイアウォール"));
    assert!(!ja.contains("Packet Filtering Firewall"));
}

#[test]
fn outline_lists_every_entry() {
    let catalog = content::builtin();
    let en = content::outline(&catalog, Locale::En);

    for ft in catalog.firewall_types() {
        assert!(en.contains(ft.name.resolve(Locale::En)));
    }
    for es in catalog.error_scenarios() {
        assert!(en.contains(es.id));
        assert!(en.contains(es.severity.badge()));
    }
    // English-only scenarios stay readable in the Japanese outline.
    let ja = content::outline(&catalog, Locale::Ja);
    assert!(ja.contains("Insufficient Logging"));
}

#[test]
fn translation_gaps_do_not_fail_validation() {
    let catalog = content::builtin();
    assert!(catalog.validate().is_ok());
    assert!(!catalog.missing_translations().is_empty());
}

#[test]
fn section_switch_preserves_selections() {
    let (catalog, mut state) = catalog_and_state();

    state.explainer.next();
    state.slider.set_level(5);
    state.errors.select("port-scanning");

    state.section = Section::Slider;
    state.section = Section::Explainer;

    assert_eq!(state.explainer.index(), 1);
    assert_eq!(state.slider.level(), 5);
    assert_eq!(state.errors.selected_id(), "port-scanning");
    assert!(matches!(
        state.resolved_entry(&catalog),
        Some(CatalogEntry::FirewallType(_))
    ));
}
