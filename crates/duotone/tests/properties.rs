use std::cell::Cell;

use duotone::{
    compute_scoped_duotone_selectors, duotone_styles, preset_reference,
    resolve_colors_from_preset, resolve_preset_from_colors, DuotonePreset, DuotoneStyle,
    FilterRenderer, PresetResolver,
};
use proptest::prelude::*;
use serde_json::json;

fn slug() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

fn color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

fn preset() -> impl Strategy<Value = DuotonePreset> {
    (slug(), prop::collection::vec(color(), 2..4))
        .prop_map(|(slug, colors)| DuotonePreset::new(slug, colors))
}

/// Palettes with unique slugs, so lookups by slug are unambiguous.
fn palette() -> impl Strategy<Value = Vec<DuotonePreset>> {
    prop::collection::vec(preset(), 1..8).prop_map(|mut presets| {
        let mut seen = std::collections::HashSet::new();
        presets.retain(|p| seen.insert(p.slug.clone()));
        presets
    })
}

proptest! {
    #[test]
    fn reference_resolves_to_preset_colors(palette in palette(), index in any::<prop::sample::Index>()) {
        let preset = &palette[index.index(palette.len())];
        let reference = format!("var:preset|duotone|{}", preset.slug);
        prop_assert_eq!(
            resolve_colors_from_preset(Some(reference.as_str()), &palette),
            Some(preset.colors.as_slice())
        );
    }

    #[test]
    fn unmatched_reference_resolves_to_none(palette in palette(), other in "[A-Z]{1,8}") {
        // Slugs are lowercase, so an uppercase slug never matches.
        let reference = preset_reference(&other);
        prop_assert_eq!(resolve_colors_from_preset(Some(reference.as_str()), &palette), None);
        prop_assert_eq!(resolve_colors_from_preset(Some(other.as_str()), &palette), None);
    }

    #[test]
    fn preset_colors_resolve_back_to_a_matching_reference(
        palette in palette(),
        index in any::<prop::sample::Index>(),
    ) {
        let preset = &palette[index.index(palette.len())];
        let reference = resolve_preset_from_colors(&preset.colors, &palette)
            .expect("preset colors always match some preset");
        // The first preset with these colors wins, which may be an earlier one.
        let winner = resolve_colors_from_preset(Some(reference.as_str()), &palette).unwrap();
        prop_assert!(winner.iter().zip(&preset.colors).all(|(a, b)| a == b));
    }

    #[test]
    fn two_color_preset_matches_its_reference(slug in slug(), dark in color(), light in color()) {
        let palette = vec![DuotonePreset::new(slug.clone(), [dark.clone(), light.clone()])];
        prop_assert_eq!(
            resolve_preset_from_colors(&[dark, light], &palette),
            Some(format!("var:preset|duotone|{}", slug))
        );
    }

    #[test]
    fn non_sequence_values_never_match(palette in palette(), n in any::<i64>(), s in "[a-z#0-9]{0,10}") {
        for value in [json!(n), json!(s), json!(null), json!({"colors": s})] {
            let matched = DuotoneStyle::from_value(&value)
                .and_then(|style| style.preset_reference(palette.as_slice()));
            prop_assert_eq!(matched, None);
        }
    }

    #[test]
    fn scoped_selectors_are_scope_major(
        scopes in prop::collection::vec("[a-z][a-z0-9-]{0,6}", 1..4),
        selectors in prop::collection::vec("[a-z]{1,5}", 1..4),
    ) {
        let scope_list = scopes.iter().map(|s| format!(".{}", s)).collect::<Vec<_>>().join(",");
        let scoped = compute_scoped_duotone_selectors(&scope_list, &selectors.join(","));

        let expected: Vec<String> = scopes
            .iter()
            .flat_map(|scope| {
                selectors
                    .iter()
                    .map(move |sel| format!(".editor-styles-wrapper .{}{}", scope, sel))
            })
            .collect();
        prop_assert_eq!(scoped, expected.join(","));
    }
}

#[test]
fn test_single_scope_single_selector() {
    assert_eq!(
        compute_scoped_duotone_selectors(".wp-duotone-1", "filter.duotone-sel"),
        ".editor-styles-wrapper .wp-duotone-1filter.duotone-sel"
    );
}

#[test]
fn test_two_scopes_two_selectors() {
    assert_eq!(
        compute_scoped_duotone_selectors(".wp-duotone-1,.wp-duotone-2", "a,b"),
        ".editor-styles-wrapper .wp-duotone-1a,.editor-styles-wrapper .wp-duotone-1b,\
.editor-styles-wrapper .wp-duotone-2a,.editor-styles-wrapper .wp-duotone-2b"
    );
}

struct Spy<'a> {
    palette: &'a [DuotonePreset],
    preset_lookups: Cell<usize>,
}

impl PresetResolver for Spy<'_> {
    fn colors_for_preset(&self, reference: Option<&str>) -> Option<&[String]> {
        self.preset_lookups.set(self.preset_lookups.get() + 1);
        resolve_colors_from_preset(reference, self.palette)
    }

    fn preset_for_colors(&self, colors: &[String]) -> Option<String> {
        resolve_preset_from_colors(colors, self.palette)
    }
}

#[test]
fn test_unset_never_reaches_preset_lookup() {
    let palette = [DuotonePreset::new("unset", ["#000", "#fff"])];
    let spy = Spy {
        palette: &palette,
        preset_lookups: Cell::new(0),
    };
    let renderer = FilterRenderer::shared().unwrap();

    let style = DuotoneStyle::from_value(&json!("unset")).unwrap();
    let markup = duotone_styles(renderer, "wp-duotone-1", ".x", &style, &spy)
        .unwrap()
        .unwrap();
    assert_eq!(markup.css, ".x{filter:none;}");
    assert_eq!(style.resolved_colors(&spy), None);
    assert_eq!(spy.preset_lookups.get(), 0);

    let reference = DuotoneStyle::from("var:preset|duotone|unset");
    assert!(duotone_styles(renderer, "wp-duotone-1", ".x", &reference, &spy)
        .unwrap()
        .is_some());
    assert_eq!(spy.preset_lookups.get(), 1);
}
