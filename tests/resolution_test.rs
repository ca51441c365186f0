//! Integration tests for gender agreement and template resolution.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use tavnit::gender::{GenderEngine, GenderedEntry, Lexicon, LexiconRegistry};
use tavnit::template::{variables, ResolutionContext, TemplateResolver};
use tavnit::{resolve, substitute, Gender};

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Lexicon coverage
// ============================================================================

#[test]
fn test_every_entry_resolves_to_its_form() {
    let lexicon = Lexicon::hebrew();
    let engine = GenderEngine::hebrew();

    for (lemma, entry) in lexicon.iter() {
        for gender in Gender::ALL {
            assert_eq!(
                engine.resolve(lemma, gender),
                entry.form(gender),
                "lemma '{}' for {}",
                lemma,
                gender
            );
        }
    }
}

#[test]
fn test_organization_falls_back_to_plural() {
    let lexicon = Lexicon::empty()
        .with_entry("שוכר", GenderedEntry::new("שוכר", "שוכרת", "שוכרים"))
        .unwrap();
    let engine = GenderEngine::new(Arc::new(lexicon));

    assert_eq!(engine.resolve("השוכר", Gender::Organization), "השוכרים");
}

#[test]
fn test_lemma_never_matches_inside_longer_word() {
    let lexicon = Lexicon::hebrew();
    let engine = GenderEngine::hebrew();

    for (lemma, _) in lexicon.iter() {
        let adversarial = format!("ז{}ז", lemma);
        for gender in [Gender::Female, Gender::Plural] {
            assert_eq!(
                engine.resolve(&adversarial, gender),
                adversarial,
                "lemma '{}' matched inside '{}'",
                lemma,
                adversarial
            );
        }
    }
}

#[test]
fn test_short_lemma_word_boundaries() {
    // "הואיל" starts with "הוא"; punctuation still delimits words
    assert_eq!(resolve("הואיל והוא חתם", Gender::Female), "הואיל והוא חתמה");
    assert_eq!(resolve("(הוא), חתם.", Gender::Female), "(היא), חתמה.");
}

#[test]
fn test_single_pass_no_cascade() {
    // the female form of "אלף" is itself a key
    let lexicon = Lexicon::empty()
        .with_entries([
            ("אלף", GenderedEntry::new("אלף", "בית", "אלפים")),
            ("בית", GenderedEntry::new("בית", "גימל", "בתים")),
        ])
        .unwrap();
    let engine = GenderEngine::new(Arc::new(lexicon));

    assert_eq!(engine.resolve("אלף", Gender::Female), "בית");
    assert_eq!(engine.resolve("אלף בית", Gender::Female), "בית גימל");
}

#[test]
fn test_male_resolution_is_idempotent() {
    let text = "המנוח הוא היורש והמצווה ציווה";
    let once = resolve(text, Gender::Male);
    assert_eq!(resolve(&once, Gender::Male), once);
}

#[test]
fn test_longest_match_wins() {
    let lexicon = Lexicon::empty()
        .with_entries([
            ("בא", GenderedEntry::new("בא", "באה", "באים")),
            ("בא כוח", GenderedEntry::new("בא כוח", "באת כוח", "באי כוח")),
        ])
        .unwrap();
    let engine = GenderEngine::new(Arc::new(lexicon));

    assert_eq!(engine.resolve("בא כוח המנוח", Gender::Female), "באת כוח המנוח");
    assert_eq!(engine.resolve("בא לכאן", Gender::Female), "באה לכאן");
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_deceased_scenario() {
    assert_eq!(
        resolve("המנוח עשה צוואה", Gender::Female),
        "המנוחה עשתה צוואה"
    );
}

#[test]
fn test_substitute_scenarios() {
    assert_eq!(
        substitute("שלום {{name}}", &values(&[("name", "דוד")])),
        "שלום דוד"
    );
    assert_eq!(substitute("שלום {{name}}", &HashMap::new()), "שלום {{name}}");
}

#[test]
fn test_substitute_repeated_name() {
    assert_eq!(
        substitute("{{a}} ו{{a}}", &values(&[("a", "x")])),
        "x וx"
    );
}

#[test]
fn test_substituted_value_not_rescanned() {
    let result = substitute("{{a}}", &values(&[("a", "{{b}}"), ("b", "never")]));
    assert_eq!(result, "{{b}}");
}

#[test]
fn test_variable_round_trip_leaves_no_braces() {
    let template = "{{first}} {{last}}, ת.ז. {{id_number}}, {{first}}";
    let map: HashMap<String, String> = variables(template)
        .into_iter()
        .map(|name| {
            let value = format!("ערך-{}", name);
            (name, value)
        })
        .collect();

    let resolved = TemplateResolver::default()
        .resolve(template, &ResolutionContext::new(Gender::Plural).with_values(map));
    assert!(!resolved.contains("{{"), "{}", resolved);
}

// ============================================================================
// Overrides and inline forms
// ============================================================================

#[test]
fn test_overrides_per_slot() {
    let engine = GenderEngine::hebrew();
    let overrides = HashMap::from([
        ("heir1".to_string(), Gender::Female),
        ("heir2".to_string(), Gender::Male),
    ]);

    let text = "{{@heir1:היורש}} ו{{@heir2:היורש}} {{@heir3:היורש}} המנוח";
    assert_eq!(
        engine.resolve_with_overrides(text, &overrides),
        "היורשת והיורש {{@heir3:היורש}} המנוח"
    );
}

#[test]
fn test_resolver_mixed_document_text() {
    let ctx = ResolutionContext::new(Gender::Female)
        .with_value("name", "רחל")
        .with_override("agent", Gender::Plural);
    let text = "המצווה {{name}} {{gender:מצהיר|מצהירה|מצהירים}} כי {{@agent:מיופה כוח}} יפעלו";

    assert_eq!(
        TemplateResolver::default().resolve(text, &ctx),
        "המצווה רחל מצהירה כי מיופי כוח יפעלו"
    );
}

#[test]
fn test_values_not_gender_rewritten() {
    let ctx = ResolutionContext::new(Gender::Female).with_value("name", "המנוח");
    assert_eq!(
        TemplateResolver::default().resolve("המנוח {{name}}", &ctx),
        "המנוחה המנוח"
    );
}

#[test]
fn test_inline_suffix_completes_word() {
    let resolver = TemplateResolver::default();
    let text = "המנוח{{gender:|ה|ים|ה}} עשה צוואה";
    let expected = [
        (Gender::Male, "המנוח עשה צוואה"),
        (Gender::Female, "המנוחה עשתה צוואה"),
        (Gender::Plural, "המנוחים עשו צוואה"),
        (Gender::Organization, "המנוחה עשתה צוואה"),
    ];

    for (gender, want) in expected {
        assert_eq!(resolver.resolve(text, &ResolutionContext::new(gender)), want);
    }
}

#[test]
fn test_lemma_glued_to_variable_not_matched() {
    let resolver = TemplateResolver::default();
    let expected = [
        (Gender::Male, "לוש הוא / שלו"),
        (Gender::Female, "לוש היא / שלו"),
        (Gender::Plural, "לוש הם / שלו"),
        (Gender::Organization, "לוש היא / שלו"),
    ];

    for (gender, want) in expected {
        let ctx = ResolutionContext::new(gender).with_value("p", "ש");
        assert_eq!(resolver.resolve("לו{{p}} הוא / {{p}}לו", &ctx), want);
    }
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_snapshot_isolated_from_writes() {
    let registry = Arc::new(LexiconRegistry::hebrew());
    let before = TemplateResolver::from_registry(&registry);

    registry
        .add_entry("שומר", GenderedEntry::new("שומר", "שומרת", "שומרים"))
        .unwrap();
    let after = TemplateResolver::from_registry(&registry);

    let ctx = ResolutionContext::new(Gender::Female);
    assert_eq!(before.resolve("השומר", &ctx), "השומר");
    assert_eq!(after.resolve("השומר", &ctx), "השומרת");
}

#[test]
fn test_registry_concurrent_readers_and_writer() {
    let registry = Arc::new(LexiconRegistry::hebrew());
    let base = registry.version();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                if i % 2 == 0 {
                    let lemma = format!("מילה{}", i);
                    let entry = GenderedEntry::new(lemma.clone(), format!("{}ת", lemma), format!("{}ים", lemma));
                    registry.add_entry(lemma, entry).unwrap();
                } else {
                    let engine = GenderEngine::from_registry(&registry);
                    assert_eq!(engine.resolve("המנוח", Gender::Female), "המנוחה");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.version(), base + 4);
}
