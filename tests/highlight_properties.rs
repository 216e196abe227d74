//! End-to-end highlighting scenarios and property tests.

use crisis_xai_core::{ExplanationPair, HighlightConfig, Highlighter, Segment};
use proptest::prelude::*;
use rstest::rstest;

fn pairs(raw: &[(&str, f64)]) -> Vec<ExplanationPair> {
    raw.iter().map(|&(t, s)| ExplanationPair::new(t, s)).collect()
}

fn joined(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

fn highlighted(segments: &[Segment]) -> Vec<(&str, f64)> {
    segments
        .iter()
        .filter(|s| s.color != "#000000")
        .map(|s| (s.text.as_str(), s.score))
        .collect()
}

#[rstest]
#[case::need_water_now(
    "Need water now",
    &[("need", 0.2), ("water", 0.9), ("now", 0.1)],
    &["Need", " ", "water", " ", "now"]
)]
#[case::special_only("Flood warning", &[("[CLS]", 0.4), ("[SEP]", 0.8)], &["Flood warning"])]
#[case::empty_explanation("Flood warning", &[], &["Flood warning"])]
#[case::subword_merge(
    "flood hits city",
    &[("[CLS]", 0.0), ("flo", 0.3), ("##od", 0.7), ("[SEP]", 0.0)],
    &["flood", " hits city"]
)]
#[case::no_partial_match("category five storm", &[("cat", 0.9), ("storm", 0.1)], &["category five ", "storm"])]
fn test_scenarios(#[case] text: &str, #[case] explanation: &[(&str, f64)], #[case] expected: &[&str]) {
    let segments = Highlighter::default().highlight(text, &pairs(explanation)).unwrap();
    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, expected);
    assert_eq!(joined(&segments), text);
}

#[test]
fn test_scenario_a_scores() {
    let segments = Highlighter::default()
        .highlight("Need water now", &pairs(&[("need", 0.2), ("water", 0.9), ("now", 0.1)]))
        .unwrap();
    let hl = highlighted(&segments);
    assert_eq!(hl.len(), 3);
    assert!((hl[0].1 - 0.125).abs() < 1e-9);
    assert_eq!(hl[1], ("water", 1.0));
    assert_eq!(hl[2].0, "now");
    assert_eq!(hl[2].1, 0.0);
}

#[test]
fn test_scenario_b_special_only_is_plain() {
    let segments = Highlighter::default()
        .highlight("Flood warning", &pairs(&[("[CLS]", 0.4), ("[SEP]", 0.8)]))
        .unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].score, 0.0);
    assert!(!segments[0].is_highlighted());
}

#[test]
fn test_scenario_c_flood_is_flat_single_word() {
    let segments = Highlighter::default()
        .highlight("flood hits city", &pairs(&[("flo", 0.3), ("##od", 0.7)]))
        .unwrap();
    // a single retained score is a flat distribution
    assert_eq!(segments[0].text, "flood");
    assert_eq!(segments[0].score, 0.5);
}

#[test]
fn test_scenario_d_empty_text() {
    let segments = Highlighter::default()
        .highlight("", &pairs(&[("flood", 0.3)]))
        .unwrap();
    assert!(segments.is_empty());
}

#[test]
fn test_mixed_case_sentinel_stays_plain() {
    let segments = Highlighter::default()
        .highlight("[CLS] help", &pairs(&[("[CLS]", 0.1), ("[Cls]", 0.9), ("help", 0.2)]))
        .unwrap();
    assert!(!segments.iter().any(|s| s.text == "[CLS]" && s.is_highlighted()));
    assert_eq!(highlighted(&segments), vec![("help", 0.5)]);
}

#[test]
fn test_dashboard_palette_from_toml() {
    let cfg = HighlightConfig::from_toml_str("max_color = \"#FF6B6B\"").unwrap();
    let hl = Highlighter::new(cfg).unwrap();
    let segments = hl
        .highlight("roads blocked", &pairs(&[("roads", 1.0), ("blocked", 0.0)]))
        .unwrap();
    assert_eq!(segments[0].color, "#ff6b6b");
    assert_eq!(segments[2].color, "#ffffff");
}

#[test]
fn test_segments_serialize() {
    let segments = Highlighter::default()
        .highlight("help", &pairs(&[("help", 1.0)]))
        .unwrap();
    let json = serde_json::to_value(&segments).unwrap();
    assert_eq!(json[0]["text"], "help");
    assert_eq!(json[0]["score"], 0.5);
}

const WORDS: &[&str] = &[
    "flood", "water", "help", "need", "fire", "road", "city", "rescue", "[CLS]", "[SEP]", "[PAD]",
];

const MIXED_CASE_SENTINELS: &[&str] = &["[Cls]", "[sep]", "[PaD]", " [CLS] "];

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(WORDS).prop_map(str::to_string),
        1 => proptest::sample::select(WORDS).prop_map(|w| format!("##{}", w.trim_matches(['[', ']']).to_lowercase())),
        1 => "[a-zA-Zé]{1,6}",
        1 => proptest::sample::select(MIXED_CASE_SENTINELS).prop_map(str::to_string),
    ]
}

fn explanation() -> impl Strategy<Value = Vec<ExplanationPair>> {
    proptest::collection::vec((token(), -10.0f64..10.0), 0..12)
        .prop_map(|v| v.into_iter().map(ExplanationPair::from).collect())
}

fn tweet() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        3 => proptest::sample::select(WORDS).prop_map(str::to_string),
        2 => "[ ,.!#@\\-]{1,3}",
        1 => "[A-Za-zÜöİ0-9]{1,8}",
    ];
    proptest::collection::vec(piece, 0..16).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn prop_lossless_partition(text in tweet(), exp in explanation()) {
        let segments = Highlighter::default().highlight(&text, &exp).unwrap();
        prop_assert_eq!(joined(&segments), text.clone());
        if text.is_empty() {
            prop_assert!(segments.is_empty());
        }
    }

    #[test]
    fn prop_scores_bounded(text in tweet(), exp in explanation()) {
        for seg in Highlighter::default().highlight(&text, &exp).unwrap() {
            prop_assert!((0.0..=1.0).contains(&seg.score));
        }
    }

    #[test]
    fn prop_special_tokens_never_highlighted(text in tweet(), exp in explanation()) {
        let hl = Highlighter::default();
        for seg in hl.highlight(&text, &exp).unwrap() {
            let styled = seg.color != "#000000";
            prop_assert!(!(styled && hl.special_tokens().contains(&seg.text)));
            if styled {
                prop_assert!(!["[CLS]", "[SEP]", "[PAD]", "[UNK]"].contains(&seg.text.as_str()));
            }
        }
    }

    #[test]
    fn prop_flat_scores_are_half(text in tweet(), exp in explanation(), flat in -5.0f64..5.0) {
        let exp: Vec<ExplanationPair> = exp
            .into_iter()
            .map(|p| ExplanationPair::new(p.token, flat))
            .collect();
        for seg in Highlighter::default().highlight(&text, &exp).unwrap() {
            if seg.color != "#000000" {
                prop_assert_eq!(seg.score, 0.5);
            }
        }
    }

    #[test]
    fn prop_idempotent(text in tweet(), exp in explanation()) {
        let hl = Highlighter::default();
        prop_assert_eq!(hl.highlight(&text, &exp).unwrap(), hl.highlight(&text, &exp).unwrap());
    }
}
