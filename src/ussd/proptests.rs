//! Property-based tests for USSD trail routing
//!
//! These tests verify key invariants hold across all possible dialed trails.

use super::catalog::BundleCatalog;
use super::menu::{route, Action, Step};
use super::screen::Trail;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_menu_token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u32..10).prop_map(|n| n.to_string()),
        1 => "[a-zA-Z0-9]{1,8}",
        1 => Just(String::new()),
    ]
}

fn arb_trail(max_tokens: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_menu_token(), 0..max_tokens).prop_map(|tokens| tokens.join("*"))
}

fn arb_raw_trail() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => arb_trail(6),
        // Anything the gateway could conceivably relay, separators included
        1 => ".*",
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: Routing is total and every screen renders with exactly
    // one session sigil
    #[test]
    fn prop_route_total_and_screens_prefixed(raw in arb_raw_trail()) {
        let catalog = BundleCatalog::standard();
        match route(&Trail::parse(&raw), &catalog) {
            Step::Screen(screen) => {
                prop_assert!(!screen.text().is_empty(), "Blank screen for {:?}", raw);
                let rendered = screen.render();
                let con = rendered.starts_with("CON ");
                let end = rendered.starts_with("END ");
                prop_assert!(con ^ end, "Bad sigil in {:?}", rendered);
                prop_assert_eq!(screen.is_terminal(), end);
            }
            Step::Action(_) => { /* Actions render after execution */ }
        }
    }

    // Invariant 2: Same trail, same step
    #[test]
    fn prop_routing_is_deterministic(raw in arb_raw_trail()) {
        let catalog = BundleCatalog::standard();
        let first = route(&Trail::parse(&raw), &catalog);
        let second = route(&Trail::parse(&raw), &catalog);
        prop_assert_eq!(first, second);
    }

    // Invariant 3: Actions only arise from the two trail shapes that
    // complete a dialog
    #[test]
    fn prop_actions_only_from_expected_trails(raw in arb_raw_trail()) {
        let catalog = BundleCatalog::standard();
        let trail = Trail::parse(&raw);
        if let Step::Action(action) = route(&trail, &catalog) {
            let tokens = trail.tokens();
            match action {
                Action::PurchaseBundle { offer, payer_phone } => {
                    prop_assert_eq!(tokens.len(), 3);
                    prop_assert_eq!(tokens[0].as_str(), "1");
                    let selection = tokens[1].parse::<usize>().unwrap();
                    prop_assert_eq!(catalog.offer(selection), Some(&offer));
                    prop_assert_eq!(payer_phone, tokens[2].clone());
                }
                Action::Register => {
                    prop_assert_eq!(tokens.len(), 2);
                    prop_assert_eq!(tokens[0].as_str(), "2");
                    prop_assert_eq!(tokens[1].as_str(), "1");
                }
            }
        }
    }

    // Invariant 4: Out-of-range bundle selections never act, even with a
    // phone number dialed after them (standard catalog has three offers)
    #[test]
    fn prop_out_of_range_selection_never_acts(
        selection in prop_oneof![
            Just("0".to_string()),
            (4usize..1000).prop_map(|n| n.to_string()),
            "[a-z]{1,5}",
        ],
        phone in "[0-9]{6,12}",
    ) {
        let catalog = BundleCatalog::standard();
        let raw = format!("1*{selection}*{phone}");
        let step = route(&Trail::parse(&raw), &catalog);
        prop_assert!(
            matches!(step, Step::Screen(_)),
            "Selection {:?} produced an action",
            selection
        );
    }

    // Invariant 5: Exit at the top level ignores whatever trails it
    #[test]
    fn prop_exit_swallows_trailing_tokens(tail in arb_trail(4)) {
        let catalog = BundleCatalog::standard();
        let raw = if tail.is_empty() {
            "0".to_string()
        } else {
            format!("0*{tail}")
        };
        let routed = route(&Trail::parse(&raw), &catalog);
        prop_assert_eq!(routed, route(&Trail::parse("0"), &catalog));
    }

    // Invariant 6: No dialog is deeper than three tokens; anything longer
    // always ends the session
    #[test]
    fn prop_deep_trails_always_terminate(
        tokens in proptest::collection::vec(arb_menu_token(), 4..8)
    ) {
        let catalog = BundleCatalog::standard();
        let raw = tokens.join("*");
        match route(&Trail::parse(&raw), &catalog) {
            Step::Screen(screen) => {
                prop_assert!(screen.is_terminal(), "Deep trail left session open: {:?}", raw);
            }
            Step::Action(action) => {
                prop_assert!(false, "Deep trail produced action {:?}", action);
            }
        }
    }
}

// ============================================================================
// Sequence Tests - Dialog Walks
// ============================================================================

/// A purchase dialog stays open one screen at a time until the final token
/// completes it
#[test]
fn test_purchase_dialog_walk() {
    let catalog = BundleCatalog::standard();

    for raw in ["", "1", "1*3"] {
        match route(&Trail::parse(raw), &catalog) {
            Step::Screen(screen) => {
                assert!(!screen.is_terminal(), "Session closed early at {raw:?}");
            }
            Step::Action(action) => panic!("Premature action at {raw:?}: {action:?}"),
        }
    }

    match route(&Trail::parse("1*3*0712000111"), &catalog) {
        Step::Action(Action::PurchaseBundle { offer, payer_phone }) => {
            assert_eq!(offer.description, "Unlimited weekly pack");
            assert_eq!(payer_phone, "0712000111");
        }
        other => panic!("Expected purchase action, got {other:?}"),
    }
}

/// Registration branches on the consent answer
#[test]
fn test_registration_dialog_walk() {
    let catalog = BundleCatalog::standard();

    for raw in ["", "2"] {
        match route(&Trail::parse(raw), &catalog) {
            Step::Screen(screen) => assert!(!screen.is_terminal()),
            Step::Action(action) => panic!("Premature action at {raw:?}: {action:?}"),
        }
    }

    assert!(matches!(
        route(&Trail::parse("2*1"), &catalog),
        Step::Action(Action::Register)
    ));
    match route(&Trail::parse("2*2"), &catalog) {
        Step::Screen(screen) => assert!(screen.is_terminal()),
        other => panic!("Decline should end the session, got {other:?}"),
    }
}
