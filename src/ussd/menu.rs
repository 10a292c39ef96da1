//! Pure menu routing
//!
//! Maps a full input trail to either a finished screen or an action that
//! needs a collaborator. Every request re-derives its position in the dialog
//! tree from the trail alone; there is no session object to consult.

use super::catalog::{BundleCatalog, BundleOffer};
use super::screen::{Screen, Trail};

/// Outcome of routing one trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Routing finished: show this screen
    Screen(Screen),
    /// A collaborator call stands between the trail and its final screen
    Action(Action),
}

/// Side effects the interpreter executes on behalf of a routed trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Checkout for a validated catalog offer, billed to `payer_phone`
    PurchaseBundle {
        offer: BundleOffer,
        payer_phone: String,
    },
    /// Student accepted the registration consent prompt
    Register,
}

// ============================================================
// Screen texts
// ============================================================

const ROOT_MENU: &str = "Welcome to SomaBot!\n\
1. Buy SMS bundles\n\
2. Register\n\
3. About SomaBot\n\
4. Check balance\n\
5. Claim airtime\n\
6. Support\n\
7. Language\n\
8. Daily quiz\n\
0. Exit";

const ABOUT_TEXT: &str = "SomaBot is your SMS study assistant. Text any study question to 7833 and get help in English or Kiswahili.";

const PAYMENT_PHONE_PROMPT: &str = "Enter the mobile money phone number to bill:";

const CONSENT_PROMPT: &str = "Register for daily study tips?\n1. Yes\n2. No";
const DECLINE_TEXT: &str = "You have not been registered. Dial in any time to join.";

const BALANCE_MENU: &str = "Check balance:\n1. SMS bundle balance\n2. Quiz points";
const SMS_BALANCE_TEXT: &str = "Your SMS bundle balance is 25 messages.";
const QUIZ_POINTS_TEXT: &str = "You have 120 quiz points.";

const AIRTIME_MENU: &str = "Claim your weekly airtime reward?\n1. Claim now";
const AIRTIME_CLAIMED_TEXT: &str = "Your airtime reward is on its way.";

const SUPPORT_MENU: &str = "Support:\n1. Request a call back\n2. FAQ";
const CALLBACK_TEXT: &str = "Thank you. Our team will call you back shortly.";
const FAQ_TEXT: &str = "Text HELP to 7833 for frequently asked questions.";

const LANGUAGE_MENU: &str = "Choose your language:\n1. English\n2. Kiswahili";
const ENGLISH_SET_TEXT: &str = "Language set to English.";
const KISWAHILI_SET_TEXT: &str = "Lugha imewekwa kuwa Kiswahili.";

const QUIZ_QUESTION: &str =
    "Daily quiz:\nWhich planet is closest to the sun?\n1. Venus\n2. Mercury\n3. Mars";
// The accepted token is authored by hand; it is not derived from the
// option list above, so the two can drift apart independently.
const QUIZ_CORRECT_OPTION: &str = "2";
const QUIZ_CORRECT_TEXT: &str =
    "Correct! Mercury is the closest planet to the sun. You earned 10 points.";
const QUIZ_WRONG_TEXT: &str = "Sorry, that is not correct. Dial in tomorrow for a new question.";

const GOODBYE_TEXT: &str = "Thank you for using SomaBot. Goodbye!";
const INVALID_OPTION_TEXT: &str = "Invalid option. Please dial again.";
const INVALID_BUNDLE_TEXT: &str = "Invalid bundle selection.";
const INVALID_INPUT_TEXT: &str = "Invalid input. Please dial again.";

// ============================================================
// Routing
// ============================================================

/// Route a full trail to its next step.
///
/// Total over all inputs: every trail produces a screen or an action,
/// never a fault.
pub fn route(trail: &Trail, catalog: &BundleCatalog) -> Step {
    let Some((head, rest)) = trail.tokens().split_first() else {
        return Step::Screen(Screen::con(ROOT_MENU));
    };

    match head.as_str() {
        "1" => bundles(rest, catalog),
        "2" => register(rest),
        "3" => fixed_leaf(rest, ABOUT_TEXT),
        "4" => balance(rest),
        "5" => airtime(rest),
        "6" => support(rest),
        "7" => language(rest),
        "8" => quiz(rest),
        // Exit swallows whatever follows it
        "0" => Step::Screen(Screen::end(GOODBYE_TEXT)),
        _ => Step::Screen(Screen::end(INVALID_OPTION_TEXT)),
    }
}

fn bundles(rest: &[String], catalog: &BundleCatalog) -> Step {
    match rest {
        [] => Step::Screen(Screen::con(format!(
            "Choose a study bundle:\n{}",
            catalog.listing()
        ))),
        [selection] => match resolve_offer(selection, catalog) {
            Some(_) => Step::Screen(Screen::con(PAYMENT_PHONE_PROMPT)),
            None => Step::Screen(Screen::end(INVALID_BUNDLE_TEXT)),
        },
        [selection, payer_phone] => match resolve_offer(selection, catalog) {
            Some(offer) => Step::Action(Action::PurchaseBundle {
                offer: offer.clone(),
                payer_phone: payer_phone.clone(),
            }),
            None => Step::Screen(Screen::end(INVALID_BUNDLE_TEXT)),
        },
        _ => Step::Screen(Screen::end(INVALID_INPUT_TEXT)),
    }
}

/// Validate a 1-based selection token against the catalog.
fn resolve_offer<'a>(token: &str, catalog: &'a BundleCatalog) -> Option<&'a BundleOffer> {
    token.parse::<usize>().ok().and_then(|n| catalog.offer(n))
}

fn register(rest: &[String]) -> Step {
    match rest {
        [] => Step::Screen(Screen::con(CONSENT_PROMPT)),
        [choice] => match choice.as_str() {
            "1" => Step::Action(Action::Register),
            "2" => Step::Screen(Screen::end(DECLINE_TEXT)),
            _ => Step::Screen(Screen::end(INVALID_OPTION_TEXT)),
        },
        _ => Step::Screen(Screen::end(INVALID_INPUT_TEXT)),
    }
}

fn balance(rest: &[String]) -> Step {
    two_way_leaf(rest, BALANCE_MENU, SMS_BALANCE_TEXT, QUIZ_POINTS_TEXT)
}

fn airtime(rest: &[String]) -> Step {
    match rest {
        [] => Step::Screen(Screen::con(AIRTIME_MENU)),
        [choice] if choice == "1" => Step::Screen(Screen::end(AIRTIME_CLAIMED_TEXT)),
        [_] => Step::Screen(Screen::end(INVALID_OPTION_TEXT)),
        _ => Step::Screen(Screen::end(INVALID_INPUT_TEXT)),
    }
}

fn support(rest: &[String]) -> Step {
    two_way_leaf(rest, SUPPORT_MENU, CALLBACK_TEXT, FAQ_TEXT)
}

fn language(rest: &[String]) -> Step {
    two_way_leaf(rest, LANGUAGE_MENU, ENGLISH_SET_TEXT, KISWAHILI_SET_TEXT)
}

fn quiz(rest: &[String]) -> Step {
    match rest {
        [] => Step::Screen(Screen::con(QUIZ_QUESTION)),
        [answer] if answer == QUIZ_CORRECT_OPTION => {
            Step::Screen(Screen::end(QUIZ_CORRECT_TEXT))
        }
        [_] => Step::Screen(Screen::end(QUIZ_WRONG_TEXT)),
        _ => Step::Screen(Screen::end(INVALID_INPUT_TEXT)),
    }
}

/// A branch that terminates immediately; anything dialed past it is invalid.
fn fixed_leaf(rest: &[String], text: &str) -> Step {
    if rest.is_empty() {
        Step::Screen(Screen::end(text))
    } else {
        Step::Screen(Screen::end(INVALID_INPUT_TEXT))
    }
}

/// A submenu with exactly two numbered leaves.
fn two_way_leaf(rest: &[String], menu: &str, first: &str, second: &str) -> Step {
    match rest {
        [] => Step::Screen(Screen::con(menu)),
        [choice] => match choice.as_str() {
            "1" => Step::Screen(Screen::end(first)),
            "2" => Step::Screen(Screen::end(second)),
            _ => Step::Screen(Screen::end(INVALID_OPTION_TEXT)),
        },
        _ => Step::Screen(Screen::end(INVALID_INPUT_TEXT)),
    }
}
