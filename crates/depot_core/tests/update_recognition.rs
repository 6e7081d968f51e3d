use depot_core::{update, AppState, Effect, Msg, Notice, RecognizeCard, AREA_CAINIAO};

fn init_logging() {
    depot_logging::initialize_for_tests();
}

fn card(code: &str, area: &str) -> RecognizeCard {
    RecognizeCard {
        code: code.to_string(),
        area: area.to_string(),
    }
}

fn staged(cards: Vec<RecognizeCard>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::TextSubmitted("21-3-3333".into()));
    assert_eq!(effects.len(), 1);
    let (state, _) = update(state, Msg::RecognitionCompleted(cards));
    state
}

#[test]
fn text_submission_emits_recognize_effect_and_sets_busy() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::TextSubmitted("  21-3-3333 \n".into()));
    assert_eq!(
        effects,
        vec![Effect::RecognizeText {
            text: "21-3-3333".to_string()
        }]
    );
    assert!(state.view().recognition_busy);
    assert!(state.consume_dirty());
}

#[test]
fn second_submission_while_busy_is_dropped() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::TextSubmitted("21-3-3333".into()));
    let (state, effects) = update(state, Msg::TextSubmitted("9-1-0001".into()));
    assert!(effects.is_empty());
    let (_, effects) = update(state, Msg::ImagesSubmitted(vec![vec![0xFF, 0xD8]]));
    assert!(effects.is_empty());
}

#[test]
fn blank_text_is_ignored() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::TextSubmitted("   \n ".into()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn zero_results_surface_as_not_recognized() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::TextSubmitted("hello".into()));
    let (state, effects) = update(state, Msg::RecognitionCompleted(Vec::new()));
    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.recognition_busy);
    assert!(view.cards.is_none());
    assert_eq!(view.notice, Some(Notice::NotRecognized));
}

#[test]
fn transport_failure_surfaces_and_clears_busy() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::TextSubmitted("hello".into()));
    let (state, _) = update(state, Msg::RecognitionFailed("http status 502".into()));
    let view = state.view();
    assert!(!view.recognition_busy);
    assert_eq!(
        view.notice,
        Some(Notice::RecognitionFailed("http status 502".to_string()))
    );
}

#[test]
fn staged_cards_can_be_edited_before_confirm() {
    init_logging();
    let state = staged(vec![card("21-3-3333", "韵达京东")]);

    let (state, _) = update(
        state,
        Msg::CardCodeEdited {
            index: 0,
            code: "21-3-3334".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::CardAreaEdited {
            index: 0,
            area: "顺丰快递".into(),
        },
    );
    let (state, _) = update(state, Msg::CardAdded);
    let cards = state.view().cards.expect("cards staged");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].code, "21-3-3334");
    assert_eq!(cards[0].area, "顺丰快递");
    assert_eq!(cards[1].code, "");
    assert_eq!(cards[1].area, AREA_CAINIAO);

    let (state, _) = update(state, Msg::CardRemoved { index: 1 });
    assert_eq!(state.view().cards.expect("cards staged").len(), 1);
}

#[test]
fn out_of_range_card_edits_are_ignored() {
    init_logging();
    let state = staged(vec![card("21-3-3333", "韵达京东")]);
    let (mut state, _) = update(
        state,
        Msg::CardCodeEdited {
            index: 5,
            code: "x".into(),
        },
    );
    state.consume_dirty();
    assert_eq!(state.view().cards.expect("cards staged")[0].code, "21-3-3333");
}

#[test]
fn confirm_merges_and_persists_the_queue() {
    init_logging();
    let state = staged(vec![
        card("21-3-3333", "韵达京东"),
        card("21-3-3333", "顺丰快递"),
    ]);
    let (state, effects) = update(state, Msg::RecognitionConfirmed);
    assert_eq!(effects, vec![Effect::SavePending]);

    let view = state.view();
    assert!(view.cards.is_none());
    assert_eq!(view.pending.len(), 1);
    assert_eq!(view.pending[0].location, "韵达京东");
    let stats = view.last_merge.expect("merge stats");
    assert_eq!(stats.added, 1);
    assert_eq!(stats.skipped, 1);
}

#[test]
fn cancel_discards_the_staged_cards() {
    init_logging();
    let state = staged(vec![card("21-3-3333", "韵达京东")]);
    let (state, effects) = update(state, Msg::RecognitionCancelled);
    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.cards.is_none());
    assert!(view.pending.is_empty());
}

#[test]
fn restore_replaces_queue_and_history() {
    init_logging();
    let state = staged(vec![card("21-3-3333", "韵达京东")]);
    let (state, _) = update(state, Msg::RecognitionConfirmed);
    let (state, effects) = update(
        state,
        Msg::StateRestored {
            pending: vec![depot_core::PendingRecord {
                id: "12-3-4567".into(),
                location: "菜鸟驿站".into(),
            }],
            history: Vec::new(),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.pending.len(), 1);
    assert_eq!(view.pending[0].id, "12-3-4567");
}
