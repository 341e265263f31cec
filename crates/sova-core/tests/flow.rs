use sova_core::{Event, FlowController, FlowError, Phase, Render, SessionStore};
use sova_instruments::EatCode;

const CHAT: i64 = 7;

fn setup() -> (FlowController, SessionStore) {
    let store = SessionStore::new();
    (FlowController::new(store.clone()), store)
}

async fn start_and_begin(flow: &FlowController) {
    flow.handle(CHAT, Event::Start).await.unwrap();
    flow.handle(CHAT, Event::Begin).await.unwrap();
}

async fn answer_eat(flow: &FlowController, index: usize, code: EatCode) -> Render {
    flow.handle(CHAT, Event::EatAnswer { index, code })
        .await
        .unwrap()
}

async fn answer_scoff(flow: &FlowController, index: usize, value: bool) -> Render {
    flow.handle(CHAT, Event::ScoffAnswer { index, value })
        .await
        .unwrap()
}

#[tokio::test]
async fn start_renders_intro_with_begin_choice() {
    let (flow, store) = setup();

    let render = flow.handle(CHAT, Event::Start).await.unwrap();
    assert!(render.text.contains("not a medical diagnosis"));
    assert_eq!(render.choices.len(), 1);
    assert_eq!(render.choices[0].label, "Begin");

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.phase, Phase::Intro);
}

#[tokio::test]
async fn begin_asks_the_first_eat_question() {
    let (flow, store) = setup();
    flow.handle(CHAT, Event::Start).await.unwrap();

    let render = flow.handle(CHAT, Event::Begin).await.unwrap();
    assert!(render.text.contains("EAT-26, question 1/26"));

    let labels: Vec<&str> = render.choices.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Always", "Usually", "Often", "Sometimes", "Rarely", "Never"]
    );

    assert_eq!(store.get(CHAT).await.unwrap().phase, Phase::Eat(0));
}

#[tokio::test]
async fn begin_without_session_is_rejected() {
    let (flow, _store) = setup();
    let err = flow.handle(CHAT, Event::Begin).await.unwrap_err();
    assert_eq!(err, FlowError::NoSession);
}

#[tokio::test]
async fn answer_without_session_is_rejected() {
    let (flow, _store) = setup();
    let err = flow
        .handle(
            CHAT,
            Event::EatAnswer {
                index: 0,
                code: EatCode::Always,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, FlowError::NoSession);
}

#[tokio::test]
async fn help_is_informational_and_touches_no_state() {
    let (flow, store) = setup();
    let render = flow.handle(CHAT, Event::Help).await.unwrap();
    assert!(render.text.contains("/restart"));
    assert!(render.choices.is_empty());
    assert!(store.get(CHAT).await.is_none());
}

#[tokio::test]
async fn in_order_answers_advance_one_question_at_a_time() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    let render = answer_eat(&flow, 0, EatCode::Often).await;
    assert!(render.text.contains("EAT-26, question 2/26"));

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.phase, Phase::Eat(1));
    assert_eq!(session.eat_answers, vec![EatCode::Often]);
    assert_eq!(session.eat_score, 1);
}

#[tokio::test]
async fn last_eat_answer_enters_scoff() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    for index in 0..25 {
        answer_eat(&flow, index, EatCode::Never).await;
    }
    let render = answer_eat(&flow, 25, EatCode::Always).await;
    assert!(render.text.contains("SCOFF, question 1/5"));

    let labels: Vec<&str> = render.choices.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Yes", "No"]);

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.phase, Phase::Scoff(0));
    assert_eq!(session.eat_answers.len(), 26);
}

#[tokio::test]
async fn running_score_matches_per_answer_weights() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    let mut expected = 0u16;
    for index in 0..26 {
        let code = EatCode::ALL[index % EatCode::ALL.len()];
        expected += code.score(index == 25);
        answer_eat(&flow, index, code).await;
    }

    assert_eq!(store.get(CHAT).await.unwrap().eat_score, expected);
}

#[tokio::test]
async fn duplicate_answer_is_idempotent() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    answer_eat(&flow, 0, EatCode::Always).await;
    answer_eat(&flow, 0, EatCode::Always).await;

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.eat_answers.len(), 1);
    assert_eq!(session.eat_score, 3);
}

#[tokio::test]
async fn duplicate_scoff_answer_is_idempotent() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;
    for index in 0..26 {
        answer_eat(&flow, index, EatCode::Never).await;
    }

    answer_scoff(&flow, 0, true).await;
    answer_scoff(&flow, 0, true).await;

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.scoff_answers.len(), 1);
    assert_eq!(session.scoff_yes(), 1);
}

#[tokio::test]
async fn overwrite_replaces_answer_but_not_score() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    answer_eat(&flow, 0, EatCode::Always).await;
    answer_eat(&flow, 1, EatCode::Usually).await;
    // Re-answer question 1 from a stale menu. The recorded answer changes;
    // the accumulator keeps the original contribution.
    answer_eat(&flow, 0, EatCode::Never).await;

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.eat_answers, vec![EatCode::Never, EatCode::Usually]);
    assert_eq!(session.eat_score, 5);
}

#[tokio::test]
async fn gap_is_backfilled_with_sometimes() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    let render = answer_eat(&flow, 5, EatCode::Always).await;
    assert!(render.text.contains("EAT-26, question 7/26"));

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.eat_answers.len(), 6);
    assert!(
        session.eat_answers[..5]
            .iter()
            .all(|c| *c == EatCode::Sometimes)
    );
    assert_eq!(session.eat_answers[5], EatCode::Always);
    // Back-filled Sometimes answers carry direct weight 0.
    assert_eq!(session.eat_score, 3);
    assert_eq!(session.phase, Phase::Eat(6));
}

#[tokio::test]
async fn out_of_range_index_is_rejected_without_mutation() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    let err = flow
        .handle(
            CHAT,
            Event::EatAnswer {
                index: 26,
                code: EatCode::Never,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::IndexOutOfRange { index: 26, .. }));

    let session = store.get(CHAT).await.unwrap();
    assert!(session.eat_answers.is_empty());
    assert_eq!(session.eat_score, 0);

    let err = flow
        .handle(
            CHAT,
            Event::ScoffAnswer {
                index: 5,
                value: true,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::IndexOutOfRange { index: 5, .. }));
}

#[tokio::test]
async fn restart_resets_everything() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;
    answer_eat(&flow, 0, EatCode::Always).await;
    answer_eat(&flow, 1, EatCode::Always).await;

    flow.handle(CHAT, Event::Start).await.unwrap();

    let session = store.get(CHAT).await.unwrap();
    assert_eq!(session.phase, Phase::Intro);
    assert!(session.eat_answers.is_empty());
    assert!(session.scoff_answers.is_empty());
    assert_eq!(session.eat_score, 0);
}

#[tokio::test]
async fn restart_refreshes_the_start_time() {
    let (flow, store) = setup();
    flow.handle(CHAT, Event::Start).await.unwrap();
    let first = store.get(CHAT).await.unwrap().started_at;
    assert!(first <= jiff::Timestamp::now());

    flow.handle(CHAT, Event::Start).await.unwrap();
    let second = store.get(CHAT).await.unwrap().started_at;
    assert!(second >= first);
}

#[tokio::test]
async fn sessions_are_independent_per_conversation() {
    let (flow, store) = setup();
    let other: i64 = 8;

    flow.handle(CHAT, Event::Start).await.unwrap();
    flow.handle(CHAT, Event::Begin).await.unwrap();
    flow.handle(other, Event::Start).await.unwrap();

    flow.handle(
        CHAT,
        Event::EatAnswer {
            index: 0,
            code: EatCode::Always,
        },
    )
    .await
    .unwrap();

    assert_eq!(store.get(other).await.unwrap().phase, Phase::Intro);
    assert!(store.get(other).await.unwrap().eat_answers.is_empty());
    assert_eq!(store.active_count().await, 2);
}

#[tokio::test]
async fn maximum_score_scenario_reaches_seventy_eight() {
    let (flow, store) = setup();
    start_and_begin(&flow).await;

    for index in 0..25 {
        answer_eat(&flow, index, EatCode::Always).await;
    }
    answer_eat(&flow, 25, EatCode::Never).await;
    assert_eq!(store.get(CHAT).await.unwrap().eat_score, 78);

    for index in 0..4 {
        answer_scoff(&flow, index, false).await;
    }
    let summary = answer_scoff(&flow, 4, false).await;

    assert!(summary.text.contains("EAT-26 total score: 78"));
    assert!(summary.text.contains("elevated likelihood of disordered eating"));
    assert!(summary.choices.is_empty());
    // The session is discarded once the summary is out.
    assert!(store.get(CHAT).await.is_none());
}

#[tokio::test]
async fn low_score_scenario_carries_no_recommendation() {
    let (flow, _store) = setup();
    start_and_begin(&flow).await;

    // Rarely: direct weight 0 everywhere, reverse weight 2 on item 26.
    for index in 0..26 {
        answer_eat(&flow, index, EatCode::Rarely).await;
    }
    for index in 0..4 {
        answer_scoff(&flow, index, false).await;
    }
    let summary = answer_scoff(&flow, 4, false).await;

    assert!(summary.text.contains("EAT-26 total score: 2"));
    assert!(summary.text.contains("SCOFF \"yes\" answers: 0"));
    assert!(summary.text.contains("no elevated indication on this scale"));
    assert!(summary.text.contains("no pronounced indication on this instrument"));
    assert!(!summary.text.contains("Recommendation:"));
}

#[tokio::test]
async fn scoff_alone_can_trigger_the_recommendation() {
    let (flow, _store) = setup();
    start_and_begin(&flow).await;

    // EAT total of 5, well under the threshold.
    answer_eat(&flow, 0, EatCode::Always).await;
    answer_eat(&flow, 1, EatCode::Often).await;
    for index in 2..25 {
        answer_eat(&flow, index, EatCode::Never).await;
    }
    answer_eat(&flow, 25, EatCode::Sometimes).await;

    for index in 0..3 {
        answer_scoff(&flow, index, true).await;
    }
    answer_scoff(&flow, 3, false).await;
    let summary = answer_scoff(&flow, 4, false).await;

    assert!(summary.text.contains("EAT-26 total score: 5"));
    assert!(summary.text.contains("SCOFF \"yes\" answers: 3"));
    assert!(summary.text.contains("grounds for attention and consultation"));
    assert!(summary.text.contains("Recommendation:"));
}

#[tokio::test]
async fn out_of_order_arrival_still_completes_both_instruments() {
    let (flow, _store) = setup();
    start_and_begin(&flow).await;

    // Jump straight to the last EAT question, then straight to the last
    // SCOFF question; everything in between is back-filled.
    answer_eat(&flow, 25, EatCode::Always).await;
    let summary = answer_scoff(&flow, 4, true).await;

    assert!(summary.text.contains("Screening complete."));
    // 26 EAT answers: 25 back-filled Sometimes plus the real one.
    assert!(summary.text.contains("26. Always"));
    assert!(summary.text.contains("1. Sometimes"));
    // 5 SCOFF answers: 4 back-filled "no" plus the real "yes".
    assert!(summary.text.contains("4. No"));
    assert!(summary.text.contains("5. Yes"));
    assert!(summary.text.contains("SCOFF \"yes\" answers: 1"));
}

#[tokio::test]
async fn summary_lists_every_answer() {
    let (flow, _store) = setup();
    start_and_begin(&flow).await;

    for index in 0..26 {
        answer_eat(&flow, index, EatCode::Usually).await;
    }
    for index in 0..4 {
        answer_scoff(&flow, index, true).await;
    }
    let summary = answer_scoff(&flow, 4, false).await;

    assert!(summary.text.contains("Your answers (EAT-26):"));
    assert!(summary.text.contains("Your answers (SCOFF):"));
    for line in 1..=26 {
        assert!(summary.text.contains(&format!("{line}. Usually")));
    }
    assert!(summary.text.contains("1. Yes"));
    assert!(summary.text.contains("5. No"));
}
