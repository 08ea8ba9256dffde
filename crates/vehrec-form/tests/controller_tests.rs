use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vehrec_core::Field;
use vehrec_form::{
    Completion, Focus, FormController, FormError, FormEvent, Phase, SubmitError, PENDING_LABEL,
    SUBMIT_LABEL,
};
use vehrec_render::RecommendationView;
use vehrec_test_utils::{
    honda_civic, status_error, toyota_corolla, valid_edits, ScriptedClient,
};

fn filled() -> FormController {
    let mut page = FormController::new();
    for (field, value) in valid_edits() {
        page.edit(field, value).unwrap();
    }
    page
}

#[test]
fn test_fresh_page() {
    let page = FormController::new();
    assert_eq!(page.phase(), Phase::Idle);
    assert_eq!(page.submit_label(), SUBMIT_LABEL);
    assert!(!page.inputs_disabled());
    assert!(page.recommendations().is_none());
    assert_eq!(page.focus(), Focus::Form);
}

#[test]
fn test_invalid_submit_keeps_phase_and_shows_errors() {
    let mut page = FormController::new();
    page.edit(Field::Company, "Audi").unwrap();

    let err = page.submit().unwrap_err();
    let errors = match err {
        SubmitError::Invalid(errors) => errors,
        other => panic!("expected validation errors, got {other:?}"),
    };
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![Field::Fuel, Field::Transmission, Field::Price, Field::Year]
    );
    assert_eq!(page.phase(), Phase::Idle);
    assert_eq!(page.pending_token(), None);
    assert_eq!(
        page.form().field_error(Field::Price),
        Some("Price must be a numeric value between 1 & 8 digits.")
    );
}

#[test]
fn test_submit_locks_inputs() {
    let mut page = filled();
    let submission = page.submit().unwrap();

    assert_eq!(submission.payload.price, 140_000);
    assert_eq!(submission.payload.year, 2014);
    assert_eq!(page.phase(), Phase::Pending);
    assert_eq!(page.submit_label(), PENDING_LABEL);
    assert!(page.inputs_disabled());

    assert_eq!(page.edit(Field::Year, "2015"), Err(FormError::Locked));
    assert_eq!(page.apply(FormEvent::Reset), Err(FormError::Locked));
    assert_eq!(page.form().value(Field::Year), "2014");
    assert!(matches!(page.submit(), Err(SubmitError::Pending)));
}

#[test]
fn test_completion_shows_results_and_moves_focus() {
    let mut page = filled();
    let submission = page.submit().unwrap();

    let done = page.complete(submission.token, Ok(Some(vec![toyota_corolla()])));
    assert!(matches!(done, Completion::Applied));
    assert_eq!(page.phase(), Phase::Ready);
    assert_eq!(page.submit_label(), SUBMIT_LABEL);
    assert_eq!(page.focus(), Focus::Recommendations);
    assert_eq!(page.displayed_token(), Some(submission.token));

    let view = page.recommendations().unwrap();
    assert_eq!(view.cards().len(), 1);
    assert_eq!(view.cards()[0].title, "Toyota Corolla");
}

#[test]
fn test_results_replaced_wholesale() {
    let mut page = filled();
    let first = page.submit().unwrap();
    page.complete(first.token, Ok(Some(vec![toyota_corolla(), honda_civic()])));

    page.edit(Field::Year, "2016").unwrap();
    let second = page.submit().unwrap();
    assert!(second.token > first.token);

    page.complete(second.token, Ok(Some(vec![honda_civic()])));
    assert_eq!(page.predictions(), Some(&[honda_civic()][..]));
}

#[test]
fn test_empty_and_missing_lists_show_placeholder() {
    for outcome in [Ok(Some(Vec::new())), Ok(None)] {
        let mut page = filled();
        let submission = page.submit().unwrap();
        page.complete(submission.token, outcome);

        assert_eq!(
            page.recommendations(),
            Some(RecommendationView::from_predictions(None))
        );
        assert!(page.recommendations().unwrap().is_placeholder());
    }
}

#[test]
fn test_stale_completion_is_ignored() {
    let mut page = filled();
    let first = page.submit().unwrap();
    page.complete(first.token, Ok(Some(vec![toyota_corolla()])));

    let second = page.submit().unwrap();
    let late = page.complete(first.token, Ok(Some(vec![honda_civic()])));

    assert!(matches!(late, Completion::Stale));
    assert_eq!(page.phase(), Phase::Pending);
    assert_eq!(page.pending_token(), Some(second.token));
    assert_eq!(page.predictions(), Some(&[toyota_corolla()][..]));
}

#[test]
fn test_failure_then_resubmit() {
    let mut page = filled();
    let first = page.submit().unwrap();
    page.complete(first.token, Ok(Some(vec![toyota_corolla()])));

    let second = page.submit().unwrap();
    let done = page.complete(second.token, Err(status_error(500)));
    assert!(matches!(done, Completion::Failed(_)));
    assert_eq!(page.phase(), Phase::Failed);
    assert!(!page.inputs_disabled());
    assert_eq!(
        page.last_error(),
        Some("prediction endpoint returned 500: ")
    );
    assert_eq!(page.displayed_token(), Some(first.token));

    let third = page.submit().unwrap();
    assert_eq!(page.last_error(), None);
    page.complete(third.token, Ok(Some(vec![honda_civic()])));
    assert_eq!(page.phase(), Phase::Ready);
}

#[tokio::test]
async fn test_submit_with_client() {
    let client = ScriptedClient::returning(vec![toyota_corolla()]);
    let mut page = filled();

    let view = page.submit_with(&client).await.unwrap();
    assert_eq!(view.cards().len(), 1);
    assert_eq!(client.calls(), 1);
    assert_eq!(client.received()[0].company, "Toyota");
    assert_eq!(page.phase(), Phase::Ready);
}

#[tokio::test]
async fn test_submit_with_failing_client() {
    let client = ScriptedClient::failing(status_error(503));
    let mut page = filled();

    let err = page.submit_with(&client).await.unwrap_err();
    assert!(matches!(err, SubmitError::Request(_)));
    assert_eq!(page.phase(), Phase::Failed);
    assert!(page.recommendations().is_none());
}

#[tokio::test]
async fn test_invalid_form_never_reaches_client() {
    let client = ScriptedClient::new();
    let mut page = FormController::new();

    let err = page.submit_with(&client).await.unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(client.calls(), 0);
}

#[derive(Debug, Clone)]
enum Step {
    EditYear(String),
    Reset,
    Fill,
    Submit,
    CompleteOk(usize),
    CompleteErr,
    CompleteOld,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[0-9]{0,5}".prop_map(Step::EditYear),
        Just(Step::Reset),
        Just(Step::Fill),
        Just(Step::Submit),
        (0usize..3).prop_map(Step::CompleteOk),
        Just(Step::CompleteErr),
        Just(Step::CompleteOld),
    ]
}

proptest! {
    #[test]
    fn prop_page_invariants_hold(steps in prop::collection::vec(step(), 1..40)) {
        let mut page = FormController::new();
        let mut issued = Vec::new();

        for s in steps {
            let before = page.phase();
            match s {
                Step::EditYear(year) => {
                    let res = page.edit(Field::Year, year);
                    prop_assert_eq!(res.is_err(), before == Phase::Pending);
                }
                Step::Reset => {
                    let res = page.apply(FormEvent::Reset);
                    prop_assert_eq!(res.is_err(), before == Phase::Pending);
                }
                Step::Fill => {
                    for (field, value) in valid_edits() {
                        let _ = page.edit(field, value);
                    }
                }
                Step::Submit => match page.submit() {
                    Ok(sub) => {
                        prop_assert_ne!(before, Phase::Pending);
                        if let Some(last) = issued.last() {
                            prop_assert!(sub.token > *last);
                        }
                        issued.push(sub.token);
                    }
                    Err(_) => prop_assert_eq!(page.phase(), before),
                },
                Step::CompleteOk(n) => {
                    if let Some(token) = page.pending_token() {
                        let list = vec![toyota_corolla(); n];
                        page.complete(token, Ok(Some(list)));
                        prop_assert_eq!(page.phase(), Phase::Ready);
                        prop_assert_eq!(page.predictions().map(<[_]>::len), Some(n));
                    }
                }
                Step::CompleteErr => {
                    if let Some(token) = page.pending_token() {
                        page.complete(token, Err(status_error(500)));
                        prop_assert_eq!(page.phase(), Phase::Failed);
                    }
                }
                Step::CompleteOld => {
                    let shown = page.displayed_token();
                    if let Some(&old) = issued.first() {
                        if page.pending_token() != Some(old) {
                            let res = page.complete(old, Ok(Some(vec![honda_civic()])));
                            prop_assert!(matches!(res, Completion::Stale));
                            prop_assert_eq!(page.phase(), before);
                            prop_assert_eq!(page.displayed_token(), shown);
                        }
                    }
                }
            }

            prop_assert_eq!(page.inputs_disabled(), page.phase() == Phase::Pending);
            prop_assert_eq!(page.pending_token().is_some(), page.phase() == Phase::Pending);
            let label = if page.phase() == Phase::Pending { PENDING_LABEL } else { SUBMIT_LABEL };
            prop_assert_eq!(page.submit_label(), label);
            if !issued.is_empty() {
                prop_assert_ne!(page.phase(), Phase::Idle);
            }
        }
    }
}
