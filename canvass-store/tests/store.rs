//! Integration tests for canvass-store: the authoring-to-results flow the
//! survey pages walk through.

use canvass::{apply_scale_defaults, summarize_survey, validate_response};
use canvass_store::{Identity, MemoryStore, StaticIdentity, SurveyStore, User};
use chrono::{Duration, Utc};
use example_surveys::course_feedback;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_author_collect_summarize() {
    init_logging();
    let store = MemoryStore::new();
    let identity = StaticIdentity::signed_in(User::named("user-314", "Rafael"));

    // the author creates the survey
    let author = identity.current_user().unwrap();
    let survey = course_feedback::survey().with_author(author.id.as_str(), author.display_label());
    store.save_survey("feedback", survey).unwrap();

    // respondents submit through validation, with scale presets applied
    let fetched = store.fetch_survey("feedback").unwrap().unwrap();
    for response in course_feedback::responses() {
        let response = apply_scale_defaults(&fetched, response);
        validate_response(&fetched, &response).unwrap();
        store.append_response("feedback", response).unwrap();
    }

    // the results page fetches a snapshot and aggregates it
    let responses = store.fetch_responses("feedback").unwrap();
    let summary = summarize_survey(&fetched, &responses);
    assert_eq!(summary.respondent_count, 4);
    // scale presets filled the gaps, so every scale question now has 4 answers
    for index in [5, 6, 7, 8] {
        assert_eq!(summary.questions[index].response_count, 4, "question {index}");
    }
    // while text and choice questions keep their skips
    assert_eq!(summary.questions[0].response_count, 3);
}

#[test]
fn test_closed_survey_rejects_submissions() {
    init_logging();
    let store = MemoryStore::new();
    store.save_survey("feedback", course_feedback::survey()).unwrap();
    store.set_active("feedback", false).unwrap();

    let fetched = store.fetch_survey("feedback").unwrap().unwrap();
    let response = course_feedback::responses().remove(0);
    assert!(validate_response(&fetched, &response).is_err());
}

#[test]
fn test_dashboard_listing_and_counts() {
    init_logging();
    let store = MemoryStore::new();
    let now = Utc::now();

    let older = course_feedback::survey()
        .with_author("user-314", "Rafael")
        .with_created_at(now - Duration::days(7));
    let newer = course_feedback::survey()
        .with_author("user-314", "Rafael")
        .with_created_at(now);
    let other = course_feedback::survey().with_author("user-999", "Someone else");

    store.save_survey("older", older).unwrap();
    store.save_survey("newer", newer).unwrap();
    store.save_survey("other", other).unwrap();
    store
        .append_response("older", course_feedback::responses().remove(0))
        .unwrap();

    let listed = store.surveys_by_author("user-314").unwrap();
    let ids: Vec<&str> = listed.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["newer", "older"], "newest first");

    let counts = store.participant_counts("user-314").unwrap();
    assert_eq!(counts.get("older"), Some(&1));
    assert_eq!(counts.get("newer"), Some(&0));
    assert_eq!(counts.get("other"), None);

    store.delete_user_data("user-314").unwrap();
    assert!(store.surveys_by_author("user-314").unwrap().is_empty());
    assert!(store.fetch_survey("other").unwrap().is_some());
}
