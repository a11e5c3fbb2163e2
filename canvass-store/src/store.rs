use std::collections::BTreeMap;

use canvass::{Response, ResponseSet, Survey};

use crate::StoreError;

/// Trait for backends that persist surveys and their responses.
///
/// Surveys live under caller-chosen opaque string ids. Responses form an
/// append-only collection per survey: they are added one at a time and
/// never edited or removed individually. The aggregation engine never
/// talks to a store itself; callers fetch a survey and its responses and
/// hand both to the engine as snapshots.
pub trait SurveyStore {
    /// Create or replace the survey stored under `id`.
    ///
    /// Replacing drops any previously recorded responses; for editing an
    /// existing survey use [`update_survey`](Self::update_survey), which
    /// refuses once responses exist.
    fn save_survey(&self, id: &str, survey: Survey) -> Result<(), StoreError>;

    /// Fetch the survey stored under `id`, or `None` if there is none.
    fn fetch_survey(&self, id: &str) -> Result<Option<Survey>, StoreError>;

    /// Replace the survey stored under `id`, keeping its responses.
    ///
    /// Fails with [`StoreError::Locked`] once any response has been
    /// recorded: answers are keyed by question index, so editing the
    /// question list under them would silently reshuffle results.
    fn update_survey(&self, id: &str, survey: Survey) -> Result<(), StoreError>;

    /// Open or close the survey for new responses.
    fn set_active(&self, id: &str, active: bool) -> Result<(), StoreError>;

    /// Delete the survey and all its responses. Deleting an unknown id is
    /// not an error.
    fn delete_survey(&self, id: &str) -> Result<(), StoreError>;

    /// Fetch all responses recorded for the survey, in submission order.
    ///
    /// A survey without any responses yields an empty list, not an error.
    fn fetch_responses(&self, id: &str) -> Result<Vec<Response>, StoreError>;

    /// Fetch the raw stored response collection including its
    /// last-updated timestamp, or `None` if the survey does not exist.
    fn fetch_response_set(&self, id: &str) -> Result<Option<ResponseSet>, StoreError>;

    /// Append one response to the survey's collection.
    ///
    /// Assigns the response a fresh id if it does not carry one and bumps
    /// the collection's last-updated timestamp.
    fn append_response(&self, id: &str, response: Response) -> Result<(), StoreError>;

    /// List all surveys created by the given user, newest first.
    fn surveys_by_author(&self, author: &str) -> Result<Vec<(String, Survey)>, StoreError>;

    /// Count recorded responses per survey for all of the given user's
    /// surveys (the dashboard's participation numbers).
    fn participant_counts(&self, author: &str) -> Result<BTreeMap<String, usize>, StoreError>;

    /// Delete every survey (and its responses) created by the given user.
    fn delete_user_data(&self, author: &str) -> Result<(), StoreError>;
}
