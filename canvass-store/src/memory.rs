use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use canvass::{Response, ResponseSet, Survey};
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::{StoreError, SurveyStore};

/// In-process [`SurveyStore`] implementation.
///
/// Keeps everything in a map behind a read/write lock, so concurrent
/// fetches interleave freely and appends serialize. Nothing is persisted;
/// this is the store the test suites and demos run against.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredSurvey>>,
}

#[derive(Debug, Clone)]
struct StoredSurvey {
    survey: Survey,
    responses: ResponseSet,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, StoredSurvey>>, StoreError> {
        self.entries
            .read()
            .map_err(|_| StoreError::backend(anyhow::anyhow!("store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, StoredSurvey>>, StoreError> {
        self.entries
            .write()
            .map_err(|_| StoreError::backend(anyhow::anyhow!("store lock poisoned")))
    }
}

impl SurveyStore for MemoryStore {
    fn save_survey(&self, id: &str, survey: Survey) -> Result<(), StoreError> {
        debug!("saving survey {id:?}");
        self.write()?.insert(
            id.to_string(),
            StoredSurvey {
                survey,
                responses: ResponseSet::new(),
            },
        );
        Ok(())
    }

    fn fetch_survey(&self, id: &str) -> Result<Option<Survey>, StoreError> {
        Ok(self.read()?.get(id).map(|entry| entry.survey.clone()))
    }

    fn update_survey(&self, id: &str, survey: Survey) -> Result<(), StoreError> {
        let mut entries = self.write()?;
        let entry = entries.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        if !entry.responses.is_empty() {
            return Err(StoreError::Locked { id: id.to_string() });
        }
        debug!("updating survey {id:?}");
        entry.survey = survey;
        Ok(())
    }

    fn set_active(&self, id: &str, active: bool) -> Result<(), StoreError> {
        let mut entries = self.write()?;
        let entry = entries.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        debug!("setting survey {id:?} active = {active}");
        entry.survey.active = active;
        Ok(())
    }

    fn delete_survey(&self, id: &str) -> Result<(), StoreError> {
        if self.write()?.remove(id).is_some() {
            debug!("deleted survey {id:?}");
        }
        Ok(())
    }

    fn fetch_responses(&self, id: &str) -> Result<Vec<Response>, StoreError> {
        Ok(self
            .read()?
            .get(id)
            .map(|entry| entry.responses.responses.clone())
            .unwrap_or_default())
    }

    fn fetch_response_set(&self, id: &str) -> Result<Option<ResponseSet>, StoreError> {
        Ok(self.read()?.get(id).map(|entry| entry.responses.clone()))
    }

    fn append_response(&self, id: &str, response: Response) -> Result<(), StoreError> {
        let mut entries = self.write()?;
        let entry = entries.get_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        let response = if response.id().is_none() {
            response.with_id(Uuid::new_v4().to_string())
        } else {
            response
        };
        debug!("appending response {:?} to survey {id:?}", response.id());
        entry.responses.responses.push(response);
        entry.responses.updated_at = Utc::now();
        Ok(())
    }

    fn surveys_by_author(&self, author: &str) -> Result<Vec<(String, Survey)>, StoreError> {
        let mut surveys: Vec<(String, Survey)> = self
            .read()?
            .iter()
            .filter(|(_, entry)| entry.survey.author == author)
            .map(|(id, entry)| (id.clone(), entry.survey.clone()))
            .collect();
        // newest first, as the dashboard lists them
        surveys.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
        Ok(surveys)
    }

    fn participant_counts(&self, author: &str) -> Result<BTreeMap<String, usize>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|(_, entry)| entry.survey.author == author)
            .map(|(id, entry)| (id.clone(), entry.responses.len()))
            .collect())
    }

    fn delete_user_data(&self, author: &str) -> Result<(), StoreError> {
        let mut entries = self.write()?;
        let before = entries.len();
        entries.retain(|_, entry| entry.survey.author != author);
        info!("deleted {} surveys of author {author:?}", before - entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass::Question;

    fn survey() -> Survey {
        Survey::new("Lunch", vec![Question::text("Favourite dish?")])
    }

    #[test]
    fn fetch_missing_survey_is_none_not_error() {
        let store = MemoryStore::new();
        assert_eq!(store.fetch_survey("nope").unwrap(), None);
        assert_eq!(store.fetch_responses("nope").unwrap(), vec![]);
    }

    #[test]
    fn append_assigns_an_id_and_bumps_updated_at() {
        let store = MemoryStore::new();
        store.save_survey("lunch", survey()).unwrap();
        let before = store.fetch_response_set("lunch").unwrap().unwrap().updated_at;

        store
            .append_response("lunch", Response::new().with_answer(0, "Ramen"))
            .unwrap();

        let set = store.fetch_response_set("lunch").unwrap().unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.responses[0].id().is_some(), "store assigns ids");
        assert!(set.updated_at >= before);
    }

    #[test]
    fn append_keeps_an_existing_id() {
        let store = MemoryStore::new();
        store.save_survey("lunch", survey()).unwrap();
        store
            .append_response("lunch", Response::new().with_id("r-1"))
            .unwrap();

        let responses = store.fetch_responses("lunch").unwrap();
        assert_eq!(responses[0].id(), Some("r-1"));
    }

    #[test]
    fn append_to_missing_survey_fails() {
        let store = MemoryStore::new();
        let err = store.append_response("nope", Response::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn update_is_locked_once_responses_exist() {
        let store = MemoryStore::new();
        store.save_survey("lunch", survey()).unwrap();
        store.update_survey("lunch", survey().closed()).unwrap();

        store.append_response("lunch", Response::new()).unwrap();
        let err = store.update_survey("lunch", survey()).unwrap_err();
        assert!(matches!(err, StoreError::Locked { .. }));
    }

    #[test]
    fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store.save_survey("lunch", survey()).unwrap();
        store.delete_survey("lunch").unwrap();
        store.delete_survey("lunch").unwrap();
        assert_eq!(store.fetch_survey("lunch").unwrap(), None);
    }

    #[test]
    fn set_active_flips_the_flag() {
        let store = MemoryStore::new();
        store.save_survey("lunch", survey()).unwrap();
        store.set_active("lunch", false).unwrap();
        let fetched = store.fetch_survey("lunch").unwrap().unwrap();
        assert!(!fetched.active);
    }
}
