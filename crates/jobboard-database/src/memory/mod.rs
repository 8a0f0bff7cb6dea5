//! Process-local implementation of every store trait.
//!
//! All tables live behind a single async `RwLock`, so uniqueness checks,
//! reference checks, and cascading deletes observe one consistent view.
//! Constraint behaviour mirrors the PostgreSQL schema in `migrations/`.

mod applicants;
mod jobs;
mod tokens;
mod users;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use jobboard_entity::applicant::ApplicantProfile;
use jobboard_entity::job::{JobDescription, JobTitle};
use jobboard_entity::portal::Portal;
use jobboard_entity::token::AuthToken;
use jobboard_entity::user::User;

/// In-memory store. Cloning shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    tokens: BTreeMap<String, AuthToken>,
    portals: BTreeMap<i64, Portal>,
    descriptions: BTreeMap<i64, JobDescription>,
    titles: BTreeMap<i64, JobTitle>,
    applicants: BTreeMap<i64, ApplicantProfile>,
    sequences: Sequences,
}

/// Per-table id counters; ids are never reused.
#[derive(Debug, Default)]
struct Sequences {
    users: i64,
    portals: i64,
    descriptions: i64,
    titles: i64,
}

impl Sequences {
    fn next(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

impl Tables {
    fn remove_user(&mut self, id: i64) -> bool {
        if self.users.remove(&id).is_none() {
            return false;
        }
        self.tokens.retain(|_, t| t.user_id != id);
        self.applicants.remove(&id);

        let titles: Vec<i64> = owned_ids(&self.titles, id, |t| t.user_id);
        for title_id in titles {
            self.remove_title(title_id);
        }
        let portals: Vec<i64> = owned_ids(&self.portals, id, |p| p.user_id);
        for portal_id in portals {
            self.remove_portal(portal_id);
        }
        let descriptions: Vec<i64> = owned_ids(&self.descriptions, id, |d| d.user_id);
        for description_id in descriptions {
            self.remove_description(description_id);
        }
        true
    }

    fn remove_portal(&mut self, id: i64) -> bool {
        if self.portals.remove(&id).is_none() {
            return false;
        }
        let titles: Vec<i64> = owned_ids(&self.titles, id, |t| t.portal_id);
        for title_id in titles {
            self.remove_title(title_id);
        }
        true
    }

    fn remove_description(&mut self, id: i64) -> bool {
        if self.descriptions.remove(&id).is_none() {
            return false;
        }
        let titles: Vec<i64> = owned_ids(&self.titles, id, |t| t.job_description_id);
        for title_id in titles {
            self.remove_title(title_id);
        }
        true
    }

    fn remove_title(&mut self, id: i64) -> bool {
        if self.titles.remove(&id).is_none() {
            return false;
        }
        self.applicants.retain(|_, a| a.applied_for_id != id);
        true
    }
}

/// Ids of rows whose `key` column equals `value`.
fn owned_ids<T>(rows: &BTreeMap<i64, T>, value: i64, key: impl Fn(&T) -> i64) -> Vec<i64> {
    rows.iter()
        .filter(|(_, row)| key(row) == value)
        .map(|(id, _)| *id)
        .collect()
}

/// Owner-scoped listing, newest first.
fn newest_first<T: Clone>(rows: &BTreeMap<i64, T>, owner: i64, key: impl Fn(&T) -> i64) -> Vec<T> {
    rows.values()
        .rev()
        .filter(|row| key(row) == owner)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        ApplicantStore, JobDescriptionStore, JobTitleStore, PortalStore, TokenStore, UserStore,
    };
    use jobboard_core::ErrorKind;
    use jobboard_entity::applicant::CreateApplicantProfile;
    use jobboard_entity::job::{CreateJobDescription, CreateJobTitle, UpdateJobTitle};
    use jobboard_entity::portal::CreatePortal;
    use jobboard_entity::user::CreateUser;

    async fn seed_user(store: &MemoryStore, email: &str) -> User {
        UserStore::create(
            store,
            &CreateUser::regular(email.to_string(), "Seed".to_string(), "hash".to_string()),
        )
        .await
        .unwrap()
    }

    async fn seed_title(store: &MemoryStore, owner: i64, portal_name: &str) -> JobTitle {
        let portal = PortalStore::create(
            store,
            &CreatePortal {
                user_id: owner,
                name: portal_name.to_string(),
                description: "Listings".to_string(),
            },
        )
        .await
        .unwrap();
        let description = JobDescriptionStore::create(
            store,
            &CreateJobDescription {
                user_id: owner,
                role: "Java Developer".to_string(),
                description_text: "SpringBoot".to_string(),
                published_date: None,
            },
        )
        .await
        .unwrap();
        JobTitleStore::create(
            store,
            &CreateJobTitle {
                user_id: owner,
                title: "Developer".to_string(),
                job_description_id: description.id,
                portal_id: portal.id,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryStore::new();
        seed_user(&store, "dup@example.com").await;
        let err = UserStore::create(
            &store,
            &CreateUser::regular("dup@example.com".into(), "Again".into(), "hash".into()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_title_requires_existing_references() {
        let store = MemoryStore::new();
        let user = seed_user(&store, "refs@example.com").await;
        let err = JobTitleStore::create(
            &store,
            &CreateJobTitle {
                user_id: user.id,
                title: "Ghost".to_string(),
                job_description_id: 99,
                portal_id: 98,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_description_backs_one_title() {
        let store = MemoryStore::new();
        let user = seed_user(&store, "one@example.com").await;
        let title = seed_title(&store, user.id, "Indeed").await;
        let err = JobTitleStore::create(
            &store,
            &CreateJobTitle {
                user_id: user.id,
                title: "Second".to_string(),
                job_description_id: title.job_description_id,
                portal_id: title.portal_id,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let updated = JobTitleStore::update(
            &store,
            &UpdateJobTitle {
                id: title.id,
                job_description_id: Some(title.job_description_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.id, title.id);
    }

    #[tokio::test]
    async fn test_deleting_user_cascades() {
        let store = MemoryStore::new();
        let owner = seed_user(&store, "owner@example.com").await;
        let applicant = seed_user(&store, "applicant@example.com").await;
        let title = seed_title(&store, owner.id, "Naukri").await;
        TokenStore::create(&store, owner.id, "abc").await.unwrap();
        ApplicantStore::create(
            &store,
            &CreateApplicantProfile {
                user_id: applicant.id,
                is_applicant: true,
                applied_for_id: title.id,
                cover_letter: "Hire me".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(UserStore::delete(&store, owner.id).await.unwrap());

        assert!(TokenStore::find_by_key(&store, "abc").await.unwrap().is_none());
        assert!(JobTitleStore::find_by_id(&store, title.id).await.unwrap().is_none());
        assert!(PortalStore::find_by_owner(&store, owner.id).await.unwrap().is_empty());
        assert!(ApplicantStore::find_by_user(&store, applicant.id).await.unwrap().is_none());
        assert!(UserStore::find_by_id(&store, applicant.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_and_scoped() {
        let store = MemoryStore::new();
        let a = seed_user(&store, "a@example.com").await;
        let b = seed_user(&store, "b@example.com").await;
        let first = seed_title(&store, a.id, "P1").await;
        let second = seed_title(&store, a.id, "P2").await;
        seed_title(&store, b.id, "P3").await;

        let titles = JobTitleStore::find_by_owner(&store, a.id).await.unwrap();
        let ids: Vec<i64> = titles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_one_token_per_user() {
        let store = MemoryStore::new();
        let user = seed_user(&store, "tok@example.com").await;
        TokenStore::create(&store, user.id, "k1").await.unwrap();
        let err = TokenStore::create(&store, user.id, "k2").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
