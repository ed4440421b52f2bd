//! Repository Integration Tests
//!
//! Tests for the user and list repositories with in-memory SQLite.

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use todo_core::RecordId;

    use crate::domain::{ServerError, MAX_ITEMS};
    use crate::repository::{open_db, open_in_memory, ListRepository, UserRepository};

    fn setup_test_db() -> (UserRepository, ListRepository) {
        let conn = open_in_memory().expect("Failed to init test DB");
        (UserRepository::new(conn.clone()), ListRepository::new(conn))
    }

    fn id_of(id: &RecordId) -> i64 {
        match id {
            RecordId::Int(id) => *id,
            other => panic!("expected numeric id, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let (users, _) = setup_test_db();
        let session = users.create("a@x.com", "secret1").await.expect("Failed to create");
        assert_eq!(session.email, "a@x.com");
        let found = users.find_by_credentials("a@x.com", "secret1").await.unwrap();
        assert_eq!(found.map(|s| s.id), Some(session.id));
    }

    #[tokio::test]
    async fn test_duplicate_user_conflicts() {
        let (users, _) = setup_test_db();
        users.create("a@x.com", "secret1").await.unwrap();
        let err = users.create("a@x.com", "other12").await.unwrap_err();
        assert!(matches!(err, ServerError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_find_by_credentials() {
        let (users, _) = setup_test_db();
        users.create("a@x.com", "secret1").await.unwrap();

        assert!(users.find_by_credentials("a@x.com", "secret1").await.unwrap().is_some());
        assert!(users.find_by_credentials("a@x.com", "wrong").await.unwrap().is_none());
        assert!(users.find_by_credentials("b@x.com", "secret1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lists_newest_first_with_items_in_order() {
        let (users, lists) = setup_test_db();
        let user = id_of(&users.create("a@x.com", "secret1").await.unwrap().id);
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let older = lists.create(user, "Older", t).await.unwrap();
        lists.create(user, "Newer", t + Duration::seconds(1)).await.unwrap();
        lists.add_item(id_of(&older.id), "first", t).await.unwrap();
        lists.add_item(id_of(&older.id), "second", t + Duration::seconds(2)).await.unwrap();

        let found = lists.list_by_user(user).await.unwrap();
        let titles: Vec<&str> = found.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
        let contents: Vec<&str> = found[1].items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert_eq!(found[1].created_at, t);
    }

    #[tokio::test]
    async fn test_lists_are_scoped_to_user() {
        let (users, lists) = setup_test_db();
        let a = id_of(&users.create("a@x.com", "secret1").await.unwrap().id);
        let b = id_of(&users.create("b@x.com", "secret1").await.unwrap().id);

        lists.create(a, "Mine", Utc::now()).await.unwrap();
        assert_eq!(lists.list_by_user(a).await.unwrap().len(), 1);
        assert!(lists.list_by_user(b).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_list_unknown_user() {
        let (_, lists) = setup_test_db();
        let err = lists.create(99, "Nope", Utc::now()).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found.");
    }

    #[tokio::test]
    async fn test_add_item_unknown_list() {
        let (_, lists) = setup_test_db();
        let err = lists.add_item(99, "x", Utc::now()).await.unwrap_err();
        assert_eq!(err.to_string(), "List not found.");
    }

    #[tokio::test]
    async fn test_item_cap() {
        let (users, lists) = setup_test_db();
        let user = id_of(&users.create("a@x.com", "secret1").await.unwrap().id);
        let list = id_of(&lists.create(user, "Big", Utc::now()).await.unwrap().id);

        for i in 0..MAX_ITEMS {
            lists.add_item(list, &format!("item {}", i), Utc::now()).await.unwrap();
        }
        let err = lists.add_item(list, "overflow", Utc::now()).await.unwrap_err();
        assert!(matches!(err, ServerError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Each list is limited to 100 items.");
        assert_eq!(lists.list_by_user(user).await.unwrap()[0].items.len(), MAX_ITEMS);
    }

    #[tokio::test]
    async fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.db");
        {
            let users = UserRepository::new(open_db(&path).unwrap());
            users.create("a@x.com", "secret1").await.unwrap();
        }
        let users = UserRepository::new(open_db(&path).unwrap());
        assert!(users.find_by_credentials("a@x.com", "secret1").await.unwrap().is_some());
    }
}
