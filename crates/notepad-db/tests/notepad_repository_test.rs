//! Notepad repository behavior against a migrated in-memory database.

use notepad_core::{
    CreateNotepadRequest, Error, NotepadRepository, UpdateNotepadRequest,
};
use notepad_db::test_fixtures::{TestDataBuilder, TestDatabase};

#[tokio::test]
async fn test_insert_and_fetch() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;

    let id = test_db
        .db
        .notepads
        .insert(CreateNotepadRequest {
            user_id,
            title: "sample title".to_string(),
            body: "sample body".to_string(),
        })
        .await
        .expect("Failed to insert notepad");

    let notepad = test_db.db.notepads.fetch(id, user_id).await.unwrap();
    assert_eq!(notepad.id, id);
    assert_eq!(notepad.user_id, user_id);
    assert_eq!(notepad.title, "sample title");
    assert_eq!(notepad.body, "sample body");
    assert_eq!(notepad.created_at_utc, notepad.updated_at_utc);
}

#[tokio::test]
async fn test_list_empty_for_new_user() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;

    let notepads = test_db.db.notepads.list(user_id).await.unwrap();
    assert!(notepads.is_empty());
}

#[tokio::test]
async fn test_list_ordered_by_id() {
    let test_db = TestDatabase::new().await;
    let data = TestDataBuilder::new(&test_db.db)
        .with_user("owner@example.com")
        .with_notepad("first", "one")
        .with_notepad("second", "two")
        .with_notepad("third", "three")
        .build()
        .await;

    let notepads = test_db.db.notepads.list(data.user_ids[0]).await.unwrap();
    let ids: Vec<i64> = notepads.iter().map(|n| n.id).collect();
    assert_eq!(ids, data.notepad_ids);
    assert_eq!(notepads[0].title, "first");
    assert_eq!(notepads[2].title, "third");
}

#[tokio::test]
async fn test_update_replaces_title_and_body() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;
    let id = test_db.create_notepad(user_id, "old title", "old body").await;

    test_db
        .db
        .notepads
        .update(
            id,
            user_id,
            UpdateNotepadRequest {
                title: "new title".to_string(),
                body: "new body".to_string(),
            },
        )
        .await
        .unwrap();

    let notepad = test_db.db.notepads.fetch(id, user_id).await.unwrap();
    assert_eq!(notepad.title, "new title");
    assert_eq!(notepad.body, "new body");
    assert!(notepad.updated_at_utc >= notepad.created_at_utc);
}

#[tokio::test]
async fn test_update_missing_notepad() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;

    let result = test_db
        .db
        .notepads
        .update(
            999,
            user_id,
            UpdateNotepadRequest {
                title: "t".to_string(),
                body: "b".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(Error::NotepadNotFound(999))));
}

#[tokio::test]
async fn test_delete_then_fetch_not_found() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;
    let id = test_db.create_notepad(user_id, "title", "body").await;

    test_db.db.notepads.delete(id, user_id).await.unwrap();

    let result = test_db.db.notepads.fetch(id, user_id).await;
    assert!(matches!(result, Err(Error::NotepadNotFound(_))));
    assert!(!test_db.db.notepads.exists(id, user_id).await.unwrap());

    let again = test_db.db.notepads.delete(id, user_id).await;
    assert!(matches!(again, Err(Error::NotepadNotFound(_))));
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;
    let first = test_db.create_notepad(user_id, "title", "body").await;
    test_db.db.notepads.delete(first, user_id).await.unwrap();

    let second = test_db.create_notepad(user_id, "title", "body").await;
    assert!(second > first);
}

#[tokio::test]
async fn test_other_users_notepads_are_invisible() {
    let test_db = TestDatabase::new().await;
    let owner = test_db.create_user("owner@example.com").await;
    let intruder = test_db.create_user("intruder@example.com").await;
    let id = test_db.create_notepad(owner, "private", "secret").await;

    assert!(test_db.db.notepads.list(intruder).await.unwrap().is_empty());
    assert!(!test_db.db.notepads.exists(id, intruder).await.unwrap());
    assert!(matches!(
        test_db.db.notepads.fetch(id, intruder).await,
        Err(Error::NotepadNotFound(_))
    ));
    assert!(matches!(
        test_db.db.notepads.delete(id, intruder).await,
        Err(Error::NotepadNotFound(_))
    ));

    // Still intact for the owner.
    let notepad = test_db.db.notepads.fetch(id, owner).await.unwrap();
    assert_eq!(notepad.body, "secret");
}

#[tokio::test]
async fn test_count() {
    let test_db = TestDatabase::new().await;
    let data = TestDataBuilder::new(&test_db.db)
        .with_user("a@example.com")
        .with_notepad("one", "1")
        .with_notepad("two", "2")
        .with_user("b@example.com")
        .with_notepad("three", "3")
        .build()
        .await;

    assert_eq!(test_db.db.notepads.count(data.user_ids[0]).await.unwrap(), 2);
    assert_eq!(test_db.db.notepads.count(data.user_ids[1]).await.unwrap(), 1);
}

#[tokio::test]
async fn test_blank_title_rejected_by_schema() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;

    let result = test_db
        .db
        .notepads
        .insert(CreateNotepadRequest {
            user_id,
            title: "   ".to_string(),
            body: "body".to_string(),
        })
        .await;
    assert!(matches!(result, Err(Error::Database(_))));
    assert_eq!(test_db.db.notepads.count(user_id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unicode_round_trip() {
    let test_db = TestDatabase::new().await;
    let user_id = test_db.create_user("owner@example.com").await;
    let id = test_db
        .create_notepad(user_id, "Einkaufsliste ✓", "Äpfel\n<b>Brot</b>\n日本語")
        .await;

    let notepad = test_db.db.notepads.fetch(id, user_id).await.unwrap();
    assert_eq!(notepad.title, "Einkaufsliste ✓");
    assert_eq!(notepad.body, "Äpfel\n<b>Brot</b>\n日本語");
}
