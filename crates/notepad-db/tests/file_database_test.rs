//! On-disk databases survive reconnects.

use notepad_core::NotepadRepository;
use notepad_db::{Database, PoolConfig};

#[tokio::test]
async fn test_file_database_persists_across_connections() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("notepad.db").display());

    let notepad_id;
    let user_id;
    {
        let db = Database::connect_with_config(&url, PoolConfig::new().max_connections(2))
            .await
            .expect("Failed to open file database");
        db.migrate().await.unwrap();
        db.ping().await.unwrap();

        user_id = sqlx::query("INSERT INTO app_user (email, password_hash, created_at_utc) VALUES ('a@example.com', 'x', '2026-01-01T00:00:00+00:00')")
            .execute(db.pool())
            .await
            .unwrap()
            .last_insert_rowid();
        notepad_id = db
            .notepads
            .insert(notepad_core::CreateNotepadRequest {
                user_id,
                title: "kept".to_string(),
                body: "on disk".to_string(),
            })
            .await
            .unwrap();
        db.pool().close().await;
    }

    let db = Database::connect(&url).await.unwrap();
    // Re-running migrations on an up-to-date database is a no-op.
    db.migrate().await.unwrap();
    let notepad = db.notepads.fetch(notepad_id, user_id).await.unwrap();
    assert_eq!(notepad.title, "kept");
}
