//! Draft persistence scenarios: autosave interval, restoration on
//! init, snapshot round-trips, and edit-mode exclusion.

mod common;

use common::MockContentApi;
use pressroom_authoring::models::ContentType;
use pressroom_authoring::ContentApi;
use pressroom_authoring::persist::{MemorySlotStore, SlotStore, DRAFT_SLOT};
use pressroom_authoring::session::{spawn_autosave, AuthoringSession, SessionMode};
use pressroom_authoring::state::FormField;
use pressroom_common::api::ArticleRecord;
use pressroom_common::config::AuthoringConfig;
use pressroom_common::{NotificationBus, NotificationKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

async fn new_session(
    api: Arc<MockContentApi>,
    store: Arc<MemorySlotStore>,
    notifications: NotificationBus,
) -> AuthoringSession {
    AuthoringSession::start_new(api, store, notifications, &AuthoringConfig::default())
        .await
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_autosave_persists_titled_new_draft_after_interval() {
    let api = Arc::new(MockContentApi::default());
    let store = Arc::new(MemorySlotStore::new());
    let mut session = new_session(api, store.clone(), NotificationBus::new(8)).await;
    session.form_mut().set_text(FormField::Title, "Test");

    let session = Arc::new(RwLock::new(session));
    let handle = spawn_autosave(session.clone(), Duration::from_secs(30));

    // Just short of the interval: nothing persisted yet
    tokio::time::sleep(Duration::from_secs(29)).await;
    assert!(store.load(DRAFT_SLOT).await.unwrap().is_none());

    tokio::time::sleep(Duration::from_secs(2)).await;
    handle.abort();

    let raw = store.load(DRAFT_SLOT).await.unwrap().expect("snapshot written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["formData"]["title"], "Test");
}

#[tokio::test(start_paused = true)]
async fn test_autosave_skips_untitled_draft() {
    let api = Arc::new(MockContentApi::default());
    let store = Arc::new(MemorySlotStore::new());
    let session = new_session(api, store.clone(), NotificationBus::new(8)).await;

    let session = Arc::new(RwLock::new(session));
    let handle = spawn_autosave(session, Duration::from_secs(30));
    tokio::time::sleep(Duration::from_secs(95)).await;
    handle.abort();

    assert!(store.load(DRAFT_SLOT).await.unwrap().is_none());
}

#[tokio::test]
async fn test_restore_on_init_applies_and_consumes_slot() {
    let api = Arc::new(MockContentApi::default());
    let store = Arc::new(MemorySlotStore::new());
    store
        .save(
            DRAFT_SLOT,
            r#"{"formData":{"title":"Draft A"},"selectedStates":["ap"],"selectedArtist":"Nani","selectedGallery":null}"#,
        )
        .await
        .unwrap();

    let bus = NotificationBus::new(8);
    let mut rx = bus.subscribe();
    let session = new_session(api, store.clone(), bus).await;

    assert_eq!(session.form().get().title, "Draft A");
    assert_eq!(session.regions().codes(), ["ap"]);
    assert_eq!(session.artists().selected(), Some("Nani"));
    assert!(store.load(DRAFT_SLOT).await.unwrap().is_none(), "slot consumed");

    let n = rx.recv().await.unwrap();
    assert_eq!(n.kind, NotificationKind::Info);
    assert_eq!(n.title, "Draft restored");
}

#[tokio::test]
async fn test_corrupt_slot_discarded_silently() {
    let api = Arc::new(MockContentApi::default());
    let store = Arc::new(MemorySlotStore::new());
    store.save(DRAFT_SLOT, "{definitely not json").await.unwrap();

    let bus = NotificationBus::new(8);
    let mut rx = bus.subscribe();
    let session = new_session(api, store.clone(), bus).await;

    // Proceeds as though no snapshot existed
    assert_eq!(session.form().get().title, "");
    assert!(store.load(DRAFT_SLOT).await.unwrap().is_none());
    assert!(rx.try_recv().is_err(), "no operator-facing error");
}

#[tokio::test]
async fn test_snapshot_roundtrip_through_slot() {
    let api = Arc::new(MockContentApi::default());
    let store = Arc::new(MemorySlotStore::new());
    let mut session = new_session(api.clone(), store.clone(), NotificationBus::new(8)).await;

    session.form_mut().set_content_type(ContentType::Photo);
    session.form_mut().set_text(FormField::Title, "Awards gallery");
    session.form_mut().set_content("<p>Red carpet</p>");
    session.form_mut().set_text(FormField::GalleryCategory, "events");
    session.form_mut().set_text(FormField::GalleryEntity, "Samantha");
    {
        let images = session.form_mut().images_mut().unwrap();
        images.add("a.jpg", "arrival");
        images.add("b.jpg", "stage");
    }
    session.regions_mut().select("ap");
    session.regions_mut().select("ts");
    session.create_and_select_artist("Nani").await.unwrap();
    let gallery = api.fetch_gallery(42).await.unwrap();
    session.gallery_mut().select(gallery);

    let before = session.snapshot();
    assert!(session.autosave_tick().await.unwrap());

    let restored = new_session(api, store, NotificationBus::new(8)).await;
    assert_eq!(restored.snapshot(), before, "field-for-field equality");
}

#[tokio::test(start_paused = true)]
async fn test_edit_mode_is_never_autosaved() {
    let api = Arc::new(MockContentApi {
        articles: vec![ArticleRecord {
            id: 7,
            title: "Existing".to_string(),
            content_type: "post".to_string(),
            content: "<p>Body</p>".to_string(),
            states: Some(r#"["ts"]"#.to_string()),
            artists: Some(r#"["Nani"]"#.to_string()),
            ..ArticleRecord::default()
        }],
        ..MockContentApi::default()
    });
    let store = Arc::new(MemorySlotStore::new());
    let session = AuthoringSession::start_edit(
        api,
        store.clone(),
        NotificationBus::new(8),
        &AuthoringConfig::default(),
        7,
    )
    .await
    .unwrap();

    assert_eq!(session.mode(), SessionMode::Edit { article_id: 7 });
    assert_eq!(session.form().get().title, "Existing");
    assert_eq!(session.regions().codes(), ["ts"]);
    assert_eq!(session.artists().selected(), Some("Nani"));

    let session = Arc::new(RwLock::new(session));
    let handle = spawn_autosave(session, Duration::from_secs(30));
    tokio::time::sleep(Duration::from_secs(125)).await;
    handle.abort();

    assert!(store.load(DRAFT_SLOT).await.unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_record_fragments_recover_to_defaults() {
    let api = Arc::new(MockContentApi {
        articles: vec![ArticleRecord {
            id: 9,
            title: "Legacy".to_string(),
            content_type: "post".to_string(),
            states: Some("not-json".to_string()),
            artists: Some("{broken".to_string()),
            ..ArticleRecord::default()
        }],
        ..MockContentApi::default()
    });
    let store = Arc::new(MemorySlotStore::new());
    let session = AuthoringSession::start_edit(
        api,
        store,
        NotificationBus::new(8),
        &AuthoringConfig::default(),
        9,
    )
    .await
    .unwrap();

    assert_eq!(session.regions().codes(), ["all"]);
    assert_eq!(session.artists().selected(), None);
}
