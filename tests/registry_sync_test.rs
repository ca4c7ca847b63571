//! Integration tests for the file registry sync flow
//!
//! These tests drive `RegistryModel` against an in-process fake Pinata:
//! every request effect is executed through `execute_request` and the
//! response is folded back in, the same way the UI loop does it.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pintui::api::{PinMetadata, PinResponse, PinataError, PinnedItem, PinningService};
use pintui::credentials::Credential;
use pintui::logic::file::stage_file;
use pintui::model::{Effect, Notification, NotificationKind, RegistryModel, StagedFile};
use pintui::services::{execute_request, spawn_api_service, ApiRequest, ApiResponse};

/// In-memory stand-in for the Pinata API
#[derive(Default)]
struct FakePinata {
    /// Pinned rows, newest first like the real listing
    pins: Mutex<Vec<PinnedItem>>,
    /// Names of the calls made, in order
    calls: Mutex<Vec<&'static str>>,
    /// Status returned by the next list call instead of the rows
    fail_next_list: Mutex<Option<(u16, String)>>,
    next_id: Mutex<u32>,
}

impl FakePinata {
    fn with_pins(names: &[&str]) -> Self {
        let fake = FakePinata::default();
        for name in names.iter().rev() {
            fake.insert(name, 10, "text/plain");
        }
        fake
    }

    fn insert(&self, name: &str, size: u64, media_type: &str) -> String {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let hash = format!("QmFakeHash{:04}", *next);

        let mut keyvalues = HashMap::new();
        keyvalues.insert("type".to_string(), serde_json::json!(media_type));

        self.pins.lock().unwrap().insert(
            0,
            PinnedItem {
                ipfs_pin_hash: hash.clone(),
                size: Some(size),
                date_pinned: Some("2024-05-01T12:00:00.000Z".to_string()),
                metadata: PinMetadata {
                    name: Some(name.to_string()),
                    keyvalues,
                },
            },
        );
        hash
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PinningService for FakePinata {
    async fn list_pins(&self, _credential: &Credential) -> Result<Vec<PinnedItem>, PinataError> {
        self.record("list");
        if let Some((status, body)) = self.fail_next_list.lock().unwrap().take() {
            return Err(PinataError::Status { status, body });
        }
        Ok(self.pins.lock().unwrap().clone())
    }

    async fn pin_file(
        &self,
        _credential: &Credential,
        file: &StagedFile,
    ) -> Result<PinResponse, PinataError> {
        self.record("pin");
        let hash = self.insert(&file.name, file.size, &file.media_type);
        Ok(PinResponse {
            ipfs_hash: hash,
            pin_size: file.size,
            timestamp: None,
        })
    }

    async fn unpin(&self, _credential: &Credential, hash: &str) -> Result<(), PinataError> {
        self.record("unpin");
        let mut pins = self.pins.lock().unwrap();
        let before = pins.len();
        pins.retain(|p| p.ipfs_pin_hash != hash);
        if pins.len() == before {
            return Err(PinataError::Status {
                status: 404,
                body: "NOT_FOUND".to_string(),
            });
        }
        Ok(())
    }

    async fn test_authentication(&self, _credential: &Credential) -> Result<String, PinataError> {
        self.record("auth");
        Ok("Congratulations! You are communicating with the Pinata API!".to_string())
    }
}

fn cred() -> Credential {
    Credential::new("test-key", "test-secret")
}

fn registry() -> RegistryModel {
    RegistryModel::new("https://gateway.pinata.cloud", false)
}

/// Execute effects until none are left, returning the notifications raised
async fn run_effects(
    service: &FakePinata,
    model: &mut RegistryModel,
    credential: &Credential,
    effects: Vec<Effect>,
) -> Vec<Notification> {
    let mut queue: VecDeque<Effect> = effects.into();
    let mut notifications = Vec::new();

    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::Request(request) => {
                let response = execute_request(service, request).await;
                queue.extend(model.apply(response, credential));
            }
            Effect::Notify(notification) => notifications.push(notification),
        }
    }

    notifications
}

fn take_request(effects: Vec<Effect>) -> ApiRequest {
    let mut requests: Vec<ApiRequest> = effects
        .into_iter()
        .filter_map(|e| match e {
            Effect::Request(r) => Some(r),
            Effect::Notify(_) => None,
        })
        .collect();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// Test: refresh with a non-usable credential yields an empty list and no call
#[tokio::test]
async fn test_refresh_without_credentials_makes_no_call() {
    let fake = FakePinata::with_pins(&["a.txt"]);
    let mut model = registry();

    for credential in [
        Credential::default(),
        Credential::new("key", ""),
        Credential::new("", "secret"),
    ] {
        let effects = model.refresh(&credential);
        let notes = run_effects(&fake, &mut model, &credential, effects).await;
        assert!(notes.is_empty());
        assert!(model.files.is_empty());
    }

    assert!(fake.calls().is_empty(), "no remote call expected");
}

/// Test: refresh maps the remote rows in order
#[tokio::test]
async fn test_refresh_loads_remote_listing() {
    let fake = FakePinata::with_pins(&["newest.png", "older.txt"]);
    let mut model = registry();

    let effects = model.refresh(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;

    let names: Vec<&str> = model.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["newest.png", "older.txt"]);
    assert_eq!(model.files[0].media_type, "text/plain");
    assert!(model.files[0]
        .remote
        .url
        .starts_with("https://gateway.pinata.cloud/ipfs/QmFakeHash"));
    assert_eq!(fake.calls(), vec!["list"]);
}

/// Test: upload then the follow-up refresh yields a record with the pinned hash
#[tokio::test]
async fn test_upload_then_refresh_contains_pinned_hash() {
    let fake = FakePinata::default();
    let mut model = registry();

    model.select_file(StagedFile {
        path: "/tmp/photo.jpg".into(),
        name: "photo.jpg".to_string(),
        size: 4096,
        media_type: "image/jpeg".to_string(),
    });

    let effects = model.upload(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;

    let pinned_hash = fake.pins.lock().unwrap()[0].ipfs_pin_hash.clone();
    assert_eq!(fake.calls(), vec!["pin", "list"]);
    assert_eq!(model.files.len(), 1);
    assert_eq!(model.files[0].id, pinned_hash);
    assert_eq!(model.files[0].remote.hash, pinned_hash);
    assert!(!model.uploading);
    assert_eq!(model.upload_progress, 0);
    assert!(model.selected_file.is_none());
}

/// Test: a successful delete removes exactly that record
#[tokio::test]
async fn test_delete_removes_exactly_one_record() {
    let fake = FakePinata::with_pins(&["a.txt", "b.txt", "c.txt"]);
    let mut model = registry();
    let effects = model.refresh(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;

    let target = model.files[1].id.clone();
    let keep: Vec<String> = model
        .files
        .iter()
        .filter(|f| f.id != target)
        .map(|f| f.id.clone())
        .collect();

    let effects = model.delete(&target, &cred());
    let notes = run_effects(&fake, &mut model, &cred(), effects).await;

    let ids: Vec<String> = model.files.iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids, keep);
    assert!(model.deleting.is_none());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Success);
}

/// Test: deleting an unknown id makes no call and changes nothing
#[tokio::test]
async fn test_delete_unknown_id_is_noop() {
    let fake = FakePinata::with_pins(&["a.txt"]);
    let mut model = registry();
    let effects = model.refresh(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;
    let before = model.files.clone();

    let effects = model.delete("QmNotInTheList", &cred());
    assert!(effects.is_empty());
    assert_eq!(model.files, before);
    assert_eq!(fake.calls(), vec!["list"]);
}

/// Test: a failed refresh yields an empty list and an error notification
#[tokio::test]
async fn test_failed_refresh_clears_list() {
    let fake = FakePinata::with_pins(&["a.txt", "b.txt"]);
    let mut model = registry();
    let effects = model.refresh(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;
    assert_eq!(model.files.len(), 2);

    *fake.fail_next_list.lock().unwrap() = Some((401, "Invalid API key".to_string()));
    let effects = model.refresh(&cred());
    let notes = run_effects(&fake, &mut model, &cred(), effects).await;

    assert!(model.files.is_empty());
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
    assert!(notes[0].message.contains("Invalid API key"));
}

/// Test: with keep-on-error the last list survives a failed refresh, marked stale
#[tokio::test]
async fn test_failed_refresh_keeps_stale_list_when_configured() {
    let fake = FakePinata::with_pins(&["a.txt"]);
    let mut model = RegistryModel::new("https://gateway.pinata.cloud", true);
    let effects = model.refresh(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;

    *fake.fail_next_list.lock().unwrap() = Some((500, "Internal".to_string()));
    let effects = model.refresh(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;
    assert_eq!(model.files.len(), 1);
    assert!(model.stale);

    // Next good refresh clears the marker
    let effects = model.refresh(&cred());
    run_effects(&fake, &mut model, &cred(), effects).await;
    assert!(!model.stale);
}

/// Test: staging report.pdf (2 MiB) and uploading ends with one success
/// and a matching record after the refresh
#[tokio::test]
async fn test_end_to_end_upload_of_report_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::File::create(&path)
        .unwrap()
        .set_len(2_097_152)
        .unwrap();

    let fake = FakePinata::default();
    let mut model = registry();

    let staged = stage_file(&path).unwrap();
    assert_eq!(staged.media_type, "application/pdf");
    model.select_file(staged);

    let effects = model.upload(&cred());
    let notes = run_effects(&fake, &mut model, &cred(), effects).await;

    let successes: Vec<&Notification> = notes
        .iter()
        .filter(|n| n.kind == NotificationKind::Success)
        .collect();
    assert_eq!(successes.len(), 1);
    assert_eq!(notes.len(), 1);

    let record = model
        .files
        .iter()
        .find(|f| f.name == "report.pdf")
        .expect("report.pdf listed after refresh");
    assert_eq!(record.size, 2_097_152);
    assert!(!record.remote.hash.is_empty());
    assert_eq!(record.media_type, "application/pdf");
}

/// Test: an upload finishing while a listing is in flight gets its refresh
/// queued, and the re-issued listing shows the new file
#[tokio::test]
async fn test_refresh_requested_during_listing_is_reissued() {
    let fake = FakePinata::default();
    let mut model = registry();

    // Listing starts, but its response arrives late
    let list_request = take_request(model.refresh(&cred()));
    let late_list = execute_request(&fake, list_request).await;

    model.select_file(StagedFile {
        path: "/tmp/notes.txt".into(),
        name: "notes.txt".to_string(),
        size: 12,
        media_type: "text/plain".to_string(),
    });
    let pin_request = take_request(model.upload(&cred()));
    let pinned = execute_request(&fake, pin_request).await;

    // The post-upload refresh is queued behind the in-flight listing
    let after_pin = model.apply(pinned, &cred());
    assert!(!after_pin.iter().any(|e| matches!(e, Effect::Request(_))));
    assert!(model.refresh_queued());

    // The late (empty) listing lands, then the queued one is issued
    let effects = model.apply(late_list, &cred());
    assert!(model.files.is_empty());
    run_effects(&fake, &mut model, &cred(), effects).await;

    assert_eq!(model.files.len(), 1);
    assert_eq!(model.files[0].name, "notes.txt");
    assert_eq!(fake.calls(), vec!["list", "pin", "list"]);
}

/// Test: a listing abandoned by clearing credentials cannot repopulate the list
#[tokio::test]
async fn test_abandoned_listing_is_ignored() {
    let fake = FakePinata::with_pins(&["secret-doc.txt"]);
    let mut model = registry();

    let request = take_request(model.refresh(&cred()));
    let response = execute_request(&fake, request).await;

    // Credentials forgotten before the response arrives
    model.refresh(&Credential::default());
    let effects = model.apply(response, &Credential::default());

    assert!(effects.is_empty());
    assert!(model.files.is_empty());
    assert!(!model.listing());
}

/// Test: a second upload while one is running is refused
#[tokio::test]
async fn test_concurrent_upload_is_refused() {
    let mut model = registry();
    model.select_file(StagedFile {
        path: "/tmp/a.bin".into(),
        name: "a.bin".to_string(),
        size: 1,
        media_type: "application/octet-stream".to_string(),
    });

    let first = model.upload(&cred());
    assert!(matches!(first.as_slice(), [Effect::Request(ApiRequest::PinFile { .. })]));

    let second = model.upload(&cred());
    assert!(matches!(
        second.as_slice(),
        [Effect::Notify(Notification { kind: NotificationKind::Warning, .. })]
    ));
}

/// Test: verify reports the auth probe result
#[tokio::test]
async fn test_verify_credentials_reports_success() {
    let fake = FakePinata::default();
    let mut model = registry();

    let effects = model.verify(&cred());
    let notes = run_effects(&fake, &mut model, &cred(), effects).await;

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Success);
    assert!(notes[0].message.contains("Pinata API"));
    assert_eq!(fake.calls(), vec!["auth"]);
}

/// Test: the background worker answers requests over its channels
#[tokio::test]
async fn test_api_worker_round_trip() {
    let fake = Arc::new(FakePinata::with_pins(&["a.txt", "b.txt"]));
    let (tx, mut rx) = spawn_api_service(fake.clone());

    tx.send(ApiRequest::ListPins {
        credential: cred(),
        generation: 7,
    })
    .unwrap();

    let response = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("worker responded in time")
        .expect("channel open");

    match response {
        ApiResponse::ListResult { generation, items } => {
            assert_eq!(generation, 7);
            assert_eq!(items.unwrap().len(), 2);
        }
        other => panic!("unexpected response {:?}", other),
    }
}
