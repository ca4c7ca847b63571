use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{PinResponse, PinataError, PinnedItem, PinningService};
use crate::credentials::Credential;
use crate::model::StagedFile;

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated mutations (pin, unpin, verify)
    Medium, // List refreshes
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch the pinned-items listing
    ListPins {
        credential: Credential,
        generation: u64,
    },

    /// Upload and pin a staged file
    PinFile {
        credential: Credential,
        file: StagedFile,
    },

    /// Unpin the record `id` by its content hash
    Unpin {
        credential: Credential,
        id: String,
        hash: String,
    },

    /// Probe the credentials against the auth endpoint
    VerifyCredentials { credential: Credential },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::ListPins { .. } => Priority::Medium,
            _ => Priority::High,
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ListResult {
        generation: u64,
        items: Result<Vec<PinnedItem>, PinataError>,
    },

    PinResult {
        file: StagedFile,
        result: Result<PinResponse, PinataError>,
    },

    UnpinResult {
        id: String,
        result: Result<(), PinataError>,
    },

    VerifyResult {
        result: Result<String, PinataError>,
    },
}

/// Execute an API request and return the response
pub async fn execute_request<S>(service: &S, request: ApiRequest) -> ApiResponse
where
    S: PinningService + ?Sized,
{
    match request {
        ApiRequest::ListPins {
            credential,
            generation,
        } => {
            let items = service.list_pins(&credential).await;
            ApiResponse::ListResult { generation, items }
        }

        ApiRequest::PinFile { credential, file } => {
            let result = service.pin_file(&credential, &file).await;
            ApiResponse::PinResult { file, result }
        }

        ApiRequest::Unpin {
            credential,
            id,
            hash,
        } => {
            let result = service.unpin(&credential, &hash).await;
            ApiResponse::UnpinResult { id, result }
        }

        ApiRequest::VerifyCredentials { credential } => {
            let result = service.test_authentication(&credential).await;
            ApiResponse::VerifyResult { result }
        }
    }
}

/// API service worker that processes requests in the background
pub struct ApiService {
    service: Arc<dyn PinningService>,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: usize,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<()>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        service: Arc<dyn PinningService>,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<()>,
    ) -> Self {
        Self {
            service,
            request_queue: VecDeque::new(),
            in_flight: 0,
            response_tx,
            completion_tx,
            max_concurrent: 4,
        }
    }

    /// Add a request to the queue, high priority first
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();

        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight >= self.max_concurrent {
            return;
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return;
        };

        self.in_flight += 1;

        let service = Arc::clone(&self.service);
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No per-request retries; every failure is reported once
        tokio::spawn(async move {
            let response = execute_request(service.as_ref(), request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(());
        });
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    service: Arc<dyn PinningService>,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<()>();

    tokio::spawn(async move {
        let mut service = ApiService::new(service, response_tx, completion_tx);
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // UI side dropped the sender, shut down
                        None => break,
                    }
                }

                Some(()) = completion_rx.recv() => {
                    service.in_flight = service.in_flight.saturating_sub(1);
                    if service.in_flight > 0 {
                        tracing::debug!(in_flight = service.in_flight, "API request completed");
                    }
                }

                _ = tick.tick() => {
                    while !service.request_queue.is_empty() && service.in_flight < service.max_concurrent {
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
