//! API Response Handler
//!
//! Handles responses from the Pinata background service by folding them
//! into the registry and carrying out whatever follows (notifications,
//! the refresh after a mutation).

use pintui::services::ApiResponse;

use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - ListResult: pinned-file listing (dropped when superseded)
/// - PinResult: outcome of an upload
/// - UnpinResult: outcome of a delete
/// - VerifyResult: outcome of a credential probe
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    let effects = app.model.registry.apply(response, &app.model.credential);
    app.dispatch(effects);
}
