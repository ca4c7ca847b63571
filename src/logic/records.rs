//! Pinned item to FileRecord mapping
//!
//! Pure functions turning the remote listing into the in-memory list.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::api::{PinnedItem, PROVIDER_NAME};
use crate::model::{FileRecord, RemoteDescriptor};

/// Media type shown when the remote metadata carries none
pub const UNKNOWN_MEDIA_TYPE: &str = "unknown";

/// Public gateway URL for a content hash
///
/// # Examples
/// ```
/// use pintui::logic::records::gateway_url;
///
/// assert_eq!(
///     gateway_url("https://gateway.pinata.cloud/", "QmHash"),
///     "https://gateway.pinata.cloud/ipfs/QmHash"
/// );
/// ```
pub fn gateway_url(gateway_base: &str, hash: &str) -> String {
    format!("{}/ipfs/{}", gateway_base.trim_end_matches('/'), hash)
}

/// Synthetic label for items without a name, 1-based
pub fn fallback_name(position: usize) -> String {
    format!("File {}", position + 1)
}

pub fn remote_descriptor(gateway_base: &str, hash: &str) -> RemoteDescriptor {
    let url = gateway_url(gateway_base, hash);
    RemoteDescriptor {
        provider: PROVIDER_NAME.to_string(),
        hash: hash.to_string(),
        gateway: url.clone(),
        url,
    }
}

fn parse_pin_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Map one listing row. `position` is the row's index in the listing.
pub fn map_pinned_item(
    item: &PinnedItem,
    position: usize,
    gateway_base: &str,
    now: DateTime<Utc>,
) -> FileRecord {
    let name = item
        .metadata
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback_name(position));

    let media_type = item
        .metadata
        .media_type()
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
        .to_string();

    FileRecord {
        id: item.ipfs_pin_hash.clone(),
        name,
        size: item.size.unwrap_or(0),
        media_type,
        uploaded_at: parse_pin_date(item.date_pinned.as_deref()).unwrap_or(now),
        remote: remote_descriptor(gateway_base, &item.ipfs_pin_hash),
    }
}

/// Map the whole listing, keeping remote order.
///
/// Rows with an empty hash are skipped and duplicate hashes keep their first
/// occurrence, so record ids stay unique.
pub fn map_pinned_items(
    items: &[PinnedItem],
    gateway_base: &str,
    now: DateTime<Utc>,
) -> Vec<FileRecord> {
    let mut seen = HashSet::new();

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.ipfs_pin_hash.is_empty())
        .filter(|(_, item)| seen.insert(item.ipfs_pin_hash.clone()))
        .map(|(position, item)| map_pinned_item(item, position, gateway_base, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PinMetadata;
    use chrono::TimeZone;
    use std::collections::HashMap;

    const GATEWAY: &str = "https://gateway.pinata.cloud";

    fn item(hash: &str, name: Option<&str>, size: Option<u64>) -> PinnedItem {
        PinnedItem {
            ipfs_pin_hash: hash.to_string(),
            size,
            date_pinned: Some("2024-05-01T10:00:00.000Z".to_string()),
            metadata: PinMetadata {
                name: name.map(str::to_string),
                keyvalues: HashMap::new(),
            },
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_maps_named_item() {
        let mut row = item("QmOne", Some("report.pdf"), Some(2_097_152));
        row.metadata.keyvalues.insert(
            "type".to_string(),
            serde_json::Value::String("application/pdf".to_string()),
        );

        let record = map_pinned_item(&row, 0, GATEWAY, now());
        assert_eq!(record.id, "QmOne");
        assert_eq!(record.name, "report.pdf");
        assert_eq!(record.size, 2_097_152);
        assert_eq!(record.media_type, "application/pdf");
        assert_eq!(record.remote.provider, "Pinata");
        assert_eq!(record.remote.url, "https://gateway.pinata.cloud/ipfs/QmOne");
        assert_eq!(record.remote.url, record.remote.gateway);
        assert_eq!(
            record.uploaded_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_defaults_for_missing_metadata() {
        let mut row = item("QmTwo", None, None);
        row.date_pinned = Some("not a date".to_string());

        let record = map_pinned_item(&row, 2, GATEWAY, now());
        assert_eq!(record.name, "File 3");
        assert_eq!(record.size, 0);
        assert_eq!(record.media_type, UNKNOWN_MEDIA_TYPE);
        assert_eq!(record.uploaded_at, now());
    }

    #[test]
    fn test_blank_name_uses_fallback() {
        let record = map_pinned_item(&item("QmX", Some("   "), Some(1)), 0, GATEWAY, now());
        assert_eq!(record.name, "File 1");
    }

    #[test]
    fn test_keeps_remote_order() {
        let rows = vec![
            item("QmB", Some("b"), Some(1)),
            item("QmA", Some("a"), Some(1)),
            item("QmC", Some("c"), Some(1)),
        ];
        let names: Vec<_> = map_pinned_items(&rows, GATEWAY, now())
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_and_empty_hashes_are_dropped() {
        let rows = vec![
            item("QmA", Some("first"), Some(1)),
            item("", Some("broken"), Some(1)),
            item("QmA", Some("second"), Some(1)),
        ];
        let records = map_pinned_items(&rows, GATEWAY, now());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "first");
    }

    #[test]
    fn test_ids_are_stable_across_mappings() {
        let rows = vec![item("QmA", None, None), item("QmB", None, None)];
        let first = map_pinned_items(&rows, GATEWAY, now());
        let later = map_pinned_items(&rows, GATEWAY, now() + chrono::Duration::hours(1));
        let first_ids: Vec<_> = first.iter().map(|r| r.id.clone()).collect();
        let later_ids: Vec<_> = later.iter().map(|r| r.id.clone()).collect();
        assert_eq!(first_ids, later_ids);
    }
}
