use chrono::SecondsFormat;
use std::path::PathBuf;

/// The name of the per-user data folder
pub const APP_FOLDER: &str = ".users-api";

/// Get the path to the per-user data folder (`~/.users-api`)
#[must_use]
pub fn get_app_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER)
}

/// Get current timestamp in ISO 8601 format (UTC, millisecond precision)
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert an empty string to `None`, non-empty to `Some`.
#[must_use]
pub fn nonempty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_folder_constant() {
        assert_eq!(APP_FOLDER, ".users-api");
    }

    #[test]
    fn test_get_app_path_ends_with_folder() {
        assert!(get_app_path().ends_with(APP_FOLDER));
    }

    #[test]
    fn test_now_iso_format() {
        let timestamp = now_iso();

        // UTC with a trailing Z and millisecond precision
        assert!(timestamp.ends_with('Z'), "Should be UTC: {timestamp}");
        assert_eq!(timestamp.len(), "2024-01-01T00:00:00.000Z".len());

        let parsed = chrono::DateTime::parse_from_rfc3339(&timestamp);
        assert!(parsed.is_ok(), "Should be valid RFC3339 format");
    }

    #[test]
    fn test_nonempty() {
        assert_eq!(nonempty(None), None);
        assert_eq!(nonempty(Some(String::new())), None);
        assert_eq!(nonempty(Some("x".to_string())), Some("x".to_string()));
    }
}
