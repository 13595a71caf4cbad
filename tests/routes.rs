use actix_web_flash_messages::Level;
use markethub_admin::routes::{alert_level_to_str, check_role};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn test_check_role_matches_exactly() {
    let roles = vec!["admin".to_string(), "support".to_string()];
    assert!(check_role("admin", &roles));
    assert!(check_role("support", &roles));
    assert!(!check_role("admins", &roles));
    assert!(!check_role("vendor", &roles));
}
