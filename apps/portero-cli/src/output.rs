//! Terminal output helpers for consistent CLI formatting

use crate::error::{CliError, CliResult};
use uuid::Uuid;

/// Check if color output is enabled
fn use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message (green checkmark)
pub fn print_success(message: &str) {
    if use_color() {
        println!("\x1b[32m✓\x1b[0m {}", message);
    } else {
        println!("OK: {}", message);
    }
}

/// Print a warning message (yellow)
pub fn print_warning(message: &str) {
    if use_color() {
        eprintln!("\x1b[33mWarning:\x1b[0m {}", message);
    } else {
        eprintln!("Warning: {}", message);
    }
}

/// Print an info message (blue)
pub fn print_info(message: &str) {
    if use_color() {
        println!("\x1b[34mℹ\x1b[0m {}", message);
    } else {
        println!("Info: {}", message);
    }
}

/// Truncate a string for table display, handling Unicode safely.
///
/// If the string exceeds `max_len`, it is truncated with "..." appended.
/// Uses character boundaries to avoid panicking on multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Validate pagination flags (page and limit).
///
/// - `page` is 1-based and must be >= 1
/// - `limit` must be between 1 and 100 inclusive
pub fn validate_pagination(page: u32, limit: u32) -> CliResult<()> {
    if page < 1 {
        return Err(CliError::Validation("Page must be >= 1.".to_string()));
    }
    if !(1..=100).contains(&limit) {
        return Err(CliError::Validation(
            "Limit must be between 1 and 100.".to_string(),
        ));
    }
    Ok(())
}

/// Parse a record ID from the command line
pub fn parse_uuid(id_str: &str, resource: &str) -> CliResult<Uuid> {
    Uuid::parse_str(id_str).map_err(|_| {
        CliError::Validation(format!(
            "Invalid {resource} ID '{id_str}'. Must be a valid UUID."
        ))
    })
}

/// Footer line for paginated tables. `number` in the envelope is 0-based.
pub fn page_footer(shown: usize, number: u32, total_pages: u32, total_elements: u64) -> String {
    format!(
        "Showing {} record(s), page {} of {} ({} total)",
        shown,
        number + 1,
        total_pages,
        total_elements
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_color_respects_no_color() {
        // Save current value
        let had_no_color = std::env::var("NO_COLOR").is_ok();

        std::env::set_var("NO_COLOR", "1");
        assert!(!use_color());

        std::env::remove_var("NO_COLOR");
        assert!(use_color());

        // Restore
        if had_no_color {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hola", 10), "hola");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("hola!", 5), "hola!");
    }

    #[test]
    fn test_truncate_long_string() {
        let result = truncate("centro de control de acceso", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_unicode() {
        // Should not panic on multi-byte chars
        let result = truncate("sección de administración", 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_validate_pagination_valid() {
        assert!(validate_pagination(1, 10).is_ok());
        assert!(validate_pagination(7, 100).is_ok());
    }

    #[test]
    fn test_validate_pagination_invalid_page() {
        assert!(validate_pagination(0, 10).is_err());
    }

    #[test]
    fn test_validate_pagination_invalid_limit() {
        assert!(validate_pagination(1, 0).is_err());
        assert!(validate_pagination(1, 101).is_err());
    }

    #[test]
    fn test_parse_uuid_valid() {
        let valid = "a1b2c3d4-e5f6-7890-abcd-ef1234567890";
        assert!(parse_uuid(valid, "seccion").is_ok());
    }

    #[test]
    fn test_parse_uuid_invalid_names_resource() {
        let err = parse_uuid("not-a-uuid", "usuario").unwrap_err();
        assert!(err.to_string().contains("usuario"));
    }

    #[test]
    fn test_page_footer_shows_one_based_page() {
        let footer = page_footer(10, 0, 4, 37);
        assert!(footer.contains("page 1 of 4"));
        assert!(footer.contains("37 total"));
    }
}
