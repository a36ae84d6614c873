// src/application/error_handling.rs
//
// Error Handling for Menu Commands
//
// ARCHITECTURE:
// - Maps internal errors → one printable line
// - Validation messages are shown as-is
// - Persistence details go to the log

use crate::error::{AppError, PersistenceError};

/// Line printed for a failed command
pub fn user_message(error: &AppError) -> String {
    match error {
        AppError::Domain(domain_error) => format!("[ERROR] {}", domain_error),

        AppError::Persistence(PersistenceError::Io(io_error)) => {
            log::error!("IO error: {:?}", io_error);
            format!("[ERROR] File operation failed: {}", io_error)
        }

        AppError::Persistence(persistence_error) => {
            log::error!("Snapshot error: {:?}", persistence_error);
            format!("[ERROR] Saved games could not be read: {}", persistence_error)
        }

        AppError::NotFound(_) | AppError::EmptyCatalog | AppError::Config(_) => {
            format!("[ERROR] {}", error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_domain_message_is_prefixed() {
        let err = AppError::Domain(DomainError::DuplicateThemeTag);
        assert_eq!(user_message(&err), "[ERROR] Tag already exists");
    }

    #[test]
    fn test_empty_catalog_message() {
        assert_eq!(
            user_message(&AppError::EmptyCatalog),
            "[ERROR] The catalog has no games"
        );
    }

    #[test]
    fn test_io_message_mentions_file() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AppError::Persistence(PersistenceError::Io(io));
        assert_eq!(
            user_message(&err),
            "[ERROR] File operation failed: no such file"
        );
    }
}
