use thiserror::Error;

/// Exit status for the not-found path. Argument errors exit with clap's
/// own usage status (2).
pub(crate) const EXIT_NOT_FOUND: u8 = 1;
/// Exit status for unexpected operating-system failures.
pub(crate) const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum RemoveError {
    #[error("There is no .htaccess file here: {path}")]
    NotFound { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_file_path() {
        let err = RemoveError::NotFound {
            path: "/srv/site/.htaccess".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "There is no .htaccess file here: /srv/site/.htaccess"
        );
    }
}
