//! Read secrets from environment variables.
//!
//! Blank values count as unset, so an exported-but-empty variable does not
//! produce a bot that fails on its first request.

use secrecy::SecretString;

use repobot_types::error::ConfigError;

/// Read a mandatory secret from `var`.
pub fn required_secret(var: &str) -> Result<SecretString, ConfigError> {
    optional_secret(var).ok_or_else(|| ConfigError::MissingEnv(var.to_string()))
}

/// Read an optional secret from `var`.
///
/// Non-Unicode values are treated as absent rather than erroring, since
/// secrets must be valid strings to be sent in a request.
pub fn optional_secret(var: &str) -> Option<SecretString> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(SecretString::from(value.trim().to_string())),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            tracing::warn!(var, "ignoring non-unicode value of secret variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    // Each test uses its own variable name so they can run in parallel.

    #[test]
    fn test_required_secret_missing() {
        let err = required_secret("REPOBOT_TEST_SECRET_DEFINITELY_UNSET").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(v) if v == "REPOBOT_TEST_SECRET_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_optional_secret_present_is_trimmed() {
        // SAFETY: unique variable, not read by other tests.
        unsafe { std::env::set_var("REPOBOT_TEST_SECRET_PRESENT", " abc123 \n") };
        let secret = optional_secret("REPOBOT_TEST_SECRET_PRESENT").unwrap();
        assert_eq!(secret.expose_secret(), "abc123");
        unsafe { std::env::remove_var("REPOBOT_TEST_SECRET_PRESENT") };
    }

    #[test]
    fn test_blank_secret_is_absent() {
        // SAFETY: unique variable, not read by other tests.
        unsafe { std::env::set_var("REPOBOT_TEST_SECRET_BLANK", "   ") };
        assert!(optional_secret("REPOBOT_TEST_SECRET_BLANK").is_none());
        assert!(required_secret("REPOBOT_TEST_SECRET_BLANK").is_err());
        unsafe { std::env::remove_var("REPOBOT_TEST_SECRET_BLANK") };
    }
}
