//! Form validation rules, checked on submit before anything hits the network.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::services::contract::parse_address;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{3,30}$").expect("valid username regex"));

static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,18})?$").expect("valid price regex"));

/// Largest accepted upload, 20 MB
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Image types accepted for artworks and covers
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required { field: &'static str },
    TooShort { field: &'static str, min: usize },
    TooLong { field: &'static str, max: usize },
    InvalidEmail,
    InvalidUsername,
    InvalidPrice,
    InvalidWalletAddress,
    InvalidUrl,
    FileTooLarge { max_bytes: u64 },
    UnsupportedFileType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::TooShort { field, min } => write!(f, "{} must be at least {} characters", field, min),
            Self::TooLong { field, max } => write!(f, "{} must be at most {} characters", field, max),
            Self::InvalidEmail => write!(f, "Enter a valid email address"),
            Self::InvalidUsername => {
                write!(f, "Username may only contain letters, numbers and underscores")
            }
            Self::InvalidPrice => write!(f, "Enter a price like 0.05"),
            Self::InvalidWalletAddress => write!(f, "Enter a valid wallet address (0x...)"),
            Self::InvalidUrl => write!(f, "Enter a valid http(s) URL"),
            Self::FileTooLarge { max_bytes } => {
                write!(f, "File must be smaller than {} MB", max_bytes / (1024 * 1024))
            }
            Self::UnsupportedFileType(mime) => write!(f, "Unsupported file type: {}", mime),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Length bounds in characters, on the trimmed value
pub fn length(field: &'static str, value: &str, min: usize, max: usize) -> ValidationResult {
    let len = value.trim().chars().count();
    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if len > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub fn email(value: &str) -> ValidationResult {
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn username(value: &str) -> ValidationResult {
    if USERNAME_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUsername)
    }
}

/// Non-negative decimal with at most 18 fractional digits
pub fn price(value: &str) -> ValidationResult {
    if PRICE_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrice)
    }
}

/// Same rule the contract call encoder applies
pub fn wallet_address(value: &str) -> ValidationResult {
    parse_address(value)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidWalletAddress)
}

pub fn http_url(value: &str) -> ValidationResult {
    match url::Url::parse(value.trim()) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidUrl),
    }
}

pub fn file_size(size: u64, max_bytes: u64) -> ValidationResult {
    if size > max_bytes {
        return Err(ValidationError::FileTooLarge { max_bytes });
    }
    Ok(())
}

pub fn file_type(mime: &str, allowed: &[&str]) -> ValidationResult {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(mime)) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFileType(mime.to_string()))
    }
}

/// Image upload check
pub fn image_file(mime: &str, size: u64) -> ValidationResult {
    file_type(mime, ALLOWED_IMAGE_TYPES)?;
    file_size(size, MAX_UPLOAD_BYTES)
}

/// First failure among a set of rules
pub fn first_error(results: impl IntoIterator<Item = ValidationResult>) -> Option<String> {
    results.into_iter().find_map(|r| r.err()).map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_length() {
        assert!(required("Name", "  ").is_err());
        assert!(required("Name", "Dusk").is_ok());
        assert_eq!(length("Name", "ab", 3, 10), Err(ValidationError::TooShort { field: "Name", min: 3 }));
        assert_eq!(length("Name", "abcdefghijk", 3, 10), Err(ValidationError::TooLong { field: "Name", max: 10 }));
        assert!(length("Name", " abc ", 3, 10).is_ok());
    }

    #[test]
    fn test_price() {
        assert!(price("0.015").is_ok());
        assert!(price("12").is_ok());
        assert!(price("1.").is_err());
        assert!(price("-1").is_err());
        assert!(price("1e3").is_err());
        assert!(price("0.0000000000000000001").is_err());
    }

    #[test]
    fn test_wallet_address() {
        assert!(wallet_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_ok());
        assert!(wallet_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
        assert!(wallet_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeZ").is_err());
        assert!(wallet_address(" 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed ").is_ok());
        assert!(wallet_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeA").is_err());
    }

    #[test]
    fn test_email_username_url() {
        assert!(email("ada@example.com").is_ok());
        assert!(email("ada@example").is_err());
        assert!(username("ada_l").is_ok());
        assert!(username("ada l").is_err());
        assert!(http_url("https://example.com/a").is_ok());
        assert!(http_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_files() {
        assert!(image_file("image/png", 1024).is_ok());
        assert!(matches!(image_file("image/svg+xml", 10), Err(ValidationError::UnsupportedFileType(_))));
        assert!(matches!(
            image_file("image/png", MAX_UPLOAD_BYTES + 1),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_first_error() {
        let msg = first_error([required("Title", "x"), price("abc"), email("nope")]);
        assert_eq!(msg.as_deref(), Some("Enter a price like 0.05"));
        assert_eq!(first_error([required("Title", "x")]), None);
    }
}
