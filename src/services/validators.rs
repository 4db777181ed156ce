//! Checks on user-supplied values, run before any network call
//! (except the dish type, which needs the database metadata).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::country;
use crate::models::dish::DATE_INPUT_FORMAT;

/// MIME types the extraction prompt is built for
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg"];

/// Returns the canonical ISO 3166 name of a country given by name or code.
pub fn validate_country(origin: &str) -> Result<String, ValidationError> {
    country::lookup(origin)
        .map(|country| country.name.to_string())
        .ok_or_else(|| ValidationError::InvalidCountry(origin.to_string()))
}

/// Image must exist, be a regular file and look like a JPEG.
pub fn validate_image_path(path: &Path) -> Result<PathBuf, ValidationError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(ValidationError::ImageNotFound(display));
    }
    if !path.is_file() {
        return Err(ValidationError::ImageNotAFile(display));
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if !ALLOWED_MIME_TYPES.contains(&mime.essence_str()) {
        return Err(ValidationError::UnsupportedMimeType {
            path: display,
            mime: mime.essence_str().to_string(),
            allowed: ALLOWED_MIME_TYPES.join(", "),
        });
    }

    Ok(path.to_path_buf())
}

/// Parses the `--date` option.
///
/// - not given: no date
/// - given but blank: `today`
/// - otherwise: `YYYYMMDD`
pub fn parse_date(
    input: Option<&str>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, ValidationError> {
    let Some(raw) = input else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Some(today));
    }
    if raw.len() != 8 || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Matches `dish_type` case-insensitively against the allowed options and
/// returns the option as spelled in the database.
pub fn validate_dish_type(dish_type: &str, allowed: &[String]) -> Result<String, ValidationError> {
    let wanted = dish_type.trim().to_lowercase();
    allowed
        .iter()
        .find(|option| option.trim().to_lowercase() == wanted)
        .cloned()
        .ok_or_else(|| ValidationError::InvalidDishType {
            value: dish_type.to_string(),
            allowed: allowed.join(", "),
        })
}

pub fn validate_non_empty(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_validate_country() {
        assert_eq!(validate_country("Italy").unwrap(), "Italy");
        assert_eq!(validate_country("italy").unwrap(), "Italy");
        assert_eq!(validate_country("kr").unwrap(), "Korea, Republic of");
        assert!(matches!(
            validate_country("Wrong"),
            Err(ValidationError::InvalidCountry(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(None, today()).unwrap(), None);
        assert_eq!(parse_date(Some(""), today()).unwrap(), Some(today()));
        assert_eq!(
            parse_date(Some("20241212"), today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 12)
        );
        assert!(parse_date(Some("20243131"), today()).is_err());
        assert!(parse_date(Some("2024-12-12"), today()).is_err());
        assert!(parse_date(Some("+2024121"), today()).is_err());
    }

    #[test]
    fn test_validate_dish_type() {
        let allowed = vec!["Meat".to_string(), "Pasta".to_string(), "Dough".to_string()];
        assert_eq!(validate_dish_type("meat", &allowed).unwrap(), "Meat");
        assert_eq!(validate_dish_type(" PASTA ", &allowed).unwrap(), "Pasta");

        let err = validate_dish_type("Wrong", &allowed).unwrap_err();
        assert_eq!(
            err.to_string(),
            "the dish type Wrong is not valid, allowed: Meat, Pasta, Dough"
        );
    }

    #[test]
    fn test_validate_image_path() {
        let dir = TempDir::new().unwrap();
        let jpg = dir.path().join("image.jpg");
        let png = dir.path().join("image.png");
        fs::write(&jpg, b"\xFF\xD8\xFF").unwrap();
        fs::write(&png, b"\x89PNG").unwrap();

        assert!(validate_image_path(&jpg).is_ok());
        assert!(matches!(
            validate_image_path(&dir.path().join("something.jpg")),
            Err(ValidationError::ImageNotFound(_))
        ));
        assert!(matches!(
            validate_image_path(dir.path()),
            Err(ValidationError::ImageNotAFile(_))
        ));
        assert!(matches!(
            validate_image_path(&png),
            Err(ValidationError::UnsupportedMimeType { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty() {
        assert_eq!(validate_non_empty("source", " Leith p.56 ").unwrap(), "Leith p.56");
        assert!(validate_non_empty("source", "  ").is_err());
    }
}
