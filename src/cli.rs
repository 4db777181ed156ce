use std::path::PathBuf;

use clap::Parser;

use crate::models::DishDifficulty;
use crate::workflow::UploadRequest;

/// Upload a photographed recipe to a Notion database
#[derive(Debug, Clone, Parser)]
#[command(name = "cook-upload")]
#[command(about = "Upload image and text to Notion")]
pub struct Cli {
    /// Photo of the recipe (JPEG)
    pub image_path: PathBuf,

    /// Dish difficulty
    #[arg(value_enum, ignore_case = true)]
    pub difficulty: DishDifficulty,

    /// Where the recipe comes from (book and page, URL...)
    #[arg(short = 's', long)]
    pub source: String,

    /// Dish type, one of the database `Type` options
    #[arg(short = 't', long = "type")]
    pub dish_type: String,

    /// Country of origin, by name or ISO 3166 code
    #[arg(short = 'c', long)]
    pub country: Option<String>,

    /// Date as YYYYMMDD; pass an empty value for today
    #[arg(short = 'd', long, num_args = 0..=1, default_missing_value = "")]
    pub date: Option<String>,

    /// Upload even if a page with the same title exists
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Debug output on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_request(&self) -> UploadRequest {
        UploadRequest {
            image_path: self.image_path.clone(),
            difficulty: self.difficulty,
            dish_type: self.dish_type.clone(),
            source: self.source.clone(),
            country: self.country.clone(),
            date: self.date.clone(),
            force: self.force,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const IMAGE: &str = "tests/images/image.jpg";

    #[test]
    fn test_all_params() {
        let cli = Cli::try_parse_from([
            "cook-upload", IMAGE, "Easy", "-s", "Leith p.56", "-d", "20241221", "-c", "Italy",
            "-t", "Meat", "-f",
        ])
        .unwrap();

        assert_eq!(cli.difficulty, DishDifficulty::Easy);
        assert_eq!(cli.source, "Leith p.56");
        assert_eq!(cli.date.as_deref(), Some("20241221"));
        assert_eq!(cli.country.as_deref(), Some("Italy"));
        assert_eq!(cli.dish_type, "Meat");
        assert!(cli.force);
    }

    #[test]
    fn test_lowercase_difficulty_and_optional_fields() {
        let cli =
            Cli::try_parse_from(["cook-upload", IMAGE, "easy", "-s", "Leith p.56", "-t", "Meat"])
                .unwrap();

        assert_eq!(cli.difficulty, DishDifficulty::Easy);
        assert_eq!(cli.country, None);
        assert_eq!(cli.date, None);
        assert!(!cli.force);
    }

    #[test]
    fn test_empty_date_means_today() {
        let cli = Cli::try_parse_from([
            "cook-upload", IMAGE, "hard", "-s", "Source1", "-t", "Meat", "-d",
        ])
        .unwrap();
        assert_eq!(cli.date.as_deref(), Some(""));

        let cli = Cli::try_parse_from([
            "cook-upload", IMAGE, "hard", "-s", "Source1", "-t", "Meat", "-d", "",
        ])
        .unwrap();
        assert_eq!(cli.date.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_params_are_usage_errors() {
        let missing = [
            vec!["cook-upload", IMAGE, "easy", "-d", "20241221", "-c", "Italy", "-t", "Meat"],
            vec!["cook-upload", IMAGE, "-s", "Leith p.56", "-t", "Meat"],
            vec!["cook-upload", IMAGE, "easy", "-s", "Leith p.56", "-c", "Italy"],
        ];
        for args in missing {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.exit_code(), 2);
        }

        let err = Cli::try_parse_from(["cook-upload", IMAGE, "trivial", "-s", "S", "-t", "Meat"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_to_request() {
        let cli = Cli::try_parse_from([
            "cook-upload", IMAGE, "Medium", "-s", "Source1", "-t", "Meat", "-c", "Italy",
        ])
        .unwrap();
        let request = cli.to_request();
        assert_eq!(request.image_path, PathBuf::from(IMAGE));
        assert_eq!(request.difficulty, DishDifficulty::Medium);
        assert_eq!(request.country.as_deref(), Some("Italy"));
        assert!(!request.force);
    }
}
