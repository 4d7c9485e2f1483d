/// One parsed movie entry.
///
/// All fields are owned; nothing borrows from the line the record was parsed
/// from. The `languages` field is carried for completeness even though the
/// writer only consumes `title` and `year`.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub languages: String,
    pub rating: f64,
}

impl Movie {
    pub fn new<T: Into<String>, L: Into<String>>(
        title: T,
        year: i32,
        languages: L,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            languages: languages.into(),
            rating,
        }
    }

    /// Builds a record from raw CSV fields using the permissive numeric
    /// conversions: unparsable years become 0, unparsable ratings 0.0.
    pub fn from_fields(title: &str, year: &str, languages: &str, rating: &str) -> Self {
        Self {
            title: title.to_string(),
            year: parse_year(year),
            languages: languages.to_string(),
            rating: parse_rating(rating),
        }
    }

    /// File name of the year bucket this record lands in. Any integer year,
    /// including a negative one, names a file.
    pub fn year_file_name(&self) -> String {
        format!("{}.txt", self.year)
    }
}

/// Permissive integer conversion: a malformed year is 0, never an error.
pub fn parse_year(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}

/// Permissive float conversion: a malformed rating is 0.0, never an error.
pub fn parse_rating(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_well_formed() {
        let movie = Movie::from_fields("The Incredibles", "2004", "English", "7.9");
        assert_eq!(movie.title, "The Incredibles");
        assert_eq!(movie.year, 2004);
        assert_eq!(movie.languages, "English");
        assert_eq!(movie.rating, 7.9);
    }

    #[test]
    fn test_malformed_year_becomes_zero() {
        assert_eq!(parse_year("N/A"), 0);
        assert_eq!(parse_year(""), 0);
        assert_eq!(parse_year("19x9"), 0);
        assert_eq!(parse_year(" 1999 "), 1999);
        assert_eq!(parse_year("-44"), -44);
    }

    #[test]
    fn test_malformed_rating_becomes_zero() {
        assert_eq!(parse_rating("unrated"), 0.0);
        assert_eq!(parse_rating(""), 0.0);
        assert_eq!(parse_rating(" 8.25 "), 8.25);
    }

    #[test]
    fn test_year_file_name() {
        let movie = Movie::new("Metropolis", 1927, "German", 8.3);
        assert_eq!(movie.year_file_name(), "1927.txt");

        let odd = Movie::new("Prehistory", -44, "", 0.0);
        assert_eq!(odd.year_file_name(), "-44.txt");
    }
}
