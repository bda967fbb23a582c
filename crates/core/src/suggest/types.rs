/// A title/year pair suggested by the remote lookup for a query.
///
/// Transient: produced per query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Display title, already stripped of forbidden filename characters.
    pub display_title: String,
    /// Release year. Entries without one are discarded at parse time, so
    /// a retained candidate always carries a year; the field stays
    /// optional to mirror the wire format.
    pub year: Option<u16>,
    /// Remote identifier, the key into the reference database.
    pub source_id: String,
}

impl Candidate {
    /// Format as a canonical filename stem: `"{title} ({year})"`.
    pub fn formatted(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.display_title, year),
            None => self.display_title.clone(),
        }
    }
}

/// Strip characters that are not allowed in target filenames.
pub fn strip_forbidden(title: &str) -> String {
    title.replace([':', '?'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_with_year() {
        let candidate = Candidate {
            display_title: "Alien".to_string(),
            year: Some(1979),
            source_id: "tt0078748".to_string(),
        };
        assert_eq!(candidate.formatted(), "Alien (1979)");
    }

    #[test]
    fn test_formatted_without_year() {
        let candidate = Candidate {
            display_title: "Alien".to_string(),
            year: None,
            source_id: "tt0078748".to_string(),
        };
        assert_eq!(candidate.formatted(), "Alien");
    }

    #[test]
    fn test_strip_forbidden() {
        assert_eq!(strip_forbidden("Alien: Covenant"), "Alien Covenant");
        assert_eq!(strip_forbidden("Who Framed Roger Rabbit?"), "Who Framed Roger Rabbit");
        assert_eq!(strip_forbidden("Heat"), "Heat");
    }
}
