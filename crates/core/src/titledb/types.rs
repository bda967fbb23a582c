use serde::{Deserialize, Serialize};

/// A row of the reference database.
///
/// Projected from the bulk dataset down to the three columns the renamer
/// needs. `id` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// Remote identifier, matches `Candidate::source_id`.
    pub id: String,
    /// English/primary title.
    pub primary_title: String,
    /// Title in the movie's original language.
    pub original_title: String,
}
