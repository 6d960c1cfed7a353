use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is not stored here: it is
/// the directory's map key, used verbatim in responses and messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Display metadata only — signups past this number
    /// are not rejected.
    pub max_participants: u32,
    /// Enrolled student emails, insertion-ordered, no duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
