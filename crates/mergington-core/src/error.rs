use thiserror::Error;

/// Display text is the wire contract: the server surfaces these strings
/// verbatim in the `detail` field of error responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub type Result<T> = std::result::Result<T, ActivityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_matches_wire_contract() {
        assert_eq!(ActivityError::ActivityNotFound.to_string(), "Activity not found");
        assert_eq!(
            ActivityError::AlreadySignedUp.to_string(),
            "Student is already signed up for this activity"
        );
        assert_eq!(
            ActivityError::NotSignedUp.to_string(),
            "Student is not signed up for this activity"
        );
    }
}
