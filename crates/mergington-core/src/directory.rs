use std::collections::BTreeMap;

use crate::activity::Activity;
use crate::error::{ActivityError, Result};

/// The in-memory collection of all activities, keyed by name.
///
/// Activities are fixed for the life of the directory; only rosters mutate,
/// and only through [`sign_up`](Self::sign_up) / [`unregister`](Self::unregister).
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with the built-in school catalog.
    pub fn seeded() -> Self {
        Self {
            activities: crate::seed::default_activities(),
        }
    }

    pub fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    // ---------------------------------------------------------------------------
    // Roster mutations
    // ---------------------------------------------------------------------------

    /// Enroll `email` in the named activity.
    ///
    /// The name must match a directory key exactly (case-sensitive, spaces
    /// included). Fails without touching the roster if the student is
    /// already enrolled.
    pub fn sign_up(&mut self, activity_name: &str, email: &str) -> Result<()> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(ActivityError::ActivityNotFound)?;
        if activity.is_enrolled(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the named activity's roster.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<()> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(ActivityError::ActivityNotFound)?;
        if !activity.is_enrolled(email) {
            return Err(ActivityError::NotSignedUp);
        }
        activity.participants.retain(|p| p != email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_directory_has_nine_activities() {
        let directory = ActivityDirectory::seeded();
        assert_eq!(directory.len(), 9);
    }

    #[test]
    fn chess_club_preseeds_michael() {
        let directory = ActivityDirectory::seeded();
        let chess = directory.get("Chess Club").expect("Chess Club seeded");
        assert!(chess.is_enrolled("michael@mergington.edu"));
    }

    #[test]
    fn sign_up_adds_participant() {
        let mut directory = ActivityDirectory::seeded();
        directory
            .sign_up("Chess Club", "newstudent@mergington.edu")
            .unwrap();
        let chess = directory.get("Chess Club").unwrap();
        assert!(chess.is_enrolled("newstudent@mergington.edu"));
        // New enrollments land at the end of the roster.
        assert_eq!(
            chess.participants.last().map(String::as_str),
            Some("newstudent@mergington.edu")
        );
    }

    #[test]
    fn sign_up_unknown_activity_fails() {
        let mut directory = ActivityDirectory::seeded();
        let err = directory
            .sign_up("Underwater Basket Weaving", "ghost@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ActivityError::ActivityNotFound);
    }

    #[test]
    fn duplicate_sign_up_fails_and_leaves_roster_unchanged() {
        let mut directory = ActivityDirectory::seeded();
        directory
            .sign_up("Chess Club", "duplicate@mergington.edu")
            .unwrap();
        let before = directory.get("Chess Club").unwrap().participants.clone();

        let err = directory
            .sign_up("Chess Club", "duplicate@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ActivityError::AlreadySignedUp);
        assert_eq!(directory.get("Chess Club").unwrap().participants, before);
    }

    #[test]
    fn unregister_removes_participant() {
        let mut directory = ActivityDirectory::seeded();
        directory
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap();
        assert!(!directory
            .get("Chess Club")
            .unwrap()
            .is_enrolled("michael@mergington.edu"));
    }

    #[test]
    fn unregister_twice_fails_with_not_signed_up() {
        let mut directory = ActivityDirectory::seeded();
        directory
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap();
        let err = directory
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ActivityError::NotSignedUp);
    }

    #[test]
    fn unregister_unknown_activity_fails() {
        let mut directory = ActivityDirectory::seeded();
        let err = directory
            .unregister("Underwater Basket Weaving", "ghost@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ActivityError::ActivityNotFound);
    }

    #[test]
    fn unregister_non_participant_fails_and_leaves_roster_unchanged() {
        let mut directory = ActivityDirectory::seeded();
        let before = directory.get("Chess Club").unwrap().participants.clone();
        let err = directory
            .unregister("Chess Club", "nobody@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ActivityError::NotSignedUp);
        assert_eq!(directory.get("Chess Club").unwrap().participants, before);
    }

    #[test]
    fn same_email_can_join_multiple_activities() {
        let mut directory = ActivityDirectory::seeded();
        directory
            .sign_up("Chess Club", "busy@mergington.edu")
            .unwrap();
        directory
            .sign_up("Art Club", "busy@mergington.edu")
            .unwrap();
        assert!(directory.get("Chess Club").unwrap().is_enrolled("busy@mergington.edu"));
        assert!(directory.get("Art Club").unwrap().is_enrolled("busy@mergington.edu"));
    }

    #[test]
    fn activity_names_match_case_sensitively() {
        let mut directory = ActivityDirectory::seeded();
        let err = directory
            .sign_up("chess club", "newstudent@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ActivityError::ActivityNotFound);
    }
}
