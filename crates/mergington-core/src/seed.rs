use std::collections::BTreeMap;

use crate::activity::Activity;

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The built-in school catalog. Created once at startup; the service never
/// adds or removes activities at runtime.
pub fn default_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();
    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Soccer Team".to_string(),
        activity(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
    );
    activities.insert(
        "Basketball Team".to_string(),
        activity(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
    );
    activities.insert(
        "Art Club".to_string(),
        activity(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        activity(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
    );
    activities.insert(
        "Math Club".to_string(),
        activity(
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        activity(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    );
    activities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_activities() {
        assert_eq!(default_activities().len(), 9);
    }

    #[test]
    fn no_seed_roster_has_duplicates_or_exceeds_capacity() {
        for (name, activity) in default_activities() {
            let mut deduped = activity.participants.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(
                deduped.len(),
                activity.participants.len(),
                "duplicate participant in {name}"
            );
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "seed roster for {name} exceeds advertised capacity"
            );
        }
    }
}
