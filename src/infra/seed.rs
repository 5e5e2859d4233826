//! Fixture users loaded into a fresh store.

use chrono::NaiveDate;

use crate::domain::{License, User};

/// The two records the service starts with: `user1` (john) and `user2` (doe).
pub fn seed_users() -> Vec<(String, User)> {
    vec![
        (
            "user1".to_string(),
            User::new("john".to_string(), "haha".to_string(), None)
                .with_age(30)
                .with_license(License::new(
                    "Improviser 20 Weeks",
                    "Your firstborn",
                    date(2023, 9, 4),
                    date(2024, 1, 26),
                )),
        ),
        (
            "user2".to_string(),
            User::new("doe".to_string(), "haha".to_string(), None).with_license(License::new(
                "Spotify Premium for Students 20 Years",
                "Perfectly fair",
                date(2004, 4, 26),
                date(2024, 4, 25),
            )),
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid calendar dates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users() {
        let users = seed_users();
        assert_eq!(users.len(), 2);

        let (key, john) = &users[0];
        assert_eq!(key, "user1");
        assert_eq!(john.age, Some(30));
        assert_eq!(john.licenses[0].acquisition_date, date(2023, 9, 4));

        let (key, doe) = &users[1];
        assert_eq!(key, "user2");
        assert_eq!(doe.age, None);
        assert_eq!(doe.licenses.len(), 1);
    }
}
