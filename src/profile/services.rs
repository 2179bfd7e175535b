use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use time::OffsetDateTime;

use super::dto::ProfileUpdate;
use crate::nutrition::model::UserProfile;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),
    #[error("height must be a positive number of centimetres, got {0}")]
    InvalidHeight(f64),
    #[error("age must be positive")]
    InvalidAge,
    #[error("invalid email: {0}")]
    InvalidEmail(String),
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn positive(value: Option<f64>) -> bool {
    value.map_or(true, |v| v.is_finite() && v > 0.0)
}

pub fn validate(profile: &UserProfile) -> Result<(), ProfileError> {
    let metrics = &profile.metrics;
    if !positive(metrics.weight) {
        return Err(ProfileError::InvalidWeight(metrics.weight.unwrap_or_default()));
    }
    if !positive(metrics.height) {
        return Err(ProfileError::InvalidHeight(metrics.height.unwrap_or_default()));
    }
    if metrics.age == Some(0) {
        return Err(ProfileError::InvalidAge);
    }
    if let Some(email) = &profile.email {
        if !is_valid_email(email) {
            return Err(ProfileError::InvalidEmail(email.clone()));
        }
    }
    Ok(())
}

/// Trim the name, lower-case the email and drop an empty one.
fn normalize(mut profile: UserProfile) -> UserProfile {
    profile.name = profile.name.trim().to_string();
    profile.email = profile
        .email
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty());
    profile
}

/// Profile submitted at the end of onboarding, stamped with `now`.
pub fn complete_onboarding(
    profile: UserProfile,
    now: OffsetDateTime,
) -> Result<UserProfile, ProfileError> {
    let mut profile = normalize(profile);
    validate(&profile)?;
    profile.created_at.get_or_insert(now);
    Ok(profile)
}

/// New snapshot with `update` merged in; `current` is left untouched.
pub fn apply_update(current: &UserProfile, update: ProfileUpdate) -> Result<UserProfile, ProfileError> {
    let mut next = current.clone();
    if let Some(name) = update.name {
        next.name = name;
    }
    if let Some(email) = update.email {
        next.email = Some(email);
    }
    if let Some(goal) = update.goal {
        next.goal = Some(goal);
    }
    if let Some(diet_type) = update.diet_type {
        next.diet_type = Some(diet_type);
    }
    if let Some(allergies) = update.allergies {
        next.allergies = allergies;
    }
    if let Some(level) = update.activity_level {
        next.activity_level = Some(level);
    }
    if let Some(prefs) = update.preferences {
        if let Some(cuisines) = prefs.cuisines {
            next.preferences.cuisines = cuisines;
        }
        if let Some(budget) = prefs.budget {
            next.preferences.budget = budget;
        }
    }
    if let Some(metrics) = update.metrics {
        next.metrics.age = metrics.age.or(next.metrics.age);
        next.metrics.weight = metrics.weight.or(next.metrics.weight);
        next.metrics.height = metrics.height.or(next.metrics.height);
        next.metrics.gender = metrics.gender.or(next.metrics.gender);
    }

    let next = normalize(next);
    validate(&next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::model::{Allergy, Gender, Goal, Metrics, PriceTier};
    use crate::profile::dto::{MetricsUpdate, PreferencesUpdate};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Sam".into(),
            goal: Some(Goal::Maintain),
            metrics: Metrics {
                age: Some(41),
                weight: Some(82.0),
                height: Some(180.0),
                gender: Some(Gender::Male),
            },
            ..Default::default()
        }
    }

    #[test]
    fn nested_fields_merge_individually() {
        let current = profile();
        let update = ProfileUpdate {
            metrics: Some(MetricsUpdate {
                weight: Some(79.5),
                ..Default::default()
            }),
            preferences: Some(PreferencesUpdate {
                budget: Some(PriceTier::Budget),
                ..Default::default()
            }),
            ..Default::default()
        };
        let next = apply_update(&current, update).unwrap();

        assert_eq!(next.metrics.weight, Some(79.5));
        assert_eq!(next.metrics.height, Some(180.0));
        assert_eq!(next.metrics.age, Some(41));
        assert_eq!(next.preferences.budget, PriceTier::Budget);
        assert_eq!(next.goal, Some(Goal::Maintain));
        // the input snapshot is unchanged
        assert_eq!(current.metrics.weight, Some(82.0));
    }

    #[test]
    fn allergies_replace_the_whole_set() {
        let mut current = profile();
        current.allergies.insert(Allergy::Fish);
        let update = ProfileUpdate {
            allergies: Some([Allergy::Soy].into_iter().collect()),
            ..Default::default()
        };
        let next = apply_update(&current, update).unwrap();
        assert_eq!(next.allergies.len(), 1);
        assert!(next.allergies.contains(&Allergy::Soy));
    }

    #[test]
    fn rejects_non_positive_metrics() {
        let update = ProfileUpdate {
            metrics: Some(MetricsUpdate {
                weight: Some(-3.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            apply_update(&profile(), update),
            Err(ProfileError::InvalidWeight(-3.0))
        );

        let mut p = profile();
        p.metrics.height = Some(0.0);
        assert_eq!(validate(&p), Err(ProfileError::InvalidHeight(0.0)));

        p.metrics.height = None;
        p.metrics.age = Some(0);
        assert_eq!(validate(&p), Err(ProfileError::InvalidAge));
    }

    #[test]
    fn email_is_normalized_and_checked() {
        let mut p = profile();
        p.email = Some("  Sam@Example.COM ".into());
        let now = OffsetDateTime::now_utc();
        let done = complete_onboarding(p.clone(), now).unwrap();
        assert_eq!(done.email.as_deref(), Some("sam@example.com"));
        assert_eq!(done.created_at, Some(now));

        p.email = Some("   ".into());
        assert_eq!(complete_onboarding(p.clone(), now).unwrap().email, None);

        p.email = Some("not-an-email".into());
        assert!(matches!(
            complete_onboarding(p, now),
            Err(ProfileError::InvalidEmail(_))
        ));
    }

    #[test]
    fn onboarding_keeps_existing_timestamp() {
        let earlier = OffsetDateTime::UNIX_EPOCH;
        let p = UserProfile {
            created_at: Some(earlier),
            ..profile()
        };
        let done = complete_onboarding(p, OffsetDateTime::now_utc()).unwrap();
        assert_eq!(done.created_at, Some(earlier));
    }
}
