use std::collections::BTreeSet;

use serde::Deserialize;

use crate::nutrition::model::{
    ActivityLevel, Allergy, DietType, Gender, Goal, PriceTier,
};

/// Partial profile edit; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub goal: Option<Goal>,
    pub diet_type: Option<DietType>,
    pub allergies: Option<BTreeSet<Allergy>>,
    pub activity_level: Option<ActivityLevel>,
    pub preferences: Option<PreferencesUpdate>,
    pub metrics: Option<MetricsUpdate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub cuisines: Option<BTreeSet<String>>,
    pub budget: Option<PriceTier>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<Gender>,
}
