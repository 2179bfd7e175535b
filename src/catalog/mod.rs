mod data;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::nutrition::model::{Allergy, FoodItem, MealType};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("food id {id} appears more than once")]
    DuplicateId { id: String },
    #[error("food {id} is listed under {listed:?} but tagged {tagged:?}")]
    MislabeledItem {
        id: String,
        listed: MealType,
        tagged: MealType,
    },
}

/// An unhealthy food and the swap suggested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthySwap {
    pub food: String,
    pub alternative: String,
}

/// Static food reference data, grouped by slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCatalog {
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
    pub snacks: Vec<FoodItem>,
    #[serde(default = "data::healthy_swaps")]
    pub alternatives: Vec<HealthySwap>,
}

impl FoodCatalog {
    pub fn builtin() -> Self {
        Self {
            breakfast: data::breakfast(),
            lunch: data::lunch(),
            dinner: data::dinner(),
            snacks: data::snacks(),
            alternatives: data::healthy_swaps(),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: FoodCatalog =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        catalog.check_slots()?;
        info!(path = %path.display(), foods = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Uses the JSON file when given, the compiled-in data otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => {
                let catalog = Self::builtin();
                debug!(foods = catalog.len(), "using builtin catalog");
                Ok(catalog)
            }
        }
    }

    pub fn slot(&self, meal_type: MealType) -> &[FoodItem] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snacks,
        }
    }

    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snacks.len()
    }

    /// Swap for a food phrase, matched exactly against the known foods.
    pub fn alternative_for(&self, food: &str) -> Option<&str> {
        self.alternatives
            .iter()
            .find(|s| s.food == food)
            .map(|s| s.alternative.as_str())
    }

    /// First known food whose name occurs in `text` (already lower-cased).
    pub fn mentioned_food(&self, text: &str) -> Option<&str> {
        self.alternatives
            .iter()
            .find(|s| text.contains(s.food.as_str()))
            .map(|s| s.food.as_str())
    }

    /// Every item sits in the slot it is tagged with, and ids are unique
    /// across slots (consumed state is keyed by id).
    fn check_slots(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for slot in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            for food in self.slot(slot) {
                if food.meal_type != slot {
                    return Err(CatalogError::MislabeledItem {
                        id: food.id.clone(),
                        listed: slot,
                        tagged: food.meal_type,
                    });
                }
                if !seen.insert(food.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        id: food.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Ingredient keywords that mark a food as unsafe for an allergy.
pub fn allergen_keywords(allergy: Allergy) -> &'static [&'static str] {
    match allergy {
        Allergy::Nuts => &[
            "almond",
            "walnut",
            "cashew",
            "pecan",
            "pistachio",
            "hazelnut",
            "macadamia",
        ],
        Allergy::Peanuts => &["peanut"],
        Allergy::Dairy => &[
            "milk", "cheese", "yogurt", "butter", "cream", "ghee", "mozzarella", "ricotta", "feta",
        ],
        Allergy::Gluten => &[
            "wheat", "bread", "pasta", "flour", "barley", "rye", "bagel", "couscous", "granola",
            "pita", "noodles",
        ],
        Allergy::Shellfish => &["shrimp", "prawn", "crab", "lobster", "scallop", "mussel"],
        Allergy::Eggs => &["egg", "mayonnaise"],
        Allergy::Soy => &["soy", "tofu", "edamame", "tempeh", "miso"],
        Allergy::Fish => &["salmon", "tuna", "cod", "fish", "anchov", "sardine"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_slots_are_consistent() {
        let catalog = FoodCatalog::builtin();
        catalog.check_slots().unwrap();
        for slot in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            assert!(!catalog.slot(slot).is_empty(), "{slot:?} is empty");
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = FoodCatalog::builtin();
        let mut ids: Vec<&str> = [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ]
        .into_iter()
        .flat_map(|s| catalog.slot(s).iter().map(|f| f.id.as_str()))
        .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn swap_lookup() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.alternative_for("chips").is_some());
        assert!(catalog.alternative_for("kale").is_none());
        assert_eq!(
            catalog.mentioned_food("i love ice cream at night"),
            Some("ice cream")
        );
    }

    #[test]
    fn mislabeled_item_is_rejected() {
        let mut catalog = FoodCatalog::builtin();
        let mut stray = catalog.dinner[0].clone();
        stray.id = "stray".into();
        catalog.breakfast.push(stray);
        let err = catalog.check_slots().unwrap_err();
        assert!(err.to_string().contains("stray"));
    }

    #[test]
    fn json_catalog_without_swaps_keeps_builtin_swaps() {
        let builtin = FoodCatalog::builtin();
        let json = serde_json::json!({
            "breakfast": builtin.breakfast,
            "lunch": builtin.lunch,
            "dinner": builtin.dinner,
            "snacks": builtin.snacks,
        });
        let dir = std::env::temp_dir().join(format!("nutrify-catalog-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        std::fs::write(&path, json.to_string()).unwrap();

        let loaded = FoodCatalog::load(Some(&path)).unwrap();
        assert_eq!(loaded.len(), builtin.len());
        assert_eq!(loaded.alternatives, builtin.alternatives);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn json_catalog_with_repeated_id_is_rejected() {
        let builtin = FoodCatalog::builtin();
        let mut snacks = builtin.snacks.clone();
        snacks[0].id = builtin.breakfast[0].id.clone();
        let json = serde_json::json!({
            "breakfast": builtin.breakfast,
            "lunch": builtin.lunch,
            "dinner": builtin.dinner,
            "snacks": snacks,
        });
        let dir = std::env::temp_dir().join(format!("nutrify-dup-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        std::fs::write(&path, json.to_string()).unwrap();

        let err = FoodCatalog::load(Some(&path)).unwrap_err();
        std::fs::remove_dir_all(&dir).ok();
        match err {
            CatalogError::DuplicateId { id } => assert_eq!(id, builtin.breakfast[0].id),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FoodCatalog::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
