use super::model::{DietType, Goal, MacroTargets, UserProfile};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Fractions of daily calories assigned to each macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Rows of the ratio table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroSplit {
    WeightLoss,
    MuscleGain,
    Keto,
    Balanced,
}

impl MacroSplit {
    pub const ALL: [MacroSplit; 4] = [
        MacroSplit::WeightLoss,
        MacroSplit::MuscleGain,
        MacroSplit::Keto,
        MacroSplit::Balanced,
    ];

    pub fn ratios(self) -> MacroRatios {
        let (protein, carbs, fats) = match self {
            MacroSplit::WeightLoss => (0.35, 0.35, 0.30),
            MacroSplit::MuscleGain => (0.30, 0.45, 0.25),
            MacroSplit::Keto => (0.25, 0.05, 0.70),
            MacroSplit::Balanced => (0.25, 0.50, 0.25),
        };
        MacroRatios {
            protein,
            carbs,
            fats,
        }
    }

    /// A keto diet overrides the goal row; the goal picks the rest.
    pub fn for_profile(profile: &UserProfile) -> Self {
        if profile.diet_type == Some(DietType::Keto) {
            return MacroSplit::Keto;
        }
        match profile.goal {
            Some(Goal::WeightLoss) => MacroSplit::WeightLoss,
            Some(Goal::MuscleGain) => MacroSplit::MuscleGain,
            _ => MacroSplit::Balanced,
        }
    }
}

pub fn calculate_macro_targets(profile: &UserProfile, total_calories: u32) -> MacroTargets {
    let ratios = MacroSplit::for_profile(profile).ratios();
    let kcal = total_calories as f64;
    MacroTargets {
        protein: (kcal * ratios.protein / KCAL_PER_GRAM_PROTEIN).round() as u32,
        carbs: (kcal * ratios.carbs / KCAL_PER_GRAM_CARBS).round() as u32,
        fats: (kcal * ratios.fats / KCAL_PER_GRAM_FAT).round() as u32,
    }
}
