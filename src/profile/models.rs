// ABOUTME: Profile configuration payload: diets, budget, cuisine, exclusions, household size
// ABOUTME: Serialized as the camelCase document stored under the profile key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use serde::{Deserialize, Serialize};
use ymeal_core::constants::limits::MIN_LOCATION_LEN;
use ymeal_core::errors::{AppError, AppResult};

/// Dietary regime; several may be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    /// Eats everything
    Omnivore,
    /// Occasional meat
    Flexitarien,
    /// No meat or fish
    Vegetarien,
    /// No animal products
    Vegan,
    /// Fish but no meat
    Pesco,
    /// Halal
    Halal,
    /// Kosher
    Casher,
    /// No lactose
    Lactose,
    /// No gluten
    Gluten,
    /// Low calorie
    Hypo,
}

impl Diet {
    /// Every diet, in presentation order
    pub const ALL: [Self; 10] = [
        Self::Omnivore,
        Self::Flexitarien,
        Self::Vegetarien,
        Self::Vegan,
        Self::Pesco,
        Self::Halal,
        Self::Casher,
        Self::Lactose,
        Self::Gluten,
        Self::Hypo,
    ];

    /// Stored key, such as `vegetarien`
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Flexitarien => "flexitarien",
            Self::Vegetarien => "vegetarien",
            Self::Vegan => "vegan",
            Self::Pesco => "pesco",
            Self::Halal => "halal",
            Self::Casher => "casher",
            Self::Lactose => "lactose",
            Self::Gluten => "gluten",
            Self::Hypo => "hypo",
        }
    }

    /// Diet with the given stored key, ignoring case
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|diet| diet.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Omnivore => "Omnivore",
            Self::Flexitarien => "Flexitarien",
            Self::Vegetarien => "Végétarien",
            Self::Vegan => "Végan",
            Self::Pesco => "Pesco-végétarien",
            Self::Halal => "Halal",
            Self::Casher => "Casher",
            Self::Lactose => "Sans lactose",
            Self::Gluten => "Sans gluten",
            Self::Hypo => "Hypocalorique",
        }
    }

    /// Display glyph
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Omnivore => "🍗",
            Self::Flexitarien => "🥗",
            Self::Vegetarien => "🥬",
            Self::Vegan => "🌱",
            Self::Pesco => "🐟",
            Self::Halal => "☪️",
            Self::Casher => "✡️",
            Self::Lactose => "🥛",
            Self::Gluten => "🌾",
            Self::Hypo => "⚖️",
        }
    }
}

/// Weekly grocery budget bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Budget {
    /// Tight budget
    Petit,
    /// Average budget
    Moyen,
    /// Comfortable budget
    Large,
}

impl Budget {
    /// Bracket with the given stored key, ignoring case
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_uppercase().as_str() {
            "PETIT" => Some(Self::Petit),
            "MOYEN" => Some(Self::Moyen),
            "LARGE" => Some(Self::Large),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Petit => "Petit budget",
            Self::Moyen => "Budget moyen",
            Self::Large => "Budget large",
        }
    }
}

/// Household size bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum People {
    /// Cooking for one
    #[serde(rename = "1")]
    One,
    /// Cooking for two
    #[serde(rename = "2")]
    Two,
    /// Three or four people
    #[serde(rename = "3-4")]
    ThreeToFour,
    /// Five or more
    #[serde(rename = "5+")]
    FivePlus,
}

impl People {
    /// Stored key, such as `3-4`
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::ThreeToFour => "3-4",
            Self::FivePlus => "5+",
        }
    }

    /// Bracket with the given stored key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        [Self::One, Self::Two, Self::ThreeToFour, Self::FivePlus]
            .into_iter()
            .find(|people| people.key() == key.trim())
    }
}

/// Field of the profile that must be filled before it is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// At least one diet
    Diets,
    /// City or postal code of at least three characters
    Location,
    /// Budget bracket
    Budget,
    /// Preferred cuisine
    Cuisine,
    /// Household size
    People,
}

impl ProfileField {
    /// Field name as stored
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Diets => "diets",
            Self::Location => "location",
            Self::Budget => "budget",
            Self::Cuisine => "cuisine",
            Self::People => "people",
        }
    }
}

/// Preferences collected by the profile configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileConfig {
    /// Selected diets, in selection order
    pub diets: Vec<Diet>,
    /// City or postal code
    pub location: String,
    /// Budget bracket
    pub budget: Option<Budget>,
    /// Preferred cuisine
    pub cuisine: Option<String>,
    /// Vegetables to keep out of suggestions
    pub avoid_veg: Vec<String>,
    /// Allergies
    pub allergies: Vec<String>,
    /// Household size
    pub people: Option<People>,
}

impl ProfileConfig {
    /// Select `diet` if absent, deselect it otherwise; returns whether it is now selected
    pub fn toggle_diet(&mut self, diet: Diet) -> bool {
        if let Some(index) = self.diets.iter().position(|d| *d == diet) {
            self.diets.remove(index);
            false
        } else {
            self.diets.push(diet);
            true
        }
    }

    /// Add a vegetable to avoid; see [`uniq_add`]
    pub fn add_avoided_vegetable(&mut self, vegetable: &str) -> bool {
        uniq_add(&mut self.avoid_veg, vegetable)
    }

    /// Add an allergy; see [`uniq_add`]
    pub fn add_allergy(&mut self, allergy: &str) -> bool {
        uniq_add(&mut self.allergies, allergy)
    }

    /// Remove the avoided vegetable at `index`, if any
    pub fn remove_avoided_vegetable(&mut self, index: usize) -> Option<String> {
        (index < self.avoid_veg.len()).then(|| self.avoid_veg.remove(index))
    }

    /// Remove the allergy at `index`, if any
    pub fn remove_allergy(&mut self, index: usize) -> Option<String> {
        (index < self.allergies.len()).then(|| self.allergies.remove(index))
    }

    /// Required fields that are still empty, in form order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        let mut missing = Vec::new();
        if self.diets.is_empty() {
            missing.push(ProfileField::Diets);
        }
        if self.location.trim().chars().count() < MIN_LOCATION_LEN {
            missing.push(ProfileField::Location);
        }
        if self.budget.is_none() {
            missing.push(ProfileField::Budget);
        }
        if !self.cuisine.as_deref().is_some_and(|c| !c.trim().is_empty()) {
            missing.push(ProfileField::Cuisine);
        }
        if self.people.is_none() {
            missing.push(ProfileField::People);
        }
        missing
    }

    /// Whether every required field is filled
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check that the profile can be saved as complete
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first empty field
    pub fn validate(&self) -> AppResult<()> {
        match self.missing_fields().first() {
            Some(field) => Err(AppError::missing_field(field.name())),
            None => Ok(()),
        }
    }

    /// Copy with surrounding whitespace removed from free-text fields
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            location: self.location.trim().to_owned(),
            cuisine: self.cuisine.as_ref().map(|c| c.trim().to_owned()),
            ..self.clone()
        }
    }
}

/// Append `value` trimmed unless it is blank or already present ignoring case
///
/// Returns whether the list changed.
pub fn uniq_add(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|x| x.to_lowercase() == value.to_lowercase()) {
        return false;
    }
    list.push(value.to_owned());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_matches_stored_document() {
        let profile = ProfileConfig {
            diets: vec![Diet::Vegan],
            location: "Lyon".into(),
            budget: Some(Budget::Petit),
            cuisine: Some("Italienne".into()),
            avoid_veg: vec!["Brocoli".into()],
            allergies: Vec::new(),
            people: Some(People::ThreeToFour),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["diets"][0], "vegan");
        assert_eq!(json["budget"], "PETIT");
        assert_eq!(json["people"], "3-4");
        assert_eq!(json["avoidVeg"][0], "Brocoli");
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let profile: ProfileConfig = serde_json::from_str(r#"{"location":"Paris"}"#).unwrap();
        assert_eq!(profile.location, "Paris");
        assert!(profile.diets.is_empty());
        assert!(profile.budget.is_none());
    }

    #[test]
    fn test_keys_parse_back() {
        for diet in Diet::ALL {
            assert_eq!(Diet::from_key(diet.key()), Some(diet));
        }
        assert_eq!(Budget::from_key("moyen"), Some(Budget::Moyen));
        assert_eq!(People::from_key("5+"), Some(People::FivePlus));
        assert_eq!(People::from_key("6"), None);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut profile = ProfileConfig::default();
        profile.add_allergy("Soja");
        assert_eq!(profile.remove_allergy(3), None);
        assert_eq!(profile.remove_allergy(0).as_deref(), Some("Soja"));
    }
}
