// ABOUTME: Built-in recipe catalog and cooking tips
// ABOUTME: Student-budget recipes with parsed ingredient lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use std::sync::LazyLock;

use super::models::{Difficulty, Recipe, RecipeIngredient};

struct RecipeSeed {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    time_minutes: u32,
    calories_kcal: u32,
    difficulty: Difficulty,
    rating: f64,
    reviews: u32,
    price_eur: f64,
    people: u32,
    description: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
}

impl RecipeSeed {
    fn build(&self) -> Recipe {
        Recipe {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            image: self.image.to_owned(),
            time_minutes: self.time_minutes,
            calories_kcal: self.calories_kcal,
            difficulty: self.difficulty,
            rating: self.rating,
            reviews: self.reviews,
            price_eur: self.price_eur,
            people: self.people,
            description: self.description.to_owned(),
            ingredients: self
                .ingredients
                .iter()
                .map(|line| RecipeIngredient::parse(line))
                .collect(),
            steps: self.steps.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}

const SEEDS: [RecipeSeed; 4] = [
    RecipeSeed {
        id: "1",
        title: "Pâtes Carbonara Express",
        image: "https://www.themealdb.com/images/media/meals/llcbn01574260722.jpg",
        time_minutes: 15,
        calories_kcal: 500,
        difficulty: Difficulty::Easy,
        rating: 4.7,
        reviews: 156,
        price_eur: 2.50,
        people: 2,
        description: "Une version étudiante et rapide de la carbonara, sans crème mais avec beaucoup de goût !",
        ingredients: &[
            "Pâtes (250g)",
            "Lardons ou Bacon (100g)",
            "Oeufs (2)",
            "Parmesan (50g)",
            "Poivre",
        ],
        steps: &[
            "Faire bouillir l'eau et cuire les pâtes al dente.",
            "Faire revenir les lardons dans une poêle sans matière grasse.",
            "Mélanger les oeufs et le parmesan dans un bol avec du poivre.",
            "Égoutter les pâtes (garder un peu d'eau de cuisson).",
            "Mélanger le tout hors du feu pour créer une sauce crémeuse.",
        ],
    },
    RecipeSeed {
        id: "2",
        title: "Soupe de Légumes Maison",
        image: "https://www.themealdb.com/images/media/meals/1529446137.jpg",
        time_minutes: 25,
        calories_kcal: 200,
        difficulty: Difficulty::Easy,
        rating: 4.5,
        reviews: 89,
        price_eur: 3.50,
        people: 2,
        description: "Parfait pour l'hiver et pour utiliser les restes de légumes du frigo.",
        ingredients: &[
            "Carottes (3)",
            "Pommes de terre (2)",
            "Poireaux (1)",
            "Bouillon cube",
            "Eau (1L)",
        ],
        steps: &[
            "Éplucher et couper tous les légumes en dés.",
            "Faire revenir dans une casserole avec un peu d'huile.",
            "Ajouter l'eau et le bouillon cube.",
            "Laisser mijoter 20 minutes.",
            "Mixer si désiré.",
        ],
    },
    RecipeSeed {
        id: "3",
        title: "Salade Composée Complète",
        image: "https://www.themealdb.com/images/media/meals/1529444113.jpg",
        time_minutes: 10,
        calories_kcal: 350,
        difficulty: Difficulty::VeryEasy,
        rating: 4.4,
        reviews: 78,
        price_eur: 3.80,
        people: 1,
        description: "Fraîcheur et vitamines garanties avec cette salade colorée.",
        ingredients: &["Salade", "Tomates", "Maïs", "Oeuf dur", "Vinaigrette"],
        steps: &["Laver la salade", "Couper les tomates", "Tout mélanger"],
    },
    RecipeSeed {
        id: "4",
        title: "Wok de Légumes",
        image: "https://www.themealdb.com/images/media/meals/1529445434.jpg",
        time_minutes: 18,
        calories_kcal: 300,
        difficulty: Difficulty::Easy,
        rating: 4.9,
        reviews: 267,
        price_eur: 2.90,
        people: 2,
        description: "Un plat sauté rapide et croquant.",
        ingredients: &["Riz", "Légumes variés", "Sauce Soja", "Ail"],
        steps: &["Cuire le riz", "Sauter les légumes au wok", "Ajouter la sauce"],
    },
];

static RECIPES: LazyLock<Vec<Recipe>> = LazyLock::new(|| SEEDS.iter().map(RecipeSeed::build).collect());

/// Tips shown under a recipe
pub const COOKING_TIPS: [&str; 5] = [
    "En préparant tes repas toi-même, tu peux économiser jusqu'à 200€ par mois par rapport aux plats préparés !",
    "Cette recette peut se conserver 3 jours au frigo : idéale pour tes lunchbox.",
    "Tu peux remplacer la crème fraîche par du yaourt nature pour une version plus légère et moins chère.",
    "Astuce chef : Ajoute un filet de jus de citron à la fin pour rehausser tous les goûts.",
    "Pas de balance ? Une tasse à mug équivaut environ à 120g de farine ou 200g de sucre.",
];

/// All catalog recipes, in catalog order
#[must_use]
pub fn all_recipes() -> &'static [Recipe] {
    &RECIPES
}

/// Look up a recipe by identifier
#[must_use]
pub fn find_recipe(id: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|recipe| recipe.id == id)
}
