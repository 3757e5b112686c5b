use std::collections::HashMap;

use shared::domain::{Dish, DishId};

use crate::error::CatalogError;

/// Owns the dish collection and the id of the dish shown in detail.
///
/// The selection is stored as given; it may name a dish that does not exist,
/// in which case [`SelectionController::resolve`] reports no match.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    dishes: Vec<Dish>,
    index: HashMap<DishId, usize>,
    selected: Option<DishId>,
}

impl SelectionController {
    pub fn new(dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(dishes.len());
        for (position, dish) in dishes.iter().enumerate() {
            if index.insert(dish.id, position).is_some() {
                return Err(CatalogError::DuplicateDish(dish.id));
            }
        }
        Ok(Self {
            dishes,
            index,
            selected: None,
        })
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn contains(&self, dish_id: DishId) -> bool {
        self.index.contains_key(&dish_id)
    }

    pub fn selected(&self) -> Option<DishId> {
        self.selected
    }

    pub fn select(&mut self, dish_id: DishId) {
        self.selected = Some(dish_id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn resolve(&self) -> Option<&Dish> {
        let dish_id = self.selected?;
        self.index
            .get(&dish_id)
            .and_then(|position| self.dishes.get(*position))
    }

    /// Applies a route to the selection. Returns the parsed route.
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = Route::parse(path);
        match route {
            Route::Dish(dish_id) => self.select(dish_id),
            Route::Home | Route::Menu => self.clear(),
            Route::NotFound => {}
        }
        route
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Menu,
    Dish(DishId),
    NotFound,
}

impl Route {
    /// Parses `/`, `/home`, `/menu` and `/menu/{id}`. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        if !trimmed.is_empty() && !trimmed.starts_with('/') {
            return Route::NotFound;
        }
        let mut segments = trimmed.split('/').skip(1);
        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) | (Some("home"), None, _) => Route::Home,
            (Some("menu"), None, _) => Route::Menu,
            (Some("menu"), Some(id), None) => id
                .parse::<i64>()
                .map(|id| Route::Dish(DishId(id)))
                .unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
