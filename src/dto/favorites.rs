use serde::Deserialize;

// required fields are Option here so the handler can answer a missing
// parameter with a 400 before touching the store

#[derive(Debug, Deserialize)]
pub struct SetFavorites {
    pub category_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub struct ModifyFavorite {
    pub category_id: Option<i64>,
}
