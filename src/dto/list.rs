use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListOptions {
    /// Target user for shared or administrative views; defaults to the
    /// session user when absent.
    pub user_id: Option<i64>,

    pub page: Option<u32>,
}
