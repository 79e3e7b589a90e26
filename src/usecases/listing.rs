use crate::constants::ListFilter;

/// Every category the target user did not favorite. A user with zero
/// favorites therefore excludes everything and sees an empty topic list.
pub fn excluded_category_ids(all_category_ids: &[i64], favorites: &[i64]) -> Vec<i64> {
    all_category_ids
        .iter()
        .copied()
        .filter(|id| !favorites.contains(id))
        .collect()
}

// pagination keeps the explicit target user, otherwise page 2 of a shared
// view would silently fall back to the session user

pub fn more_topics_url(filter: ListFilter, page: u32, user_id: Option<i64>) -> String {
    paginated_url(filter, page + 1, user_id)
}

pub fn prev_topics_url(filter: ListFilter, page: u32, user_id: Option<i64>) -> String {
    paginated_url(filter, page.saturating_sub(1), user_id)
}

fn paginated_url(filter: ListFilter, page: u32, user_id: Option<i64>) -> String {
    let mut url = format!("/favorites/{}?page={}", filter.as_str(), page);

    if let Some(user_id) = user_id {
        url.push_str(&format!("&user_id={user_id}"));
    }

    url
}
