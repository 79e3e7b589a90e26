use anyhow::Result;

use crate::infrastructure::plugin_store::PluginStore;

fn user_key(user_id: i64) -> String {
    user_id.to_string()
}

/// A user with no record has an empty favorites list, never an error.
pub async fn get(store: &dyn PluginStore, user_id: i64) -> Result<Vec<i64>> {
    let raw = store.get_raw(&user_key(user_id)).await?;

    match raw {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Stores the deduplicated list, keeping first-occurrence order. An empty
/// result deletes the record instead of persisting an empty array.
pub async fn set(
    store: &dyn PluginStore,
    user_id: i64,
    category_ids: Vec<i64>,
) -> Result<Vec<i64>> {
    let mut deduped: Vec<i64> = Vec::with_capacity(category_ids.len());

    for category_id in category_ids {
        if !deduped.contains(&category_id) {
            deduped.push(category_id);
        }
    }

    if deduped.is_empty() {
        store.remove(&user_key(user_id)).await?;
    } else {
        store
            .set_raw(&user_key(user_id), serde_json::to_string(&deduped)?)
            .await?;
    }

    Ok(deduped)
}

// add/remove are read-modify-write without locking; two concurrent calls for
// the same user are last-write-wins on the underlying key

pub async fn add(store: &dyn PluginStore, user_id: i64, category_id: i64) -> Result<Vec<i64>> {
    let mut category_ids = get(store, user_id).await?;
    category_ids.push(category_id);

    set(store, user_id, category_ids).await
}

pub async fn remove(store: &dyn PluginStore, user_id: i64, category_id: i64) -> Result<Vec<i64>> {
    let mut category_ids = get(store, user_id).await?;
    category_ids.retain(|id| *id != category_id);

    set(store, user_id, category_ids).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::plugin_store::{MemoryPluginStore, PluginStore};

    #[tokio::test]
    async fn get_without_prior_writes_is_empty() {
        let store = MemoryPluginStore::new();

        assert_eq!(get(&store, 1).await.unwrap(), Vec::<i64>::new());
    }

    #[tokio::test]
    async fn set_dedupes_preserving_first_occurrence_order() {
        let store = MemoryPluginStore::new();

        let stored = set(&store, 1, vec![5, 3, 5, 1]).await.unwrap();

        assert_eq!(stored, vec![5, 3, 1]);
        assert_eq!(get(&store, 1).await.unwrap(), vec![5, 3, 1]);
    }

    #[tokio::test]
    async fn set_empty_deletes_the_record() {
        let store = MemoryPluginStore::new();

        set(&store, 1, vec![5, 3]).await.unwrap();
        let stored = set(&store, 1, vec![]).await.unwrap();

        assert_eq!(stored, Vec::<i64>::new());
        assert_eq!(get(&store, 1).await.unwrap(), Vec::<i64>::new());
        // the record itself is gone, not stored as an empty array
        assert_eq!(store.get_raw("1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn add_is_idempotent_in_effect() {
        let store = MemoryPluginStore::new();

        set(&store, 1, vec![5, 3, 1]).await.unwrap();

        assert_eq!(add(&store, 1, 7).await.unwrap(), vec![5, 3, 1, 7]);
        assert_eq!(add(&store, 1, 7).await.unwrap(), vec![5, 3, 1, 7]);
    }

    #[tokio::test]
    async fn remove_drops_the_id() {
        let store = MemoryPluginStore::new();

        set(&store, 1, vec![5, 3, 1, 7]).await.unwrap();

        assert_eq!(remove(&store, 1, 3).await.unwrap(), vec![5, 1, 7]);
    }

    #[tokio::test]
    async fn remove_of_absent_id_leaves_favorites_unchanged() {
        let store = MemoryPluginStore::new();

        set(&store, 1, vec![5, 3]).await.unwrap();

        assert_eq!(remove(&store, 1, 9).await.unwrap(), vec![5, 3]);
        assert_eq!(get(&store, 1).await.unwrap(), vec![5, 3]);
    }

    #[tokio::test]
    async fn remove_on_a_user_with_no_favorites_is_a_noop() {
        let store = MemoryPluginStore::new();

        assert_eq!(remove(&store, 1, 3).await.unwrap(), Vec::<i64>::new());
    }

    #[tokio::test]
    async fn removing_the_last_favorite_deletes_the_record() {
        let store = MemoryPluginStore::new();

        set(&store, 1, vec![3]).await.unwrap();
        remove(&store, 1, 3).await.unwrap();

        assert_eq!(store.get_raw("1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = MemoryPluginStore::new();

        set(&store, 1, vec![5]).await.unwrap();
        set(&store, 2, vec![7]).await.unwrap();

        assert_eq!(get(&store, 1).await.unwrap(), vec![5]);
        assert_eq!(get(&store, 2).await.unwrap(), vec![7]);
    }
}
