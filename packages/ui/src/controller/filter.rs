use store::Entity;

/// Entities whose label contains `query`, ignoring case, in their original
/// order. An empty query keeps everything.
pub fn filter_by_label<E: Entity>(items: &[E], query: &str) -> Vec<E> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|e| e.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
