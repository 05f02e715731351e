use super::Todo;
use uuid::Uuid;

/// The session-local snapshot of the remote store, in the order the store
/// returned it. Mutations come in three shapes only: a full replace from a
/// fresh fetch, a local append of a server-confirmed created item, and an
/// in-place replace-by-id with a server-confirmed completion state.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    pub items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace the entire collection with a freshly fetched listing.
    pub fn replace_all(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    /// Append a server-confirmed item from a create response. The store
    /// assigned the id, so it cannot collide with anything already held.
    pub fn append_confirmed(&mut self, item: Todo) {
        debug_assert!(self.position_of(item.id).is_none());
        self.items.push(item);
    }

    /// Replace the item matching `id` with the server-returned item, keeping
    /// its position. Returns false if the id is not in the collection.
    pub fn apply_completion(&mut self, id: Uuid, confirmed: Todo) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.items[index] = confirmed;
                true
            }
            None => false,
        }
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fetched(descriptions: &[&str]) -> Vec<Todo> {
        descriptions.iter().map(|d| Todo::new(*d)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let list = TodoList::new();
        assert!(list.is_empty());
    }

    #[test]
    fn test_replace_all_keeps_fetch_order() {
        let mut list = TodoList::new();
        list.replace_all(fetched(&["a", "b", "c"]));

        assert_eq!(list.len(), 3);
        assert_eq!(list.items[0].description, "a");
        assert_eq!(list.items[2].description, "c");
    }

    #[test]
    fn test_replace_all_drops_previous_items() {
        let mut list = TodoList::new();
        list.replace_all(fetched(&["a", "b"]));
        let old_id = list.items[0].id;

        list.replace_all(fetched(&["c"]));

        assert_eq!(list.len(), 1);
        assert_eq!(list.position_of(old_id), None);
    }

    #[test]
    fn test_append_confirmed_goes_to_the_end() {
        let mut list = TodoList::new();
        list.replace_all(fetched(&["a", "b"]));

        list.append_confirmed(Todo::new("buy milk"));

        assert_eq!(list.len(), 3);
        assert_eq!(list.items[2].description, "buy milk");
        assert!(!list.items[2].completed);
    }

    #[test]
    fn test_apply_completion_replaces_in_place() {
        let mut list = TodoList::new();
        list.replace_all(fetched(&["a", "b", "c"]));
        let id = list.items[1].id;

        let mut confirmed = list.items[1].clone();
        confirmed.completed = true;

        assert!(list.apply_completion(id, confirmed));
        assert_eq!(list.position_of(id), Some(1));
        assert!(list.items[1].completed);

        // Neighbours untouched
        assert_eq!(list.items[0].description, "a");
        assert_eq!(list.items[2].description, "c");
        assert!(!list.items[0].completed);
        assert!(!list.items[2].completed);
    }

    #[test]
    fn test_apply_completion_trusts_the_confirmed_value() {
        // The server may coerce the requested state; whatever comes back wins.
        let mut list = TodoList::new();
        list.replace_all(fetched(&["a"]));
        let id = list.items[0].id;

        let confirmed = list.items[0].clone();
        assert!(list.apply_completion(id, confirmed));
        assert!(!list.items[0].completed);
    }

    #[test]
    fn test_apply_completion_unknown_id_leaves_list_unchanged() {
        let mut list = TodoList::new();
        list.replace_all(fetched(&["a", "b"]));
        let before = list.items.clone();

        assert!(!list.apply_completion(Uuid::new_v4(), Todo::new("ghost")));
        assert_eq!(list.items, before);
    }

    #[test]
    fn test_ids_stay_unique_across_mutations() {
        let mut list = TodoList::new();
        list.replace_all(fetched(&["a", "b"]));
        list.append_confirmed(Todo::new("c"));

        let mut ids: Vec<_> = list.items.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }
}
