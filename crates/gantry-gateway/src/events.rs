//! Watch events handed to the gateway event handlers

/// A watch event carrying one object, or the old and new object for updates
#[derive(Clone, Debug, PartialEq)]
pub enum WatchEvent<K> {
    /// Object was created
    Create(K),
    /// Object changed from `old` to `new`
    Update {
        /// Object before the change
        old: K,
        /// Object after the change
        new: K,
    },
    /// Object was deleted
    Delete(K),
    /// Change notified from outside the watch stream
    Generic(K),
}

impl<K> WatchEvent<K> {
    /// Every object carried by the event: one, or old then new for updates
    pub fn objects(&self) -> impl Iterator<Item = &K> {
        let (first, second) = match self {
            WatchEvent::Create(obj) | WatchEvent::Delete(obj) | WatchEvent::Generic(obj) => {
                (obj, None)
            }
            WatchEvent::Update { old, new } => (old, Some(new)),
        };
        std::iter::once(first).chain(second)
    }

    /// Short event name for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            WatchEvent::Create(_) => "create",
            WatchEvent::Update { .. } => "update",
            WatchEvent::Delete(_) => "delete",
            WatchEvent::Generic(_) => "generic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_events() {
        for event in [
            WatchEvent::Create("a"),
            WatchEvent::Delete("a"),
            WatchEvent::Generic("a"),
        ] {
            assert_eq!(event.objects().collect::<Vec<_>>(), vec![&"a"]);
        }
    }

    #[test]
    fn update_yields_old_then_new() {
        let event = WatchEvent::Update {
            old: "old",
            new: "new",
        };
        assert_eq!(event.objects().collect::<Vec<_>>(), vec![&"old", &"new"]);
    }

    #[test]
    fn kind_names() {
        assert_eq!(WatchEvent::Create(()).kind(), "create");
        assert_eq!(WatchEvent::Update { old: (), new: () }.kind(), "update");
        assert_eq!(WatchEvent::Delete(()).kind(), "delete");
        assert_eq!(WatchEvent::Generic(()).kind(), "generic");
    }
}
