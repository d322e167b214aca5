/*!
# Change Notifications

Graphs announce structural changes to any number of subscribers. Handlers are invoked
synchronously, on the mutating thread, after the mutation completed, in the order they
were subscribed.

Subscribing returns a [`SubscriptionId`] that can later be handed to `unsubscribe`.

## Event Order

- `add_edge` with missing endpoints: `VertexAdded(source)`, `VertexAdded(target)`, `EdgeAdded`.
- `remove_vertex(v)`: `EdgeRemoved` for every incident edge in insertion order, then `VertexRemoved(v)`.
- `clear()`: `EdgeRemoved` for every edge in insertion order, then `VertexRemoved` for every vertex.
*/

use std::fmt::Debug;

/// A structural change of a graph
pub enum GraphEvent<'a, V, E> {
    VertexAdded(&'a V),
    VertexRemoved(&'a V),
    EdgeAdded(&'a E),
    EdgeRemoved(&'a E),
}

impl<V, E> Clone for GraphEvent<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for GraphEvent<'_, V, E> {}

impl<V: Debug, E: Debug> Debug for GraphEvent<'_, V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphEvent::VertexAdded(v) => write!(f, "VertexAdded({v:?})"),
            GraphEvent::VertexRemoved(v) => write!(f, "VertexRemoved({v:?})"),
            GraphEvent::EdgeAdded(e) => write!(f, "EdgeAdded({e:?})"),
            GraphEvent::EdgeRemoved(e) => write!(f, "EdgeRemoved({e:?})"),
        }
    }
}

impl<V: PartialEq, E: PartialEq> PartialEq for GraphEvent<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GraphEvent::VertexAdded(a), GraphEvent::VertexAdded(b))
            | (GraphEvent::VertexRemoved(a), GraphEvent::VertexRemoved(b)) => a == b,
            (GraphEvent::EdgeAdded(a), GraphEvent::EdgeAdded(b))
            | (GraphEvent::EdgeRemoved(a), GraphEvent::EdgeRemoved(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a, V, E> GraphEvent<'a, V, E> {
    /// Returns the vertex of a vertex event
    pub fn vertex(&self) -> Option<&'a V> {
        match *self {
            GraphEvent::VertexAdded(v) | GraphEvent::VertexRemoved(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the edge of an edge event
    pub fn edge(&self) -> Option<&'a E> {
        match *self {
            GraphEvent::EdgeAdded(e) | GraphEvent::EdgeRemoved(e) => Some(e),
            _ => None,
        }
    }

    /// Returns *true* for `VertexAdded` and `EdgeAdded`
    pub fn is_addition(&self) -> bool {
        matches!(self, GraphEvent::VertexAdded(_) | GraphEvent::EdgeAdded(_))
    }
}

/// Handle of a subscription, used to unsubscribe again
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Handler<V, E> = Box<dyn FnMut(GraphEvent<'_, V, E>)>;

/// Registry of event handlers owned by a graph
pub struct EventDispatcher<V, E> {
    handlers: Vec<(SubscriptionId, Handler<V, E>)>,
    next_id: u64,
}

impl<V, E> Default for EventDispatcher<V, E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<V, E> Debug for EventDispatcher<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

impl<V: 'static, E: 'static> EventDispatcher<V, E> {
    /// Registers a handler receiving every event
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(GraphEvent<'_, V, E>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Registers a handler for `VertexAdded`
    pub fn on_vertex_added<F>(&mut self, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&V) + 'static,
    {
        self.subscribe(move |event| {
            if let GraphEvent::VertexAdded(v) = event {
                handler(v)
            }
        })
    }

    /// Registers a handler for `VertexRemoved`
    pub fn on_vertex_removed<F>(&mut self, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&V) + 'static,
    {
        self.subscribe(move |event| {
            if let GraphEvent::VertexRemoved(v) = event {
                handler(v)
            }
        })
    }

    /// Registers a handler for `EdgeAdded`
    pub fn on_edge_added<F>(&mut self, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        self.subscribe(move |event| {
            if let GraphEvent::EdgeAdded(e) = event {
                handler(e)
            }
        })
    }

    /// Registers a handler for `EdgeRemoved`
    pub fn on_edge_removed<F>(&mut self, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        self.subscribe(move |event| {
            if let GraphEvent::EdgeRemoved(e) = event {
                handler(e)
            }
        })
    }
}

impl<V, E> EventDispatcher<V, E> {
    /// Detaches a handler. Returns *false* if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(other, _)| *other != id);
        before != self.handlers.len()
    }

    /// Detaches all handlers
    pub fn unsubscribe_all(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of attached handlers
    pub fn number_of_subscribers(&self) -> usize {
        self.handlers.len()
    }

    /// Returns *true* if no handler is attached
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invokes every handler with `event`
    pub(crate) fn emit(&mut self, event: GraphEvent<'_, V, E>) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn typed_handlers_filter_events() {
        let mut dispatcher: EventDispatcher<u32, (u32, u32)> = EventDispatcher::default();
        let added = Rc::new(RefCell::new(Vec::new()));
        let removed = Rc::new(RefCell::new(Vec::new()));

        {
            let added = added.clone();
            dispatcher.on_vertex_added(move |v| added.borrow_mut().push(*v));
        }
        {
            let removed = removed.clone();
            dispatcher.on_edge_removed(move |e| removed.borrow_mut().push(*e));
        }

        dispatcher.emit(GraphEvent::VertexAdded(&1));
        dispatcher.emit(GraphEvent::VertexRemoved(&2));
        dispatcher.emit(GraphEvent::EdgeAdded(&(1, 2)));
        dispatcher.emit(GraphEvent::EdgeRemoved(&(3, 4)));

        assert_eq!(*added.borrow(), vec![1]);
        assert_eq!(*removed.borrow(), vec![(3, 4)]);
    }

    #[test]
    fn unsubscribe() {
        let mut dispatcher: EventDispatcher<u32, (u32, u32)> = EventDispatcher::default();
        let count = Rc::new(RefCell::new(0));

        let id = {
            let count = count.clone();
            dispatcher.subscribe(move |_| *count.borrow_mut() += 1)
        };
        assert_eq!(dispatcher.number_of_subscribers(), 1);

        dispatcher.emit(GraphEvent::VertexAdded(&1));
        assert!(dispatcher.unsubscribe(id));
        assert!(!dispatcher.unsubscribe(id));
        dispatcher.emit(GraphEvent::VertexAdded(&2));

        assert_eq!(*count.borrow(), 1);
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn event_accessors() {
        let event: GraphEvent<'_, u32, (u32, u32)> = GraphEvent::EdgeAdded(&(1, 2));
        assert_eq!(event.edge(), Some(&(1, 2)));
        assert_eq!(event.vertex(), None);
        assert!(event.is_addition());

        let event: GraphEvent<'_, u32, (u32, u32)> = GraphEvent::VertexRemoved(&7);
        assert_eq!(event.vertex(), Some(&7));
        assert!(!event.is_addition());
        assert_eq!(format!("{event:?}"), "VertexRemoved(7)");
    }
}
