//! # Cart Store
//!
//! Reactive wrapper around [`Cart`]: owns the authoritative state, applies
//! mutations atomically, and notifies subscribers with immutable snapshots.
//!
//! ## Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Notification                          │
//! │                                                                     │
//! │  add / remove / clear                                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  lock state ──► mutate cart ──► build CartSnapshot ──► unlock       │
//! │                                  (items + totals                    │
//! │                                   from the SAME                     │
//! │                                   item sequence)                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  subscriber 1 ── subscriber 2 ── ... (synchronous, in order,        │
//! │                                       state lock NOT held)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the snapshot carries its own totals, a subscriber can never
//! observe `total`/`count` computed against a different item sequence
//! than the one it was handed.
//!
//! ## Thread Safety
//! The expected caller is a single UI event loop, but all state sits
//! behind a `Mutex` so concurrent callers are serialized: a mutation fully
//! replaces the stored state before any subscriber runs.
//!
//! Notifications are published after the critical section. A listener may
//! freely read the store (`snapshot`, `totals`) or mutate it from its
//! callback; a mutation made inside a callback does not re-enter the
//! callbacks of the dispatch already in flight. With concurrent writers,
//! each snapshot is internally consistent but delivery order across
//! writers is unspecified.

use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartTotals, LineItem};
use crate::error::CoreResult;
use crate::types::Product;

// =============================================================================
// Snapshot
// =============================================================================

/// An immutable view of the cart handed to subscribers and callers.
///
/// `items` and `totals` are built in one pass from the same cart state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,

    /// Derived aggregates of exactly those items.
    pub totals: CartTotals,
}

impl CartSnapshot {
    fn of(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }

    /// Checks if the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Subscriptions
// =============================================================================

/// Handle returned by [`CartStore::subscribe`]; pass back to
/// [`CartStore::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Boxed subscriber callback.
type Listener = Box<dyn FnMut(&CartSnapshot) + Send>;

/// Subscriber bookkeeping, locked separately from the cart state so a
/// dispatch never holds the state lock.
struct Registry {
    listeners: Vec<(u64, Listener)>,
    /// Ids of live subscriptions, including listeners currently taken out
    /// for a dispatch in flight.
    active: HashSet<u64>,
    next_subscription: u64,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The reactive cart store.
///
/// ## Invariants
/// - Mutations are atomic: subscribers never see a torn update
/// - Subscribers are notified synchronously after every state change,
///   and once immediately upon subscribing
/// - Notifications run outside the state lock: a listener may call back
///   into the store
/// - A no-op (removing an id that is not present) does not notify:
///   nothing changed
pub struct CartStore {
    state: Mutex<Cart>,
    registry: Mutex<Registry>,
}

impl CartStore {
    /// Creates a store with an empty cart and no subscribers.
    pub fn new() -> Self {
        CartStore {
            state: Mutex::new(Cart::new()),
            registry: Mutex::new(Registry {
                listeners: Vec::new(),
                active: HashSet::new(),
                next_subscription: 0,
            }),
        }
    }

    /// Registers a subscriber.
    ///
    /// The listener is invoked immediately with the current snapshot, then
    /// again after every mutation, until unsubscribed. Any number of
    /// independent subscribers may be registered.
    pub fn subscribe<F>(&self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&CartSnapshot) + Send + 'static,
    {
        // Initial notification runs before registration, with no lock held
        let snapshot = self.snapshot();
        listener(&snapshot);

        let mut registry = self.registry.lock().expect("cart registry mutex poisoned");
        let id = registry.next_subscription;
        registry.next_subscription += 1;
        registry.active.insert(id);
        registry.listeners.push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Removes a subscriber.
    ///
    /// ## Returns
    /// `true` if the subscription existed, `false` otherwise.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.lock().expect("cart registry mutex poisoned");
        if !registry.active.remove(&id.0) {
            return false;
        }
        // The listener may be out on a dispatch right now; the merge-back
        // in dispatch() drops anything no longer active.
        registry.listeners.retain(|(lid, _)| *lid != id.0);
        true
    }

    /// Adds a product to the cart (merge-or-append) and notifies.
    ///
    /// Validation failures propagate without mutating state or notifying.
    ///
    /// ## Returns
    /// The snapshot taken after the mutation.
    pub fn add(&self, product: &Product, quantity: i64) -> CoreResult<CartSnapshot> {
        let snapshot = {
            let mut cart = self.state.lock().expect("cart state mutex poisoned");
            cart.add_item(product, quantity)?;
            CartSnapshot::of(&cart)
        };
        self.dispatch(&snapshot);
        Ok(snapshot)
    }

    /// Removes the line item with the given product id and notifies.
    ///
    /// Removing an unknown id is a no-op: the state is unchanged and
    /// subscribers are not notified.
    pub fn remove(&self, product_id: &str) -> CartSnapshot {
        let (snapshot, removed) = {
            let mut cart = self.state.lock().expect("cart state mutex poisoned");
            let removed = cart.remove_item(product_id);
            (CartSnapshot::of(&cart), removed)
        };
        if removed {
            self.dispatch(&snapshot);
        }
        snapshot
    }

    /// Empties the cart and notifies.
    pub fn clear(&self) -> CartSnapshot {
        let snapshot = {
            let mut cart = self.state.lock().expect("cart state mutex poisoned");
            cart.clear();
            CartSnapshot::of(&cart)
        };
        self.dispatch(&snapshot);
        snapshot
    }

    /// Returns a snapshot of the current state without mutating.
    pub fn snapshot(&self) -> CartSnapshot {
        let cart = self.state.lock().expect("cart state mutex poisoned");
        CartSnapshot::of(&cart)
    }

    /// Returns the current derived aggregates.
    pub fn totals(&self) -> CartTotals {
        let cart = self.state.lock().expect("cart state mutex poisoned");
        CartTotals::from(&*cart)
    }

    /// Pushes a snapshot to every listener, outside the state lock.
    ///
    /// Listeners are taken out of the registry for the duration of the
    /// calls and merged back afterwards, so a callback can subscribe,
    /// unsubscribe, or mutate the store without deadlocking. Subscribers
    /// added during a dispatch only receive later notifications.
    fn dispatch(&self, snapshot: &CartSnapshot) {
        let mut taken = {
            let mut registry = self.registry.lock().expect("cart registry mutex poisoned");
            std::mem::take(&mut registry.listeners)
        };

        for (_, listener) in &mut taken {
            listener(snapshot);
        }

        let mut registry = self.registry.lock().expect("cart registry mutex poisoned");
        // Drop anything unsubscribed while the listeners were out
        taken.retain(|(id, _)| registry.active.contains(id));
        // Listeners registered during the dispatch keep their later position
        taken.append(&mut registry.listeners);
        registry.listeners = taken;
    }
}

impl Default for CartStore {
    fn default() -> Self {
        CartStore::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = {
            let cart = self.state.lock().expect("cart state mutex poisoned");
            cart.items.len()
        };
        let subscribers = {
            let registry = self.registry.lock().expect("cart registry mutex poisoned");
            registry.active.len()
        };
        f.debug_struct("CartStore")
            .field("items", &items)
            .field("subscribers", &subscribers)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
