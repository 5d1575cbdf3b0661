use async_trait::async_trait;
use futures::future::join_all;
use std::{collections::HashMap, marker::PhantomData, sync::Arc};
use tokio::sync::RwLock;

use crate::event::{Event, EventPriority};

/// A trait for handling events dynamically.
///
/// This is the object-safe form the bus stores; typed handlers are adapted
/// into it on registration.
#[async_trait]
pub trait DynEventHandler<S>: Send + Sync {
    /// Asynchronously handles a dynamic event.
    ///
    /// # Arguments
    /// - `event`: A reference to the event to handle.
    async fn handle_dyn(&self, host: &Arc<S>, event: &(dyn Event + Send + Sync));

    /// Asynchronously handles a blocking dynamic event.
    ///
    /// # Arguments
    /// - `event`: A mutable reference to the event to handle.
    async fn handle_blocking_dyn(&self, host: &Arc<S>, event: &mut (dyn Event + Send + Sync));

    /// Checks if the event handler is blocking.
    ///
    /// # Returns
    /// A boolean indicating whether the handler is blocking.
    fn is_blocking(&self) -> bool;

    /// Retrieves the priority of the event handler.
    ///
    /// # Returns
    /// The priority of the event handler.
    fn get_priority(&self) -> EventPriority;
}

/// A trait for handling events of a specific type.
///
/// Implement `handle` for read-only observation, `handle_blocking` to rewrite
/// the event before the host acts on it. `S` is the host context type.
#[async_trait]
pub trait EventHandler<S: Send + Sync, E: Event>: Send + Sync {
    /// Asynchronously handles an event of type `E`.
    ///
    /// # Arguments
    /// - `event`: A reference to the event to handle.
    async fn handle(&self, _host: &Arc<S>, _event: &E) {}

    /// Asynchronously handles a blocking event of type `E`.
    ///
    /// # Arguments
    /// - `event`: A mutable reference to the event to handle.
    async fn handle_blocking(&self, _host: &Arc<S>, _event: &mut E) {}
}

/// A typed event handler together with its registration options.
struct TypedEventHandler<S, E, H>
where
    S: Send + Sync + 'static,
    E: Event + Send + Sync + 'static,
    H: EventHandler<S, E> + Send + Sync,
{
    handler: Arc<H>,
    priority: EventPriority,
    blocking: bool,
    _phantom: PhantomData<(S, E)>,
}

#[async_trait]
impl<S, E, H> DynEventHandler<S> for TypedEventHandler<S, E, H>
where
    S: Send + Sync + 'static,
    E: Event + Send + Sync + 'static,
    H: EventHandler<S, E> + Send + Sync,
{
    async fn handle_blocking_dyn(&self, host: &Arc<S>, event: &mut (dyn Event + Send + Sync)) {
        if E::get_name_static() == event.get_name() {
            // The name check above guarantees the concrete type.
            let event = unsafe {
                &mut *std::ptr::from_mut::<dyn std::any::Any>(event.as_any_mut()).cast::<E>()
            };
            self.handler.handle_blocking(host, event).await;
        }
    }

    async fn handle_dyn(&self, host: &Arc<S>, event: &(dyn Event + Send + Sync)) {
        if E::get_name_static() == event.get_name() {
            let event =
                unsafe { &*std::ptr::from_ref::<dyn std::any::Any>(event.as_any()).cast::<E>() };
            self.handler.handle(host, event).await;
        }
    }

    fn is_blocking(&self) -> bool {
        self.blocking
    }

    fn get_priority(&self) -> EventPriority {
        self.priority.clone()
    }
}

/// A map of event handlers, keyed by event name.
type HandlerMap<S> = HashMap<&'static str, Vec<Box<dyn DynEventHandler<S>>>>;

/// The notification bus a host runtime embeds.
///
/// Each bus owns its registration table; there is no process-global handler
/// state. `S` is whatever the host wants every handler to see, handed in at
/// construction and never inspected here.
pub struct EventBus<S> {
    host: Arc<S>,
    handlers: RwLock<HandlerMap<S>>,
}

impl<S: Send + Sync + 'static> EventBus<S> {
    #[must_use]
    pub fn new(host: Arc<S>) -> Self {
        Self {
            host,
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// The host context handed to every handler.
    #[must_use]
    pub fn host(&self) -> &Arc<S> {
        &self.host
    }

    /// Register an event handler.
    ///
    /// Blocking handlers run sequentially over the mutable event, lowest
    /// priority first; non-blocking handlers then observe the settled event
    /// concurrently. Registering from inside a running handler deadlocks:
    /// [`Self::fire`] holds the table lock for the whole dispatch.
    pub async fn register<E, H>(&self, handler: Arc<H>, priority: EventPriority, blocking: bool)
    where
        E: Event + Send + Sync + 'static,
        H: EventHandler<S, E> + 'static,
    {
        let mut handlers = self.handlers.write().await;
        let typed_handler = TypedEventHandler {
            handler,
            priority,
            blocking,
            _phantom: PhantomData,
        };

        handlers
            .entry(E::get_name_static())
            .or_default()
            .push(Box::new(typed_handler));
        log::debug!("registered a handler for {}", E::get_name_static());
    }

    /// Fire an event to all registered handlers and hand it back.
    ///
    /// The returned event carries every rewrite the blocking handlers applied;
    /// it is what the host should act on, and drop afterwards. The registration
    /// table stays locked until the last handler returns, so handlers must not
    /// call [`Self::register`] during dispatch.
    pub async fn fire<E: Event + Send + Sync + 'static>(&self, mut event: E) -> E {
        let handlers = self.handlers.read().await;
        if let Some(handlers) = handlers.get(&E::get_name_static()) {
            log::trace!(
                "firing {} to {} handler(s)",
                E::get_name_static(),
                handlers.len()
            );
            let (mut blocking, non_blocking): (Vec<_>, Vec<_>) =
                handlers.iter().partition(|h| h.is_blocking());

            // Lowest priority first; the sort is stable, so registration
            // order breaks ties.
            blocking.sort_by(|a, b| b.get_priority().cmp(&a.get_priority()));
            for handler in blocking {
                handler.handle_blocking_dyn(&self.host, &mut event).await;
            }

            join_all(
                non_blocking
                    .into_iter()
                    .map(|h| h.handle_dyn(&self.host, &event)),
            )
            .await;
        }
        event
    }
}
