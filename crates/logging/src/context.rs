//! crates/logging/src/context.rs
//! Request-scoped carrier for passing a logger down a call chain.
//!
//! A [`Context`] is an immutable chain of typed bindings. Adding a binding
//! returns a new context that shares its ancestors with the original, so a
//! context can be handed to many callees without any of them observing
//! another's additions.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::factory::default_logger;
use crate::logger::Logger;

/// Immutable, cheaply cloneable chain of key/value bindings.
///
/// Keys are types: a binding made with `with_value::<K, _>` is only visible
/// to lookups naming the same `K`. Keeping `K` private to a module makes the
/// binding unreachable from outside it.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

struct Node {
    key: TypeId,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Node>>,
}

impl Context {
    /// An empty context.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a child context binding `value` under key `K`.
    #[must_use]
    pub fn with_value<K, V>(&self, value: V) -> Self
    where
        K: 'static,
        V: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Node {
                key: TypeId::of::<K>(),
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Looks up the nearest binding for `K`.
    ///
    /// Returns `None` when `K` is unbound or when the nearest binding holds a
    /// value of a type other than `V`.
    #[must_use]
    pub fn value<K, V>(&self) -> Option<&V>
    where
        K: 'static,
        V: Any,
    {
        let key = TypeId::of::<K>();
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if current.key == key {
                return current.value.downcast_ref::<V>();
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// Number of bindings in the chain, shadowed ones included.
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(self.head.as_deref(), |node| node.parent.as_deref()).count()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("depth", &self.depth())
            .finish()
    }
}

/// Private key under which loggers are bound.
struct LoggerKey;

/// Returns a child of `ctx` carrying `logger`.
#[must_use]
pub fn with_logger(ctx: &Context, logger: Logger) -> Context {
    ctx.with_value::<LoggerKey, Logger>(logger)
}

/// Returns the logger bound to `ctx`, or [`default_logger`] when there is
/// no context or no binding.
pub fn from_context(ctx: Option<&Context>) -> Logger {
    ctx.and_then(Context::value::<LoggerKey, Logger>)
        .cloned()
        .unwrap_or_else(default_logger)
}
