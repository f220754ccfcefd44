//! Type-erased drawable values with shared, immutable storage.
//!
//! An [`Object`] owns an `Arc` to a private model holding the concrete value
//! and the strategy chosen to draw it. Cloning shares the model. Nothing ever
//! mutates a model after construction, so snapshots that share objects can
//! never observe each other's edits: changing an entry always means replacing
//! the `Object`, not writing through it.
//!
//! Values are rejected at the construction site when they cannot be drawn:
//!
//! ```compile_fail
//! use polydraw::Object;
//!
//! struct Opaque;
//!
//! let _ = Object::new(Opaque);
//! ```

use alloc::sync::Arc;
use core::any::{Any, type_name};
use core::fmt;
use core::marker::PhantomData;

use crate::dispatch::{DrawImpl, ViaDisplay, ViaDrawable};
use crate::draw::{Canvas, Drawable};
use crate::error::DrawError;

/// Interface of the erased model.
trait Concept: Any + Send + Sync {
    fn draw_(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError>;
    fn type_name_(&self) -> &'static str;
    fn data_(&self) -> &dyn Any;
}

struct Model<T, S> {
    data: T,
    _strategy: PhantomData<fn() -> S>,
}

impl<T, S> Concept for Model<T, S>
where
    T: Send + Sync + 'static,
    S: DrawImpl<T> + 'static,
{
    fn draw_(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        S::call(&self.data, canvas, position)
    }

    fn type_name_(&self) -> &'static str {
        type_name::<T>()
    }

    fn data_(&self) -> &dyn Any {
        &self.data
    }
}

/// A drawable value of any type, with value semantics.
///
/// ```
/// use polydraw::{render, Object};
///
/// let a = Object::new(42);
/// let b = a.clone();
///
/// assert!(Object::ptr_eq(&a, &b));
/// assert_eq!(render(&b).unwrap(), "42\n");
/// ```
#[derive(Clone)]
pub struct Object {
    model: Arc<dyn Concept>,
}

impl Object {
    /// Wrap a drawable value.
    ///
    /// Wrapping an `Object` returns it unchanged, so the model stays shared.
    pub fn new<T>(value: T) -> Self
    where
        T: Drawable + Send + Sync + 'static,
    {
        let mut slot = Some(value);
        if let Some(shared) = (&mut slot as &mut dyn Any).downcast_mut::<Option<Object>>() {
            if let Some(shared) = shared.take() {
                return shared;
            }
        }
        match slot {
            Some(value) => Self::with_impl::<T, ViaDrawable>(value),
            None => unreachable!("slot is only drained for Object"),
        }
    }

    /// Wrap any displayable value, drawn as one line of its `Display` form.
    pub fn from_display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::with_impl::<T, ViaDisplay>(value)
    }

    /// Wrap `value`, drawing it with the strategy `S`.
    pub fn with_impl<T, S>(value: T) -> Self
    where
        T: Send + Sync + 'static,
        S: DrawImpl<T> + 'static,
    {
        log::trace!("object constructed: {} via {}", type_name::<T>(), type_name::<S>());
        Object {
            model: Arc::new(Model::<T, S> {
                data: value,
                _strategy: PhantomData,
            }),
        }
    }

    /// Whether both handles share one model.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.model, &other.model)
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.model.type_name_()
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.model.data_().downcast_ref::<T>()
    }

    /// Whether the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.model.data_().is::<T>()
    }
}

impl Drawable for Object {
    #[inline]
    fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        self.model.draw_(canvas, position)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.type_name()).finish()
    }
}

/// Wrap a value into an [`Object`], choosing how to draw it at compile time.
///
/// Uses the value's [`Drawable`] impl when there is one and falls back to its
/// `Display` form otherwise. Anything else fails to compile. The value must be
/// `Send + Sync + 'static`, and its type must be concrete at the call site.
///
/// ```
/// use polydraw::{object, render};
/// use std::net::Ipv4Addr;
///
/// // Ipv4Addr is not Drawable, but it is Display.
/// let addr = object!(Ipv4Addr::LOCALHOST);
/// assert_eq!(render(&addr).unwrap(), "127.0.0.1\n");
/// ```
#[macro_export]
macro_rules! object {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::dispatch::{SelectDisplay as _, SelectDrawable as _};
        let value = $value;
        (&&$crate::dispatch::Select::of(&value)).strategy().wrap(value)
    }};
}
