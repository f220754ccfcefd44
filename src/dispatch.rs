//! Draw strategies and their compile-time selection.
//!
//! An [`Object`] does not call `Drawable::draw` on its contents directly. It
//! stores the value together with a *strategy* type implementing
//! [`DrawImpl<T>`], fixed at construction:
//!
//! ```text
//! value: T ──► Object::with_impl::<T, S>() ──► Model<T, S> ──► S::call(&value, ..)
//! ```
//!
//! Two strategies ship with the crate:
//!
//! | Strategy        | Requires          | Draws                          |
//! |-----------------|-------------------|--------------------------------|
//! | [`ViaDrawable`] | `T: Drawable`     | whatever `T::draw` writes      |
//! | [`ViaDisplay`]  | `T: Display`      | one line of the `Display` form |
//!
//! ## Selection
//!
//! [`object!`](crate::object!) picks between them with autoref
//! specialization: method lookup on `&&Select<T>` finds the `ViaDrawable`
//! candidate first, and only when `T` is not drawable does it autoderef once
//! and find the `ViaDisplay` candidate. A type with neither has no candidate
//! and the call fails to compile.
//!
//! Like every autoref trick this only resolves on concrete types. Inside a
//! generic function call [`Object::new`] or [`Object::from_display`] with the
//! matching bound instead.

use core::fmt::Display;
use core::marker::PhantomData;

use crate::draw::{Canvas, Drawable};
use crate::error::DrawError;
use crate::object::Object;

/// A render operation bound to a concrete type.
pub trait DrawImpl<T: ?Sized> {
    fn call(value: &T, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError>;
}

/// Draw with the value's own [`Drawable`] impl.
pub struct ViaDrawable;

impl<T: Drawable + ?Sized> DrawImpl<T> for ViaDrawable {
    #[inline(always)]
    fn call(value: &T, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        value.draw(canvas, position)
    }
}

/// Draw the value's [`Display`] form as one line.
pub struct ViaDisplay;

impl<T: Display + ?Sized> DrawImpl<T> for ViaDisplay {
    #[inline(always)]
    fn call(value: &T, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        canvas.line(position, value)
    }
}

// =============================================================================
// Autoref selection (used by object!)
// =============================================================================

/// Probe type for strategy selection. Holds no value.
#[doc(hidden)]
pub struct Select<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Select<T> {
    #[inline(always)]
    pub fn of(_value: &T) -> Self {
        Select(PhantomData)
    }
}

/// The strategy chosen by [`Select`], ready to wrap the value.
#[doc(hidden)]
pub struct Chosen<S>(PhantomData<fn() -> S>);

impl Chosen<ViaDrawable> {
    #[inline(always)]
    pub fn wrap<T>(self, value: T) -> Object
    where
        T: Drawable + Send + Sync + 'static,
    {
        Object::new(value)
    }
}

impl Chosen<ViaDisplay> {
    #[inline(always)]
    pub fn wrap<T>(self, value: T) -> Object
    where
        T: Display + Send + Sync + 'static,
    {
        Object::from_display(value)
    }
}

/// Preferred candidate, found on `&Select<T>`.
#[doc(hidden)]
pub trait SelectDrawable {
    fn strategy(&self) -> Chosen<ViaDrawable> {
        Chosen(PhantomData)
    }
}

impl<T: Drawable + ?Sized> SelectDrawable for &Select<T> {}

/// Fallback candidate, found on `Select<T>` after one autoderef.
#[doc(hidden)]
pub trait SelectDisplay {
    fn strategy(&self) -> Chosen<ViaDisplay> {
        Chosen(PhantomData)
    }
}

impl<T: Display + ?Sized> SelectDisplay for Select<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    struct Labeled;

    impl Drawable for Labeled {
        fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
            canvas.line(position, "<labeled>")
        }
    }

    impl Display for Labeled {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("display form")
        }
    }

    #[test]
    fn test_strategies_call_through() {
        let drawn = render(&Object::with_impl::<_, ViaDrawable>(Labeled)).unwrap();
        let shown = render(&Object::with_impl::<_, ViaDisplay>(Labeled)).unwrap();
        assert_eq!(drawn, "<labeled>\n");
        assert_eq!(shown, "display form\n");
    }

    #[test]
    fn test_select_prefers_drawable() {
        let value = Labeled;
        let object = (&&Select::of(&value)).strategy().wrap(value);
        assert_eq!(render(&object).unwrap(), "<labeled>\n");
    }
}
