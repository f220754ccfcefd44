//! Compile-time capability probes.
//!
//! Answers "would this concrete type be accepted as an [`Object`]?" without
//! trying to construct one, using the inherent const fallback pattern:
//!
//! 1. a fallback trait provides `const IS_X: bool = false` for every `Detect<T>`
//! 2. an inherent impl on `Detect<T>` where `T: X` provides `IS_X = true`
//!
//! Inherent items shadow trait items, so `Detect::<Concrete>::IS_X` resolves
//! to `true` exactly when `Concrete: X`.
//!
//! This only works for **concrete types** known at the call site. In a
//! generic `fn foo<T>()` the fallback always wins.
//!
//! [`Object`]: crate::Object

use core::marker::PhantomData;

use crate::draw::Drawable;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<fn(&T)>);

/// Generate a fallback trait and an inherent const for one bound.
macro_rules! impl_detect {
    // Display lives in core::fmt and needs its path spelled out
    (Display) => {
        #[doc(hidden)]
        pub trait DisplayFallback { const IS_DISPLAY: bool = false; }
        impl<T: ?Sized> DisplayFallback for Detect<T> {}
        impl<T: core::fmt::Display + ?Sized> Detect<T> { pub const IS_DISPLAY: bool = true; }
    };
    ($Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait + ?Sized> Detect<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
        }
    };
}

impl_detect!(Drawable);
impl_detect!(Display);
impl_detect!(Send);
impl_detect!(Sync);

/// Whether a concrete type implements [`Drawable`](crate::Drawable).
///
/// ```
/// use polydraw::is_drawable;
///
/// struct Opaque;
///
/// assert!(is_drawable!(i32));
/// assert!(is_drawable!(polydraw::Document));
/// assert!(!is_drawable!(Opaque));
/// ```
#[macro_export]
macro_rules! is_drawable {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::DrawableFallback as _;
        $crate::detect::Detect::<$T>::IS_DRAWABLE
    }};
}

/// Whether [`object!`](crate::object!) accepts a value of a concrete type.
///
/// True when the type is drawable or displayable, and can be shared across
/// threads.
///
/// ```
/// use polydraw::can_wrap;
/// use std::rc::Rc;
///
/// struct Opaque;
///
/// assert!(can_wrap!(String));
/// assert!(can_wrap!(std::net::Ipv4Addr));
/// assert!(!can_wrap!(Opaque));
/// assert!(!can_wrap!(Rc<i32>));
/// ```
#[macro_export]
macro_rules! can_wrap {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::{DisplayFallback as _, DrawableFallback as _, SendFallback as _, SyncFallback as _};
        ($crate::detect::Detect::<$T>::IS_DRAWABLE || $crate::detect::Detect::<$T>::IS_DISPLAY)
            && $crate::detect::Detect::<$T>::IS_SEND
            && $crate::detect::Detect::<$T>::IS_SYNC
    }};
}
