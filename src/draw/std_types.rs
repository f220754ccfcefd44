//! `Drawable` for primitives, text and smart pointers.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use super::{Canvas, Drawable};
use crate::error::DrawError;

/// Draw each listed type as a single line of its `Display` form.
macro_rules! impl_drawable_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Drawable for $ty {
                #[inline]
                fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
                    canvas.line(position, self)
                }
            }
        )*
    };
}

impl_drawable_via_display!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    bool, char,
    str, String,
);

/// Draw through a pointer as the pointee.
macro_rules! impl_drawable_deref {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Drawable + ?Sized> Drawable for $ptr<T> {
                #[inline]
                fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
                    (**self).draw(canvas, position)
                }
            }
        )*
    };
}

impl_drawable_deref!(Box, Rc, Arc);

impl<T: Drawable + ?Sized> Drawable for &T {
    #[inline]
    fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        (**self).draw(canvas, position)
    }
}
