//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Drawable)]` | on struct/enum | Implement `polydraw::Drawable` |

pub mod drawable;

pub use drawable::expand_derive_drawable;
