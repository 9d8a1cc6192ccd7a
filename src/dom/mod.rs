//! Browser glue
//!
//! - `surface`: [`crate::GridSurface`] over a live container
//! - `images`: wait for `<img>` descendants before the first pass
//! - `resize`: re-render on window resize until the container is removed

pub mod images;
pub mod resize;
pub mod surface;

pub use images::wait_for_images;
pub use resize::ResizeSubscription;
pub use surface::DomSurface;
