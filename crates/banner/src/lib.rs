//! Adaptive banner layout engine for the pet manager window.
//!
//! The window background is built from two banner images and a fill colour:
//! the top banner keeps its native pixel height and is tiled horizontally to
//! cover the window width, while the bottom banner is rescaled uniformly so
//! its width always matches the window. Whatever vertical space remains
//! between the two is the middle band, a plain-filled region the application
//! places its own widgets into. The overall flow per resize is:
//!
//! ```text
//!   winit resize event
//!          │ RelayoutDebouncer::notify
//!          ▼
//!   BannerLayout::recompute(viewport) ──▶ LayoutResult (fractions + rasters)
//!          │
//!          └─▶ LayoutResult::compose() ──▶ full-window RGBA frame
//! ```
//!
//! `BannerLayout` owns the two immutable source images (normalised to RGBA at
//! load time) and is the only place layout arithmetic happens. The debouncer
//! collapses bursts of resize notifications so the raster work runs once per
//! quiet period rather than once per event.

mod color;
mod debounce;
mod layout;
mod source;

pub use color::{parse_hex_color, ColorError};
pub use debounce::RelayoutDebouncer;
pub use layout::{BandFractions, BannerLayout, LayoutResult, Rect, Viewport};
pub use source::{load_rgba, AssetError};
