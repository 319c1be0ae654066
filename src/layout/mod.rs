//! Layout engine for wheel panels and centered popups
//!
//! [`wheel`] spreads a row of uniform items around a circle and sizes the
//! container to fit the ring. [`anchor`] keeps a popup centered on its
//! anchor point. Both are pure computations: the host owns applying results.

pub mod anchor;
pub mod config;
pub mod error;
pub mod panel;
pub mod transform;
pub mod types;
pub mod wheel;

pub use anchor::{compute_centering_offset, AnchorCenteringTracker, CenteringOffset, SizeChange};
pub use config::WheelParams;
pub use error::LayoutError;
pub use panel::{WheelItem, WheelPanel};
pub use transform::RotationTransform;
pub use types::*;
pub use wheel::{
    compute, compute_layout, compute_required_size, inner_radius, WheelGeometry, WheelLayout,
};
