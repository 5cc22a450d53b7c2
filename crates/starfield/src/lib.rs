//! The star field simulation: the SoA star store, the per-frame proximity
//! and collection sweep, the shared display-size pulse, and the packed
//! render view.

pub mod field;
pub mod sweep;
pub mod view;

pub use field::*;
pub use sweep::*;
pub use view::*;
