//! Point file input and output.
//!
//! - `point_io`: Two-column `x,y` text files consumed by the plotting
//!   collaborator and accepted as interpolation input

pub mod point_io;

pub use point_io::{dump, dump_with_interpolated, load};
