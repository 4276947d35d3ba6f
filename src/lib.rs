//! Convenience layer over the [`opencl3`] bindings: pick a platform and
//! device (interactively or from fixed indices), build kernels from source
//! files, and report runtime failures with their documented labels.
//!
//! The crate does not wrap the runtime's buffer or queue APIs. A
//! [`Selection`] hands back plain `opencl3` objects, so everything beyond
//! selection and building is done directly against `opencl3`.
//!
//! ```no_run
//! use clutil::{kernel_from_file, select, SelectOptions};
//!
//! # fn main() -> clutil::ClutilResult<()> {
//! let selection = select(SelectOptions::default())?;
//! let kernel = kernel_from_file(
//!     "kernels/add.cl",
//!     "add",
//!     selection.context(),
//!     selection.device(),
//!     "",
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod handler;
mod program;
mod select;
mod status;

pub use error::{ClutilError, ClutilResult};
pub use handler::{check, or_exit, report};
pub use program::{kernel_from_file, kernel_from_source};
pub use select::{select, select_with, Chooser, Console, SelectOptions, Selection};
pub use status::status_label;
