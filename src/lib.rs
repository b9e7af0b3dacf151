//! gridstore: dense in-memory containers with index-based views.
//!
//! This crate provides row-major 2D and 3D containers (`Matrix`, `Volume`),
//! non-owning views over arbitrary index sets (`Subset`, `SubsetMut`), a
//! keyed adapter that gives any linear container lookup by name (`Indexer`
//! with the `Tagged` element type), and cursors for projected and windowed
//! traversal (`CastIter`, `RangeIter`).
//!
//! The design favors small, composable pieces: containers expose flat
//! positions, views and cursors work against the `Sequence` capability
//! traits, and arithmetic and persistence sit in their own modules.
pub mod capability;
pub mod cast_iter;
pub mod error;
pub mod indexer;
pub mod io;
pub mod matrix;
pub mod numeric;
pub mod range_iter;
pub mod stream;
pub mod subset;
pub mod tagged;
pub mod volume;

pub use capability::{BackInsert, Clearable, FrontInsert, Keyed, Reservable, Sequence, SequenceMut, Shaped};
pub use cast_iter::CastIter;
pub use error::LookupError;
pub use indexer::{Indexer, LockedSeries, Series};
pub use matrix::Matrix;
pub use range_iter::RangeIter;
pub use subset::{Subset, SubsetMut};
pub use tagged::Tagged;
pub use volume::Volume;
