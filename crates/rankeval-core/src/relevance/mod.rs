//! Binary relevance vectors over a fixed, ordered item universe.
//!
//! Converts between lists of item identifiers and fixed-position 0/1 vectors,
//! and hides a random fraction of known positives to simulate incomplete
//! observation.
//!
//! # Example
//!
//! ```rust
//! use rankeval_core::relevance::{build_relevance_vector, extract_identifiers, ItemUniverse};
//!
//! let universe = ItemUniverse::new(["intro", "verse", "chorus", "outro"])?;
//! let vector = build_relevance_vector(&["chorus", "intro"], &universe)?;
//! assert_eq!(vector, vec![1.0, 0.0, 1.0, 0.0]);
//!
//! // Output follows universe order, not input order
//! assert_eq!(extract_identifiers(&vector, &universe)?, vec!["intro", "chorus"]);
//! # Ok::<(), rankeval_core::Error>(())
//! ```

mod mask;
mod universe;
mod vector;

pub use mask::mask_random_subset;
pub use universe::ItemUniverse;
pub use vector::{build_relevance_vector, extract_identifiers, ranked_relevances};
