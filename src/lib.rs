//! # Fruit Streams
//!
//! Closures, single-method traits and iterator combinators, demonstrated on
//! a small basket of fruit names.
//!
//! ## Topics Covered
//!
//! 1. **Single-method capabilities** (`walkable`)
//!    - Implementing a trait on a named type
//!    - Satisfying the same trait with a closure via a blanket impl
//!    - Calling both through one generic function
//!
//! 2. **Iterator pipelines** (`pipeline`)
//!    - filter + sort, distinct, map to lengths
//!    - Collecting into a map, fold with an explicit identity
//!    - take / skip views
//!    - Group by key, partition by predicate
//!    - Flattening nested lists
//!    - Max by key returning `Option`
//!    - Stable sort by a reversed key
//!
//! 3. **Parallel iteration with Rayon** (`parallel`)
//!    - Unordered `try_for_each` over a slice
//!    - Parallel reduce with identity and associative combine
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! cargo run -- basket.toml
//! RUST_LOG=debug cargo run
//! ```

pub mod config;
pub mod error;
pub mod parallel;
pub mod pipeline;
pub mod report;
pub mod walkable;

pub use config::{ShowcaseConfig, WalkConfig, DEFAULT_FRUITS};
pub use error::{Result, ShowcaseError};
pub use report::Showcase;
pub use walkable::{DoubleStride, Walkable};
