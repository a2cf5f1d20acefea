//! weighted-length: effective text length with discounted ASCII
//!
//! Counts characters the way some social platforms do for mixed Japanese and
//! Latin text: every character is one unit, except printable ASCII and
//! full-width digits/Latin letters, which are each discounted by a third.
//!
//! ```
//! use weighted_length::estimate;
//!
//! assert_eq!(estimate("ABC123").as_f64(), 4.0);
//! assert_eq!(estimate("こんにちは").as_f64(), 5.0);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod utils;
pub mod weight;

pub use error::{Error, Result};
pub use weight::{classify, estimate, estimate_bytes, estimate_f64, CharClass, WeightedLength};
