#![deny(missing_docs)]
//! Misstep is a library for lazy iteration that can fail.
//!
//! Rust's built-in [Iterator] yields a value or ends; there is no channel
//! for a step that fails, the way reading a line from a file or decoding a
//! record from a stream fails. Misstep models that third outcome directly:
//! every advance yields a value, a failure, or the end, and failures travel
//! through lazy pipelines to whoever drains them.
//!
//! Take a look at [ops] for a list of available operations.
//!
//! There are examples in the individual operations.
//!
//! Take a look at [traits] for the two capability traits.
//!
//! ```
//! use misstep::{Compose, IntoFallible};
//!
//! let lines = ["100", "200", "fern", "400"];
//! let readable: Vec<u64> = lines
//! 	.map_fallible(|line| -> anyhow::Result<u64> { Ok(line.parse()?) })
//! 	.skip_errors()
//! 	.collect();
//!
//! assert_eq!(readable, vec![100, 200, 400]);
//! ```

mod macros;
/// Various operations for composing fallible pipelines
pub mod ops;
/// Concrete generators and type-erased containers
pub mod structs;
/// Traits for advancing and restarting fallible iteration
pub mod traits;
/// Wrappers around ordinary iterators
pub mod wrappers;

pub use {
	ops::Compose,
	structs::{
		any_sequence::AnySequence,
		any_step::AnyStep,
		empty::{empty, Empty},
		from_fn::{from_fn, FromFn},
		successors::{successors, Successors},
		unfold::{unfold, Unfold},
	},
	traits::{sequence::Sequence, step::Step},
	wrappers::convert::{convert, Convert, IntoFallible},
};

#[cfg(test)]
mod tests;
