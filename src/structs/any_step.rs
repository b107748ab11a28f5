use delegate::delegate;

use crate::{
	structs::{empty::empty, from_fn::from_fn},
	traits::step::Step,
};

/// A concrete, storable traversal that hides its underlying implementation.
///
/// Erasure is a pure forwarding shim: the wrapped traversal's advance
/// semantics are preserved exactly, with no reordering and no buffering, at
/// the cost of one indirect call per advance.
/// # Examples
/// ```
/// # use misstep::{convert, AnyStep, Step};
/// let mut steps: Vec<AnyStep<u32, anyhow::Error>> = vec![
/// 	AnyStep::new(convert(1..3)),
/// 	AnyStep::empty(),
/// ];
///
/// assert_eq!(steps[0].advance().unwrap(), Some(1));
/// assert_eq!(steps[1].advance().unwrap(), None);
/// ```
pub struct AnyStep<Item, Error> {
	from: Box<dyn Step<Item = Item, Error = Error>>,
}

impl<Item, Error> AnyStep<Item, Error> {
	/// Erases an existing traversal.
	pub fn new(from: impl Step<Item = Item, Error = Error> + 'static) -> Self {
		AnyStep {
			from: Box::new(from),
		}
	}
	/// Erases a raw advance closure.
	pub fn from_fn(step: impl FnMut() -> Result<Option<Item>, Error> + 'static) -> Self
	where
		Item: 'static,
		Error: 'static,
	{
		AnyStep::new(from_fn(step))
	}
	/// Creates a traversal that is exhausted from the start.
	pub fn empty() -> Self
	where
		Item: 'static,
		Error: 'static,
	{
		AnyStep::new(empty())
	}
}

impl<Item, Error> Step for AnyStep<Item, Error> {
	type Item = Item;
	type Error = Error;
	delegate! {
		to self.from {
			fn advance(&mut self) -> Result<Option<Item>, Error>;
			fn size_hint(&self) -> (usize, Option<usize>);
		}
	}
}
