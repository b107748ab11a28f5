use std::marker::PhantomData;

use crate::traits::{sequence::Sequence, step::Step};

/// A struct that is exhausted from the start.
/// You can create an [Empty] with [empty].
pub struct Empty<Item, Error> {
	marker: PhantomData<(Item, Error)>,
}

/// Creates a sequence with no elements and no failures.
pub fn empty<Item, Error>() -> Empty<Item, Error> {
	Empty {
		marker: PhantomData,
	}
}

impl<Item, Error> Clone for Empty<Item, Error> {
	fn clone(&self) -> Self {
		empty()
	}
}

impl<Item, Error> Step for Empty<Item, Error> {
	type Item = Item;
	type Error = Error;
	fn advance(&mut self) -> Result<Option<Item>, Error> {
		Ok(None)
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(0))
	}
}

impl<Item, Error> Sequence for Empty<Item, Error> {
	type Item = Item;
	type Error = Error;
	type Step = Self;
	fn make_step(&self) -> Self {
		empty()
	}
}
