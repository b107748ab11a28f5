use crate::{
	macros::unwrap_or_return,
	traits::{sequence::Sequence, step::Step},
};

/// A struct that generates each element from its predecessor.
/// You can create a [Successors] with [successors].
#[derive(Clone)]
pub struct Successors<Item, F> {
	next: Option<Item>,
	succ: F,
}

/// Creates the sequence `first, succ(first), succ(succ(first)), ...`.
///
/// Each advance hands out the pending element after computing its successor,
/// so a failing successor computation surfaces on the advance that would
/// have delivered the next element; the elements already delivered stand,
/// and the pending element is dropped. After a failure or the end, every
/// advance returns the end. If the first element is never consumed, `succ`
/// is never called.
/// # Examples
/// ```
/// # use misstep::{successors, Compose, Step};
/// let powers = successors(Some(1u32), |n| Ok::<_, anyhow::Error>(n.checked_mul(2)));
///
/// let powers: Vec<u32> = powers.take(4).collect().unwrap();
/// assert_eq!(powers, vec![1, 2, 4, 8]);
/// ```
pub fn successors<Item, F, Error>(first: Option<Item>, succ: F) -> Successors<Item, F>
where
	F: FnMut(&Item) -> Result<Option<Item>, Error>,
{
	Successors { next: first, succ }
}

impl<Item, F, Error> Step for Successors<Item, F>
where
	F: FnMut(&Item) -> Result<Option<Item>, Error>,
{
	type Item = Item;
	type Error = Error;
	fn advance(&mut self) -> Result<Option<Item>, Error> {
		let item = unwrap_or_return!(self.next.take());
		self.next = (self.succ)(&item)?;
		Ok(Some(item))
	}
}

impl<Item, F, Error> Sequence for Successors<Item, F>
where
	Item: Clone,
	F: Clone + FnMut(&Item) -> Result<Option<Item>, Error>,
{
	type Item = Item;
	type Error = Error;
	type Step = Self;
	fn make_step(&self) -> Self {
		self.clone()
	}
}
