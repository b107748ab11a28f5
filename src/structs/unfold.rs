use crate::traits::{sequence::Sequence, step::Step};

/// A struct that generates elements by threading state through a closure.
/// You can create an [Unfold] with [unfold].
///
/// The closure owns the semantics entirely: it decides when the sequence
/// ends, whether it is infinite, and what a failure leaves behind in the
/// state. [Unfold] is value-semantic; a clone continues independently from
/// the state it was cloned at, and a fresh traversal made from an
/// un-advanced generator starts at the initial state.
#[derive(Clone)]
pub struct Unfold<State, F> {
	state: State,
	unfold: F,
}

/// Creates a sequence from an initial state and a fallible stepping closure.
///
/// Each advance calls the closure on the state, which it may mutate in
/// place. Returning `Ok(None)` ends the sequence; a closure that never does
/// is an infinite generator, to be bounded by the consumer (for example with
/// [Compose::take](crate::Compose::take)).
/// # Examples
/// ```
/// # use misstep::{unfold, Step};
/// let mut counter = unfold(0u32, |state| {
/// 	let next = *state;
/// 	*state += 1;
/// 	Ok::<_, anyhow::Error>(Some(next))
/// });
///
/// assert_eq!(counter.advance().unwrap(), Some(0));
/// assert_eq!(counter.advance().unwrap(), Some(1));
/// ```
pub fn unfold<State, F, Item, Error>(state: State, unfold: F) -> Unfold<State, F>
where
	F: FnMut(&mut State) -> Result<Option<Item>, Error>,
{
	Unfold { state, unfold }
}

impl<State, F, Item, Error> Step for Unfold<State, F>
where
	F: FnMut(&mut State) -> Result<Option<Item>, Error>,
{
	type Item = Item;
	type Error = Error;
	fn advance(&mut self) -> Result<Option<Item>, Error> {
		(self.unfold)(&mut self.state)
	}
}

impl<State, F, Item, Error> Sequence for Unfold<State, F>
where
	State: Clone,
	F: Clone + FnMut(&mut State) -> Result<Option<Item>, Error>,
{
	type Item = Item;
	type Error = Error;
	type Step = Self;
	fn make_step(&self) -> Self {
		self.clone()
	}
}
