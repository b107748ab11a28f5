use crate::traits::{sequence::Sequence, step::Step};

/// A struct that advances by calling a closure.
/// You can create a [FromFn] with [from_fn].
#[derive(Clone)]
pub struct FromFn<F> {
	step: F,
}

/// Creates a sequence whose advance is the given closure.
///
/// The closure is the whole contract: it reports values, failures and the
/// end exactly as a hand-written [Step] implementation would.
/// # Examples
/// ```
/// # use misstep::{from_fn, Step};
/// let mut flips = 0u32;
/// let mut coin = from_fn(move || {
/// 	flips += 1;
/// 	Ok::<_, anyhow::Error>(if flips > 2 { None } else { Some(flips % 2 == 0) })
/// });
///
/// assert_eq!(coin.advance().unwrap(), Some(false));
/// assert_eq!(coin.advance().unwrap(), Some(true));
/// assert_eq!(coin.advance().unwrap(), None);
/// ```
pub fn from_fn<F, Item, Error>(step: F) -> FromFn<F>
where
	F: FnMut() -> Result<Option<Item>, Error>,
{
	FromFn { step }
}

impl<F, Item, Error> Step for FromFn<F>
where
	F: FnMut() -> Result<Option<Item>, Error>,
{
	type Item = Item;
	type Error = Error;
	fn advance(&mut self) -> Result<Option<Item>, Error> {
		(self.step)()
	}
}

impl<F, Item, Error> Sequence for FromFn<F>
where
	F: Clone + FnMut() -> Result<Option<Item>, Error>,
{
	type Item = Item;
	type Error = Error;
	type Step = Self;
	fn make_step(&self) -> Self {
		self.clone()
	}
}
