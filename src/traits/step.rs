/// Allows a traversal to advance one element at a time, possibly failing.
///
/// Every call to [advance](Step::advance) has exactly one of three outcomes:
/// a value, a failure, or the end of the traversal.
/// # Examples
/// ```
/// # use misstep::{convert, Step};
/// # fn main() -> anyhow::Result<()> {
/// let mut letters = convert::<_, anyhow::Error>(["a", "b"]);
/// while let Some(letter) = letters.advance()? {
/// 	println!("{letter}");
/// }
/// # Ok(())
/// # }
/// ```
pub trait Step {
	/// The element type.
	type Item;
	/// The failure type produced when an advance attempt fails.
	type Error;
	/// Advances the traversal.
	///
	/// Returns `Ok(Some(item))` while there may be more elements, `Ok(None)`
	/// once the traversal is exhausted, and `Err` if this attempt produced no
	/// element. A failure does not end the traversal; the next call is
	/// answered by the underlying source, which decides whether the failing
	/// position is retried or passed over.
	fn advance(&mut self) -> Result<Option<Self::Item>, Self::Error>;
	/// Returns bounds on the number of remaining elements.
	///
	/// Both bounds assume every remaining advance succeeds.
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, None)
	}
	/// Calls a closure on each remaining element, in order.
	///
	/// The closure has no way to end the loop early; the loop runs until the
	/// traversal ends or a failure is propagated to the caller.
	fn for_each<F>(mut self, mut body: F) -> Result<(), Self::Error>
	where
		Self: Sized,
		F: FnMut(Self::Item),
	{
		while let Some(item) = self.advance()? {
			body(item);
		}
		Ok(())
	}
	/// Drains the traversal into a collection, preserving order.
	///
	/// The first failure aborts the drain; the elements collected so far are
	/// discarded, not returned.
	/// # Examples
	/// ```
	/// # use misstep::{convert, Step};
	/// let collected: Vec<u32> = convert::<_, anyhow::Error>(1..4).collect().unwrap();
	/// assert_eq!(collected, vec![1, 2, 3]);
	/// ```
	fn collect<B>(mut self) -> Result<B, Self::Error>
	where
		Self: Sized,
		B: FromIterator<Self::Item>,
	{
		std::iter::from_fn(|| self.advance().transpose()).collect()
	}
	/// Counts the remaining elements.
	fn count(mut self) -> Result<usize, Self::Error>
	where
		Self: Sized,
	{
		let mut count = 0;
		while self.advance()?.is_some() {
			count += 1;
		}
		Ok(count)
	}
	/// Returns the `n`th remaining element, advancing past it.
	fn nth(&mut self, mut n: usize) -> Result<Option<Self::Item>, Self::Error> {
		while let Some(item) = self.advance()? {
			if n == 0 {
				return Ok(Some(item));
			}
			n -= 1;
		}
		Ok(None)
	}
}

impl<S> Step for &mut S
where
	S: Step + ?Sized,
{
	type Item = S::Item;
	type Error = S::Error;
	fn advance(&mut self) -> Result<Option<S::Item>, S::Error> {
		(**self).advance()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(**self).size_hint()
	}
}

impl<S> Step for Box<S>
where
	S: Step + ?Sized,
{
	type Item = S::Item;
	type Error = S::Error;
	fn advance(&mut self) -> Result<Option<S::Item>, S::Error> {
		(**self).advance()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(**self).size_hint()
	}
}
