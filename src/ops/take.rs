use std::cmp;

use crate::traits::{sequence::Sequence, step::Step};

/// A struct that stops after a maximum number of elements.
/// You can create a [Take] with [Compose::take](crate::Compose::take).
///
/// Once the budget reaches zero every advance returns the end without
/// touching the base, so the base is never pulled more than `count` times.
/// This also makes [Take] the way to drain a prefix of an infinite
/// generator. Each pull consumes budget whether it yields a value or a
/// failure.
/// # Examples
/// ```
/// # use misstep::{unfold, Compose, Step};
/// let naturals = unfold(0u32, |state| {
/// 	let next = *state;
/// 	*state += 1;
/// 	Ok::<_, anyhow::Error>(Some(next))
/// });
///
/// let head: Vec<u32> = naturals.take(3).collect().unwrap();
/// assert_eq!(head, vec![0, 1, 2]);
/// ```
pub struct Take<Previous> {
	from: Previous,
	remaining: usize,
}

impl<Previous> Take<Previous> {
	pub(crate) fn new(from: Previous, count: usize) -> Self {
		Take {
			from,
			remaining: count,
		}
	}
}

impl<Previous> Step for Take<Previous>
where
	Previous: Step,
{
	type Item = Previous::Item;
	type Error = Previous::Error;
	fn advance(&mut self) -> Result<Option<Previous::Item>, Self::Error> {
		if self.remaining == 0 {
			return Ok(None);
		}
		self.remaining -= 1;
		self.from.advance()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self.from.size_hint();
		(
			cmp::min(lower, self.remaining),
			Some(cmp::min(upper.unwrap_or(self.remaining), self.remaining)),
		)
	}
}

impl<Previous> Sequence for Take<Previous>
where
	Previous: Sequence,
{
	type Item = Previous::Item;
	type Error = Previous::Error;
	type Step = Take<Previous::Step>;
	fn make_step(&self) -> Self::Step {
		Take {
			from: self.from.make_step(),
			remaining: self.remaining,
		}
	}
}
