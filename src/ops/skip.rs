use crate::traits::{sequence::Sequence, step::Step};

/// A struct that discards the first elements of its base.
/// You can create a [Skip] with [Compose::skip](crate::Compose::skip).
///
/// The drop count is consumed exactly once, on the leading advances. If the
/// base ends before the count is used up, the traversal ends. A base failure
/// during the drop phase propagates without consuming drop count; the next
/// advance resumes dropping.
/// # Examples
/// ```
/// # use misstep::{convert, Compose, Step};
/// let rest: Vec<u32> = convert::<_, anyhow::Error>(0..5).skip(2).collect().unwrap();
/// assert_eq!(rest, vec![2, 3, 4]);
/// ```
pub struct Skip<Previous> {
	from: Previous,
	remaining: usize,
}

impl<Previous> Skip<Previous> {
	pub(crate) fn new(from: Previous, count: usize) -> Self {
		Skip {
			from,
			remaining: count,
		}
	}
}

impl<Previous> Step for Skip<Previous>
where
	Previous: Step,
{
	type Item = Previous::Item;
	type Error = Previous::Error;
	fn advance(&mut self) -> Result<Option<Previous::Item>, Self::Error> {
		while self.remaining > 0 {
			match self.from.advance()? {
				Some(_) => self.remaining -= 1,
				None => {
					self.remaining = 0;
					return Ok(None);
				}
			}
		}
		self.from.advance()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self.from.size_hint();
		(
			lower.saturating_sub(self.remaining),
			upper.map(|upper| upper.saturating_sub(self.remaining)),
		)
	}
}

impl<Previous> Sequence for Skip<Previous>
where
	Previous: Sequence,
{
	type Item = Previous::Item;
	type Error = Previous::Error;
	type Step = Skip<Previous::Step>;
	fn make_step(&self) -> Self::Step {
		Skip {
			from: self.from.make_step(),
			remaining: self.remaining,
		}
	}
}
