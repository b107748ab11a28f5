use crate::traits::step::Step;

/// A struct that turns a fallible traversal into an ordinary iterator by
/// discarding failures.
/// You can create a [SkipErrors] with
/// [Compose::skip_errors](crate::Compose::skip_errors).
///
/// Each pull advances the base until it yields a value or ends, silently
/// discarding any failures in between. A base producing an unbounded run of
/// consecutive failures therefore makes [next](Iterator::next) spin without
/// returning; this is a documented risk of the view, not a bug, and no retry
/// cap is applied.
/// # Examples
/// ```
/// # use misstep::{Compose, IntoFallible};
/// let readable: Vec<u32> = ["1", "x", "3"]
/// 	.map_fallible(|s| -> anyhow::Result<u32> { Ok(s.parse()?) })
/// 	.skip_errors()
/// 	.collect();
/// assert_eq!(readable, vec![1, 3]);
/// ```
pub struct SkipErrors<Previous> {
	from: Previous,
}

impl<Previous> SkipErrors<Previous> {
	pub(crate) fn new(from: Previous) -> Self {
		SkipErrors { from }
	}
}

impl<Previous> Iterator for SkipErrors<Previous>
where
	Previous: Step,
{
	type Item = Previous::Item;
	fn next(&mut self) -> Option<Previous::Item> {
		loop {
			if let Ok(item) = self.from.advance() {
				return item;
			}
		}
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.from.size_hint().1)
	}
}
