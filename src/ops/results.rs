use crate::traits::step::Step;

/// A struct that hands a fallible traversal to ordinary iterator consumers
/// as `Result` items.
/// You can create a [Results] with
/// [Compose::results](crate::Compose::results).
///
/// This is the lossless bridge back to [std::iter]: values arrive as `Ok`,
/// failures as `Err`, and the end as `None`, with no reordering.
/// # Examples
/// ```
/// # use misstep::{Compose, IntoFallible};
/// let outcomes: Vec<anyhow::Result<u32>> = ["1", "x"]
/// 	.map_fallible(|s| -> anyhow::Result<u32> { Ok(s.parse()?) })
/// 	.results()
/// 	.collect();
/// assert!(outcomes[0].is_ok());
/// assert!(outcomes[1].is_err());
/// ```
pub struct Results<Previous> {
	from: Previous,
}

impl<Previous> Results<Previous> {
	pub(crate) fn new(from: Previous) -> Self {
		Results { from }
	}
}

impl<Previous> Iterator for Results<Previous>
where
	Previous: Step,
{
	type Item = Result<Previous::Item, Previous::Error>;
	fn next(&mut self) -> Option<Self::Item> {
		self.from.advance().transpose()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.from.size_hint()
	}
}
