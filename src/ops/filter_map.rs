use crate::traits::{sequence::Sequence, step::Step};

/// A struct that transforms and discards elements in a single pass.
/// You can create a [FilterMap] with
/// [Compose::filter_map](crate::Compose::filter_map).
///
/// Elements for which the closure yields no result are discarded; a closure
/// failure propagates immediately without skipping.
/// # Examples
/// ```
/// # use misstep::{Compose, IntoFallible, Step};
/// let parsed = ["1", "x", "3"]
/// 	.into_fallible::<anyhow::Error>()
/// 	.filter_map(|s| Ok(s.parse::<u32>().ok()));
///
/// let parsed: Vec<u32> = parsed.collect().unwrap();
/// assert_eq!(parsed, vec![1, 3]);
/// ```
pub struct FilterMap<Previous, M> {
	from: Previous,
	map: M,
}

impl<Previous, M> FilterMap<Previous, M> {
	pub(crate) fn new(from: Previous, map: M) -> Self {
		FilterMap { from, map }
	}
}

impl<Previous, M, Mapped> Step for FilterMap<Previous, M>
where
	Previous: Step,
	M: FnMut(Previous::Item) -> Result<Option<Mapped>, Previous::Error>,
{
	type Item = Mapped;
	type Error = Previous::Error;
	fn advance(&mut self) -> Result<Option<Mapped>, Self::Error> {
		while let Some(item) = self.from.advance()? {
			if let Some(mapped) = (self.map)(item)? {
				return Ok(Some(mapped));
			}
		}
		Ok(None)
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.from.size_hint().1)
	}
}

impl<Previous, M, Mapped> Sequence for FilterMap<Previous, M>
where
	Previous: Sequence,
	M: Clone + FnMut(Previous::Item) -> Result<Option<Mapped>, Previous::Error>,
{
	type Item = Mapped;
	type Error = Previous::Error;
	type Step = FilterMap<Previous::Step, M>;
	fn make_step(&self) -> Self::Step {
		FilterMap {
			from: self.from.make_step(),
			map: self.map.clone(),
		}
	}
}
