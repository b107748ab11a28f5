use crate::{
	macros::unwrap_or_return,
	traits::{sequence::Sequence, step::Step},
};

/// A struct that transforms elements with a fallible closure.
/// You can create a [Map] with [Compose::map](crate::Compose::map).
///
/// One base pull corresponds to exactly one advance: when the closure fails,
/// the failure is surfaced for that call and the base is not pulled again to
/// compensate.
/// # Examples
/// ```
/// # use misstep::{Compose, IntoFallible, Step};
/// let doubled = [1u32, 2, 3].into_fallible::<anyhow::Error>().map(|v| Ok(v * 2));
///
/// let doubled: Vec<u32> = doubled.collect().unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub struct Map<Previous, M> {
	from: Previous,
	map: M,
}

impl<Previous, M> Map<Previous, M> {
	pub(crate) fn new(from: Previous, map: M) -> Self {
		Map { from, map }
	}
}

impl<Previous, M, Mapped> Step for Map<Previous, M>
where
	Previous: Step,
	M: FnMut(Previous::Item) -> Result<Mapped, Previous::Error>,
{
	type Item = Mapped;
	type Error = Previous::Error;
	fn advance(&mut self) -> Result<Option<Mapped>, Self::Error> {
		let item = unwrap_or_return!(self.from.advance()?);
		(self.map)(item).map(Some)
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.from.size_hint()
	}
}

impl<Previous, M, Mapped> Sequence for Map<Previous, M>
where
	Previous: Sequence,
	M: Clone + FnMut(Previous::Item) -> Result<Mapped, Previous::Error>,
{
	type Item = Mapped;
	type Error = Previous::Error;
	type Step = Map<Previous::Step, M>;
	fn make_step(&self) -> Self::Step {
		Map {
			from: self.from.make_step(),
			map: self.map.clone(),
		}
	}
}
