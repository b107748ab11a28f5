use std::marker::PhantomData;

use crate::{
	ops::map::Map,
	traits::{sequence::Sequence, step::Step},
};

/// A struct that adapts an ordinary iterator to the fallible contracts.
/// You can create a [Convert] with [convert] or
/// [IntoFallible::into_fallible].
///
/// Each advance simply forwards to the wrapped iterator and never produces
/// a failure; the error type is phantom, fixed by whatever pipeline the
/// adapter feeds.
pub struct Convert<Previous, Error> {
	from: Previous,
	error: PhantomData<Error>,
}

/// Adapts an ordinary non-failing source into a fallible sequence.
///
/// This is the entry point for bridging external iterators into the
/// combinator pipeline.
/// # Examples
/// ```
/// # use misstep::{convert, Step};
/// let mut numbers = convert::<_, anyhow::Error>(1..=2);
///
/// assert_eq!(numbers.advance().unwrap(), Some(1));
/// assert_eq!(numbers.advance().unwrap(), Some(2));
/// assert_eq!(numbers.advance().unwrap(), None);
/// ```
pub fn convert<Previous, Error>(from: Previous) -> Convert<Previous::IntoIter, Error>
where
	Previous: IntoIterator,
{
	Convert {
		from: from.into_iter(),
		error: PhantomData,
	}
}

impl<Previous, Error> Step for Convert<Previous, Error>
where
	Previous: Iterator,
{
	type Item = Previous::Item;
	type Error = Error;
	fn advance(&mut self) -> Result<Option<Previous::Item>, Error> {
		Ok(self.from.next())
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.from.size_hint()
	}
}

impl<Previous, Error> Sequence for Convert<Previous, Error>
where
	Previous: Iterator + Clone,
{
	type Item = Previous::Item;
	type Error = Error;
	type Step = Self;
	fn make_step(&self) -> Self {
		Convert {
			from: self.from.clone(),
			error: PhantomData,
		}
	}
}

/// A trait that adapts ordinary iteration sources into fallible ones.
pub trait IntoFallible
where
	Self: IntoIterator + Sized,
{
	/// Wraps this source so it satisfies the fallible contracts.
	fn into_fallible<Error>(self) -> Convert<Self::IntoIter, Error> {
		convert(self)
	}
	/// Wraps this source and applies a fallible transform, in one call.
	///
	/// Shorthand for wrapping with [into_fallible](IntoFallible::into_fallible)
	/// and then mapping with [Compose::map](crate::Compose::map).
	/// # Examples
	/// ```
	/// # use misstep::{IntoFallible, Step};
	/// let parsed: Vec<u32> = ["1", "2"]
	/// 	.map_fallible(|s| -> anyhow::Result<u32> { Ok(s.parse()?) })
	/// 	.collect()
	/// 	.unwrap();
	/// assert_eq!(parsed, vec![1, 2]);
	/// ```
	fn map_fallible<M, Mapped, Error>(self, map: M) -> Map<Convert<Self::IntoIter, Error>, M>
	where
		M: FnMut(Self::Item) -> Result<Mapped, Error>,
	{
		Map::new(convert(self), map)
	}
}

impl<T> IntoFallible for T where T: IntoIterator + Sized {}
