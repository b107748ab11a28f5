use crate::traits::step::Step;

use self::{
	filter::Filter, filter_map::FilterMap, map::Map, panic_on_error::PanicOnError,
	results::Results, skip::Skip, skip_errors::SkipErrors, take::Take,
};

/// [Filter] struct declaration and implementations.
pub mod filter;
/// [FilterMap] struct declaration and implementations.
pub mod filter_map;
/// [Map] struct declaration and implementations.
pub mod map;
/// [PanicOnError] struct declaration and implementations.
pub mod panic_on_error;
/// [Results] struct declaration and implementations.
pub mod results;
/// [Skip] struct declaration and implementations.
pub mod skip;
/// [SkipErrors] struct declaration and implementations.
pub mod skip_errors;
/// [Take] struct declaration and implementations.
pub mod take;

/// A trait that allows you to compose fallible pipelines.
///
/// Every method wraps lazily; nothing is pulled from the base until the
/// resulting traversal is advanced.
pub trait Compose
where
	Self: Sized + Step,
{
	/// Transforms elements with a fallible closure. Please refer to [Map]
	fn map<M, Mapped>(self, map: M) -> Map<Self, M>
	where
		M: FnMut(Self::Item) -> Result<Mapped, Self::Error>,
	{
		Map::new(self, map)
	}
	/// Discards elements that fail a predicate. Please refer to [Filter]
	fn filter<F>(self, filter: F) -> Filter<Self, F>
	where
		F: FnMut(&Self::Item) -> Result<bool, Self::Error>,
	{
		Filter::new(self, filter)
	}
	/// Transforms and discards in a single pass. Please refer to [FilterMap]
	fn filter_map<M, Mapped>(self, map: M) -> FilterMap<Self, M>
	where
		M: FnMut(Self::Item) -> Result<Option<Mapped>, Self::Error>,
	{
		FilterMap::new(self, map)
	}
	/// Discards the first `count` elements. Please refer to [Skip]
	fn skip(self, count: usize) -> Skip<Self> {
		Skip::new(self, count)
	}
	/// Stops after at most `count` elements. Please refer to [Take]
	fn take(self, count: usize) -> Take<Self> {
		Take::new(self, count)
	}
	/// Discards failures and keeps the values. Please refer to [SkipErrors]
	fn skip_errors(self) -> SkipErrors<Self> {
		SkipErrors::new(self)
	}
	/// Treats any failure as an unrecoverable fault. Please refer to [PanicOnError]
	fn panic_on_error(self) -> PanicOnError<Self> {
		PanicOnError::new(self)
	}
	/// Hands `Result` items to ordinary iterator consumers. Please refer to [Results]
	fn results(self) -> Results<Self> {
		Results::new(self)
	}
}

impl<T> Compose for T where T: Sized + Step {}
