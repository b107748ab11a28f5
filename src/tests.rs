use std::{cell::Cell, rc::Rc};

use anyhow::{anyhow, Result};
use proptest::prelude::*;

use crate::{
	convert, empty, successors, unfold, AnySequence, AnyStep, Compose, FromFn, IntoFallible,
	Sequence, Step, Unfold,
};

/// An infinite counter that records how often its base is pulled.
fn counting(pulls: Rc<Cell<usize>>) -> Unfold<u32, impl FnMut(&mut u32) -> Result<Option<u32>> + Clone> {
	unfold(0u32, move |state| {
		pulls.set(pulls.get() + 1);
		let next = *state;
		*state += 1;
		Ok::<_, anyhow::Error>(Some(next))
	})
}

/// Replays a script of values and failures, then ends.
fn scripted(items: Vec<Result<u32>>) -> FromFn<impl FnMut() -> Result<Option<u32>>> {
	let mut items = items.into_iter();
	crate::from_fn(move || items.next().transpose())
}

#[test]
fn unfold_reports_failure_in_place() {
	let numbers = unfold(0u32, |state| {
		if *state == 2 {
			return Err(anyhow!("bad state"));
		}
		let next = *state;
		*state += 1;
		Ok(Some(next))
	});
	let mut seen = Vec::new();
	let outcome = numbers.for_each(|v| seen.push(v));
	assert!(outcome.is_err());
	assert_eq!(seen, vec![0, 1]);
}

#[test]
fn successors_surfaces_failure_for_the_pending_element() {
	let mut numbers = successors(Some(0u32), |n| {
		if n + 1 == 3 {
			return Err(anyhow!("no successor"));
		}
		Ok(Some(n + 1))
	});
	assert_eq!(numbers.advance().unwrap(), Some(0));
	assert_eq!(numbers.advance().unwrap(), Some(1));
	assert!(numbers.advance().is_err());
	assert_eq!(numbers.advance().unwrap(), None);
}

#[test]
fn successors_never_calls_succ_before_the_first_advance() {
	let calls = Rc::new(Cell::new(0));
	let probe = Rc::clone(&calls);
	let numbers = successors(Some(0u32), move |n| {
		probe.set(probe.get() + 1);
		Ok::<_, anyhow::Error>(Some(n + 1))
	});
	assert_eq!(calls.get(), 0);
	drop(numbers);
	assert_eq!(calls.get(), 0);
}

#[test]
fn take_never_pulls_past_its_budget() {
	let pulls = Rc::new(Cell::new(0));
	let taken: Vec<u32> = counting(Rc::clone(&pulls)).take(2).collect().unwrap();
	assert_eq!(taken, vec![0, 1]);
	assert_eq!(pulls.get(), 2);
}

#[test]
fn take_counts_failed_pulls_against_the_budget() {
	let mut taken = scripted(vec![Err(anyhow!("boom")), Ok(1), Ok(2)]).take(2);
	assert!(taken.advance().is_err());
	assert_eq!(taken.advance().unwrap(), Some(1));
	assert_eq!(taken.advance().unwrap(), None);
}

#[test]
fn skip_resumes_where_the_prefix_ended() {
	let source = convert::<_, anyhow::Error>(0u32..10);
	let head: Vec<u32> = source.make_step().take(4).collect().unwrap();
	let tail: Vec<u32> = source.make_step().skip(4).collect().unwrap();
	let whole: Vec<u32> = head.into_iter().chain(tail).collect();
	assert_eq!(whole, (0..10).collect::<Vec<u32>>());
}

#[test]
fn skip_consumes_its_count_exactly_once() {
	let mut rest = convert::<_, anyhow::Error>(0u32..5).skip(2);
	assert_eq!(rest.advance().unwrap(), Some(2));
	assert_eq!(rest.advance().unwrap(), Some(3));
	assert_eq!(rest.advance().unwrap(), Some(4));
	assert_eq!(rest.advance().unwrap(), None);
}

#[test]
fn skip_ends_early_when_the_base_is_short() {
	let mut rest = convert::<_, anyhow::Error>(0u32..2).skip(5);
	assert_eq!(rest.advance().unwrap(), None);
	assert_eq!(rest.advance().unwrap(), None);
}

#[test]
fn skip_propagates_failures_from_the_drop_phase() {
	let mut rest = scripted(vec![Ok(0), Err(anyhow!("boom")), Ok(2), Ok(3)]).skip(2);
	assert!(rest.advance().is_err());
	// the failing pull does not consume drop count; dropping resumes
	assert_eq!(rest.advance().unwrap(), Some(3));
	assert_eq!(rest.advance().unwrap(), None);
}

#[test]
fn map_failure_consumes_exactly_one_base_pull() {
	let pulls = Rc::new(Cell::new(0));
	let mut doubled = counting(Rc::clone(&pulls)).map(|v| {
		if v == 1 {
			return Err(anyhow!("bad element"));
		}
		Ok(v * 2)
	});
	assert_eq!(doubled.advance().unwrap(), Some(0));
	assert!(doubled.advance().is_err());
	assert_eq!(pulls.get(), 2);
	assert_eq!(doubled.advance().unwrap(), Some(4));
	assert_eq!(pulls.get(), 3);
}

#[test]
fn filter_surfaces_predicate_failures() {
	let mut odd = convert::<_, anyhow::Error>(0u32..5).filter(|v| {
		if *v == 2 {
			return Err(anyhow!("cannot judge"));
		}
		Ok(v % 2 == 1)
	});
	assert_eq!(odd.advance().unwrap(), Some(1));
	assert!(odd.advance().is_err());
	assert_eq!(odd.advance().unwrap(), Some(3));
	assert_eq!(odd.advance().unwrap(), None);
}

#[test]
fn filter_map_discards_and_transforms_in_one_pass() {
	let halves: Vec<u32> = convert::<_, anyhow::Error>(0u32..6)
		.filter_map(|v| Ok((v % 2 == 0).then_some(v / 2)))
		.collect()
		.unwrap();
	assert_eq!(halves, vec![0, 1, 2]);
}

#[test]
fn filter_then_map_matches_map_then_filter_for_pure_closures() {
	let filtered_first: Vec<u32> = convert::<_, anyhow::Error>(0u32..10)
		.filter(|v| Ok(v % 3 == 0))
		.map(|v| Ok(v * v))
		.collect()
		.unwrap();
	let mapped_first: Vec<u32> = convert::<_, anyhow::Error>(0u32..10)
		.map(|v| Ok(v * v))
		.filter(|v| Ok(v % 9 == 0))
		.collect()
		.unwrap();
	assert_eq!(filtered_first, vec![0, 9, 36, 81]);
	assert_eq!(filtered_first, mapped_first);
}

#[test]
fn collect_aborts_on_the_first_failure() {
	let outcome: Result<Vec<u32>> =
		scripted(vec![Ok(1), Ok(2), Err(anyhow!("boom")), Ok(3)]).collect();
	assert!(outcome.is_err());
}

#[test]
fn collect_preserves_order() {
	let collected: Vec<u32> = convert::<_, anyhow::Error>(vec![5u32, 3, 8]).collect().unwrap();
	assert_eq!(collected, vec![5, 3, 8]);
}

#[test]
fn for_each_sees_nothing_after_the_failure() {
	let mut seen = Vec::new();
	let outcome = scripted(vec![Ok(1), Err(anyhow!("boom")), Ok(2)]).for_each(|v| seen.push(v));
	assert!(outcome.is_err());
	assert_eq!(seen, vec![1]);
}

#[test]
fn skip_errors_drops_exactly_the_failing_positions() {
	let readable: Vec<u32> = scripted(vec![Ok(1), Err(anyhow!("boom")), Ok(2), Ok(3)])
		.skip_errors()
		.collect();
	assert_eq!(readable, vec![1, 2, 3]);
}

#[test]
fn panic_on_error_passes_values_through() {
	let values: Vec<u32> = convert::<_, anyhow::Error>(1u32..4).panic_on_error().collect();
	assert_eq!(values, vec![1, 2, 3]);
}

#[test]
#[should_panic]
fn panic_on_error_escalates_failures() {
	let _ = scripted(vec![Ok(1), Err(anyhow!("boom"))])
		.panic_on_error()
		.count();
}

#[test]
fn results_exposes_failures_as_items() {
	let outcomes: Vec<Result<u32>> = scripted(vec![Ok(1), Err(anyhow!("boom")), Ok(2)])
		.results()
		.collect();
	assert_eq!(outcomes.len(), 3);
	assert!(outcomes[0].is_ok());
	assert!(outcomes[1].is_err());
	assert!(outcomes[2].is_ok());
}

#[test]
fn erased_steps_preserve_advance_semantics() {
	let mut erased = AnyStep::new(scripted(vec![Ok(1), Err(anyhow!("boom")), Ok(2)]));
	assert_eq!(erased.advance().unwrap(), Some(1));
	assert!(erased.advance().is_err());
	assert_eq!(erased.advance().unwrap(), Some(2));
	assert_eq!(erased.advance().unwrap(), None);
}

#[test]
fn erased_closures_behave_like_steps() {
	let mut remaining = 2u32;
	let mut step = AnyStep::from_fn(move || {
		if remaining == 0 {
			return Ok(None);
		}
		remaining -= 1;
		Ok::<_, anyhow::Error>(Some(remaining))
	});
	assert_eq!(step.advance().unwrap(), Some(1));
	assert_eq!(step.advance().unwrap(), Some(0));
	assert_eq!(step.advance().unwrap(), None);
}

#[test]
fn erased_sequences_make_independent_traversals() {
	let erased = AnySequence::new(convert::<_, anyhow::Error>(0u32..3));
	let first: Vec<u32> = erased.make_step().collect().unwrap();
	let second: Vec<u32> = erased.make_step().collect().unwrap();
	assert_eq!(first, vec![0, 1, 2]);
	assert_eq!(first, second);
}

#[test]
fn empty_erasures_end_immediately() {
	let mut step = AnyStep::<u32, anyhow::Error>::empty();
	assert_eq!(step.advance().unwrap(), None);
	let sequence = AnySequence::<u32, anyhow::Error>::empty();
	assert_eq!(sequence.make_step().advance().unwrap(), None);
}

#[test]
fn combinator_sequences_restart_from_scratch() {
	let evens = convert::<_, anyhow::Error>(0u32..6).filter(|v| Ok(v % 2 == 0));
	let first: Vec<u32> = evens.make_step().collect().unwrap();
	let second: Vec<u32> = evens.make_step().collect().unwrap();
	assert_eq!(first, vec![0, 2, 4]);
	assert_eq!(first, second);
}

#[test]
fn generator_recipes_restart_from_their_initial_state() {
	let numbers = unfold(0u32, |state| {
		let next = *state;
		*state += 1;
		Ok::<_, anyhow::Error>(if next < 3 { Some(next) } else { None })
	});
	let first: Vec<u32> = numbers.make_step().collect().unwrap();
	let second: Vec<u32> = numbers.make_step().collect().unwrap();
	assert_eq!(first, vec![0, 1, 2]);
	assert_eq!(first, second);
}

#[test]
fn construction_evaluates_nothing() {
	let pulls = Rc::new(Cell::new(0));
	let pipeline = counting(Rc::clone(&pulls))
		.map(|v| Ok(v + 1))
		.filter(|v| Ok(v % 2 == 0))
		.take(10);
	let _step = pipeline.make_step();
	assert_eq!(pulls.get(), 0);
}

#[test]
fn adapted_sources_never_fail() {
	let mut adapted = vec![1u32, 2].into_fallible::<anyhow::Error>();
	assert_eq!(adapted.advance().unwrap(), Some(1));
	assert_eq!(adapted.advance().unwrap(), Some(2));
	assert_eq!(adapted.advance().unwrap(), None);
}

#[test]
fn map_fallible_is_convert_then_map() {
	let outcome: Result<Vec<u32>> = ["1", "2", "x"]
		.map_fallible(|s| -> Result<u32> { Ok(s.parse()?) })
		.collect();
	assert!(outcome.is_err());
	let parsed: Vec<u32> = ["1", "2", "3"]
		.map_fallible(|s| -> Result<u32> { Ok(s.parse()?) })
		.collect()
		.unwrap();
	assert_eq!(parsed, vec![1, 2, 3]);
}

#[test]
fn count_and_nth_drain_like_std() {
	let counted = convert::<_, anyhow::Error>(0u32..7).count().unwrap();
	assert_eq!(counted, 7);
	let mut numbers = convert::<_, anyhow::Error>(0u32..7);
	assert_eq!(numbers.nth(3).unwrap(), Some(3));
	assert_eq!(numbers.nth(0).unwrap(), Some(4));
	assert_eq!(numbers.nth(9).unwrap(), None);
}

#[test]
fn size_hints_stay_exact_where_cheap() {
	let numbers = convert::<_, anyhow::Error>(0u32..10);
	assert_eq!(numbers.size_hint(), (10, Some(10)));
	assert_eq!(numbers.make_step().take(3).size_hint(), (3, Some(3)));
	assert_eq!(numbers.make_step().skip(4).size_hint(), (6, Some(6)));
	assert_eq!(empty::<u32, anyhow::Error>().size_hint(), (0, Some(0)));
}

proptest! {
	#[test]
	fn skip_take_reconstructs_any_source(
		values in prop::collection::vec(any::<u32>(), 0..64),
		split in 0usize..80
	) {
		let source = convert::<_, anyhow::Error>(values.clone());
		let head: Vec<u32> = source.make_step().take(split).collect().unwrap();
		let tail: Vec<u32> = source.make_step().skip(split).collect().unwrap();
		let whole: Vec<u32> = head.into_iter().chain(tail).collect();
		prop_assert_eq!(whole, values);
	}

	#[test]
	fn collect_matches_std_for_failure_free_sources(
		values in prop::collection::vec(any::<u32>(), 0..64)
	) {
		let collected: Vec<u32> = convert::<_, anyhow::Error>(values.clone()).collect().unwrap();
		prop_assert_eq!(collected, values);
	}

	#[test]
	fn skip_errors_preserves_value_order(
		outcomes in prop::collection::vec(any::<bool>(), 0..64)
	) {
		let script: Vec<Result<u32>> = outcomes
			.iter()
			.enumerate()
			.map(|(position, ok)| {
				if *ok {
					Ok(position as u32)
				} else {
					Err(anyhow!("boom"))
				}
			})
			.collect();
		let expected: Vec<u32> = script.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
		let survived: Vec<u32> = scripted(script).skip_errors().collect();
		prop_assert_eq!(survived, expected);
	}
}
