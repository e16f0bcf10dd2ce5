//! Round counting as a differential dataflow.
//!
//! A permutation is presented as a collection of `(value, position)` records. A value starts a
//! round exactly when it is `1`, or when its position is less than the position of its
//! predecessor, so the round starts come from joining the records against themselves shifted up
//! by one value. Because the computation is a differential dataflow, changing a few records (for
//! example exchanging the values at two positions) updates the round count without revisiting
//! the rest of the permutation.

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use timely::communication::Allocate;
use timely::dataflow::Scope;
use timely::dataflow::operators::probe::Handle;
use timely::order::TotalOrder;
use timely::worker::Worker;

use differential_dataflow::Collection;
use differential_dataflow::input::InputSession;
use differential_dataflow::lattice::Lattice;
use differential_dataflow::operators::{CountTotal, Join};

use crate::error::RoundsError;
use crate::logging::{LoadedEvent, RoundStartEvent, SwapEvent};
use crate::permutation::Permutation;

/// Values that begin a round, given `(value, position)` records of a permutation.
///
/// The records should describe a permutation of `1 ..= n`, each value once, as produced from a
/// validated [`Permutation`]. Other inputs do not panic, but their output is not a round count:
/// a repeated value joins with every record of its predecessor, and a record for `usize::MAX`
/// is never matched against a successor.
///
/// # Examples
///
/// ```
/// use differential_dataflow::input::Input;
///
/// ::timely::example(|scope| {
///     // `[2, 1, 3]` has rounds starting at values 1 and 2.
///     let positions = scope.new_collection_from(vec![(2, 0), (1, 1), (3, 2)]).1;
///     rounds::dataflow::round_starts(&positions)
///         .inspect(|x| println!("round starts at: {:?}", x.0));
/// });
/// ```
pub fn round_starts<G>(positions: &Collection<G, (usize, usize)>) -> Collection<G, usize>
where
    G: Scope,
    G::Timestamp: Lattice+Ord,
{
    let firsts =
    positions
        .filter(|&(value, _)| value == 1)
        .map(|(value, _)| value);

    // re-key each record by the value that follows it.
    let predecessors = positions.flat_map(|(value, position)| value.checked_add(1).map(|next| (next, position)));

    positions
        .join_map(&predecessors, |&value, &position, &previous| (value, position < previous))
        .filter(|&(_, starts)| starts)
        .map(|(value, _)| value)
        .concat(&firsts)
}

/// The number of rounds, as a single `((), count)` record.
///
/// The collection is empty when there are no values at all.
pub fn round_count<G>(positions: &Collection<G, (usize, usize)>) -> Collection<G, ((), isize)>
where
    G: Scope,
    G::Timestamp: TotalOrder+Lattice+Ord,
{
    round_starts(positions)
        .map(|_| ())
        .count_total()
}

/// Builds a dataflow on `worker` counting the rounds of the `(value, position)` records fed to
/// `input`, and returns a probe for its output.
///
/// `observe` sees every update to the `((), count)` record. Round starts appearing and
/// disappearing are logged if a logger is registered under [`crate::logging::EVENTS`].
pub fn count_dataflow<A, F>(worker: &mut Worker<A>, input: &mut InputSession<u64, (usize, usize), isize>, observe: F) -> Handle<u64>
where
    A: Allocate,
    F: FnMut(&(((), isize), u64, isize))+'static,
{
    let logger = crate::logging::logger(worker);
    let mut probe = Handle::new();

    worker.dataflow(|scope| {

        let starts = round_starts(&input.to_collection(scope));

        if let Some(logger) = logger {
            starts.inspect(move |&(value, _, diff)| logger.log(RoundStartEvent { value, diff }));
        }

        starts
            .map(|_| ())
            .count_total()
            .inspect(observe)
            .probe_with(&mut probe);
    });

    probe
}

/// Loads `permutation` and applies `swaps` one epoch at a time, reporting the number of rounds
/// after the load and after each swap.
///
/// Runs a single timely worker in the calling thread. Swap positions are checked before the
/// dataflow is built.
///
/// # Examples
///
/// ```
/// use rounds::Permutation;
/// use rounds::dataflow::track_swaps;
///
/// let perm = Permutation::identity(4);
/// assert_eq!(track_swaps(&perm, &[(1, 2), (1, 2), (0, 3)]), Ok(vec![1, 2, 1, 3]));
/// ```
pub fn track_swaps(permutation: &Permutation, swaps: &[(usize, usize)]) -> Result<Vec<usize>, RoundsError> {
    run_swaps(permutation, swaps, None::<std::io::Sink>)
}

/// As [`track_swaps`], also writing [`crate::logging::RoundsEvent`]s to `writer` as JSON lines.
pub fn track_swaps_logged<W>(permutation: &Permutation, swaps: &[(usize, usize)], writer: W) -> Result<Vec<usize>, RoundsError>
where
    W: Write+Send+Sync+'static,
{
    run_swaps(permutation, swaps, Some(writer))
}

fn run_swaps<W>(permutation: &Permutation, swaps: &[(usize, usize)], writer: Option<W>) -> Result<Vec<usize>, RoundsError>
where
    W: Write+Send+Sync+'static,
{

    // reject bad positions before any dataflow is built.
    let mut scratch = permutation.clone();
    for &(left, right) in swaps {
        scratch.swap(left, right)?;
    }

    let values: Vec<usize> = permutation.clone().into();
    let swaps = swaps.to_vec();

    let counts = timely::execute_directly(move |worker| {

        if let Some(writer) = writer {
            crate::logging::enable(worker, writer);
        }
        let mut logger = crate::logging::logger(worker);
        let mut input = InputSession::new();

        // accumulates `count * diff` over every output update, which is the current count.
        let rounds = Rc::new(Cell::new(0isize));
        let observed = Rc::clone(&rounds);
        let probe = count_dataflow(worker, &mut input, move |&(((), count), _, diff)| {
            observed.set(observed.get() + count * diff)
        });

        let mut values = values;
        for (position, &value) in values.iter().enumerate() {
            input.insert((value, position));
        }
        if let Some(logger) = &logger {
            logger.log(LoadedEvent { len: values.len() });
        }

        let mut counts = Vec::with_capacity(swaps.len() + 1);

        input.advance_to(1);
        input.flush();
        worker.step_while(|| probe.less_than(input.time()));
        counts.push(rounds.get() as usize);

        for (epoch, &(left, right)) in swaps.iter().enumerate() {
            if left != right {
                let (a, b) = (values[left], values[right]);
                input.remove((a, left));
                input.remove((b, right));
                input.insert((a, right));
                input.insert((b, left));
                values.swap(left, right);
            }
            if let Some(logger) = &logger {
                logger.log(SwapEvent { left, right });
            }

            input.advance_to(epoch as u64 + 2);
            input.flush();
            worker.step_while(|| probe.less_than(input.time()));
            counts.push(rounds.get() as usize);
        }

        if let Some(logger) = logger.as_mut() {
            logger.flush();
        }

        counts
    });

    Ok(counts)
}
