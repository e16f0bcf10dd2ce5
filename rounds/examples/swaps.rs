//! Maintains the round count of a permutation under random swaps.
//!
//!     cargo run --release --example swaps -- 100000 1000 [inspect] [logged] -w2
//!
//! Loads the descending permutation of the given size, then exchanges random pairs of positions,
//! one swap per epoch. Arguments after the first two are handed to timely.

extern crate rand;
extern crate timely;
extern crate differential_dataflow;
extern crate rounds;

use rand::{Rng, SeedableRng, StdRng};

use differential_dataflow::input::InputSession;

use rounds::Permutation;
use rounds::dataflow::count_dataflow;
use rounds::logging::{LoadedEvent, SwapEvent};

fn main() {

    let size: usize = std::env::args().nth(1).unwrap().parse().unwrap();
    let swaps: usize = std::env::args().nth(2).unwrap().parse().unwrap();

    let inspect: bool = std::env::args().any(|x| x == "inspect");
    let logged: bool = std::env::args().any(|x| x == "logged");

    timely::execute_from_args(std::env::args().skip(3), move |worker| {

        let timer = ::std::time::Instant::now();

        let index = worker.index();
        let peers = worker.peers();

        if logged {
            rounds::logging::enable(worker, std::io::stderr());
        }
        let logger = rounds::logging::logger(worker);

        let mut input = InputSession::new();
        let probe = count_dataflow(worker, &mut input, move |x| if inspect { println!("rounds: {:?}", x) });

        // each worker loads a disjoint share of positions.
        let mut values: Vec<usize> = Permutation::reversed(size).into();
        for (position, &value) in values.iter().enumerate().filter(|&(position, _)| position % peers == index) {
            input.insert((value, position));
        }
        if let Some(logger) = &logger {
            logger.log(LoadedEvent { len: size });
        }

        input.advance_to(1);
        input.flush();
        worker.step_while(|| probe.less_than(input.time()));

        println!("worker {}: round 0 finished after {:?} (loading)", index, timer.elapsed());

        if size > 0 {

            // every worker draws the same swaps, so that all agree on the current values.
            let seed: &[_] = &[1, 2, 3, 4];
            let mut rng: StdRng = SeedableRng::from_seed(seed);

            let timer = ::std::time::Instant::now();

            for round in 0 .. swaps {
                let left = rng.gen_range(0, size);
                let right = rng.gen_range(0, size);
                if round % peers == index && left != right {
                    let (a, b) = (values[left], values[right]);
                    input.remove((a, left));
                    input.remove((b, right));
                    input.insert((a, right));
                    input.insert((b, left));
                    if let Some(logger) = &logger {
                        logger.log(SwapEvent { left, right });
                    }
                }
                values.swap(left, right);

                input.advance_to(round as u64 + 2);
                input.flush();
                worker.step_while(|| probe.less_than(input.time()));
            }

            let elapsed = timer.elapsed();
            let seconds = elapsed.as_secs() as f64 + (elapsed.subsec_nanos() as f64) / 1000000000.0;
            println!("worker {}: {} swaps in {:?}s", index, swaps, seconds);
        }

    }).expect("Computation terminated abnormally");
}
