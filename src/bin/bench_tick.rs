use gol_universe::Universe;
use std::time::Instant;

const SIDE: usize = 512;
const GENERATIONS: usize = 1000;
const SEED: u64 = 42;

fn main() {
    env_logger::init();

    let timer = Instant::now();
    let mut universe = Universe::random(SIDE, SIDE, Some(SEED)).unwrap();
    println!("Time to build universe: {:?}", timer.elapsed());

    let timer = Instant::now();
    let mut changed = 0usize;
    for _ in 0..GENERATIONS {
        universe.tick();
        changed += universe.newly_alive().len() / 2 + universe.newly_dead().len() / 2;
    }
    println!("Time on {} generations: {:?}", GENERATIONS, timer.elapsed());
    println!(
        "Population {}, {:.1} changed cells per generation",
        universe.population(),
        changed as f64 / GENERATIONS as f64
    );
}
