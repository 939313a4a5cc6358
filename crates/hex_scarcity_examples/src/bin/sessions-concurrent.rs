use std::thread;

use hex_scarcity::prelude::*;
use hex_scarcity_examples::init_tracing;

const BASE_SEED: u64 = 0x5EED;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let sampler = HexGridSampler::try_new(BoardShape::hexagon(5), DEFAULT_CATEGORIES)?;
    let scarcities = [10.0, 35.0, 60.0, 85.0];

    // Each session brings its own RNG; the sampler is shared by reference.
    let results: Vec<(u64, SamplingResult)> = thread::scope(|scope| {
        let handles: Vec<_> = scarcities
            .iter()
            .enumerate()
            .map(|(session, &scarcity)| {
                let sampler = &sampler;
                scope.spawn(move || {
                    let session = session as u64;
                    let mut rng = session_rng(BASE_SEED, session);
                    sampler.sample(scarcity, &mut rng).map(|r| (session, r))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .map_err(|_| anyhow::anyhow!("sampling thread panicked"))?
                    .map_err(anyhow::Error::from)
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })?;

    for (session, result) in &results {
        println!(
            "session {session}: scarcity {} -> {}/{} failed (seed {:#018x})",
            result.scarcity,
            result.failed_count(),
            result.tile_count(),
            seed_for_session(BASE_SEED, *session)
        );
    }

    // Replaying a session reproduces it exactly.
    let (session, first) = &results[0];
    let replay = sampler.sample(first.scarcity.percent(), &mut session_rng(BASE_SEED, *session))?;
    anyhow::ensure!(&replay == first, "session {session} did not replay identically");
    println!("session {session} replayed identically");
    Ok(())
}
