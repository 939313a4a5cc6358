use hex_scarcity::prelude::*;
use hex_scarcity_examples::{init_tracing, render_board_to_png, DisplayMetrics, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();
    // The 17-tile board at the dashboard's default scarcity.
    let sampler = HexGridSampler::legacy(DEFAULT_CATEGORIES)?;
    let mut rng = StdRng::seed_from_u64(42);
    let result = sampler.sample(Scarcity::DEFAULT.percent(), &mut rng)?;

    for (category, count) in result.counts.iter() {
        println!("{category:>6}: {count}");
    }
    println!("{}", DisplayMetrics::from_result(&result).headline());

    // Fixed [-4, 4] view, the classic dashboard framing.
    let config = RenderConfig::new((600, 600));
    render_board_to_png(&result, &config, "boards-legacy-basic.png")?;
    Ok(())
}
