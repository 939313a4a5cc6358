use hex_scarcity::prelude::*;
use hex_scarcity_examples::{init_tracing, render_board_to_png, Palette, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let sampler = HexGridSampler::full_board(DEFAULT_CATEGORIES)?;
    let mut rng = StdRng::seed_from_u64(7);

    // One image per scarcity level so the progression is visible side by side.
    for scarcity in [0.0, 25.0, 50.0, 75.0, 100.0] {
        let result = sampler.sample(scarcity, &mut rng)?;
        println!(
            "scarcity {}: {:>2}/{} tiles failed",
            result.scarcity,
            result.failed_count(),
            result.tile_count()
        );

        let config = RenderConfig::new((800, 800))
            .with_palette(Palette::dashboard())
            .fit_to(&result, 0.25);
        render_board_to_png(
            &result,
            &config,
            format!("boards-full-hexagon-{scarcity:.0}.png"),
        )?;
    }
    Ok(())
}
