use hex_scarcity::prelude::*;
use hex_scarcity_examples::{
    init_tracing, render_board_to_png, DisplayMetrics, RenderConfig, BRIEFINGS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let sampler = HexGridSampler::legacy(DEFAULT_CATEGORIES)?;

    for (i, briefing) in BRIEFINGS.iter().enumerate() {
        let scarcity = briefing.scarcity()?;
        let mut rng = session_rng(0xB12E_F1A6, i as u64);

        // Print the legend-relevant tallies next to each briefing card.
        let mut sink = FnSink::new(|event| {
            if let SampleEvent::Warning { context, message } = event {
                eprintln!("warning [{context}]: {message}");
            }
        });
        let result = sampler.sample_with_events(scarcity.percent(), &mut rng, &mut sink)?;

        println!("{}", briefing.header());
        println!("{}", briefing.title);
        println!("  {}", briefing.summary);
        println!(
            "  wheat {} | brick {} | collapsed {}",
            result.count(&TileCategory::resource("Wheat")),
            result.count(&TileCategory::resource("Brick")),
            result.failed_count()
        );
        println!("  {}", DisplayMetrics::from_result(&result).headline());
        println!("  {}", briefing.link);

        let out = format!("briefing-{}.png", i + 1);
        render_board_to_png(&result, &RenderConfig::new((500, 500)), out)?;
    }
    Ok(())
}
