use ndarray::Array1;
use optn::periodicity::{Delays, PeriodicityTest};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Plot the per-delay in/out-degree diversity of a periodic, a chaotic and a noisy series.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let n = 5000;
    let sine: Array1<f64> = (0..n).map(|k| (2.0 * PI * k as f64 / 20.0).sin()).collect();

    // Logistic map at r = 4
    let mut x = 0.4;
    let logistic: Array1<f64> = (0..n)
        .map(|_| {
            x = 4.0 * x * (1.0 - x);
            x
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(42);
    let noise: Array1<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();

    let mut results = Vec::new();
    for (name, series, colour) in [("sine", &sine, RED), ("logistic", &logistic, GREEN), ("noise", &noise, BLUE)] {
        let test = PeriodicityTest::new(series, Delays::All)?;
        match test.score() {
            Some(score) => println!("{name}: score {score} (d = {})", test.embedding_dimension()),
            None => println!("{name}: score undefined (d = {})", test.embedding_dimension()),
        }
        results.push((name, test, colour));
    }

    let root = BitMapBackend::new("periodicity_scan.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_delay = results
        .iter()
        .flat_map(|(_, t, _)| t.diversities().iter().map(|d| d.delay))
        .max()
        .unwrap_or(2);
    let max_classes = results
        .iter()
        .flat_map(|(_, t, _)| t.diversities().iter().map(|d| d.in_degree_classes.max(d.out_degree_classes)))
        .max()
        .unwrap_or(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("In-degree diversity per delay", ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(2usize..max_delay, 0usize..max_classes + 1)?;

    chart
        .configure_mesh()
        .x_desc("Embedding delay")
        .y_desc("Distinct in-degrees")
        .draw()?;

    for (name, test, colour) in &results {
        let colour = *colour;
        chart
            .draw_series(LineSeries::new(
                test.diversities().iter().map(|d| (d.delay, d.in_degree_classes)),
                colour,
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    println!("\nResults saved to:");
    println!("- periodicity_scan.png");

    Ok(())
}
