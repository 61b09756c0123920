#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(warnings)]

use chainmap::ChainedHashMap;
use plotters::prelude::*;
use rand::distr::Alphanumeric;
use rand::Rng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// Entries pushed through the real map for the growth study
const GROWTH_ENTRIES: usize = 50_000;
// Fixed bucket count for the simulated chain-length study
const SIM_BUCKETS: usize = 4_096;
// Create load factors from 0.1 to 0.95 with 10 steps
const NUM_LOAD_FACTORS: usize = 10;
// Length of each random alphanumeric key
const KEY_LENGTH: usize = 12;
// Sampling stride when plotting the 50k-point growth curve
const PLOT_STRIDE: usize = 25;

// Hash functions to compare in the chain-length study
const HASHERS: [&str; 2] = ["Polynomial 31", "SipHash (std)"];

// Digest matching the one the map uses, kept local so the study can be
// rerun against alternative multipliers without touching the library
fn polynomial_digest(key: &str) -> u64 {
    key.chars().fold(0_u64, |acc, ch| acc.wrapping_mul(31).wrapping_add(u64::from(u32::from(ch))))
}

// Reference digest from the standard library's default hasher
fn siphash_digest(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

fn random_key(rng: &mut impl Rng) -> String {
    (0..KEY_LENGTH).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();

    // Study 1: drive a real map and record the capacity-doubling staircase
    let keys: Vec<String> = (0..GROWTH_ENTRIES).map(|_| random_key(&mut rng)).collect();

    let mut map: ChainedHashMap<usize> = ChainedHashMap::new();
    let mut growth_curve: Vec<(usize, usize, f64)> = Vec::with_capacity(GROWTH_ENTRIES);
    let mut doublings: Vec<(usize, usize, usize)> = Vec::new();

    for (value, key) in keys.iter().enumerate() {
        let before = map.capacity();
        map.insert(key.clone(), value);
        if map.capacity() != before {
            doublings.push((map.len(), before, map.capacity()));
        }
        growth_curve.push((map.len(), map.capacity(), map.load_factor()));
    }

    println!("Inserted {} random keys ({} distinct)", GROWTH_ENTRIES, map.len());
    for &(entries, from, to) in &doublings {
        println!(
            "  capacity {} -> {} at {} entries (load factor reset to {:.3})",
            from,
            to,
            entries,
            entries as f64 / to as f64
        );
    }
    println!("Final capacity {} with load factor {:.3}", map.capacity(), map.load_factor());

    // Study 2: simulate chain-length distributions over a load-factor sweep
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (SIM_BUCKETS as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    let mut average_chain: Vec<Vec<f64>> = vec![Vec::new(); HASHERS.len()];
    let mut longest_chain: Vec<Vec<usize>> = vec![Vec::new(); HASHERS.len()];

    // Generate keys once so both hash functions see the same input
    let max_keys_needed = *num_keys.iter().max().unwrap_or(&0);
    let sim_keys: Vec<String> = (0..max_keys_needed).map(|_| random_key(&mut rng)).collect();

    for &n_keys in &num_keys {
        println!("Distributing {} keys over {} buckets", n_keys, SIM_BUCKETS);

        for (hasher_idx, &hasher_name) in HASHERS.iter().enumerate() {
            let mut chains = vec![0_usize; SIM_BUCKETS];

            for key in sim_keys.iter().take(n_keys) {
                let digest = match hasher_name {
                    "Polynomial 31" => polynomial_digest(key),
                    _ => siphash_digest(key),
                };
                chains[(digest as usize) % SIM_BUCKETS] += 1;
            }

            let occupied = chains.iter().filter(|&&chain| chain > 0).count();
            let longest = *chains.iter().max().unwrap_or(&0);
            let average =
                if occupied == 0 { 0.0 } else { n_keys as f64 / occupied as f64 };
            let empty = (SIM_BUCKETS - occupied) as f64 / SIM_BUCKETS as f64;

            average_chain[hasher_idx].push(average);
            longest_chain[hasher_idx].push(longest);

            println!(
                "  {}: avg chain = {:.2}, longest = {}, empty buckets = {:.1}%",
                hasher_name,
                average,
                longest,
                empty * 100.0
            );
        }
    }

    // Plot configuration shared by both images
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Plot 1: capacity staircase and load factor from the real map
    let root = BitMapBackend::new("capacity_growth.png", (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    let max_capacity =
        growth_curve.iter().map(|&(_, capacity, _)| capacity).max().unwrap_or(1) as f64 * 1.1;

    let mut capacity_chart = ChartBuilder::on(&areas[0])
        .caption("Bucket Array Growth", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..GROWTH_ENTRIES, 0.0..max_capacity)?;

    capacity_chart
        .configure_mesh()
        .x_desc("Entries Inserted")
        .y_desc("Capacity (buckets)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let capacity_style = ShapeStyle::from(&colors[1]).stroke_width(line_width);
    capacity_chart
        .draw_series(LineSeries::new(
            growth_curve
                .iter()
                .step_by(PLOT_STRIDE)
                .map(|&(entries, capacity, _)| (entries, capacity as f64)),
            capacity_style,
        ))?
        .label("Capacity")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], capacity_style));

    capacity_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    let mut load_chart = ChartBuilder::on(&areas[1])
        .caption("Load Factor Between Doublings", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..GROWTH_ENTRIES, 0.0..1.0_f64)?;

    load_chart
        .configure_mesh()
        .x_desc("Entries Inserted")
        .y_desc("Load Factor")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    // Horizontal reference at the growth threshold
    let threshold_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    load_chart
        .draw_series(LineSeries::new(
            vec![(0, 0.75), (GROWTH_ENTRIES, 0.75)],
            threshold_style,
        ))?
        .label("0.75 growth threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    let load_style = ShapeStyle::from(&colors[0]).stroke_width(line_width);
    load_chart
        .draw_series(LineSeries::new(
            growth_curve.iter().step_by(PLOT_STRIDE).map(|&(entries, _, load)| (entries, load)),
            load_style,
        ))?
        .label("Load factor")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], load_style));

    load_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    // Plot 2: chain lengths per hash function across the load-factor sweep
    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_chain = longest_chain
        .iter()
        .flat_map(|lengths| lengths.iter())
        .fold(0, |max, &length| if length > max { length } else { max })
        as f64 *
        1.1;

    let mut chain_chart = ChartBuilder::on(&root)
        .caption("Chain Lengths by Hash Function", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0_f64, 0.0..max_chain)?;

    chain_chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Chain Length (entries)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (hasher_idx, &hasher_name) in HASHERS.iter().enumerate() {
        let color = &colors[hasher_idx % colors.len()];
        let average_style = ShapeStyle::from(color).stroke_width(line_width);

        chain_chart
            .draw_series(LineSeries::new(
                load_factors
                    .iter()
                    .enumerate()
                    .map(|(i, &load)| (load, average_chain[hasher_idx][i])),
                average_style,
            ))?
            .label(format!("{} (average)", hasher_name))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], average_style));

        chain_chart.draw_series(load_factors.iter().enumerate().map(|(i, &load)| {
            Circle::new((load, average_chain[hasher_idx][i]), marker_size, color.filled())
        }))?;

        let worst_color = &colors[(hasher_idx + 2) % colors.len()];
        let worst_style = ShapeStyle::from(worst_color).stroke_width(line_width);

        chain_chart
            .draw_series(LineSeries::new(
                load_factors
                    .iter()
                    .enumerate()
                    .map(|(i, &load)| (load, longest_chain[hasher_idx][i] as f64)),
                worst_style,
            ))?
            .label(format!("{} (longest)", hasher_name))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], worst_style));

        chain_chart.draw_series(load_factors.iter().enumerate().map(|(i, &load)| {
            Circle::new(
                (load, longest_chain[hasher_idx][i] as f64),
                marker_size,
                worst_color.filled(),
            )
        }))?;
    }

    chain_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot images: capacity_growth.png, chain_lengths.png");

    Ok(())
}
