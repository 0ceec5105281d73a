use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-class field means for an iris-like sample file.
struct ClassProfile {
    name: &'static str,
    means: [f64; 4],
}

const PROFILES: [ClassProfile; 3] = [
    ClassProfile {
        name: "setosa",
        means: [5.0, 3.4, 1.5, 0.2],
    },
    ClassProfile {
        name: "versicolor",
        means: [5.9, 2.8, 4.3, 1.3],
    },
    ClassProfile {
        name: "virginica",
        means: [6.6, 3.0, 5.6, 2.0],
    },
];

const ROWS_PER_CLASS: usize = 50;

/// Box-Muller transform for normally distributed noise.
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(1e-15);
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "sepal_length",
            "sepal_width",
            "petal_length",
            "petal_width",
            "species",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for profile in &PROFILES {
        for _ in 0..ROWS_PER_CLASS {
            let mut record: Vec<String> = profile
                .means
                .iter()
                .map(|&mean| format!("{:.1}", gauss(&mut rng, mean, 0.3).max(0.1)))
                .collect();
            record.push(profile.name.to_string());

            writer.write_record(&record).expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} records to {output_path}");
}
