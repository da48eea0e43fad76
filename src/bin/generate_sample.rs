use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_spectrum(
    wavelengths: &[f64],
    bands: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    wavelengths
        .iter()
        .map(|&wl| {
            let signal: f64 = bands
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(wl, mu, sigma, amp))
                .sum();
            signal + rng.gauss(0.0, noise_level)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Seven rows of instrument metadata, as the GENESYS 30 writes them.
fn preamble(sample: &str, start: f64, end: f64) -> Vec<Vec<String>> {
    vec![
        vec!["Thermo Scientific GENESYS 30".into()],
        vec!["Scan".into()],
        vec!["Sample".into(), sample.into()],
        vec!["Start (nm)".into(), start.to_string()],
        vec!["End (nm)".into(), end.to_string()],
        vec!["Interval (nm)".into(), "1".into()],
        vec!["Wavelength (nm)".into(), "Absorbance".into()],
    ]
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("GENESYS30Data"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    // Visible range: 340 → 900 nm, step 1
    let wavelengths: Vec<f64> = (340..=900).map(f64::from).collect();
    let start = wavelengths[0];
    let end = wavelengths[wavelengths.len() - 1];

    // Indicator-like absorbance bands (centre nm, width nm, height)
    let samples: [(&str, Vec<(f64, f64, f64)>); 4] = [
        ("pH 4 Trial 1", vec![(430.0, 35.0, 0.9), (600.0, 40.0, 0.1)]),
        ("pH 7 Trial 1", vec![(430.0, 35.0, 0.4), (560.0, 45.0, 0.6)]),
        ("pH 10 Trial 1", vec![(610.0, 40.0, 1.1), (430.0, 30.0, 0.1)]),
        ("Blank", vec![(360.0, 20.0, 0.05)]),
    ];

    for (i, (sample, bands)) in samples.iter().enumerate() {
        let absorbance = generate_spectrum(&wavelengths, bands, 0.004, &mut rng);

        let path = out_dir.join(format!("scan_{:02}.csv", i + 1));
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;

        for row in preamble(sample, start, end) {
            writer.write_record(&row)?;
        }
        for (wl, abs) in wavelengths.iter().zip(&absorbance) {
            writer.write_record([wl.to_string(), format!("{abs:.4}")])?;
        }
        writer.flush()?;

        println!("Wrote {} ({sample}, {} readings)", path.display(), wavelengths.len());
    }

    Ok(())
}
