use std::error::Error;

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

/// `name,value` rows: monthly totals with noise. Drives bar, line and pie.
fn write_categories(path: &str, rng: &mut SimpleRng) -> Result<usize, Box<dyn Error>> {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["name", "value"])?;
    for (i, month) in months.iter().enumerate() {
        let seasonal = 400.0 + 150.0 * (i as f64 / 12.0 * std::f64::consts::TAU).sin();
        let value = (seasonal + rng.gauss(0.0, 40.0)).max(0.0).round();
        writer.write_record([month.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(months.len())
}

/// `x,y` rows: a noisy linear trend. Drives scatter.
fn write_points(path: &str, n: usize, rng: &mut SimpleRng) -> Result<usize, Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["x", "y"])?;
    for _ in 0..n {
        let x = rng.next_f64() * 100.0;
        let y = 0.8 * x + 5.0 + rng.gauss(0.0, 8.0);
        writer.write_record([format!("{x:.3}"), format!("{y:.3}")])?;
    }
    writer.flush()?;
    Ok(n)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = SimpleRng::new(42);

    let categories_path = "sample_categories.csv";
    let rows = write_categories(categories_path, &mut rng)?;
    println!("Wrote {rows} name/value rows to {categories_path}");

    let points_path = "sample_points.csv";
    let rows = write_points(points_path, 200, &mut rng)?;
    println!("Wrote {rows} x/y rows to {points_path}");

    Ok(())
}
