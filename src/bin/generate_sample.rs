//! Generate a synthetic world-statistics CSV for trying out the dashboard.
//!
//! The output mimics the real file's layout: nine columns, dollar amounts in
//! the GDP column, and a density header containing a literal newline.  A few
//! rows get deliberately blanked cells so the missing-value drop has
//! something to do.

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

    /// Uniform value in [lo, hi).
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Bangladesh", "Belgium", "Brazil",
    "Canada", "Chile", "China", "Colombia", "Denmark", "Egypt", "Ethiopia",
    "Finland", "France", "Germany", "Ghana", "Greece", "India", "Indonesia",
    "Ireland", "Italy", "Japan", "Kenya", "Malaysia", "Mexico", "Morocco",
    "Netherlands", "New Zealand", "Nigeria", "Norway", "Pakistan", "Peru",
    "Philippines", "Poland", "Portugal", "Russia", "South Africa",
    "South Korea", "Spain", "Sweden", "Switzerland", "Thailand", "Turkey",
    "Ukraine", "United Kingdom", "United States", "Vietnam",
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "world_data_sample.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Country",
            "Population",
            "GDP ($)",
            "Land Area (Km2)",
            "Co2-Emissions (tons)",
            "Forested Area (%)",
            "Birth Rate (per 1000)",
            "Life expectancy",
            "Density\n(P/Km2)",
        ])
        .expect("Failed to write header");

    for (i, country) in COUNTRIES.iter().enumerate() {
        let population = rng.uniform(4e5, 1.4e9).round();
        let land_area = rng.uniform(3e4, 9.5e6).round();
        let gdp_per_capita = rng.uniform(800.0, 90_000.0);
        let gdp = (population * gdp_per_capita).round();

        // Richer countries skew toward lower birth rates and longer lives.
        let wealth = (gdp_per_capita / 90_000.0).sqrt();
        let birth_rate = 45.0 - 35.0 * wealth + rng.uniform(-3.0, 3.0);
        let life_expectancy = 52.0 + 32.0 * wealth + rng.uniform(-2.0, 2.0);

        let co2 = population * rng.uniform(0.5, 18.0);
        let forested = rng.uniform(1.0, 70.0);
        let density = population / land_area;

        // Every seventh row loses a cell; the loader must drop these.
        let (population_s, forested_s) = match i % 7 {
            3 => (String::new(), format!("{forested:.1}")),
            6 => (format!("{population}"), String::new()),
            _ => (format!("{population}"), format!("{forested:.1}")),
        };

        writer
            .write_record([
                country.to_string(),
                population_s,
                format!("${gdp}"),
                format!("{land_area}"),
                format!("{co2:.0}"),
                forested_s,
                format!("{birth_rate:.2}"),
                format!("{life_expectancy:.1}"),
                format!("{density:.1}"),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {} countries to {output_path}", COUNTRIES.len());
}
