//! Load chart: a randomized four-category dataset and the polar-area geometry that displays it.

use std::ops::Range;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCategory {
    pub label: &'static str,
    pub range: Range<u32>,
    pub color: Rgb,
}

pub const DATASET_LABEL: &str = "System Load";
pub const FILL_ALPHA: f32 = 0.5;
pub const BORDER_ALPHA: f32 = 1.0;

pub fn load_categories() -> [LoadCategory; 4] {
    [
        LoadCategory {
            label: "CPU Load",
            range: 10..40,
            color: Rgb(255, 99, 132),
        },
        LoadCategory {
            label: "Memory",
            range: 20..60,
            color: Rgb(54, 162, 235),
        },
        LoadCategory {
            label: "Disk I/O",
            range: 5..25,
            color: Rgb(255, 206, 86),
        },
        LoadCategory {
            label: "Network",
            range: 10..60,
            color: Rgb(75, 192, 192),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadDataset {
    pub values: [u32; 4],
}

impl LoadDataset {
    /// Draw each category independently from its own range.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let categories = load_categories();
        let values = std::array::from_fn(|i| rng.gen_range(categories[i].range.clone()));
        Self { values }
    }

    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// One polar-area slice, ready to be written into an SVG `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: &'static str,
    pub value: u32,
    pub radius: f64,
    pub path: String,
    pub fill: String,
    pub stroke: String,
}

pub const VIEWBOX: f64 = 200.0;
const OUTER_RADIUS: f64 = 90.0;

/// Equal-angle slices clockwise from 12 o'clock, radius scaled to the largest value.
pub fn polar_wedges(dataset: &LoadDataset) -> Vec<Wedge> {
    let center = VIEWBOX / 2.0;
    let scale = dataset.max().max(1) as f64;
    let sweep = std::f64::consts::TAU / dataset.values.len() as f64;

    load_categories()
        .into_iter()
        .zip(dataset.values)
        .enumerate()
        .map(|(i, (category, value))| {
            let radius = OUTER_RADIUS * value as f64 / scale;
            let start = -std::f64::consts::FRAC_PI_2 + sweep * i as f64;
            let end = start + sweep;
            let (x0, y0) = (center + radius * start.cos(), center + radius * start.sin());
            let (x1, y1) = (center + radius * end.cos(), center + radius * end.sin());
            let path = format!(
                "M {center:.2} {center:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 0 1 {x1:.2} {y1:.2} Z"
            );

            Wedge {
                label: category.label,
                value,
                radius,
                path,
                fill: category.color.rgba(FILL_ALPHA),
                stroke: category.color.rgba(BORDER_ALPHA),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnChart {
    pub generation: u64,
    pub dataset: LoadDataset,
    pub wedges: Vec<Wedge>,
}

/// Owned handle to the single chart on the report. Drawing always tears the
/// previous chart down first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartHandle {
    current: Option<DrawnChart>,
    generation: u64,
}

impl ChartHandle {
    pub fn draw(&mut self, dataset: LoadDataset) -> &DrawnChart {
        self.teardown();
        self.generation += 1;
        tracing::debug!(generation = self.generation, values = ?dataset.values, "chart drawn");
        self.current.insert(DrawnChart {
            generation: self.generation,
            wedges: polar_wedges(&dataset),
            dataset,
        })
    }

    pub fn teardown(&mut self) -> Option<DrawnChart> {
        let previous = self.current.take();
        if let Some(chart) = &previous {
            tracing::debug!(generation = chart.generation, "chart torn down");
        }
        previous
    }

    pub fn current(&self) -> Option<&DrawnChart> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn samples_stay_within_their_category_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let categories = load_categories();
        for _ in 0..500 {
            let dataset = LoadDataset::sample(&mut rng);
            assert_eq!(dataset.values.len(), 4);
            for (value, category) in dataset.values.iter().zip(&categories) {
                assert!(
                    category.range.contains(value),
                    "{} = {value} outside {:?}",
                    category.label,
                    category.range
                );
            }
        }
    }

    #[test]
    fn largest_value_fills_the_outer_radius() {
        let wedges = polar_wedges(&LoadDataset {
            values: [20, 40, 10, 30],
        });
        assert_eq!(wedges.len(), 4);
        assert_eq!(wedges[1].radius, OUTER_RADIUS);
        assert_eq!(wedges[2].radius, OUTER_RADIUS / 4.0);
        assert_eq!(wedges[0].label, "CPU Load");
        assert_eq!(wedges[3].fill, "rgba(75, 192, 192, 0.5)");
        assert!(wedges[0].path.starts_with("M 100.00 100.00 L 100.00 55.00"));
    }

    #[test]
    fn redraw_tears_down_the_previous_chart() {
        let mut handle = ChartHandle::default();
        assert!(handle.current().is_none());

        handle.draw(LoadDataset {
            values: [10, 20, 5, 10],
        });
        let second = handle
            .draw(LoadDataset {
                values: [39, 59, 24, 59],
            })
            .clone();

        assert_eq!(second.generation, 2);
        assert_eq!(handle.current(), Some(&second));

        let removed = handle.teardown().expect("chart was drawn");
        assert_eq!(removed.dataset.values, [39, 59, 24, 59]);
        assert!(handle.current().is_none());
    }
}
