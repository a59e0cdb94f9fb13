use std::collections::HashSet;

/// Continuous domain mapped linearly onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// A collapsed domain maps everything to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Roughly `count` round values (1, 2 or 5 times a power of ten) inside
    /// the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        if start.is_nan() || stop.is_nan() || start >= stop || count == 0 {
            return vec![start];
        }
        let step = self.tick_step(count);
        // Divide by the inverse step so 0.1 * 3 comes out as 0.3.
        let inverse = (step < 1.0).then(|| (1.0 / step).round());
        let (first, last) = match inverse {
            Some(inverse) => ((start * inverse).ceil(), (stop * inverse).floor()),
            None => ((start / step).ceil(), (stop / step).floor()),
        };
        // Subnormal steps overflow the inverse; fall back to the bare domain.
        if !first.is_finite() || !last.is_finite() || last - first > (count * 10) as f64 {
            return vec![start, stop];
        }
        (first as i64..=last as i64)
            .map(|i| match inverse {
                Some(inverse) => i as f64 / inverse,
                None => i as f64 * step,
            })
            .collect()
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        let (start, stop) = self.domain;
        let raw = (stop - start).abs() / count.max(1) as f64;
        if raw == 0.0 || !raw.is_finite() {
            return 1.0;
        }
        let power = 10f64.powf(raw.log10().floor());
        let error = raw / power;
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        power * factor
    }
}

/// Ordinal domain laid out as evenly spaced bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is the fraction of a step left empty between bands and at
    /// both ends; bands are centred in the range.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|candidate| candidate == key)
            .map(|index| self.start + self.step * index as f64)
    }
}

/// Maps a value onto the Blues colour ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    domain: (f64, f64),
}

const BLUES: [(u8, u8, u8); 9] = [
    (0xf7, 0xfb, 0xff),
    (0xde, 0xeb, 0xf7),
    (0xc6, 0xdb, 0xef),
    (0x9e, 0xca, 0xe1),
    (0x6b, 0xae, 0xd6),
    (0x42, 0x92, 0xc6),
    (0x21, 0x71, 0xb5),
    (0x08, 0x51, 0x9c),
    (0x08, 0x30, 0x6b),
];

impl SequentialScale {
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Position on the ramp in `[0, 1]`. A collapsed domain sits in the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return 0.5;
        }
        ((value - d0) / (d1 - d0)).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> String {
        let t = self.normalize(value);
        let scaled = t * (BLUES.len() - 1) as f64;
        let index = (scaled.floor() as usize).min(BLUES.len() - 2);
        let local = scaled - index as f64;
        let (a, b) = (BLUES[index], BLUES[index + 1]);
        let mix = |from: u8, to: u8| -> u8 {
            (from as f64 + (to as f64 - from as f64) * local).round() as u8
        };
        format!("#{:02x}{:02x}{:02x}", mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }
}

/// Distinct values in first-seen order.
pub fn unique<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Smallest span that covers every value and zero.
pub fn extent_with_zero(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold((0.0, 0.0), |(lo, hi), value| (lo.min(value), hi.max(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_domain_to_range() {
        let y = LinearScale::new((0.0, 200.0), (600.0, 0.0));
        assert_eq!(y.scale(0.0), 600.0);
        assert_eq!(y.scale(200.0), 0.0);
        assert_eq!(y.scale(50.0), 450.0);
    }

    #[test]
    fn linear_collapsed_domain_uses_midpoint() {
        let x = LinearScale::new((0.0, 0.0), (0.0, 800.0));
        assert_eq!(x.scale(0.0), 400.0);
        assert_eq!(x.ticks(10), vec![0.0]);
    }

    #[test]
    fn subnormal_domain_falls_back_to_endpoints() {
        let x = LinearScale::new((0.0, 1e-310), (0.0, 800.0));
        assert_eq!(x.ticks(10), vec![0.0, 1e-310]);
        assert_eq!(x.scale(1e-310), 800.0);
    }

    #[test]
    fn ticks_are_round_numbers() {
        let scale = LinearScale::new((0.0, 1000.0), (0.0, 1.0));
        assert_eq!(scale.tick_step(10), 100.0);
        assert_eq!(scale.ticks(10).len(), 11);

        let scale = LinearScale::new((0.0, 737_000.0), (0.0, 1.0));
        assert_eq!(scale.tick_step(10), 100_000.0);
        assert_eq!(scale.ticks(10).last(), Some(&700_000.0));

        let scale = LinearScale::new((-20.0, 130.0), (0.0, 1.0));
        assert_eq!(scale.tick_step(10), 20.0);
        assert_eq!(scale.ticks(10)[0], -20.0);
    }

    #[test]
    fn fractional_ticks_avoid_float_noise() {
        let scale = LinearScale::new((0.0, 0.75), (0.0, 1.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(ticks.last(), Some(&0.7));
    }

    #[test]
    fn band_layout_matches_padding() {
        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
        let x = BandScale::new(keys, (0.0, 800.0), 0.2);
        // step = 800 / (4 - 0.2 + 0.4)
        let step = 800.0 / 4.2;
        assert!((x.step() - step).abs() < 1e-9);
        assert!((x.bandwidth() - step * 0.8).abs() < 1e-9);
        assert!((x.position("a").unwrap() - step * 0.2).abs() < 1e-9);
        assert!(x.position("zzz").is_none());
        let last_end = x.position("d").unwrap() + x.bandwidth();
        assert!((800.0 - last_end - step * 0.2).abs() < 1e-9);
    }

    #[test]
    fn band_without_padding_fills_range() {
        let keys = vec!["a".to_string(), "b".to_string()];
        let x = BandScale::new(keys, (0.0, 100.0), 0.0);
        assert_eq!(x.position("a"), Some(0.0));
        assert_eq!(x.position("b"), Some(50.0));
        assert_eq!(x.bandwidth(), 50.0);
    }

    #[test]
    fn sequential_ramp_endpoints() {
        let color = SequentialScale::new((0.0, 100.0));
        assert_eq!(color.color(0.0), "#f7fbff");
        assert_eq!(color.color(100.0), "#08306b");
        assert_eq!(color.color(250.0), "#08306b");
        assert_eq!(color.color(-5.0), "#f7fbff");
        assert_eq!(color.color(50.0), "#6baed6");
        assert_eq!(SequentialScale::new((0.0, 0.0)).normalize(0.0), 0.5);
    }

    #[test]
    fn unique_keeps_first_seen_order() {
        let values = ["b", "a", "b", "c", "a"];
        assert_eq!(unique(values), vec!["b", "a", "c"]);
    }

    #[test]
    fn extent_includes_zero() {
        assert_eq!(extent_with_zero([3.0, 9.0]), (0.0, 9.0));
        assert_eq!(extent_with_zero([-4.0, 2.0]), (-4.0, 2.0));
        assert_eq!(extent_with_zero(Vec::<f64>::new()), (0.0, 0.0));
    }
}
