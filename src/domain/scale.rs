// Value-to-pixel scale functions
use chrono::{DateTime, Utc};

/// Target tick count for both axes
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Candidate time-axis tick intervals, in seconds
const TIME_TICK_INTERVALS: [i64; 9] = [1, 5, 15, 30, 60, 300, 900, 1800, 3600];

/// Linear mapping from a value domain onto a pixel range
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain, stepped by the 1-2-5 rule
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let step = tick_increment(d0, d1, count);
        if step <= 0.0 {
            return Vec::new();
        }
        let first = (d0 / step).ceil() as i64;
        let last = (d1 / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Tick step of the form 1/2/5 x 10^k closest to span/count
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Time-proportional mapping over the shared reference date
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    domain: (DateTime<Utc>, DateTime<Utc>),
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        let inner = LinearScale::new(
            (
                domain.0.timestamp_millis() as f64,
                domain.1.timestamp_millis() as f64,
            ),
            range,
        );
        Self { domain, inner }
    }

    pub fn scale(&self, value: DateTime<Utc>) -> f64 {
        self.inner.scale(value.timestamp_millis() as f64)
    }

    /// Interval-aligned tick instants covering the domain
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (d0, d1) = (self.domain.0.timestamp(), self.domain.1.timestamp());
        let interval = time_tick_interval(d1 - d0, count);
        let first = d0.div_euclid(interval) + i64::from(d0.rem_euclid(interval) != 0);
        let last = d1.div_euclid(interval);
        (first..=last)
            .filter_map(|i| DateTime::from_timestamp(i * interval, 0))
            .collect()
    }
}

/// Pick the candidate interval whose ratio to span/count is smallest
fn time_tick_interval(span_secs: i64, count: usize) -> i64 {
    let target = span_secs as f64 / count.max(1) as f64;
    for window in TIME_TICK_INTERVALS.windows(2) {
        let (lower, upper) = (window[0], window[1]);
        if target <= lower as f64 {
            return lower;
        }
        if target <= upper as f64 {
            return if target / (lower as f64) < upper as f64 / target {
                lower
            } else {
                upper
            };
        }
    }
    TIME_TICK_INTERVALS[TIME_TICK_INTERVALS.len() - 1]
}

/// Two-entry categorical color mapping keyed on the doping flag
#[derive(Debug, Clone, Copy)]
pub struct CategoryColorScale {
    unflagged: &'static str,
    flagged: &'static str,
}

impl CategoryColorScale {
    pub fn new(unflagged: &'static str, flagged: &'static str) -> Self {
        Self { unflagged, flagged }
    }

    pub fn color(&self, flagged: bool) -> &'static str {
        if flagged {
            self.flagged
        } else {
            self.unflagged
        }
    }

    pub fn domain(&self) -> [bool; 2] {
        [false, true]
    }
}
