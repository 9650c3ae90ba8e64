use std::fmt;

// ---------------------------------------------------------------------------
// SampleSet – the numeric values collected during one run
// ---------------------------------------------------------------------------

/// An ordered sequence of accepted numeric samples.
///
/// Both averagers feed their parsed values into a `SampleSet` and read the
/// mean back out; the empty set has a mean of `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no samples were collected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples in insertion order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum of all samples, accumulated in insertion order.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Arithmetic mean, or `0.0` when the set is empty.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.sum() / self.values.len() as f64
    }
}

impl FromIterator<f64> for SampleSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        SampleSet {
            values: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Mean – printable aggregate value
// ---------------------------------------------------------------------------

/// A mean together with the number of samples behind it, printed the way
/// the reports expect.
///
/// With no samples the fallback prints as a bare `0`. Otherwise the value
/// uses the shortest round-trip form with a fractional part (`2.0`), and
/// exponents carry a sign and at least two digits (`1e+16`, `1.5e-05`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mean {
    pub value: f64,
    pub count: usize,
}

impl Mean {
    pub fn new(value: f64, count: usize) -> Self {
        Self { value, count }
    }

    pub fn of(samples: &SampleSet) -> Self {
        Self::new(samples.mean(), samples.len())
    }
}

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return f.write_str("0");
        }
        if self.value.is_nan() {
            return f.write_str("nan");
        }

        let repr = format!("{:?}", self.value);
        match repr.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&repr),
        }
    }
}
