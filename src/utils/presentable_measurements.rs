//! Auto-scaling presentation of the measurements shown in simulation reports

use std::fmt::{Display, Formatter};


/// How many decimals -- or whether to use the scientific notation -- a scale is shown with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precision {
    Integer,
    Milli,
    Scientific,
}

/// A measurement shown in the first of its `scales` whose threshold it reaches
pub struct PresentableMeasurement<const N: usize> {
    pub value: f64,
    /// := (threshold, divisor, unit, precision)
    scales: [(f64, f64, &'static str, Precision); N],
}

impl<const N: usize> Display for PresentableMeasurement<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some(&(_, divisor, unit, precision)) = self.scales.iter().find(|(threshold, ..)| self.value >= *threshold) else {
            // negative or NaN values fall below every threshold
            return write!(f, "{:.2}", self.value);
        };
        let scaled = self.value / divisor;
        match precision {
            Precision::Integer    => write!(f, "{:.0}{}", scaled, unit),
            Precision::Milli      => write!(f, "{:.3}{}", scaled, unit),
            Precision::Scientific => write!(f, "{:.3e}{}", scaled, unit),
        }
    }
}

/// Presents "an elapsed time, in seconds", from seconds down to nanoseconds
pub fn duration_measurement(seconds: f64) -> PresentableMeasurement<4> {
    PresentableMeasurement {
        value: seconds,
        scales: [
            (1.0,  1.0,  "s",  Precision::Milli),
            (1e-3, 1e-3, "ms", Precision::Milli),
            (1e-6, 1e-6, "µs", Precision::Milli),
            (0.0,  1e-9, "ns", Precision::Integer),
        ],
    }
}

/// Presents "a number of simulated operations" -- switching to the scientific notation for the big ones
pub fn operations_measurement(operations: f64) -> PresentableMeasurement<2> {
    PresentableMeasurement {
        value: operations,
        scales: [
            (100_000.0, 1.0, "ops", Precision::Scientific),
            (0.0,       1.0, "ops", Precision::Integer),
        ],
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_measurement() {
        let expected_representations = [
            (       2.0, "2.000s"    ),
            (       0.5, "500.000ms" ),
            ( 0.0000025, "2.500µs"   ),
            (   4.2e-08, "42ns"      ),
            (       0.0, "0ns"       ),
        ];
        for (value, expected_representation) in expected_representations {
            let observed_representation = duration_measurement(value).to_string();
            assert_eq!(&observed_representation, expected_representation, "Measurement representation doesn't match");
        }
    }

    #[test]
    fn test_operations_measurement() {
        let expected_representations = [
            (      0.0, "0ops"      ),
            (     10.0, "10ops"     ),
            (   9966.0, "9966ops"   ),
            ( 250000.0, "2.500e5ops"),
        ];
        for (value, expected_representation) in expected_representations {
            let observed_representation = operations_measurement(value).to_string();
            assert_eq!(&observed_representation, expected_representation, "Measurement representation doesn't match");
        }
    }
}
