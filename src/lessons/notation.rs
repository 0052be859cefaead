//! The asymptotic notations -- upper (`O`), lower (`Ω`) & tight (`Θ`) bounds -- of the toy algorithms.

use std::fmt::{Display, Formatter};
use crate::runners::simulator::Algorithm;


/// The three bounds of an algorithm's running time, each given as the function inside the notation's parenthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    /// worst case
    pub big_o: &'static str,
    /// best case
    pub omega: &'static str,
    /// when both bounds meet
    pub theta: &'static str,
}

impl Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "O({}), Ω({}), Θ({})", self.big_o, self.omega, self.theta)
    }
}

impl Algorithm {

    pub fn notation(&self) -> Notation {
        let (big_o, omega, theta) = match self {
            Self::Linear => ("n",       "1",       "n"),
            Self::Binary => ("log n",   "1",       "log n"),
            Self::Bubble => ("n²",      "n",       "n²"),
            Self::Merge  => ("n log n", "n log n", "n log n"),
        };
        Notation { big_o, omega, theta }
    }
}


/// Algorithms illustrating what a lower bound (`Ω`) tells
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LowerBoundExample {
    LinearSearch,
    BinarySearch,
    MergeSort,
}

impl LowerBoundExample {

    pub const ALL: [LowerBoundExample; 3] = [Self::LinearSearch, Self::BinarySearch, Self::MergeSort];

    pub fn name(&self) -> &'static str {
        match self {
            Self::LinearSearch => "Linear Search",
            Self::BinarySearch => "Binary Search",
            Self::MergeSort    => "Merge Sort",
        }
    }

    /// the simulated counterpart
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::LinearSearch => Algorithm::Linear,
            Self::BinarySearch => Algorithm::Binary,
            Self::MergeSort    => Algorithm::Merge,
        }
    }

    /// explains when the lower bound is reached
    pub fn note(&self) -> String {
        let omega = self.algorithm().notation().omega;
        match self {
            Self::LinearSearch => format!("Ω({omega}): best case, when the element sits at the beginning."),
            Self::BinarySearch => format!("Ω({omega}): best case, when the middle element is the target."),
            Self::MergeSort    => format!("Ω({omega}): even the best case pays for all the splitting & merging."),
        }
    }
}
