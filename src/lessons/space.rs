//! Auxiliary space used by classic algorithms, along with the code they are shown with.

use crate::{
    errors::{EngineError, EngineResult},
    growth::types::ComplexityClass,
};


/// Algorithms contrasted by the extra memory they need
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpaceExample {
    /// two running variables
    IterativeFibonacci,
    /// one stack frame per level of the recursion
    RecursiveFibonacci,
    /// the merge buffer
    MergeSort,
    /// sorts in place
    BubbleSort,
}

/// The extra space an algorithm needs for a given input size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceProfile {
    pub example:           SpaceExample,
    pub input_size:        u64,
    pub extra_space_units: u64,
    /// the growth of the extra space, intrinsic to the example -- see [SpaceExample::space_class()]
    pub class:             ComplexityClass,
}

impl SpaceExample {

    pub const ALL: [SpaceExample; 4] = [Self::IterativeFibonacci, Self::RecursiveFibonacci, Self::MergeSort, Self::BubbleSort];

    pub fn name(&self) -> &'static str {
        match self {
            Self::IterativeFibonacci => "Iterative Fibonacci",
            Self::RecursiveFibonacci => "Recursive Fibonacci",
            Self::MergeSort          => "Merge Sort",
            Self::BubbleSort         => "Bubble Sort",
        }
    }

    /// how the extra space grows with the input size, whatever the size
    pub fn space_class(&self) -> ComplexityClass {
        match self {
            Self::IterativeFibonacci | Self::BubbleSort => ComplexityClass::Constant,
            Self::RecursiveFibonacci | Self::MergeSort  => ComplexityClass::Linear,
        }
    }

    /// the extra space, in units, needed to process `input_size` elements.\
    /// Sizes below 1 are rejected with [EngineError::InvalidInputSize].
    pub fn profile(&self, input_size: i64) -> EngineResult<SpaceProfile> {
        if input_size < 1 {
            return Err(EngineError::InvalidInputSize { input_size, max: i64::MAX });
        }
        let n = input_size as u64;
        let extra_space_units = match self {
            Self::IterativeFibonacci | Self::BubbleSort => 1,
            Self::RecursiveFibonacci | Self::MergeSort  => n,
        };
        Ok(SpaceProfile { example: *self, input_size: n, extra_space_units, class: self.space_class() })
    }

    /// a Python rendition, as shown beside the space analysis -- and accepted by [crate::estimate()]
    pub fn code(&self) -> &'static str {
        match self {
            Self::IterativeFibonacci => "\
def fibonacci(n):
    a, b = 0, 1
    for _ in range(n):
        a, b = b, a + b
    return a",
            Self::RecursiveFibonacci => "\
def fibonacci(n):
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)",
            Self::MergeSort => "\
def merge_sort(arr):
    if len(arr) <= 1:
        return arr
    mid = len(arr) // 2
    left = merge_sort(arr[:mid])
    right = merge_sort(arr[mid:])
    return merge(left, right)

def merge(left, right):
    result = []
    i = j = 0
    while i < len(left) and j < len(right):
        if left[i] <= right[j]:
            result.append(left[i])
            i += 1
        else:
            result.append(right[j])
            j += 1
    result.extend(left[i:])
    result.extend(right[j:])
    return result",
            Self::BubbleSort => "\
def bubble_sort(arr):
    n = len(arr)
    for i in range(n):
        for j in range(0, n - i - 1):
            if arr[j] > arr[j + 1]:
                arr[j], arr[j + 1] = arr[j + 1], arr[j]
    return arr",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::estimator::estimate;

    #[test]
    fn profiles_for_a_hundred_elements() {
        let units: Vec<(SpaceExample, u64, ComplexityClass)> = SpaceExample::ALL.iter()
            .map(|example| example.profile(100).unwrap())
            .map(|profile| (profile.example, profile.extra_space_units, profile.class))
            .collect();
        assert_eq!(units, vec![
            (SpaceExample::IterativeFibonacci, 1,   ComplexityClass::Constant),
            (SpaceExample::RecursiveFibonacci, 100, ComplexityClass::Linear),
            (SpaceExample::MergeSort,          100, ComplexityClass::Linear),
            (SpaceExample::BubbleSort,         1,   ComplexityClass::Constant),
        ]);
        assert!(matches!(SpaceExample::MergeSort.profile(0), Err(EngineError::InvalidInputSize { input_size: 0, .. })));
    }

    #[test]
    fn the_space_class_does_not_depend_on_the_input_size() {
        for example in [SpaceExample::RecursiveFibonacci, SpaceExample::MergeSort] {
            let profile = example.profile(1).unwrap();
            assert_eq!((profile.extra_space_units, profile.class), (1, ComplexityClass::Linear), "{}", example.name());
        }
        for example in SpaceExample::ALL {
            assert_eq!(example.profile(1).map(|profile| profile.class), example.profile(5000).map(|profile| profile.class));
        }
    }

    #[test]
    fn shown_code_is_estimated_by_its_running_time() {
        let estimations: Vec<(SpaceExample, ComplexityClass)> = SpaceExample::ALL.iter()
            .map(|example| (*example, estimate(example.code()).unwrap_or_else(|err| panic!("{}: {err}", example.name()))))
            .collect();
        assert_eq!(estimations, vec![
            (SpaceExample::IterativeFibonacci, ComplexityClass::Linear),
            (SpaceExample::RecursiveFibonacci, ComplexityClass::ExponentialBounded),
            (SpaceExample::MergeSort,          ComplexityClass::Linearithmic),
            (SpaceExample::BubbleSort,         ComplexityClass::Quadratic),
        ]);
    }
}
