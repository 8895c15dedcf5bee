//! Defines the queries that combine factor operations into inference over a list of `Factor`s

use crate::factor::Factor;
use crate::util::Result;
use crate::variable::VariableId;

mod enumeration;
mod query;

pub use self::enumeration::EnumerationEngine;
pub use self::query::{joint, marginal};


/// A `ConditionalInferenceEngine` is capable of answering Conditional Probability Queries of the form:
///     ```P(Y | E = e)```
///
/// `ConditionalInferenceEngine`s take the evidence `e` as an argument to whatever construction
/// mechanism they employ.
pub trait ConditionalInferenceEngine {

    /// Infer the normalized joint distribution ```P(variables | evidence)```
    fn infer(&self, variables: &[VariableId]) -> Result<Factor>;

}


#[cfg(test)]
/// Tests for the inference engines in this module.
///
/// Example derived from Koller & Friedman's student example. Example 6d of [1] provides the
/// result of exact inference of P(I | D=0, L=1, S=0) on a modified version of the K&F Student
/// example. We use that result here to test our implementation.
///
/// [1] https://www.uni-oldenburg.de/en/lcs/probabilistic-programming/webchurch-and-openbugs/
mod tests {
    use super::*;
    use crate::variable::Assignment;

    use approx::assert_abs_diff_eq;

    const D: VariableId = 0;
    const I: VariableId = 1;
    const G: VariableId = 2;
    const S: VariableId = 3;
    const L: VariableId = 4;

    /// Utility function to build the student inference example
    fn build_student_example() -> (Vec<Factor>, Assignment) {
        let factors = vec![
            Factor::with_values(vec![D], vec![2], vec![0.6, 0.4]).unwrap(),
            Factor::with_values(vec![I], vec![2], vec![0.7, 0.3]).unwrap(),
            Factor::with_values(
                vec![G, I, D],
                vec![2, 2, 2],
                vec![0.3, 0.7, 0.9, 0.1, 0.05, 0.95, 0.5, 0.5]
            ).unwrap(),
            Factor::with_values(vec![S, I], vec![2, 2], vec![0.95, 0.05, 0.2, 0.8]).unwrap(),
            Factor::with_values(vec![L, G], vec![2, 2], vec![0.9, 0.1, 0.4, 0.6]).unwrap()
        ];

        let evidence = vec![(D, 0), (L, 1), (S, 0)].into_iter().collect();

        (factors, evidence)
    }

    /// Utility method to test the actual inference task
    fn test_inference(engine: &dyn ConditionalInferenceEngine) {
        let f = engine.infer(&[I]).unwrap();
        assert_eq!(&[I], f.variables());

        let assn = vec![(I, 1)].into_iter().collect();
        assert_abs_diff_eq!(0.02919708, f.value(&assn).unwrap(), epsilon = 1e-8);
    }

    #[test]
    fn enumeration() {
        let (factors, evidence) = build_student_example();
        let engine = EnumerationEngine::new(&factors, &evidence).unwrap();

        // the result should be the same on subsequent queries
        for _ in 0..10 {
            test_inference(&engine);
        }
    }

    #[test]
    fn marginal_query() {
        let (factors, evidence) = build_student_example();

        let f = marginal(&[I], &evidence.to_evidence(), &factors).unwrap();
        assert_abs_diff_eq!(0.02919708, f.values()[1], epsilon = 1e-8);
        assert_abs_diff_eq!(1.0, f.sum(), epsilon = 1e-12);
    }
}
