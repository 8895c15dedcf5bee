//! Joint and marginal queries over a list of `Factor`s.

use crate::factor::evidence::{normalize, observe_evidence};
use crate::factor::ops::{marginalize, product};
use crate::factor::sets::difference;
use crate::factor::Factor;
use crate::util::{FactorError, Result};
use crate::variable::VariableId;

use tracing::debug;


/// Compute the joint distribution of a list of `Factor`s.
///
/// The first two factors are multiplied, then the running product is multiplied by each of the
/// remaining factors in list order. The layout of the result therefore follows from the list
/// order, see [`product`].
///
/// # Errors
/// * `FactorError::NoFactors` if `factors` is empty
/// * any error of [`product`]
pub fn joint(factors: &[Factor]) -> Result<Factor> {
    let (first, rest) = factors.split_first().ok_or(FactorError::NoFactors)?;

    let jpd = rest.iter().try_fold(first.clone(), |acc, phi| product(&acc, phi))?;
    debug!(factors = factors.len(), scope = ?jpd.variables(), "computed joint");

    Ok(jpd)
}


/// Compute the normalized marginal distribution over `targets` given `evidence`.
///
/// The joint of `factors` is conditioned on `evidence`, every variable of the joint not listed in
/// `targets` is summed out (in the joint's variable order), and the result is normalized. Targets
/// that are not in the joint are ignored.
///
/// # Errors
/// * any error of [`joint`]
/// * `FactorError::DegenerateNormalization` if the evidence is inconsistent with every state
pub fn marginal(
    targets: &[VariableId],
    evidence: &[(VariableId, usize)],
    factors: &[Factor]
) -> Result<Factor> {
    let mut observed = vec![joint(factors)?];
    observe_evidence(evidence, &mut observed);
    let jpd = observed.remove(0);

    let eliminate = difference(jpd.variables(), targets);
    let phi = eliminate.iter().try_fold(jpd, |acc, &var| marginalize(&acc, var))?;

    normalize(&phi)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Assignment;

    use approx::assert_abs_diff_eq;

    fn sample_factors() -> Vec<Factor> {
        vec![
            Factor::with_values(vec![0], vec![2], vec![0.11, 0.89]).unwrap(),
            Factor::with_values(vec![1, 0], vec![2, 2], vec![0.59, 0.41, 0.22, 0.78]).unwrap(),
            Factor::with_values(vec![2, 1], vec![2, 2], vec![0.39, 0.61, 0.06, 0.94]).unwrap()
        ]
    }

    #[test]
    fn joint_empty() {
        assert_eq!(Err(FactorError::NoFactors), joint(&[]));
        assert_eq!(
            Err(FactorError::NoFactors),
            marginal(&[0], &[], &[])
        );
    }

    #[test]
    fn joint_single() {
        let factors = sample_factors();
        assert_eq!(factors[2], joint(&factors[2..]).unwrap());
    }

    #[test]
    fn joint_folds_in_order() {
        let factors = sample_factors();
        let jpd = joint(&factors).unwrap();

        // product(product(f0, f1), f2): 0 and 1 from the first product, then 1 shared with f2
        assert_eq!(&[1, 0, 2], jpd.variables());
        assert_abs_diff_eq!(1.0, jpd.sum(), epsilon = 1e-12);

        let assn: Assignment = vec![(0, 1), (1, 0), (2, 1)].into_iter().collect();
        assert_abs_diff_eq!(0.89 * 0.22 * 0.61, jpd.value(&assn).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn joint_cardinality_mismatch() {
        let mut factors = sample_factors();
        factors.push(Factor::with_values(vec![2], vec![3], vec![0.2, 0.3, 0.5]).unwrap());

        assert_eq!(
            Err(FactorError::CardinalityMismatch { variable: 2, left: 2, right: 3 }),
            joint(&factors)
        );
    }

    #[test]
    fn marginal_with_evidence() {
        let m = marginal(&[1, 2], &[(0, 1)], &sample_factors()).unwrap();

        let expected = [((0, 0), 0.0858), ((0, 1), 0.1342), ((1, 0), 0.0468), ((1, 1), 0.7332)];
        for &((x1, x2), p) in expected.iter() {
            let assn: Assignment = vec![(1, x1), (2, x2)].into_iter().collect();
            assert_abs_diff_eq!(p, m.value(&assn).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn marginal_without_evidence() {
        let m = marginal(&[2], &[], &sample_factors()).unwrap();
        assert_eq!(&[2], m.variables());
        assert_abs_diff_eq!(1.0, m.sum(), epsilon = 1e-12);

        // P(X2 = 0) = sum over x1 of P(X1 = x1) P(X2 = 0 | X1 = x1)
        let p1 = [0.11 * 0.59 + 0.89 * 0.22, 0.11 * 0.41 + 0.89 * 0.78];
        assert_abs_diff_eq!(p1[0] * 0.39 + p1[1] * 0.06, m.values()[0], epsilon = 1e-12);
    }

    #[test]
    fn marginal_ignores_unknown_targets() {
        let m = marginal(&[2, 7], &[], &sample_factors()).unwrap();
        assert_eq!(&[2], m.variables());
    }

    #[test]
    fn marginal_contradictory_evidence() {
        let res = marginal(&[2], &[(0, 0), (0, 1)], &sample_factors());
        assert_eq!(Err(FactorError::DegenerateNormalization { sum: 0. }), res);
    }

    #[test]
    fn marginal_over_everything() {
        let m = marginal(&[], &[], &sample_factors()).unwrap();
        assert!(m.is_scalar());
        assert_abs_diff_eq!(1.0, m.values()[0], epsilon = 1e-12);
    }
}
