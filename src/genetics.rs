//! Factor builders for genetic inheritance networks.
//!
//! A person is modelled by a genotype variable and a phenotype variable. With `n` alleles and two
//! alleles per genotype there are `n(n-1)/2 + n` genotypes, the unordered allele pairs `(i, j)`,
//! `i <= j`, in lexicographic order. For two alleles `A`, `a` that is `AA, Aa, aa`.
//!
//! Phenotypes have two states: 0 means the trait is present and 1 means it is absent.

use crate::factor::{codec, Factor};
use crate::util::{FactorError, Result};
use crate::variable::VariableId;

use itertools::iproduct;


/// The number of genotypes that can be formed from `alleles` alleles
pub fn genotype_count(alleles: usize) -> usize {
    alleles * (alleles + 1) / 2
}


/// The allele pair of every genotype, indexed by genotype
pub fn genotype_alleles(alleles: usize) -> Vec<(usize, usize)> {
    iproduct!(0..alleles, 0..alleles).filter(|&(i, j)| i <= j).collect()
}


/// The genotype formed by alleles `a` and `b`, in either order
pub fn genotype_index(a: usize, b: usize, alleles: usize) -> Option<usize> {
    let (i, j) = if a <= b { (a, b) } else { (b, a) };
    if j >= alleles {
        return None;
    }

    // genotypes starting with an allele below i come first
    Some(i * (2 * alleles - i + 1) / 2 + (j - i))
}


/// Prior over the genotype of a founder, from allele frequencies (Hardy-Weinberg)
///
/// # Errors
/// * `FactorError::InvalidInitialization` if `freqs` is empty or holds a negative frequency
/// * `FactorError::DegenerateNormalization` if every frequency is zero
pub fn genotype_from_allele_freqs(freqs: &[f64], genotype: VariableId) -> Result<Factor> {
    if freqs.is_empty() || freqs.iter().any(|&p| ! (p >= 0. && p.is_finite())) {
        return Err(FactorError::InvalidInitialization);
    }

    let values = genotype_alleles(freqs.len())
        .into_iter()
        .map(|(i, j)| if i == j { freqs[i] * freqs[i] } else { 2. * freqs[i] * freqs[j] })
        .collect();

    Factor::with_values(vec![genotype], vec![genotype_count(freqs.len())], values)?.normalize()
}


/// CPD of a child's genotype given the genotypes of both parents.
///
/// The result is over `[child, parent1, parent2]`. Each parent passes on either of its alleles
/// with equal probability.
pub fn genotype_given_parents(
    alleles: usize,
    child: VariableId,
    parent1: VariableId,
    parent2: VariableId
) -> Result<Factor> {
    let count = genotype_count(alleles);
    let cardinals = vec![count; 3];
    let mut factor = Factor::new(vec![child, parent1, parent2], cardinals.clone())?;

    let genotypes = genotype_alleles(alleles);
    for ((g1, &(a, b)), (g2, &(c, d))) in iproduct!(genotypes.iter().enumerate(), genotypes.iter().enumerate()) {
        for (x, y) in iproduct!(vec![a, b], vec![c, d]) {
            let g = genotype_index(x, y, alleles).ok_or(FactorError::InvalidInitialization)?;
            let k = codec::encode(&cardinals, &[g, g1, g2]).ok_or(FactorError::InvalidInitialization)?;
            factor.values_mut()[k] += 0.25;
        }
    }

    Ok(factor)
}


/// CPD of a phenotype given a two-allele genotype under simple Mendelian dominance.
///
/// The result is over `[phenotype, genotype]`. If `dominant`, the trait is present for `AA` and
/// `Aa`; otherwise only for `aa`.
pub fn phenotype_mendelian(dominant: bool, genotype: VariableId, phenotype: VariableId) -> Result<Factor> {
    let penetrance = if dominant { [1., 1., 0.] } else { [0., 0., 1.] };
    phenotype_penetrance(&penetrance, genotype, phenotype)
}


/// CPD of a phenotype given a genotype, where `probs[g]` is the probability that genotype `g`
/// shows the trait.
///
/// The result is over `[phenotype, genotype]`.
///
/// # Errors
/// * `FactorError::InvalidInitialization` if `probs` is empty or holds a value outside `[0, 1]`
pub fn phenotype_penetrance(probs: &[f64], genotype: VariableId, phenotype: VariableId) -> Result<Factor> {
    if probs.is_empty() || probs.iter().any(|&p| ! (p >= 0. && p <= 1.)) {
        return Err(FactorError::InvalidInitialization);
    }

    let mut factor = Factor::new(vec![phenotype, genotype], vec![2, probs.len()])?;

    // one group per genotype, holding the indices of [trait, no trait]
    let groups = codec::state_indices(&factor, 1);
    let values = factor.values_mut();
    for (group, &p) in groups.iter().zip(probs) {
        values[group[0]] = p;
        values[group[1]] = 1. - p;
    }

    Ok(factor)
}
