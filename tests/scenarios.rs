//! End to end scenarios over small networks

use bnfactor::genetics::{genotype_from_allele_freqs, genotype_given_parents, phenotype_mendelian};
use bnfactor::{
    joint, marginal, marginalize, observe_evidence, product, Assignment, ConditionalInferenceEngine,
    EnumerationEngine, Factor, FactorError, Initialization, Variable,
};

use approx::assert_abs_diff_eq;

fn assert_values(expected: &[f64], actual: &Factor) {
    assert_eq!(expected.len(), actual.len());
    for (e, a) in expected.iter().zip(actual.values().iter()) {
        assert_abs_diff_eq!(e, a, epsilon = 1e-9);
    }
}

#[test]
fn product_scenario() {
    let a = Factor::with_values(vec![0], vec![2], vec![0.11, 0.89]).unwrap();
    let b = Factor::with_values(vec![1, 0], vec![2, 2], vec![0.59, 0.41, 0.22, 0.78]).unwrap();

    let p = product(&a, &b).unwrap();
    assert_eq!(&[0, 1], p.variables());
    assert_values(&[0.0649, 0.1958, 0.0451, 0.6942], &p);
}

#[test]
fn marginalize_scenario() {
    let f = Factor::with_values(vec![2, 1], vec![2, 2], vec![0.39, 0.61, 0.06, 0.94]).unwrap();

    let m = marginalize(&f, 2).unwrap();
    assert_eq!(&[1], m.variables());
    assert_values(&[1.0, 1.0], &m);
}

#[test]
fn evidence_scenario() {
    let f = Factor::with_values(vec![2, 1], vec![2, 2], vec![0.39, 0.61, 0.06, 0.94]).unwrap();
    let mut factors = vec![f];

    observe_evidence(&[(1, 0)], &mut factors);
    assert_values(&[0.39, 0.61, 0., 0.], &factors[0]);
}

#[test]
fn chain_of_cpds() {
    // A -> B -> C, built through initializations
    let a = Variable::binary(0);
    let b = Variable::discrete(1, 3);
    let c = Variable::binary(2);

    let factors = vec![
        Initialization::Binomial(0.3).build_cpd(a, &[]).unwrap(),
        Initialization::Uniform.build_cpd(b, &[a]).unwrap(),
        Initialization::Random.build_cpd(c, &[b]).unwrap()
    ];

    let jpd = joint(&factors).unwrap();
    assert_abs_diff_eq!(1.0, jpd.sum(), epsilon = 1e-9);

    // B is uniform regardless of A
    let pb = marginal(&[1], &[(0, 1)], &factors).unwrap();
    assert_values(&[1. / 3., 1. / 3., 1. / 3.], &pb);

    // without evidence the root keeps its prior
    let pa = marginal(&[0], &[], &factors).unwrap();
    assert_values(&[0.3, 0.7], &pa);
}

#[test]
fn disjoint_factors_form_outer_product() {
    let a = Factor::with_values(vec![0], vec![2], vec![0.25, 0.75]).unwrap();
    let b = Factor::with_values(vec![1], vec![2], vec![0.5, 0.5]).unwrap();

    let jpd = joint(&[a, b]).unwrap();
    assert_eq!(&[0, 1], jpd.variables());
    assert_values(&[0.125, 0.375, 0.125, 0.375], &jpd);
}

#[test]
fn mismatched_factors_fail() {
    let a = Factor::with_values(vec![0], vec![2], vec![0.25, 0.75]).unwrap();
    let b = Factor::with_values(vec![0], vec![3], vec![0.2, 0.3, 0.5]).unwrap();

    assert_eq!(
        Err(FactorError::CardinalityMismatch { variable: 0, left: 2, right: 3 }),
        joint(&[a, b])
    );
}

#[test]
fn genetic_trio() {
    // two founders (0, 1) and their child (2), with phenotypes 3, 4, 5
    let freqs = [0.1, 0.9];

    let factors = vec![
        genotype_from_allele_freqs(&freqs, 0).unwrap(),
        genotype_from_allele_freqs(&freqs, 1).unwrap(),
        genotype_given_parents(2, 2, 0, 1).unwrap(),
        phenotype_mendelian(true, 0, 3).unwrap(),
        phenotype_mendelian(true, 1, 4).unwrap(),
        phenotype_mendelian(true, 2, 5).unwrap()
    ];

    // with no evidence, the child's genotype follows the population prior
    let child = marginal(&[2], &[], &factors).unwrap();
    assert_values(&[0.01, 0.18, 0.81], &child);

    // neither parent shows a dominant trait, so both are aa and so is the child
    let mut evidence = Assignment::new();
    evidence.set(3, 1);
    evidence.set(4, 1);

    let engine = EnumerationEngine::new(&factors, &evidence).unwrap();
    let child = engine.infer(&[5]).unwrap();
    assert_values(&[0., 1.], &child);

    // a child with the trait cannot have two parents without it
    evidence.set(5, 0);
    let engine = EnumerationEngine::new(&factors, &evidence).unwrap();
    assert!(engine.infer(&[2]).is_err());
}

#[test]
fn query_result_read_by_assignment() -> bnfactor::Result<()> {
    // D (0), I (1) -> G (2)
    let factors = vec![
        Initialization::Binomial(0.6).build_cpd(Variable::binary(0), &[])?,
        Initialization::Binomial(0.7).build_cpd(Variable::binary(1), &[])?,
        Factor::with_values(
            vec![2, 0, 1],
            vec![3, 2, 2],
            vec![0.3, 0.4, 0.3, 0.05, 0.25, 0.7, 0.9, 0.08, 0.02, 0.5, 0.3, 0.2]
        )?
    ];

    let mut evidence = Assignment::new();
    evidence.set(2, 0);

    let engine = EnumerationEngine::new(&factors, &evidence)?;
    let p = engine.infer(&[1])?;

    // P(I, G=0) = P(I) * sum_d P(d) P(G=0 | I, d)
    let unnormalized = [0.7 * (0.6 * 0.3 + 0.4 * 0.05), 0.3 * (0.6 * 0.9 + 0.4 * 0.5)];
    let z: f64 = unnormalized.iter().sum();

    for (i, assignment) in bnfactor::all_assignments(&[1], &[2]).enumerate() {
        assert_abs_diff_eq!(unnormalized[i] / z, p.value(&assignment)?, epsilon = 1e-12);
    }

    // a lookup outside the scope of the result is an error, not a silent skip
    let mut missing = Assignment::new();
    missing.set(0, 0);
    assert_eq!(Err(FactorError::IncompleteAssignment), p.value(&missing));

    Ok(())
}
