//! Provides an example of how to use bnfactor to perform inference on a Bayesian Network.
//!
//! Run with `RUST_LOG=debug` to see the factor operations as they happen.

use bnfactor as bn;
use bn::ConditionalInferenceEngine;

fn main() -> bn::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let difficulty = bn::Variable::binary(0);
    let intelligence = bn::Variable::binary(1);
    let grade = bn::Variable::discrete(2, 3);
    let sat = bn::Variable::binary(3);
    let letter = bn::Variable::binary(4);

    let scope = StudentVariables(difficulty, intelligence, grade, sat, letter);

    /////////////////////////////////////////////////////
    // Step 1: Build the factors
    let factors = build_factors(scope)?;

    /////////////////////////////////////////////////////
    // Step 2: Compile some evidence
    let mut evidence = bn::Assignment::new();
    evidence.set(difficulty.id(), 0);
    evidence.set(letter.id(), 1);
    evidence.set(sat.id(), 0);

    /////////////////////////////////////////////////////
    // Step 3: Build an inference engine
    let engine = bn::EnumerationEngine::new(&factors, &evidence)?;

    /////////////////////////////////////////////////////
    // Step 4: Run a Conditional Query
    let query = [intelligence.id()];
    let p = engine.infer(&query)?;

    for (i, assignment) in bn::all_assignments(&query, &[intelligence.cardinality()]).enumerate() {
        let value = p.value(&assignment)?;
        println!("P(I = {} | D = 0, S = 0, L = 1) = {:.4}", i, value);
    }

    /////////////////////////////////////////////////////
    // Step 5: The same query, without an engine
    let p = bn::marginal(&query, &evidence.to_evidence(), &factors)?;
    println!("\n{}", p);

    Ok(())
}

struct StudentVariables(bn::Variable, bn::Variable, bn::Variable, bn::Variable, bn::Variable);

fn build_factors(vars: StudentVariables) -> bn::Result<Vec<bn::Factor>> {
    let StudentVariables(d, i, g, s, l) = vars;

    ///////////////////////////////////////////////////
    // CPTs for variables with parents, child first
    let cpt_g = bn::Factor::with_values(
        vec![g.id(), d.id(), i.id()],
        vec![3, 2, 2],
        vec![
            0.3, 0.4, 0.3,
            0.05, 0.25, 0.7,
            0.9, 0.08, 0.02,
            0.5, 0.3, 0.2
        ]
    )?;

    let cpt_s = bn::Factor::with_values(
        vec![s.id(), i.id()],
        vec![2, 2],
        vec![0.95, 0.05, 0.2, 0.8]
    )?;

    let cpt_l = bn::Factor::with_values(
        vec![l.id(), g.id()],
        vec![2, 3],
        vec![0.1, 0.9, 0.4, 0.6, 0.99, 0.01]
    )?;

    Ok(vec![
        bn::Initialization::Binomial(0.6).build_cpd(d, &[])?,
        bn::Initialization::Binomial(0.7).build_cpd(i, &[])?,
        bn::Initialization::Table(cpt_g).build_cpd(g, &[d, i])?,
        bn::Initialization::Table(cpt_s).build_cpd(s, &[i])?,
        bn::Initialization::Table(cpt_l).build_cpd(l, &[g])?
    ])
}
