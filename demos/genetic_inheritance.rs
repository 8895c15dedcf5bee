//! Builds a small pedigree out of genetic inheritance factors and queries it.
//!
//! Every person `p` has a genotype variable `p` and a phenotype variable `p + people`.

use bnfactor as bn;
use bn::genetics;

/// `(parent1, parent2)` for every person, `None` for founders
const PEDIGREE: [Option<(usize, usize)>; 4] = [None, None, Some((0, 1)), Some((0, 1))];

fn main() -> bn::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let allele_freqs = [0.1, 0.9];
    let penetrance = [0.8, 0.6, 0.1];
    let people = PEDIGREE.len();

    /////////////////////////////////////////////////////
    // Step 1: Build the factors
    let mut factors = Vec::with_capacity(2 * people);
    for (person, parents) in PEDIGREE.iter().enumerate() {
        let genotype = match *parents {
            None => genetics::genotype_from_allele_freqs(&allele_freqs, person)?,
            Some((p1, p2)) => genetics::genotype_given_parents(allele_freqs.len(), person, p1, p2)?
        };
        let phenotype = genetics::phenotype_penetrance(&penetrance, person, person + people)?;

        println!("Genotype:\n{}\nPhenotype:\n{}\n", genotype, phenotype);
        factors.push(genotype);
        factors.push(phenotype);
    }

    /////////////////////////////////////////////////////
    // Step 2: Query the genotype of the second child, before and after the first shows the trait
    let prior = bn::marginal(&[3], &[], &factors)?;
    let posterior = bn::marginal(&[3], &[(2 + people, 0)], &factors)?;

    let names: Vec<String> = genetics::genotype_alleles(allele_freqs.len())
        .into_iter()
        .map(|(a, b)| format!("{}{}", allele_name(a), allele_name(b)))
        .collect();

    for (g, name) in names.iter().enumerate() {
        println!(
            "P(G3 = {}) = {:.4}, P(G3 = {} | child 2 shows the trait) = {:.4}",
            name, prior.values()[g], name, posterior.values()[g]
        );
    }

    Ok(())
}

fn allele_name(allele: usize) -> char {
    if allele == 0 { 'A' } else { 'a' }
}
