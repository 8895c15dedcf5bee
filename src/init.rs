//! Module containing initialization routines for the parameters of a model.

use crate::factor::{Factor, Table};
use crate::util::{FactorError, Result};
use crate::variable::Variable;

use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

/// Defines possible ways to initialize a `Variable`s CPD.
pub enum Initialization<'a> {
    /// A uniform distribution over all possibilities
    Uniform,

    /// Randomly initialize the weights of the CPD.
    Random,

    /// Initialize the CPD as a Binomial distribution with parameter ```p```.
    /// Note that this `Initialization` is valid only to a `Variable` with no parents.
    Binomial(f64),

    /// Initialize the CPD as a Multinomial distribution with parameters ```p_0, p_1...```.
    /// Note that this `Initialization` is valid only to a `Variable` with no parents.
    Multinomial(&'a [f64]),

    /// User defined CPD
    Table(Factor)
}


impl<'a> Initialization<'a> {

    /// Construct a CPD, initialized based on ```self```
    ///
    /// # Args
    /// * `var`: the child variable of the CPD
    /// * `parents`: the variables `var` is conditioned on
    ///
    /// # Returns
    /// a `Factor` over ```[var, parents...]```. Because `var` comes first it cycles fastest, so
    /// every assignment to the parents owns a contiguous block of `var.cardinality()` values that
    /// sums to one.
    pub fn build_cpd(self, var: Variable, parents: &[Variable]) -> Result<Factor> {
        self.build_cpd_with_rng(var, parents, &mut rand::thread_rng())
    }


    /// Construct a CPD as `build_cpd` does, drawing any random weights from `rng`
    pub fn build_cpd_with_rng<R: Rng>(
        self,
        var: Variable,
        parents: &[Variable],
        rng: &mut R
    ) -> Result<Factor> {
        let mut scope = vec![var];
        scope.extend_from_slice(parents);

        ///////////////////////////////////////////////////////////////////////////////
        // Trivial cases

        // if this is a user defined factor, it just needs to be verified and returned
        if let Initialization::Table(f) = self {
            let s = f.scope();
            let same_scope = s.len() == scope.len() && scope.iter().all(|v| s.contains(v));
            if ! same_scope || s[0] != var {
                return Err(FactorError::InvalidInitialization);
            }
            if ! is_cpd(&f, var.cardinality()) {
                return Err(FactorError::InvalidInitialization);
            }
            return Ok(f);
        }

        ///////////////////////////////////////////////////////////////////////////////
        // Check for errors
        check_unit_scope(&self, &scope)?;

        ///////////////////////////////////////////////////////////////////////////////
        // now, build CPD
        let mut factor = Factor::from_scope(&scope)?;
        let size = factor.len();
        let card = var.cardinality();

        let tbl = match self {
            Initialization::Uniform => Table::from_elem(size, 1. / (card as f64)),
            Initialization::Random => {
                let mut tbl = Table::random_using(size, Uniform::new(1.0, 100.0), rng);
                for mut block in tbl.exact_chunks_mut(card) {
                    let z = block.sum();
                    block.mapv_inplace(|e| e / z);
                }
                tbl
            },
            Initialization::Binomial(p) => Table::from(vec![p, 1.0 - p]),
            Initialization::Multinomial(p) => Table::from(p.to_vec()),
            Initialization::Table(_) => return Err(FactorError::InvalidInitialization)
        };

        factor.values_mut().assign(&tbl);
        Ok(factor)
    }


    /// Construct a factor, initialized based on ```self```
    ///
    /// # Args
    /// * `scope`: the `Variable`s over which to build the `Factor`, in layout order
    ///
    /// # Returns
    /// a `Factor` over `scope`, initialized according to ```self```. `Uniform` and `Random`
    /// factors are normalized over the whole table.
    pub fn build_factor(self, scope: &[Variable]) -> Result<Factor> {
        self.build_factor_with_rng(scope, &mut rand::thread_rng())
    }


    /// Construct a factor as `build_factor` does, drawing any random weights from `rng`
    pub fn build_factor_with_rng<R: Rng>(self, scope: &[Variable], rng: &mut R) -> Result<Factor> {
        ///////////////////////////////////////////////////////////////////////////////
        // Trivial cases

        if scope.is_empty() {
            return Err(FactorError::InvalidInitialization);
        }

        // if this is a user defined factor, it just needs to be verified and returned
        if let Initialization::Table(f) = self {
            let s = f.scope();
            if s.len() == scope.len() && scope.iter().all(|v| s.contains(v)) {
                return Ok(f);
            } else {
                return Err(FactorError::InvalidInitialization);
            }
        }

        ///////////////////////////////////////////////////////////////////////////////
        // Check for errors
        check_unit_scope(&self, scope)?;

        ///////////////////////////////////////////////////////////////////////////////
        // now, build factor
        let mut factor = Factor::from_scope(scope)?;
        let size = factor.len();

        let tbl = match self {
            Initialization::Uniform => Table::from_elem(size, 1. / (size as f64)),
            Initialization::Random => {
                let mut tbl = Table::random_using(size, Uniform::new(1.0, 100.0), rng);
                let z = tbl.sum();
                tbl.mapv_inplace(|e| e / z);
                tbl
            },
            Initialization::Binomial(p) => Table::from(vec![p, 1.0 - p]),
            Initialization::Multinomial(p) => Table::from(p.to_vec()),
            Initialization::Table(_) => return Err(FactorError::InvalidInitialization)
        };

        factor.values_mut().assign(&tbl);
        Ok(factor)
    }
}


/// Binomial and multinomial initializations are only defined over a single variable of the right
/// cardinality
fn check_unit_scope(init: &Initialization, scope: &[Variable]) -> Result<()> {
    match *init {
        Initialization::Binomial(p) => {
            if scope.len() != 1 || scope[0].cardinality() != 2 || p < 0. || p > 1. {
                return Err(FactorError::InvalidInitialization);
            }
        },
        Initialization::Multinomial(ps) => {
            if scope.len() != 1 || ps.len() != scope[0].cardinality() || ps.iter().any(|&p| p < 0.) {
                return Err(FactorError::InvalidInitialization);
            }
        },
        _ => ()
    }

    Ok(())
}


/// Check that every block of `card` consecutive values sums to one
fn is_cpd(factor: &Factor, card: usize) -> bool {
    debug_assert_eq!(0, factor.len() % card);

    factor.values()
          .exact_chunks(card)
          .into_iter()
          .all(|block| (block.sum() - 1.0).abs() < 0.001)
}
