//! Sequence operations used to line up the scopes of two `Factor`s.

use super::Factor;
use crate::variable::VariableId;


/// Find the values shared by `left` and `right`.
///
/// For every pair of equal values at position `i` of `left` and position `j` of `right`, `i` is
/// appended to the first output and `j` to the second. Pairs are ordered by `i` then `j`.
pub fn intersection<T: PartialEq>(left: &[T], right: &[T]) -> (Vec<usize>, Vec<usize>) {
    let mut left_pos = Vec::new();
    let mut right_pos = Vec::new();

    for (i, l) in left.iter().enumerate() {
        for (j, r) in right.iter().enumerate() {
            if l == r {
                left_pos.push(i);
                right_pos.push(j);
            }
        }
    }

    (left_pos, right_pos)
}


/// The elements of `seq` that do not occur in `to_remove`, in their original order
pub fn difference<T: PartialEq + Clone>(seq: &[T], to_remove: &[T]) -> Vec<T> {
    seq.iter()
       .filter(|v| ! to_remove.contains(v))
       .cloned()
       .collect()
}


/// The scope of the product of `left` and `right`.
///
/// `left_pos`/`right_pos` are the matched positions returned by `intersection`. The result lists
/// the shared variables first (in match order, with `left`'s cardinality), then the variables only
/// in `left` in `left`'s order, then the variables only in `right` in `right`'s order.
///
/// # Preconditions
/// `left` and `right` agree on the cardinality of every shared variable
pub fn union_with_cardinalities(
    left: &Factor,
    right: &Factor,
    left_pos: &[usize],
    right_pos: &[usize]
) -> (Vec<VariableId>, Vec<usize>) {
    let capacity = left.variables().len() + right.variables().len() - left_pos.len();
    let mut variables = Vec::with_capacity(capacity);
    let mut cardinals = Vec::with_capacity(capacity);

    for &i in left_pos {
        variables.push(left.variables()[i]);
        cardinals.push(left.cardinals()[i]);
    }

    let exclusive = |factor: &Factor, shared: &[usize]| {
        factor.variables()
              .iter()
              .cloned()
              .zip(factor.cardinals().iter().cloned())
              .enumerate()
              .filter(|(i, _)| ! shared.contains(i))
              .map(|(_, vc)| vc)
              .collect::<Vec<_>>()
    };

    for (v, c) in exclusive(left, left_pos).into_iter().chain(exclusive(right, right_pos)) {
        variables.push(v);
        cardinals.push(c);
    }

    (variables, cardinals)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect() {
        let (l, r) = intersection(&[3, 1, 4, 5], &[5, 9, 3]);
        assert_eq!(vec![0, 3], l);
        assert_eq!(vec![2, 0], r);
    }

    #[test]
    fn intersect_disjoint() {
        let (l, r) = intersection(&[1, 2], &[3, 4]);
        assert!(l.is_empty());
        assert!(r.is_empty());
    }

    #[test]
    fn intersect_duplicates() {
        // duplicates generate one match per pair
        let (l, r) = intersection(&[1, 1], &[1]);
        assert_eq!(vec![0, 1], l);
        assert_eq!(vec![0, 0], r);
    }

    #[test]
    fn diff() {
        assert_eq!(vec![3, 4], difference(&[1, 3, 2, 4], &[2, 1, 7]));
        assert_eq!(vec![1, 2], difference(&[1, 2], &[]));
        assert!(difference(&[1, 2], &[2, 1]).is_empty());
    }

    #[test]
    fn union() {
        let a = Factor::new(vec![0, 4, 1], vec![2, 3, 5]).unwrap();
        let b = Factor::new(vec![6, 1, 0], vec![4, 5, 2]).unwrap();

        let (l, r) = intersection(a.variables(), b.variables());
        let (vars, cards) = union_with_cardinalities(&a, &b, &l, &r);

        assert_eq!(vec![0, 1, 4, 6], vars);
        assert_eq!(vec![2, 5, 3, 4], cards);
    }

    #[test]
    fn union_disjoint() {
        let a = Factor::new(vec![2], vec![3]).unwrap();
        let b = Factor::new(vec![1, 0], vec![2, 4]).unwrap();

        let (vars, cards) = union_with_cardinalities(&a, &b, &[], &[]);
        assert_eq!(vec![2, 1, 0], vars);
        assert_eq!(vec![3, 2, 4], cards);
    }
}
