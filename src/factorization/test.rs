use crate::errors::SystemError;
use crate::factorization::{back_substitute, factorize, forward_eliminate};
use approx::assert_relative_eq;
use assert_matches::assert_matches;
use nalgebra::{dmatrix, dvector};

#[test]
#[allow(non_snake_case)]
fn factorization_produces_combined_lu_storage() {
    let mut A = dmatrix![
        2., 1., 1.;
        4., 3., 3.;
        8., 7., 9.;
    ];
    let mut b = dvector![1., 1., 1.];

    factorize(&mut A, &mut b).unwrap();

    // no pivot entry is zero for this matrix, so no rows get swapped and
    // the factors can be checked against the hand-computed decomposition
    let expected = dmatrix![
        2., 1., 1.;
        2., 1., 1.;
        4., 3., 2.;
    ];
    assert_relative_eq!(A, expected, epsilon = 1e-12);
    assert_eq!(b, dvector![1., 1., 1.]);
}

#[test]
#[allow(non_snake_case)]
fn zero_pivot_swaps_rows_of_matrix_and_rhs_together() {
    let mut A = dmatrix![
        0., 1.;
        1., 0.;
    ];
    let mut b = dvector![2., 3.];

    factorize(&mut A, &mut b).unwrap();

    assert_eq!(A, dmatrix![1., 0.; 0., 1.]);
    assert_eq!(b, dvector![3., 2.]);
}

#[test]
#[allow(non_snake_case)]
fn pivot_search_covers_the_last_row() {
    // the only usable pivot for column 0 sits in the very last row
    let mut A = dmatrix![
        0., 1., 0.;
        0., 0., 1.;
        1., 0., 0.;
    ];
    let mut b = dvector![1., 2., 3.];

    factorize(&mut A, &mut b).unwrap();
    forward_eliminate(&A, &mut b);
    back_substitute(&A, &mut b).unwrap();

    assert_relative_eq!(b, dvector![3., 1., 2.], epsilon = 1e-12);
}

#[test]
#[allow(non_snake_case)]
fn all_zero_pivot_column_is_reported_as_singular() {
    let mut A = dmatrix![
        0., 1., 2.;
        0., 3., 4.;
        0., 5., 6.;
    ];
    let mut b = dvector![1., 2., 3.];

    assert_matches!(
        factorize(&mut A, &mut b),
        Err(SystemError::SingularMatrix { column: 0 })
    );
}

#[test]
#[allow(non_snake_case)]
fn singularity_surfacing_in_a_later_column_is_detected() {
    // row 2 is the sum of rows 0 and 1, so elimination zeroes out
    // everything below the diagonal of column 1 as well as its pivot
    let mut A = dmatrix![
        1., 2., 3.;
        2., 4., 6.;
        3., 6., 9.;
    ];
    let mut b = dvector![1., 2., 3.];

    let result = factorize(&mut A, &mut b);
    assert_matches!(result, Err(SystemError::SingularMatrix { .. }));
}

#[test]
#[allow(non_snake_case)]
fn forward_elimination_applies_unit_lower_factor() {
    // a is already in combined LU form with L = [[1,0],[2,1]]
    let A = dmatrix![
        5., 7.;
        2., 3.;
    ];
    let mut b = dvector![1., 4.];

    forward_eliminate(&A, &mut b);

    assert_relative_eq!(b, dvector![1., 2.], epsilon = 1e-12);
}

#[test]
#[allow(non_snake_case)]
fn back_substitution_solves_upper_triangular_system() {
    let A = dmatrix![
        9., 9., 2.;
        0., 2., 5.;
        0., 0., 8.;
    ];
    let mut b = dvector![106., 54., 64.];

    back_substitute(&A, &mut b).unwrap();

    assert_relative_eq!(b, dvector![3., 7., 8.], epsilon = 1e-12);
}

#[test]
#[allow(non_snake_case)]
fn back_substitution_rejects_exactly_zero_diagonal() {
    let A = dmatrix![
        1., 2.;
        0., 0.;
    ];
    let mut b = dvector![1., 1.];

    assert_matches!(
        back_substitute(&A, &mut b),
        Err(SystemError::SingularMatrix { column: 1 })
    );
}

#[test]
#[allow(non_snake_case)]
fn one_by_one_system_needs_no_elimination() {
    let mut A = dmatrix![4.];
    let mut b = dvector![8.];

    factorize(&mut A, &mut b).unwrap();
    forward_eliminate(&A, &mut b);
    back_substitute(&A, &mut b).unwrap();

    assert_relative_eq!(b[0], 2., epsilon = 1e-12);
}
