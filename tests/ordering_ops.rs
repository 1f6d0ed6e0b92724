//! Integration tests for monomial ordering and the sortable proxy
//!
//! Tests verify:
//! - order: ranks under every ordering mode
//! - sortable_proxy: dense ranks consistent with element comparison
//! - Property: the proxy agrees with pairwise minimum and maximum

use numpoly::error::Error;
use numpoly::prelude::*;
use numpoly::poly::{argsort_monomials, order, stack};
use proptest::prelude::*;

mod common;

use common::{assert_poly_eq, constant, create_client, poly, sym};

// ============================================================================
// Monomial ranks
// ============================================================================

#[test]
fn test_graded_reverse_ranks() {
    let gr = MonomialOrdering::GradedReverse;
    assert_eq!(order(&[[1, 0], [2, 0]], gr), vec![0, 1]);
    assert_eq!(order(&[[2, 0], [1, 1]], gr), vec![0, 1]);
    // y ranks above x
    assert_eq!(order(&[[0, 1], [1, 0]], gr), vec![1, 0]);

    let basis = [[0, 0], [1, 0], [0, 1], [2, 0], [1, 1], [0, 2]];
    assert_eq!(argsort_monomials(&basis, gr), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_ordering_modes() {
    let basis = [[0, 2], [1, 0], [1, 1]];
    assert_eq!(order(&basis, MonomialOrdering::Lexicographic), vec![0, 1, 2]);
    assert_eq!(
        order(&basis, MonomialOrdering::ReverseLexicographic),
        vec![2, 0, 1]
    );
    assert_eq!(order(&basis, MonomialOrdering::Graded), vec![1, 0, 2]);
    assert_eq!(order(&basis, MonomialOrdering::GradedReverse), vec![2, 0, 1]);
}

#[test]
fn test_ordering_from_str() {
    assert_eq!(
        "gr".parse::<MonomialOrdering>().unwrap(),
        MonomialOrdering::GradedReverse
    );
    assert_eq!(
        "RG".parse::<MonomialOrdering>().unwrap(),
        MonomialOrdering::GradedReverse
    );
    assert_eq!(
        "L".parse::<MonomialOrdering>().unwrap(),
        MonomialOrdering::Lexicographic
    );
    assert_eq!(MonomialOrdering::default().to_string(), "GR");
    assert!(matches!(
        "X".parse::<MonomialOrdering>(),
        Err(Error::InvalidArgument { .. })
    ));
}

// ============================================================================
// Sortable proxy
// ============================================================================

#[test]
fn test_proxy_dense_ranks() {
    let client = create_client();
    let one = constant(&[1.0], &[]);
    let x = sym("x");
    let y = sym("y");
    let items = stack(&[&y, &one, &x, &one]).unwrap();
    let proxy = client
        .sortable_proxy(&items, MonomialOrdering::GradedReverse)
        .unwrap();
    assert_eq!(proxy.to_vec(), vec![2, 0, 1, 0]);
}

#[test]
fn test_proxy_zero_between_signs() {
    // [x, 0, -x, 2, -2]
    let client = create_client();
    let items = poly(
        &[
            (&[0], &[0.0, 0.0, 0.0, 2.0, -2.0]),
            (&[1], &[1.0, 0.0, -1.0, 0.0, 0.0]),
        ],
        &[5],
        &["x"],
    );
    let proxy = client
        .sortable_proxy(&items, MonomialOrdering::GradedReverse)
        .unwrap();
    // -x < -2 < 0 < 2 < x
    assert_eq!(proxy.to_vec(), vec![4, 2, 0, 3, 1]);
}

#[test]
fn test_proxy_keeps_shape() {
    let client = create_client();
    let grid = poly(
        &[(&[1], &[3.0, 1.0, 2.0, 4.0])],
        &[2, 2],
        &["x"],
    );
    let proxy = client
        .sortable_proxy(&grid, MonomialOrdering::GradedReverse)
        .unwrap();
    assert_eq!(proxy.shape(), &[2, 2]);
    assert_eq!(proxy.to_vec(), vec![2, 0, 1, 3]);
}

// ============================================================================
// Property tests
// ============================================================================

const BASIS: [[u32; 2]; 6] = [[0, 0], [1, 0], [0, 1], [2, 0], [1, 1], [0, 2]];

fn scalar_poly(coefficients: &[i8]) -> PolyArray {
    let terms: Vec<(Vec<u32>, Tensor<f64>)> = BASIS
        .iter()
        .zip(coefficients)
        .map(|(e, &c)| (e.to_vec(), Tensor::scalar(f64::from(c))))
        .collect();
    PolyArray::from_terms(&terms, Some(&["x", "y"])).unwrap()
}

proptest! {
    #[test]
    fn prop_proxy_agrees_with_minimum(
        ca in prop::collection::vec(-2i8..=2, 6),
        cb in prop::collection::vec(-2i8..=2, 6),
    ) {
        let client = create_client();
        let a = scalar_poly(&ca);
        let b = scalar_poly(&cb);

        let proxy = client
            .sortable_proxy(&stack(&[&a, &b]).unwrap(), MonomialOrdering::GradedReverse)
            .unwrap()
            .to_vec();
        let low = client.poly_minimum(&a, &b).unwrap();
        let high = client.poly_maximum(&a, &b).unwrap();

        let (expected_low, expected_high) = if proxy[0] <= proxy[1] { (&a, &b) } else { (&b, &a) };
        assert_poly_eq(&client, &low, expected_low, "minimum");
        assert_poly_eq(&client, &high, expected_high, "maximum");
        prop_assert_eq!(proxy[0] == proxy[1], client.poly_equal(&a, &b).unwrap().item().unwrap());
    }

    #[test]
    fn prop_graded_reverse_is_total(
        a in prop::collection::vec(0u32..4, 3),
        b in prop::collection::vec(0u32..4, 3),
    ) {
        let gr = MonomialOrdering::GradedReverse;
        prop_assert_eq!(gr.compare(&a, &b), gr.compare(&b, &a).reverse());
        prop_assert_eq!(gr.compare(&a, &b).is_eq(), a == b);
    }
}
