//! Integration tests for polynomial array construction
//!
//! Tests verify:
//! - build: every rejection kind of the construction gate
//! - Default names and the options controlling pruning
//! - Convenience constructors agree with `build`

use numpoly::error::{ConstructionError, Error};
use numpoly::poly::{ConstructionOptions, ExponentGrid, PolyArray, build, build_with};
use numpoly::tensor::Tensor;

mod common;

use common::{assert_poly_eq, create_client, sym};

fn construction_error(result: numpoly::error::Result<PolyArray>) -> ConstructionError {
    match result {
        Err(Error::Construction(kind)) => kind,
        other => panic!("expected a construction error, got {other:?}"),
    }
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_duplicate_exponents_rejected() {
    let grid = ExponentGrid::from_rows(&[[1], [1]]).unwrap();
    let coefficients = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);
    let err = construction_error(build(&grid, &coefficients, None));
    assert_eq!(
        err,
        ConstructionError::DuplicateExponents { exponent: vec![1] }
    );
}

#[test]
fn test_exponent_rank_rejected() {
    let coefficients = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);

    let flat = ExponentGrid::univariate(&[0, 1]);
    let err = construction_error(build(&flat, &coefficients, None));
    assert_eq!(err, ConstructionError::ExponentRankTooLow { ndim: 1 });

    let cube = ExponentGrid::new(vec![0, 1], &[2, 1, 1]).unwrap();
    let err = construction_error(build(&cube, &coefficients, None));
    assert_eq!(err, ConstructionError::ExponentRankTooHigh { ndim: 3 });
}

#[test]
fn test_length_mismatch_rejected() {
    let grid = ExponentGrid::from_rows(&[[0], [1], [2]]).unwrap();
    let coefficients = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);
    let err = construction_error(build(&grid, &coefficients, None));
    assert_eq!(
        err,
        ConstructionError::LengthMismatch {
            exponents: 3,
            coefficients: 2
        }
    );
}

#[test]
fn test_names_rejected() {
    let grid = ExponentGrid::from_rows(&[[1, 0], [0, 1]]).unwrap();
    let coefficients = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);

    let err = construction_error(build(&grid, &coefficients, Some(&["x"])));
    assert_eq!(
        err,
        ConstructionError::NamesLengthMismatch {
            names: 1,
            columns: 2
        }
    );

    let err = construction_error(build(&grid, &coefficients, Some(&["x", "x"])));
    assert_eq!(
        err,
        ConstructionError::DuplicateNames {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_grid_size_checked() {
    let err = ExponentGrid::new(vec![0, 1, 2], &[2, 2]).unwrap_err();
    assert!(matches!(
        err,
        Error::Construction(ConstructionError::GridSizeMismatch {
            expected: 4,
            got: 3,
            ..
        })
    ));
}

// ============================================================================
// Names and cleaning
// ============================================================================

#[test]
fn test_default_names() {
    let grid = ExponentGrid::from_rows(&[[1, 0], [0, 1]]).unwrap();
    let coefficients = Tensor::<f64>::from_slice(&[1.0, 2.0], &[2]);
    let p = build(&grid, &coefficients, None).unwrap();
    assert_eq!(p.names(), &["q0".to_string(), "q1".to_string()]);

    let options = ConstructionOptions::default().with_default_varname("z");
    let p = build_with(&grid, &coefficients, None, &options).unwrap();
    assert_eq!(p.names(), &["z0".to_string(), "z1".to_string()]);
}

#[test]
fn test_vanished_terms_pruned() {
    // 0*x + 2*y over [x, y]
    let grid = ExponentGrid::from_rows(&[[1, 0], [0, 1]]).unwrap();
    let coefficients = Tensor::<f64>::from_slice(&[0.0, 2.0], &[2]);

    let cleaned = build(&grid, &coefficients, Some(&["x", "y"])).unwrap();
    assert_eq!(cleaned.names(), &["y".to_string()]);
    assert_eq!(cleaned.num_terms(), 1);
    assert_eq!(cleaned.exponents()[0].as_slice(), &[1]);

    let kept = build_with(
        &grid,
        &coefficients,
        Some(&["x", "y"]),
        &ConstructionOptions::retaining(),
    )
    .unwrap();
    assert_eq!(kept.names(), &["x".to_string(), "y".to_string()]);
    assert_eq!(kept.num_terms(), 2);

    let client = create_client();
    assert_poly_eq(&client, &cleaned, &kept, "pruning keeps the value");
}

#[test]
fn test_zero_polynomial_keeps_constant_term() {
    let grid = ExponentGrid::from_rows(&[[2]]).unwrap();
    let coefficients = Tensor::<f64>::from_slice(&[0.0, 0.0], &[1, 2]);
    let zero = build(&grid, &coefficients, Some(&["x"])).unwrap();
    assert_eq!(zero.shape(), &[2]);
    assert_eq!(zero.num_terms(), 1);
    assert_eq!(zero.exponents()[0].as_slice(), &[0]);
    assert!(zero.is_constant());
    assert_eq!(zero.to_tensor().unwrap().to_vec(), vec![0.0, 0.0]);
}

#[test]
fn test_array_shape_from_planes() {
    // [[1, x], [x^2, 1 + x]]
    let grid = ExponentGrid::from_rows(&[[0], [1], [2]]).unwrap();
    let coefficients = Tensor::<f64>::from_slice(
        &[1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        &[3, 2, 2],
    );
    let p = build(&grid, &coefficients, Some(&["x"])).unwrap();
    assert_eq!(p.shape(), &[2, 2]);
    assert_eq!(p.size(), 4);
    assert_eq!(p.num_indeterminates(), 1);
    assert_eq!(p.coefficient_plane(2).unwrap().to_vec(), vec![0.0, 0.0, 1.0, 0.0]);
}

// ============================================================================
// Convenience constructors
// ============================================================================

#[test]
fn test_univariate_matches_build() {
    let client = create_client();
    let coefficients = Tensor::<f64>::from_slice(&[1.0, 3.0], &[2]);
    let via_powers = PolyArray::univariate(&[0, 2], &coefficients, Some("t")).unwrap();

    let grid = ExponentGrid::from_rows(&[[0], [2]]).unwrap();
    let via_build = build(&grid, &coefficients, Some(&["t"])).unwrap();
    assert_eq!(via_powers, via_build);
    assert_poly_eq(&client, &via_powers, &via_build, "univariate");
}

#[test]
fn test_variable_and_symbols() {
    let single = PolyArray::variable(1).unwrap();
    assert!(single.shape().is_empty());
    assert_eq!(single, sym("q0"));

    let several = PolyArray::variable(3).unwrap();
    assert_eq!(several.shape(), &[3]);
    assert_eq!(
        several.names(),
        &["q0".to_string(), "q1".to_string(), "q2".to_string()]
    );
    assert_eq!(several.indeterminates().unwrap(), several);
}

#[test]
fn test_from_terms_rejects_repeats() {
    let terms = vec![
        (vec![1u32], Tensor::<f64>::from_slice(&[1.0], &[1])),
        (vec![1u32], Tensor::<f64>::from_slice(&[2.0], &[1])),
    ];
    let err = PolyArray::from_terms(&terms, Some(&["x"])).unwrap_err();
    assert!(matches!(
        err,
        Error::Construction(ConstructionError::DuplicateExponents { .. })
    ));
}
