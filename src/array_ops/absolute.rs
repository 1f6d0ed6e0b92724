//! Element-wise absolute value

use crate::error::Result;
use crate::ops::TensorOps;
use crate::poly::PolyArray;

/// Absolute value of every coefficient
pub(crate) fn absolute_impl<C: TensorOps>(client: &C, a: &PolyArray) -> Result<PolyArray> {
    a.with_coefficients(client.abs(a.coefficients())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuClient;
    use crate::tensor::Tensor;

    #[test]
    fn test_absolute_coefficients() {
        let client = CpuClient::new();
        let terms = vec![
            (vec![0u32], Tensor::<f64>::from_slice(&[-1.2, 1.2, 0.0, 0.0], &[4])),
            (vec![1u32], Tensor::<f64>::from_slice(&[0.0, 0.0, -2.3, 2.3], &[4])),
        ];
        let p = PolyArray::from_terms(&terms, Some(&["q0"])).unwrap();
        let abs = absolute_impl(&client, &p).unwrap();
        assert_eq!(
            abs.coefficients().to_vec(),
            vec![1.2, 1.2, 0.0, 0.0, 0.0, 0.0, 2.3, 2.3]
        );
    }
}
