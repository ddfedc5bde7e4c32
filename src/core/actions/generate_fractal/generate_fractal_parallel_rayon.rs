use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are computed as independent tasks and flattened back into row-major
/// order. The first failing pixel aborts the whole frame.
pub fn generate_fractal_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let canvas = algorithm.canvas();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..canvas.height)
        .into_par_iter()
        .map(|y| {
            (0..canvas.width)
                .map(|x| algorithm.compute(x, y))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "stub failure")
        }
    }

    impl std::error::Error for StubError {}

    struct IndexAlgorithm {
        canvas: CanvasSize,
        fail_at: Option<(u32, u32)>,
    }

    impl FractalAlgorithm for IndexAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, x: u32, y: u32) -> Result<u32, StubError> {
            if self.fail_at == Some((x, y)) {
                return Err(StubError);
            }
            Ok(y * self.canvas.width + x)
        }

        fn canvas(&self) -> CanvasSize {
            self.canvas
        }
    }

    #[test]
    fn results_are_row_major() {
        let algorithm = IndexAlgorithm {
            canvas: CanvasSize::new(5, 4),
            fail_at: None,
        };

        let result = generate_fractal_parallel_rayon(&algorithm).unwrap();

        assert_eq!(result, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn algorithm_failure_is_propagated() {
        let algorithm = IndexAlgorithm {
            canvas: CanvasSize::new(5, 4),
            fail_at: Some((3, 2)),
        };

        assert_eq!(generate_fractal_parallel_rayon(&algorithm), Err(StubError));
    }
}
