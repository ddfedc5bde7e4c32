use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::palette::sample_palette;
use crate::core::view::view_state::ViewState;
use std::f64::consts::LN_2;
use std::ops::ControlFlow;

const BAILOUT_SQUARED: f64 = 4.0;

/// Escape-time Julia renderer for one frame.
///
/// Each pixel is supersampled on an `anti_aliasing × anti_aliasing` grid,
/// every sample mapped through the view's coordinate transform.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    view: ViewState,
    canvas: CanvasSize,
    max_iterations: u32,
    anti_aliasing: u32,
    scaling: f64,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = Colour;
    type Failure = JuliaError;

    fn compute(&self, x: u32, y: u32) -> Result<Self::Success, Self::Failure> {
        if !self.canvas.contains(x, y) {
            return Err(JuliaError::PixelOutsideCanvas {
                x,
                y,
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        let samples = self.anti_aliasing;
        let step = 1.0 / f64::from(samples);
        let mut total = [0.0; 3];

        for sample_y in 0..samples {
            for sample_x in 0..samples {
                let point = ScreenPoint {
                    x: f64::from(x) + (f64::from(sample_x) + 0.5) * step - 0.5,
                    y: f64::from(y) + (f64::from(sample_y) + 0.5) * step - 0.5,
                };
                let colour = self.sample(point);

                for (sum, channel) in total.iter_mut().zip(colour) {
                    *sum += channel;
                }
            }
        }

        let count = f64::from(samples * samples);
        Ok(Colour::from_channels(total.map(|sum| sum / count)))
    }

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }
}

impl JuliaAlgorithm {
    pub fn new(
        view: ViewState,
        canvas: CanvasSize,
        max_iterations: u32,
        anti_aliasing: u32,
        scaling: f64,
    ) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if anti_aliasing == 0 {
            return Err(JuliaError::ZeroAntiAliasingError);
        }

        if canvas.is_empty() {
            return Err(JuliaError::EmptyCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }

        Ok(Self {
            view,
            canvas,
            max_iterations,
            anti_aliasing,
            scaling,
        })
    }

    /// Smooth iteration count at which the orbit of `z` escapes, or `None`
    /// if it stays bounded for `max_iterations`.
    #[must_use]
    pub fn escape_value(&self, z: Complex) -> Option<f64> {
        let c = self.view.focus();

        let outcome = (0..self.max_iterations).try_fold(z, |z0, iteration| {
            if z0.magnitude_squared() > BAILOUT_SQUARED {
                ControlFlow::Break((iteration, z0))
            } else {
                ControlFlow::Continue(z0 * z0 + c)
            }
        });

        match outcome {
            ControlFlow::Break((iteration, escaped)) => {
                let log_modulus = escaped.magnitude_squared().ln() / 2.0;
                let nu = (log_modulus / LN_2).ln() / LN_2;
                Some(f64::from(iteration) + 1.0 - nu)
            }
            ControlFlow::Continue(_) => None,
        }
    }

    fn sample(&self, point: ScreenPoint) -> [f64; 3] {
        let z = self.view.to_plane(point, self.canvas);

        match self.escape_value(z) {
            Some(value) => sample_palette(value * self.scaling),
            None => [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(view: ViewState, anti_aliasing: u32) -> JuliaAlgorithm {
        JuliaAlgorithm::new(view, CanvasSize::new(8, 6), 64, anti_aliasing, 0.02).unwrap()
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        let result = JuliaAlgorithm::new(ViewState::default(), CanvasSize::new(8, 6), 0, 1, 0.02);

        assert_eq!(result, Err(JuliaError::ZeroMaxIterationsError));
    }

    #[test]
    fn zero_anti_aliasing_is_rejected() {
        let result = JuliaAlgorithm::new(ViewState::default(), CanvasSize::new(8, 6), 10, 0, 0.02);

        assert_eq!(result, Err(JuliaError::ZeroAntiAliasingError));
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let result = JuliaAlgorithm::new(ViewState::default(), CanvasSize::new(0, 6), 10, 1, 0.02);

        assert_eq!(
            result,
            Err(JuliaError::EmptyCanvas {
                width: 0,
                height: 6
            })
        );
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_canvas() {
        let result = algorithm(ViewState::default(), 1).compute(8, 0);

        assert_eq!(
            result,
            Err(JuliaError::PixelOutsideCanvas {
                x: 8,
                y: 0,
                width: 8,
                height: 6
            })
        );
    }

    #[test]
    fn origin_stays_bounded_for_zero_constant() {
        let view = ViewState::new(Complex::ZERO, Complex::ZERO, 4.0);

        assert_eq!(algorithm(view, 1).escape_value(Complex::ZERO), None);
    }

    #[test]
    fn far_point_escapes_immediately() {
        let value = algorithm(ViewState::default(), 1).escape_value(Complex::new(10.0, 0.0));

        assert!(value.is_some_and(|v| v < 1.0));
    }

    #[test]
    fn bounded_pixels_are_black() {
        // Zoomed deep into the filled set of c = 0 (the unit disc)
        let view = ViewState::new(Complex::ZERO, Complex::ZERO, 0.01);

        let colour = algorithm(view, 2).compute(4, 2).unwrap();

        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn escaping_pixels_are_coloured() {
        // Window far outside any Julia set: every sample escapes
        let view = ViewState::new(Complex::ZERO, Complex::new(50.0, 50.0), 1.0);

        let colour = algorithm(view, 1).compute(0, 0).unwrap();

        assert_ne!(colour, Colour::BLACK);
    }
}
