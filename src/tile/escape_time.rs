//! Escape-time sampler over a generic algebra.

use std::marker::PhantomData;

use tracing::debug;

use crate::algebra::{Element, Field, ProductTensor};

use super::data::TileData;
use super::error::SampleError;
use super::request::SampleRequest;
use super::sampler::TileSampler;

/// Samples the iterated map `z ← z·z + c` over the algebra with structure
/// tensor `T`.
///
/// For every grid cell the constant `c` is the linear image of the cell onto
/// the (precision-normalized) sample rectangle: the first two components
/// take the mapped x/y coordinates and any further components stay zero.
/// The iterate starts at the algebra's zero element and runs until the
/// squared magnitude of its first two components exceeds the squared escape
/// radius, or the iteration cap is reached. All arithmetic happens at the
/// request's bit precision, and the escape comparison uses the field's
/// native ordered comparison.
pub struct EscapeTimeSampler<T, const N: usize = 2> {
    tensor: PhantomData<T>,
}

impl<T, const N: usize> EscapeTimeSampler<T, N> {
    /// Creates a sampler for the algebra with tensor `T`.
    pub fn new() -> Self {
        Self {
            tensor: PhantomData,
        }
    }
}

impl<T, const N: usize> Default for EscapeTimeSampler<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, T, const N: usize> TileSampler<F> for EscapeTimeSampler<T, N>
where
    F: Field,
    T: ProductTensor<N>,
{
    fn sample(&self, request: &SampleRequest<F>) -> Result<TileData, SampleError> {
        if N < 2 {
            return Err(SampleError::InvalidArgument(format!(
                "escape-time sampling needs an algebra of dimension >= 2, got {}",
                N
            )));
        }

        debug!(
            grid_x = request.grid_x(),
            grid_y = request.grid_y(),
            precision = request.precision(),
            iterations_limit = request.iterations_limit(),
            "sampling tile"
        );

        let precision = request.precision();
        let mut rectangle = request.rectangle().clone();
        rectangle.set_precision(precision);

        let mut data = TileData::sized_for(request);

        // Squared escape radius, computed once at the request precision.
        let mut radius_sq = request.escape_radius().clone();
        radius_sq.set_precision(precision);
        let radius = radius_sq.clone();
        radius_sq *= &radius;

        // Axis spans of the sample rectangle.
        let mut span_x = rectangle.top_right.x.clone();
        span_x -= &rectangle.bottom_left.x;
        let mut span_y = rectangle.top_right.y.clone();
        span_y -= &rectangle.bottom_left.y;

        let limit = request.iterations_limit();

        for x in 0..request.grid_x() {
            let mut cell_x = span_x.clone();
            cell_x *= &F::from_f64(x as f64 / request.grid_x() as f64, precision);
            cell_x += &rectangle.bottom_left.x;

            for y in 0..request.grid_y() {
                let mut cell_y = span_y.clone();
                cell_y *= &F::from_f64(y as f64 / request.grid_y() as f64, precision);
                cell_y += &rectangle.bottom_left.y;

                let mut constant = Element::<F, T, N>::zero(precision);
                *constant.component_mut(0) = cell_x.clone();
                *constant.component_mut(1) = cell_y;

                let mut iterate = Element::<F, T, N>::zero(precision);
                let mut escape_step = limit;
                for step in 0..limit {
                    iterate = &iterate * &iterate;
                    iterate.add_assign_element(&constant);

                    let mut magnitude_sq = iterate.component(0).clone();
                    magnitude_sq *= iterate.component(0);
                    let mut imag_sq = iterate.component(1).clone();
                    imag_sq *= iterate.component(1);
                    magnitude_sq += &imag_sq;

                    if magnitude_sq > radius_sq {
                        escape_step = step;
                        break;
                    }
                }
                data.set_escape_count(x, y, escape_step);
            }
        }

        Ok(data)
    }
}
