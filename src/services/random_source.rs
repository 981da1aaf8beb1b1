//! Fuente de aleatoriedad para los datos simulados
//!
//! Todos los sintetizadores reciben la fuente como parámetro explícito,
//! así los tests pueden sustituirla por una fuente determinista.

use std::ops::{Range, RangeInclusive};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Contrato mínimo de muestreo usado por los sintetizadores
pub trait RandomSource: Send {
    /// Entero uniforme en `[min, max]` (inclusivo)
    fn random_int(&mut self, min: u32, max: u32) -> u32;

    /// Real uniforme en `[min, max)`
    fn random_float(&mut self, min: f64, max: f64) -> f64;

    fn int_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.random_int(*range.start(), *range.end())
    }

    fn float_in(&mut self, range: Range<f64>) -> f64 {
        self.random_float(range.start, range.end)
    }
}

/// Elegir un elemento uniforme de una lista no vacía
pub fn pick<R, T>(rng: &mut R, items: &[T]) -> T
where
    R: RandomSource + ?Sized,
    T: Copy,
{
    let last = items.len().saturating_sub(1) as u32;
    items[rng.random_int(0, last) as usize]
}

/// Fuente por defecto basada en `StdRng`
#[derive(Debug, Clone)]
pub struct FixtureRng {
    inner: StdRng,
}

impl FixtureRng {
    /// Fuente no reproducible, sembrada desde la entropía del sistema
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Fuente reproducible a partir de una semilla
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for FixtureRng {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    fn random_float(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..max)
    }
}

/// Fuentes deterministas para tests
#[cfg(test)]
pub mod testing {
    use super::RandomSource;

    /// Siempre devuelve el límite inferior
    pub struct MinSource;

    impl RandomSource for MinSource {
        fn random_int(&mut self, min: u32, _max: u32) -> u32 {
            min
        }

        fn random_float(&mut self, min: f64, _max: f64) -> f64 {
            min
        }
    }

    /// Siempre devuelve el límite superior (o el mayor valor por debajo en floats)
    pub struct MaxSource;

    impl RandomSource for MaxSource {
        fn random_int(&mut self, _min: u32, max: u32) -> u32 {
            max
        }

        fn random_float(&mut self, min: f64, max: f64) -> f64 {
            if max <= min {
                min
            } else {
                max - f64::EPSILON * max.abs().max(1.0)
            }
        }
    }
}
