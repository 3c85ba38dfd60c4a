use crate::math::Spectrum;

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Reflection_Models/Specular_Reflection_and_Transmission
// https://www.pbr-book.org/3ed-2018/Reflection_Models/Fresnel_Incidence_Effects

pub trait Fresnel {
    fn evaluate(&self, cos_theta_i: f32) -> Spectrum<f32>;
}

/// Schlick's approximation, parameterized by the reflectance at normal incidence.
pub struct Schlick {
    f0: Spectrum<f32>,
}

impl Schlick {
    pub fn new(f0: Spectrum<f32>) -> Self {
        Self { f0 }
    }
}

impl Fresnel for Schlick {
    fn evaluate(&self, mut cos_theta_i: f32) -> Spectrum<f32> {
        fn pow5(v: f32) -> f32 {
            (v * v) * (v * v) * v
        }

        cos_theta_i = cos_theta_i.clamp(0.0, 1.0);

        self.f0 + (Spectrum::ones() - self.f0) * pow5(1.0 - cos_theta_i)
    }
}

/// Reflectance at normal incidence of a dielectric with index of refraction `ior` in air.
#[inline]
pub fn f0_from_ior(ior: f32) -> f32 {
    let r = (1.0 - ior) / (1.0 + ior);
    r * r
}
