use nalgebra::Vector3;

use super::SampleGenerator;

/// Generates the same sample everywhere
pub struct SolidGenerator {
    sample: f32,
}

impl SolidGenerator {
    pub fn new(sample: f32) -> SolidGenerator {
        SolidGenerator { sample }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, _coords: Vector3<u32>) -> f32 {
        self.sample
    }
}

#[cfg(test)]
mod test {

    use nalgebra::vector;

    use super::*;

    #[test]
    fn constant_everywhere() {
        let gen = SolidGenerator::new(0.25);
        assert_eq!(gen.sample_at(vector![0, 0, 0]), 0.25);
        assert_eq!(gen.sample_at(vector![100, 2, 77]), 0.25);
    }
}
