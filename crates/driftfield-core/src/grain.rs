use crate::constants::{GRAIN_ALPHA_MAX, GRAIN_ALPHA_MIN, GRAIN_LUMA_MID, GRAIN_LUMA_SPAN};
use rand::Rng;

/// Square RGBA noise bitmap: random gray luminance with a low random alpha.
/// Generated once per mount and only read afterwards.
pub struct GrainTexture {
    edge: u32,
    pixels: Vec<[u8; 4]>,
}

impl GrainTexture {
    pub fn generate<R: Rng + ?Sized>(edge: u32, rng: &mut R) -> Self {
        let count = edge as usize * edge as usize;
        let pixels = (0..count)
            .map(|_| {
                let v = (GRAIN_LUMA_MID + (rng.gen::<f32>() - 0.5) * GRAIN_LUMA_SPAN) as u8;
                let a = rng.gen_range(GRAIN_ALPHA_MIN..=GRAIN_ALPHA_MAX);
                [v, v, v, a]
            })
            .collect();
        Self { edge, pixels }
    }

    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Row-major RGBA bytes, ready for an `ImageData`.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pixels_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let grain = GrainTexture::generate(32, &mut rng);
        assert_eq!(grain.as_bytes().len(), 32 * 32 * 4);
        for px in &grain.pixels {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert!((98..=158).contains(&px[0]));
            assert!((GRAIN_ALPHA_MIN..=GRAIN_ALPHA_MAX).contains(&px[3]));
        }
    }
}
