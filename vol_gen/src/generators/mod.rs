//! Sample generators for synthetic channel volumes

use std::{error::Error, io::Write};

use byteorder::{ByteOrder, LittleEndian};
use indicatif::ProgressBar;
use nalgebra::{vector, Vector3};
use rayon::prelude::*;
use volshow_lib::channel::CoordIterator;

use crate::{
    config::{Config, GeneratorConfig, SampleKind},
    file::open_create_file,
    header::generate_header,
};

mod noise;
mod shapes;
mod solid;

/// Generates one sample at a time, at any location
/// Samples are normalized to <0;1>
pub trait SampleGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> f32;
}

pub fn get_sample_generator(config: &Config, channel: u32) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Solid { sample } => Box::new(solid::SolidGenerator::new(sample)),
        GeneratorConfig::Shapes { .. } => Box::new(shapes::ShapesGenerator::from_config(config, channel)),
        GeneratorConfig::Noise => Box::new(noise::NoiseGenerator::new(config.seed + channel as u64)),
    }
}

/// Generates all channels and writes the csvf file.
///
/// Channels are independent, so they are generated in parallel and
/// written out in channel order afterwards.
pub fn generate_channels(cfg: Config) -> Result<(), Box<dyn Error>> {
    let mut file = open_create_file(&cfg.file_name)?;

    let header = generate_header(&cfg);
    let written = file.write(&header[..])?;
    if written != header.len() {
        return Err("Writing header error".into());
    }

    let voxels = cfg.dims.x as u64 * cfg.dims.y as u64 * cfg.dims.z as u64;
    let progress = ProgressBar::new(cfg.channels as u64 * voxels);

    let channels: Vec<Vec<u8>> = (0..cfg.channels)
        .into_par_iter()
        .map(|channel| {
            let generator = get_sample_generator(&cfg, channel);
            let bytes = generate_channel(generator.as_ref(), &cfg);
            progress.inc(voxels);
            bytes
        })
        .collect();

    for bytes in channels {
        file.write_all(&bytes)?;
    }
    progress.finish();

    println!("Generating finished");
    Ok(())
}

fn generate_channel(generator: &dyn SampleGenerator, cfg: &Config) -> Vec<u8> {
    let dims = cfg.dims.map(|v| v as usize);
    let mut samples = Vec::with_capacity(dims.x * dims.y * dims.z);

    for coords in CoordIterator::from_dims(dims) {
        let coords = vector![coords.x as u32, coords.y as u32, coords.z as u32];
        samples.push(generator.sample_at(coords));
    }

    quantize(&samples, cfg.kind)
}

/// Normalized samples to on-disk bytes, little-endian.
fn quantize(samples: &[f32], kind: SampleKind) -> Vec<u8> {
    match kind {
        SampleKind::U8 => samples
            .iter()
            .map(|s| (s.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect(),
        SampleKind::U16 => {
            let wide: Vec<u16> = samples
                .iter()
                .map(|s| (s.clamp(0.0, 1.0) * 65535.0).round() as u16)
                .collect();
            volshow_lib::render::pack_u16_le(&wide)
        }
        SampleKind::F32 => {
            let mut bytes = vec![0_u8; samples.len() * 4];
            LittleEndian::write_f32_into(samples, &mut bytes);
            bytes
        }
    }
}
