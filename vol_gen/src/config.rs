use std::path::PathBuf;

use clap::ArgMatches;
use nalgebra::{vector, Vector3};

/// Sample kinds the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    U8,
    U16,
    F32,
}

impl SampleKind {
    pub fn bytes_per_sample(&self) -> u8 {
        match self {
            SampleKind::U8 => 1,
            SampleKind::U16 => 2,
            SampleKind::F32 => 4,
        }
    }

    fn from_name(name: &str) -> Result<SampleKind, String> {
        match name {
            "u8" => Ok(SampleKind::U8),
            "u16" => Ok(SampleKind::U16),
            "f32" => Ok(SampleKind::F32),
            _ => Err(format!("Unknown sample kind: {name}")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum GeneratorConfig {
    Solid { sample: f32 },
    Shapes { n_of_shapes: u32, sample: f32 },
    Noise,
}

#[derive(Debug)]
pub struct Config {
    pub dims: Vector3<u32>,
    pub kind: SampleKind,
    pub channels: u32,
    pub generator: GeneratorConfig,
    pub seed: u64,
    pub file_name: PathBuf,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        // values went through clap validators, parses cannot fail
        let dims: Vec<u32> = args
            .values_of("dims")
            .ok_or("No dimensions")?
            .map(|v| v.parse().unwrap())
            .collect();
        let dims = vector![dims[0], dims[1], dims[2]];

        let kind = SampleKind::from_name(args.value_of("kind").ok_or("No sample kind")?)?;

        let channels: u32 = args.value_of("channels").ok_or("No channel count")?.parse().unwrap();
        if channels > u8::MAX as u32 {
            return Err("At most 255 channels fit the file header".into());
        }

        let sample: f32 = args.value_of("sample").ok_or("No sample value")?.parse().unwrap();

        let generator = match args.value_of("generator").ok_or("No generator")? {
            "solid" => GeneratorConfig::Solid { sample },
            "shapes" => {
                let n_of_shapes = args.value_of("shapes").ok_or("No shape count")?.parse().unwrap();
                GeneratorConfig::Shapes { n_of_shapes, sample }
            }
            "noise" => GeneratorConfig::Noise,
            g => return Err(format!("Unknown generator: {g}")),
        };

        let seed = match args.value_of("seed") {
            Some(s) => s.parse::<u32>().unwrap() as u64,
            None => 42,
        };

        let file_name = PathBuf::from(args.value_of("output-file").ok_or("No output file")?);

        Ok(Config {
            dims,
            kind,
            channels,
            generator,
            seed,
            file_name,
        })
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::args::get_command;

    #[test]
    fn config_from_full_command_line() {
        let args = get_command()
            .try_get_matches_from([
                "Vol-gen",
                "--dims=10,20,30",
                "-g",
                "shapes",
                "--shapes",
                "5",
                "-k",
                "u16",
                "-c",
                "3",
                "--seed",
                "7",
                "-o",
                "out.csvf",
            ])
            .unwrap();

        let cfg = Config::from_args(args).unwrap();

        assert_eq!(cfg.dims, vector![10, 20, 30]);
        assert_eq!(cfg.kind, SampleKind::U16);
        assert_eq!(cfg.channels, 3);
        assert_eq!(cfg.seed, 7);
        assert!(matches!(
            cfg.generator,
            GeneratorConfig::Shapes { n_of_shapes: 5, .. }
        ));
    }

    #[test]
    fn too_many_channels_rejected() {
        let args = get_command()
            .try_get_matches_from(["Vol-gen", "--dims=2,2,2", "-g", "solid", "-c", "300"])
            .unwrap();

        assert!(Config::from_args(args).is_err());
    }
}
