//! Argument parsing and validation
//! Uses library `clap`

use clap::{Arg, Command, ValueHint};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_normalized_sample(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) => {
            if (0.0..=1.0).contains(&n) {
                Ok(())
            } else {
                Err("Sample must be in range <0;1>".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

const GENERATOR_NAMES: &[&str] = &["solid", "shapes", "noise"];
const KIND_NAMES: &[&str] = &["u8", "u16", "f32"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Vol-gen")
        .version("0.1.0")
        .about("Multi-channel volumetric data generator")
        .arg(
            Arg::new("dims")
                .help("Dimensions of volume")
                .long("dims")
                .short('d')
                .required(true)
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("kind")
                .help("Sample kind of generated data")
                .long("kind")
                .short('k')
                .possible_values(KIND_NAMES)
                .default_value("u8"),
        )
        .arg(
            Arg::new("channels")
                .help("Number of channels")
                .long("channels")
                .short('c')
                .default_value("1")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generated volume")
                .long("generator")
                .short('g')
                .required(true)
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("sample")
                .help("Sample value of generated objects, range <0;1>")
                .long("sample")
                .default_value("1.0")
                .validator(is_normalized_sample),
        )
        .arg(
            Arg::new("shapes")
                .help("Number of shapes per channel (shapes generator)")
                .long("shapes")
                .default_value("20")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for random generators")
                .long("seed")
                .takes_value(true)
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("output-file")
                .help("Name of output file")
                .long("output-file")
                .short('o')
                .takes_value(true)
                .value_hint(ValueHint::FilePath)
                .default_value("volume.csvf"),
        )
}
