// Convert Euler angles between cryo-EM software conventions.
// Run with: cargo run -p eulerconv -- dynamo relion -47.273 1.1777 -132.3

use std::env;
use std::error::Error;

use eulerangles::{angles_from_flat, convert_eulers_with, ConventionRegistry};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: eulerconv <source> <target> <a> <b> <c> [<a> <b> <c> ...]
       eulerconv list

<source> and <target> are convention names (see `eulerconv list`).
Angles are in degrees. Converted triples are printed as a JSON array.

environment:
  EULERCONV_CONVENTIONS  JSON file of extra conventions, merged over the built-ins
  RUST_LOG               log filter, defaults to warn";

/// Built-in conventions, plus any from `EULERCONV_CONVENTIONS`.
fn load_registry() -> Result<ConventionRegistry, Box<dyn Error>> {
    let mut registry = ConventionRegistry::builtin();
    if let Ok(path) = env::var("EULERCONV_CONVENTIONS") {
        let extra = ConventionRegistry::from_path(&path)?;
        info!("Loaded {} conventions from {}", extra.len(), path);
        registry.merge(extra);
    }
    Ok(registry)
}

fn parse_angles(values: &[String]) -> Result<Vec<[f64; 3]>, Box<dyn Error>> {
    let values = values
        .iter()
        .map(|v| {
            v.parse::<f64>()
                .map_err(|e| format!("'{}' is not an angle: {}", v, e))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    Ok(angles_from_flat(&values)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let registry = load_registry()?;

    match args.as_slice() {
        [command] if command == "list" => {
            println!("{}", registry.to_json()?);
        }
        [command] if command == "-h" || command == "--help" || command == "help" => {
            println!("{}", USAGE);
        }
        [source, target, angles @ ..] if !angles.is_empty() => {
            let angles = parse_angles(angles)?;
            debug!("Converting {} triples from {} to {}", angles.len(), source, target);
            let converted =
                convert_eulers_with(&angles, source.as_str(), target.as_str(), &registry)?;
            println!("{}", serde_json::to_string(&converted)?);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_angles() {
        let angles = parse_angles(&strings(&["-47.273", "1.1777", "-132.3", "0", "90", "180"])).unwrap();
        assert_eq!(angles, vec![[-47.273, 1.1777, -132.3], [0.0, 90.0, 180.0]]);
    }

    #[test]
    fn test_parse_angles_rejects_bad_input() {
        assert!(parse_angles(&strings(&["1", "2"])).is_err());
        assert!(parse_angles(&strings(&["1", "two", "3"])).is_err());
    }
}
