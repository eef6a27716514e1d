mod chart;
mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use log::info;
use num_traits::{AsPrimitive, Float};
use options::Cli;
use serde::Serialize;
use std::str::FromStr;
use topogrid::Grid;
use transect::Profile;

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    env_logger::init();

    if cli.use_f32 {
        run::<f32>(&cli)
    } else {
        run::<f64>(&cli)
    }
}

fn run<T>(cli: &Cli) -> Result<(), AnyError>
where
    T: Float + FromStr + AsPrimitive<f64> + AsPrimitive<f32> + Serialize,
{
    let grid: Grid<T> = match &cli.input {
        Some(path) => {
            let grid = Grid::load(path)?;
            info!(
                "loaded {}x{} grid from {}",
                grid.rows(),
                grid.cols(),
                path.display()
            );
            grid
        }
        None => {
            let grid = Grid::fetch(&cli.url)?;
            info!("fetched {}x{} grid from {}", grid.rows(), grid.cols(), cli.url);
            grid
        }
    };

    let profiles = Profile::extract_all(&grid)?;

    if cli.json {
        println!("{}", to_json(&profiles)?);
        return Ok(());
    }

    chart::render(&profiles, &cli.out)?;
    info!("wrote {}", cli.out.display());

    if cli.display {
        chart::ascii(&profiles);
    }

    Ok(())
}

fn to_json<T>(profiles: &[Profile<T>; 3]) -> Result<String, AnyError>
where
    T: Float + Serialize,
{
    #[derive(Serialize)]
    struct JsonEntry<'a, T> {
        label: &'static str,
        elevations: &'a [T],
    }

    let reshaped: Vec<JsonEntry<'_, T>> = profiles
        .iter()
        .map(|profile| JsonEntry {
            label: profile.line.label(),
            elevations: &profile.elevations,
        })
        .collect();
    Ok(serde_json::to_string(&reshaped)?)
}

#[cfg(test)]
mod tests {
    use super::{options::Cli, to_json};
    use clap::Parser;
    use topogrid::Grid;
    use transect::Profile;

    #[test]
    fn test_json_output_shape() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let profiles = Profile::extract_all(&grid).unwrap();
        let json = to_json(&profiles).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["label"], "North");
        assert_eq!(entries[1]["label"], "South");
        assert_eq!(entries[2]["label"], "Mid");
        assert_eq!(entries[0]["elevations"][1], 2.0);
        assert_eq!(entries[2]["elevations"][0], 3.0);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["topoplot"]);
        assert_eq!(cli.url, "http://bit.ly/csdms_topo");
        assert_eq!(cli.out, std::path::PathBuf::from("profiles.png"));
        assert!(cli.input.is_none());
        assert!(!cli.display);
        assert!(!cli.json);
        assert!(!cli.use_f32);
    }
}
