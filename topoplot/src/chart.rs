use anyhow::Error as AnyError;
use num_traits::{AsPrimitive, Float};
use plotters::{prelude::*, series::DashedLineSeries};
use std::path::Path;
use textplots::{Chart, Plot, Shape};
use transect::{Profile, Stroke};

const DIMENSIONS: (u32, u32) = (1024, 768);

/// Renders the profiles to a PNG at `out`, overwriting any existing
/// file. Fails if the path is not writable.
pub fn render<T, P>(profiles: &[Profile<T>; 3], out: P) -> Result<(), AnyError>
where
    T: Float + AsPrimitive<f64>,
    P: AsRef<Path>,
{
    let root = BitMapBackend::new(out.as_ref(), DIMENSIONS).into_drawing_area();
    root.fill(&WHITE)?;

    #[allow(clippy::cast_precision_loss)]
    let x_max = profiles[0].len().saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = value_range(profiles);

    let mut chart = ChartBuilder::on(&root)
        .caption("Topographic profiles", ("sans-serif", 30))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("<-- West    East -->")
        .y_desc("Elevation (m)")
        .draw()?;

    for profile in profiles {
        let style = profile.line.style();
        let (r, g, b) = style.color;
        let stroke = RGBColor(r, g, b).stroke_width(style.width);
        let points = series_points(profile);
        let anno = match style.stroke {
            Stroke::Solid => chart.draw_series(LineSeries::new(points, stroke))?,
            Stroke::Dashed => chart.draw_series(DashedLineSeries::new(points, 10, 6, stroke))?,
            // Short dashes packed tight read as a dotted line.
            Stroke::Dotted => chart.draw_series(DashedLineSeries::new(points, 2, 5, stroke))?,
        };
        anno.label(profile.line.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.4))
        .position(SeriesLabelPosition::LowerLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draws the profiles as a Braille chart in the terminal.
pub fn ascii<T>(profiles: &[Profile<T>; 3])
where
    T: Float + AsPrimitive<f32>,
{
    let to_points = |profile: &Profile<T>| -> Vec<(f32, f32)> {
        profile
            .elevations
            .iter()
            .enumerate()
            .map(|(idx, elevation)| (idx as f32, elevation.as_()))
            .collect()
    };
    let north = to_points(&profiles[0]);
    let south = to_points(&profiles[1]);
    let mid = to_points(&profiles[2]);

    #[allow(clippy::cast_precision_loss)]
    let x_max = profiles[0].len().saturating_sub(1).max(1) as f32;
    Chart::new(300, 150, 0.0, x_max)
        .lineplot(&Shape::Lines(&north))
        .lineplot(&Shape::Lines(&south))
        .lineplot(&Shape::Lines(&mid))
        .display();
}

fn series_points<T>(profile: &Profile<T>) -> Vec<(f64, f64)>
where
    T: Float + AsPrimitive<f64>,
{
    profile
        .elevations
        .iter()
        .enumerate()
        .map(|(idx, elevation)| (idx as f64, elevation.as_()))
        .collect()
}

/// Y range covering every plotted sample, with a little headroom so
/// the extremes don't sit on the frame.
fn value_range<T>(profiles: &[Profile<T>; 3]) -> (f64, f64)
where
    T: Float + AsPrimitive<f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for profile in profiles {
        for sample in &profile.elevations {
            let value: f64 = sample.as_();
            min = min.min(value);
            max = max.max(value);
        }
    }
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::{render, value_range};
    use topogrid::Grid;
    use transect::Profile;

    fn profiles() -> [Profile<f64>; 3] {
        let grid = Grid::from_rows(vec![
            vec![10.0, 20.0, 30.0],
            vec![40.0, 50.0, 60.0],
            vec![70.0, 80.0, 90.0],
        ])
        .unwrap();
        Profile::extract_all(&grid).unwrap()
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("profiles.png");
        render(&profiles(), &out).unwrap();
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn test_render_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("profiles.png");
        assert!(render(&profiles(), &out).is_err());
    }

    #[test]
    fn test_value_range_covers_all_profiles() {
        let (min, max) = value_range(&profiles());
        assert!(min < 10.0);
        assert!(max > 90.0);
    }
}
