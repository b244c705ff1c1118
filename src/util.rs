//! Utility functions for the plotter.

use crate::chart::ChartData;
use crate::clipboard;
use crate::error::{PlotterError, Result};
use crate::plotter::Coordinate;

/// Copy the tooltip text of a charted point to the clipboard.
pub fn copy_point_info(chart: &ChartData<'_>, index: usize) -> Result<String> {
    let text = chart
        .tooltip_label(index)
        .ok_or(PlotterError::NothingToCopy("no point selected"))?;
    clipboard::copy_to_clipboard(&text)?;
    Ok(text)
}

/// Copy every recorded coordinate to the clipboard as a table.
pub fn copy_coordinate_table(coordinates: &[Coordinate]) -> Result<usize> {
    if coordinates.is_empty() {
        return Err(PlotterError::NothingToCopy("no coordinates recorded"));
    }
    clipboard::copy_to_clipboard(&format_coordinate_table(coordinates))?;
    Ok(coordinates.len())
}

/// Render coordinates as a fixed-width table, one row per record.
pub fn format_coordinate_table(coordinates: &[Coordinate]) -> String {
    let mut text = format!("{:>4}  {:>12}  {:>12}  {}\n", "#", "Angle", "Radius", "Time");
    text.push_str(&"=".repeat(60));
    text.push('\n');

    for (i, point) in coordinates.iter().enumerate() {
        text.push_str(&format!(
            "{:>4}  {:>12}  {:>12}  {}\n",
            i + 1,
            point.angle(),
            point.radius(),
            point.time()
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotter::CoordinateList;
    use chrono::NaiveDate;

    #[test]
    fn table_lists_all_records_in_order() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .and_then(|d| d.and_hms_opt(0, 15, 0))
            .unwrap();
        let mut list = CoordinateList::new();
        list.push_at(30.0, 50.0, at);
        list.push_at(-7.5, 100.0, at);

        let table = format_coordinate_table(list.as_slice());
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("Angle"));
        assert_eq!(
            rows[2],
            "   1            30            50  1/2/2026, 12:15:00 AM"
        );
        assert!(rows[3].starts_with("   2          -7.5           100"));
    }

    #[test]
    fn nothing_to_copy() {
        let err = copy_coordinate_table(&[]).unwrap_err();
        assert!(matches!(err, PlotterError::NothingToCopy(_)));

        let list = CoordinateList::new();
        let chart = ChartData::derive(list.as_slice());
        assert!(matches!(
            copy_point_info(&chart, 0),
            Err(PlotterError::NothingToCopy(_))
        ));
    }
}
