//! Polar-area chart rendering on a braille canvas.

use super::{ChartData, ChartOptions, SweepState};
use crate::plotter::{Focus, PlotterView};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Angular distance between rays when filling a sector.
const FILL_STEP: f64 = 0.01;

/// Plot size, in cells, when the chart does not follow the terminal size.
const FIXED_PLOT: (u16, u16) = (60, 20);

/// Extra room around the outer ring, in radius units.
const RIM: f64 = 1.12;

/// Draw the chart panel: legend, plot and tooltip line.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    view: &PlotterView,
    options: &ChartOptions,
    colors: &ThemeColors,
) {
    let chart = view.chart_data();
    let selected = view.selected_point();
    let border = if view.focus == Focus::Chart {
        colors.heading
    } else {
        colors.border
    };
    let block = Block::default()
        .title(" Polar Area ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Legend
            Constraint::Min(3),    // Plot
            Constraint::Length(1), // Tooltip
        ])
        .split(inner);

    draw_legend(f, chunks[0], options);
    draw_plot(
        f,
        plot_area(chunks[1], options),
        &chart,
        options,
        &view.sweep,
        selected,
        colors,
    );
    draw_tooltip(f, chunks[2], &chart, selected, colors);
}

fn draw_legend(f: &mut Frame<'_>, area: Rect, options: &ChartOptions) {
    let legend = Line::from(vec![
        Span::styled("■ ", Style::default().fg(super::POINT_COLOR)),
        Span::styled(
            super::DATASET_LABEL,
            Style::default().fg(options.legend_label_color),
        ),
    ]);
    // The legend sits on a light chip so a dark label color stays readable.
    let paragraph = Paragraph::new(legend)
        .style(Style::default().bg(Color::Gray))
        .alignment(Alignment::Center);
    let width = (super::DATASET_LABEL.len() as u16 + 4).min(area.width);
    let chip = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    f.render_widget(paragraph, chip);
}

/// Shrink the plot region by the configured padding, to a fixed size when
/// the chart is not responsive, and to a square (in physical terms) when the
/// aspect ratio is maintained.
pub fn plot_area(area: Rect, options: &ChartOptions) -> Rect {
    let padded = area.inner(Margin {
        horizontal: options.padding / 10,
        vertical: options.padding / 20,
    });
    let padded = if padded.width == 0 || padded.height == 0 {
        area
    } else {
        padded
    };

    let padded = if options.responsive {
        padded
    } else {
        centered(padded, FIXED_PLOT.0, FIXED_PLOT.1)
    };

    if !options.maintain_aspect_ratio {
        return padded;
    }

    // Terminal cells are about twice as tall as they are wide.
    let side_h = padded.height.min(padded.width / 2);
    centered(padded, side_h * 2, side_h)
}

/// A `width` x `height` rect centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Canvas bounds that keep circles round in a `width` x `height` cell area.
pub fn canvas_bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    if width == 0 || height == 0 {
        return ([-RIM, RIM], [-RIM, RIM]);
    }
    let aspect = f64::from(width) / (2.0 * f64::from(height));
    if aspect >= 1.0 {
        ([-RIM * aspect, RIM * aspect], [-RIM, RIM])
    } else {
        ([-RIM, RIM], [-RIM / aspect, RIM / aspect])
    }
}

/// Start and end angle (radians, counter-clockwise from +x) of sector `index`
/// out of `count`, laid out clockwise from `start_angle` degrees past
/// 12 o'clock.
pub fn sector_span(index: usize, count: usize, start_angle: f64) -> (f64, f64) {
    let step = TAU / count.max(1) as f64;
    let start = FRAC_PI_2 - start_angle.to_radians() - index as f64 * step;
    (start - step, start)
}

fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &ChartData<'_>,
    options: &ChartOptions,
    sweep: &SweepState,
    selected: Option<usize>,
    colors: &ThemeColors,
) {
    let dataset = chart.dataset();
    let min = options.scale_min(&dataset.data);
    let (x_bounds, y_bounds) = canvas_bounds(area.width, area.height);
    let ticks = options.scale.ticks.max(1);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(options.background_color)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (i, (&value, &color)) in dataset
                .data
                .iter()
                .zip(&dataset.background_color)
                .enumerate()
            {
                let color = if selected == Some(i) {
                    colors.heading
                } else {
                    color
                };
                let (from, to) = sector_span(i, dataset.data.len(), options.start_angle);
                fill_sector(ctx, from, to, options.normalize(value, min), color);
            }
            ctx.layer();

            for tick in 1..=ticks {
                let fraction = f64::from(tick) / f64::from(ticks);
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: fraction,
                    color: Color::DarkGray,
                });
                let value = min + (options.scale.max - min) * fraction;
                ctx.print(0.02, fraction, format_tick(value));
            }

            if sweep.is_enabled() {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: sweep.fraction(),
                    color: Color::Cyan,
                });
            }
            ctx.draw(&Points {
                coords: &[(0.0, 0.0)],
                color: Color::Green,
            });

            if chart.is_empty() {
                ctx.print(
                    -0.4,
                    -0.5,
                    Span::styled("No points charted yet", Style::default().fg(colors.text)),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn fill_sector(ctx: &mut Context<'_>, from: f64, to: f64, radius: f64, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let rays = ((to - from) / FILL_STEP).ceil().max(1.0) as usize;
    for ray in 0..=rays {
        let theta = from + (to - from) * ray as f64 / rays as f64;
        ctx.draw(&CanvasLine {
            x1: 0.0,
            y1: 0.0,
            x2: radius * theta.cos(),
            y2: radius * theta.sin(),
            color,
        });
    }
}

fn draw_tooltip(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &ChartData<'_>,
    selected: Option<usize>,
    colors: &ThemeColors,
) {
    let line = match selected.and_then(|i| Some((i, chart.tooltip_label(i)?))) {
        Some((i, text)) => Line::from(vec![
            Span::styled(
                format!("Point {}: ", i + 1),
                Style::default().fg(colors.label),
            ),
            Span::styled(text, Style::default().fg(colors.value)),
        ]),
        None => Line::from(Span::styled(
            "Tab to the chart and use ←/→ to inspect points",
            Style::default().fg(colors.border),
        )),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn format_tick(val: f64) -> String {
    if val.fract() == 0.0 {
        format!("{:.0}", val)
    } else {
        format!("{:.1}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_sector_starts_at_twelve_oclock() {
        let (from, to) = sector_span(0, 4, 0.0);
        assert!(close(to, FRAC_PI_2));
        assert!(close(from, 0.0));
        let (from, to) = sector_span(1, 4, 0.0);
        assert!(close(to, 0.0));
        assert!(close(from, -FRAC_PI_2));
    }

    #[test]
    fn single_sector_is_full_circle() {
        let (from, to) = sector_span(0, 1, 0.0);
        assert!(close(to - from, TAU));
    }

    #[test]
    fn bounds_keep_circles_round() {
        let (x, y) = canvas_bounds(80, 20);
        assert!(close(x[1] / y[1], 2.0));
        let (x, y) = canvas_bounds(20, 20);
        assert!(close(y[1] / x[1], 2.0));
        let (x, y) = canvas_bounds(0, 5);
        assert_eq!(x, y);
    }

    #[test]
    fn padding_shrinks_plot() {
        let options = ChartOptions::default();
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(plot_area(area, &options), Rect::new(2, 1, 56, 18));
    }

    #[test]
    fn fixed_plot_when_not_responsive() {
        let options = ChartOptions {
            responsive: false,
            padding: 0,
            ..ChartOptions::default()
        };
        assert_eq!(
            plot_area(Rect::new(0, 0, 100, 30), &options),
            Rect::new(20, 5, 60, 20)
        );
        // Smaller terminals clip the fixed size
        assert_eq!(
            plot_area(Rect::new(0, 0, 40, 10), &options),
            Rect::new(0, 0, 40, 10)
        );
    }

    #[test]
    fn square_plot_when_aspect_is_kept() {
        let options = ChartOptions {
            maintain_aspect_ratio: true,
            padding: 0,
            ..ChartOptions::default()
        };
        let plot = plot_area(Rect::new(0, 0, 100, 20), &options);
        assert_eq!((plot.width, plot.height), (40, 20));
        assert_eq!(plot.x, 30);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(12.5), "12.5");
    }
}
