use std::f64::consts::PI;

use log::error;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::{RevenueSource, Share};
use crate::error::SiteError;
use crate::format;
use crate::theme::{hex_to_rgb, PRIMARY};

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 400;
/// Inner radius as a fraction of the outer one; the rest is the ring.
const DONUT_CUTOUT: f64 = 0.7;
const ARC_STEPS: usize = 48;

fn rgb(hex: &str) -> Result<RGBColor, SiteError> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Ok(RGBColor(r, g, b))
}

fn chart_err<E: std::fmt::Debug>(e: E) -> SiteError {
    SiteError::Chart(format!("{:?}", e))
}

fn backend(canvas: &HtmlCanvasElement) -> Result<CanvasBackend, SiteError> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| SiteError::Canvas("2d context unavailable".to_string()))
}

/// Polygon outline of one ring segment between `start` and `end`, given as
/// fractions of the full turn. Angles start at twelve o'clock and go clockwise.
pub fn ring_segment(
    center: (i32, i32),
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    let point = |radius: f64, fraction: f64| {
        let angle = fraction * 2.0 * PI - PI / 2.0;
        (
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        )
    };
    let steps = (((end - start) * ARC_STEPS as f64).ceil() as usize).max(1);
    let at = |i: usize| start + (end - start) * i as f64 / steps as f64;

    let mut points: Vec<(i32, i32)> = (0..=steps).map(|i| point(outer, at(i))).collect();
    points.extend((0..=steps).rev().map(|i| point(inner, at(i))));
    points
}

/// Cumulative `[start, end)` fractions for each share, in order.
pub fn share_spans(shares: &[Share]) -> Vec<(f64, f64)> {
    let total: f64 = shares.iter().map(|s| s.percent as f64).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    shares
        .iter()
        .map(|s| {
            let end = start + s.percent as f64 / total;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

fn draw_doughnut(canvas: &HtmlCanvasElement, shares: &[Share]) -> Result<(), SiteError> {
    let root = backend(canvas)?.into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let (width, height) = root.dim_in_pixel();
    let legend_height = 24 * shares.len() as i32 + 16;
    let center = (width as i32 / 2, (height as i32 - legend_height) / 2);
    let outer = (center.1.min(center.0) - 10).max(10) as f64;
    let inner = outer * DONUT_CUTOUT;

    for (share, (start, end)) in shares.iter().zip(share_spans(shares)) {
        let color = rgb(&share.color)?;
        root.draw(&Polygon::new(
            ring_segment(center, outer, inner, start, end),
            color.filled(),
        ))
        .map_err(chart_err)?;
    }

    let legend_top = height as i32 - legend_height + 8;
    for (i, share) in shares.iter().enumerate() {
        let y = legend_top + 24 * i as i32;
        let color = rgb(&share.color)?;
        root.draw(&Rectangle::new([(24, y), (40, y + 14)], color.filled()))
            .map_err(chart_err)?;
        root.draw(&Text::new(
            format!("{} ({}%)", share.label, share.percent),
            (50, y),
            ("sans-serif", 15).into_font(),
        ))
        .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

fn draw_bars(canvas: &HtmlCanvasElement, sources: &[RevenueSource]) -> Result<(), SiteError> {
    let root = backend(canvas)?.into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let max = sources.iter().map(|s| s.amount).max().unwrap_or(0);
    let top = max + max / 10;
    let bar_color = rgb(PRIMARY)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0..sources.len(), 0u64..top.max(1))
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(sources.len() + 1)
        .x_label_formatter(&|x| {
            sources
                .get(*x)
                .map(|s| s.label.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format::brl_compact(*y))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(sources.iter().enumerate().map(|(i, s)| {
            let mut bar = Rectangle::new([(i, 0), (i + 1, s.amount)], bar_color.filled());
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct DoughnutProps {
    pub shares: Vec<Share>,
}

#[function_component(Doughnut)]
pub fn doughnut(props: &DoughnutProps) -> Html {
    let canvas_ref = use_node_ref();
    let failed = use_state(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let failed = failed.clone();
        use_effect_with_deps(
            move |shares: &Vec<Share>| {
                let drawn = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(SiteError::MissingNode("doughnut canvas"))
                    .and_then(|canvas| draw_doughnut(&canvas, shares));
                if let Err(e) = drawn {
                    error!("Allocation chart: {}", e);
                    failed.set(true);
                }
                || ()
            },
            props.shares.clone(),
        );
    }

    html! {
        <div class="chart">
            <canvas ref={canvas_ref} width="600" height="400" style="max-width: 100%;" />
            if *failed {
                <ul class="chart-fallback">
                    {
                        for props.shares.iter().map(|s| html! {
                            <li>{ format!("{}: {}%", s.label, s.percent) }</li>
                        })
                    }
                </ul>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub sources: Vec<RevenueSource>,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let canvas_ref = use_node_ref();
    let failed = use_state(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let failed = failed.clone();
        use_effect_with_deps(
            move |sources: &Vec<RevenueSource>| {
                let drawn = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(SiteError::MissingNode("revenue canvas"))
                    .and_then(|canvas| draw_bars(&canvas, sources));
                if let Err(e) = drawn {
                    error!("Revenue chart: {}", e);
                    failed.set(true);
                }
                || ()
            },
            props.sources.clone(),
        );
    }

    html! {
        <div class="chart">
            <canvas ref={canvas_ref} width="600" height="400" style="max-width: 100%;" />
            if *failed {
                <ul class="chart-fallback">
                    {
                        for props.sources.iter().map(|s| html! {
                            <li>{ format!("{}: {}", s.label, format::brl(s.amount)) }</li>
                        })
                    }
                </ul>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(percent: u8) -> Share {
        Share {
            label: String::new(),
            percent,
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn spans_cover_the_full_turn() {
        let spans = share_spans(&[share(85), share(10), share(5)]);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].0, 0.0);
        assert!((spans[0].1 - 0.85).abs() < 1e-9);
        assert!((spans[1].1 - 0.95).abs() < 1e-9);
        assert!((spans[2].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn spans_are_empty_without_weight() {
        assert!(share_spans(&[share(0)]).is_empty());
        assert!(share_spans(&[]).is_empty());
    }

    #[test]
    fn segment_starts_at_twelve_oclock() {
        let points = ring_segment((100, 100), 50.0, 35.0, 0.0, 0.25);
        assert_eq!(points.first(), Some(&(100, 50)));
        // Outer arc ends at three o'clock, inner arc closes back at twelve
        assert!(points.contains(&(150, 100)));
        assert_eq!(points.last(), Some(&(100, 65)));
    }

    #[test]
    fn segment_points_stay_inside_ring() {
        let points = ring_segment((0, 0), 100.0, 70.0, 0.1, 0.9);
        for (x, y) in points {
            let r = ((x * x + y * y) as f64).sqrt();
            assert!((69.0..=101.0).contains(&r), "radius {}", r);
        }
    }
}
