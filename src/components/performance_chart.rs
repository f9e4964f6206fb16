use std::error::Error;

use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::PerformanceSample;
use crate::theme::{use_theme, Theme};

const STANDARD_FILL: RGBColor = RGBColor(0x9c, 0xa3, 0xaf);
const ENHANCED_FILL: RGBColor = RGBColor(0xf5, 0x9e, 0x0b);
const SLOTS_PER_SAMPLE: u32 = 3;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub samples: Vec<PerformanceSample>,
    pub y_label: String,
    pub standard_label: String,
    pub enhanced_label: String,
}

fn axis_color(theme: Theme) -> RGBColor {
    if theme.is_dark() {
        RGBColor(0xcb, 0xd5, 0xe1)
    } else {
        RGBColor(0x47, 0x55, 0x69)
    }
}

/// Top of the y axis: the tallest bar plus 10% headroom.
pub fn chart_ceiling(samples: &[PerformanceSample]) -> u32 {
    let max = samples
        .iter()
        .map(|s| s.standard.max(s.enhanced))
        .max()
        .unwrap_or(0);
    (max + max / 10).max(1)
}

/// Each sample takes three x slots: standard bar, enhanced bar, gap.
/// The scene name sits under the pair.
pub fn slot_label(samples: &[PerformanceSample], slot: u32) -> String {
    if slot % SLOTS_PER_SAMPLE != 1 {
        return String::new();
    }
    samples
        .get((slot / SLOTS_PER_SAMPLE) as usize)
        .map(|s| s.scene.clone())
        .unwrap_or_default()
}

#[derive(Clone, PartialEq)]
struct Labels {
    y_axis: String,
    standard: String,
    enhanced: String,
}

fn draw(
    canvas: HtmlCanvasElement,
    samples: &[PerformanceSample],
    labels: &Labels,
    theme: Theme,
) -> Result<(), Box<dyn Error>> {
    // Resizing also clears whatever was drawn for the previous theme
    canvas.set_width(600);
    canvas.set_height(320);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();

    let axis = axis_color(theme);
    let slots = samples.len() as u32 * SLOTS_PER_SAMPLE;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .build_cartesian_2d(0..slots, 0..chart_ceiling(samples))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(slots as usize)
        .x_label_formatter(&|x| slot_label(samples, *x))
        .y_desc(labels.y_axis.as_str())
        .axis_style(axis)
        .label_style(("sans-serif", 14).into_font().color(&axis))
        .axis_desc_style(("sans-serif", 14).into_font().color(&axis))
        .draw()?;

    chart
        .draw_series(samples.iter().enumerate().map(|(i, s)| {
            let x = i as u32 * SLOTS_PER_SAMPLE;
            Rectangle::new([(x, 0), (x + 1, s.standard)], STANDARD_FILL.filled())
        }))?
        .label(labels.standard.as_str())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], STANDARD_FILL.filled()));

    chart
        .draw_series(samples.iter().enumerate().map(|(i, s)| {
            let x = i as u32 * SLOTS_PER_SAMPLE + 1;
            Rectangle::new([(x, 0), (x + 1, s.enhanced)], ENHANCED_FILL.filled())
        }))?
        .label(labels.enhanced.as_str())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], ENHANCED_FILL.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 13).into_font().color(&axis))
        .border_style(axis)
        .draw()?;

    root.present()?;
    Ok(())
}

#[function_component]
pub fn PerformanceChart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();
    let theme = use_theme();

    {
        let canvas_ref = canvas_ref.clone();
        let labels = Labels {
            y_axis: props.y_label.clone(),
            standard: props.standard_label.clone(),
            enhanced: props.enhanced_label.clone(),
        };
        use_effect_with_deps(
            move |(samples, labels, theme)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(err) = draw(canvas, samples, labels, *theme) {
                        warn!("Performance chart not drawn: {}", err);
                    }
                }
                || ()
            },
            (props.samples.clone(), labels, theme),
        );
    }

    html! {
        <div class="w-full">
            <canvas ref={canvas_ref} width="600" height="320" style="max-width: 100%;" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scene: &str, standard: u32, enhanced: u32) -> PerformanceSample {
        PerformanceSample {
            scene: scene.to_string(),
            standard,
            enhanced,
        }
    }

    #[test]
    fn ceiling_leaves_headroom_above_tallest_bar() {
        let samples = vec![sample("日间场景", 60, 150), sample("荒野地区", 70, 160)];
        assert_eq!(chart_ceiling(&samples), 176);
        assert_eq!(chart_ceiling(&[]), 1);
    }

    #[test]
    fn scene_names_sit_between_their_bars() {
        let samples = vec![sample("日间场景", 60, 150), sample("夜间场景", 40, 90)];
        assert_eq!(slot_label(&samples, 0), "");
        assert_eq!(slot_label(&samples, 1), "日间场景");
        assert_eq!(slot_label(&samples, 2), "");
        assert_eq!(slot_label(&samples, 4), "夜间场景");
        assert_eq!(slot_label(&samples, 7), "");
    }

    #[test]
    fn axis_follows_theme() {
        assert_eq!(axis_color(Theme::Dark), RGBColor(0xcb, 0xd5, 0xe1));
        assert_eq!(axis_color(Theme::Light), RGBColor(0x47, 0x55, 0x69));
    }
}
