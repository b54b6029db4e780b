use egui_plot::{Bar, BarChart, Plot};

use crate::page::{Chart, PageModel};

const CHART_HEIGHT: f32 = 220.0;

/// Render the analysis pane: one bar chart per active filter field.
pub fn show(ui: &mut egui::Ui, page: &PageModel) {
    ui.heading("Statistics");
    ui.add_space(4.0);

    if page.is_idle() {
        ui.label("Pick a filter in the sidebar to see how your books are spread out.");
        return;
    }

    if let Some(field) = page.active_field {
        ui.weak(format!("Grouping by {}", field.label().to_lowercase()));
    }

    egui::ScrollArea::vertical()
        .id_salt("analysis_scroll")
        .show(ui, |ui| {
            for chart in &page.charts {
                show_chart(ui, chart);
                ui.add_space(12.0);
            }
        });
}

fn show_chart(ui: &mut egui::Ui, chart: &Chart) {
    ui.label(chart.caption());

    let bars: Vec<Bar> = chart
        .counts
        .iter()
        .enumerate()
        .map(|(i, group)| {
            Bar::new(i as f64, group.count as f64)
                .name(&group.value)
                .width(0.7)
        })
        .collect();

    Plot::new(("chart", chart.field))
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(chart.field.label()));
        });

    // Bar names only show on hover, so list the values underneath
    egui::CollapsingHeader::new(format!("{} values", chart.field.label()))
        .id_salt(("chart_values", chart.field))
        .default_open(chart.counts.len() <= 12)
        .show(ui, |ui| {
            egui::Grid::new(("chart_grid", chart.field))
                .striped(true)
                .show(ui, |ui| {
                    for group in &chart.counts {
                        ui.label(&group.value);
                        ui.label(group.count.to_string());
                        ui.end_row();
                    }
                });
        });
}
