use crate::app::state::AppState;
use crate::app::surfaces::{ChartSurface, LayerSlot, PageSurface, Region};
use crate::domain::{StoreMetrics, TypeDistribution};
use crate::templates::format::{format_number, format_price};
use maud::html;
use serde::Serialize;

pub const PALETTE: [&str; 5] = ["#2563eb", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];

/// A proportion chart, one segment per type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionChart {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub colors: Vec<&'static str>,
}

impl From<TypeDistribution> for DistributionChart {
    fn from(dist: TypeDistribution) -> Self {
        let (labels, values): (Vec<String>, Vec<usize>) = dist.segments.into_iter().unzip();
        let colors = (0..labels.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();
        Self {
            labels,
            values,
            colors,
        }
    }
}

/// Count, average price and top type over the whole store.
pub fn render_metrics<P: PageSurface>(state: &AppState, page: &mut P) {
    let metrics = StoreMetrics::compute(state.store.all());

    page.render(Region::MetricCount, html! { (format_number(metrics.count as f64)) });
    page.render(
        Region::MetricAverage,
        html! {
            @match metrics.average_price {
                Some(avg) => { (format_price(avg)) }
                None => { "-" }
            }
        },
    );
    page.render(
        Region::MetricTopType,
        html! { (metrics.top_type.as_deref().unwrap_or("-")) },
    );
}

/// Type distribution of the filtered view. The previous chart instance is
/// destroyed once the new one is drawn.
pub fn render_chart<C: ChartSurface>(
    state: &AppState,
    chart: &mut C,
    slot: &mut LayerSlot<C::Handle>,
) {
    let data = DistributionChart::from(TypeDistribution::compute(&state.filtered));
    let handle = chart.draw(data);
    if let Some(previous) = slot.swap(handle) {
        chart.destroy(previous);
    }
}

pub fn render_price_label<P: PageSurface>(price: f64, page: &mut P) {
    page.render(Region::PriceLabel, html! { (format_number(price)) });
}
