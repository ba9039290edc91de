use maud::{html, Markup, DOCTYPE};

const LEAFLET: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet";
const MARKERCLUSTER: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(format!("{LEAFLET}.css"));
                link rel="stylesheet" href=(format!("{MARKERCLUSTER}/MarkerCluster.css"));
                link rel="stylesheet" href=(format!("{MARKERCLUSTER}/MarkerCluster.Default.css"));
                link rel="stylesheet" href="static/main.css";
                script src=(format!("{LEAFLET}.js")) {}
                script src=(format!("{MARKERCLUSTER}/leaflet.markercluster.js")) {}
                script src=(CHART_JS) {}
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { (title) }
                }
                (content)
            }
        }
    }
}
