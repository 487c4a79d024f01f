use leptos::prelude::*;

use crate::skills::{chart_description, icon_for, svg_points, RadarGeometry};

use super::use_content;

const CHART_SIZE: f64 = 320.0;
const CHART_RINGS: usize = 4;

#[component]
pub fn SkillsGrid() -> impl IntoView {
    let content = use_content();

    view! {
        <section id="skills" class="py-20 px-6 lg:px-24 bg-zinc-900/30" aria-labelledby="skills-title">
            <h3 id="skills-title" class="text-3xl font-bold text-white mb-16 flex items-center gap-3">
                <span class="w-12 h-1 bg-brand-orange rounded-full" aria-hidden="true"></span>
                {move || content.get().ui.skills}
            </h3>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-1">
                    <SkillsChart />
                    <div class="mt-6 p-6 rounded-2xl border border-zinc-800 bg-zinc-950/50">
                        <h4 class="text-white font-bold mb-2">
                            {move || content.get().ui.philosophy_title}
                        </h4>
                        <p class="text-zinc-400 text-sm leading-relaxed">
                            {move || content.get().ui.philosophy_desc}
                        </p>
                    </div>
                </div>
                <div
                    class="lg:col-span-2 grid grid-cols-1 md:grid-cols-2 gap-6"
                    role="list"
                    aria-label=move || content.get().aria_labels.skills_categories
                >
                    {move || {
                        let data = content.get();
                        data.skill_categories
                            .iter()
                            .map(|category| {
                                let icon = icon_for(category.title);
                                view! {
                                    <article
                                        class="bg-brand-surface p-6 rounded-2xl border border-zinc-800 hover:border-zinc-600 transition-colors"
                                        role="listitem"
                                    >
                                        <div class="flex items-center gap-3 mb-4">
                                            <div
                                                class=format!("p-2 bg-zinc-900 rounded-lg border border-zinc-800 {}", icon.accent())
                                                aria-hidden="true"
                                            >
                                                {icon.glyph()}
                                            </div>
                                            <h4 class="font-bold text-white">{category.title}</h4>
                                        </div>
                                        <div
                                            class="flex flex-wrap gap-2"
                                            role="list"
                                            aria-label=format!("{} {}", data.aria_labels.skills_in_category, category.title)
                                        >
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span
                                                            class="px-3 py-1 bg-zinc-900 text-zinc-300 text-sm rounded-md border border-zinc-800 hover:text-brand-orange transition-colors cursor-default"
                                                            role="listitem"
                                                        >
                                                            {*skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsChart() -> impl IntoView {
    let content = use_content();
    let geometry = RadarGeometry::new(CHART_SIZE);

    let radar_svg = move || {
        let radar = content.get().radar;
        let axes = radar.len();
        let center = format!("{:.2}", geometry.center);
        let grid = geometry
            .grid(axes, CHART_RINGS)
            .into_iter()
            .map(|ring| view! { <polygon points=svg_points(&ring) fill="none" stroke="#3f3f46" /> })
            .collect_view();
        let spokes = (0..axes)
            .map(|i| {
                let (x, y) = geometry.point(i, axes, 1.0);
                view! {
                    <line
                        x1=center.clone()
                        y1=center.clone()
                        x2=format!("{x:.2}")
                        y2=format!("{y:.2}")
                        stroke="#3f3f46"
                    />
                }
            })
            .collect_view();
        let labels = radar
            .iter()
            .enumerate()
            .map(|(i, level)| {
                let (x, y) = geometry.point(i, axes, 1.18);
                view! {
                    <text
                        x=format!("{x:.2}")
                        y=format!("{y:.2}")
                        text-anchor="middle"
                        dominant-baseline="middle"
                        fill="#a1a1aa"
                        font-size="11"
                    >
                        {level.subject}
                    </text>
                }
            })
            .collect_view();
        let data = svg_points(&geometry.data_points(radar));
        view! {
            {grid}
            {spokes}
            <polygon
                points=data
                fill="#f97316"
                fill-opacity="0.3"
                stroke="#f97316"
                stroke-width="2"
            />
            {labels}
        }
    };

    view! {
        <figure class="w-full h-[400px] bg-brand-surface/30 rounded-2xl border border-zinc-800 p-4 relative overflow-hidden">
            <figcaption class="absolute top-6 left-6 text-zinc-400 font-mono text-sm uppercase tracking-widest z-10">
                {move || content.get().ui.radar_title}
            </figcaption>
            <div
                class="w-full h-full"
                role="img"
                aria-label=move || {
                    let data = content.get();
                    chart_description(data.aria_labels.chart_description, data.radar)
                }
            >
                <svg
                    viewBox=format!("0 0 {CHART_SIZE} {CHART_SIZE}")
                    class="w-full h-full"
                    aria-hidden="true"
                >
                    {radar_svg}
                </svg>
            </div>
            <div
                class="sr-only"
                role="region"
                aria-label=move || content.get().aria_labels.chart_data
            >
                {move || {
                    let data = content.get();
                    let aria = data.aria_labels;
                    view! {
                        <table>
                            <caption>{aria.sr_chart_description}</caption>
                            <thead>
                                <tr>
                                    <th>{aria.category_label}</th>
                                    <th>{aria.level_label}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {data
                                    .radar
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <tr>
                                                <td>{item.subject}</td>
                                                <td>{format!("{}%", item.level)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                }}
            </div>
        </figure>
    }
}
