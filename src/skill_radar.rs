use folio_core::content::skill_levels;
use folio_core::radar::{
    axis_point, label_points, level_radii, polygon_path, value_points, view_box,
};
use folio_core::{SkillCategory, RADAR, SKILL_CATEGORIES};
use yew::prelude::*;

const POLYGON_FILL: &str = "rgba(236, 72, 153, 0.3)";
const POLYGON_STROKE: &str = "rgb(236, 72, 153)";
const POINT_RADIUS: f64 = 5.0;

fn radar_grid() -> Html {
    level_radii(&RADAR)
        .into_iter()
        .map(|radius| {
            html! {
                <circle
                    cx={RADAR.center.to_string()}
                    cy={RADAR.center.to_string()}
                    r={radius.to_string()}
                    fill="none"
                    stroke="currentColor"
                    stroke-opacity="0.1"
                />
            }
        })
        .collect()
}

fn radar_axes(total: usize) -> Html {
    (0..total)
        .map(|index| {
            let end = axis_point(index, total, RADAR.max_radius, &RADAR);
            html! {
                <line
                    x1={RADAR.center.to_string()}
                    y1={RADAR.center.to_string()}
                    x2={end.x.to_string()}
                    y2={end.y.to_string()}
                    stroke="currentColor"
                    stroke-opacity="0.1"
                />
            }
        })
        .collect()
}

fn radar_labels(categories: &[SkillCategory]) -> Html {
    label_points(categories.len(), &RADAR)
        .into_iter()
        .zip(categories)
        .map(|(point, category)| {
            html! {
                <text
                    key={category.name}
                    x={point.x.to_string()}
                    y={point.y.to_string()}
                    text-anchor="middle"
                    dominant-baseline="middle"
                    class="radar-label"
                >
                    { category.name }
                </text>
            }
        })
        .collect()
}

fn radar_points(levels: &[u8]) -> Html {
    value_points(levels, &RADAR)
        .into_iter()
        .map(|point| {
            html! {
                <circle
                    cx={point.x.to_string()}
                    cy={point.y.to_string()}
                    r={POINT_RADIUS.to_string()}
                    fill={POLYGON_STROKE}
                />
            }
        })
        .collect()
}

fn skills_list(category: &SkillCategory) -> Html {
    html! {
        <div class="skill-card" key={category.name}>
            <h4>{ category.name }</h4>
            <div class="skill-chips">
                { for category.skills.iter().map(|skill| html! { <span class="skill-chip">{ *skill }</span> }) }
            </div>
        </div>
    }
}

#[function_component(SkillRadar)]
pub(crate) fn skill_radar() -> Html {
    let categories = SKILL_CATEGORIES;
    let levels = skill_levels();

    html! {
        <section class="skills" id="skills">
            <h2>{ "Skill Radar" }</h2>
            <div class="skills-grid">
                <svg viewBox={view_box(&RADAR)} class="radar">
                    { radar_grid() }
                    { radar_axes(categories.len()) }
                    <path
                        d={polygon_path(&levels, &RADAR)}
                        fill={POLYGON_FILL}
                        stroke={POLYGON_STROKE}
                        stroke-width="2"
                    />
                    { radar_points(&levels) }
                    { radar_labels(categories) }
                </svg>
                <div class="skills-list">
                    { for categories.iter().map(skills_list) }
                </div>
            </div>
        </section>
    }
}
