use leptos::prelude::*;

use crate::graph::{Node, Relation};
use crate::stats::GraphStats;

/// Year as shown to readers: `3100 BCE`, `476 CE`.
pub fn format_year(year: f64) -> String {
	let rounded = year.round() as i64;
	if rounded < 0 {
		format!("{} BCE", rounded.unsigned_abs())
	} else {
		format!("{rounded} CE")
	}
}

fn lifespan(node: &Node) -> Option<String> {
	match (node.start, node.end) {
		(Some(start), Some(end)) => Some(format!("{} – {}", format_year(start), format_year(end))),
		(Some(start), None) => Some(format!("from {}", format_year(start))),
		_ => None,
	}
}

fn grade_name(grade: i32) -> String {
	if grade == 0 {
		"Kindergarten".into()
	} else {
		format!("Grade {grade}")
	}
}

/// Side panel for the selected node.
#[component]
pub fn DetailPanel(node: Node, relations: Vec<Relation>, on_close: Callback<()>) -> impl IntoView {
	let id = node.id.clone();
	let links = relations
		.into_iter()
		.map(|rel| {
			let (arrow, other) = if rel.from == id {
				("→", rel.to)
			} else {
				("←", rel.from)
			};
			view! {
				<li>
					<span class="relation-kind">{rel.kind.to_string()}</span>
					" " {arrow} " " {other}
					{rel.description.map(|d| view! { <p class="relation-note">{d}</p> })}
				</li>
			}
		})
		.collect_view();

	view! {
		<aside class="detail-panel">
			<button class="close" title="Close" on:click=move |_| on_close.run(())>
				"×"
			</button>
			<h2 style=format!("border-color: {}", node.fill())>{node.label.clone()}</h2>
			<p class="kind">{node.kind.to_string()}</p>
			<dl>
				{lifespan(&node).map(|span| view! { <dt>"Period"</dt><dd>{span}</dd> })}
				{node.grade.map(|g| view! { <dt>"Grade"</dt><dd>{grade_name(g)}</dd> })}
				{node.subject.clone().map(|s| view! { <dt>"Subject"</dt><dd>{s}</dd> })}
				{node.longitude.map(|l| view! { <dt>"Longitude"</dt><dd>{format!("{l:.1}°")}</dd> })}
			</dl>
			{node.description.clone().map(|d| view! { <p class="description">{d}</p> })}
			<h3>"Relations"</h3>
			<ul class="relations">{links}</ul>
		</aside>
	}
}

/// Counts for the displayed graph.
#[component]
pub fn StatsPanel(stats: GraphStats) -> impl IntoView {
	view! {
		<div class="stats-panel">
			<h3>"Graph Stats"</h3>
			<div class="stat-row"><span>"Nodes"</span><span>{stats.node_count}</span></div>
			<div class="stat-row"><span>"Relations"</span><span>{stats.relation_count}</span></div>
			<div class="stat-row"><span>"Entry points"</span><span>{stats.entry_points.len()}</span></div>
			<div class="stat-row"><span>"End points"</span><span>{stats.end_points.len()}</span></div>
			{(stats.unplaced_nodes > 0).then(|| view! {
				<div class="stat-row"><span>"Unplaced"</span><span>{stats.unplaced_nodes}</span></div>
			})}
			<h4>"By type"</h4>
			{stats.by_kind.iter().map(|(kind, count)| view! {
				<div class="stat-row"><span>{kind.to_string()}</span><span>{*count}</span></div>
			}).collect_view()}
			{(!stats.most_incoming.is_empty()).then(|| view! {
				<h4>"Most incoming"</h4>
				{stats.most_incoming.iter().take(3).map(|(id, count)| view! {
					<div class="stat-row"><span>{id.clone()}</span><span>{*count}</span></div>
				}).collect_view()}
			})}
		</div>
	}
}

/// Zoom and fit buttons.
#[component]
pub fn GraphToolbar(
	on_zoom_in: Callback<()>,
	on_zoom_out: Callback<()>,
	on_fit: Callback<()>,
) -> impl IntoView {
	view! {
		<div class="graph-toolbar">
			<button title="Zoom In" on:click=move |_| on_zoom_in.run(())>"+"</button>
			<button title="Zoom Out" on:click=move |_| on_zoom_out.run(())>"−"</button>
			<button title="Fit" on:click=move |_| on_fit.run(())>"Fit"</button>
		</div>
	}
}
