//! Plain-text and JSON rendering of controller output.
//!
//! Output is buffered as lines so the caller decides when to print.

use branchfinder_app::ResultsView;
use branchfinder_core::{BranchRef, CardFields, DetailFields, ViewState};
use branchfinder_map::{DetailMap, MarkerPlan, Viewport};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default)]
pub(crate) struct TerminalView {
    format: OutputFormat,
    lines: Vec<String>,
}

#[derive(Serialize)]
struct IndexedCard {
    index: usize,
    #[serde(flatten)]
    card: CardFields,
}

impl TerminalView {
    pub(crate) fn new(format: OutputFormat) -> Self {
        Self {
            format,
            lines: Vec::new(),
        }
    }

    /// Take everything rendered since the last call.
    pub(crate) fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn push_json<T: Serialize + ?Sized>(&mut self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => self.lines.push(json),
            Err(e) => tracing::warn!(error = %e, "failed to encode output as JSON"),
        }
    }

    fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

fn describe_viewport(viewport: &Viewport) -> String {
    match viewport {
        Viewport::Center { center, zoom } => format!("centered on {center} at zoom {zoom}"),
        Viewport::Fit { bounds } => format!(
            "fitted to {:.6}, {:.6} .. {:.6}, {:.6}",
            bounds.south, bounds.west, bounds.north, bounds.east
        ),
    }
}

impl ResultsView for TerminalView {
    fn render_view_state(&mut self, view: ViewState) {
        if !self.is_json() {
            self.lines.push(format!("== {view} view =="));
        }
    }

    fn render_summary(&mut self, summary: &str) {
        if !self.is_json() {
            self.lines.push(summary.to_string());
        }
    }

    fn render_cards(&mut self, branches: &[BranchRef<'_>]) {
        if self.is_json() {
            let cards: Vec<IndexedCard> = branches
                .iter()
                .map(|r| IndexedCard {
                    index: r.index,
                    card: CardFields::from_branch(r.branch),
                })
                .collect();
            self.push_json(&cards);
            return;
        }

        for r in branches {
            let card = CardFields::from_branch(r.branch);
            self.lines
                .push(format!("[{}] {} ({})", r.index, card.name, card.category));
            self.lines.push(format!("    {}", card.address));
            self.lines.push(format!(
                "    hours: {} | days: {} | contact: {}",
                card.operating_hours, card.banking_days, card.contact
            ));
            self.lines.push(format!("    {}", card.badge));
        }
    }

    fn render_notice(&mut self, message: &str) {
        if self.is_json() {
            self.push_json(&serde_json::json!({ "notice": message }));
        } else {
            self.lines.push(message.to_string());
        }
    }

    fn render_map(&mut self, plan: &MarkerPlan) {
        if self.is_json() {
            self.push_json(plan);
            return;
        }

        self.lines.push(plan.message.clone());
        self.lines
            .push(format!("map {}", describe_viewport(&plan.viewport)));
        for marker in &plan.markers {
            self.lines.push(format!(
                "  * [{}] {} @ {}",
                marker.index, marker.popup.title, marker.point
            ));
        }
    }

    fn render_detail(&mut self, index: usize, detail: &DetailFields, map: DetailMap) {
        if self.is_json() {
            self.push_json(detail);
            return;
        }

        self.lines.push(format!("[{index}] {}", detail.title));
        self.lines.push(format!("  Address:         {}", detail.address));
        self.lines.push(format!("  Type:            {}", detail.category));
        self.lines
            .push(format!("  Operating hours: {}", detail.operating_hours));
        self.lines
            .push(format!("  Banking days:    {}", detail.banking_days));
        self.lines
            .push(format!("  Contact:         {}", detail.contacts.join(", ")));
        if let Some(email) = &detail.email {
            self.lines.push(format!("  Email:           {email}"));
        }
        self.lines.push(format!("  Location:        {}", detail.location));
        if let Some((lat, lng)) = &detail.coordinates {
            self.lines.push(format!("  Coordinates:     {lat}, {lng}"));
        }
        if let Some(note) = &detail.service_note {
            self.lines.push(format!("  Note:            {note}"));
        }
        match map {
            DetailMap::Shown { center, zoom } => self
                .lines
                .push(format!("  Map:             {center} (zoom {zoom})")),
            DetailMap::Hidden => self.lines.push("  Map:             hidden".to_string()),
        }
    }

    fn close_detail(&mut self) {
        if !self.is_json() {
            self.lines.push("detail closed".to_string());
        }
    }
}
