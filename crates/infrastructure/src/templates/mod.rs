//! HTML fragment rendering
//!
//! Uses the Tera templating engine to render the small HTML snippets the
//! web front end swaps into the page: bus and tram arrival boards, the tram
//! stop `<option>` list, and inline error paragraphs.
//!
//! All templates are embedded at compile time and carry an `.html` name, so
//! every interpolated value is HTML-escaped.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::FragmentRenderer;
//!
//! let renderer = FragmentRenderer::new()?;
//! let html = renderer.bus_arrivals(&outcome)?;
//! ```

use std::sync::Arc;

use application::{NO_BUS_ARRIVALS_MESSAGE, NO_TRAM_ARRIVALS_MESSAGE};
use domain::{ArrivalsOutcome, StopSummary};
use tera::{Context, Tera};
use thiserror::Error;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

const BUS_ARRIVALS: &str = "fragments/bus.html";
const TRAM_STOP_LIST: &str = "fragments/tram_stops.html";
const TRAM_ARRIVALS: &str = "fragments/tram.html";
const ERROR: &str = "fragments/error.html";
const STOP_LIST_ERROR: &str = "fragments/tram_stops_error.html";

/// Embedded templates - compiled into the binary
mod embedded {
    pub const BUS_ARRIVALS: &str = "<p><b>{{ stop_name }}</b></p>\
        {% if arrivals %}<ul>{% for a in arrivals %}<li><b>{{ a.line }}</b> - {{ a.first }}</li>{% endfor %}</ul>\
        {% else %}<p>{{ empty_message }}</p>{% endif %}";

    pub const TRAM_STOP_LIST: &str = "<option value=''>-- Elige parada --</option>\
        {% for s in stops %}<option value='{{ s.id }}'>{{ s.name }}</option>{% endfor %}";

    pub const TRAM_ARRIVALS: &str = "{% if arrivals %}<ul>{% for a in arrivals %}<li><b>{{ a.line }}</b> - {{ a.first }} min</li>{% endfor %}</ul>\
        {% else %}<p>{{ empty_message }}</p>{% endif %}";

    pub const ERROR: &str = "<p class='err'>{{ message }}</p>";

    pub const STOP_LIST_ERROR: &str = "<option value=''>{{ message }}</option>";
}

/// Renders HTML fragments for the transit queries
#[derive(Clone)]
pub struct FragmentRenderer {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for FragmentRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragmentRenderer")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}

impl FragmentRenderer {
    /// Compile the embedded templates
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Compile`] if an embedded template is invalid.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            (BUS_ARRIVALS, embedded::BUS_ARRIVALS),
            (TRAM_STOP_LIST, embedded::TRAM_STOP_LIST),
            (TRAM_ARRIVALS, embedded::TRAM_ARRIVALS),
            (ERROR, embedded::ERROR),
            (STOP_LIST_ERROR, embedded::STOP_LIST_ERROR),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Bus stop name followed by one line per arrival
    pub fn bus_arrivals(&self, outcome: &ArrivalsOutcome) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("stop_name", outcome.stop_name());
        ctx.insert("arrivals", outcome.arrivals());
        ctx.insert("empty_message", NO_BUS_ARRIVALS_MESSAGE);
        self.render(BUS_ARRIVALS, &ctx)
    }

    /// `<option>` list for the tram stop picker
    pub fn tram_stop_list(&self, stops: &[StopSummary]) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("stops", stops);
        self.render(TRAM_STOP_LIST, &ctx)
    }

    /// Tram arrivals in minutes
    pub fn tram_arrivals(&self, outcome: &ArrivalsOutcome) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("arrivals", outcome.arrivals());
        ctx.insert("empty_message", NO_TRAM_ARRIVALS_MESSAGE);
        self.render(TRAM_ARRIVALS, &ctx)
    }

    /// Inline error paragraph
    pub fn error(&self, message: &str) -> Result<String, TemplateError> {
        self.render_message(ERROR, message)
    }

    /// Single disabled-looking option used when the stop list failed
    pub fn stop_list_error(&self, message: &str) -> Result<String, TemplateError> {
        self.render_message(STOP_LIST_ERROR, message)
    }

    fn render_message(&self, template: &str, message: &str) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("message", message);
        self.render(template, &ctx)
    }

    fn render(&self, template: &str, ctx: &Context) -> Result<String, TemplateError> {
        self.tera.render(template, ctx).map_err(TemplateError::from)
    }
}

#[cfg(test)]
mod tests {
    use domain::ArrivalRecord;

    use super::*;

    fn renderer() -> FragmentRenderer {
        FragmentRenderer::new().unwrap()
    }

    fn record(line: &str, first: &str) -> ArrivalRecord {
        ArrivalRecord {
            line: line.to_string(),
            destination: Some("Circular".to_string()),
            first: first.to_string(),
            second: Some("14 minutos".to_string()),
        }
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = renderer();
        assert_eq!(renderer.tera.get_template_names().count(), 5);
    }

    #[test]
    fn test_bus_arrivals() {
        let outcome = ArrivalsOutcome::from_records(
            "(716) Pº Pamplona".to_string(),
            vec![record("Ci1", "3 minutos"), record("42", "En la parada")],
        );

        let html = renderer().bus_arrivals(&outcome).unwrap();
        assert_eq!(
            html,
            "<p><b>(716) Pº Pamplona</b></p><ul>\
             <li><b>Ci1</b> - 3 minutos</li>\
             <li><b>42</b> - En la parada</li></ul>"
        );
    }

    #[test]
    fn test_bus_no_arrivals() {
        let outcome = ArrivalsOutcome::from_records("(716) Foo".to_string(), vec![]);
        let html = renderer().bus_arrivals(&outcome).unwrap();
        assert_eq!(
            html,
            "<p><b>(716) Foo</b></p><p>Sin datos en este momento</p>"
        );
    }

    #[test]
    fn test_tram_arrivals() {
        let outcome = ArrivalsOutcome::from_records(
            "Plaza de España".to_string(),
            vec![record("L1", "4"), record("L1", "?")],
        );

        let html = renderer().tram_arrivals(&outcome).unwrap();
        assert_eq!(
            html,
            "<ul><li><b>L1</b> - 4 min</li><li><b>L1</b> - ? min</li></ul>"
        );
    }

    #[test]
    fn test_tram_no_arrivals() {
        let outcome = ArrivalsOutcome::from_records("Plaza".to_string(), vec![]);
        let html = renderer().tram_arrivals(&outcome).unwrap();
        assert_eq!(html, "<p>Sin tranvías en este momento</p>");
    }

    #[test]
    fn test_tram_stop_list() {
        let stops = vec![
            StopSummary {
                id: "1".to_string(),
                name: "Avenida Academia".to_string(),
            },
            StopSummary {
                id: "2".to_string(),
                name: "Plaza España".to_string(),
            },
        ];

        let html = renderer().tram_stop_list(&stops).unwrap();
        assert_eq!(
            html,
            "<option value=''>-- Elige parada --</option>\
             <option value='1'>Avenida Academia</option>\
             <option value='2'>Plaza España</option>"
        );
    }

    #[test]
    fn test_empty_stop_list_keeps_placeholder() {
        let html = renderer().tram_stop_list(&[]).unwrap();
        assert_eq!(html, "<option value=''>-- Elige parada --</option>");
    }

    #[test]
    fn test_error_fragments() {
        let renderer = renderer();
        assert_eq!(
            renderer.error("Falta ID de parada").unwrap(),
            "<p class='err'>Falta ID de parada</p>"
        );
        assert_eq!(
            renderer.stop_list_error("Error cargando paradas").unwrap(),
            "<option value=''>Error cargando paradas</option>"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let outcome = ArrivalsOutcome::from_records(
            "<script>alert(1)</script>".to_string(),
            vec![record("<b>", "3 & 4")],
        );

        let html = renderer().bus_arrivals(&outcome).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<b>&lt;b&gt;</b>"));
        assert!(html.contains("3 &amp; 4"));
    }

    #[test]
    fn test_stop_id_cannot_break_attribute() {
        let stops = vec![StopSummary {
            id: "1' onclick='x".to_string(),
            name: "Foo".to_string(),
        }];

        let html = renderer().tram_stop_list(&stops).unwrap();
        assert!(!html.contains("' onclick='"));
    }
}
