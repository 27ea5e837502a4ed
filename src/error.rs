use thiserror::Error;

/// Failures inside the drawing layer: canvas assembly and template rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("invalid geometry: {0}")]
    Geometry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

/// The single error surface of the report engine. Each variant names the
/// operation that failed; exactly one notification per call reaches the user.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to generate report: {source}")]
    Report {
        #[source]
        source: RenderError,
    },

    #[error("failed to generate PDF using template '{template}': {source}")]
    Detail {
        template: String,
        #[source]
        source: RenderError,
    },

    #[error("failed to generate preview: {source}")]
    Preview {
        #[source]
        source: RenderError,
    },
}
