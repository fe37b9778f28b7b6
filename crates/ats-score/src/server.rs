//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes resume scoring over the MCP protocol so AI assistants can score a
//! resume against a job posting via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library
//! that the CLI commands use. Each `#[tool]` method delegates to core library
//! functions rather than implementing business logic directly.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use ats_score_core::config::{Config, DEFAULT_MAX_INPUT_BYTES};
use ats_score_core::extract::{DEFAULT_MIN_CHARS, DocumentFormat, extract_text};
use ats_score_core::scoring::{Rating, ScoreReport, Thresholds, analyze_with};
use ats_score_core::skills::{ReferenceData, SkillCategory};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_resume` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreResumeParams {
    /// Plain text of the resume.
    pub resume_text: String,
    /// Plain text of the job description. Omit to score the resume on its own.
    pub job_description: Option<String>,
}

/// Parameters for the `list_skills` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListSkillsParams {
    /// Only list one category: "technical" or "soft". Omit for everything,
    /// including action verbs.
    pub category: Option<SkillCategory>,
}

#[derive(serde::Serialize)]
struct ScoreResult<'a> {
    rating: Rating,
    #[serde(flatten)]
    report: &'a ScoreReport,
}

/// MCP server exposing resume scoring to AI assistants.
#[derive(Clone)]
pub struct ScoreServer {
    thresholds: Thresholds,
    max_input_bytes: Option<usize>,
    min_resume_chars: usize,
    tool_router: ToolRouter<Self>,
}

impl Default for ScoreServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ScoreServer {
    /// Create a server with default thresholds and limits.
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds::default(),
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            min_resume_chars: DEFAULT_MIN_CHARS,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server that honors the loaded configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            thresholds: config.thresholds.clone(),
            max_input_bytes: config.input_limit(),
            min_resume_chars: config.min_resume_chars(),
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score a resume, optionally against a job description.
    #[tool(
        description = "Score resume text like an applicant tracking system. Returns overall, keyword, skills, formatting, and structure scores with found/missing skills and issues."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_resume(
        &self,
        Parameters(params): Parameters<ScoreResumeParams>,
    ) -> Result<CallToolResult, McpError> {
        let job = params.job_description.unwrap_or_default();
        tracing::debug!(
            tool = "score_resume",
            resume_len = params.resume_text.len(),
            job_len = job.len(),
            "executing MCP tool"
        );

        if let Some(max) = self.max_input_bytes {
            let size = params.resume_text.len() + job.len();
            if size > max {
                return Err(McpError::invalid_params(
                    format!("input too large: {size} bytes (limit: {max} bytes)"),
                    None,
                ));
            }
        }

        let resume = extract_text(
            DocumentFormat::PlainText,
            params.resume_text.as_bytes(),
            self.min_resume_chars,
        )
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let report = analyze_with(&resume, &job, ReferenceData::builtin(), &self.thresholds);
        let result = ScoreResult {
            rating: report.rating(),
            report: &report,
        };
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "score_resume",
            overall = report.overall,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the builtin reference lists.
    #[tool(
        description = "List the technical skills, soft skills, and action verbs the scorer looks for, in scan order."
    )]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn list_skills(
        &self,
        Parameters(params): Parameters<ListSkillsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_skills", category = ?params.category, "executing MCP tool");

        let reference = ReferenceData::builtin();
        let terms = |category| {
            reference
                .skills_in(category)
                .map(|skill| skill.term.as_str())
                .collect::<Vec<_>>()
        };

        let listing = match params.category {
            Some(category) => {
                let mut map = serde_json::Map::new();
                map.insert(category.as_str().to_string(), terms(category).into());
                serde_json::Value::Object(map)
            }
            None => serde_json::json!({
                "technical": terms(SkillCategory::Technical),
                "soft": terms(SkillCategory::Soft),
                "action_verbs": reference.action_verbs(),
            }),
        };
        let json = serde_json::to_string_pretty(&listing)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "list_skills", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ScoreServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call score_resume with the resume text (and a job description \
                 when you have one) to get ATS-style scores and concrete fixes.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
