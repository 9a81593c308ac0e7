//! Kensa MCP Server - Prompt validation tools over the Model Context Protocol
//!
//! Tool arguments are decoded leniently and handed to [`kensa::ToolCall`], so
//! a missing prompt or an unknown focus area is reported as tool output
//! instead of a protocol error.

use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext, wrapper::Parameters},
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam,
        GetPromptResult, Implementation, JsonObject, ListPromptsResult, ListResourcesResult,
        ListToolsResult, PaginatedRequestParam, Prompt, PromptArgument, PromptMessage,
        PromptMessageContent, PromptMessageRole, RawResource, ReadResourceRequestParam,
        ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::future::Future;

use kensa::{RuleSet, ToolCall, ToolError, DEFAULT_TARGET_MODEL, OPTIMIZATION_GUIDE};

pub const SERVER_NAME: &str = "kensa";
pub const AUTO_OPTIMIZE_PROMPT: &str = "auto_optimize";
pub const USER_PROMPT_ARG: &str = "user_prompt";
pub const GUIDE_URI: &str = "prompt://optimization/guide";
const GUIDE_MIME_TYPE: &str = "text/markdown";
const MISSING_OPTIMIZE_PROMPT: &str = "Error: No prompt provided for optimization";

const INSTRUCTIONS: &str = "Kensa validates and rewrites prompts with a fixed rule pipeline. \
Use validate_prompt to get an optimized prompt, analyze_prompt_quality for a read-only \
report, and get_optimization_suggestions for targeted advice.";

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ValidatePromptRequest {
    /// The raw prompt to validate and optimize
    #[schemars(required)]
    pub prompt: Option<String>,
    /// Rules to apply: expert_system, chain_of_thought, few_shot, role_play,
    /// model_optimize, structured_output, enhance_clarity, add_testing,
    /// auto_optimize (default: ["auto_optimize"])
    #[serde(default)]
    pub rules: Option<Vec<String>>,
    /// Target model, e.g. gpt-4, claude, gemini (default: "general")
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct AnalyzePromptRequest {
    /// The prompt to analyze
    #[schemars(required)]
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SuggestionsRequest {
    /// The prompt to get suggestions for
    #[schemars(required)]
    pub prompt: Option<String>,
    /// clarity, structure, examples, reasoning, expertise or all (default: "all")
    #[serde(default)]
    pub focus_area: Option<String>,
}

/// Turn a checked (or rejected) tool call into MCP output.
fn run(call: Result<ToolCall, ToolError>) -> CallToolResult {
    match call {
        Ok(call) => {
            tracing::debug!("Running tool {}", call.name());
            CallToolResult::success(vec![Content::text(call.execute())])
        }
        Err(err) => {
            tracing::warn!("Tool call rejected: {}", err);
            CallToolResult::error(vec![Content::text(err.to_string())])
        }
    }
}

pub(crate) fn unknown_tool(name: &str) -> CallToolResult {
    tracing::warn!("Unknown tool requested: {}", name);
    CallToolResult::error(vec![Content::text(
        ToolError::UnknownTool(name.to_string()).to_string(),
    )])
}

pub(crate) fn auto_optimize_prompt() -> Prompt {
    Prompt {
        name: AUTO_OPTIMIZE_PROMPT.to_string(),
        title: Some("Auto-optimize a prompt".to_string()),
        description: Some(
            "Rewrite a prompt with the automatic rule selection and return it as a message"
                .to_string(),
        ),
        arguments: Some(vec![PromptArgument {
            name: USER_PROMPT_ARG.to_string(),
            title: None,
            description: Some("The prompt to optimize".to_string()),
            required: Some(true),
        }]),
        icons: None,
    }
}

/// Body of the `auto_optimize` prompt for the given arguments.
pub(crate) fn render_auto_optimize(arguments: Option<&JsonObject>) -> GetPromptResult {
    let user_prompt = arguments
        .and_then(|args| args.get(USER_PROMPT_ARG))
        .and_then(|value| value.as_str())
        .filter(|prompt| !prompt.is_empty());

    let text = match user_prompt {
        Some(prompt) => {
            kensa::engineer(prompt, &RuleSet::default(), DEFAULT_TARGET_MODEL).engineered_prompt
        }
        None => {
            tracing::warn!("auto_optimize requested without '{}'", USER_PROMPT_ARG);
            MISSING_OPTIMIZE_PROMPT.to_string()
        }
    };

    GetPromptResult {
        description: Some("Auto-optimized prompt".to_string()),
        messages: vec![PromptMessage {
            role: PromptMessageRole::User,
            content: PromptMessageContent::text(text),
        }],
    }
}

pub(crate) fn optimization_guide() -> Resource {
    RawResource {
        uri: GUIDE_URI.to_string(),
        name: "Prompt Optimization Guide".to_string(),
        title: None,
        description: Some("Guide for prompt optimization techniques".to_string()),
        mime_type: Some(GUIDE_MIME_TYPE.to_string()),
        size: Some(OPTIMIZATION_GUIDE.len() as u32),
        icons: None,
    }
    .no_annotation()
}

pub(crate) fn read_guide(uri: &str) -> Result<ReadResourceResult, McpError> {
    if uri != GUIDE_URI {
        return Err(McpError::resource_not_found(
            format!("Resource not found: {}", uri),
            None,
        ));
    }
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: GUIDE_URI.to_string(),
            mime_type: Some(GUIDE_MIME_TYPE.to_string()),
            text: OPTIMIZATION_GUIDE.to_string(),
            meta: None,
        }],
    })
}

#[derive(Clone)]
pub struct KensaServer {
    tool_router: ToolRouter<Self>,
}

impl Default for KensaServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl KensaServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Full engine run with a Markdown report
    #[tool(
        description = "Validate and optimize a prompt. Returns: the optimized prompt, analysis summary, applied rules and recommendations. Required: prompt. Optional: rules (default [\"auto_optimize\"]), model (default \"general\")."
    )]
    async fn validate_prompt(
        &self,
        params: Parameters<ValidatePromptRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.0;
        Ok(run(ToolCall::validate(
            request.prompt,
            request.rules,
            request.model,
        )))
    }

    #[tool(
        description = "Analyze prompt quality without rewriting it. Returns: structure metrics, quality indicators and optimization opportunities. Required: prompt."
    )]
    async fn analyze_prompt_quality(
        &self,
        params: Parameters<AnalyzePromptRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(run(ToolCall::analyze(params.0.prompt)))
    }

    #[tool(
        description = "Get targeted suggestions for improving a prompt. Required: prompt. Optional: focus_area (clarity, structure, examples, reasoning, expertise, all; default all)."
    )]
    async fn get_optimization_suggestions(
        &self,
        params: Parameters<SuggestionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.0;
        Ok(run(ToolCall::suggest(request.prompt, request.focus_area)))
    }
}

impl ServerHandler for KensaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: self.tool_router.list_all(),
                next_cursor: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if !self.tool_router.has_route(&request.name) {
                return Ok(unknown_tool(&request.name));
            }
            let context = ToolCallContext::new(self, request, context);
            self.tool_router.call(context).await
        }
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListPromptsResult {
                prompts: vec![auto_optimize_prompt()],
                next_cursor: None,
            })
        }
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, McpError>> + Send + '_ {
        async move {
            match request.name.as_str() {
                AUTO_OPTIMIZE_PROMPT => Ok(render_auto_optimize(request.arguments.as_ref())),
                _ => Err(McpError::invalid_params(
                    format!("Unknown prompt: {}", request.name),
                    None,
                )),
            }
        }
    }
    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        async move {
            Ok(ListResourcesResult {
                resources: vec![optimization_guide()],
                next_cursor: None,
            })
        }
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move { read_guide(&request.uri) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| match &content.raw {
                RawContent::Text(text) => Some(text.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_validate_prompt_tool() {
        let server = KensaServer::new();
        let result = server
            .validate_prompt(Parameters(ValidatePromptRequest {
                prompt: Some("How do I implement a binary search?".into()),
                rules: None,
                model: Some("gpt-4".into()),
            }))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("# 🚀 AI Validation Results"));
        assert!(text.contains("expert_system, chain_of_thought, enhance_clarity"));
        assert!(text.contains("Optimized for: gpt-4"));
    }

    #[tokio::test]
    async fn test_missing_prompt_is_reported() {
        let server = KensaServer::new();
        let result = server
            .analyze_prompt_quality(Parameters(AnalyzePromptRequest::default()))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: No prompt provided");
    }

    #[tokio::test]
    async fn test_suggestions_focus() {
        let server = KensaServer::new();
        let result = server
            .get_optimization_suggestions(Parameters(SuggestionsRequest {
                prompt: Some("How do I debug this code?".into()),
                focus_area: Some("reasoning".into()),
            }))
            .await
            .unwrap();
        let text = text_of(&result);
        assert!(text.contains("## 🎯 Focus Area: Reasoning"));
        assert!(text.contains("1. **Reasoning**"));
        assert!(!text.contains("**Clarity**:"));
    }

    #[test]
    fn test_all_tools_routed() {
        let server = KensaServer::new();
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "analyze_prompt_quality",
                "get_optimization_suggestions",
                "validate_prompt"
            ]
        );
    }

    #[test]
    fn test_tool_schemas_require_prompt() {
        let server = KensaServer::new();
        for tool in server.tool_router.list_all() {
            let required = tool
                .input_schema
                .get("required")
                .and_then(|value| value.as_array())
                .unwrap_or_else(|| panic!("{} has no required list", tool.name));
            assert!(required.contains(&json!("prompt")), "{}", tool.name);
            assert!(!required.contains(&json!("model")), "{}", tool.name);
        }
    }

    #[test]
    fn test_absent_prompt_still_decodes() {
        let request: ValidatePromptRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.prompt.is_none());
        let request: SuggestionsRequest =
            serde_json::from_value(json!({"focus_area": "clarity"})).unwrap();
        assert!(request.prompt.is_none());
    }

    #[test]
    fn test_unknown_tool() {
        let result = unknown_tool("summon");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: Unknown tool 'summon'");
    }

    #[test]
    fn test_auto_optimize_prompt() {
        let args = json!({"user_prompt": "How do I implement a binary search?"});
        let result = render_auto_optimize(args.as_object());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, PromptMessageRole::User);

        let expected = kensa::engineer(
            "How do I implement a binary search?",
            &RuleSet::default(),
            "general",
        )
        .engineered_prompt;
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => assert_eq!(text, &expected),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_auto_optimize_without_argument() {
        for args in [None, Some(json!({})), Some(json!({"user_prompt": ""}))] {
            let result = render_auto_optimize(args.as_ref().and_then(|a| a.as_object()));
            match &result.messages[0].content {
                PromptMessageContent::Text { text } => {
                    assert_eq!(text, "Error: No prompt provided for optimization")
                }
                other => panic!("unexpected content: {:?}", other),
            }
        }
    }

    #[test]
    fn test_prompt_listing() {
        let prompt = auto_optimize_prompt();
        assert_eq!(prompt.name, "auto_optimize");
        let args = prompt.arguments.unwrap();
        assert_eq!(args[0].name, "user_prompt");
        assert_eq!(args[0].required, Some(true));
    }

    #[test]
    fn test_guide_resource_listing() {
        let resource = optimization_guide();
        assert_eq!(resource.raw.uri, "prompt://optimization/guide");
        assert_eq!(resource.raw.name, "Prompt Optimization Guide");
        assert_eq!(resource.raw.mime_type.as_deref(), Some("text/markdown"));
    }

    #[test]
    fn test_read_guide() {
        let result = read_guide(GUIDE_URI).unwrap();
        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri, text, .. } => {
                assert_eq!(uri, GUIDE_URI);
                assert_eq!(text, OPTIMIZATION_GUIDE);
            }
            other => panic!("unexpected contents: {:?}", other),
        }
    }

    #[test]
    fn test_read_unknown_resource() {
        let err = read_guide("prompt://optimization/secrets").unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("prompt://optimization/secrets"));
    }

    #[test]
    fn test_capabilities_advertise_resources() {
        let info = KensaServer::new().get_info();
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.tools.is_some());
    }
}
