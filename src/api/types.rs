//! Wire Contract Types
//!
//! Request and response shapes for the FundingSense REST API. These mirror
//! the backend schema exactly; the client renders whatever it receives and
//! never recomputes scores or confidence locally.

use serde::{Deserialize, Serialize};

/// Analysis submission, sent once per analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub startup_description: String,
    pub sector: String,
    pub funding_stage: String,
    pub geography: String,
    pub language: String,
}

/// Qualitative confidence label accompanying an analysis result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceIndicator {
    Low,
    Medium,
    High,
}

impl ConfidenceIndicator {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceIndicator::Low => "LOW",
            ConfidenceIndicator::Medium => "MEDIUM",
            ConfidenceIndicator::High => "HIGH",
        }
    }
}

/// Category of a cited source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[serde(alias = "News")]
    News,
    #[serde(alias = "Policy")]
    Policy,
    #[serde(alias = "Dataset", alias = "source", alias = "Source")]
    Dataset,
}

impl SourceType {
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::News => "News",
            SourceType::Policy => "Policy",
            SourceType::Dataset => "Dataset",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SourceType::News => "📰",
            SourceType::Policy => "📜",
            SourceType::Dataset => "🗄️",
        }
    }
}

/// Investor embedded in an analysis report. No identity beyond array index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestorRecommendation {
    pub name: String,
    pub fit_score: u8,
    #[serde(default)]
    pub logo_initials: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl InvestorRecommendation {
    /// Initials shown in the investor card, derived from the name when the
    /// backend sends none.
    pub fn initials(&self) -> String {
        if !self.logo_initials.is_empty() {
            return self.logo_initials.clone();
        }
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Source cited by an analysis, with the reason it was used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceUsed {
    pub source_type: SourceType,
    pub title: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub usage_reason: String,
}

/// Chunk from the backend's full indexed corpus (library tab). Distinct
/// from [`EvidenceUsed`]: library chunks carry indexed content rather than
/// a usage reason.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub source_type: SourceType,
    pub title: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Metadata block attached to every analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub language: String,
    pub engine_version: String,
    pub evidence_count: u32,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub geography: Option<String>,
}

/// Complete investor-fit report. Immutable once returned; the results page
/// keys on `analysis_id` and treats the record as write-once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis_id: String,
    pub startup_summary: String,
    pub confidence_indicator: ConfidenceIndicator,
    pub overall_score: u8,
    #[serde(default)]
    pub recommended_investors: Vec<InvestorRecommendation>,
    #[serde(default)]
    pub why_fits: Vec<String>,
    #[serde(default)]
    pub why_does_not_fit: Vec<String>,
    #[serde(default)]
    pub evidence_used: Vec<EvidenceUsed>,
    pub metadata: AnalysisMetadata,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate usage figures for the landing page strip.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatsResponse {
    pub total_analyses: u64,
    pub total_investors: u64,
    #[serde(default)]
    pub total_evidence: u64,
    /// Pre-formatted by the backend, e.g. "82%".
    pub avg_score: String,
}

/// Speaker in the chat transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Citation chip shown under an assistant message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSource {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source_name: String,
}

/// One turn of the transcript, as persisted server-side per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<ChatSource>,
}

/// Prior turn forwarded to the chat endpoint as context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Chat request. `chat_history` is capped by the caller to the last few
/// turns; see `state::chat::CHAT_HISTORY_TURNS`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub chat_history: Vec<ChatTurn>,
}

/// Assistant reply, delivered as one complete payload (no streaming).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<ChatSource>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_request_serializes_to_contract_body() {
        let request = AnalysisRequest {
            startup_description: "B2B agritech marketplace".to_string(),
            sector: "Agritech".to_string(),
            funding_stage: "Seed".to_string(),
            geography: "India".to_string(),
            language: "en".to_string(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "startup_description": "B2B agritech marketplace",
                "sector": "Agritech",
                "funding_stage": "Seed",
                "geography": "India",
                "language": "en",
            })
        );
    }

    #[test]
    fn test_analysis_response_parses_full_record() {
        let raw = serde_json::json!({
            "analysis_id": "a-123",
            "startup_summary": "An agritech marketplace.",
            "confidence_indicator": "high",
            "overall_score": 84,
            "recommended_investors": [{
                "name": "Vertex Ventures",
                "fit_score": 92,
                "logo_initials": "VV",
                "focus_areas": ["Agritech", "B2B"],
                "reasons": ["Portfolio overlap"]
            }],
            "why_fits": ["Sector thesis match"],
            "why_does_not_fit": [],
            "evidence_used": [{
                "source_type": "news",
                "title": "Agritech funding up 40%",
                "source_name": "ET",
                "year": "2024",
                "url": "https://example.com",
                "usage_reason": "Market momentum"
            }],
            "metadata": {
                "language": "en",
                "engine_version": "2.0",
                "evidence_count": 1,
                "sector": "Agritech"
            }
        });

        let parsed: AnalysisResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.analysis_id, "a-123");
        assert_eq!(parsed.confidence_indicator, ConfidenceIndicator::High);
        assert_eq!(parsed.overall_score, 84);
        assert_eq!(parsed.recommended_investors[0].fit_score, 92);
        assert_eq!(parsed.evidence_used[0].source_type, SourceType::News);
        assert_eq!(parsed.metadata.stage, None);
        assert_eq!(parsed.created_at, None);
    }

    #[test]
    fn test_source_type_accepts_capitalized_variants() {
        // The library corpus predates source-type normalization and still
        // carries capitalized labels.
        let news: SourceType = serde_json::from_str("\"News\"").unwrap();
        let dataset: SourceType = serde_json::from_str("\"source\"").unwrap();
        assert_eq!(news, SourceType::News);
        assert_eq!(dataset, SourceType::Dataset);
    }

    #[test]
    fn test_chat_request_omits_empty_context() {
        let request = ChatRequest {
            message: "Which VCs fit my sector?".to_string(),
            analysis_id: None,
            language: "en".to_string(),
            user_id: None,
            chat_history: vec![],
        };

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("analysis_id").is_none());
        assert!(body.get("user_id").is_none());
        assert_eq!(body["chat_history"], serde_json::json!([]));
    }

    #[test]
    fn test_investor_initials_fall_back_to_name() {
        let investor = InvestorRecommendation {
            name: "Blume Ventures".to_string(),
            fit_score: 70,
            logo_initials: String::new(),
            focus_areas: vec![],
            reasons: vec![],
        };
        assert_eq!(investor.initials(), "BL");

        let with_logo = InvestorRecommendation {
            logo_initials: "BV".to_string(),
            ..investor
        };
        assert_eq!(with_logo.initials(), "BV");
    }
}
