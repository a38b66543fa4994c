//! Localization
//!
//! UI language metadata, chrome strings, and the trigger contract for the
//! externally injected full-page translation engine. The string table
//! carries English and Hindi; the remaining codes fall back to English and
//! rely on the translation engine for full-page coverage.

use wasm_bindgen::JsCast;

/// Supported UI/report languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Bengali,
    Tamil,
    Telugu,
    Marathi,
    Gujarati,
    Kannada,
}

/// All supported languages, in display order.
pub const LANGUAGES: [Language; 8] = [
    Language::English,
    Language::Hindi,
    Language::Bengali,
    Language::Tamil,
    Language::Telugu,
    Language::Marathi,
    Language::Gujarati,
    Language::Kannada,
];

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// ISO 639-1 code, also what the translation widget and the API expect.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Bengali => "bn",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
            Language::Kannada => "kn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGES.iter().copied().find(|l| l.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Kannada => "Kannada",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Bengali => "বাংলা",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Marathi => "मराठी",
            Language::Gujarati => "ગુજરાતી",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            _ => "🇮🇳",
        }
    }
}

/// Look up a chrome string for the given language. Unknown keys and
/// untranslated languages fall back to English, then to the key itself.
pub fn t(language: Language, key: &'static str) -> &'static str {
    match language {
        Language::Hindi => hindi(key),
        _ => english(key),
    }
}

fn english(key: &'static str) -> &'static str {
    match key {
        "dashboard" => "Dashboard",
        "analyze" => "Analyze",
        "evidence" => "Evidence",
        "q_and_a" => "Q&A Assistant",
        "chat_with_ai" => "Grounded funding chat",
        "language_settings" => "Language Settings",
        "logout" => "Log out",
        "toggle_theme" => "Toggle theme",
        "type_message" => "Ask about your venture, market, or funding...",
        "select_context" => "Select analysis context",
        "no_startups_yet" => "No analyses yet",
        "keep_dreaming" => "Run an analysis to ground the chat.",
        "report_title" => "Investor Fit Report",
        "report_desc" => "Evidence-backed analysis for your startup",
        "analysis_completed" => "Analysis completed",
        "fit_score" => "Fit Score",
        "confidence" => "Confidence",
        "recommended_investors" => "Recommended Investors",
        "match" => "Match",
        "key_reasons" => "Key reasons",
        "why_fits" => "Why it fits",
        "considerations" => "Considerations",
        "no_risks_found" => "No significant risks or misalignments identified.",
        "sources_used" => "sources used",
        "used_for" => "Used for",
        "run_new" => "Run New Analysis",
        "view_evidence" => "View All Evidence",
        "search_sources" => "Search titles, sources, reasons...",
        "all_types" => "All types",
        "total_sources" => "sources",
        "interface_lang" => "Interface Language",
        "interface_desc" => "Pick the language FundingSense speaks to you in",
        "report_lang" => "Report Language",
        "report_lang_desc" => "Analysis reports are generated in this language.",
        "save_prefs" => "Save Preferences",
        "prefs_saved" => "Language preferences saved",
        other => other,
    }
}

fn hindi(key: &'static str) -> &'static str {
    match key {
        "dashboard" => "डैशबोर्ड",
        "analyze" => "विश्लेषण",
        "evidence" => "साक्ष्य",
        "q_and_a" => "प्रश्नोत्तर सहायक",
        "chat_with_ai" => "फंडिंग चैट",
        "language_settings" => "भाषा सेटिंग्स",
        "logout" => "लॉग आउट",
        "toggle_theme" => "थीम बदलें",
        "type_message" => "अपने स्टार्टअप, बाज़ार या फंडिंग के बारे में पूछें...",
        "select_context" => "विश्लेषण संदर्भ चुनें",
        "report_title" => "निवेशक फिट रिपोर्ट",
        "report_desc" => "आपके स्टार्टअप के लिए साक्ष्य-आधारित विश्लेषण",
        "fit_score" => "फिट स्कोर",
        "confidence" => "विश्वास",
        "recommended_investors" => "अनुशंसित निवेशक",
        "why_fits" => "यह क्यों उपयुक्त है",
        "considerations" => "विचारणीय बिंदु",
        "run_new" => "नया विश्लेषण करें",
        "view_evidence" => "सभी साक्ष्य देखें",
        "save_prefs" => "प्राथमिकताएँ सहेजें",
        "interface_lang" => "इंटरफ़ेस भाषा",
        "report_lang" => "रिपोर्ट भाषा",
        other => english(other),
    }
}

const LANGUAGE_KEY: &str = "fundingsense_language";
const REPORT_LANGUAGE_KEY: &str = "fundingsense_report_language";

fn save_code(key: &str, language: Language) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, language.code());
        }
    }
}

fn load_code(key: &str) -> Language {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist the UI language preference across visits.
pub fn save_language(language: Language) {
    save_code(LANGUAGE_KEY, language);
}

/// Saved UI language preference, defaulting to English.
pub fn load_saved_language() -> Language {
    load_code(LANGUAGE_KEY)
}

/// Persist the report language preference across visits.
pub fn save_report_language(language: Language) {
    save_code(REPORT_LANGUAGE_KEY, language);
}

/// Saved report language preference, defaulting to English.
pub fn load_saved_report_language() -> Language {
    load_code(REPORT_LANGUAGE_KEY)
}

/// Poke the externally injected translation widget: find its select
/// control, set the language code, and dispatch a change event so it
/// re-translates the page. Fire-and-forget; a missing widget is logged
/// and never surfaced to the user.
pub fn trigger_page_translation(code: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let combo = match document.query_selector(".goog-te-combo") {
        Ok(Some(element)) => element,
        _ => {
            web_sys::console::warn_1(&"Translation widget not loaded yet".into());
            return;
        }
    };

    let Ok(select) = combo.dyn_into::<web_sys::HtmlSelectElement>() else {
        web_sys::console::warn_1(&"Translation widget control is not a select".into());
        return;
    };

    select.set_value(code);
    match web_sys::Event::new("change") {
        Ok(event) => {
            let _ = select.dispatch_event(&event);
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Translation trigger failed: {:?}", e).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_metadata() {
        for lang in LANGUAGES {
            assert!(!lang.code().is_empty());
            assert!(!lang.label().is_empty());
            assert!(!lang.native_name().is_empty());
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn test_untranslated_language_falls_back_to_english() {
        assert_eq!(t(Language::Tamil, "dashboard"), "Dashboard");
        assert_eq!(t(Language::Hindi, "dashboard"), "डैशबोर्ड");
        // A key missing from the Hindi table falls through to English.
        assert_eq!(t(Language::Hindi, "analysis_completed"), "Analysis completed");
    }

    #[test]
    fn test_unknown_key_echoes_back() {
        assert_eq!(t(Language::English, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_every_view_chrome_key_has_an_entry() {
        // Keys the pages and layout actually look up. A key falling out
        // of the table would silently render as its raw identifier.
        let keys = [
            "dashboard",
            "analyze",
            "evidence",
            "q_and_a",
            "chat_with_ai",
            "language_settings",
            "logout",
            "toggle_theme",
            "type_message",
            "select_context",
            "no_startups_yet",
            "keep_dreaming",
            "report_title",
            "report_desc",
            "analysis_completed",
            "fit_score",
            "confidence",
            "recommended_investors",
            "match",
            "key_reasons",
            "why_fits",
            "considerations",
            "no_risks_found",
            "sources_used",
            "used_for",
            "run_new",
            "view_evidence",
            "search_sources",
            "all_types",
            "total_sources",
            "interface_lang",
            "interface_desc",
            "report_lang",
            "report_lang_desc",
            "save_prefs",
            "prefs_saved",
        ];
        for key in keys {
            assert_ne!(t(Language::English, key), key, "no entry for {}", key);
        }
    }
}
