//! Page and table fixtures

use folio::config::Settings;
use folio::dom::{Document, Element, MemoryDocument, NodeId};
use folio::{LocalizationController, MemoryStore, PageHost, TranslationSource, TranslationTable};

pub const TABLE_JSON: &str = r#"{
    "en": {
        "nav": { "about": "About", "contact": "Contact" },
        "hero": {
            "title": "Welcome to my portfolio",
            "roles": ["Backend Developer", "Problem Solver"]
        },
        "contact": {
            "form": {
                "name": "Your Name",
                "email": "Your Email",
                "subject": "Subject",
                "message": "Your Message",
                "send": "Send Message"
            }
        }
    },
    "vi": {
        "nav": { "about": "Giới thiệu", "contact": "Liên hệ" },
        "hero": {
            "title": "Chào mừng đến với portfolio của tôi",
            "roles": ["Lập trình viên Backend", "Người giải quyết vấn đề"]
        },
        "contact": {
            "form": {
                "name": "Tên của bạn",
                "email": "Email của bạn",
                "subject": "Chủ đề",
                "message": "Tin nhắn của bạn",
                "send": "Gửi tin nhắn"
            }
        }
    }
}"#;

pub const SUBMIT_HTML: &str = r#"<i class="fas fa-paper-plane"></i> Send"#;

pub fn sample_table() -> TranslationTable {
    TranslationTable::from_json(TABLE_JSON).expect("fixture table parses")
}

pub fn inline_source() -> TranslationSource {
    TranslationSource::Inline(TABLE_JSON.to_string())
}

/// Handles to the interesting elements of [`portfolio_page`]
#[derive(Debug, Clone, Copy)]
pub struct PageNodes {
    pub title: NodeId,
    pub about: NodeId,
    pub missing: NodeId,
    pub typing: NodeId,
    pub lang_en: NodeId,
    pub lang_vi: NodeId,
    pub form_name: NodeId,
    pub form_message: NodeId,
    pub submit: NodeId,
    pub loading_screen: NodeId,
    pub percentage: NodeId,
}

/// A small portfolio page: nav, hero with typing text, contact form, loader overlay
pub fn portfolio_page(with_missing_key: bool) -> (MemoryDocument, PageNodes) {
    let mut doc = MemoryDocument::new();
    let body = doc.root();

    let loading_screen = doc.append(body, Element::new("div").id("loading-screen"));
    let percentage = doc.append(loading_screen, Element::new("span").class("loader-percentage").text("0%"));

    let nav = doc.append(body, Element::new("nav"));
    let about = doc.append(nav, Element::new("a").attr("data-lang-key", "nav.about").text("About"));
    let lang_en = doc.append(nav, Element::new("button").id("lang-en").text("EN"));
    let lang_vi = doc.append(nav, Element::new("button").id("lang-vi").text("VI"));

    let hero = doc.append(body, Element::new("section").id("hero"));
    let title = doc.append(hero, Element::new("h1").attr("data-lang-key", "hero.title").text("Welcome"));
    let typing = doc.append(hero, Element::new("span").class("typing-text"));
    let missing = if with_missing_key {
        doc.append(hero, Element::new("p").attr("data-lang-key", "missing.path").text("Original text"))
    } else {
        doc.append(hero, Element::new("p").text("Static text"))
    };

    let form = doc.append(body, Element::new("form").id("contact-form"));
    let form_name = doc.append(form, Element::new("input").attr("name", "name").attr("type", "text"));
    doc.append(form, Element::new("input").attr("name", "email").attr("type", "email"));
    doc.append(form, Element::new("input").attr("name", "subject").attr("type", "text"));
    let form_message = doc.append(form, Element::new("textarea").attr("name", "message"));
    let submit = doc.append(form, Element::new("button").attr("type", "submit").html(SUBMIT_HTML));

    let nodes = PageNodes {
        title,
        about,
        missing,
        typing,
        lang_en,
        lang_vi,
        form_name,
        form_message,
        submit,
        loading_screen,
        percentage,
    };
    (doc, nodes)
}

pub fn controller_with(
    store: MemoryStore,
    with_missing_key: bool,
) -> (LocalizationController<MemoryDocument, MemoryStore>, PageNodes) {
    let settings = Settings::default();
    let (doc, nodes) = portfolio_page(with_missing_key);
    let controller = LocalizationController::new(&settings.i18n, &settings.page, &settings.typing, doc, store);
    (controller, nodes)
}

pub fn stored_language(store: &MemoryStore) -> Option<String> {
    use folio::PreferenceStore;
    store.get("preferredLanguage").expect("memory store never fails")
}

/// Host that counts reload requests
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub reloads: usize,
}

impl PageHost for RecordingHost {
    fn reload(&mut self) {
        self.reloads += 1;
    }
}
